//! Schedules: ordered slots of ordered task placements.

mod cost;
mod feasibility;


pub use cost::max_mean_completion;
pub use feasibility::is_feasible;

use crate::problem::Problem;

/// Reference to one task of one agent, packed as two 32-bit indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskRef {
    pub agent: u32,
    pub task: u32,
}

impl TaskRef {
    pub fn new(agent: u32, task: u32) -> Self {
        Self { agent, task }
    }
}

/// Assignment of tasks to capacitated time slots.
///
/// Each slot holds an ordered sequence of [`TaskRef`] entries. Intra-slot
/// order matters: a dependency may share its successor's slot only if it
/// sits at an earlier position within that slot. Placement positions are
/// therefore compared lexicographically by `(slot, position)`.
///
/// Schedules are cheap to clone; the search drivers copy the incumbent on
/// every iteration and either keep or drop the mutated candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    slots: Vec<Vec<TaskRef>>,
}

impl Schedule {
    /// Creates an empty schedule spanning `num_slots` slots.
    pub fn with_slots(num_slots: usize) -> Self {
        Self {
            slots: vec![Vec::new(); num_slots],
        }
    }

    #[cfg(any(test, feature = "serde"))]
    pub(crate) fn from_slots(slots: Vec<Vec<TaskRef>>) -> Self {
        Self { slots }
    }

    pub fn num_slots(&self) -> usize {
        self.slots.len()
    }

    /// True when no slot holds any entry.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Vec::is_empty)
    }

    /// Total number of placed entries.
    pub fn num_scheduled(&self) -> usize {
        self.slots.iter().map(Vec::len).sum()
    }

    /// Entries of `slot` in intra-slot order. Panics if out of range.
    pub fn slot(&self, slot: usize) -> &[TaskRef] {
        &self.slots[slot]
    }

    /// Slots in slot order.
    pub fn slots(&self) -> impl Iterator<Item = &[TaskRef]> + '_ {
        self.slots.iter().map(Vec::as_slice)
    }

    /// All placements as `(slot, entry)` pairs in lexicographic order.
    pub fn assignments(&self) -> impl Iterator<Item = (usize, TaskRef)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .flat_map(|(slot, entries)| entries.iter().map(move |&e| (slot, e)))
    }

    pub(crate) fn push(&mut self, slot: usize, entry: TaskRef) {
        self.slots[slot].push(entry);
    }

    pub(crate) fn slots_mut(&mut self) -> &mut Vec<Vec<TaskRef>> {
        &mut self.slots
    }

    /// Counts tasks of `problem` that appear nowhere in this schedule.
    pub fn unplaced(&self, problem: &Problem) -> usize {
        let mut placed: Vec<Vec<bool>> = problem
            .dags()
            .iter()
            .map(|dag| vec![false; dag.len()])
            .collect();
        for (_, entry) in self.assignments() {
            if let Some(flag) = placed
                .get_mut(entry.agent as usize)
                .and_then(|agent| agent.get_mut(entry.task as usize))
            {
                *flag = true;
            }
        }
        placed.iter().flatten().filter(|seen| !**seen).count()
    }

    /// True when every task of `problem` appears somewhere in this schedule.
    pub fn covers(&self, problem: &Problem) -> bool {
        self.unplaced(problem) == 0
    }
}

// =============================================================================
// Serde support
// =============================================================================

#[cfg(feature = "serde")]
mod serde_impl {
    use super::{Schedule, TaskRef};
    use serde::de::{self, SeqAccess, Visitor};
    use serde::ser::SerializeSeq;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    /// A task reference serializes as an `[agent, task]` pair.
    impl Serialize for TaskRef {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            let mut seq = serializer.serialize_seq(Some(2))?;
            seq.serialize_element(&self.agent)?;
            seq.serialize_element(&self.task)?;
            seq.end()
        }
    }

    impl<'de> Deserialize<'de> for TaskRef {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            struct PairVisitor;

            impl<'de> Visitor<'de> for PairVisitor {
                type Value = TaskRef;

                fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                    formatter.write_str("an [agent, task] index pair")
                }

                fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
                where
                    A: SeqAccess<'de>,
                {
                    let agent = seq
                        .next_element()?
                        .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                    let task = seq
                        .next_element()?
                        .ok_or_else(|| de::Error::invalid_length(1, &self))?;
                    if seq.next_element::<de::IgnoredAny>()?.is_some() {
                        return Err(de::Error::invalid_length(3, &self));
                    }
                    Ok(TaskRef { agent, task })
                }
            }

            deserializer.deserialize_seq(PairVisitor)
        }
    }

    /// A schedule serializes as a sequence of slots, each a sequence of
    /// task references.
    impl Serialize for Schedule {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            let mut seq = serializer.serialize_seq(Some(self.slots.len()))?;
            for slot in &self.slots {
                seq.serialize_element(slot)?;
            }
            seq.end()
        }
    }

    impl<'de> Deserialize<'de> for Schedule {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let slots = Vec::<Vec<TaskRef>>::deserialize(deserializer)?;
            Ok(Schedule::from_slots(slots))
        }
    }
}
