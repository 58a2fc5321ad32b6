//! End-to-end tour of the scheduling engine.
//!
//! Builds a ten-slot, seven-agent instance, then compares the greedy
//! constructor against both refinement drivers.
//!
//! Run with: `cargo run --example solver_usage`

use slotsched::{
    max_mean_completion, Greedy, LocalSearch, Problem, Schedule, SearchParams, SimulatedAnnealing,
    Solver,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let resources = vec![4, 5, 2, 7, 3, 10, 7, 8, 5, 10];
    let agent_tasks = vec![
        vec![5, 2, 1, 1, 1, 1, 2, 1],
        vec![1, 1],
        vec![2, 3, 1],
        vec![3, 1, 1],
        vec![1, 1, 1, 1, 1, 1],
        vec![2, 2],
        vec![2, 1, 3, 1, 1, 1],
    ];
    let dependencies = vec![
        vec![
            vec![],
            vec![0],
            vec![0],
            vec![1],
            vec![],
            vec![0, 1, 2],
            vec![5],
            vec![],
        ],
        vec![vec![], vec![]],
        vec![vec![], vec![0], vec![1]],
        vec![vec![], vec![0], vec![1]],
        vec![vec![], vec![0], vec![1], vec![2], vec![3], vec![4]],
        vec![vec![], vec![0]],
        vec![vec![], vec![], vec![0, 1], vec![], vec![], vec![2, 3, 4]],
    ];

    let problem = Problem::new(resources, agent_tasks, dependencies)?;
    println!(
        "Instance: {} agents, {} tasks, {} slots\n",
        problem.num_agents(),
        problem.total_tasks(),
        problem.num_slots()
    );

    let params = SearchParams {
        max_iter: 100_000,
        candidate_moves: 500,
        ..SearchParams::default()
    }
    .with_seed(515125);

    let greedy = Greedy.solve(&problem)?;
    report("Greedy", &greedy, &problem);

    let refined = LocalSearch::new(params.clone()).solve(&problem)?;
    report("Local search", &refined, &problem);

    let annealed = SimulatedAnnealing::new(params).solve(&problem)?;
    report("Simulated annealing", &annealed, &problem);

    Ok(())
}

fn report(method: &str, schedule: &Schedule, problem: &Problem) {
    println!(
        "--- {} (cost {:.4}) ---",
        method,
        max_mean_completion(schedule, problem.num_agents())
    );
    for (slot, entries) in schedule.slots().enumerate() {
        let load: u32 = entries.iter().map(|&e| problem.size_of(e)).sum();
        let rendered: Vec<String> = entries
            .iter()
            .map(|e| format!("{}:{}", e.agent, e.task))
            .collect();
        println!(
            "slot {:>2} [{}/{}] {}",
            slot,
            load,
            problem.capacity(slot),
            rendered.join(" ")
        );
    }
    println!();
}
