use criterion::{
    criterion_group,
    criterion_main,
    BenchmarkGroup,
    Criterion,
    SamplingMode
};
use criterion::measurement::WallTime;

use sudoku_inference::Board;
use sudoku_inference::solver::{BacktrackingSolver, Solution, Solver};
use sudoku_inference::solver::strategy::{
    FirstAvailable,
    MinimumRemainingValues,
    VariableSelector
};

use serde::Deserialize;

use std::fs;
use std::time::Duration;

// Explanation of benchmark groups:
//
// first available: A BacktrackingSolver which branches on the first open
//                  cell in reading order.
// minimum remaining values: A BacktrackingSolver which branches on a most
//                           constrained open cell.
//
// Each group solves the same two puzzle sets. "easy" holds boards with many
// clues, which propagation mostly resolves on its own, so the runtimes of
// the two heuristics stay close. "hard" holds boards with few clues, where
// the branching choice dominates the runtime.

const MEASUREMENT_TIME_SECS: u64 = 30;
const EASY_SAMPLE_SIZE: usize = 100;
const HARD_SAMPLE_SIZE: usize = 50;

const BENCHDATA_DIR: &'static str = "benchdata/";
const TASK_FILE_EXT: &'static str = ".json";

#[derive(Deserialize)]
struct Task {
    puzzle: Board,
    solution: Option<Board>
}

#[derive(Deserialize)]
struct Tasks {
    tasks: Vec<Task>
}

fn solve_task(task: &Task, solver: &impl Solver) {
    match solver.solve(&task.puzzle) {
        Solution::Solved(grid) => {
            if let Some(expected) = &task.solution {
                assert_eq!(expected, &grid);
            }
            else {
                assert!(grid.is_solved());
                assert!(grid.is_valid());
            }
        },
        Solution::Unsolvable => panic!("benchmark puzzle is unsolvable")
    }
}

fn solve_tasks(tasks: &[Task], solver: &impl Solver) {
    for task in tasks {
        solve_task(task, solver);
    }
}

fn benchmark_puzzle_set(group: &mut BenchmarkGroup<WallTime>, id: &str,
        sample_size: usize, solver: &impl Solver) {
    let mut file = String::from(BENCHDATA_DIR);
    file.push_str(id);
    file.push_str(TASK_FILE_EXT);
    let json = fs::read_to_string(file).unwrap();
    let tasks: Tasks = serde_json::from_str(&json).unwrap();

    group.measurement_time(Duration::from_secs(MEASUREMENT_TIME_SECS));
    group.sample_size(sample_size);
    group.sampling_mode(SamplingMode::Flat);
    group.bench_function(id,
        |b| b.iter(|| solve_tasks(&tasks.tasks, solver)));
}

fn benchmark_heuristic(c: &mut Criterion, group_name: &str,
        strategy: impl VariableSelector) {
    let solver = BacktrackingSolver::new(strategy);
    let mut group = c.benchmark_group(group_name);

    benchmark_puzzle_set(&mut group, "easy", EASY_SAMPLE_SIZE, &solver);
    benchmark_puzzle_set(&mut group, "hard", HARD_SAMPLE_SIZE, &solver);
}

fn benchmark_first_available(c: &mut Criterion) {
    benchmark_heuristic(c, "first available", FirstAvailable)
}

fn benchmark_minimum_remaining_values(c: &mut Criterion) {
    benchmark_heuristic(c, "minimum remaining values", MinimumRemainingValues)
}

criterion_group!(all,
    benchmark_first_available,
    benchmark_minimum_remaining_values
);

criterion_main!(all);
