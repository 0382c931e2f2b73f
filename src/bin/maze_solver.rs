use maze_graph::config::SolverConfig;
use maze_graph::maze::{generate_maze, render_maze, SolveReport};
use maze_graph::{AdjacencyGraph, BreadthFirstSearch, GridCell, Maze, PathFinder, PathOutcome};
use rand::rngs::StdRng;
use rand::SeedableRng;
use clap::Parser;
use std::process;

fn run(config: &SolverConfig) -> Result<(), Box<dyn std::error::Error>> {
    let maze = match config.generate {
        Some((wide, high)) => {
            let mut rng = match config.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            generate_maze(high, wide, &mut rng)?
        }
        None => match &config.maze_file {
            Some(path) => Maze::load(path)?,
            None => return Err("no maze given".into()),
        },
    };

    let graph = maze.to_graph(config.slot_limit)?;
    let bfs = BreadthFirstSearch::new();
    let outcome = match bfs.find_path(&graph, maze.start(), maze.end())? {
        PathOutcome::Found(path) => PathOutcome::Found(path.into_order(config.order())),
        other => other,
    };

    if config.json {
        let name = <BreadthFirstSearch as PathFinder<GridCell, AdjacencyGraph<GridCell>>>::name(&bfs);
        let report = SolveReport::new(name, &maze, &outcome);
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print!("{}", render_maze(&maze, outcome.path()));
    match &outcome {
        PathOutcome::Found(path) => {
            println!("Path: {} steps", path.edge_count());
            let cells: Vec<String> = path.vertices().iter().map(|cell| cell.to_string()).collect();
            println!("{}", cells.join(" -> "));
        }
        PathOutcome::NotPresent(cell) => println!("Cell {} is not part of the maze", cell),
        PathOutcome::NoPath => println!("No path from {} to {}", maze.start(), maze.end()),
    }

    Ok(())
}

fn main() {
    // Initialize logging
    env_logger::init();

    let config = SolverConfig::parse();

    if let Err(e) = run(&config) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
