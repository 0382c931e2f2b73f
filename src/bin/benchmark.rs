use std::time::{Duration, Instant};
use rand::rngs::StdRng;
use rand::SeedableRng;
use maze_graph::algorithm::{BreadthFirstSearch, PathFinder};
use maze_graph::graph::{AdjacencyGraph, Graph, GridCell};
use maze_graph::maze::{generate_maze, open_grid, Maze};

// Builds the graph and times one start-to-end search
fn benchmark_maze(name: &str, maze: &Maze) -> (Duration, Duration) {
    let start = Instant::now();
    let graph: AdjacencyGraph<GridCell> = maze.to_graph(None).unwrap();
    let build_time = start.elapsed();

    println!("Running {} on {} vertices / {} edges...", name, graph.vertex_count(), graph.edge_count());

    let bfs = BreadthFirstSearch::new();
    let start = Instant::now();
    let outcome = bfs.find_path(&graph, maze.start(), maze.end()).unwrap();
    let search_time = start.elapsed();

    match outcome.path() {
        Some(path) => println!("  - Path of {} steps in {:?}", path.edge_count(), search_time),
        None => println!("  - No path ({:?})", search_time),
    }

    (build_time, search_time)
}

fn main() {
    env_logger::init();

    // Rooms per side for the carved mazes
    let sizes = vec![
        16,
        64,
        256,
        512,
    ];

    println!("=====================================================");
    println!("Benchmark: BreadthFirstSearch on generated mazes");
    println!("=====================================================");

    let mut rng = StdRng::seed_from_u64(42);
    let mut results = Vec::new();

    for &size in &sizes {
        println!("\nGenerating {}x{} room maze...", size, size);
        let carved = generate_maze(size, size, &mut rng).unwrap();
        let (carved_build, carved_search) = benchmark_maze("carved maze", &carved);

        let side = 2 * size + 1;
        let open = open_grid(side, side).unwrap();
        let (open_build, open_search) = benchmark_maze("open grid", &open);

        results.push((size, carved_build, carved_search, open_build, open_search));
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<15} | {:<15} | {:<15} | {:<15}",
             "Rooms", "Carved build", "Carved BFS", "Open build", "Open BFS");
    println!("-----------------------------------------------------");

    for (size, carved_build, carved_search, open_build, open_search) in &results {
        println!("{:<10} | {:<15.2} | {:<15.2} | {:<15.2} | {:<15.2}",
                 size,
                 carved_build.as_secs_f64() * 1000.0,
                 carved_search.as_secs_f64() * 1000.0,
                 open_build.as_secs_f64() * 1000.0,
                 open_search.as_secs_f64() * 1000.0);
    }
}
