use colored::Colorize;
use maze_graph::maze::{generate_maze, render_maze};
use maze_graph::{BreadthFirstSearch, PathOutcome};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() {
    let mut rng = StdRng::seed_from_u64(2024);
    let maze = generate_maze(8, 20, &mut rng).unwrap();

    let outcome = maze.solve(&BreadthFirstSearch::new()).unwrap();
    let drawing = render_maze(&maze, outcome.path());

    println!("{}", "--- Solving a 20x8 room maze ---".bold());
    for line in drawing.lines() {
        let row: String = line
            .chars()
            .map(|c| match c {
                '#' => "█".dimmed().to_string(),
                '*' => "•".yellow().bold().to_string(),
                'S' => "S".green().bold().to_string(),
                'E' => "E".red().bold().to_string(),
                other => other.to_string(),
            })
            .collect();
        println!("{}", row);
    }

    match outcome {
        PathOutcome::Found(path) => println!(
            "\n{} {} steps from {} to {}",
            "Path found:".green(),
            path.edge_count(),
            maze.start(),
            maze.end()
        ),
        PathOutcome::NotPresent(cell) => println!("{} {}", "Missing cell:".red(), cell),
        PathOutcome::NoPath => println!("{}", "No path".red()),
    }
}
