use maze_graph::algorithm::{BreadthFirstSearch, PathOutcome};
use maze_graph::graph::{Graph, GridCell};
use maze_graph::maze::{generate_maze, open_grid, parse_maze, render_maze, Maze, SolveReport};
use maze_graph::Error;
use rand::rngs::StdRng;
use rand::SeedableRng;

const CORRIDOR: &str = ".##\n...\n##.\n";

#[test]
fn test_parse_corridor_maze() {
    let maze = parse_maze(CORRIDOR).unwrap();
    assert_eq!(maze.width(), 3);
    assert_eq!(maze.height(), 3);
    assert_eq!(maze.start(), GridCell::new(0, 0), "first open cell is the default start");
    assert_eq!(maze.end(), GridCell::new(2, 2), "last open cell is the default end");
    assert!(maze.is_open(GridCell::new(1, 1)));
    assert!(!maze.is_open(GridCell::new(0, 1)));
    assert!(!maze.is_open(GridCell::new(5, 5)));
    assert_eq!(maze.open_cells().count(), 5);
}

#[test]
fn test_corridor_maze_solves_in_four_steps() {
    let maze: Maze = CORRIDOR.parse().unwrap();
    let outcome = maze.solve(&BreadthFirstSearch::new()).unwrap();
    let path = outcome.into_path().expect("corridor is connected");

    let expected = [(0, 0), (1, 0), (1, 1), (1, 2), (2, 2)].map(|(row, col)| GridCell::new(row, col));
    assert_eq!(path.vertices(), &expected);
    assert_eq!(path.edge_count(), 4);
}

#[test]
fn test_explicit_start_and_end_markers() {
    let maze = parse_maze("#S#\n. .\n#E#\n").unwrap();
    assert_eq!(maze.start(), GridCell::new(0, 1));
    assert_eq!(maze.end(), GridCell::new(2, 1));

    let path = maze.solve(&BreadthFirstSearch::new()).unwrap().into_path().unwrap();
    assert_eq!(path.edge_count(), 2);
}

#[test]
fn test_walled_off_end_has_no_path() {
    let maze = parse_maze("S.#\n###\n#.E\n").unwrap();
    let outcome = maze.solve(&BreadthFirstSearch::new()).unwrap();
    assert_eq!(outcome, PathOutcome::NoPath);
}

#[test]
fn test_isolated_start_is_still_a_vertex() {
    let maze = parse_maze("S#\n#E\n").unwrap();
    let graph = maze.to_graph(None).unwrap();
    assert_eq!(graph.vertex_count(), 2);
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(maze.solve(&BreadthFirstSearch::new()).unwrap(), PathOutcome::NoPath);
}

#[test]
fn test_malformed_mazes_are_rejected() {
    let cases = [
        ("", 1),
        ("\n\n", 1),
        ("...\n..\n", 2),
        ("..x\n", 1),
        ("S.S\n", 1),
        ("E.\n.E\n", 2),
        ("###\n###\n", 1),
    ];
    for (text, expected_line) in cases {
        match parse_maze(text) {
            Err(Error::MazeFormat { line, .. }) => assert_eq!(line, expected_line, "{:?}", text),
            other => panic!("{:?} should be rejected, got {:?}", text, other),
        }
    }
}

#[test]
fn test_windows_line_endings_and_trailing_blank_lines() {
    let maze = parse_maze("S.\r\n.E\r\n\r\n").unwrap();
    assert_eq!(maze.width(), 2);
    assert_eq!(maze.height(), 2);
}

#[test]
fn test_render_marks_path() {
    let maze = parse_maze(CORRIDOR).unwrap();
    let outcome = maze.solve(&BreadthFirstSearch::new()).unwrap();
    let drawing = render_maze(&maze, outcome.path());
    assert_eq!(drawing, "S##\n***\n##E\n");

    let bare = render_maze(&maze, None);
    assert_eq!(bare, "S##\n   \n##E\n");
}

#[test]
fn test_bounded_graph_too_small_for_maze() {
    let maze = parse_maze(CORRIDOR).unwrap();
    assert!(matches!(maze.to_graph(Some(4)), Err(Error::GraphFull { capacity: 4 })));
    assert_eq!(maze.to_graph(Some(5)).unwrap().vertex_count(), 5);
}

#[test]
fn test_generated_maze_is_perfect() {
    let mut rng = StdRng::seed_from_u64(17);
    let maze = generate_maze(6, 9, &mut rng).unwrap();
    assert_eq!(maze.height(), 13);
    assert_eq!(maze.width(), 19);

    // A spanning tree over 54 rooms: 54 room cells plus 53 knocked-down walls
    let graph = maze.to_graph(None).unwrap();
    assert_eq!(graph.vertex_count(), 54 + 53);
    assert_eq!(graph.edge_count(), 2 * (graph.vertex_count() - 1));

    let path = maze.solve(&BreadthFirstSearch::new()).unwrap().into_path().unwrap();
    assert_eq!(path.source(), Some(GridCell::new(1, 1)));
    assert_eq!(path.destination(), Some(GridCell::new(11, 17)));
}

#[test]
fn test_generation_is_deterministic_per_seed() {
    let a = generate_maze(5, 5, &mut StdRng::seed_from_u64(3)).unwrap();
    let b = generate_maze(5, 5, &mut StdRng::seed_from_u64(3)).unwrap();
    assert_eq!(a, b);
    assert!(generate_maze(0, 5, &mut StdRng::seed_from_u64(3)).is_err());
}

#[test]
fn test_open_grid_path_is_manhattan() {
    let maze = open_grid(4, 7).unwrap();
    let path = maze.solve(&BreadthFirstSearch::new()).unwrap().into_path().unwrap();
    assert_eq!(path.edge_count(), 3 + 6);
}

#[test]
fn test_solve_report_serializes() {
    let maze = parse_maze(CORRIDOR).unwrap();
    let outcome = maze.solve(&BreadthFirstSearch::new()).unwrap();
    let report = SolveReport::new("BreadthFirstSearch", &maze, &outcome);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["outcome"], "found");
    assert_eq!(json["edge_count"], 4);
    assert_eq!(json["order"], "forward");
    assert_eq!(json["path"][0]["row"], 0);
    assert!(json.get("missing").is_none());

    let round_trip: SolveReport = serde_json::from_value(json).unwrap();
    assert_eq!(round_trip, report);

    let blocked = parse_maze("S#E\n").unwrap();
    let report = SolveReport::new("BreadthFirstSearch", &blocked, &PathOutcome::NoPath);
    assert_eq!(report.outcome, "no_path");
    assert!(report.path.is_empty());
}

#[test]
fn test_from_cells_rejects_bad_dimensions() {
    let cell = GridCell::new(0, 0);
    let huge = Maze::from_cells(usize::MAX, 2, vec![true], cell, cell);
    assert!(matches!(huge, Err(Error::MazeFormat { .. })), "overflowing size must be an error");

    let short = Maze::from_cells(2, 2, vec![true; 3], cell, cell);
    assert!(matches!(short, Err(Error::MazeFormat { .. })));

    let maze = Maze::from_cells(2, 1, vec![true, true], cell, GridCell::new(0, 1)).unwrap();
    assert_eq!(maze.open_cells().count(), 2);
}
