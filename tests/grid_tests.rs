//! Integration tests for grid construction, linking, and streak scans.

use drop_four::{CellId, Coords, Direction, Grid, Token};

/// Build a board from row strings, top row first, as a host would
/// supply it. '.' is empty; any other char is interned by its byte.
fn board(rows: &[&str]) -> Vec<Vec<Option<Token>>> {
    let cols = rows[0].len();
    let mut board = vec![Vec::with_capacity(rows.len()); cols];
    for row in rows {
        assert_eq!(row.len(), cols);
        for (col, ch) in row.chars().enumerate() {
            board[col].push(match ch {
                '.' => None,
                ch => Some(Token::new(ch as u16)),
            });
        }
    }
    board
}

/// Direct build without the advisor's column reversal: flips each column
/// so row 0 is the bottom, the way `MoveAdvisor::recommend` would.
fn build(rows: &[&str]) -> Grid {
    let mut raw = board(rows);
    for column in raw.iter_mut() {
        column.reverse();
    }
    Grid::from_board(&raw).0
}

const ALL_DIRECTIONS: [Direction; 8] = [
    Direction::Up,
    Direction::Down,
    Direction::Left,
    Direction::Right,
    Direction::UpLeft,
    Direction::UpRight,
    Direction::DownLeft,
    Direction::DownRight,
];

#[test]
fn relation_symmetry_holds_across_the_grid() {
    let grid = build(&[
        ".......",
        ".......",
        ".......",
        "...x...",
        "..xo...",
        ".xoox..",
    ]);

    for id in grid.ids() {
        for direction in ALL_DIRECTIONS {
            let neighbor = grid.neighbor(id, direction);
            if neighbor.is_some() {
                assert_eq!(
                    grid.neighbor(neighbor, direction.opposite()),
                    id,
                    "asymmetric relation at {} going {:?}",
                    grid.get(id).coords,
                    direction
                );
            }
        }
    }
}

#[test]
fn diagonals_match_their_primary_composition() {
    let grid = build(&["....", "....", "....", "...."]);

    for id in grid.ids() {
        for diagonal in [
            Direction::UpLeft,
            Direction::UpRight,
            Direction::DownLeft,
            Direction::DownRight,
        ] {
            let (vertical, horizontal) = diagonal.split().unwrap();
            let via = grid.neighbor(id, vertical);
            let expected = if via.is_none() {
                CellId::NONE
            } else {
                grid.neighbor(via, horizontal)
            };
            assert_eq!(grid.neighbor(id, diagonal), expected);
        }
    }
}

#[test]
fn landing_cells_sit_on_top_of_stacks() {
    let grid = build(&[
        ".....",
        ".....",
        ".x...",
        ".x.o.",
        "xxo.o",
    ]);

    // Column 0: one token, lands at row 1.
    assert_eq!(grid.get(grid.landing_cell(0).unwrap()).coords, Coords::new(0, 1));
    // Column 1: three tokens, lands at row 3.
    assert_eq!(grid.get(grid.landing_cell(1).unwrap()).coords, Coords::new(1, 3));
    // Column 3: a floating gap under the 'o' does not exist after a real
    // drop, but the walk still finds the first empty cell from below.
    assert_eq!(grid.get(grid.landing_cell(3).unwrap()).coords, Coords::new(3, 0));
}

#[test]
fn full_column_has_no_landing_cell() {
    let grid = build(&["x", "o", "x"]);
    assert_eq!(grid.landing_cell(0), None);
}

#[test]
fn streak_tracks_runs_in_all_axes() {
    let grid = build(&[
        ".......",
        ".......",
        "..ox...",
        ".oxx...",
        "oxxo..x",
    ]);

    // Landing cell of column 3 sits above the two stacked x's.
    let landing = grid.landing_cell(3).unwrap();
    assert_eq!(grid.get(landing).coords, Coords::new(3, 3));

    let down = grid.streak(landing, Direction::Down);
    assert_eq!(down.len(), 2);
    assert_eq!(down.value(), Some(Token::new('x' as u16)));

    // The rising 'o' diagonal passes right through the landing cell.
    let diagonal = grid.streak(landing, Direction::DownLeft);
    assert_eq!(diagonal.len(), 3);
    assert_eq!(diagonal.value(), Some(Token::new('o' as u16)));
}

#[test]
fn streak_members_all_share_the_run_value() {
    let grid = build(&[
        ".......",
        ".......",
        ".......",
        ".......",
        ".......",
        "xxo.oxx",
    ]);
    let origin = grid.cell_id(3, 0).unwrap();

    for direction in ALL_DIRECTIONS {
        let streak = grid.streak(origin, direction);
        if let Some(value) = streak.value() {
            for &cell in streak.cells() {
                assert_eq!(grid.get(cell).value, Some(value));
            }
        } else {
            assert!(streak.is_empty());
        }
    }
}

#[test]
fn repeated_updates_leave_topology_and_streaks_stable() {
    let rows = [
        ".....",
        ".....",
        "..x..",
        ".oxo.",
    ];
    let mut raw = board(&rows);
    for column in raw.iter_mut() {
        column.reverse();
    }

    let (mut grid, all_empty) = Grid::from_board(&raw);
    assert!(!all_empty);

    let origin = grid.landing_cell(2).unwrap();
    let before = grid.streak(origin, Direction::Down);

    for _ in 0..5 {
        grid.update(&raw);
    }

    let after = grid.streak(origin, Direction::Down);
    assert_eq!(before.cells(), after.cells());
    assert_eq!(before.value(), after.value());
    assert_eq!(before.len(), after.len());
}

#[test]
fn grid_round_trips_through_serde() {
    let grid = build(&["..", "xo"]);

    let json = serde_json::to_string(&grid).unwrap();
    let restored: Grid = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.cols(), grid.cols());
    assert_eq!(restored.rows(), grid.rows());
    for id in grid.ids() {
        assert_eq!(restored.get(id).value, grid.get(id).value);
        assert_eq!(restored.get(id).coords, grid.get(id).coords);
    }
}
