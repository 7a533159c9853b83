//! Actor tests - wall-following movement for Boxes and Flies

use tui_boulder::core::{actors, Board};
use tui_boulder::types::{Direction, Tile};

#[test]
fn test_actor_in_open_space_circles_counterclockwise() {
    let mut board = Board::new();
    board.set(11, 20, Tile::Box);
    // Default heading is North; the first try is always its ccw
    // neighbor, so the box orbits a 2x2 loop going W, S, E, N.
    let expected = [
        ((11, 19), Direction::West),
        ((12, 19), Direction::South),
        ((12, 20), Direction::East),
        ((11, 20), Direction::North),
    ];

    for (pos, heading) in expected {
        actors::step(&mut board);
        assert_eq!(board.find(Tile::Box), Some(pos));
        assert_eq!(board.heading(pos.0, pos.1), heading);
    }
}

#[test]
fn test_actor_moves_at_most_once_per_pass() {
    let mut board = Board::new();
    board.set(5, 5, Tile::Box);
    board.set(5, 4, Tile::Wall);

    actors::step(&mut board);

    // West is blocked so the box steps North, into a row the scan has
    // not reached yet. The moved flag keeps it from stepping again.
    assert_eq!(board.find(Tile::Box), Some((4, 5)));
}

#[test]
fn test_actor_reverses_when_boxed_in_on_three_sides() {
    let mut board = Board::new();
    board.set(5, 5, Tile::Box);
    board.set(5, 4, Tile::Wall);
    board.set(4, 5, Tile::Wall);
    board.set(5, 6, Tile::Wall);

    actors::step(&mut board);

    // W, N, E all blocked; the reverse of North is the last resort.
    assert_eq!(board.find(Tile::Box), Some((6, 5)));
    assert_eq!(board.heading(6, 5), Direction::South);
}

#[test]
fn test_actor_fully_enclosed_stays_put() {
    let mut board = Board::new();
    board.set(5, 5, Tile::Box);
    board.set(5, 4, Tile::Wall);
    board.set(4, 5, Tile::Wall);
    board.set(5, 6, Tile::Wall);
    board.set(6, 5, Tile::Wall);

    let exploded = actors::step(&mut board);

    assert!(!exploded);
    assert_eq!(board.find(Tile::Box), Some((5, 5)));
}

#[test]
fn test_box_reaching_hero_explodes() {
    let mut board = Board::new();
    board.set(5, 5, Tile::Box);
    board.set(5, 4, Tile::Wall);
    board.set(4, 5, Tile::Wall);
    board.set(5, 6, Tile::Hero);

    let exploded = actors::step(&mut board);

    assert!(exploded);
    assert!(!board.contains(Tile::Hero));
    // The blast is centered on the hero and takes the box with it.
    assert_eq!(board.get(5, 6), Tile::Crash);
    assert!(!board.contains(Tile::Box));
}

#[test]
fn test_fly_reaching_hero_shatters_into_diamonds() {
    let mut board = Board::new();
    board.set(5, 5, Tile::Fly);
    board.set(5, 4, Tile::Wall);
    board.set(4, 5, Tile::Wall);
    board.set(5, 6, Tile::Hero);

    let exploded = actors::step(&mut board);

    assert!(exploded);
    assert!(!board.contains(Tile::Hero));
    assert!(!board.contains(Tile::Fly));
    assert_eq!(board.get(5, 6), Tile::Diamond);
}

#[test]
fn test_actor_does_not_enter_ground() {
    let mut board = Board::new();
    board.set(5, 5, Tile::Box);
    for (r, c) in [(5, 4), (4, 5), (5, 6)] {
        board.set(r, c, Tile::Ground);
    }
    board.set(6, 5, Tile::Ground);

    actors::step(&mut board);

    // Actors only walk tunnels; ground blocks them like a wall.
    assert_eq!(board.find(Tile::Box), Some((5, 5)));
}
