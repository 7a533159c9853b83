//! Gravity tests - falling, sliding, and impact rules for heavy objects

use tui_boulder::core::{explosion, physics, Board, FixedRng};
use tui_boulder::types::Tile;

#[test]
fn test_rock_falls_into_open_cell() {
    let mut board = Board::new();
    board.set(5, 5, Tile::Rock);

    let exploded = physics::step(&mut board, &mut FixedRng(true));

    assert!(!exploded);
    assert_eq!(board.get(5, 5), Tile::Tunnel);
    assert_eq!(board.get(6, 5), Tile::Rock);
    assert!(board.falling(6, 5), "a moved object carries the flag");
}

#[test]
fn test_diamond_falls_like_rock() {
    let mut board = Board::new();
    board.set(8, 12, Tile::Diamond);

    physics::step(&mut board, &mut FixedRng(true));

    assert_eq!(board.get(9, 12), Tile::Diamond);
    assert!(board.falling(9, 12));
}

#[test]
fn test_rock_rests_on_ground() {
    let mut board = Board::new();
    board.set(5, 5, Tile::Rock);
    board.set(6, 5, Tile::Ground);

    physics::step(&mut board, &mut FixedRng(true));

    // Ground neither lets the rock through nor makes it roll off.
    assert_eq!(board.get(5, 5), Tile::Rock);
    assert!(!board.falling(5, 5));
}

#[test]
fn test_blocked_rock_slides_right() {
    let mut board = Board::new();
    board.set(5, 5, Tile::Rock);
    board.set(6, 5, Tile::Wall);

    physics::step(&mut board, &mut FixedRng(true));

    // Row 5 scans right to left, so the slid rock at column 6 is not
    // reprocessed this pass; it stays on the ledge with its flag set.
    assert_eq!(board.get(5, 5), Tile::Tunnel);
    assert_eq!(board.get(5, 6), Tile::Rock);
    assert!(board.falling(5, 6));
}

#[test]
fn test_blocked_rock_slides_left() {
    let mut board = Board::new();
    board.set(5, 5, Tile::Rock);
    board.set(6, 5, Tile::Wall);

    physics::step(&mut board, &mut FixedRng(false));

    // A left slide lands ahead of the right-to-left scan, so the same
    // pass picks the rock up again and it falls off the ledge.
    assert_eq!(board.get(5, 5), Tile::Tunnel);
    assert_eq!(board.get(6, 4), Tile::Rock);
    assert!(board.falling(6, 4));
}

#[test]
fn test_slide_requires_both_cells_open() {
    let mut board = Board::new();
    board.set(5, 5, Tile::Rock);
    board.set(6, 5, Tile::Wall);
    board.set(5, 6, Tile::Ground);

    physics::step(&mut board, &mut FixedRng(true));

    // Side cell occupied: no slide, the rock stays put.
    assert_eq!(board.get(5, 5), Tile::Rock);
}

#[test]
fn test_rocks_do_not_stack_slide_through_diagonals() {
    let mut board = Board::new();
    board.set(5, 5, Tile::Rock);
    board.set(6, 5, Tile::Wall);
    board.set(6, 6, Tile::Wall);

    physics::step(&mut board, &mut FixedRng(true));

    // Below-side cell occupied: sliding into a hovering position is not
    // allowed.
    assert_eq!(board.get(5, 5), Tile::Rock);
}

#[test]
fn test_falling_rock_crushes_hero() {
    let mut board = Board::new();
    board.set(5, 5, Tile::Rock);
    board.set(6, 5, Tile::Hero);
    // The flag from the previous pass: the rock was already in motion.
    board.set_falling(5, 5, true);

    let exploded = physics::step(&mut board, &mut FixedRng(true));

    assert!(exploded);
    assert_eq!(board.get(6, 5), Tile::Crash);
    assert!(!board.contains(Tile::Hero));
}

#[test]
fn test_resting_rock_is_harmless_on_hero() {
    let mut board = Board::new();
    board.set(5, 5, Tile::Rock);
    board.set(6, 5, Tile::Hero);

    let exploded = physics::step(&mut board, &mut FixedRng(true));

    // Lethality is cross-tick: a rock that merely starts the tick on the
    // hero's head does nothing.
    assert!(!exploded);
    assert_eq!(board.get(5, 5), Tile::Rock);
    assert_eq!(board.get(6, 5), Tile::Hero);
}

#[test]
fn test_rock_landing_on_box_explodes() {
    let mut board = Board::new();
    board.set(5, 5, Tile::Rock);
    board.set(6, 5, Tile::Box);

    let exploded = physics::step(&mut board, &mut FixedRng(true));

    assert!(exploded);
    // 3x3 of debris centered on the box; the rock itself is consumed.
    assert_eq!(board.get(6, 5), Tile::Crash);
    assert_eq!(board.count(Tile::Crash), 9);
    assert!(!board.contains(Tile::Rock));
}

#[test]
fn test_rock_landing_on_fly_leaves_diamonds() {
    let mut board = Board::new();
    board.set(5, 5, Tile::Rock);
    board.set(6, 5, Tile::Fly);

    let exploded = physics::step(&mut board, &mut FixedRng(true));

    assert!(exploded);
    assert!(!board.contains(Tile::Fly));
    // The blast writes nine diamonds; later slides in the same pass move
    // them around but never destroy them.
    assert_eq!(board.count(Tile::Diamond), 9);
    assert_eq!(board.count(Tile::Crash), 0);
}

#[test]
fn test_explosion_spares_metal() {
    let mut board = Board::new();
    board.set(4, 4, Tile::Metal);
    board.set(4, 5, Tile::Ground);

    explosion::trigger(&mut board, Tile::Crash, 5, 5);

    assert_eq!(board.get(4, 4), Tile::Metal);
    assert_eq!(board.get(4, 5), Tile::Crash);
    assert_eq!(board.count(Tile::Crash), 8);
}

#[test]
fn test_explosion_clear_is_idempotent() {
    let mut board = Board::new();
    explosion::trigger(&mut board, Tile::Crash, 5, 5);
    assert_eq!(board.count(Tile::Crash), 9);

    explosion::clear(&mut board);
    assert_eq!(board.count(Tile::Crash), 0);

    explosion::clear(&mut board);
    assert_eq!(board.count(Tile::Crash), 0);
}
