//! GameView tests - snapshot to framebuffer rendering

use tui_boulder::core::GameSnapshot;
use tui_boulder::term::{FrameBuffer, GameView, Viewport};
use tui_boulder::types::{HeroFacing, Tile, GRID_HEIGHT, GRID_WIDTH};

fn snapshot() -> GameSnapshot {
    let mut tiles = [[Tile::Tunnel; GRID_WIDTH]; GRID_HEIGHT];
    for row in 0..GRID_HEIGHT {
        for col in 0..GRID_WIDTH {
            if row == 0 || row == GRID_HEIGHT - 1 || col == 0 || col == GRID_WIDTH - 1 {
                tiles[row][col] = Tile::Metal;
            }
        }
    }
    tiles[5][5] = Tile::Hero;
    tiles[10][10] = Tile::Diamond;
    GameSnapshot {
        tiles,
        facing: HeroFacing::Neutral1,
        level: 0,
        diamonds: 8,
        time: 150,
        sound_enabled: true,
        hero_pos: (5, 5),
        level_banner: false,
    }
}

fn row_string(fb: &FrameBuffer, y: u16) -> String {
    (0..fb.width())
        .map(|x| fb.get(x, y).map(|c| c.ch).unwrap_or(' '))
        .collect()
}

fn screen_string(fb: &FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| row_string(fb, y))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_full_grid_fits_large_viewport() {
    let view = GameView::default();
    let fb = view.render(&snapshot(), Viewport::new(100, 30));

    // 40 columns at two cells each plus the frame, centered.
    let top = row_string(&fb, 2);
    assert_eq!(top.chars().nth(9), Some('┌'));
    assert_eq!(top.chars().nth(90), Some('┐'));
    let bottom = row_string(&fb, 25);
    assert_eq!(bottom.chars().nth(9), Some('└'));
    assert_eq!(bottom.chars().nth(90), Some('┘'));

    let screen = screen_string(&fb);
    assert!(screen.contains('☺'), "hero glyph rendered");
    assert!(screen.contains('◆'), "diamond glyph rendered");
}

#[test]
fn test_hud_row_under_the_frame() {
    let view = GameView::default();
    let fb = view.render(&snapshot(), Viewport::new(100, 30));

    let hud = row_string(&fb, 26);
    assert!(hud.contains("LEVEL 1"), "level shown 1-based: {:?}", hud);
    assert!(hud.contains("DIAMONDS 8"), "{:?}", hud);
    assert!(hud.contains("TIME 150"), "{:?}", hud);
    // The mute marker slot at the frame's right edge stays blank.
    assert_eq!(hud.chars().nth(90), Some(' '));
}

#[test]
fn test_mute_marker_when_sound_off() {
    let mut snap = snapshot();
    snap.sound_enabled = false;

    let fb = GameView::default().render(&snap, Viewport::new(100, 30));
    assert_eq!(row_string(&fb, 26).chars().nth(90), Some('M'));
}

#[test]
fn test_negative_time_displays_as_zero() {
    let mut snap = snapshot();
    snap.time = -3;

    let fb = GameView::default().render(&snap, Viewport::new(100, 30));
    assert!(row_string(&fb, 26).contains("TIME 0"));
}

#[test]
fn test_game_over_overlay() {
    let mut snap = snapshot();
    snap.facing = HeroFacing::Killed;

    let fb = GameView::default().render(&snap, Viewport::new(100, 30));
    assert!(screen_string(&fb).contains("GAME OVER"));
}

#[test]
fn test_level_intro_banner() {
    let mut snap = snapshot();
    snap.level_banner = true;

    // The banner sits mid-frame, well away from the HUD row.
    let fb = GameView::default().render(&snap, Viewport::new(100, 30));
    assert!(row_string(&fb, 14).contains(" LEVEL 1 "), "intro banner shown");

    // A dead hero's overlay takes precedence.
    snap.facing = HeroFacing::Killed;
    let fb = GameView::default().render(&snap, Viewport::new(100, 30));
    let mid = row_string(&fb, 14);
    assert!(mid.contains("GAME OVER"));
    assert!(!mid.contains("LEVEL"));
}

#[test]
fn test_facing_changes_hero_glyph() {
    let mut snap = snapshot();
    snap.facing = HeroFacing::Right;
    let fb = GameView::default().render(&snap, Viewport::new(100, 30));
    assert!(screen_string(&fb).contains('▶'));

    snap.facing = HeroFacing::Left;
    let fb = GameView::default().render(&snap, Viewport::new(100, 30));
    assert!(screen_string(&fb).contains('◀'));
}

#[test]
fn test_small_viewport_scrolls_to_hero() {
    let mut snap = snapshot();
    snap.tiles[5][5] = Tile::Tunnel;
    snap.tiles[20][38] = Tile::Hero;
    snap.hero_pos = (20, 38);

    // Far too small for the whole grid: the camera clamps to the
    // bottom-right corner, keeping the hero in view.
    let fb = GameView::default().render(&snap, Viewport::new(22, 12));
    assert!(screen_string(&fb).contains('☺'));
}

#[test]
fn test_tiny_viewport_renders_nothing() {
    let fb = GameView::default().render(&snapshot(), Viewport::new(3, 3));
    let screen = screen_string(&fb);
    assert!(screen.chars().all(|c| c == ' ' || c == '\n'));
}
