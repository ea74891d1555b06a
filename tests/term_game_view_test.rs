use std::time::Duration;

use tui_snake::core::{GameConfig, GameLoopController};
use tui_snake::term::{FrameBuffer, GameView, Viewport};
use tui_snake::types::{DrawCommand, KeyStates, SpriteKind};

fn all_text(fb: &FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

fn playing(seed: u32) -> GameLoopController {
    let mut game = GameLoopController::new(GameConfig::default().with_seed(seed));
    game.update(
        KeyStates {
            confirm: true,
            ..KeyStates::default()
        },
        Duration::ZERO,
    );
    game
}

#[test]
fn term_view_renders_frame_corners() {
    let view = GameView::default();
    // With cell_w=2 and cell_h=1:
    // board = 20*2 by 20*1 => 40x20, plus frame => 42x22
    assert_eq!(view.board_size(), (40, 20));

    let fb = view.render(&[], Viewport::new(42, 22));
    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(41, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(41, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_puts_bottom_left_wall_on_last_row() {
    let game = playing(1);
    let fb = GameView::default().render(&game.render(), Viewport::new(42, 22));

    // Grid y grows upwards; terminal rows grow downwards.
    assert_eq!(fb.get(1, 20).unwrap().ch, '▓');
    assert_eq!(fb.get(2, 20).unwrap().ch, '▓');
    assert_eq!(fb.get(1, 1).unwrap().ch, '▓');
    assert_eq!(fb.get(40, 1).unwrap().ch, '▓');
}

#[test]
fn term_view_draws_head_two_chars_wide_with_heading() {
    let game = playing(1);
    let fb = GameView::default().render(&game.render(), Viewport::new(42, 22));

    // Start cell (10, 7): column 1 + 10*2, row 1 + (19 - 7).
    assert_eq!(fb.get(21, 13).unwrap().ch, '█');
    assert_eq!(fb.get(22, 13).unwrap().ch, '▶');
}

#[test]
fn term_view_centres_board_in_larger_viewport() {
    let game = playing(1);
    let fb = GameView::default().render(&game.render(), Viewport::new(62, 30));
    // 20 spare columns and 8 spare rows split evenly.
    assert_eq!(fb.get(10, 4).unwrap().ch, '┌');
    assert_eq!(fb.get(31, 17).unwrap().ch, '█');
}

#[test]
fn term_view_draws_menu_with_selection_marker() {
    let game = GameLoopController::default();
    let fb = GameView::default().render(&game.render(), Viewport::new(42, 22));
    let text = all_text(&fb);
    assert!(text.contains("S N A K E"));
    assert!(text.contains("> START <"));
    assert!(text.contains("SETTINGS"));
    assert!(text.contains("EXIT"));
    assert!(!text.contains("> EXIT <"));
}

#[test]
fn term_view_draws_settings_panel() {
    let view = GameView::new(&GameConfig::default().with_seed(9));
    let cmds = [DrawCommand::new(SpriteKind::SettingsPanel, (0.0, 0.0))];
    let text = all_text(&view.render(&cmds, Viewport::new(42, 22)));
    assert!(text.contains("SETTINGS"));
    assert!(text.contains("200 ms"));
    assert!(text.contains("back"));
}

#[test]
fn term_view_survives_tiny_viewport() {
    let game = playing(1);
    let fb = GameView::default().render(&game.render(), Viewport::new(10, 5));
    assert_eq!(fb.width(), 10);
    assert_eq!(fb.height(), 5);
}

#[test]
fn term_view_reuses_framebuffer_across_resizes() {
    let game = playing(1);
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    view.render_into(&game.render(), Viewport::new(42, 22), &mut fb);
    view.render_into(&game.render(), Viewport::new(50, 24), &mut fb);
    assert_eq!((fb.width(), fb.height()), (50, 24));
    assert_eq!(fb.get(4, 1).unwrap().ch, '┌');
}
