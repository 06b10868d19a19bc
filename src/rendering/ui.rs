//! # User Interface Elements
//!
//! Side panel with turn, positions, dice and controls, plus the winner banner.

use crate::game::{DiceMode, GameSnapshot, PlayerMode};
use crate::rendering::{BoardProjection, PLAYER_COLORS};
use macroquad::prelude::*;

/// Side length of a drawn die, in pixels.
const DIE_SIZE: f32 = 48.0;
/// Height of the winner banner, in pixels.
const BANNER_HEIGHT: f32 = 100.0;

/// Key help shown at the bottom of the panel.
pub const CONTROLS: [&str; 5] = [
    "SPACE  roll",
    "R      restart",
    "P      one / two players",
    "D      one / two dice",
    "ESC    quit",
];

/// Pip centres for a die face, as fractions of the die's side.
///
/// Faces outside `1..=6` have no pips.
pub fn pip_offsets(face: u8) -> &'static [(f32, f32)] {
    const L: f32 = 0.25;
    const M: f32 = 0.5;
    const H: f32 = 0.75;
    match face {
        1 => &[(M, M)],
        2 => &[(L, L), (H, H)],
        3 => &[(L, L), (M, M), (H, H)],
        4 => &[(L, L), (H, L), (L, H), (H, H)],
        5 => &[(L, L), (H, L), (M, M), (L, H), (H, H)],
        6 => &[(L, L), (H, L), (L, M), (H, M), (L, H), (H, H)],
        _ => &[],
    }
}

/// Display name for a player index.
pub fn player_label(index: usize) -> String {
    format!("Player {}", index + 1)
}

/// Panel and overlay renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct UI {
    /// Screen x where the side panel starts
    pub panel_x: f32,
}

impl UI {
    /// Creates a UI whose panel starts at `panel_x`.
    pub fn new(panel_x: f32) -> Self {
        Self { panel_x }
    }

    /// Draws the side panel.
    pub fn render_panel(&self, snapshot: &GameSnapshot) {
        let x = self.panel_x;
        let mut y = 40.0;

        draw_text("Snakes & Ladders", x, y, 30.0, WHITE);
        y += 40.0;

        let turn = if snapshot.game_over {
            "Game over".to_string()
        } else {
            format!("{} to roll", player_label(snapshot.current_player))
        };
        draw_text(&turn, x, y, 22.0, YELLOW);
        y += 34.0;

        for player in &snapshot.players {
            let color = PLAYER_COLORS[player.index % PLAYER_COLORS.len()];
            draw_circle(x + 8.0, y - 6.0, 7.0, color);
            let mut line = format!("{}: square {}", player_label(player.index), player.position);
            if player.skip_next_turn {
                line.push_str(" (skips)");
            }
            draw_text(&line, x + 22.0, y, 20.0, WHITE);
            y += 26.0;
        }
        y += 10.0;

        let dice = match snapshot.dice_mode {
            DiceMode::Single => "One die",
            DiceMode::Double => "Two dice",
        };
        let players = match snapshot.player_mode {
            PlayerMode::Single => "One player",
            PlayerMode::Two => "Two players",
        };
        draw_text(&format!("{} | {}", dice, players), x, y, 18.0, LIGHTGRAY);
        y += 20.0;

        if let Some(roll) = &snapshot.last_roll {
            for (i, face) in roll.values.iter().enumerate() {
                self.render_die(*face, x + i as f32 * (DIE_SIZE + 12.0), y);
            }
            draw_text(
                &format!("= {}", roll.sum),
                x + roll.values.len() as f32 * (DIE_SIZE + 12.0),
                y + DIE_SIZE * 0.65,
                26.0,
                WHITE,
            );
        }
        y += DIE_SIZE + 30.0;

        if snapshot.is_animating() {
            draw_text("Moving...", x, y, 18.0, GRAY);
        }
        y += 30.0;

        for line in CONTROLS {
            draw_text(line, x, y, 16.0, GRAY);
            y += 18.0;
        }
    }

    /// Draws one die with its top-left corner at (`x`, `y`).
    fn render_die(&self, face: u8, x: f32, y: f32) {
        draw_rectangle(x, y, DIE_SIZE, DIE_SIZE, WHITE);
        draw_rectangle_lines(x, y, DIE_SIZE, DIE_SIZE, 2.0, BLACK);
        for (px, py) in pip_offsets(face) {
            draw_circle(x + px * DIE_SIZE, y + py * DIE_SIZE, DIE_SIZE * 0.08, BLACK);
        }
    }

    /// Overlays the winner announcement across the board.
    pub fn render_winner_banner(&self, winner: usize, projection: &BoardProjection) {
        let text = format!("{} wins!", player_label(winner));
        let font_size = 48;
        let size = measure_text(&text, None, font_size, 1.0);
        let area = banner_area(projection);
        let center_y = area.y + area.h / 2.0;

        draw_rectangle(area.x, area.y, area.w, area.h, Color::new(0.0, 0.0, 0.0, 0.75));
        draw_text(
            &text,
            area.x + (area.w - size.width) / 2.0,
            center_y + size.height / 2.0 - 10.0,
            f32::from(font_size),
            PLAYER_COLORS[winner % PLAYER_COLORS.len()],
        );
        draw_text(
            "Press R to play again",
            area.x + area.w / 2.0 - 90.0,
            center_y + 35.0,
            20.0,
            WHITE,
        );
    }
}

/// Band across the middle of the board where the winner banner is drawn.
pub fn banner_area(projection: &BoardProjection) -> Rect {
    let side = projection.board_side();
    Rect::new(
        projection.origin_x,
        projection.origin_y + side / 2.0 - BANNER_HEIGHT / 2.0,
        side,
        BANNER_HEIGHT,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pip_count_matches_face() {
        for face in 1..=6u8 {
            assert_eq!(pip_offsets(face).len(), face as usize);
        }
        assert!(pip_offsets(0).is_empty());
        assert!(pip_offsets(7).is_empty());
    }

    #[test]
    fn test_pips_stay_inside_die() {
        for face in 1..=6u8 {
            for (x, y) in pip_offsets(face) {
                assert!((0.0..1.0).contains(x) && (0.0..1.0).contains(y));
            }
        }
    }

    #[test]
    fn test_banner_follows_board_placement() {
        let projection = BoardProjection::fit(35.0, 60.0, 400.0);
        let area = banner_area(&projection);
        assert_eq!(area.x, 35.0);
        assert_eq!(area.w, 400.0);
        assert_eq!(area.y + area.h / 2.0, 60.0 + 200.0);
    }

    #[test]
    fn test_player_label_is_one_based() {
        assert_eq!(player_label(0), "Player 1");
        assert_eq!(player_label(1), "Player 2");
    }
}
