//! # Display Management
//!
//! Top-down board rendering using macroquad. Everything here reads a
//! [`GameSnapshot`]; nothing writes game state.

use crate::board::{
    cell_to_world, grid_to_cell, BoardLayout, GridPos, LinkKind, WorldPoint, BOARD_MAX, BOARD_MIN,
    BOARD_N,
};
use crate::game::GameSnapshot;
use crate::movement::{build_ladder_path, build_snake_curve};
use crate::rendering::UI;
use crate::SerpentineResult;
use macroquad::prelude::*;

/// Segments used to draw a snake body.
const SNAKE_DRAW_SEGMENTS: usize = 14;
/// Rungs drawn on each ladder.
const LADDER_DRAW_RUNGS: usize = 6;
/// Half the distance between ladder rails, in squares.
const LADDER_HALF_WIDTH: f32 = 0.12;
/// Sideways offset between the two tokens, in squares.
const TOKEN_SPREAD: f32 = 0.18;

/// Token colours by player index.
pub const PLAYER_COLORS: [Color; 2] = [
    Color::new(0.9, 0.2, 0.2, 1.0),
    Color::new(0.2, 0.5, 0.9, 1.0),
];

const LIGHT_SQUARE: Color = Color::new(0.95, 0.90, 0.80, 1.0);
const DARK_SQUARE: Color = Color::new(0.75, 0.70, 0.60, 1.0);
const BONUS_SQUARE: Color = Color::new(0.9, 0.9, 0.5, 1.0);
const BORDER: Color = Color::new(0.2, 0.2, 0.2, 1.0);
const SNAKE_BODY: Color = Color::new(0.2, 0.8, 0.2, 1.0);
const SNAKE_HEAD: Color = Color::new(0.1, 0.6, 0.1, 1.0);
const LADDER_WOOD: Color = Color::new(0.7, 0.5, 0.2, 1.0);

/// Maps board coordinates onto screen pixels.
///
/// Row 0 (cells 1-10) sits at the bottom of the screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardProjection {
    /// Screen x of the board's left edge
    pub origin_x: f32,
    /// Screen y of the board's top edge
    pub origin_y: f32,
    /// Square size in pixels
    pub tile_size: f32,
}

impl BoardProjection {
    /// Fits the board into a square area of `side` pixels.
    pub fn fit(origin_x: f32, origin_y: f32, side: f32) -> Self {
        Self {
            origin_x,
            origin_y,
            tile_size: side / f32::from(BOARD_N),
        }
    }

    /// Converts a board coordinate to screen pixels.
    pub fn to_screen(&self, point: WorldPoint) -> Vec2 {
        vec2(
            self.origin_x + (point.x - BOARD_MIN) * self.tile_size,
            self.origin_y + (BOARD_MAX - point.z) * self.tile_size,
        )
    }

    /// Screen position of a cell's centre.
    pub fn cell_center(&self, cell: u8) -> Vec2 {
        self.to_screen(cell_to_world(cell))
    }

    /// Side length of the whole board in pixels.
    pub fn board_side(&self) -> f32 {
        self.tile_size * f32::from(BOARD_N)
    }
}

/// Macroquad display manager for the game.
pub struct MacroquadDisplay {
    /// Where the board is drawn
    pub projection: BoardProjection,
    /// Message history
    pub messages: Vec<String>,
    /// Maximum number of messages to keep
    pub max_messages: usize,
    /// Side panel and overlays
    pub ui: UI,
}

impl MacroquadDisplay {
    /// Creates a display sized to the current window.
    pub fn new() -> SerpentineResult<Self> {
        let ui_panel_width = 300.0;
        let margin = 20.0;
        let side = (screen_width() - ui_panel_width - margin * 2.0)
            .min(screen_height() - 100.0 - margin * 2.0)
            .max(100.0);

        Ok(Self {
            projection: BoardProjection::fit(margin, margin, side),
            messages: Vec::new(),
            max_messages: 100,
            ui: UI::new(margin * 2.0 + side),
        })
    }

    /// Renders the complete game screen.
    pub fn render_game(&self, snapshot: &GameSnapshot, layout: &BoardLayout) {
        clear_background(Color::new(0.08, 0.10, 0.12, 1.0));

        self.render_board(layout);
        self.render_links(layout);
        self.render_tokens(snapshot);
        self.ui.render_panel(snapshot);
        self.render_messages();

        if let Some(winner) = snapshot.winner.filter(|_| snapshot.game_over) {
            self.ui.render_winner_banner(winner, &self.projection);
        }
    }

    /// Draws the squares, their numbers and the border.
    fn render_board(&self, layout: &BoardLayout) {
        let tile = self.projection.tile_size;
        for row in 0..BOARD_N {
            for col in 0..BOARD_N {
                let cell = grid_to_cell(GridPos::new(row, col));
                let center = self.projection.cell_center(cell);
                let color = if layout.bonus_at(cell).is_some() {
                    BONUS_SQUARE
                } else if (row + col) % 2 == 0 {
                    LIGHT_SQUARE
                } else {
                    DARK_SQUARE
                };

                draw_rectangle(center.x - tile / 2.0, center.y - tile / 2.0, tile, tile, color);
                draw_text(
                    &cell.to_string(),
                    center.x - tile / 2.0 + 3.0,
                    center.y - tile / 2.0 + 14.0,
                    16.0,
                    BLACK,
                );
            }
        }

        let side = self.projection.board_side();
        draw_rectangle_lines(
            self.projection.origin_x,
            self.projection.origin_y,
            side,
            side,
            3.0,
            BORDER,
        );
    }

    /// Draws every snake and ladder.
    fn render_links(&self, layout: &BoardLayout) {
        let tile = self.projection.tile_size;

        for link in layout.links_of_kind(LinkKind::Ladder) {
            let rungs = build_ladder_path(link.source, link.destination, LADDER_DRAW_RUNGS);
            let start = cell_to_world(link.source);
            let end = cell_to_world(link.destination);
            let (dx, dz) = (end.x - start.x, end.z - start.z);
            let length = (dx * dx + dz * dz).sqrt().max(f32::EPSILON);
            let normal = (-dz / length * LADDER_HALF_WIDTH, dx / length * LADDER_HALF_WIDTH);

            for side in [-1.0, 1.0] {
                let offset = |p: WorldPoint| {
                    WorldPoint::new(p.x + normal.0 * side, p.y, p.z + normal.1 * side)
                };
                let a = self.projection.to_screen(offset(start));
                let b = self.projection.to_screen(offset(end));
                draw_line(a.x, a.y, b.x, b.y, tile * 0.06, LADDER_WOOD);
            }
            for rung in rungs {
                let left = WorldPoint::new(rung.x - normal.0, rung.y, rung.z - normal.1);
                let right = WorldPoint::new(rung.x + normal.0, rung.y, rung.z + normal.1);
                let a = self.projection.to_screen(left);
                let b = self.projection.to_screen(right);
                draw_line(a.x, a.y, b.x, b.y, tile * 0.04, LADDER_WOOD);
            }
        }

        for link in layout.links_of_kind(LinkKind::Snake) {
            let body = build_snake_curve(link.source, link.destination, SNAKE_DRAW_SEGMENTS);
            for pair in body.windows(2) {
                let a = self.projection.to_screen(pair[0]);
                let b = self.projection.to_screen(pair[1]);
                draw_line(a.x, a.y, b.x, b.y, tile * 0.12, SNAKE_BODY);
            }
            let head = self.projection.cell_center(link.source);
            draw_circle(head.x, head.y, tile * 0.2, SNAKE_HEAD);
        }
    }

    /// Draws each token at its cell, or along its path while it moves.
    fn render_tokens(&self, snapshot: &GameSnapshot) {
        let tile = self.projection.tile_size;
        let spread = if snapshot.players.len() > 1 {
            TOKEN_SPREAD
        } else {
            0.0
        };

        for player in &snapshot.players {
            let moving = snapshot
                .animation
                .filter(|view| view.player == player.index)
                .map(|view| view.render_position);
            let mut point = moving.unwrap_or_else(|| cell_to_world(player.position));
            point.x += if player.index == 0 { -spread } else { spread };

            let color = PLAYER_COLORS[player.index % PLAYER_COLORS.len()];
            let screen = self.projection.to_screen(point);
            let mut radius = tile * 0.18;
            if snapshot.game_over && snapshot.winner == Some(player.index) {
                radius *= 1.0 + 0.15 * (get_time() as f32 * 6.0).sin().abs();
            }
            // Lift shadow under a token that is off the board surface.
            if point.y > 0.0 {
                draw_circle(screen.x, screen.y + point.y * tile, radius, Color::new(0.0, 0.0, 0.0, 0.3));
            }
            draw_circle(screen.x, screen.y, radius, color);
            draw_circle_lines(screen.x, screen.y, radius, 2.0, BLACK);
        }
    }

    /// Renders the message area.
    fn render_messages(&self) {
        let message_area_y = screen_height() - 80.0;
        let message_count = 3;
        let line_height = 18.0;

        draw_rectangle(
            0.0,
            message_area_y - 10.0,
            screen_width(),
            90.0,
            Color::new(0.0, 0.0, 0.0, 0.8),
        );

        let start_index = self.messages.len().saturating_sub(message_count);
        for (i, message) in self.messages.iter().skip(start_index).enumerate() {
            let y = message_area_y + i as f32 * line_height;
            draw_text(message, 10.0, y, 16.0, WHITE);
        }
    }

    /// Adds a message to the message history.
    pub fn add_message(&mut self, message: String) {
        self.messages.push(message);

        if self.messages.len() > self.max_messages {
            self.messages.remove(0);
        }
    }
}
