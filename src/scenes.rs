//! # Scene Management System
//!
//! Drives one frame at a time: read input, forward it to the turn
//! controller, advance animation by the frame time, report events and draw.

use crate::{
    GameEvent, InputHandler, MacroquadDisplay, PlayerInput, SerpentineResult, TurnController,
};
use log::{debug, warn};
use macroquad::prelude::*;

/// Represents the current scene in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneType {
    /// Normal gameplay
    Playing,
    /// Someone reached the last square
    GameOver { winner: usize },
}

/// The main scene manager that coordinates all game scenes
pub struct SceneManager {
    current_scene: SceneType,
    controller: TurnController,
    display: MacroquadDisplay,
    input_handler: InputHandler,
}

impl SceneManager {
    /// Creates a new scene manager around a ready game.
    pub fn new(controller: TurnController, input_handler: InputHandler) -> SerpentineResult<Self> {
        let mut display = MacroquadDisplay::new()?;
        display.add_message("Welcome to Snakes & Ladders!".to_string());
        display.add_message("Press SPACE to roll, F1 for help".to_string());

        Ok(Self {
            current_scene: SceneType::Playing,
            controller,
            display,
            input_handler,
        })
    }

    /// Runs the main scene loop until the game exits
    pub async fn run(&mut self) -> SerpentineResult<()> {
        loop {
            let exit = match self.current_scene {
                SceneType::Playing => self.update_playing_scene()?,
                SceneType::GameOver { winner } => self.update_game_over_scene(winner)?,
            };
            if exit {
                break;
            }
            next_frame().await;
        }
        Ok(())
    }

    /// Updates the playing scene, returns true if exit is requested
    fn update_playing_scene(&mut self) -> SerpentineResult<bool> {
        if let Some(input) = self.input_handler.get_input() {
            if self.handle_input(input) {
                return Ok(true);
            }
        }

        let dt = get_frame_time().min(self.controller.config().max_frame_dt);
        let events = self.controller.tick(dt)?;
        self.process_game_events(&events);

        if let Some(winner) = self.controller.state().winner {
            self.current_scene = SceneType::GameOver { winner };
        }

        self.render();
        Ok(false)
    }

    /// Updates the game over scene, returns true if exit is requested
    fn update_game_over_scene(&mut self, winner: usize) -> SerpentineResult<bool> {
        match self.input_handler.get_input() {
            Some(PlayerInput::Quit) => return Ok(true),
            Some(PlayerInput::Restart) => {
                self.restart();
            }
            Some(PlayerInput::Roll) => {
                self.display
                    .add_message(format!("Player {} already won. Press R to restart", winner + 1));
            }
            _ => {}
        }

        self.render();
        Ok(false)
    }

    /// Applies one command; returns true if exit is requested.
    fn handle_input(&mut self, input: PlayerInput) -> bool {
        debug!("Input: {:?}", input);
        let result = match input {
            PlayerInput::Quit => return true,
            PlayerInput::Help => {
                self.display.add_message(
                    "Help: SPACE=roll, R=restart, P=players, D=dice, ESC=quit".to_string(),
                );
                Ok(())
            }
            PlayerInput::Roll => {
                let player = self.controller.state().current_player;
                self.controller.request_roll().map(|roll| {
                    let faces: Vec<String> = roll.values.iter().map(u8::to_string).collect();
                    self.display.add_message(format!(
                        "Player {} rolled {} ({})",
                        player + 1,
                        roll.sum,
                        faces.join(" + ")
                    ));
                })
            }
            PlayerInput::Restart => {
                self.restart();
                Ok(())
            }
            PlayerInput::TogglePlayers => self.controller.toggle_two_players().map(|mode| {
                self.display.add_message(format!("{} player(s)", mode.count()));
            }),
            PlayerInput::ToggleDice => self.controller.toggle_double_dice().map(|mode| {
                self.display.add_message(format!("Rolling {} dice", mode.count()));
            }),
        };

        if let Err(e) = result {
            warn!("Command {:?} rejected: {}", input, e);
            self.display.add_message(format!("Not now: {}", e));
        }
        false
    }

    /// Turns game events into log lines and messages.
    fn process_game_events(&mut self, events: &[GameEvent]) {
        for event in events {
            debug!("Event: {:?}", event);
            // Single steps are too chatty for the message log.
            if !matches!(event, GameEvent::SegmentAdvanced { .. }) {
                self.display.add_message(event.describe());
            }
        }
    }

    fn restart(&mut self) {
        self.controller.restart();
        self.current_scene = SceneType::Playing;
        self.display.add_message("New game started!".to_string());
    }

    fn render(&self) {
        let snapshot = self.controller.snapshot();
        self.display.render_game(&snapshot, self.controller.layout());
    }
}
