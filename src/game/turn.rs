//! # Turn Controller
//!
//! Accepts rolls, schedules the resulting movement and resolves landing
//! effects once each animation completes.
//!
//! Resolution is an explicit loop over the current player's cell: a snake or
//! ladder schedules its traversal and the loop resumes when that animation
//! finishes; an extra roll ends the turn without passing it on; a skip flags
//! the next player; a forward bonus schedules more steps; otherwise the win
//! check and turn advance run. Each hop counts against a bound derived from
//! the layout size, so a validated layout always settles.

use super::{DiceRoller, DiceSource, GameEvent, GameSnapshot, GameState, RollResult};
use super::{AnimationView, DiceMode, PlayerMode, RandomDice};
use crate::board::{clamp_cell, BonusKind, BoardLayout, LAST_CELL};
use crate::config::GameConfig;
use crate::movement::{AnimationEngine, MotionPlan, PathPlanner, ScheduleOutcome};
use crate::{SerpentineError, SerpentineResult};
use log::{debug, info, warn};

/// Owns one game: its state, its animation engine and its dice.
#[derive(Debug)]
pub struct TurnController {
    config: GameConfig,
    state: GameState,
    animation: AnimationEngine,
    planner: PathPlanner,
    dice: DiceRoller,
    pending_events: Vec<GameEvent>,
    resolution_hops: usize,
}

impl TurnController {
    /// Starts a game with dice seeded from the operating system.
    ///
    /// Fails with `ConfigError` or `ConfigurationConflict` if `config` does
    /// not validate.
    pub fn initialize(config: GameConfig) -> SerpentineResult<Self> {
        Self::with_dice(config, Box::new(RandomDice::from_entropy()))
    }

    /// Starts a game whose dice are reproducible from `seed`.
    pub fn with_seed(config: GameConfig, seed: u64) -> SerpentineResult<Self> {
        Self::with_dice(config, Box::new(RandomDice::seeded(seed)))
    }

    /// Starts a game drawing die faces from `source`.
    ///
    /// # Examples
    ///
    /// ```
    /// use serpentine::{GameConfig, ScriptedDice, TurnController};
    ///
    /// let dice = ScriptedDice::new(vec![6]).unwrap();
    /// let mut game = TurnController::with_dice(GameConfig::default(), Box::new(dice)).unwrap();
    /// let roll = game.request_roll().unwrap();
    /// assert_eq!(roll.sum, 6);
    /// assert!(game.is_busy());
    /// ```
    pub fn with_dice(config: GameConfig, source: Box<dyn DiceSource>) -> SerpentineResult<Self> {
        config.validate()?;
        info!(
            "Starting game: {:?} dice, {:?} player mode",
            config.dice_mode, config.player_mode
        );

        Ok(Self {
            state: GameState::new(config.dice_mode, config.player_mode),
            animation: AnimationEngine::new(),
            planner: PathPlanner::new(config.snake_segments, config.ladder_rungs),
            dice: DiceRoller::new(source),
            pending_events: Vec::new(),
            resolution_hops: 0,
            config,
        })
    }

    /// The configuration this game was started with.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The board's snakes, ladders and bonus tiles.
    pub fn layout(&self) -> &BoardLayout {
        &self.config.layout
    }

    /// The authoritative game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns true while a move is animating or being resolved.
    pub fn is_busy(&self) -> bool {
        self.animation.is_active()
    }

    /// Rolls for the current player and starts moving their token.
    ///
    /// The target cell is clamped to the last cell. Fails with
    /// `InvalidState` if the game is over or a move is still in progress.
    pub fn request_roll(&mut self) -> SerpentineResult<RollResult> {
        if self.state.game_over {
            warn!("Roll rejected: the game is over");
            return Err(SerpentineError::InvalidState(
                "the game is over; restart to play again".to_string(),
            ));
        }
        if self.is_busy() {
            warn!("Roll rejected: a move is still in progress");
            return Err(SerpentineError::InvalidState(
                "a move is still in progress".to_string(),
            ));
        }

        let roll = self.dice.roll(self.state.dice_mode);
        let player = self.state.current_player;
        let start = self.state.current().position;
        let target = clamp_cell(i32::from(start) + i32::from(roll.sum));
        info!(
            "Player {} rolled {:?} (sum {}): {} -> {}",
            player + 1,
            roll.values,
            roll.sum,
            start,
            target
        );

        self.state.last_roll = Some(roll.clone());
        self.resolution_hops = 0;
        let plan = self.planner.plan_steps(start, target);
        self.start_motion(plan)?;
        Ok(roll)
    }

    /// Advances the game by `dt` seconds and returns what happened.
    ///
    /// `dt` is clamped to the configured maximum frame time; negative or NaN
    /// values count as zero.
    pub fn tick(&mut self, dt: f32) -> SerpentineResult<Vec<GameEvent>> {
        let dt = if dt.is_nan() {
            0.0
        } else {
            dt.clamp(0.0, self.config.max_frame_dt)
        };

        if self.animation.is_active() {
            let player = self.state.current_player;
            let report = self
                .animation
                .tick(dt, &mut self.state.players[player].position);

            self.pending_events
                .extend(report.advanced.iter().map(|step| GameEvent::SegmentAdvanced {
                    player,
                    from: step.from,
                    to: step.to,
                }));

            if report.completed {
                self.resolve_landing()?;
            }
        }

        Ok(std::mem::take(&mut self.pending_events))
    }

    /// Read-only view of the game for rendering.
    pub fn snapshot(&self) -> GameSnapshot {
        let animation = self
            .animation
            .render_position()
            .map(|render_position| AnimationView {
                mode: self.animation.mode(),
                player: self.state.current_player,
                render_position,
            });

        GameSnapshot {
            players: self.state.active_players().to_vec(),
            current_player: self.state.current_player,
            game_over: self.state.game_over,
            winner: self.state.winner,
            dice_mode: self.state.dice_mode,
            player_mode: self.state.player_mode,
            last_roll: self.state.last_roll.clone(),
            animation,
        }
    }

    /// Discards any move in flight and starts a new game.
    ///
    /// Players return to the first cell with no skips pending, the dice go
    /// back to the configured mode and the player mode is kept.
    pub fn restart(&mut self) {
        self.animation.cancel();
        self.state = GameState::new(self.config.dice_mode, self.state.player_mode);
        self.pending_events.clear();
        self.resolution_hops = 0;
        info!("Game restarted");
    }

    /// Switches between one and two players.
    ///
    /// Fails with `InvalidState` while a move is in progress.
    pub fn toggle_two_players(&mut self) -> SerpentineResult<PlayerMode> {
        self.ensure_idle("change the player count")?;
        let mode = self.state.player_mode.toggled();
        self.state.set_player_mode(mode);
        info!("Player mode is now {:?}", mode);
        Ok(mode)
    }

    /// Switches between one and two dice.
    ///
    /// Fails with `InvalidState` while a move is in progress.
    pub fn toggle_double_dice(&mut self) -> SerpentineResult<DiceMode> {
        self.ensure_idle("change the number of dice")?;
        self.state.dice_mode = self.state.dice_mode.toggled();
        info!("Dice mode is now {:?}", self.state.dice_mode);
        Ok(self.state.dice_mode)
    }

    fn ensure_idle(&self, action: &str) -> SerpentineResult<()> {
        if self.is_busy() {
            warn!("Cannot {} while a move is in progress", action);
            return Err(SerpentineError::InvalidState(format!(
                "cannot {} while a move is in progress",
                action
            )));
        }
        Ok(())
    }

    /// Hands a plan to the animation engine; an empty plan resolves at once.
    fn start_motion(&mut self, plan: MotionPlan) -> SerpentineResult<()> {
        match self.animation.schedule(plan, &self.config.speeds)? {
            ScheduleOutcome::Started => Ok(()),
            ScheduleOutcome::CompletedImmediately => self.resolve_landing(),
        }
    }

    /// Applies landing effects on the current player's cell until an
    /// animation is scheduled or the turn is settled.
    fn resolve_landing(&mut self) -> SerpentineResult<()> {
        loop {
            self.resolution_hops += 1;
            if self.resolution_hops > self.config.layout.max_chain_length() {
                return Err(SerpentineError::InvalidState(format!(
                    "landing effects did not settle after {} hops",
                    self.resolution_hops - 1
                )));
            }

            let player = self.state.current_player;
            let cell = self.state.current().position;
            debug!("Resolving landing of player {} on cell {}", player + 1, cell);

            if let Some(link) = self.config.layout.link_at(cell).copied() {
                info!(
                    "Player {} hit {:?} {} -> {}",
                    player + 1,
                    link.kind,
                    link.source,
                    link.destination
                );
                self.pending_events.push(GameEvent::LinkTriggered {
                    player,
                    kind: link.kind,
                    source: link.source,
                    destination: link.destination,
                });
                let plan = self.planner.plan_link(&link);
                match self.animation.schedule(plan, &self.config.speeds)? {
                    ScheduleOutcome::Started => return Ok(()),
                    ScheduleOutcome::CompletedImmediately => continue,
                }
            }

            if let Some(kind) = self.config.layout.bonus_at(cell) {
                info!("Player {} landed on {:?} at {}", player + 1, kind, cell);
                self.pending_events
                    .push(GameEvent::BonusTriggered { player, cell, kind });

                match kind {
                    BonusKind::ExtraRoll => return Ok(()),
                    BonusKind::SkipTurn => {
                        if self.state.player_mode == PlayerMode::Two {
                            let next = self.state.next_player_index();
                            self.state.players[next].skip_next_turn = true;
                        }
                    }
                    BonusKind::ForwardBy(n) => {
                        let target = clamp_cell(i32::from(cell) + i32::from(n));
                        let plan = self.planner.plan_steps(cell, target);
                        match self.animation.schedule(plan, &self.config.speeds)? {
                            ScheduleOutcome::Started => return Ok(()),
                            ScheduleOutcome::CompletedImmediately => continue,
                        }
                    }
                }
            }

            if cell == LAST_CELL {
                self.state.game_over = true;
                self.state.winner = Some(player);
                info!("Player {} wins", player + 1);
                self.pending_events.push(GameEvent::GameWon { player });
                return Ok(());
            }

            let events = self.state.advance_turn();
            self.pending_events.extend(events);
            return Ok(());
        }
    }
}
