//! # Animation Engine
//!
//! Advances one planned movement at a time over elapsed frame time.
//!
//! Step animations commit each square to the token's position as soon as it
//! is crossed. Snake and ladder animations move along their waypoints as a
//! single scalar and only commit a cell when the final waypoint is reached,
//! by snapping it to the nearest cell.

use super::{MotionPlan, StepMove};
use crate::board::{cell_to_world, Cell, CellLookup, WorldPoint};
use crate::{SerpentineError, SerpentineResult};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// What the engine is currently animating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnimationMode {
    Idle,
    Steps,
    SnakeTraversal,
    LadderClimb,
}

/// Animation rates, independently tunable per movement kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeedProfile {
    /// Squares per second
    pub step_speed: f32,
    /// Complete snake slides per second
    pub snake_rate: f32,
    /// Complete ladder climbs per second
    pub ladder_rate: f32,
}

impl Default for SpeedProfile {
    fn default() -> Self {
        Self {
            step_speed: 2.5,
            snake_rate: 1.4,
            ladder_rate: 2.2,
        }
    }
}

impl SpeedProfile {
    /// Returns the progress rate used for `mode`.
    pub fn rate_for(&self, mode: AnimationMode) -> f32 {
        match mode {
            AnimationMode::Idle => 0.0,
            AnimationMode::Steps => self.step_speed,
            AnimationMode::SnakeTraversal => self.snake_rate,
            AnimationMode::LadderClimb => self.ladder_rate,
        }
    }

    /// Returns true if every rate is a positive finite number.
    pub fn is_valid(&self) -> bool {
        [self.step_speed, self.snake_rate, self.ladder_rate]
            .iter()
            .all(|rate| rate.is_finite() && *rate > 0.0)
    }
}

/// Result of scheduling a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleOutcome {
    /// The animation is running and will complete on a later tick
    Started,
    /// The plan was empty; nothing changed and nothing is running
    CompletedImmediately,
}

/// What happened during one call to [`AnimationEngine::tick`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnimationTick {
    /// Squares committed during this tick, in order
    pub advanced: Vec<StepMove>,
    /// True if the animation finished and the engine is idle again
    pub completed: bool,
}

#[derive(Debug, Clone)]
enum AnimationState {
    Idle,
    Steps {
        moves: VecDeque<StepMove>,
        progress: f32,
        speed: f32,
    },
    Traversal {
        mode: AnimationMode,
        waypoints: Vec<WorldPoint>,
        progress: f32,
        speed: f32,
    },
}

/// Runs at most one animation at a time.
#[derive(Debug, Clone)]
pub struct AnimationEngine {
    state: AnimationState,
    lookup: CellLookup,
}

impl Default for AnimationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationEngine {
    /// Creates an idle engine and precomputes the cell lookup.
    pub fn new() -> Self {
        Self {
            state: AnimationState::Idle,
            lookup: CellLookup::new(),
        }
    }

    /// Returns the current mode.
    pub fn mode(&self) -> AnimationMode {
        match &self.state {
            AnimationState::Idle => AnimationMode::Idle,
            AnimationState::Steps { .. } => AnimationMode::Steps,
            AnimationState::Traversal { mode, .. } => *mode,
        }
    }

    /// Returns true while an animation is in flight.
    pub fn is_active(&self) -> bool {
        !matches!(self.state, AnimationState::Idle)
    }

    /// Returns progress within the current segment (steps) or along the
    /// whole path (snakes and ladders).
    pub fn progress(&self) -> f32 {
        match &self.state {
            AnimationState::Idle => 0.0,
            AnimationState::Steps { progress, .. } | AnimationState::Traversal { progress, .. } => {
                *progress
            }
        }
    }

    /// Starts animating `plan` from progress 0.
    ///
    /// Fails with `InvalidState` if another animation is still running. An
    /// empty plan leaves the engine idle and reports immediate completion.
    pub fn schedule(
        &mut self,
        plan: MotionPlan,
        speeds: &SpeedProfile,
    ) -> SerpentineResult<ScheduleOutcome> {
        if self.is_active() {
            return Err(SerpentineError::InvalidState(format!(
                "cannot schedule a new animation while {:?} is running",
                self.mode()
            )));
        }
        if plan.is_empty() {
            debug!("Empty motion plan completes immediately");
            return Ok(ScheduleOutcome::CompletedImmediately);
        }

        self.state = match plan {
            MotionPlan::Steps(moves) => AnimationState::Steps {
                moves: moves.into(),
                progress: 0.0,
                speed: speeds.rate_for(AnimationMode::Steps),
            },
            MotionPlan::SnakeTraversal(waypoints) => AnimationState::Traversal {
                mode: AnimationMode::SnakeTraversal,
                waypoints,
                progress: 0.0,
                speed: speeds.rate_for(AnimationMode::SnakeTraversal),
            },
            MotionPlan::LadderClimb(waypoints) => AnimationState::Traversal {
                mode: AnimationMode::LadderClimb,
                waypoints,
                progress: 0.0,
                speed: speeds.rate_for(AnimationMode::LadderClimb),
            },
        };
        debug!("Scheduled {:?} animation", self.mode());
        Ok(ScheduleOutcome::Started)
    }

    /// Advances the running animation by `dt` seconds, committing cells to
    /// `position` as they are reached.
    pub fn tick(&mut self, dt: f32, position: &mut Cell) -> AnimationTick {
        let mut report = AnimationTick::default();

        let finished = match &mut self.state {
            AnimationState::Idle => return report,
            AnimationState::Steps {
                moves,
                progress,
                speed,
            } => {
                *progress += *speed * dt;
                while *progress >= 1.0 {
                    let Some(step) = moves.pop_front() else {
                        break;
                    };
                    *position = step.to;
                    *progress -= 1.0;
                    report.advanced.push(step);
                }
                moves.is_empty()
            }
            AnimationState::Traversal {
                waypoints,
                progress,
                speed,
                ..
            } => {
                *progress += *speed * dt;
                let last = waypoints.len().saturating_sub(1) as f32;
                if *progress * last >= last {
                    if let Some(end) = waypoints.last() {
                        *position = self.lookup.nearest_cell(*end);
                    }
                    true
                } else {
                    false
                }
            }
        };

        if finished {
            debug!("{:?} animation finished at cell {}", self.mode(), position);
            self.state = AnimationState::Idle;
            report.completed = true;
        }
        report
    }

    /// Interpolated token position for rendering, or `None` when idle.
    pub fn render_position(&self) -> Option<WorldPoint> {
        match &self.state {
            AnimationState::Idle => None,
            AnimationState::Steps {
                moves, progress, ..
            } => moves
                .front()
                .map(|step| cell_to_world(step.from).lerp(cell_to_world(step.to), *progress)),
            AnimationState::Traversal {
                waypoints,
                progress,
                ..
            } => {
                let last = waypoints.len().checked_sub(1)?;
                let index = (*progress * last as f32).clamp(0.0, last as f32);
                let i0 = index.floor() as usize;
                let i1 = (i0 + 1).min(last);
                Some(waypoints[i0].lerp(waypoints[i1], index - i0 as f32))
            }
        }
    }

    /// Drops any running animation without committing anything.
    pub fn cancel(&mut self) {
        if self.is_active() {
            debug!("Cancelled {:?} animation", self.mode());
        }
        self.state = AnimationState::Idle;
    }
}
