//! # Path Planning
//!
//! Builds the waypoint sequences tokens follow: square-by-square steps,
//! wavy snake slides and rung-by-rung ladder climbs. Every builder is a pure
//! function of its inputs.

use crate::board::{cell_to_world, Cell, LinkKind, SpecialLink, WorldPoint};
use crate::utils::{fraction, full_wave, half_wave};
use serde::{Deserialize, Serialize};

/// Sideways amplitude of a snake slide, relative to the slide length.
const SNAKE_SWAY: f32 = 0.12;
/// Base height of a sliding token above the board.
const SNAKE_BASE_HEIGHT: f32 = 0.12;
/// Extra height at the middle of a slide.
const SNAKE_BUMP: f32 = 0.08;
/// Height of the first rung.
const LADDER_BASE_HEIGHT: f32 = 0.05;
/// Height gained per rung.
const LADDER_RUNG_RISE: f32 = 0.04;

/// One square of movement between adjacent cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StepMove {
    pub from: Cell,
    pub to: Cell,
}

impl StepMove {
    /// Creates a new step.
    pub fn new(from: Cell, to: Cell) -> Self {
        Self { from, to }
    }
}

/// Returns the unit moves connecting `start` to `end`.
///
/// # Examples
///
/// ```
/// use serpentine::{build_step_path, StepMove};
///
/// let path = build_step_path(4, 6);
/// assert_eq!(path, vec![StepMove::new(4, 5), StepMove::new(5, 6)]);
/// assert!(build_step_path(9, 9).is_empty());
/// ```
pub fn build_step_path(start: Cell, end: Cell) -> Vec<StepMove> {
    if end >= start {
        (start..end).map(|c| StepMove::new(c, c + 1)).collect()
    } else {
        (end + 1..=start).rev().map(|c| StepMove::new(c, c - 1)).collect()
    }
}

/// Returns `segment_count + 1` points sliding from `head` down to `tail`.
///
/// The straight line between the two cells is pushed sideways by one full
/// sine oscillation and lifted by a half-sine bump, so the token weaves as it
/// falls.
pub fn build_snake_curve(head: Cell, tail: Cell, segment_count: usize) -> Vec<WorldPoint> {
    let start = cell_to_world(head);
    let end = cell_to_world(tail);
    let dx = end.x - start.x;
    let dz = end.z - start.z;

    (0..=segment_count)
        .map(|k| {
            let t = fraction(k, segment_count);
            let sway = SNAKE_SWAY * full_wave(t);
            WorldPoint::new(
                start.x + dx * t - dz * sway,
                SNAKE_BASE_HEIGHT + SNAKE_BUMP * half_wave(t),
                start.z + dz * t + dx * sway,
            )
        })
        .collect()
}

/// Returns `rung_count + 1` points climbing from `base` up to `top`.
///
/// The planar position moves linearly while the height rises by a fixed
/// amount per rung.
pub fn build_ladder_path(base: Cell, top: Cell, rung_count: usize) -> Vec<WorldPoint> {
    let start = cell_to_world(base);
    let end = cell_to_world(top);

    (0..=rung_count)
        .map(|rung| {
            let t = fraction(rung, rung_count);
            let mut point = start.lerp(end, t);
            point.y = LADDER_BASE_HEIGHT + LADDER_RUNG_RISE * rung as f32;
            point
        })
        .collect()
}

/// A fully planned movement, ready to hand to the animation engine.
#[derive(Debug, Clone, PartialEq)]
pub enum MotionPlan {
    /// Square-by-square movement
    Steps(Vec<StepMove>),
    /// Slide along a snake
    SnakeTraversal(Vec<WorldPoint>),
    /// Climb up a ladder
    LadderClimb(Vec<WorldPoint>),
}

impl MotionPlan {
    /// Returns true if the plan has nothing to animate.
    pub fn is_empty(&self) -> bool {
        match self {
            MotionPlan::Steps(moves) => moves.is_empty(),
            MotionPlan::SnakeTraversal(points) | MotionPlan::LadderClimb(points) => {
                points.is_empty()
            }
        }
    }
}

/// Turns movement requests into [`MotionPlan`]s with a fixed path resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathPlanner {
    pub snake_segments: usize,
    pub ladder_rungs: usize,
}

impl PathPlanner {
    /// Creates a planner with the given snake and ladder resolution.
    pub fn new(snake_segments: usize, ladder_rungs: usize) -> Self {
        Self {
            snake_segments,
            ladder_rungs,
        }
    }

    /// Plans square-by-square movement.
    pub fn plan_steps(&self, start: Cell, end: Cell) -> MotionPlan {
        MotionPlan::Steps(build_step_path(start, end))
    }

    /// Plans the traversal of a snake or ladder.
    pub fn plan_link(&self, link: &SpecialLink) -> MotionPlan {
        match link.kind {
            LinkKind::Snake => MotionPlan::SnakeTraversal(build_snake_curve(
                link.source,
                link.destination,
                self.snake_segments,
            )),
            LinkKind::Ladder => MotionPlan::LadderClimb(build_ladder_path(
                link.source,
                link.destination,
                self.ladder_rungs,
            )),
        }
    }
}
