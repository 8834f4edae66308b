//! Simulation of the two-robot joust down the corridor.
//!
//! The loop owns both robot states and the board. Each tick it tests for a
//! collision on the current positions, then advances each robot in turn,
//! stopping when the robots touch, when one of them crosses a side wall, or
//! when the tick ceiling fires on a scenario that would never terminate.

use std::{fmt, time::Duration};

use tracing::info;

use crate::domain::{Board, HasCollision, Robot, Side, StepOutcome};

/// Length of one simulation tick, in milliseconds.
const TICK_INTERVAL_MS: u64 = 1;

/// Ticks simulated before giving up on a scenario that will never resolve,
/// such as two robots shuttling vertically forever.
const DEFAULT_TICK_LIMIT: u64 = 1_000_000_000;

/// Parsed scenario: board dimensions in whole metres plus the launch
/// parameters of both robots, in the units scenario files are authored in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationConfig {
    pub board_width: u32,
    pub board_height: u32,
    pub left: Launch,
    pub right: Launch,
}

/// Launch angle in degrees, clockwise from horizontal, and speed in metres
/// per second.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Launch {
    pub angle_deg: f64,
    pub speed_m_per_s: f64,
}

pub struct Simulation {
    board: Board,
    left: Robot,
    right: Robot,
    tick_limit: u64,
}

impl Simulation {
    pub fn new(config: &SimulationConfig) -> Self {
        let board = Board::new(
            f64::from(config.board_width),
            f64::from(config.board_height),
        );
        Self {
            left: Robot::launch(
                Side::Left,
                config.left.angle_deg,
                config.left.speed_m_per_s,
                &board,
            ),
            right: Robot::launch(
                Side::Right,
                config.right.angle_deg,
                config.right.speed_m_per_s,
                &board,
            ),
            board,
            tick_limit: DEFAULT_TICK_LIMIT,
        }
    }

    /// Replaces the default tick ceiling.
    pub fn with_tick_limit(self, tick_limit: u64) -> Self {
        Self { tick_limit, ..self }
    }

    pub fn run(mut self) -> SimulationResult {
        let mut elapsed_ms = 0;

        let outcome = loop {
            // Tested before any stepping, so robots spawned in contact
            // collide at elapsed time zero.
            if self.left.has_collision(&self.right) {
                break Outcome::Collision {
                    winner: self.winner(),
                };
            }
            if elapsed_ms >= self.tick_limit {
                break Outcome::Inconclusive;
            }
            if self.left.step(&self.board, TICK_INTERVAL_MS) == StepOutcome::Exited {
                break Outcome::NoCollision;
            }
            if self.right.step(&self.board, TICK_INTERVAL_MS) == StepOutcome::Exited {
                break Outcome::NoCollision;
            }
            elapsed_ms += TICK_INTERVAL_MS;
        };

        info!(?outcome, elapsed_ms, "simulation finished");

        SimulationResult {
            elapsed: Duration::from_millis(elapsed_ms),
            outcome,
        }
    }

    /// The robot with the strictly larger residual speed wins; an exact tie
    /// goes to the right robot.
    fn winner(&self) -> Side {
        if self.left.speed().magnitude() > self.right.speed().magnitude() {
            Side::Left
        } else {
            Side::Right
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationResult {
    elapsed: Duration,
    outcome: Outcome,
}

impl SimulationResult {
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }
}

impl fmt::Display for SimulationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let seconds = self.elapsed.as_secs_f64();
        match self.outcome {
            Outcome::Collision {
                winner: Side::Left,
            } => write!(f, "Left robot wins at {seconds:.6} seconds"),
            Outcome::Collision {
                winner: Side::Right,
            } => write!(f, "Right robot wins at {seconds:.6} seconds"),
            Outcome::NoCollision => write!(f, "No winner found"),
            Outcome::Inconclusive => {
                write!(f, "No outcome within {seconds:.6} simulated seconds")
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Outcome {
    Collision { winner: Side },
    NoCollision,
    Inconclusive,
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use approx::assert_abs_diff_eq;
    use pretty_assertions::assert_eq;

    use super::*;

    fn config(
        board_width: u32,
        board_height: u32,
        left: (f64, f64),
        right: (f64, f64),
    ) -> SimulationConfig {
        SimulationConfig {
            board_width,
            board_height,
            left: Launch {
                angle_deg: left.0,
                speed_m_per_s: left.1,
            },
            right: Launch {
                angle_deg: right.0,
                speed_m_per_s: right.1,
            },
        }
    }

    #[test]
    fn test_immediate_collision_on_contact_spawn() {
        // On a one-metre board the robots spawn exactly in contact, so the
        // loop never steps, whatever the headings and speeds.
        let result = Simulation::new(&config(1, 2, (45.0, 3.0), (10.0, 1.0))).run();
        assert_eq!(
            result.outcome(),
            Outcome::Collision {
                winner: Side::Left
            }
        );
        assert_eq!(result.elapsed(), Duration::ZERO);
    }

    #[test]
    fn test_tie_goes_to_the_right_robot() {
        let result = Simulation::new(&config(1, 2, (0.0, 1.0), (0.0, 1.0))).run();
        assert_eq!(
            result.outcome(),
            Outcome::Collision {
                winner: Side::Right
            }
        );
        insta::assert_snapshot!(result.to_string(), @"Right robot wins at 0.000000 seconds");
    }

    #[test]
    fn test_faster_robot_wins() {
        let result = Simulation::new(&config(10, 2, (0.0, 2.0), (0.0, 1.0))).run();
        assert_eq!(
            result.outcome(),
            Outcome::Collision {
                winner: Side::Left
            }
        );
        // The gap of nine metres closes at three micrometres per tick.
        assert_abs_diff_eq!(result.elapsed().as_secs_f64(), 3_000.0, epsilon = 0.01);
    }

    #[test]
    fn test_head_on_joust_down_the_centerline() {
        let result = Simulation::new(&config(10, 2, (0.0, 1.0), (0.0, 1.0))).run();
        assert_eq!(
            result.outcome(),
            Outcome::Collision {
                winner: Side::Right
            }
        );
        assert_abs_diff_eq!(result.elapsed().as_secs_f64(), 4_500.0, epsilon = 0.01);
    }

    #[test]
    fn test_side_wall_exit_reports_no_winner() {
        // The left robot is aimed straight back at its own wall.
        let result = Simulation::new(&config(10, 2, (180.0, 1.0), (0.0, 1.0))).run();
        assert_eq!(result.outcome(), Outcome::NoCollision);
        assert_eq!(result.elapsed(), Duration::ZERO);
        insta::assert_snapshot!(result.to_string(), @"No winner found");
    }

    #[test]
    fn test_vertical_shuttling_hits_the_tick_ceiling() {
        // Both robots head straight for the horizontal walls and never
        // approach each other.
        let result = Simulation::new(&config(10, 2, (90.0, 1.0), (90.0, 1.0)))
            .with_tick_limit(10_000)
            .run();
        assert_eq!(result.outcome(), Outcome::Inconclusive);
        assert_eq!(result.elapsed(), Duration::from_millis(10_000));
        insta::assert_snapshot!(
            result.to_string(),
            @"No outcome within 10.000000 simulated seconds"
        );
    }

    #[test]
    fn test_collision_beats_tick_ceiling() {
        let result = Simulation::new(&config(1, 2, (0.0, 1.0), (0.0, 1.0)))
            .with_tick_limit(0)
            .run();
        assert_eq!(
            result.outcome(),
            Outcome::Collision {
                winner: Side::Right
            }
        );
    }
}
