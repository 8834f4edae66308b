//! Corridor robot joust simulator.
//!
//! Two point-like robots launch toward each other down a rectangular
//! corridor, bouncing off the top and bottom walls with a 10% speed loss per
//! contact. The simulation advances in fixed one-millisecond ticks and
//! resolves to a collision (reporting the faster robot as the winner), a
//! side-wall exit with no winner, or an inconclusive cutoff on scenarios
//! that would never terminate.
//!
//! [`simulation::Simulation`] is the core entry point: it consumes a
//! [`simulation::SimulationConfig`] — typically parsed from a scenario file
//! by [`input`] — and produces a [`simulation::SimulationResult`].

pub mod domain;
pub mod input;
pub mod simulation;
