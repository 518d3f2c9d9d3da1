//! Core carousel logic – gesture tracking, parallax, and the slide state machine.
//!
//! Nothing in this module depends on any TUI or rendering crate.  The
//! presentation layer is reached only through the traits in [`stage`].

pub mod deck;
pub mod geometry;
pub mod gesture;
pub mod indicator;
pub mod palette;
pub mod parallax;
pub mod slider;
pub mod stage;

#[cfg(test)]
pub mod testing;
