//! Core domain types for the letter grid
//!
//! This module contains the fundamental domain types with zero external
//! dependencies beyond the RNG used for board generation. All types here are
//! pure and have clear geometric properties.

mod grid;

pub use grid::{Grid, GridError, NEIGHBOR_OFFSETS};
