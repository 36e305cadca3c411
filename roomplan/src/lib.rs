//! Data model and scoring for rectangular furniture layouts.
//!
//! A room is an axis-aligned rectangle with its origin in one corner. Every piece of furniture is an
//! axis-aligned rectangle described by a [`FurnitureSpec`](entities::FurnitureSpec).
//! A [`Layout`](entities::Layout) assigns a position and rotation to every piece and is scored by the
//! [`Evaluator`](eval::Evaluator).
//!
//! This crate contains no randomness. Searching for good layouts is done by the `glo` crate.

/// Entities to model furniture layout problems
pub mod entities;

/// Error types reported at the input boundary
pub mod error;

/// Fitness evaluation of layouts
pub mod eval;

/// Geometric primitives
pub mod geometry;

/// Importing and exporting problem instances and solutions
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;

#[doc(inline)]
pub use error::InvalidInput;
