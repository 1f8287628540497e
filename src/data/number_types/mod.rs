//! # Number types
//!
//! The solver is generic over the floating point type it computes with. This module defines the
//! requirements on that type.
//!
//! Floating point arithmetic accumulates rounding errors, so every comparison the algorithm makes
//! goes through a single tolerance. A sane default for that tolerance is provided per type.
pub mod traits;
