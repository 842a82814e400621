//! IBMF Core
//!
//! Shared plumbing for the IBMF layout crates: logging, profiling,
//! hash collections, 26.6 fixed-point arithmetic and integer geometry.

pub mod alloc;
pub mod config;
pub mod fixed;
pub mod geometry;
pub mod logging;
pub mod profiling;

pub use fixed::Fix16;
pub use geometry::{Pos, Rect, Size};
