//! Filesystem utilities for lsedit.
//!
//! Settings are persisted with atomic writes so an interrupted save never
//! leaves a truncated settings file behind.

pub mod atomic;

pub use atomic::{atomic_write, atomic_write_file};
