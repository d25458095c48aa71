//! Server entry points
//!
//! Socket setup and the sequential accept loop.

pub mod listener;
