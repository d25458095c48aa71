//! Static file serving
//!
//! This module implements the core file-serving logic: confining request
//! paths to the web root and turning GET requests into file responses.

pub mod handler;
pub mod resolver;

pub use handler::StaticHandler;
pub use resolver::{PathResolver, ResolveError};
