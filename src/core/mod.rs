//! Core building blocks shared by every other module: math, errors, logging.

pub mod error;
pub mod logging;
pub mod vec2;

pub use error::{Error, Result};
pub use vec2::Vec2;
