//! Virtual on-screen gamepad for touch-only devices.
//!
//! Raw touch points are hit-tested against a direction pad, circular action
//! buttons and a menu panel of rectangular buttons, and turned into the same
//! held/changed button state and directional flags a physical controller
//! would report.

pub mod error;
pub mod geometry;

#[cfg(feature = "virtual-gamepad")]
pub mod touch;

pub use error::{GamepadError, Result};
