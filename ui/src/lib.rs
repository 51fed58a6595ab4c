//! The common UI helpers used across debut trax apps.
#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod color;
pub mod screen;

pub use color::{ColorFactory, ParseColorError, Rgba};
pub use screen::{is_retina, is_retina_legacy, FixedScreen, Screen};
