//! The common helpers used across debut trax apps: emptiness checks,
//! float comparisons that survive rounding error, and OS version checks.
#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod empty;
pub mod float;
pub mod version;

pub use empty::{is_empty, Emptiness};
pub use float::{nearly_equal, nearly_zero, EPSILON};
pub use version::{StaticSystem, SystemInfo, Version};
