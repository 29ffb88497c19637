#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Pattern`**: A named LED behavior, numbered the way the host driver sends it
//! - **`Frame`**: One packed LED state + how many ticks to hold it
//! - **`Animation`**: A frame sequence plus how many cycles to play and which pattern follows
//! - **`Catalog`**: The fixed pattern-to-animation tables for 1 and 4 LED boards
//! - **`LedHandler`**: Plays patterns, follows animation links and tracks the previous pattern
//! - **`LedOutput`**: Trait to implement for your LED hardware
//! - **`IndividualPins`**: `LedOutput` for one `embedded-hal` output pin per LED
//! - **`TimeSource`**: Trait to implement for your timing system
//! - **`LedAction`**: Commands that can be sent to control a handler
//!
//! One tick is [`TICK_MILLIS`] milliseconds. Patterns that arrive as raw host
//! bytes are decoded with [`Pattern::from_wire`]; bytes past `Alternating`
//! are ignored by the handler rather than reported.

mod logging;

pub mod time;
pub mod types;
pub mod animation;
pub mod catalog;
pub mod handler;
pub mod command;
pub mod pins;

pub use animation::{Animation, ServiceTiming};
pub use catalog::Catalog;
pub use command::LedAction;
pub use handler::{LedHandler, LedOutput};
pub use pins::IndividualPins;
pub use time::{TimeDuration, TimeInstant, TimeSource};
pub use types::{Frame, Pattern, PatternError, TICK_MILLIS};

#[cfg(feature = "std")]
pub use time::{StdClock, StdInstant};
