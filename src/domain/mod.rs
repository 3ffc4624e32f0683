//! Domain layer holding the lemonade step machine and its display resources.
//!
//! This module contains the four-step state machine, the advance transition,
//! and the prompt/art resource model the presentation layer renders from.

pub mod models;
pub mod services;

pub use models::*;
pub use services::*;
