//! Lemonade - Terminal Lemonade Stand Library
//!
//! A single-screen terminal demo that walks through making lemonade, built in Rust.

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

pub use domain::*;
pub use application::*;
