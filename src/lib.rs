//! Cloud Defender - a turn-based cloud security board game.
//!
//! The rule engine lives in [`core::GameEngine`]; [`console::ConsoleGame`]
//! drives it from any line-oriented reader and writer.

pub mod board;
pub mod build_info;
pub mod catalog;
pub mod character;
pub mod combat;
pub mod console;
pub mod core;
pub mod security;
