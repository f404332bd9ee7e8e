//! Line-based console front-end.

mod driver;
pub mod prompt;

pub use driver::ConsoleGame;

use crate::core::ActionError;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("input closed")]
    InputClosed,
    #[error(transparent)]
    Rules(#[from] ActionError),
}
