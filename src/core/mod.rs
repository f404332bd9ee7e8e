//! Rule constants, configuration, errors and the session engine.

pub mod config;
pub mod constants;
pub mod engine;
pub mod error;

pub use config::GameConfig;
pub use engine::{
    ChargeOutcome, EncounterOutcome, GameEngine, Seat, SessionSummary, Standing, TurnStart,
};
pub use error::{ActionError, ConfigError};
