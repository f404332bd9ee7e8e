//! Security measures (activated during setup) and serverless spells
//! (cast during battle).

pub mod measures;
pub mod spells;

pub use measures::{total_effectiveness, SecurityMeasure, Strategy};
pub use spells::{Spell, StatusEffect, StatusKind};
