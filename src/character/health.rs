use crate::core::constants::{CAUTION_HEALTH_PERCENT, SAFE_HEALTH_PERCENT};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse health band derived from the current/max ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SecurityStatus {
    Safe,
    Caution,
    Danger,
}

impl SecurityStatus {
    pub fn from_health(current: u32, max: u32) -> Self {
        // Integer comparison keeps the 75% and 40% boundaries exact.
        let scaled = current as u64 * 100;
        if scaled >= max as u64 * SAFE_HEALTH_PERCENT as u64 {
            SecurityStatus::Safe
        } else if scaled >= max as u64 * CAUTION_HEALTH_PERCENT as u64 {
            SecurityStatus::Caution
        } else {
            SecurityStatus::Danger
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SecurityStatus::Safe => "Safe",
            SecurityStatus::Caution => "Caution",
            SecurityStatus::Danger => "Danger",
        }
    }
}

impl fmt::Display for SecurityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Current health clamped to `[0, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthPool {
    current: u32,
    max: u32,
}

impl HealthPool {
    pub fn full(max: u32) -> Self {
        Self { current: max, max }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn is_alive(&self) -> bool {
        self.current > 0
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.current = self.current.saturating_sub(amount);
    }

    pub fn heal(&mut self, amount: u32) {
        self.current = self.current.saturating_add(amount).min(self.max);
    }

    pub fn restore(&mut self) {
        self.current = self.max;
    }

    /// Changes the maximum, capping current health if it now exceeds it.
    pub fn set_max(&mut self, max: u32) {
        self.max = max;
        if self.current > max {
            self.current = max;
        }
    }

    pub fn security_status(&self) -> SecurityStatus {
        SecurityStatus::from_health(self.current, self.max)
    }
}
