use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::slices::SliceSet;

/// Everything a wheel instance is given at construction time. There is
/// no other way to feed state in: no globals, no persistence, so several
/// independent wheels can coexist in one page.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct WheelConfig {
    /// Payout labels in wedge order. Numeric labels are signed payouts,
    /// anything else is an informational "no payout" wedge.
    pub slices: Vec<String>,
    /// Forced winners for the first spins, consumed strictly in order.
    pub rig_sequence: Vec<String>,
    /// Total spins allowed for this instance. Never replenished.
    pub max_spins: u32,
    /// Length of one spin animation.
    pub spin_duration_ms: u32,
    /// Fixed time credited to the animation per tick.
    pub tick_interval_ms: u32,
    /// Delay between unit steps of the winnings count-up.
    pub count_step_delay_ms: u32,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            // Strictly alternating loss/win wedges plus one informational
            // "Zero" wedge, colored by sign at render time.
            slices: [
                "-50", "100", "-100", "200", "-200", "250", "-300", "1000", "-500", "Zero",
            ]
            .map(String::from)
            .to_vec(),
            rig_sequence: ["100", "-50", "250"].map(String::from).to_vec(),
            max_spins: 3,
            spin_duration_ms: 10_000,
            tick_interval_ms: 30,
            count_step_delay_ms: 10,
        }
    }
}

impl WheelConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.slices.is_empty() {
            return Err(ConfigError::EmptySliceSet);
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        Ok(())
    }

    pub fn slice_set(&self) -> Result<SliceSet, ConfigError> {
        SliceSet::from_labels(&self.slices)
    }
}
