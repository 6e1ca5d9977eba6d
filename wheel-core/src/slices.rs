use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::geometry::slice_arc;

/// Display family for a resolved spin or a notification.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

/// One wedge of the wheel.
///
/// The label is what gets painted on the wedge; the payout is parsed from
/// it once, up front. A non-numeric label (the default wheel ships a
/// "Zero" wedge) is an informational sentinel: it pays nothing and
/// resolves with a neutral result instead of a win or a loss.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Slice {
    pub label: String,
    pub payout: Option<i64>,
}

impl Slice {
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        let payout = label.trim().parse::<i64>().ok();
        Self { label, payout }
    }

    pub fn sentiment(&self) -> Sentiment {
        match self.payout {
            Some(amount) if amount < 0 => Sentiment::Negative,
            Some(_) => Sentiment::Positive,
            None => Sentiment::Neutral,
        }
    }
}

/// The wheel's wedges in fixed order. Order never changes for the
/// lifetime of a wheel instance; the slice under the pointer is derived
/// from the rotation alone.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SliceSet {
    slices: Vec<Slice>,
}

impl SliceSet {
    pub fn from_labels<S: AsRef<str>>(labels: &[S]) -> Result<Self, ConfigError> {
        if labels.is_empty() {
            return Err(ConfigError::EmptySliceSet);
        }
        Ok(Self {
            slices: labels.iter().map(|label| Slice::new(label.as_ref())).collect(),
        })
    }

    pub fn len(&self) -> usize {
        self.slices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// Angular width of each wedge.
    pub fn arc(&self) -> f64 {
        slice_arc(self.slices.len())
    }

    pub fn get(&self, index: usize) -> &Slice {
        &self.slices[index]
    }

    /// First slice whose label matches exactly, for rig lookups.
    pub fn position_of_label(&self, label: &str) -> Option<usize> {
        self.slices.iter().position(|slice| slice.label == label)
    }

    pub fn as_slice(&self) -> &[Slice] {
        &self.slices
    }
}
