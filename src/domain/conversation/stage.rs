//! Conversation stages.
//!
//! Stages are ordered: a conversation normally moves
//! `Initial` → `BuildingRapport` → `Advancing` → `Closing`.
//! The stage selects the prompt guidance and the generation temperature.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered phase of a conversation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// First impression; the conversation has barely started.
    #[default]
    Initial,
    /// Getting to know each other.
    BuildingRapport,
    /// Rapport exists; steering toward the goal.
    Advancing,
    /// Ready to attempt the goal.
    Closing,
}

impl Stage {
    /// All stages, in conversation order.
    pub const ALL: [Stage; 4] = [
        Stage::Initial,
        Stage::BuildingRapport,
        Stage::Advancing,
        Stage::Closing,
    ];

    /// Contribution of the stage to goal progress.
    pub fn weight(&self) -> f64 {
        match self {
            Self::Initial => 0.25,
            Self::BuildingRapport => 0.5,
            Self::Advancing => 0.75,
            Self::Closing => 1.0,
        }
    }

    /// Wire name of the stage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Initial => "initial",
            Self::BuildingRapport => "building_rapport",
            Self::Advancing => "advancing",
            Self::Closing => "closing",
        }
    }

    /// Returns true once no later stage exists.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Closing)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
