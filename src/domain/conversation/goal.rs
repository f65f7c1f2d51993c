//! Conversation goals.
//!
//! The goal is chosen when a conversation is created and never reassigned
//! by the engine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The objective the assistant steers a conversation toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Goal {
    /// Exchange phone numbers and move off the dating platform.
    GetPhoneNumber,
    /// Agree on a concrete date.
    SetDate,
    /// Ask the match out.
    AskOut,
    /// Keep the conversation going and deepen the connection.
    #[default]
    BuildRapport,
}

impl Goal {
    /// All goals, in declaration order.
    pub const ALL: [Goal; 4] = [
        Goal::GetPhoneNumber,
        Goal::SetDate,
        Goal::AskOut,
        Goal::BuildRapport,
    ];

    /// Wire name of the goal, as used in the external representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GetPhoneNumber => "GET_PHONE_NUMBER",
            Self::SetDate => "SET_DATE",
            Self::AskOut => "ASK_OUT",
            Self::BuildRapport => "BUILD_RAPPORT",
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_goal_is_build_rapport() {
        assert_eq!(Goal::default(), Goal::BuildRapport);
    }

    #[test]
    fn serializes_to_screaming_snake_case() {
        let json = serde_json::to_string(&Goal::GetPhoneNumber).unwrap();
        assert_eq!(json, "\"GET_PHONE_NUMBER\"");
    }

    #[test]
    fn display_matches_wire_name() {
        for goal in Goal::ALL {
            let json = serde_json::to_string(&goal).unwrap();
            assert_eq!(json, format!("\"{}\"", goal));
        }
    }

    #[test]
    fn rejects_unknown_goal() {
        assert!(serde_json::from_str::<Goal>("\"MARRY\"").is_err());
    }
}
