//! # Icon Identifiers
//!
//! An explicit enum of the icon identifiers the taxonomy and rating criteria
//! reference. Free-form icon-name strings would let a typo ship silently;
//! here every supported icon is a variant with a stable string token, and
//! rendering is left to whichever icon set the presentation layer injects.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Supported icon identifiers.
///
/// Serialized as the stable token (e.g. `"restaurant"`), never as an enum
/// ordinal, so persisted taxonomy documents stay readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconId {
    Restaurant,
    Cafe,
    Scissors,
    HeartPulse,
    Wrench,
    Car,
    ShoppingBag,
    RoomService,
    Sparkles,
    Coin,
    Clock,
    Star,
    Leaf,
    Handshake,
}

impl IconId {
    /// Returns the stable string token for this icon.
    pub fn as_token(&self) -> &'static str {
        match self {
            IconId::Restaurant => "restaurant",
            IconId::Cafe => "cafe",
            IconId::Scissors => "scissors",
            IconId::HeartPulse => "heart_pulse",
            IconId::Wrench => "wrench",
            IconId::Car => "car",
            IconId::ShoppingBag => "shopping_bag",
            IconId::RoomService => "room_service",
            IconId::Sparkles => "sparkles",
            IconId::Coin => "coin",
            IconId::Clock => "clock",
            IconId::Star => "star",
            IconId::Leaf => "leaf",
            IconId::Handshake => "handshake",
        }
    }
}

impl std::fmt::Display for IconId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_token())
    }
}

impl FromStr for IconId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "restaurant" => Ok(IconId::Restaurant),
            "cafe" => Ok(IconId::Cafe),
            "scissors" => Ok(IconId::Scissors),
            "heart_pulse" => Ok(IconId::HeartPulse),
            "wrench" => Ok(IconId::Wrench),
            "car" => Ok(IconId::Car),
            "shopping_bag" => Ok(IconId::ShoppingBag),
            "room_service" => Ok(IconId::RoomService),
            "sparkles" => Ok(IconId::Sparkles),
            "coin" => Ok(IconId::Coin),
            "clock" => Ok(IconId::Clock),
            "star" => Ok(IconId::Star),
            "leaf" => Ok(IconId::Leaf),
            "handshake" => Ok(IconId::Handshake),
            other => Err(format!("unknown icon token: '{}'", other)),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_round_trip() {
        let all = [
            IconId::Restaurant,
            IconId::Cafe,
            IconId::Scissors,
            IconId::HeartPulse,
            IconId::Wrench,
            IconId::Car,
            IconId::ShoppingBag,
            IconId::RoomService,
            IconId::Sparkles,
            IconId::Coin,
            IconId::Clock,
            IconId::Star,
            IconId::Leaf,
            IconId::Handshake,
        ];

        for icon in all {
            assert_eq!(icon.as_token().parse::<IconId>().unwrap(), icon);
        }
    }

    #[test]
    fn test_unknown_token_is_rejected() {
        assert!("disco_ball".parse::<IconId>().is_err());
    }

    #[test]
    fn test_serde_uses_token() {
        let json = serde_json::to_string(&IconId::HeartPulse).unwrap();
        assert_eq!(json, "\"heart_pulse\"");
    }
}
