//! Shared types for the ten-pin scorer
//!
//! This crate contains the roll alphabet, scoring constants, rule selection
//! enums, the result record, and the domain error type. It has no game logic.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Roll symbol for a strike (all ten pins on the first roll of a frame)
pub const STRIKE_SYMBOL: char = 'X';
/// Roll symbol for a spare (remaining pins on the second roll of a frame)
pub const SPARE_SYMBOL: char = '/';
/// Roll symbol for a miss (no pins)
pub const MISS_SYMBOL: char = '-';

/// Maximum frames in one game
pub const MAX_FRAMES: usize = 10;
/// Pins standing at the start of a frame
pub const PINS_TOTAL: u32 = 10;

/// Fixed strike value under national rules
pub const NATIONAL_STRIKE_POINTS: u32 = 20;
/// Spare base under national rules (second roll scores this minus the first roll)
pub const NATIONAL_SPARE_POINTS: u32 = 15;

/// Selectable scoring rule variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleSet {
    National,
    International,
}

impl RuleSet {
    /// Resolve a numeric rule code (0 = national, 1 = international)
    pub fn from_code(code: u8) -> Result<Self, ScoreError> {
        match code {
            0 => Ok(RuleSet::National),
            1 => Ok(RuleSet::International),
            other => Err(ScoreError::UnsupportedRule(other)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RuleSet::National => "national",
            RuleSet::International => "international",
        }
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        RuleSet::International
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleSet {
    type Err = ScoreError;

    /// Parse a rule name (case-insensitive) or numeric code
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "national" | "0" => Ok(RuleSet::National),
            "international" | "1" => Ok(RuleSet::International),
            _ => Err(ScoreError::UnknownRuleVariant(s.to_string())),
        }
    }
}

/// Which roll of a frame an evaluator is bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThrowPosition {
    First,
    Second,
}

impl ThrowPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThrowPosition::First => "first",
            ThrowPosition::Second => "second",
        }
    }
}

impl fmt::Display for ThrowPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Final score record for one game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreResult {
    pub total_frames: u32,
    pub total_score: u32,
}

/// Input-validation and usage errors
///
/// Every variant is terminal for the call that produced it; nothing is
/// retried or silently dropped. Only the binary formats these for display.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// Rule code outside the supported set {0, 1}
    #[error("unsupported rule code: {0}")]
    UnsupportedRule(u8),

    /// Rule name that matches no variant
    #[error("unknown rule variant: '{0}'")]
    UnknownRuleVariant(String),

    /// Empty game string
    #[error("empty game string")]
    EmptyInput,

    /// A trailing single symbol that is not a strike cannot close a frame
    #[error("invalid final frame: dangling symbol '{0}'")]
    InvalidFinalFrame(char),

    /// Two open rolls can never clear all ten pins
    #[error("invalid frame '{0}': two rolls total ten or more pins")]
    InvalidFrame(String),

    /// More frames than a game allows
    #[error("too many frames: {count} exceeds the {MAX_FRAMES}-frame limit")]
    TooManyFrames { count: usize },

    /// Symbol outside the roll alphabet
    #[error("invalid roll symbol: '{0}'")]
    InvalidSymbol(char),

    /// Strike on a second roll or spare on a first roll
    #[error("misplaced marker '{symbol}' on the {position} roll")]
    MisplacedMarker {
        symbol: char,
        position: ThrowPosition,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_codes() {
        assert_eq!(RuleSet::from_code(0).unwrap(), RuleSet::National);
        assert_eq!(RuleSet::from_code(1).unwrap(), RuleSet::International);
        assert_eq!(RuleSet::from_code(7), Err(ScoreError::UnsupportedRule(7)));
    }

    #[test]
    fn test_default_rules_are_international() {
        assert_eq!(RuleSet::default(), RuleSet::International);
    }

    #[test]
    fn test_rule_names() {
        assert_eq!("national".parse::<RuleSet>().unwrap(), RuleSet::National);
        assert_eq!(
            "International".parse::<RuleSet>().unwrap(),
            RuleSet::International
        );
        assert_eq!("1".parse::<RuleSet>().unwrap(), RuleSet::International);
    }

    #[test]
    fn test_unknown_rule_name_is_carried_in_the_error() {
        let err = "canadian".parse::<RuleSet>().unwrap_err();
        assert_eq!(err, ScoreError::UnknownRuleVariant("canadian".to_string()));
        assert_eq!(err.to_string(), "unknown rule variant: 'canadian'");
    }

    #[test]
    fn test_error_display_names_the_condition() {
        let err = ScoreError::MisplacedMarker {
            symbol: STRIKE_SYMBOL,
            position: ThrowPosition::Second,
        };
        assert_eq!(err.to_string(), "misplaced marker 'X' on the second roll");

        let err = ScoreError::TooManyFrames { count: 11 };
        assert!(err.to_string().contains("11"));
        assert!(err.to_string().contains("10-frame"));
    }
}
