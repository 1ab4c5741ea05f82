//! Game orchestrator - binds one game string to one rule variant
//!
//! Scoring walks the parsed frames, feeds each symbol to the evaluator for
//! its throw position, and adds the fully collected deferred bonuses at the
//! end. All scoring state lives in a per-call [`ScoringContext`], so
//! repeated [`Game::score`] calls on one instance return the same result.

use tracing::debug;

use ten_pin_types::{RuleSet, ScoreError, ScoreResult, ThrowPosition};

use crate::frames::{parse_frames, FrameList};
use crate::rules::{Evaluator, ScoringContext};

/// One game string bound to one rule variant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    encoded: String,
    rules: RuleSet,
}

impl Game {
    /// Bind a game string (normalized to uppercase) to a rule variant
    pub fn new(encoded: &str, rules: RuleSet) -> Self {
        Self {
            encoded: encoded.to_uppercase(),
            rules,
        }
    }

    /// Bind a game string to a numeric rule code (0 = national, 1 = international)
    pub fn from_code(encoded: &str, code: u8) -> Result<Self, ScoreError> {
        Ok(Self::new(encoded, RuleSet::from_code(code)?))
    }

    /// The normalized game string
    pub fn encoded(&self) -> &str {
        &self.encoded
    }

    pub fn rules(&self) -> RuleSet {
        self.rules
    }

    /// Split the game string into frames
    pub fn frames(&self) -> Result<FrameList, ScoreError> {
        parse_frames(&self.encoded)
    }

    /// Score the whole game under the bound rule variant
    pub fn score(&self) -> Result<ScoreResult, ScoreError> {
        let frames = self.frames()?;
        debug!(game = %self.encoded, frames = frames.len(), rules = %self.rules, "parsed");

        let first = Evaluator::new(self.rules, ThrowPosition::First);
        let second = Evaluator::new(self.rules, ThrowPosition::Second);
        let mut ctx = ScoringContext::new();

        let mut total_score = 0u32;
        for frame in &frames {
            // The second-throw spare handler needs the frame's opening pins.
            ctx.spare_first_throw = if frame.is_spare() {
                frame.first_roll_pins()
            } else {
                0
            };

            for (position, symbol) in frame.rolls().enumerate() {
                let evaluator = if position == 0 { first } else { second };
                total_score += evaluator.process(symbol, &mut ctx)?;
            }
        }

        total_score += ctx.bonus_total();
        debug!(total_score, "scored");

        Ok(ScoreResult {
            total_frames: frames.len() as u32,
            total_score,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_game_international() {
        let result = Game::new("XXX347/21", RuleSet::International)
            .score()
            .unwrap();
        assert_eq!(result.total_frames, 6);
        // Base 50 plus deferred bonuses 20 + 13 + 7 + 2.
        assert_eq!(result.total_score, 92);
    }

    #[test]
    fn test_lowercase_input_is_normalized() {
        let game = Game::new("xxx347/21", RuleSet::International);
        assert_eq!(game.encoded(), "XXX347/21");
        assert_eq!(game.score().unwrap().total_score, 92);
    }

    #[test]
    fn test_all_miss_game_scores_zero() {
        let result = Game::new(&"-".repeat(20), RuleSet::International)
            .score()
            .unwrap();
        assert_eq!(result.total_frames, 10);
        assert_eq!(result.total_score, 0);
    }

    #[test]
    fn test_single_strike_game() {
        let international = Game::new("X", RuleSet::International).score().unwrap();
        assert_eq!(international.total_frames, 1);
        // The deferral never collects its two throws and counts zero.
        assert_eq!(international.total_score, 10);

        let national = Game::new("X", RuleSet::National).score().unwrap();
        assert_eq!(national.total_score, 20);
    }

    #[test]
    fn test_national_spare_frame() {
        let result = Game::new("3/", RuleSet::National).score().unwrap();
        // 3 for the first roll, 15 - 3 for the spare.
        assert_eq!(result.total_score, 15);
    }

    #[test]
    fn test_all_strike_game_international() {
        let result = Game::new(&"X".repeat(10), RuleSet::International)
            .score()
            .unwrap();
        assert_eq!(result.total_frames, 10);
        // Base 100; eight deferrals collect 20 each; the last two stay open.
        assert_eq!(result.total_score, 260);
    }

    #[test]
    fn test_trailing_spare_deferral_stays_open() {
        let result = Game::new("12345/", RuleSet::International)
            .score()
            .unwrap();
        assert_eq!(result.total_frames, 3);
        // 1+2+3+4+5 plus the spare's 5; its deferral collects nothing.
        assert_eq!(result.total_score, 20);
    }

    #[test]
    fn test_miss_after_strike_feeds_nothing() {
        // Throws: X, -, 2, -, 2. The strike's deferral only ever sees the
        // numeric rolls, so it completes with 2 + 2.
        let result = Game::new("X-2-2", RuleSet::International).score().unwrap();
        assert_eq!(result.total_frames, 3);
        assert_eq!(result.total_score, 18);

        // With a single numeric roll afterwards the deferral stays open.
        let result = Game::new("X-2--", RuleSet::International).score().unwrap();
        assert_eq!(result.total_score, 12);
    }

    #[test]
    fn test_score_is_idempotent() {
        let game = Game::new("XXX347/21", RuleSet::International);
        let once = game.score().unwrap();
        let twice = game.score().unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_unsupported_rule_code() {
        assert_eq!(
            Game::from_code("X", 7).unwrap_err(),
            ScoreError::UnsupportedRule(7)
        );
        assert_eq!(
            Game::from_code("X", 0).unwrap().rules(),
            RuleSet::National
        );
    }

    #[test]
    fn test_parse_errors_propagate_through_score() {
        assert_eq!(
            Game::new("", RuleSet::International).score(),
            Err(ScoreError::EmptyInput)
        );
        assert_eq!(
            Game::new("55", RuleSet::International).score(),
            Err(ScoreError::InvalidFrame("55".to_string()))
        );
    }

    #[test]
    fn test_marker_position_errors_surface_at_scoring() {
        assert_eq!(
            Game::new("/5", RuleSet::International).score(),
            Err(ScoreError::MisplacedMarker {
                symbol: '/',
                position: ThrowPosition::First,
            })
        );
        assert_eq!(
            Game::new("5X", RuleSet::National).score(),
            Err(ScoreError::MisplacedMarker {
                symbol: 'X',
                position: ThrowPosition::Second,
            })
        );
    }
}
