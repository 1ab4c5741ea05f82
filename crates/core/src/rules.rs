//! Rule strategy family - per-variant throw evaluation
//!
//! Four concrete evaluators exist: the product of rule variant (national,
//! international) and throw position (first, second). They share one symbol
//! dispatch and differ only in what a strike or spare is worth and whether
//! it defers bonus points to later throws.
//!
//! National rules are flat: a strike is a fixed 20, a spare tops the frame
//! up to 15. International rules pay pins knocked down now and collect the
//! raw value of the following throws into a deferred bonus.

use ten_pin_types::{
    RuleSet, ScoreError, ThrowPosition, MISS_SYMBOL, NATIONAL_SPARE_POINTS,
    NATIONAL_STRIKE_POINTS, PINS_TOTAL, SPARE_SYMBOL, STRIKE_SYMBOL,
};

/// One deferred bonus obligation
///
/// Created by an international strike (`required = 2`) or spare
/// (`required = 1`). Open entries absorb the raw pin value of each later
/// throw until full; only full entries contribute to the total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingBonus {
    required: usize,
    collected: Vec<u32>,
}

impl PendingBonus {
    fn new(required: usize) -> Self {
        Self {
            required,
            collected: Vec::with_capacity(required),
        }
    }

    fn is_open(&self) -> bool {
        self.collected.len() < self.required
    }

    pub fn is_complete(&self) -> bool {
        self.collected.len() == self.required
    }

    /// Bonus value once fully collected; open entries are worth nothing
    pub fn points(&self) -> u32 {
        if self.is_complete() {
            self.collected.iter().sum()
        } else {
            0
        }
    }
}

/// Mutable scoring state threaded through every evaluator call
///
/// Owns the deferred bonus list and the cached first-roll pin count of the
/// spare frame currently being scored. One context serves one pass over one
/// game; [`crate::Game::score`] builds a fresh context per call.
#[derive(Debug, Clone, Default)]
pub struct ScoringContext {
    pending: Vec<PendingBonus>,
    /// First-roll pins of the current frame when it ends in a spare, else 0
    pub spare_first_throw: u32,
}

impl ScoringContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a throw's raw pin value to the bonus bookkeeping
    ///
    /// Open entries absorb the value first; only then is a new obligation
    /// (if `defer > 0`) appended, so a strike never collects itself.
    fn absorb(&mut self, value: u32, defer: usize) {
        for entry in self.pending.iter_mut().filter(|e| e.is_open()) {
            entry.collected.push(value);
        }
        if defer > 0 {
            self.pending.push(PendingBonus::new(defer));
        }
    }

    /// Sum of all fully collected deferred bonuses
    ///
    /// Entries that ran out of subsequent throws stay open and count zero.
    pub fn bonus_total(&self) -> u32 {
        self.pending.iter().map(PendingBonus::points).sum()
    }

    #[cfg(test)]
    fn pending(&self) -> &[PendingBonus] {
        &self.pending
    }
}

/// A throw evaluator bound to one rule variant and one throw position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluator {
    rules: RuleSet,
    position: ThrowPosition,
}

impl Evaluator {
    pub fn new(rules: RuleSet, position: ThrowPosition) -> Self {
        Self { rules, position }
    }

    /// Score one roll symbol, updating the bonus bookkeeping as needed
    ///
    /// A miss scores zero and bypasses the bookkeeping entirely: it neither
    /// feeds nor advances open deferred entries.
    pub fn process(&self, symbol: char, ctx: &mut ScoringContext) -> Result<u32, ScoreError> {
        match symbol {
            STRIKE_SYMBOL => self.strike(ctx),
            SPARE_SYMBOL => self.spare(ctx),
            MISS_SYMBOL => Ok(0),
            '1'..='9' => {
                // '0' is outside the roll alphabet; a zero-pin roll is '-'.
                let pins = symbol.to_digit(10).unwrap_or(0);
                Ok(self.numeric(pins, ctx))
            }
            other => Err(ScoreError::InvalidSymbol(other)),
        }
    }

    fn strike(&self, ctx: &mut ScoringContext) -> Result<u32, ScoreError> {
        match (self.rules, self.position) {
            (_, ThrowPosition::Second) => Err(ScoreError::MisplacedMarker {
                symbol: STRIKE_SYMBOL,
                position: self.position,
            }),
            (RuleSet::National, ThrowPosition::First) => Ok(NATIONAL_STRIKE_POINTS),
            (RuleSet::International, ThrowPosition::First) => {
                ctx.absorb(PINS_TOTAL, 2);
                Ok(PINS_TOTAL)
            }
        }
    }

    fn spare(&self, ctx: &mut ScoringContext) -> Result<u32, ScoreError> {
        match (self.rules, self.position) {
            (_, ThrowPosition::First) => Err(ScoreError::MisplacedMarker {
                symbol: SPARE_SYMBOL,
                position: self.position,
            }),
            (RuleSet::National, ThrowPosition::Second) => {
                Ok(NATIONAL_SPARE_POINTS - ctx.spare_first_throw)
            }
            (RuleSet::International, ThrowPosition::Second) => {
                let pins = PINS_TOTAL - ctx.spare_first_throw;
                ctx.absorb(pins, 1);
                Ok(pins)
            }
        }
    }

    fn numeric(&self, pins: u32, ctx: &mut ScoringContext) -> u32 {
        if self.rules == RuleSet::International {
            ctx.absorb(pins, 0);
        }
        pins
    }
}
