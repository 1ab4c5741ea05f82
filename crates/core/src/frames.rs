//! Frame parsing - splits an encoded game string into frames
//!
//! A frame is one or two roll symbols: a lone strike marker, or a pair such
//! as `"34"`, `"7/"`, `"-2"`. The parser buffers symbols and closes a frame
//! as soon as the buffer holds two symbols or a single strike marker.
//! Validation happens here; symbol-level legality is the evaluators' job.

use arrayvec::{ArrayString, ArrayVec};

use ten_pin_types::{ScoreError, MAX_FRAMES, PINS_TOTAL, SPARE_SYMBOL, STRIKE_SYMBOL};

/// All frames of one game, capacity-bounded by the frame limit
pub type FrameList = ArrayVec<Frame, MAX_FRAMES>;

/// One parsed frame: a strike, or a two-roll pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    rolls: ArrayString<2>,
}

impl Frame {
    fn new(rolls: ArrayString<2>) -> Self {
        Self { rolls }
    }

    /// The frame's symbols as entered
    pub fn as_str(&self) -> &str {
        &self.rolls
    }

    /// Roll symbols in throw order
    pub fn rolls(&self) -> impl Iterator<Item = char> + '_ {
        self.rolls.chars()
    }

    pub fn is_strike(&self) -> bool {
        self.rolls.len() == 1
    }

    pub fn is_spare(&self) -> bool {
        self.rolls.chars().any(|c| c == SPARE_SYMBOL)
    }

    /// Pin count of the first roll; non-digit symbols (miss) count zero
    pub fn first_roll_pins(&self) -> u32 {
        self.rolls
            .chars()
            .next()
            .and_then(|c| c.to_digit(10))
            .unwrap_or(0)
    }
}

impl std::fmt::Display for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.rolls)
    }
}

/// Split an encoded game string into at most [`MAX_FRAMES`] frames
///
/// Fails on an empty string, a dangling non-strike trailing symbol, a
/// two-digit frame whose rolls sum to ten or more pins, or an eleventh frame.
pub fn parse_frames(encoded: &str) -> Result<FrameList, ScoreError> {
    if encoded.is_empty() {
        return Err(ScoreError::EmptyInput);
    }

    let mut frames = FrameList::new();
    let mut buffer = ArrayString::<2>::new();
    let total = encoded.chars().count();

    for (index, symbol) in encoded.chars().enumerate() {
        // The roll alphabet is ASCII-only; rejecting wider symbols here also
        // keeps them out of the byte-sized frame buffer.
        if !symbol.is_ascii() {
            return Err(ScoreError::InvalidSymbol(symbol));
        }
        buffer.push(symbol);

        // A lone trailing symbol can only close a frame if it is a strike.
        if buffer.len() == 1 && index + 1 == total && symbol != STRIKE_SYMBOL {
            return Err(ScoreError::InvalidFinalFrame(symbol));
        }

        if buffer.len() == 2 || symbol == STRIKE_SYMBOL {
            validate_frame(&buffer)?;

            if frames.is_full() {
                return Err(ScoreError::TooManyFrames {
                    count: frames.len() + 1,
                });
            }
            frames.push(Frame::new(buffer));
            buffer.clear();
        }
    }

    Ok(frames)
}

/// Reject a two-digit frame that claims ten or more pins without a marker
fn validate_frame(buffer: &ArrayString<2>) -> Result<(), ScoreError> {
    if buffer.chars().all(|c| c.is_ascii_digit()) {
        let pins: u32 = buffer.chars().filter_map(|c| c.to_digit(10)).sum();
        if pins >= PINS_TOTAL {
            return Err(ScoreError::InvalidFrame(buffer.to_string()));
        }
    }
    Ok(())
}
