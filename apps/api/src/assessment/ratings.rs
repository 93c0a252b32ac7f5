//! The 30-term questionnaire and the validated rating vector it produces.

use thiserror::Error;

pub const TERM_COUNT: usize = 30;
pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// The questionnaire terms, in the order the ratings refer to them.
pub const ASSESSMENT_TERMS: [&str; TERM_COUNT] = [
    "Calm",
    "Kind-hearted",
    "Industrious",
    "Careful",
    "Agreeable",
    "Persuasive",
    "Demanding",
    "Talkative",
    "Modest",
    "Generous",
    "Spontaneous",
    "Soft-hearted",
    "Pleasant",
    "Spirited",
    "Attractive",
    "Fussy",
    "Compassionate",
    "Earnest",
    "Shy",
    "Daring",
    "Persistent",
    "Individualistic",
    "Selfish",
    "Compelling",
    "Good-natured",
    "Understanding",
    "Adaptable",
    "Aggressive",
    "Outgoing",
    "Controlling",
];

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RatingError {
    #[error("expected 30 ratings, got {0}")]
    WrongLength(usize),

    #[error("term '{term}' (#{}) has not been answered", .index + 1)]
    Unanswered { index: usize, term: &'static str },

    #[error("rating {value} for term '{term}' is outside 1-5")]
    OutOfRange {
        index: usize,
        term: &'static str,
        value: i64,
    },
}

/// A complete set of answers: exactly 30 ratings, each in 1..=5.
///
/// Only constructible through `TryFrom`, so holding one means the form is complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingVector([u8; TERM_COUNT]);

impl RatingVector {
    pub fn get(&self, index: usize) -> u8 {
        self.0[index]
    }

    /// Pairs each term with its rating, in questionnaire order.
    pub fn iter_terms(&self) -> impl Iterator<Item = (&'static str, u8)> + '_ {
        ASSESSMENT_TERMS.iter().copied().zip(self.0.iter().copied())
    }
}

impl TryFrom<&[i64]> for RatingVector {
    type Error = RatingError;

    fn try_from(raw: &[i64]) -> Result<Self, Self::Error> {
        if raw.len() != TERM_COUNT {
            return Err(RatingError::WrongLength(raw.len()));
        }

        let mut ratings = [0u8; TERM_COUNT];
        for (index, &value) in raw.iter().enumerate() {
            let term = ASSESSMENT_TERMS[index];
            if value == 0 {
                return Err(RatingError::Unanswered { index, term });
            }
            if !(MIN_RATING as i64..=MAX_RATING as i64).contains(&value) {
                return Err(RatingError::OutOfRange { index, term, value });
            }
            ratings[index] = value as u8;
        }

        Ok(Self(ratings))
    }
}
