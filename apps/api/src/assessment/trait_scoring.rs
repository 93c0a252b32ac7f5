//! Trait scoring: fixed five-index averages over the rating vector.
//!
//! Index groups may overlap across traits (e.g. "Compelling" feeds both
//! dominance and influence). Dominant trait selection walks `Trait::ALL` in
//! declared order and only replaces the running best on a strictly greater
//! average, so ties resolve to the earlier trait.

use serde::Serialize;

use crate::assessment::archetypes::{archetype_for, Archetype};
use crate::assessment::ratings::RatingVector;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trait {
    Dominance,
    Influence,
    Steadiness,
    Conscientiousness,
    Empathy,
    Adaptability,
}

impl Trait {
    /// Canonical order; also the tie-break order.
    pub const ALL: [Trait; 6] = [
        Trait::Dominance,
        Trait::Influence,
        Trait::Steadiness,
        Trait::Conscientiousness,
        Trait::Empathy,
        Trait::Adaptability,
    ];

    /// Rating indices (0-based) averaged for this trait.
    pub const fn indices(self) -> [usize; 5] {
        match self {
            Trait::Dominance => [6, 19, 23, 27, 29],
            Trait::Influence => [5, 7, 13, 28, 23],
            Trait::Steadiness => [0, 1, 4, 8, 12],
            Trait::Conscientiousness => [2, 3, 15, 17, 20],
            Trait::Empathy => [1, 9, 11, 16, 25],
            Trait::Adaptability => [10, 26, 24, 14, 18],
        }
    }
}

/// The six trait averages, stored in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TraitScores {
    pub dominance: f64,
    pub influence: f64,
    pub steadiness: f64,
    pub conscientiousness: f64,
    pub empathy: f64,
    pub adaptability: f64,
}

impl TraitScores {
    pub fn compute(ratings: &RatingVector) -> Self {
        let avg = |t: Trait| -> f64 {
            let sum: u32 = t.indices().iter().map(|&i| ratings.get(i) as u32).sum();
            sum as f64 / 5.0
        };

        Self {
            dominance: avg(Trait::Dominance),
            influence: avg(Trait::Influence),
            steadiness: avg(Trait::Steadiness),
            conscientiousness: avg(Trait::Conscientiousness),
            empathy: avg(Trait::Empathy),
            adaptability: avg(Trait::Adaptability),
        }
    }

    pub fn get(&self, t: Trait) -> f64 {
        match t {
            Trait::Dominance => self.dominance,
            Trait::Influence => self.influence,
            Trait::Steadiness => self.steadiness,
            Trait::Conscientiousness => self.conscientiousness,
            Trait::Empathy => self.empathy,
            Trait::Adaptability => self.adaptability,
        }
    }

    /// Trait with the strictly greatest average; first in canonical order on ties.
    pub fn dominant(&self) -> Trait {
        let mut best = Trait::ALL[0];
        let mut best_score = self.get(best);

        for &candidate in &Trait::ALL[1..] {
            let score = self.get(candidate);
            if score > best_score {
                best = candidate;
                best_score = score;
            }
        }

        best
    }
}

/// Scores a complete rating vector and returns its archetype descriptor.
pub fn score_personality(ratings: &RatingVector) -> (TraitScores, &'static Archetype) {
    let scores = TraitScores::compute(ratings);
    let archetype = archetype_for(scores.dominant());
    (scores, archetype)
}
