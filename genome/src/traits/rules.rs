//
// Copyright 2025-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Trait derivation rules
//!
//! Each of the seven trait pairs is a [`TraitRule`]: two predicates over a
//! [`FiveFactor`] and the trait each one grants. The positive predicate is checked
//! first; the negative one only when it fails. Rules never look at each other's
//! results, so the table can be evaluated in any order.
//!
//! | Pair                | Positive when                       | Negative when                        |
//! |---------------------|-------------------------------------|--------------------------------------|
//! | Deceptive / Honest  | A low, C low                        | A high, C high                       |
//! | Aggressive / Calm   | A low, N high, (E high or O high)   | A above mid, N low                   |
//! | Brave / Cowardly    | E high, A high                      | (E low or O low), A low              |
//! | Ambitious / Content | C high, E high                      | C low, E low                         |
//! | Careful / Careless  | C high, N high                      | C low, N low                         |
//! | Paranoid / Trusting | N high, A low, (O high or C high)   | N low, A high, (O high or C low)     |
//! | Cruel / Kind        | A low, (N high or C low)            | A high, (C high or E high)           |
//!
//! "High" is strictly above [`TRAIT_HIGH`], "low" strictly below [`TRAIT_LOW`] and
//! "above mid" strictly above [`TRAIT_MID`].

use super::{Trait, TraitMask};
use crate::personality::FiveFactor;

/// Base used to compute the thresholds. One past the largest four bit score would be
/// 16; the thresholds are fixed against 15.
pub const TRAIT_CEILING: u8 = 15;
pub const TRAIT_HIGH: u8 = TRAIT_CEILING * 2 / 3;
pub const TRAIT_MID: u8 = TRAIT_CEILING / 2;
pub const TRAIT_LOW: u8 = TRAIT_CEILING / 3;

/// Predicate over a personality.
pub type TraitPredicate = fn(&FiveFactor) -> bool;

/// Threshold rule for one antonym pair.
#[derive(Clone, Copy, Debug)]
pub struct TraitRule {
    /// Trait granted when `when_positive` holds.
    pub positive: Trait,
    /// Trait granted when `when_positive` fails and `when_negative` holds.
    pub negative: Trait,
    pub when_positive: TraitPredicate,
    pub when_negative: TraitPredicate,
}

impl TraitRule {
    /// Trait this rule grants to a personality, if any.
    pub fn evaluate(&self, ff: &FiveFactor) -> Option<Trait> {
        if (self.when_positive)(ff) {
            Some(self.positive)
        } else if (self.when_negative)(ff) {
            Some(self.negative)
        } else {
            None
        }
    }
}

const fn high(score: u8) -> bool {
    score > TRAIT_HIGH
}

const fn low(score: u8) -> bool {
    score < TRAIT_LOW
}

const fn above_mid(score: u8) -> bool {
    score > TRAIT_MID
}

fn deceptive(ff: &FiveFactor) -> bool {
    low(ff.agreeableness) && low(ff.conscientiousness)
}

fn honest(ff: &FiveFactor) -> bool {
    high(ff.agreeableness) && high(ff.conscientiousness)
}

fn aggressive(ff: &FiveFactor) -> bool {
    low(ff.agreeableness)
        && high(ff.neuroticism)
        && (high(ff.extraversion) || high(ff.openness))
}

fn calm(ff: &FiveFactor) -> bool {
    above_mid(ff.agreeableness) && low(ff.neuroticism)
}

fn brave(ff: &FiveFactor) -> bool {
    high(ff.extraversion) && high(ff.agreeableness)
}

fn cowardly(ff: &FiveFactor) -> bool {
    (low(ff.extraversion) || low(ff.openness)) && low(ff.agreeableness)
}

fn ambitious(ff: &FiveFactor) -> bool {
    high(ff.conscientiousness) && high(ff.extraversion)
}

fn content(ff: &FiveFactor) -> bool {
    low(ff.conscientiousness) && low(ff.extraversion)
}

fn careful(ff: &FiveFactor) -> bool {
    high(ff.conscientiousness) && high(ff.neuroticism)
}

fn careless(ff: &FiveFactor) -> bool {
    low(ff.conscientiousness) && low(ff.neuroticism)
}

fn paranoid(ff: &FiveFactor) -> bool {
    high(ff.neuroticism)
        && low(ff.agreeableness)
        && (high(ff.openness) || high(ff.conscientiousness))
}

fn trusting(ff: &FiveFactor) -> bool {
    low(ff.neuroticism)
        && high(ff.agreeableness)
        && (high(ff.openness) || low(ff.conscientiousness))
}

fn cruel(ff: &FiveFactor) -> bool {
    low(ff.agreeableness) && (high(ff.neuroticism) || low(ff.conscientiousness))
}

fn kind(ff: &FiveFactor) -> bool {
    high(ff.agreeableness) && (high(ff.conscientiousness) || high(ff.extraversion))
}

/// Derivation table, one rule per antonym pair.
pub static RULES: [TraitRule; 7] = [
    TraitRule {
        positive: Trait::Deceptive,
        negative: Trait::Honest,
        when_positive: deceptive,
        when_negative: honest,
    },
    TraitRule {
        positive: Trait::Aggressive,
        negative: Trait::Calm,
        when_positive: aggressive,
        when_negative: calm,
    },
    TraitRule {
        positive: Trait::Brave,
        negative: Trait::Cowardly,
        when_positive: brave,
        when_negative: cowardly,
    },
    TraitRule {
        positive: Trait::Ambitious,
        negative: Trait::Content,
        when_positive: ambitious,
        when_negative: content,
    },
    TraitRule {
        positive: Trait::Careful,
        negative: Trait::Careless,
        when_positive: careful,
        when_negative: careless,
    },
    TraitRule {
        positive: Trait::Paranoid,
        negative: Trait::Trusting,
        when_positive: paranoid,
        when_negative: trusting,
    },
    TraitRule {
        positive: Trait::Cruel,
        negative: Trait::Kind,
        when_positive: cruel,
        when_negative: kind,
    },
];

/// Derive the traits of a personality. Total and deterministic; may return an empty mask.
pub fn derive_traits(ff: &FiveFactor) -> TraitMask {
    let traits: TraitMask = RULES.iter().filter_map(|rule| rule.evaluate(ff)).collect();
    tracing::trace!(five_factor = %ff, traits = %traits, "Derived traits");
    traits
}
