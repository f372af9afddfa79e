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

//! Behavioral traits
//!
//! Traits are discrete behavior tags derived from a [`FiveFactor`] personality. They come
//! in seven antonym pairs; [`Trait::opposite`] maps each trait to its antonym and is its
//! own inverse. Two trait sets are compared by how many traits they share and how many
//! clash with an antonym on the other side.

pub mod rules;

pub use self::rules::derive_traits;

use crate::error::GenomeError;
use flagset::{FlagSet, flags};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

flags! {
    /// A discrete behavioral trait. Each trait occupies a distinct bit of a [`TraitMask`].
    pub enum Trait: u16 {
        Deceptive = 1 << 0,
        Honest = 1 << 1,
        Aggressive = 1 << 2,
        Calm = 1 << 3,
        Cowardly = 1 << 4,
        Brave = 1 << 5,
        Ambitious = 1 << 6,
        Content = 1 << 7,
        Careless = 1 << 8,
        Careful = 1 << 9,
        Paranoid = 1 << 10,
        Trusting = 1 << 11,
        Cruel = 1 << 12,
        Kind = 1 << 13,
    }
}

/// Exclusive upper bound of the trait bits. Not a trait.
pub const TRAIT_SENTINEL: u16 = 1 << 14;

impl Trait {
    /// The antonym of this trait.
    pub const fn opposite(&self) -> Trait {
        match self {
            Trait::Deceptive => Trait::Honest,
            Trait::Honest => Trait::Deceptive,
            Trait::Aggressive => Trait::Calm,
            Trait::Calm => Trait::Aggressive,
            Trait::Cowardly => Trait::Brave,
            Trait::Brave => Trait::Cowardly,
            Trait::Ambitious => Trait::Content,
            Trait::Content => Trait::Ambitious,
            Trait::Careless => Trait::Careful,
            Trait::Careful => Trait::Careless,
            Trait::Paranoid => Trait::Trusting,
            Trait::Trusting => Trait::Paranoid,
            Trait::Cruel => Trait::Kind,
            Trait::Kind => Trait::Cruel,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Trait::Deceptive => "deceptive",
            Trait::Honest => "honest",
            Trait::Aggressive => "aggressive",
            Trait::Calm => "calm",
            Trait::Cowardly => "cowardly",
            Trait::Brave => "brave",
            Trait::Ambitious => "ambitious",
            Trait::Content => "content",
            Trait::Careless => "careless",
            Trait::Careful => "careful",
            Trait::Paranoid => "paranoid",
            Trait::Trusting => "trusting",
            Trait::Cruel => "cruel",
            Trait::Kind => "kind",
        }
    }

    /// Bit of this trait within a [`TraitMask`].
    pub fn bits(&self) -> u16 {
        FlagSet::from(*self).bits()
    }

    /// All traits in bit order.
    pub fn all() -> &'static [Trait] {
        &[
            Trait::Deceptive,
            Trait::Honest,
            Trait::Aggressive,
            Trait::Calm,
            Trait::Cowardly,
            Trait::Brave,
            Trait::Ambitious,
            Trait::Content,
            Trait::Careless,
            Trait::Careful,
            Trait::Paranoid,
            Trait::Trusting,
            Trait::Cruel,
            Trait::Kind,
        ]
    }
}

impl std::fmt::Display for Trait {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Trait {
    type Err = GenomeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .find(|t| t.name().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| GenomeError::UnknownTrait(s.to_string()))
    }
}

/// Set of traits held by one individual.
///
/// Serialized as the raw `u16` bitmask.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TraitMask(FlagSet<Trait>);

impl TraitMask {
    /// A mask with no traits set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a mask from raw bits. Bits that name no trait, including
    /// [`TRAIT_SENTINEL`], are dropped.
    pub fn from_bits(bits: u16) -> Self {
        Self(FlagSet::new_truncated(bits))
    }

    pub fn bits(&self) -> u16 {
        self.0.bits()
    }

    pub fn has_trait(&self, t: Trait) -> bool {
        self.0.contains(t)
    }

    pub fn insert(&mut self, t: Trait) {
        self.0 |= t;
    }

    /// Number of traits set.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate the traits set, in bit order.
    pub fn iter(&self) -> impl Iterator<Item = Trait> + use<> {
        self.0.into_iter()
    }

    /// Count the traits set in both masks.
    pub fn count_common(&self, other: &TraitMask) -> usize {
        (self.0 & other.0).into_iter().count()
    }

    /// Count the traits of this mask whose antonym is set in `other`.
    pub fn count_opposites(&self, other: &TraitMask) -> usize {
        self.iter()
            .filter(|t| other.has_trait(t.opposite()))
            .count()
    }

    /// Affinity between two trait sets in `[-1.0, 1.0]`.
    ///
    /// Shared traits pull the score up and clashing antonyms pull it down:
    /// `(common - opposites) / max(common, opposites)`. With neither shared nor clashing
    /// traits there is no evidence either way and the score is `0.0`.
    pub fn compare(&self, other: &TraitMask) -> f64 {
        let common = self.count_common(other);
        let opposites = self.count_opposites(other);
        let evidence = common.max(opposites);
        if evidence == 0 {
            return 0.0;
        }
        (common as f64 - opposites as f64) / evidence as f64
    }
}

impl From<Trait> for TraitMask {
    fn from(t: Trait) -> Self {
        Self(FlagSet::from(t))
    }
}

impl FromIterator<Trait> for TraitMask {
    fn from_iter<I: IntoIterator<Item = Trait>>(iter: I) -> Self {
        let mut mask = TraitMask::empty();
        for t in iter {
            mask.insert(t);
        }
        mask
    }
}

impl std::fmt::Display for TraitMask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.iter().map(|t| t.name()).collect();
        write!(f, "{}", names.join(", "))
    }
}

impl FromStr for TraitMask {
    type Err = GenomeError;

    /// Parse a comma separated list of trait names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(',')
            .filter(|part| !part.trim().is_empty())
            .map(Trait::from_str)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trait_bits() {
        for (i, t) in Trait::all().iter().enumerate() {
            assert_eq!(t.bits(), 1 << i, "{t}");
        }
        assert_eq!(Trait::Kind.bits(), 8192);
        assert!(Trait::all().iter().all(|t| t.bits() < TRAIT_SENTINEL));
    }

    #[test]
    fn test_opposite_is_involution() {
        assert_eq!(Trait::all().len(), 14);
        for t in Trait::all() {
            assert_ne!(t.opposite(), *t, "{t} is its own opposite");
            assert_eq!(t.opposite().opposite(), *t, "{t}");
        }
    }

    #[test]
    fn test_opposites_pair_adjacent_bits() {
        for pair in Trait::all().chunks(2) {
            assert_eq!(pair[0].opposite(), pair[1]);
        }
    }

    #[test]
    fn test_mask_from_bits_drops_sentinel() {
        let mask = TraitMask::from_bits(TRAIT_SENTINEL | Trait::Calm.bits());
        assert_eq!(mask.bits(), Trait::Calm.bits());
        assert_eq!(mask.len(), 1);
    }

    #[test]
    fn test_mask_display() {
        let mask: TraitMask = [Trait::Kind, Trait::Honest, Trait::Brave].into_iter().collect();
        assert_eq!(mask.to_string(), "honest, brave, kind");
        assert_eq!(TraitMask::empty().to_string(), "");
    }

    #[test]
    fn test_mask_from_str() {
        let mask: TraitMask = "Cruel, paranoid".parse().unwrap();
        assert!(mask.has_trait(Trait::Cruel));
        assert!(mask.has_trait(Trait::Paranoid));
        assert_eq!(mask.len(), 2);
        assert_eq!("".parse::<TraitMask>().unwrap(), TraitMask::empty());
        assert!("cruel, grumpy".parse::<TraitMask>().is_err());
    }

    #[test]
    fn test_count_common() {
        let a: TraitMask = [Trait::Honest, Trait::Calm, Trait::Kind].into_iter().collect();
        let b: TraitMask = [Trait::Honest, Trait::Kind, Trait::Paranoid].into_iter().collect();
        assert_eq!(a.count_common(&b), 2);
        assert_eq!(b.count_common(&a), 2);
    }

    #[test]
    fn test_count_opposites() {
        let a: TraitMask = [Trait::Honest, Trait::Calm, Trait::Kind].into_iter().collect();
        let b: TraitMask = [Trait::Deceptive, Trait::Aggressive, Trait::Kind].into_iter().collect();
        assert_eq!(a.count_opposites(&b), 2);
        assert_eq!(b.count_opposites(&a), 2);
    }

    #[test]
    fn test_compare() {
        let a: TraitMask = [Trait::Honest, Trait::Calm, Trait::Kind].into_iter().collect();
        let b: TraitMask = [Trait::Deceptive, Trait::Aggressive, Trait::Kind].into_iter().collect();
        // One shared, two clashing.
        assert_eq!(a.compare(&b), (1.0 - 2.0) / 2.0);

        let c: TraitMask = [Trait::Honest, Trait::Brave].into_iter().collect();
        // Honest is shared and nothing clashes.
        assert_eq!(a.compare(&c), 1.0);
    }

    #[test]
    fn test_compare_zero_evidence() {
        assert_eq!(TraitMask::empty().compare(&TraitMask::empty()), 0.0);

        let a = TraitMask::from(Trait::Ambitious);
        let b = TraitMask::from(Trait::Careful);
        assert_eq!(a.compare(&b), 0.0);
    }

    #[test]
    fn test_compare_all_opposed() {
        let a: TraitMask = [Trait::Cruel, Trait::Paranoid].into_iter().collect();
        let b: TraitMask = [Trait::Kind, Trait::Trusting].into_iter().collect();
        assert_eq!(a.compare(&b), -1.0);
    }

    #[test]
    fn test_compare_self() {
        let a: TraitMask = [Trait::Cruel, Trait::Paranoid, Trait::Aggressive].into_iter().collect();
        assert_eq!(a.compare(&a), 1.0);
    }

    #[test]
    fn test_mask_serde_as_bits() {
        let mask: TraitMask = [Trait::Deceptive, Trait::Kind].into_iter().collect();
        let json = serde_json::to_string(&mask).unwrap();
        assert_eq!(json, "8193");
        let back: TraitMask = serde_json::from_str(&json).unwrap();
        assert_eq!(back, mask);
    }
}
