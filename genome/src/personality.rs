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

//! Five factor personality reading
//!
//! A simplified five factor model: each dimension is a four bit score read from the
//! genome. The scores only feed trait derivation; they carry no psychology of their own.

use crate::layout::GeneField;
use crate::traits::rules::TRAIT_MID;
use serde::{Deserialize, Serialize};

/// One dimension of the five factor model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PersonalityDimension {
    Openness,
    Conscientiousness,
    Extraversion,
    Agreeableness,
    Neuroticism,
}

impl PersonalityDimension {
    pub fn name(&self) -> &'static str {
        match self {
            PersonalityDimension::Openness => "Openness",
            PersonalityDimension::Conscientiousness => "Conscientiousness",
            PersonalityDimension::Extraversion => "Extraversion",
            PersonalityDimension::Agreeableness => "Agreeableness",
            PersonalityDimension::Neuroticism => "Neuroticism",
        }
    }

    /// Genome field holding this dimension.
    pub fn field(&self) -> GeneField {
        match self {
            PersonalityDimension::Openness => GeneField::Openness,
            PersonalityDimension::Conscientiousness => GeneField::Conscientiousness,
            PersonalityDimension::Extraversion => GeneField::Extraversion,
            PersonalityDimension::Agreeableness => GeneField::Agreeableness,
            PersonalityDimension::Neuroticism => GeneField::Neuroticism,
        }
    }

    pub fn all() -> &'static [PersonalityDimension] {
        &[
            PersonalityDimension::Openness,
            PersonalityDimension::Conscientiousness,
            PersonalityDimension::Extraversion,
            PersonalityDimension::Agreeableness,
            PersonalityDimension::Neuroticism,
        ]
    }
}

impl std::fmt::Display for PersonalityDimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Personality vector of an individual.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FiveFactor {
    /// Openness to experience.
    pub openness: u8,
    pub conscientiousness: u8,
    pub extraversion: u8,
    pub agreeableness: u8,
    pub neuroticism: u8,
}

impl FiveFactor {
    pub const fn new(
        openness: u8,
        conscientiousness: u8,
        extraversion: u8,
        agreeableness: u8,
        neuroticism: u8,
    ) -> Self {
        Self {
            openness,
            conscientiousness,
            extraversion,
            agreeableness,
            neuroticism,
        }
    }

    /// A personality sitting at the midpoint of every dimension. Derives no traits.
    pub const fn neutral() -> Self {
        Self::new(TRAIT_MID, TRAIT_MID, TRAIT_MID, TRAIT_MID, TRAIT_MID)
    }

    /// Score of a single dimension.
    pub const fn get(&self, dimension: PersonalityDimension) -> u8 {
        match dimension {
            PersonalityDimension::Openness => self.openness,
            PersonalityDimension::Conscientiousness => self.conscientiousness,
            PersonalityDimension::Extraversion => self.extraversion,
            PersonalityDimension::Agreeableness => self.agreeableness,
            PersonalityDimension::Neuroticism => self.neuroticism,
        }
    }
}

impl std::fmt::Display for FiveFactor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "O: {}, C: {}, E: {}, A: {}, N: {}",
            self.openness,
            self.conscientiousness,
            self.extraversion,
            self.agreeableness,
            self.neuroticism
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_factor_get() {
        let ff = FiveFactor::new(1, 2, 3, 4, 5);
        let scores: Vec<u8> = PersonalityDimension::all()
            .iter()
            .map(|dimension| ff.get(*dimension))
            .collect();
        assert_eq!(scores, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_five_factor_display() {
        let ff = FiveFactor::new(10, 12, 13, 2, 3);
        assert_eq!(ff.to_string(), "O: 10, C: 12, E: 13, A: 2, N: 3");
    }

    #[test]
    fn test_neutral() {
        let ff = FiveFactor::neutral();
        for dimension in PersonalityDimension::all() {
            assert_eq!(ff.get(*dimension), 7);
        }
    }

    #[test]
    fn test_dimension_fields() {
        for dimension in PersonalityDimension::all() {
            assert_eq!(dimension.field().name(), dimension.name());
        }
    }
}
