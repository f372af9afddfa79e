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

//! The genome word and its typed accessors
//!
//! A [`Genome`] is a plain 64-bit value. Setters never mutate; they return a new genome
//! and the caller decides whether to keep it. Values wider than a field are truncated to
//! the field's low bits rather than rejected.

use crate::appearance::{EyeColor, Gender, HairColor};
use crate::error::{GenomeError, GenomeResult};
use crate::layout::GeneField;
use crate::personality::FiveFactor;
use crate::physique::{Attributes, Stats};
use crate::register::BitRegister;
use crate::traits::{TraitMask, derive_traits};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Packed heritable attributes of one individual.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Genome(u64);

/// Generates a `u8` getter/setter pair for a plain integer field.
macro_rules! integer_gene {
    ($get:ident, $set:ident, $field:ident) => {
        #[doc = concat!("Read the ", stringify!($field), " gene.")]
        pub fn $get(self) -> u8 {
            self.get(GeneField::$field) as u8
        }

        #[doc = concat!("Write the ", stringify!($field), " gene, truncating to its width.")]
        pub fn $set(self, value: u8) -> Genome {
            self.set(GeneField::$field, u64::from(value))
        }
    };
}

impl Genome {
    pub const fn new(word: u64) -> Self {
        Self(word)
    }

    /// The raw word.
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Read a field. The result always lies in `0..=field.max_value()`.
    pub fn get(self, field: GeneField) -> u64 {
        self.0.read_bits(field.offset(), field.width())
    }

    /// Return a genome with `field` replaced by the low bits of `value`. Every other
    /// field keeps its value.
    pub fn set(self, field: GeneField, value: u64) -> Genome {
        Genome(self.0.write_bits(field.offset(), field.width(), value))
    }

    pub fn gender(self) -> Gender {
        Gender::from_bits(self.get(GeneField::Gender))
    }

    pub fn set_gender(self, gender: Gender) -> Genome {
        self.set(GeneField::Gender, gender.bits())
    }

    pub fn eye_color(self) -> EyeColor {
        EyeColor::from_bits(self.get(GeneField::EyeColor))
    }

    pub fn set_eye_color(self, color: EyeColor) -> Genome {
        self.set(GeneField::EyeColor, color.bits())
    }

    /// Base hair color and whether the hair is curly.
    pub fn hair_color(self) -> (HairColor, bool) {
        HairColor::decompose(self.get(GeneField::HairColor))
    }

    /// Write the hair color gene from a base color and curl flag.
    ///
    /// See [`HairColor::compose`]: curly hair is composed with AND and therefore stores
    /// zero, losing both the base color and the curl.
    pub fn set_hair_color(self, color: HairColor, curly: bool) -> Genome {
        let raw = color.compose(curly);
        if curly {
            tracing::debug!(%color, raw, "Curly hair composed by masking the base color");
        }
        self.set(GeneField::HairColor, raw)
    }

    /// Raw three bit hair color field: base color in bits 0-1, curl flag in bit 2.
    pub fn hair_raw(self) -> u8 {
        self.get(GeneField::HairColor) as u8
    }

    /// Write the raw hair color field, truncating to three bits.
    pub fn set_hair_raw(self, raw: u8) -> Genome {
        self.set(GeneField::HairColor, u64::from(raw))
    }

    integer_gene!(complexion, set_complexion, Complexion);
    integer_gene!(height, set_height, Height);
    integer_gene!(mass, set_mass, Mass);
    integer_gene!(growth, set_growth, Growth);
    integer_gene!(strength, set_strength, Strength);
    integer_gene!(intelligence, set_intelligence, Intelligence);
    integer_gene!(dexterity, set_dexterity, Dexterity);
    integer_gene!(resilience, set_resilience, Resilience);
    integer_gene!(openness, set_openness, Openness);
    integer_gene!(conscientiousness, set_conscientiousness, Conscientiousness);
    integer_gene!(extraversion, set_extraversion, Extraversion);
    integer_gene!(agreeableness, set_agreeableness, Agreeableness);
    integer_gene!(neuroticism, set_neuroticism, Neuroticism);

    /// Physical attributes: complexion, height, mass and growth.
    pub fn attributes(self) -> Attributes {
        Attributes {
            complexion: self.complexion(),
            height: self.height(),
            mass: self.mass(),
            growth: self.growth(),
        }
    }

    pub fn set_attributes(self, attrs: Attributes) -> Genome {
        self.set_complexion(attrs.complexion)
            .set_height(attrs.height)
            .set_mass(attrs.mass)
            .set_growth(attrs.growth)
    }

    /// Stats: strength, intelligence, dexterity and resilience.
    pub fn stats(self) -> Stats {
        Stats {
            strength: self.strength(),
            intelligence: self.intelligence(),
            dexterity: self.dexterity(),
            resilience: self.resilience(),
        }
    }

    pub fn set_stats(self, stats: Stats) -> Genome {
        self.set_strength(stats.strength)
            .set_intelligence(stats.intelligence)
            .set_dexterity(stats.dexterity)
            .set_resilience(stats.resilience)
    }

    /// Five factor personality.
    pub fn five_factor(self) -> FiveFactor {
        FiveFactor {
            openness: self.openness(),
            conscientiousness: self.conscientiousness(),
            extraversion: self.extraversion(),
            agreeableness: self.agreeableness(),
            neuroticism: self.neuroticism(),
        }
    }

    pub fn set_five_factor(self, ff: FiveFactor) -> Genome {
        self.set_openness(ff.openness)
            .set_conscientiousness(ff.conscientiousness)
            .set_extraversion(ff.extraversion)
            .set_agreeableness(ff.agreeableness)
            .set_neuroticism(ff.neuroticism)
    }

    /// Traits derived from this genome's personality.
    pub fn traits(self) -> TraitMask {
        derive_traits(&self.five_factor())
    }

    /// Decode every field.
    pub fn summary(self) -> GenomeSummary {
        let (hair_color, curly_hair) = self.hair_color();
        GenomeSummary {
            genome: self,
            gender: self.gender(),
            eye_color: self.eye_color(),
            hair_color,
            curly_hair,
            attributes: self.attributes(),
            stats: self.stats(),
            five_factor: self.five_factor(),
        }
    }
}

impl From<u64> for Genome {
    fn from(word: u64) -> Self {
        Genome(word)
    }
}

impl From<Genome> for u64 {
    fn from(genome: Genome) -> Self {
        genome.0
    }
}

impl std::fmt::LowerHex for Genome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::LowerHex::fmt(&self.0, f)
    }
}

impl std::fmt::UpperHex for Genome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::UpperHex::fmt(&self.0, f)
    }
}

impl std::fmt::Display for Genome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#018x}", self.0)
    }
}

impl FromStr for Genome {
    type Err = GenomeError;

    /// Parse a `0x` prefixed hexadecimal or a decimal word. Underscores are ignored.
    fn from_str(s: &str) -> GenomeResult<Self> {
        let cleaned = s.trim().replace('_', "");
        let parsed = match cleaned
            .strip_prefix("0x")
            .or_else(|| cleaned.strip_prefix("0X"))
        {
            Some(hex) => u64::from_str_radix(hex, 16),
            None => cleaned.parse::<u64>(),
        };
        parsed
            .map(Genome)
            .map_err(|e| GenomeError::InvalidGenome(format!("{s}: {e}")))
    }
}

/// Every field of a genome, decoded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenomeSummary {
    pub genome: Genome,
    pub gender: Gender,
    pub eye_color: EyeColor,
    pub hair_color: HairColor,
    pub curly_hair: bool,
    pub attributes: Attributes,
    pub stats: Stats,
    pub five_factor: FiveFactor,
}

impl std::fmt::Display for GenomeSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let curl = if self.curly_hair { "curly " } else { "" };
        write!(
            f,
            "gender: {}, eyes: {}, hair: {}{}, attrs: {}, stats: {}, five factor: {}",
            self.gender,
            self.eye_color,
            curl,
            self.hair_color,
            self.attributes,
            self.stats,
            self.five_factor
        )
    }
}
