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

//! Appearance genes: gender, eye color and hair color
//!
//! Each enum converts to and from the raw field value only at the accessor layer.
//! Raw values are always masked to the field width first, so decoding is total.

use crate::error::GenomeError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Curl flag within the three bit hair color field.
pub const HAIR_CURL_MASK: u64 = 0b100;

/// Mask of the base color within the hair color field.
const HAIR_BASE_MASK: u64 = HAIR_CURL_MASK - 1;

/// Genetic gender of an individual.
///
/// Only `0b01` and `0b11` are assigned. The remaining two bit patterns decode to
/// [`Gender::Unknown`] carrying the raw value, so they survive a read/write cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Unknown(u8),
}

impl Gender {
    /// Decode a raw field value.
    pub const fn from_bits(raw: u64) -> Gender {
        match raw & 0b11 {
            0b01 => Gender::Male,
            0b11 => Gender::Female,
            other => Gender::Unknown(other as u8),
        }
    }

    /// Encode as a raw field value.
    pub const fn bits(&self) -> u64 {
        match self {
            Gender::Male => 0b01,
            Gender::Female => 0b11,
            Gender::Unknown(raw) => *raw as u64,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Unknown(_) => "x",
        }
    }

    /// All assigned genders.
    pub fn all() -> &'static [Gender] {
        &[Gender::Male, Gender::Female]
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Gender {
    type Err = GenomeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            _ => Err(GenomeError::UnknownGender(s.to_string())),
        }
    }
}

/// Eye color of an individual. Every two bit value is assigned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EyeColor {
    Red,
    Blue,
    Green,
    Brown,
}

impl EyeColor {
    pub const fn from_bits(raw: u64) -> EyeColor {
        match raw & 0b11 {
            0 => EyeColor::Red,
            1 => EyeColor::Blue,
            2 => EyeColor::Green,
            _ => EyeColor::Brown,
        }
    }

    pub const fn bits(&self) -> u64 {
        match self {
            EyeColor::Red => 0,
            EyeColor::Blue => 1,
            EyeColor::Green => 2,
            EyeColor::Brown => 3,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            EyeColor::Red => "red",
            EyeColor::Blue => "blue",
            EyeColor::Green => "green",
            EyeColor::Brown => "brown",
        }
    }

    pub fn all() -> &'static [EyeColor] {
        &[EyeColor::Red, EyeColor::Blue, EyeColor::Green, EyeColor::Brown]
    }
}

impl std::fmt::Display for EyeColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for EyeColor {
    type Err = GenomeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .find(|color| color.name().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| GenomeError::UnknownEyeColor(s.to_string()))
    }
}

/// Base hair color, stored in the low two bits of the hair color field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HairColor {
    Blonde,
    Red,
    Brown,
    Black,
}

impl HairColor {
    pub const fn from_bits(raw: u64) -> HairColor {
        match raw & HAIR_BASE_MASK {
            0 => HairColor::Blonde,
            1 => HairColor::Red,
            2 => HairColor::Brown,
            _ => HairColor::Black,
        }
    }

    pub const fn bits(&self) -> u64 {
        match self {
            HairColor::Blonde => 0,
            HairColor::Red => 1,
            HairColor::Brown => 2,
            HairColor::Black => 3,
        }
    }

    /// Compose the raw hair field from a base color and curl flag.
    ///
    /// Curly hair combines the base color with [`HAIR_CURL_MASK`] using AND, not OR.
    /// Every base color is below the curl bit, so curly hair always composes to zero
    /// (straight blonde). Use [`crate::Genome::set_hair_raw`] to store the curl bit
    /// explicitly.
    pub const fn compose(&self, curly: bool) -> u64 {
        if curly {
            self.bits() & HAIR_CURL_MASK
        } else {
            self.bits()
        }
    }

    /// Split a raw hair field into its base color and curl flag.
    pub const fn decompose(raw: u64) -> (HairColor, bool) {
        (HairColor::from_bits(raw), raw & HAIR_CURL_MASK != 0)
    }

    pub fn name(&self) -> &'static str {
        match self {
            HairColor::Blonde => "blonde",
            HairColor::Red => "red",
            HairColor::Brown => "brown",
            HairColor::Black => "black",
        }
    }

    pub fn all() -> &'static [HairColor] {
        &[
            HairColor::Blonde,
            HairColor::Red,
            HairColor::Brown,
            HairColor::Black,
        ]
    }
}

impl std::fmt::Display for HairColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for HairColor {
    type Err = GenomeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .find(|color| color.name().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| GenomeError::UnknownHairColor(s.to_string()))
    }
}
