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

//! Physical attribute and stat groupings read from a genome

use serde::{Deserialize, Serialize};

/// Physical attributes: complexion, height, mass and growth.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Attributes {
    /// Skin complexion, 0..=15.
    pub complexion: u8,
    /// Height class, 0..=7.
    pub height: u8,
    /// Mass class, 0..=7.
    pub mass: u8,
    /// Growth rate, 0..=7.
    pub growth: u8,
}

impl std::fmt::Display for Attributes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "CMPLX: {}, HEIGH: {}, MASS: {}, GROW: {}",
            self.complexion, self.height, self.mass, self.growth
        )
    }
}

/// Stats: strength, intelligence, dexterity and resilience, each 0..=15.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stats {
    pub strength: u8,
    pub intelligence: u8,
    pub dexterity: u8,
    pub resilience: u8,
}

impl std::fmt::Display for Stats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Str: {}, Int: {}, Dex: {}, Res: {}",
            self.strength, self.intelligence, self.dexterity, self.resilience
        )
    }
}
