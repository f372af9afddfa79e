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

//! Gene layout
//!
//! The genome is a single 64-bit word. Fields are packed from the most significant bit
//! downward; the low byte is reserved.
//!
//! ```text
//!  _______________________ 2 gender
//! || _____________________ 2 eye color
//! ||||  __________________ 3 hair color         ___________________________ 4 openness
//! |||| ||| _______________ 4 complexion        ||||  ______________________ 4 conscientiousness
//! |||| |||| ||| __________ 3 height            |||| |||| __________________ 4 extraversion
//! |||| |||| |||| || ______ 3 mass              |||| |||| ||||  ____________ 4 agreeableness
//! |||| |||| |||| |||| | __ 3 growth            |||| |||| |||| ||||  _______ 4 neuroticism
//! |||| |||| |||| |||| ||||                     |||| |||| |||| |||| ||||
//! xxxx xxxx|xxxx xxxx|xxxx xxxx|xxxx xxxx|xxxx xxxx|xxxx xxxx|xxxx xxxx|xxxx xxxx
//!                          |||| |||| |||| ||||                          |||| ||||
//! 4 strength _________________  |||| |||| ||||                           ________ reserved
//! 4 intelligence __________________  |||| ||||
//! 4 dexterity __________________________  ||||
//! 4 resilience ______________________________
//! ```
//!
//! | Field             | Width | Offset |
//! |-------------------|-------|--------|
//! | Gender            | 2     | 62     |
//! | Eye Color         | 2     | 60     |
//! | Hair Color        | 3     | 57     |
//! | Complexion        | 4     | 53     |
//! | Height            | 3     | 50     |
//! | Mass              | 3     | 47     |
//! | Growth            | 3     | 44     |
//! | Strength          | 4     | 40     |
//! | Intelligence      | 4     | 36     |
//! | Dexterity         | 4     | 32     |
//! | Resilience        | 4     | 28     |
//! | Openness          | 4     | 24     |
//! | Conscientiousness | 4     | 20     |
//! | Extraversion      | 4     | 16     |
//! | Agreeableness     | 4     | 12     |
//! | Neuroticism       | 4     | 8      |

use crate::define_gene_fields;
use crate::register;
use serde::{Deserialize, Serialize};

/// Bits of the genome not claimed by any field.
pub const RESERVED_BITS: u64 = 0xFF;

define_gene_fields! {
    Gender {
        name: "Gender",
        description: "Genetic gender of the individual.",
        width: 2,
        offset: 62,
    },
    EyeColor {
        name: "Eye Color",
        description: "Eye color of the individual.",
        width: 2,
        offset: 60,
    },
    HairColor {
        name: "Hair Color",
        description: "Base hair color in the low two bits with a curl flag above them.",
        width: 3,
        offset: 57,
    },
    Complexion {
        name: "Complexion",
        description: "Skin complexion from lightest to darkest.",
        width: 4,
        offset: 53,
    },
    Height {
        name: "Height",
        description: "Adult height class.",
        width: 3,
        offset: 50,
    },
    Mass {
        name: "Mass",
        description: "Adult body mass class.",
        width: 3,
        offset: 47,
    },
    Growth {
        name: "Growth",
        description: "Rate at which the individual matures.",
        width: 3,
        offset: 44,
    },
    Strength {
        name: "Strength",
        description: "Inherited physical strength.",
        width: 4,
        offset: 40,
    },
    Intelligence {
        name: "Intelligence",
        description: "Inherited intelligence.",
        width: 4,
        offset: 36,
    },
    Dexterity {
        name: "Dexterity",
        description: "Inherited dexterity.",
        width: 4,
        offset: 32,
    },
    Resilience {
        name: "Resilience",
        description: "Inherited resilience against hardship and illness.",
        width: 4,
        offset: 28,
    },
    Openness {
        name: "Openness",
        description: "Openness to experience.",
        width: 4,
        offset: 24,
    },
    Conscientiousness {
        name: "Conscientiousness",
        description: "Conscientiousness.",
        width: 4,
        offset: 20,
    },
    Extraversion {
        name: "Extraversion",
        description: "Extraversion.",
        width: 4,
        offset: 16,
    },
    Agreeableness {
        name: "Agreeableness",
        description: "Agreeableness.",
        width: 4,
        offset: 12,
    },
    Neuroticism {
        name: "Neuroticism",
        description: "Neuroticism.",
        width: 4,
        offset: 8,
    },
}

impl GeneField {
    /// Largest value the field can hold.
    pub const fn max_value(&self) -> u64 {
        register::mask(self.width())
    }

    /// Mask selecting this field's bits within the genome word.
    pub const fn mask(&self) -> u64 {
        self.max_value() << self.offset()
    }

    /// Check whether the bit ranges of two fields share any bit.
    pub const fn overlaps(&self, other: &GeneField) -> bool {
        self.mask() & other.mask() != 0
    }
}
