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

//! Heritage Genome
//!
//! Packs the heritable attributes of a simulated individual into a single 64-bit word
//! and derives discrete behavioral traits from its personality:
//! - Bit register primitives over a fixed-width word
//! - The gene layout (sixteen fields packed from the most significant bit down)
//! - Typed accessors for appearance, physique, stats and personality
//! - Trait derivation and trait affinity scoring

mod macros;

pub mod appearance;
pub mod error;
pub mod genes;
pub mod layout;
pub mod personality;
pub mod physique;
pub mod register;
pub mod traits;

pub use self::appearance::{EyeColor, Gender, HAIR_CURL_MASK, HairColor};
pub use self::error::{GenomeError, GenomeResult};
pub use self::genes::{Genome, GenomeSummary};
pub use self::layout::{GeneField, RESERVED_BITS};
pub use self::personality::{FiveFactor, PersonalityDimension};
pub use self::physique::{Attributes, Stats};
pub use self::register::BitRegister;
pub use self::traits::{TRAIT_SENTINEL, Trait, TraitMask, derive_traits};
