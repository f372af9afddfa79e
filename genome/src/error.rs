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

use thiserror::Error;

/// Errors raised while parsing genomes and their components from text.
///
/// Reading and writing genes never fails; out of range values are truncated to the
/// width of their field instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenomeError {
    /// The text was neither a `0x` prefixed hexadecimal nor a decimal 64-bit word.
    #[error("Invalid genome: {0}")]
    InvalidGenome(String),

    /// No gene field with that name exists.
    #[error("Unknown gene field: {0}")]
    UnknownField(String),

    #[error("Unknown gender: {0}")]
    UnknownGender(String),

    #[error("Unknown eye color: {0}")]
    UnknownEyeColor(String),

    #[error("Unknown hair color: {0}")]
    UnknownHairColor(String),

    #[error("Unknown trait: {0}")]
    UnknownTrait(String),

    /// A textual gene value could not be parsed as an integer.
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },
}

/// Result type for genome parsing operations.
pub type GenomeResult<T> = Result<T, GenomeError>;
