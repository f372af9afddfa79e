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

//! Inspector subcommands
//!
//! Each command is a pure computation over genomes and returns a [`Report`]; writing the
//! report is left to the caller.

use crate::report::{FieldReport, Report, TraitReport};
use clap::{Args, Subcommand};
use heritage_genome::{EyeColor, GeneField, Gender, Genome, HairColor};

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Decode every field of a genome
    Decode {
        /// Genome word, hexadecimal with 0x prefix or decimal
        genome: Genome,
    },

    /// Build a genome from individual gene values
    Encode(EncodeArgs),

    /// Derive the personality traits of a genome
    Traits {
        /// Genome word, hexadecimal with 0x prefix or decimal
        genome: Genome,
    },

    /// Compare the traits of two genomes
    Compare {
        /// First genome word
        first: Genome,
        /// Second genome word
        second: Genome,
    },

    /// Print the gene layout
    Layout,
}

/// Gene values for `encode`. Every gene left out keeps the value of the base genome.
/// Integer values wider than their gene are truncated to its low bits.
#[derive(Debug, Clone, Default, Args)]
pub struct EncodeArgs {
    /// Genome to start from instead of zero
    #[arg(long)]
    pub base: Option<Genome>,

    #[arg(long)]
    pub gender: Option<Gender>,

    #[arg(long)]
    pub eye_color: Option<EyeColor>,

    #[arg(long)]
    pub hair_color: Option<HairColor>,

    /// Compose the hair color as curly (masks the base color)
    #[arg(long, requires = "hair_color")]
    pub curly: bool,

    /// Raw three bit hair field, written after --hair-color
    #[arg(long)]
    pub hair_raw: Option<u8>,

    #[arg(long)]
    pub complexion: Option<u8>,

    #[arg(long)]
    pub height: Option<u8>,

    #[arg(long)]
    pub mass: Option<u8>,

    #[arg(long)]
    pub growth: Option<u8>,

    #[arg(long)]
    pub strength: Option<u8>,

    #[arg(long)]
    pub intelligence: Option<u8>,

    #[arg(long)]
    pub dexterity: Option<u8>,

    #[arg(long)]
    pub resilience: Option<u8>,

    #[arg(long)]
    pub openness: Option<u8>,

    #[arg(long)]
    pub conscientiousness: Option<u8>,

    #[arg(long)]
    pub extraversion: Option<u8>,

    #[arg(long)]
    pub agreeableness: Option<u8>,

    #[arg(long)]
    pub neuroticism: Option<u8>,
}

impl EncodeArgs {
    /// Apply every provided gene to the base genome.
    pub fn encode(&self) -> Genome {
        let mut genome = self.base.unwrap_or_default();

        if let Some(gender) = self.gender {
            genome = genome.set_gender(gender);
        }
        if let Some(color) = self.eye_color {
            genome = genome.set_eye_color(color);
        }
        if let Some(color) = self.hair_color {
            genome = genome.set_hair_color(color, self.curly);
        }
        if let Some(raw) = self.hair_raw {
            genome = genome.set_hair_raw(raw);
        }

        let integers = [
            (GeneField::Complexion, self.complexion),
            (GeneField::Height, self.height),
            (GeneField::Mass, self.mass),
            (GeneField::Growth, self.growth),
            (GeneField::Strength, self.strength),
            (GeneField::Intelligence, self.intelligence),
            (GeneField::Dexterity, self.dexterity),
            (GeneField::Resilience, self.resilience),
            (GeneField::Openness, self.openness),
            (GeneField::Conscientiousness, self.conscientiousness),
            (GeneField::Extraversion, self.extraversion),
            (GeneField::Agreeableness, self.agreeableness),
            (GeneField::Neuroticism, self.neuroticism),
        ];
        for (field, value) in integers {
            if let Some(value) = value {
                if u64::from(value) > field.max_value() {
                    tracing::warn!(
                        "{} value {} exceeds {}, storing {}",
                        field,
                        value,
                        field.max_value(),
                        u64::from(value) & field.max_value()
                    );
                }
                genome = genome.set(field, u64::from(value));
            }
        }

        genome
    }
}

impl Command {
    /// Run the command.
    pub fn execute(&self) -> Report {
        match self {
            Command::Decode { genome } => {
                tracing::info!("Decoding genome {}", genome);
                Report::Decode {
                    summary: genome.summary(),
                    traits: TraitReport::new(*genome),
                }
            }
            Command::Encode(args) => {
                let genome = args.encode();
                tracing::info!("Encoded genome {}", genome);
                Report::Encode {
                    genome,
                    summary: genome.summary(),
                }
            }
            Command::Traits { genome } => {
                tracing::info!("Deriving traits of genome {}", genome);
                Report::Traits(TraitReport::new(*genome))
            }
            Command::Compare { first, second } => {
                tracing::info!("Comparing genomes {} and {}", first, second);
                let first = TraitReport::new(*first);
                let second = TraitReport::new(*second);
                Report::Compare {
                    common: first.mask.count_common(&second.mask),
                    opposites: first.mask.count_opposites(&second.mask),
                    affinity: first.mask.compare(&second.mask),
                    first,
                    second,
                }
            }
            Command::Layout => Report::Layout {
                fields: GeneField::all().iter().map(FieldReport::from).collect(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heritage_genome::{FiveFactor, Trait};

    #[test]
    fn test_encode_defaults_to_zero() {
        assert_eq!(EncodeArgs::default().encode(), Genome::default());
    }

    #[test]
    fn test_encode_appearance() {
        let args = EncodeArgs {
            gender: Some(Gender::Female),
            eye_color: Some(EyeColor::Brown),
            height: Some(5),
            ..EncodeArgs::default()
        };
        assert_eq!(args.encode(), Genome::new(0xF014_0000_0000_0000));
    }

    #[test]
    fn test_encode_from_base() {
        let base = Genome::new(0xF014_0000_0000_0000);
        let args = EncodeArgs {
            base: Some(base),
            gender: Some(Gender::Male),
            ..EncodeArgs::default()
        };
        let genome = args.encode();
        assert_eq!(genome.gender(), Gender::Male);
        assert_eq!(genome.eye_color(), EyeColor::Brown);
        assert_eq!(genome.height(), 5);
    }

    #[test]
    fn test_encode_truncates() {
        let args = EncodeArgs {
            mass: Some(9),
            ..EncodeArgs::default()
        };
        assert_eq!(args.encode().mass(), 1);
    }

    #[test]
    fn test_encode_hair_raw_after_color() {
        let args = EncodeArgs {
            hair_color: Some(HairColor::Red),
            curly: true,
            hair_raw: Some(0b101),
            ..EncodeArgs::default()
        };
        assert_eq!(args.encode().hair_color(), (HairColor::Red, true));
    }

    #[test]
    fn test_compare_command() {
        let first = Genome::default().set_five_factor(FiveFactor::new(15, 15, 15, 15, 15));
        let second = Genome::default().set_five_factor(FiveFactor::new(0, 0, 0, 0, 0));
        let report = Command::Compare { first, second }.execute();
        match report {
            Report::Compare {
                common,
                opposites,
                affinity,
                ..
            } => {
                assert_eq!(common, 0);
                assert_eq!(opposites, 5);
                assert_eq!(affinity, -1.0);
            }
            other => panic!("unexpected report {other:?}"),
        }
    }

    #[test]
    fn test_traits_command() {
        let genome = Genome::default().set_five_factor(FiveFactor::new(10, 12, 13, 2, 3));
        match (Command::Traits { genome }).execute() {
            Report::Traits(report) => {
                assert_eq!(report.traits, vec![Trait::Ambitious.name()]);
                assert_eq!(report.five_factor, genome.five_factor());
            }
            other => panic!("unexpected report {other:?}"),
        }
    }

    #[test]
    fn test_layout_command() {
        match Command::Layout.execute() {
            Report::Layout { fields } => assert_eq!(fields.len(), 16),
            other => panic!("unexpected report {other:?}"),
        }
    }
}
