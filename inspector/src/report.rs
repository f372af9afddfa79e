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

//! Command reports and their text/JSON rendering

use crate::config::OutputFormat;
use crate::error::InspectorResult;
use heritage_genome::{FiveFactor, GeneField, Genome, GenomeSummary, TraitMask};
use serde::Serialize;
use std::fmt::Write;

/// Result of running a command.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "report", rename_all = "snake_case")]
pub enum Report {
    Decode {
        summary: GenomeSummary,
        traits: TraitReport,
    },
    Encode {
        genome: Genome,
        summary: GenomeSummary,
    },
    Traits(TraitReport),
    Compare {
        first: TraitReport,
        second: TraitReport,
        common: usize,
        opposites: usize,
        affinity: f64,
    },
    Layout {
        fields: Vec<FieldReport>,
    },
}

/// Personality and derived traits of one genome.
#[derive(Debug, Clone, Serialize)]
pub struct TraitReport {
    pub genome: Genome,
    pub five_factor: FiveFactor,
    pub mask: TraitMask,
    pub traits: Vec<&'static str>,
}

impl TraitReport {
    pub fn new(genome: Genome) -> Self {
        let mask = genome.traits();
        Self {
            genome,
            five_factor: genome.five_factor(),
            mask,
            traits: mask.iter().map(|t| t.name()).collect(),
        }
    }
}

/// One row of the gene layout.
#[derive(Debug, Clone, Serialize)]
pub struct FieldReport {
    pub name: &'static str,
    pub width: u32,
    pub offset: u32,
    pub mask: String,
    pub description: &'static str,
}

impl From<&GeneField> for FieldReport {
    fn from(field: &GeneField) -> Self {
        Self {
            name: field.name(),
            width: field.width(),
            offset: field.offset(),
            mask: format!("{:#018x}", field.mask()),
            description: field.description(),
        }
    }
}

impl Report {
    /// Render the report for standard output.
    pub fn render(&self, format: OutputFormat, pretty: bool) -> InspectorResult<String> {
        match format {
            OutputFormat::Text => Ok(self.to_string()),
            OutputFormat::Json if pretty => Ok(serde_json::to_string_pretty(self)?),
            OutputFormat::Json => Ok(serde_json::to_string(self)?),
        }
    }
}

fn write_summary(out: &mut String, summary: &GenomeSummary) -> std::fmt::Result {
    let curl = if summary.curly_hair { "curly " } else { "" };
    writeln!(out, "{:<14}{}", "genome:", summary.genome)?;
    writeln!(out, "{:<14}{}", "gender:", summary.gender)?;
    writeln!(out, "{:<14}{}", "eyes:", summary.eye_color)?;
    writeln!(out, "{:<14}{}{}", "hair:", curl, summary.hair_color)?;
    writeln!(out, "{:<14}{}", "attributes:", summary.attributes)?;
    writeln!(out, "{:<14}{}", "stats:", summary.stats)?;
    writeln!(out, "{:<14}{}", "five factor:", summary.five_factor)
}

fn write_traits(out: &mut String, report: &TraitReport) -> std::fmt::Result {
    let traits = if report.mask.is_empty() {
        "none".to_string()
    } else {
        report.mask.to_string()
    };
    writeln!(out, "{:<14}{}", "traits:", traits)
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut out = String::new();
        match self {
            Report::Decode { summary, traits } => {
                write_summary(&mut out, summary)?;
                write_traits(&mut out, traits)?;
            }
            Report::Encode { genome, .. } => {
                writeln!(out, "{genome}")?;
            }
            Report::Traits(report) => {
                writeln!(out, "{:<14}{}", "genome:", report.genome)?;
                writeln!(out, "{:<14}{}", "five factor:", report.five_factor)?;
                write_traits(&mut out, report)?;
            }
            Report::Compare {
                first,
                second,
                common,
                opposites,
                affinity,
            } => {
                writeln!(out, "{}", first.genome)?;
                write_traits(&mut out, first)?;
                writeln!(out, "{}", second.genome)?;
                write_traits(&mut out, second)?;
                writeln!(out, "{:<14}{}", "common:", common)?;
                writeln!(out, "{:<14}{}", "opposites:", opposites)?;
                writeln!(out, "{:<14}{:.3}", "affinity:", affinity)?;
            }
            Report::Layout { fields } => {
                writeln!(out, "{:<18} {:>5} {:>6}  {:<18}", "FIELD", "WIDTH", "OFFSET", "MASK")?;
                for field in fields {
                    writeln!(
                        out,
                        "{:<18} {:>5} {:>6}  {:<18}",
                        field.name, field.width, field.offset, field.mask
                    )?;
                }
            }
        }
        write!(f, "{}", out.trim_end())
    }
}
