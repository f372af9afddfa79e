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

//! Heritage Inspector
//!
//! Command line front end for the heritage genome:
//! - Decode a genome word into its fields
//! - Encode a genome from individual gene values
//! - Derive personality traits and compare two genomes
//! - Print the gene layout

pub mod command;
pub mod config;
pub mod error;
pub mod report;

pub use self::error::{InspectorError, InspectorResult};

use self::config::{Arguments, Configuration};

/// Execute the command named by `arguments` and render its report.
///
/// The output format given on the command line takes precedence over the configured one.
pub fn run(arguments: &Arguments, config: &Configuration) -> InspectorResult<String> {
    let format = arguments.format.unwrap_or(*config.output.format);
    let report = arguments.command.execute();
    tracing::debug!(?format, pretty = *config.output.pretty, "Rendering report");
    report.render(format, *config.output.pretty)
}
