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

use crate::command::Command;
use crate::error::{InspectorError, InspectorResult};
use clap::Parser;
use serde::{Deserialize, Serialize};
use serde_env_field::EnvField;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Arguments {
    #[arg(
        short = 'c',
        long = "config",
        help = "Path to configuration file",
        default_value = "inspector/config.yaml"
    )]
    pub config_file: String,

    #[arg(short = 'e', long = "env", help = "Path to environment file")]
    pub env_file: Option<String>,

    #[arg(
        short = 'f',
        long = "format",
        help = "Output format (text or json), overrides the configuration"
    )]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Command,
}

impl Default for Arguments {
    fn default() -> Self {
        Self {
            config_file: "config.yaml".to_string(),
            env_file: None,
            format: None,
            command: Command::Layout,
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Configuration {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Configuration {
    pub fn load(path: &str) -> InspectorResult<Configuration> {
        let conf = serde_yaml::from_reader(std::fs::File::open(path)?)?;
        Ok(conf)
    }

    /// Load the configuration file, falling back to defaults when it does not exist.
    pub fn load_or_default(path: &str) -> InspectorResult<Configuration> {
        if Path::new(path).exists() {
            Self::load(path)
        } else {
            tracing::debug!("Configuration file {} not found, using defaults", path);
            Ok(Configuration::default())
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: EnvField<OutputFormat>,

    /// Pretty print JSON output
    #[serde(default)]
    pub pretty: EnvField<bool>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directives used when `RUST_LOG` is unset
    #[serde(default)]
    pub filter: EnvField<LogFilter>,
}

/// How reports are written to standard output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = InspectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(InspectorError::UnknownFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LogFilter(String);

impl LogFilter {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<&str> for LogFilter {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl FromStr for LogFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_string()))
    }
}

impl Default for LogFilter {
    fn default() -> Self {
        Self(String::from("warn"))
    }
}

impl std::fmt::Display for LogFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
