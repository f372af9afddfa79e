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

use heritage_genome::GenomeError;
use thiserror::Error;

/// Errors that can occur while running the inspector.
#[derive(Debug, Error)]
pub enum InspectorError {
    /// Reading a configuration or environment file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file is not valid YAML for [`crate::config::Configuration`].
    #[error("Failed to parse config file: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Genome error: {0}")]
    Genome(#[from] GenomeError),

    /// An output format other than `text` or `json` was requested.
    #[error("Unknown output format: {0}")]
    UnknownFormat(String),
}

/// Result type for inspector operations.
pub type InspectorResult<T> = Result<T, InspectorError>;
