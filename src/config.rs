//! Analysis settings, dialect selection and machine-model documents.
//!
//! The guard-declaration convention differs between the two supported
//! configuration schema versions, so every analysis run resolves its
//! declared version to a [`GuardDialect`] up front. Unsupported versions
//! are rejected at load time.

use crate::core::errors::{Error, Result};
use crate::core::machine::StateNode;
use serde::{Deserialize, Serialize};

pub const SUPPORTED_VERSIONS: &[u32] = &[4, 5];
pub const DEFAULT_VERSION: u32 = 5;

/// Guard-declaration convention of the analyzed configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GuardDialect {
    /// Guards receive the evaluation context as their first positional
    /// parameter (version 4).
    Positional,
    /// Guards receive a single object parameter conventionally destructured
    /// into named fields, one of which is `context` (version 5).
    Destructured,
}

impl GuardDialect {
    pub fn from_version(version: u32) -> Result<Self> {
        match version {
            4 => Ok(GuardDialect::Positional),
            5 => Ok(GuardDialect::Destructured),
            other => Err(Error::UnsupportedVersion(other)),
        }
    }
}

/// Per-run analysis settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisSettings {
    /// Declared configuration schema version.
    #[serde(default = "default_version")]
    pub version: u32,
}

fn default_version() -> u32 {
    DEFAULT_VERSION
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            version: DEFAULT_VERSION,
        }
    }
}

impl AnalysisSettings {
    pub fn dialect(&self) -> Result<GuardDialect> {
        GuardDialect::from_version(self.version)
    }
}

/// A machine-model document: the declared version plus the state tree.
///
/// This is the serialized form of the abstract model, produced by an
/// external config-tree loader; it is not host configuration syntax.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MachineDocument {
    #[serde(default = "default_version")]
    pub version: u32,
    pub machine: StateNode,
}

impl MachineDocument {
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn settings(&self) -> AnalysisSettings {
        AnalysisSettings {
            version: self.version,
        }
    }
}
