use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

#[cfg(feature = "schema")]
use schemars::JsonSchema;

use crate::error::{ModelError, ModelResult};

/// Deployment environment tier.
///
/// The set is closed: any other value coming from configuration or the wire
/// is rejected at the parse boundary ([`FromStr`] and serde), so code holding
/// an `EnvType` never has to deal with unknown tiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum EnvType {
    /// Development clusters.
    Dev,
    /// Pre-production clusters.
    Staging,
    /// Production clusters.
    Prod,
}

impl EnvType {
    /// All tiers in promotion order.
    pub const ALL: [EnvType; 3] = [EnvType::Dev, EnvType::Staging, EnvType::Prod];

    /// Canonical wire name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            EnvType::Dev => "dev",
            EnvType::Staging => "staging",
            EnvType::Prod => "prod",
        }
    }
}

impl fmt::Display for EnvType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EnvType {
    type Err = ModelError;
    fn from_str(s: &str) -> ModelResult<Self> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "dev" => Ok(EnvType::Dev),
            "staging" => Ok(EnvType::Staging),
            "prod" => Ok(EnvType::Prod),
            _ => Err(ModelError::UnknownEnvType(trimmed.to_string())),
        }
    }
}
