use std::fmt;

use serde::{Deserialize, Serialize};

#[cfg(feature = "schema")]
use schemars::JsonSchema;

use crate::{Account, ClusterLocation, EnvType, Label, Region};

/// Full deployment coordinate: a cluster location plus an optional label.
///
/// Serialized as `{"envType", "account", "region", "label"}`; `label` is
/// left out when empty and treated as empty when missing.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub env_type: EnvType,
    pub account: Account,
    pub region: Region,
    /// Environment/namespace label, not an orchestration metadata label.
    #[serde(default, skip_serializing_if = "Label::is_empty")]
    pub label: Label,
}

impl Location {
    /// Create a location from its coordinates and label.
    ///
    /// Pass an empty label for a location without a sub-environment:
    ///
    /// ```rust
    /// use voyager_model::{EnvType, Location};
    ///
    /// let blue = Location::new(EnvType::Prod, "acct1", "us-east-1", "blue");
    /// assert_eq!(blue.to_string(), "blue--us-east-1.prod (account: acct1)");
    ///
    /// let bare = Location::new(EnvType::Prod, "acct1", "us-east-1", "");
    /// assert_eq!(bare.to_string(), "us-east-1.prod (account: acct1)");
    /// ```
    pub fn new(
        env_type: EnvType,
        account: impl Into<Account>,
        region: impl Into<Region>,
        label: impl Into<Label>,
    ) -> Self {
        Self {
            env_type,
            account: account.into(),
            region: region.into(),
            label: label.into(),
        }
    }

    /// Drop the label, keeping the cluster coordinates.
    ///
    /// Every location maps to exactly one cluster; locations that differ only
    /// by label map to the same one.
    pub fn cluster_location(&self) -> ClusterLocation {
        ClusterLocation {
            env_type: self.env_type,
            account: self.account.clone(),
            region: self.region.clone(),
        }
    }
}

impl From<ClusterLocation> for Location {
    fn from(cl: ClusterLocation) -> Self {
        Self {
            env_type: cl.env_type,
            account: cl.account,
            region: cl.region,
            label: Label::default(),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.label.is_empty() {
            write!(f, "{}--", self.label)?;
        }
        super::write_coordinates(f, &self.region, self.env_type, &self.account)
    }
}
