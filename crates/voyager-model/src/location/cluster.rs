use std::fmt;

use serde::{Deserialize, Serialize};

#[cfg(feature = "schema")]
use schemars::JsonSchema;

use crate::{Account, EnvType, Label, Location, Region};

/// Coordinate of a single cluster: environment tier, account and region.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct ClusterLocation {
    /// Environment tier of the cluster.
    pub env_type: EnvType,
    /// Account owning the cluster.
    pub account: Account,
    /// Region the cluster runs in.
    pub region: Region,
}

impl ClusterLocation {
    /// Create a cluster location from its three coordinates.
    ///
    /// ```rust
    /// use voyager_model::{ClusterLocation, EnvType};
    ///
    /// let cl = ClusterLocation::new(EnvType::Prod, "acct1", "us-east-1");
    /// assert_eq!(cl.to_string(), "us-east-1.prod (account: acct1)");
    /// ```
    pub fn new(env_type: EnvType, account: impl Into<Account>, region: impl Into<Region>) -> Self {
        Self {
            env_type,
            account: account.into(),
            region: region.into(),
        }
    }

    /// Attach a label, producing the full [`Location`].
    ///
    /// The empty label is accepted and yields a location without a label.
    pub fn location(&self, label: impl Into<Label>) -> Location {
        Location {
            env_type: self.env_type,
            account: self.account.clone(),
            region: self.region.clone(),
            label: label.into(),
        }
    }
}

impl fmt::Display for ClusterLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        super::write_coordinates(f, &self.region, self.env_type, &self.account)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prod_east() -> ClusterLocation {
        ClusterLocation::new(EnvType::Prod, "acct1", "us-east-1")
    }

    #[test]
    fn display_echoes_domain_form() {
        assert_eq!(prod_east().to_string(), "us-east-1.prod (account: acct1)");
    }

    #[test]
    fn location_then_project_is_identity() {
        let cl = prod_east();
        for label in ["", "blue", "green--canary"] {
            assert_eq!(cl.location(label).cluster_location(), cl);
        }
    }

    #[test]
    fn location_keeps_label() {
        let loc = prod_east().location("blue");
        assert_eq!(loc.label.as_str(), "blue");
        assert_eq!(loc.env_type, EnvType::Prod);
        assert_eq!(loc.account.as_str(), "acct1");
        assert_eq!(loc.region.as_str(), "us-east-1");
    }

    #[test]
    fn equality_ignores_construction_path() {
        let literal = ClusterLocation {
            env_type: EnvType::Prod,
            account: Account::new("acct1"),
            region: Region::new("us-east-1"),
        };
        let projected = prod_east().location("blue").cluster_location();

        assert_eq!(literal, prod_east());
        assert_eq!(literal, projected);
    }

    #[test]
    fn serde_uses_camel_case() {
        let json = serde_json::to_value(prod_east()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"envType": "prod", "account": "acct1", "region": "us-east-1"})
        );

        let back: ClusterLocation = serde_json::from_value(json).unwrap();
        assert_eq!(back, prod_east());
    }
}
