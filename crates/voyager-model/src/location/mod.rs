//! Deployment coordinates.
//!
//! A [`ClusterLocation`] names a cluster; a [`Location`] is a cluster
//! location narrowed to an optional sub-environment [`crate::Label`]. The two
//! convert into each other without loss apart from the label.

mod cluster;
pub use cluster::ClusterLocation;

mod labelled;
pub use labelled::Location;

mod set;
pub use set::{ClusterLocationSet, LocationSet, ValueSet};

/// Shared `Display` body: echoes the Micros domain-name form.
fn write_coordinates(
    f: &mut std::fmt::Formatter<'_>,
    region: &crate::Region,
    env_type: crate::EnvType,
    account: &crate::Account,
) -> std::fmt::Result {
    write!(f, "{region}.{env_type} (account: {account})")
}
