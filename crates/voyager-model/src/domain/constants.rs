//! Well-known platform strings.
//!
//! The label keys are used as annotation/label names by the metadata layer
//! that tags deployed objects, so their spelling is part of the wire contract.

macro_rules! domain {
    () => {
        "voyager.atl-paas.net"
    };
}

/// Platform domain that namespaces every well-known key.
pub const DOMAIN: &str = domain!();

/// Scope name for resources that are not bound to a single location.
pub const SCOPE_GLOBAL: &str = "global";

/// Metadata label carrying the owning service name.
pub const SERVICE_NAME_LABEL: &str = concat!(domain!(), "/serviceName");

/// Metadata label carrying the [`crate::Label`] of a [`crate::Location`].
pub const SERVICE_LABEL_LABEL: &str = concat!(domain!(), "/label");
