//! Nominal string identifiers.
//!
//! Each identifier wraps a `String` but is its own type, so a [`Region`] can
//! never be passed where an [`Account`] is expected. No validation is applied
//! on construction; see [`crate::ResourceName::validate`] for the one type
//! that carries a format.

/// Declares a transparent string newtype with the shared identifier API.
///
/// Pass `custom_schema` first when the type provides its own
/// `schemars::JsonSchema` implementation.
macro_rules! string_id {
    (custom_schema $(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        string_id!(@impl $name);
    };
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
        #[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
        #[serde(transparent)]
        pub struct $name(String);

        string_id!(@impl $name);
    };
    (@impl $name:ident) => {
        impl $name {
            /// Wrap a raw string.
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Borrow the underlying string.
            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Returns `true` for the zero value.
            #[inline]
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }

            /// Unwrap into the underlying string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl std::borrow::Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id!(
    /// Cloud region a cluster runs in (e.g. `us-east-1`).
    Region
);

string_id!(
    /// Cloud account that owns a cluster.
    Account
);

string_id!(
    /// Sub-environment / namespace label of a [`crate::Location`].
    ///
    /// This is an application-level label, not an orchestration-platform
    /// metadata label. The empty label means "no label".
    Label
);

string_id!(
    /// Name of a deployed service.
    ServiceName
);

string_id!(
    /// Kind of a provisioned resource.
    ResourceType
);
