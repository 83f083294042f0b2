use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Value, json};

use crate::error::{ModelError, ModelResult};

/// Pattern for resource names.
///
/// Based on DNS subdomains, except that a double dash is not allowed.
pub const RESOURCE_NAME_PATTERN: &str =
    r"^[a-z0-9]((-?[a-z0-9])*)?(\.[a-z0-9]((-?[a-z0-9])*)?)*$";

const RESOURCE_NAME_MIN_LEN: usize = 1;
const RESOURCE_NAME_MAX_LEN: usize = 253;

static RESOURCE_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(RESOURCE_NAME_PATTERN).expect("resource name pattern must compile")
});

string_id!(
    custom_schema
    /// Name of a provisioned resource.
    ///
    /// Construction is unchecked like every other identifier; call
    /// [`ResourceName::validate`] or build through [`ResourceName::parse`]
    /// where names enter from user input.
    ResourceName
);

impl ResourceName {
    /// Build a resource name and check it against [`RESOURCE_NAME_PATTERN`].
    pub fn parse(value: impl Into<String>) -> ModelResult<Self> {
        let name = Self::new(value);
        name.validate()?;
        Ok(name)
    }

    /// Check length bounds and the name pattern.
    pub fn validate(&self) -> ModelResult<()> {
        let len = self.as_str().len();
        if len < RESOURCE_NAME_MIN_LEN {
            return Err(self.invalid("must not be empty".to_string()));
        }
        if len > RESOURCE_NAME_MAX_LEN {
            return Err(self.invalid(format!(
                "length {len} exceeds {RESOURCE_NAME_MAX_LEN} characters"
            )));
        }
        if !RESOURCE_NAME_RE.is_match(self.as_str()) {
            return Err(self.invalid(format!("must match {RESOURCE_NAME_PATTERN}")));
        }
        Ok(())
    }

    fn invalid(&self, reason: String) -> ModelError {
        ModelError::InvalidResourceName {
            name: self.as_str().to_string(),
            reason,
        }
    }
}

/// JSON schema describing a valid resource name.
///
/// Meant to be embedded into the schema of any document that carries a
/// resource name so the check happens before the document reaches us.
pub fn resource_name_schema() -> Value {
    json!({
        "type": "string",
        "minLength": RESOURCE_NAME_MIN_LEN,
        "maxLength": RESOURCE_NAME_MAX_LEN,
        "pattern": RESOURCE_NAME_PATTERN,
    })
}

#[cfg(feature = "schema")]
impl schemars::JsonSchema for ResourceName {
    fn schema_name() -> std::borrow::Cow<'static, str> {
        "ResourceName".into()
    }

    fn json_schema(_: &mut schemars::SchemaGenerator) -> schemars::Schema {
        schemars::json_schema!({
            "type": "string",
            "minLength": RESOURCE_NAME_MIN_LEN,
            "maxLength": RESOURCE_NAME_MAX_LEN,
            "pattern": RESOURCE_NAME_PATTERN,
        })
    }
}
