#[macro_use]
mod ident;
pub use ident::{Account, Label, Region, ResourceType, ServiceName};

mod env_type;
pub use env_type::EnvType;

mod tag;
pub use tag::{Tag, tag_map_to_string_map};

mod resource;
pub use resource::{RESOURCE_NAME_PATTERN, ResourceName, resource_name_schema};

mod constants;
pub use constants::{DOMAIN, SCOPE_GLOBAL, SERVICE_LABEL_LABEL, SERVICE_NAME_LABEL};
