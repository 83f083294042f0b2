mod domain;
pub use domain::{DOMAIN, SCOPE_GLOBAL, SERVICE_LABEL_LABEL, SERVICE_NAME_LABEL};
pub use domain::{
    Account, EnvType, Label, RESOURCE_NAME_PATTERN, Region, ResourceName, ResourceType,
    ServiceName, Tag, resource_name_schema, tag_map_to_string_map,
};

mod error;
pub use error::{ModelError, ModelResult};

mod location;
pub use location::{ClusterLocation, ClusterLocationSet, Location, LocationSet, ValueSet};
