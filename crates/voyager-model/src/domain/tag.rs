use std::collections::HashMap;

string_id!(
    /// Key of a cloud-provider resource tag.
    Tag
);

/// Rekey a tag map by plain strings for APIs that take untyped tags.
///
/// Every entry is kept and values are not touched. Keys cannot collide since
/// a `Tag` is exactly its string.
pub fn tag_map_to_string_map(tags: &HashMap<Tag, String>) -> HashMap<String, String> {
    tags.iter()
        .map(|(k, v)| (k.as_str().to_owned(), v.clone()))
        .collect()
}
