//! Platform entity ids of the form `<domain>.<object_id>`.

/// Splits an entity id into `(domain, object_id)` at the first `.`.
///
/// Returns `None` when there is no separator.
pub fn split_entity_id(entity_id: &str) -> Option<(&str, &str)> {
    entity_id.split_once('.')
}

/// Checks the `<domain>.<object_id>` shape: both parts non-empty and made of
/// lowercase ASCII letters, digits or underscores.
pub fn is_valid_entity_id(entity_id: &str) -> bool {
    match split_entity_id(entity_id) {
        Some((domain, object_id)) => is_slug(domain) && is_slug(object_id),
        None => false,
    }
}

fn is_slug(part: &str) -> bool {
    !part.is_empty()
        && part
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}
