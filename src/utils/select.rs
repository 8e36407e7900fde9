use crate::error::{ProvisionError, ResourceKind};

/// Return the first item whose key equals `wanted` exactly.
/// Zero matches is `NotFound` carrying the resource kind.
pub fn select_one<'a, T, F>(
    items: &'a [T],
    kind: ResourceKind,
    wanted: &str,
    key: F,
) -> Result<&'a T, ProvisionError>
where
    F: Fn(&T) -> &str,
{
    items
        .iter()
        .find(|item| key(item) == wanted)
        .ok_or(ProvisionError::NotFound(kind))
}
