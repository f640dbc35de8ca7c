//! Overlap queries between a body and a group

use super::body::ArcadeBody;

/// Keys of the enabled candidates whose bounds intersect `body`
///
/// A disabled `body` overlaps nothing.
pub fn overlapping<'a, K, I>(body: &ArcadeBody, candidates: I) -> Vec<K>
where
    I: IntoIterator<Item = (K, &'a ArcadeBody)>,
{
    if !body.enabled {
        return Vec::new();
    }

    let bounds = body.bounds();
    candidates
        .into_iter()
        .filter(|(_, other)| other.enabled && bounds.intersects(&other.bounds()))
        .map(|(key, _)| key)
        .collect()
}
