use ces_types::EntityRecord;
use tracing::debug;

use crate::splice::SplicePoint;

/// Append `new` at the end of `records`, preserving original order.
///
/// No deduplication is performed: appending a batch twice doubles its
/// count. Callers are responsible for not double-adding.
pub fn append_all(
    mut records: Vec<EntityRecord>,
    new: impl IntoIterator<Item = EntityRecord>,
) -> Vec<EntityRecord> {
    records.extend(new);
    records
}

/// Keep the records before `point`, discard the rest, and append `new`.
///
/// The offset is resolved by [`SplicePoint::resolve`]; everything from that
/// offset onward in the original collection is dropped.
pub fn replace_from(
    mut records: Vec<EntityRecord>,
    point: &SplicePoint,
    new: impl IntoIterator<Item = EntityRecord>,
) -> Vec<EntityRecord> {
    let offset = point.resolve(&records);
    let discarded = records.len() - offset;
    records.truncate(offset);
    records.extend(new);
    debug!(offset, discarded, total = records.len(), "spliced entity collection");
    records
}

/// Apply `mutate` to the first record satisfying `predicate`.
///
/// Returns `true` if a record matched. Later matches are untouched.
pub fn update_first<P, M>(records: &mut [EntityRecord], predicate: P, mutate: M) -> bool
where
    P: Fn(&EntityRecord) -> bool,
    M: FnOnce(&mut EntityRecord),
{
    match records.iter_mut().find(|r| predicate(r)) {
        Some(record) => {
            mutate(record);
            true
        }
        None => false,
    }
}
