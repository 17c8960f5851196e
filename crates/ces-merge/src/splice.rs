use ces_types::EntityRecord;

/// Where a replacement splice begins within an entity collection.
///
/// Export files commonly open with a "header" of permission-like records
/// followed by content records. `SplicePoint` makes the boundary an explicit
/// caller decision instead of a scan over raw serialized lines.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SplicePoint {
    /// Offset 0: discard the whole collection.
    Start,
    /// An explicit record index, clamped to the collection length.
    Index(usize),
    /// The index of the first record whose discriminator equals the given
    /// category. Falls back to offset 0 (replace everything) when no record
    /// matches; callers that need a different fallback should resolve an
    /// [`SplicePoint::Index`] themselves.
    BeforeKind(String),
}

impl SplicePoint {
    /// Convenience constructor for [`SplicePoint::BeforeKind`].
    pub fn before_kind(kind: impl Into<String>) -> Self {
        Self::BeforeKind(kind.into())
    }

    /// Resolve to a concrete offset into `records`.
    ///
    /// Total: always returns a value in `0..=records.len()`.
    pub fn resolve(&self, records: &[EntityRecord]) -> usize {
        match self {
            Self::Start => 0,
            Self::Index(n) => (*n).min(records.len()),
            Self::BeforeKind(kind) => records
                .iter()
                .position(|r| r.is_kind(kind))
                .unwrap_or(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ces_types::{JsonMap, KeyedEntity};

    fn keyed(kind: &str, id: i64) -> EntityRecord {
        EntityRecord::Keyed(KeyedEntity::new(kind, id, JsonMap::new()))
    }

    #[test]
    fn start_resolves_to_zero() {
        let records = vec![keyed("a", 1), keyed("b", 2)];
        assert_eq!(SplicePoint::Start.resolve(&records), 0);
    }

    #[test]
    fn index_is_clamped_to_length() {
        let records = vec![keyed("a", 1), keyed("b", 2)];
        assert_eq!(SplicePoint::Index(1).resolve(&records), 1);
        assert_eq!(SplicePoint::Index(2).resolve(&records), 2);
        assert_eq!(SplicePoint::Index(99).resolve(&records), 2);
    }

    #[test]
    fn before_kind_finds_first_match() {
        let records = vec![
            keyed("plugin::users-permissions.permission", 1),
            keyed("plugin::users-permissions.permission", 2),
            keyed("api::article.article", 13),
            keyed("api::article.article", 14),
        ];
        let point = SplicePoint::before_kind("api::article.article");
        assert_eq!(point.resolve(&records), 2);
    }

    #[test]
    fn before_kind_without_match_falls_back_to_zero() {
        let records = vec![keyed("a", 1), keyed("b", 2)];
        let point = SplicePoint::before_kind("api::category.category");
        assert_eq!(point.resolve(&records), 0);
    }

    #[test]
    fn resolve_on_empty_collection_is_zero() {
        for point in [
            SplicePoint::Start,
            SplicePoint::Index(5),
            SplicePoint::before_kind("api::article.article"),
        ] {
            assert_eq!(point.resolve(&[]), 0);
        }
    }
}
