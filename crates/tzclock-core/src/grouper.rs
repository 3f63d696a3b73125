//! Offset grouper: partitions a timezone database's enumeration into
//! buckets keyed by each zone's UTC offset at one reference instant.

use std::collections::HashMap;
use std::slice;

use chrono::DateTime;
use chrono::Utc;

use serde::Serialize;

use crate::offset::UtcOffset;
use crate::tzdb::TzDatabase;
use crate::zone::ZoneId;

/// All zones sharing one UTC offset at the reference instant, in database
/// enumeration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OffsetGroup {
    pub offset: UtcOffset,
    pub zones: Vec<ZoneId>,
}

/// The full grouping for one reference instant.
///
/// Groups appear in first-encounter order while walking the database
/// enumeration; no sorting by offset value happens here. The grouping is
/// recomputed wholesale when the reference instant changes, never mutated
/// incrementally.
///
/// Invariant: every identifier the database enumerates appears in exactly
/// one group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct OffsetGroups {
    groups: Vec<OffsetGroup>,
}

impl OffsetGroups {
    /// Groups every zone the database knows by its offset at `at`.
    ///
    /// An empty database yields an empty grouping; that is not an error,
    /// just an unusable picker.
    pub fn compute(db: &dyn TzDatabase, at: DateTime<Utc>) -> Self {
        let mut groups: Vec<OffsetGroup> = Vec::new();
        let mut by_offset: HashMap<UtcOffset, usize> = HashMap::new();

        for zone in db.zone_ids() {
            // Enumerated identifiers resolve by contract; a database that
            // breaks that contract loses the zone here.
            let Ok(offset) = db.offset_at(&zone, at) else {
                continue;
            };
            match by_offset.get(&offset) {
                Some(&slot) => groups[slot].zones.push(zone),
                None => {
                    by_offset.insert(offset, groups.len());
                    groups.push(OffsetGroup {
                        offset,
                        zones: vec![zone],
                    });
                }
            }
        }

        Self { groups }
    }

    pub fn iter(&self) -> slice::Iter<'_, OffsetGroup> {
        self.groups.iter()
    }

    /// Number of distinct offsets.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of zones across all groups.
    pub fn zone_count(&self) -> usize {
        self.groups.iter().map(|g| g.zones.len()).sum()
    }

    pub fn contains(&self, zone: &ZoneId) -> bool {
        self.groups.iter().any(|g| g.zones.contains(zone))
    }
}

impl<'a> IntoIterator for &'a OffsetGroups {
    type Item = &'a OffsetGroup;
    type IntoIter = slice::Iter<'a, OffsetGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MockDatabase;
    use crate::tzdb::IanaDatabase;
    use chrono::TimeZone;
    use std::collections::HashSet;

    fn at(y: i32, mo: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, 0, 0).unwrap()
    }

    fn fixture() -> MockDatabase {
        MockDatabase::new()
            .with_zone("Test/Utc", 0)
            .with_zone("Test/Paris", 3600)
            .with_zone("Test/Kolkata", 5 * 3600 + 30 * 60)
            .with_zone("Test/London", 0)
            .with_zone("Test/Berlin", 3600)
    }

    #[test]
    fn test_groups_keep_first_encounter_order() {
        let groups = OffsetGroups::compute(&fixture(), at(2024, 1, 15, 12));

        let offsets: Vec<String> = groups.iter().map(|g| g.offset.to_string()).collect();
        assert_eq!(offsets, vec!["Z", "+01:00", "+05:30"]);
    }

    #[test]
    fn test_zones_keep_enumeration_order_within_group() {
        let groups = OffsetGroups::compute(&fixture(), at(2024, 1, 15, 12));

        let zero_group = groups.iter().find(|g| g.offset == UtcOffset::UTC).unwrap();
        let names: Vec<&str> = zero_group.zones.iter().map(ZoneId::as_str).collect();
        assert_eq!(names, vec!["Test/Utc", "Test/London"]);
    }

    #[test]
    fn test_grouping_partitions_the_enumeration() {
        let db = fixture();
        let groups = OffsetGroups::compute(&db, at(2024, 1, 15, 12));

        assert_eq!(groups.zone_count(), db.zone_ids().len());
        let mut seen = HashSet::new();
        for group in &groups {
            for zone in &group.zones {
                assert!(seen.insert(zone.clone()), "{zone} appears twice");
            }
        }
        for zone in db.zone_ids() {
            assert!(groups.contains(&zone), "{zone} missing from grouping");
        }
    }

    #[test]
    fn test_empty_database_yields_empty_grouping() {
        let groups = OffsetGroups::compute(&MockDatabase::new(), at(2024, 1, 15, 12));
        assert!(groups.is_empty());
        assert_eq!(groups.zone_count(), 0);
    }

    #[test]
    fn test_grouping_is_deterministic() {
        let db = fixture();
        let reference = at(2024, 1, 15, 12);
        assert_eq!(
            OffsetGroups::compute(&db, reference),
            OffsetGroups::compute(&db, reference)
        );
    }

    #[test]
    fn test_real_database_partitions_fully() {
        let db = IanaDatabase::new();
        let groups = OffsetGroups::compute(&db, at(2024, 1, 15, 12));

        let ids = db.zone_ids();
        assert_eq!(groups.zone_count(), ids.len());
        let seen: HashSet<ZoneId> = groups
            .iter()
            .flat_map(|g| g.zones.iter().cloned())
            .collect();
        assert_eq!(seen.len(), ids.len());
    }

    #[test]
    fn test_dst_moves_zones_between_groups() {
        let db = IanaDatabase::new();
        let london = ZoneId::from("Europe/London");
        let utc = ZoneId::from("UTC");

        let same_group = |groups: &OffsetGroups| {
            groups
                .iter()
                .any(|g| g.zones.contains(&london) && g.zones.contains(&utc))
        };

        // London sits at Z in winter and at +01:00 in summer.
        assert!(same_group(&OffsetGroups::compute(&db, at(2024, 1, 15, 12))));
        assert!(!same_group(&OffsetGroups::compute(&db, at(2024, 7, 15, 12))));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_every_zone_lands_in_exactly_one_group(
                hours in prop::collection::vec(-12i32..=14, 1..80)
            ) {
                let mut db = MockDatabase::new();
                for (i, &h) in hours.iter().enumerate() {
                    db = db.with_zone(&format!("Zone/{i}"), h * 3600);
                }
                let groups = OffsetGroups::compute(&db, at(2024, 1, 15, 12));

                prop_assert_eq!(groups.zone_count(), hours.len());
                let unique: HashSet<ZoneId> = groups
                    .iter()
                    .flat_map(|g| g.zones.iter().cloned())
                    .collect();
                prop_assert_eq!(unique.len(), hours.len());
                for i in 0..hours.len() {
                    let id = ZoneId::new(format!("Zone/{i}"));
                    prop_assert!(groups.contains(&id));
                }
            }

            #[test]
            fn prop_groups_never_share_an_offset(
                hours in prop::collection::vec(-12i32..=14, 1..80)
            ) {
                let mut db = MockDatabase::new();
                for (i, &h) in hours.iter().enumerate() {
                    db = db.with_zone(&format!("Zone/{i}"), h * 3600);
                }
                let groups = OffsetGroups::compute(&db, at(2024, 1, 15, 12));

                let offsets: Vec<UtcOffset> = groups.iter().map(|g| g.offset).collect();
                let unique: HashSet<UtcOffset> = offsets.iter().copied().collect();
                prop_assert_eq!(offsets.len(), unique.len());
            }
        }
    }
}
