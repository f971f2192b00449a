use indexmap::IndexMap;

use crate::model::ComplaintRecord;

/// One bucket of a grouped tally. Recomputed from scratch on every render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupCount {
    pub key: String,
    pub count: usize,
}

/// Tally records by `key_of`, keeping buckets in first-seen order.
///
/// Records whose key is empty are counted under the empty key rather than
/// dropped.
pub fn group_by<F>(records: &[ComplaintRecord], key_of: F) -> Vec<GroupCount>
where
    F: Fn(&ComplaintRecord) -> String,
{
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for record in records {
        *counts.entry(key_of(record)).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|(key, count)| GroupCount { key, count })
        .collect()
}

pub fn complaints_by_type(records: &[ComplaintRecord]) -> Vec<GroupCount> {
    group_by(records, |r| r.complaint_type.clone())
}

pub fn complaints_by_day(records: &[ComplaintRecord]) -> Vec<GroupCount> {
    group_by(records, ComplaintRecord::day_key)
}

/// Grouped by `state`.
pub fn complaints_by_location(records: &[ComplaintRecord]) -> Vec<GroupCount> {
    group_by(records, |r| r.state.clone())
}

pub fn total_count(records: &[ComplaintRecord]) -> usize {
    records.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(complaint_type: &str, state: &str, timestamp: &str) -> ComplaintRecord {
        ComplaintRecord {
            complaint_type: complaint_type.to_string(),
            state: state.to_string(),
            timestamp: timestamp.to_string(),
            ..Default::default()
        }
    }

    fn sample() -> Vec<ComplaintRecord> {
        vec![
            record("Delay", "NY", "2024-01-01T10:00:00Z"),
            record("Delay", "CA", "2024-01-01T12:00:00Z"),
            record("Theft", "NY", "2024-01-02T09:00:00Z"),
        ]
    }

    fn group(key: &str, count: usize) -> GroupCount {
        GroupCount {
            key: key.to_string(),
            count,
        }
    }

    #[test]
    fn test_by_type() {
        assert_eq!(
            complaints_by_type(&sample()),
            vec![group("Delay", 2), group("Theft", 1)]
        );
    }

    #[test]
    fn test_by_day() {
        assert_eq!(
            complaints_by_day(&sample()),
            vec![group("2024-01-01", 2), group("2024-01-02", 1)]
        );
    }

    #[test]
    fn test_by_location() {
        assert_eq!(
            complaints_by_location(&sample()),
            vec![group("NY", 2), group("CA", 1)]
        );
    }

    #[test]
    fn test_first_occurrence_order_not_sorted() {
        let records = vec![
            record("Theft", "WB", "2024-02-03T00:00:00Z"),
            record("Delay", "AP", "2024-01-01T00:00:00Z"),
            record("Theft", "WB", "2024-02-03T00:00:00Z"),
        ];
        let keys: Vec<_> = complaints_by_type(&records).into_iter().map(|g| g.key).collect();
        assert_eq!(keys, vec!["Theft", "Delay"]);

        let days: Vec<_> = complaints_by_day(&records).into_iter().map(|g| g.key).collect();
        assert_eq!(days, vec!["2024-02-03", "2024-01-01"]);
    }

    #[test]
    fn test_counts_sum_to_collection_length() {
        let mut records = sample();
        records.push(record("", "", "garbage"));
        records.push(record("Delay", "NY", ""));

        for groups in [
            complaints_by_type(&records),
            complaints_by_day(&records),
            complaints_by_location(&records),
        ] {
            let total: usize = groups.iter().map(|g| g.count).sum();
            assert_eq!(total, total_count(&records));
            assert!(groups.iter().all(|g| g.count >= 1));
        }
    }

    #[test]
    fn test_missing_field_counted_under_empty_key() {
        let records = vec![record("", "", ""), record("Delay", "", "")];
        assert_eq!(complaints_by_location(&records), vec![group("", 2)]);
        assert_eq!(
            complaints_by_type(&records),
            vec![group("", 1), group("Delay", 1)]
        );
    }

    #[test]
    fn test_empty_collection() {
        assert!(complaints_by_type(&[]).is_empty());
        assert!(complaints_by_day(&[]).is_empty());
        assert!(complaints_by_location(&[]).is_empty());
        assert_eq!(total_count(&[]), 0);
    }
}
