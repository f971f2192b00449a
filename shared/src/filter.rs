use std::cmp::Ordering;

use indexmap::IndexSet;

use crate::model::ComplaintRecord;

/// Table columns, in display order. Any of them can drive the sort.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SortKey {
    ReferenceId,
    Name,
    Pnr,
    Complaint,
    Location,
    Type,
    Urgency,
    Timestamp,
    Status,
}

impl SortKey {
    pub fn all() -> [SortKey; 9] {
        [
            SortKey::ReferenceId,
            SortKey::Name,
            SortKey::Pnr,
            SortKey::Complaint,
            SortKey::Location,
            SortKey::Type,
            SortKey::Urgency,
            SortKey::Timestamp,
            SortKey::Status,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::ReferenceId => "Reference ID",
            SortKey::Name => "Name",
            SortKey::Pnr => "PNR",
            SortKey::Complaint => "Complaint",
            SortKey::Location => "Location",
            SortKey::Type => "Type",
            SortKey::Urgency => "Urgency",
            SortKey::Timestamp => "Timestamp",
            SortKey::Status => "Status",
        }
    }

    /// The raw field this column shows.
    pub fn field<'a>(&self, record: &'a ComplaintRecord) -> &'a str {
        match self {
            SortKey::ReferenceId => &record.reference_id,
            SortKey::Name => &record.name,
            SortKey::Pnr => &record.pnr,
            SortKey::Complaint => &record.complaint_text,
            SortKey::Location => &record.location,
            SortKey::Type => &record.complaint_type,
            SortKey::Urgency => &record.urgency,
            SortKey::Timestamp => &record.timestamp,
            SortKey::Status => &record.status,
        }
    }

    fn compare(&self, a: &ComplaintRecord, b: &ComplaintRecord) -> Ordering {
        match self {
            // Unparseable timestamps sort before every real instant.
            SortKey::Timestamp => a.parsed_timestamp().cmp(&b.parsed_timestamp()),
            _ => self.field(a).cmp(self.field(b)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn label(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "Sort by Ascending",
            SortDirection::Descending => "Sort by Descending",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortSpec {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    fn compare(&self, a: &ComplaintRecord, b: &ComplaintRecord) -> Ordering {
        let ordering = self.key.compare(a, b);
        match self.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Search text, facet selections and active sort for the complaints table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ComplaintFilter {
    pub query: String,
    pub types: Vec<String>,
    pub urgencies: Vec<String>,
    pub sort: Option<SortSpec>,
}

impl ComplaintFilter {
    pub fn toggle_type(&mut self, complaint_type: &str) {
        toggle(&mut self.types, complaint_type);
    }

    pub fn toggle_urgency(&mut self, urgency: &str) {
        toggle(&mut self.urgencies, urgency);
    }

    pub fn set_sort(&mut self, key: SortKey, direction: SortDirection) {
        self.sort = Some(SortSpec::new(key, direction));
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_type_selected(&self, complaint_type: &str) -> bool {
        self.types.iter().any(|t| t == complaint_type)
    }

    pub fn is_urgency_selected(&self, urgency: &str) -> bool {
        self.urgencies.iter().any(|u| u == urgency)
    }

    /// Rows to display: text match, then facets, then the optional stable sort.
    /// Without a sort the fetch order is kept.
    pub fn apply<'a>(&self, records: &'a [ComplaintRecord]) -> Vec<&'a ComplaintRecord> {
        let needle = self.query.to_lowercase();
        let mut rows: Vec<&ComplaintRecord> = records
            .iter()
            .filter(|record| self.matches_query(record, &needle) && self.matches_facets(record))
            .collect();

        if let Some(sort) = self.sort {
            rows.sort_by(|a, b| sort.compare(a, b));
        }

        rows
    }

    // Reference ids are matched case-sensitively against the raw query; every
    // other field is compared lowercased.
    fn matches_query(&self, record: &ComplaintRecord, needle: &str) -> bool {
        let contains = |field: &str| field.to_lowercase().contains(needle);

        contains(record.name.as_str())
            || contains(record.complaint_text.as_str())
            || record.reference_id.contains(self.query.as_str())
            || contains(record.location.as_str())
            || contains(record.display_timestamp().as_str())
            || contains(record.status.as_str())
    }

    fn matches_facets(&self, record: &ComplaintRecord) -> bool {
        (self.types.is_empty() || self.is_type_selected(&record.complaint_type))
            && (self.urgencies.is_empty() || self.is_urgency_selected(&record.urgency))
    }
}

fn toggle(selected: &mut Vec<String>, value: &str) {
    if let Some(pos) = selected.iter().position(|v| v == value) {
        selected.remove(pos);
    } else {
        selected.push(value.to_string());
    }
}

/// Chip values offered by the table. Always derived from the unfiltered
/// collection so selecting one chip never hides another.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FacetOptions {
    pub types: Vec<String>,
    pub urgencies: Vec<String>,
}

impl FacetOptions {
    pub fn from_records(records: &[ComplaintRecord]) -> Self {
        let types: IndexSet<&str> = records.iter().map(|r| r.complaint_type.as_str()).collect();
        let urgencies: IndexSet<&str> = records.iter().map(|r| r.urgency.as_str()).collect();

        Self {
            types: types.into_iter().map(str::to_string).collect(),
            urgencies: urgencies.into_iter().map(str::to_string).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(
        reference_id: &str,
        name: &str,
        complaint_type: &str,
        urgency: &str,
    ) -> ComplaintRecord {
        ComplaintRecord {
            reference_id: reference_id.to_string(),
            name: name.to_string(),
            complaint_type: complaint_type.to_string(),
            urgency: urgency.to_string(),
            ..Default::default()
        }
    }

    fn scenario() -> Vec<ComplaintRecord> {
        vec![
            ComplaintRecord {
                reference_id: "REF-1".to_string(),
                complaint_type: "Delay".to_string(),
                state: "NY".to_string(),
                complaint_text: "Train arrived two hours late".to_string(),
                timestamp: "2024-01-01T10:00:00Z".to_string(),
                ..Default::default()
            },
            ComplaintRecord {
                reference_id: "REF-2".to_string(),
                complaint_type: "Delay".to_string(),
                state: "CA".to_string(),
                complaint_text: "Departure postponed".to_string(),
                timestamp: "2024-01-01T12:00:00Z".to_string(),
                ..Default::default()
            },
            ComplaintRecord {
                reference_id: "REF-3".to_string(),
                complaint_type: "Theft".to_string(),
                state: "NY".to_string(),
                complaint_text: "Theft of luggage from berth".to_string(),
                timestamp: "2024-01-02T09:00:00Z".to_string(),
                ..Default::default()
            },
        ]
    }

    fn ids(rows: &[&ComplaintRecord]) -> Vec<String> {
        rows.iter().map(|r| r.reference_id.clone()).collect()
    }

    #[test]
    fn test_empty_filter_is_identity() {
        let records = scenario();
        let rows = ComplaintFilter::default().apply(&records);
        assert_eq!(rows.len(), records.len());
        assert!(rows.iter().zip(records.iter()).all(|(a, b)| *a == b));
    }

    #[test]
    fn test_search_theft_matches_third_record() {
        let records = scenario();
        let filter = ComplaintFilter {
            query: "theft".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&records)), vec!["REF-3"]);
    }

    #[test]
    fn test_search_is_case_insensitive_except_reference_id() {
        let records = vec![record("abc-XYZ", "Ravi Kumar", "Delay", "Low")];

        let by_name = ComplaintFilter {
            query: "RAVI".to_string(),
            ..Default::default()
        };
        assert_eq!(by_name.apply(&records).len(), 1);

        let exact_ref = ComplaintFilter {
            query: "c-XY".to_string(),
            ..Default::default()
        };
        assert_eq!(exact_ref.apply(&records).len(), 1);

        let wrong_case_ref = ComplaintFilter {
            query: "c-xy".to_string(),
            ..Default::default()
        };
        assert!(wrong_case_ref.apply(&records).is_empty());
    }

    #[test]
    fn test_search_matches_formatted_timestamp_and_status() {
        let records = scenario();
        let by_date = ComplaintFilter {
            query: "jan 2, 2024".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&by_date.apply(&records)), vec!["REF-3"]);

        let mut resolved = scenario();
        resolved[1].status = "Resolved".to_string();
        let by_status = ComplaintFilter {
            query: "resolved".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&by_status.apply(&resolved)), vec!["REF-2"]);
    }

    #[test]
    fn test_facets_or_within_and_across() {
        let records = vec![
            record("1", "a", "Delay", "High"),
            record("2", "b", "Theft", "High"),
            record("3", "c", "Delay", "Low"),
            record("4", "d", "Food", "High"),
        ];

        let mut filter = ComplaintFilter::default();
        filter.toggle_type("Delay");
        filter.toggle_type("Theft");
        assert_eq!(ids(&filter.apply(&records)), vec!["1", "2", "3"]);

        filter.toggle_urgency("High");
        assert_eq!(ids(&filter.apply(&records)), vec!["1", "2"]);

        filter.toggle_type("Delay");
        assert_eq!(ids(&filter.apply(&records)), vec!["2"]);
        assert!(!filter.is_type_selected("Delay"));

        filter.clear();
        assert_eq!(filter, ComplaintFilter::default());
    }

    #[test]
    fn test_facet_options_ignore_active_filters() {
        let records = vec![
            record("1", "a", "Delay", "High"),
            record("2", "b", "Theft", "Low"),
            record("3", "c", "Delay", "Medium"),
        ];
        let options = FacetOptions::from_records(&records);
        assert_eq!(options.types, vec!["Delay", "Theft"]);
        assert_eq!(options.urgencies, vec!["High", "Low", "Medium"]);

        let mut filter = ComplaintFilter::default();
        filter.toggle_urgency("Low");
        assert_eq!(filter.apply(&records).len(), 1);
        assert_eq!(FacetOptions::from_records(&records), options);
    }

    #[test]
    fn test_sort_by_name_both_directions() {
        let records = vec![
            record("1", "Meera", "Delay", "High"),
            record("2", "Arjun", "Delay", "High"),
            record("3", "Zoya", "Delay", "High"),
        ];
        let mut filter = ComplaintFilter::default();

        filter.set_sort(SortKey::Name, SortDirection::Ascending);
        assert_eq!(ids(&filter.apply(&records)), vec!["2", "1", "3"]);

        filter.set_sort(SortKey::Name, SortDirection::Descending);
        assert_eq!(ids(&filter.apply(&records)), vec!["3", "1", "2"]);
    }

    #[test]
    fn test_sort_is_idempotent() {
        let records = vec![
            record("1", "b", "Delay", "High"),
            record("2", "a", "Theft", "High"),
            record("3", "c", "Delay", "Low"),
        ];
        let mut filter = ComplaintFilter::default();
        filter.set_sort(SortKey::Type, SortDirection::Ascending);

        let once: Vec<ComplaintRecord> = filter.apply(&records).into_iter().cloned().collect();
        let twice: Vec<ComplaintRecord> = filter.apply(&once).into_iter().cloned().collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_sort_is_stable_across_direction_changes() {
        let records = vec![
            record("1", "x", "Delay", "High"),
            record("2", "x", "Theft", "High"),
            record("3", "x", "Delay", "High"),
            record("4", "x", "Theft", "High"),
        ];
        let mut filter = ComplaintFilter::default();

        filter.set_sort(SortKey::Type, SortDirection::Descending);
        let descending: Vec<ComplaintRecord> =
            filter.apply(&records).into_iter().cloned().collect();
        assert_eq!(ids(&descending.iter().collect::<Vec<_>>()), vec!["2", "4", "1", "3"]);

        filter.set_sort(SortKey::Type, SortDirection::Ascending);
        assert_eq!(ids(&filter.apply(&descending)), vec!["1", "3", "2", "4"]);
    }

    #[test]
    fn test_timestamp_sort_uses_instants() {
        let mut records = scenario();
        records[0].timestamp = "2024-01-01T23:00:00+05:30".to_string(); // 17:30Z
        records.push(ComplaintRecord {
            reference_id: "REF-4".to_string(),
            timestamp: "unknown".to_string(),
            ..Default::default()
        });

        let mut filter = ComplaintFilter::default();
        filter.set_sort(SortKey::Timestamp, SortDirection::Ascending);
        assert_eq!(
            ids(&filter.apply(&records)),
            vec!["REF-4", "REF-2", "REF-1", "REF-3"]
        );
    }

    #[test]
    fn test_sort_keys_cover_display_columns() {
        let labels: Vec<_> = SortKey::all().iter().map(SortKey::label).collect();
        assert_eq!(
            labels,
            vec![
                "Reference ID",
                "Name",
                "PNR",
                "Complaint",
                "Location",
                "Type",
                "Urgency",
                "Timestamp",
                "Status"
            ]
        );
    }
}
