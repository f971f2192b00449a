use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::DecodeError;

/// Naive layouts the complaints API has been seen to emit; read as UTC.
const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Table and search rendering of a timestamp, e.g. `Jan 1, 2024 10:00 AM`.
pub const DISPLAY_FORMAT: &str = "%b %-d, %Y %-I:%M %p";

/// Calendar-day bucket key used by the per-day aggregation.
pub const DAY_FORMAT: &str = "%Y-%m-%d";

/// A complaint as served by the complaints endpoint. Never mutated after decode.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ComplaintRecord {
    #[serde(default, deserialize_with = "lenient_string")]
    pub reference_id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub username: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub email: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub phone_number: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub pnr: String,
    #[serde(rename = "complaint", default, deserialize_with = "lenient_string")]
    pub complaint_text: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub location: String,
    #[serde(rename = "villageOrCity", default, deserialize_with = "lenient_string")]
    pub village_or_city: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub district: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub state: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub complaint_type: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub urgency: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub sub_category: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub additional_details: String,
    #[serde(rename = "media", default, deserialize_with = "lenient_media")]
    pub media_attachments: Vec<Media>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub timestamp: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub status: String,
}

impl ComplaintRecord {
    pub fn parsed_timestamp(&self) -> Option<DateTime<FixedOffset>> {
        parse_timestamp(&self.timestamp)
    }

    /// `YYYY-MM-DD` in the timestamp's own offset, or an empty key when the
    /// timestamp cannot be read.
    pub fn day_key(&self) -> String {
        self.parsed_timestamp()
            .map(|ts| ts.date_naive().format(DAY_FORMAT).to_string())
            .unwrap_or_default()
    }

    /// Human-readable timestamp; falls back to the raw value.
    pub fn display_timestamp(&self) -> String {
        self.parsed_timestamp()
            .map(|ts| ts.format(DISPLAY_FORMAT).to_string())
            .unwrap_or_else(|| self.timestamp.clone())
    }
}

/// One attachment on a complaint.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Media {
    #[serde(rename = "type", default, deserialize_with = "lenient_string")]
    pub media_type: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub url: String,
    #[serde(
        default,
        deserialize_with = "lenient_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub summary: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub transcript: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Audio,
    Video,
    /// Unknown MIME family, rendered as a plain link.
    Link,
}

impl Media {
    pub fn kind(&self) -> MediaKind {
        let family = self
            .media_type
            .split_once('/')
            .map(|(family, _)| family)
            .unwrap_or_default();

        match family.to_ascii_lowercase().as_str() {
            "image" => MediaKind::Image,
            "audio" => MediaKind::Audio,
            "video" => MediaKind::Video,
            _ => MediaKind::Link,
        }
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref().filter(|s| !s.is_empty())
    }

    pub fn transcript(&self) -> Option<&str> {
        self.transcript.as_deref().filter(|s| !s.is_empty())
    }
}

/// Decode a complaints response body. The top level must be an array; fields
/// inside each record are read leniently.
pub fn decode_complaints(body: &str) -> Result<Vec<ComplaintRecord>, DecodeError> {
    let value: Value = serde_json::from_str(body)?;
    let kind = match &value {
        Value::Array(_) => None,
        Value::Null => Some("null"),
        Value::Bool(_) => Some("a boolean"),
        Value::Number(_) => Some("a number"),
        Value::String(_) => Some("a string"),
        Value::Object(_) => Some("an object"),
    };
    if let Some(kind) = kind {
        return Err(DecodeError::NotAnArray(kind));
    }

    Ok(serde_json::from_value(value)?)
}

/// Parse the timestamp shapes the API produces. Naive values are taken as UTC,
/// all-digit values as epoch milliseconds.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<FixedOffset>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts);
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc().fixed_offset());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, DAY_FORMAT) {
        return date
            .and_hms_opt(0, 0, 0)
            .map(|naive| naive.and_utc().fixed_offset());
    }

    if raw.bytes().all(|b| b.is_ascii_digit()) {
        return raw
            .parse::<i64>()
            .ok()
            .and_then(DateTime::from_timestamp_millis)
            .map(|ts| ts.fixed_offset());
    }

    None
}

// Absent, null and non-string scalars all collapse to a string so one odd
// field never rejects the whole collection.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s,
        Some(other) => other.to_string(),
    })
}

fn lenient_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

// Anything but an array means no attachments; array entries that are not
// media objects are skipped.
fn lenient_media<'de, D>(deserializer: D) -> Result<Vec<Media>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter(Value::is_object)
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_RECORD: &str = r#"[{
        "reference_id": "REF-1001",
        "name": "Asha Verma",
        "username": "asha.v",
        "email": "asha@example.com",
        "phone_number": "9800000000",
        "pnr": "4521879630",
        "complaint": "Coach was not cleaned",
        "location": "Coach B2",
        "villageOrCity": "Nagpur",
        "district": "Nagpur",
        "state": "Maharashtra",
        "complaint_type": "Cleanliness",
        "urgency": "High",
        "sub_category": "Coach",
        "additional_details": "Seats 14 to 20",
        "media": [
            {"type": "image/jpeg", "url": "https://cdn.example.com/a.jpg", "summary": "Dirty floor"},
            {"type": "audio/mpeg", "url": "https://cdn.example.com/a.mp3"}
        ],
        "timestamp": "2024-01-01T10:00:00Z",
        "status": "Open"
    }]"#;

    #[test]
    fn test_decode_full_record() {
        let records = decode_complaints(FULL_RECORD).unwrap();
        assert_eq!(records.len(), 1);

        let record = &records[0];
        assert_eq!(record.reference_id, "REF-1001");
        assert_eq!(record.complaint_text, "Coach was not cleaned");
        assert_eq!(record.village_or_city, "Nagpur");
        assert_eq!(record.media_attachments.len(), 2);
        assert_eq!(record.media_attachments[0].kind(), MediaKind::Image);
        assert_eq!(record.media_attachments[0].summary(), Some("Dirty floor"));
        assert_eq!(record.media_attachments[1].transcript(), None);
    }

    #[test]
    fn test_missing_and_null_fields_collapse_to_empty() {
        let records =
            decode_complaints(r#"[{"reference_id": "R1", "state": null, "media": null}]"#).unwrap();
        let record = &records[0];

        assert_eq!(record.state, "");
        assert_eq!(record.complaint_type, "");
        assert!(record.media_attachments.is_empty());
        assert_eq!(record.day_key(), "");
    }

    #[test]
    fn test_malformed_media_keeps_the_collection() {
        let records = decode_complaints(
            r#"[
                {"reference_id": "R1", "media": "none"},
                {"reference_id": "R2", "media": [null, 7, {"type": "image/png", "url": "u", "summary": 5}]},
                {"reference_id": "R3", "media": [{"type": "audio/mpeg", "url": "a", "transcript": null}]},
                {"reference_id": "R4"}
            ]"#,
        )
        .unwrap();

        assert_eq!(records.len(), 4);
        assert!(records[0].media_attachments.is_empty());
        assert_eq!(records[1].media_attachments.len(), 1);
        assert_eq!(records[1].media_attachments[0].summary(), Some("5"));
        assert_eq!(records[2].media_attachments[0].transcript(), None);
        assert_eq!(records[3].reference_id, "R4");
    }

    #[test]
    fn test_numeric_fields_are_read_as_strings() {
        let records = decode_complaints(r#"[{"reference_id": 42, "pnr": 4521879630}]"#).unwrap();
        assert_eq!(records[0].reference_id, "42");
        assert_eq!(records[0].pnr, "4521879630");
    }

    #[test]
    fn test_non_array_payload_is_rejected() {
        assert!(matches!(
            decode_complaints(r#"{"data": []}"#),
            Err(DecodeError::NotAnArray("an object"))
        ));
        assert!(matches!(decode_complaints("not json"), Err(DecodeError::Json(_))));
    }

    #[test]
    fn test_day_key_and_display() {
        let record = ComplaintRecord {
            timestamp: "2024-01-01T22:30:00-05:00".to_string(),
            ..Default::default()
        };
        // Bucketed in the timestamp's own offset.
        assert_eq!(record.day_key(), "2024-01-01");
        assert_eq!(record.display_timestamp(), "Jan 1, 2024 10:30 PM");
    }

    #[test]
    fn test_parse_timestamp_shapes() {
        assert!(parse_timestamp("2024-03-05T08:15:00.123Z").is_some());
        assert!(parse_timestamp("2024-03-05T08:15:00").is_some());
        assert!(parse_timestamp("2024-03-05 08:15:00").is_some());
        assert_eq!(
            parse_timestamp("2024-03-05").map(|ts| ts.format(DAY_FORMAT).to_string()),
            Some("2024-03-05".to_string())
        );
        assert_eq!(
            parse_timestamp("1704103200000").map(|ts| ts.to_rfc3339()),
            Some("2024-01-01T10:00:00+00:00".to_string())
        );
        assert!(parse_timestamp("yesterday").is_none());
        assert!(parse_timestamp("   ").is_none());
    }

    #[test]
    fn test_unparseable_timestamp_displays_raw() {
        let record = ComplaintRecord {
            timestamp: "sometime".to_string(),
            ..Default::default()
        };
        assert_eq!(record.display_timestamp(), "sometime");
        assert_eq!(record.day_key(), "");
    }

    #[test]
    fn test_media_kind_from_mime_prefix() {
        let media = |t: &str| Media {
            media_type: t.to_string(),
            ..Default::default()
        };
        assert_eq!(media("image/png").kind(), MediaKind::Image);
        assert_eq!(media("Audio/ogg").kind(), MediaKind::Audio);
        assert_eq!(media("video/mp4").kind(), MediaKind::Video);
        assert_eq!(media("application/pdf").kind(), MediaKind::Link);
        assert_eq!(media("image").kind(), MediaKind::Link);
        assert_eq!(media("").kind(), MediaKind::Link);
    }

    #[test]
    fn test_empty_summary_is_absent() {
        let media = Media {
            media_type: "image/png".to_string(),
            summary: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(media.summary(), None);
    }
}
