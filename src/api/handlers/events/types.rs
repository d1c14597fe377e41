//! Event records and payloads.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::error::ApiError;

/// Creator attribution included in event listings.
#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct EventCreator {
    pub username: String,
}

/// An event as served to the admin back-office.
#[derive(ToSchema, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    pub id: Uuid,
    pub name: String,
    pub date: NaiveDate,
    pub time: Option<String>,
    pub location: String,
    pub description: String,
    pub link: Option<String>,
    pub category: String,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<EventCreator>,
}

/// An event as served to the public site: no creator attribution.
#[derive(ToSchema, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PublicEvent {
    pub id: Uuid,
    pub name: String,
    pub date: NaiveDate,
    pub time: Option<String>,
    pub location: String,
    pub description: String,
    pub link: Option<String>,
    pub category: String,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Create/update request body. Every field optional at the serde layer so a
/// missing required field produces a 400 with a message instead of a
/// deserialization rejection.
#[derive(ToSchema, Deserialize, Debug, Default)]
pub struct EventPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// A validated event ready to be written.
#[derive(Debug)]
pub struct NewEvent {
    pub name: String,
    pub date: NaiveDate,
    pub time: Option<String>,
    pub location: String,
    pub description: String,
    pub link: Option<String>,
    pub category: String,
    pub image: Option<String>,
}

impl EventPayload {
    /// Check required-field presence and the date format. Nothing is
    /// persisted unless this succeeds.
    ///
    /// # Errors
    /// Returns `ApiError::Validation` when a required field is missing or the
    /// date is not `YYYY-MM-DD`.
    pub fn validate(self) -> Result<NewEvent, ApiError> {
        let required = |value: Option<String>| value.filter(|v| !v.is_empty());

        let (Some(name), Some(date), Some(location), Some(description), Some(category)) = (
            required(self.name),
            required(self.date),
            required(self.location),
            required(self.description),
            required(self.category),
        ) else {
            return Err(ApiError::Validation(
                "Required fields are missing.".to_string(),
            ));
        };

        let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d").map_err(|_| {
            ApiError::Validation("Invalid date, expected YYYY-MM-DD.".to_string())
        })?;

        Ok(NewEvent {
            name,
            date,
            time: self.time,
            location,
            description,
            link: self.link,
            category,
            image: self.image,
        })
    }
}

/// Mutation response envelope: a message plus the affected event.
#[derive(ToSchema, Serialize, Debug)]
pub struct EventResponse {
    pub message: String,
    pub event: EventRecord,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_payload() -> EventPayload {
        EventPayload {
            name: Some("Launch day".to_string()),
            date: Some("2025-06-01".to_string()),
            time: Some("18:00".to_string()),
            location: Some("Milan".to_string()),
            description: Some("Product launch".to_string()),
            link: None,
            category: Some("conference".to_string()),
            image: None,
        }
    }

    #[test]
    fn validate_accepts_full_payload() {
        let event = full_payload().validate().expect("valid");
        assert_eq!(event.name, "Launch day");
        assert_eq!(event.date, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
        assert_eq!(event.time.as_deref(), Some("18:00"));
        assert_eq!(event.link, None);
    }

    #[test]
    fn validate_rejects_missing_category() {
        let payload = EventPayload {
            category: None,
            ..full_payload()
        };
        let err = payload.validate().expect_err("missing category");
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[test]
    fn validate_rejects_empty_required_field() {
        let payload = EventPayload {
            name: Some(String::new()),
            ..full_payload()
        };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn validate_rejects_bad_date() {
        let payload = EventPayload {
            date: Some("June 1st".to_string()),
            ..full_payload()
        };
        let err = payload.validate().expect_err("bad date");
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[test]
    fn event_record_serializes_frontend_shape() {
        let record = EventRecord {
            id: Uuid::new_v4(),
            name: "Launch day".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            time: None,
            location: "Milan".to_string(),
            description: "Product launch".to_string(),
            link: None,
            category: "conference".to_string(),
            image: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            created_by: Some(EventCreator {
                username: "admin".to_string(),
            }),
        };
        let value = serde_json::to_value(&record).expect("serialize");
        assert_eq!(
            value.pointer("/createdBy/username").and_then(|v| v.as_str()),
            Some("admin")
        );
        assert_eq!(value.get("date").and_then(|v| v.as_str()), Some("2025-06-01"));
        assert!(value.get("createdAt").is_some());
    }
}
