//! Contact-inquiry records and payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::error::ApiError;
use crate::api::handlers::valid_email;

/// A stored contact inquiry, served to the admin back-office.
#[derive(ToSchema, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct InquiryRecord {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company_name: String,
    pub country: String,
    pub job_title: Option<String>,
    pub job_details: String,
    pub created_at: DateTime<Utc>,
}

/// Body of the public contact form. Optional at the serde layer so missing
/// required fields turn into a 400 with a message.
#[derive(ToSchema, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ContactPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub job_details: Option<String>,
}

/// A validated inquiry ready to be written.
#[derive(Debug)]
pub struct NewInquiry {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company_name: String,
    pub country: String,
    pub job_title: Option<String>,
    pub job_details: String,
}

impl ContactPayload {
    /// Check required-field presence and the email shape.
    ///
    /// # Errors
    /// Returns `ApiError::Validation` when a required field is missing or the
    /// email address is not plausible.
    pub fn validate(self) -> Result<NewInquiry, ApiError> {
        let required = |value: Option<String>| value.filter(|v| !v.is_empty());

        let (Some(name), Some(email), Some(company_name), Some(country), Some(job_details)) = (
            required(self.name),
            required(self.email),
            required(self.company_name),
            required(self.country),
            required(self.job_details),
        ) else {
            return Err(ApiError::Validation(
                "Required fields are missing.".to_string(),
            ));
        };

        if !valid_email(&email) {
            return Err(ApiError::Validation("Invalid email address.".to_string()));
        }

        Ok(NewInquiry {
            name,
            email,
            phone: self.phone,
            company_name,
            country,
            job_title: self.job_title,
            job_details,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_payload() -> ContactPayload {
        ContactPayload {
            name: Some("Alice Rossi".to_string()),
            email: Some("alice@example.com".to_string()),
            phone: None,
            company_name: Some("Rossi SpA".to_string()),
            country: Some("Italy".to_string()),
            job_title: Some("CTO".to_string()),
            job_details: Some("We need a marketing site.".to_string()),
        }
    }

    #[test]
    fn validate_accepts_full_payload() {
        let inquiry = full_payload().validate().expect("valid");
        assert_eq!(inquiry.name, "Alice Rossi");
        assert_eq!(inquiry.phone, None);
        assert_eq!(inquiry.job_title.as_deref(), Some("CTO"));
    }

    #[test]
    fn validate_rejects_missing_country() {
        let payload = ContactPayload {
            country: None,
            ..full_payload()
        };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn validate_rejects_bad_email() {
        let payload = ContactPayload {
            email: Some("not-an-email".to_string()),
            ..full_payload()
        };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn contact_payload_accepts_camel_case_keys() {
        let payload: ContactPayload = serde_json::from_str(
            r#"{"name":"Bob","email":"bob@example.com","companyName":"Acme",
                "country":"France","jobDetails":"Details"}"#,
        )
        .expect("deserialize");
        assert_eq!(payload.company_name.as_deref(), Some("Acme"));
        assert!(payload.validate().is_ok());
    }
}
