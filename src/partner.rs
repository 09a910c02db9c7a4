//! Partner application form validation.
//!
//! Checks the required fields and the email shape, and reports the outcome
//! through the notification surface. Nothing is submitted anywhere; the
//! flow simulates the hand-off to a partnership team.

use serde::{Deserialize, Serialize};

use crate::notify::{Notifier, Severity};

const MSG_INVALID_EMAIL: &str = "Please enter a valid email address.";
const MSG_MISSING_FIELDS: &str = "Please fill in all required fields.";
const MSG_SUBMITTED: &str =
    "Thank you for your interest! Our partnership team will contact you within 24 hours.";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PartnerField {
    FirstName,
    LastName,
    Email,
    Phone,
    PartnershipType,
    LocationCity,
}

impl PartnerField {
    pub const ALL: [PartnerField; 6] = [
        PartnerField::FirstName,
        PartnerField::LastName,
        PartnerField::Email,
        PartnerField::Phone,
        PartnerField::PartnershipType,
        PartnerField::LocationCity,
    ];

    /// The form-control id this field maps to.
    pub fn control_id(&self) -> &'static str {
        match self {
            PartnerField::FirstName => "firstName",
            PartnerField::LastName => "lastName",
            PartnerField::Email => "email",
            PartnerField::Phone => "phone",
            PartnerField::PartnershipType => "partnershipType",
            PartnerField::LocationCity => "locationCity",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerApplication {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub partnership_type: String,
    pub location_city: String,
}

/// Per-field validation outcome, so the shell can highlight the offending
/// controls individually.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub missing: Vec<PartnerField>,
    pub invalid_email: bool,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.missing.is_empty() && !self.invalid_email
    }
}

impl PartnerApplication {
    fn field_value(&self, field: PartnerField) -> &str {
        match field {
            PartnerField::FirstName => &self.first_name,
            PartnerField::LastName => &self.last_name,
            PartnerField::Email => &self.email,
            PartnerField::Phone => &self.phone,
            PartnerField::PartnershipType => &self.partnership_type,
            PartnerField::LocationCity => &self.location_city,
        }
    }

    pub fn validate(&self) -> ValidationReport {
        let missing: Vec<PartnerField> = PartnerField::ALL
            .into_iter()
            .filter(|field| self.field_value(*field).trim().is_empty())
            .collect();

        let email = self.email.trim();
        let invalid_email = !email.is_empty() && !is_valid_email(email);

        ValidationReport {
            missing,
            invalid_email,
        }
    }

    /// Validate and report the outcome. Returns whether the application was
    /// accepted; input stays editable either way.
    pub fn submit(&self, notifier: &mut dyn Notifier) -> bool {
        let report = self.validate();
        if report.invalid_email {
            notifier.notify(Severity::Error, MSG_INVALID_EMAIL);
            return false;
        }
        if !report.missing.is_empty() {
            notifier.notify(Severity::Error, MSG_MISSING_FIELDS);
            return false;
        }
        notifier.notify(Severity::Success, MSG_SUBMITTED);
        true
    }
}

/// Email shape check: non-empty local part and domain, exactly one `@`, no
/// whitespace, and a dot with non-empty parts in the domain.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return false,
    };
    if local.is_empty() {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}
