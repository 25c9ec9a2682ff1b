//! Contact-form validation.
//!
//! Re-applies the public site's client-side checks server-side. Rule order
//! within a field: presence → shape → minimum length; fields are checked in
//! form order (name → email → subject → message). All limits apply to the
//! trimmed value, so trimming can never sneak a too-short field past.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use serde_json::Value;

/// Minimum trimmed lengths per field.
const MIN_NAME_CHARS: usize = 2;
const MIN_SUBJECT_CHARS: usize = 5;
const MIN_MESSAGE_CHARS: usize = 10;

/// Basic `local@domain.tld` shape, no whitespace anywhere.
static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// A single field-level validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// A validated contact-form submission. All fields are trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Validate an untyped JSON body into a `ContactSubmission`.
///
/// Collects the first violated rule per field, in form order, so the leading
/// entry is the one surfaced to the user.
pub fn validate(raw: &Value) -> Result<ContactSubmission, Vec<FieldError>> {
    let mut errors = Vec::new();

    let name = check(raw, "name", "El nombre es obligatorio", &mut errors, |v| {
        (v.chars().count() < MIN_NAME_CHARS)
            .then_some("El nombre debe tener al menos 2 caracteres")
    });
    let email = check(raw, "email", "El email es obligatorio", &mut errors, |v| {
        (!EMAIL_SHAPE.is_match(v)).then_some("Email inválido")
    });
    let subject = check(raw, "subject", "El asunto es obligatorio", &mut errors, |v| {
        (v.chars().count() < MIN_SUBJECT_CHARS)
            .then_some("El asunto debe tener al menos 5 caracteres")
    });
    let message = check(raw, "message", "El mensaje es obligatorio", &mut errors, |v| {
        (v.chars().count() < MIN_MESSAGE_CHARS)
            .then_some("El mensaje debe tener al menos 10 caracteres")
    });

    match (name, email, subject, message) {
        (Some(name), Some(email), Some(subject), Some(message)) if errors.is_empty() => {
            Ok(ContactSubmission {
                name,
                email,
                subject,
                message,
            })
        }
        _ => Err(errors),
    }
}

/// Extract, trim, and rule-check one field. Pushes at most one error.
fn check(
    raw: &Value,
    field: &'static str,
    required_message: &'static str,
    errors: &mut Vec<FieldError>,
    rule: impl Fn(&str) -> Option<&'static str>,
) -> Option<String> {
    let value = raw
        .get(field)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|v| !v.is_empty());

    match value {
        None => {
            errors.push(FieldError {
                field,
                message: required_message,
            });
            None
        }
        Some(v) => match rule(v) {
            Some(message) => {
                errors.push(FieldError { field, message });
                None
            }
            None => Some(v.to_string()),
        },
    }
}

// ── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_body() -> Value {
        json!({
            "name": "Jo",
            "email": "a@b.com",
            "subject": "Hello there",
            "message": "This is a message",
        })
    }

    // ── Happy path ──────────────────────────────────────────────────

    #[test]
    fn accepts_minimal_valid_submission() {
        let submission = validate(&valid_body()).expect("should validate");
        assert_eq!(submission.name, "Jo");
        assert_eq!(submission.email, "a@b.com");
    }

    #[test]
    fn stores_trimmed_values() {
        let mut body = valid_body();
        body["name"] = json!("  Jo  ");
        body["message"] = json!("  This is a message  ");
        let submission = validate(&body).expect("should validate");
        assert_eq!(submission.name, "Jo");
        assert_eq!(submission.message, "This is a message");
    }

    // ── Presence ────────────────────────────────────────────────────

    #[test]
    fn empty_object_rejects_all_fields_in_order() {
        let errors = validate(&json!({})).unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, ["name", "email", "subject", "message"]);
        assert_eq!(errors[0].message, "El nombre es obligatorio");
    }

    #[test]
    fn whitespace_only_field_is_rejected_as_missing() {
        let mut body = valid_body();
        body["subject"] = json!("   \t  ");
        let errors = validate(&body).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "subject");
        assert_eq!(errors[0].message, "El asunto es obligatorio");
    }

    #[test]
    fn non_string_field_is_rejected_as_missing() {
        let mut body = valid_body();
        body["name"] = json!(42);
        let errors = validate(&body).unwrap_err();
        assert_eq!(errors[0].field, "name");
        assert_eq!(errors[0].message, "El nombre es obligatorio");
    }

    #[test]
    fn non_object_body_rejects_everything() {
        let errors = validate(&json!("not an object")).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert_eq!(errors[0].field, "name");
    }

    // ── Length boundaries ───────────────────────────────────────────

    #[test]
    fn name_below_minimum_rejected_at_boundary() {
        let mut body = valid_body();
        body["name"] = json!("J");
        let errors = validate(&body).unwrap_err();
        assert_eq!(errors[0].field, "name");
        assert_eq!(errors[0].message, "El nombre debe tener al menos 2 caracteres");
    }

    #[test]
    fn name_exactly_two_chars_accepted() {
        let mut body = valid_body();
        body["name"] = json!("Jo");
        assert!(validate(&body).is_ok());
    }

    #[test]
    fn subject_boundary_at_five_chars() {
        let mut body = valid_body();
        body["subject"] = json!("Hola");
        assert_eq!(validate(&body).unwrap_err()[0].field, "subject");

        body["subject"] = json!("Holaa");
        assert!(validate(&body).is_ok());
    }

    #[test]
    fn message_boundary_at_ten_chars() {
        let mut body = valid_body();
        body["message"] = json!("123456789");
        assert_eq!(validate(&body).unwrap_err()[0].field, "message");

        body["message"] = json!("1234567890");
        assert!(validate(&body).is_ok());
    }

    #[test]
    fn trimming_applies_before_length_check() {
        // 2 visible chars padded to 5 with whitespace still fails the minimum.
        let mut body = valid_body();
        body["subject"] = json!("  Hi  ");
        let errors = validate(&body).unwrap_err();
        assert_eq!(errors[0].message, "El asunto debe tener al menos 5 caracteres");
    }

    // ── Email shape ─────────────────────────────────────────────────

    #[test]
    fn email_without_at_rejected() {
        let mut body = valid_body();
        body["email"] = json!("bad");
        let errors = validate(&body).unwrap_err();
        assert_eq!(errors[0].field, "email");
        assert_eq!(errors[0].message, "Email inválido");
    }

    #[test]
    fn email_without_domain_dot_rejected() {
        let mut body = valid_body();
        body["email"] = json!("user@domain");
        assert_eq!(validate(&body).unwrap_err()[0].field, "email");
    }

    #[test]
    fn email_missing_local_part_rejected() {
        let mut body = valid_body();
        body["email"] = json!("@x.com");
        assert_eq!(validate(&body).unwrap_err()[0].field, "email");
    }

    // ── Error ordering ──────────────────────────────────────────────

    #[test]
    fn all_invalid_reports_name_first() {
        let body = json!({
            "name": "J",
            "email": "bad",
            "subject": "Hi",
            "message": "short",
        });
        let errors = validate(&body).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert_eq!(errors[0].field, "name");
        assert_eq!(errors[0].message, "El nombre debe tener al menos 2 caracteres");
    }

    #[test]
    fn one_error_per_failing_field() {
        // An empty name fails both presence and length; only presence is reported.
        let mut body = valid_body();
        body["name"] = json!("");
        let errors = validate(&body).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "El nombre es obligatorio");
    }
}
