//! Unvalidated employee input and its validation into [`EmployeeFields`].
//!
//! Every field is held as raw JSON so that a missing value or a value of
//! the wrong type shows up as a violation next to any other problems,
//! instead of failing deserialization on the first bad key.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::{ValidateEmail, ValidateLength, ValidateRange};

use roster_core::types::FieldViolation;

use super::EmployeeFields;

/// Wire names of the validated fields, in declaration order.
pub const FIELD_NAMES: [&str; 7] = [
    "name",
    "email",
    "address",
    "experience",
    "lastWorkCompany",
    "dateOfResignation",
    "joiningDate",
];

const MIN_EXPERIENCE: f64 = 0.0;
const MAX_EXPERIENCE: f64 = 50.0;

/// Employee fields as submitted by a client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDraft {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub email: Option<Value>,
    #[serde(default)]
    pub address: Option<Value>,
    /// A JSON number or a numeric string.
    #[serde(default)]
    pub experience: Option<Value>,
    #[serde(default)]
    pub last_work_company: Option<Value>,
    /// `YYYY-MM-DD` or an RFC 3339 timestamp.
    #[serde(default)]
    pub date_of_resignation: Option<Value>,
    #[serde(default)]
    pub joining_date: Option<Value>,
}

impl EmployeeDraft {
    /// Check every constraint and return the validated fields, or every
    /// violation found, ordered as [`FIELD_NAMES`].
    ///
    /// Text fields are trimmed before their lengths are checked, and the
    /// email is trimmed before it is stored.
    pub fn into_fields(self) -> Result<EmployeeFields, Vec<FieldViolation>> {
        let mut check = FieldCheck::default();

        let name = check.text("name", self.name, 50);
        let email = check.email("email", self.email);
        let address = check.text("address", self.address, 100);
        let experience = check.experience("experience", self.experience);
        let last_work_company = check.text("lastWorkCompany", self.last_work_company, 50);
        let date_of_resignation = check.date("dateOfResignation", self.date_of_resignation);
        let joining_date = check.date("joiningDate", self.joining_date);

        // A field comes back `None` only after its violation was recorded.
        match (
            name,
            email,
            address,
            experience,
            last_work_company,
            date_of_resignation,
            joining_date,
        ) {
            (
                Some(name),
                Some(email),
                Some(address),
                Some(experience),
                Some(last_work_company),
                Some(date_of_resignation),
                Some(joining_date),
            ) if check.violations.is_empty() => Ok(EmployeeFields {
                name,
                email,
                address,
                experience,
                last_work_company,
                date_of_resignation,
                joining_date,
            }),
            _ => Err(check.violations),
        }
    }
}

impl From<EmployeeFields> for EmployeeDraft {
    fn from(fields: EmployeeFields) -> Self {
        Self {
            name: Some(Value::from(fields.name)),
            email: Some(Value::from(fields.email)),
            address: Some(Value::from(fields.address)),
            experience: Some(Value::from(fields.experience)),
            last_work_company: Some(Value::from(fields.last_work_company)),
            date_of_resignation: Some(Value::from(fields.date_of_resignation.to_string())),
            joining_date: Some(Value::from(fields.joining_date.to_string())),
        }
    }
}

/// Parse a calendar date given either as `YYYY-MM-DD` or as an RFC 3339
/// timestamp (the date part is kept).
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

/// Parse `experience` from a JSON number or a numeric string.
pub fn parse_experience(raw: &Value) -> Option<f64> {
    let years = match raw {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    years.is_finite().then_some(years)
}

/// Collects violations while converting raw fields one at a time.
#[derive(Debug, Default)]
struct FieldCheck {
    violations: Vec<FieldViolation>,
}

impl FieldCheck {
    fn fail(&mut self, field: &str, code: &str, message: &str) {
        self.violations.push(FieldViolation::new(field, code, message));
    }

    /// Unwrap a present value, recording `required` when it is absent.
    fn present(&mut self, field: &str, raw: Option<Value>) -> Option<Value> {
        if raw.is_none() {
            self.fail(field, "required", "is required");
        }
        raw
    }

    fn string(&mut self, field: &str, raw: Option<Value>) -> Option<String> {
        match self.present(field, raw)? {
            Value::String(s) => Some(s.trim().to_string()),
            _ => {
                self.fail(field, "type", "must be a string");
                None
            }
        }
    }

    fn text(&mut self, field: &str, raw: Option<Value>, max: u64) -> Option<String> {
        let text = self.string(field, raw)?;
        if !text.validate_length(Some(1), Some(max), None) {
            self.fail(field, "length", &format!("must be 1 to {max} characters"));
            return None;
        }
        Some(text)
    }

    fn email(&mut self, field: &str, raw: Option<Value>) -> Option<String> {
        let email = self.string(field, raw)?;
        if !email.validate_email() {
            self.fail(field, "email", "must be a valid email address");
            return None;
        }
        Some(email)
    }

    fn experience(&mut self, field: &str, raw: Option<Value>) -> Option<f64> {
        let raw = self.present(field, raw)?;
        let Some(years) = parse_experience(&raw) else {
            self.fail(field, "type", "must be a number");
            return None;
        };
        if !years.validate_range(Some(MIN_EXPERIENCE), Some(MAX_EXPERIENCE), None, None) {
            self.fail(field, "range", "must be between 0 and 50");
            return None;
        }
        Some(years)
    }

    fn date(&mut self, field: &str, raw: Option<Value>) -> Option<NaiveDate> {
        let raw = self.string(field, raw)?;
        let date = parse_calendar_date(&raw);
        if date.is_none() {
            self.fail(field, "date", "must be a calendar date (YYYY-MM-DD)");
        }
        date
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn valid() -> EmployeeDraft {
        EmployeeDraft {
            name: Some(json!("Alice")),
            email: Some(json!("a@x.com")),
            address: Some(json!("1 Main Street")),
            experience: Some(json!(4)),
            last_work_company: Some(json!("Acme")),
            date_of_resignation: Some(json!("2023-12-31")),
            joining_date: Some(json!("2024-01-15")),
        }
    }

    fn fields_of(violations: &[FieldViolation]) -> Vec<&str> {
        violations.iter().map(|v| v.field.as_str()).collect()
    }

    #[test]
    fn test_valid_draft_produces_fields() {
        let fields = valid().into_fields().expect("valid");
        assert_eq!(fields.name, "Alice");
        assert_eq!(fields.experience, 4.0);
        assert_eq!(fields.joining_date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    }

    #[test]
    fn test_experience_bounds() {
        for ok in [json!(0), json!(50), json!(12.5)] {
            let draft = EmployeeDraft {
                experience: Some(ok.clone()),
                ..valid()
            };
            assert!(draft.into_fields().is_ok(), "{ok} should be accepted");
        }
        for bad in [json!(-1), json!(51)] {
            let draft = EmployeeDraft {
                experience: Some(bad.clone()),
                ..valid()
            };
            let violations = draft.into_fields().unwrap_err();
            assert_eq!(fields_of(&violations), vec!["experience"], "{bad}");
            assert_eq!(violations[0].code, "range");
        }
    }

    #[test]
    fn test_experience_accepts_numeric_strings() {
        let draft = EmployeeDraft {
            experience: Some(json!(" 5 ")),
            ..valid()
        };
        assert_eq!(draft.into_fields().expect("valid").experience, 5.0);

        let draft = EmployeeDraft {
            experience: Some(json!("51")),
            ..valid()
        };
        assert_eq!(draft.into_fields().unwrap_err()[0].code, "range");
    }

    #[test]
    fn test_experience_rejects_non_numbers() {
        for bad in [json!("abc"), json!(""), json!("NaN"), json!(true), json!([4])] {
            let draft = EmployeeDraft {
                experience: Some(bad.clone()),
                ..valid()
            };
            let violations = draft.into_fields().unwrap_err();
            assert_eq!(fields_of(&violations), vec!["experience"], "{bad}");
            assert_eq!(violations[0].code, "type");
        }
    }

    #[test]
    fn test_wrong_types_are_reported_with_other_violations() {
        let draft = EmployeeDraft {
            name: Some(json!("")),
            email: Some(json!("bad")),
            address: Some(json!(123)),
            experience: Some(json!("abc")),
            ..valid()
        };
        let violations = draft.into_fields().unwrap_err();
        assert_eq!(
            fields_of(&violations),
            vec!["name", "email", "address", "experience"]
        );
        let codes: Vec<&str> = violations.iter().map(|v| v.code.as_str()).collect();
        assert_eq!(codes, vec!["length", "email", "type", "type"]);
    }

    #[test]
    fn test_empty_draft_reports_every_field() {
        let violations = EmployeeDraft::default().into_fields().unwrap_err();
        assert_eq!(fields_of(&violations), FIELD_NAMES.to_vec());
        assert!(violations.iter().all(|v| v.code == "required"));
    }

    #[test]
    fn test_null_counts_as_missing() {
        let draft: EmployeeDraft = serde_json::from_value(json!({
            "name": null,
            "email": "a@x.com",
            "address": "1 Main Street",
            "experience": 1,
            "lastWorkCompany": "Acme",
            "dateOfResignation": "2023-12-31",
            "joiningDate": "2024-01-15"
        }))
        .unwrap();
        let violations = draft.into_fields().unwrap_err();
        assert_eq!(fields_of(&violations), vec!["name"]);
        assert_eq!(violations[0].code, "required");
    }

    #[test]
    fn test_multiple_violations_are_all_reported() {
        let draft = EmployeeDraft {
            name: Some(json!("x".repeat(51))),
            email: Some(json!("not-an-email")),
            joining_date: Some(json!("15/01/2024")),
            ..valid()
        };
        let violations = draft.into_fields().unwrap_err();
        assert_eq!(fields_of(&violations), vec!["name", "email", "joiningDate"]);
    }

    #[test]
    fn test_length_limits_count_characters() {
        let draft = EmployeeDraft {
            name: Some(json!("é".repeat(50))),
            address: Some(json!("a".repeat(100))),
            last_work_company: Some(json!("b".repeat(50))),
            ..valid()
        };
        assert!(draft.into_fields().is_ok());

        let draft = EmployeeDraft {
            address: Some(json!("a".repeat(101))),
            ..valid()
        };
        assert_eq!(fields_of(&draft.into_fields().unwrap_err()), vec!["address"]);
    }

    #[test]
    fn test_blank_text_is_rejected() {
        let draft = EmployeeDraft {
            last_work_company: Some(json!("   ")),
            ..valid()
        };
        let violations = draft.into_fields().unwrap_err();
        assert_eq!(fields_of(&violations), vec!["lastWorkCompany"]);
        assert_eq!(violations[0].code, "length");
    }

    #[test]
    fn test_accepts_rfc3339_dates() {
        let draft = EmployeeDraft {
            date_of_resignation: Some(json!("2023-12-31T00:00:00.000Z")),
            ..valid()
        };
        let fields = draft.into_fields().expect("valid");
        assert_eq!(
            fields.date_of_resignation,
            NaiveDate::from_ymd_opt(2023, 12, 31).unwrap()
        );
    }

    #[test]
    fn test_bad_date_names_the_failing_field() {
        let draft = EmployeeDraft {
            joining_date: Some(json!("2023-02-30")),
            ..valid()
        };
        let violations = draft.into_fields().unwrap_err();
        assert_eq!(fields_of(&violations), vec!["joiningDate"]);
        assert_eq!(violations[0].code, "date");

        let draft = EmployeeDraft {
            date_of_resignation: Some(json!(20231231)),
            ..valid()
        };
        let violations = draft.into_fields().unwrap_err();
        assert_eq!(fields_of(&violations), vec!["dateOfResignation"]);
        assert_eq!(violations[0].code, "type");
    }

    #[test]
    fn test_deserializes_camel_case_input() {
        let draft: EmployeeDraft = serde_json::from_value(json!({
            "name": "Bob",
            "email": "bob@x.com",
            "address": "2 Side Road",
            "experience": "0",
            "lastWorkCompany": "Initech",
            "dateOfResignation": "2022-06-30",
            "joiningDate": "2022-07-01"
        }))
        .unwrap();
        let fields = draft.into_fields().expect("valid");
        assert_eq!(fields.last_work_company, "Initech");
        assert_eq!(fields.experience, 0.0);
    }

    #[test]
    fn test_round_trip_from_fields() {
        let fields = valid().into_fields().unwrap();
        let again = EmployeeDraft::from(fields.clone()).into_fields().unwrap();
        assert_eq!(fields, again);
    }
}
