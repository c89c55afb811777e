// Declarative field validation for the flat part of a form.
//
// A schema is an ordered list of field rules. Validation never fails; it
// collects every message per field so the form can show them next to the
// offending inputs and refuse to submit.

use chrono::NaiveDate;
use regex::Regex;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::core::parse_numeric;

/// Permanent Account Number, e.g. ABCDE1234F
pub static PAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{5}[0-9]{4}[A-Z]$").expect("hardcoded regex should be valid"));

/// GST identification number, e.g. 27ABCDE1234F1Z5
pub static GSTIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{2}[A-Z]{5}[0-9]{4}[A-Z][1-9A-Z]Z[0-9A-Z]$")
        .expect("hardcoded regex should be valid")
});

/// Bank branch code, e.g. SBIN0001234
pub static IFSC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{4}0[A-Z0-9]{6}$").expect("hardcoded regex should be valid"));

/// Six-digit postal code
pub static PINCODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[1-9][0-9]{5}$").expect("hardcoded regex should be valid"));

/// Ten-digit mobile number
pub static PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[6-9][0-9]{9}$").expect("hardcoded regex should be valid"));

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone)]
enum Rule {
    Required,
    MinLen(usize),
    MaxLen(usize),
    Pattern { regex: Regex, description: String },
    Range { min: Decimal, max: Decimal },
    Date,
}

/// Constraints on one named field
#[derive(Debug, Clone)]
pub struct FieldRule {
    name: String,
    label: String,
    rules: Vec<Rule>,
}

impl FieldRule {
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            rules: Vec::new(),
        }
    }

    pub fn required(mut self) -> Self {
        self.rules.push(Rule::Required);
        self
    }

    pub fn min_len(mut self, len: usize) -> Self {
        self.rules.push(Rule::MinLen(len));
        self
    }

    pub fn max_len(mut self, len: usize) -> Self {
        self.rules.push(Rule::MaxLen(len));
        self
    }

    /// Value must match `regex`; `description` names the expected format
    pub fn pattern(mut self, regex: &Regex, description: impl Into<String>) -> Self {
        self.rules.push(Rule::Pattern {
            regex: regex.clone(),
            description: description.into(),
        });
        self
    }

    /// Value must be a number within `min..=max`
    pub fn range(mut self, min: Decimal, max: Decimal) -> Self {
        self.rules.push(Rule::Range { min, max });
        self
    }

    /// Value must be a calendar date in `YYYY-MM-DD` form
    pub fn date(mut self) -> Self {
        self.rules.push(Rule::Date);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_required(&self) -> bool {
        self.rules.iter().any(|rule| matches!(rule, Rule::Required))
    }

    /// Messages for every rule `value` breaks
    pub fn check(&self, value: Option<&str>) -> Vec<String> {
        let value = value.map(str::trim).unwrap_or_default();

        if value.is_empty() {
            // Optional fields left blank are fine; blank required ones get a
            // single message rather than one per rule.
            return if self.is_required() {
                vec![format!("{} is required", self.label)]
            } else {
                Vec::new()
            };
        }

        self.rules
            .iter()
            .filter_map(|rule| self.violation(rule, value))
            .collect()
    }

    fn violation(&self, rule: &Rule, value: &str) -> Option<String> {
        let label = &self.label;
        match rule {
            Rule::Required => None,
            Rule::MinLen(len) if value.chars().count() < *len => {
                Some(format!("{} must be at least {} characters", label, len))
            }
            Rule::MaxLen(len) if value.chars().count() > *len => {
                Some(format!("{} cannot exceed {} characters", label, len))
            }
            Rule::MinLen(_) | Rule::MaxLen(_) => None,
            Rule::Pattern { regex, description } if !regex.is_match(value) => {
                Some(format!("{} must be a valid {}", label, description))
            }
            Rule::Pattern { .. } => None,
            Rule::Range { min, max } => match parse_numeric(value) {
                None => Some(format!("{} must be a number", label)),
                Some(number) if number < *min || number > *max => {
                    Some(format!("{} must be between {} and {}", label, min, max))
                }
                Some(_) => None,
            },
            Rule::Date => match NaiveDate::parse_from_str(value, DATE_FORMAT) {
                Ok(_) => None,
                Err(_) => Some(format!("{} must be a date (YYYY-MM-DD)", label)),
            },
        }
    }
}

/// Messages keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn extend_field(&mut self, field: &str, messages: Vec<String>) {
        if !messages.is_empty() {
            self.0.entry(field.to_string()).or_default().extend(messages);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of fields with at least one message
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.0.iter()
    }
}

/// Ordered field rules for one form
#[derive(Debug, Clone, Default)]
pub struct FormSchema {
    fields: Vec<FieldRule>,
}

impl FormSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, rule: FieldRule) -> Self {
        self.fields.push(rule);
        self
    }

    pub fn fields(&self) -> &[FieldRule] {
        &self.fields
    }

    pub fn knows(&self, name: &str) -> bool {
        self.fields.iter().any(|rule| rule.name == name)
    }

    pub fn validate(&self, values: &BTreeMap<String, String>) -> FieldErrors {
        let mut errors = FieldErrors::new();
        for rule in &self.fields {
            let messages = rule.check(values.get(&rule.name).map(String::as_str));
            errors.extend_field(&rule.name, messages);
        }
        errors
    }
}
