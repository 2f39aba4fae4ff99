// src/validation.rs

//! The validation rule set: a pure function from a candidate [`ProductInput`]
//! to the list of field rules it violates. An empty list means the input is
//! valid. Every rule is evaluated; violations are reported together rather
//! than short-circuiting on the first failure.

use serde::{Deserialize, Serialize};

use crate::models::ProductInput;

/// Maximum accepted length of `name`, in Unicode scalar values.
pub const NAME_MAX_LEN: usize = 100;
/// Maximum accepted length of `description`, in Unicode scalar values.
pub const DESCRIPTION_MAX_LEN: usize = 500;

/// The rule a field violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
  Required,
  TooLong,
  MustBePositive,
}

/// A single validation violation tied to one input field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
  pub field: String,
  pub rule: Rule,
  pub message: String,
}

impl FieldError {
  fn new(field: &str, rule: Rule, message: impl Into<String>) -> Self {
    Self {
      field: field.to_string(),
      rule,
      message: message.into(),
    }
  }
}

/// Checks `input` against the three field rules and returns every violation.
///
/// - `name`: required, at most [`NAME_MAX_LEN`] characters.
/// - `description`: required, at most [`DESCRIPTION_MAX_LEN`] characters.
/// - `price`: strictly greater than zero.
pub fn validate(input: &ProductInput) -> Vec<FieldError> {
  let mut errors = Vec::new();

  if input.name.trim().is_empty() {
    errors.push(FieldError::new("name", Rule::Required, "Name is required."));
  } else if input.name.chars().count() > NAME_MAX_LEN {
    errors.push(FieldError::new(
      "name",
      Rule::TooLong,
      format!("Name exceeds the maximum length of {} characters.", NAME_MAX_LEN),
    ));
  }

  if input.description.trim().is_empty() {
    errors.push(FieldError::new(
      "description",
      Rule::Required,
      "Description is required.",
    ));
  } else if input.description.chars().count() > DESCRIPTION_MAX_LEN {
    errors.push(FieldError::new(
      "description",
      Rule::TooLong,
      format!(
        "Description exceeds the maximum length of {} characters.",
        DESCRIPTION_MAX_LEN
      ),
    ));
  }

  if input.price <= 0.0 {
    errors.push(FieldError::new(
      "price",
      Rule::MustBePositive,
      "Price must be greater than zero.",
    ));
  }

  errors
}

#[cfg(test)]
mod tests {
  use super::*;

  fn input(name: &str, description: &str, price: f64) -> ProductInput {
    ProductInput {
      name: name.to_string(),
      description: description.to_string(),
      price,
    }
  }

  fn rules_for<'a>(errors: &'a [FieldError], field: &str) -> Vec<Rule> {
    errors.iter().filter(|e| e.field == field).map(|e| e.rule).collect()
  }

  #[test]
  fn valid_input_produces_no_errors() {
    let errors = validate(&input("Widget", "A small widget", 9.99));
    assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
  }

  #[test]
  fn empty_name_fails_required() {
    let errors = validate(&input("", "desc", 1.0));
    assert_eq!(rules_for(&errors, "name"), vec![Rule::Required]);
  }

  #[test]
  fn whitespace_only_fields_fail_required() {
    let errors = validate(&input("   ", "\t\n", 1.0));
    assert_eq!(rules_for(&errors, "name"), vec![Rule::Required]);
    assert_eq!(rules_for(&errors, "description"), vec![Rule::Required]);
  }

  #[test]
  fn name_at_limit_passes_and_one_over_fails() {
    let at_limit = "x".repeat(NAME_MAX_LEN);
    assert!(validate(&input(&at_limit, "desc", 1.0)).is_empty());

    let over = "x".repeat(NAME_MAX_LEN + 1);
    let errors = validate(&input(&over, "desc", 1.0));
    assert_eq!(rules_for(&errors, "name"), vec![Rule::TooLong]);
  }

  #[test]
  fn description_at_limit_passes_and_one_over_fails() {
    let at_limit = "y".repeat(DESCRIPTION_MAX_LEN);
    assert!(validate(&input("name", &at_limit, 1.0)).is_empty());

    let over = "y".repeat(DESCRIPTION_MAX_LEN + 1);
    let errors = validate(&input("name", &over, 1.0));
    assert_eq!(rules_for(&errors, "description"), vec![Rule::TooLong]);
  }

  #[test]
  fn zero_and_negative_price_fail_must_be_positive() {
    let errors = validate(&input("name", "desc", 0.0));
    assert_eq!(rules_for(&errors, "price"), vec![Rule::MustBePositive]);

    let errors = validate(&input("name", "desc", -3.5));
    assert_eq!(rules_for(&errors, "price"), vec![Rule::MustBePositive]);
  }

  #[test]
  fn all_violations_are_reported_together() {
    let errors = validate(&input("", "", 0.0));
    assert_eq!(errors.len(), 3);
    assert_eq!(rules_for(&errors, "name"), vec![Rule::Required]);
    assert_eq!(rules_for(&errors, "description"), vec![Rule::Required]);
    assert_eq!(rules_for(&errors, "price"), vec![Rule::MustBePositive]);
  }

  #[test]
  fn length_limit_counts_chars_not_bytes() {
    // 100 multi-byte characters is still within the limit.
    let name = "é".repeat(NAME_MAX_LEN);
    assert!(validate(&input(&name, "desc", 1.0)).is_empty());
  }

  #[test]
  fn field_error_serializes_rule_in_snake_case() {
    let errors = validate(&input("name", "desc", 0.0));
    let json = serde_json::to_value(&errors).unwrap();
    assert_eq!(json[0]["rule"], "must_be_positive");
    assert_eq!(json[0]["field"], "price");
  }
}
