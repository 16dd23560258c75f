//! Field-level validation helpers used when converting request payloads into parameters.
//!
//! Each helper records failures on a shared `ValidationError` instead of returning early,
//! so a single response lists every invalid field.

use rust_decimal::Decimal;

use crate::{model::field::FieldInput, server::error::validation::ValidationError};

pub const REQUIRED: &str = "This field is required.";
pub const BLANK: &str = "This field may not be blank.";

/// A payload value type with the message reported when a field holds another JSON type.
pub trait Expected {
    const INVALID: &'static str;
}

impl Expected for String {
    const INVALID: &'static str = "Not a valid string.";
}

impl Expected for i32 {
    const INVALID: &'static str = "A valid integer is required.";
}

impl Expected for i64 {
    const INVALID: &'static str = "A valid integer is required.";
}

impl Expected for Decimal {
    const INVALID: &'static str = "A valid number is required.";
}

/// Unwraps a payload field, recording a type message when it holds the wrong JSON type
/// and a "required" message when it is absent and `required` is set.
pub fn field<T: Expected>(
    errors: &mut ValidationError,
    field: &str,
    value: Option<FieldInput<T>>,
    required: bool,
) -> Option<T> {
    match value {
        Some(FieldInput::Valid(value)) => Some(value),
        Some(FieldInput::Invalid(_)) => {
            errors.add(field, T::INVALID);
            None
        }
        None => {
            if required {
                errors.add(field, REQUIRED);
            }
            None
        }
    }
}

/// Records a "required" message when `value` is absent and nothing else was reported
/// for the field.
pub fn present<T>(errors: &mut ValidationError, field: &str, value: Option<T>) -> Option<T> {
    if value.is_none() && !errors.contains(field) {
        errors.add(field, REQUIRED);
    }
    value
}

/// Checks that an integer fits in `min..=max`.
pub fn bounded_int(
    errors: &mut ValidationError,
    field: &str,
    value: i64,
    min: i64,
    max: i64,
) -> Option<i64> {
    if value < min {
        errors.add(
            field,
            format!("Ensure this value is greater than or equal to {}.", min),
        );
        None
    } else if value > max {
        errors.add(
            field,
            format!("Ensure this value is less than or equal to {}.", max),
        );
        None
    } else {
        Some(value)
    }
}

/// Trims a text value and checks that it is not blank and has at most `max_len` characters.
pub fn bounded_text(
    errors: &mut ValidationError,
    field: &str,
    value: String,
    max_len: usize,
) -> String {
    let value = value.trim().to_string();

    if value.is_empty() {
        errors.add(field, BLANK);
    } else if value.chars().count() > max_len {
        errors.add(
            field,
            format!("Ensure this field has no more than {} characters.", max_len),
        );
    }

    value
}

/// Checks a decimal against a fixed precision: at most `max_digits` significant digits,
/// `decimal_places` of which may follow the decimal point.
pub fn bounded_decimal(
    errors: &mut ValidationError,
    field: &str,
    value: Decimal,
    max_digits: u32,
    decimal_places: u32,
) -> Decimal {
    let value = value.normalize();

    if value.scale() > decimal_places {
        errors.add(
            field,
            format!(
                "Ensure that there are no more than {} decimal places.",
                decimal_places
            ),
        );
    }

    let whole = value.trunc().abs();
    let whole_digits = if whole.is_zero() {
        0
    } else {
        whole.to_string().len() as u32
    };
    let max_whole_digits = max_digits - decimal_places;
    if whole_digits > max_whole_digits {
        errors.add(
            field,
            format!(
                "Ensure that there are no more than {} digits before the decimal point.",
                max_whole_digits
            ),
        );
    }

    value
}
