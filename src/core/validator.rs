use crate::models::CustomerRecord;
use serde_json::{Map, Value};
use thiserror::Error;

/// Field keys expected in every customer line
pub const USER_ID_FIELD: &str = "user_id";
pub const NAME_FIELD: &str = "name";
pub const LATITUDE_FIELD: &str = "latitude";
pub const LONGITUDE_FIELD: &str = "longitude";

/// Category of a rejected line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    MalformedSyntax,
    MissingField,
    WrongType,
}

/// Errors produced while turning a raw line into a `CustomerRecord`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Parsing the Customer data on line {line} failed because it does not have the expected JSON format.")]
    MalformedSyntax { line: usize },

    #[error("Parsing the Customer data on line {line} failed because an expected field with name {field} is missing.")]
    MissingField { field: &'static str, line: usize },

    #[error("Parsing the Customer data on line {line} failed because {field} has an unexpected type (expected {expected}).")]
    WrongType {
        field: &'static str,
        expected: &'static str,
        line: usize,
    },
}

impl ParseError {
    pub fn kind(&self) -> ParseErrorKind {
        match self {
            ParseError::MalformedSyntax { .. } => ParseErrorKind::MalformedSyntax,
            ParseError::MissingField { .. } => ParseErrorKind::MissingField,
            ParseError::WrongType { .. } => ParseErrorKind::WrongType,
        }
    }

    pub fn line(&self) -> usize {
        match self {
            ParseError::MalformedSyntax { line }
            | ParseError::MissingField { line, .. }
            | ParseError::WrongType { line, .. } => *line,
        }
    }

    /// The offending field, if the failure is tied to one
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ParseError::MalformedSyntax { .. } => None,
            ParseError::MissingField { field, .. } | ParseError::WrongType { field, .. } => Some(field),
        }
    }
}

/// Converts a raw JSON value to a field's declared type, `None` if it cannot
pub type Coercion<T> = fn(&Value) -> Option<T>;

/// A required field: its key, a readable type name, and its coercion
#[derive(Clone, Copy)]
pub struct FieldSpec<T> {
    pub name: &'static str,
    pub expected: &'static str,
    pub coerce: Coercion<T>,
}

impl<T> FieldSpec<T> {
    /// Look the field up in `object` and coerce it
    pub fn extract(&self, object: &Map<String, Value>, line_number: usize) -> Result<T, ParseError> {
        let raw = object.get(self.name).ok_or(ParseError::MissingField {
            field: self.name,
            line: line_number,
        })?;

        (self.coerce)(raw).ok_or(ParseError::WrongType {
            field: self.name,
            expected: self.expected,
            line: line_number,
        })
    }
}

pub const USER_ID: FieldSpec<i64> = FieldSpec { name: USER_ID_FIELD, expected: "integer", coerce: coerce_integer };
pub const NAME: FieldSpec<String> = FieldSpec { name: NAME_FIELD, expected: "text", coerce: coerce_text };
pub const LATITUDE: FieldSpec<f64> = FieldSpec { name: LATITUDE_FIELD, expected: "real number", coerce: coerce_real };
pub const LONGITUDE: FieldSpec<f64> = FieldSpec { name: LONGITUDE_FIELD, expected: "real number", coerce: coerce_real };

/// Required customer fields in the order they are checked
pub const CUSTOMER_FIELDS: [&str; 4] = [USER_ID.name, NAME.name, LATITUDE.name, LONGITUDE.name];

/// Parse one raw feed line into a `CustomerRecord`
///
/// Fields are checked in `CUSTOMER_FIELDS` order and the first failure is
/// returned. Extra keys in the line are ignored.
///
/// # Arguments
/// * `raw_line` - One line of the feed, expected to hold a JSON object
/// * `line_number` - 1-based position of the line, used in errors
pub fn parse_record(raw_line: &str, line_number: usize) -> Result<CustomerRecord, ParseError> {
    let object = match serde_json::from_str::<Value>(raw_line) {
        Ok(Value::Object(object)) => object,
        _ => return Err(ParseError::MalformedSyntax { line: line_number }),
    };

    // Struct fields are evaluated top to bottom, matching CUSTOMER_FIELDS
    Ok(CustomerRecord {
        user_id: USER_ID.extract(&object, line_number)?,
        name: NAME.extract(&object, line_number)?,
        latitude: LATITUDE.extract(&object, line_number)?,
        longitude: LONGITUDE.extract(&object, line_number)?,
    })
}

/// Integers, integral floats, and strings holding a base-10 integer
pub fn coerce_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number.as_i64().or_else(|| {
            let float = number.as_f64()?;
            let integral = float.fract() == 0.0 && float >= i64::MIN as f64 && float < i64::MAX as f64;
            integral.then_some(float as i64)
        }),
        Value::String(text) => text.trim().parse::<i64>().ok(),
        _ => None,
    }
}

/// Non-blank strings; numbers are rendered as text
pub fn coerce_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) if !text.trim().is_empty() => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

/// Numbers and strings holding a finite decimal number
pub fn coerce_real(value: &Value) -> Option<f64> {
    let real = match value {
        Value::Number(number) => number.as_f64()?,
        Value::String(text) => text.trim().parse::<f64>().ok()?,
        _ => return None,
    };

    real.is_finite().then_some(real)
}
