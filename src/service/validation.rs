//! Request validation for new ads.

use crate::error::AppError;
use crate::model::NewAd;
use serde::Serialize;
use serde_json::Value;

pub const TITLE_MAX: usize = 50;
pub const DESCRIPTION_MIN: usize = 10;
pub const DESCRIPTION_MAX: usize = 300;
pub const OWNER_MAX: usize = 100;

/// One entry of the structured validation message.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl FieldError {
    fn new(field: &str, msg: &str, kind: &str) -> Self {
        Self {
            loc: vec![field.to_string()],
            msg: msg.to_string(),
            kind: kind.to_string(),
        }
    }

    pub fn value_error(field: &str, msg: &str) -> Self {
        Self::new(field, msg, "value_error")
    }

    pub fn missing(field: &str) -> Self {
        Self::new(field, "field required", "value_error.missing")
    }

    pub fn not_a_string(field: &str) -> Self {
        Self::new(field, "str type expected", "type_error.str")
    }

    pub fn field(&self) -> &str {
        self.loc.first().map(String::as_str).unwrap_or_default()
    }
}

pub struct AdValidator;

impl AdValidator {
    /// Validate a request body and normalize it to exactly title, description and owner.
    /// Every failing field is reported; unknown keys are ignored.
    pub fn validate(body: &Value) -> Result<NewAd, AppError> {
        let map = body
            .as_object()
            .ok_or_else(|| AppError::BadRequest("Request body must be a JSON object.".into()))?;

        let mut errors = Vec::new();
        let title = string_field(map, "title", &mut errors).filter(|v| check(v, "title", check_title, &mut errors));
        let description = string_field(map, "description", &mut errors)
            .filter(|v| check(v, "description", check_description, &mut errors));
        let owner = string_field(map, "owner", &mut errors).filter(|v| check(v, "owner", check_owner, &mut errors));

        match (title, description, owner) {
            (Some(title), Some(description), Some(owner)) if errors.is_empty() => Ok(NewAd {
                title,
                description,
                owner,
            }),
            _ => Err(AppError::Validation(errors)),
        }
    }
}

fn string_field(
    map: &serde_json::Map<String, Value>,
    name: &str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match map.get(name) {
        None | Some(Value::Null) => {
            errors.push(FieldError::missing(name));
            None
        }
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            errors.push(FieldError::not_a_string(name));
            None
        }
    }
}

fn check(
    value: &str,
    name: &str,
    rule: fn(&str) -> Result<(), &'static str>,
    errors: &mut Vec<FieldError>,
) -> bool {
    match rule(value) {
        Ok(()) => true,
        Err(msg) => {
            errors.push(FieldError::value_error(name, msg));
            false
        }
    }
}

// Lengths count characters, matching VARCHAR(n).
fn check_title(value: &str) -> Result<(), &'static str> {
    if value.chars().count() > TITLE_MAX {
        return Err("Title must be less than 50 symbols.");
    }
    Ok(())
}

fn check_description(value: &str) -> Result<(), &'static str> {
    let len = value.chars().count();
    if len > DESCRIPTION_MAX {
        Err("Description must be less than 300 symbols.")
    } else if len < DESCRIPTION_MIN {
        Err("So little description.")
    } else {
        Ok(())
    }
}

/// Only the literal single space is rejected; empty or other blank owners pass.
fn check_owner(value: &str) -> Result<(), &'static str> {
    if value.chars().count() > OWNER_MAX {
        Err("Owner must be less than 100 symbols.")
    } else if value == " " {
        Err("Wrong! Not owner.")
    } else {
        Ok(())
    }
}
