//! Field-level validation helpers for inbound JSON payloads.
//!
//! Validation runs in two passes: presence of every required field is
//! checked before any type is inspected, so an incomplete payload always
//! reports `MissingProperty` even when another field also has a bad type.

use serde_json::Value;

use crate::error::{DomainError, Result};

/// Rejects the payload unless every listed field is present and non-null.
pub fn require_fields(ctx: &'static str, payload: &Value, fields: &[&'static str]) -> Result<()> {
    for field in fields {
        match payload.get(*field) {
            None | Some(Value::Null) => return Err(DomainError::MissingProperty(ctx, field)),
            Some(_) => {}
        }
    }
    Ok(())
}

/// Extracts a string field, rejecting any other JSON type.
pub fn str_field(ctx: &'static str, payload: &Value, field: &'static str) -> Result<String> {
    payload
        .get(field)
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or(DomainError::InvalidType(ctx, field))
}
