//! Field projection over the request descriptor.

use serde_json::{Map, Value};

use super::RequestDescriptor;

/// Named descriptor fields, in canonical (serialized) order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Args,
    Data,
    Files,
    Form,
    Headers,
    Json,
    Method,
    Origin,
    Url,
}

impl Field {
    /// Key the field serializes under.
    pub fn key(self) -> &'static str {
        match self {
            Field::Args => "args",
            Field::Data => "data",
            Field::Files => "files",
            Field::Form => "form",
            Field::Headers => "headers",
            Field::Json => "json",
            Field::Method => "method",
            Field::Origin => "origin",
            Field::Url => "url",
        }
    }
}

/// Subset echoed by the read-style endpoint (`/get`).
pub const READ_FIELDS: &[Field] = &[Field::Url, Field::Args, Field::Headers, Field::Origin];

/// Subset echoed by the write-style endpoints (`/post`, `/put`, ...).
pub const WRITE_FIELDS: &[Field] = &[
    Field::Url,
    Field::Args,
    Field::Form,
    Field::Data,
    Field::Origin,
    Field::Headers,
    Field::Files,
    Field::Json,
];

/// Subset echoed by the compressed transfer endpoints.
pub const TRANSFER_FIELDS: &[Field] = &[Field::Origin, Field::Headers, Field::Method];

/// Every descriptor field (`/anything`).
pub const ALL_FIELDS: &[Field] = &[
    Field::Args,
    Field::Data,
    Field::Files,
    Field::Form,
    Field::Headers,
    Field::Json,
    Field::Method,
    Field::Origin,
    Field::Url,
];

/// Keep only the requested fields of the descriptor's serialized form.
///
/// Output keys are the descriptor's own (no renaming), in canonical order.
pub fn project(descriptor: &RequestDescriptor, fields: &[Field]) -> Value {
    let serialized = serde_json::to_value(descriptor).unwrap_or(Value::Null);
    let Value::Object(entries) = serialized else {
        return Value::Object(Map::new());
    };
    let mut out = Map::new();
    for (key, value) in entries {
        if fields.iter().any(|field| field.key() == key) {
            out.insert(key, value);
        }
    }
    Value::Object(out)
}
