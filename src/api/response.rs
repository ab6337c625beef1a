//! JSON response bodies

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::Result;

const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";
const INDENT: &[u8] = b"    ";

/// JSON body rendered with four-space indentation unless switched off
#[derive(Debug)]
pub struct IndentedJson<T> {
    status: StatusCode,
    value: T,
    indented: bool,
}

impl<T: Serialize> IndentedJson<T> {
    pub fn new(status: StatusCode, value: T) -> Self {
        Self {
            status,
            value,
            indented: true,
        }
    }

    pub fn indented(mut self, indented: bool) -> Self {
        self.indented = indented;
        self
    }
}

impl<T: Serialize> IntoResponse for IndentedJson<T> {
    fn into_response(self) -> Response {
        match encode(&self.value, self.indented) {
            Ok(bytes) => (
                self.status,
                [(header::CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE))],
                bytes,
            )
                .into_response(),
            Err(err) => {
                tracing::error!(error = %err, "Failed to encode response body");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
            }
        }
    }
}

/// Serialize `value`, indented or compact
pub fn encode<T: Serialize + ?Sized>(value: &T, indented: bool) -> Result<Vec<u8>> {
    if !indented {
        return Ok(serde_json::to_vec(value)?);
    }

    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut serializer)?;
    Ok(buf)
}
