//! API Envelope
//!
//! Request and response framing for the encrypt and decrypt endpoints,
//! without any HTTP server. Handlers take the raw JSON request body and
//! return a status code plus the JSON response body.
//!
//! Success: `{success: true, result, plaintext|ciphertext, details}`
//! Failure: `{success: false, error, code}`

use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::CipherError;
use crate::pipeline::{CipherEngine, CipherResult, Direction};

/// HTTP-style status codes used by the envelope
pub const STATUS_OK: u16 = 200;
pub const STATUS_BAD_REQUEST: u16 = 400;
pub const STATUS_INTERNAL_ERROR: u16 = 500;

/// Body of an encrypt request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EncryptRequest {
    #[serde(default)]
    pub plaintext: String,
}

/// Body of a decrypt request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DecryptRequest {
    #[serde(default)]
    pub ciphertext: String,
}

/// A framed response
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    fn failure(status: u16, error: impl Into<String>, code: &str) -> Self {
        Self {
            status,
            body: json!({
                "success": false,
                "error": error.into(),
                "code": code,
            }),
        }
    }

    /// Check whether the response reports success
    pub fn is_success(&self) -> bool {
        self.status == STATUS_OK
    }

    /// Serialize the body for the wire
    pub fn to_json_string(&self) -> String {
        self.body.to_string()
    }
}

/// Name of the request/response field carrying the source text
fn source_field(direction: Direction) -> &'static str {
    match direction {
        Direction::Encrypt => "plaintext",
        Direction::Decrypt => "ciphertext",
    }
}

/// Handle an encrypt request body
pub fn handle_encrypt(engine: &CipherEngine, body: &str) -> ApiResponse {
    match serde_json::from_str::<EncryptRequest>(body) {
        Ok(request) => respond(engine, Direction::Encrypt, &request.plaintext),
        Err(e) => malformed(e),
    }
}

/// Handle a decrypt request body
pub fn handle_decrypt(engine: &CipherEngine, body: &str) -> ApiResponse {
    match serde_json::from_str::<DecryptRequest>(body) {
        Ok(request) => respond(engine, Direction::Decrypt, &request.ciphertext),
        Err(e) => malformed(e),
    }
}

/// Dispatch a request body by direction
pub fn handle(engine: &CipherEngine, direction: Direction, body: &str) -> ApiResponse {
    match direction {
        Direction::Encrypt => handle_encrypt(engine, body),
        Direction::Decrypt => handle_decrypt(engine, body),
    }
}

fn malformed(error: serde_json::Error) -> ApiResponse {
    warn!("[API] malformed request body: {}", error);
    ApiResponse::failure(
        STATUS_INTERNAL_ERROR,
        error.to_string(),
        CipherError::Serialization(error).error_code(),
    )
}

fn respond(engine: &CipherEngine, direction: Direction, text: &str) -> ApiResponse {
    let field = source_field(direction);

    if text.is_empty() {
        let label = match direction {
            Direction::Encrypt => "Plaintext",
            Direction::Decrypt => "Ciphertext",
        };
        return ApiResponse::failure(
            STATUS_BAD_REQUEST,
            format!("{} is required", label),
            CipherError::EmptyInput.error_code(),
        );
    }

    match engine.transform(direction, text) {
        Ok(result) => match success_body(field, &result) {
            Ok(body) => ApiResponse {
                status: STATUS_OK,
                body,
            },
            Err(e) => ApiResponse::failure(STATUS_INTERNAL_ERROR, e.to_string(), e.error_code()),
        },
        Err(e) => {
            let status = if e.is_input_error() {
                STATUS_BAD_REQUEST
            } else {
                STATUS_INTERNAL_ERROR
            };
            ApiResponse::failure(status, e.friendly_message(), e.error_code())
        }
    }
}

fn success_body(field: &str, result: &CipherResult) -> Result<Value, CipherError> {
    let layers = serde_json::to_value(&result.layers)?;

    let mut details = serde_json::Map::new();
    details.insert(field.to_string(), json!(result.input));
    details.insert("length".to_string(), json!(result.length()));
    details.insert("layers".to_string(), layers);

    let mut body = serde_json::Map::new();
    body.insert("success".to_string(), json!(true));
    body.insert("result".to_string(), json!(result.result));
    body.insert(field.to_string(), json!(result.input));
    body.insert("details".to_string(), Value::Object(details));

    Ok(Value::Object(body))
}
