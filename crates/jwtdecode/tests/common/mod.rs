//! Token construction helpers for integration tests
//!
//! Tokens are assembled from `serde_json` values and are never signed: the
//! signature part is arbitrary text chosen by the test.

#![allow(dead_code)]

use base64::Engine;
use base64::engine::general_purpose::{URL_SAFE, URL_SAFE_NO_PAD};
use serde_json::{Value, json};

/// Builder for compact tokens
#[derive(Debug)]
pub struct TokenBuilder {
    header: Value,
    claims: Value,
    signature: String,
    padded: bool,
}

impl TokenBuilder {
    /// Start with `{"alg":"HS256","typ":"JWT"}` and no claims
    pub fn new() -> Self {
        Self {
            header: json!({"alg": "HS256", "typ": "JWT"}),
            claims: json!({}),
            signature: "signature".to_string(),
            padded: false,
        }
    }

    /// Replace the whole header
    pub fn header(mut self, header: Value) -> Self {
        self.header = header;
        self
    }

    /// Replace the whole claims set
    pub fn claims(mut self, claims: Value) -> Self {
        self.claims = claims;
        self
    }

    /// Set a single claim
    pub fn claim(mut self, name: &str, value: Value) -> Self {
        self.claims[name] = value;
        self
    }

    pub fn signature(mut self, signature: impl Into<String>) -> Self {
        self.signature = signature.into();
        self
    }

    /// Emit `=` padding on the header and payload parts
    pub fn padded(mut self) -> Self {
        self.padded = true;
        self
    }

    pub fn build(&self) -> String {
        format!(
            "{}.{}.{}",
            self.encode(&self.header),
            self.encode(&self.claims),
            self.signature
        )
    }

    fn encode(&self, value: &Value) -> String {
        let json = serde_json::to_string(value).unwrap();
        if self.padded {
            URL_SAFE.encode(json)
        } else {
            URL_SAFE_NO_PAD.encode(json)
        }
    }
}

/// Encode arbitrary text as an unpadded Base64URL segment
pub fn segment(text: &str) -> String {
    URL_SAFE_NO_PAD.encode(text)
}

/// Convert a decoded object into a `serde_json` value for comparisons
pub fn to_serde(object: &jwtdecode::Object) -> Value {
    let value = jwtdecode::Value::Object(object.clone());
    serde_json::from_str(&miniserde::json::to_string(&value)).unwrap()
}
