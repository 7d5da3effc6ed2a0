use crate::claim::Claim;
use crate::clock::{Clock, SystemClock};
use crate::error::{DecodeError, Result};
use crate::utils::base64url;
use miniserde::json::{Object, Value};
use std::fmt;
use std::str::FromStr;
use std::time::SystemTime;

/// A JWT split into its decoded header and payload
///
/// Nothing about the token has been verified: the signature is kept as the raw
/// Base64URL text and the claims are exactly what the producer wrote.
#[derive(Debug, Clone)]
pub struct DecodedToken {
    header: Object,
    payload: Object,
    signature: Option<String>,
    raw: String,
}

/// Decode a JWT in compact serialization (`header.payload.signature`)
///
/// # Example
/// ```
/// let token = jwtdecode::decode(
///     "eyJhbGciOiJIUzI1NiJ9.eyJzdWIiOiIxMjM0NTY3ODkwIn0.signature",
/// )?;
/// assert_eq!(token.subject(), Some("1234567890"));
/// assert_eq!(token.signature(), Some("signature"));
/// # Ok::<(), jwtdecode::DecodeError>(())
/// ```
pub fn decode(token: &str) -> Result<DecodedToken> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        tracing::debug!(parts = parts.len(), "token does not have three parts");
        return Err(DecodeError::InvalidPartCount(token.to_string(), parts.len()));
    }

    let header = decode_segment("header", parts[0])?;
    let payload = decode_segment("payload", parts[1])?;

    // An empty third part is how unsecured (alg "none") tokens end
    let signature = Some(parts[2])
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    tracing::trace!(
        header_claims = header.len(),
        payload_claims = payload.len(),
        signed = signature.is_some(),
        "decoded token"
    );

    Ok(DecodedToken {
        header,
        payload,
        signature,
        raw: token.to_string(),
    })
}

/// Decode one Base64URL segment into a JSON object
fn decode_segment(name: &'static str, segment: &str) -> Result<Object> {
    let bytes = base64url::decode_bytes(segment).map_err(|e| {
        tracing::debug!(segment = name, error = %e, "Base64URL decode failed");
        DecodeError::InvalidBase64Url(segment.to_string())
    })?;

    let invalid_json = |reason: &str| {
        tracing::debug!(segment = name, reason, "JSON parsing failed");
        DecodeError::InvalidJson(segment.to_string())
    };

    let json = std::str::from_utf8(&bytes).map_err(|_| invalid_json("invalid UTF-8"))?;
    match miniserde::json::from_str::<Value>(json) {
        Ok(Value::Object(object)) => Ok(object),
        Ok(_) => Err(invalid_json("top-level value is not an object")),
        Err(_) => Err(invalid_json("syntax error")),
    }
}

impl DecodedToken {
    /// The decoded JOSE header
    pub fn header(&self) -> &Object {
        &self.header
    }

    /// The decoded claims set
    pub fn payload(&self) -> &Object {
        &self.payload
    }

    /// The signature part as Base64URL text, `None` when the part is empty
    pub fn signature(&self) -> Option<&str> {
        self.signature.as_deref()
    }

    /// The token exactly as it was passed to [`decode`]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Look up a payload claim by name
    pub fn claim(&self, name: &str) -> Claim<'_> {
        Claim::new(self.payload.get(name))
    }

    /// Look up a header parameter by name
    pub fn header_claim(&self, name: &str) -> Claim<'_> {
        Claim::new(self.header.get(name))
    }

    /// Expiration Time (`exp`)
    pub fn expires_at(&self) -> Option<SystemTime> {
        self.claim("exp").as_date()
    }

    /// Issuer (`iss`)
    pub fn issuer(&self) -> Option<&str> {
        self.claim("iss").as_str()
    }

    /// Subject (`sub`)
    pub fn subject(&self) -> Option<&str> {
        self.claim("sub").as_str()
    }

    /// Audience (`aud`), either a single string or an array of strings
    pub fn audience(&self) -> Option<Vec<&str>> {
        self.claim("aud").as_array_of_strings()
    }

    /// Issued At (`iat`)
    pub fn issued_at(&self) -> Option<SystemTime> {
        self.claim("iat").as_date()
    }

    /// Not Before (`nbf`)
    pub fn not_before(&self) -> Option<SystemTime> {
        self.claim("nbf").as_date()
    }

    /// JWT ID (`jti`)
    pub fn identifier(&self) -> Option<&str> {
        self.claim("jti").as_str()
    }

    /// Whether the token is expired according to the wall clock
    ///
    /// A token without a numeric `exp` claim is never considered expired.
    /// This is a report, not a validation policy: callers that require an
    /// expiration must check [`expires_at`](Self::expires_at) themselves.
    pub fn expired(&self) -> bool {
        self.expired_with(&SystemClock)
    }

    /// Whether the token is expired at the instant reported by `clock`
    ///
    /// Expiration is inclusive: a token whose `exp` equals the current time
    /// is expired.
    pub fn expired_with(&self, clock: &(impl Clock + ?Sized)) -> bool {
        self.expires_at()
            .is_some_and(|expires_at| expires_at <= clock.now())
    }
}

impl FromStr for DecodedToken {
    type Err = DecodeError;

    fn from_str(token: &str) -> Result<Self> {
        decode(token)
    }
}

impl fmt::Display for DecodedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
