//! # jwtdecode - Decode and inspect JSON Web Tokens
//!
//! **jwtdecode** splits a compact JWT (`header.payload.signature`), decodes the
//! Base64URL header and payload into JSON objects, and exposes the registered
//! claims with type coercion.
//!
//! Signatures are **not** verified. Use this crate to look inside tokens
//! (debugging, logging, routing on an unverified `iss`), never to decide
//! whether a token can be trusted.
//!
//! ## Quick Start
//!
//! ```
//! use jwtdecode::decode;
//!
//! let token = decode("eyJhbGciOiJIUzI1NiJ9.eyJzdWIiOiIxMjM0NTY3ODkwIn0.signature")?;
//!
//! assert_eq!(token.algorithm(), Some("HS256"));
//! assert_eq!(token.subject(), Some("1234567890"));
//! assert!(!token.expired());
//! # Ok::<(), jwtdecode::DecodeError>(())
//! ```
//!
//! ## Claims
//!
//! Registered claims have dedicated accessors (`issuer`, `subject`, `audience`,
//! `expires_at`, `issued_at`, `not_before`, `identifier`). Any other claim is
//! read through [`DecodedToken::claim`], which returns a [`Claim`] view. Each
//! coercion on a `Claim` returns `None` when the value has another shape:
//!
//! ```
//! # let token = jwtdecode::decode("eyJhbGciOiJIUzI1NiJ9.eyJzdWIiOiIxMjM0NTY3ODkwIn0.signature")?;
//! let admin = token.claim("admin").as_bool().unwrap_or(false);
//! assert!(!admin);
//! # Ok::<(), jwtdecode::DecodeError>(())
//! ```
//!
//! ## Expiration
//!
//! [`DecodedToken::expired`] compares `exp` against the wall clock, and
//! [`DecodedToken::expired_with`] against any [`Clock`]. Tokens without an
//! `exp` claim are reported as not expired.

mod claim;
mod clock;
mod error;
mod header;
mod token;

// Internal modules
pub(crate) mod utils;

// Public Interface
pub use claim::Claim;
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{DecodeError, Result};
pub use miniserde::json::{Number, Object, Value};
pub use token::{DecodedToken, decode};
