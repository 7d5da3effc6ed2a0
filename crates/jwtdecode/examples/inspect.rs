//! Print the contents of a JWT
//!
//! ```sh
//! cargo run --example inspect -- <token>
//! echo "<token>" | RUST_LOG=jwtdecode=debug cargo run --example inspect
//! ```

use jwtdecode::{DecodedToken, Value, decode};
use std::io::Read;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "inspect=info,jwtdecode=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let input = match std::env::args().nth(1) {
        Some(token) => token,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let token = match decode(input.trim()) {
        Ok(token) => token,
        Err(e) => {
            tracing::warn!("JWT decoding failed: {e}");
            return Err(e.into());
        }
    };

    print_token(&token);
    Ok(())
}

fn print_token(token: &DecodedToken) {
    let header = Value::Object(token.header().clone());
    let payload = Value::Object(token.payload().clone());

    println!("header:    {}", miniserde::json::to_string(&header));
    println!("payload:   {}", miniserde::json::to_string(&payload));
    println!("signature: {}", token.signature().unwrap_or("<none>"));
    println!();

    print_field("alg", token.algorithm());
    print_field("kid", token.key_id());
    print_field("iss", token.issuer());
    print_field("sub", token.subject());
    print_field("aud", token.audience().map(|aud| aud.join(", ")).as_deref());
    print_field("jti", token.identifier());
    print_field("iat", unix_seconds(token.issued_at()).as_deref());
    print_field("nbf", unix_seconds(token.not_before()).as_deref());
    print_field("exp", unix_seconds(token.expires_at()).as_deref());
    println!("expired:   {}", token.expired());
}

fn print_field(name: &str, value: Option<&str>) {
    if let Some(value) = value {
        println!("{name}:       {value}");
    }
}

fn unix_seconds(time: Option<SystemTime>) -> Option<String> {
    let time = time?;
    Some(match time.duration_since(UNIX_EPOCH) {
        Ok(since) => format!("{}", since.as_secs_f64()),
        Err(before) => format!("-{}", before.duration().as_secs_f64()),
    })
}
