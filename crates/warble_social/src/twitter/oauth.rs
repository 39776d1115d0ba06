//! OAuth 1.0a request signing.
//!
//! The v2 tweet endpoint accepts OAuth 1.0a user context. The signature
//! covers the request method, base URL, and the `oauth_*` protocol
//! parameters; a JSON request body contributes nothing to it.

use crate::twitter::TwitterCredentials;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use hmac::{Hmac, Mac};
use rand::distributions::Alphanumeric;
use rand::Rng;
use sha1::Sha1;
use std::time::{SystemTime, UNIX_EPOCH};

type HmacSha1 = Hmac<Sha1>;

/// Builds an `Authorization: OAuth ...` header value for one request.
///
/// Every call draws a fresh nonce and timestamp, so a header is only good
/// for the single request it was built for.
pub(crate) fn authorization_header(
    credentials: &TwitterCredentials,
    method: &str,
    url: &str,
) -> String {
    let nonce: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(32)
        .map(char::from)
        .collect();
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
        .to_string();
    build_header(credentials, method, url, &nonce, &timestamp, &[])
}

/// Deterministic header assembly, split out so tests can pin the nonce and
/// timestamp.
fn build_header(
    credentials: &TwitterCredentials,
    method: &str,
    url: &str,
    nonce: &str,
    timestamp: &str,
    extra_params: &[(&str, &str)],
) -> String {
    let oauth_params = [
        ("oauth_consumer_key", credentials.consumer_key().as_str()),
        ("oauth_nonce", nonce),
        ("oauth_signature_method", "HMAC-SHA1"),
        ("oauth_timestamp", timestamp),
        ("oauth_token", credentials.access_token().as_str()),
        ("oauth_version", "1.0"),
    ];

    let mut signed_params: Vec<(&str, &str)> = oauth_params.to_vec();
    signed_params.extend_from_slice(extra_params);
    let base = signature_base_string(method, url, &signed_params);
    let signature = sign(
        &base,
        credentials.consumer_secret(),
        credentials.access_token_secret(),
    );

    let mut header_params: Vec<(String, String)> = oauth_params
        .iter()
        .map(|(key, value)| (key.to_string(), percent_encode(value)))
        .collect();
    header_params.push(("oauth_signature".to_string(), percent_encode(&signature)));
    header_params.sort();

    let fields = header_params
        .iter()
        .map(|(key, value)| format!("{}=\"{}\"", key, value))
        .collect::<Vec<_>>()
        .join(", ");
    format!("OAuth {}", fields)
}

/// Assembles the signature base string from the method, URL, and every
/// parameter that participates in signing.
///
/// Parameters are percent-encoded before sorting, as RFC 5849 section 3.4.1
/// requires.
fn signature_base_string(method: &str, url: &str, params: &[(&str, &str)]) -> String {
    let mut encoded: Vec<(String, String)> = params
        .iter()
        .map(|(key, value)| (percent_encode(key), percent_encode(value)))
        .collect();
    encoded.sort();

    let param_string = encoded
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join("&");

    format!(
        "{}&{}&{}",
        method.to_uppercase(),
        percent_encode(url),
        percent_encode(&param_string)
    )
}

fn sign(base: &str, consumer_secret: &str, token_secret: &str) -> String {
    let key = format!(
        "{}&{}",
        percent_encode(consumer_secret),
        percent_encode(token_secret)
    );
    let mut mac = HmacSha1::new_from_slice(key.as_bytes()).expect("HMAC accepts any key length");
    mac.update(base.as_bytes());
    STANDARD.encode(mac.finalize().into_bytes())
}

/// RFC 3986 strict percent-encoding: everything except unreserved
/// characters, with uppercase hex digits, byte by byte over UTF-8.
fn percent_encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(byte as char);
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}
