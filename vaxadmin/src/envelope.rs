//! # Envelope Codec
//!
//! Every request and response body exchanged with the procurement backend
//! is wrapped in a signed, encrypted envelope:
//!
//! ```json
//! {
//!     "params": "<hex AES-128-ECB ciphertext>",
//!     "sign": "<md5(params + suffix)>",
//!     "timestamp": 1719907200000
//! }
//! ```
//!
//! ## Encode Flow
//!
//! ```text
//! 1. Serialize the payload to a JSON value
//!              ↓
//! 2. Object payloads get a `timestamp` field (epoch ms)
//!              ↓
//! 3. JSON string → AES-128-ECB / PKCS7 under the fixed key
//!              ↓
//! 4. Hex-encode ciphertext → `params`
//!              ↓
//! 5. `sign` = md5 hex digest of `params` + fixed suffix
//! ```
//!
//! ## Compatibility
//!
//! The key, sign suffix, hex casing and timestamp injection point are
//! carried verbatim from the deployed backend contract. The key ships in
//! every client, so the envelope is tamper-evidence and obfuscation, not a
//! confidentiality boundary.

use aes::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyInit};
use chrono::Utc;
use md5::{Digest, Md5};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

type Aes128EcbEnc = ecb::Encryptor<aes::Aes128>;
type Aes128EcbDec = ecb::Decryptor<aes::Aes128>;

/// Fixed 16-byte AES key shared with the backend.
const CIPHER_KEY: &[u8; 16] = b"9mckdlpe$gg#$GJH";

/// Fixed suffix appended to `params` before hashing into `sign`.
const SIGN_SUFFIX: &str = "D1ckd#$G$fDdgh23";

/// Errors that can occur while encoding or decoding an envelope.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The payload could not be serialized to JSON.
    #[error("Failed to serialize payload: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The `params` field is not valid hex.
    #[error("Ciphertext is not valid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    /// Decryption failed (wrong key or corrupted ciphertext padding).
    #[error("Failed to decrypt params: bad padding")]
    BadPadding,

    /// The recomputed signature does not match the `sign` field.
    ///
    /// The original client returned `undefined` here; a tampered response
    /// is an explicit failure in this port.
    #[error("Response signature mismatch: payload rejected as tampered")]
    SignatureMismatch,
}

/// The signed, encrypted transport envelope.
///
/// Serializes to/from the exact wire shape: `params` (hex ciphertext),
/// `sign` (keyed MD5), `timestamp` (epoch milliseconds).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope {
    /// Hex-encoded AES ciphertext of the JSON payload.
    pub params: String,

    /// `md5(params + suffix)` hex digest.
    pub sign: String,

    /// Epoch milliseconds at encode time.
    pub timestamp: i64,
}

/// Current epoch milliseconds.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Compute the keyed signature over a hex ciphertext.
pub fn sign(params_hex: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(params_hex.as_bytes());
    hasher.update(SIGN_SUFFIX.as_bytes());
    hex::encode(hasher.finalize())
}

/// AES-128-ECB/PKCS7 encrypt, returning lowercase hex.
fn encrypt(plaintext: &[u8]) -> String {
    let ciphertext = Aes128EcbEnc::new(CIPHER_KEY.into()).encrypt_padded_vec_mut::<Pkcs7>(plaintext);
    hex::encode(ciphertext)
}

/// AES-128-ECB/PKCS7 decrypt from hex.
fn decrypt(params_hex: &str) -> Result<String, CodecError> {
    let ciphertext = hex::decode(params_hex)?;
    let plaintext = Aes128EcbDec::new(CIPHER_KEY.into())
        .decrypt_padded_vec_mut::<Pkcs7>(&ciphertext)
        .map_err(|_| CodecError::BadPadding)?;

    // Some backend responses arrive with embedded NUL padding artifacts;
    // the original client stripped them before parsing.
    Ok(String::from_utf8_lossy(&plaintext).replace('\u{0000}', ""))
}

/// Encode a payload into a request envelope.
///
/// Object payloads get a `timestamp` field injected before encryption
/// (the backend uses it as a replay window). String payloads are
/// encrypted as-is; every other payload is encrypted as its JSON text.
///
/// ## Example
///
/// ```rust,ignore
/// let envelope = envelope::encode(&serde_json::json!({ "pageNum": 1 }))?;
/// assert_eq!(envelope.sign, envelope::sign(&envelope.params));
/// ```
pub fn encode<P: Serialize>(payload: &P) -> Result<Envelope, CodecError> {
    let timestamp = now_millis();
    let mut value = serde_json::to_value(payload)?;

    let plaintext = match &mut value {
        Value::Object(map) => {
            map.insert("timestamp".to_string(), Value::from(timestamp));
            serde_json::to_string(&value)?
        }
        Value::String(text) => text.clone(),
        other => serde_json::to_string(other)?,
    };

    let params = encrypt(plaintext.as_bytes());
    Ok(Envelope {
        sign: sign(&params),
        params,
        timestamp,
    })
}

/// Decode and verify a response envelope.
///
/// The signature is recomputed over `params` and compared first; only a
/// verified ciphertext is decrypted. Decrypted text that fails to parse
/// as JSON is returned as a plain string value, mirroring the backend's
/// occasional bare-string responses.
///
/// ## Returns
///
/// - `Ok(Value)` - The decrypted payload
/// - `Err(CodecError::SignatureMismatch)` - The envelope was tampered with
pub fn decode(envelope: &Envelope) -> Result<Value, CodecError> {
    if sign(&envelope.params) != envelope.sign {
        return Err(CodecError::SignatureMismatch);
    }

    let text = decrypt(&envelope.params)?;
    Ok(serde_json::from_str(&text).unwrap_or(Value::String(text)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Strip the injected timestamp so round trips can compare payloads.
    fn without_timestamp(mut value: Value) -> Value {
        if let Value::Object(map) = &mut value {
            map.remove("timestamp");
        }
        value
    }

    #[test]
    fn test_round_trip_object() {
        let payload = json!({
            "contractNo": "HT-2024-001",
            "pageNum": 1,
            "pageSize": 20,
            "vaccines": ["HPV", "BCG"],
        });

        let envelope = encode(&payload).unwrap();
        let decoded = decode(&envelope).unwrap();

        // The encoder injects a timestamp into object payloads; everything
        // else must survive unchanged.
        assert_eq!(without_timestamp(decoded.clone()), payload);
        assert!(decoded.get("timestamp").is_some());
    }

    #[test]
    fn test_round_trip_string_payload() {
        let envelope = encode(&"plain text payload").unwrap();
        let decoded = decode(&envelope).unwrap();
        assert_eq!(decoded, json!("plain text payload"));
    }

    #[test]
    fn test_example_scenario() {
        // Encoding {a: 1} must yield valid hex params and a matching sign.
        let envelope = encode(&json!({ "a": 1 })).unwrap();

        assert_eq!(envelope.params.len() % 2, 0);
        assert!(envelope.params.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(envelope.sign, sign(&envelope.params));

        let decoded = decode(&envelope).unwrap();
        assert_eq!(decoded["a"], json!(1));
    }

    #[test]
    fn test_tampered_params_rejected() {
        let mut envelope = encode(&json!({ "a": 1 })).unwrap();

        // Flip one hex digit of the ciphertext.
        let flipped = if envelope.params.starts_with('0') { "1" } else { "0" };
        envelope.params.replace_range(0..1, flipped);

        assert!(matches!(
            decode(&envelope),
            Err(CodecError::SignatureMismatch)
        ));
    }

    #[test]
    fn test_tampered_sign_rejected() {
        let mut envelope = encode(&json!({ "a": 1 })).unwrap();

        let flipped = if envelope.sign.starts_with('0') { "1" } else { "0" };
        envelope.sign.replace_range(0..1, flipped);

        assert!(matches!(
            decode(&envelope),
            Err(CodecError::SignatureMismatch)
        ));
    }

    #[test]
    fn test_invalid_hex_rejected() {
        // A sign computed over garbage still passes verification, so the
        // hex decode failure must surface on its own.
        let envelope = Envelope {
            sign: sign("zz-not-hex"),
            params: "zz-not-hex".to_string(),
            timestamp: now_millis(),
        };

        assert!(matches!(decode(&envelope), Err(CodecError::InvalidHex(_))));
    }

    #[test]
    fn test_sign_is_stable() {
        // Known-answer check: md5 of ciphertext + suffix, hex encoded.
        let a = sign("deadbeef");
        let b = sign("deadbeef");
        assert_eq!(a, b);
        assert_eq!(a.len(), 32);
        assert_ne!(a, sign("deadbeee"));
    }
}
