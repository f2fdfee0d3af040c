//! Base62 short code encoding.
//!
//! Maps counter values to short alphanumeric codes and back. Symbols are
//! ordered digits first, then lowercase, then uppercase:
//!
//! ```text
//! 0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ
//! ```
//!
//! Encoding is positional, most significant symbol first, with no leading
//! zero symbols except for `0` itself. Codes issued under this alphabet stay
//! resolvable only as long as the alphabet order is never changed.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Symbol table, indexed by digit value.
pub const ALPHABET: &[u8; 62] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

const BASE: u64 = ALPHABET.len() as u64;

/// Longest code any `u64` encodes to (`62^11 > u64::MAX`).
pub const MAX_CODE_LEN: usize = 11;

static CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9]{1,11}$").expect("static regex is valid"));

/// Errors returned by [`decode`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("short code is empty")]
    Empty,

    #[error("invalid symbol {symbol:?} at position {position}")]
    InvalidSymbol { symbol: char, position: usize },

    #[error("short code exceeds the 64-bit counter range")]
    Overflow,
}

/// Encodes a counter value as a base62 short code.
///
/// # Examples
///
/// ```
/// use redis_shortener::utils::base62::encode;
///
/// assert_eq!(encode(0), "0");
/// assert_eq!(encode(61), "Z");
/// assert_eq!(encode(62), "10");
/// ```
pub fn encode(mut n: u64) -> String {
    if n == 0 {
        return (ALPHABET[0] as char).to_string();
    }

    let mut buf = [0u8; MAX_CODE_LEN];
    let mut pos = MAX_CODE_LEN;
    while n > 0 {
        pos -= 1;
        buf[pos] = ALPHABET[(n % BASE) as usize];
        n /= BASE;
    }

    buf[pos..].iter().map(|&b| b as char).collect()
}

/// Decodes a base62 short code back into its counter value.
///
/// # Errors
///
/// Returns [`DecodeError`] if the input is empty, contains a symbol outside
/// the alphabet, or represents a value larger than `u64::MAX`.
pub fn decode(code: &str) -> Result<u64, DecodeError> {
    if code.is_empty() {
        return Err(DecodeError::Empty);
    }

    code.chars().enumerate().try_fold(0u64, |acc, (position, symbol)| {
        let digit = symbol_value(symbol).ok_or(DecodeError::InvalidSymbol { symbol, position })?;
        acc.checked_mul(BASE)
            .and_then(|v| v.checked_add(digit))
            .ok_or(DecodeError::Overflow)
    })
}

/// Returns true if `code` has the shape of an issued short code.
///
/// Only the character set and length are checked; the code may still be
/// unknown to the backend.
pub fn is_valid_code(code: &str) -> bool {
    CODE_REGEX.is_match(code)
}

fn symbol_value(symbol: char) -> Option<u64> {
    let value = match symbol {
        '0'..='9' => symbol as u64 - '0' as u64,
        'a'..='z' => symbol as u64 - 'a' as u64 + 10,
        'A'..='Z' => symbol as u64 - 'A' as u64 + 36,
        _ => return None,
    };
    Some(value)
}
