use super::constants::{CONTENT_HASH_HEX_LEN, CONTENT_HASH_SIZE};
use anyhow::{Result, anyhow};
use std::time::{SystemTime, UNIX_EPOCH};
use url::Url;

/// Returns the current time as a u64 timestamp in seconds since the UNIX epoch.
pub fn current_time_as_u64() -> Result<u64> {
    if let Ok(time) = SystemTime::now().duration_since(UNIX_EPOCH) {
        return Ok(time.as_secs());
    }
    Err(anyhow!("Time went backwards"))
}

/// Syntactic URL check: http(s) scheme and a non-empty host. No network access.
pub fn is_valid_url(text: &str) -> bool {
    match Url::parse(text) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.host_str().is_some_and(|host| !host.is_empty()),
        Err(_) => false,
    }
}

/// Hex rendering of a content hash field.
///
/// A 32-byte field is a raw digest and is rendered with lowercase hex. Any
/// other field is taken to already be hex text and is returned as is, so it
/// still has to pass [`is_content_hash_hex`] on its own.
pub fn content_hash_hex(field: &[u8]) -> Option<String> {
    if field.len() == CONTENT_HASH_SIZE {
        return Some(hex::encode(field));
    }
    std::str::from_utf8(field).ok().map(str::to_owned)
}

/// `^[a-f0-9]{64}$`
pub fn is_content_hash_hex(text: &str) -> bool {
    text.len() == CONTENT_HASH_HEX_LEN && text.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn urls_need_http_scheme_and_host() {
        assert!(is_valid_url("https://valid.url"));
        assert!(is_valid_url("http://127.0.0.1:8080/files/abc?x=1"));

        assert!(!is_valid_url("valid.url"));
        assert!(!is_valid_url("ftp://valid.url"));
        assert!(!is_valid_url("https://"));
        assert!(!is_valid_url(""));
        assert!(!is_valid_url("not a url"));
    }

    #[test]
    fn raw_digest_renders_lowercase() {
        let digest = [0xABu8; 32];
        let rendered = content_hash_hex(&digest).unwrap();

        assert_eq!(rendered, "ab".repeat(32));
        assert!(is_content_hash_hex(&rendered));
    }

    #[test]
    fn hash_hex_pattern_is_exact() {
        assert!(is_content_hash_hex(&"0f".repeat(32)));

        assert!(!is_content_hash_hex(&"0F".repeat(32)));
        assert!(!is_content_hash_hex(&"a".repeat(63)));
        assert!(!is_content_hash_hex(&"a".repeat(65)));
        assert!(!is_content_hash_hex(&"g".repeat(64)));
    }

    #[test]
    fn hash_text_is_not_rehexed() {
        let text = "c".repeat(64);
        assert_eq!(content_hash_hex(text.as_bytes()), Some(text));
        assert_eq!(content_hash_hex(&[0xff, 0xfe]), None);
    }

    #[test]
    fn clock_reads_after_epoch() {
        assert!(current_time_as_u64().unwrap() > 1_600_000_000);
    }
}
