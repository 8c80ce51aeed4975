// src/debug.rs
//! Dev-only search logging. Raw query text is never logged; only a short hash.

use sha2::{Digest, Sha256};
use std::fmt::Write as _;
use tracing::info;

pub const ENV_DEV_LOG: &str = "RECENSOR_DEV_LOG";

// RECENSOR_DEV_LOG=1 AND dev env (debug build or SHUTTLE_ENV in {local,development,dev})
pub fn dev_logging_enabled() -> bool {
    let on = std::env::var(ENV_DEV_LOG).ok().as_deref() == Some("1");
    if !on {
        return false;
    }
    if cfg!(debug_assertions) {
        return true;
    }
    is_dev_shuttle_env()
}

fn is_dev_shuttle_env() -> bool {
    matches!(
        std::env::var("SHUTTLE_ENV")
            .unwrap_or_default()
            .to_ascii_lowercase()
            .as_str(),
        "local" | "development" | "dev"
    )
}

/// First 6 bytes of SHA-256, hex encoded.
pub fn anon_hash(text: &str) -> String {
    let digest = Sha256::digest(text.as_bytes());
    let mut out = String::with_capacity(12);
    for b in digest.iter().take(6) {
        let _ = write!(&mut out, "{:02x}", b);
    }
    out
}

pub fn dev_log_search(query: &str, scores: &[u8]) {
    if !dev_logging_enabled() {
        return;
    }
    let id = anon_hash(query);
    info!(target: "search", %id, results = scores.len(), scores = ?scores, "search scored");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anon_hash_is_stable_and_short() {
        let a = anon_hash("iPhone 15");
        assert_eq!(a.len(), 12);
        assert_eq!(a, anon_hash("iPhone 15"));
        assert_ne!(a, anon_hash("iphone 15"));
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn known_digest_prefix() {
        // sha256("") = e3b0c442 98fc...
        assert_eq!(anon_hash(""), "e3b0c44298fc");
    }
}
