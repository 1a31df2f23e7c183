//! Webhook trigger secrets.

use uuid::Uuid;

/// Source of opaque webhook shared secrets.
///
/// Every trigger that exposes a webhook gets its own secret; the generator
/// requests one token per trigger, so implementations must return a fresh
/// value on each call.
pub trait TokenSource {
    /// Produce a fresh opaque token.
    fn webhook_token(&self) -> String;
}

/// Default token source: 16 lowercase hex characters drawn from the leading
/// bytes of a v4 UUID.
///
/// Webhook secrets are shared credentials, so the randomness comes from the
/// operating system's cryptographic source rather than a general-purpose
/// PRNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidTokenSource;

impl TokenSource for UuidTokenSource {
    fn webhook_token(&self) -> String {
        hex::encode(&Uuid::new_v4().as_bytes()[..8])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_fixed_length_hex() {
        let token = UuidTokenSource.webhook_token();
        assert_eq!(token.len(), 16);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn tokens_are_distinct_across_calls() {
        let source = UuidTokenSource;
        assert_ne!(source.webhook_token(), source.webhook_token());
    }
}
