//! One-time registration codes for bootstrapping the first admin account.
//!
//! When the server starts without any admin user it generates a code and logs a
//! registration link carrying it. Registering with that code grants the admin role.
//! The code lives only in memory, expires after ten minutes and is consumed by the
//! first successful registration.

use rand::Rng;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// Lifetime of a generated registration code.
const ADMIN_CODE_TTL: Duration = Duration::from_secs(10 * 60);

const ADMIN_CODE_LENGTH: usize = 32;

#[derive(Clone)]
struct AdminCode {
    code: String,
    expires_at: Instant,
}

impl AdminCode {
    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// Holds the currently valid admin registration code, if any.
#[derive(Clone)]
pub struct AdminCodeService {
    code: Arc<RwLock<Option<AdminCode>>>,
    ttl: Duration,
}

impl AdminCodeService {
    pub fn new() -> Self {
        Self::with_ttl(ADMIN_CODE_TTL)
    }

    /// Creates a service whose codes expire after `ttl`.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            code: Arc::new(RwLock::new(None)),
            ttl,
        }
    }

    /// Generates a new 32-character alphanumeric code, replacing any previous one.
    ///
    /// # Returns
    /// - `String` - The code to embed in the registration link
    pub async fn generate(&self) -> String {
        let code = Self::random_code();
        *self.code.write().await = Some(AdminCode {
            code: code.clone(),
            expires_at: Instant::now() + self.ttl,
        });
        code
    }

    /// Checks `input` against the stored code and consumes it on a match.
    ///
    /// An expired code is dropped and never matches. A wrong guess leaves the stored
    /// code in place.
    ///
    /// # Returns
    /// - `true` - Code matched and has been consumed
    /// - `false` - No code, expired code or mismatch
    pub async fn validate_and_consume(&self, input: &str) -> bool {
        let mut code = self.code.write().await;

        match code.as_ref() {
            Some(stored) if stored.is_expired() => {
                *code = None;
                false
            }
            Some(stored) if stored.code == input => {
                *code = None;
                true
            }
            _ => false,
        }
    }

    /// Whether an unexpired code is currently stored.
    pub async fn has_valid_code(&self) -> bool {
        self.code
            .read()
            .await
            .as_ref()
            .is_some_and(|stored| !stored.is_expired())
    }

    fn random_code() -> String {
        const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                                 abcdefghijklmnopqrstuvwxyz\
                                 0123456789";

        let mut rng = rand::rng();
        (0..ADMIN_CODE_LENGTH)
            .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
            .collect()
    }
}

impl Default for AdminCodeService {
    fn default() -> Self {
        Self::new()
    }
}
