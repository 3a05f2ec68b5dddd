//! Passphrase gate - AccessChecker implementations.

use async_trait::async_trait;
use secrecy::{ExposeSecret, Secret};
use subtle::ConstantTimeEq;

use crate::ports::{AccessChecker, AccessDeniedReason, AccessResult};

/// Always-allow checker for deployments that run without a gate.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenAccessChecker;

impl OpenAccessChecker {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AccessChecker for OpenAccessChecker {
    async fn check_submission(&self, _supplied: Option<&str>) -> AccessResult {
        AccessResult::Allowed
    }
}

/// Shared-passphrase checker.
///
/// Matches case-insensitively after trimming surrounding whitespace; the
/// comparison over the normalized bytes is constant-time.
pub struct PassphraseAccessChecker {
    expected: Secret<String>,
}

impl PassphraseAccessChecker {
    /// Creates a checker for the given passphrase.
    pub fn new(passphrase: impl Into<String>) -> Self {
        Self {
            expected: Secret::new(Self::normalize(&passphrase.into())),
        }
    }

    fn normalize(raw: &str) -> String {
        raw.trim().to_lowercase()
    }
}

#[async_trait]
impl AccessChecker for PassphraseAccessChecker {
    async fn check_submission(&self, supplied: Option<&str>) -> AccessResult {
        let normalized = match supplied {
            Some(raw) => Self::normalize(raw),
            None => String::new(),
        };
        if normalized.is_empty() {
            return AccessResult::Denied(AccessDeniedReason::PassphraseRequired);
        }

        let matches: bool = normalized
            .as_bytes()
            .ct_eq(self.expected.expose_secret().as_bytes())
            .into();
        if matches {
            AccessResult::Allowed
        } else {
            AccessResult::Denied(AccessDeniedReason::PassphraseMismatch)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn open_checker_allows_anything() {
        let checker = OpenAccessChecker::new();
        assert!(checker.check_submission(None).await.is_allowed());
        assert!(checker.check_submission(Some("whatever")).await.is_allowed());
    }

    #[tokio::test]
    async fn exact_match_is_allowed() {
        let checker = PassphraseAccessChecker::new("open sesame");
        assert!(checker.check_submission(Some("open sesame")).await.is_allowed());
    }

    #[tokio::test]
    async fn match_ignores_case_and_surrounding_whitespace() {
        let checker = PassphraseAccessChecker::new("Open Sesame");
        assert!(checker
            .check_submission(Some("  OPEN sesame \n"))
            .await
            .is_allowed());
    }

    #[tokio::test]
    async fn wrong_passphrase_is_a_mismatch() {
        let checker = PassphraseAccessChecker::new("open sesame");
        assert_eq!(
            checker.check_submission(Some("close sesame")).await,
            AccessResult::Denied(AccessDeniedReason::PassphraseMismatch)
        );
    }

    #[tokio::test]
    async fn missing_or_blank_passphrase_is_required() {
        let checker = PassphraseAccessChecker::new("open sesame");
        assert_eq!(
            checker.check_submission(None).await,
            AccessResult::Denied(AccessDeniedReason::PassphraseRequired)
        );
        assert_eq!(
            checker.check_submission(Some("   ")).await,
            AccessResult::Denied(AccessDeniedReason::PassphraseRequired)
        );
    }

    #[tokio::test]
    async fn interior_whitespace_still_matters() {
        let checker = PassphraseAccessChecker::new("open sesame");
        assert!(checker.check_submission(Some("opensesame")).await.is_denied());
    }
}
