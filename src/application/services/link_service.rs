//! Link creation and redirect resolution service.

use chrono::Duration;
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::domain::clock::Clock;
use crate::domain::entities::{Link, NewClick};
use crate::domain::repositories::{ClickOutcome, LinkRepository};
use crate::error::AppError;
use crate::utils::code_generator::{DEFAULT_CODE_LENGTH, generate_code, validate_shortcode};
use crate::utils::target_url::validate_target_url;

/// Validity applied when a request does not specify one, in minutes.
pub const DEFAULT_VALIDITY_MINUTES: i64 = 30;

/// Upper bound on requested validity (ten years), in minutes.
pub const MAX_VALIDITY_MINUTES: i64 = 5_256_000;

/// How many fresh codes are drawn before giving up on a generated code.
const MAX_GENERATION_ATTEMPTS: usize = 10;

/// Tunables for link creation.
#[derive(Debug, Clone)]
pub struct LinkSettings {
    /// Public origin that short links are served from, e.g. `http://localhost:8000`.
    pub base_url: String,
    pub default_validity_minutes: i64,
    /// Length of generated shortcodes.
    pub code_length: usize,
}

impl Default for LinkSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            default_validity_minutes: DEFAULT_VALIDITY_MINUTES,
            code_length: DEFAULT_CODE_LENGTH,
        }
    }
}

/// Service for creating short links and resolving them on redirect.
///
/// Every successful resolution of a live link appends exactly one click to
/// its click log. Failed resolutions leave the store untouched.
pub struct LinkService<R: LinkRepository> {
    repository: Arc<R>,
    clock: Arc<dyn Clock>,
    settings: LinkSettings,
}

impl<R: LinkRepository> LinkService<R> {
    /// Creates a new link service.
    pub fn new(repository: Arc<R>, clock: Arc<dyn Clock>, settings: LinkSettings) -> Self {
        Self {
            repository,
            clock,
            settings,
        }
    }

    /// Creates a short link.
    ///
    /// # Arguments
    ///
    /// - `original_url` - Absolute `http`/`https` URL to redirect to
    /// - `validity_minutes` - Lifetime of the link; defaults to the configured value
    /// - `shortcode` - Optional caller-chosen code
    ///
    /// # Code Generation
    ///
    /// Without a caller-chosen code a random alphanumeric code is drawn. If
    /// the store already holds it, another one is drawn, up to 10 times.
    /// Caller-chosen codes are never replaced: a taken code is a conflict.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if:
    /// - URL is not an absolute HTTP(S) URL
    /// - Validity is negative or beyond ten years
    /// - Shortcode is not alphanumeric with at least 4 characters
    ///
    /// Returns [`AppError::Conflict`] if the caller-chosen code already exists.
    pub async fn shorten(
        &self,
        original_url: String,
        validity_minutes: Option<i64>,
        shortcode: Option<String>,
    ) -> Result<Link, AppError> {
        validate_target_url(&original_url).map_err(|e| {
            AppError::bad_request("Invalid URL format", json!({ "reason": e.to_string() }))
        })?;

        let validity = validity_minutes.unwrap_or(self.settings.default_validity_minutes);
        if !(0..=MAX_VALIDITY_MINUTES).contains(&validity) {
            return Err(AppError::bad_request(
                "Validity must be a non-negative number of minutes",
                json!({ "validity": validity, "max": MAX_VALIDITY_MINUTES }),
            ));
        }

        let link = match shortcode {
            Some(code) => {
                validate_shortcode(&code)?;
                let link = self.build_link(code, original_url, validity)?;
                self.repository.insert(link.clone()).await?;
                link
            }
            None => self.insert_generated(original_url, validity).await?,
        };

        info!(
            shortcode = %link.code,
            expires_at = %link.expires_at,
            "Short link created"
        );

        Ok(link)
    }

    /// Resolves a shortcode for redirect and records the visit.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code was never created.
    /// Returns [`AppError::Expired`] if the current instant is past the
    /// link's expiry; no click is recorded in that case.
    pub async fn resolve(&self, code: &str, visit: NewClick) -> Result<Link, AppError> {
        let now = self.clock.now();

        match self.repository.record_click(code, visit.at(now)).await? {
            ClickOutcome::Recorded(link) => {
                debug!("Redirecting {} to {}", code, link.original_url);
                Ok(link)
            }
            ClickOutcome::Expired(link) => {
                warn!("Expired link accessed: {}", code);
                Err(AppError::expired(
                    "Link expired.",
                    json!({ "shortcode": code, "expired_at": link.expires_at }),
                ))
            }
            ClickOutcome::Missing => Err(AppError::not_found(
                "Shortcode not found.",
                json!({ "shortcode": code }),
            )),
        }
    }

    /// Constructs the full short URL for a code.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.settings.base_url.trim_end_matches('/'), code)
    }

    /// Draws random codes until one is accepted by the store.
    async fn insert_generated(&self, original_url: String, validity: i64) -> Result<Link, AppError> {
        for _ in 0..MAX_GENERATION_ATTEMPTS {
            let code = generate_code(self.settings.code_length);
            if validate_shortcode(&code).is_err() {
                continue;
            }

            let link = self.build_link(code, original_url.clone(), validity)?;
            match self.repository.insert(link.clone()).await {
                Ok(()) => return Ok(link),
                Err(AppError::Conflict { .. }) => {
                    debug!("Generated shortcode {} already taken, retrying", link.code);
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::internal(
            "Failed to generate unique shortcode",
            json!({ "reason": "Too many collisions" }),
        ))
    }

    fn build_link(&self, code: String, original_url: String, validity: i64) -> Result<Link, AppError> {
        let created_at = self.clock.now();
        let expires_at = created_at
            .checked_add_signed(Duration::minutes(validity))
            .ok_or_else(|| {
                AppError::internal("Expiry out of range", json!({ "validity": validity }))
            })?;

        Ok(Link::new(code, original_url, created_at, expires_at))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::clock::ManualClock;
    use crate::domain::repositories::MockLinkRepository;
    use crate::infrastructure::memory::InMemoryStore;
    use chrono::{TimeZone, Utc};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn start() -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap()
    }

    fn service_with_store() -> (LinkService<InMemoryStore>, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new(start()));
        let service = LinkService::new(
            Arc::new(InMemoryStore::new()),
            clock.clone(),
            LinkSettings::default(),
        );
        (service, clock)
    }

    fn mock_service(repo: MockLinkRepository) -> LinkService<MockLinkRepository> {
        LinkService::new(
            Arc::new(repo),
            Arc::new(ManualClock::new(start())),
            LinkSettings::default(),
        )
    }

    #[tokio::test]
    async fn test_shorten_generates_code() {
        let (service, _) = service_with_store();

        let link = service
            .shorten("https://example.com".to_string(), None, None)
            .await
            .unwrap();

        assert_eq!(link.code.len(), 6);
        assert!(link.code.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_eq!(link.original_url, "https://example.com");
    }

    #[tokio::test]
    async fn test_shorten_default_validity_is_thirty_minutes() {
        let (service, _) = service_with_store();

        let link = service
            .shorten("https://example.com".to_string(), None, None)
            .await
            .unwrap();

        assert_eq!(link.created_at, start());
        assert_eq!(link.expires_at, start() + Duration::minutes(30));
    }

    #[tokio::test]
    async fn test_shorten_custom_validity() {
        let (service, _) = service_with_store();

        let link = service
            .shorten("https://example.com".to_string(), Some(5), Some("five".to_string()))
            .await
            .unwrap();

        assert_eq!(link.code, "five");
        assert_eq!(link.expires_at, start() + Duration::minutes(5));
    }

    #[tokio::test]
    async fn test_shorten_rejects_negative_validity() {
        let (service, _) = service_with_store();

        let err = service
            .shorten("https://example.com".to_string(), Some(-1), None)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_shorten_rejects_excessive_validity() {
        let (service, _) = service_with_store();

        let err = service
            .shorten(
                "https://example.com".to_string(),
                Some(MAX_VALIDITY_MINUTES + 1),
                None,
            )
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_shorten_rejects_bad_url() {
        let (service, _) = service_with_store();

        for url in ["not a url", "ftp://example.com", "/relative"] {
            let err = service
                .shorten(url.to_string(), None, Some("abcd".to_string()))
                .await
                .unwrap_err();
            assert!(matches!(err, AppError::Validation { .. }), "accepted {url}");
        }
    }

    #[tokio::test]
    async fn test_shorten_short_code_is_invalid() {
        let (service, _) = service_with_store();

        let err = service
            .shorten("https://example.com".to_string(), None, Some("ab".to_string()))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation { .. }));
        assert_eq!(err.to_string(), "Invalid shortcode format.");
    }

    #[tokio::test]
    async fn test_shorten_duplicate_code_conflicts_and_keeps_first() {
        let (service, _) = service_with_store();

        service
            .shorten("https://first.example".to_string(), None, Some("abcd".to_string()))
            .await
            .unwrap();

        let err = service
            .shorten("https://second.example".to_string(), Some(60), Some("abcd".to_string()))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Conflict { .. }));
        assert_eq!(err.to_string(), "Shortcode already exists.");

        let link = service
            .resolve("abcd", NewClick::default())
            .await
            .unwrap();
        assert_eq!(link.original_url, "https://first.example");
        assert_eq!(link.expires_at, start() + Duration::minutes(30));
    }

    #[tokio::test]
    async fn test_resolve_unknown_code() {
        let (service, _) = service_with_store();

        let err = service
            .resolve("nope", NewClick::default())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_resolve_live_link() {
        let (service, clock) = service_with_store();
        service
            .shorten("https://example.com".to_string(), Some(1), Some("live".to_string()))
            .await
            .unwrap();

        clock.advance(Duration::seconds(60));

        let link = service
            .resolve("live", NewClick::new(Some("https://google.com"), None))
            .await
            .unwrap();
        assert_eq!(link.original_url, "https://example.com");
    }

    #[tokio::test]
    async fn test_resolve_expired_link() {
        let (service, clock) = service_with_store();
        service
            .shorten("https://example.com".to_string(), Some(1), Some("old1".to_string()))
            .await
            .unwrap();

        clock.advance(Duration::seconds(61));

        let err = service
            .resolve("old1", NewClick::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Expired { .. }));
    }

    #[tokio::test]
    async fn test_resolve_zero_validity_link_expires() {
        let (service, clock) = service_with_store();
        service
            .shorten("https://example.com".to_string(), Some(0), Some("zero".to_string()))
            .await
            .unwrap();

        clock.advance(Duration::milliseconds(1));

        let err = service
            .resolve("zero", NewClick::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Expired { .. }));
    }

    #[tokio::test]
    async fn test_expired_outcome_maps_to_gone() {
        let mut repo = MockLinkRepository::new();
        let link = Link::new(
            "gone".to_string(),
            "https://example.com".to_string(),
            start() - Duration::minutes(10),
            start() - Duration::minutes(5),
        );

        repo.expect_record_click()
            .withf(|code, _| code == "gone")
            .times(1)
            .returning(move |_, _| Ok(ClickOutcome::Expired(link.clone())));

        let service = mock_service(repo);
        let err = service
            .resolve("gone", NewClick::default())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Expired { .. }));
        assert_eq!(err.to_string(), "Link expired.");
    }

    #[tokio::test]
    async fn test_missing_outcome_maps_to_not_found() {
        let mut repo = MockLinkRepository::new();
        repo.expect_record_click()
            .times(1)
            .returning(|_, _| Ok(ClickOutcome::Missing));

        let service = mock_service(repo);
        let err = service
            .resolve("nope", NewClick::default())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_resolve_records_click_with_metadata() {
        let mut repo = MockLinkRepository::new();
        let link = Link::new(
            "live".to_string(),
            "https://example.com".to_string(),
            start(),
            start() + Duration::minutes(30),
        );

        repo.expect_record_click()
            .withf(|code, click| {
                code == "live"
                    && click.clicked_at == start()
                    && click.referrer.as_deref() == Some("https://google.com")
                    && click.ip.as_deref() == Some("10.0.0.1")
            })
            .times(1)
            .returning(move |_, _| Ok(ClickOutcome::Recorded(link.clone())));

        let service = mock_service(repo);
        let visit = NewClick::new(Some("https://google.com"), Some("10.0.0.1".to_string()));

        let resolved = service.resolve("live", visit).await.unwrap();
        assert_eq!(resolved.original_url, "https://example.com");
    }

    #[tokio::test]
    async fn test_expired_resolve_does_not_record_click() {
        let (service, clock) = service_with_store();
        service
            .shorten("https://example.com".to_string(), Some(1), Some("gone".to_string()))
            .await
            .unwrap();

        clock.advance(Duration::minutes(2));
        let err = service
            .resolve("gone", NewClick::default())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Expired { .. }));
        let stats = service.repository.find_stats("gone").await.unwrap().unwrap();
        assert!(stats.clicks.is_empty());
    }

    #[tokio::test]
    async fn test_generated_code_collision_draws_again() {
        let mut repo = MockLinkRepository::new();
        let attempts = Arc::new(AtomicUsize::new(0));
        let counter = attempts.clone();

        repo.expect_insert().times(2).returning(move |link| {
            if counter.fetch_add(1, Ordering::SeqCst) == 0 {
                Err(AppError::conflict(
                    "Shortcode already exists.",
                    json!({ "shortcode": link.code }),
                ))
            } else {
                Ok(())
            }
        });

        let service = mock_service(repo);
        let result = service
            .shorten("https://example.com".to_string(), None, None)
            .await;

        assert!(result.is_ok());
        assert_eq!(attempts.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_generated_code_gives_up_after_max_attempts() {
        let mut repo = MockLinkRepository::new();

        repo.expect_insert()
            .times(MAX_GENERATION_ATTEMPTS)
            .returning(|link| {
                Err(AppError::conflict(
                    "Shortcode already exists.",
                    json!({ "shortcode": link.code }),
                ))
            });

        let service = mock_service(repo);
        let err = service
            .shorten("https://example.com".to_string(), None, None)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Internal { .. }));
    }

    #[tokio::test]
    async fn test_custom_code_conflict_is_not_retried() {
        let mut repo = MockLinkRepository::new();

        repo.expect_insert().times(1).returning(|link| {
            Err(AppError::conflict(
                "Shortcode already exists.",
                json!({ "shortcode": link.code }),
            ))
        });

        let service = mock_service(repo);
        let err = service
            .shorten("https://example.com".to_string(), None, Some("mine".to_string()))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_store_error_is_propagated() {
        let mut repo = MockLinkRepository::new();

        repo.expect_insert()
            .times(1)
            .returning(|_| Err(AppError::internal("Store unavailable", json!({}))));

        let service = mock_service(repo);
        let err = service
            .shorten("https://example.com".to_string(), None, None)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Internal { .. }));
    }

    #[test]
    fn test_short_url() {
        let service = mock_service(MockLinkRepository::new());
        assert_eq!(service.short_url("abc123"), "http://localhost:8000/abc123");
    }

    #[test]
    fn test_short_url_trims_trailing_slash() {
        let service = LinkService::new(
            Arc::new(MockLinkRepository::new()),
            Arc::new(ManualClock::new(start())),
            LinkSettings {
                base_url: "https://s.example.com/".to_string(),
                ..LinkSettings::default()
            },
        );

        assert_eq!(service.short_url("abcd"), "https://s.example.com/abcd");
    }
}
