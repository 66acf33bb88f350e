//! In-memory implementation of the link repository.

use async_trait::async_trait;
use serde_json::json;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::entities::{Click, Link, LinkStats};
use crate::domain::repositories::{ClickOutcome, LinkRepository, StoreTotals};
use crate::error::AppError;

#[derive(Debug, Default)]
struct Tables {
    links: HashMap<String, Link>,
    clicks: HashMap<String, Vec<Click>>,
}

/// Link Store and Click Log behind a single lock.
///
/// One `RwLock` guards both tables, so every method observes and mutates
/// them together. Entries are never removed.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LinkRepository for InMemoryStore {
    async fn insert(&self, link: Link) -> Result<(), AppError> {
        let mut tables = self.tables.write().await;

        if tables.links.contains_key(&link.code) {
            return Err(AppError::conflict(
                "Shortcode already exists.",
                json!({ "shortcode": link.code }),
            ));
        }

        tables.clicks.insert(link.code.clone(), Vec::new());
        tables.links.insert(link.code.clone(), link);

        Ok(())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        let tables = self.tables.read().await;
        Ok(tables.links.get(code).cloned())
    }

    async fn record_click(&self, code: &str, click: Click) -> Result<ClickOutcome, AppError> {
        let mut tables = self.tables.write().await;

        let link = match tables.links.get(code) {
            Some(link) => link.clone(),
            None => return Ok(ClickOutcome::Missing),
        };

        if link.is_expired_at(click.clicked_at) {
            return Ok(ClickOutcome::Expired(link));
        }

        tables
            .clicks
            .entry(code.to_string())
            .or_default()
            .push(click);

        Ok(ClickOutcome::Recorded(link))
    }

    async fn find_stats(&self, code: &str) -> Result<Option<LinkStats>, AppError> {
        let tables = self.tables.read().await;

        Ok(tables.links.get(code).map(|link| LinkStats {
            link: link.clone(),
            clicks: tables.clicks.get(code).cloned().unwrap_or_default(),
        }))
    }

    async fn totals(&self) -> Result<StoreTotals, AppError> {
        let tables = self.tables.read().await;

        Ok(StoreTotals {
            links: tables.links.len(),
            clicks: tables.clicks.values().map(Vec::len).sum(),
        })
    }
}
