use anyhow::{anyhow, Result};
use chrono::Utc;
use eligibility_client::{EligibilityClient, HistoryStore};
use eligibility_core::{CheckRecord, CheckSession, EligibilityResult, PendingCheck, RecentChecks};

/// Drives a `CheckSession` against the API and keeps history on disk.
pub struct Checker {
    client: EligibilityClient,
    store: HistoryStore,
    session: CheckSession,
}

impl Checker {
    pub fn new(client: EligibilityClient, store: HistoryStore) -> Self {
        Self {
            client,
            store,
            session: CheckSession::new(),
        }
    }

    pub fn recent(&self) -> RecentChecks {
        self.store.load()
    }

    pub fn clear_recent(&self) -> Result<()> {
        self.store.clear()?;
        Ok(())
    }

    pub async fn check_input(&mut self, input: &str) -> Result<EligibilityResult> {
        self.session.set_input(input);
        let Some(pending) = self.session.submit() else {
            return Err(anyhow!(self.session_error()));
        };
        self.run(pending).await
    }

    /// Re-checks the history entry at `index` (zero-based, most recent first).
    pub async fn recheck(&mut self, index: usize) -> Result<EligibilityResult> {
        let recent = self.store.load();
        let record = recent
            .get(index)
            .ok_or_else(|| anyhow!("No recent check #{}", index + 1))?;
        let pending = self.session.select_recent(record);
        self.run(pending).await
    }

    async fn run(&mut self, pending: PendingCheck) -> Result<EligibilityResult> {
        tracing::debug!("Checking {}", pending.url);

        match self.client.check(&pending.url).await {
            Ok(result) => {
                self.session.succeed(pending.ticket, result.clone());
                let record = CheckRecord::from_result(&pending.url, &result, Utc::now());
                if let Err(e) = self.store.record(record) {
                    tracing::warn!("Failed to save recent check: {}", e);
                }
                Ok(result)
            }
            Err(e) => {
                tracing::error!("Eligibility check failed: {}", e);
                self.session.fail(pending.ticket, e.to_string());
                Err(anyhow!(self.session_error()))
            }
        }
    }

    fn session_error(&self) -> String {
        self.session.error().unwrap_or_default().to_string()
    }
}
