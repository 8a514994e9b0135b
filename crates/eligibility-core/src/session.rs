use crate::result::DEFAULT_PAGE_TITLE;
use crate::{CheckRecord, EligibilityError, EligibilityResult};

pub const FALLBACK_ERROR: &str = "Something went wrong. Please try again.";

/// Identifies one in-flight check. Only the most recently issued ticket may
/// settle the session, so a slow reply never overwrites a newer check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckTicket(u64);

/// A check the caller should now send to the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingCheck {
    pub ticket: CheckTicket,
    pub url: String,
}

/// Ephemeral UI state around a single eligibility check.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckSession {
    input: String,
    loading: bool,
    result: Option<EligibilityResult>,
    error: Option<String>,
    modal_open: bool,
    issued: u64,
}

impl CheckSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn result(&self) -> Option<&EligibilityResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    /// Validates the current input and starts a check for it.
    ///
    /// Blank input sets the validation error and returns `None`. The URL sent
    /// is the input as typed, untrimmed.
    pub fn submit(&mut self) -> Option<PendingCheck> {
        if self.input.trim().is_empty() {
            self.error = Some(EligibilityError::EmptyInput.to_string());
            return None;
        }
        let url = self.input.clone();
        Some(self.begin(url))
    }

    pub fn begin(&mut self, url: impl Into<String>) -> PendingCheck {
        self.issued += 1;
        self.input = url.into();
        self.loading = true;
        self.error = None;
        self.result = None;

        PendingCheck {
            ticket: CheckTicket(self.issued),
            url: self.input.clone(),
        }
    }

    /// Re-checks a history entry.
    pub fn select_recent(&mut self, record: &CheckRecord) -> PendingCheck {
        self.begin(record.url.clone())
    }

    /// Returns `false` when `ticket` is stale and the result was dropped.
    pub fn succeed(&mut self, ticket: CheckTicket, result: EligibilityResult) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.result = Some(result);
        self.loading = false;
        true
    }

    /// Returns `false` when `ticket` is stale and the error was dropped.
    pub fn fail(&mut self, ticket: CheckTicket, message: impl Into<String>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        let message = message.into();
        self.error = Some(if message.is_empty() {
            FALLBACK_ERROR.to_string()
        } else {
            message
        });
        self.loading = false;
        true
    }

    pub fn open_modal(&mut self) {
        self.modal_open = true;
    }

    pub fn close_modal(&mut self) {
        self.modal_open = false;
    }

    pub fn page_title(&self) -> String {
        match &self.result {
            Some(result) => result.page_title(),
            None => DEFAULT_PAGE_TITLE.to_string(),
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.loading {
            "Checking..."
        } else {
            "Check"
        }
    }

    fn is_current(&self, ticket: CheckTicket) -> bool {
        ticket.0 == self.issued
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::parse_response;
    use chrono::Utc;

    fn sample_result() -> EligibilityResult {
        parse_response(
            r#"[{
                "product_info": {"title": "Reading Glasses", "base_url": "https://www.walmart.com/ip/1"},
                "price_info": {"price": 9.99},
                "hsa_eligibility": {"status": "eligible", "reason": "Corrective eyewear."}
            }]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_blank_submit_sets_error_without_request() {
        let mut session = CheckSession::new();
        session.set_input("   ");
        assert!(session.submit().is_none());
        assert_eq!(session.error(), Some("Please enter a product URL"));
        assert!(!session.is_loading());
    }

    #[test]
    fn test_submit_keeps_untrimmed_input() {
        let mut session = CheckSession::new();
        session.set_input(" https://walmart.com/ip/1 ");
        let pending = session.submit().unwrap();
        assert_eq!(pending.url, " https://walmart.com/ip/1 ");
    }

    #[test]
    fn test_begin_clears_previous_outcome() {
        let mut session = CheckSession::new();
        let first = session.begin("https://walmart.com/ip/1");
        session.succeed(first.ticket, sample_result());

        let second = session.begin("https://walmart.com/ip/2");
        session.fail(second.ticket, "API error: 500");
        assert_eq!(session.error(), Some("API error: 500"));

        session.begin("https://walmart.com/ip/3");
        assert!(session.is_loading());
        assert!(session.result().is_none());
        assert!(session.error().is_none());
        assert_eq!(session.submit_label(), "Checking...");
    }

    #[test]
    fn test_succeed_sets_result_and_title() {
        let mut session = CheckSession::new();
        assert_eq!(session.page_title(), "Product Eligibility Checker");

        let pending = session.begin("https://walmart.com/ip/1");
        assert!(session.succeed(pending.ticket, sample_result()));
        assert!(!session.is_loading());
        assert_eq!(session.submit_label(), "Check");
        assert_eq!(
            session.page_title(),
            "Reading Glasses - walmart.com | FSA/HSA Eligibility"
        );
    }

    #[test]
    fn test_empty_failure_message_falls_back() {
        let mut session = CheckSession::new();
        let pending = session.begin("https://walmart.com/ip/1");
        session.fail(pending.ticket, "");
        assert_eq!(session.error(), Some(FALLBACK_ERROR));
    }

    #[test]
    fn test_whitespace_failure_message_is_kept() {
        let mut session = CheckSession::new();
        let pending = session.begin("https://walmart.com/ip/1");
        session.fail(pending.ticket, " ");
        assert_eq!(session.error(), Some(" "));
    }

    #[test]
    fn test_stale_reply_is_ignored() {
        let mut session = CheckSession::new();
        let older = session.begin("https://walmart.com/ip/1");
        let newer = session.begin("https://walmart.com/ip/2");

        assert!(!session.succeed(older.ticket, sample_result()));
        assert!(session.is_loading());
        assert!(session.result().is_none());

        assert!(!session.fail(older.ticket, "timeout"));
        assert!(session.error().is_none());

        assert!(session.succeed(newer.ticket, sample_result()));
        assert!(session.result().is_some());
    }

    #[test]
    fn test_select_recent_rechecks_and_fills_input() {
        let mut session = CheckSession::new();
        let record = CheckRecord::from_result("https://walmart.com/ip/1", &sample_result(), Utc::now());
        let pending = session.select_recent(&record);
        assert_eq!(pending.url, "https://walmart.com/ip/1");
        assert_eq!(session.input(), "https://walmart.com/ip/1");
        assert!(session.is_loading());
    }

    #[test]
    fn test_modal_toggle() {
        let mut session = CheckSession::new();
        session.open_modal();
        assert!(session.is_modal_open());
        session.close_modal();
        assert!(!session.is_modal_open());
    }
}
