use serde::{Deserialize, Serialize};

use crate::error::{EligibilityError, Result};

/// Contents of the "Request Reimbursement" form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReimbursementRequest {
    pub email: String,
    pub order_id: String,
}

impl ReimbursementRequest {
    pub fn new(email: impl Into<String>, order_id: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            order_id: order_id.into(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        let email = self.email.trim();
        if email.is_empty() {
            return Err(EligibilityError::Validation("Email is required".to_string()));
        }
        if !is_plausible_email(email) {
            return Err(EligibilityError::Validation(
                "Enter a valid email address".to_string(),
            ));
        }
        if self.order_id.trim().is_empty() {
            return Err(EligibilityError::Validation("Order ID is required".to_string()));
        }
        Ok(())
    }
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}
