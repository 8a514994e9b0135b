use eligibility_core::{
    check_url, parse_response, CheckerConfig, EligibilityError, EligibilityResult, Result,
};
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, info, instrument, warn};

#[derive(Debug, Clone)]
pub struct EligibilityClient {
    config: CheckerConfig,
    client: reqwest::Client,
}

impl EligibilityClient {
    pub fn new(config: CheckerConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Asks the backend whether `product_url` qualifies for FSA/HSA spending.
    #[instrument(skip(self))]
    pub async fn check(&self, product_url: &str) -> Result<EligibilityResult> {
        let url = check_url(&self.config, product_url);
        let resp = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| EligibilityError::Http(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            warn!("Eligibility API returned {}", status);
            return Err(EligibilityError::Api {
                status: status.as_u16(),
            });
        }

        let body = resp
            .text()
            .await
            .map_err(|e| EligibilityError::Http(e.to_string()))?;
        debug!("Eligibility API response: {}", body);

        let result = parse_response(&body)?;
        info!(
            status = %result.hsa_eligibility.status,
            "Checked {}",
            result.product_info.title
        );
        Ok(result)
    }
}
