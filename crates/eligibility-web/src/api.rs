use eligibility_core::{
    check_url, parse_response, CheckerConfig, EligibilityError, EligibilityResult,
};
use gloo_net::http::Request;
use leptos::logging::{log, warn};

/// Build-time configuration; `ELIGIBILITY_*` variables set while compiling
/// override the defaults.
pub fn web_config() -> CheckerConfig {
    CheckerConfig::default()
        .with_overrides(
            option_env!("ELIGIBILITY_API_URL"),
            option_env!("ELIGIBILITY_USER_EMAIL"),
            option_env!("ELIGIBILITY_HIT_CACHE"),
        )
        .unwrap_or_else(|e| {
            warn!("Falling back to default config: {}", e);
            CheckerConfig::default()
        })
}

pub async fn check_eligibility(
    config: &CheckerConfig,
    product_url: &str,
) -> Result<EligibilityResult, String> {
    let resp = Request::post(&check_url(config, product_url))
        .header("Content-Type", "application/json")
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !resp.ok() {
        return Err(EligibilityError::Api {
            status: resp.status(),
        }
        .to_string());
    }

    let body = resp.text().await.map_err(|e| e.to_string())?;
    log!("{}", body);

    parse_response(&body).map_err(|e| e.to_string())
}
