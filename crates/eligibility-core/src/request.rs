use crate::CheckerConfig;

/// Full endpoint URL for checking `product_url`.
///
/// The backend takes everything as query parameters and expects an empty
/// `POST` body.
pub fn check_url(config: &CheckerConfig, product_url: &str) -> String {
    format!(
        "{}?user_email={}&hit_cache={}&url={}",
        config.api_url,
        urlencoding::encode(&config.user_email),
        config.hit_cache,
        urlencoding::encode(product_url)
    )
}
