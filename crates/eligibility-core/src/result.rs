use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{EligibilityError, Result};
use crate::{lenient, EligibilityStatus};

pub const DEFAULT_PAGE_TITLE: &str = "Product Eligibility Checker";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductInfo {
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub base_url: String,
    #[serde(default)]
    pub product_image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PriceInfo {
    #[serde(default, deserialize_with = "lenient::price")]
    pub price: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HsaEligibility {
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub status: String,
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub reason: String,
}

/// One element of the eligibility API response array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityResult {
    pub product_info: ProductInfo,
    #[serde(default)]
    pub price_info: Option<PriceInfo>,
    pub hsa_eligibility: HsaEligibility,
}

impl EligibilityResult {
    pub fn status(&self) -> EligibilityStatus {
        EligibilityStatus::parse(&self.hsa_eligibility.status)
    }

    /// Price worth showing; zero and missing prices are hidden.
    pub fn display_price(&self) -> Option<f64> {
        self.price_info
            .as_ref()
            .and_then(|p| p.price)
            .filter(|price| *price > 0.0)
    }

    pub fn formatted_price(&self) -> Option<String> {
        self.display_price().map(|price| format!("${}", price))
    }

    /// Merchant hostname without a leading `www.`, empty when `base_url` does not parse.
    pub fn merchant_domain(&self) -> String {
        normalize_domain(&self.product_info.base_url).unwrap_or_default()
    }

    pub fn image_url(&self) -> Option<&str> {
        self.product_info
            .product_image_url
            .as_deref()
            .filter(|url| !url.is_empty())
    }

    pub fn page_title(&self) -> String {
        format!(
            "{} - {} | FSA/HSA Eligibility",
            self.product_info.title,
            self.merchant_domain()
        )
    }
}

/// Takes the first product of a raw API response body.
pub fn parse_response(body: &str) -> Result<EligibilityResult> {
    let results: Vec<EligibilityResult> = serde_json::from_str(body)?;
    first_result(results)
}

pub fn first_result(results: Vec<EligibilityResult>) -> Result<EligibilityResult> {
    results
        .into_iter()
        .next()
        .ok_or(EligibilityError::EmptyResponse)
}

pub fn normalize_domain(base_url: &str) -> Option<String> {
    let url = Url::parse(base_url).ok()?;
    let host = url.host_str()?;
    Some(host.replacen("www.", "", 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[{
        "product_info": {
            "title": "Digital Thermometer",
            "base_url": "https://www.amazon.com/dp/B00TEST",
            "product_image_url": "https://images.example.com/thermo.jpg",
            "asin": "B00TEST"
        },
        "price_info": {"price": 12.5, "currency": "USD"},
        "hsa_eligibility": {"status": "eligible", "reason": "Thermometers are medical devices."}
    }]"#;

    #[test]
    fn test_parse_response_takes_first_product() {
        let result = parse_response(SAMPLE).unwrap();
        assert_eq!(result.product_info.title, "Digital Thermometer");
        assert_eq!(result.status(), EligibilityStatus::Eligible);
        assert_eq!(result.formatted_price().as_deref(), Some("$12.5"));
        assert_eq!(result.merchant_domain(), "amazon.com");
        assert_eq!(
            result.page_title(),
            "Digital Thermometer - amazon.com | FSA/HSA Eligibility"
        );
    }

    #[test]
    fn test_empty_array_is_an_error() {
        let err = parse_response("[]").unwrap_err();
        assert!(matches!(err, EligibilityError::EmptyResponse));
    }

    #[test]
    fn test_non_array_body_is_a_json_error() {
        let err = parse_response(r#"{"detail":"oops"}"#).unwrap_err();
        assert!(matches!(err, EligibilityError::Json(_)));
    }

    #[test]
    fn test_zero_or_missing_price_is_hidden() {
        let mut result = parse_response(SAMPLE).unwrap();
        result.price_info = Some(PriceInfo { price: Some(0.0) });
        assert_eq!(result.display_price(), None);
        result.price_info = None;
        assert_eq!(result.formatted_price(), None);
    }

    #[test]
    fn test_null_title_and_reason_render_empty() {
        let result = parse_response(
            r#"[{"product_info":{"title":null,"base_url":"https://www.rei.com/p/1"},
                 "price_info":null,
                 "hsa_eligibility":{"status":"ineligible","reason":null}}]"#,
        )
        .unwrap();
        assert_eq!(result.product_info.title, "");
        assert_eq!(result.hsa_eligibility.reason, "");
        assert_eq!(result.page_title(), " - rei.com | FSA/HSA Eligibility");
    }

    #[test]
    fn test_null_status_and_base_url_are_accepted() {
        let result = parse_response(
            r#"[{"product_info":{"title":"Gauze","base_url":null},
                 "hsa_eligibility":{"status":null,"reason":"Unknown."}}]"#,
        )
        .unwrap();
        assert_eq!(result.merchant_domain(), "");
        assert_eq!(result.status(), EligibilityStatus::Unknown(String::new()));
    }

    #[test]
    fn test_price_sent_as_text() {
        let with_price = |price: &str| {
            parse_response(&format!(
                r#"[{{"product_info":{{"title":"Gauze","base_url":""}},
                     "price_info":{{"price":{}}},
                     "hsa_eligibility":{{"status":"eligible","reason":""}}}}]"#,
                price
            ))
            .unwrap()
        };
        assert_eq!(with_price(r#""12.99""#).formatted_price().as_deref(), Some("$12.99"));
        assert_eq!(with_price(r#""$8""#).display_price(), Some(8.0));
        assert_eq!(with_price(r#""0""#).display_price(), None);
        assert_eq!(with_price(r#""n/a""#).display_price(), None);
        assert_eq!(with_price("null").display_price(), None);
        assert_eq!(with_price("15").display_price(), Some(15.0));
    }

    #[test]
    fn test_whole_dollar_price_has_no_decimals() {
        let mut result = parse_response(SAMPLE).unwrap();
        result.price_info = Some(PriceInfo { price: Some(30.0) });
        assert_eq!(result.formatted_price().as_deref(), Some("$30"));
    }

    #[test]
    fn test_normalize_domain() {
        assert_eq!(
            normalize_domain("https://www.walgreens.com/store/p1").as_deref(),
            Some("walgreens.com")
        );
        assert_eq!(
            normalize_domain("https://shop.example.org/x").as_deref(),
            Some("shop.example.org")
        );
        assert_eq!(normalize_domain("not a url"), None);
    }

    #[test]
    fn test_unparseable_base_url_yields_empty_domain() {
        let mut result = parse_response(SAMPLE).unwrap();
        result.product_info.base_url = String::new();
        assert_eq!(result.merchant_domain(), "");
    }
}
