use eligibility_core::{ActionKind, EligibilityResult, RecentChecks};
use std::fmt::Write;

pub fn render_result(result: &EligibilityResult) -> String {
    let status = result.status();
    let badge = status.badge();
    let mut out = String::new();

    let _ = writeln!(out);
    let _ = writeln!(out, "  [{}] {}", badge.text, result.product_info.title);

    let domain = result.merchant_domain();
    if !domain.is_empty() {
        let _ = writeln!(out, "  {}", domain);
    }
    if let Some(price) = result.formatted_price() {
        let _ = writeln!(out, "  Price: {}", price);
    }
    if let Some(notice) = status.lmn_notice() {
        let _ = writeln!(out, "  Note: {}", notice);
    }
    if !result.hsa_eligibility.reason.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "  {}", result.hsa_eligibility.reason);
    }
    if let Some(note) = status.actions_note() {
        let _ = writeln!(out);
        let _ = writeln!(out, "  {}", note);
    }

    let actions = status.actions();
    if !actions.is_empty() {
        let _ = writeln!(out);
    }
    for action in actions {
        match action.kind {
            ActionKind::Buy if !result.product_info.base_url.is_empty() => {
                let _ = writeln!(out, "  -> {}: {}", action.label, result.product_info.base_url);
            }
            ActionKind::Buy => {}
            ActionKind::Reimburse => {
                let _ = writeln!(out, "  -> {}", action.label);
            }
        }
    }

    out
}

pub fn render_recent(recent: &RecentChecks) -> String {
    if recent.is_empty() {
        return "No recent checks.\n".to_string();
    }

    let mut out = String::from("Recent Checks\n");
    for (i, check) in recent.entries().iter().enumerate() {
        let _ = writeln!(
            out,
            "  {:>2}. {:<18} {}  ({})",
            i + 1,
            format!("[{}]", check.badge().text),
            check.title,
            check.normalized_domain
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use eligibility_core::{parse_response, CheckRecord};

    fn result_with_status(status: &str, price: f64) -> EligibilityResult {
        parse_response(&format!(
            r#"[{{
                "product_info": {{"title": "Heating Pad", "base_url": "https://www.bestbuy.com/site/pad"}},
                "price_info": {{"price": {}}},
                "hsa_eligibility": {{"status": "{}", "reason": "Pain relief."}}
            }}]"#,
            price, status
        ))
        .unwrap()
    }

    #[test]
    fn test_render_eligible_result() {
        let out = render_result(&result_with_status("eligible", 24.0));
        assert!(out.contains("[Eligible] Heating Pad"));
        assert!(out.contains("bestbuy.com"));
        assert!(out.contains("Price: $24"));
        assert!(out.contains("Buy with pre-tax dollars: https://www.bestbuy.com/site/pad"));
        assert!(out.contains("Get reimbursed with float"));
    }

    #[test]
    fn test_render_ineligible_result_without_price() {
        let out = render_result(&result_with_status("ineligible", 0.0));
        assert!(out.contains("[Not Eligible]"));
        assert!(!out.contains("Price:"));
        assert!(out.contains("Not typically covered. You can still buy normally."));
        assert!(out.contains("Buy normally"));
    }

    #[test]
    fn test_render_unknown_status_has_no_actions() {
        let out = render_result(&result_with_status("under review", 5.0));
        assert!(out.contains("[Not Eligible]"));
        assert!(!out.contains("->"));
    }

    #[test]
    fn test_render_recent() {
        let mut recent = RecentChecks::default();
        assert_eq!(render_recent(&recent), "No recent checks.\n");

        let result = result_with_status("eligible but requires letter of medical necessity (LMN)", 1.0);
        recent.record(CheckRecord::from_result("https://bestbuy.com/pad", &result, Utc::now()));
        let out = render_recent(&recent);
        assert!(out.starts_with("Recent Checks"));
        assert!(out.contains("1. [Eligible with LMN]"));
        assert!(out.contains("Heating Pad  (bestbuy.com)"));
    }
}
