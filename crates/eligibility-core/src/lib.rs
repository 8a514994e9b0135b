// Domain modules
pub mod config;
pub mod error;
pub mod history;
pub mod lenient;
pub mod reimbursement;
pub mod request;
pub mod result;
pub mod session;
pub mod status;

pub use config::CheckerConfig;
pub use error::{EligibilityError, Result};
pub use history::{CheckRecord, RecentChecks, MAX_RECENT_CHECKS, RECENT_CHECKS_KEY};
pub use reimbursement::ReimbursementRequest;
pub use request::check_url;
pub use result::{
    normalize_domain, parse_response, EligibilityResult, HsaEligibility, PriceInfo, ProductInfo,
    DEFAULT_PAGE_TITLE,
};
pub use session::{CheckSession, CheckTicket, PendingCheck};
pub use status::{
    ActionKind, ActionStyle, Badge, BadgeVariant, CardAction, EligibilityStatus,
};
