use serde::{Deserialize, Serialize};

pub const STATUS_ELIGIBLE: &str = "eligible";
pub const STATUS_ELIGIBLE_WITH_LMN: &str = "eligible but requires letter of medical necessity (LMN)";
pub const STATUS_INELIGIBLE: &str = "ineligible";

/// Eligibility verdict as reported by the backend.
///
/// The backend sends a free-form string; anything unrecognised is kept
/// verbatim in `Unknown` so it round-trips through stored history unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EligibilityStatus {
    Eligible,
    EligibleWithLmn,
    Ineligible,
    Unknown(String),
}

impl EligibilityStatus {
    pub fn parse(raw: &str) -> Self {
        match raw {
            STATUS_ELIGIBLE => EligibilityStatus::Eligible,
            STATUS_ELIGIBLE_WITH_LMN => EligibilityStatus::EligibleWithLmn,
            STATUS_INELIGIBLE => EligibilityStatus::Ineligible,
            other => EligibilityStatus::Unknown(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            EligibilityStatus::Eligible => STATUS_ELIGIBLE,
            EligibilityStatus::EligibleWithLmn => STATUS_ELIGIBLE_WITH_LMN,
            EligibilityStatus::Ineligible => STATUS_INELIGIBLE,
            EligibilityStatus::Unknown(raw) => raw,
        }
    }

    pub fn badge(&self) -> Badge {
        match self {
            EligibilityStatus::Eligible => Badge {
                text: "Eligible",
                variant: BadgeVariant::Eligible,
            },
            EligibilityStatus::EligibleWithLmn => Badge {
                text: "Eligible with LMN",
                variant: BadgeVariant::EligibleLmn,
            },
            EligibilityStatus::Ineligible | EligibilityStatus::Unknown(_) => Badge {
                text: "Not Eligible",
                variant: BadgeVariant::Ineligible,
            },
        }
    }

    pub fn requires_lmn(&self) -> bool {
        matches!(self, EligibilityStatus::EligibleWithLmn)
    }

    /// Shown above the product title.
    pub fn lmn_notice(&self) -> Option<&'static str> {
        self.requires_lmn().then_some(
            "A Letter of Medical Necessity from your doctor is required for reimbursement.",
        )
    }

    /// Shown alongside the action buttons.
    pub fn actions_note(&self) -> Option<&'static str> {
        matches!(self, EligibilityStatus::Ineligible)
            .then_some("Not typically covered. You can still buy normally.")
    }

    /// Buttons offered on the result card. Unknown verdicts get none.
    pub fn actions(&self) -> &'static [CardAction] {
        match self {
            EligibilityStatus::Eligible | EligibilityStatus::EligibleWithLmn => ELIGIBLE_ACTIONS,
            EligibilityStatus::Ineligible => INELIGIBLE_ACTIONS,
            EligibilityStatus::Unknown(_) => &[],
        }
    }
}

/// An empty verdict, for records stored without a status.
impl Default for EligibilityStatus {
    fn default() -> Self {
        EligibilityStatus::Unknown(String::new())
    }
}

impl From<String> for EligibilityStatus {
    fn from(raw: String) -> Self {
        match EligibilityStatus::parse(&raw) {
            EligibilityStatus::Unknown(_) => EligibilityStatus::Unknown(raw),
            known => known,
        }
    }
}

impl From<EligibilityStatus> for String {
    fn from(status: EligibilityStatus) -> Self {
        match status {
            EligibilityStatus::Unknown(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Badge {
    pub text: &'static str,
    pub variant: BadgeVariant,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BadgeVariant {
    Eligible,
    EligibleLmn,
    Ineligible,
}

impl BadgeVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeVariant::Eligible => "eligible",
            BadgeVariant::EligibleLmn => "eligible-lmn",
            BadgeVariant::Ineligible => "ineligible",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionKind {
    /// Open the merchant page.
    Buy,
    /// Open the reimbursement request form.
    Reimburse,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionStyle {
    Primary,
    Outline,
    Muted,
    Light,
}

impl ActionStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionStyle::Primary => "primary",
            ActionStyle::Outline => "outline",
            ActionStyle::Muted => "muted",
            ActionStyle::Light => "light",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardAction {
    pub kind: ActionKind,
    pub label: &'static str,
    pub style: ActionStyle,
}

const REIMBURSE_LABEL: &str = "Get reimbursed with float";

const ELIGIBLE_ACTIONS: &[CardAction] = &[
    CardAction {
        kind: ActionKind::Buy,
        label: "Buy with pre-tax dollars",
        style: ActionStyle::Primary,
    },
    CardAction {
        kind: ActionKind::Reimburse,
        label: REIMBURSE_LABEL,
        style: ActionStyle::Outline,
    },
];

const INELIGIBLE_ACTIONS: &[CardAction] = &[
    CardAction {
        kind: ActionKind::Buy,
        label: "Buy normally",
        style: ActionStyle::Muted,
    },
    CardAction {
        kind: ActionKind::Reimburse,
        label: REIMBURSE_LABEL,
        style: ActionStyle::Light,
    },
];
