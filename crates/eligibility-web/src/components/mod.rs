pub mod eligibility_form;
pub mod product_card;
pub mod recent_checks;
pub mod reimbursement_modal;
