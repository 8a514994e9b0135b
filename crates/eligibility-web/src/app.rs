use chrono::Utc;
use eligibility_core::{CheckRecord, CheckSession, PendingCheck, RecentChecks};
use leptos::logging::error;
use leptos::prelude::*;

use crate::api;
use crate::components::eligibility_form::EligibilityForm;
use crate::components::product_card::ProductCard;
use crate::components::recent_checks::RecentChecksList;
use crate::components::reimbursement_modal::ReimbursementModal;
use crate::{location, storage};

/// Applies `transition` to the session and hands back the check it started, if any.
fn start_check(
    session: RwSignal<CheckSession>,
    transition: impl FnOnce(&mut CheckSession) -> Option<PendingCheck>,
) -> Option<PendingCheck> {
    let mut pending = None;
    session.update(|s| pending = transition(s));
    pending
}

#[component]
pub fn App() -> impl IntoView {
    let config = StoredValue::new(api::web_config());
    let limit = config.with_value(|c| c.history_limit);

    let session = RwSignal::new(CheckSession::new());
    let recent = RwSignal::new(RecentChecks::new(limit));

    let run_check = Callback::new(move |pending: PendingCheck| {
        location::set_query_url(&pending.url);
        let config = config.get_value();

        wasm_bindgen_futures::spawn_local(async move {
            match api::check_eligibility(&config, &pending.url).await {
                Ok(result) => {
                    let record = CheckRecord::from_result(&pending.url, &result, Utc::now());
                    let mut applied = false;
                    session.update(|s| applied = s.succeed(pending.ticket, result));
                    if applied {
                        recent.update(|r| {
                            r.record(record);
                            storage::save_recent(r);
                        });
                    }
                }
                Err(e) => {
                    error!("Eligibility check failed: {}", e);
                    session.update(|s| {
                        s.fail(pending.ticket, e);
                    });
                }
            }
        });
    });

    // Restore history, then resume a check shared via ?url=
    Effect::new(move || {
        recent.set(storage::load_recent(limit));

        let Some(url) = location::query_url() else { return };
        if let Some(pending) = start_check(session, |s| Some(s.begin(url))) {
            run_check.run(pending);
        }
    });

    Effect::new(move || {
        let title = session.with(|s| s.page_title());
        location::set_document_title(&title);
    });

    let input = Signal::derive(move || session.with(|s| s.input().to_string()));
    let loading = Signal::derive(move || session.with(|s| s.is_loading()));
    let error = Signal::derive(move || session.with(|s| s.error().map(str::to_string)));
    let submit_label = Signal::derive(move || session.with(|s| s.submit_label()));
    let result = Signal::derive(move || session.with(|s| s.result().cloned()));
    let modal_open = Signal::derive(move || session.with(|s| s.is_modal_open()));
    let checks = Signal::derive(move || recent.with(|r| r.entries().to_vec()));

    let on_input = Callback::new(move |value: String| session.update(|s| s.set_input(value)));
    let on_submit = Callback::new(move |()| {
        if let Some(pending) = start_check(session, CheckSession::submit) {
            run_check.run(pending);
        }
    });
    let on_select = Callback::new(move |record: CheckRecord| {
        if let Some(pending) = start_check(session, |s| Some(s.select_recent(&record))) {
            run_check.run(pending);
        }
    });
    let on_buy = Callback::new(|url: String| location::open_in_new_tab(&url));
    let on_reimburse = Callback::new(move |()| session.update(|s| s.open_modal()));
    let on_close_modal = Callback::new(move |()| session.update(|s| s.close_modal()));

    view! {
        <div class="app-container">
            <main class="main-content">
                <h1 class="page-title">"Product Eligibility Checker"</h1>
                <p class="page-subtitle">"Check if a product is eligible for FSA/HSA reimbursement"</p>

                <EligibilityForm
                    input=input
                    loading=loading
                    error=error
                    submit_label=submit_label
                    on_input=on_input
                    on_submit=on_submit
                />

                <ProductCard result=result on_buy=on_buy on_reimburse=on_reimburse />

                <RecentChecksList checks=checks on_select=on_select />
            </main>

            <ReimbursementModal open=modal_open on_close=on_close_modal />
        </div>
    }
}
