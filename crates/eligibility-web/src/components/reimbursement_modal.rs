use eligibility_core::ReimbursementRequest;
use leptos::ev::{MouseEvent, SubmitEvent};
use leptos::logging::log;
use leptos::prelude::*;

#[component]
pub fn ReimbursementModal(#[prop(into)] open: Signal<bool>, on_close: Callback<()>) -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (order_id, set_order_id) = signal(String::new());
    let (error, set_error) = signal(None::<String>);

    let close = move || {
        set_error.set(None);
        on_close.run(());
    };

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let request = ReimbursementRequest::new(email.get(), order_id.get());
        match request.validate() {
            Ok(()) => {
                log!("Reimbursement requested for order {}", request.order_id.trim());
                set_email.set(String::new());
                set_order_id.set(String::new());
                close();
            }
            Err(e) => set_error.set(Some(e.to_string())),
        }
    };

    view! {
        <Show when=move || open.get()>
            <div class="modal-overlay" on:click=move |_| close()>
                <div class="modal-content" on:click=|ev: MouseEvent| ev.stop_propagation()>
                    <h2 class="modal-title">"Request Reimbursement"</h2>
                    <form on:submit=submit>
                        <div class="form-field">
                            <label class="form-label">"Email"</label>
                            <input
                                type="email"
                                class="form-input"
                                required
                                prop:value=move || email.get()
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form-field">
                            <label class="form-label">"Order ID"</label>
                            <input
                                type="text"
                                class="form-input"
                                required
                                prop:value=move || order_id.get()
                                on:input=move |ev| set_order_id.set(event_target_value(&ev))
                            />
                        </div>
                        {move || error.get().map(|e| view! { <p class="error-message">{e}</p> })}
                        <div class="form-actions">
                            <button type="button" class="modal-button modal-button--cancel" on:click=move |_| close()>
                                "Cancel"
                            </button>
                            <button type="submit" class="modal-button modal-button--submit">
                                "Submit"
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
