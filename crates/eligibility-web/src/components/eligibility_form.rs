use leptos::ev::SubmitEvent;
use leptos::prelude::*;

#[component]
pub fn EligibilityForm(
    #[prop(into)] input: Signal<String>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] submit_label: Signal<&'static str>,
    on_input: Callback<String>,
    on_submit: Callback<()>,
) -> impl IntoView {
    view! {
        <form
            class="url-form"
            on:submit=move |ev: SubmitEvent| {
                ev.prevent_default();
                on_submit.run(());
            }
        >
            <label class="form-label">
                "Product URL"
                <input
                    type="url"
                    placeholder="https://www.amazon.com/product-name/dp/..."
                    class=move || if error.get().is_some() { "form-input form-input--error" } else { "form-input" }
                    prop:value=move || input.get()
                    on:input=move |ev| on_input.run(event_target_value(&ev))
                />
            </label>
            <button type="submit" class="submit-button" disabled=move || loading.get()>
                {move || submit_label.get()}
            </button>
        </form>
        {move || error.get().map(|e| view! { <p class="error-message">{e}</p> })}
    }
}
