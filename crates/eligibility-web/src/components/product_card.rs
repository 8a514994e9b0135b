use eligibility_core::{ActionKind, EligibilityResult};
use leptos::prelude::*;

#[component]
pub fn ProductCard(
    #[prop(into)] result: Signal<Option<EligibilityResult>>,
    on_buy: Callback<String>,
    on_reimburse: Callback<()>,
) -> impl IntoView {
    view! {
        {move || result.get().map(|product| {
            let status = product.status();
            let badge = status.badge();
            let base_url = product.product_info.base_url.clone();

            let actions = status.actions().iter().map(|action| {
                let kind = action.kind;
                let url = base_url.clone();
                view! {
                    <button
                        class=format!("action-button action-button--{}", action.style.as_str())
                        on:click=move |_| match kind {
                            ActionKind::Buy => on_buy.run(url.clone()),
                            ActionKind::Reimburse => on_reimburse.run(()),
                        }
                    >
                        {action.label}
                    </button>
                }
            }).collect::<Vec<_>>();

            view! {
                <div class="product-card">
                    <div class="product-card-body">
                        {product.image_url().map(|src| view! {
                            <img src=src.to_string() alt="" class="product-image" />
                        })}
                        <div class="product-details">
                            <span class=format!("badge badge--large badge--{}", badge.variant.as_str())>
                                {badge.text}
                            </span>
                            {status.lmn_notice().map(|notice| view! { <p class="lmn-message">{notice}</p> })}
                            <h3 class="product-title">{product.product_info.title.clone()}</h3>
                            {product.formatted_price().map(|price| view! { <p class="product-price">{price}</p> })}
                            <p class="product-reason">{product.hsa_eligibility.reason.clone()}</p>
                            <div class="product-actions">
                                {status.actions_note().map(|note| view! { <p class="not-eligible-note">{note}</p> })}
                                {actions}
                            </div>
                        </div>
                    </div>
                </div>
            }
        })}
    }
}
