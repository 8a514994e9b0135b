use eligibility_core::CheckRecord;
use leptos::prelude::*;

#[component]
pub fn RecentChecksList(
    #[prop(into)] checks: Signal<Vec<CheckRecord>>,
    on_select: Callback<CheckRecord>,
) -> impl IntoView {
    view! {
        <Show when=move || checks.with(|c| !c.is_empty())>
            <div class="recent-checks">
                <h3 class="recent-checks-title">"Recent Checks"</h3>
                <div class="recent-checks-list">
                    <For
                        each=move || checks.get()
                        key=|check| (check.url.clone(), check.checked_at)
                        children=move |check: CheckRecord| {
                            let badge = check.badge();
                            let image = check.image.clone();
                            let title = check.title.clone();
                            let domain = check.normalized_domain.clone();
                            view! {
                                <div class="recent-check" on:click=move |_| on_select.run(check.clone())>
                                    {image.map(|src| view! {
                                        <img src=src alt="" class="recent-check-image" />
                                    })}
                                    <div class="recent-check-details">
                                        <p class="recent-check-title">{title}</p>
                                        <p class="recent-check-domain">{domain}</p>
                                    </div>
                                    <span class=format!("badge badge--small badge--{}", badge.variant.as_str())>
                                        {badge.text}
                                    </span>
                                </div>
                            }
                        }
                    />
                </div>
            </div>
        </Show>
    }
}
