use leptos::prelude::*;

/// Non-blocking banner listing failed fetches. Rendered above the form;
/// the form itself keeps working on placeholder or cached data.
#[component]
pub fn ErrorBanner(
    /// (resource, message) pairs, one per failing fetch
    #[prop(into)]
    entries: Signal<Vec<(String, String)>>,
) -> impl IntoView {
    move || {
        let entries = entries.get();
        if entries.is_empty() {
            return None;
        }
        Some(view! {
            <div class="banner banner--error">
                <h3 class="banner__title">"Error Loading Data"</h3>
                {entries.into_iter().map(|(resource, message)| view! {
                    <p class="banner__line">{resource}": "{message}</p>
                }).collect_view()}
                <p class="banner__note">"Using fallback data where available."</p>
            </div>
        })
    }
}
