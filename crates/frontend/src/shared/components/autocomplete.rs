use leptos::prelude::*;

/// Change to emit for a text edit: emptying the entry clears the committed
/// selection; any other text only narrows the option list.
pub fn change_for_entry<T>(text: &str) -> Option<Option<T>> {
    text.is_empty().then_some(None)
}

/// Case-insensitive substring filter over the display labels.
/// An empty search keeps the full list.
pub fn filter_options<T: Clone>(options: &[T], search: &str, label_of: fn(&T) -> String) -> Vec<T> {
    if search.is_empty() {
        return options.to_vec();
    }
    let needle = search.to_lowercase();
    options
        .iter()
        .filter(|option| label_of(option).to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Searchable dropdown over an arbitrary option type.
///
/// Controlled component: the committed option lives in `value`, the text
/// entry is local state shown only while nothing is committed. Selecting an
/// option fires `on_change(Some(..))` and clears the text; emptying the
/// text field fires `on_change(None)`.
#[component]
pub fn Autocomplete<T>(
    /// Currently committed option
    #[prop(into)]
    value: Signal<Option<T>>,
    /// Full option list to filter
    #[prop(into)]
    options: Signal<Vec<T>>,
    /// Fired with the picked option, or None when the entry is cleared
    on_change: Callback<Option<T>>,
    /// Display accessor for the option label
    label_of: fn(&T) -> String,
    /// Optional secondary line shown under the label in the list
    #[prop(optional)]
    detail_of: Option<fn(&T) -> String>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Disabled state: no interaction at all
    #[prop(optional)]
    disabled: Option<Signal<bool>>,
    /// Loading state: shows a spinner and suppresses the option list
    #[prop(optional)]
    loading: Option<Signal<bool>>,
) -> impl IntoView
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    let (search, set_search) = signal(String::new());
    let (open, set_open) = signal(false);

    let disabled = disabled.unwrap_or_else(|| {
        let (r, _) = signal(false);
        r.into()
    });
    let loading = loading.unwrap_or_else(|| {
        let (r, _) = signal(false);
        r.into()
    });

    let filtered = Memo::new(move |_| filter_options(&options.get(), &search.get(), label_of));

    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let display_value = move || match value.get() {
        Some(v) => label_of(&v),
        None => search.get(),
    };

    let handle_select = move |option: T| {
        on_change.run(Some(option));
        set_search.set(String::new());
        set_open.set(false);
    };

    view! {
        <div class="autocomplete">
            <input
                type="text"
                class="form__input"
                placeholder=input_placeholder
                prop:value=display_value
                disabled=move || disabled.get() || loading.get()
                on:focus=move |_| set_open.set(true)
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    if let Some(change) = change_for_entry(&text) {
                        on_change.run(change);
                    }
                    set_search.set(text);
                    set_open.set(true);
                }
            />
            {move || {
                loading.get().then(|| view! {
                    <span class="autocomplete__spinner" aria-label="loading"></span>
                })
            }}
            {move || {
                if !open.get() || disabled.get() || loading.get() {
                    return None;
                }
                let items = filtered.get();
                if items.is_empty() {
                    return None;
                }
                Some(view! {
                    <div class="autocomplete__list">
                        {items.into_iter().map(|option| {
                            let label = label_of(&option);
                            let detail = detail_of
                                .map(|f| f(&option))
                                .filter(|d| !d.is_empty());
                            view! {
                                <div
                                    class="autocomplete__option"
                                    on:click=move |_| handle_select(option.clone())
                                >
                                    <div class="autocomplete__option-label">{label}</div>
                                    {detail.map(|d| view! {
                                        <div class="autocomplete__option-detail">{d}</div>
                                    })}
                                </div>
                            }
                        }).collect_view()}
                    </div>
                })
            }}
        </div>
    }
}
