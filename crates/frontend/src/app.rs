use contracts::domain::{Country, Good, Port};
use leptos::prelude::*;

use crate::shared::components::autocomplete::Autocomplete;
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::format::{format_currency, format_thousands};
use crate::shared::query::{use_countries, use_goods, use_ports};
use crate::shared::selection::{Selection, SelectionAction};

fn country_label(c: &Country) -> String {
    c.nama.clone()
}

fn port_label(p: &Port) -> String {
    p.nama.clone()
}

fn good_label(g: &Good) -> String {
    g.label()
}

fn good_detail(g: &Good) -> String {
    g.description.clone()
}

/// Application root: the three-step cascading selection form.
///
/// All state transitions run through [`Selection::apply`]; the view only
/// dispatches actions and renders derived values.
#[component]
pub fn App() -> impl IntoView {
    let selection = RwSignal::new(Selection::default());
    let apply = move |action: SelectionAction| selection.update(|s| s.apply(action));

    let countries = use_countries();
    let ports = use_ports(Signal::derive(move || {
        selection.with(|s| s.country.as_ref().map(|c| c.id))
    }));
    let goods = use_goods(Signal::derive(move || {
        selection.with(|s| s.port.as_ref().map(|p| p.id))
    }));

    let error_entries = Signal::derive(move || {
        let mut entries = Vec::new();
        if let Some(e) = countries.error.get() {
            entries.push(("Countries".to_string(), e));
        }
        if let Some(e) = ports.error.get() {
            entries.push(("Ports".to_string(), e));
        }
        if let Some(e) = goods.error.get() {
            entries.push(("Goods".to_string(), e));
        }
        entries
    });

    let selected_country = Signal::derive(move || selection.with(|s| s.country.clone()));
    let selected_port = Signal::derive(move || selection.with(|s| s.port.clone()));
    let selected_good = Signal::derive(move || selection.with(|s| s.good.clone()));
    let discount = Signal::derive(move || selection.with(|s| s.discount));
    let price = Signal::derive(move || selection.with(|s| s.price));
    let total = Signal::derive(move || selection.with(|s| s.total()));

    let country_missing = move || selection.with(|s| s.country.is_none());
    let port_missing = move || selection.with(|s| s.port.is_none());

    view! {
        <div class="page">
            <header class="page__header">
                <h1>"Aplikasi Pelabuhan"</h1>
            </header>

            <ErrorBanner entries=error_entries />

            <div class="card form">
                <div class="form__group">
                    <label class="form__label">"Negara"</label>
                    <Autocomplete
                        value=selected_country
                        options=countries.data
                        on_change=Callback::new(move |c| apply(SelectionAction::PickCountry(c)))
                        label_of=country_label
                        placeholder="Pilih negara..."
                        disabled=Signal::derive(move || countries.is_loading.get())
                        loading=Signal::derive(move || countries.is_loading.get())
                    />
                    {move || countries.is_loading.get().then(|| view! {
                        <p class="form__hint form__hint--loading">"Loading countries..."</p>
                    })}
                </div>

                <div class="form__group">
                    <label class="form__label">"Pelabuhan"</label>
                    <Autocomplete
                        value=selected_port
                        options=ports.data
                        on_change=Callback::new(move |p| apply(SelectionAction::PickPort(p)))
                        label_of=port_label
                        placeholder=Signal::derive(move || {
                            if country_missing() {
                                "Pilih negara terlebih dahulu".to_string()
                            } else {
                                "Pilih pelabuhan...".to_string()
                            }
                        })
                        disabled=Signal::derive(move || country_missing() || ports.is_loading.get())
                        loading=Signal::derive(move || ports.is_loading.get())
                    />
                    {move || ports.is_loading.get().then(|| view! {
                        <p class="form__hint form__hint--loading">"Loading ports..."</p>
                    })}
                </div>

                <div class="form__group">
                    <label class="form__label">"Barang"</label>
                    <Autocomplete
                        value=selected_good
                        options=goods.data
                        on_change=Callback::new(move |g| apply(SelectionAction::PickGood(g)))
                        label_of=good_label
                        detail_of=good_detail
                        placeholder=Signal::derive(move || {
                            if port_missing() {
                                "Pilih pelabuhan terlebih dahulu".to_string()
                            } else {
                                "Pilih barang...".to_string()
                            }
                        })
                        disabled=Signal::derive(move || port_missing() || goods.is_loading.get())
                        loading=Signal::derive(move || goods.is_loading.get())
                    />
                    {move || goods.is_loading.get().then(|| view! {
                        <p class="form__hint form__hint--loading">"Loading goods..."</p>
                    })}
                </div>

                {move || selected_good.get().map(|good| view! {
                    <div class="form__group">
                        <label class="form__label">"Deskripsi Barang"</label>
                        <textarea
                            class="form__input form__input--readonly"
                            prop:value=good.description.clone()
                            readonly=true
                            rows="3"
                        ></textarea>
                    </div>
                })}

                {move || selected_good.get().map(|good| {
                    let original_discount = good.diskon;
                    let original_price = good.harga;
                    view! {
                        <div class="form__row">
                            <div class="form__group">
                                <label class="form__label">"Discount (%)"</label>
                                <input
                                    type="number"
                                    class="form__input"
                                    min="0"
                                    max="100"
                                    step="0.01"
                                    placeholder="0"
                                    prop:value=move || discount.get().to_string()
                                    on:input=move |ev| {
                                        apply(SelectionAction::EditDiscount(event_target_value(&ev)));
                                    }
                                />
                                <p class="form__hint">"Original: " {original_discount.to_string()} "%"</p>
                            </div>
                            <div class="form__group">
                                <label class="form__label">"Harga"</label>
                                <div class="form__prefixed">
                                    <span class="form__prefix">"Rp"</span>
                                    <input
                                        type="text"
                                        class="form__input"
                                        placeholder="0"
                                        prop:value=move || format_thousands(price.get())
                                        on:input=move |ev| {
                                            apply(SelectionAction::EditPrice(event_target_value(&ev)));
                                        }
                                    />
                                </div>
                                <p class="form__hint">"Original: " {format_currency(original_price as f64)}</p>
                            </div>
                        </div>
                    }
                })}

                {move || selected_good.get().map(|_| view! {
                    <div class="form__group">
                        <label class="form__label">"Total (Harga × Discount ÷ 100)"</label>
                        <input
                            type="text"
                            class="form__input form__input--total"
                            prop:value=move || format_currency(total.get())
                            readonly=true
                        />
                        <p class="form__hint">
                            "Calculation: " {move || format_thousands(price.get())}
                            " × (" {move || discount.get().to_string()} "% ÷ 100) = "
                            {move || format_currency(total.get())}
                        </p>
                    </div>
                })}
            </div>

            {move || {
                if !selection.with(|s| s.complete()) {
                    return None;
                }
                let country = selected_country.get()?;
                let port = selected_port.get()?;
                let good = selected_good.get()?;
                let discount_now = discount.get();
                let price_now = price.get();
                let discount_modified = (discount_now != good.diskon).then(|| {
                    format!("(Modified from {}%)", good.diskon)
                });
                let price_modified = (price_now != good.harga).then(|| {
                    format!("(Modified from {})", format_currency(good.harga as f64))
                });
                Some(view! {
                    <div class="card summary">
                        <h3 class="summary__title">"Summary"</h3>
                        <div class="summary__grid">
                            <div class="summary__column">
                                <div class="summary__item">
                                    <span class="summary__key">"Negara:"</span>
                                    <p class="summary__value">{country.nama.clone()}</p>
                                </div>
                                <div class="summary__item">
                                    <span class="summary__key">"Pelabuhan:"</span>
                                    <p class="summary__value">{port.nama.clone()}</p>
                                </div>
                                <div class="summary__item">
                                    <span class="summary__key">"Barang:"</span>
                                    <p class="summary__value">{good.label()}</p>
                                </div>
                            </div>
                            <div class="summary__column">
                                <div class="summary__item">
                                    <span class="summary__key">"Discount:"</span>
                                    <p class="summary__value">
                                        {discount_now.to_string()} "% "
                                        {discount_modified.map(|m| view! {
                                            <span class="summary__modified">{m}</span>
                                        })}
                                    </p>
                                </div>
                                <div class="summary__item">
                                    <span class="summary__key">"Harga:"</span>
                                    <p class="summary__value">
                                        {format_currency(price_now as f64)} " "
                                        {price_modified.map(|m| view! {
                                            <span class="summary__modified">{m}</span>
                                        })}
                                    </p>
                                </div>
                                <div class="summary__item summary__item--total">
                                    <span class="summary__key">"Total:"</span>
                                    <p class="summary__value summary__value--total">
                                        {format_currency(total.get())}
                                    </p>
                                </div>
                            </div>
                        </div>
                    </div>
                })
            }}
        </div>
    }
}
