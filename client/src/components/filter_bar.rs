//! Date and title filters above the experiment list.

use leptos::prelude::*;

use labnote::experiments;
use labnote::filter::FilterInputs;

use crate::services::{dispatch, use_app_state, use_services};

#[component]
pub fn FilterBar() -> impl IntoView {
    let state = use_app_state();
    let services = use_services();

    let on_apply = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        dispatch(state, services, async |svc, st| experiments::apply_filters(&svc.store, st).await);
    };
    let on_reset = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        dispatch(state, services, async |svc, st| experiments::reset_filters(&svc.store, st).await);
    };

    view! {
        <div class="filter-bar">
            <FilterField label="Date" kind="date" read={|f| f.date.clone()} write={|f, v| f.date = v}/>
            <FilterField label="From" kind="date" read={|f| f.start_date.clone()} write={|f, v| f.start_date = v}/>
            <FilterField label="To" kind="date" read={|f| f.end_date.clone()} write={|f, v| f.end_date = v}/>
            <FilterField label="Title" kind="text" read={|f| f.title.clone()} write={|f, v| f.title = v}/>
            <button class="btn btn--primary" on:click=on_apply>"Apply"</button>
            <button class="btn" on:click=on_reset>"Reset"</button>
        </div>
    }
}

#[component]
fn FilterField(
    label: &'static str,
    kind: &'static str,
    read: fn(&FilterInputs) -> String,
    write: fn(&mut FilterInputs, String),
) -> impl IntoView {
    let state = use_app_state();
    view! {
        <label class="filter-bar__field">
            <span>{label}</span>
            <input
                type=kind
                prop:value=move || state.with(|s| read(&s.experiments.filters))
                on:input=move |ev| state.update(|s| write(&mut s.experiments.filters, event_target_value(&ev)))
            />
        </label>
    }
}
