//! Left-hand notebook list with create and delete.

use leptos::prelude::*;

use labnote::notebooks;
use labnote::types::Notebook;

use crate::services::{dispatch, use_app_state, use_services};
use crate::util::confirm::browser_confirm;

#[component]
pub fn NotebookPanel() -> impl IntoView {
    let state = use_app_state();
    let services = use_services();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        dispatch(state, services, async |svc, st| notebooks::create(&svc.store, st).await);
    };

    let items = move || {
        state.with(|s| match s.notebooks.view.placeholder() {
            Some(text) => view! { <li class="notebook-list__empty">{text}</li> }.into_any(),
            None => s
                .notebooks
                .items
                .iter()
                .map(|nb| view! { <NotebookItem notebook=nb.clone()/> })
                .collect_view()
                .into_any(),
        })
    };

    view! {
        <aside class="notebook-panel">
            <h2>"Notebooks"</h2>
            <form class="notebook-form" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="New notebook name"
                    prop:value=move || state.with(|s| s.notebooks.name_input.clone())
                    on:input=move |ev| state.update(|s| s.notebooks.name_input = event_target_value(&ev))
                />
                <button type="submit" class="btn btn--primary">"Create"</button>
            </form>
            {move || state.with(|s| s.notebooks.alert.clone()).map(|text| view! { <p class="alert">{text}</p> })}
            <ul class="notebook-list">{items}</ul>
            <p class="notebook-panel__current">
                "Current notebook: "
                <strong>{move || state.with(|s| s.notebooks.selection_label())}</strong>
            </p>
        </aside>
    }
}

#[component]
fn NotebookItem(notebook: Notebook) -> impl IntoView {
    let state = use_app_state();
    let services = use_services();
    let id = notebook.id;

    let on_select = move |_| {
        dispatch(state, services, async move |svc, st| notebooks::select(&svc.store, st, id).await);
    };
    let on_delete = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        dispatch(state, services, async move |svc, st| {
            notebooks::delete(&svc.store, &browser_confirm, st, id).await;
        });
    };

    view! {
        <li
            class="notebook-list__item"
            class:notebook-list__item--active=move || state.with(|s| s.notebooks.is_selected(id))
            on:click=on_select
        >
            <span class="notebook-list__name">{notebook.name}</span>
            <button class="btn btn--danger btn--small" on:click=on_delete>"Delete"</button>
        </li>
    }
}
