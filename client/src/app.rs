//! Root component: context providers, page layout, and the initial load.

use std::rc::Rc;

use leptos::prelude::*;

use labnote::config::ClientConfig;
use labnote::notebooks;
use labnote::state::AppState;

use crate::components::create_form::CreateForm;
use crate::components::edit_modal::EditModal;
use crate::components::experiment_list::ExperimentList;
use crate::components::filter_bar::FilterBar;
use crate::components::notebook_panel::NotebookPanel;
use crate::services::{Services, dispatch};

#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    let state = RwSignal::new(AppState::default());
    let services = StoredValue::new_local(Rc::new(Services::new(&config)));
    provide_context(state);
    provide_context(services);

    dispatch(state, services, async |svc, st| notebooks::reload(&svc.store, st).await);

    view! {
        <div class="layout">
            <NotebookPanel/>
            <main class="workspace">
                <CreateForm/>
                <section class="experiments">
                    <h2>"Experiments"</h2>
                    <FilterBar/>
                    <ExperimentList/>
                </section>
            </main>
            <EditModal/>
        </div>
    }
}
