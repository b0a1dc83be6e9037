//! Experiment cards for the selected notebook.

use leptos::prelude::*;

use crate::components::experiment_card::ExperimentCard;
use crate::services::use_app_state;

#[component]
pub fn ExperimentList() -> impl IntoView {
    let state = use_app_state();

    let body = move || {
        state.with(|s| match s.experiments.view.placeholder() {
            Some(text) => view! { <p class="experiment-list__empty">{text}</p> }.into_any(),
            None => s
                .experiments
                .view
                .experiments()
                .iter()
                .map(|exp| view! { <ExperimentCard experiment=exp.clone()/> })
                .collect_view()
                .into_any(),
        })
    };

    view! {
        <div class="experiment-list">
            {move || state.with(|s| s.experiments.alert.clone()).map(|text| view! { <p class="alert">{text}</p> })}
            {body}
        </div>
    }
}
