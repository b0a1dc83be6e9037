//! One experiment card.
//!
//! Clicking anywhere on the card or its Edit button opens the edit modal;
//! the Delete button asks first and never opens the modal.

use leptos::prelude::*;

use labnote::edit_modal;
use labnote::experiments;
use labnote::render::{self, CardAction, CardTarget, SectionBody};
use labnote::types::Experiment;

use crate::services::{dispatch, use_app_state, use_services};
use crate::util::confirm::browser_confirm;

#[component]
pub fn ExperimentCard(experiment: Experiment) -> impl IntoView {
    let state = use_app_state();
    let services = use_services();
    let card = render::card(&experiment);
    let id = card.id;

    let on_target = move |target: CardTarget| match render::card_action(target) {
        CardAction::OpenEditor => {
            let svc = services.get_value();
            let experiment = experiment.clone();
            state.update(|s| edit_modal::open(s, &svc.edit_editors, experiment));
        }
        CardAction::Delete => {
            dispatch(state, services, async move |svc, st| {
                experiments::delete(&svc.store, &browser_confirm, st, id).await;
            });
        }
    };
    let on_body = {
        let on_target = on_target.clone();
        move |_| on_target(CardTarget::Body)
    };
    let on_edit = {
        let on_target = on_target.clone();
        move |ev: leptos::ev::MouseEvent| {
            ev.stop_propagation();
            on_target(CardTarget::EditButton);
        }
    };
    let on_delete = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        on_target(CardTarget::DeleteButton);
    };

    let sections = card
        .sections
        .into_iter()
        .map(|section| {
            let body = match section.body {
                SectionBody::Html(html) => view! { <div class="card-section__body" inner_html=html></div> }.into_any(),
                SectionBody::Image(url) => {
                    view! { <img class="card-section__image" src=url alt="Reaction image"/> }.into_any()
                }
            };
            view! {
                <div class="card-section">
                    <h4>{section.label}</h4>
                    {body}
                </div>
            }
        })
        .collect_view();

    view! {
        <article class="experiment-card" on:click=on_body>
            <header class="experiment-card__header">
                <h3>{card.title}</h3>
                <span class="experiment-card__date">{card.date}</span>
                <div class="experiment-card__actions">
                    <button class="btn btn--small" on:click=on_edit>"Edit"</button>
                    <button class="btn btn--danger btn--small" on:click=on_delete>"Delete"</button>
                </div>
            </header>
            {sections}
            <footer class="experiment-card__meta">"Created " {card.created_at}</footer>
        </article>
    }
}
