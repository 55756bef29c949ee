//! Event management page.

use leptos::prelude::*;

use crate::components::dashboard_layout::DashboardLayout;
use crate::net::api;
use crate::net::types::{EventStatus, TravelEvent};

#[component]
pub fn EventsPage() -> impl IntoView {
    let events = LocalResource::new(|| api::events::list(&[]));

    let on_delete = move |id: String| {
        leptos::task::spawn_local(async move {
            if api::events::delete(&id).await.is_ok() {
                events.refetch();
            }
        });
    };

    view! {
        <DashboardLayout>
            <header class="page-header">
                <h1>"Événements"</h1>
            </header>

            <Suspense fallback=move || view! { <p class="page-loading">"Chargement..."</p> }>
                {move || {
                    events.get().map(|result| match result {
                        Ok(list) => {
                            view! {
                                <table class="data-table">
                                    <thead>
                                        <tr>
                                            <th>"Titre"</th>
                                            <th>"Ville"</th>
                                            <th>"Date"</th>
                                            <th>"Statut"</th>
                                            <th>"Billets vendus"</th>
                                            <th></th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {list
                                            .into_iter()
                                            .map(|event| event_row(event, on_delete))
                                            .collect::<Vec<_>>()}
                                    </tbody>
                                </table>
                            }
                                .into_any()
                        }
                        Err(_) => {
                            view! { <p class="page-error">"Impossible de charger les événements."</p> }
                                .into_any()
                        }
                    })
                }}
            </Suspense>
        </DashboardLayout>
    }
}

fn event_row(event: TravelEvent, on_delete: impl Fn(String) + Copy + 'static) -> impl IntoView {
    let id = event.id.clone();
    let status = match event.status {
        EventStatus::Draft => "Brouillon",
        EventStatus::Published => "Publié",
        EventStatus::Cancelled => "Annulé",
    };
    let sold = format!(
        "{} / {}",
        event.tickets_sold.unwrap_or(0),
        event.capacity.map_or_else(|| "∞".to_owned(), |c| c.to_string())
    );

    view! {
        <tr>
            <td>{event.title}</td>
            <td>{event.city.unwrap_or_default()}</td>
            <td>{event.start_date.unwrap_or_default()}</td>
            <td>{status}</td>
            <td>{sold}</td>
            <td>
                <button class="btn btn--danger" on:click=move |_| on_delete(id.clone())>
                    "Supprimer"
                </button>
            </td>
        </tr>
    }
}
