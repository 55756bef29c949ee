//! Ticket tier management page.

use leptos::prelude::*;

use crate::components::dashboard_layout::DashboardLayout;
use crate::net::api;
use crate::net::types::Ticket;

#[component]
pub fn TicketsPage() -> impl IntoView {
    let tickets = LocalResource::new(|| api::tickets::list(&[]));

    let on_delete = move |id: String| {
        leptos::task::spawn_local(async move {
            if api::tickets::delete(&id).await.is_ok() {
                tickets.refetch();
            }
        });
    };

    view! {
        <DashboardLayout>
            <header class="page-header">
                <h1>"Billetterie"</h1>
            </header>

            <Suspense fallback=move || view! { <p class="page-loading">"Chargement..."</p> }>
                {move || {
                    tickets.get().map(|result| match result {
                        Ok(list) => {
                            view! {
                                <table class="data-table">
                                    <thead>
                                        <tr>
                                            <th>"Billet"</th>
                                            <th>"Événement"</th>
                                            <th>"Prix"</th>
                                            <th>"Vendus"</th>
                                            <th></th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {list
                                            .into_iter()
                                            .map(|ticket| ticket_row(ticket, on_delete))
                                            .collect::<Vec<_>>()}
                                    </tbody>
                                </table>
                            }
                                .into_any()
                        }
                        Err(_) => {
                            view! { <p class="page-error">"Impossible de charger la billetterie."</p> }
                                .into_any()
                        }
                    })
                }}
            </Suspense>
        </DashboardLayout>
    }
}

fn ticket_row(ticket: Ticket, on_delete: impl Fn(String) + Copy + 'static) -> impl IntoView {
    let id = ticket.id.clone();
    let sold = format!("{} / {}", ticket.sold.unwrap_or(0), ticket.quantity.unwrap_or(0));

    view! {
        <tr>
            <td>{ticket.name}</td>
            <td>{ticket.event_id.unwrap_or_default()}</td>
            <td>{ticket.price.map_or_else(String::new, |p| format!("{p:.0} MAD"))}</td>
            <td>{sold}</td>
            <td>
                <button class="btn btn--danger" on:click=move |_| on_delete(id.clone())>
                    "Supprimer"
                </button>
            </td>
        </tr>
    }
}
