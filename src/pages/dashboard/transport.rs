//! Transport service pages: list and creation form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::dashboard_layout::DashboardLayout;
use crate::net::api;
use crate::net::types::{TransportService, TransportType};

#[component]
pub fn TransportListPage() -> impl IntoView {
    let services = LocalResource::new(|| api::transport::list(&[]));

    let on_delete = move |id: String| {
        leptos::task::spawn_local(async move {
            if api::transport::delete(&id).await.is_ok() {
                services.refetch();
            }
        });
    };

    view! {
        <DashboardLayout>
            <header class="page-header">
                <h1>"Transport"</h1>
                <a class="btn btn--primary" href="/dashboard/transport/create">
                    "+ Nouveau transport"
                </a>
            </header>

            <Suspense fallback=move || view! { <p class="page-loading">"Chargement..."</p> }>
                {move || {
                    services.get().map(|result| match result {
                        Ok(list) => {
                            view! {
                                <table class="data-table">
                                    <thead>
                                        <tr>
                                            <th>"Nom"</th>
                                            <th>"Type"</th>
                                            <th>"Trajet"</th>
                                            <th>"Prix"</th>
                                            <th>"Places"</th>
                                            <th></th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {list
                                            .into_iter()
                                            .map(|service| service_row(service, on_delete))
                                            .collect::<Vec<_>>()}
                                    </tbody>
                                </table>
                            }
                                .into_any()
                        }
                        Err(_) => {
                            view! { <p class="page-error">"Impossible de charger les transports."</p> }
                                .into_any()
                        }
                    })
                }}
            </Suspense>
        </DashboardLayout>
    }
}

fn service_row(
    service: TransportService,
    on_delete: impl Fn(String) + Copy + 'static,
) -> impl IntoView {
    let id = service.id.clone();
    let route = format!(
        "{} → {}",
        service.departure_city.unwrap_or_default(),
        service.arrival_city.unwrap_or_default()
    );

    view! {
        <tr>
            <td>{service.name}</td>
            <td>{type_label(service.transport_type)}</td>
            <td>{route}</td>
            <td>{service.price.map_or_else(String::new, |p| format!("{p:.0} MAD"))}</td>
            <td>{service.seats.unwrap_or(0).to_string()}</td>
            <td>
                <button class="btn btn--danger" on:click=move |_| on_delete(id.clone())>
                    "Supprimer"
                </button>
            </td>
        </tr>
    }
}

fn type_label(transport_type: TransportType) -> &'static str {
    match transport_type {
        TransportType::AirportTransfer => "Transfert aéroport",
        TransportType::Bus => "Bus",
        TransportType::PrivateCar => "Voiture privée",
        TransportType::Taxi => "Taxi",
    }
}

/// Creation form; POSTs the new service then returns to the list.
#[component]
pub fn CreateTransportPage() -> impl IntoView {
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let transport_type = RwSignal::new("PRIVATE_CAR".to_owned());
    let departure = RwSignal::new(String::new());
    let arrival = RwSignal::new(String::new());
    let price = RwSignal::new(String::new());
    let seats = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);
        if name.get().trim().is_empty() {
            error.set(Some("Le nom est obligatoire".to_owned()));
            return;
        }

        let body = serde_json::json!({
            "name": name.get().trim(),
            "transportType": transport_type.get(),
            "departureCity": departure.get().trim(),
            "arrivalCity": arrival.get().trim(),
            "price": price.get().trim().parse::<f64>().unwrap_or(0.0),
            "seats": seats.get().trim().parse::<u32>().unwrap_or(0),
        });

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::transport::create(body).await {
                Ok(_) => navigate("/dashboard/transport", NavigateOptions::default()),
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    };

    view! {
        <DashboardLayout>
            <h1>"Nouveau transport"</h1>

            <form class="form" on:submit=on_submit>
                <label class="form__label">
                    "Nom du service"
                    <input
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>

                <label class="form__label">
                    "Type"
                    <select on:change=move |ev| transport_type.set(event_target_value(&ev))>
                        <option value="PRIVATE_CAR" selected>"Voiture privée"</option>
                        <option value="AIRPORT_TRANSFER">"Transfert aéroport"</option>
                        <option value="BUS">"Bus"</option>
                        <option value="TAXI">"Taxi"</option>
                    </select>
                </label>

                <label class="form__label">
                    "Ville de départ"
                    <input
                        type="text"
                        prop:value=move || departure.get()
                        on:input=move |ev| departure.set(event_target_value(&ev))
                    />
                </label>

                <label class="form__label">
                    "Ville d'arrivée"
                    <input
                        type="text"
                        prop:value=move || arrival.get()
                        on:input=move |ev| arrival.set(event_target_value(&ev))
                    />
                </label>

                <label class="form__label">
                    "Prix (MAD)"
                    <input
                        type="number"
                        prop:value=move || price.get()
                        on:input=move |ev| price.set(event_target_value(&ev))
                    />
                </label>

                <label class="form__label">
                    "Nombre de places"
                    <input
                        type="number"
                        prop:value=move || seats.get()
                        on:input=move |ev| seats.set(event_target_value(&ev))
                    />
                </label>

                <Show when=move || error.get().is_some()>
                    <p class="form__error">{move || error.get().unwrap_or_default()}</p>
                </Show>

                <div class="form__actions">
                    <a class="btn" href="/dashboard/transport">"Annuler"</a>
                    <button class="btn btn--primary" type="submit">"Créer"</button>
                </div>
            </form>
        </DashboardLayout>
    }
}
