//! Detailed statistics page: aggregates, period-based revenue and bookings
//! charts, popular items and the customer-base breakdown.

use leptos::prelude::*;

use crate::components::dashboard_layout::DashboardLayout;
use crate::net::api;

#[component]
pub fn StatisticsPage() -> impl IntoView {
    let period = RwSignal::new("month".to_owned());

    let stats = LocalResource::new(|| api::statistics::dashboard(&[]));
    let popular = LocalResource::new(|| api::statistics::popular_items(&[("limit", "5")]));
    let analytics = LocalResource::new(api::statistics::customer_analytics);

    // Re-fetched whenever the period selector changes.
    let revenue = LocalResource::new(move || {
        let period = period.get();
        async move { api::statistics::revenue(&[("period", &period)]).await }
    });
    let bookings = LocalResource::new(move || {
        let period = period.get();
        async move { api::statistics::bookings(&[("period", &period)]).await }
    });

    view! {
        <DashboardLayout>
            <header class="statistics__header">
                <h1>"Statistiques"</h1>
                <select on:change=move |ev| period.set(event_target_value(&ev))>
                    <option value="month" selected>"12 derniers mois"</option>
                    <option value="year">"5 dernières années"</option>
                    <option value="day">"30 derniers jours"</option>
                </select>
            </header>

            <Suspense fallback=move || view! { <p class="page-loading">"Chargement..."</p> }>
                {move || {
                    stats.get().map(|result| {
                        let stats = result.unwrap_or_default();
                        view! {
                            <table class="data-table">
                                <tbody>
                                    <tr>
                                        <th>"Revenu total"</th>
                                        <td>{format!("{:.2} MAD", stats.total_revenue.unwrap_or(0.0))}</td>
                                    </tr>
                                    <tr>
                                        <th>"Réservations"</th>
                                        <td>{stats.total_bookings.unwrap_or(0).to_string()}</td>
                                    </tr>
                                    <tr>
                                        <th>"Annonces actives"</th>
                                        <td>{stats.active_listings.unwrap_or(0).to_string()}</td>
                                    </tr>
                                    <tr>
                                        <th>"Réservations en attente"</th>
                                        <td>{stats.pending_bookings.unwrap_or(0).to_string()}</td>
                                    </tr>
                                </tbody>
                            </table>
                        }
                    })
                }}
            </Suspense>

            <section class="statistics__revenue">
                <h2>"Revenus par période"</h2>
                <Suspense fallback=move || view! { <p class="page-loading">"Chargement..."</p> }>
                    {move || {
                        revenue.get().map(|result| {
                            let points = result.unwrap_or_default();
                            view! {
                                <table class="data-table">
                                    <tbody>
                                        {points
                                            .into_iter()
                                            .map(|point| view! {
                                                <tr>
                                                    <th>{point.period}</th>
                                                    <td>{format!("{:.2} MAD", point.amount)}</td>
                                                </tr>
                                            })
                                            .collect::<Vec<_>>()}
                                    </tbody>
                                </table>
                            }
                        })
                    }}
                </Suspense>
            </section>

            <section class="statistics__bookings">
                <h2>"Réservations par période"</h2>
                <Suspense fallback=move || view! { <p class="page-loading">"Chargement..."</p> }>
                    {move || {
                        bookings.get().map(|result| {
                            let trends = result.unwrap_or_default();
                            view! {
                                <table class="data-table">
                                    <tbody>
                                        {trends
                                            .into_iter()
                                            .map(|trend| view! {
                                                <tr>
                                                    <th>{trend.period}</th>
                                                    <td>{trend.count.to_string()}</td>
                                                </tr>
                                            })
                                            .collect::<Vec<_>>()}
                                    </tbody>
                                </table>
                            }
                        })
                    }}
                </Suspense>
            </section>

            <section class="statistics__popular">
                <h2>"Produits populaires"</h2>
                <Suspense fallback=move || view! { <p class="page-loading">"Chargement..."</p> }>
                    {move || {
                        popular.get().map(|result| match result {
                            Ok(value) => {
                                let names: Vec<String> = value
                                    .as_array()
                                    .map(|items| {
                                        items
                                            .iter()
                                            .filter_map(|item| {
                                                item.get("name")
                                                    .and_then(|name| name.as_str())
                                                    .map(ToOwned::to_owned)
                                            })
                                            .collect()
                                    })
                                    .unwrap_or_default();
                                view! {
                                    <ul class="statistics__popular-list">
                                        {names
                                            .into_iter()
                                            .map(|name| view! { <li>{name}</li> })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                }
                                    .into_any()
                            }
                            Err(_) => {
                                view! { <p>"Statistiques indisponibles."</p> }.into_any()
                            }
                        })
                    }}
                </Suspense>
            </section>

            <section class="statistics__customers">
                <h2>"Clients par pays"</h2>
                <Suspense fallback=move || view! { <p class="page-loading">"Chargement..."</p> }>
                    {move || {
                        analytics.get().map(|result| {
                            let analytics = result.unwrap_or_default();
                            let mut countries: Vec<_> =
                                analytics.customers_by_country.into_iter().collect();
                            countries.sort_by(|a, b| b.1.cmp(&a.1));
                            view! {
                                <table class="data-table">
                                    <tbody>
                                        {countries
                                            .into_iter()
                                            .map(|(country, count)| view! {
                                                <tr>
                                                    <th>{country}</th>
                                                    <td>{count.to_string()}</td>
                                                </tr>
                                            })
                                            .collect::<Vec<_>>()}
                                    </tbody>
                                </table>
                            }
                        })
                    }}
                </Suspense>
            </section>
        </DashboardLayout>
    }
}
