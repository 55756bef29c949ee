//! Dashboard landing: stats overview and quick actions.

use leptos::prelude::*;

use crate::components::dashboard_layout::DashboardLayout;
use crate::net::api;
use crate::state::auth::AuthState;

const QUICK_ACTIONS: &[(&str, &str)] = &[
    ("/dashboard/events", "Créer un événement"),
    ("/dashboard/transport/create", "Ajouter un transport"),
    ("/dashboard/packages", "Gérer les packages"),
    ("/dashboard/settings", "Mettre à jour le profil"),
];

#[component]
pub fn DashboardHome() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let stats = LocalResource::new(|| api::statistics::dashboard(&[]));

    let welcome = move || {
        auth.get()
            .user()
            .map_or_else(|| "Bienvenue".to_owned(), |user| format!("Bienvenue, {}", user.name))
    };

    view! {
        <DashboardLayout>
            <h1 class="dashboard-home__title">{welcome}</h1>

            <Suspense fallback=move || view! { <p class="page-loading">"Chargement..."</p> }>
                {move || {
                    stats.get().map(|result| {
                        let stats = result.unwrap_or_default();
                        view! {
                            <div class="stat-cards">
                                <StatCard
                                    label="Revenus"
                                    value=format!("{:.0} MAD", stats.total_revenue.unwrap_or(0.0))
                                />
                                <StatCard
                                    label="Réservations"
                                    value=stats.total_bookings.unwrap_or(0).to_string()
                                />
                                <StatCard
                                    label="Annonces actives"
                                    value=stats.active_listings.unwrap_or(0).to_string()
                                />
                                <StatCard
                                    label="En attente"
                                    value=stats.pending_bookings.unwrap_or(0).to_string()
                                />
                            </div>
                        }
                    })
                }}
            </Suspense>

            <section class="quick-actions">
                <h2>"Actions rapides"</h2>
                <div class="quick-actions__grid">
                    {QUICK_ACTIONS
                        .iter()
                        .map(|(href, label)| {
                            view! { <a class="quick-actions__card" href=*href>{*label}</a> }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>
        </DashboardLayout>
    }
}

/// Single metric tile on the overview grid.
#[component]
fn StatCard(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-card__value">{value}</span>
            <span class="stat-card__label">{label}</span>
        </div>
    }
}
