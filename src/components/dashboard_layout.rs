//! Chrome shared by every dashboard page: sidebar navigation and a header
//! with the signed-in seller and a logout action.

use leptos::prelude::*;

use crate::auth::session;
use crate::state::auth::AuthState;

const NAV_ITEMS: &[(&str, &str)] = &[
    ("/dashboard", "Vue d'ensemble"),
    ("/dashboard/statistics", "Statistiques"),
    ("/dashboard/events", "Événements"),
    ("/dashboard/transport", "Transport"),
    ("/dashboard/packages", "Packages"),
    ("/dashboard/artisan", "Artisanat"),
    ("/dashboard/food", "Gastronomie"),
    ("/dashboard/tickets", "Billetterie"),
    ("/dashboard/settings", "Paramètres"),
];

/// Dashboard shell. Children render in the main column.
///
/// Logout delegates to the auth service; once the session state settles back
/// to anonymous, the surrounding route guard redirects to the login page.
#[component]
pub fn DashboardLayout(children: Children) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let seller_name = move || {
        auth.get().user().map_or_else(String::new, |user| user.name.clone())
    };

    let on_logout = move |_| session::sign_out(auth);

    view! {
        <div class="dashboard">
            <aside class="dashboard__sidebar">
                <a class="dashboard__brand" href="/">"MystigTravel"</a>
                <nav class="dashboard__nav">
                    {NAV_ITEMS
                        .iter()
                        .map(|(href, label)| {
                            view! { <a class="dashboard__nav-link" href=*href>{*label}</a> }
                        })
                        .collect::<Vec<_>>()}
                </nav>
            </aside>
            <div class="dashboard__main">
                <header class="dashboard__header">
                    <span class="dashboard__user">{seller_name}</span>
                    <button class="btn btn--ghost" on:click=on_logout>
                        "Déconnexion"
                    </button>
                </header>
                <main class="dashboard__content">{children()}</main>
            </div>
        </div>
    }
}
