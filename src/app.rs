//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::auth::session;
use crate::components::require_auth::RequireAuth;
use crate::pages::dashboard::{
    artisan::ArtisanPage, events::EventsPage, food::FoodPage, home::DashboardHome,
    packages::PackagesPage, settings::SettingsPage, statistics::StatisticsPage,
    tickets::TicketsPage, transport::CreateTransportPage, transport::TransportListPage,
};
use crate::pages::{
    hotels::HotelsPage, index::IndexPage, login::LoginPage, not_found::NotFoundPage,
    products::ProductsPage,
};
use crate::state::auth::AuthState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="fr">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth context, runs the one-time startup session resolution,
/// and sets up client-side routing. Public pages are open; every dashboard
/// route sits behind `RequireAuth`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);

    // Startup resolution runs exactly once: with no stored token the state
    // settles to anonymous without touching the network.
    Effect::new(move || {
        if auth.get_untracked().is_resolving() {
            session::resolve_startup(auth);
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/mystig-client.css"/>
        <Title text="MystigTravel"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("") view=IndexPage/>
                <Route path=StaticSegment("products") view=ProductsPage/>
                <Route
                    path=(StaticSegment("products"), StaticSegment("hotels"))
                    view=HotelsPage
                />
                <Route path=StaticSegment("login") view=LoginPage/>

                <Route
                    path=StaticSegment("dashboard")
                    view=|| view! { <RequireAuth><DashboardHome/></RequireAuth> }
                />
                <Route
                    path=(StaticSegment("dashboard"), StaticSegment("statistics"))
                    view=|| view! { <RequireAuth><StatisticsPage/></RequireAuth> }
                />
                <Route
                    path=(StaticSegment("dashboard"), StaticSegment("events"))
                    view=|| view! { <RequireAuth><EventsPage/></RequireAuth> }
                />
                <Route
                    path=(StaticSegment("dashboard"), StaticSegment("transport"))
                    view=|| view! { <RequireAuth><TransportListPage/></RequireAuth> }
                />
                <Route
                    path=(
                        StaticSegment("dashboard"),
                        StaticSegment("transport"),
                        StaticSegment("create"),
                    )
                    view=|| view! { <RequireAuth><CreateTransportPage/></RequireAuth> }
                />
                <Route
                    path=(StaticSegment("dashboard"), StaticSegment("packages"))
                    view=|| view! { <RequireAuth><PackagesPage/></RequireAuth> }
                />
                <Route
                    path=(StaticSegment("dashboard"), StaticSegment("artisan"))
                    view=|| view! { <RequireAuth><ArtisanPage/></RequireAuth> }
                />
                <Route
                    path=(StaticSegment("dashboard"), StaticSegment("food"))
                    view=|| view! { <RequireAuth><FoodPage/></RequireAuth> }
                />
                <Route
                    path=(StaticSegment("dashboard"), StaticSegment("tickets"))
                    view=|| view! { <RequireAuth><TicketsPage/></RequireAuth> }
                />
                <Route
                    path=(StaticSegment("dashboard"), StaticSegment("settings"))
                    view=|| view! { <RequireAuth><SettingsPage/></RequireAuth> }
                />
            </Routes>
        </Router>
    }
}
