//! Top navigation bar shared by the public pages.

use leptos::prelude::*;

use crate::state::auth::AuthState;

/// Public site navigation. The trailing link flips between the seller login
/// and the dashboard depending on the session state.
#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let account_link = move || {
        if auth.get().is_authenticated() {
            view! { <a class="navbar__link navbar__link--cta" href="/dashboard">"Mon espace"</a> }
                .into_any()
        } else {
            view! { <a class="navbar__link navbar__link--cta" href="/login">"Connexion"</a> }
                .into_any()
        }
    };

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href="/">"MystigTravel"</a>
            <div class="navbar__links">
                <a class="navbar__link" href="/">"Accueil"</a>
                <a class="navbar__link" href="/products">"Nos produits"</a>
                <a class="navbar__link" href="/products/hotels">"Hôtels"</a>
                {account_link}
            </div>
        </nav>
    }
}
