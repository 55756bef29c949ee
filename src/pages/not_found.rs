//! Catch-all page for unknown routes.

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"Cette page n'existe pas."</p>
            <a class="btn" href="/">"Retour à l'accueil"</a>
        </div>
    }
}
