//! Site footer for the public pages.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__brand">
                <span class="footer__logo">"MystigTravel"</span>
                <p class="footer__tagline">"Voyages d'exception au Maroc"</p>
            </div>
            <div class="footer__columns">
                <div class="footer__column">
                    <h3>"Découvrir"</h3>
                    <a href="/products">"Nos produits"</a>
                    <a href="/products/hotels">"Hôtels"</a>
                </div>
                <div class="footer__column">
                    <h3>"Vendeurs"</h3>
                    <a href="/login">"Espace vendeur"</a>
                </div>
            </div>
            <p class="footer__copyright">"© 2025 MystigTravel. Tous droits réservés."</p>
        </footer>
    }
}
