//! Public product catalog page.

use leptos::prelude::*;

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;

const CATEGORIES: &[(&str, &str, &str)] = &[
    ("Hôtels & Riads", "Adresses de charme dans tout le royaume", "/products/hotels"),
    ("Événements", "Festivals, concerts et rencontres culturelles", "/products"),
    ("Transport", "Transferts aéroport et chauffeurs privés", "/products"),
    ("Packages", "Circuits complets de plusieurs jours", "/products"),
    ("Artisanat", "Tapis, céramique et maroquinerie", "/products"),
    ("Gastronomie", "Cours de cuisine et tables d'exception", "/products"),
];

/// Catalog of product categories.
#[component]
pub fn ProductsPage() -> impl IntoView {
    view! {
        <div class="products-page">
            <Navbar/>

            <header class="products-page__intro">
                <h1>"Nos produits"</h1>
                <p>"Tout ce qu'il faut pour composer un séjour marocain inoubliable."</p>
            </header>

            <div class="products-page__grid">
                {CATEGORIES
                    .iter()
                    .map(|(title, blurb, href)| {
                        view! {
                            <a class="products-page__card" href=*href>
                                <h2>{*title}</h2>
                                <p>{*blurb}</p>
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <Footer/>
        </div>
    }
}
