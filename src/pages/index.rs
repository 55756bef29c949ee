//! Public landing page.

use leptos::prelude::*;

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;

const DESTINATIONS: &[(&str, &str)] = &[
    ("Marrakech", "La ville ocre et ses riads"),
    ("Chefchaouen", "La perle bleue du Rif"),
    ("Merzouga", "Les dunes de l'Erg Chebbi"),
    ("Essaouira", "Alizés et remparts atlantiques"),
    ("Fès", "La plus ancienne médina du monde"),
    ("Ouarzazate", "La porte du désert"),
];

/// Marketing home: hero, destinations grid, experience pitch, contact.
#[component]
pub fn IndexPage() -> impl IntoView {
    view! {
        <div class="index-page">
            <Navbar/>

            <section class="hero">
                <h1 class="hero__title">"L'art du voyage marocain"</h1>
                <p class="hero__subtitle">
                    "Hôtels de charme, expériences culinaires et artisanat d'exception, "
                    "sélectionnés par des vendeurs locaux."
                </p>
                <a class="btn btn--primary" href="/products">"Découvrir nos produits"</a>
            </section>

            <section class="destinations">
                <h2>"Destinations"</h2>
                <div class="destinations__grid">
                    {DESTINATIONS
                        .iter()
                        .map(|(name, blurb)| {
                            view! {
                                <div class="destinations__card">
                                    <h3>{*name}</h3>
                                    <p>{*blurb}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <section class="experience">
                <h2>"Une expérience sur mesure"</h2>
                <p>
                    "Des circuits dans l'Atlas aux cours de cuisine dans la médina, chaque "
                    "séjour est composé avec des partenaires vérifiés."
                </p>
            </section>

            <section class="contact">
                <h2>"Contact"</h2>
                <p>"contact@mystigtravel.ma — Marrakech, Maroc"</p>
            </section>

            <Footer/>
        </div>
    }
}
