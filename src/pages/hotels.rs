//! Public hotel listing page.

use leptos::prelude::*;

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::net::api;
use crate::net::types::Hotel;

/// Public list of hotels, fetched on mount.
#[component]
pub fn HotelsPage() -> impl IntoView {
    let hotels = LocalResource::new(|| api::hotels::list(&[]));

    view! {
        <div class="hotels-page">
            <Navbar/>

            <header class="hotels-page__intro">
                <h1>"Hôtels & Riads"</h1>
                <p>"Nos adresses sélectionnées à travers le Maroc."</p>
            </header>

            <Suspense fallback=move || view! { <p class="page-loading">"Chargement..."</p> }>
                {move || {
                    hotels.get().map(|result| match result {
                        Ok(list) if list.is_empty() => {
                            view! { <p class="hotels-page__empty">"Aucun hôtel disponible pour le moment."</p> }
                                .into_any()
                        }
                        Ok(list) => {
                            view! {
                                <div class="hotels-page__grid">
                                    {list.into_iter().map(hotel_card).collect::<Vec<_>>()}
                                </div>
                            }
                                .into_any()
                        }
                        Err(_) => {
                            view! { <p class="hotels-page__error">"Impossible de charger les hôtels."</p> }
                                .into_any()
                        }
                    })
                }}
            </Suspense>

            <Footer/>
        </div>
    }
}

fn hotel_card(hotel: Hotel) -> impl IntoView {
    let stars = hotel.stars.map_or_else(String::new, |n| "★".repeat(usize::from(n)));
    let price = hotel
        .price_per_night
        .map_or_else(String::new, |p| format!("{p:.0} MAD / nuit"));

    view! {
        <div class="hotel-card">
            <h2 class="hotel-card__name">{hotel.name}</h2>
            <span class="hotel-card__stars">{stars}</span>
            <p class="hotel-card__city">{hotel.city.unwrap_or_default()}</p>
            <p class="hotel-card__description">{hotel.description.unwrap_or_default()}</p>
            <span class="hotel-card__price">{price}</span>
        </div>
    }
}
