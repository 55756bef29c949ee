//! Artisan goods management page.

use leptos::prelude::*;

use crate::components::dashboard_layout::DashboardLayout;
use crate::net::api;
use crate::net::types::ArtisanProduct;

#[component]
pub fn ArtisanPage() -> impl IntoView {
    let products = LocalResource::new(|| api::artisan::list(&[]));

    let on_delete = move |id: String| {
        leptos::task::spawn_local(async move {
            if api::artisan::delete(&id).await.is_ok() {
                products.refetch();
            }
        });
    };

    view! {
        <DashboardLayout>
            <header class="page-header">
                <h1>"Artisanat"</h1>
            </header>

            <Suspense fallback=move || view! { <p class="page-loading">"Chargement..."</p> }>
                {move || {
                    products.get().map(|result| match result {
                        Ok(list) => {
                            view! {
                                <table class="data-table">
                                    <thead>
                                        <tr>
                                            <th>"Produit"</th>
                                            <th>"Catégorie"</th>
                                            <th>"Artisan"</th>
                                            <th>"Prix"</th>
                                            <th>"Statut"</th>
                                            <th></th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {list
                                            .into_iter()
                                            .map(|product| product_row(product, on_delete))
                                            .collect::<Vec<_>>()}
                                    </tbody>
                                </table>
                            }
                                .into_any()
                        }
                        Err(_) => {
                            view! { <p class="page-error">"Impossible de charger les produits."</p> }
                                .into_any()
                        }
                    })
                }}
            </Suspense>
        </DashboardLayout>
    }
}

fn product_row(
    product: ArtisanProduct,
    on_delete: impl Fn(String) + Copy + 'static,
) -> impl IntoView {
    let id = product.id.clone();

    view! {
        <tr>
            <td>{product.name}</td>
            <td>{product.category.unwrap_or_default()}</td>
            <td>{product.artisan_name.unwrap_or_default()}</td>
            <td>{product.price.map_or_else(String::new, |p| format!("{p:.0} MAD"))}</td>
            <td>{product.status.unwrap_or_default()}</td>
            <td>
                <button class="btn btn--danger" on:click=move |_| on_delete(id.clone())>
                    "Supprimer"
                </button>
            </td>
        </tr>
    }
}
