//! Travel package management page.

use leptos::prelude::*;

use crate::components::dashboard_layout::DashboardLayout;
use crate::net::api;
use crate::net::types::TravelPackage;

#[component]
pub fn PackagesPage() -> impl IntoView {
    let packages = LocalResource::new(|| api::packages::list(&[]));

    let on_delete = move |id: String| {
        leptos::task::spawn_local(async move {
            if api::packages::delete(&id).await.is_ok() {
                packages.refetch();
            }
        });
    };

    view! {
        <DashboardLayout>
            <header class="page-header">
                <h1>"Packages"</h1>
            </header>

            <Suspense fallback=move || view! { <p class="page-loading">"Chargement..."</p> }>
                {move || {
                    packages.get().map(|result| match result {
                        Ok(list) => {
                            view! {
                                <table class="data-table">
                                    <thead>
                                        <tr>
                                            <th>"Titre"</th>
                                            <th>"Type"</th>
                                            <th>"Durée"</th>
                                            <th>"Prix"</th>
                                            <th>"Statut"</th>
                                            <th></th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {list
                                            .into_iter()
                                            .map(|package| package_row(package, on_delete))
                                            .collect::<Vec<_>>()}
                                    </tbody>
                                </table>
                            }
                                .into_any()
                        }
                        Err(_) => {
                            view! { <p class="page-error">"Impossible de charger les packages."</p> }
                                .into_any()
                        }
                    })
                }}
            </Suspense>
        </DashboardLayout>
    }
}

fn package_row(
    package: TravelPackage,
    on_delete: impl Fn(String) + Copy + 'static,
) -> impl IntoView {
    let id = package.id.clone();
    let duration = package
        .duration_days
        .map_or_else(String::new, |days| format!("{days} jours"));

    view! {
        <tr>
            <td>{package.title}</td>
            <td>{package.package_type.unwrap_or_default()}</td>
            <td>{duration}</td>
            <td>{package.price.map_or_else(String::new, |p| format!("{p:.0} MAD"))}</td>
            <td>{package.status.unwrap_or_default()}</td>
            <td>
                <button class="btn btn--danger" on:click=move |_| on_delete(id.clone())>
                    "Supprimer"
                </button>
            </td>
        </tr>
    }
}
