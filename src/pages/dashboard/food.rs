//! Food experience management page.

use leptos::prelude::*;

use crate::components::dashboard_layout::DashboardLayout;
use crate::net::api;
use crate::net::types::FoodExperience;

#[component]
pub fn FoodPage() -> impl IntoView {
    let experiences = LocalResource::new(|| api::food::list(&[]));

    let on_delete = move |id: String| {
        leptos::task::spawn_local(async move {
            if api::food::delete(&id).await.is_ok() {
                experiences.refetch();
            }
        });
    };

    view! {
        <DashboardLayout>
            <header class="page-header">
                <h1>"Gastronomie"</h1>
            </header>

            <Suspense fallback=move || view! { <p class="page-loading">"Chargement..."</p> }>
                {move || {
                    experiences.get().map(|result| match result {
                        Ok(list) => {
                            view! {
                                <table class="data-table">
                                    <thead>
                                        <tr>
                                            <th>"Expérience"</th>
                                            <th>"Type"</th>
                                            <th>"Ville"</th>
                                            <th>"Prix"</th>
                                            <th>"Statut"</th>
                                            <th></th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {list
                                            .into_iter()
                                            .map(|experience| experience_row(experience, on_delete))
                                            .collect::<Vec<_>>()}
                                    </tbody>
                                </table>
                            }
                                .into_any()
                        }
                        Err(_) => {
                            view! { <p class="page-error">"Impossible de charger les expériences."</p> }
                                .into_any()
                        }
                    })
                }}
            </Suspense>
        </DashboardLayout>
    }
}

fn experience_row(
    experience: FoodExperience,
    on_delete: impl Fn(String) + Copy + 'static,
) -> impl IntoView {
    let id = experience.id.clone();

    view! {
        <tr>
            <td>{experience.title}</td>
            <td>{experience.food_type.unwrap_or_default()}</td>
            <td>{experience.city.unwrap_or_default()}</td>
            <td>{experience.price.map_or_else(String::new, |p| format!("{p:.0} MAD"))}</td>
            <td>{experience.status.unwrap_or_default()}</td>
            <td>
                <button class="btn btn--danger" on:click=move |_| on_delete(id.clone())>
                    "Supprimer"
                </button>
            </td>
        </tr>
    }
}
