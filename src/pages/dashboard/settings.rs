//! Seller profile settings.

use leptos::prelude::*;

use crate::components::dashboard_layout::DashboardLayout;
use crate::net::api;
use crate::state::auth::AuthState;

/// Profile form. Saving round-trips the update through the API and replaces
/// the context user wholesale with the record the server returns; individual
/// fields are never patched locally.
#[component]
pub fn SettingsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let current = auth.get_untracked().user().cloned();
    let name = RwSignal::new(current.as_ref().map_or_else(String::new, |u| u.name.clone()));
    let phone = RwSignal::new(
        current.as_ref().and_then(|u| u.phone.clone()).unwrap_or_default(),
    );
    let company = RwSignal::new(
        current
            .as_ref()
            .and_then(|u| u.business_info.as_ref())
            .and_then(|b| b.company_name.clone())
            .unwrap_or_default(),
    );
    let description = RwSignal::new(
        current
            .as_ref()
            .and_then(|u| u.business_info.as_ref())
            .and_then(|b| b.description.clone())
            .unwrap_or_default(),
    );
    let feedback = RwSignal::new(None::<&'static str>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        feedback.set(None);

        let body = serde_json::json!({
            "name": name.get().trim(),
            "phone": phone.get().trim(),
            "businessInfo": {
                "companyName": company.get().trim(),
                "description": description.get().trim(),
            },
        });

        leptos::task::spawn_local(async move {
            match api::users::update_profile(body).await {
                Ok(user) => {
                    auth.set(AuthState::Authenticated(user));
                    feedback.set(Some("Profil mis à jour."));
                }
                Err(_) => feedback.set(Some("La mise à jour a échoué.")),
            }
        });
    };

    view! {
        <DashboardLayout>
            <h1>"Paramètres"</h1>

            <form class="form" on:submit=on_submit>
                <label class="form__label">
                    "Nom"
                    <input
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>

                <label class="form__label">
                    "Téléphone"
                    <input
                        type="tel"
                        prop:value=move || phone.get()
                        on:input=move |ev| phone.set(event_target_value(&ev))
                    />
                </label>

                <label class="form__label">
                    "Société"
                    <input
                        type="text"
                        prop:value=move || company.get()
                        on:input=move |ev| company.set(event_target_value(&ev))
                    />
                </label>

                <label class="form__label">
                    "Description"
                    <textarea
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                </label>

                <Show when=move || feedback.get().is_some()>
                    <p class="form__feedback">{move || feedback.get().unwrap_or_default()}</p>
                </Show>

                <button class="btn btn--primary" type="submit">"Enregistrer"</button>
            </form>
        </DashboardLayout>
    }
}
