//! Seller login page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::auth::session;
use crate::state::auth::AuthState;

/// Login form. On success the user record lands in the auth context (no
/// re-fetch when the login payload already carries it) and navigation moves
/// to the dashboard; on failure an inline message is shown.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);
        let email_value = email.get();
        let password_value = password.get();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match session::login(&email_value, &password_value).await {
                Ok(payload) => {
                    let user = match payload.user {
                        Some(user) => Some(user),
                        None => session::current_user().await,
                    };
                    auth.set(AuthState::resolved(user));
                    navigate("/dashboard", NavigateOptions::default());
                }
                Err(_) => error.set(Some("Email ou mot de passe invalide".to_owned())),
            }
        });
    };

    view! {
        <div class="login-page">
            <header class="login-page__header">
                <a class="login-page__back" href="/">"Retour à l'accueil"</a>
                <h1 class="login-page__brand">"MystigTravel"</h1>
            </header>

            <div class="login-page__card">
                <h2>"Connexion Vendeur"</h2>
                <p class="login-page__subtitle">"Accédez à votre espace de gestion"</p>

                <form class="login-form" on:submit=on_submit>
                    <label class="login-form__label">
                        "Adresse email"
                        <input
                            type="email"
                            placeholder="votre@email.com"
                            required
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>

                    <label class="login-form__label">
                        "Mot de passe"
                        <div class="login-form__password">
                            <input
                                type=move || if show_password.get() { "text" } else { "password" }
                                placeholder="••••••••"
                                required
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                            <button
                                type="button"
                                class="login-form__toggle"
                                on:click=move |_| show_password.update(|v| *v = !*v)
                            >
                                {move || if show_password.get() { "Masquer" } else { "Afficher" }}
                            </button>
                        </div>
                    </label>

                    <Show when=move || error.get().is_some()>
                        <p class="login-form__error">{move || error.get().unwrap_or_default()}</p>
                    </Show>

                    <button class="btn btn--primary login-form__submit" type="submit">
                        "Se connecter"
                    </button>
                </form>
            </div>
        </div>
    }
}
