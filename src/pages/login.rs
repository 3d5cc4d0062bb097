//! Login page with an email/password form.

use leptos::prelude::*;

#[cfg(feature = "csr")]
use leptos_router::{NavigateOptions, hooks::use_navigate};

use crate::net::api::ApiClient;
use crate::net::types::LoginCredentials;
use crate::session::SessionManager;

/// Login page — exchanges credentials for a token, stores it through the
/// session manager, fetches the profile, and moves on to the dashboard.
#[component]
pub fn LoginPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let session = expect_context::<SessionManager>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    #[cfg(feature = "csr")]
    let navigate = use_navigate();

    let submit = Callback::new(move |()| {
        let credentials = LoginCredentials {
            email: email.get().trim().to_owned(),
            password: password.get(),
        };
        if credentials.email.is_empty() || credentials.password.is_empty() {
            error.set(Some("Informe email e senha.".to_owned()));
            return;
        }
        error.set(None);

        #[cfg(feature = "csr")]
        {
            let api = api.clone();
            let session = session.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match api.login(&credentials).await {
                    Ok(token) => {
                        session.set_token(&token);
                        if let Err(err) = api.fetch_user().await {
                            leptos::logging::warn!("profile fetch after login failed: {err}");
                        }
                        navigate("/home", NavigateOptions::default());
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&api, &session, &credentials);
        }
    });

    view! {
        <div class="auth-page">
            <h1>"Entrar"</h1>
            <label class="auth-page__label">
                "Email"
                <input
                    class="auth-page__input"
                    type="email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </label>
            <label class="auth-page__label">
                "Senha"
                <input
                    class="auth-page__input"
                    type="password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            submit.run(());
                        }
                    }
                />
            </label>
            <Show when=move || error.get().is_some()>
                <p class="auth-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <button class="btn btn--primary" on:click=move |_| submit.run(())>
                "Entrar"
            </button>
            <a class="auth-page__alt" href="/register">
                "Criar conta"
            </a>
        </div>
    }
}
