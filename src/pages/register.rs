//! Registration page. Success behaves exactly like a login: store the
//! token, fetch the profile, land on the dashboard.

use leptos::prelude::*;

#[cfg(feature = "csr")]
use leptos_router::{NavigateOptions, hooks::use_navigate};

use crate::net::api::ApiClient;
use crate::net::types::RegistrationForm;
use crate::session::SessionManager;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let session = expect_context::<SessionManager>();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    #[cfg(feature = "csr")]
    let navigate = use_navigate();

    let submit = Callback::new(move |()| {
        let form = RegistrationForm {
            name: name.get().trim().to_owned(),
            email: email.get().trim().to_owned(),
            password: password.get(),
        };
        if form.name.is_empty() || form.email.is_empty() || form.password.is_empty() {
            error.set(Some("Preencha todos os campos.".to_owned()));
            return;
        }
        error.set(None);

        #[cfg(feature = "csr")]
        {
            let api = api.clone();
            let session = session.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match api.register(&form).await {
                    Ok(token) => {
                        session.set_token(&token);
                        if let Err(err) = api.fetch_user().await {
                            leptos::logging::warn!("profile fetch after registration failed: {err}");
                        }
                        navigate("/home", NavigateOptions::default());
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&api, &session, &form);
        }
    });

    view! {
        <div class="auth-page">
            <h1>"Criar conta"</h1>
            <label class="auth-page__label">
                "Nome"
                <input
                    class="auth-page__input"
                    type="text"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
            </label>
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
                "Cadastrar"
            </button>
            <a class="auth-page__alt" href="/login">
                "Já tenho conta"
            </a>
        </div>
    }
}
