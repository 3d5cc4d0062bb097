//! Dashboard page: greeting plus record counts for each entity.

use leptos::prelude::*;

#[cfg(feature = "csr")]
use leptos_router::{NavigateOptions, hooks::use_navigate};

use crate::net::api::ApiClient;
use crate::session::{Session, SessionManager};

#[cfg(feature = "csr")]
use crate::routes::LOGIN_PATH;

/// Dashboard. Refreshes the cached profile on arrival; a token the
/// backend no longer accepts surfaces here as a 401 and forces a logout.
#[component]
pub fn HomePage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let session = expect_context::<SessionManager>();
    let current = expect_context::<RwSignal<Session>>();

    {
        let api = api.clone();
        let session = session.clone();
        #[cfg(feature = "csr")]
        let navigate = use_navigate();
        Effect::new(move || {
            if !session.is_authenticated() {
                return;
            }
            #[cfg(feature = "csr")]
            {
                let api = api.clone();
                let session = session.clone();
                let navigate = navigate.clone();
                leptos::task::spawn_local(async move {
                    if let Err(err) = api.fetch_user().await {
                        if err.is_unauthorized() {
                            session.logout();
                            navigate(LOGIN_PATH, NavigateOptions::default());
                        }
                    }
                });
            }
            #[cfg(not(feature = "csr"))]
            {
                let _ = &api;
            }
        });
    }

    let products = {
        let api = api.clone();
        LocalResource::new(move || {
            let api = api.clone();
            async move { api.list_products().await.map(|items| items.len()).unwrap_or(0) }
        })
    };
    let categories = {
        let api = api.clone();
        LocalResource::new(move || {
            let api = api.clone();
            async move { api.list_categories().await.map(|items| items.len()).unwrap_or(0) }
        })
    };
    let clients = LocalResource::new(move || {
        let api = api.clone();
        async move { api.list_clients().await.map(|items| items.len()).unwrap_or(0) }
    });

    view! {
        <div class="home-page">
            <header class="home-page__header">
                <h1>
                    {move || {
                        let name = current.get().user.name;
                        if name.is_empty() {
                            "Bem-vindo".to_owned()
                        } else {
                            format!("Bem-vindo, {name}")
                        }
                    }}
                </h1>
            </header>
            <div class="home-page__stats">
                <StatCard label="Produtos" value=products/>
                <StatCard label="Categorias" value=categories/>
                <StatCard label="Clientes" value=clients/>
            </div>
        </div>
    }
}

/// A labeled count card.
#[component]
fn StatCard(label: &'static str, value: LocalResource<usize>) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-card__label">{label}</span>
            <span class="stat-card__value">
                <Suspense fallback=|| "…">{move || value.get()}</Suspense>
            </span>
        </div>
    }
}
