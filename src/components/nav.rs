//! Sidebar navigation chrome with the cached user identity and logout.

use leptos::prelude::*;
use leptos_router::{
    NavigateOptions,
    hooks::{use_location, use_navigate},
};

use crate::components::cells::initials;
use crate::routes::{LOGIN_PATH, route_meta};
use crate::session::{Session, SessionManager};

/// Application sidebar. Hidden on routes flagged `hide_chrome` (the auth
/// screens). The cached profile and the logout action only render while
/// the session snapshot holds a token; logout clears the session before
/// returning to login.
#[component]
pub fn Sidebar() -> impl IntoView {
    let session = expect_context::<SessionManager>();
    let current = expect_context::<RwSignal<Session>>();
    let location = use_location();
    let navigate = use_navigate();

    let visible = move || !route_meta(&location.pathname.get()).hide_chrome;
    let authenticated = move || current.get().is_authenticated();

    let on_logout = Callback::new(move |()| {
        session.logout();
        navigate(LOGIN_PATH, NavigateOptions::default());
    });

    view! {
        <Show when=visible>
            <aside class="sidebar">
                <span class="sidebar__brand">"Loja"</span>
                <nav class="sidebar__links">
                    <a href="/home">"Início"</a>
                    <a href="/products">"Produtos"</a>
                    <a href="/categories">"Categorias"</a>
                    <a href="/clients">"Clientes"</a>
                </nav>
                <Show when=authenticated>
                    <div class="sidebar__user">
                        {move || {
                            let user = current.get().user;
                            match user.avatar {
                                Some(url) => {
                                    view! { <img class="sidebar__avatar" src=url alt="Avatar"/> }
                                        .into_any()
                                }
                                None => {
                                    view! {
                                        <span class="sidebar__initials">{initials(&user.name)}</span>
                                    }
                                        .into_any()
                                }
                            }
                        }}
                        <span class="sidebar__name">{move || current.get().user.name}</span>
                        <span class="sidebar__email">{move || current.get().user.email}</span>
                    </div>
                    <button class="btn sidebar__logout" on:click=move |_| on_logout.run(())>
                        "Sair"
                    </button>
                </Show>
            </aside>
        </Show>
    }
}
