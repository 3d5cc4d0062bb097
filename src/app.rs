//! Root application component with routing, session context, and the
//! navigation guard.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    NavigateOptions, StaticSegment,
    components::{Redirect, Route, Router, Routes},
    hooks::{use_location, use_navigate},
};

use crate::components::nav::Sidebar;
use crate::net::api::ApiClient;
use crate::pages::{
    categories::CategoriesPage, clients::ClientsPage, home::HomePage, login::LoginPage,
    products::ProductsPage, register::RegisterPage,
};
use crate::routes::{GuardOutcome, check_navigation};
use crate::session::SessionManager;

/// Root application component.
///
/// Builds the session manager and API client once, shares them through
/// context, and mirrors session changes into a reactive signal for the
/// UI. All storage access anywhere below flows through these two values.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionManager::browser();
    let current = RwSignal::new(session.snapshot());
    session.on_change(move |state| current.set(state.clone()));

    let api = ApiClient::new(session.clone());
    provide_context(session);
    provide_context(api);
    provide_context(current);

    view! {
        <Title text="Loja"/>

        <Router>
            <SessionGuard/>
            <Sidebar/>
            <main class="app-shell">
                <Routes fallback=|| "Página não encontrada.".into_view()>
                    <Route path=StaticSegment("") view=|| view! { <Redirect path="/login"/> }/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("home") view=HomePage/>
                    <Route path=StaticSegment("products") view=ProductsPage/>
                    <Route path=StaticSegment("categories") view=CategoriesPage/>
                    <Route path=StaticSegment("clients") view=ClientsPage/>
                </Routes>
            </main>
        </Router>
    }
}

/// Intercepts every route transition: protected routes require a stored
/// token, otherwise the visitor is sent to the login page.
#[component]
fn SessionGuard() -> impl IntoView {
    let session = expect_context::<SessionManager>();
    let location = use_location();
    let navigate = use_navigate();

    Effect::new(move || {
        let path = location.pathname.get();
        if let GuardOutcome::Redirect(target) = check_navigation(&session, &path) {
            navigate(target, NavigateOptions::default());
        }
    });
}
