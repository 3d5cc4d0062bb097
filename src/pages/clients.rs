//! Clients page: read-only list with row actions.

use leptos::prelude::*;

use crate::components::cells::ActionIntent;
use crate::components::columns::clients as columns;
use crate::components::data_table::{DataTable, TableRow};
use crate::net::api::ApiClient;
use crate::util::clipboard;

#[component]
pub fn ClientsPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();

    let clients = {
        let api = api.clone();
        LocalResource::new(move || {
            let api = api.clone();
            async move {
                api.list_clients().await.unwrap_or_else(|err| {
                    leptos::logging::warn!("failed to load clients: {err}");
                    Vec::new()
                })
            }
        })
    };

    let on_action = Callback::new(move |intent: ActionIntent| match intent {
        ActionIntent::CopyId(id) => clipboard::copy_text(&id),
        ActionIntent::Edit(_) => {
            // No edit screen yet.
        }
        ActionIntent::Delete(id) => {
            #[cfg(feature = "csr")]
            {
                let api = api.clone();
                leptos::task::spawn_local(async move {
                    if let Err(err) = api.delete_client(&id).await {
                        leptos::logging::warn!("failed to delete client: {err}");
                    }
                    clients.refetch();
                });
            }
            #[cfg(not(feature = "csr"))]
            {
                let _ = (&api, &id);
            }
        }
    });

    view! {
        <div class="entity-page">
            <header class="entity-page__header">
                <h1>"Clientes"</h1>
            </header>
            <Suspense fallback=move || view! { <p>"Carregando clientes..."</p> }>
                {move || {
                    clients
                        .get()
                        .map(|items| {
                            let rows = items
                                .iter()
                                .map(|client| TableRow {
                                    cells: columns::cells(client),
                                    actions: columns::actions(client),
                                })
                                .collect::<Vec<_>>();
                            view! {
                                <DataTable headers=columns::HEADERS rows=rows on_action=on_action/>
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
