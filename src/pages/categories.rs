//! Categories page: list table, create dialog, and row actions.

use leptos::prelude::*;

use crate::components::cells::ActionIntent;
use crate::components::columns::categories as columns;
use crate::components::data_table::{DataTable, TableRow};
use crate::net::api::ApiClient;
use crate::net::types::{Category, NewCategory};
use crate::util::clipboard;

#[component]
pub fn CategoriesPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();

    let categories = {
        let api = api.clone();
        LocalResource::new(move || {
            let api = api.clone();
            async move {
                api.list_categories().await.unwrap_or_else(|err| {
                    leptos::logging::warn!("failed to load categories: {err}");
                    Vec::new()
                })
            }
        })
    };

    let show_create = RwSignal::new(false);
    let on_cancel = Callback::new(move |()| show_create.set(false));

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
                    if let Err(err) = api.delete_category(&id).await {
                        leptos::logging::warn!("failed to delete category: {err}");
                    }
                    categories.refetch();
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
                <h1>"Categorias"</h1>
                <button class="btn btn--primary" on:click=move |_| show_create.set(true)>
                    "+ Nova categoria"
                </button>
            </header>
            <Suspense fallback=move || view! { <p>"Carregando categorias..."</p> }>
                {move || {
                    categories
                        .get()
                        .map(|items| {
                            let rows = items
                                .iter()
                                .map(|category| TableRow {
                                    cells: columns::cells(category),
                                    actions: columns::actions(category),
                                })
                                .collect::<Vec<_>>();
                            view! {
                                <DataTable headers=columns::HEADERS rows=rows on_action=on_action/>
                            }
                        })
                }}
            </Suspense>
            <Show when=move || show_create.get()>
                <CreateCategoryDialog on_cancel=on_cancel categories=categories/>
            </Show>
        </div>
    }
}

/// Modal dialog for creating a category.
#[component]
fn CreateCategoryDialog(
    on_cancel: Callback<()>,
    categories: LocalResource<Vec<Category>>,
) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let name = RwSignal::new(String::new());

    let submit = Callback::new(move |()| {
        let draft = NewCategory {
            name: name.get().trim().to_owned(),
        };
        if draft.name.is_empty() {
            return;
        }

        #[cfg(feature = "csr")]
        {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match api.create_category(&draft).await {
                    Ok(_) => {
                        categories.refetch();
                        on_cancel.run(());
                    }
                    Err(err) => leptos::logging::warn!("failed to create category: {err}"),
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&api, &draft, &categories);
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Nova categoria"</h2>
                <label class="dialog__label">
                    "Nome"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.run(());
                            }
                        }
                    />
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancelar"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| submit.run(())>
                        "Criar"
                    </button>
                </div>
            </div>
        </div>
    }
}
