//! Products page: list table, create dialog, and row actions.

use leptos::prelude::*;

use crate::components::cells::ActionIntent;
use crate::components::columns::products as columns;
use crate::components::data_table::{DataTable, TableRow};
use crate::net::api::ApiClient;
use crate::net::types::{NewProduct, Product, ProductStatus};
use crate::util::clipboard;

#[component]
pub fn ProductsPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();

    // Product list resource — fetches on mount.
    let products = {
        let api = api.clone();
        LocalResource::new(move || {
            let api = api.clone();
            async move {
                api.list_products().await.unwrap_or_else(|err| {
                    leptos::logging::warn!("failed to load products: {err}");
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
                    if let Err(err) = api.delete_product(&id).await {
                        leptos::logging::warn!("failed to delete product: {err}");
                    }
                    products.refetch();
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
                <h1>"Produtos"</h1>
                <button class="btn btn--primary" on:click=move |_| show_create.set(true)>
                    "+ Novo produto"
                </button>
            </header>
            <Suspense fallback=move || view! { <p>"Carregando produtos..."</p> }>
                {move || {
                    products
                        .get()
                        .map(|items| {
                            let rows = items
                                .iter()
                                .map(|product| TableRow {
                                    cells: columns::cells(product),
                                    actions: columns::actions(product),
                                })
                                .collect::<Vec<_>>();
                            view! {
                                <DataTable headers=columns::HEADERS rows=rows on_action=on_action/>
                            }
                        })
                }}
            </Suspense>
            <Show when=move || show_create.get()>
                <CreateProductDialog on_cancel=on_cancel products=products/>
            </Show>
        </div>
    }
}

/// Modal dialog for creating a product. New products start active.
#[component]
fn CreateProductDialog(
    on_cancel: Callback<()>,
    products: LocalResource<Vec<Product>>,
) -> impl IntoView {
    let api = expect_context::<ApiClient>();

    let name = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let price = RwSignal::new(String::new());
    let stock = RwSignal::new(String::new());

    let submit = Callback::new(move |()| {
        let draft = NewProduct {
            name: name.get().trim().to_owned(),
            category: category.get().trim().to_owned(),
            price: price.get().trim().replace(',', ".").parse().unwrap_or(0.0),
            stock: stock.get().trim().parse().unwrap_or(0),
            status: ProductStatus::Ativo,
        };
        if draft.name.is_empty() {
            return;
        }

        #[cfg(feature = "csr")]
        {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match api.create_product(&draft).await {
                    Ok(_) => {
                        products.refetch();
                        on_cancel.run(());
                    }
                    Err(err) => leptos::logging::warn!("failed to create product: {err}"),
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&api, &draft, &products);
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Novo produto"</h2>
                <label class="dialog__label">
                    "Nome"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Categoria"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || category.get()
                        on:input=move |ev| category.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Preço"
                    <input
                        class="dialog__input"
                        type="text"
                        inputmode="decimal"
                        prop:value=move || price.get()
                        on:input=move |ev| price.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Estoque"
                    <input
                        class="dialog__input"
                        type="text"
                        inputmode="numeric"
                        prop:value=move || stock.get()
                        on:input=move |ev| stock.set(event_target_value(&ev))
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
