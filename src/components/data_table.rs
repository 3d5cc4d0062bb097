//! Table component rendering cell descriptions and row action menus.

use leptos::prelude::*;

use crate::components::cells::{ActionIntent, Cell, RowAction, format_brl};

/// One table row: the cells to display plus its action menu entries.
#[derive(Clone, Debug, PartialEq)]
pub struct TableRow {
    pub cells: Vec<Cell>,
    pub actions: Vec<RowAction>,
}

/// Generic data table. Pages build rows from the `columns` descriptors
/// and receive the chosen `ActionIntent` back through `on_action`.
#[component]
pub fn DataTable(
    headers: &'static [&'static str],
    rows: Vec<TableRow>,
    #[prop(into)] on_action: Callback<ActionIntent>,
) -> impl IntoView {
    // At most one row menu open at a time, tracked by row index.
    let open_menu = RwSignal::new(None::<usize>);

    view! {
        <table class="data-table">
            <thead>
                <tr>
                    {headers.iter().map(|header| view! { <th>{*header}</th> }).collect::<Vec<_>>()}
                    <th class="data-table__actions-header"></th>
                </tr>
            </thead>
            <tbody>
                {rows
                    .into_iter()
                    .enumerate()
                    .map(|(index, row)| {
                        let actions = row.actions.clone();
                        view! {
                            <tr>
                                {row.cells.into_iter().map(render_cell).collect::<Vec<_>>()}
                                <td class="data-table__actions">
                                    <button
                                        class="btn btn--ghost data-table__menu-trigger"
                                        aria-label="Abrir menu"
                                        on:click=move |_| {
                                            open_menu
                                                .update(|open| {
                                                    *open = if *open == Some(index) { None } else { Some(index) };
                                                });
                                        }
                                    >
                                        "⋯"
                                    </button>
                                    <Show when=move || open_menu.get() == Some(index)>
                                        <div class="dropdown">
                                            <span class="dropdown__label">"Ações"</span>
                                            {actions
                                                .iter()
                                                .map(|action| {
                                                    let intent = action.intent.clone();
                                                    let class = if action.destructive {
                                                        "dropdown__item dropdown__item--destructive"
                                                    } else {
                                                        "dropdown__item"
                                                    };
                                                    view! {
                                                        <button
                                                            class=class
                                                            on:click=move |_| {
                                                                open_menu.set(None);
                                                                on_action.run(intent.clone());
                                                            }
                                                        >
                                                            {action.label}
                                                        </button>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </div>
                                    </Show>
                                </td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
}

fn render_cell(cell: Cell) -> AnyView {
    match cell {
        Cell::Text(value) => view! { <td>{value}</td> }.into_any(),
        Cell::Emphasis(value) => view! { <td class="cell--emphasis">{value}</td> }.into_any(),
        Cell::Muted(value) => view! { <td class="cell--muted">{value}</td> }.into_any(),
        Cell::Currency(value) => {
            view! { <td class="cell--currency">{format_brl(value)}</td> }.into_any()
        }
        Cell::Badge { label, variant } => {
            let class = variant.class();
            view! { <td><span class=class>{label}</span></td> }.into_any()
        }
    }
}
