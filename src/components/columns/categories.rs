//! Category table columns: id and name.

#[cfg(test)]
#[path = "categories_test.rs"]
mod categories_test;

use crate::components::cells::{ActionIntent, Cell, RowAction};
use crate::net::types::Category;

pub const HEADERS: &[&str] = &["ID", "Nome"];

pub fn cells(category: &Category) -> Vec<Cell> {
    vec![
        Cell::Text(category.id.clone()),
        Cell::Emphasis(category.name.clone()),
    ]
}

pub fn actions(category: &Category) -> Vec<RowAction> {
    vec![
        RowAction {
            label: "Copiar ID",
            intent: ActionIntent::CopyId(category.id.clone()),
            destructive: false,
        },
        RowAction {
            label: "Editar detalhes",
            intent: ActionIntent::Edit(category.id.clone()),
            destructive: false,
        },
        RowAction {
            label: "Excluir categoria",
            intent: ActionIntent::Delete(category.id.clone()),
            destructive: true,
        },
    ]
}
