//! Product table columns: name, category, status badge, price.

#[cfg(test)]
#[path = "products_test.rs"]
mod products_test;

use crate::components::cells::{ActionIntent, BadgeVariant, Cell, RowAction};
use crate::net::types::{Product, ProductStatus};

pub const HEADERS: &[&str] = &["Nome", "Categoria", "Status", "Preço"];

pub fn cells(product: &Product) -> Vec<Cell> {
    vec![
        Cell::Emphasis(product.name.clone()),
        Cell::Text(product.category.clone()),
        status_badge(product.status),
        Cell::Currency(product.price),
    ]
}

pub fn status_badge(status: ProductStatus) -> Cell {
    let variant = match status {
        ProductStatus::Ativo => BadgeVariant::Default,
        ProductStatus::Inativo => BadgeVariant::Secondary,
        ProductStatus::Arquivado => BadgeVariant::Destructive,
    };
    Cell::Badge {
        label: status.label().to_owned(),
        variant,
    }
}

pub fn actions(product: &Product) -> Vec<RowAction> {
    vec![
        RowAction {
            label: "Copiar id",
            intent: ActionIntent::CopyId(product.id.clone()),
            destructive: false,
        },
        RowAction {
            label: "Editar produto",
            intent: ActionIntent::Edit(product.id.clone()),
            destructive: false,
        },
        RowAction {
            label: "Excluir",
            intent: ActionIntent::Delete(product.id.clone()),
            destructive: true,
        },
    ]
}
