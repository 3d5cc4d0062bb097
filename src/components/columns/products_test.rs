use super::*;
use crate::components::cells::{ActionIntent, BadgeVariant, Cell};

fn product() -> Product {
    Product {
        id: "p-1".to_owned(),
        name: "Teclado".to_owned(),
        category: "Periféricos".to_owned(),
        price: 199.9,
        status: ProductStatus::Ativo,
        stock: 12,
    }
}

// =============================================================
// Cells
// =============================================================

#[test]
fn one_cell_per_header() {
    assert_eq!(cells(&product()).len(), HEADERS.len());
}

#[test]
fn name_is_emphasized_and_price_is_currency() {
    let cells = cells(&product());
    assert_eq!(cells[0], Cell::Emphasis("Teclado".to_owned()));
    assert_eq!(cells[3], Cell::Currency(199.9));
}

#[test]
fn status_maps_to_badge_variants() {
    assert_eq!(
        status_badge(ProductStatus::Ativo),
        Cell::Badge {
            label: "ativo".to_owned(),
            variant: BadgeVariant::Default,
        }
    );
    assert_eq!(
        status_badge(ProductStatus::Inativo),
        Cell::Badge {
            label: "inativo".to_owned(),
            variant: BadgeVariant::Secondary,
        }
    );
    assert_eq!(
        status_badge(ProductStatus::Arquivado),
        Cell::Badge {
            label: "arquivado".to_owned(),
            variant: BadgeVariant::Destructive,
        }
    );
}

// =============================================================
// Actions
// =============================================================

#[test]
fn actions_carry_the_row_id() {
    let actions = actions(&product());
    assert_eq!(actions.len(), 3);
    assert_eq!(actions[0].intent, ActionIntent::CopyId("p-1".to_owned()));
    assert_eq!(actions[1].intent, ActionIntent::Edit("p-1".to_owned()));
    assert_eq!(actions[2].intent, ActionIntent::Delete("p-1".to_owned()));
}

#[test]
fn only_delete_is_destructive() {
    let actions = actions(&product());
    assert!(!actions[0].destructive);
    assert!(!actions[1].destructive);
    assert!(actions[2].destructive);
}
