//! Client table columns: identity, contact data, status badge, creation
//! date.

#[cfg(test)]
#[path = "clients_test.rs"]
mod clients_test;

use crate::components::cells::{ActionIntent, BadgeVariant, Cell, RowAction};
use crate::net::types::Client;

pub const HEADERS: &[&str] = &[
    "ID",
    "Nome",
    "Email",
    "CPF/CNPJ",
    "Telefone",
    "Endereço",
    "Status",
    "Criado em",
];

pub fn cells(client: &Client) -> Vec<Cell> {
    vec![
        Cell::Text(client.id.to_string()),
        Cell::Emphasis(client.name.clone()),
        Cell::Emphasis(client.email.clone()),
        Cell::Emphasis(client.cpf_cnpj.clone()),
        Cell::Emphasis(client.phone.clone()),
        Cell::Emphasis(client.address.clone()),
        status_badge(client.status),
        Cell::Muted(client.created_at.clone()),
    ]
}

pub fn status_badge(active: bool) -> Cell {
    if active {
        Cell::Badge {
            label: "Ativo".to_owned(),
            variant: BadgeVariant::Default,
        }
    } else {
        Cell::Badge {
            label: "Inativo".to_owned(),
            variant: BadgeVariant::Destructive,
        }
    }
}

pub fn actions(client: &Client) -> Vec<RowAction> {
    let uuid = client.uuid.to_string();
    vec![
        RowAction {
            label: "Copiar ID",
            intent: ActionIntent::CopyId(uuid.clone()),
            destructive: false,
        },
        RowAction {
            label: "Editar cliente",
            intent: ActionIntent::Edit(uuid.clone()),
            destructive: false,
        },
        RowAction {
            label: "Excluir cliente",
            intent: ActionIntent::Delete(uuid),
            destructive: true,
        },
    ]
}
