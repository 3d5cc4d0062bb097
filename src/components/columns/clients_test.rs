use uuid::Uuid;

use super::*;
use crate::components::cells::{ActionIntent, BadgeVariant, Cell};

fn client(active: bool) -> Client {
    Client {
        uuid: Uuid::nil(),
        id: 7,
        name: "Maria".to_owned(),
        email: "maria@x.com".to_owned(),
        cpf_cnpj: "123.456.789-00".to_owned(),
        phone: "(11) 99999-0000".to_owned(),
        address: "Rua A, 10".to_owned(),
        status: active,
        created_at: "2024-05-01".to_owned(),
    }
}

#[test]
fn one_cell_per_header() {
    assert_eq!(cells(&client(true)).len(), HEADERS.len());
}

#[test]
fn status_badge_follows_the_flag() {
    assert_eq!(
        status_badge(true),
        Cell::Badge {
            label: "Ativo".to_owned(),
            variant: BadgeVariant::Default,
        }
    );
    assert_eq!(
        status_badge(false),
        Cell::Badge {
            label: "Inativo".to_owned(),
            variant: BadgeVariant::Destructive,
        }
    );
}

#[test]
fn created_at_is_muted() {
    let cells = cells(&client(true));
    assert_eq!(cells[7], Cell::Muted("2024-05-01".to_owned()));
}

#[test]
fn actions_carry_the_client_uuid() {
    let actions = actions(&client(true));
    let uuid = Uuid::nil().to_string();
    assert_eq!(actions[0].intent, ActionIntent::CopyId(uuid.clone()));
    assert_eq!(actions[2].intent, ActionIntent::Delete(uuid));
    assert!(actions[2].destructive);
}
