use super::*;

// =============================================================
// Envelope + profile
// =============================================================

#[test]
fn profile_envelope_unwraps_data() {
    let json = r#"{"data":{"name":"Ana","email":"a@x.com","avatar":null}}"#;
    let envelope: Envelope<UserProfile> = serde_json::from_str(json).expect("profile envelope");
    assert_eq!(envelope.data.name, "Ana");
    assert_eq!(envelope.data.email, "a@x.com");
    assert!(envelope.data.avatar.is_none());
}

#[test]
fn profile_missing_fields_default_to_empty() {
    let envelope: Envelope<UserProfile> =
        serde_json::from_str(r#"{"data":{}}"#).expect("empty profile");
    assert_eq!(envelope.data, UserProfile::default());
}

#[test]
fn auth_token_envelope_parses() {
    let envelope: Envelope<AuthToken> =
        serde_json::from_str(r#"{"data":{"token":"tok1"}}"#).expect("token envelope");
    assert_eq!(envelope.data.token, "tok1");
}

// =============================================================
// Product status
// =============================================================

#[test]
fn product_status_uses_lowercase_wire_names() {
    assert_eq!(
        serde_json::from_str::<ProductStatus>(r#""ativo""#).expect("ativo"),
        ProductStatus::Ativo
    );
    assert_eq!(
        serde_json::from_str::<ProductStatus>(r#""inativo""#).expect("inativo"),
        ProductStatus::Inativo
    );
    assert_eq!(
        serde_json::from_str::<ProductStatus>(r#""arquivado""#).expect("arquivado"),
        ProductStatus::Arquivado
    );
    assert_eq!(
        serde_json::to_string(&ProductStatus::Ativo).expect("serialize"),
        r#""ativo""#
    );
}

#[test]
fn unknown_product_status_is_rejected() {
    assert!(serde_json::from_str::<ProductStatus>(r#""pendente""#).is_err());
}

#[test]
fn product_parses_from_wire_shape() {
    let json = r#"{
        "id": "p-1",
        "name": "Teclado",
        "category": "Periféricos",
        "price": 199.9,
        "status": "ativo",
        "stock": 12
    }"#;
    let product: Product = serde_json::from_str(json).expect("product");
    assert_eq!(product.name, "Teclado");
    assert_eq!(product.status, ProductStatus::Ativo);
    assert_eq!(product.stock, 12);
}

// =============================================================
// Clients
// =============================================================

#[test]
fn client_parses_with_uuid() {
    let json = r#"{
        "uuid": "0a0f7a52-5f9c-4f4b-93b5-0d7a9a6f8a10",
        "id": 7,
        "name": "Maria",
        "email": "maria@x.com",
        "cpf_cnpj": "123.456.789-00",
        "phone": "(11) 99999-0000",
        "address": "Rua A, 10",
        "status": true,
        "created_at": "2024-05-01"
    }"#;
    let client: Client = serde_json::from_str(json).expect("client");
    assert_eq!(client.id, 7);
    assert!(client.status);
    assert_eq!(
        client.uuid.to_string(),
        "0a0f7a52-5f9c-4f4b-93b5-0d7a9a6f8a10"
    );
}

#[test]
fn category_created_at_is_optional() {
    let category: Category =
        serde_json::from_str(r#"{"id":"c-1","name":"Bebidas"}"#).expect("category");
    assert!(category.created_at.is_none());
}
