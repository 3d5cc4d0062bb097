//! Wire types shared with the backend API.
//!
//! Responses arrive wrapped in an envelope: the payload sits under a
//! `data` key. Field names and status values mirror the backend exactly,
//! including the Portuguese product status labels.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Response envelope: every payload sits under `data`.
#[derive(Clone, Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

/// The authenticated user's profile as returned by `GET /me`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// Token issued by a successful login or registration.
#[derive(Clone, Debug, Deserialize)]
pub struct AuthToken {
    pub token: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    Ativo,
    Inativo,
    Arquivado,
}

impl ProductStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Ativo => "ativo",
            Self::Inativo => "inativo",
            Self::Arquivado => "arquivado",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub status: ProductStatus,
    pub stock: i64,
}

/// Payload for creating a product; the backend assigns the id.
#[derive(Clone, Debug, Serialize)]
pub struct NewProduct {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub stock: i64,
    pub status: ProductStatus,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct NewCategory {
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Client {
    pub uuid: Uuid,
    pub id: i64,
    pub name: String,
    pub email: String,
    pub cpf_cnpj: String,
    pub phone: String,
    pub address: String,
    pub status: bool,
    pub created_at: String,
}
