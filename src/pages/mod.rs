//! Top-level route views.

pub mod categories;
pub mod clients;
pub mod home;
pub mod login;
pub mod products;
pub mod register;
