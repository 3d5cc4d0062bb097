//! Column descriptors, one module per listed entity.
//!
//! Each module exposes `HEADERS`, a `cells` function mapping the entity
//! to one `Cell` per header, and an `actions` function building the row
//! menu. Pages feed these straight into `DataTable`.

pub mod categories;
pub mod clients;
pub mod products;
