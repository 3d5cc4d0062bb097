//! Reusable UI building blocks.
//!
//! DESIGN
//! ======
//! Table content is described, not rendered, by the `cells` and `columns`
//! modules: pure functions map a domain entity to `Cell` values and
//! `RowAction`s with no knowledge of the UI toolkit. `DataTable` is the
//! single place that turns those descriptions into markup.

pub mod cells;
pub mod columns;
pub mod data_table;
pub mod nav;
