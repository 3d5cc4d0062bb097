//! Small browser utilities.

pub mod clipboard;
