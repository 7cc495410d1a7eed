//! Mutable editing state: the furniture store, its history and persistence.

pub mod layout;

pub use layout::{History, LayoutState};
