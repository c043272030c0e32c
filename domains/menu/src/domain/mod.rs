//! Domain types for the menu

pub mod entities;
