//! Domain types for users

pub mod entities;
