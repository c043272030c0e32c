//! End-to-end API tests
//!
//! Drives the fully composed router over in-memory stores.

#![allow(dead_code)]

mod auth;
mod common;
mod menu;
mod users;
