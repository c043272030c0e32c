pub mod favorites;
pub mod menu;
