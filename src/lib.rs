pub mod api;
pub mod cart;
pub mod catalog;
pub mod client;
pub mod config;
pub mod models;
pub mod render;
