pub mod auth;
pub mod cache;
pub mod db;
pub mod email;
pub mod handlers;
pub mod models;
pub mod rules;

pub use db::create_pool;
