//! API layer - HTTP surface of the inventory backend

pub mod auth;
pub mod health;
pub mod middleware;
pub mod router;
pub mod routes;
pub mod state;
pub mod types;

pub use router::create_router;
pub use state::AppState;
