//! Order domain: reorder requests toward suppliers

pub mod entity;
pub mod repository;

pub use entity::{NewOrder, Order, OrderStatus};
pub use repository::OrderRepository;
