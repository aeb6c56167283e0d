//! Infrastructure layer - storage-backed implementations and services

pub mod auth;
pub mod logging;
pub mod order;
pub mod product;
pub mod purchase;
pub mod reporting;
pub mod sale;
pub mod storage;
pub mod user;
