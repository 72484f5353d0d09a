//! Domain Entities

pub mod credential;
pub mod federated_identity;
pub mod session;
pub mod user;
