//! Seams between the session manager and its collaborators.

mod auth_api;
mod token_store;

pub use auth_api::AuthApi;
pub use token_store::TokenStore;
