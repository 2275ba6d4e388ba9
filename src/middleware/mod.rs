//! Middleware del sistema
//!
//! Este módulo contiene la autenticación JWT y la configuración de CORS.

pub mod auth;
pub mod cors;

pub use auth::AuthenticatedUser;
pub use cors::cors_layer;
