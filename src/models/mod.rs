//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos que mapean exactamente
//! al schema PostgreSQL, más los tipos derivados (series y reportes).

pub mod analytics;
pub mod expense;
pub mod maintenance;
pub mod notification;
pub mod report;
pub mod spending_limit;
pub mod user;
pub mod vehicle;
