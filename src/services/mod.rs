//! Services module
//!
//! Este módulo contiene la lógica de negocio de la aplicación. Los
//! servicios son funciones puras sobre los modelos; el acceso a la base
//! de datos queda en repositories y controllers.

pub mod date_range;
pub mod export_service;
pub mod monthly_aggregator;
pub mod profile_update;
pub mod reminder_job;
pub mod report_processor;
pub mod spending_limit;
