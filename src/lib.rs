//! Vehicle Manager API
//!
//! Backend para gestionar vehículos, gastos, mantenimientos, límites de
//! gasto mensual, recordatorios y reportes.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
