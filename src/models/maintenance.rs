//! Modelo de Maintenance
//!
//! Servicios de mantenimiento realizados a un vehículo, con su costo.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;
use validator::Validate;

use crate::utils::validation::validate_non_negative_amount;

/// Tipo de servicio - mapea al ENUM service_type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq, Hash)]
#[sqlx(type_name = "service_type", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ServiceType {
    OilChange,
    Tires,
    Brakes,
    Alignment,
    Inspection,
    Battery,
    Electrical,
    Other,
}

impl ServiceType {
    pub const ALL: [ServiceType; 8] = [
        ServiceType::OilChange,
        ServiceType::Tires,
        ServiceType::Brakes,
        ServiceType::Alignment,
        ServiceType::Inspection,
        ServiceType::Battery,
        ServiceType::Electrical,
        ServiceType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceType::OilChange => "oil_change",
            ServiceType::Tires => "tires",
            ServiceType::Brakes => "brakes",
            ServiceType::Alignment => "alignment",
            ServiceType::Inspection => "inspection",
            ServiceType::Battery => "battery",
            ServiceType::Electrical => "electrical",
            ServiceType::Other => "other",
        }
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("Tipo de servicio desconocido: '{}'", s))
    }
}

/// Maintenance - mapea exactamente a la tabla maintenances
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Maintenance {
    pub id: Uuid,
    pub user_id: Uuid,
    pub vehicle_id: Uuid,
    pub date: NaiveDate,
    pub service_type: ServiceType,
    pub cost: Decimal,
    pub observations: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Request para registrar un mantenimiento
#[derive(Debug, Deserialize, Validate)]
pub struct CreateMaintenanceRequest {
    pub vehicle_id: Uuid,
    pub date: NaiveDate,
    pub service_type: ServiceType,

    #[validate(custom = "validate_non_negative_amount")]
    pub cost: Decimal,

    #[validate(length(max = 1000))]
    pub observations: Option<String>,
}

/// Request para actualizar un mantenimiento
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateMaintenanceRequest {
    pub vehicle_id: Option<Uuid>,
    pub date: Option<NaiveDate>,
    pub service_type: Option<ServiceType>,

    #[validate(custom = "validate_non_negative_amount")]
    pub cost: Option<Decimal>,

    #[validate(length(max = 1000))]
    pub observations: Option<String>,
}
