//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle y sus variantes para CRUD operations.
//! Mapea exactamente al schema PostgreSQL con primary key 'id'.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use crate::utils::validation::{validate_license_plate, validate_vehicle_year_field};

/// Vehicle principal - mapea exactamente a la tabla vehicles
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    pub id: Uuid,
    pub user_id: Uuid,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub mileage: i32,
    pub license_plate: String,
    pub created_at: DateTime<Utc>,
}

/// Request para crear un nuevo vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    #[validate(length(min = 2, max = 100))]
    pub brand: String,

    #[validate(length(min = 1, max = 100))]
    pub model: String,

    #[validate(custom = "validate_vehicle_year_field")]
    pub year: i32,

    #[validate(range(min = 0))]
    #[serde(default)]
    pub mileage: i32,

    #[validate(custom = "validate_license_plate")]
    pub license_plate: String,
}

/// Request para actualizar un vehículo existente
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateVehicleRequest {
    #[validate(length(min = 2, max = 100))]
    pub brand: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub model: Option<String>,

    #[validate(custom = "validate_vehicle_year_field")]
    pub year: Option<i32>,

    #[validate(range(min = 0))]
    pub mileage: Option<i32>,

    #[validate(custom = "validate_license_plate")]
    pub license_plate: Option<String>,
}

/// Response de vehículo para la API
#[derive(Debug, Serialize, Deserialize)]
pub struct VehicleResponse {
    pub id: Uuid,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub mileage: i32,
    pub license_plate: String,
    pub created_at: DateTime<Utc>,
}

impl Vehicle {
    /// Nombre corto para listados y reportes, p. ej. "Fiat Uno (ABC1D23)"
    pub fn display_name(&self) -> String {
        format!("{} {} ({})", self.brand, self.model, self.license_plate)
    }
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            brand: vehicle.brand,
            model: vehicle.model,
            year: vehicle.year,
            mileage: vehicle.mileage,
            license_plate: vehicle.license_plate,
            created_at: vehicle.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CreateVehicleRequest {
        CreateVehicleRequest {
            brand: "Fiat".to_string(),
            model: "Uno".to_string(),
            year: 2012,
            mileage: 85_000,
            license_plate: "ABC-1D23".to_string(),
        }
    }

    #[test]
    fn test_valid_vehicle_request() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn test_invalid_vehicle_request() {
        let mut req = request();
        req.year = 1850;
        req.mileage = -10;
        req.license_plate = "X".to_string();

        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("year"));
        assert!(fields.contains_key("mileage"));
        assert!(fields.contains_key("license_plate"));
    }

    #[test]
    fn test_update_request_skips_missing_fields() {
        let req = UpdateVehicleRequest {
            brand: None,
            model: None,
            year: None,
            mileage: Some(90_000),
            license_plate: None,
        };
        assert!(req.validate().is_ok());
    }
}
