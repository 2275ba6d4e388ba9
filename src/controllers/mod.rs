pub mod auth_controller;
pub mod dashboard_controller;
pub mod expense_controller;
pub mod maintenance_controller;
pub mod notification_controller;
pub mod profile_controller;
pub mod report_controller;
pub mod vehicle_controller;

use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::utils::errors::AppError;

/// Verificar que el recurso pertenece al usuario autenticado
pub fn ensure_owner(owner_id: Uuid, user_id: Uuid, resource: &str) -> Result<(), AppError> {
    if owner_id != user_id {
        return Err(AppError::Forbidden(format!(
            "No tienes permisos para acceder a {}",
            resource
        )));
    }
    Ok(())
}

/// Fecha de referencia de los cálculos (UTC)
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_owner() {
        let owner = Uuid::new_v4();
        assert!(ensure_owner(owner, owner, "este vehículo").is_ok());
        assert!(matches!(
            ensure_owner(owner, Uuid::new_v4(), "este vehículo"),
            Err(AppError::Forbidden(_))
        ));
    }
}
