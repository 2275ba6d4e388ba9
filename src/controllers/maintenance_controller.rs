use crate::controllers::{ensure_owner, today};
use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::api_response::ApiResponse;
use crate::models::expense::RecordFilters;
use crate::models::maintenance::{CreateMaintenanceRequest, Maintenance, UpdateMaintenanceRequest};
use crate::repositories::maintenance_repository::{new_maintenance, MaintenanceRepository};
use crate::services::date_range::resolve_query;
use crate::utils::errors::AppError;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

pub struct MaintenanceController {
    repository: MaintenanceRepository,
    vehicles: VehicleController,
}

impl MaintenanceController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: MaintenanceRepository::new(pool.clone()),
            vehicles: VehicleController::new(pool),
        }
    }

    async fn find_owned(&self, id: Uuid, user_id: Uuid) -> Result<Maintenance, AppError> {
        let maintenance = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Mantenimiento no encontrado".to_string()))?;

        ensure_owner(maintenance.user_id, user_id, "este mantenimiento")?;
        Ok(maintenance)
    }

    pub async fn create(
        &self,
        user_id: Uuid,
        request: CreateMaintenanceRequest,
    ) -> Result<ApiResponse<Maintenance>, AppError> {
        request.validate()?;

        // El vehículo debe pertenecer al mismo usuario
        self.vehicles.find_owned(request.vehicle_id, user_id).await?;

        let maintenance = self.repository.create(&new_maintenance(user_id, request)).await?;

        log::info!(
            "🔧 Mantenimiento registrado: {} ({} {})",
            maintenance.id,
            maintenance.service_type,
            maintenance.cost
        );

        Ok(ApiResponse::success_with_message(maintenance, "Mantenimiento registrado exitosamente"))
    }

    pub async fn get_by_id(&self, id: Uuid, user_id: Uuid) -> Result<Maintenance, AppError> {
        self.find_owned(id, user_id).await
    }

    pub async fn list(&self, user_id: Uuid, filters: RecordFilters) -> Result<Vec<Maintenance>, AppError> {
        let range = resolve_query(filters.period.as_deref(), filters.start, filters.end, today())?;
        self.repository
            .find_by_user(user_id, filters.vehicle_id, range.as_ref())
            .await
    }

    pub async fn update(
        &self,
        id: Uuid,
        user_id: Uuid,
        request: UpdateMaintenanceRequest,
    ) -> Result<ApiResponse<Maintenance>, AppError> {
        request.validate()?;

        let mut maintenance = self.find_owned(id, user_id).await?;

        if let Some(vehicle_id) = request.vehicle_id {
            self.vehicles.find_owned(vehicle_id, user_id).await?;
            maintenance.vehicle_id = vehicle_id;
        }
        if let Some(date) = request.date {
            maintenance.date = date;
        }
        if let Some(service_type) = request.service_type {
            maintenance.service_type = service_type;
        }
        if let Some(cost) = request.cost {
            maintenance.cost = cost;
        }
        if request.observations.is_some() {
            maintenance.observations = request.observations;
        }

        let updated = self.repository.update(&maintenance).await?;
        Ok(ApiResponse::success_with_message(updated, "Mantenimiento actualizado exitosamente"))
    }

    pub async fn delete(&self, id: Uuid, user_id: Uuid) -> Result<(), AppError> {
        self.find_owned(id, user_id).await?;
        self.repository.delete(id).await
    }
}
