use crate::controllers::ensure_owner;
use crate::dto::api_response::ApiResponse;
use crate::models::vehicle::{CreateVehicleRequest, UpdateVehicleRequest, Vehicle, VehicleResponse};
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::AppError;
use crate::utils::validation::normalize_license_plate;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

pub struct VehicleController {
    repository: VehicleRepository,
}

impl VehicleController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: VehicleRepository::new(pool),
        }
    }

    /// Obtener un vehículo verificando que pertenece al usuario
    pub async fn find_owned(&self, id: Uuid, user_id: Uuid) -> Result<Vehicle, AppError> {
        let vehicle = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        ensure_owner(vehicle.user_id, user_id, "este vehículo")?;
        Ok(vehicle)
    }

    pub async fn create(
        &self,
        user_id: Uuid,
        request: CreateVehicleRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        request.validate()?;

        let license_plate = normalize_license_plate(&request.license_plate);

        // Verificar que la matrícula no exista para este usuario
        if self
            .repository
            .license_plate_exists(&license_plate, user_id, None)
            .await?
        {
            return Err(AppError::Conflict("La matrícula ya está registrada".to_string()));
        }

        let vehicle = self
            .repository
            .create(
                user_id,
                request.brand.trim().to_string(),
                request.model.trim().to_string(),
                request.year,
                request.mileage,
                license_plate,
            )
            .await?;

        log::info!("🚗 Vehículo creado: {} para usuario {}", vehicle.id, user_id);

        Ok(ApiResponse::success_with_message(
            VehicleResponse::from(vehicle),
            "Vehículo creado exitosamente",
        ))
    }

    pub async fn get_by_id(&self, id: Uuid, user_id: Uuid) -> Result<VehicleResponse, AppError> {
        let vehicle = self.find_owned(id, user_id).await?;
        Ok(VehicleResponse::from(vehicle))
    }

    pub async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<VehicleResponse>, AppError> {
        let vehicles = self.repository.find_by_user(user_id).await?;
        Ok(vehicles.into_iter().map(VehicleResponse::from).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        user_id: Uuid,
        request: UpdateVehicleRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        request.validate()?;

        let mut vehicle = self.find_owned(id, user_id).await?;

        if let Some(plate) = request.license_plate {
            let plate = normalize_license_plate(&plate);
            if plate != vehicle.license_plate
                && self
                    .repository
                    .license_plate_exists(&plate, user_id, Some(id))
                    .await?
            {
                return Err(AppError::Conflict("La matrícula ya está registrada".to_string()));
            }
            vehicle.license_plate = plate;
        }
        if let Some(brand) = request.brand {
            vehicle.brand = brand.trim().to_string();
        }
        if let Some(model) = request.model {
            vehicle.model = model.trim().to_string();
        }
        if let Some(year) = request.year {
            vehicle.year = year;
        }
        if let Some(mileage) = request.mileage {
            vehicle.mileage = mileage;
        }

        let updated = self.repository.update(&vehicle).await?;

        Ok(ApiResponse::success_with_message(
            VehicleResponse::from(updated),
            "Vehículo actualizado exitosamente",
        ))
    }

    /// Elimina el vehículo junto con sus gastos y mantenimientos (cascade)
    pub async fn delete(&self, id: Uuid, user_id: Uuid) -> Result<(), AppError> {
        self.find_owned(id, user_id).await?;
        self.repository.delete(id).await?;
        log::info!("🗑️ Vehículo eliminado: {}", id);
        Ok(())
    }
}
