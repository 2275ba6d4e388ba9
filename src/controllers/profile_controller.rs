use crate::dto::api_response::ApiResponse;
use crate::models::user::{UpdateProfileRequest, UserResponse};
use crate::repositories::user_repository::UserRepository;
use crate::services::profile_update::prepare_update;
use crate::utils::errors::AppError;
use bcrypt::{hash, DEFAULT_COST};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

pub struct ProfileController {
    repository: UserRepository,
}

impl ProfileController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: UserRepository::new(pool),
        }
    }

    /// Actualizar perfil: confirmación, reautenticación, email libre y guardado
    pub async fn update(
        &self,
        user_id: Uuid,
        request: UpdateProfileRequest,
    ) -> Result<ApiResponse<UserResponse>, AppError> {
        request.validate()?;

        let current = self
            .repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Usuario no encontrado".to_string()))?;

        let repository = &self.repository;
        let plan = prepare_update(&current, &request, |email| async move {
            repository.email_exists(&email, Some(user_id)).await
        })
        .await?;

        let password_hash = match plan.new_password {
            Some(ref password) => Some(hash(password, DEFAULT_COST)?),
            None => None,
        };

        let updated = self
            .repository
            .update_profile(
                user_id,
                plan.full_name.as_deref(),
                plan.email.as_deref(),
                password_hash.as_deref(),
            )
            .await?;

        log::info!(
            "👤 Perfil actualizado para {} (campos: {})",
            user_id,
            plan.pending_changes().join(", ")
        );

        Ok(ApiResponse::success_with_message(
            UserResponse::from(updated),
            "Perfil actualizado exitosamente",
        ))
    }
}
