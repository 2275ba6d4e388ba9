use crate::dto::api_response::ApiResponse;
use crate::dto::auth_dto::{LoginRequest, LoginResponse};
use crate::models::user::{CreateUserRequest, UserResponse};
use crate::repositories::user_repository::UserRepository;
use crate::utils::errors::AppError;
use crate::utils::jwt::{generate_token, JwtConfig};
use crate::utils::validation::normalize_email;
use bcrypt::{hash, verify, DEFAULT_COST};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

pub struct AuthController {
    repository: UserRepository,
}

impl AuthController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: UserRepository::new(pool),
        }
    }

    pub async fn register(&self, request: CreateUserRequest) -> Result<ApiResponse<UserResponse>, AppError> {
        request.validate()?;

        let email = normalize_email(&request.email);

        // Verificar que el email no exista
        if self.repository.email_exists(&email, None).await? {
            return Err(AppError::Conflict("El email ya está registrado".to_string()));
        }

        // Hash de la contraseña
        let password_hash = hash(&request.password, DEFAULT_COST)?;

        let user = self
            .repository
            .create(request.full_name.trim(), &email, &password_hash)
            .await?;

        log::info!("👤 Usuario registrado: {}", user.id);

        Ok(ApiResponse::success_with_message(
            UserResponse::from(user),
            "Usuario registrado exitosamente",
        ))
    }

    pub async fn login(&self, request: LoginRequest, jwt: &JwtConfig) -> Result<LoginResponse, AppError> {
        request.validate()?;

        // Buscar usuario por email
        let user = self
            .repository
            .find_by_email(&normalize_email(&request.email))
            .await?
            .ok_or_else(|| AppError::Unauthorized("Credenciales inválidas".to_string()))?;

        // Verificar contraseña
        if !verify(&request.password, &user.password_hash)? {
            log::warn!("🔒 Contraseña incorrecta para usuario {}", user.id);
            return Err(AppError::Unauthorized("Credenciales inválidas".to_string()));
        }

        let token = generate_token(user.id, &user.email, jwt)?;

        log::info!("🔑 Login exitoso: {}", user.id);
        Ok(LoginResponse::bearer(token, jwt.expiration, UserResponse::from(user)))
    }

    pub async fn me(&self, user_id: Uuid) -> Result<UserResponse, AppError> {
        let user = self
            .repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Usuario no encontrado".to_string()))?;

        Ok(UserResponse::from(user))
    }
}
