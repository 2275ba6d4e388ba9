//! Flujo de actualización de perfil
//!
//! Primero se calcula qué cambia (plan), después se exige confirmación
//! explícita y, si cambian email o contraseña, se reautentica al usuario
//! con su contraseña actual antes de guardar.

use std::future::Future;

use crate::models::user::{UpdateProfileRequest, User, MIN_PASSWORD_LENGTH};
use crate::utils::errors::{validation_error, AppError, AppResult};
use crate::utils::validation::normalize_email;

/// Cambios efectivos sobre el perfil actual
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileUpdatePlan {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub new_password: Option<String>,
}

impl ProfileUpdatePlan {
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none() && self.email.is_none() && self.new_password.is_none()
    }

    /// Email y contraseña son campos sensibles
    pub fn requires_reauthentication(&self) -> bool {
        self.email.is_some() || self.new_password.is_some()
    }

    /// Nombres de los campos que se van a modificar
    pub fn pending_changes(&self) -> Vec<String> {
        let mut fields = Vec::new();
        if self.full_name.is_some() {
            fields.push("full_name".to_string());
        }
        if self.email.is_some() {
            fields.push("email".to_string());
        }
        if self.new_password.is_some() {
            fields.push("password".to_string());
        }
        fields
    }
}

/// Calcular el plan comparando la request con el perfil actual
pub fn plan_update(current: &User, request: &UpdateProfileRequest) -> AppResult<ProfileUpdatePlan> {
    let mut plan = ProfileUpdatePlan::default();

    if let Some(name) = request.full_name.as_deref().map(str::trim) {
        if name.is_empty() {
            return Err(validation_error("full_name", "El nombre no puede estar vacío"));
        }
        if name != current.full_name {
            plan.full_name = Some(name.to_string());
        }
    }

    if let Some(email) = request.email.as_deref().map(normalize_email) {
        if email != normalize_email(&current.email) {
            plan.email = Some(email);
        }
    }

    if let Some(password) = request.new_password.as_deref().filter(|p| !p.is_empty()) {
        if (password.chars().count() as u64) < MIN_PASSWORD_LENGTH {
            return Err(validation_error(
                "new_password",
                "La contraseña debe tener al menos 6 caracteres",
            ));
        }
        if request.confirm_password.as_deref() != Some(password) {
            return Err(validation_error(
                "confirm_password",
                "La confirmación no coincide con la nueva contraseña",
            ));
        }
        plan.new_password = Some(password.to_string());
    }

    if plan.is_empty() {
        return Err(AppError::BadRequest("No hay cambios para guardar".to_string()));
    }

    Ok(plan)
}

/// Paso 1: el usuario debe haber confirmado explícitamente los cambios
pub fn require_confirmation(plan: &ProfileUpdatePlan, confirmed: bool) -> AppResult<()> {
    if confirmed {
        return Ok(());
    }
    Err(AppError::ConfirmationRequired {
        message: "Confirme los cambios del perfil para continuar".to_string(),
        pending_changes: plan.pending_changes(),
    })
}

/// Paso 2: reautenticación con la contraseña actual si el plan es sensible
pub fn reauthenticate(
    plan: &ProfileUpdatePlan,
    current_password: Option<&str>,
    password_hash: &str,
) -> AppResult<()> {
    if !plan.requires_reauthentication() {
        return Ok(());
    }

    let password = current_password
        .filter(|p| !p.is_empty())
        .ok_or_else(|| {
            AppError::Unauthorized(
                "Se requiere la contraseña actual para cambiar email o contraseña".to_string(),
            )
        })?;

    if !bcrypt::verify(password, password_hash)? {
        return Err(AppError::Unauthorized("Contraseña actual incorrecta".to_string()));
    }
    Ok(())
}

/// Ejecutar los pasos en orden: plan, confirmación (428), reautenticación
/// (401) y disponibilidad del nuevo email (409). `email_taken` solo se
/// consulta si el email cambia.
pub async fn prepare_update<F, Fut>(
    current: &User,
    request: &UpdateProfileRequest,
    email_taken: F,
) -> AppResult<ProfileUpdatePlan>
where
    F: FnOnce(String) -> Fut,
    Fut: Future<Output = AppResult<bool>>,
{
    let plan = plan_update(current, request)?;
    require_confirmation(&plan, request.confirmed)?;
    reauthenticate(&plan, request.current_password.as_deref(), &current.password_hash)?;

    if let Some(email) = &plan.email {
        if email_taken(email.clone()).await? {
            return Err(AppError::Conflict("El email ya está registrado".to_string()));
        }
    }

    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;
    use validator::Validate;

    // Coste mínimo de bcrypt para que los tests sean rápidos
    const TEST_COST: u32 = 4;

    fn user_with_password(password: &str) -> User {
        User {
            id: Uuid::new_v4(),
            full_name: "Ana Souza".to_string(),
            email: "ana@example.com".to_string(),
            password_hash: bcrypt::hash(password, TEST_COST).unwrap(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn user() -> User {
        User {
            password_hash: String::new(),
            ..user_with_password("x")
        }
    }

    #[test]
    fn test_name_change_is_not_sensitive() {
        let request = UpdateProfileRequest {
            full_name: Some("  Ana Maria Souza ".to_string()),
            ..Default::default()
        };
        let plan = plan_update(&user(), &request).unwrap();
        assert_eq!(plan.full_name.as_deref(), Some("Ana Maria Souza"));
        assert!(!plan.requires_reauthentication());
        assert_eq!(plan.pending_changes(), vec!["full_name"]);
    }

    #[test]
    fn test_unchanged_values_yield_no_changes() {
        let request = UpdateProfileRequest {
            full_name: Some("Ana Souza".to_string()),
            email: Some("ANA@example.com ".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            plan_update(&user(), &request),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn test_email_change_requires_reauth() {
        let request = UpdateProfileRequest {
            email: Some("nueva@example.com".to_string()),
            ..Default::default()
        };
        let plan = plan_update(&user(), &request).unwrap();
        assert_eq!(plan.email.as_deref(), Some("nueva@example.com"));
        assert!(plan.requires_reauthentication());
    }

    #[test]
    fn test_password_confirmation_must_match() {
        let request = UpdateProfileRequest {
            new_password: Some("nueva-clave".to_string()),
            confirm_password: Some("otra-clave".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            plan_update(&user(), &request),
            Err(AppError::Validation(_))
        ));

        let request = UpdateProfileRequest {
            new_password: Some("123".to_string()),
            confirm_password: Some("123".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            plan_update(&user(), &request),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_confirmation_step() {
        let plan = ProfileUpdatePlan {
            email: Some("nueva@example.com".to_string()),
            ..Default::default()
        };
        match require_confirmation(&plan, false) {
            Err(AppError::ConfirmationRequired { pending_changes, .. }) => {
                assert_eq!(pending_changes, vec!["email"]);
            }
            other => panic!("se esperaba ConfirmationRequired, obtuvo {:?}", other),
        }
        assert!(require_confirmation(&plan, true).is_ok());
    }

    #[test]
    fn test_reauthentication_step() {
        let current = user_with_password("clave-actual");
        let plan = ProfileUpdatePlan {
            new_password: Some("clave-nueva".to_string()),
            ..Default::default()
        };

        assert!(reauthenticate(&plan, Some("clave-actual"), &current.password_hash).is_ok());
        assert!(matches!(
            reauthenticate(&plan, Some("incorrecta"), &current.password_hash),
            Err(AppError::Unauthorized(_))
        ));
        assert!(matches!(
            reauthenticate(&plan, None, &current.password_hash),
            Err(AppError::Unauthorized(_))
        ));
    }

    #[test]
    fn test_name_only_skips_reauthentication() {
        let plan = ProfileUpdatePlan {
            full_name: Some("Otro".to_string()),
            ..Default::default()
        };
        assert!(reauthenticate(&plan, None, "no-es-un-hash").is_ok());
    }

    #[test]
    fn test_blank_new_password_means_unchanged() {
        let request = UpdateProfileRequest {
            full_name: Some("Ana Maria Souza".to_string()),
            new_password: Some(String::new()),
            confirm_password: Some(String::new()),
            ..Default::default()
        };
        assert!(request.validate().is_ok());

        let plan = plan_update(&user(), &request).unwrap();
        assert_eq!(plan.new_password, None);
        assert!(!plan.requires_reauthentication());
    }

    fn email_change(confirmed: bool, current_password: &str) -> UpdateProfileRequest {
        UpdateProfileRequest {
            email: Some("nueva@example.com".to_string()),
            current_password: Some(current_password.to_string()),
            confirmed,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_steps_run_in_order() {
        let current = user_with_password("clave-actual");
        let taken = |_: String| async { Ok::<bool, AppError>(true) };

        // Sin confirmar: 428 aunque la contraseña sea incorrecta
        let err = prepare_update(&current, &email_change(false, "incorrecta"), taken)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ConfirmationRequired { .. }));

        // Confirmado con contraseña incorrecta: 401 antes de mirar el email
        let err = prepare_update(&current, &email_change(true, "incorrecta"), taken)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));

        // Confirmado y reautenticado, email en uso: 409
        let err = prepare_update(&current, &email_change(true, "clave-actual"), taken)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));

        let plan = prepare_update(&current, &email_change(true, "clave-actual"), |email| async move {
            assert_eq!(email, "nueva@example.com");
            Ok::<bool, AppError>(false)
        })
        .await
        .unwrap();
        assert_eq!(plan.email.as_deref(), Some("nueva@example.com"));
    }

    #[tokio::test]
    async fn test_email_lookup_skipped_without_email_change() {
        let request = UpdateProfileRequest {
            full_name: Some("Otra".to_string()),
            confirmed: true,
            ..Default::default()
        };
        let plan = prepare_update(&user(), &request, |_| async { Ok::<bool, AppError>(true) })
            .await
            .unwrap();
        assert_eq!(plan.full_name.as_deref(), Some("Otra"));
    }
}
