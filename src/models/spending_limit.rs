//! Modelo de SpendingLimit
//!
//! Límite mensual de gastos por usuario y su estado en el mes en curso.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use crate::utils::validation::validate_positive_amount;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SpendingLimit {
    pub user_id: Uuid,
    pub monthly_limit: Decimal,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct SetSpendingLimitRequest {
    #[validate(custom = "validate_positive_amount")]
    pub monthly_limit: Decimal,
}

/// Estado del gasto del mes frente al límite configurado
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpendingLimitStatus {
    /// Mes evaluado, formato `YYYY-MM`
    pub month: String,
    pub monthly_limit: Option<Decimal>,
    pub spent: Decimal,
    pub remaining: Option<Decimal>,
    /// Porcentaje del límite consumido, con dos decimales
    pub percentage: Option<Decimal>,
    pub exceeded: bool,
}
