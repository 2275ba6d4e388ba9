//! Modelo de Expense
//!
//! Gastos fechados asociados a un vehículo. La categoría es un conjunto
//! cerrado que mapea al ENUM expense_category.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;
use validator::Validate;

use crate::utils::validation::validate_positive_amount;

/// Categoría del gasto - mapea al ENUM expense_category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq, Hash)]
#[sqlx(type_name = "expense_category", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ExpenseCategory {
    Fuel,
    Parts,
    Services,
    Taxes,
    Other,
}

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 5] = [
        ExpenseCategory::Fuel,
        ExpenseCategory::Parts,
        ExpenseCategory::Services,
        ExpenseCategory::Taxes,
        ExpenseCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExpenseCategory::Fuel => "fuel",
            ExpenseCategory::Parts => "parts",
            ExpenseCategory::Services => "services",
            ExpenseCategory::Taxes => "taxes",
            ExpenseCategory::Other => "other",
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExpenseCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("Categoría de gasto desconocida: '{}'", s))
    }
}

/// Expense - mapea exactamente a la tabla expenses
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Expense {
    pub id: Uuid,
    pub user_id: Uuid,
    pub vehicle_id: Uuid,
    pub date: NaiveDate,
    pub category: ExpenseCategory,
    pub amount: Decimal,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Request para registrar un gasto
#[derive(Debug, Deserialize, Validate)]
pub struct CreateExpenseRequest {
    pub vehicle_id: Uuid,
    pub date: NaiveDate,
    pub category: ExpenseCategory,

    #[validate(custom = "validate_positive_amount")]
    pub amount: Decimal,

    #[validate(length(max = 500))]
    pub description: Option<String>,
}

/// Request para actualizar un gasto
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateExpenseRequest {
    pub vehicle_id: Option<Uuid>,
    pub date: Option<NaiveDate>,
    pub category: Option<ExpenseCategory>,

    #[validate(custom = "validate_positive_amount")]
    pub amount: Option<Decimal>,

    #[validate(length(max = 500))]
    pub description: Option<String>,
}

/// Filtros de listado: vehículo y período (`period`, `start`, `end`)
#[derive(Debug, Default, Deserialize)]
pub struct RecordFilters {
    pub vehicle_id: Option<Uuid>,
    pub period: Option<String>,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_str() {
        assert_eq!("fuel".parse::<ExpenseCategory>().unwrap(), ExpenseCategory::Fuel);
        assert_eq!("taxes".parse::<ExpenseCategory>().unwrap(), ExpenseCategory::Taxes);
        assert!("gasolina".parse::<ExpenseCategory>().is_err());
    }

    #[test]
    fn test_category_serde_matches_as_str() {
        for category in ExpenseCategory::ALL {
            let json = serde_json::to_value(category).unwrap();
            assert_eq!(json, category.as_str());
        }
    }

    #[test]
    fn test_amount_must_be_positive() {
        let request = CreateExpenseRequest {
            vehicle_id: Uuid::new_v4(),
            date: NaiveDate::from_ymd_opt(2024, 5, 10).unwrap(),
            category: ExpenseCategory::Fuel,
            amount: Decimal::ZERO,
            description: None,
        };
        assert!(request.validate().is_err());
    }
}
