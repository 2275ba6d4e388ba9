//! Modelos de Analytics
//!
//! Series mensuales para los gráficos del dashboard.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Un mes de la serie de gastos
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlyBucket {
    /// Clave del mes, formato `YYYY-MM`
    pub month: String,
    /// Etiqueta corta para el eje X, p. ej. `Mar 2024`
    pub label: String,
    pub expenses_total: Decimal,
    pub maintenance_total: Decimal,
    pub total: Decimal,
}

/// Serie completa devuelta por `/api/dashboard/monthly`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlySeries {
    pub months: Vec<MonthlyBucket>,
    pub expenses_total: Decimal,
    pub maintenance_total: Decimal,
    pub total: Decimal,
}

impl From<Vec<MonthlyBucket>> for MonthlySeries {
    fn from(months: Vec<MonthlyBucket>) -> Self {
        let expenses_total = months.iter().map(|m| m.expenses_total).sum();
        let maintenance_total = months.iter().map(|m| m.maintenance_total).sum();
        let total = months.iter().map(|m| m.total).sum();
        Self {
            months,
            expenses_total,
            maintenance_total,
            total,
        }
    }
}
