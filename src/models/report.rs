//! Modelos de reportes
//!
//! Un reporte es la lista unificada de gastos y mantenimientos de un usuario.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    Expense,
    Maintenance,
}

impl ReportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportKind::Expense => "expense",
            ReportKind::Maintenance => "maintenance",
        }
    }
}

/// Fila del reporte
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportEntry {
    pub kind: ReportKind,
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub date: NaiveDate,
    /// Clave del mes, formato `YYYY-MM`
    pub month: String,
    /// Categoría del gasto o tipo de servicio
    pub category: String,
    pub amount: Decimal,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ReportSummary {
    pub entries: usize,
    pub expenses_total: Decimal,
    pub maintenance_total: Decimal,
    pub total: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub entries: Vec<ReportEntry>,
    pub summary: ReportSummary,
}

/// Query de `/api/reports`
#[derive(Debug, Default, Deserialize)]
pub struct ReportQuery {
    pub period: Option<String>,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub category: Option<String>,
    pub vehicle_id: Option<Uuid>,
}
