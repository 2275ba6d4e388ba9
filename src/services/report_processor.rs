//! Procesador de reportes
//!
//! Aplana gastos y mantenimientos en una sola lista etiquetada, ordenada por
//! mes, y la filtra por categoría.

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::models::{
    expense::{Expense, ExpenseCategory},
    maintenance::{Maintenance, ServiceType},
    report::{Report, ReportEntry, ReportKind, ReportSummary},
};
use crate::services::date_range::{filter_by_range, month_key, DateRange};
use crate::utils::errors::AppError;

/// Filtro de categoría del reporte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFilter {
    All,
    Kind(ReportKind),
    Expense(ExpenseCategory),
    Service(ServiceType),
    /// `other` existe en ambos conjuntos y aplica a los dos
    Other,
}

impl ReportFilter {
    pub fn matches(&self, entry: &ReportEntry) -> bool {
        match self {
            ReportFilter::All => true,
            ReportFilter::Kind(kind) => entry.kind == *kind,
            ReportFilter::Expense(category) => {
                entry.kind == ReportKind::Expense && entry.category == category.as_str()
            }
            ReportFilter::Service(service) => {
                entry.kind == ReportKind::Maintenance && entry.category == service.as_str()
            }
            ReportFilter::Other => entry.category == "other",
        }
    }
}

impl FromStr for ReportFilter {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        match token {
            "" | "all" => return Ok(ReportFilter::All),
            "expense" | "expenses" => return Ok(ReportFilter::Kind(ReportKind::Expense)),
            "maintenance" | "maintenances" => {
                return Ok(ReportFilter::Kind(ReportKind::Maintenance))
            }
            "other" => return Ok(ReportFilter::Other),
            _ => {}
        }

        if let Ok(category) = token.parse::<ExpenseCategory>() {
            return Ok(ReportFilter::Expense(category));
        }
        if let Ok(service) = token.parse::<ServiceType>() {
            return Ok(ReportFilter::Service(service));
        }
        Err(AppError::BadRequest(format!(
            "Categoría de reporte desconocida: '{}'",
            token
        )))
    }
}

impl From<&Expense> for ReportEntry {
    fn from(expense: &Expense) -> Self {
        Self {
            kind: ReportKind::Expense,
            id: expense.id,
            vehicle_id: expense.vehicle_id,
            date: expense.date,
            month: month_key(expense.date),
            category: expense.category.as_str().to_string(),
            amount: expense.amount,
            description: expense.description.clone(),
        }
    }
}

impl From<&Maintenance> for ReportEntry {
    fn from(maintenance: &Maintenance) -> Self {
        Self {
            kind: ReportKind::Maintenance,
            id: maintenance.id,
            vehicle_id: maintenance.vehicle_id,
            date: maintenance.date,
            month: month_key(maintenance.date),
            category: maintenance.service_type.as_str().to_string(),
            amount: maintenance.cost,
            description: maintenance.observations.clone(),
        }
    }
}

/// Aplanar ambas colecciones y ordenar por mes (luego fecha y tipo)
pub fn flatten(expenses: &[Expense], maintenances: &[Maintenance]) -> Vec<ReportEntry> {
    let mut entries: Vec<ReportEntry> = expenses
        .iter()
        .map(ReportEntry::from)
        .chain(maintenances.iter().map(ReportEntry::from))
        .collect();

    entries.sort_by(|a, b| {
        a.month
            .cmp(&b.month)
            .then(a.date.cmp(&b.date))
            .then(a.kind.cmp(&b.kind))
    });
    entries
}

pub fn summarize(entries: &[ReportEntry]) -> ReportSummary {
    let mut summary = ReportSummary {
        entries: entries.len(),
        ..ReportSummary::default()
    };
    for entry in entries {
        match entry.kind {
            ReportKind::Expense => summary.expenses_total += entry.amount,
            ReportKind::Maintenance => summary.maintenance_total += entry.amount,
        }
    }
    summary.total = summary.expenses_total + summary.maintenance_total;
    summary
}

/// Construir el reporte completo: período, aplanado, orden y filtro
pub fn build_report(
    expenses: Vec<Expense>,
    maintenances: Vec<Maintenance>,
    range: Option<&DateRange>,
    filter: ReportFilter,
) -> Report {
    let expenses = filter_by_range(expenses, range);
    let maintenances = filter_by_range(maintenances, range);

    let entries: Vec<ReportEntry> = flatten(&expenses, &maintenances)
        .into_iter()
        .filter(|entry| filter.matches(entry))
        .collect();

    let summary = summarize(&entries);
    Report { entries, summary }
}

/// Total gastado (gastos + mantenimientos) en el intervalo
pub fn total_spent(expenses: &[Expense], maintenances: &[Maintenance], range: &DateRange) -> Decimal {
    let expenses_total: Decimal = expenses
        .iter()
        .filter(|e| range.contains(e.date))
        .map(|e| e.amount)
        .sum();
    let maintenance_total: Decimal = maintenances
        .iter()
        .filter(|m| range.contains(m.date))
        .map(|m| m.cost)
        .sum();
    expenses_total + maintenance_total
}
