use crate::controllers::today;
use crate::models::report::{Report, ReportQuery};
use crate::repositories::{
    expense_repository::ExpenseRepository, maintenance_repository::MaintenanceRepository,
    vehicle_repository::VehicleRepository,
};
use crate::services::date_range::resolve_query;
use crate::services::export_service::{export_filename, report_to_csv};
use crate::services::report_processor::{build_report, ReportFilter};
use crate::utils::errors::AppError;
use sqlx::PgPool;
use std::collections::HashMap;
use uuid::Uuid;

/// Archivo CSV listo para descargar
pub struct CsvExport {
    pub filename: String,
    pub content: Vec<u8>,
}

pub struct ReportController {
    expenses: ExpenseRepository,
    maintenances: MaintenanceRepository,
    vehicles: VehicleRepository,
}

impl ReportController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            expenses: ExpenseRepository::new(pool.clone()),
            maintenances: MaintenanceRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool),
        }
    }

    pub async fn report(&self, user_id: Uuid, query: &ReportQuery) -> Result<Report, AppError> {
        let filter: ReportFilter = query.category.as_deref().unwrap_or("all").parse()?;
        let range = resolve_query(query.period.as_deref(), query.start, query.end, today())?;

        let expenses = self
            .expenses
            .find_by_user(user_id, query.vehicle_id, range.as_ref())
            .await?;
        let maintenances = self
            .maintenances
            .find_by_user(user_id, query.vehicle_id, range.as_ref())
            .await?;

        Ok(build_report(expenses, maintenances, range.as_ref(), filter))
    }

    pub async fn export_csv(&self, user_id: Uuid, query: &ReportQuery) -> Result<CsvExport, AppError> {
        let report = self.report(user_id, query).await?;

        let vehicle_names: HashMap<Uuid, String> = self
            .vehicles
            .find_by_user(user_id)
            .await?
            .into_iter()
            .map(|v| (v.id, v.display_name()))
            .collect();

        let content = report_to_csv(&report, &vehicle_names)?;
        log::info!(
            "📄 Reporte exportado para {}: {} registros",
            user_id,
            report.summary.entries
        );

        Ok(CsvExport {
            filename: export_filename(today()),
            content,
        })
    }
}
