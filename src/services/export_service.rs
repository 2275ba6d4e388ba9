//! Exportación de reportes a CSV

use csv::Writer;
use std::collections::HashMap;
use uuid::Uuid;

use crate::models::report::Report;
use crate::utils::errors::{AppError, AppResult};

const CSV_HEADER: [&str; 7] = [
    "Tipo",
    "Fecha",
    "Mes",
    "Vehículo",
    "Categoría",
    "Monto",
    "Descripción",
];

/// Escribir el reporte en CSV. `vehicle_names` traduce ids a nombres legibles;
/// si falta un vehículo se escribe su id.
pub fn report_to_csv(report: &Report, vehicle_names: &HashMap<Uuid, String>) -> AppResult<Vec<u8>> {
    let mut wtr = Writer::from_writer(Vec::new());

    wtr.write_record(CSV_HEADER).map_err(csv_error)?;

    for entry in &report.entries {
        let vehicle = vehicle_names
            .get(&entry.vehicle_id)
            .cloned()
            .unwrap_or_else(|| entry.vehicle_id.to_string());

        wtr.write_record([
            entry.kind.as_str().to_string(),
            entry.date.format("%Y-%m-%d").to_string(),
            entry.month.clone(),
            vehicle,
            entry.category.clone(),
            entry.amount.round_dp(2).to_string(),
            entry.description.clone().unwrap_or_default(),
        ])
        .map_err(csv_error)?;
    }

    // Fila de totales
    wtr.write_record([
        "total".to_string(),
        String::new(),
        String::new(),
        String::new(),
        String::new(),
        report.summary.total.round_dp(2).to_string(),
        format!("{} registros", report.summary.entries),
    ])
    .map_err(csv_error)?;

    wtr.into_inner()
        .map_err(|e| AppError::Internal(format!("Error finalizando CSV: {}", e)))
}

/// Nombre del archivo de descarga, p. ej. `reporte_2024-06-15.csv`
pub fn export_filename(today: chrono::NaiveDate) -> String {
    format!("reporte_{}.csv", today.format("%Y-%m-%d"))
}

fn csv_error(e: csv::Error) -> AppError {
    AppError::Internal(format!("Error escribiendo CSV: {}", e))
}
