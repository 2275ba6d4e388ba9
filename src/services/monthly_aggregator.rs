//! Agregación mensual para el dashboard
//!
//! Agrupa gastos y mantenimientos en cubetas por mes calendario sobre una
//! ventana móvil que termina en el mes de referencia.

use chrono::{Datelike, Months, NaiveDate};
use rust_decimal::Decimal;
use std::collections::HashMap;

use crate::models::{analytics::MonthlyBucket, expense::Expense, maintenance::Maintenance};
use crate::services::date_range::{first_day_of_month, month_key};

/// Tamaño de la ventana: el mes actual y los 5 anteriores
pub const WINDOW_MONTHS: u32 = 6;

const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Primeros días de los meses de la ventana, del más antiguo al más reciente
pub fn window_months(today: NaiveDate) -> Vec<NaiveDate> {
    let current = first_day_of_month(today);
    (0..WINDOW_MONTHS)
        .rev()
        .filter_map(|back| current.checked_sub_months(Months::new(back)))
        .collect()
}

/// Etiqueta corta del mes, p. ej. `Mar 2024`
pub fn month_label(month: NaiveDate) -> String {
    format!("{} {}", MONTH_LABELS[month.month0() as usize], month.year())
}

/// Serie de 6 meses con los totales de gastos y mantenimientos.
///
/// Los registros fuera de la ventana se ignoran y los meses sin registros
/// quedan en cero.
pub fn aggregate_monthly(
    expenses: &[Expense],
    maintenances: &[Maintenance],
    today: NaiveDate,
) -> Vec<MonthlyBucket> {
    let months = window_months(today);

    let mut expense_totals: HashMap<NaiveDate, Decimal> = HashMap::new();
    for expense in expenses {
        *expense_totals
            .entry(first_day_of_month(expense.date))
            .or_insert(Decimal::ZERO) += expense.amount;
    }

    let mut maintenance_totals: HashMap<NaiveDate, Decimal> = HashMap::new();
    for maintenance in maintenances {
        *maintenance_totals
            .entry(first_day_of_month(maintenance.date))
            .or_insert(Decimal::ZERO) += maintenance.cost;
    }

    months
        .into_iter()
        .map(|month| {
            let expenses_total = expense_totals.get(&month).copied().unwrap_or(Decimal::ZERO);
            let maintenance_total = maintenance_totals
                .get(&month)
                .copied()
                .unwrap_or(Decimal::ZERO);
            MonthlyBucket {
                month: month_key(month),
                label: month_label(month),
                expenses_total,
                maintenance_total,
                total: expenses_total + maintenance_total,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{expense::ExpenseCategory, maintenance::ServiceType};
    use chrono::Utc;
    use uuid::Uuid;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn expense(date: NaiveDate, cents: i64) -> Expense {
        Expense {
            id: Uuid::new_v4(),
            user_id: Uuid::nil(),
            vehicle_id: Uuid::nil(),
            date,
            category: ExpenseCategory::Fuel,
            amount: Decimal::new(cents, 2),
            description: None,
            created_at: Utc::now(),
        }
    }

    fn maintenance(date: NaiveDate, cents: i64) -> Maintenance {
        Maintenance {
            id: Uuid::new_v4(),
            user_id: Uuid::nil(),
            vehicle_id: Uuid::nil(),
            date,
            service_type: ServiceType::OilChange,
            cost: Decimal::new(cents, 2),
            observations: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_window_crosses_year_boundary() {
        let months: Vec<String> = window_months(d(2024, 2, 10))
            .into_iter()
            .map(month_key)
            .collect();
        assert_eq!(
            months,
            vec!["2023-09", "2023-10", "2023-11", "2023-12", "2024-01", "2024-02"]
        );
    }

    #[test]
    fn test_empty_input_yields_six_zero_buckets() {
        let buckets = aggregate_monthly(&[], &[], d(2024, 6, 30));
        assert_eq!(buckets.len(), 6);
        assert!(buckets.iter().all(|b| b.total == Decimal::ZERO));
        assert_eq!(buckets[0].label, "Jan 2024");
        assert_eq!(buckets[5].label, "Jun 2024");
    }

    #[test]
    fn test_sums_per_month_and_ignores_out_of_window() {
        let today = d(2024, 6, 15);
        let expenses = vec![
            expense(d(2024, 6, 1), 10_000),
            expense(d(2024, 6, 30), 2_550),
            expense(d(2024, 3, 10), 5_000),
            expense(d(2023, 12, 31), 99_999), // fuera de la ventana
            expense(d(2024, 7, 1), 99_999),   // futuro, fuera de la ventana
        ];
        let maintenances = vec![
            maintenance(d(2024, 6, 5), 30_000),
            maintenance(d(2024, 1, 1), 12_000),
        ];

        let buckets = aggregate_monthly(&expenses, &maintenances, today);

        let june = &buckets[5];
        assert_eq!(june.month, "2024-06");
        assert_eq!(june.expenses_total, Decimal::new(12_550, 2));
        assert_eq!(june.maintenance_total, Decimal::new(30_000, 2));
        assert_eq!(june.total, Decimal::new(42_550, 2));

        let march = &buckets[2];
        assert_eq!(march.month, "2024-03");
        assert_eq!(march.total, Decimal::new(5_000, 2));

        let january = &buckets[0];
        assert_eq!(january.month, "2024-01");
        assert_eq!(january.expenses_total, Decimal::ZERO);
        assert_eq!(january.maintenance_total, Decimal::new(12_000, 2));

        let grand_total: Decimal = buckets.iter().map(|b| b.total).sum();
        assert_eq!(grand_total, Decimal::new(59_550, 2));
    }
}
