//! Estado del límite mensual de gastos

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{
    expense::Expense, maintenance::Maintenance, spending_limit::SpendingLimitStatus,
};
use crate::services::date_range::{first_day_of_month, last_day_of_month, month_key, DateRange};
use crate::services::report_processor::total_spent;

/// Intervalo del mes calendario de `today`
pub fn current_month(today: NaiveDate) -> DateRange {
    DateRange {
        start: first_day_of_month(today),
        end: last_day_of_month(today),
    }
}

/// Comparar lo gastado en el mes de `today` con el límite configurado
pub fn evaluate(
    monthly_limit: Option<Decimal>,
    expenses: &[Expense],
    maintenances: &[Maintenance],
    today: NaiveDate,
) -> SpendingLimitStatus {
    let spent = total_spent(expenses, maintenances, &current_month(today));

    let (remaining, percentage, exceeded) = match monthly_limit {
        Some(limit) if limit > Decimal::ZERO => (
            Some((limit - spent).max(Decimal::ZERO)),
            Some((spent / limit * Decimal::ONE_HUNDRED).round_dp(2)),
            spent > limit,
        ),
        _ => (None, None, false),
    };

    SpendingLimitStatus {
        month: month_key(today),
        monthly_limit,
        spent,
        remaining,
        percentage,
        exceeded,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::expense::ExpenseCategory;
    use chrono::Utc;
    use uuid::Uuid;

    fn expense(date: NaiveDate, units: i64) -> Expense {
        Expense {
            id: Uuid::new_v4(),
            user_id: Uuid::nil(),
            vehicle_id: Uuid::nil(),
            date,
            category: ExpenseCategory::Fuel,
            amount: Decimal::new(units, 0),
            description: None,
            created_at: Utc::now(),
        }
    }

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_within_limit() {
        let today = d(2024, 4, 10);
        let expenses = vec![expense(d(2024, 4, 1), 150), expense(d(2024, 3, 31), 900)];

        let status = evaluate(Some(Decimal::new(600, 0)), &expenses, &[], today);
        assert_eq!(status.month, "2024-04");
        assert_eq!(status.spent, Decimal::new(150, 0));
        assert_eq!(status.remaining, Some(Decimal::new(450, 0)));
        assert_eq!(status.percentage, Some(Decimal::new(25, 0)));
        assert!(!status.exceeded);
    }

    #[test]
    fn test_exceeded_limit() {
        let today = d(2024, 4, 30);
        let expenses = vec![expense(d(2024, 4, 30), 700)];

        let status = evaluate(Some(Decimal::new(600, 0)), &expenses, &[], today);
        assert!(status.exceeded);
        assert_eq!(status.remaining, Some(Decimal::ZERO));
    }

    #[test]
    fn test_without_limit() {
        let status = evaluate(None, &[expense(d(2024, 4, 2), 10)], &[], d(2024, 4, 2));
        assert_eq!(status.spent, Decimal::new(10, 0));
        assert_eq!(status.remaining, None);
        assert!(!status.exceeded);
    }
}
