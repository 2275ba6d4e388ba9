//! Filtro por período
//!
//! Convierte un token de período (`1month`, `6months`, `1year`, `custom`,
//! `all`) en un intervalo concreto `[start, end]` y filtra registros fechados.

use chrono::{Datelike, Months, NaiveDate};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::models::{expense::Expense, maintenance::Maintenance, notification::Notification};
use crate::utils::errors::AppError;

/// Período con nombre
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodToken {
    OneMonth,
    SixMonths,
    OneYear,
    Custom,
    All,
}

impl PeriodToken {
    pub fn as_str(&self) -> &'static str {
        match self {
            PeriodToken::OneMonth => "1month",
            PeriodToken::SixMonths => "6months",
            PeriodToken::OneYear => "1year",
            PeriodToken::Custom => "custom",
            PeriodToken::All => "all",
        }
    }

    /// Meses hacia atrás para los períodos relativos
    fn months_back(&self) -> Option<u32> {
        match self {
            PeriodToken::OneMonth => Some(1),
            PeriodToken::SixMonths => Some(6),
            PeriodToken::OneYear => Some(12),
            PeriodToken::Custom | PeriodToken::All => None,
        }
    }
}

impl fmt::Display for PeriodToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PeriodToken {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1month" => Ok(PeriodToken::OneMonth),
            "6months" => Ok(PeriodToken::SixMonths),
            "1year" => Ok(PeriodToken::OneYear),
            "custom" => Ok(PeriodToken::Custom),
            "all" => Ok(PeriodToken::All),
            other => Err(AppError::BadRequest(format!(
                "Período desconocido '{}' (use 1month, 6months, 1year, custom o all)",
                other
            ))),
        }
    }
}

/// Intervalo cerrado de fechas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Crea el intervalo intercambiando los extremos si vienen invertidos
    pub fn new_corrected(start: NaiveDate, end: NaiveDate) -> Self {
        if start > end {
            Self { start: end, end: start }
        } else {
            Self { start, end }
        }
    }

    /// Inclusivo en ambos extremos
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Resolver un token a un intervalo concreto. `None` significa sin filtro.
pub fn resolve(
    token: PeriodToken,
    today: NaiveDate,
    custom_start: Option<NaiveDate>,
    custom_end: Option<NaiveDate>,
) -> Result<Option<DateRange>, AppError> {
    if let Some(months) = token.months_back() {
        let start = today
            .checked_sub_months(Months::new(months))
            .ok_or_else(|| AppError::BadRequest("Fecha fuera de rango".to_string()))?;
        return Ok(Some(DateRange { start, end: today }));
    }

    match token {
        PeriodToken::Custom => match (custom_start, custom_end) {
            (Some(start), Some(end)) => Ok(Some(DateRange::new_corrected(start, end))),
            _ => Err(AppError::BadRequest(
                "El período personalizado requiere 'start' y 'end'".to_string(),
            )),
        },
        _ => Ok(None),
    }
}

/// Resolver los parámetros de query `period`, `start` y `end`.
///
/// Sin `period` se asume `custom` si llegó algún extremo, y `all` si no.
pub fn resolve_query(
    period: Option<&str>,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    today: NaiveDate,
) -> Result<Option<DateRange>, AppError> {
    let token: PeriodToken = match period {
        Some(raw) if !raw.trim().is_empty() => raw.parse()?,
        _ if start.is_some() || end.is_some() => PeriodToken::Custom,
        _ => PeriodToken::All,
    };
    resolve(token, today, start, end)
}

/// Registros con una fecha de referencia
pub trait Dated {
    fn date(&self) -> NaiveDate;
}

impl Dated for Expense {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl Dated for Maintenance {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl Dated for Notification {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

/// Conservar solo los registros dentro del intervalo
pub fn filter_by_range<T: Dated>(records: Vec<T>, range: Option<&DateRange>) -> Vec<T> {
    match range {
        Some(range) => records
            .into_iter()
            .filter(|r| range.contains(r.date()))
            .collect(),
        None => records,
    }
}

/// Clave de mes `YYYY-MM`
pub fn month_key(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

/// Primer día del mes de `date`
pub fn first_day_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Último día del mes de `date`
pub fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    first_day_of_month(date)
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_parse_tokens() {
        assert_eq!("1month".parse::<PeriodToken>().unwrap(), PeriodToken::OneMonth);
        assert_eq!("6months".parse::<PeriodToken>().unwrap(), PeriodToken::SixMonths);
        assert_eq!("1year".parse::<PeriodToken>().unwrap(), PeriodToken::OneYear);
        assert_eq!("custom".parse::<PeriodToken>().unwrap(), PeriodToken::Custom);
        assert_eq!("all".parse::<PeriodToken>().unwrap(), PeriodToken::All);
        assert!(matches!(
            "2weeks".parse::<PeriodToken>(),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn test_relative_periods() {
        let today = d(2024, 8, 20);
        assert_eq!(
            resolve(PeriodToken::OneMonth, today, None, None).unwrap(),
            Some(DateRange { start: d(2024, 7, 20), end: today })
        );
        assert_eq!(
            resolve(PeriodToken::SixMonths, today, None, None).unwrap(),
            Some(DateRange { start: d(2024, 2, 20), end: today })
        );
        assert_eq!(
            resolve(PeriodToken::OneYear, today, None, None).unwrap(),
            Some(DateRange { start: d(2023, 8, 20), end: today })
        );
    }

    #[test]
    fn test_month_subtraction_clamps_to_month_end() {
        let range = resolve(PeriodToken::OneMonth, d(2024, 3, 31), None, None)
            .unwrap()
            .unwrap();
        assert_eq!(range.start, d(2024, 2, 29));

        let range = resolve(PeriodToken::OneYear, d(2024, 2, 29), None, None)
            .unwrap()
            .unwrap();
        assert_eq!(range.start, d(2023, 2, 28));
    }

    #[test]
    fn test_relative_periods_ignore_custom_bounds() {
        let today = d(2024, 8, 20);
        let range = resolve(PeriodToken::OneMonth, today, Some(d(2000, 1, 1)), Some(d(2000, 2, 1)))
            .unwrap()
            .unwrap();
        assert_eq!(range.end, today);
    }

    #[test]
    fn test_custom_period_swaps_inverted_bounds() {
        let range = resolve(
            PeriodToken::Custom,
            d(2024, 8, 20),
            Some(d(2024, 5, 31)),
            Some(d(2024, 5, 1)),
        )
        .unwrap()
        .unwrap();
        assert_eq!(range, DateRange { start: d(2024, 5, 1), end: d(2024, 5, 31) });
    }

    #[test]
    fn test_custom_period_requires_both_bounds() {
        let result = resolve(PeriodToken::Custom, d(2024, 8, 20), Some(d(2024, 5, 1)), None);
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[test]
    fn test_all_has_no_range() {
        assert_eq!(resolve(PeriodToken::All, d(2024, 8, 20), None, None).unwrap(), None);
    }

    #[test]
    fn test_contains_is_inclusive() {
        let range = DateRange::new_corrected(d(2024, 1, 1), d(2024, 1, 31));
        assert!(range.contains(d(2024, 1, 1)));
        assert!(range.contains(d(2024, 1, 31)));
        assert!(!range.contains(d(2023, 12, 31)));
        assert!(!range.contains(d(2024, 2, 1)));
    }

    #[test]
    fn test_resolve_query_defaults() {
        let today = d(2024, 8, 20);
        assert_eq!(resolve_query(None, None, None, today).unwrap(), None);
        assert_eq!(resolve_query(Some(""), None, None, today).unwrap(), None);

        let range = resolve_query(None, Some(d(2024, 1, 1)), Some(d(2024, 2, 1)), today)
            .unwrap()
            .unwrap();
        assert_eq!(range.start, d(2024, 1, 1));

        assert!(resolve_query(None, Some(d(2024, 1, 1)), None, today).is_err());
    }

    #[test]
    fn test_month_helpers() {
        assert_eq!(month_key(d(2024, 3, 9)), "2024-03");
        assert_eq!(first_day_of_month(d(2024, 3, 9)), d(2024, 3, 1));
        assert_eq!(last_day_of_month(d(2024, 2, 9)), d(2024, 2, 29));
        assert_eq!(last_day_of_month(d(2023, 12, 9)), d(2023, 12, 31));
    }
}
