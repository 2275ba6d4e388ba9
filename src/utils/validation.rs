//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos.
//! Las funciones `validate_*` que reciben una referencia se usan desde
//! `#[validate(custom = "...")]`.

use chrono::{Datelike, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;
use serde::Serialize;
use validator::ValidationError;

lazy_static! {
    // Matrícula ya normalizada: 5 a 10 letras o dígitos
    static ref LICENSE_PLATE_RE: Regex = Regex::new(r"^[A-Z0-9]{5,10}$").unwrap();
}

/// Año mínimo aceptado para un vehículo
pub const MIN_VEHICLE_YEAR: i32 = 1900;

/// Validar que un string no esté vacío
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Normalizar email: sin espacios y en minúsculas
pub fn normalize_email(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Normalizar matrícula: mayúsculas y sin separadores
pub fn normalize_license_plate(value: &str) -> String {
    value
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_uppercase)
        .collect()
}

/// Validar formato de matrícula de vehículo
pub fn validate_license_plate(value: &str) -> Result<(), ValidationError> {
    // Formato básico: XX-123-XX, ABC1D23 o similar
    let clean_plate = normalize_license_plate(value);
    if !LICENSE_PLATE_RE.is_match(&clean_plate) {
        let mut error = ValidationError::new("license_plate");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar año de fabricación: desde 1900 hasta el año próximo
pub fn validate_vehicle_year(year: i32) -> Result<(), ValidationError> {
    let max_year = Utc::now().year() + 1;
    if !(MIN_VEHICLE_YEAR..=max_year).contains(&year) {
        let mut error = ValidationError::new("year");
        error.add_param("min".into(), &MIN_VEHICLE_YEAR);
        error.add_param("max".into(), &max_year);
        error.add_param("actual".into(), &year);
        return Err(error);
    }
    Ok(())
}

/// Variante para el derive de `validator`
pub fn validate_vehicle_year_field(year: i32) -> Result<(), ValidationError> {
    validate_vehicle_year(year)
}

/// Validar que un valor sea positivo
pub fn validate_positive<T: PartialOrd + num_traits::Zero + Serialize>(
    value: &T,
) -> Result<(), ValidationError> {
    if *value <= T::zero() {
        let mut error = ValidationError::new("positive");
        error.add_param("value".into(), value);
        return Err(error);
    }
    Ok(())
}

/// Validar que un valor sea no negativo
pub fn validate_non_negative<T: PartialOrd + num_traits::Zero + Serialize>(
    value: &T,
) -> Result<(), ValidationError> {
    if *value < T::zero() {
        let mut error = ValidationError::new("non_negative");
        error.add_param("value".into(), value);
        return Err(error);
    }
    Ok(())
}

/// Los importes se guardan como `NUMERIC(12, 2)`
const MONEY_MAX_SCALE: u32 = 2;
const MONEY_MAX_INTEGER: i64 = 10_000_000_000;

fn check_money(value: &Decimal) -> Result<(), ValidationError> {
    if value.normalize().scale() > MONEY_MAX_SCALE {
        let mut error = ValidationError::new("money_precision");
        error.add_param("value".into(), value);
        error.add_param("max_decimals".into(), &MONEY_MAX_SCALE);
        return Err(error);
    }
    if value.abs() >= Decimal::new(MONEY_MAX_INTEGER, 0) {
        let mut error = ValidationError::new("money_range");
        error.add_param("value".into(), value);
        error.add_param("max".into(), &MONEY_MAX_INTEGER);
        return Err(error);
    }
    Ok(())
}

/// Importe positivo representable con dos decimales
pub fn validate_positive_amount(value: &Decimal) -> Result<(), ValidationError> {
    validate_positive(value)?;
    check_money(value)
}

/// Importe no negativo representable con dos decimales
pub fn validate_non_negative_amount(value: &Decimal) -> Result<(), ValidationError> {
    validate_non_negative(value)?;
    check_money(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_validate_not_empty() {
        assert!(validate_not_empty("Fiat").is_ok());
        assert!(validate_not_empty("   ").is_err());
    }

    #[test]
    fn test_validate_license_plate() {
        assert!(validate_license_plate("AB-123-CD").is_ok());
        assert!(validate_license_plate("abc1d23").is_ok());
        assert!(validate_license_plate("A").is_err());
        assert!(validate_license_plate("ABCDEFGHIJK").is_err());
        assert!(validate_license_plate("AB#123").is_err());
    }

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  Ana@Example.COM "), "ana@example.com");
    }

    #[test]
    fn test_normalize_license_plate() {
        assert_eq!(normalize_license_plate("ab-123 cd"), "AB123CD");
    }

    #[test]
    fn test_validate_vehicle_year() {
        assert!(validate_vehicle_year(2015).is_ok());
        assert!(validate_vehicle_year(1899).is_err());
        assert!(validate_vehicle_year(Utc::now().year() + 2).is_err());
    }

    #[test]
    fn test_validate_positive() {
        assert!(validate_positive(&Decimal::new(1050, 2)).is_ok());
        assert!(validate_positive(&Decimal::ZERO).is_err());
        assert!(validate_positive(&-5).is_err());
    }

    #[test]
    fn test_validate_non_negative() {
        assert!(validate_non_negative(&Decimal::ZERO).is_ok());
        assert!(validate_non_negative(&0).is_ok());
        assert!(validate_non_negative(&Decimal::new(-1, 0)).is_err());
    }

    #[test]
    fn test_amount_must_fit_two_decimals() {
        assert!(validate_positive_amount(&Decimal::from_str("10.50").unwrap()).is_ok());
        assert!(validate_positive_amount(&Decimal::from_str("10.500").unwrap()).is_ok());

        let error = validate_positive_amount(&Decimal::from_str("0.001").unwrap()).unwrap_err();
        assert_eq!(error.code, "money_precision");
        assert!(validate_non_negative_amount(&Decimal::from_str("12.345").unwrap()).is_err());
    }

    #[test]
    fn test_amount_must_fit_column_range() {
        assert!(validate_positive_amount(&Decimal::from_str("9999999999.99").unwrap()).is_ok());

        let error = validate_positive_amount(&Decimal::from_scientific("1e13").unwrap()).unwrap_err();
        assert_eq!(error.code, "money_range");
        assert!(validate_non_negative_amount(&Decimal::new(10_000_000_000, 0)).is_err());
    }

    #[test]
    fn test_amount_sign_checked_first() {
        let error = validate_positive_amount(&Decimal::ZERO).unwrap_err();
        assert_eq!(error.code, "positive");
        assert!(validate_non_negative_amount(&Decimal::ZERO).is_ok());
    }
}
