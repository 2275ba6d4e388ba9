//! Modelo de Notification
//!
//! Recordatorios simples con fecha y estado abierto/cerrado.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;
use validator::Validate;

use crate::utils::validation::validate_not_empty;

/// Estado del recordatorio - mapea al ENUM notification_status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "notification_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum NotificationStatus {
    Open,
    Closed,
}

/// Notification - mapea exactamente a la tabla notifications
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Notification {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub description: String,
    pub status: NotificationStatus,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Un recordatorio está vencido si sigue abierto y su fecha ya llegó
    pub fn is_due(&self, today: NaiveDate) -> bool {
        self.status == NotificationStatus::Open && self.date <= today
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateNotificationRequest {
    pub date: NaiveDate,

    #[validate(length(min = 1, max = 500), custom = "validate_not_empty")]
    pub description: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateNotificationRequest {
    pub date: Option<NaiveDate>,

    #[validate(length(min = 1, max = 500), custom = "validate_not_empty")]
    pub description: Option<String>,

    pub status: Option<NotificationStatus>,
}

#[derive(Debug, Default, Deserialize)]
pub struct NotificationFilters {
    pub status: Option<NotificationStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notification(date: NaiveDate, status: NotificationStatus) -> Notification {
        Notification {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            date,
            description: "Renovar seguro".to_string(),
            status,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_is_due() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let yesterday = today.pred_opt().unwrap();
        let tomorrow = today.succ_opt().unwrap();

        assert!(notification(today, NotificationStatus::Open).is_due(today));
        assert!(notification(yesterday, NotificationStatus::Open).is_due(today));
        assert!(!notification(tomorrow, NotificationStatus::Open).is_due(today));
        assert!(!notification(yesterday, NotificationStatus::Closed).is_due(today));
    }

    #[test]
    fn test_blank_description_rejected() {
        let request = CreateNotificationRequest {
            date: NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
            description: "   ".to_string(),
        };
        assert!(request.validate().is_err());
    }
}
