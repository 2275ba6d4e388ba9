//! Escaneo periódico de recordatorios vencidos
//!
//! Cada `REMINDER_INTERVAL_SECS` busca los recordatorios abiertos cuya fecha
//! ya llegó y los registra en el log agrupados por usuario. No envía emails.

use chrono::Utc;
use sqlx::PgPool;
use std::collections::BTreeMap;
use std::time::Duration;
use tokio::sync::watch;
use uuid::Uuid;

use crate::models::notification::Notification;
use crate::repositories::notification_repository::NotificationRepository;
use crate::utils::errors::AppError;

/// Agrupar recordatorios por usuario, conservando el orden por fecha
pub fn group_by_user(notifications: Vec<Notification>) -> BTreeMap<Uuid, Vec<Notification>> {
    let mut grouped: BTreeMap<Uuid, Vec<Notification>> = BTreeMap::new();
    for notification in notifications {
        grouped.entry(notification.user_id).or_default().push(notification);
    }
    for list in grouped.values_mut() {
        list.sort_by_key(|n| n.date);
    }
    grouped
}

/// Ejecutar un escaneo; devuelve cuántos recordatorios vencidos había
pub async fn run_once(repository: &NotificationRepository) -> Result<usize, AppError> {
    let today = Utc::now().date_naive();
    let due = repository.find_all_due(today).await?;
    let total = due.len();

    for (user_id, notifications) in group_by_user(due) {
        log::info!(
            "🔔 Usuario {} tiene {} recordatorio(s) vencido(s)",
            user_id,
            notifications.len()
        );
        for notification in &notifications {
            log::debug!("   {} - {}", notification.date, notification.description);
        }
    }

    Ok(total)
}

/// Lanzar el escaneo en background hasta que `shutdown` cambie
pub fn spawn(
    pool: PgPool,
    interval_secs: u64,
    mut shutdown: watch::Receiver<bool>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let repository = NotificationRepository::new(pool);
        let mut ticker = tokio::time::interval(Duration::from_secs(interval_secs.max(1)));

        log::info!("⏰ Escaneo de recordatorios cada {}s", interval_secs);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    match run_once(&repository).await {
                        Ok(0) => log::debug!("🔕 Sin recordatorios vencidos"),
                        Ok(count) => log::info!("🔔 {} recordatorio(s) vencido(s) en total", count),
                        Err(e) => log::error!("❌ Error escaneando recordatorios: {}", e),
                    }
                }
                _ = shutdown.changed() => {
                    log::info!("🛑 Escaneo de recordatorios detenido");
                    break;
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::notification::NotificationStatus;
    use chrono::{Datelike, NaiveDate};

    fn notification(user_id: Uuid, day: u32) -> Notification {
        Notification {
            id: Uuid::new_v4(),
            user_id,
            date: NaiveDate::from_ymd_opt(2024, 6, day).unwrap(),
            description: format!("Recordatorio {}", day),
            status: NotificationStatus::Open,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_group_by_user() {
        let ana = Uuid::new_v4();
        let bruno = Uuid::new_v4();

        let grouped = group_by_user(vec![
            notification(ana, 10),
            notification(bruno, 3),
            notification(ana, 2),
        ]);

        assert_eq!(grouped.len(), 2);
        let days: Vec<u32> = grouped[&ana].iter().map(|n| n.date.day0() + 1).collect();
        assert_eq!(days, vec![2, 10]);
        assert_eq!(grouped[&bruno].len(), 1);
    }

    #[test]
    fn test_group_by_user_empty() {
        assert!(group_by_user(Vec::new()).is_empty());
    }
}
