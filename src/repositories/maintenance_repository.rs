use crate::models::maintenance::{CreateMaintenanceRequest, Maintenance};
use crate::services::date_range::DateRange;
use crate::utils::errors::AppError;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

pub struct MaintenanceRepository {
    pool: PgPool,
}

impl MaintenanceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, maintenance: &Maintenance) -> Result<Maintenance, AppError> {
        let created = sqlx::query_as::<_, Maintenance>(
            r#"
            INSERT INTO maintenances (id, user_id, vehicle_id, date, service_type, cost, observations, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(maintenance.id)
        .bind(maintenance.user_id)
        .bind(maintenance.vehicle_id)
        .bind(maintenance.date)
        .bind(maintenance.service_type)
        .bind(maintenance.cost)
        .bind(&maintenance.observations)
        .bind(maintenance.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Maintenance>, AppError> {
        let maintenance = sqlx::query_as::<_, Maintenance>("SELECT * FROM maintenances WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(maintenance)
    }

    pub async fn find_by_user(
        &self,
        user_id: Uuid,
        vehicle_id: Option<Uuid>,
        range: Option<&DateRange>,
    ) -> Result<Vec<Maintenance>, AppError> {
        let maintenances = sqlx::query_as::<_, Maintenance>(
            r#"
            SELECT * FROM maintenances
            WHERE user_id = $1
              AND ($2::uuid IS NULL OR vehicle_id = $2)
              AND ($3::date IS NULL OR date >= $3)
              AND ($4::date IS NULL OR date <= $4)
            ORDER BY date DESC, created_at DESC
            "#,
        )
        .bind(user_id)
        .bind(vehicle_id)
        .bind(range.map(|r| r.start))
        .bind(range.map(|r| r.end))
        .fetch_all(&self.pool)
        .await?;

        Ok(maintenances)
    }

    pub async fn update(&self, maintenance: &Maintenance) -> Result<Maintenance, AppError> {
        let updated = sqlx::query_as::<_, Maintenance>(
            r#"
            UPDATE maintenances
            SET vehicle_id = $2, date = $3, service_type = $4, cost = $5, observations = $6
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(maintenance.id)
        .bind(maintenance.vehicle_id)
        .bind(maintenance.date)
        .bind(maintenance.service_type)
        .bind(maintenance.cost)
        .bind(&maintenance.observations)
        .fetch_one(&self.pool)
        .await?;

        Ok(updated)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        sqlx::query("DELETE FROM maintenances WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

pub fn new_maintenance(user_id: Uuid, request: CreateMaintenanceRequest) -> Maintenance {
    Maintenance {
        id: Uuid::new_v4(),
        user_id,
        vehicle_id: request.vehicle_id,
        date: request.date,
        service_type: request.service_type,
        cost: request.cost,
        observations: request.observations,
        created_at: Utc::now(),
    }
}
