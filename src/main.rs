use anyhow::Result;
use std::net::SocketAddr;
use tokio::{signal, sync::watch};
use tracing::{error, info, warn};
use dotenvy::dotenv;
use tracing_subscriber::EnvFilter;

use vehicle_manager::config::{DatabaseConfig, EnvironmentConfig};
use vehicle_manager::database::connect_and_migrate;
use vehicle_manager::routes::create_router;
use vehicle_manager::services::reminder_job;
use vehicle_manager::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging (RUST_LOG, por defecto info)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("🚗 Vehicle Manager API");
    info!("======================");

    let config = EnvironmentConfig::from_env()?;
    let db_config = DatabaseConfig::from_env()?;

    let pool = match connect_and_migrate(&db_config).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(e);
        }
    };

    // Escaneo de recordatorios en background
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let reminders = reminder_job::spawn(pool.clone(), config.reminder_interval_secs, shutdown_rx);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let app = create_router(AppState::new(pool, config.clone()));

    info!("🌐 Servidor iniciando en {} ({})", config.server_url(), config.environment);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("🔐 Auth:");
    info!("   POST /api/auth/register - Registrar usuario");
    info!("   POST /api/auth/login - Login");
    info!("   GET  /api/auth/me - Usuario actual");
    info!("   PUT  /api/profile - Actualizar perfil");
    info!("🚗 Vehículos, gastos y mantenimientos:");
    info!("   GET|POST /api/vehicles, GET|PUT|DELETE /api/vehicles/:id");
    info!("   GET|POST /api/expenses, GET|PUT|DELETE /api/expenses/:id");
    info!("   GET|POST /api/maintenances, GET|PUT|DELETE /api/maintenances/:id");
    info!("🔔 Recordatorios:");
    info!("   GET|POST /api/notifications, GET /api/notifications/due");
    info!("   PUT|DELETE /api/notifications/:id, POST /api/notifications/:id/close");
    info!("📊 Dashboard y reportes:");
    info!("   PUT  /api/spending-limit, GET /api/spending-limit/status");
    info!("   GET  /api/dashboard/monthly");
    info!("   GET  /api/reports, GET /api/reports/export");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Error del servidor: {}", e);
    }

    // Detener el escaneo de recordatorios
    if shutdown_tx.send(true).is_err() {
        warn!("⚠️ El escaneo de recordatorios ya había terminado");
    }
    if let Err(e) = reminders.await {
        error!("❌ Error deteniendo recordatorios: {}", e);
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo instalar el handler de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo instalar el handler de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
