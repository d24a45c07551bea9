// Doctor portal entry point.
//
// Startup sequence:
// 1. Initialize tracing (log to file, not terminal)
// 2. Seed default config files, load config
// 3. Open database
// 4. Create mpsc channels
// 5. Spawn pharmacy API task
// 6. Spawn app logic task
// 7. Run the TUI event loop (blocking until user quits)
// 8. Cleanup on exit

use doctor_portal::app;
use doctor_portal::config;
use doctor_portal::db;
use doctor_portal::server;
use doctor_portal::tui;

use anyhow::Context;
use tokio::sync::mpsc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing (log to file, not terminal)
    init_tracing()?;
    info!("Doctor portal starting up");

    // 2. Seed missing config files from defaults, then load
    let seeded = config::ensure_config_files(&std::env::current_dir()?)
        .context("failed to seed configuration files")?;
    for path in &seeded {
        info!("Seeded default config at {}", path.display());
    }
    let config = config::load_config().context("failed to load configuration")?;
    info!(
        "Config loaded: clinic={}, doctor={}, api port {}",
        config.clinic.name, config.clinic.doctor, config.api_port
    );

    // 3. Open database
    let db = db::Database::open(&config.db_path).context("failed to open database")?;
    info!("Database opened at {}", config.db_path);

    // 4. Create mpsc channels (effect channel before AppState so it can spawn
    //    settle tasks)
    let (effect_tx, effect_rx) = mpsc::channel(64);
    let (cmd_tx, cmd_rx) = mpsc::channel(64);
    let (ui_tx, ui_rx) = mpsc::channel(256);

    let app_state = app::AppState::new(config.clone(), db, effect_tx);

    // 5. Spawn pharmacy API task
    let api_port = config.api_port;
    let api_handle = tokio::spawn(server::serve(api_port));

    // 6. Spawn app logic task
    let app_handle = tokio::spawn(async move {
        if let Err(e) = app::run(cmd_rx, effect_rx, ui_tx, app_state).await {
            error!("Application loop error: {}", e);
        }
    });

    // 7. Run the TUI event loop (blocking until user quits)
    info!(
        "Portal ready. Pharmacy API listening on 127.0.0.1:{}",
        api_port
    );
    if let Err(e) = tui::run(config.clinic.clone(), ui_rx, cmd_tx).await {
        error!("TUI error: {}", e);
    }

    // 8. Cleanup: wait for app task to finish (with timeout)
    let _ = tokio::time::timeout(std::time::Duration::from_secs(5), async {
        let _ = app_handle.await;
    })
    .await;

    // Abort the API server (it loops forever)
    api_handle.abort();

    info!("Doctor portal shut down cleanly");
    Ok(())
}

/// Initialize tracing to log to a file (not the terminal, which is used by the TUI).
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let log_dir = std::env::current_dir()?.join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file = std::fs::File::create(log_dir.join("doctor-portal.log"))?;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("doctor_portal=info,warn")),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
