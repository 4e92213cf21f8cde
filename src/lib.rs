pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod formatter;
pub mod models;
pub mod state;

use catalog::Catalog;
use config::StoreConfig;
use state::AppState;

/// TECH STORE Tauri application library entry point.
///
/// All Tauri builder setup lives here so it can be tested and referenced
/// by the thin `main.rs` binary wrapper.
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // ── Tracing setup (must happen before anything else) ────────────────────
    //
    // Logs are written to a rolling-never (single) file in the OS data dir:
    //   Linux    ~/.local/share/techstore/techstore.log
    //   macOS    ~/Library/Application Support/techstore/techstore.log
    //   Windows  %LOCALAPPDATA%\techstore\techstore.log
    //
    // Log level is controlled by the RUST_LOG environment variable;
    // defaults to INFO when the variable is absent.
    let log_dir = dirs::data_local_dir()
        .unwrap_or_default()
        .join("techstore");

    // tracing_appender::rolling::never panics if it cannot open the log file,
    // so the directory tree is created first.
    let _ = std::fs::create_dir_all(&log_dir);

    let file_appender = tracing_appender::rolling::never(&log_dir, "techstore.log");
    let (non_blocking, _tracing_guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(non_blocking)
        .init();

    tracing::info!("TECH STORE starting");

    // ── Application state ────────────────────────────────────────────────────
    let config = config::load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "store config rejected; using built-in defaults");
        StoreConfig::builtin()
    });
    let catalog = Catalog::builtin();
    tracing::info!(
        products = catalog.len(),
        store = %config.store.name,
        "catalog seeded"
    );
    let state = AppState::new(catalog, config);

    // ── Tauri builder ────────────────────────────────────────────────────────
    tauri::Builder::default()
        .manage(state)
        .invoke_handler(tauri::generate_handler![
            commands::storefront::get_storefront,
            commands::storefront::get_store_info,
            commands::view::set_search_query,
            commands::view::select_category,
            commands::view::list_categories,
            commands::view::toggle_cart_panel,
            commands::view::set_cart_panel_open,
            commands::cart::add_to_cart,
            commands::cart::remove_from_cart,
            commands::cart::get_cart,
            commands::cart::checkout,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
