#[cfg(not(target_arch = "wasm32"))]
fn load_dotenv() {
    // .env is optional; config falls back to the bundled assets/config.env
    if let Err(err) = dotenvy::dotenv() {
        if !err.not_found() {
            eprintln!("failed to load .env: {err}");
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn load_dotenv() {}

#[cfg(not(target_arch = "wasm32"))]
fn init_tracing() {
    let level = portfolio::config::startup_log_level();
    // dioxus may install its own subscriber later; whichever comes first wins
    let _ = tracing_subscriber::fmt().with_max_level(level).try_init();
}

#[cfg(target_arch = "wasm32")]
fn init_tracing() {}

fn main() {
    load_dotenv();
    init_tracing();
    // resolved only after the subscriber exists so config warnings are not lost
    let _ = portfolio::config::site_config();
    tracing::info!("starting portfolio");
    dioxus::launch(portfolio::ui::App);
}
