//! Main application entry point (native).

#[cfg(feature = "native")]
fn main() {
    env_logger::init();
    log::info!("Starting Prismboard");

    if let Err(e) = prismboard_app::App::run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

#[cfg(not(feature = "native"))]
fn main() {
    panic!("Native feature not enabled. Use `cargo run --features native`");
}
