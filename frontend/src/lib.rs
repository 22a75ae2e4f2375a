pub mod components;
pub mod config;
pub mod identity;
mod pages;
pub mod router;
mod state;
#[cfg(test)]
mod test_support;
pub mod utils;

/// Installs logging, resolves the runtime config and mounts the app.
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Trace).is_err() {
        web_sys::console::warn_1(&"Logger was already initialized".into());
    }
    log::set_max_level(log::LevelFilter::Info);
    log::info!("Starting EduTech frontend: initializing runtime config");

    leptos::spawn_local(async move {
        let config = config::init().await;
        log::set_max_level(config.log_level_filter());
        log::debug!("Runtime config initialized: {config:?}");
        router::mount_app();
    });
}
