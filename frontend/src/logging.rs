use crate::config::RuntimeConfig;

/// Installs the browser console logger. Later calls are no-ops.
pub fn init(cfg: &RuntimeConfig) {
    let level = cfg.log_level().unwrap_or_else(|err| {
        web_sys::console::warn_1(&format!("{}; using info", err).into());
        log::Level::Info
    });
    if console_log::init_with_level(level).is_err() {
        return;
    }
    log::debug!("Console logger installed at {}", level);
}
