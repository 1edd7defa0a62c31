//! env_logger setup behind the `log` facade

use std::sync::Once;

use log::LevelFilter;

/// Level used when neither an explicit filter nor `RUST_LOG` is given.
const DEFAULT_LEVEL: LevelFilter = LevelFilter::Info;

static INIT: Once = Once::new();

/// Picks the filter string: explicit, then `RUST_LOG`; `None` means [`DEFAULT_LEVEL`].
fn choose_filter(explicit: Option<&str>, rust_log: Option<String>) -> Option<String> {
    explicit
        .map(str::to_owned)
        .or(rust_log)
        .filter(|f| !f.trim().is_empty())
}

/// Installs the global logger on first call; later calls do nothing.
///
/// `filter` uses env_logger syntax, e.g. `"analog_clock=debug,eframe=warn"`.
pub fn init_logging(filter: Option<&str>) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();
        match choose_filter(filter, std::env::var("RUST_LOG").ok()) {
            Some(filters) => builder.parse_filters(&filters),
            None => builder.filter_level(DEFAULT_LEVEL),
        };
        // The test harness may have installed a logger already.
        if builder.try_init().is_ok() {
            log::debug!("logging initialized");
        }
    });
}
