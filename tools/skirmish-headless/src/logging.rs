//! Logger setup for headless battle runs.
//!
//! Scenario loading and unit deaths log at `info`, clamped ticks at `warn`.
//! `--verbose` lowers the skirmish crates to `debug`. Per-tick progress from
//! the engine and the unit pipeline is only logged at `trace`, which needs
//! `RUST_LOG`, e.g. `RUST_LOG=skirmish_sim=trace`.

use env_logger::{Builder, Env};

/// Default filter when `RUST_LOG` is unset.
fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "info,skirmish_sim=debug,skirmish_ai=debug,skirmish_headless=debug"
    } else {
        "info"
    }
}

/// Install the global logger. `RUST_LOG` replaces the default filter.
pub fn init(verbose: bool) {
    let env = Env::default().default_filter_or(default_filter(verbose));
    let mut builder = Builder::from_env(env);
    builder.format_timestamp_millis();

    // Fails only when a logger is already installed, e.g. across tests
    let _ = builder.try_init();
}
