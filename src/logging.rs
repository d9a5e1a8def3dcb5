// SPDX-License-Identifier: PMPL-1.0-or-later

//! Log filter selection
//!
//! `RUST_LOG` wins when it is set and parses; otherwise the crate logs at
//! `info`, or `debug` with `--verbose`.

use tracing_subscriber::EnvFilter;

fn fallback_directive(verbose: bool) -> &'static str {
    if verbose {
        "trans_gen=debug"
    } else {
        "trans_gen=info"
    }
}

/// Filter from an explicit `RUST_LOG` value, falling back to the crate
/// default when it is absent or invalid.
pub fn filter_from(env: Option<&str>, verbose: bool) -> EnvFilter {
    env.and_then(|spec| EnvFilter::try_new(spec).ok())
        .unwrap_or_else(|| EnvFilter::new(fallback_directive(verbose)))
}

/// Filter for the process, read from `RUST_LOG`.
pub fn log_filter(verbose: bool) -> EnvFilter {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    filter_from(env.as_deref(), verbose)
}
