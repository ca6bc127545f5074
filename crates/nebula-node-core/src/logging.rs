//! Logging handle.
//!
//! Nothing is installed process-wide. A [`Logging`] value owns a configured
//! subscriber and the [`Workflow`](crate::workflow::Workflow) runs under it.

use std::io;

use tracing::Dispatch;
use tracing_subscriber::EnvFilter;

#[derive(Clone)]
pub struct Logging {
    dispatch: Dispatch,
    debug: bool,
}

impl Logging {
    /// Build a stderr logger. `RUST_LOG` takes precedence when set;
    /// otherwise the level is `debug` or `info` depending on `debug`.
    pub fn new(debug: bool) -> Self {
        let default_level = if debug { "debug" } else { "info" };
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_level));

        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .with_target(debug)
            .finish();

        Self {
            dispatch: Dispatch::new(subscriber),
            debug,
        }
    }

    /// A handle that drops every event
    pub fn disabled() -> Self {
        Self {
            dispatch: Dispatch::none(),
            debug: false,
        }
    }

    pub fn dispatch(&self) -> &Dispatch {
        &self.dispatch
    }

    pub fn is_debug(&self) -> bool {
        self.debug
    }
}

impl std::fmt::Debug for Logging {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logging").field("debug", &self.debug).finish()
    }
}
