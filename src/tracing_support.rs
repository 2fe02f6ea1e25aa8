//! Logging support.
//!
//! With the `tracing` feature enabled, graph events are emitted through
//! `tracing` and [`init_tracing`] installs a `tracing-subscriber` formatter.
//! Without it the event macros expand to nothing and `init_tracing` is a
//! no-op.

#[cfg(feature = "tracing")]
mod enabled {
    use std::sync::Once;

    use tracing::Level;

    /// Installs a global formatting subscriber at `DEBUG` level.  Safe to
    /// call repeatedly; only the first call has any effect, and an already
    /// installed subscriber is left alone.
    pub fn init_tracing() {
        static INIT: Once = Once::new();
        INIT.call_once(|| {
            let _ = tracing_subscriber::fmt()
                .with_max_level(Level::DEBUG)
                .with_test_writer()
                .try_init();
        });
    }
}

#[cfg(not(feature = "tracing"))]
mod disabled {
    pub fn init_tracing() {
        // No-op when tracing is disabled
    }
}

#[cfg(feature = "tracing")]
pub use enabled::*;

#[cfg(not(feature = "tracing"))]
pub use disabled::*;

/// Emits a `debug` event when the `tracing` feature is enabled.
macro_rules! graph_debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::debug!($($arg)*);
    };
}

/// Emits a `trace` event when the `tracing` feature is enabled.
macro_rules! graph_trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::trace!($($arg)*);
    };
}

pub(crate) use graph_debug;
pub(crate) use graph_trace;
