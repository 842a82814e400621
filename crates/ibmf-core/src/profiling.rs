//! Profiling utilities based on the `puffin` crate.
//!
//! With the `profiling` feature disabled the scope macros compile to nothing,
//! so call sites never need their own `cfg` guards.

#[cfg(feature = "profiling")]
pub use puffin::{profile_function, profile_scope};

#[cfg(not(feature = "profiling"))]
#[macro_export]
macro_rules! profile_function {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "profiling"))]
#[macro_export]
macro_rules! profile_scope {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "profiling"))]
pub use crate::{profile_function, profile_scope};

use crate::config::ProfilingMode;

/// Address the puffin HTTP server binds to.
pub const PUFFIN_ADDR: &str = "127.0.0.1:8585";

#[cfg(feature = "profiling")]
static PROFILING_SERVER: std::sync::OnceLock<puffin_http::Server> = std::sync::OnceLock::new();

/// Initialize profiling for the given mode.
///
/// # Example
/// ```no_run
/// use ibmf_core::config::ProfilingMode;
/// use ibmf_core::profiling::init_profiling;
///
/// init_profiling(ProfilingMode::WithWebserver);
/// ```
pub fn init_profiling(mode: ProfilingMode) {
    match mode {
        ProfilingMode::Off => {}
        #[cfg(feature = "profiling")]
        ProfilingMode::WithWebserver => {
            puffin::set_scopes_on(true);

            match puffin_http::Server::new(PUFFIN_ADDR) {
                Ok(server) => {
                    tracing::info!("Puffin profiler server started on http://{}", PUFFIN_ADDR);
                    // Keep the server alive for the rest of the process
                    let _ = PROFILING_SERVER.set(server);
                }
                Err(e) => {
                    tracing::error!("Failed to start puffin server: {}", e);
                }
            }
        }
        #[cfg(not(feature = "profiling"))]
        ProfilingMode::WithWebserver => {
            tracing::warn!("Profiling requested but the `profiling` feature is disabled");
        }
    }
}

/// Mark the start of a new profiling frame.
///
/// Interactive previews call this once per relayout.
#[inline]
pub fn new_frame() {
    #[cfg(feature = "profiling")]
    puffin::GlobalProfiler::lock().new_frame();
}
