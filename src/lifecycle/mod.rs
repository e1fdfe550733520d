//! Process lifecycle
//!
//! ```text
//! 1. Configuration Loading
//!    ↓
//! 2. DI Container Creation + Module Registration
//!    ↓
//! 3. Server Start
//!    ↓
//! [Running...]
//!    ↓
//! 4. Shutdown Signal (SIGTERM/SIGINT)
//!    ↓
//! 5. Drain in-flight requests, drop the container
//! ```
//!
//! The user collection lives only in the container, so it is gone once
//! step 5 finishes.

mod shutdown;

pub use shutdown::shutdown_signal;
