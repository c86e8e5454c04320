//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by page concern (`auth`, `inputs`, `waitlist`) so
//! individual components can depend on small focused models. Every
//! transition is a plain function over plain data, unit-testable without a
//! DOM; components own the signals and call into these.

pub mod auth;
pub mod inputs;
pub mod waitlist;
