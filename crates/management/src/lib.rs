//! Dashboard backend — campaign submission handling and the REST surface
//! the campaign views consume.
//!
//! The store gateway is constructed by the caller and injected into the
//! router; this crate holds no state of its own.

pub mod handlers;
pub mod models;
pub mod router;
pub mod submission;

pub use handlers::DashboardState;
pub use router::dashboard_router;
