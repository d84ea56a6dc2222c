//! Domain types for the commute alert pipeline.
//!
//! All types enforce their invariants at construction time, so code that
//! receives these types can trust their validity: a `RouteId` or `StopId`
//! is always a well-formed identifier, and a `TargetWindow` always carries
//! a representable time-of-day and a non-negative tolerance.

mod route;
mod stop;
mod window;

pub use route::{InvalidRouteId, RouteId};
pub use stop::{InvalidStopId, StopId};
pub use window::{InvalidWindow, TargetWindow};
