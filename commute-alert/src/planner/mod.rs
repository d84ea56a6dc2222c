//! Departure planning.
//!
//! Pure decision logic between the feed and the notifications: choose the
//! arrival that best matches the target window (`select`), then derive the
//! leave-by instant from it (`departure`). Both functions take every input
//! explicitly — including "now" — so they are deterministic under test.

mod departure;
mod select;

pub use departure::leave_by;
pub use select::select_arrival;
