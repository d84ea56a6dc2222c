//! Commute alert: a one-shot train departure reminder.
//!
//! Fetches a GTFS-realtime trip-update feed, picks the arrival at a
//! configured stop closest to a target time-of-day, and sends a push
//! notification timed to when you need to leave to catch it.

pub mod config;
pub mod domain;
pub mod feed;
pub mod notify;
pub mod planner;
