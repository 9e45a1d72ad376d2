//! # Catalog
//!
//! Relational store for the SalonConnect catalog.
//!
//! Holds everything both the API server and the seeder need to talk to the
//! database: the SQLite schema, the row types, and the [`Store`] handle with
//! every query the application issues.
//!
//! ## Schema
//! - `users`: accounts for customers, salon owners, and stylists
//! - `salons`: the searchable venues, with optional coordinates
//! - `services` / `stylists`: belong to exactly one salon, soft-disabled via
//!   an `is_active` flag
//! - `stylist_schedules`: weekly availability windows (day-of-week 0-6)
//! - `bookings` + `booking_services`: an appointment and its service links
//! - `reviews`: 1-5 star ratings with optional comments
//!
//! ## Connection model
//! The pool is created lazily, so the server can come up without a reachable
//! database. Every query returns `sqlx::Error` to the caller; the salon
//! listing endpoint turns that into its demo fallback, everything else
//! surfaces it.

pub mod rows;
pub mod schema;
pub mod store;

pub use store::{SalonFilter, Store};
