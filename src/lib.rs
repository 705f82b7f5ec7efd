//! # SAMS Rust Backend
//!
//! Timetable analysis backend for the school administration platform.
//!
//! This crate provides the Rust backend for the timetable subsystem: storage
//! of weekly class timetables behind a repository boundary, and a read-only
//! conflict-detection engine that inspects the scheduled sessions of one
//! timetable against the whole school. The backend exposes a REST API via
//! Axum for the web frontend.
//!
//! ## Features
//!
//! - **Data Loading**: Parse weekly timetables from JSON format
//! - **Conflict Analysis**: Detect teacher double-bookings, long back-to-back
//!   runs, daily overload, and same-day subject repetition
//! - **Time Handling**: `"HH:MM"` wall-clock parsing and interval reasoning
//! - **HTTP API**: RESTful endpoints for frontend integration
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Identifier newtypes and DTO re-exports for API responses
//! - [`models`]: Timetable, session, and assignment domain records
//! - [`db`]: Repository pattern and persistence boundary
//! - [`services`]: High-level business logic, including the conflict engine
//! - [`routes`]: Route-specific data types
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! ## Analysis model
//!
//! The conflict engine is a pure function over two immutable snapshots: the
//! assignments of the timetable under review, and the assignments of the
//! whole school. It performs no I/O, keeps no state between calls, and is
//! safe to invoke concurrently for different timetables. Fetching the two
//! snapshots is the caller's (or the async wrapper's) responsibility.

// Allow large error types - RepositoryError contains rich context for debugging
#![allow(clippy::result_large_err)]

pub mod api;

pub mod db;
pub mod models;

pub mod routes;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
