//! Backend service for everyday utility queries.
//!
//! This crate provides the HTTP backend behind a small utility SPA: a
//! holiday/workday classification engine for the Chinese public-holiday
//! calendar, a client IP lookup endpoint with a stub geolocation, and the
//! embedded static frontend it serves for any non-API route.

#![warn(missing_docs)]

pub mod api;
pub mod assets;
pub mod error;
pub mod geo;
pub mod holiday;
