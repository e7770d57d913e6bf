//! Staff Query and Derivation Engine for childcare staff dashboards
//!
//! This crate derives certification and on-duty status from staff records, and
//! searches, filters, sorts, paginates and summarizes them for the staff
//! directory, certifications, schedule and overview pages.

#![warn(missing_docs)]

pub mod aggregate;
pub mod columns;
pub mod config;
pub mod derivation;
pub mod error;
pub mod models;
pub mod query;
pub mod schedule;
pub mod snapshot;
