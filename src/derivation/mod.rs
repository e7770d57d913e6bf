//! Status derivation for the staff engine.
//!
//! This module contains the pure functions that turn dated records into
//! categorical status values: certification status from expiration dates, and
//! on-duty status from a staff member's schedule.

mod certification_status;
mod duty;

pub use certification_status::{
    StatusMismatch, StatusPolicy, derive_certification_status, effective_status,
    status_mismatches,
};
pub use duty::{is_on_duty_today, on_duty_today};
