//! Core data models for the staff engine.
//!
//! This module contains the dataset records the engine queries and derives
//! views from. Records are read-only once loaded.

#[macro_use]
mod label;

mod attendance;
mod certification;
mod dashboard;
mod schedule;
mod staff;
mod time_off;

pub use attendance::{AttendanceRecord, AttendanceStatus};
pub use certification::{Certification, CertificationStatus, CertificationType};
pub use dashboard::DashboardStats;
pub use schedule::{Schedule, Shift, ShiftStatus, ShiftType};
pub use staff::{EmergencyContact, Role, Staff, StaffStatus};
pub use time_off::{TimeOffRequest, TimeOffStatus, TimeOffType};
