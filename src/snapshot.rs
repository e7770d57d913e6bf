//! Dataset snapshots and the engine that queries them.
//!
//! A [`Snapshot`] is an immutable copy of the dataset with a unique id. The
//! [`Engine`] owns the current snapshot, the configuration and the query
//! caches; replacing the snapshot invalidates every cached result.
//!
//! Certification statuses are resolved against midnight-aligned expiration
//! instants, so they only change at day boundaries. Certification results
//! are therefore cached per calendar date rather than per instant.

use chrono::{NaiveDate, NaiveDateTime};
use serde::de::DeserializeOwned;
use tracing::info;
use uuid::Uuid;

use crate::aggregate::OverviewSummary;
use crate::config::EngineConfig;
use crate::derivation::{StatusMismatch, status_mismatches};
use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceRecord, DashboardStats, Staff, TimeOffRequest};
use crate::query::{
    CacheStats, CertificationFilter, CertificationRow, Page, Query, QueryCache, StaffFilter,
    certification_rows,
};

/// An immutable dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    id: Uuid,
    staff: Vec<Staff>,
    attendance: Vec<AttendanceRecord>,
    time_off: Vec<TimeOffRequest>,
}

impl Snapshot {
    /// Creates a snapshot with a fresh id.
    pub fn new(staff: Vec<Staff>, attendance: Vec<AttendanceRecord>) -> Self {
        Self {
            id: Uuid::new_v4(),
            staff,
            attendance,
            time_off: Vec::new(),
        }
    }

    /// Parses a snapshot from the dashboards' JSON documents: an array of
    /// staff members and an array of attendance records.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::DatasetParseError`] naming the document that
    /// failed.
    pub fn from_json(staff_json: &str, attendance_json: &str) -> EngineResult<Self> {
        let staff = parse_dataset("staff", staff_json)?;
        let attendance = parse_dataset("attendance", attendance_json)?;
        Ok(Self::new(staff, attendance))
    }

    /// Attaches time-off requests.
    pub fn with_time_off(mut self, time_off: Vec<TimeOffRequest>) -> Self {
        self.time_off = time_off;
        self
    }

    /// Unique id of this snapshot.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Staff members, in dataset order.
    pub fn staff(&self) -> &[Staff] {
        &self.staff
    }

    /// Attendance records, in dataset order.
    pub fn attendance(&self) -> &[AttendanceRecord] {
        &self.attendance
    }

    /// Time-off requests, in dataset order.
    pub fn time_off(&self) -> &[TimeOffRequest] {
        &self.time_off
    }

    /// Looks up a staff member by id.
    pub fn find_staff(&self, id: &str) -> Option<&Staff> {
        self.staff.iter().find(|member| member.id == id)
    }
}

fn parse_dataset<T: DeserializeOwned>(dataset: &str, json: &str) -> EngineResult<Vec<T>> {
    serde_json::from_str(json).map_err(|e| EngineError::DatasetParseError {
        dataset: dataset.to_string(),
        message: e.to_string(),
    })
}

/// Query front end over one snapshot at a time.
///
/// # Example
///
/// ```
/// use staff_engine::config::EngineConfig;
/// use staff_engine::snapshot::{Engine, Snapshot};
///
/// let mut engine = Engine::new(EngineConfig::default(), Snapshot::new(Vec::new(), Vec::new()));
/// let query = engine.staff_query().search_text("sarah");
///
/// let page = engine.query_staff(&query).unwrap();
/// assert_eq!(page.total, 0);
/// ```
#[derive(Debug)]
pub struct Engine {
    config: EngineConfig,
    snapshot: Snapshot,
    staff_cache: QueryCache<Query<StaffFilter>>,
    certification_cache: QueryCache<(Query<CertificationFilter>, NaiveDate)>,
    dated_rows: Option<DatedRows>,
}

/// Certification rows resolved for one snapshot and calendar date.
#[derive(Debug)]
struct DatedRows {
    snapshot_id: Uuid,
    date: NaiveDate,
    rows: Vec<CertificationRow>,
}

impl Engine {
    /// Creates an engine over `snapshot`.
    pub fn new(config: EngineConfig, snapshot: Snapshot) -> Self {
        let capacity = config.query_cache_capacity;
        Self {
            config,
            snapshot,
            staff_cache: QueryCache::with_capacity(capacity),
            certification_cache: QueryCache::with_capacity(capacity),
            dated_rows: None,
        }
    }

    /// The engine's configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The current snapshot.
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Swaps in a new snapshot, dropping every cached result.
    pub fn replace_snapshot(&mut self, snapshot: Snapshot) {
        info!(
            previous = %self.snapshot.id,
            current = %snapshot.id,
            staff = snapshot.staff.len(),
            attendance = snapshot.attendance.len(),
            "Replacing snapshot, invalidating query caches"
        );
        self.snapshot = snapshot;
        self.staff_cache.invalidate();
        self.certification_cache.invalidate();
        self.dated_rows = None;
    }

    /// A staff directory query with the configured page size and search
    /// fields.
    pub fn staff_query(&self) -> Query<StaffFilter> {
        Query::from_config(&self.config)
    }

    /// A certifications table query with the configured page size.
    pub fn certification_query(&self) -> Query<CertificationFilter> {
        Query {
            search_fields: vec!["staffName".to_string(), "type".to_string()],
            ..Query::from_config(&self.config)
        }
    }

    /// Runs a staff directory query, answering from the cache when the same
    /// query was run against the current snapshot.
    pub fn query_staff(&mut self, query: &Query<StaffFilter>) -> EngineResult<Page<&Staff>> {
        let staff = &self.snapshot.staff;
        let page = self
            .staff_cache
            .get_or_try_insert_with(self.snapshot.id, query, || query.select(staff))?;
        Ok(page.map(|index| &staff[index]))
    }

    /// Flattened certification rows with statuses resolved as of `now`.
    pub fn certification_rows(&self, now: NaiveDateTime) -> Vec<CertificationRow> {
        certification_rows(
            &self.snapshot.staff,
            self.config.status_policy,
            now,
            self.config.warning_window_days,
        )
    }

    /// Runs a certifications table query as of `now`.
    ///
    /// Rows are resolved once per snapshot and calendar date; any `now` on
    /// the same date shares both the rows and the cached page.
    pub fn query_certifications(
        &mut self,
        query: &Query<CertificationFilter>,
        now: NaiveDateTime,
    ) -> EngineResult<Page<CertificationRow>> {
        let date = now.date();
        let snapshot_id = self.snapshot.id;

        let rows = match self.dated_rows.take() {
            Some(dated) if dated.snapshot_id == snapshot_id && dated.date == date => dated.rows,
            _ => self.certification_rows(now),
        };
        let rows = &self
            .dated_rows
            .insert(DatedRows {
                snapshot_id,
                date,
                rows,
            })
            .rows;

        let key = (query.clone(), date);
        let page = self
            .certification_cache
            .get_or_try_insert_with(snapshot_id, &key, || query.select(rows))?;
        Ok(page.map(|index| rows[index].clone()))
    }

    /// Looks up a staff member in the current snapshot.
    pub fn find_staff(&self, id: &str) -> Option<&Staff> {
        self.snapshot.find_staff(id)
    }

    /// Builds the overview page summary as of `now`.
    pub fn overview(&self, stats: &DashboardStats, now: NaiveDateTime) -> OverviewSummary<'_> {
        OverviewSummary::build(&self.snapshot, stats, now, &self.config)
    }

    /// Certifications whose recorded status disagrees with their dates.
    pub fn status_mismatches(&self, now: NaiveDateTime) -> Vec<StatusMismatch> {
        status_mismatches(&self.snapshot.staff, now, self.config.warning_window_days)
    }

    /// Cache counters for staff and certification queries.
    pub fn cache_stats(&self) -> (CacheStats, CacheStats) {
        (self.staff_cache.stats(), self.certification_cache.stats())
    }
}
