//! Performance benchmarks for the Staff Query and Derivation Engine.
//!
//! This benchmark suite measures the directory and certifications pages'
//! query paths over generated staff lists:
//! - Directory search, filter, sort and paginate over 1,000 staff
//! - Cached repeat of the same query
//! - Certification row flattening with derived statuses
//! - Overview summary
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use chrono::{Duration, NaiveDate, NaiveDateTime};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use staff_engine::config::EngineConfig;
use staff_engine::models::{
    Certification, CertificationStatus, CertificationType, DashboardStats, EmergencyContact, Role,
    Schedule, Shift, ShiftStatus, ShiftType, Staff, StaffStatus,
};
use staff_engine::query::{SortSpec, StaffFilter};
use staff_engine::snapshot::{Engine, Snapshot};

fn make_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 1, 15)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap()
}

/// Creates a staff member whose role, status, certifications and schedule
/// vary with `i`.
fn create_staff(i: usize) -> Staff {
    let today = make_now().date();
    let roles = [
        Role::Director,
        Role::LeadTeacher,
        Role::AssistantTeacher,
        Role::Admin,
        Role::SupportStaff,
    ];
    let statuses = [StaffStatus::Active, StaffStatus::Active, StaffStatus::OnLeave];

    let certifications = (0..(i % 4))
        .map(|c| Certification {
            id: format!("cert_{i}_{c}"),
            cert_type: CertificationType::ALL[c % CertificationType::ALL.len()],
            issue_date: today - Duration::days(700),
            expiration_date: today + Duration::days((i as i64 * 7 + c as i64 * 13) % 120 - 20),
            status: CertificationStatus::Active,
            document_url: None,
        })
        .collect();

    let mut schedule = Schedule::default();
    if i % 2 == 0 {
        schedule.monday.push(Shift {
            id: format!("shift_{i}"),
            shift_type: ShiftType::Morning,
            start_time: "7:00 AM".to_string(),
            end_time: "1:00 PM".to_string(),
            room: format!("Room {}", i % 6),
            status: ShiftStatus::Scheduled,
        });
    }

    Staff {
        id: i.to_string(),
        name: format!("Staff Member {i:04}"),
        email: format!("staff{i:04}@example.com"),
        phone: format!("(555) 010-{i:04}"),
        role: roles[i % roles.len()],
        hire_date: today - Duration::days((i as i64 * 37) % 3650),
        status: statuses[i % statuses.len()],
        avatar: None,
        certifications,
        schedule,
        emergency_contact: EmergencyContact {
            name: "Contact".to_string(),
            phone: "(555) 020-0000".to_string(),
            relationship: "Spouse".to_string(),
        },
    }
}

fn create_engine(staff_count: usize) -> Engine {
    let staff = (0..staff_count).map(create_staff).collect();
    Engine::new(EngineConfig::default(), Snapshot::new(staff, Vec::new()))
}

/// Benchmark: Directory query over growing staff lists, cache bypassed.
fn bench_directory_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("directory_query");

    for staff_count in [100, 1_000, 10_000] {
        let engine = create_engine(staff_count);
        let query = engine
            .staff_query()
            .search_text("member 0")
            .filter(StaffFilter::Status(StaffStatus::Active))
            .sort_by(SortSpec::descending("hireDate"))
            .page(1, 10);

        group.throughput(Throughput::Elements(staff_count as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(staff_count),
            &staff_count,
            |b, _| b.iter(|| black_box(query.run(engine.snapshot().staff()).unwrap())),
        );
    }

    group.finish();
}

/// Benchmark: The same directory query answered from the cache.
fn bench_cached_query(c: &mut Criterion) {
    let mut engine = create_engine(1_000);
    let query = engine
        .staff_query()
        .search_text("member")
        .sort_by(SortSpec::ascending("name"));
    engine.query_staff(&query).unwrap();

    c.bench_function("cached_directory_query", |b| {
        b.iter(|| black_box(engine.query_staff(&query).unwrap().total))
    });
}

/// Benchmark: Flattening certifications with derived statuses.
fn bench_certification_rows(c: &mut Criterion) {
    let engine = create_engine(1_000);
    let now = make_now();

    c.bench_function("certification_rows_1000_staff", |b| {
        b.iter(|| black_box(engine.certification_rows(now)))
    });
}

/// Benchmark: Building the overview summary.
fn bench_overview(c: &mut Criterion) {
    let engine = create_engine(1_000);
    let stats = DashboardStats::default();
    let now = make_now();

    c.bench_function("overview_1000_staff", |b| {
        b.iter(|| black_box(engine.overview(&stats, now).certifications_expiring))
    });
}

criterion_group!(
    benches,
    bench_directory_query,
    bench_cached_query,
    bench_certification_rows,
    bench_overview
);
criterion_main!(benches);
