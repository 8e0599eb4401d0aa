//! Performance benchmarks for the ESB Calculation Engine.
//!
//! This benchmark suite verifies that the calculation engine meets performance targets:
//! - Single snapshot: < 10μs mean
//! - Twelve-month provision schedule: < 250μs mean
//! - Batch of 100 employees: < 1ms mean
//! - Batch of 1000 employees: < 10ms mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chrono::NaiveDate;
use rust_decimal::Decimal;

use esb_engine::api::create_router;
use esb_engine::calculation::{monthly_accrual_schedule, snapshot_as_of};
use esb_engine::models::{Employee, EmployeeStatus, SalaryHistoryEntry, ServicePeriodSource};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Creates an employee with a realistic salary history of `history_len`
/// entries, one per year from the hire date.
fn create_bench_employee(id: usize, history_len: usize) -> Employee {
    let hire_date = date(2010, 1, 1);
    let salary_history: Vec<SalaryHistoryEntry> = (0..history_len)
        .map(|i| {
            SalaryHistoryEntry::from_components(
                date(2010 + i as i32, 1, 1),
                Decimal::from(8000 + 250 * i as u32),
                Decimal::from(2000),
                Decimal::from(500),
                Decimal::ZERO,
                None,
            )
        })
        .collect();

    Employee {
        id: format!("emp_bench_{:04}", id),
        hire_date,
        contract_end_date: None,
        status: EmployeeStatus::Active,
        termination_date: None,
        termination_reason: None,
        basic_salary: Decimal::from(12000),
        housing_allowance: Decimal::from(3000),
        transport_allowance: Decimal::from(800),
        other_allowances: Decimal::ZERO,
        opening_balance: Decimal::from(15000),
        salary_history,
        service_period: ServicePeriodSource::Computed,
        payout_amount: None,
        payout_date: None,
    }
}

/// Benchmark: single snapshot with a ten-entry salary history.
///
/// Target: < 10μs mean
fn bench_single_snapshot(c: &mut Criterion) {
    let employee = create_bench_employee(1, 10);
    let as_of = date(2024, 6, 30);

    c.bench_function("single_snapshot", |b| {
        b.iter(|| snapshot_as_of(black_box(&employee), black_box(as_of)))
    });
}

/// Benchmark: twelve-month provision schedule for one employee.
///
/// Target: < 250μs mean
fn bench_provision_schedule(c: &mut Criterion) {
    let employee = create_bench_employee(1, 10);
    let month_ends: Vec<NaiveDate> = (1..=12)
        .map(|month| {
            let first_of_next = if month == 12 {
                date(2024, 1, 1)
            } else {
                date(2023, month + 1, 1)
            };
            first_of_next.pred_opt().unwrap()
        })
        .collect();

    c.bench_function("provision_schedule_12_months", |b| {
        b.iter(|| monthly_accrual_schedule(black_box(&employee), black_box(&month_ends)))
    });
}

/// Benchmark: batch snapshot computation across employee counts.
///
/// Targets: 100 employees < 1ms, 1000 employees < 10ms
fn bench_batch_snapshots(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_snapshots");
    let as_of = date(2024, 6, 30);

    for count in [100usize, 1000] {
        let employees: Vec<Employee> = (0..count)
            .map(|i| create_bench_employee(i, 5))
            .collect();

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(count),
            &employees,
            |b, employees| {
                b.iter(|| {
                    for employee in employees {
                        black_box(snapshot_as_of(employee, as_of));
                    }
                })
            },
        );
    }

    group.finish();
}

/// Benchmark: full HTTP round trip through the snapshot endpoint.
fn bench_snapshot_api(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();

    let body = serde_json::json!({
        "employee": {
            "id": "emp_bench_api",
            "hire_date": "2018-01-01",
            "status": "ACTIVE",
            "basic_salary": "10000",
            "housing_allowance": "2500",
            "transport_allowance": "800"
        },
        "as_of_date": "2024-06-30"
    })
    .to_string();

    c.bench_function("snapshot_api_round_trip", |b| {
        b.iter(|| {
            rt.block_on(async {
                let router = create_router();
                let response = router
                    .oneshot(
                        Request::builder()
                            .method("POST")
                            .uri("/snapshot")
                            .header("Content-Type", "application/json")
                            .body(Body::from(body.clone()))
                            .unwrap(),
                    )
                    .await
                    .unwrap();
                black_box(response.status())
            })
        })
    });
}

criterion_group!(
    benches,
    bench_single_snapshot,
    bench_provision_schedule,
    bench_batch_snapshots,
    bench_snapshot_api
);
criterion_main!(benches);
