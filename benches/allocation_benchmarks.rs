//! Performance benchmarks for the Appraisal Engine.
//!
//! Covers bonus allocation over synthetic organizations, both directly and
//! through the HTTP router:
//! - Allocation over 100 employees: < 5ms mean
//! - Allocation over 1000 employees: < 50ms mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use appraisal_engine::api::{AppState, create_router};
use appraisal_engine::calculation::{BonusRequest, allocate_bonus};
use appraisal_engine::config::ConfigLoader;
use appraisal_engine::models::{
    Employee, EmployeePerformance, KeyResultArea, PerformanceTarget, Pillar, SoftSkillRating,
};
use appraisal_engine::records::AppraisalStore;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

const PERIOD: &str = "Jan-Jun 2025";

fn load_config() -> ConfigLoader {
    ConfigLoader::load("./config/appraisal").expect("Failed to load config")
}

/// Builds an organization with two strategic targets and two soft skills rated
/// for every employee. Every tenth employee has no salary.
fn create_store(employee_count: u64) -> AppraisalStore {
    let mut store = AppraisalStore::new();
    store.add_pillar(Pillar::new(1, "SHARED PERFORMANCE AREAS")).unwrap();
    store.add_pillar(Pillar::new(2, "SOFT SKILLS")).unwrap();

    for (id, pillar_id, name) in [(1, 1, "Membership"), (2, 1, "Deposits"), (3, 2, "Teamwork"), (4, 2, "Diligence")] {
        store
            .add_kra(KeyResultArea {
                id,
                pillar_id,
                name: name.to_string(),
                description: None,
            })
            .unwrap();
    }
    for (id, kra_id, weight) in [(1, 1, 10), (2, 2, 5)] {
        store
            .add_target(PerformanceTarget {
                id,
                kra_id,
                description: format!("Target {}", id),
                target_value: Some(100),
                annual_target: None,
                weight,
            })
            .unwrap();
    }

    for i in 0..employee_count {
        store
            .add_employee(Employee {
                id: i,
                username: format!("emp_{:04}", i),
                first_name: "Bench".to_string(),
                last_name: format!("{}", i),
                email: String::new(),
                employee_number: None,
                annual_salary: if i % 10 == 9 {
                    None
                } else {
                    Some(Decimal::from(30_000 + (i % 7) * 5_000))
                },
                department: None,
                role: None,
                active: true,
            })
            .unwrap();

        for target_id in [1, 2] {
            store
                .record_performance(EmployeePerformance {
                    employee_id: i,
                    target_id,
                    period_under_review: PERIOD.to_string(),
                    actual_achievement: ((i * 13 + target_id * 7) % 120) as i64,
                    actual_rating: None,
                    comments: None,
                })
                .unwrap();
        }
        for kra_id in [3, 4] {
            store
                .record_soft_skill_rating(SoftSkillRating {
                    employee_id: i,
                    kra_id,
                    period_under_review: PERIOD.to_string(),
                    rating: Decimal::from((i * 17 + kra_id * 3) % 101),
                    weight: 5,
                    comments: None,
                })
                .unwrap();
        }
    }

    store
}

fn bonus_request() -> BonusRequest {
    BonusRequest {
        total_bonus_pool: Decimal::from(1_000_000),
        period_under_review: PERIOD.to_string(),
    }
}

/// Benchmark: direct allocation at increasing organization sizes.
fn bench_allocation(c: &mut Criterion) {
    let config = load_config();
    let request = bonus_request();

    let mut group = c.benchmark_group("allocation");

    for employee_count in [100_u64, 1000].iter() {
        let store = create_store(*employee_count);

        group.throughput(Throughput::Elements(*employee_count));
        group.bench_with_input(
            BenchmarkId::new("employees", employee_count),
            employee_count,
            |b, _| b.iter(|| black_box(allocate_bonus(&store, &request, &config).unwrap())),
        );
    }

    group.finish();
}

/// Benchmark: allocation over 1000 employees through the router.
///
/// Target: < 50ms mean
fn bench_http_allocation(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(AppState::new(load_config(), create_store(1000)));
    let body = serde_json::json!({
        "total_bonus_pool": "1000000",
        "period_under_review": PERIOD
    })
    .to_string();

    let mut group = c.benchmark_group("http_allocation");
    group.sample_size(20);

    group.bench_function("employees_1000", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/bonus-calculation")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_allocation, bench_http_allocation);
criterion_main!(benches);
