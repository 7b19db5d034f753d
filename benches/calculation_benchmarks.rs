//! Performance benchmarks for the paystub engine.
//!
//! Covers a single statement calculated directly, a full year of history,
//! Markdown rendering, and the `/calculate` and `/statements` endpoints.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use paystub_engine::api::{AppState, CalculationRequest, create_router};
use paystub_engine::calculation::{calculate_history, calculate_paystub};
use paystub_engine::config::ConfigLoader;
use paystub_engine::export::{MarkdownDocument, export_statements, generate_markdown};
use paystub_engine::models::EmploymentConfiguration;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Loads the sample salaried configuration (benefits package enabled).
fn sample_configuration() -> EmploymentConfiguration {
    ConfigLoader::load("./config/sample_employee.yaml")
        .expect("Failed to load config")
        .into_configuration()
}

fn post(uri: &str, body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

/// Benchmark: one statement through the full pipeline.
fn bench_single_statement(c: &mut Criterion) {
    let config = sample_configuration();

    c.bench_function("single_statement", |b| {
        b.iter(|| calculate_paystub(black_box(&config), black_box(0)).unwrap())
    });
}

/// Benchmark: a year of weekly statements.
fn bench_history_52(c: &mut Criterion) {
    let mut config = sample_configuration();
    config.pay_frequency = paystub_engine::models::PayFrequency::Weekly;

    c.bench_function("history_52", |b| {
        b.iter(|| calculate_history(black_box(&config), 52).unwrap())
    });
}

/// Benchmark: rendering one statement as Markdown.
fn bench_markdown(c: &mut Criterion) {
    let config = sample_configuration();
    let paystub = calculate_paystub(&config, 0).unwrap();

    c.bench_function("markdown_render", |b| {
        b.iter(|| generate_markdown(black_box(&config), black_box(&paystub)))
    });
}

/// Benchmark: `/calculate` through the router.
fn bench_api_calculate(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(AppState::new(sample_configuration()));
    let body = serde_json::to_string(&CalculationRequest::default()).unwrap();

    c.bench_function("api_calculate", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(post("/calculate", body.clone()))
                .await
                .unwrap();
            black_box(response)
        })
    });
}

/// Benchmark: batch export and `/statements` as the statement count grows.
fn bench_scaling(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let config = sample_configuration();
    let state = AppState::new(config.clone());

    let mut group = c.benchmark_group("scaling");

    for count in [1u32, 4, 12, 26, 52].iter() {
        group.throughput(Throughput::Elements(u64::from(*count)));

        group.bench_with_input(BenchmarkId::new("markdown_export", count), count, |b, &count| {
            b.iter(|| export_statements(&config, count, MarkdownDocument::new()).unwrap())
        });

        let router = create_router(state.clone());
        let body = serde_json::json!({ "count": count }).to_string();
        group.bench_with_input(BenchmarkId::new("api_statements", count), count, |b, _| {
            b.to_async(&rt).iter(|| async {
                let router = router.clone();
                let response = router
                    .oneshot(post("/statements", body.clone()))
                    .await
                    .unwrap();
                black_box(response)
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_single_statement,
    bench_history_52,
    bench_markdown,
    bench_api_calculate,
    bench_scaling,
);
criterion_main!(benches);
