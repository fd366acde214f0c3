use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fittrack::events::{ActivityEvent, EventPublisher, InProcessBroker};
use fittrack::models::{ActivityRequest, ActivityType};
use chrono::Utc;
use std::collections::HashMap;
use std::time::Duration;

fn event(user_id: &str) -> ActivityEvent {
    ActivityEvent::new(
        ActivityRequest {
            user_id: user_id.to_string(),
            activity_type: ActivityType::Run,
            duration: 30,
            calories_burned: 300,
            start_time: Utc::now(),
            additional_metrics: HashMap::new(),
        }
        .into_activity(),
    )
}

fn benchmark_publish(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().expect("Failed to build runtime");

    let mut group = c.benchmark_group("broker_publish");

    group.bench_function("publish_1k_events_16_users", |b| {
        b.iter(|| {
            rt.block_on(async {
                let broker =
                    InProcessBroker::new("bench", 4, 2048, Duration::from_millis(100));
                for i in 0..1_000 {
                    let user = format!("user-{}", i % 16);
                    broker.publish(black_box(event(&user))).await.unwrap();
                }
                broker.metrics().events_published
            })
        })
    });

    group.bench_function("publish_1k_events_single_user", |b| {
        b.iter(|| {
            rt.block_on(async {
                let broker =
                    InProcessBroker::new("bench", 4, 2048, Duration::from_millis(100));
                for _ in 0..1_000 {
                    broker.publish(black_box(event("user-0"))).await.unwrap();
                }
                broker.metrics().events_published
            })
        })
    });

    group.finish();
}

criterion_group!(benches, benchmark_publish);
criterion_main!(benches);
