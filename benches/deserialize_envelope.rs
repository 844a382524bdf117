/// Benchmarks for response envelope deserialization.
///
/// Every API call ends by unwrapping the `{code, status, data}` envelope, so
/// this is the one deserialization path shared by all operations. Login is
/// the largest common payload; title data stands in for the small ones.
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use gamestack_client_sdk::client::types::response::{GetTitleDataResult, LoginResult};
use gamestack_client_sdk::types::{Envelope, ServiceError};

fn bench_envelope(c: &mut Criterion) {
    let mut group = c.benchmark_group("envelope");

    let login = r#"{
        "code": 200,
        "status": "OK",
        "data": {
            "SessionTicket": "AAAA--BBBB-CCCCCCCCCCCCCCCC-DDDDDDDDDDDDDDDD.EEEEEEEEEEEE",
            "PlayerId": "A1B2C3D4E5F60718",
            "NewlyCreated": false,
            "EntityToken": {
                "EntityToken": "ZXlKaGJHY2lPaUpGVXpJMU5pSXNJbXRwWkNJNklqRWlmUT09",
                "TokenExpiration": "2026-09-01T00:00:00Z",
                "Entity": {
                    "Id": "8F7A6B5C4D3E2F10",
                    "Type": "title_player_account"
                }
            },
            "LastLoginTime": "2026-08-29T10:00:00Z"
        }
    }"#;

    group.throughput(Throughput::Bytes(login.len() as u64));
    group.bench_function("LoginResult", |b| {
        b.iter(|| {
            let _: Envelope<LoginResult> = serde_json::from_str(std::hint::black_box(login))
                .expect("deserialization succeeds");
        });
    });

    let title_data = r#"{
        "code": 200,
        "status": "OK",
        "data": {
            "Data": {
                "MOTD": "Double XP weekend is live",
                "StoreVersion": "47",
                "SeasonEnd": "2026-09-15T00:00:00Z"
            }
        }
    }"#;

    group.throughput(Throughput::Bytes(title_data.len() as u64));
    group.bench_function("GetTitleDataResult", |b| {
        b.iter(|| {
            let _: Envelope<GetTitleDataResult> =
                serde_json::from_str(std::hint::black_box(title_data))
                    .expect("deserialization succeeds");
        });
    });

    group.finish();
}

fn bench_service_error(c: &mut Criterion) {
    let mut group = c.benchmark_group("service_error");

    let error = r#"{
        "code": 400,
        "status": "BadRequest",
        "error": "InvalidParams",
        "errorCode": 1000,
        "errorMessage": "Invalid input parameters",
        "errorDetails": {
            "CustomId": ["CustomId must not be empty"]
        }
    }"#;

    group.throughput(Throughput::Bytes(error.len() as u64));
    group.bench_function("ServiceError", |b| {
        b.iter(|| {
            let _: ServiceError = serde_json::from_str(std::hint::black_box(error))
                .expect("deserialization succeeds");
        });
    });

    group.finish();
}

criterion_group!(benches, bench_envelope, bench_service_error);
criterion_main!(benches);
