use criterion::{criterion_group, criterion_main, Criterion};
use std::sync::Arc;

use service::parking_spot::domain::ParkingSpotInput;
use service::parking_spot::repository::mock::InMemoryParkingSpotRepository;
use service::parking_spot::ParkingSpotService;

fn input(n: u64) -> ParkingSpotInput {
    ParkingSpotInput {
        parking_spot_number: format!("{n}"),
        license_plate_car: format!("P{n}"),
        brand_car: "Honda".into(),
        model_car: "Civic".into(),
        color_car: "Black".into(),
        responsible_name: "Bench".into(),
        apartment: format!("{n}"),
        block: "A".into(),
    }
}

fn bench_create_and_get(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let svc = ParkingSpotService::new(Arc::new(InMemoryParkingSpotRepository::default()));

    let mut n = 0u64;
    c.bench_function("parking_spot_create", |b| {
        b.iter(|| {
            n += 1;
            rt.block_on(svc.create(input(n))).unwrap();
        });
    });

    // conflict path: plate already registered
    let _ = rt.block_on(svc.create(input(0)));
    c.bench_function("parking_spot_create_conflict", |b| {
        b.iter(|| {
            let _ = rt.block_on(svc.create(input(0))).unwrap_err();
        });
    });

    let id = rt.block_on(svc.list()).unwrap()[0].id;
    c.bench_function("parking_spot_get", |b| {
        b.iter(|| {
            rt.block_on(svc.get(id)).unwrap();
        });
    });
}

criterion_group!(benches, bench_create_and_get);
criterion_main!(benches);
