use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use car_kinematics::*;
use std::hint::black_box;

fn prepare_vehicle(steering_angle_deg: f64) -> Vehicle {
    let mut state = VehicleState::at(DVec2::new(350.0, 350.0));
    state.local_speed = 30.0;
    state.steering_angle_deg = steering_angle_deg;
    Vehicle::with_state(state, VehicleSpec::default(), Viewport::default())
        .expect("default spec is valid")
}

fn bench_vehicle_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("vehicle_step");
    for &angle in &[0.0_f64, 10.0, 35.0] {
        group.bench_with_input(BenchmarkId::new("steering", angle), &angle, |b, &angle| {
            let mut vehicle = prepare_vehicle(angle);
            b.iter(|| {
                vehicle.accelerate();
                black_box(vehicle.step())
            })
        });
    }
    group.finish();
}

fn bench_driven_frame(c: &mut Criterion) {
    c.bench_function("session_frame", |b| {
        let mut session =
            DrivingSession::new(VehicleSpec::default(), Viewport::default()).expect("valid spec");
        session.push_input(InputEvent::Pressed(Key::Accelerate));
        session.push_input(InputEvent::Pressed(Key::SteerLeft));
        b.iter(|| black_box(session.frame()))
    });
}

fn bench_hitbox(c: &mut Criterion) {
    let spec = VehicleSpec::default();
    let mut state = VehicleState::at(DVec2::new(100.0, 100.0));
    state.heading_deg = 33.0;
    c.bench_function("hitbox_polygon", |b| {
        b.iter(|| black_box(hitbox_polygon(black_box(&state), &spec)))
    });
}

criterion_group!(benches, bench_vehicle_step, bench_driven_frame, bench_hitbox);
criterion_main!(benches);
