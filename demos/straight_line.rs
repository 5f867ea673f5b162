use car_kinematics::*;

fn main() {
    let spec = VehicleSpec::default();
    let mut vehicle = Vehicle::new(DVec2::new(35.0, 350.0), spec, Viewport::default())
        .expect("default spec is valid");

    vehicle.accelerate();
    for frame in 0..=1_200 {
        let pose = vehicle.step();
        if frame % 240 == 0 {
            println!(
                "t={:>5.2}s x={:>7.2} speed={:>6.2} mph",
                frame as f64 * spec.time_step_sec,
                pose.position.x,
                vehicle.speed_mph()
            );
        }
    }
}
