use car_kinematics::*;

fn main() {
    let mut session = DrivingSession::new(VehicleSpec::default(), Viewport::default())
        .expect("default spec is valid");

    session.push_input(InputEvent::Pressed(Key::Accelerate));
    for _ in 0..600 {
        session.frame();
    }

    session.push_input(InputEvent::Pressed(Key::SteerLeft));
    for _ in 0..240 {
        session.frame();
    }
    session.push_input(InputEvent::Released(Key::SteerLeft));
    session.push_input(InputEvent::Released(Key::Accelerate));
    session.push_input(InputEvent::Pressed(Key::Brake));

    let mut output = session.frame();
    while session.vehicle().state().local_speed > 0.0 {
        output = session.frame();
    }

    if let Some(telemetry) = output.telemetry {
        println!("{telemetry}");
    }
    match session.submit_console_line("set top_speed_mph 150") {
        Ok(reply) => println!("console: {reply}"),
        Err(err) => println!("console: {err}"),
    }
    println!("hitbox: {:?}", session.hitbox());
}
