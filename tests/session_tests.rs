use car_kinematics::*;

fn session() -> DrivingSession {
    let spec = VehicleSpec {
        screen_wrap_enabled: false,
        ..VehicleSpec::default()
    };
    DrivingSession::new(spec, Viewport::new(700.0, 700.0)).expect("default spec is valid")
}

fn run_frames(session: &mut DrivingSession, frames: usize) -> FrameOutput {
    let mut last = session.frame();
    for _ in 1..frames {
        last = session.frame();
    }
    last
}

#[test]
fn session_starts_parked_at_viewport_center() {
    let session = session();
    assert_eq!(session.vehicle().state().position_global, DVec2::new(350.0, 350.0));
    assert_eq!(session.vehicle().state().local_speed, 0.0);
}

#[test]
fn accelerator_is_latched_until_released() {
    let mut session = session();
    session.push_input(InputEvent::Pressed(Key::Accelerate));
    let output = run_frames(&mut session, 600);

    assert!(session.vehicle().state().local_speed > 0.0);
    assert!(output.pose.position.x > 350.0);
    assert_eq!(session.vehicle().longitudinal_mode(), LongitudinalMode::Accelerating);

    session.push_input(InputEvent::Released(Key::Accelerate));
    session.frame();
    assert_eq!(session.vehicle().longitudinal_mode(), LongitudinalMode::Coasting);
}

#[test]
fn held_brake_stops_the_vehicle() {
    let mut session = session();
    session.push_input(InputEvent::Pressed(Key::Accelerate));
    run_frames(&mut session, 240);
    session.push_input(InputEvent::Released(Key::Accelerate));
    session.push_input(InputEvent::Pressed(Key::Brake));
    run_frames(&mut session, 2_000);

    assert_eq!(session.vehicle().state().local_speed, 0.0);
}

#[test]
fn holding_left_turns_counter_clockwise() {
    let mut session = session();
    session.push_input(InputEvent::Pressed(Key::Accelerate));
    run_frames(&mut session, 120);
    session.push_input(InputEvent::Pressed(Key::SteerLeft));
    run_frames(&mut session, 30);

    let state = session.vehicle().state();
    assert!(state.steering_angle_deg > 0.0);
    assert!(state.heading_deg > 0.0 && state.heading_deg < 180.0);
    assert_eq!(session.vehicle().steering_mode(), SteeringMode::SteeringLeft);

    session.push_input(InputEvent::Released(Key::SteerLeft));
    run_frames(&mut session, 200);
    assert_eq!(session.vehicle().state().steering_angle_deg, 0.0);
}

#[test]
fn console_mode_ignores_driving_keys_but_keeps_physics_running() {
    let mut session = session();
    session.push_input(InputEvent::Pressed(Key::Accelerate));
    run_frames(&mut session, 600);

    session.push_input(InputEvent::Pressed(Key::ToggleConsole));
    session.push_input(InputEvent::Pressed(Key::Accelerate));
    session.push_input(InputEvent::Pressed(Key::SteerLeft));
    let before = session.vehicle().state().position_global;
    session.frame();

    assert!(session.console().is_open());
    assert_eq!(session.vehicle().state().steering_angle_deg, 0.0);
    assert_eq!(session.vehicle().longitudinal_mode(), LongitudinalMode::Coasting);
    assert!(session.vehicle().state().position_global.x > before.x);
}

#[test]
fn console_edits_apply_to_the_live_vehicle() {
    let mut session = session();
    let before = units::max_speed_px_s(session.vehicle().spec());

    session
        .submit_console_line("set top_speed_mph 60")
        .expect("valid edit");
    let after = units::max_speed_px_s(session.vehicle().spec());
    assert!((after - before / 2.0).abs() < 1e-9);

    assert!(session.submit_console_line("set time_step_sec -1").is_err());
    assert_eq!(session.vehicle().spec().top_speed_mph, 60.0);
}

#[test]
fn debug_overlay_is_on_until_toggled() {
    let mut session = session();
    session.push_input(InputEvent::Pressed(Key::Accelerate));
    let output = run_frames(&mut session, 60);
    let telemetry = output.telemetry.expect("debug overlay starts on");

    assert!(telemetry.speed_mph > 0.0);
    assert!((telemetry.global_speed() - session.vehicle().state().local_speed).abs() < 1e-9);
    let text = telemetry.to_string();
    assert!(text.contains("px:"));
    assert!(text.contains("Angle:"));

    session.push_input(InputEvent::Pressed(Key::ToggleDebug));
    assert!(session.frame().telemetry.is_none());
}

#[test]
fn quit_key_is_reported() {
    let mut session = session();
    session.push_input(InputEvent::Pressed(Key::Quit));
    assert!(session.frame().quit);
}

#[test]
fn session_hitbox_tracks_vehicle() {
    let mut session = session();
    session.push_input(InputEvent::Pressed(Key::Accelerate));
    run_frames(&mut session, 30);

    let corners = session.hitbox();
    let center = corners.iter().copied().sum::<DVec2>() / 4.0;
    let position = session.vehicle().state().position_global;
    assert!((center - position).length() < 1e-9);
}
