use car_kinematics::*;

#[test]
fn set_updates_the_named_field() {
    let mut console = Console::new();
    let mut spec = VehicleSpec::default();

    let reply = console
        .execute("set top_speed_mph 140", &mut spec)
        .expect("valid edit");

    assert_eq!(spec.top_speed_mph, 140.0);
    assert_eq!(reply, "top_speed_mph = 140");
    assert_eq!(console.history(), ["set top_speed_mph 140".to_string()]);
}

#[test]
fn boolean_fields_accept_switch_words() {
    let mut console = Console::new();
    let mut spec = VehicleSpec::default();

    console.execute("set screen_wrap_enabled off", &mut spec).unwrap();
    assert!(!spec.screen_wrap_enabled);
    console.execute("set screen_wrap_enabled true", &mut spec).unwrap();
    assert!(spec.screen_wrap_enabled);
}

#[test]
fn rejected_lines_leave_spec_untouched() {
    let mut console = Console::new();
    let mut spec = VehicleSpec::default();
    let before = spec;

    let cases = [
        "set horsepower 300",
        "set brake_decel_g fast",
        "set zero_to_sixty_time_sec 0",
        "set max_steering_angle_deg 95",
        "set screen_wrap_enabled maybe",
        "launch",
        "set top_speed_mph",
        "set top_speed_mph 1 2",
    ];
    for line in cases {
        assert!(console.execute(line, &mut spec).is_err(), "{line} should fail");
        assert_eq!(spec, before, "{line} changed the spec");
    }
    assert!(console.history().is_empty());
}

#[test]
fn errors_are_typed() {
    let mut console = Console::new();
    let mut spec = VehicleSpec::default();

    assert_eq!(
        console.execute("get horsepower", &mut spec),
        Err(SimError::UnknownField("horsepower".to_string()))
    );
    assert_eq!(
        console.execute("set wheelbase_px wide", &mut spec),
        Err(SimError::InvalidValue {
            field: "wheelbase_px".to_string(),
            value: "wide".to_string(),
        })
    );
    assert!(matches!(
        console.execute("drive faster", &mut spec),
        Err(SimError::MalformedCommand(_))
    ));
}

#[test]
fn list_reports_every_field() {
    let mut console = Console::new();
    let mut spec = VehicleSpec::default();
    let listing = console.execute("list", &mut spec).unwrap();

    for field in ConfigField::ALL {
        assert!(listing.contains(field.name()), "missing {field}");
    }
    assert_eq!(listing.lines().count(), ConfigField::ALL.len());
}

#[test]
fn get_reads_without_changing() {
    let mut console = Console::new();
    let mut spec = VehicleSpec::default();
    let reply = console.execute("get wheelbase_px", &mut spec).unwrap();
    assert_eq!(reply, format!("wheelbase_px = {}", spec.wheelbase_px));
    assert_eq!(spec, VehicleSpec::default());
}

#[test]
fn spec_round_trips_through_toml() {
    let spec = VehicleSpec {
        top_speed_mph: 95.0,
        screen_wrap_enabled: false,
        ..VehicleSpec::default()
    };
    let text = spec.to_toml_string().expect("serializes");
    assert_eq!(VehicleSpec::from_toml_str(&text), Ok(spec));
}

#[test]
fn invalid_toml_is_reported() {
    assert!(matches!(
        VehicleSpec::from_toml_str("top_speed_mph = \"fast\""),
        Err(SimError::Deserialize(_))
    ));
    assert!(matches!(
        VehicleSpec::from_toml_str("wheelbase_px = 0.0"),
        Err(SimError::Configuration(_))
    ));
}
