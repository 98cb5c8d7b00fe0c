use crate::{Action, Config, Error, Toggle, load_from_str};

#[test]
fn empty_struct_uses_defaults() {
    let cfg = load_from_str("()").unwrap();
    assert_eq!(cfg, Config::default());
    assert_eq!(cfg.program, "pacmd");
    assert_eq!(cfg.native_max, 65536);
    assert_eq!(cfg.step, 5);
}

#[test]
fn default_config_validates() {
    Config::default().validate().unwrap();
}

#[test]
fn parses_keys() {
    let cfg = load_from_str(
        r#"(
            program: "/usr/bin/pacmd",
            step: 10,
            keys: [
                ("+", "Louder", volume_up),
                ("-", "Quieter", change_volume(-2)),
                ("m", "Mute", mute(on)),
                ("u", "Unmute", mute(off)),
                ("h", "Half", set_volume(50)),
                ("q", "Done", exit),
            ],
        )"#,
    )
    .unwrap();
    assert_eq!(cfg.program, "/usr/bin/pacmd");
    assert_eq!(cfg.step, 10);
    assert_eq!(cfg.keys.len(), 6);
    assert_eq!(cfg.action("+"), Some(Action::VolumeUp));
    assert_eq!(cfg.action("-"), Some(Action::ChangeVolume(-2)));
    assert_eq!(cfg.action("m"), Some(Action::Mute(Toggle::On)));
    assert_eq!(cfg.action("h"), Some(Action::SetVolume(50)));
    assert_eq!(cfg.action("z"), None);
}

#[test]
fn unknown_field_is_parse_error() {
    let err = load_from_str("(\n  volume_step: 3,\n)").unwrap_err();
    match &err {
        Error::Parse { message, .. } => assert!(message.contains("volume_step"), "{message}"),
        other => panic!("{:?}", other),
    }
}

#[test]
fn step_out_of_range_is_validation_error() {
    let err = load_from_str("(step: 0)").unwrap_err();
    assert!(matches!(err, Error::Validation { .. }), "{err:?}");
    assert!(err.pretty().contains("step"));
}

#[test]
fn set_volume_above_hundred_rejected() {
    let err = load_from_str(r#"(keys: [("x", "Loud", set_volume(150)), ("q", "Done", exit)])"#)
        .unwrap_err();
    assert!(err.pretty().contains("set_volume(150)"), "{}", err.pretty());
}

#[test]
fn change_volume_out_of_range_rejected() {
    let err = load_from_str(r#"(keys: [("x", "Drop", change_volume(-120)), ("q", "Done", exit)])"#)
        .unwrap_err();
    assert!(matches!(err, Error::Validation { .. }), "{err:?}");
    assert!(err.pretty().contains("change_volume(-120)"), "{}", err.pretty());
}

#[test]
fn duplicate_keys_rejected() {
    let err = load_from_str(r#"(keys: [("q", "Done", exit), ("q", "Also done", exit)])"#)
        .unwrap_err();
    assert!(err.pretty().contains("more than once"));
}

#[test]
fn keymap_without_exit_rejected() {
    let err = load_from_str(r#"(keys: [("k", "Louder", volume_up)])"#).unwrap_err();
    assert!(err.pretty().contains("no exit binding"));
}

#[test]
fn toggle_apply() {
    assert!(Toggle::On.apply(false));
    assert!(!Toggle::Off.apply(true));
    assert!(Toggle::Toggle.apply(false));
    assert!(!Toggle::Toggle.apply(true));
}

#[test]
fn roundtrips_through_ron() {
    let text = ron::to_string(&Config::default()).unwrap();
    assert_eq!(load_from_str(&text).unwrap(), Config::default());
}
