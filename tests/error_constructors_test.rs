use aethon::error::AethonError;

#[test]
fn error_constructors_group_1() {
    assert!(matches!(
        AethonError::config("x"),
        AethonError::Config { .. }
    ));
    assert!(matches!(
        AethonError::network("x"),
        AethonError::Network { .. }
    ));
    assert!(matches!(
        AethonError::timeout("x"),
        AethonError::Timeout { .. }
    ));
    assert!(matches!(AethonError::api("x"), AethonError::Api { .. }));
}

#[test]
fn error_constructors_group_2() {
    assert!(matches!(
        AethonError::serialization("s"),
        AethonError::Serialization { .. }
    ));
    assert!(matches!(AethonError::io("x"), AethonError::Io { .. }));
    assert!(matches!(
        AethonError::validation("f", "m"),
        AethonError::Validation { .. }
    ));
    assert!(matches!(
        AethonError::generic("x"),
        AethonError::Generic { .. }
    ));
}

#[test]
fn display_messages() {
    let e = AethonError::validation("field", "bad");
    let s = format!("{}", e);
    assert!(s.contains("Validation error"));

    let e = AethonError::timeout("deadline elapsed");
    let s = format!("{}", e);
    assert!(s.contains("Timeout error"));
}

#[test]
fn conversions_from_serde() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let converted: AethonError = json_err.into();
    assert!(matches!(converted, AethonError::Serialization { .. }));

    let yaml_err = serde_yaml::from_str::<serde_yaml::Value>("a: [unclosed").unwrap_err();
    let converted: AethonError = yaml_err.into();
    assert!(matches!(converted, AethonError::Serialization { .. }));
}
