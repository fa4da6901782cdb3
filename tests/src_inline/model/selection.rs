use super::*;

#[test]
fn test_default_selection() {
    let sel = ParameterSelection::parse(DEFAULT_PARAMS).unwrap();
    assert_eq!(
        sel.names(),
        &["ombh2", "omch2", "w0", "ns", "ln10As", "H0", "Neff"]
    );
}

#[test]
fn test_whitespace_is_trimmed() {
    let sel = ParameterSelection::parse(" H0 , ns").unwrap();
    assert_eq!(sel.names(), &["H0", "ns"]);
}

#[test]
fn test_empty_list() {
    assert!(matches!(
        ParameterSelection::parse(""),
        Err(ModelError::EmptySelection)
    ));
}

#[test]
fn test_empty_name() {
    assert!(matches!(
        ParameterSelection::parse("H0,,ns"),
        Err(ModelError::EmptyParameterName(_))
    ));
}
