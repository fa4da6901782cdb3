use super::*;

#[test]
fn test_catalog_contents() {
    let ids: Vec<&str> = builtin_fiducials().iter().map(|f| f.id).collect();
    assert_eq!(ids, vec!["pl2018", "mdpl2"]);
    for def in builtin_fiducials() {
        assert_eq!(def.params.len(), 7);
        for p in def.params {
            assert!(p.sigma > 0.0, "{}:{} sigma must be positive", def.id, p.name);
        }
    }
}

#[test]
fn test_default_fiducial_resolves() {
    let def = find_fiducial(DEFAULT_FIDUCIAL).unwrap();
    assert_eq!(def.id, "mdpl2");
    let h0 = def.param("H0").unwrap();
    assert_eq!(h0.center, 67.77);
    assert_eq!(h0.sigma, 1.5);
}

#[test]
fn test_pl2018_values() {
    let def = find_fiducial("pl2018").unwrap();
    assert_eq!(def.param("w0").unwrap().center, -1.04);
    assert_eq!(def.param("ombh2").unwrap().sigma, 0.00022);
}

#[test]
fn test_unknown_fiducial() {
    let err = find_fiducial("wmap9").unwrap_err();
    match err {
        ModelError::UnknownFiducial { name, known } => {
            assert_eq!(name, "wmap9");
            assert_eq!(known, "pl2018, mdpl2");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_unknown_parameter() {
    let def = find_fiducial("mdpl2").unwrap();
    assert!(matches!(
        def.param("sigma8"),
        Err(ModelError::UnknownParameter { .. })
    ));
}
