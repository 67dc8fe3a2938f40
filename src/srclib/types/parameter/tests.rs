// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use approx::assert_abs_diff_eq;

use super::*;

fn xml_par(name: &str, value: &str, unit: Option<&str>) -> XmlParameter {
    XmlParameter {
        name: name.to_string(),
        value: value.to_string(),
        unit: unit.map(|u| u.to_string()),
    }
}

fn get_test_pset() -> ParameterSet {
    ParameterSet::new(vec![
        Parameter::new("Prefactor", 1e-12, "cm-2 s-1 TeV-1"),
        Parameter::new("Index", -2.3, ""),
        Parameter::new("Scale", 1.0, "TeV"),
    ])
}

#[test]
fn test_parameter_to_xml() {
    let p = Parameter::new("Prefactor", 1e-12, "cm-2 s-1 TeV-1");
    assert_eq!(
        p.to_xml(),
        r#"        <parameter name="Prefactor" value="1e-12" unit="cm-2 s-1 TeV-1"/>"#
    );

    let p = Parameter::new("Index", -2.3, "");
    assert_eq!(
        p.to_xml(),
        r#"        <parameter name="Index" value="-2.3" unit=""/>"#
    );

    let p = Parameter::new("Scale", 1.0, "TeV");
    assert_eq!(
        p.to_xml(),
        r#"        <parameter name="Scale" value="1.0" unit="TeV"/>"#
    );
}

#[test]
fn test_parameter_xml_round_trip() {
    for (name, value, unit) in [
        ("Prefactor", 3.5e-11, "cm-2 s-1 TeV-1"),
        ("Index", -2.63, ""),
        ("Cutoff", 10.0, "TeV"),
        ("GLON", 184.557, "deg"),
    ] {
        let p = Parameter::new(name, value, unit);
        let xml = p.to_xml();
        // Pull the attribute values back out of the fragment.
        let attr = |key: &str| -> String {
            let start = xml.find(&format!("{key}=\"")).unwrap() + key.len() + 2;
            let len = xml[start..].find('"').unwrap();
            xml[start..start + len].to_string()
        };
        let result = Parameter::from_xml(&xml_par(&attr("name"), &attr("value"), Some(&attr("unit"))));
        assert!(result.is_ok(), "{}", result.unwrap_err());
        let p2 = result.unwrap();
        assert_eq!(p2.name, name);
        assert_eq!(p2.unit, unit);
        assert_abs_diff_eq!(p2.value, value);
    }
}

#[test]
fn test_parameter_from_xml_missing_unit() {
    let result = Parameter::from_xml(&xml_par("Index", "2.0", None));
    assert!(result.is_ok(), "{}", result.unwrap_err());
    let p = result.unwrap();
    assert_eq!(p.unit, "");
    assert_abs_diff_eq!(p.value, 2.0);
}

#[test]
fn test_parameter_parse_tolerates_whitespace() {
    let result = Parameter::parse("Index", " 2.5 ", "");
    assert!(result.is_ok(), "{}", result.unwrap_err());
    assert_abs_diff_eq!(result.unwrap().value, 2.5);
}

#[test]
fn test_parameter_parse_bad_value() {
    let result = Parameter::from_xml(&xml_par("Index", "steep", None));
    assert_eq!(
        result,
        Err(InvalidValueError::ParseFloat {
            name: "Index".to_string(),
            string: "steep".to_string()
        })
    );
}

#[test]
fn test_parameter_from_gammacat() {
    let p = Parameter::from_gammacat(&CatalogParameter {
        name: "amplitude".to_string(),
        val: 1e-12,
        unit: "cm-2 s-1 TeV-1".to_string(),
    });
    assert_eq!(p, Parameter::new("amplitude", 1e-12, "cm-2 s-1 TeV-1"));
}

#[test]
fn test_par_finds_every_name() {
    let pset = get_test_pset();
    for name in ["Prefactor", "Index", "Scale"] {
        let result = pset.par(name);
        assert!(result.is_ok(), "{}", result.unwrap_err());
        assert_eq!(result.unwrap().name, name);
    }
}

#[test]
fn test_par_is_case_sensitive_and_fails_loudly() {
    let pset = get_test_pset();
    let result = pset.par("index");
    match result {
        Err(LookupError::ParameterNotFound { name, pset }) => {
            assert_eq!(name, "index");
            // The whole set is included in the message.
            assert!(pset.contains("Prefactor"));
            assert!(pset.contains("Scale"));
        }
        _ => panic!("Expected a ParameterNotFound error, got {result:?}"),
    }
}

#[test]
fn test_par_with_duplicate_names_returns_first() {
    let pset = ParameterSet::new(vec![
        Parameter::new("Index", 1.0, ""),
        Parameter::new("Index", 2.0, ""),
    ]);
    let result = pset.par("Index");
    assert!(result.is_ok(), "{}", result.unwrap_err());
    assert_abs_diff_eq!(result.unwrap().value, 1.0);
}

#[test]
fn test_pset_from_xml_preserves_order() {
    let pars = [
        xml_par("b", "2", Some("TeV")),
        xml_par("a", "1", None),
        xml_par("c", "3", Some("deg")),
    ];
    let result = ParameterSet::from_xml(&pars);
    assert!(result.is_ok(), "{}", result.unwrap_err());
    let pset = result.unwrap();
    assert_eq!(pset.names(), ["b", "a", "c"]);

    // One bad value spoils the set.
    let pars = [xml_par("a", "1", None), xml_par("b", "x", None)];
    assert!(ParameterSet::from_xml(&pars).is_err());
}

#[test]
fn test_pset_to_xml() {
    let pset = get_test_pset();
    assert_eq!(
        pset.to_xml(),
        [
            r#"        <parameter name="Prefactor" value="1e-12" unit="cm-2 s-1 TeV-1"/>"#,
            r#"        <parameter name="Index" value="-2.3" unit=""/>"#,
            r#"        <parameter name="Scale" value="1.0" unit="TeV"/>"#,
        ]
        .join("\n")
    );

    assert_eq!(ParameterSet::default().to_xml(), "");
}

#[test]
fn test_format_value_exponents() {
    // Exponents carry no padding or explicit plus sign.
    assert_eq!(format_value(1e-5), "1e-5");
    assert_eq!(format_value(1e16), "1e16");
    assert_eq!(format_value(-2.5e-13), "-2.5e-13");
    // Just inside the non-exponent range.
    assert_eq!(format_value(1e-4), "0.0001");
    assert_eq!(format_value(1e15), "1000000000000000.0");
}

#[test]
fn test_pset_iter_borrows_in_order() {
    let pset = get_test_pset();
    let names: Vec<&str> = pset.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Prefactor", "Index", "Scale"]);
    // The set is still usable after iterating.
    assert_eq!(pset.len(), 3);
}
