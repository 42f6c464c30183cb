use trifuzz_ir::{classify, execute, Classification, PathSignature, Triple};

#[test]
fn test_scalene_triangle() {
    let case = execute(Triple::new(3, 4, 5));
    assert_eq!(case.signature, PathSignature::Scalene);
    assert_eq!(case.signature.as_str(), "TF");
    assert_eq!(case.classification.label(), "triangle");
}

#[test]
fn test_isosceles_triangle() {
    let case = execute(Triple::new(2, 2, 3));
    assert_eq!(case.signature.as_str(), "TTF");
    assert_eq!(case.classification, Classification::Isosceles);
}

#[test]
fn test_equilateral_triangle() {
    let case = execute(Triple::new(5, 5, 5));
    assert_eq!(case.signature.as_str(), "TTT");
    assert_eq!(case.classification.label(), "equilateral triangle");
}

#[test]
fn test_non_triangle() {
    let case = execute(Triple::new(1, 2, 5));
    assert_eq!(case.signature.as_str(), "F");
    assert_eq!(case.classification.label(), "non-triangle");
}

#[test]
fn test_isosceles_detected_for_every_equal_pair() {
    for triple in [
        Triple::new(4, 4, 5),
        Triple::new(4, 5, 4),
        Triple::new(5, 4, 4),
    ] {
        assert_eq!(execute(triple).signature, PathSignature::Isosceles, "{triple}");
    }
}

#[test]
fn test_zero_and_negative_sides_are_non_triangles() {
    assert_eq!(execute(Triple::new(0, 1, 1)).signature, PathSignature::NonTriangle);
    assert_eq!(execute(Triple::new(0, 0, 0)).signature, PathSignature::NonTriangle);
    assert_eq!(
        execute(Triple::new(-3, 4, 5)).signature,
        PathSignature::NonTriangle
    );
}

#[test]
fn test_signature_is_reachable_and_determines_label() {
    for a in -3..12 {
        for b in -3..12 {
            for c in -3..12 {
                let triple = Triple::new(a, b, c);
                let first = execute(triple);
                let second = execute(triple);
                assert_eq!(first, second);
                assert!(PathSignature::ALL.contains(&first.signature));
                assert_eq!(first.classification, first.signature.classification());
                assert_eq!(classify(triple).signature(), first.signature);
            }
        }
    }
}

#[test]
fn test_signature_round_trips_through_its_symbols() {
    for sig in PathSignature::ALL {
        assert_eq!(sig.as_str().parse::<PathSignature>().unwrap(), sig);
        assert_eq!(sig.decisions().signature(), sig);
    }
    assert!("TT".parse::<PathSignature>().is_err());
}

#[test]
fn test_test_case_serializes_signature_symbols() {
    let case = execute(Triple::new(2, 2, 3));
    let json = serde_json::to_value(case).unwrap();
    assert_eq!(json["signature"], "TTF");
    assert_eq!(json["classification"], "isosceles");
    assert_eq!(json["triple"]["a"], 2);
}

#[test]
fn test_display_format() {
    let case = execute(Triple::new(3, 4, 5));
    assert_eq!(case.to_string(), "(3, 4, 5) -> triangle [Path: TF]");
}
