#![allow(non_snake_case)]

use super::*;

#[test]
fn ModelError___unknown_class___displays_name() {
    let err = ModelError::UnknownClass("com.example.Missing".into());

    assert_eq!(err.to_string(), "unknown class: com.example.Missing");
}

#[test]
fn ModelError___invalid_type___displays_input_and_reason() {
    let err = ModelError::InvalidType {
        input: "List<".into(),
        reason: "expected a type name at offset 5".into(),
    };

    assert_eq!(
        err.to_string(),
        "invalid type 'List<': expected a type name at offset 5"
    );
}

#[test]
fn ModelError___from_json_error___wraps_as_json() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();

    let err: ModelError = json_err.into();

    assert!(matches!(err, ModelError::Json(_)));
    assert_eq!(err.error_code(), 6);
}

#[test]
fn ModelError___all_variants___have_unique_codes() {
    let errors = vec![
        ModelError::InvalidType {
            input: "".into(),
            reason: "".into(),
        },
        ModelError::UnknownClass("".into()),
        ModelError::DuplicateClass("".into()),
        ModelError::CyclicInheritance("".into()),
        ModelError::Config("".into()),
        ModelError::Json(serde_json::from_str::<serde_json::Value>("x").unwrap_err()),
        ModelError::Io(std::io::Error::other("x")),
    ];

    let codes: Vec<u32> = errors.iter().map(|e| e.error_code()).collect();
    let unique: std::collections::HashSet<u32> = codes.iter().copied().collect();

    assert_eq!(codes.len(), unique.len(), "error codes must be unique");
}
