// Integration tests for the dtype model

use tensor_ir::{DType, IrBuilder, IrError, FLOAT32, INT32};

#[test]
fn test_canonical_names() {
    assert_eq!(DType::Bool.name(), "bool");
    assert_eq!(DType::Int32.name(), INT32);
    assert_eq!(DType::Int64.name(), "int64");
    assert_eq!(DType::Float32.name(), FLOAT32);
    assert_eq!(DType::Float64.name(), "float64");
}

#[test]
fn test_every_name_round_trips() {
    for dtype in DType::ALL {
        assert_eq!(DType::parse(dtype.name()).unwrap(), dtype);
        assert_eq!(dtype.to_string(), dtype.name());
    }
}

#[test]
fn test_type_sizes() {
    assert_eq!(DType::Int8.size_bytes(), 1);
    assert_eq!(DType::Int16.size_bytes(), 2);
    assert_eq!(DType::Uint32.size_bytes(), 4);
    assert_eq!(DType::Float64.size_bytes(), 8);
}

#[test]
fn test_constant_dtype_inference() {
    let mut b = IrBuilder::new();
    let int = b.constant(5, None).unwrap();
    let float = b.constant(5.0, None).unwrap();
    let explicit = b.constant(5, Some("float32")).unwrap();

    assert_eq!(b.dtype_of(int), Some(DType::Int32));
    assert_eq!(b.dtype_of(float), Some(DType::Float32));
    assert_eq!(b.dtype_of(explicit), Some(DType::Float32));
}

#[test]
fn test_unrecognized_dtype_strings() {
    let mut b = IrBuilder::new();
    assert_eq!(
        b.var(Some("x"), Some("int33")),
        Err(IrError::UnknownDType("int33".to_string()))
    );
    assert!(matches!(
        b.placeholder((2, 2), Some("half"), None),
        Err(IrError::UnknownDType(_))
    ));
    assert!(b.factory().is_empty());
}
