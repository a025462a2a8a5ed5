// IR Type System
//
// Element type tags carried by every expression node, plus the inference
// rules used when a literal or an operator result needs one.

use crate::error::{IrError, Result};
use std::collections::HashMap;
use std::fmt;

/// Canonical name of the default integer dtype
pub const INT32: &str = "int32";
/// Canonical name of the default floating-point dtype
pub const FLOAT32: &str = "float32";

lazy_static::lazy_static! {
    /// Name table used to resolve dtype strings, canonical names and short aliases
    static ref DTYPE_NAMES: HashMap<&'static str, DType> = {
        let mut names = HashMap::new();
        for dtype in DType::ALL {
            names.insert(dtype.name(), dtype);
            names.insert(dtype.short_name(), dtype);
        }
        names
    };
}

/// Scalar element types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DType {
    Bool,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Float32,
    Float64,
}

impl DType {
    pub const ALL: [DType; 11] = [
        DType::Bool,
        DType::Int8,
        DType::Int16,
        DType::Int32,
        DType::Int64,
        DType::Uint8,
        DType::Uint16,
        DType::Uint32,
        DType::Uint64,
        DType::Float32,
        DType::Float64,
    ];

    /// Resolve a dtype name such as `"int32"` or `"f32"`
    pub fn parse(name: &str) -> Result<Self> {
        DTYPE_NAMES
            .get(name.trim())
            .copied()
            .ok_or_else(|| IrError::UnknownDType(name.to_string()))
    }

    /// Canonical name
    pub fn name(&self) -> &'static str {
        match self {
            DType::Bool => "bool",
            DType::Int8 => "int8",
            DType::Int16 => "int16",
            DType::Int32 => "int32",
            DType::Int64 => "int64",
            DType::Uint8 => "uint8",
            DType::Uint16 => "uint16",
            DType::Uint32 => "uint32",
            DType::Uint64 => "uint64",
            DType::Float32 => "float32",
            DType::Float64 => "float64",
        }
    }

    fn short_name(&self) -> &'static str {
        match self {
            DType::Bool => "bool",
            DType::Int8 => "i8",
            DType::Int16 => "i16",
            DType::Int32 => "i32",
            DType::Int64 => "i64",
            DType::Uint8 => "u8",
            DType::Uint16 => "u16",
            DType::Uint32 => "u32",
            DType::Uint64 => "u64",
            DType::Float32 => "f32",
            DType::Float64 => "f64",
        }
    }

    /// Get size in bytes
    pub fn size_bytes(&self) -> usize {
        match self {
            DType::Bool => 1,
            DType::Int8 | DType::Uint8 => 1,
            DType::Int16 | DType::Uint16 => 2,
            DType::Int32 | DType::Uint32 | DType::Float32 => 4,
            DType::Int64 | DType::Uint64 | DType::Float64 => 8,
        }
    }

    pub fn is_float(&self) -> bool {
        matches!(self, DType::Float32 | DType::Float64)
    }

    pub fn is_integer(&self) -> bool {
        !self.is_float() && !matches!(self, DType::Bool)
    }

    /// Dtype of an untyped numeric literal: int32 if integral, float32 otherwise
    pub fn of_literal(value: &Scalar) -> Self {
        if value.is_integral() {
            DType::Int32
        } else {
            DType::Float32
        }
    }

    /// Result dtype of a binary operator over `a` and `b`.
    ///
    /// Float beats integer beats bool; within a class the wider type wins,
    /// and at equal width the signed integer wins.
    pub fn promote(a: DType, b: DType) -> DType {
        if a == b {
            return a;
        }
        let rank = |t: DType| {
            let class = if t.is_float() {
                2
            } else if t.is_integer() {
                1
            } else {
                0
            };
            let signed = matches!(t, DType::Int8 | DType::Int16 | DType::Int32 | DType::Int64);
            (class, t.size_bytes(), signed)
        };
        if rank(a) >= rank(b) {
            a
        } else {
            b
        }
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for DType {
    type Err = IrError;

    fn from_str(s: &str) -> Result<Self> {
        DType::parse(s)
    }
}

/// Numeric literal payload of a Const node
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar {
    Int(i64),
    Float(f64),
}

impl Scalar {
    pub fn is_integral(&self) -> bool {
        matches!(self, Scalar::Int(_))
    }

    pub fn as_f64(&self) -> f64 {
        match self {
            Scalar::Int(v) => *v as f64,
            Scalar::Float(v) => *v,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Scalar::Int(v) => write!(f, "{}", v),
            Scalar::Float(v) => write!(f, "{:?}", v),
        }
    }
}

macro_rules! scalar_from_int {
    ($($t:ty),*) => {
        $(impl From<$t> for Scalar {
            fn from(value: $t) -> Self {
                Scalar::Int(value as i64)
            }
        })*
    };
}

scalar_from_int!(i8, i16, i32, i64, u8, u16, u32, isize);

macro_rules! scalar_try_from_unsigned {
    ($($t:ty),*) => {
        $(impl TryFrom<$t> for Scalar {
            type Error = IrError;

            fn try_from(value: $t) -> Result<Self> {
                i64::try_from(value)
                    .map(Scalar::Int)
                    .map_err(|_| IrError::LiteralOutOfRange(value.to_string()))
            }
        })*
    };
}

scalar_try_from_unsigned!(u64, usize);

impl From<f32> for Scalar {
    fn from(value: f32) -> Self {
        Scalar::Float(value as f64)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Float(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dtype_sizes() {
        assert_eq!(DType::Bool.size_bytes(), 1);
        assert_eq!(DType::Int32.size_bytes(), 4);
        assert_eq!(DType::Float64.size_bytes(), 8);
    }

    #[test]
    fn test_type_predicates() {
        assert!(DType::Float32.is_float());
        assert!(!DType::Int32.is_float());
        assert!(DType::Int32.is_integer());
        assert!(!DType::Bool.is_integer());
    }

    #[test]
    fn test_parse_names_and_aliases() {
        assert_eq!(DType::parse("int32").unwrap(), DType::Int32);
        assert_eq!(DType::parse("f32").unwrap(), DType::Float32);
        assert_eq!("float64".parse::<DType>().unwrap(), DType::Float64);
        assert_eq!(
            DType::parse("float128"),
            Err(IrError::UnknownDType("float128".to_string()))
        );
    }

    #[test]
    fn test_literal_inference() {
        assert_eq!(DType::of_literal(&Scalar::from(5)), DType::Int32);
        assert_eq!(DType::of_literal(&Scalar::from(5.0)), DType::Float32);
        assert_eq!(DType::of_literal(&Scalar::try_from(5u64).unwrap()), DType::Int32);
    }

    #[test]
    fn test_unsigned_literal_range() {
        let max = i64::MAX as u64;
        assert_eq!(Scalar::try_from(max), Ok(Scalar::Int(i64::MAX)));
        assert_eq!(
            Scalar::try_from(max + 1),
            Err(IrError::LiteralOutOfRange("9223372036854775808".to_string()))
        );
        assert_eq!(
            Scalar::try_from(u64::MAX),
            Err(IrError::LiteralOutOfRange(u64::MAX.to_string()))
        );
        assert_eq!(Scalar::try_from(7usize), Ok(Scalar::Int(7)));
    }

    #[test]
    fn test_promote() {
        assert_eq!(DType::promote(DType::Int32, DType::Int32), DType::Int32);
        assert_eq!(DType::promote(DType::Int32, DType::Float32), DType::Float32);
        assert_eq!(DType::promote(DType::Float64, DType::Float32), DType::Float64);
        assert_eq!(DType::promote(DType::Bool, DType::Int8), DType::Int8);
        assert_eq!(DType::promote(DType::Uint32, DType::Int32), DType::Int32);
        assert_eq!(DType::promote(DType::Int64, DType::Float32), DType::Float32);
    }
}
