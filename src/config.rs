// Builder Configuration
//
// Default names and dtypes used when a construction call leaves them out.

use crate::ir::types::DType;

/// Defaults applied by `IrBuilder`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuilderConfig {
    /// Name given to variables declared without one
    pub var_name: String,

    /// Name given to tensors declared without one
    pub tensor_name: String,

    /// Prefix of generated axis variables (`dim_var0`, `dim_var1`, ...)
    pub axis_prefix: String,

    /// Dtype of variables declared without one, and of axis variables
    pub var_dtype: DType,

    /// Dtype of placeholder tensors declared without one
    pub placeholder_dtype: DType,
}

impl BuilderConfig {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        Self {
            var_name: "tindex".to_string(),
            tensor_name: "TensorObj".to_string(),
            axis_prefix: "dim_var".to_string(),
            var_dtype: DType::Int32,
            placeholder_dtype: DType::Float32,
        }
    }

    /// Create configuration with a different placeholder dtype
    pub fn with_placeholder_dtype(dtype: DType) -> Self {
        Self {
            placeholder_dtype: dtype,
            ..Self::new()
        }
    }

    /// Create configuration with a different axis variable prefix
    pub fn with_axis_prefix(prefix: impl Into<String>) -> Self {
        Self {
            axis_prefix: prefix.into(),
            ..Self::new()
        }
    }

    pub fn set_var_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.var_name = name.into();
        self
    }

    pub fn set_tensor_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.tensor_name = name.into();
        self
    }

    pub fn set_axis_prefix(&mut self, prefix: impl Into<String>) -> &mut Self {
        self.axis_prefix = prefix.into();
        self
    }

    pub fn set_var_dtype(&mut self, dtype: DType) -> &mut Self {
        self.var_dtype = dtype;
        self
    }

    pub fn set_placeholder_dtype(&mut self, dtype: DType) -> &mut Self {
        self.placeholder_dtype = dtype;
        self
    }

    /// Name of the axis variable for dimension `dim`
    pub fn axis_name(&self, dim: usize) -> String {
        format!("{}{}", self.axis_prefix, dim)
    }
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BuilderConfig::default();
        assert_eq!(config.var_name, "tindex");
        assert_eq!(config.tensor_name, "TensorObj");
        assert_eq!(config.var_dtype, DType::Int32);
        assert_eq!(config.placeholder_dtype, DType::Float32);
        assert_eq!(config.axis_name(2), "dim_var2");
    }

    #[test]
    fn test_setters_chain() {
        let mut config = BuilderConfig::with_axis_prefix("ax");
        config.set_var_name("k").set_var_dtype(DType::Int64);
        assert_eq!(config.axis_name(0), "ax0");
        assert_eq!(config.var_name, "k");
        assert_eq!(config.var_dtype, DType::Int64);
        assert_eq!(
            BuilderConfig::with_placeholder_dtype(DType::Float64).placeholder_dtype,
            DType::Float64
        );
    }
}
