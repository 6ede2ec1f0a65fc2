//! Parameter kinds — the semantic tag attached to each process parameter.
//!
//! Every process declares an ordered list of [`ParameterType`] tags; a
//! parameter-generation strategy walks that list and produces one `f64` per
//! tag. Source values that bias generation are passed alongside the tags
//! rather than stored inside them.
use crate::parameters::errors::{ParamError, ParamResult};

/// Semantic kind of a single process parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParameterType {
    /// A standard deviation (noise scale).
    Std,
    /// A location / mean level.
    Mean,
    /// A coefficient bounded to `[low, high]`.
    Coefficient { low: f64, high: f64 },
}

impl ParameterType {
    /// Standard-deviation tag.
    pub const fn std() -> Self {
        ParameterType::Std
    }

    /// Mean tag.
    pub const fn mean() -> Self {
        ParameterType::Mean
    }

    /// Coefficient tag bounded to `[low, high]`.
    ///
    /// # Errors
    /// [`ParamError::InvalidCoefficientRange`] if a bound is non-finite or
    /// `low > high`.
    pub fn coefficient(low: f64, high: f64) -> ParamResult<Self> {
        if !low.is_finite() || !high.is_finite() || low > high {
            return Err(ParamError::InvalidCoefficientRange { low, high });
        }
        Ok(ParameterType::Coefficient { low, high })
    }

    /// Coefficient tag bounded to `[0, 1]`.
    pub const fn unit_coefficient() -> Self {
        ParameterType::Coefficient { low: 0.0, high: 1.0 }
    }

    /// Stable identifier used in logs and metadata.
    pub fn name(&self) -> &'static str {
        match self {
            ParameterType::Std => "std_type",
            ParameterType::Mean => "mean_type",
            ParameterType::Coefficient { .. } => "coefficient_type",
        }
    }

    /// Whether source data map to a fraction (std / coefficient) rather than
    /// to a level (mean) for this kind.
    pub fn uses_fraction(&self) -> bool {
        !matches!(self, ParameterType::Mean)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Purpose
    // -------
    // Ensure `coefficient` accepts ordered finite bounds (including a
    // degenerate `low == high`) and rejects reversed or non-finite bounds.
    //
    // Given
    // -----
    // - [0.0, 0.3], [0.2, 0.2], [0.5, 0.1], [0.0, inf].
    //
    // Expect
    // ------
    // - The first two succeed; the last two return `InvalidCoefficientRange`.
    fn coefficient_validates_bounds() {
        assert_eq!(
            ParameterType::coefficient(0.0, 0.3),
            Ok(ParameterType::Coefficient { low: 0.0, high: 0.3 })
        );
        assert!(ParameterType::coefficient(0.2, 0.2).is_ok());
        assert_eq!(
            ParameterType::coefficient(0.5, 0.1),
            Err(ParamError::InvalidCoefficientRange { low: 0.5, high: 0.1 })
        );
        assert!(ParameterType::coefficient(0.0, f64::INFINITY).is_err());
    }

    #[test]
    // Purpose
    // -------
    // Verify names and the fraction/level split used by aggregation.
    //
    // Expect
    // ------
    // - Mean is the only kind that maps to a level.
    fn names_and_fraction_split() {
        assert_eq!(ParameterType::std().name(), "std_type");
        assert_eq!(ParameterType::mean().name(), "mean_type");
        assert_eq!(ParameterType::unit_coefficient().name(), "coefficient_type");
        assert!(ParameterType::std().uses_fraction());
        assert!(ParameterType::unit_coefficient().uses_fraction());
        assert!(!ParameterType::mean().uses_fraction());
    }
}
