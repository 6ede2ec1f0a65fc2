//! Validation helpers for segment inputs.
//!
//! Each process validates its [`ProcessData`] before drawing anything:
//! a positive step count, one finite parameter per requirement, and a
//! non-negative value at every std-tagged position.
use crate::{
    parameters::types::ParameterType,
    process::{
        core::data::ProcessData,
        errors::{ProcessError, ProcessResult},
    },
};

/// Reject zero-length segments.
pub fn validate_steps(process: &'static str, steps: usize) -> ProcessResult<()> {
    if steps == 0 {
        return Err(ProcessError::EmptySegment { process });
    }
    Ok(())
}

/// Check `parameters` against `required`: count, finiteness, std sign.
pub fn validate_parameters(
    process: &'static str, parameters: &[f64], required: &[ParameterType],
) -> ProcessResult<()> {
    if parameters.len() != required.len() {
        return Err(ProcessError::ParameterCountMismatch {
            process,
            expected: required.len(),
            actual: parameters.len(),
        });
    }
    for (index, (&value, kind)) in parameters.iter().zip(required).enumerate() {
        if !value.is_finite() {
            return Err(ProcessError::NonFiniteParameter { process, index, value });
        }
        if matches!(kind, ParameterType::Std) && value < 0.0 {
            return Err(ProcessError::NegativeStd { process, value });
        }
    }
    Ok(())
}

/// [`validate_steps`] followed by [`validate_parameters`].
pub fn validate_process_data(
    process: &'static str, data: &ProcessData, required: &[ParameterType],
) -> ProcessResult<()> {
    validate_steps(process, data.steps)?;
    validate_parameters(process, &data.parameters, required)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Purpose
    // -------
    // Verify each rejection path of `validate_process_data`.
    //
    // Given
    // -----
    // - requirements [Mean, Std].
    //
    // Expect
    // ------
    // - 0 steps → `EmptySegment`; one parameter → `ParameterCountMismatch`;
    //   NaN mean → `NonFiniteParameter`; std −1 → `NegativeStd`; a negative
    //   mean is accepted.
    fn validate_process_data_rejects_each_violation() {
        let required = [ParameterType::mean(), ParameterType::std()];
        let check = |steps, params: Vec<f64>| {
            validate_process_data("white_noise", &ProcessData::new(steps, params), &required)
        };

        assert_eq!(
            check(0, vec![0.0, 1.0]),
            Err(ProcessError::EmptySegment { process: "white_noise" })
        );
        assert!(matches!(check(3, vec![0.0]), Err(ProcessError::ParameterCountMismatch { .. })));
        assert!(matches!(
            check(3, vec![f64::NAN, 1.0]),
            Err(ProcessError::NonFiniteParameter { index: 0, .. })
        ));
        assert!(matches!(check(3, vec![0.0, -1.0]), Err(ProcessError::NegativeStd { .. })));
        assert!(check(3, vec![-5.0, 1.0]).is_ok());
    }
}
