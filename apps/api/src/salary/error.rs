use thiserror::Error;

/// Reference data a candidate profile must resolve against before estimation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MissingReference {
    #[error("candidate key skills not found")]
    KeySkills,

    #[error("candidate location not found")]
    Location,

    #[error("candidate industries of interest not found")]
    IndustriesOfInterest,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EstimateError {
    /// Client-correctable: the profile does not resolve against reference data.
    #[error(transparent)]
    MissingReferenceData(#[from] MissingReference),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error(
        "skill arrays must be non-empty and of equal length \
         (proficiency={proficiency}, weights={weights}, premiums={premiums})"
    )]
    InvalidShape {
        proficiency: usize,
        weights: usize,
        premiums: usize,
    },

    #[error("salary computation failed: {0}")]
    Computation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_reference_messages() {
        assert_eq!(
            EstimateError::from(MissingReference::KeySkills).to_string(),
            "candidate key skills not found"
        );
        assert_eq!(
            EstimateError::from(MissingReference::Location).to_string(),
            "candidate location not found"
        );
        assert_eq!(
            EstimateError::from(MissingReference::IndustriesOfInterest).to_string(),
            "candidate industries of interest not found"
        );
    }

    #[test]
    fn test_missing_reference_converts_with_question_mark() {
        fn lookup() -> Result<(), EstimateError> {
            Err(MissingReference::Location)?
        }
        assert_eq!(
            lookup(),
            Err(EstimateError::MissingReferenceData(MissingReference::Location))
        );
        assert_eq!(
            MissingReference::KeySkills.to_string(),
            "candidate key skills not found"
        );
    }
}
