use crate::error::{Result, SortBenchError};
use crate::sort::order::first_violation;

/// Checks the output of one sort against its input
pub trait OutputVerifier {
    fn verify(&self, algorithm: &str, input: &[i32], output: &[i32]) -> Result<()>;
}

/// Order check with the position of the first descent.
pub fn verify_sorted(algorithm: &str, output: &[i32]) -> Result<()> {
    match first_violation(output) {
        None => Ok(()),
        Some(index) => Err(SortBenchError::PostconditionViolation {
            algorithm: algorithm.to_string(),
            index,
            previous: output[index - 1],
            current: output[index],
        }),
    }
}

/// Simple verifier that only checks sort order
#[derive(Default)]
pub struct SimpleVerifier;

impl OutputVerifier for SimpleVerifier {
    fn verify(&self, algorithm: &str, _input: &[i32], output: &[i32]) -> Result<()> {
        verify_sorted(algorithm, output)
    }
}

/// Checks order and that the output holds exactly the input's values
#[derive(Default)]
pub struct MultisetVerifier;

impl OutputVerifier for MultisetVerifier {
    fn verify(&self, algorithm: &str, input: &[i32], output: &[i32]) -> Result<()> {
        verify_sorted(algorithm, output)?;

        let mut expected = input.to_vec();
        expected.sort_unstable();
        if expected != output {
            return Err(SortBenchError::ContentMismatch {
                algorithm: algorithm.to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reports_first_violation() {
        let err = verify_sorted("Quick Sort", &[1, 4, 2, 0]).unwrap_err();
        assert_eq!(
            err,
            SortBenchError::PostconditionViolation {
                algorithm: "Quick Sort".to_string(),
                index: 2,
                previous: 4,
                current: 2,
            }
        );
    }

    #[test]
    fn test_simple_verifier_ignores_contents() {
        assert!(SimpleVerifier.verify("Merge Sort", &[3, 2, 1], &[0, 0, 0]).is_ok());
    }

    #[test]
    fn test_multiset_verifier_catches_lost_values() {
        let err = MultisetVerifier
            .verify("Merge Sort", &[3, 2, 1], &[1, 1, 3])
            .unwrap_err();
        assert_eq!(
            err,
            SortBenchError::ContentMismatch {
                algorithm: "Merge Sort".to_string()
            }
        );
        assert!(MultisetVerifier.verify("Merge Sort", &[3, 2, 1], &[1, 2, 3]).is_ok());
    }
}
