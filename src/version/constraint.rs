//! Evaluation of comma-separated constraint lists against a version.
//!
//! Every token must hold. Evaluation stops at the first token that does not,
//! so a malformed token after a failing one is never looked at.

use crate::error::{InstallError, Result};

use super::spec::{Operator, VersionSpec};

/// Check whether `candidate` satisfies every token in `constraints`.
///
/// `constraints` is the lock-file notation, tokens separated by `", "`:
///
/// ```
/// use cocoapods_install::version::included;
///
/// assert!(included("1.9.0", ">= 1.8.0").unwrap());
/// assert!(included("1.10.0", ">= 1.8.0, < 2.0.0").unwrap());
/// assert!(!included("2.0.0", "< 2.0.0").unwrap());
/// ```
///
/// `~>` compares for exact equality, same as a bare version.
pub fn included(candidate: &str, constraints: &str) -> Result<bool> {
    for token in constraints.split(", ") {
        let spec: VersionSpec = token.parse()?;
        if !satisfies(candidate, &spec)? {
            tracing::debug!("{} does not satisfy '{}'", candidate, token);
            return Ok(false);
        }
    }
    Ok(true)
}

/// Check one parsed token.
pub fn satisfies(candidate: &str, spec: &VersionSpec) -> Result<bool> {
    match spec.operator {
        Operator::Exact | Operator::Pessimistic => Ok(candidate == spec.version),
        Operator::GreaterOrEqual => compare_components(candidate, spec, |c, r| c >= r),
        Operator::LessThan => compare_components(candidate, spec, |c, r| c < r),
    }
}

/// Walk the constraint's components. Equal leading components are skipped;
/// the first differing one (or the last one) decides via `accept`.
fn compare_components(
    candidate: &str,
    spec: &VersionSpec,
    accept: impl Fn(u64, u64) -> bool,
) -> Result<bool> {
    let required: Vec<&str> = spec.version.split('.').collect();
    let actual: Vec<&str> = candidate.split('.').collect();
    let last = required.len() - 1;

    for (i, component) in required.iter().enumerate() {
        let r = parse_component(component)?;
        let c = match actual.get(i) {
            Some(c) => parse_component(c)?,
            None => {
                return Err(InstallError::MalformedVersion {
                    version: candidate.to_string(),
                    constraint: spec.to_string(),
                })
            }
        };

        if i != last && c == r {
            continue;
        }
        return Ok(accept(c, r));
    }

    Ok(true)
}

fn parse_component(component: &str) -> Result<u64> {
    component.parse().map_err(|source| InstallError::Parse {
        component: component.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greater_or_equal() {
        assert!(included("1.9.0", ">= 1.8.0").unwrap());
        assert!(included("1.8.0", ">= 1.8.0").unwrap());
        assert!(!included("1.7.0", ">= 1.8.0").unwrap());
    }

    #[test]
    fn greater_or_equal_decides_on_first_difference() {
        assert!(included("2.0.0", ">= 1.8.5").unwrap());
        assert!(!included("1.7.9", ">= 1.8.0").unwrap());
        assert!(included("1.10.0", ">= 1.9.0").unwrap());
    }

    #[test]
    fn less_than() {
        assert!(included("1.10.0", "< 2.0.0").unwrap());
        assert!(!included("2.0.0", "< 2.0.0").unwrap());
        assert!(!included("2.1.0", "< 2.0.0").unwrap());
    }

    #[test]
    fn bare_version_is_exact() {
        assert!(included("1.9.0", "1.9.0").unwrap());
        assert!(!included("1.9.1", "1.9.0").unwrap());
    }

    #[test]
    fn pessimistic_is_exact_match() {
        assert!(included("1.10", "~> 1.10").unwrap());
        assert!(!included("1.10.1", "~> 1.10").unwrap());
    }

    #[test]
    fn range_requires_every_token() {
        assert!(included("1.10.1", ">= 1.8.0, < 2.0.0").unwrap());
        assert!(!included("2.1.0", ">= 1.8.0, < 2.0.0").unwrap());
        assert!(!included("1.7.0", ">= 1.8.0, < 2.0.0").unwrap());
    }

    #[test]
    fn garbage_single_token_is_just_a_mismatch() {
        assert!(!included("1.9.0", "garbage").unwrap());
    }

    #[test]
    fn unknown_operator_is_error() {
        let err = included("1.9.0", "?? 1.9.0").unwrap_err();
        assert!(matches!(err, InstallError::UnknownOperator { .. }));
    }

    #[test]
    fn non_numeric_component_is_parse_error() {
        let err = included("1.9.0", ">= 1.x.0").unwrap_err();
        assert!(matches!(err, InstallError::Parse { ref component, .. } if component == "x"));

        let err = included("1.beta.0", ">= 1.8.0").unwrap_err();
        assert!(matches!(err, InstallError::Parse { .. }));
    }

    #[test]
    fn short_candidate_is_malformed() {
        let err = included("1.8", ">= 1.8.0").unwrap_err();
        assert!(matches!(err, InstallError::MalformedVersion { .. }));
    }

    #[test]
    fn short_candidate_decided_early_is_fine() {
        // The walk stops at the first differing component before running out.
        assert!(included("2", ">= 1.8.0").unwrap());
    }

    #[test]
    fn stops_at_first_failing_token() {
        // The second token is malformed but never evaluated.
        assert!(!included("1.0.0", ">= 1.8.0, ?? 2").unwrap());
    }

    #[test]
    fn repeated_calls_agree() {
        let first = included("1.10.1", ">= 1.8.0, < 2.0.0").unwrap();
        for _ in 0..10 {
            assert_eq!(included("1.10.1", ">= 1.8.0, < 2.0.0").unwrap(), first);
        }
    }
}
