//! Single version constraint tokens (`">= 1.8.0"`, `"~> 1.10"`, `"1.9.0"`).

use std::fmt;
use std::str::FromStr;

use crate::error::InstallError;

/// Comparison operator of a constraint token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// No operator: exact match.
    Exact,
    /// `~>`. Treated as an exact match, not RubyGems' "compatible with".
    Pessimistic,
    /// `>=`
    GreaterOrEqual,
    /// `<`
    LessThan,
}

impl Operator {
    /// The operator as written in a lock file.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exact => "",
            Self::Pessimistic => "~>",
            Self::GreaterOrEqual => ">=",
            Self::LessThan => "<",
        }
    }
}

/// One `operator + version` pair out of a constraint list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionSpec {
    pub operator: Operator,
    pub version: String,
}

impl FromStr for VersionSpec {
    type Err = InstallError;

    /// Split on single spaces. One part is a bare version; two parts are
    /// operator and version; anything else is rejected.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = token.split(' ').collect();

        let (operator, version) = match parts.as_slice() {
            [version] => (Operator::Exact, *version),
            [operator, version] => {
                let operator = match *operator {
                    "" => Operator::Exact,
                    "~>" => Operator::Pessimistic,
                    ">=" => Operator::GreaterOrEqual,
                    "<" => Operator::LessThan,
                    _ => {
                        return Err(InstallError::UnknownOperator {
                            token: token.to_string(),
                        })
                    }
                };
                (operator, *version)
            }
            _ => {
                return Err(InstallError::InvalidConstraint {
                    token: token.to_string(),
                })
            }
        };

        Ok(Self {
            operator,
            version: version.to_string(),
        })
    }
}

impl fmt::Display for VersionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.operator {
            Operator::Exact => f.write_str(&self.version),
            op => write!(f, "{} {}", op.as_str(), self.version),
        }
    }
}
