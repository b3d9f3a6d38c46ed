//!
//! The conformance test suite type.
//!

///
/// The conformance test suite type.
///
/// Each suite lives in its own subdirectory of the fixture tree and has its
/// own runner and skip semantics.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SuiteType {
    /// The state transition tests.
    GeneralStateTests,
    /// The block-level tests. Fork-sensitive: test names carry the fork
    /// they target as a suffix.
    BlockchainTests,
    /// The bare VM instruction tests, with their own fixed skip list.
    VMTests,
}

impl SuiteType {
    ///
    /// All supported suite types.
    ///
    pub fn all() -> [Self; 3] {
        [
            Self::GeneralStateTests,
            Self::BlockchainTests,
            Self::VMTests,
        ]
    }
}

impl std::str::FromStr for SuiteType {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string {
            "GeneralStateTests" => Ok(Self::GeneralStateTests),
            "BlockchainTests" => Ok(Self::BlockchainTests),
            "VMTests" => Ok(Self::VMTests),
            string => anyhow::bail!(
                "Unknown suite `{}`. Supported suites: {}",
                string,
                Self::all()
                    .into_iter()
                    .map(|suite| suite.to_string())
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
        }
    }
}

impl std::fmt::Display for SuiteType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GeneralStateTests => write!(f, "GeneralStateTests"),
            Self::BlockchainTests => write!(f, "BlockchainTests"),
            Self::VMTests => write!(f, "VMTests"),
        }
    }
}
