//! Domain value object: the fixed set of content categories

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Top-level content category a question belongs to (Value Object)
///
/// The set is closed: a bank entry carrying any other code is rejected
/// when the bank is deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Domain {
    #[serde(rename = "BOS25")]
    Bos25,
    #[serde(rename = "CAAN")]
    Caan,
    #[serde(rename = "SNP")]
    Snp,
    #[serde(rename = "RNRF")]
    Rnrf,
    #[serde(rename = "SDGR")]
    Sdgr,
    #[serde(rename = "HSAN")]
    Hsan,
}

impl Domain {
    /// Every domain, in canonical order
    pub const ALL: [Domain; 6] = [
        Domain::Bos25,
        Domain::Caan,
        Domain::Snp,
        Domain::Rnrf,
        Domain::Sdgr,
        Domain::Hsan,
    ];

    /// Get the short code used in bank files and on the command line
    pub fn code(&self) -> &'static str {
        match self {
            Domain::Bos25 => "BOS25",
            Domain::Caan => "CAAN",
            Domain::Snp => "SNP",
            Domain::Rnrf => "RNRF",
            Domain::Sdgr => "SDGR",
            Domain::Hsan => "HSAN",
        }
    }

    /// Number of domains in the closed set
    pub const fn count() -> usize {
        Self::ALL.len()
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Domain {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Domain::ALL
            .iter()
            .copied()
            .find(|d| d.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::UnknownDomain(s.to_string()))
    }
}
