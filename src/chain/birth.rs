//! BirthEvent — the contract's notification of a newly minted kitty

use super::Address;
use crate::genome::{Genome, GenomeError, NUMERAL_DIGITS};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of the contract event carrying new kitties
pub const BIRTH_EVENT: &str = "Birth";

/// `Birth(owner, kittyId, mumId, dadId, genes)`
///
/// Ids and genes are uint256 on chain and arrive as decimal strings; plain
/// JSON numbers are accepted too.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthEvent {
    pub owner: Address,
    #[serde(with = "decimal")]
    pub kitty_id: u64,
    #[serde(with = "decimal")]
    pub mum_id: u64,
    #[serde(with = "decimal")]
    pub dad_id: u64,
    #[serde(with = "decimal")]
    pub genes: u64,
}

impl BirthEvent {
    /// The one-line notification shown on the page
    pub fn notification(&self) -> String {
        format!(
            "owner:{} kittyId:{} mumId:{} dadId:{} genes:{}",
            self.owner, self.kitty_id, self.mum_id, self.dad_id, self.genes
        )
    }

    /// Decode the newborn's genes.
    ///
    /// On chain the genes are an integer, so leading zeros are restored
    /// before the strict 16-digit decode.
    pub fn genome(&self) -> Result<Genome, GenomeError> {
        Genome::from_numeral(&format!("{:0width$}", self.genes, width = NUMERAL_DIGITS))
    }

    /// Both parents are zero for generation-0 kitties
    pub fn is_gen0(&self) -> bool {
        self.mum_id == 0 && self.dad_id == 0
    }
}

impl fmt::Display for BirthEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.notification())
    }
}

mod decimal {
    use serde::{de, Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u64),
        Text(String),
    }

    pub fn serialize<S: Serializer>(value: &u64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
        match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Ok(n),
            Raw::Text(s) => s
                .parse()
                .map_err(|_| de::Error::custom(format!("not a decimal integer: {:?}", s))),
        }
    }
}
