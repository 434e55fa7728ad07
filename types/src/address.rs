//! Voter address type: a 20-byte principal identity written as `0x`-prefixed hex.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::TypesError;

/// The identity of a principal interacting with the ballot ledger.
///
/// Addresses are compared byte-wise; the textual form is case-insensitive
/// on input and always lowercase on output.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VoterAddress([u8; 20]);

impl VoterAddress {
    /// The textual prefix of every address.
    pub const PREFIX: &'static str = "0x";

    /// Length of an address in bytes.
    pub const LEN: usize = 20;

    pub const ZERO: Self = Self([0u8; 20]);

    pub fn new(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Build an address whose trailing eight bytes hold `n` big-endian.
    pub fn from_low_u64_be(n: u64) -> Self {
        let mut bytes = [0u8; 20];
        bytes[12..].copy_from_slice(&n.to_be_bytes());
        Self(bytes)
    }

    /// Parse an address from its `0x`-prefixed hex form.
    pub fn from_hex(s: &str) -> Result<Self, TypesError> {
        let digits = s
            .strip_prefix(Self::PREFIX)
            .or_else(|| s.strip_prefix("0X"))
            .ok_or_else(|| TypesError::InvalidAddress(format!("{s}: missing 0x prefix")))?;
        if digits.len() != Self::LEN * 2 {
            return Err(TypesError::InvalidAddress(format!(
                "{s}: expected {} hex digits, got {}",
                Self::LEN * 2,
                digits.len()
            )));
        }
        let mut bytes = [0u8; 20];
        hex::decode_to_slice(digits, &mut bytes)
            .map_err(|e| TypesError::InvalidAddress(format!("{s}: {e}")))?;
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 20]
    }
}

impl fmt::Display for VoterAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Self::PREFIX, hex::encode(self.0))
    }
}

impl fmt::Debug for VoterAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VoterAddress(0x{}…)", hex::encode(&self.0[..4]))
    }
}

impl FromStr for VoterAddress {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<[u8; 20]> for VoterAddress {
    fn from(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }
}

impl Serialize for VoterAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for VoterAddress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const ALICE: &str = "0x0d474076b39ad7bdd7c1c333cd0645c8e64e8809";

    #[test]
    fn parses_and_displays_lowercase() {
        let addr: VoterAddress = "0x0D474076b39aD7bdD7c1C333Cd0645c8e64e8809".parse().unwrap();
        assert_eq!(addr.to_string(), ALICE);
    }

    #[test]
    fn rejects_missing_prefix() {
        let err = VoterAddress::from_hex(&ALICE[2..]).unwrap_err();
        assert!(matches!(err, TypesError::InvalidAddress(_)));
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(VoterAddress::from_hex("0x1234").is_err());
        assert!(VoterAddress::from_hex(&format!("{ALICE}00")).is_err());
    }

    #[test]
    fn rejects_non_hex_digits() {
        let bad = format!("0x{}", "zz".repeat(20));
        assert!(VoterAddress::from_hex(&bad).is_err());
    }

    #[test]
    fn low_u64_fills_trailing_bytes() {
        let addr = VoterAddress::from_low_u64_be(0x0102);
        assert_eq!(addr.as_bytes()[18], 0x01);
        assert_eq!(addr.as_bytes()[19], 0x02);
        assert!(addr.as_bytes()[..12].iter().all(|b| *b == 0));
        assert!(VoterAddress::from_low_u64_be(0).is_zero());
    }

    #[test]
    fn serializes_as_hex_string() {
        let addr = VoterAddress::from_hex(ALICE).unwrap();
        let json = serde_json::to_string(&addr).unwrap();
        assert_eq!(json, format!("\"{ALICE}\""));
        let back: VoterAddress = serde_json::from_str(&json).unwrap();
        assert_eq!(back, addr);
    }

    #[test]
    fn deserialize_reports_bad_address() {
        let result: Result<VoterAddress, _> = serde_json::from_str("\"0xnope\"");
        assert!(result.is_err());
    }

    proptest! {
        #[test]
        fn display_then_parse_is_identity(bytes in proptest::array::uniform20(any::<u8>())) {
            let addr = VoterAddress::new(bytes);
            prop_assert_eq!(addr.to_string().parse::<VoterAddress>().unwrap(), addr);
        }
    }
}
