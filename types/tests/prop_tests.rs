use proptest::prelude::*;

use ballot_types::{ProposalName, TypesError, VoterAddress};

proptest! {
    /// Names are accepted exactly up to 32 bytes.
    #[test]
    fn name_length_limit(raw in prop::collection::vec(any::<u8>(), 0..64)) {
        match ProposalName::from_bytes(&raw) {
            Ok(name) => {
                prop_assert!(raw.len() <= ProposalName::MAX_LEN);
                prop_assert_eq!(&name.as_bytes()[..raw.len()], &raw[..]);
                prop_assert!(name.as_bytes()[raw.len()..].iter().all(|b| *b == 0));
            }
            Err(e) => {
                prop_assert!(raw.len() > ProposalName::MAX_LEN);
                prop_assert_eq!(e, TypesError::NameTooLong { len: raw.len(), max: 32 });
            }
        }
    }

    /// Trimming only drops trailing zero padding.
    #[test]
    fn trimmed_is_prefix_without_trailing_zeros(raw in prop::collection::vec(any::<u8>(), 0..=32)) {
        let name = ProposalName::from_bytes(&raw).unwrap();
        let trimmed = name.trimmed();
        prop_assert!(raw.starts_with(trimmed));
        prop_assert!(trimmed.last() != Some(&0));
        prop_assert!(raw[trimmed.len()..].iter().all(|b| *b == 0));
    }

    /// Arbitrary text either parses to an address that prints back the same
    /// (modulo case) or is rejected; it never panics.
    #[test]
    fn address_parse_is_total(s in "(0[xX])?[0-9a-fA-Fg-z]{0,44}") {
        if let Ok(addr) = s.parse::<VoterAddress>() {
            prop_assert_eq!(addr.to_string(), s.to_ascii_lowercase());
        }
    }

    /// `is_zero` holds only for the all-zero address.
    #[test]
    fn address_is_zero_correct(bytes in prop::array::uniform20(any::<u8>())) {
        prop_assert_eq!(VoterAddress::new(bytes).is_zero(), bytes == [0u8; 20]);
    }
}
