use alloy_primitives::{Address, U256};

/// The fixed-width subset of ABI values the Claw constructors use.
#[derive(Clone, Copy, Debug)]
pub enum AbiValue {
    Address(Address),
    Uint(U256),
}

impl AbiValue {
    fn encode(self) -> String {
        match self {
            Self::Address(address) => encode_address(address),
            Self::Uint(value) => encode_uint256(value),
        }
    }
}

/// ABI-encode an address: lowercase hex, left-zero-padded to a 32-byte word.
pub fn encode_address(address: Address) -> String {
    pad_to_word(hex::encode(address))
}

/// ABI-encode a uint256: lowercase hex, left-zero-padded to a 32-byte word.
pub fn encode_uint256(value: U256) -> String {
    pad_to_word(format!("{value:x}"))
}

/// ABI-encode constructor arguments as a single `0x`-prefixed blob, components
/// in declaration order. No arguments encode as a bare `0x`.
pub fn constructor_args(values: &[AbiValue]) -> String {
    let mut blob = String::from("0x");
    for value in values {
        blob.push_str(&value.encode());
    }
    blob
}

fn pad_to_word(hex: String) -> String {
    format!("{hex:0>64}")
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use alloy_primitives::{address, Address, U256};
    use alloy_sol_types::SolValue;
    use rstest::rstest;

    use super::*;

    const RENDERER: Address = address!("90f493bfB740F00E6Cf280f4B9A6943d4b96d274");

    #[test]
    fn encode_address_is_one_lowercase_word() {
        let encoded = encode_address(RENDERER);

        assert_eq!(encoded.len(), 64);
        assert!(encoded.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(encoded, encoded.to_lowercase());
        assert_eq!(
            encoded,
            "00000000000000000000000090f493bfb740f00e6cf280f4b9a6943d4b96d274"
        );
    }

    #[test]
    fn encoding_a_reparsed_encoding_is_idempotent() {
        let encoded = encode_address(RENDERER);
        let reparsed = Address::from_str(&format!("0x{}", &encoded[24..])).unwrap();

        assert_eq!(encode_address(reparsed), encoded);
    }

    #[rstest]
    #[case(
        U256::ZERO,
        "0000000000000000000000000000000000000000000000000000000000000000"
    )]
    #[case(
        U256::from(1u64),
        "0000000000000000000000000000000000000000000000000000000000000001"
    )]
    #[case(
        U256::from(500_000_000_000_000u64),
        "0000000000000000000000000000000000000000000000000001c6bf52634000"
    )]
    #[case(
        U256::MAX,
        "ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"
    )]
    fn encode_uint256_pads_to_one_word(#[case] value: U256, #[case] expected: &str) {
        assert_eq!(encode_uint256(value), expected);
    }

    #[test]
    fn no_arguments_encode_as_bare_prefix() {
        assert_eq!(constructor_args(&[]), "0x");
    }

    #[test]
    fn composition_matches_the_abi_reference_encoding() {
        let price = U256::from(500_000_000_000_000u64);
        let treasury = address!("00CC14AF7d9ce9Be4fdf9aE858632a00287edE11");

        let blob = constructor_args(&[
            AbiValue::Address(RENDERER),
            AbiValue::Uint(price),
            AbiValue::Address(treasury),
        ]);
        let reference = (RENDERER, price, treasury).abi_encode();

        assert_eq!(blob, format!("0x{}", hex::encode(reference)));
    }
}
