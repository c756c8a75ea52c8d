use alloy_primitives::{address, Address, U256};

use crate::encoding::{constructor_args, AbiValue};

/// Deployer account; doubles as the mint-fee treasury.
pub const DEPLOYER: Address = address!("00CC14AF7d9ce9Be4fdf9aE858632a00287edE11");

/// ClawRegistry mint price at deployment: 0.0005 ETH.
pub const MINT_PRICE_WEI: u64 = 500_000_000_000_000;

const RENDERER_ADDRESS: Address = address!("90f493bfB740F00E6Cf280f4B9A6943d4b96d274");
const REGISTRY_ADDRESS: Address = address!("01949e45FabCD684bcD4747966145140aB4778E5");
const EVOLUTION_ADDRESS: Address = address!("ed61D90c46343D0399de04a2CDEd195A217aa583");
const REPUTATION_ADDRESS: Address = address!("2E031ad274261e1a58C033d61F3b0f310c419904");

/// One deployed contract to verify.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContractEntry {
    pub name: &'static str,
    pub address: Address,
    /// Source path relative to the hardhat project root.
    pub source_path: &'static str,
    /// Resolved `0x`-prefixed ABI encoding of the constructor arguments.
    pub constructor_args: String,
}

impl ContractEntry {
    /// `"<relative-source-path>:<contract-identifier>"`, the form the
    /// verification service expects.
    pub fn qualified_name(&self) -> String {
        format!("{}:{}", self.source_path, self.name)
    }
}

/// The Claw Domains contract set, in deployment order.
///
/// Constructor arguments form a dependency chain: ClawRegistry takes the
/// renderer's address, ClawEvolution and ClawReputation take the registry's.
/// Resolving them here keeps that chain visible as plain dataflow.
pub fn contract_registry() -> Vec<ContractEntry> {
    vec![
        ContractEntry {
            name: "ClawRenderer",
            address: RENDERER_ADDRESS,
            source_path: "contracts/ClawRenderer.sol",
            constructor_args: constructor_args(&[]),
        },
        ContractEntry {
            name: "ClawRegistry",
            address: REGISTRY_ADDRESS,
            source_path: "contracts/ClawRegistry.sol",
            // constructor(address _renderer, uint256 _mintPrice, address _treasury)
            constructor_args: constructor_args(&[
                AbiValue::Address(RENDERER_ADDRESS),
                AbiValue::Uint(U256::from(MINT_PRICE_WEI)),
                AbiValue::Address(DEPLOYER),
            ]),
        },
        ContractEntry {
            name: "ClawEvolution",
            address: EVOLUTION_ADDRESS,
            source_path: "contracts/ClawEvolution.sol",
            // constructor(address _registry)
            constructor_args: constructor_args(&[AbiValue::Address(REGISTRY_ADDRESS)]),
        },
        ContractEntry {
            name: "ClawReputation",
            address: REPUTATION_ADDRESS,
            source_path: "contracts/ClawReputation.sol",
            // constructor(address _registry)
            constructor_args: constructor_args(&[AbiValue::Address(REGISTRY_ADDRESS)]),
        },
    ]
}
