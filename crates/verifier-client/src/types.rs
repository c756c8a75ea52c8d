use std::fmt;

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

/// Identifier assigned by the verification service to a submitted request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VerificationId(pub u64);

impl fmt::Display for VerificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Shape of the `sourceCode` payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CodeFormat {
    #[serde(rename = "solidity-standard-json-input")]
    SolidityStandardJsonInput,
}

/// Payload for `POST /contract_verification`.
///
/// `source_code` carries the full standard-json compiler input exactly as it
/// appears in the build-info file.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationRequest {
    pub contract_address: Address,
    pub source_code: serde_json::Value,
    pub code_format: CodeFormat,
    /// `"<relative-source-path>:<contract-identifier>"`.
    pub contract_name: String,
    pub compiler_solc_version: String,
    pub compiler_zksolc_version: String,
    /// `0x`-prefixed ABI encoding; a bare `0x` means no constructor args.
    pub constructor_arguments: String,
    pub optimization_used: bool,
}

/// State reported by `GET /contract_verification/{id}`.
///
/// The service may grow new states; those deserialize into `Other` so a poll
/// loop can keep going instead of erroring out.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    Queued,
    InProgress,
    Successful,
    Failed,
    #[serde(untagged)]
    Other(String),
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: VerificationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use alloy_primitives::address;

    use super::*;

    #[test]
    fn request_serializes_with_wire_field_names() {
        let request = VerificationRequest {
            contract_address: address!("90f493bfB740F00E6Cf280f4B9A6943d4b96d274"),
            source_code: serde_json::json!({"language": "Solidity"}),
            code_format: CodeFormat::SolidityStandardJsonInput,
            contract_name: "contracts/ClawRenderer.sol:ClawRenderer".into(),
            compiler_solc_version: "0.8.24".into(),
            compiler_zksolc_version: "v1.5.10".into(),
            constructor_arguments: "0x".into(),
            optimization_used: true,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value["contractAddress"],
            "0x90f493bfb740f00e6cf280f4b9a6943d4b96d274"
        );
        assert_eq!(value["codeFormat"], "solidity-standard-json-input");
        assert_eq!(
            value["contractName"],
            "contracts/ClawRenderer.sol:ClawRenderer"
        );
        assert_eq!(value["compilerSolcVersion"], "0.8.24");
        assert_eq!(value["compilerZksolcVersion"], "v1.5.10");
        assert_eq!(value["constructorArguments"], "0x");
        assert_eq!(value["optimizationUsed"], true);
        assert_eq!(value["sourceCode"]["language"], "Solidity");
    }

    #[test]
    fn known_statuses_deserialize_to_their_variants() {
        for (raw, expected) in [
            ("queued", VerificationStatus::Queued),
            ("in_progress", VerificationStatus::InProgress),
            ("successful", VerificationStatus::Successful),
            ("failed", VerificationStatus::Failed),
        ] {
            let response: StatusResponse =
                serde_json::from_str(&format!(r#"{{"status":"{raw}"}}"#)).unwrap();
            assert_eq!(response.status, expected);
            assert_eq!(response.error, None);
        }
    }

    #[test]
    fn unknown_status_is_preserved_verbatim() {
        let response: StatusResponse =
            serde_json::from_str(r#"{"status":"recompiling"}"#).unwrap();
        assert_eq!(
            response.status,
            VerificationStatus::Other("recompiling".into())
        );
    }

    #[test]
    fn failed_status_carries_the_service_error() {
        let response: StatusResponse =
            serde_json::from_str(r#"{"status":"failed","error":"bytecode mismatch"}"#).unwrap();
        assert_eq!(response.status, VerificationStatus::Failed);
        assert_eq!(response.error.as_deref(), Some("bytecode mismatch"));
    }
}
