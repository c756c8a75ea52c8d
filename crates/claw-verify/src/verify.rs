use std::time::Duration;

use alloy_primitives::Address;
use tracing::{info, warn};
use verifier_client::{
    CodeFormat, VerificationId, VerificationRequest, VerificationStatus, VerifierApi,
};

use crate::registry::ContractEntry;

/// The deployment pipeline always compiles with optimizations on.
const OPTIMIZATION_USED: bool = true;

/// How much of a constructor-argument blob gets quoted in progress logs.
const ARGS_PREVIEW_CHARS: usize = 40;

/// Compiler coordinates shared by every submission in one run.
#[derive(Clone, Debug)]
pub struct CompilerVersions {
    pub solc: String,
    pub zksolc: String,
}

/// Fixed polling schedule for one verification attempt.
#[derive(Clone, Copy, Debug)]
pub struct PollPolicy {
    pub interval: Duration,
    pub max_attempts: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Verified,
    Failed(String),
}

#[derive(Clone, Debug)]
pub struct ReportEntry {
    pub name: &'static str,
    pub address: Address,
    pub outcome: Outcome,
}

/// Per-contract terminal results, in registry order.
#[derive(Clone, Debug, Default)]
pub struct VerificationReport {
    pub entries: Vec<ReportEntry>,
}

impl VerificationReport {
    pub fn all_verified(&self) -> bool {
        self.entries
            .iter()
            .all(|entry| entry.outcome == Outcome::Verified)
    }

    /// Human-readable end-of-run summary, one block per contract.
    pub fn render(&self, explorer_url: &str) -> String {
        let mut out = String::from("==================================================\n");
        out.push_str("VERIFICATION RESULTS\n");
        out.push_str("==================================================\n");
        for entry in &self.entries {
            match &entry.outcome {
                Outcome::Verified => {
                    out.push_str(&format!("  {}: VERIFIED\n", entry.name));
                    out.push_str(&format!(
                        "      {explorer_url}/address/{}#contract\n",
                        entry.address
                    ));
                }
                Outcome::Failed(reason) => {
                    out.push_str(&format!("  {}: FAILED: {reason}\n", entry.name));
                }
            }
        }
        out
    }
}

/// Verify every entry, strictly in order. Each contract is submitted and then
/// polled to a terminal state or to the attempt budget; any failure is
/// recorded in the report and the run moves on to the next contract.
pub async fn verify_contracts(
    api: &VerifierApi,
    entries: &[ContractEntry],
    compiler_input: &serde_json::Value,
    compilers: &CompilerVersions,
    policy: PollPolicy,
) -> VerificationReport {
    let mut report = VerificationReport::default();

    for entry in entries {
        info!(
            contract = entry.name,
            address = %entry.address,
            args = args_preview(&entry.constructor_args),
            "Verifying contract"
        );

        let outcome = verify_single(api, entry, compiler_input, compilers, policy).await;
        match &outcome {
            Outcome::Verified => info!(contract = entry.name, "Contract verified"),
            Outcome::Failed(reason) => {
                warn!(contract = entry.name, %reason, "Contract verification failed")
            }
        }
        report.entries.push(ReportEntry {
            name: entry.name,
            address: entry.address,
            outcome,
        });
    }

    report
}

async fn verify_single(
    api: &VerifierApi,
    entry: &ContractEntry,
    compiler_input: &serde_json::Value,
    compilers: &CompilerVersions,
    policy: PollPolicy,
) -> Outcome {
    let request = VerificationRequest {
        contract_address: entry.address,
        source_code: compiler_input.clone(),
        code_format: CodeFormat::SolidityStandardJsonInput,
        contract_name: entry.qualified_name(),
        compiler_solc_version: compilers.solc.clone(),
        compiler_zksolc_version: compilers.zksolc.clone(),
        constructor_arguments: entry.constructor_args.clone(),
        optimization_used: OPTIMIZATION_USED,
    };

    let id = match api.submit(&request).await {
        Ok(id) => id,
        Err(err) => return Outcome::Failed(format!("submission error: {err}")),
    };
    info!(contract = entry.name, %id, "Submitted for verification");

    await_terminal_status(api, entry.name, id, policy).await
}

/// Poll until the service reports a terminal state or the budget runs out.
/// A failed poll counts against this contract only, never the whole batch.
async fn await_terminal_status(
    api: &VerifierApi,
    contract: &str,
    id: VerificationId,
    policy: PollPolicy,
) -> Outcome {
    for attempt in 1..=policy.max_attempts {
        tokio::time::sleep(policy.interval).await;

        let response = match api.status(id).await {
            Ok(response) => response,
            Err(err) => return Outcome::Failed(format!("status poll error: {err}")),
        };

        match response.status {
            VerificationStatus::Successful => return Outcome::Verified,
            VerificationStatus::Failed => {
                return Outcome::Failed(
                    response
                        .error
                        .unwrap_or_else(|| "unknown error".to_string()),
                )
            }
            VerificationStatus::Queued | VerificationStatus::InProgress => {
                info!(
                    contract,
                    %id,
                    status = ?response.status,
                    attempt,
                    max_attempts = policy.max_attempts,
                    "Verification still pending"
                );
            }
            VerificationStatus::Other(status) => {
                warn!(contract, %id, %status, "Unrecognized verification status");
            }
        }
    }

    Outcome::Failed(format!(
        "timed out after {} status polls",
        policy.max_attempts
    ))
}

fn args_preview(args: &str) -> &str {
    if args.len() > ARGS_PREVIEW_CHARS {
        &args[..ARGS_PREVIEW_CHARS]
    } else {
        args
    }
}
