use std::{
    collections::BTreeMap,
    fs, io,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use tracing::warn;

#[derive(Debug, thiserror::Error)]
pub enum BuildInfoError {
    #[error("No build-info file found in `{}`", .dir.display())]
    NoBuildInfo { dir: PathBuf },

    #[error("Failed to read build info: {0}")]
    Io(#[from] io::Error),

    #[error("Malformed build-info file `{}`: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// One hardhat-zksync build: the verbatim compiler input plus the compiler
/// versions recoverable from it.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildInfo {
    /// Full standard-json compiler input, passed to the verifier verbatim.
    pub input: serde_json::Value,
    pub solc_version: String,
    #[serde(default)]
    output: BuildOutput,
}

#[derive(Debug, Default, Deserialize)]
struct BuildOutput {
    #[serde(default)]
    contracts: BTreeMap<String, BTreeMap<String, ContractOutput>>,
}

#[derive(Debug, Deserialize)]
struct ContractOutput {
    /// An object for zkVM builds, a plain JSON string for vanilla solc ones.
    #[serde(default)]
    metadata: Option<serde_json::Value>,
}

impl BuildInfo {
    /// Load the single build-info file found in `dir`.
    pub fn load_from_dir(dir: &Path) -> Result<Self, BuildInfoError> {
        Self::load(&locate_build_info(dir)?)
    }

    pub fn load(path: &Path) -> Result<Self, BuildInfoError> {
        let raw = fs::read_to_string(path)?;
        serde_json::from_str(&raw).map_err(|source| BuildInfoError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Best-effort zksolc version recovery: the first `zk_version` marker in
    /// any contract's metadata, rendered as `v{version}`. Whether the marker
    /// is emitted depends on the compiler release, so absence is not an
    /// error; the caller falls back to a fixed default.
    pub fn zksolc_version(&self) -> Option<String> {
        self.output
            .contracts
            .values()
            .flat_map(BTreeMap::values)
            .filter_map(|contract| contract.metadata.as_ref())
            .filter_map(|metadata| metadata.get("zk_version"))
            .filter_map(|version| version.as_str())
            .map(|version| format!("v{version}"))
            .next()
    }
}

/// Pick the build-info file: the lexicographically first `.json` in `dir`.
///
/// Hardhat writes one build-info file per build. Stale builds can leave more
/// behind; the choice is then still deterministic and the skipped files get
/// reported.
pub fn locate_build_info(dir: &Path) -> Result<PathBuf, BuildInfoError> {
    let mut candidates = fs::read_dir(dir)?
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|extension| extension == "json"))
        .collect::<Vec<_>>();
    candidates.sort();

    match candidates.split_first() {
        None => Err(BuildInfoError::NoBuildInfo {
            dir: dir.to_path_buf(),
        }),
        Some((chosen, [])) => Ok(chosen.clone()),
        Some((chosen, skipped)) => {
            warn!(
                chosen = %chosen.display(),
                skipped = skipped.len(),
                "Multiple build-info files; using the lexicographically first"
            );
            Ok(chosen.clone())
        }
    }
}
