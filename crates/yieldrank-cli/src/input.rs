//! JSON input loading.
//!
//! Bonds and profiles are validated on the way in so the compute paths
//! only ever see well-formed records.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use yieldrank_core::types::{BondData, TaxProfile};
use yieldrank_ranking::CandidateInput;

use crate::error::{CliError, CliResult};

/// Reads and deserializes a JSON file.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> CliResult<T> {
    let text = fs::read_to_string(path).map_err(|e| CliError::input(path, e.to_string()))?;
    serde_json::from_str(&text).map_err(|e| CliError::input(path, e.to_string()))
}

/// Loads a single bond.
pub fn load_bond(path: &Path) -> CliResult<BondData> {
    let bond: BondData = read_json(path)?;
    bond.validate().map_err(|source| CliError::Validation {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(bond)
}

/// Loads an investor tax profile.
pub fn load_profile(path: &Path) -> CliResult<TaxProfile> {
    let profile: TaxProfile = read_json(path)?;
    profile.validate().map_err(|source| CliError::Validation {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(profile)
}

/// Loads a JSON array of candidates.
pub fn load_candidates(path: &Path) -> CliResult<Vec<CandidateInput>> {
    let candidates: Vec<CandidateInput> = read_json(path)?;
    for candidate in &candidates {
        candidate
            .bond
            .validate()
            .map_err(|source| CliError::Validation {
                path: path.to_path_buf(),
                source,
            })?;
    }
    tracing::debug!(count = candidates.len(), path = %path.display(), "loaded candidates");
    Ok(candidates)
}
