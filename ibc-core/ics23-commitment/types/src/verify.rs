//! Membership checks of a single store path against a counterparty root.

use ibc_core_host_types::path::Path;
use ibc_primitives::prelude::*;
use ics23::HostFunctionsProvider;

use crate::commitment::{CommitmentPrefix, CommitmentProofBytes, CommitmentRoot};
use crate::error::CommitmentError;
use crate::merkle::{apply_prefix, MerkleProof};
use crate::specs::ProofSpecs;

/// Verifies that `value` is stored at `path` under the counterparty's
/// `prefix`, in the state committed to by `root`.
pub fn verify_membership<H: HostFunctionsProvider>(
    proof_specs: &ProofSpecs,
    prefix: &CommitmentPrefix,
    proof: &CommitmentProofBytes,
    root: &CommitmentRoot,
    path: Path,
    value: Vec<u8>,
) -> Result<(), CommitmentError> {
    let merkle_path = apply_prefix(prefix, path.into_bytes());
    let merkle_proof = MerkleProof::try_from(proof)?;

    merkle_proof.verify_membership::<H>(proof_specs, root, merkle_path, value, 0)
}

/// Verifies that nothing is stored at `path` under the counterparty's
/// `prefix`, in the state committed to by `root`.
pub fn verify_non_membership<H: HostFunctionsProvider>(
    proof_specs: &ProofSpecs,
    prefix: &CommitmentPrefix,
    proof: &CommitmentProofBytes,
    root: &CommitmentRoot,
    path: Path,
) -> Result<(), CommitmentError> {
    let merkle_path = apply_prefix(prefix, path.into_bytes());
    let merkle_proof = MerkleProof::try_from(proof)?;

    merkle_proof.verify_non_membership::<H>(proof_specs, root, merkle_path)
}
