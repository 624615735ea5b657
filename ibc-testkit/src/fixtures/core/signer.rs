use ibc_core::primitives::Signer;

/// Returns a dummy relayer account, for testing purposes only!
pub fn dummy_account_id() -> Signer {
    "cosmos1wxeyh7zgn4tctjzs0vtqpc6p5cxq5t2muzl7ng".into()
}
