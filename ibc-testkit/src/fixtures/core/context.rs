use core::fmt::Debug;

use ibc_core::client::types::Height;
use ibc_core::commitment_types::commitment::CommitmentPrefix;
use ibc_core::primitives::prelude::*;
use ibc_testkit_store::context::ProvableStore;
use typed_builder::TypedBuilder;

use crate::context::MockGenericContext;
use crate::hosts::MockHost;
use crate::testapp::ibc::core::types::{MockIbcStore, DEFAULT_COMMITMENT_PREFIX};

/// Configuration of a mock chain.
///
/// `MockContextConfig::builder().build()` produces a chain at height 5 whose
/// IBC store lives under the `ibc` prefix of its main store.
#[derive(Debug, TypedBuilder)]
#[builder(build_method(into))]
pub struct MockContextConfig {
    #[builder(default = Height::new(0, 5).expect("Never fails"))]
    latest_height: Height,

    #[builder(default = DEFAULT_COMMITMENT_PREFIX.as_bytes().to_vec().try_into().expect("Never fails"))]
    commitment_prefix: CommitmentPrefix,
}

impl<S> From<MockContextConfig> for MockGenericContext<S>
where
    S: ProvableStore + Debug + Default,
{
    fn from(params: MockContextConfig) -> Self {
        let context = Self {
            main_store: S::default(),
            host: MockHost::builder()
                .revision_number(params.latest_height.revision_number())
                .build(),
            ibc_store: MockIbcStore::new(S::default(), params.commitment_prefix),
        };

        // store is at height 0; no block

        context.advance_block_up_to(params.latest_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::MockContext;

    #[test]
    fn default_config_builds_height_five() {
        let ctx: MockContext = MockContextConfig::builder().build();
        assert_eq!(ctx.latest_height(), Height::new(0, 5).expect("Never fails"));
        assert_eq!(ctx.host.history.len(), 5);
    }

    #[test]
    fn revision_number_follows_latest_height() {
        let ctx: MockContext = MockContextConfig::builder()
            .latest_height(Height::new(3, 2).expect("Never fails"))
            .build();
        assert_eq!(ctx.host.revision_number, 3);
        assert_eq!(ctx.latest_height(), Height::new(3, 2).expect("Never fails"));
    }
}
