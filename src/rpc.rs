//! The node methods an account depends on.

#[cfg(test)]
pub(crate) mod mock;

use async_trait::async_trait;
use ckb_types::H256;

use crate::{
    error::Result,
    types::{BlockNumber, Cell, RawTransaction},
};

#[async_trait]
pub trait CkbRpc: Send + Sync {
    async fn get_tip_block_number(&self) -> Result<BlockNumber>;

    /// Live cells locked by `lock_hash` in blocks `from..=to`, ordered by
    /// block number.
    async fn get_cells_by_lock_hash(
        &self,
        lock_hash: &H256,
        from: BlockNumber,
        to: BlockNumber,
    ) -> Result<Vec<Cell>>;

    async fn send_transaction(&self, tx: &RawTransaction) -> Result<H256>;
}
