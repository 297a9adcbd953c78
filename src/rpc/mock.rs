use std::collections::HashMap;

use async_trait::async_trait;
use ckb_types::H256;
use parking_lot::Mutex;

use super::CkbRpc;
use crate::{
    error::{Error, Result},
    types::{BlockNumber, Cell, RawTransaction},
};

/// An in-memory node which serves canned cells and records submissions.
pub(crate) struct MockRpc {
    tip: u64,
    cells: HashMap<H256, Vec<(u64, Cell)>>,
    offline: bool,
    sent: Mutex<Vec<RawTransaction>>,
}

pub(crate) struct MockRpcBuilder {
    tip: u64,
    cells: HashMap<H256, Vec<(u64, Cell)>>,
    offline: bool,
}

impl MockRpc {
    pub(crate) fn builder() -> MockRpcBuilder {
        MockRpcBuilder {
            tip: 100,
            cells: HashMap::new(),
            offline: false,
        }
    }

    pub(crate) fn sent(&self) -> Vec<RawTransaction> {
        self.sent.lock().clone()
    }

    fn check_online(&self) -> Result<()> {
        if self.offline {
            Err(Error::client("connection refused"))
        } else {
            Ok(())
        }
    }
}

impl MockRpcBuilder {
    pub(crate) fn with_tip(mut self, tip: u64) -> Self {
        self.tip = tip;
        self
    }

    pub(crate) fn with_cell(mut self, lock_hash: H256, number: u64, cell: Cell) -> Self {
        self.cells.entry(lock_hash).or_default().push((number, cell));
        self
    }

    pub(crate) fn offline(mut self) -> Self {
        self.offline = true;
        self
    }

    pub(crate) fn build(mut self) -> MockRpc {
        for cells in self.cells.values_mut() {
            cells.sort_by_key(|(number, _)| *number);
        }
        MockRpc {
            tip: self.tip,
            cells: self.cells,
            offline: self.offline,
            sent: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl CkbRpc for MockRpc {
    async fn get_tip_block_number(&self) -> Result<BlockNumber> {
        self.check_online()?;
        Ok(self.tip.into())
    }

    async fn get_cells_by_lock_hash(
        &self,
        lock_hash: &H256,
        from: BlockNumber,
        to: BlockNumber,
    ) -> Result<Vec<Cell>> {
        self.check_online()?;
        let cells = self
            .cells
            .get(lock_hash)
            .map(|cells| {
                cells
                    .iter()
                    .filter(|(number, _)| *number >= from.0 && *number <= to.0)
                    .map(|(_, cell)| cell.clone())
                    .collect()
            })
            .unwrap_or_default();
        Ok(cells)
    }

    async fn send_transaction(&self, tx: &RawTransaction) -> Result<H256> {
        self.check_online()?;
        let mut sent = self.sent.lock();
        sent.push(tx.clone());
        let mut hash = [0u8; 32];
        hash[31] = sent.len() as u8;
        Ok(H256(hash))
    }
}
