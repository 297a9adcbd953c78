use ckb_types::H256;
use parking_lot::RwLock;

use crate::{
    builder::TransactionBuilder,
    error::Result,
    identity::Identity,
    rpc::CkbRpc,
    selector::{CellSelector, Selection},
    types::{CapacityAmount, Cell, RawTransaction, Script, Since, Witness, BYTE_SHANNONS},
};

/// The minimal capacity of a cell, in shannons.
pub const MIN_CELL_CAPACITY: u64 = 10 * BYTE_SHANNONS;

/// An identity bound to a node.
pub struct Account<R> {
    rpc: R,
    identity: RwLock<Identity>,
    min_cell_capacity: CapacityAmount,
}

impl<R: CkbRpc> Account<R> {
    pub fn new(identity: Identity, rpc: R) -> Self {
        Self {
            rpc,
            identity: RwLock::new(identity),
            min_cell_capacity: CapacityAmount::shannons(MIN_CELL_CAPACITY),
        }
    }

    pub fn with_min_cell_capacity(mut self, min_cell_capacity: CapacityAmount) -> Self {
        self.min_cell_capacity = min_cell_capacity;
        self
    }

    pub fn rpc(&self) -> &R {
        &self.rpc
    }

    pub fn min_cell_capacity(&self) -> &CapacityAmount {
        &self.min_cell_capacity
    }

    /// A snapshot of the current identity.
    pub fn identity(&self) -> Identity {
        self.identity.read().clone()
    }

    /// Changes to the identity only affect transactions generated afterwards.
    pub fn update_identity<F>(&self, f: F)
    where
        F: FnOnce(&mut Identity),
    {
        let mut identity = self.identity.write();
        f(&mut *identity);
    }

    pub fn address(&self) -> H256 {
        self.identity.read().address()
    }

    pub async fn unspent_cells(&self) -> Result<Vec<Cell>> {
        let lock_hash = self.identity.read().lock_hash();
        let tip = self.rpc.get_tip_block_number().await?;
        log::trace!("fetch cells of {:#x} until block#{}", lock_hash, tip);
        self.rpc
            .get_cells_by_lock_hash(&lock_hash, 0.into(), tip)
            .await
    }

    pub async fn balance(&self) -> Result<CapacityAmount> {
        let cells = self.unspent_cells().await?;
        let balance: CapacityAmount = cells.iter().map(|cell| &cell.capacity).sum();
        log::debug!("balance of {:#x} is {}", self.address(), balance);
        Ok(balance)
    }

    pub async fn gather_inputs(
        &self,
        capacity: &CapacityAmount,
        min_capacity: &CapacityAmount,
        since: Since,
    ) -> Result<Selection> {
        let cells = self.unspent_cells().await?;
        let unlock_args = self.identity.read().unlock_args().to_vec();
        CellSelector::new(min_capacity.clone()).select(capacity, cells, &unlock_args, since)
    }

    pub async fn generate_transaction(
        &self,
        target_lock: Script,
        target_capacity: &CapacityAmount,
        witnesses: Vec<Witness>,
    ) -> Result<RawTransaction> {
        let selection = self
            .gather_inputs(target_capacity, &self.min_cell_capacity, Since::default())
            .await?;
        let (change_lock, deps) = {
            let identity = self.identity.read();
            (identity.lock_script().clone(), identity.deps().to_vec())
        };
        TransactionBuilder::new(&change_lock, &deps).build(
            selection,
            target_lock,
            target_capacity,
            witnesses,
        )
    }

    pub async fn send_capacity(
        &self,
        target_lock: Script,
        capacity: &CapacityAmount,
    ) -> Result<H256> {
        let tx = self
            .generate_transaction(target_lock, capacity, Vec::new())
            .await?;
        let tx_hash = self.rpc.send_transaction(&tx).await?;
        log::debug!("send tx {:#x} is ok", tx_hash);
        Ok(tx_hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::Error,
        rpc::mock::MockRpc,
        test_util::{
            hash_from_byte, make_cell, sample_deps, sample_lock, sample_unlock_args, SECRET_KEY,
        },
        types::{OutPoint, ScriptHashType},
    };

    fn ckbytes(val: u64) -> CapacityAmount {
        CapacityAmount::ckbytes(val)
    }

    fn target_lock() -> Script {
        Script::new(hash_from_byte(0x77), ScriptHashType::Type, Vec::new())
    }

    fn identity() -> Identity {
        let mut identity = Identity::new(SECRET_KEY).unwrap();
        identity.set_lock_script(sample_lock());
        identity.set_unlock_args(sample_unlock_args());
        identity.set_deps(sample_deps());
        identity
    }

    fn account(capacities: &[(u64, u64)]) -> Account<MockRpc> {
        let lock_hash = sample_lock().calc_script_hash();
        let rpc = capacities
            .iter()
            .enumerate()
            .fold(MockRpc::builder().with_tip(50), |builder, (i, (number, cap))| {
                let cell = make_cell(i as u8 + 1, 0, *cap * BYTE_SHANNONS, sample_lock());
                builder.with_cell(lock_hash.clone(), *number, cell)
            })
            .build();
        Account::new(identity(), rpc)
    }

    #[tokio::test]
    async fn balance_sums_cells_until_tip() {
        let account = account(&[(1, 100), (20, 200), (50, 300), (51, 400)]);
        assert_eq!(account.balance().await.unwrap(), ckbytes(600));
    }

    #[tokio::test]
    async fn balance_of_an_empty_account() {
        let account = account(&[]);
        assert!(account.balance().await.unwrap().is_zero());
    }

    #[tokio::test]
    async fn rpc_errors_pass_through() {
        let account = Account::new(identity(), MockRpc::builder().offline().build());
        match account.balance().await {
            Err(Error::Client(msg)) => assert_eq!(msg, "connection refused"),
            other => panic!("should be a client error, got {:?}", other),
        }
        match account.send_capacity(target_lock(), &ckbytes(100)).await {
            Err(Error::Client(_)) => {}
            other => panic!("should be a client error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn generate_transfer_with_change() {
        // cells are served in block order
        let account = account(&[(30, 500), (10, 50), (20, 30)]);
        let tx = account
            .generate_transaction(target_lock(), &ckbytes(61), Vec::new())
            .await
            .unwrap();
        assert_eq!(tx.inputs.len(), 2);
        assert_eq!(
            tx.inputs[0].previous_output,
            OutPoint::new_cell(hash_from_byte(2), 0)
        );
        assert_eq!(
            tx.inputs[1].previous_output,
            OutPoint::new_cell(hash_from_byte(3), 0)
        );
        assert_eq!(tx.inputs[0].args, sample_unlock_args());
        assert_eq!(tx.outputs.len(), 2);
        assert_eq!(tx.outputs[0].capacity, ckbytes(61));
        assert_eq!(tx.outputs[0].lock, target_lock());
        assert_eq!(tx.outputs[1].capacity, ckbytes(19));
        assert_eq!(tx.outputs[1].lock, sample_lock());
        assert_eq!(tx.deps, sample_deps());
    }

    #[tokio::test]
    async fn change_below_min_cell_capacity_takes_more_cells() {
        let account = account(&[(1, 65), (2, 5), (3, 100)]);
        let tx = account
            .generate_transaction(target_lock(), &ckbytes(61), Vec::new())
            .await
            .unwrap();
        assert_eq!(tx.inputs.len(), 3);
        assert_eq!(tx.outputs[1].capacity, ckbytes(109));
    }

    #[tokio::test]
    async fn reject_transfer_below_min_cell_capacity() {
        let account = account(&[(1, 100)]);
        match account
            .generate_transaction(target_lock(), &ckbytes(9), Vec::new())
            .await
        {
            Err(Error::InvalidCapacityRequest { minimum, .. }) => {
                assert_eq!(minimum, ckbytes(10));
            }
            other => panic!("should be invalid, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn custom_min_cell_capacity() {
        let account = account(&[(1, 100), (2, 100)]).with_min_cell_capacity(ckbytes(61));
        assert_eq!(account.min_cell_capacity(), &ckbytes(61));
        match account
            .generate_transaction(target_lock(), &ckbytes(60), Vec::new())
            .await
        {
            Err(Error::InvalidCapacityRequest { required, minimum }) => {
                assert_eq!(required, ckbytes(60));
                assert_eq!(minimum, ckbytes(61));
            }
            other => panic!("should be invalid, got {:?}", other),
        }
        // a change of 39 is too small, so the second cell is taken
        let tx = account
            .generate_transaction(target_lock(), &ckbytes(61), Vec::new())
            .await
            .unwrap();
        assert_eq!(tx.inputs.len(), 2);
        assert_eq!(tx.outputs[1].capacity, ckbytes(139));
    }

    #[tokio::test]
    async fn send_submits_the_generated_transaction() {
        let account = account(&[(1, 100)]);
        let tx_hash = account
            .send_capacity(target_lock(), &ckbytes(100))
            .await
            .unwrap();
        let sent = account.rpc().sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(tx_hash, {
            let mut hash = [0u8; 32];
            hash[31] = 1;
            H256(hash)
        });
        assert_eq!(sent[0].outputs.len(), 1);
        assert_eq!(sent[0].outputs[0].capacity, ckbytes(100));
        assert!(sent[0].witnesses.is_empty());
    }

    #[tokio::test]
    async fn insufficient_balance_sends_nothing() {
        let account = account(&[(1, 100)]);
        match account.send_capacity(target_lock(), &ckbytes(1000)).await {
            Err(Error::InsufficientCapacity { required, gathered }) => {
                assert_eq!(required, ckbytes(1000));
                assert_eq!(gathered, ckbytes(100));
            }
            other => panic!("should be insufficient, got {:?}", other),
        }
        assert!(account.rpc().sent().is_empty());
    }

    #[tokio::test]
    async fn identity_updates_apply_to_later_transactions() {
        let account = account(&[(1, 100), (2, 100)]);
        let first = account
            .generate_transaction(target_lock(), &ckbytes(50), Vec::new())
            .await
            .unwrap();
        let new_args = vec![ckb_jsonrpc_types::JsonBytes::from_vec(vec![0xff])];
        account.update_identity(|identity| {
            identity.set_unlock_args(new_args.clone());
            identity.set_deps(Vec::new());
        });
        let second = account
            .generate_transaction(target_lock(), &ckbytes(50), Vec::new())
            .await
            .unwrap();
        assert_eq!(first.inputs, {
            let mut inputs = second.inputs.clone();
            for input in inputs.iter_mut() {
                input.args = sample_unlock_args();
            }
            inputs
        });
        assert_eq!(second.inputs[0].args, new_args);
        assert!(second.deps.is_empty());
        assert_eq!(account.identity().unlock_args(), &new_args[..]);
    }

    #[tokio::test]
    async fn cells_of_other_locks_are_ignored() {
        let other_lock = target_lock();
        let rpc = MockRpc::builder()
            .with_cell(
                other_lock.calc_script_hash(),
                1,
                make_cell(9, 0, 1000 * BYTE_SHANNONS, other_lock),
            )
            .build();
        let account = Account::new(identity(), rpc);
        assert!(account.balance().await.unwrap().is_zero());
        assert_eq!(account.address(), sample_lock().calc_script_hash());
    }
}
