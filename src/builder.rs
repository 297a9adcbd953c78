use crate::{
    error::Result,
    selector::Selection,
    types::{CapacityAmount, CellOutput, OutPoint, RawTransaction, Script, Witness},
};

pub const TRANSACTION_VERSION: u32 = 0;

/// Assembles a transfer from selected inputs.
///
/// The first output pays the target capacity to the destination, and the
/// rest of the gathered capacity, if any, goes back to `change_lock`.
pub struct TransactionBuilder<'a> {
    change_lock: &'a Script,
    deps: &'a [OutPoint],
}

impl<'a> TransactionBuilder<'a> {
    pub fn new(change_lock: &'a Script, deps: &'a [OutPoint]) -> Self {
        Self { change_lock, deps }
    }

    pub fn build(
        &self,
        selection: Selection,
        target_lock: Script,
        target_capacity: &CapacityAmount,
        witnesses: Vec<Witness>,
    ) -> Result<RawTransaction> {
        let Selection { inputs, capacity } = selection;
        let change = capacity.safe_sub(target_capacity)?;
        let mut outputs = vec![CellOutput::new_simple(
            target_capacity.clone(),
            target_lock,
        )];
        if !change.is_zero() {
            log::trace!("add a change output with capacity {}", change);
            outputs.push(CellOutput::new_simple(change, self.change_lock.clone()));
        }
        Ok(RawTransaction {
            version: TRANSACTION_VERSION,
            deps: self.deps.to_vec(),
            inputs,
            outputs,
            witnesses,
        })
    }
}
