use std::cmp::Ordering;

use ckb_jsonrpc_types::JsonBytes;

use crate::{
    error::{Error, Result},
    types::{CapacityAmount, Cell, CellInput, Since},
};

/// Greedy first-fit selection over candidate cells.
///
/// Cells are taken in the order they are given, and the scan stops at the
/// first cell that makes the gathered capacity either exactly the target or
/// large enough to leave a change of at least `min_change`.
#[derive(Debug, Clone)]
pub struct CellSelector {
    min_change: CapacityAmount,
    min_target: CapacityAmount,
    accept_exhausted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub inputs: Vec<CellInput>,
    pub capacity: CapacityAmount,
}

impl CellSelector {
    pub fn new(min_change: CapacityAmount) -> Self {
        Self {
            min_target: min_change.clone(),
            min_change,
            accept_exhausted: false,
        }
    }

    /// Overrides the lower bound of a target, which is `min_change` by default.
    pub fn with_min_target(mut self, min_target: CapacityAmount) -> Self {
        self.min_target = min_target;
        self
    }

    /// Once the candidates run out, accepts any gathered capacity that covers
    /// the target, even if the change is below `min_change`.
    pub fn accept_exhausted(mut self) -> Self {
        self.accept_exhausted = true;
        self
    }

    pub fn min_change(&self) -> &CapacityAmount {
        &self.min_change
    }

    fn is_enough(&self, gathered: &CapacityAmount, target: &CapacityAmount) -> bool {
        match gathered.cmp(target) {
            Ordering::Less => false,
            Ordering::Equal => true,
            Ordering::Greater => gathered
                .safe_sub(target)
                .map(|change| change >= self.min_change)
                .unwrap_or(false),
        }
    }

    pub fn select<I>(
        &self,
        target: &CapacityAmount,
        cells: I,
        unlock_args: &[JsonBytes],
        since: Since,
    ) -> Result<Selection>
    where
        I: IntoIterator<Item = Cell>,
    {
        if target < &self.min_target {
            return Err(Error::InvalidCapacityRequest {
                required: target.clone(),
                minimum: self.min_target.clone(),
            });
        }
        let mut gathered = CapacityAmount::zero();
        let mut inputs = Vec::new();
        for cell in cells {
            log::trace!(
                "select cell {:?} with capacity {}",
                cell.out_point,
                cell.capacity
            );
            gathered += &cell.capacity;
            inputs.push(CellInput::new(cell.out_point, since, unlock_args.to_vec()));
            if self.is_enough(&gathered, target) {
                log::debug!(
                    "selected {} inputs, gathered {} for {}",
                    inputs.len(),
                    gathered,
                    target
                );
                return Ok(Selection {
                    inputs,
                    capacity: gathered,
                });
            }
        }
        let covered = self.accept_exhausted && &gathered >= target;
        if covered || self.is_enough(&gathered, target) {
            log::debug!(
                "candidates exhausted, gathered {} for {}",
                gathered,
                target
            );
            return Ok(Selection {
                inputs,
                capacity: gathered,
            });
        }
        Err(Error::InsufficientCapacity {
            required: target.clone(),
            gathered,
        })
    }
}
