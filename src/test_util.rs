//! Shared builders for unit tests.

use ckb_jsonrpc_types::JsonBytes;
use ckb_types::H256;

use crate::types::{CapacityAmount, Cell, OutPoint, Script, ScriptHashType};

pub(crate) const SECRET_KEY: &str =
    "0xe79f3207ea4980b7fed79956d5934249ceac4751a4fae01a0f7c4a96884bc4e3";

/// A deterministic hash from a single distinguishing byte.
pub(crate) fn hash_from_byte(b: u8) -> H256 {
    let mut bytes = [0u8; 32];
    bytes[0] = b;
    H256(bytes)
}

pub(crate) fn sample_lock() -> Script {
    Script::new(
        hash_from_byte(0x9e),
        ScriptHashType::Data,
        vec![JsonBytes::from_vec(vec![0x36; 20])],
    )
}

pub(crate) fn sample_unlock_args() -> Vec<JsonBytes> {
    vec![JsonBytes::from_vec(vec![0x01, 0x02])]
}

pub(crate) fn sample_deps() -> Vec<OutPoint> {
    vec![
        OutPoint::new_cell(hash_from_byte(0xde), 0),
        OutPoint::new_block_hash(hash_from_byte(0xbe)),
    ]
}

pub(crate) fn make_cell(tx_byte: u8, index: u32, capacity: u64, lock: Script) -> Cell {
    Cell {
        capacity: CapacityAmount::shannons(capacity),
        lock,
        type_: None,
        data: JsonBytes::default(),
        out_point: OutPoint::new_cell(hash_from_byte(tx_byte), index),
    }
}

/// Cells locked by `sample_lock`, each from a distinct transaction.
pub(crate) fn cells_with_capacities(capacities: &[u64]) -> Vec<Cell> {
    capacities
        .iter()
        .enumerate()
        .map(|(i, cap)| make_cell(i as u8 + 1, 0, *cap, sample_lock()))
        .collect()
}
