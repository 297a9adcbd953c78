use ckb_jsonrpc_types::JsonBytes;
use ckb_types::H256;
use serde::{Deserialize, Serialize};

use super::{CapacityAmount, Index, Script, Since};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CellOutPoint {
    pub tx_hash: H256,
    pub index: Index,
}

/// Points to a cell produced by a transaction, or to a block header.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct OutPoint {
    #[serde(default)]
    pub cell: Option<CellOutPoint>,
    #[serde(default)]
    pub block_hash: Option<H256>,
}

/// A live cell as returned by `get_cells_by_lock_hash`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Cell {
    pub capacity: CapacityAmount,
    pub lock: Script,
    #[serde(rename = "type", default)]
    pub type_: Option<Script>,
    #[serde(default)]
    pub data: JsonBytes,
    pub out_point: OutPoint,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CellInput {
    pub previous_output: OutPoint,
    pub since: Since,
    pub args: Vec<JsonBytes>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CellOutput {
    pub capacity: CapacityAmount,
    pub data: JsonBytes,
    pub lock: Script,
    #[serde(rename = "type", default)]
    pub type_: Option<Script>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Witness {
    pub data: Vec<JsonBytes>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct RawTransaction {
    pub version: u32,
    pub deps: Vec<OutPoint>,
    pub inputs: Vec<CellInput>,
    pub outputs: Vec<CellOutput>,
    pub witnesses: Vec<Witness>,
}

impl OutPoint {
    pub fn new_cell(tx_hash: H256, index: u32) -> Self {
        Self {
            cell: Some(CellOutPoint {
                tx_hash,
                index: index.into(),
            }),
            block_hash: None,
        }
    }

    pub fn new_block_hash(block_hash: H256) -> Self {
        Self {
            cell: None,
            block_hash: Some(block_hash),
        }
    }
}

impl CellInput {
    pub fn new(previous_output: OutPoint, since: Since, args: Vec<JsonBytes>) -> Self {
        Self {
            previous_output,
            since,
            args,
        }
    }
}

impl CellOutput {
    /// An output without data or type script.
    pub fn new_simple(capacity: CapacityAmount, lock: Script) -> Self {
        Self {
            capacity,
            data: JsonBytes::default(),
            lock,
            type_: None,
        }
    }
}

impl RawTransaction {
    pub fn outputs_capacity(&self) -> CapacityAmount {
        self.outputs.iter().map(|output| &output.capacity).sum()
    }
}
