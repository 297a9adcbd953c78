use std::{result::Result as StdResult, str::FromStr};

use ckb_hash::new_blake2b;
use ckb_jsonrpc_types::JsonBytes;
use ckb_types::H256;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ScriptHashType {
    Data,
    Type,
}

/// A spending condition: the code to run and the arguments passed to it.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Script {
    pub args: Vec<JsonBytes>,
    pub code_hash: H256,
    pub hash_type: ScriptHashType,
}

impl Default for ScriptHashType {
    fn default() -> Self {
        Self::Data
    }
}

impl From<ScriptHashType> for u8 {
    fn from(input: ScriptHashType) -> u8 {
        match input {
            ScriptHashType::Data => 0,
            ScriptHashType::Type => 1,
        }
    }
}

impl Default for Script {
    fn default() -> Self {
        Self {
            args: Vec::new(),
            code_hash: H256::default(),
            hash_type: ScriptHashType::default(),
        }
    }
}

impl FromStr for Script {
    type Err = serde_yaml::Error;
    fn from_str(s: &str) -> StdResult<Self, Self::Err> {
        serde_yaml::from_str(&s)
    }
}

impl Script {
    pub fn new(code_hash: H256, hash_type: ScriptHashType, args: Vec<JsonBytes>) -> Self {
        Self {
            args,
            code_hash,
            hash_type,
        }
    }

    /// Hashes `code_hash`, the hash type byte and then every argument.
    pub fn calc_script_hash(&self) -> H256 {
        let mut result = [0u8; 32];
        let mut hasher = new_blake2b();
        hasher.update(self.code_hash.as_bytes());
        let hash_type: u8 = self.hash_type.into();
        hasher.update(&[hash_type]);
        for arg in &self.args {
            hasher.update(arg.as_bytes());
        }
        hasher.finalize(&mut result);
        H256(result)
    }
}
