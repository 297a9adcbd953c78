use std::{result::Result as StdResult, str::FromStr};

use ckb_jsonrpc_types::JsonBytes;
use ckb_types::H256;
use serde::{Deserialize, Serialize};

use super::{CapacityAmount, OutPoint, Script, ScriptHashType};
use crate::{
    error::Result,
    identity::{Identity, KeyMaterial},
};

/// The account file used by the command line tool.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct AccountConfig {
    pub secret_key: String,
    pub lock_script: LockScriptConfig,
    #[serde(default)]
    pub contract_script: Option<Script>,
    #[serde(default)]
    pub unlock_args: Vec<JsonBytes>,
    #[serde(default)]
    pub deps: Vec<OutPoint>,
    #[serde(default)]
    pub min_cell_capacity: Option<CapacityAmount>,
}

/// A lock script whose args default to the blake160 of the public key.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct LockScriptConfig {
    pub code_hash: H256,
    pub hash_type: ScriptHashType,
    #[serde(default)]
    pub args: Option<Vec<JsonBytes>>,
}

impl FromStr for AccountConfig {
    type Err = serde_yaml::Error;
    fn from_str(s: &str) -> StdResult<Self, Self::Err> {
        serde_yaml::from_str(&s)
    }
}

impl AccountConfig {
    pub fn identity(&self) -> Result<Identity> {
        let mut identity = Identity::new(KeyMaterial::HexString(self.secret_key.clone()))?;
        let args = self
            .lock_script
            .args
            .clone()
            .unwrap_or_else(|| vec![JsonBytes::from_vec(identity.blake160())]);
        let lock_script = Script::new(
            self.lock_script.code_hash.clone(),
            self.lock_script.hash_type,
            args,
        );
        identity.set_lock_script(lock_script);
        if let Some(ref script) = self.contract_script {
            identity.set_contract_script(script.clone());
        }
        identity.set_unlock_args(self.unlock_args.clone());
        identity.set_deps(self.deps.clone());
        Ok(identity)
    }
}
