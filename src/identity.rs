use ckb_crypto::secp;
use ckb_hash::blake2b_256;
use ckb_jsonrpc_types::JsonBytes;
use ckb_types::H256;

use crate::{
    error::{Error, Result},
    types::{OutPoint, Script},
};

/// Secret key material, either hex encoded or raw.
#[derive(Debug, Clone)]
pub enum KeyMaterial {
    HexString(String),
    RawBytes(Vec<u8>),
}

/// The key pair of an account plus the scripts and dependencies it spends with.
#[derive(Clone)]
pub struct Identity {
    privkey: secp::Privkey,
    pubkey: secp::Pubkey,
    lock_script: Script,
    contract_script: Script,
    unlock_args: Vec<JsonBytes>,
    deps: Vec<OutPoint>,
}

impl KeyMaterial {
    fn into_bytes(self) -> Result<Vec<u8>> {
        match self {
            Self::HexString(s) => {
                let trimmed = s.strip_prefix("0x").unwrap_or(s.as_str());
                hex::decode(trimmed).map_err(|err| {
                    Error::crypto(format!("secret key is not a hex string since {}", err))
                })
            }
            Self::RawBytes(bytes) => Ok(bytes),
        }
    }
}

impl From<&str> for KeyMaterial {
    fn from(s: &str) -> Self {
        Self::HexString(s.to_owned())
    }
}

impl From<Vec<u8>> for KeyMaterial {
    fn from(bytes: Vec<u8>) -> Self {
        Self::RawBytes(bytes)
    }
}

impl Identity {
    pub fn new<K: Into<KeyMaterial>>(key: K) -> Result<Self> {
        let sk_bytes = key.into().into_bytes()?;
        if sk_bytes.len() != 32 {
            let errmsg = format!("secret key should be 32 bytes, but got {}", sk_bytes.len());
            return Err(Error::crypto(errmsg));
        }
        let privkey = secp::Privkey::from_slice(&sk_bytes);
        let pubkey = privkey.pubkey()?;
        Ok(Self {
            privkey,
            pubkey,
            lock_script: Script::default(),
            contract_script: Script::default(),
            unlock_args: Vec::new(),
            deps: Vec::new(),
        })
    }

    pub fn lock_script(&self) -> &Script {
        &self.lock_script
    }

    pub fn contract_script(&self) -> &Script {
        &self.contract_script
    }

    pub fn unlock_args(&self) -> &[JsonBytes] {
        &self.unlock_args
    }

    pub fn deps(&self) -> &[OutPoint] {
        &self.deps
    }

    pub fn set_lock_script(&mut self, script: Script) {
        self.lock_script = script;
    }

    pub fn set_contract_script(&mut self, script: Script) {
        self.contract_script = script;
    }

    pub fn set_unlock_args(&mut self, args: Vec<JsonBytes>) {
        self.unlock_args = args;
    }

    pub fn set_deps(&mut self, deps: Vec<OutPoint>) {
        self.deps = deps;
    }

    pub fn lock_hash(&self) -> H256 {
        self.lock_script.calc_script_hash()
    }

    pub fn contract_hash(&self) -> H256 {
        self.contract_script.calc_script_hash()
    }

    /// The address of an account is its lock hash.
    pub fn address(&self) -> H256 {
        self.lock_hash()
    }

    pub fn hex_public_key(&self) -> String {
        hex::encode(self.pubkey.serialize())
    }

    /// The first 20 bytes of the blake2b hash of the compressed public key.
    pub fn blake160(&self) -> Vec<u8> {
        let hash = blake2b_256(&self.pubkey.serialize());
        (&hash[..20]).to_vec()
    }

    pub fn sign_recoverable(&self, message: &H256) -> Result<Vec<u8>> {
        self.privkey
            .sign_recoverable(message)
            .map(|sig| sig.serialize())
            .map_err(Into::into)
    }
}
