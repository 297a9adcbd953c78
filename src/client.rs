use std::sync::Arc;

use async_trait::async_trait;
use ckb_types::H256;
use futures::compat::Future01CompatExt;
use jsonrpc_core::futures::Future as _;
use jsonrpc_core_client::transports::http;
use jsonrpc_derive::rpc;
use parking_lot::Mutex;
use tokio::sync::oneshot;
use tokio01::runtime as runtime01;
use url::Url;

use crate::{
    error::{Error, Result},
    rpc::CkbRpc,
    types::{BlockNumber, Cell, RawTransaction},
};

/// A JSON-RPC client of a CKB node.
///
/// The HTTP transport is built on futures 0.1, so a legacy runtime is kept
/// alive alongside the client to drive the connection.
pub struct Client {
    client: Mutex<gen_client::Client>,
    _runtime01: Arc<Mutex<runtime01::Runtime>>,
}

#[rpc(client)]
trait CkbJsonRpc {
    #[rpc(name = "get_tip_block_number")]
    fn get_tip_block_number(&self) -> Result<BlockNumber>;

    #[rpc(name = "get_cells_by_lock_hash")]
    fn get_cells_by_lock_hash(
        &self,
        lock_hash: H256,
        from: BlockNumber,
        to: BlockNumber,
    ) -> Result<Vec<Cell>>;

    #[rpc(name = "send_transaction")]
    fn send_transaction(&self, tx: RawTransaction) -> Result<H256>;
}

impl Client {
    pub async fn connect(url: &Url) -> Result<Client> {
        log::trace!("initialize a JSON-RPC client for {} ...", url);
        let fut_client_conn = http::connect::<gen_client::Client>(url.as_str());

        let (tx, rx) = oneshot::channel();

        log::trace!("run a legacy runtime to connect");
        let mut rt01 = runtime01::Builder::new()
            .core_threads(2)
            .blocking_threads(2)
            .name_prefix("LegacyRT")
            .build()
            .map_err(|err| {
                Error::runtime(format!("failed to create a legacy runtime since {}", err))
            })?;
        rt01.spawn(fut_client_conn.then(move |result| {
            match result {
                Ok(_) => log::trace!("connect successfully"),
                Err(_) => log::trace!("connect unsuccessfully"),
            }
            if tx.send(result).is_err() {
                log::error!("failed to send the connection result back");
            }
            Ok::<(), ()>(())
        }));
        log::trace!("waiting for the client");
        let client = rx
            .await
            .map_err(|_| Error::client("no result for the connection"))?
            .map_err(Error::client)?;
        Ok(Client {
            client: Mutex::new(client),
            _runtime01: Arc::new(Mutex::new(rt01)),
        })
    }

    fn inner(&self) -> gen_client::Client {
        self.client.lock().clone()
    }
}

#[async_trait]
impl CkbRpc for Client {
    async fn get_tip_block_number(&self) -> Result<BlockNumber> {
        let fut = self.inner().get_tip_block_number();
        fut.compat().await.map_err(Error::client)
    }

    async fn get_cells_by_lock_hash(
        &self,
        lock_hash: &H256,
        from: BlockNumber,
        to: BlockNumber,
    ) -> Result<Vec<Cell>> {
        let fut = self
            .inner()
            .get_cells_by_lock_hash(lock_hash.clone(), from, to);
        fut.compat().await.map_err(Error::client)
    }

    async fn send_transaction(&self, tx: &RawTransaction) -> Result<H256> {
        let fut = self.inner().send_transaction(tx.clone());
        fut.compat().await.map_err(Error::client)
    }
}
