use ckb_account::{
    client::Client,
    error::{Error, Result},
    Account,
};

impl super::TransferConfig {
    pub(super) async fn execute(&self) -> Result<()> {
        log::info!("Transfer ...");
        let identity = self.account.identity()?;
        let client = Client::connect(&self.jsonrpc_url).await?;
        let mut account = Account::new(identity, client);
        if let Some(ref min_cell_capacity) = self.account.min_cell_capacity {
            account = account.with_min_cell_capacity(min_cell_capacity.clone());
        }

        if self.dry_run {
            let tx = account
                .generate_transaction(self.target.clone(), &self.capacity, Vec::new())
                .await?;
            let tx_str = serde_json::to_string_pretty(&tx).map_err(Error::runtime)?;
            println!("{}", tx_str);
            return Ok(());
        }

        match account
            .send_capacity(self.target.clone(), &self.capacity)
            .await
        {
            Ok(tx_hash) => {
                println!("{:#x}", tx_hash);
                Ok(())
            }
            Err(err) => {
                log::error!("send {} shannons failed since: {}", self.capacity, err);
                Err(err)
            }
        }
    }
}
