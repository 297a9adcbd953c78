use ckb_account::{client::Client, error::Result, Account};

impl super::BalanceConfig {
    pub(super) async fn execute(&self) -> Result<()> {
        log::info!("Balance ...");
        let identity = self.account.identity()?;
        let client = Client::connect(&self.jsonrpc_url).await?;
        let account = Account::new(identity, client);
        let balance = account.balance().await?;
        println!("address: {:#x}", account.address());
        println!("balance: {} shannons", balance);
        Ok(())
    }
}
