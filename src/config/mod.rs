use std::{convert::TryFrom, fmt::Display, fs::OpenOptions, io::Read as _, str::FromStr};

use ckb_account::{
    error::{Error, Result},
    types::{AccountConfig, CapacityAmount, Script},
};

mod balance;
mod transfer;

pub(crate) enum AppConfig {
    Balance(BalanceConfig),
    Transfer(TransferConfig),
}

pub(crate) struct BalanceConfig {
    pub(crate) jsonrpc_url: url::Url,
    pub(crate) account: AccountConfig,
}

pub(crate) struct TransferConfig {
    pub(crate) jsonrpc_url: url::Url,
    pub(crate) account: AccountConfig,
    pub(crate) target: Script,
    pub(crate) capacity: CapacityAmount,
    pub(crate) dry_run: bool,
}

impl AppConfig {
    // clap 2.x `crate_authors!` trips this deny-by-default lint on newer rustc.
    #[allow(unknown_lints, dangerous_implicit_autorefs)]
    pub(crate) fn load() -> Result<Self> {
        let yaml = clap::load_yaml!("cli.yaml");
        let matches = clap::App::from_yaml(yaml)
            .version(clap::crate_version!())
            .author(clap::crate_authors!("\n"))
            .about(clap::crate_description!())
            .get_matches();
        Self::try_from(&matches)
    }

    pub(crate) fn execute(&self) -> Result<()> {
        log::info!("Executing ...");
        let rt = crate::runtime::initialize()?;
        match self {
            Self::Balance(ref cfg) => rt.block_on(cfg.execute()),
            Self::Transfer(ref cfg) => rt.block_on(cfg.execute()),
        }
    }
}

impl<'a> TryFrom<&'a clap::ArgMatches<'a>> for AppConfig {
    type Error = Error;
    fn try_from(matches: &'a clap::ArgMatches) -> Result<Self> {
        match matches.subcommand() {
            ("balance", Some(submatches)) => {
                BalanceConfig::try_from(submatches).map(AppConfig::Balance)
            }
            ("transfer", Some(submatches)) => {
                TransferConfig::try_from(submatches).map(AppConfig::Transfer)
            }
            (subcmd, _) => Err(Error::config(format!("subcommand {}", subcmd))),
        }
    }
}

impl<'a> TryFrom<&'a clap::ArgMatches<'a>> for BalanceConfig {
    type Error = Error;
    fn try_from(matches: &'a clap::ArgMatches) -> Result<Self> {
        let jsonrpc_url = parse_from_str::<url::Url>(matches, "jsonrpc-url")?;
        let account = parse_from_file::<AccountConfig>(matches, "config")?;
        Ok(Self {
            jsonrpc_url,
            account,
        })
    }
}

impl<'a> TryFrom<&'a clap::ArgMatches<'a>> for TransferConfig {
    type Error = Error;
    fn try_from(matches: &'a clap::ArgMatches) -> Result<Self> {
        let jsonrpc_url = parse_from_str::<url::Url>(matches, "jsonrpc-url")?;
        let account = parse_from_file::<AccountConfig>(matches, "config")?;
        let target = parse_from_file::<Script>(matches, "target")?;
        let capacity = parse_from_str::<CapacityAmount>(matches, "capacity")?;
        let dry_run = matches.is_present("dry-run");
        Ok(Self {
            jsonrpc_url,
            account,
            target,
            capacity,
            dry_run,
        })
    }
}

fn parse_from_str<T: FromStr>(matches: &clap::ArgMatches, name: &str) -> Result<T>
where
    <T as FromStr>::Err: Display,
{
    matches
        .value_of(name)
        .map(|index| T::from_str(index).map_err(Error::config))
        .transpose()?
        .ok_or_else(|| Error::argument_should_exist(name))
}

fn parse_from_file<T: FromStr>(matches: &clap::ArgMatches, name: &str) -> Result<T>
where
    <T as FromStr>::Err: Display,
{
    matches
        .value_of(name)
        .map(|file| {
            OpenOptions::new()
                .read(true)
                .open(file)
                .map_err(|err| Error::config(format!("failed to open {} since {}", file, err)))
                .and_then(|mut f| {
                    let mut buffer = String::new();
                    f.read_to_string(&mut buffer)
                        .map_err(|err| {
                            Error::config(format!("failed to read {} since {}", file, err))
                        })
                        .map(|_| buffer)
                })
                .and_then(|data| T::from_str(&data).map_err(Error::config))
        })
        .transpose()?
        .ok_or_else(|| Error::argument_should_exist(name))
}
