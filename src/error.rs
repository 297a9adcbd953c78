use std::{fmt, result};

use thiserror::Error;

use crate::types::CapacityAmount;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid amount: {0}")]
    InvalidAmount(String),
    #[error("capacity underflow: {minuend} - {subtrahend}")]
    Underflow {
        minuend: CapacityAmount,
        subtrahend: CapacityAmount,
    },
    #[error("capacity cannot less than {minimum}, but got {required}")]
    InvalidCapacityRequest {
        required: CapacityAmount,
        minimum: CapacityAmount,
    },
    #[error("not enough capacity, required: {required}, available: {gathered}")]
    InsufficientCapacity {
        required: CapacityAmount,
        gathered: CapacityAmount,
    },

    #[error("config error: {0}")]
    Config(String),
    #[error("runtime error: {0}")]
    Runtime(String),
    #[error("client error: {0}")]
    Client(String),

    #[error("url error: {0}")]
    Url(#[from] url::ParseError),
    #[error("crypto error: {0}")]
    Crypto(String),
}

pub type Result<T> = result::Result<T, Error>;

impl Error {
    pub fn invalid_amount<T: fmt::Display>(inner: T) -> Self {
        Self::InvalidAmount(inner.to_string())
    }
    pub fn config<T: fmt::Display>(inner: T) -> Self {
        Self::Config(inner.to_string())
    }
    pub fn runtime<T: fmt::Display>(inner: T) -> Self {
        Self::Runtime(inner.to_string())
    }
    pub fn client<T: fmt::Display>(inner: T) -> Self {
        Self::Client(inner.to_string())
    }
    pub fn crypto<T: fmt::Display>(inner: T) -> Self {
        Self::Crypto(inner.to_string())
    }
    pub fn argument_should_exist(name: &str) -> Self {
        Self::Config(format!("argument {} should exist", name))
    }
}

impl From<ckb_crypto::secp::Error> for Error {
    fn from(error: ckb_crypto::secp::Error) -> Self {
        Error::Crypto(error.to_string())
    }
}
