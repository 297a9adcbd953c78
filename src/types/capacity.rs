use std::{fmt, iter, ops, result::Result as StdResult, str::FromStr};

use num_bigint::BigUint;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};

/// Shannons in one CKByte.
pub const BYTE_SHANNONS: u64 = 100_000_000;

/// An arbitrary-precision capacity, in shannons.
///
/// On the wire it is always a decimal string.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CapacityAmount(BigUint);

impl CapacityAmount {
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn shannons(val: u64) -> Self {
        Self(BigUint::from(val))
    }

    pub fn ckbytes(val: u64) -> Self {
        Self(BigUint::from(val) * BYTE_SHANNONS)
    }

    pub fn is_zero(&self) -> bool {
        self.0 == BigUint::default()
    }

    pub fn safe_add(&self, rhs: &Self) -> Self {
        Self(&self.0 + &rhs.0)
    }

    pub fn safe_sub(&self, rhs: &Self) -> Result<Self> {
        if self < rhs {
            Err(Error::Underflow {
                minuend: self.clone(),
                subtrahend: rhs.clone(),
            })
        } else {
            Ok(Self(&self.0 - &rhs.0))
        }
    }
}

impl From<u64> for CapacityAmount {
    fn from(val: u64) -> Self {
        Self::shannons(val)
    }
}

impl FromStr for CapacityAmount {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            let errmsg = format!("\"{}\" is not a decimal number", s);
            return Err(Error::invalid_amount(errmsg));
        }
        if s.len() > 1 && s.starts_with('0') {
            let errmsg = format!("\"{}\" has leading zeros", s);
            return Err(Error::invalid_amount(errmsg));
        }
        BigUint::parse_bytes(s.as_bytes(), 10)
            .map(Self)
            .ok_or_else(|| Error::invalid_amount(format!("failed to parse \"{}\"", s)))
    }
}

impl fmt::Display for CapacityAmount {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'a> ops::Add<&'a CapacityAmount> for CapacityAmount {
    type Output = CapacityAmount;
    fn add(self, rhs: &'a CapacityAmount) -> Self::Output {
        Self(self.0 + &rhs.0)
    }
}

impl<'a> ops::AddAssign<&'a CapacityAmount> for CapacityAmount {
    fn add_assign(&mut self, rhs: &'a CapacityAmount) {
        self.0 += &rhs.0;
    }
}

impl<'a> iter::Sum<&'a CapacityAmount> for CapacityAmount {
    fn sum<I: Iterator<Item = &'a CapacityAmount>>(iter: I) -> Self {
        iter.fold(Self::zero(), |total, next| total + next)
    }
}

impl Serialize for CapacityAmount {
    fn serialize<S: Serializer>(&self, serializer: S) -> StdResult<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for CapacityAmount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> StdResult<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(de::Error::custom)
    }
}
