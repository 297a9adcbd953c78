use std::{fmt, result::Result as StdResult, str::FromStr};

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// A fixed-width integer which is a decimal string on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Decimal<T>(pub T);

pub type BlockNumber = Decimal<u64>;
pub type Since = Decimal<u64>;
pub type Index = Decimal<u32>;

impl<T> From<T> for Decimal<T> {
    fn from(inner: T) -> Self {
        Self(inner)
    }
}

impl<T: fmt::Display> fmt::Display for Decimal<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<T: fmt::Display> Serialize for Decimal<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> StdResult<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

impl<'de, T> Deserialize<'de> for Decimal<T>
where
    T: FromStr,
    <T as FromStr>::Err: fmt::Display,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> StdResult<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            let errmsg = format!("\"{}\" is not a decimal number", s);
            return Err(de::Error::custom(errmsg));
        }
        T::from_str(&s).map(Self).map_err(de::Error::custom)
    }
}
