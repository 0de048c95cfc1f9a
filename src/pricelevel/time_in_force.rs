use crate::pricelevel::PriceLevelError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How long an order remains eligible for execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeInForce {
    /// Good till cancel: any remainder rests on the book.
    Gtc,
    /// Immediate or cancel: take what is available, discard the remainder.
    Ioc,
    /// Fill or kill: execute completely in one step or not at all.
    Fok,
}

impl TimeInForce {
    /// Whether the order must execute immediately and can never rest.
    pub fn is_immediate(self) -> bool {
        matches!(self, TimeInForce::Ioc | TimeInForce::Fok)
    }
}

impl fmt::Display for TimeInForce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeInForce::Gtc => f.write_str("GTC"),
            TimeInForce::Ioc => f.write_str("IOC"),
            TimeInForce::Fok => f.write_str("FOK"),
        }
    }
}

impl FromStr for TimeInForce {
    type Err = PriceLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GTC" => Ok(TimeInForce::Gtc),
            "IOC" => Ok(TimeInForce::Ioc),
            "FOK" => Ok(TimeInForce::Fok),
            _ => Err(PriceLevelError::UnknownToken {
                token: s.to_string(),
                expected: "time in force",
            }),
        }
    }
}
