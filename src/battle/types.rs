use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The two factions that fight each round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Jedi,
    Sith,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Jedi => "jedi",
            Side::Sith => "sith",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which side, if any, gets boosted odds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Favor {
    Jedi,
    Sith,
    #[default]
    None,
}

impl Favor {
    /// Probability that the Jedi win a single round
    pub fn jedi_bias(&self) -> f64 {
        match self {
            Favor::Jedi => 0.6,
            Favor::Sith => 0.4,
            Favor::None => 0.5,
        }
    }
}

/// Unknown values fall back to fair odds, so this never fails.
impl FromStr for Favor {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "jedi" => Favor::Jedi,
            "sith" => Favor::Sith,
            _ => Favor::None,
        })
    }
}

impl fmt::Display for Favor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Favor::Jedi => write!(f, "jedi"),
            Favor::Sith => write!(f, "sith"),
            Favor::None => write!(f, "none"),
        }
    }
}

/// Outcome of a single round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    /// 1-based round number
    pub round: u32,
    pub winner: Side,
}

/// Overall label for a battle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Jedi,
    Sith,
    Draw,
}

impl From<Side> for Outcome {
    fn from(side: Side) -> Self {
        match side {
            Side::Jedi => Outcome::Jedi,
            Side::Sith => Outcome::Sith,
        }
    }
}

/// Win counts across a battle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub jedi: u32,
    pub sith: u32,
    pub outcome: Outcome,
}

impl Summary {
    pub fn total_rounds(&self) -> u32 {
        self.jedi + self.sith
    }
}
