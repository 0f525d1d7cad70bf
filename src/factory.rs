//! Construction dispatcher: the Factory pattern over a closed set of kinds.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FactoryError {
    #[error("unrecognized kind: '{kind}'")]
    UnrecognizedKind { kind: String },
}

/// The discrete tags the factory understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarKind {
    Sedan,
    Suv,
}

impl FromStr for CarKind {
    type Err = FactoryError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "sedan" => Ok(CarKind::Sedan),
            "suv" => Ok(CarKind::Suv),
            other => Err(FactoryError::UnrecognizedKind {
                kind: other.to_string(),
            }),
        }
    }
}

/// Immutable record produced by the factory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Car {
    pub model: String,
    pub price: u32,
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (${})", self.model, self.price)
    }
}

/// Build the preconfigured record for a recognized kind.
///
/// Pure function of its input; the enum makes invalid kinds unrepresentable
/// here, so this entry point cannot fail.
pub fn create(kind: CarKind) -> Car {
    match kind {
        CarKind::Sedan => Car {
            model: "Sedan".to_string(),
            price: 20_000,
        },
        CarKind::Suv => Car {
            model: "SUV".to_string(),
            price: 30_000,
        },
    }
}

/// String entry point for callers holding an untyped tag.
pub fn create_from_tag(tag: &str) -> Result<Car, FactoryError> {
    Ok(create(tag.parse()?))
}
