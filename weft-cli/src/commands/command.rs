use anyhow::Result;
use clap::builder::PossibleValue;
use enum_dispatch::enum_dispatch;
use std::{fmt::Display, str::FromStr};

#[enum_dispatch]
pub trait Command {
    #[allow(clippy::missing_errors_doc)]
    fn execute(&self) -> Result<()>;
}

/// Adapter for command-line flags whose values are an enumerated type that
/// implements `Display`/`FromStr`.
pub trait ValueEnum: Display + FromStr + Sized + 'static {
    /// Every value the flag accepts, in the order shown in help text.
    const VARIANTS: &'static [Self];

    fn possible_values() -> Vec<PossibleValue> {
        Self::VARIANTS
            .iter()
            .map(|variant| PossibleValue::new(variant.to_string()))
            .collect()
    }
}
