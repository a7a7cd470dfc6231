//! Interactive console prompts with re-prompting validation loops.

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};
use shark_habitat_core::{
    validate_latitude, validate_longitude, DepthLayer, LocationError, SpeciesCatalog,
    SpeciesProfile,
};
use thiserror::Error;

/// Reasons a typed value is refused. The messages are shown to the user verbatim.
#[derive(Clone, Debug, PartialEq, Error)]
pub(crate) enum InputError {
    /// Text that does not parse as a number.
    #[error("Please enter a valid number.")]
    NotANumber,
    /// Text that does not parse as an integer.
    #[error("Please enter a valid integer.")]
    NotAnInteger,
    /// Menu choice outside the listed entries.
    #[error("Choice must be between 1 and {count}.")]
    ChoiceOutOfRange {
        /// Number of menu entries.
        count: usize,
    },
    /// Species name missing from the catalog.
    #[error("Unknown species `{0}`.")]
    UnknownSpecies(String),
    /// Coordinate or depth outside its valid range.
    #[error(transparent)]
    Location(#[from] LocationError),
}

/// Line-oriented console over any reader and writer.
#[derive(Debug)]
pub(crate) struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Wraps the provided input and output streams.
    pub(crate) fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Stream prompts and banners are written to.
    pub(crate) fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Prints the numbered menu and asks for a species.
    pub(crate) fn choose_species<'a>(
        &mut self,
        catalog: &'a SpeciesCatalog,
    ) -> Result<&'a SpeciesProfile> {
        writeln!(self.output, "\n--- Shark Species Selection ---")?;
        writeln!(self.output, "Available sharks for prediction:")?;
        for (position, name) in catalog.names().enumerate() {
            writeln!(self.output, "  [{}] {name}", position + 1)?;
        }
        self.ask("Enter the number corresponding to the shark: ", |text| {
            parse_menu_choice(catalog, text)
        })
    }

    /// Asks for a latitude in [-90, 90].
    pub(crate) fn latitude(&mut self) -> Result<f64> {
        self.ask("Enter the current LATITUDE (-90.0 to 90.0): ", |text| {
            Ok(validate_latitude(parse_number(text)?)?)
        })
    }

    /// Asks for a longitude in [-180, 180].
    pub(crate) fn longitude(&mut self) -> Result<f64> {
        self.ask("Enter the current LONGITUDE (-180.0 to 180.0): ", |text| {
            Ok(validate_longitude(parse_number(text)?)?)
        })
    }

    /// Asks for a depth layer among the configured ones.
    pub(crate) fn depth(&mut self, layers: usize) -> Result<DepthLayer> {
        let prompt = depth_prompt(layers);
        self.ask(&prompt, |text| parse_depth(text, layers))
    }

    fn ask<T, F>(&mut self, prompt: &str, mut parse: F) -> Result<T>
    where
        F: FnMut(&str) -> Result<T, InputError>,
    {
        loop {
            write!(self.output, "{prompt}")?;
            self.output.flush().context("failed to flush prompt")?;

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .context("failed to read from input")?;
            if read == 0 {
                bail!("input ended while waiting for an answer to `{}`", prompt.trim());
            }

            match parse(line.trim()) {
                Ok(value) => return Ok(value),
                Err(error) => writeln!(self.output, "Error: {error}")?,
            }
        }
    }
}

/// Resolves a species given on the command line, by exact name or 1-based menu number.
pub(crate) fn species_from_flag<'a>(
    catalog: &'a SpeciesCatalog,
    value: &str,
) -> Result<&'a SpeciesProfile, InputError> {
    let value = value.trim();
    if let Some(profile) = catalog.get(value) {
        return Ok(profile);
    }
    if value.parse::<i64>().is_ok() {
        return parse_menu_choice(catalog, value);
    }
    Err(InputError::UnknownSpecies(value.to_owned()))
}

fn parse_menu_choice<'a>(
    catalog: &'a SpeciesCatalog,
    text: &str,
) -> Result<&'a SpeciesProfile, InputError> {
    let choice: i64 = text.parse().map_err(|_| InputError::NotANumber)?;
    let count = catalog.len();
    usize::try_from(choice)
        .ok()
        .and_then(|choice| choice.checked_sub(1))
        .and_then(|position| catalog.by_position(position))
        .ok_or(InputError::ChoiceOutOfRange { count })
}

fn parse_number(text: &str) -> Result<f64, InputError> {
    text.parse().map_err(|_| InputError::NotANumber)
}

fn parse_depth(text: &str, layers: usize) -> Result<DepthLayer, InputError> {
    let index: i64 = text.parse().map_err(|_| InputError::NotAnInteger)?;
    Ok(DepthLayer::checked(index, layers)?)
}

fn depth_prompt(layers: usize) -> String {
    let choices: Vec<String> = (0..layers)
        .map(|index| {
            let label = DepthLayer::new(index).label();
            let short = label
                .split(|c: char| c.is_whitespace() || c == '-' || c == '/')
                .next()
                .unwrap_or_default();
            format!("{index}={short}")
        })
        .collect();
    format!("Enter the current DEPTH LAYER ({}): ", choices.join(", "))
}
