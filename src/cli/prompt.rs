//! Interactive filter prompt
//!
//! Shows the filter choices found in the data and asks the operator whether
//! to filter, and by what. Blank answers leave a filter unset; an amount that
//! does not parse is reported and left unset.

use crate::config::{parse_amount, FilterOptions};
use crate::core::traits::FilterSource;
use crate::core::validator::FilterChoices;
use crate::report::format::format_currency;
use crate::types::SalesError;
use rust_decimal::Decimal;
use std::io::{BufRead, Write};
use tracing::warn;

/// Filter source reading answers from `input` and writing questions to `output`
pub struct InteractivePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> InteractivePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `question` and return the trimmed answer (empty at end of input)
    fn ask(&mut self, question: &str) -> Result<String, SalesError> {
        write!(self.output, "{question}").map_err(prompt_error)?;
        self.output.flush().map_err(prompt_error)?;

        let mut answer = String::new();
        self.input.read_line(&mut answer).map_err(prompt_error)?;
        Ok(answer.trim().to_string())
    }

    fn ask_amount(&mut self, question: &str) -> Result<Option<Decimal>, SalesError> {
        let answer = self.ask(question)?;
        if answer.is_empty() {
            return Ok(None);
        }

        match parse_amount(&answer) {
            Ok(amount) => Ok(Some(amount)),
            Err(e) => {
                warn!(error = %e, "ignoring amount filter");
                writeln!(self.output, "{e}, filter not applied").map_err(prompt_error)?;
                Ok(None)
            }
        }
    }

    fn show_choices(&mut self, choices: &FilterChoices) -> Result<(), SalesError> {
        writeln!(self.output, "Filter Options Available:").map_err(prompt_error)?;
        writeln!(self.output, "Regions: {}", choices.regions.join(", ")).map_err(prompt_error)?;
        if let Some((low, high)) = choices.amount_range {
            writeln!(
                self.output,
                "Amount Range: {} - {}",
                format_currency(low),
                format_currency(high)
            )
            .map_err(prompt_error)?;
        }
        Ok(())
    }
}

fn prompt_error(error: std::io::Error) -> SalesError {
    SalesError::prompt(&error.to_string())
}

impl<R: BufRead, W: Write> FilterSource for InteractivePrompt<R, W> {
    fn select_filters(&mut self, choices: &FilterChoices) -> Result<FilterOptions, SalesError> {
        self.show_choices(choices)?;

        let choice = self.ask("Do you want to filter data? (y/n): ")?;
        if !matches!(choice.to_lowercase().as_str(), "y" | "yes") {
            return Ok(FilterOptions::default());
        }

        let region = self.ask("Enter region (or press Enter to skip): ")?;
        let min_amount = self.ask_amount("Enter minimum amount (or press Enter to skip): ")?;
        let max_amount = self.ask_amount("Enter maximum amount (or press Enter to skip): ")?;

        Ok(FilterOptions {
            region: Some(region).filter(|r| !r.is_empty()),
            min_amount,
            max_amount,
        })
    }
}
