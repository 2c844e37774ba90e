//! Converter form state.
//!
//! The interactive session and the one-shot `convert` command both drive
//! this state machine. Transitions are pure so they can be tested without
//! a network; callers own the side effects and feed outcomes back in.

use crate::flags::FlagMap;
use crate::rates::RateTable;
use anyhow::Result;
use tracing::{debug, warn};

pub const VALIDATION_ERROR: &str = "Please enter valid data.";
pub const FETCH_ERROR: &str = "Error fetching exchange rates. Please try again later.";

/// Ties an in-flight rate fetch to the conversion attempt that started
/// it. Outcomes carrying a superseded token are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generation(u64);

/// A validated conversion, ready for a rate fetch anchored at `from`.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub from: String,
    pub to: String,
    pub amount: f64,
}

#[derive(Debug, Default)]
struct PendingConversion {
    generation: u64,
    request: Option<ConversionRequest>,
}

/// Form state for one converter session.
///
/// Editing an input never clears the error or the result; only a
/// successful conversion clears the error and replaces the result.
#[derive(Debug, Default)]
pub struct ConverterForm {
    currencies: Vec<String>,
    flags: FlagMap,
    from: String,
    to: String,
    amount: String,
    converted: Option<String>,
    error: Option<String>,
    pending: PendingConversion,
}

impl ConverterForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loader completion: the codes become the selectable currency list,
    /// order preserved.
    pub fn currencies_loaded(&mut self, codes: Vec<String>) {
        self.currencies = codes;
    }

    /// Flag resolver completion: the merged map is published at once.
    pub fn flags_resolved(&mut self, flags: FlagMap) {
        self.flags = flags;
    }

    pub fn currencies(&self) -> &[String] {
        &self.currencies
    }

    pub fn flag(&self, code: &str) -> Option<&str> {
        self.flags.get(code).map(String::as_str)
    }

    pub fn set_from(&mut self, code: &str) {
        self.from = code.to_string();
    }

    pub fn set_to(&mut self, code: &str) {
        self.to = code.to_string();
    }

    pub fn set_amount(&mut self, amount: &str) {
        self.amount = amount.to_string();
    }

    pub fn from(&self) -> &str {
        &self.from
    }

    pub fn to(&self) -> &str {
        &self.to
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn converted_amount(&self) -> Option<&str> {
        self.converted.as_deref()
    }

    /// The sentence shown after a successful conversion, composed from
    /// the current inputs and the stored result, e.g.
    /// `100 USD equals 90.00 EUR`.
    pub fn result_line(&self) -> Option<String> {
        self.converted.as_ref().map(|converted| {
            format!(
                "{} {} equals {} {}",
                self.amount.trim(),
                self.from,
                converted,
                self.to
            )
        })
    }

    /// Validates the inputs and starts a conversion attempt.
    ///
    /// On invalid input the validation message is set and `None` comes
    /// back; no fetch should happen. On valid input the caller gets a
    /// generation token plus the request to fetch rates for, and must
    /// hand the outcome to [`apply_rates`](Self::apply_rates).
    pub fn begin_conversion(&mut self) -> Option<(Generation, ConversionRequest)> {
        let amount = self.amount.trim();
        let parsed = if self.from.is_empty() || self.to.is_empty() || amount.is_empty() {
            None
        } else {
            // "NaN" parses as a float but is not a convertible amount.
            amount.parse::<f64>().ok().filter(|value| !value.is_nan())
        };

        let Some(value) = parsed else {
            self.error = Some(VALIDATION_ERROR.to_string());
            return None;
        };

        let request = ConversionRequest {
            from: self.from.clone(),
            to: self.to.clone(),
            amount: value,
        };
        self.pending.generation += 1;
        self.pending.request = Some(request.clone());
        Some((Generation(self.pending.generation), request))
    }

    /// Applies a rate fetch outcome to the attempt identified by `token`.
    ///
    /// Outcomes for superseded attempts are dropped so a slow response
    /// can never overwrite a newer one. A table without the target
    /// currency counts as a fetch failure rather than producing a NaN
    /// result.
    pub fn apply_rates(&mut self, token: Generation, outcome: Result<RateTable>) {
        if token.0 != self.pending.generation {
            debug!(
                "Dropping stale conversion outcome (generation {} superseded by {})",
                token.0, self.pending.generation
            );
            return;
        }
        let Some(request) = self.pending.request.take() else {
            return;
        };

        match outcome {
            Ok(table) => match table.rate(&request.to) {
                Some(rate) => {
                    let converted = request.amount * rate;
                    self.converted = Some(format!("{converted:.2}"));
                    self.error = None;
                }
                None => {
                    warn!("No rate for {} in table anchored at {}", request.to, request.from);
                    self.error = Some(FETCH_ERROR.to_string());
                }
            },
            Err(e) => {
                warn!("Error converting currency: {e}");
                self.error = Some(FETCH_ERROR.to_string());
            }
        }
    }
}
