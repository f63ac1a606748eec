//! Exchange screen state as plain data.
//!
//! UI affordances (user-facing notifications) are kept apart in
//! [`ScreenNotifier`] so the state itself stays `Clone + PartialEq`.

use crate::db::QuickAccessPair;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

pub const DEFAULT_CURRENCY: &str = "USD";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyState {
    pub selected_currency: String,
    /// Raw text as typed by the user.
    pub amount: String,
}

impl Default for CurrencyState {
    fn default() -> Self {
        Self {
            selected_currency: DEFAULT_CURRENCY.to_string(),
            amount: String::new(),
        }
    }
}

impl CurrencyState {
    /// The typed amount as a number, accepting `,` as decimal separator.
    /// `None` for empty, malformed, negative or non-finite input.
    pub fn parsed_amount(&self) -> Option<f64> {
        let text = self.amount.trim();
        if text.is_empty() {
            return None;
        }
        text.replace(',', ".")
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite() && *v >= 0.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeScreenState {
    pub from: CurrencyState,
    pub to: CurrencyState,
    pub is_loading: bool,
}

/// Which side of the exchange an edit applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    From,
    To,
}

impl ExchangeScreenState {
    fn side_mut(&mut self, side: Side) -> &mut CurrencyState {
        match side {
            Side::From => &mut self.from,
            Side::To => &mut self.to,
        }
    }

    pub fn set_currency(&mut self, side: Side, code: impl Into<String>) {
        self.side_mut(side).selected_currency = code.into();
    }

    pub fn set_amount(&mut self, side: Side, amount: impl Into<String>) {
        self.side_mut(side).amount = amount.into();
    }

    pub fn swap(&mut self) {
        std::mem::swap(&mut self.from, &mut self.to);
    }

    /// Select the currencies of a quick-access pair. Amounts are kept.
    pub fn apply_pair(&mut self, pair: &QuickAccessPair) {
        self.from.selected_currency = pair.from_currency.clone();
        self.to.selected_currency = pair.to_currency.clone();
    }
}

/// Channel for messages the UI should surface to the user.
#[derive(Debug, Clone)]
pub struct ScreenNotifier {
    tx: broadcast::Sender<String>,
}

impl Default for ScreenNotifier {
    fn default() -> Self {
        Self::new(16)
    }
}

impl ScreenNotifier {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<String> {
        self.tx.subscribe()
    }

    /// Returns how many subscribers received the message.
    pub fn notify(&self, message: impl Into<String>) -> usize {
        self.tx.send(message.into()).unwrap_or(0)
    }
}
