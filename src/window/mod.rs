use chrono::NaiveDate;
use crate::transaction::Transaction;
use crate::util::{month_index, week_of};

/// Time window a profit figure is computed over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Window {
    Today,
    Week,
    Month,
    All,
}

impl Window {
    pub(crate) fn label(&self) -> &'static str {
        match self {
            Window::Today => "Today's profit",
            Window::Week => "This week's profit",
            Window::Month => "This month's profit",
            Window::All => "Total profit",
        }
    }

    /// Records that fall in this window relative to `today`. Week and month compare the stored
    /// number only, so the same week of another year matches too.
    pub(crate) fn select(&self, transactions: &[Transaction], today: NaiveDate) -> Vec<Transaction> {
        transactions.iter()
            .filter(|t| match self {
                Window::Today => t.date == today,
                Window::Week => t.week == week_of(today),
                Window::Month => t.month == month_index(today),
                Window::All => true,
            })
            .cloned()
            .collect()
    }
}
