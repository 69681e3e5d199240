mod calc;
mod export;
mod list;
mod trade;

pub(crate) use calc::{execute_calc, format_profit};
pub(crate) use export::execute_export;
pub(crate) use list::render_table;
pub(crate) use trade::record_trade;
