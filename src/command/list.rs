use comfy_table::{Cell, CellAlignment, Table, TableComponent};
use crate::transaction::Transaction;

/// Build the `list` table, one row per record in stored order
pub(crate) fn render_table(transactions: &[Transaction]) -> Table {
    let mut table = Table::new();
    table.remove_style(TableComponent::HorizontalLines);
    table.remove_style(TableComponent::MiddleIntersections);
    table.remove_style(TableComponent::LeftBorderIntersections);
    table.remove_style(TableComponent::RightBorderIntersections);
    table.set_header(vec!["Date", "Type", "Price", "Amount"]);

    for t in transactions {
        table.add_row(vec![
            Cell::new(t.date.format("%Y-%m-%d").to_string().as_str()),
            Cell::new(t.trade_type.to_string().as_str()),
            Cell::new(t.price.normalize().to_string().as_str()).set_alignment(CellAlignment::Right),
            Cell::new(t.amount.normalize().to_string().as_str()).set_alignment(CellAlignment::Right),
        ]);
    }

    table
}
