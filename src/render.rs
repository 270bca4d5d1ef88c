use analytics::{CategoryCount, ProductQuantity, RfmRow, SalesReport};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, Table};
use std::fmt::{self, Display, Write};

fn table(header: &[&str]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(header.to_vec());
    table
}

fn number(value: impl Display) -> Cell {
    Cell::new(value).set_alignment(CellAlignment::Right)
}

fn optional(value: Option<impl Display>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

fn products_table(rows: &[ProductQuantity]) -> Table {
    let mut table = table(&["Product", "Quantity"]);
    for row in rows {
        table.add_row(vec![Cell::new(&row.product_name), number(row.total_quantity)]);
    }
    table
}

fn categories_table<C: Display>(label: &str, rows: &[CategoryCount<C>]) -> Table {
    let mut table = table(&[label, "Customers"]);
    for row in rows {
        table.add_row(vec![Cell::new(&row.category), number(row.customer_count)]);
    }
    table
}

fn rfm_leaderboard(rows: &[RfmRow]) -> Table {
    let mut table = table(&["Customer", "Recency (days)", "Frequency", "Monetary"]);
    for row in rows {
        table.add_row(vec![
            Cell::new(&row.customer_id),
            number(row.recency_days),
            number(row.frequency),
            number(row.monetary),
        ]);
    }
    table
}

/// Renders every section of the report as plain-text tables.
pub fn render_report(report: &SalesReport) -> Result<String, fmt::Error> {
    let mut out = String::new();

    writeln!(
        out,
        "Period: {} to {}",
        optional(report.first_order_date),
        optional(report.last_order_date)
    )?;

    writeln!(out, "\nDaily Orders")?;
    let mut totals = table(&["Total Orders", "Total Revenue"]);
    totals.add_row(vec![number(report.total_orders), number(report.total_revenue)]);
    writeln!(out, "{totals}")?;

    let mut daily = table(&["Date", "Orders", "Revenue"]);
    for row in &report.daily_orders.rows {
        daily.add_row(vec![Cell::new(row.date), number(row.order_count), number(row.revenue)]);
    }
    writeln!(out, "{daily}")?;

    writeln!(out, "\nBest Performing Products")?;
    writeln!(out, "{}", products_table(&report.best_products))?;
    writeln!(out, "\nWorst Performing Products")?;
    writeln!(out, "{}", products_table(&report.worst_products))?;

    writeln!(out, "\nCustomers by Gender")?;
    writeln!(out, "{}", categories_table("Gender", &report.customers_by_gender.rows))?;
    writeln!(out, "\nCustomers by Age Group")?;
    writeln!(out, "{}", categories_table("Age Group", &report.customers_by_age_group.rows))?;
    writeln!(out, "\nCustomers by State")?;
    writeln!(out, "{}", categories_table("State", &report.customers_by_state))?;

    let rfm = &report.rfm;
    writeln!(out, "\nBest Customers (RFM)")?;
    let mut averages = table(&["Avg Recency (days)", "Avg Frequency", "Avg Monetary"]);
    averages.add_row(vec![
        number(optional(rfm.average_recency_days)),
        number(optional(rfm.average_frequency)),
        number(optional(rfm.average_monetary)),
    ]);
    writeln!(out, "{averages}")?;
    writeln!(out, "\nBy Recency")?;
    writeln!(out, "{}", rfm_leaderboard(&rfm.top_by_recency))?;
    writeln!(out, "\nBy Frequency")?;
    writeln!(out, "{}", rfm_leaderboard(&rfm.top_by_frequency))?;
    writeln!(out, "\nBy Monetary")?;
    writeln!(out, "{}", rfm_leaderboard(&rfm.top_by_monetary))?;

    Ok(out)
}
