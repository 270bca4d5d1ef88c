use crate::daily::daily_orders;
use crate::demographics::{customers_by_age_group, customers_by_gender, customers_by_state};
use crate::error::AnalyticsError;
use crate::products::product_ranking;
use crate::report::{RfmSummary, SalesReport};
use crate::rfm::rfm_table;
use core_types::OrderRecord;

/// A stateless calculator that assembles the full dashboard report.
#[derive(Debug, Default)]
pub struct AnalyticsEngine {}

impl AnalyticsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// The main entry point for building a report.
    ///
    /// # Arguments
    ///
    /// * `orders` - The already filtered order lines to summarize.
    /// * `top_n` - How many rows the best/worst and RFM leaderboards hold.
    ///
    /// # Returns
    ///
    /// A `Result` containing the `SalesReport` or an `AnalyticsError`.
    pub fn build_report(
        &self,
        orders: &[OrderRecord],
        top_n: usize,
    ) -> Result<SalesReport, AnalyticsError> {
        let mut report = SalesReport::new();

        if orders.is_empty() {
            return Ok(report);
        }

        self.summarize_orders(orders, &mut report)?;
        self.summarize_products(orders, top_n, &mut report)?;
        self.summarize_customers(orders, &mut report);
        self.summarize_rfm(orders, top_n, &mut report)?;

        tracing::info!(
            rows = orders.len(),
            total_orders = report.total_orders,
            total_revenue = %report.total_revenue,
            "Sales report built."
        );

        Ok(report)
    }

    fn summarize_orders(
        &self,
        orders: &[OrderRecord],
        report: &mut SalesReport,
    ) -> Result<(), AnalyticsError> {
        let daily = daily_orders(orders)?;

        report.first_order_date = daily.rows.first().map(|row| row.date);
        report.last_order_date = daily.rows.last().map(|row| row.date);
        report.total_orders = daily.total_orders();
        report.total_revenue = daily.total_revenue()?;
        report.daily_orders = daily;

        Ok(())
    }

    fn summarize_products(
        &self,
        orders: &[OrderRecord],
        top_n: usize,
        report: &mut SalesReport,
    ) -> Result<(), AnalyticsError> {
        let ranking = product_ranking(orders)?;

        report.best_products = ranking.best(top_n).to_vec();
        report.worst_products = ranking.worst(top_n);

        Ok(())
    }

    fn summarize_customers(&self, orders: &[OrderRecord], report: &mut SalesReport) {
        report.customers_by_gender = customers_by_gender(orders);
        report.customers_by_age_group = customers_by_age_group(orders);
        report.customers_by_state = customers_by_state(orders).by_count_desc();
    }

    fn summarize_rfm(
        &self,
        orders: &[OrderRecord],
        top_n: usize,
        report: &mut SalesReport,
    ) -> Result<(), AnalyticsError> {
        let table = rfm_table(orders)?;

        report.rfm = RfmSummary {
            average_recency_days: table.average_recency().map(|v| v.round_dp(1)),
            average_frequency: table.average_frequency().map(|v| v.round_dp(2)),
            average_monetary: table.average_monetary()?.map(|v| v.round_dp(2)),
            top_by_recency: table.top_by_recency(top_n),
            top_by_frequency: table.top_by_frequency(top_n),
            top_by_monetary: table.top_by_monetary(top_n),
        };

        Ok(())
    }
}
