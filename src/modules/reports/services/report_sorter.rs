use std::cmp::Ordering;

use crate::modules::reports::models::FeeTotal;

/// Imposes the canonical eight-key ascending order over aggregated rows
///
/// Keys, in precedence: fee type, enterprise name, fee name, customer
/// name, placement, transfer-through name, tax category name, total
/// amount. String keys compare lexicographically (case-sensitive),
/// enum keys by their display labels, and an absent value sorts before
/// any present one. The amount is the only numeric key and breaks the
/// final tie, so the order is total.
pub struct ReportSorter;

impl ReportSorter {
    pub fn new() -> Self {
        Self
    }

    pub fn sort(&self, rows: &mut [FeeTotal]) {
        rows.sort_by(Self::compare);
    }

    pub fn compare(a: &FeeTotal, b: &FeeTotal) -> Ordering {
        a.fee_type
            .label()
            .cmp(b.fee_type.label())
            .then_with(|| a.enterprise_name.cmp(&b.enterprise_name))
            .then_with(|| a.fee_name.cmp(&b.fee_name))
            .then_with(|| a.customer_name.cmp(&b.customer_name))
            .then_with(|| {
                // Option<&str> orders None before any Some
                a.fee_placement
                    .map(|p| p.label())
                    .cmp(&b.fee_placement.map(|p| p.label()))
            })
            .then_with(|| {
                a.fee_calculated_on_transfer_through_name
                    .as_deref()
                    .cmp(&b.fee_calculated_on_transfer_through_name.as_deref())
            })
            .then_with(|| {
                a.tax_category_name
                    .as_deref()
                    .cmp(&b.tax_category_name.as_deref())
            })
            .then_with(|| a.total_amount.cmp(&b.total_amount))
    }
}

impl Default for ReportSorter {
    fn default() -> Self {
        Self::new()
    }
}
