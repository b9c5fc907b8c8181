//! Category breakdowns with deterministic display colors.

use std::collections::HashMap;

use crate::domain::report::CategorySummary;
use crate::domain::transaction::{TransactionKind, TransactionRecord};

/// Fixed chart palette. Smaller than most category sets can grow, so
/// distinct names may share a color; identical names never differ.
const PALETTE: [&str; 10] = [
    "#FF6384", "#36A2EB", "#FFCE56", "#4BC0C0", "#9966FF", "#FF9F40", "#C9CBCF", "#7BC225",
    "#E7E9ED", "#6B7280",
];

/// Builds per-category breakdowns for pie and bar charts.
pub struct CategoryService;

impl CategoryService {
    /// Groups records of the requested `kind` by category name (falling
    /// back to the unknown-category label), sums magnitudes, and sorts
    /// descending by total. Ties keep the first-seen order of the category
    /// in the input. Transfers never appear in a breakdown, so requesting
    /// `TransactionKind::Transfer` returns an empty vector.
    pub fn category_summaries(
        records: &[TransactionRecord],
        kind: TransactionKind,
    ) -> Vec<CategorySummary> {
        if matches!(kind, TransactionKind::Transfer) {
            return Vec::new();
        }

        let mut order: Vec<CategorySummary> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for record in records
            .iter()
            .filter(|r| r.counts_toward_balance() && r.kind == kind)
        {
            let label = record.category_label().to_owned();
            let slot = *index.entry(label.clone()).or_insert_with(|| {
                order.push(CategorySummary {
                    color: color_for(&label).to_owned(),
                    name: label,
                    total: 0.0,
                    share: 0.0,
                    records: Vec::new(),
                });
                order.len() - 1
            });
            order[slot].total += record.magnitude();
            order[slot].records.push(record.clone());
        }

        let scope_total: f64 = order.iter().map(|summary| summary.total).sum();
        for summary in &mut order {
            summary.share = if scope_total > 0.0 {
                (summary.total / scope_total) * 100.0
            } else {
                0.0
            };
        }

        // Stable sort keeps first-seen order for equal totals.
        order.sort_by(|a, b| {
            b.total
                .partial_cmp(&a.total)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        tracing::debug!(categories = order.len(), %kind, "built category summaries");
        order
    }
}

/// Deterministic palette index from an FNV-1a fold of the category name.
fn color_for(name: &str) -> &'static str {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in name.as_bytes() {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    PALETTE[(hash % PALETTE.len() as u64) as usize]
}
