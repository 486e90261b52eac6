//! Report aggregation service.

use std::collections::{BTreeMap, HashMap};

use rust_decimal::Decimal;
use uuid::Uuid;

use super::error::ReportError;
use super::types::{ClientPayment, ClientTotal, ProfessionEarning, ProfessionTotal};

/// Service for ranking professions and clients over paid jobs.
pub struct ReportService;

impl ReportService {
    /// Returns the profession with the highest paid total, or `None` when
    /// the window held no paid jobs.
    ///
    /// Ties are deterministic: the lexically smaller profession wins.
    #[must_use]
    pub fn best_profession(rows: &[ProfessionEarning]) -> Option<ProfessionTotal> {
        let mut totals: BTreeMap<&str, Decimal> = BTreeMap::new();
        for row in rows {
            *totals.entry(row.profession.as_str()).or_default() += row.price;
        }

        // Ascending key order; strict comparison keeps the first (lexically
        // smallest) profession on equal totals.
        let mut best: Option<(&str, Decimal)> = None;
        for (profession, total) in totals {
            if best.is_none_or(|(_, best_total)| total > best_total) {
                best = Some((profession, total));
            }
        }

        best.map(|(profession, total)| ProfessionTotal {
            profession: profession.to_string(),
            total,
        })
    }

    /// Returns the top `limit` clients by paid total, descending.
    ///
    /// Ties are deterministic: name ascending, then id ascending.
    #[must_use]
    pub fn best_clients(rows: &[ClientPayment], limit: usize) -> Vec<ClientTotal> {
        let mut totals: HashMap<Uuid, (&str, Decimal)> = HashMap::new();
        for row in rows {
            let entry = totals
                .entry(row.client_id)
                .or_insert((row.full_name.as_str(), Decimal::ZERO));
            entry.1 += row.price;
        }

        let mut ranked: Vec<ClientTotal> = totals
            .into_iter()
            .map(|(id, (full_name, paid))| ClientTotal {
                id,
                full_name: full_name.to_string(),
                paid,
            })
            .collect();

        ranked.sort_by(|a, b| {
            b.paid
                .cmp(&a.paid)
                .then_with(|| a.full_name.cmp(&b.full_name))
                .then_with(|| a.id.cmp(&b.id))
        });
        ranked.truncate(limit);
        ranked
    }

    /// Validates a raw client-report limit.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::InvalidLimit` for non-positive input.
    pub fn validate_limit(raw: i64) -> Result<usize, ReportError> {
        usize::try_from(raw)
            .ok()
            .filter(|&n| n > 0)
            .ok_or(ReportError::InvalidLimit(raw))
    }
}
