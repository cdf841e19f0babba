//! Ranking of evidence confidence labels.

use crate::record::Value;

/// Default ranking, most confident first.
pub const DEFAULT_CONFIDENCE_ORDER: &[&str] = &["High", "Low"];

/// Pick the best-ranked `confidence` label across evidence entries.
///
/// Every entry must carry a `confidence` label listed in `order`.
pub fn highest_confidence(evidence: &[Value], order: &[String]) -> Result<String, String> {
    let mut best: Option<(usize, &str)> = None;

    for (index, entry) in evidence.iter().enumerate() {
        let label = entry
            .as_record()
            .and_then(|r| r.get("confidence"))
            .and_then(Value::as_str)
            .ok_or_else(|| format!("evidence {} has no confidence label", index))?;
        let rank = order
            .iter()
            .position(|o| o == label)
            .ok_or_else(|| format!("evidence {} has unknown confidence '{}'", index, label))?;

        if best.is_none_or(|(best_rank, _)| rank < best_rank) {
            best = Some((rank, label));
        }
    }

    best.map(|(_, label)| label.to_string())
        .ok_or_else(|| "no evidence entries".to_string())
}
