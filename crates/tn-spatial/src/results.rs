//! Remapping solver output onto the canonical link order.
//!
//! The external solver reports one `[tail, head, value]` row per link it
//! touched, in its own order.  The canonical link table fixes the order the
//! rest of the pipeline expects.

use std::collections::HashMap;

use log::{debug, warn};

use tn_core::{id_from_f64, NodeId};

/// For each `(tail, head)` in `links`, the value of the `raw` row with the
/// same endpoints, or `0.0` if the solver reported none.
///
/// When several raw rows share endpoints the last one wins.  Raw rows whose
/// endpoint columns are not integral ids are skipped.
pub fn remap_results(links: &[(NodeId, NodeId)], raw: &[[f64; 3]]) -> Vec<f64> {
    let mut by_endpoints: HashMap<(NodeId, NodeId), f64> = HashMap::with_capacity(raw.len());
    let mut skipped = 0usize;

    for row in raw {
        match (id_from_f64(row[0]), id_from_f64(row[1])) {
            (Ok(a), Ok(b)) => {
                by_endpoints.insert((NodeId(a), NodeId(b)), row[2]);
            }
            _ => skipped += 1,
        }
    }
    if skipped > 0 {
        warn!("skipped {skipped} result rows with non-integral endpoints");
    }

    let mut unmatched = 0usize;
    let out: Vec<f64> = links
        .iter()
        .map(|key| {
            by_endpoints.get(key).copied().unwrap_or_else(|| {
                unmatched += 1;
                0.0
            })
        })
        .collect();

    if unmatched > 0 {
        warn!("{unmatched} of {} links have no solver result; written as 0", links.len());
    }
    debug!("remapped {} result rows onto {} links", raw.len(), links.len());
    out
}
