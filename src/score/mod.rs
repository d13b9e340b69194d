pub mod question;

use crate::answers::ResponseMap;
use crate::catalog::Catalog;
use crate::types::survey::Dimension;
use std::collections::BTreeMap;

/// The scorer's full result: everything downstream rendering needs,
/// still as [0, 1] fractions.
#[derive(Debug, Clone)]
pub struct Assessment {
    pub overall: f64,
    pub subscores: BTreeMap<Dimension, f64>,
    pub nudges: Vec<String>,
}

/// Scores a response map against the catalog.
///
/// Pure function: no side effects, no failure modes. Unanswered
/// questions are skipped; a dimension with nothing answered defaults
/// to the neutral 0.5. Unknown ids in the response map are ignored.
pub fn score(catalog: &Catalog, responses: &ResponseMap) -> Assessment {
    let mut sums: BTreeMap<Dimension, f64> = BTreeMap::new();
    let mut counts: BTreeMap<Dimension, u32> = BTreeMap::new();

    for entry in &catalog.questions {
        let Some(raw) = responses.get(entry.id) else {
            continue;
        };
        let value = question::score_answer(entry.answer_type, &raw.to_lowercase());
        *sums.entry(entry.dimension).or_default() += value;
        *counts.entry(entry.dimension).or_default() += 1;
    }

    let subscores = Dimension::ALL
        .into_iter()
        .map(|dimension| {
            let count = counts.get(&dimension).copied().unwrap_or(0);
            let subscore = if count > 0 {
                sums[&dimension] / count as f64
            } else {
                question::NEUTRAL
            };
            (dimension, subscore)
        })
        .collect::<BTreeMap<_, _>>();

    let overall = subscores
        .iter()
        .map(|(dimension, subscore)| subscore * catalog.weight(*dimension))
        .sum();

    let nudges = select_nudges(catalog, &subscores);

    Assessment {
        overall,
        subscores,
        nudges,
    }
}

/// Picks the first configured nudge for each of the two lowest-scoring
/// dimensions, lowest first. The sort is stable, so equal subscores
/// fall back to dimension declaration order.
fn select_nudges(catalog: &Catalog, subscores: &BTreeMap<Dimension, f64>) -> Vec<String> {
    let mut ranked = Dimension::ALL
        .into_iter()
        .map(|dimension| (dimension, subscores[&dimension]))
        .collect::<Vec<_>>();
    ranked.sort_by(|a, b| a.1.total_cmp(&b.1));

    ranked
        .iter()
        .take(2)
        .filter_map(|(dimension, _)| catalog.first_nudge(*dimension))
        .map(str::to_string)
        .collect()
}
