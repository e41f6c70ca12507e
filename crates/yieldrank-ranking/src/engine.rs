//! Ranking engine.

use crate::candidate::RankedBond;
use crate::comparator::{compare_ranked, stable_sort_by};
use crate::screening::{within_duration, ScreeningCriteria};

/// Orders scored bonds and assigns 1-based ranks.
///
/// # Example
///
/// ```rust,ignore
/// let scored = score_candidates(&inputs, &profile, &config, ScoreTables::standard());
/// let ranked = RankingEngine::new().rank(scored, Some(8.0));
/// assert_eq!(ranked[0].rank, Some(1));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RankingEngine;

impl RankingEngine {
    /// Creates an engine.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Drops bonds longer than `max_duration`, sorts the rest by the
    /// tie-break chain and numbers them `1..=n`.
    ///
    /// Any rank already present on the input is overwritten.
    #[must_use]
    pub fn rank(&self, candidates: Vec<RankedBond>, max_duration: Option<f64>) -> Vec<RankedBond> {
        let total = candidates.len();
        let mut kept: Vec<RankedBond> = candidates
            .into_iter()
            .filter(|c| {
                let keep = within_duration(c, max_duration);
                if !keep {
                    log::debug!(
                        "{}: duration {:?} exceeds ceiling {:?}",
                        c.bond.cusip,
                        c.duration(),
                        max_duration
                    );
                }
                keep
            })
            .collect();

        stable_sort_by(&mut kept, compare_ranked);

        for (index, bond) in kept.iter_mut().enumerate() {
            bond.rank = Some(rank_number(index));
        }

        log::debug!("ranked {} of {} candidates", kept.len(), total);
        kept
    }

    /// Screens candidates against `criteria`, then ranks the survivors
    /// under the criteria's duration ceiling.
    #[must_use]
    pub fn rank_screened(
        &self,
        candidates: Vec<RankedBond>,
        criteria: &ScreeningCriteria,
    ) -> Vec<RankedBond> {
        let admitted: Vec<RankedBond> = candidates
            .into_iter()
            .filter(|c| {
                let admitted = criteria.admits(c);
                if !admitted {
                    log::debug!("{}: screened out", c.bond.cusip);
                }
                admitted
            })
            .collect();
        self.rank(admitted, criteria.max_duration)
    }
}

fn rank_number(index: usize) -> u32 {
    u32::try_from(index + 1).unwrap_or(u32::MAX)
}
