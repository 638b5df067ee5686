//! SMART scoring.
//!
//! Pure functions over one loaded batch: per-criterion aggregation of raw
//! sub-criterion scores, min-max normalization to a 0-100 utility and
//! weight-share weighting. Nothing here touches storage.

use std::collections::{BTreeMap, HashMap};

use crate::config::MissingCriterionPolicy;
use crate::errors::{KepswellError, Result};
use crate::models::appraisals::entities::ScoreEntry;
use crate::models::criteria::entities::{Criterion, CriterionDirection};
use crate::models::rankings::entities::{RankedAppraisal, RankingInput};

/// Upper end of the utility range
pub const UTILITY_SCALE: f64 = 100.0;

/// Criterion as seen by the ranking computation
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogCriterion {
    pub id: i64,
    pub weight: f64,
    pub direction: CriterionDirection,
}

/// Criteria of one division, keyed by id, with the sub-criterion ownership map
#[derive(Debug, Clone)]
pub struct CriteriaCatalog {
    criteria: BTreeMap<i64, CatalogCriterion>,
    owners: HashMap<i64, i64>,
    total_weight: f64,
}

impl CriteriaCatalog {
    /// Fails with `NotConfigured` when there is nothing to weigh
    pub fn new(criteria: &[Criterion]) -> Result<Self> {
        if criteria.is_empty() {
            return Err(KepswellError::not_configured(
                "No criteria are configured for this division",
            ));
        }

        let total_weight: f64 = criteria.iter().map(|c| c.weight).sum();
        if !total_weight.is_finite() || total_weight <= 0.0 {
            return Err(KepswellError::not_configured(format!(
                "Criteria weights of this division must sum to a positive number, got {total_weight}"
            )));
        }

        let mut owners = HashMap::new();
        let mut catalog = BTreeMap::new();
        for criterion in criteria {
            for sub in &criterion.sub_criteria {
                owners.insert(sub.id, criterion.id);
            }
            catalog.insert(
                criterion.id,
                CatalogCriterion {
                    id: criterion.id,
                    weight: criterion.weight,
                    direction: criterion.direction,
                },
            );
        }

        Ok(Self {
            criteria: catalog,
            owners,
            total_weight,
        })
    }

    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    /// Criterion owning a sub-criterion, if it is still in the catalog
    pub fn criterion_of(&self, sub_criterion_id: i64) -> Option<i64> {
        self.owners.get(&sub_criterion_id).copied()
    }

    /// Criteria in ascending id order
    pub fn criteria(&self) -> impl Iterator<Item = &CatalogCriterion> {
        self.criteria.values()
    }
}

/// Aggregated value per criterion id; `None` when none of the criterion's
/// sub-criteria were scored.
pub type AggregatedValues = BTreeMap<i64, Option<f64>>;

/// Mean of the raw scores per criterion. Entries of sub-criteria no longer in
/// the catalog are ignored.
pub fn aggregate(catalog: &CriteriaCatalog, entries: &[ScoreEntry]) -> AggregatedValues {
    let mut sums: BTreeMap<i64, (f64, usize)> = BTreeMap::new();
    for entry in entries {
        if let Some(criterion_id) = catalog.criterion_of(entry.sub_criterion_id) {
            let slot = sums.entry(criterion_id).or_insert((0.0, 0));
            slot.0 += entry.value;
            slot.1 += 1;
        }
    }

    catalog
        .criteria
        .keys()
        .map(|id| {
            let mean = sums.get(id).map(|(sum, count)| sum / *count as f64);
            (*id, mean)
        })
        .collect()
}

/// Observed range of one criterion across the scope
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CriterionBounds {
    pub min: f64,
    pub max: f64,
}

impl CriterionBounds {
    /// `max - min`, or 1 when there is no spread
    pub fn denominator(&self) -> f64 {
        let spread = self.max - self.min;
        if spread == 0.0 { 1.0 } else { spread }
    }
}

/// Min and max of the given values; `None` for an empty input
pub fn criterion_bounds(values: impl IntoIterator<Item = f64>) -> Option<CriterionBounds> {
    values.into_iter().fold(None, |bounds, value| {
        Some(match bounds {
            None => CriterionBounds {
                min: value,
                max: value,
            },
            Some(b) => CriterionBounds {
                min: b.min.min(value),
                max: b.max.max(value),
            },
        })
    })
}

/// Utility in [0, 100]. Benefit criteria grow with the value, cost criteria
/// shrink.
pub fn utility(value: f64, bounds: CriterionBounds, direction: CriterionDirection) -> f64 {
    let distance = match direction {
        CriterionDirection::Benefit => value - bounds.min,
        CriterionDirection::Cost => bounds.max - value,
    };
    distance / bounds.denominator() * UTILITY_SCALE
}

pub fn weight_share(weight: f64, total_weight: f64) -> f64 {
    weight / total_weight
}

/// Sum of `utility * weight_share` pairs
pub fn final_score(contributions: impl IntoIterator<Item = (f64, f64)>) -> f64 {
    contributions
        .into_iter()
        .map(|(utility, share)| utility * share)
        .sum()
}

/// Scores every appraisal of one scope. Output follows input order.
pub fn rank(
    catalog: &CriteriaCatalog,
    inputs: &[RankingInput],
    policy: MissingCriterionPolicy,
) -> Vec<RankedAppraisal> {
    let resolve = |value: Option<f64>| match policy {
        MissingCriterionPolicy::Zero => Some(value.unwrap_or(0.0)),
        MissingCriterionPolicy::Exclude => value,
    };

    let aggregated: Vec<(i64, AggregatedValues)> = inputs
        .iter()
        .map(|input| (input.appraisal_id, aggregate(catalog, &input.entries)))
        .collect();

    let bounds: BTreeMap<i64, CriterionBounds> = catalog
        .criteria()
        .filter_map(|criterion| {
            let values = aggregated
                .iter()
                .filter_map(|(_, values)| resolve(values.get(&criterion.id).copied().flatten()));
            criterion_bounds(values).map(|b| (criterion.id, b))
        })
        .collect();

    aggregated
        .into_iter()
        .map(|(appraisal_id, values)| {
            let present: Vec<(&CatalogCriterion, f64, CriterionBounds)> = catalog
                .criteria()
                .filter_map(|criterion| {
                    let value = resolve(values.get(&criterion.id).copied().flatten())?;
                    let range = bounds.get(&criterion.id).copied()?;
                    Some((criterion, value, range))
                })
                .collect();

            let total_weight = match policy {
                MissingCriterionPolicy::Zero => catalog.total_weight(),
                MissingCriterionPolicy::Exclude => present.iter().map(|(c, _, _)| c.weight).sum(),
            };

            let score = if total_weight > 0.0 {
                final_score(present.iter().map(|(criterion, value, range)| {
                    (
                        utility(*value, *range, criterion.direction),
                        weight_share(criterion.weight, total_weight),
                    )
                }))
            } else {
                0.0
            };

            RankedAppraisal {
                appraisal_id,
                final_score: score,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::models::Division;
    use crate::models::criteria::entities::SubCriterion;

    fn criterion(id: i64, weight: f64, direction: CriterionDirection, subs: &[i64]) -> Criterion {
        Criterion {
            id,
            division: Division::HostLive,
            name: format!("C{id}"),
            weight,
            direction,
            sub_criteria: subs
                .iter()
                .map(|sub| SubCriterion {
                    id: *sub,
                    criterion_id: id,
                    name: format!("S{sub}"),
                })
                .collect(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn input(appraisal_id: i64, scores: &[(i64, f64)]) -> RankingInput {
        RankingInput {
            appraisal_id,
            entries: scores
                .iter()
                .enumerate()
                .map(|(i, (sub, value))| ScoreEntry {
                    id: appraisal_id * 100 + i as i64,
                    appraisal_id,
                    sub_criterion_id: *sub,
                    value: *value,
                })
                .collect(),
        }
    }

    fn score_of(ranked: &[RankedAppraisal], appraisal_id: i64) -> f64 {
        ranked
            .iter()
            .find(|r| r.appraisal_id == appraisal_id)
            .map(|r| r.final_score)
            .unwrap()
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_empty_catalog_is_not_configured() {
        let err = CriteriaCatalog::new(&[]).unwrap_err();
        assert!(matches!(err, KepswellError::NotConfigured(_)));

        let err =
            CriteriaCatalog::new(&[criterion(1, 0.0, CriterionDirection::Benefit, &[1])]).unwrap_err();
        assert!(matches!(err, KepswellError::NotConfigured(_)));
    }

    #[test]
    fn test_aggregate_is_mean_of_sub_criteria() {
        let catalog = CriteriaCatalog::new(&[
            criterion(1, 1.0, CriterionDirection::Benefit, &[10, 11, 12]),
            criterion(2, 1.0, CriterionDirection::Benefit, &[20]),
        ])
        .unwrap();

        let values = aggregate(
            &catalog,
            &input(1, &[(10, 80.0), (11, 60.0), (12, 100.0), (999, 5.0)]).entries,
        );
        assert_eq!(values[&1], Some(80.0));
        // nothing scored
        assert_eq!(values[&2], None);
    }

    #[test]
    fn test_zero_variance_gives_constant_utility() {
        let catalog = CriteriaCatalog::new(&[
            criterion(1, 50.0, CriterionDirection::Benefit, &[1]),
            criterion(2, 50.0, CriterionDirection::Cost, &[2]),
        ])
        .unwrap();
        let inputs = vec![
            input(1, &[(1, 70.0), (2, 70.0)]),
            input(2, &[(1, 70.0), (2, 70.0)]),
            input(3, &[(1, 70.0), (2, 70.0)]),
        ];

        let ranked = rank(&catalog, &inputs, MissingCriterionPolicy::Zero);
        assert_eq!(ranked.len(), 3);
        for r in &ranked {
            assert!(r.final_score.is_finite());
            assert_close(r.final_score, ranked[0].final_score);
        }

        let single = rank(&catalog, &inputs[..1], MissingCriterionPolicy::Zero);
        assert!(single[0].final_score.is_finite());
    }

    #[test]
    fn test_direction_inverts_utility() {
        let bounds = criterion_bounds([30.0, 90.0]).unwrap();
        assert_eq!(bounds, CriterionBounds { min: 30.0, max: 90.0 });

        let benefit_high = utility(90.0, bounds, CriterionDirection::Benefit);
        let benefit_low = utility(30.0, bounds, CriterionDirection::Benefit);
        assert!(benefit_high > benefit_low);
        assert_close(benefit_high, 100.0);
        assert_close(benefit_low, 0.0);

        let cost_high = utility(90.0, bounds, CriterionDirection::Cost);
        let cost_low = utility(30.0, bounds, CriterionDirection::Cost);
        assert!(cost_low > cost_high);
    }

    #[test]
    fn test_weight_share_not_absolute_weight() {
        let inputs = vec![
            input(1, &[(1, 5.0), (2, 2.0), (3, 4.0)]),
            input(2, &[(1, 3.0), (2, 4.0), (3, 1.0)]),
            input(3, &[(1, 4.0), (2, 3.0), (3, 5.0)]),
        ];
        let with_weights = |w: [f64; 3]| {
            let catalog = CriteriaCatalog::new(&[
                criterion(1, w[0], CriterionDirection::Benefit, &[1]),
                criterion(2, w[1], CriterionDirection::Cost, &[2]),
                criterion(3, w[2], CriterionDirection::Benefit, &[3]),
            ])
            .unwrap();
            rank(&catalog, &inputs, MissingCriterionPolicy::Zero)
        };

        let hundred = with_weights([20.0, 30.0, 50.0]);
        let ten = with_weights([2.0, 3.0, 5.0]);
        for (a, b) in hundred.iter().zip(ten.iter()) {
            assert_eq!(a.appraisal_id, b.appraisal_id);
            assert_close(a.final_score, b.final_score);
        }
    }

    #[test]
    fn test_host_live_two_employee_scenario() {
        let catalog = CriteriaCatalog::new(&[
            criterion(1, 60.0, CriterionDirection::Benefit, &[11]),
            criterion(2, 40.0, CriterionDirection::Cost, &[21]),
        ])
        .unwrap();
        let inputs = vec![input(1, &[(11, 5.0), (21, 1.0)]), input(2, &[(11, 3.0), (21, 5.0)])];

        let ranked = rank(&catalog, &inputs, MissingCriterionPolicy::Zero);
        assert_close(score_of(&ranked, 1), 100.0);
        assert_close(score_of(&ranked, 2), 0.0);
    }

    #[test]
    fn test_missing_criterion_policies() {
        let catalog = CriteriaCatalog::new(&[
            criterion(1, 50.0, CriterionDirection::Benefit, &[1]),
            criterion(2, 50.0, CriterionDirection::Benefit, &[2]),
        ])
        .unwrap();
        // appraisal 3 predates sub-criterion 2
        let inputs = vec![
            input(1, &[(1, 5.0), (2, 5.0)]),
            input(2, &[(1, 3.0), (2, 5.0)]),
            input(3, &[(1, 4.0)]),
        ];

        let zero = rank(&catalog, &inputs, MissingCriterionPolicy::Zero);
        assert_close(score_of(&zero, 1), 100.0);
        assert_close(score_of(&zero, 2), 50.0);
        assert_close(score_of(&zero, 3), 25.0);

        let exclude = rank(&catalog, &inputs, MissingCriterionPolicy::Exclude);
        assert_close(score_of(&exclude, 1), 50.0);
        assert_close(score_of(&exclude, 2), 0.0);
        assert_close(score_of(&exclude, 3), 50.0);
    }

    #[test]
    fn test_exclude_without_any_scored_criterion() {
        let catalog =
            CriteriaCatalog::new(&[criterion(1, 10.0, CriterionDirection::Benefit, &[1])]).unwrap();
        let inputs = vec![input(1, &[(1, 4.0)]), input(2, &[(77, 4.0)])];

        let ranked = rank(&catalog, &inputs, MissingCriterionPolicy::Exclude);
        assert_close(score_of(&ranked, 2), 0.0);
        assert!(ranked.iter().all(|r| r.final_score.is_finite()));
    }

    #[test]
    fn test_final_score_sums_weighted_utilities() {
        assert_close(final_score([(100.0, 0.6), (50.0, 0.4)]), 80.0);
        assert_close(weight_share(30.0, 120.0), 0.25);
        assert!(criterion_bounds(std::iter::empty()).is_none());
    }
}
