use crate::core::scoring::calculate_match_score;
use crate::models::{Client, ClientMatchResult, MatchResult, Property, ScoringWeights};

/// Minimum score for a candidate to count as a match.
pub const DEFAULT_SCORE_THRESHOLD: u32 = 60;

/// Bidirectional matcher between client requirements and inventory.
///
/// Both directions run the same scoring function over the candidate set,
/// keep candidates at or above the threshold, and rank them by descending
/// score. The sort is stable, so equal scores keep their input order.
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
    score_threshold: u32,
}

impl Matcher {
    pub fn new(weights: ScoringWeights) -> Self {
        Self {
            weights,
            score_threshold: DEFAULT_SCORE_THRESHOLD,
        }
    }

    pub fn with_default_weights() -> Self {
        Self::new(ScoringWeights::default())
    }

    pub fn with_score_threshold(mut self, score_threshold: u32) -> Self {
        self.score_threshold = score_threshold;
        self
    }

    /// Rank the inventory for one client.
    pub fn find_matching_properties(
        &self,
        client: &Client,
        properties: &[Property],
    ) -> Vec<MatchResult> {
        let mut matches: Vec<MatchResult> = properties
            .iter()
            .filter_map(|property| {
                let (score, reasons) =
                    calculate_match_score(&client.requirement, property, &self.weights);
                if score >= self.score_threshold {
                    Some(MatchResult {
                        property: property.clone(),
                        score,
                        reasons,
                    })
                } else {
                    None
                }
            })
            .collect();

        // Stable: ties keep inventory order
        matches.sort_by(|a, b| b.score.cmp(&a.score));
        matches
    }

    /// Rank the client book for one property. Mirror of
    /// [`find_matching_properties`](Self::find_matching_properties); the
    /// scoring function and thresholds are shared, only the varying side
    /// differs.
    pub fn find_matching_clients(
        &self,
        property: &Property,
        clients: &[Client],
    ) -> Vec<ClientMatchResult> {
        let mut matches: Vec<ClientMatchResult> = clients
            .iter()
            .filter_map(|client| {
                let (score, reasons) =
                    calculate_match_score(&client.requirement, property, &self.weights);
                if score >= self.score_threshold {
                    Some(ClientMatchResult {
                        client: client.clone(),
                        score,
                        reasons,
                    })
                } else {
                    None
                }
            })
            .collect();

        matches.sort_by(|a, b| b.score.cmp(&a.score));
        matches
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
