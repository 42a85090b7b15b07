use std::sync::Arc;

use referral_core::metrics_api::Scorer;

mod exact_match;

pub use exact_match::ExactMatchScorer;

pub fn default_scorers() -> Vec<Arc<dyn Scorer>> {
    vec![Arc::new(ExactMatchScorer::new())]
}
