use tracing::debug;

use crate::scoring::AnswerEvaluator;

use super::types::RankedCandidate;

/// Evaluates each answer and returns the batch sorted by score, highest first.
///
/// The sort is stable, so equal scores keep their input order.
pub fn rank_candidates<E, I>(evaluator: &E, answers: I) -> Vec<RankedCandidate>
where
    E: AnswerEvaluator + ?Sized,
    I: IntoIterator<Item = String>,
{
    let mut ranked: Vec<RankedCandidate> = answers
        .into_iter()
        .map(|answer| {
            let evaluation = evaluator.evaluate(&answer);
            RankedCandidate::new(answer, evaluation)
        })
        .collect();

    ranked.sort_by(|a, b| b.score().cmp(&a.score()));

    debug!(
        batch_size = ranked.len(),
        top_score = ranked.first().map(RankedCandidate::score),
        "Ranked candidate batch"
    );

    ranked
}
