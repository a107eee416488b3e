use std::sync::Arc;

use crate::scoring::AnswerEvaluator;

/// Shared handler state: the evaluator chosen when the server was built.
pub struct HandlerState<E: AnswerEvaluator + 'static> {
    pub evaluator: Arc<E>,
}

impl<E: AnswerEvaluator + 'static> Clone for HandlerState<E> {
    fn clone(&self) -> Self {
        Self {
            evaluator: Arc::clone(&self.evaluator),
        }
    }
}

impl<E: AnswerEvaluator + 'static> HandlerState<E> {
    pub fn new(evaluator: E) -> Self {
        Self {
            evaluator: Arc::new(evaluator),
        }
    }
}
