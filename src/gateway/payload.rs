use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct EvaluateRequest {
    pub answer: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RankRequest {
    pub answers: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RootResponse {
    pub message: String,
}
