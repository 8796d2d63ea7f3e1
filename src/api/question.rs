//! Question Bindings

use gloo_net::http::Request;

use super::{read_envelope, transport, with_bearer, ApiError};
use crate::config;
use crate::models::{QuestionDetail, VoteSendRequest};

pub async fn get_question(id: i64) -> Result<QuestionDetail, ApiError> {
    let url = format!("{}/api/v1/admin/question/{}", config::SERVER_URL, id);
    let resp = with_bearer(Request::get(&url))
        .send()
        .await
        .map_err(transport)?;
    Ok(read_envelope::<QuestionDetail>(resp).await?.data)
}

/// Submit the assembled vote batch. Returns the server message.
/// Message-only response; `data` may be absent.
pub async fn send_votes(question_id: i64, batch: &VoteSendRequest) -> Result<String, ApiError> {
    let url = format!("{}/api/v1/admin/question/{}", config::SERVER_URL, question_id);
    let resp = with_bearer(Request::post(&url))
        .json(batch)
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)?;
    Ok(read_envelope::<Option<serde_json::Value>>(resp).await?.message)
}

/// Delete a question. Returns the server message.
/// Message-only response; `data` may be absent.
pub async fn delete_question(question_id: i64) -> Result<String, ApiError> {
    let url = format!("{}/api/v1/admin/question", config::SERVER_URL);
    let id = question_id.to_string();
    let resp = with_bearer(Request::delete(&url).query([("questionId", id.as_str())]))
        .send()
        .await
        .map_err(transport)?;
    Ok(read_envelope::<Option<serde_json::Value>>(resp).await?.message)
}
