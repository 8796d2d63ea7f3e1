//! Auth Bindings
//!
//! The two halves of the login exchange: the Kakao token endpoint and
//! the backend OAuth login.

use gloo_net::http::Request;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

use super::{read_envelope, transport, ApiError};
use crate::config;
use crate::models::SessionToken;

/// Kakao token endpoint response (only the field we use)
#[derive(Debug, Deserialize)]
struct KakaoToken {
    access_token: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct OauthLoginRequest<'a> {
    social: &'a str,
    access_token: &'a str,
}

/// Step 1: authorization code -> Kakao access token, via a
/// form-encoded POST to the provider's token endpoint.
pub async fn exchange_auth_code(code: &str) -> Result<String, ApiError> {
    let body = format!(
        "grant_type=authorization_code&client_id={}&redirect_uri={}&code={}",
        utf8_percent_encode(config::KAKAO_REST_KEY, NON_ALPHANUMERIC),
        utf8_percent_encode(config::KAKAO_REDIRECT_URI, NON_ALPHANUMERIC),
        utf8_percent_encode(code, NON_ALPHANUMERIC),
    );

    let resp = Request::post(config::KAKAO_TOKEN_URL)
        .header(
            "Content-Type",
            "application/x-www-form-urlencoded;charset=utf-8",
        )
        .body(body)
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)?;

    if !resp.ok() {
        let status = resp.status();
        let message = resp.text().await.unwrap_or_default();
        return Err(ApiError::Server {
            status,
            message: if message.is_empty() {
                format!("토큰 발급에 실패했습니다 (status {status})")
            } else {
                message
            },
        });
    }

    let token: KakaoToken = resp
        .json()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))?;
    Ok(token.access_token)
}

/// Step 2: Kakao access token -> Yello session token
pub async fn login_with_kakao(kakao_access_token: &str) -> Result<String, ApiError> {
    let resp = Request::post(&format!("{}/api/v1/auth/oauth", config::SERVER_URL))
        .json(&OauthLoginRequest {
            social: "KAKAO",
            access_token: kakao_access_token,
        })
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)?;

    let envelope = read_envelope::<SessionToken>(resp).await?;
    Ok(envelope.data.access_token)
}
