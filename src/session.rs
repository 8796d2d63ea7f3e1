//! Session Manager
//!
//! Owns the logged-in/out toggle and the OAuth authorization-code
//! exchange: code -> Kakao access token -> Yello session token.

use crate::api::{self, ApiError};
use crate::config;
use crate::storage;

/// Session state, resolved from the persisted token at mount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    LoggedOut,
    /// The two-step code exchange is in flight
    Authenticating,
    LoggedIn,
}

impl SessionState {
    pub fn resolve(has_token: bool) -> Self {
        if has_token {
            SessionState::LoggedIn
        } else {
            SessionState::LoggedOut
        }
    }
}

/// Navigate to the Kakao authorize endpoint. This is a full page
/// navigation; the provider redirects back with a `code` query
/// parameter.
pub fn initiate_login() {
    use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

    let url = format!(
        "{}?client_id={}&redirect_uri={}&response_type=code",
        config::KAKAO_AUTH_URL,
        utf8_percent_encode(config::KAKAO_REST_KEY, NON_ALPHANUMERIC),
        utf8_percent_encode(config::KAKAO_REDIRECT_URI, NON_ALPHANUMERIC),
    );
    if let Some(win) = web_sys::window() {
        let _ = win.location().set_href(&url);
    }
}

/// Run the backend login only when the provider exchange succeeded.
/// A failed exchange short-circuits; the second step is never started.
async fn chain_login_steps<F, Fut>(
    kakao: Result<String, ApiError>,
    login: F,
) -> Result<String, ApiError>
where
    F: FnOnce(String) -> Fut,
    Fut: std::future::Future<Output = Result<String, ApiError>>,
{
    match kakao {
        Ok(token) => login(token).await,
        Err(err) => Err(err),
    }
}

/// Exchange an authorization code for a session token and persist it.
/// The caller surfaces the error and reverts to logged-out on failure.
pub async fn complete_login(code: &str) -> Result<(), ApiError> {
    let kakao = api::auth::exchange_auth_code(code).await;
    let session_token = chain_login_steps(kakao, |token| async move {
        api::auth::login_with_kakao(&token).await
    })
    .await?;
    storage::store_access_token(&session_token);
    Ok(())
}

/// Erase the persisted token. No server-side invalidation.
pub fn logout() {
    storage::clear_access_token();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::future::{self, Future};
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    // chain_login_steps never suspends when its steps are ready, so a
    // single poll drives it to completion
    fn poll_once<F: Future>(fut: F) -> Poll<F::Output> {
        let mut fut = pin!(fut);
        let mut cx = Context::from_waker(Waker::noop());
        fut.as_mut().poll(&mut cx)
    }

    #[test]
    fn test_resolve_from_token_presence() {
        assert_eq!(SessionState::resolve(true), SessionState::LoggedIn);
        assert_eq!(SessionState::resolve(false), SessionState::LoggedOut);
    }

    #[test]
    fn test_failed_exchange_skips_backend_login() {
        let login_called = Cell::new(false);
        let err = ApiError::Server {
            status: 400,
            message: "잘못된 인가 코드입니다".to_string(),
        };

        let out = poll_once(chain_login_steps(Err(err.clone()), |_token| {
            login_called.set(true);
            future::ready(Ok(String::new()))
        }));

        assert_eq!(out, Poll::Ready(Err(err)));
        assert!(!login_called.get());
    }

    #[test]
    fn test_successful_exchange_runs_backend_login() {
        let out = poll_once(chain_login_steps(
            Ok("kakao-token".to_string()),
            |token| {
                assert_eq!(token, "kakao-token");
                future::ready(Ok("session-token".to_string()))
            },
        ));

        assert_eq!(out, Poll::Ready(Ok("session-token".to_string())));
    }
}
