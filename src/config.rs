//! Build-time Configuration
//!
//! Endpoint and OAuth client settings, baked in at compile time the way
//! the deployment pipeline injects them.

pub const SERVER_URL: &str = match option_env!("YELLO_SERVER_URL") {
    Some(url) => url,
    None => "http://localhost:8080",
};

/// Kakao REST API key (the OAuth client id)
pub const KAKAO_REST_KEY: &str = match option_env!("YELLO_KAKAO_REST_KEY") {
    Some(key) => key,
    None => "dev-kakao-rest-key",
};

/// Where Kakao redirects back to after consent
pub const KAKAO_REDIRECT_URI: &str = match option_env!("YELLO_KAKAO_REDIRECT_URI") {
    Some(uri) => uri,
    None => "http://localhost:3000/",
};

pub const KAKAO_AUTH_URL: &str = "https://kauth.kakao.com/oauth/authorize";
pub const KAKAO_TOKEN_URL: &str = "https://kauth.kakao.com/oauth/token";
