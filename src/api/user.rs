//! User Bindings

use gloo_net::http::Request;

use super::{read_envelope, transport, with_bearer, ApiError};
use crate::config;
use crate::models::UserPage;

/// Paged user fetch. `field`/`value` are omitted from the query when
/// either is empty, matching the backend's optional search filter.
pub async fn list_users(page: u32, field: &str, value: &str) -> Result<UserPage, ApiError> {
    let url = format!("{}/api/v1/admin/user", config::SERVER_URL);
    let page = page.to_string();

    let req = if field.is_empty() || value.is_empty() {
        Request::get(&url).query([("page", page.as_str())])
    } else {
        Request::get(&url).query([("page", page.as_str()), ("field", field), ("value", value)])
    };

    let resp = with_bearer(req).send().await.map_err(transport)?;
    Ok(read_envelope::<UserPage>(resp).await?.data)
}
