use contracts::system::account::User;
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, ApiError, TUNNEL_SKIP_HEADER};

/// Look up the account bound to a chat id.
///
/// Any non-success status collapses to `NotFound`; the caller treats an
/// unknown user and a failed lookup the same way.
pub async fn find_user_by_chat_id(chat_id: &str) -> Result<User, ApiError> {
    let url = api_url(&format!(
        "/user/find-by-chat-id?chat_id={}",
        urlencoding::encode(chat_id)
    ));

    let response = Request::get(&url)
        .header("Accept", "application/json")
        .header(TUNNEL_SKIP_HEADER.0, TUNNEL_SKIP_HEADER.1)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::NotFound);
    }

    response
        .json::<User>()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))
}
