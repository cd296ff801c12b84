use contracts::domain::a001_category::{Category, CreateCategoryDto, UpdateCategoryDto};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, ApiError, TUNNEL_SKIP_HEADER};

/// Fetch the whole category collection.
pub async fn fetch_categories() -> Result<Vec<Category>, ApiError> {
    let response = Request::get(&api_url("/category/list"))
        .header("Accept", "application/json")
        .header(TUNNEL_SKIP_HEADER.0, TUNNEL_SKIP_HEADER.1)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Fetch(response.status()));
    }

    response
        .json::<Vec<Category>>()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))
}

/// Create a category.
///
/// A rejected create carries the server's body text so the caller can show
/// it verbatim.
pub async fn create_category(dto: &CreateCategoryDto) -> Result<(), ApiError> {
    let response = Request::post(&api_url("/category/add-category"))
        .header("Accept", "application/json")
        .header(TUNNEL_SKIP_HEADER.0, TUNNEL_SKIP_HEADER.1)
        .json(dto)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::Validation(body));
    }

    Ok(())
}

/// Update a category's names and order index.
pub async fn update_category(id: &str, dto: &UpdateCategoryDto) -> Result<(), ApiError> {
    let response = Request::put(&api_url(&format!("/category/edit-category/{}", id)))
        .header("Accept", "application/json")
        .header(TUNNEL_SKIP_HEADER.0, TUNNEL_SKIP_HEADER.1)
        .json(dto)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::Validation(body));
    }

    Ok(())
}

/// Delete a category. The server soft-deletes; the next list fetch reflects
/// the new status.
pub async fn delete_category(id: &str) -> Result<(), ApiError> {
    let response = Request::delete(&api_url(&format!("/category/delete-category/{}", id)))
        .header("Accept", "application/json")
        .header(TUNNEL_SKIP_HEADER.0, TUNNEL_SKIP_HEADER.1)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Deletion(response.status()));
    }

    Ok(())
}
