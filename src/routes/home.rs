//! Upload form

use axum::response::Html;

const UPLOAD_PAGE: &str = include_str!("../../templates/upload_page.html");

/// GET /
pub async fn upload_page() -> Html<&'static str> {
    Html(UPLOAD_PAGE)
}
