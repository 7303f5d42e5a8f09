use axum::response::Html;

/// Landing page.
pub async fn main_page() -> Html<&'static str> {
    Html(include_str!("../../../assets/main.html"))
}

/// Student login page.
pub async fn login_page() -> Html<&'static str> {
    Html(include_str!("../../../assets/login.html"))
}
