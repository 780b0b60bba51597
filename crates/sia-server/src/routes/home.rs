use askama::Template;
use axum::response::Response;

use super::render_page;

#[derive(Template)]
#[template(path = "home.html")]
struct HomeTemplate {
    active_page: &'static str,
}

pub(crate) async fn index() -> Response {
    render_page(&HomeTemplate {
        active_page: "home",
    })
}
