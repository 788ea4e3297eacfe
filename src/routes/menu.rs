use axum::extract::{Query, State};
use axum::response::IntoResponse;
use serde::Deserialize;

use messboard_menu::{LoadError, MenuScreen, PageModel, SystemClock, parse_document};

use crate::config::MENU_VARIANTS;
use crate::routes::{AppState, assets};
use crate::template::render;

#[derive(askama::Template)]
#[template(path = "page.html")]
pub struct BoardTemplate {
    pub page: PageModel,
    pub variant: String,
}

#[derive(Debug, Deserialize)]
pub struct BoardQuery {
    pub day: Option<String>,
    pub menu: Option<String>,
}

/// GET / - the board page
///
/// `day` selects the active day, `menu` the document variant. A document
/// that fails to load renders the board's error state, not an HTTP error.
pub async fn page(
    State(app): State<AppState>,
    Query(query): Query<BoardQuery>,
) -> impl IntoResponse {
    let variant = query
        .menu
        .filter(|variant| MENU_VARIANTS.contains(&variant.as_str()))
        .unwrap_or_else(|| app.config.menu.variant.clone());
    let path = format!("/static/menu-{variant}.json");

    let mut screen = MenuScreen::new(PageModel::default(), SystemClock);
    screen.boot();

    let outcome = match assets::embedded(&format!("menu-{variant}.json")) {
        Some(bytes) => parse_document(&bytes, &path),
        None => Err(LoadError::Status {
            url: path.clone(),
            status: 404,
        }),
    };
    screen.apply(outcome, &path);

    if let Some(day) = query.day {
        if screen.loaded() {
            screen.select_day(&day);
        }
    }

    render(BoardTemplate {
        page: screen.into_surface(),
        variant,
    })
}
