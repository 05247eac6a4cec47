//! Server-side rendered booking desk (no JavaScript).
//!
//! Every page is rendered server-side as complete HTML. Booking and
//! cancelling are plain `<form>` POSTs that re-render the desk with a
//! notice describing what happened, so every outcome (including every
//! rejection) is shown to the clerk as a message.

#[allow(clippy::missing_errors_doc)]
pub mod bookings;
#[allow(clippy::missing_errors_doc)]
pub mod rooms;

use askama::Template;
use axum::Router;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};

use frontdesk_app::ports::ReservationRepository;
use frontdesk_domain::error::FrontDeskError;

use crate::state::AppState;

/// Build the dashboard sub-router for SSR HTML pages.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: ReservationRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(bookings::index::<R>))
        .route("/bookings", post(bookings::book::<R>))
        .route("/search", get(bookings::search::<R>))
        .route("/cancel", post(bookings::cancel::<R>))
        .route("/rooms/{room}", get(rooms::detail::<R>))
}

/// How a notice banner is styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Info,
    Error,
}

impl std::fmt::Display for NoticeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Success => "success",
            Self::Info => "info",
            Self::Error => "error",
        })
    }
}

/// A message box shown at the top of a page.
#[derive(Debug, Clone)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub lines: Vec<String>,
}

impl Notice {
    fn new(kind: NoticeKind, title: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            lines,
        }
    }

    /// Turn a service error into an error notice and matching status.
    fn from_error(err: &FrontDeskError) -> (StatusCode, Self) {
        let (status, message) = crate::error::describe(err);
        let status = match err {
            FrontDeskError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            _ => status,
        };
        (status, Self::new(NoticeKind::Error, "Error", vec![message]))
    }
}

/// Render a template, falling back to a plain 500 if rendering fails.
fn render(template: &impl Template) -> Response {
    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "template rendering failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Standalone error page, used when the page itself cannot be built.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    status: u16,
    notice: Notice,
}

impl IntoResponse for ErrorTemplate {
    fn into_response(self) -> Response {
        render(&self)
    }
}

/// Dashboard failure rendered as an HTML error page.
#[derive(Debug)]
pub struct DashboardError(FrontDeskError);

impl From<FrontDeskError> for DashboardError {
    fn from(err: FrontDeskError) -> Self {
        Self(err)
    }
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        let (status, notice) = Notice::from_error(&self.0);
        let page = ErrorTemplate {
            status: status.as_u16(),
            notice,
        };
        (status, page).into_response()
    }
}
