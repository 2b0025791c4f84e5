use askama::Template;
use axum::extract::Query;
use axum::response::Html;
use serde::Deserialize;

use crate::error::AppError;

pub const BRAND: &str = "Drawgment";

#[derive(Template)]
#[template(path = "landing.html")]
struct LandingTemplate {
    brand: &'static str,
    subscribed: bool,
    waiting_count: &'static str,
    pillars: &'static [Pillar],
}

struct Pillar {
    icon: &'static str,
    title: &'static str,
    text: &'static str,
}

const PILLARS: &[Pillar] = &[
    Pillar {
        icon: "brush",
        title: "Inspire, Don't Automate",
        text: "Suggestions that spark ideas, not replace them",
    },
    Pillar {
        icon: "leaf",
        title: "Ethical by Design",
        text: "Your work never trains public models",
    },
    Pillar {
        icon: "palette",
        title: "Creative Control",
        text: "Granular settings for every tool",
    },
];

#[derive(Deserialize)]
pub struct LandingQuery {
    pub subscribed: Option<String>,
}

pub async fn index(Query(q): Query<LandingQuery>) -> Result<Html<String>, AppError> {
    let subscribed = q
        .subscribed
        .as_deref()
        .is_some_and(|v| matches!(v, "1" | "true" | "yes"));

    let template = LandingTemplate {
        brand: BRAND,
        subscribed,
        waiting_count: "1,843",
        pillars: PILLARS,
    };

    template
        .render()
        .map(Html)
        .map_err(|e| AppError::Internal(format!("Failed to render landing page: {e}")))
}
