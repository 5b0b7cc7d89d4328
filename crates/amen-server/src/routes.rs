use amen_core::Language;
use axum::{
    Json,
    extract::{Query, State},
    http::header::CACHE_CONTROL,
    response::IntoResponse,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, de};
use tracing::{debug, info};

use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct VerseQuery {
    pub lang: Option<String>,
    #[serde(rename = "verseId", default, deserialize_with = "empty_as_none")]
    pub verse_id: Option<i64>,
}

/// `verseId=` with no value means no id, like an absent parameter.
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)?.as_deref() {
        None | Some("") => Ok(None),
        Some(raw) => raw.parse().map(Some).map_err(de::Error::custom),
    }
}

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
}

/// `GET /api/verse/random`: a random verse, or the one named by `verseId`.
pub async fn random_verse_handler(
    State(state): State<AppState>,
    Query(query): Query<VerseQuery>,
) -> impl IntoResponse {
    let language = query.lang.as_deref().unwrap_or(Language::DEFAULT.code());
    info!(
        "API request received: /api/verse/random with language={language}, verseId={:?}",
        query.verse_id
    );

    let verse = match query.verse_id {
        Some(id) => state.coordinator.get_verse_by_id(id, language),
        None => state.coordinator.get_random_verse(language),
    };

    info!(
        "API response sent: verse {} ({} {}:{}) in language {}",
        verse.verse_id, verse.book, verse.chapter, verse.verse_number, verse.language
    );
    ([(CACHE_CONTROL, "no-store")], Json(verse))
}

/// `GET /api/health`
pub async fn health_handler() -> Json<Health> {
    debug!("Health check requested");
    Json(Health {
        status: "healthy",
        timestamp: Utc::now(),
    })
}
