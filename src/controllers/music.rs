use axum::{
    Json,
    http::{HeaderMap, header},
};
use serde_json::Value;

use crate::{
    catalog::Catalog,
    error::AppError,
    models::song::{NewSong, Song},
};

pub struct MusicController;

impl MusicController {
    pub async fn list(catalog: &Catalog) -> Json<Vec<Song>> {
        Json(catalog.list().await)
    }

    pub async fn get(catalog: &Catalog, raw_id: &str) -> Result<Json<Song>, AppError> {
        let id = Self::parse_id(raw_id)?;
        Ok(Json(catalog.get(id).await?))
    }

    pub async fn create(
        catalog: &Catalog,
        headers: &HeaderMap,
        body: &[u8],
    ) -> Result<Json<Vec<Song>>, AppError> {
        let draft = Self::parse_draft(headers, body)?;
        Ok(Json(catalog.create(draft).await))
    }

    pub async fn delete(catalog: &Catalog, raw_id: &str) -> Result<Json<Vec<Song>>, AppError> {
        let id = Self::parse_id(raw_id)?;
        Ok(Json(catalog.delete(id).await?))
    }

    /// Ids that aren't plain non-negative integers can never match a song.
    fn parse_id(raw_id: &str) -> Result<u64, AppError> {
        raw_id.parse::<u64>().map_err(|_| AppError::NotFound)
    }

    /// Only bodies sent as JSON are read; anything else is treated as `{}`.
    fn parse_draft(headers: &HeaderMap, body: &[u8]) -> Result<NewSong, AppError> {
        if !Self::is_json(headers) || body.iter().all(u8::is_ascii_whitespace) {
            return Ok(NewSong::default());
        }

        let value: Value = serde_json::from_slice(body)
            .map_err(|e| AppError::BadRequest(format!("Invalid song body: {}", e)))?;
        NewSong::from_json(value).ok_or_else(|| {
            AppError::BadRequest("Invalid song body: expected a JSON object or array".to_string())
        })
    }

    fn is_json(headers: &HeaderMap) -> bool {
        headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(';').next())
            .map(|mime| {
                let mime = mime.trim().to_ascii_lowercase();
                mime == "application/json" || mime.ends_with("+json")
            })
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use serde_json::json;

    fn json_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json; charset=utf-8"),
        );
        headers
    }

    #[test]
    fn parse_id_rejects_non_numeric() {
        assert_eq!(MusicController::parse_id("12").unwrap(), 12);
        assert!(matches!(MusicController::parse_id("abc"), Err(AppError::NotFound)));
        assert!(matches!(MusicController::parse_id("-1"), Err(AppError::NotFound)));
        assert!(matches!(MusicController::parse_id(""), Err(AppError::NotFound)));
    }

    #[test]
    fn empty_body_is_untitled_draft() {
        let draft = MusicController::parse_draft(&json_headers(), b"  \n").unwrap();
        assert!(draft.title.is_none());
    }

    #[test]
    fn non_json_body_is_ignored() {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("text/plain"));
        let draft = MusicController::parse_draft(&headers, b"hello").unwrap();
        assert!(draft.title.is_none());

        let draft = MusicController::parse_draft(&HeaderMap::new(), b"{\"title\":\"X\"}").unwrap();
        assert!(draft.title.is_none());
    }

    #[test]
    fn numeric_title_is_stored_as_sent() {
        let draft = MusicController::parse_draft(&json_headers(), b"{\"title\": 5}").unwrap();
        assert_eq!(draft.title, Some(json!(5)));
    }

    #[test]
    fn unparseable_json_is_bad_request() {
        assert!(matches!(
            MusicController::parse_draft(&json_headers(), b"{\"title\":"),
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            MusicController::parse_draft(&json_headers(), b"\"just a string\""),
            Err(AppError::BadRequest(_))
        ));
    }

    #[tokio::test]
    async fn get_unknown_id_is_not_found() {
        let catalog = Catalog::seeded();
        let result = MusicController::get(&catalog, "99").await;
        assert!(matches!(result, Err(AppError::NotFound)));
    }
}
