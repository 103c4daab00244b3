use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use super::types::*;
use crate::nomination::{build_view, run_search, Card, NominationList, SearchOutcome, ViewState};
use crate::server::AppState;

/// Query shown when the page first opens.
pub const DEFAULT_QUERY: &str = "car";

pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, ApiError> {
    let query = params.s.unwrap_or_default();
    let nominations = state.store.list().await;

    let outcome = run_search(state.searcher.as_ref(), &query, &nominations).await?;
    let response = SearchResponse {
        error: outcome.error_message().map(str::to_string),
        results: match outcome {
            SearchOutcome::Results(results) => results.iter().map(Card::from).collect(),
            _ => Vec::new(),
        },
    };

    Ok(Json(response))
}

pub async fn get_view(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<ViewState>, ApiError> {
    let query = params.s.unwrap_or_else(|| DEFAULT_QUERY.to_string());
    let nominations = state.store.list().await;

    let view = build_view(state.searcher.as_ref(), &query, &nominations).await?;
    Ok(Json(view))
}

pub async fn list_nominations(State(state): State<AppState>) -> Json<NominationList> {
    Json(state.store.list().await)
}

pub async fn nominate(
    State(state): State<AppState>,
    Json(req): Json<NominateRequest>,
) -> Result<(StatusCode, Json<NominationList>), ApiError> {
    if req.title.trim().is_empty() {
        return Err(ApiError::BadRequest("title is required".to_string()));
    }

    let list = state.store.nominate(&req.title, &req.poster, &req.year).await?;
    Ok((StatusCode::CREATED, Json(list)))
}

pub async fn remove_nomination(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Result<Json<NominationList>, ApiError> {
    let list = state.store.remove(&title).await?;
    Ok(Json(list))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
        Router,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::db::MemoryRepository;
    use crate::nomination::search::tests::{FakeSearch, SEVEN};
    use crate::nomination::NominationStore;
    use crate::server::{build_app, AppState};

    async fn test_app(fake: FakeSearch) -> (Router, Arc<FakeSearch>) {
        let store = NominationStore::load(Arc::new(MemoryRepository::new()))
            .await
            .unwrap();
        let fake = Arc::new(fake);
        let state = AppState::new(Config::default(), Arc::new(store), fake.clone());
        (build_app(state), fake)
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(v) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(v.to_string())
            }
            None => Body::empty(),
        };
        let response = app
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, value)
    }

    async fn nominate(app: &Router, title: &str) -> (StatusCode, Value) {
        send(
            app,
            Method::POST,
            "/api/nominations",
            Some(json!({"title": title, "poster": "N/A", "year": "2000"})),
        )
        .await
    }

    #[tokio::test]
    async fn test_search_short_query() {
        let (app, fake) = test_app(FakeSearch::with_titles(&SEVEN)).await;
        let (status, body) = send(&app, Method::GET, "/api/search?s=ca", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["error"],
            "Please enter at least 3 characters to refine search."
        );
        assert_eq!(body["results"], json!([]));
        assert!(fake.calls().is_empty());
    }

    #[tokio::test]
    async fn test_search_returns_five() {
        let (app, _) = test_app(FakeSearch::with_titles(&SEVEN)).await;
        let (status, body) = send(&app, Method::GET, "/api/search?s=car", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["results"].as_array().unwrap().len(), 5);
        assert_eq!(body["results"][0]["posterUrl"], "/placeholder.jpg");
        assert!(body.get("error").is_none());
    }

    #[tokio::test]
    async fn test_nominate_then_search_excludes_title() {
        let (app, _) = test_app(FakeSearch::with_titles(&SEVEN)).await;
        let (status, list) = nominate(&app, "Cars").await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(list.as_array().unwrap().len(), 1);

        let (_, body) = send(&app, Method::GET, "/api/search?s=car", None).await;
        let titles: Vec<&str> = body["results"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["title"].as_str().unwrap())
            .collect();
        assert_eq!(titles, vec!["Cars 2", "Cars 3", "Used Cars", "Cars Toons"]);
    }

    #[tokio::test]
    async fn test_duplicate_and_full_conflict() {
        let (app, _) = test_app(FakeSearch::with_titles(&SEVEN)).await;
        nominate(&app, "Cars").await;
        let (status, body) = nominate(&app, "Cars").await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert!(body["error"].as_str().unwrap().contains("Cars"));

        for t in ["A", "B", "C", "D"] {
            assert_eq!(nominate(&app, t).await.0, StatusCode::CREATED);
        }
        assert_eq!(nominate(&app, "E").await.0, StatusCode::CONFLICT);

        let (_, list) = send(&app, Method::GET, "/api/nominations", None).await;
        assert_eq!(list.as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_empty_title_rejected() {
        let (app, _) = test_app(FakeSearch::with_titles(&SEVEN)).await;
        let (status, _) = nominate(&app, "   ").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_remove_nomination() {
        let (app, _) = test_app(FakeSearch::with_titles(&SEVEN)).await;
        nominate(&app, "Used Cars").await;
        nominate(&app, "Cars").await;

        let (status, list) =
            send(&app, Method::DELETE, "/api/nominations/Used%20Cars", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(list, json!([{"title": "Cars", "posterUrl": "N/A", "year": "2000"}]));

        let (status, list) = send(&app, Method::DELETE, "/api/nominations/Jaws", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(list.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_view_states() {
        let (app, fake) = test_app(FakeSearch::with_titles(&SEVEN)).await;

        let (_, view) = send(&app, Method::GET, "/api/view", None).await;
        assert_eq!(view["state"], "results");
        assert_eq!(fake.calls(), vec!["car".to_string()]);

        let (_, view) = send(&app, Method::GET, "/api/view?s=xy", None).await;
        assert_eq!(view["state"], "error");

        for t in ["A", "B", "C", "D", "E"] {
            nominate(&app, t).await;
        }
        let (_, view) = send(&app, Method::GET, "/api/view?s=car", None).await;
        assert_eq!(view["state"], "completed");
        assert_eq!(view["nominations"].as_array().unwrap().len(), 5);
        assert_eq!(fake.calls().len(), 1);

        send(&app, Method::DELETE, "/api/nominations/C", None).await;
        let (_, view) = send(&app, Method::GET, "/api/view?s=car", None).await;
        assert_eq!(view["state"], "results");
        assert_eq!(view["results"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_upstream_failure_is_bad_gateway() {
        let (app, _) = test_app(FakeSearch::failing()).await;
        let (status, body) = send(&app, Method::GET, "/api/search?s=car", None).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_padded_titles_match_nominations() {
        let (app, _) = test_app(FakeSearch::with_titles(&["Cars ", "Cars 2"])).await;

        let (_, body) = send(&app, Method::GET, "/api/search?s=car", None).await;
        let card_title = body["results"][0]["title"].as_str().unwrap().to_string();
        assert_eq!(card_title, "Cars ");
        nominate(&app, &card_title).await;

        let (_, body) = send(&app, Method::GET, "/api/search?s=car", None).await;
        let titles: Vec<&str> = body["results"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["title"].as_str().unwrap())
            .collect();
        assert_eq!(titles, vec!["Cars 2"]);

        let (status, list) = send(&app, Method::DELETE, "/api/nominations/Cars%20", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(list, json!([]));
    }

    #[tokio::test]
    async fn test_paths_are_normalized_before_routing() {
        let (app, fake) = test_app(FakeSearch::with_titles(&SEVEN)).await;
        let (status, view) = send(&app, Method::GET, "//api//view/?s=car", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(view["state"], "results");
        assert_eq!(fake.calls(), vec!["car".to_string()]);

        let (status, list) = send(&app, Method::GET, "/api/nominations/", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(list, json!([]));
    }

    #[tokio::test]
    async fn test_robots_and_unknown_path() {
        let (app, _) = test_app(FakeSearch::with_titles(&[])).await;
        let (status, _) = send(&app, Method::GET, "/robots.txt", None).await;
        assert_eq!(status, StatusCode::OK);
        let (status, _) = send(&app, Method::GET, "/nope", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
