use anyhow::Context;
use async_trait::async_trait;
use lf_api_types::{
    AnalyzeImageResponse, ErrorResponse, HealthResponse, Item, ItemDetailResponse, ItemFilters,
    ItemKind, ItemListResponse, MatchRequest, MatchResponse, ReportItemRequest, ReportItemResponse,
    StatsResponse,
};
use lf_item_core::ItemDetailSource;
use reqwest::{RequestBuilder, Url};
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, error};

pub const DEFAULT_API_BASE: &str = "http://localhost:5000";
pub const API_BASE_ENV: &str = "LOST_FOUND_API_URL";
pub const GENERIC_ERROR: &str = "An error occurred";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    /// Non-success status; the message is the server's `error` field.
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid api url: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport(err) => err.status().map(|s| s.as_u16()),
            ApiError::Decode(_) | ApiError::InvalidUrl(_) => None,
        }
    }
}

/// HTTP client for the Lost & Found API.
///
/// The base URL comes from the constructor argument, then
/// `LOST_FOUND_API_URL`, then `http://localhost:5000`.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(None)
    }
}

impl ApiClient {
    pub fn new(base_url: Option<String>) -> Self {
        let base_url = base_url
            .filter(|url| !url.trim().is_empty())
            .or_else(|| std::env::var(API_BASE_ENV).ok())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_owned());
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_owned(),
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an image path returned by the API.
    pub fn image_url(&self, path: &str) -> String {
        lf_item_core::display::resolve_image_url(path, &self.base_url)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `/api/items/{kind}/{id}` with `id` encoded as a single path segment.
    fn item_url(&self, kind: ItemKind, id: &str) -> Result<Url, ApiError> {
        let invalid = || ApiError::InvalidUrl(self.base_url.clone());
        let mut url = Url::parse(&self.url(&format!("/api/items/{kind}"))).map_err(|_| invalid())?;
        url.path_segments_mut().map_err(|_| invalid())?.push(id);
        Ok(url)
    }

    /// GET /
    pub async fn health_check(&self) -> Result<HealthResponse, ApiError> {
        self.send("health check", self.http.get(self.url("/"))).await
    }

    /// POST /api/analyze-image (multipart, field `image`)
    pub async fn analyze_image(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
        mime: &str,
    ) -> Result<AnalyzeImageResponse, ApiError> {
        let part = match Part::bytes(bytes).file_name(file_name.to_owned()).mime_str(mime) {
            Ok(part) => part,
            Err(err) => {
                error!("image analysis failed: {err}");
                return Err(err.into());
            }
        };
        let form = Form::new().part("image", part);
        let request = self.http.post(self.url("/api/analyze-image")).multipart(form);
        self.send("image analysis", request).await
    }

    /// POST /api/report-lost
    pub async fn report_lost(&self, item: &ReportItemRequest) -> Result<ReportItemResponse, ApiError> {
        let request = self.http.post(self.url("/api/report-lost")).json(item);
        self.send("report lost item", request).await
    }

    /// POST /api/report-found
    pub async fn report_found(&self, item: &ReportItemRequest) -> Result<ReportItemResponse, ApiError> {
        let request = self.http.post(self.url("/api/report-found")).json(item);
        self.send("report found item", request).await
    }

    pub async fn report(
        &self,
        kind: ItemKind,
        item: &ReportItemRequest,
    ) -> Result<ReportItemResponse, ApiError> {
        match kind {
            ItemKind::Lost => self.report_lost(item).await,
            ItemKind::Found => self.report_found(item).await,
        }
    }

    /// GET /api/items/lost
    pub async fn list_lost(&self, filters: &ItemFilters) -> Result<ItemListResponse, ApiError> {
        self.list(ItemKind::Lost, filters).await
    }

    /// GET /api/items/found
    pub async fn list_found(&self, filters: &ItemFilters) -> Result<ItemListResponse, ApiError> {
        self.list(ItemKind::Found, filters).await
    }

    pub async fn list(
        &self,
        kind: ItemKind,
        filters: &ItemFilters,
    ) -> Result<ItemListResponse, ApiError> {
        let mut request = self.http.get(self.url(&format!("/api/items/{kind}")));
        if !filters.is_empty() {
            request = request.query(filters);
        }
        self.send("list items", request).await
    }

    /// GET /api/items/{type}/{id}
    pub async fn get_item_detail(
        &self,
        kind: ItemKind,
        id: &str,
    ) -> Result<ItemDetailResponse, ApiError> {
        let url = match self.item_url(kind, id) {
            Ok(url) => url,
            Err(err) => {
                error!("item details failed: {err}");
                return Err(err);
            }
        };
        self.send("item details", self.http.get(url)).await
    }

    /// POST /api/match-items
    pub async fn match_items(&self, req: &MatchRequest) -> Result<MatchResponse, ApiError> {
        let request = self.http.post(self.url("/api/match-items")).json(req);
        self.send("match items", request).await
    }

    /// GET /api/stats
    pub async fn get_stats(&self) -> Result<StatsResponse, ApiError> {
        self.send("statistics", self.http.get(self.url("/api/stats"))).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        operation: &str,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        debug!("api request: {operation}");
        let result = Self::execute(request).await;
        if let Err(err) = &result {
            error!("{operation} failed: {err}");
        }
        result
    }

    async fn execute<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorResponse>(&text)
                .ok()
                .and_then(|body| body.error)
                .filter(|msg| !msg.is_empty())
                .unwrap_or_else(|| GENERIC_ERROR.to_owned());
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        Ok(serde_json::from_str(&text)?)
    }
}

#[async_trait(?Send)]
impl ItemDetailSource for ApiClient {
    async fn item_detail(&self, kind: ItemKind, id: &str) -> anyhow::Result<Option<Item>> {
        let response = self
            .get_item_detail(kind, id)
            .await
            .with_context(|| format!("item detail lookup {kind}/{id}"))?;
        Ok(response.item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Json, Router,
        extract::{Multipart, Path, Query},
        http::StatusCode,
        response::IntoResponse,
        routing::{get, post},
    };
    use lf_item_core::{DetailQuery, ItemOrigin, MemoryStore, resolve_item};
    use serde_json::{Value, json};
    use std::collections::BTreeMap;

    fn router() -> Router {
        Router::new()
            .route("/", get(health))
            .route("/api/analyze-image", post(analyze))
            .route("/api/report-lost", post(report_lost))
            .route("/api/report-found", post(report_found))
            .route("/api/items/lost", get(list_lost))
            .route("/api/items/found", get(list_found))
            .route("/api/items/{kind}/{id}", get(detail))
            .route("/api/match-items", post(match_items))
            .route("/api/stats", get(stats))
    }

    async fn health() -> Json<Value> {
        Json(json!({"status": "online", "message": "Lost & Found API", "version": "1.0.0"}))
    }

    async fn analyze(mut multipart: Multipart) -> impl IntoResponse {
        while let Ok(Some(field)) = multipart.next_field().await {
            if field.name() == Some("image") {
                let filename = field.file_name().unwrap_or_default().to_owned();
                let bytes = field.bytes().await.map(|b| b.len()).unwrap_or_default();
                return (
                    StatusCode::OK,
                    Json(json!({
                        "success": true,
                        "filename": filename,
                        "filepath": format!("uploads/{filename}"),
                        "analysis": {
                            "detected_objects": [{"class": "backpack", "confidence": 0.91, "bbox": {}}],
                            "raw_result": {"bytes": bytes}
                        },
                        "timestamp": "20251215_101500"
                    })),
                );
            }
        }
        (StatusCode::BAD_REQUEST, Json(json!({"error": "No image file provided"})))
    }

    async fn report_lost(Json(body): Json<Value>) -> impl IntoResponse {
        for field in ["itemName", "category", "location", "date", "contactInfo"] {
            if body.get(field).is_none() {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(json!({"error": format!("Missing required field: {field}")})),
                );
            }
        }
        let mut item = body;
        item["id"] = json!(1);
        item["status"] = json!("active");
        (
            StatusCode::CREATED,
            Json(json!({"success": true, "message": "Lost item reported successfully", "item": item})),
        )
    }

    async fn report_found() -> impl IntoResponse {
        (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded")
    }

    async fn list_lost(Query(params): Query<BTreeMap<String, String>>) -> Json<Value> {
        let items: Vec<Value> = params
            .iter()
            .map(|(k, v)| json!({"itemName": format!("{k}={v}")}))
            .collect();
        Json(json!({"success": true, "count": items.len(), "items": items}))
    }

    async fn list_found() -> Json<Value> {
        Json(json!({
            "success": true,
            "count": 1,
            "items": [{"id": 4, "itemName": "Scarf", "status": "available"}]
        }))
    }

    async fn detail(Path((kind, id)): Path<(String, String)>) -> impl IntoResponse {
        if id == "404" {
            return (StatusCode::NOT_FOUND, Json(json!({"error": "Item not found"})));
        }
        (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "item": {
                    "id": id.parse::<i64>().unwrap_or_default(),
                    "itemName": format!("{kind} item"),
                    "image": "uploads/x.jpg",
                    "description": format!("requested id {id}")
                }
            })),
        )
    }

    async fn match_items(Json(req): Json<MatchRequest>) -> Json<Value> {
        Json(json!({
            "success": true,
            "matchCount": 1,
            "matches": [{
                "item": {"id": 2, "category": req.category, "radiusKm": req.extra.get("radiusKm")},
                "matchScore": 70,
                "matchReasons": []
            }]
        }))
    }

    async fn stats() -> Json<Value> {
        Json(json!({
            "success": true,
            "stats": {
                "totalLostItems": 3,
                "totalFoundItems": 5,
                "activeUsers": 5000,
                "itemsReunited": 12500,
                "successRate": 95
            }
        }))
    }

    async fn spawn_api() -> anyhow::Result<ApiClient> {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        tokio::spawn(async move {
            let _ = axum::serve(listener, router()).await;
        });
        Ok(ApiClient::new(Some(format!("http://{addr}/"))))
    }

    fn report_request() -> ReportItemRequest {
        ReportItemRequest {
            item_name: Some("Black Backpack".to_owned()),
            category: Some("Bags".to_owned()),
            location: Some("Library".to_owned()),
            date: Some("2025-12-15".to_owned()),
            contact_info: Some("owner@example.com".to_owned()),
            ..Default::default()
        }
    }

    #[test]
    fn base_url_is_trimmed_and_defaulted() {
        let client = ApiClient::new(Some("https://api.example.com//".to_owned()));
        assert_eq!(client.base_url(), "https://api.example.com");
        assert_eq!(client.image_url("uploads/a.png"), "https://api.example.com/uploads/a.png");

        if std::env::var(API_BASE_ENV).is_err() {
            assert_eq!(ApiClient::new(Some("  ".to_owned())).base_url(), DEFAULT_API_BASE);
        }
    }

    #[tokio::test]
    async fn health_check_returns_body() -> anyhow::Result<()> {
        let client = spawn_api().await?;
        let health = client.health_check().await?;
        assert_eq!(
            health,
            HealthResponse {
                status: "online".to_owned(),
                message: "Lost & Found API".to_owned(),
                version: "1.0.0".to_owned(),
            }
        );
        Ok(())
    }

    #[tokio::test]
    async fn analyze_image_sends_single_image_field() -> anyhow::Result<()> {
        let client = spawn_api().await?;
        let result = client
            .analyze_image("bag.jpg", vec![0xff, 0xd8, 0xff, 0xe0], "image/jpeg")
            .await?;

        assert!(result.success);
        assert_eq!(result.filename, "bag.jpg");
        assert_eq!(result.analysis.detected_objects[0].class_name, "backpack");
        assert_eq!(result.analysis.raw_result["bytes"], 4);
        Ok(())
    }

    #[tokio::test]
    async fn report_lost_returns_created_item() -> anyhow::Result<()> {
        let client = spawn_api().await?;
        let response = client.report(ItemKind::Lost, &report_request()).await?;

        assert!(response.success);
        assert_eq!(response.item.item_name.as_deref(), Some("Black Backpack"));
        assert_eq!(response.item.status.as_deref(), Some("active"));
        assert!(response.item.has_id("1"));
        Ok(())
    }

    #[tokio::test]
    async fn report_forwards_fields_the_page_added() -> anyhow::Result<()> {
        let client = spawn_api().await?;
        let mut req = report_request();
        req.extra.insert("building".to_owned(), json!("C"));

        let response = client.report_lost(&req).await?;
        assert_eq!(response.item.extra.get("building"), Some(&json!("C")));
        Ok(())
    }

    #[tokio::test]
    async fn error_message_comes_from_server_error_field() -> anyhow::Result<()> {
        let client = spawn_api().await?;
        let req: ReportItemRequest = serde_json::from_value(json!({
            "itemName": "x",
            "category": "y",
            "location": "z",
            "date": "d"
        }))?;
        let err = client
            .report_lost(&req)
            .await
            .expect_err("missing field is rejected");

        assert_eq!(err.to_string(), "Missing required field: contactInfo");
        assert_eq!(err.status(), Some(400));
        Ok(())
    }

    #[tokio::test]
    async fn error_without_json_body_uses_generic_message() -> anyhow::Result<()> {
        let client = spawn_api().await?;
        let err = client
            .report_found(&report_request())
            .await
            .expect_err("server error surfaces");

        assert_eq!(err.to_string(), GENERIC_ERROR);
        assert_eq!(err.status(), Some(500));
        Ok(())
    }

    #[tokio::test]
    async fn list_lost_forwards_only_present_filters() -> anyhow::Result<()> {
        let client = spawn_api().await?;
        let filters = ItemFilters {
            category: Some("Electronics".to_owned()),
            search: Some("pro".to_owned()),
            ..Default::default()
        };

        let listed = client.list_lost(&filters).await?;
        let names: Vec<_> = listed
            .items
            .iter()
            .filter_map(|item| item.item_name.clone())
            .collect();
        assert_eq!(names, vec!["category=Electronics", "search=pro"]);

        let unfiltered = client.list_lost(&ItemFilters::default()).await?;
        assert_eq!(unfiltered.count, 0);
        Ok(())
    }

    #[tokio::test]
    async fn list_found_keeps_item_fields() -> anyhow::Result<()> {
        let client = spawn_api().await?;
        let listed = client.list_found(&ItemFilters::default()).await?;

        assert_eq!(listed.count, 1);
        assert_eq!(
            serde_json::to_value(&listed.items[0])?,
            json!({"id": 4, "itemName": "Scarf", "status": "available"})
        );
        Ok(())
    }

    #[tokio::test]
    async fn item_detail_and_not_found() -> anyhow::Result<()> {
        let client = spawn_api().await?;

        let detail = client.get_item_detail(ItemKind::Found, "12").await?;
        let item = detail.item.expect("item present");
        assert_eq!(item.item_name.as_deref(), Some("found item"));
        assert!(item.has_id("12"));

        let err = client
            .get_item_detail(ItemKind::Lost, "404")
            .await
            .expect_err("missing item");
        assert_eq!(err.to_string(), "Item not found");
        assert_eq!(err.status(), Some(404));
        Ok(())
    }

    #[tokio::test]
    async fn item_id_stays_inside_its_path_segment() -> anyhow::Result<()> {
        let client = spawn_api().await?;

        let detail = client.get_item_detail(ItemKind::Lost, "1/../../stats").await?;
        let item = detail.item.expect("detail route answered");
        assert_eq!(item.description.as_deref(), Some("requested id 1/../../stats"));
        assert_eq!(item.item_name.as_deref(), Some("lost item"));
        Ok(())
    }

    #[tokio::test]
    async fn match_items_and_stats() -> anyhow::Result<()> {
        let client = spawn_api().await?;

        let matched = client
            .match_items(&MatchRequest {
                category: Some("Bags".to_owned()),
                color: Some("Black".to_owned()),
                extra: [("radiusKm".to_owned(), json!(2))].into_iter().collect(),
                ..Default::default()
            })
            .await?;
        assert_eq!(matched.match_count, 1);
        assert_eq!(matched.matches[0].match_score, 70);
        assert_eq!(matched.matches[0].item.category.as_deref(), Some("Bags"));
        assert_eq!(matched.matches[0].item.extra.get("radiusKm"), Some(&json!(2)));

        let stats = client.get_stats().await?;
        assert_eq!(stats.stats.total_found_items, 5);
        assert_eq!(stats.stats.success_rate, 95);
        Ok(())
    }

    #[tokio::test]
    async fn transport_failure_is_propagated() -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        drop(listener);

        let client = ApiClient::new(Some(format!("http://{addr}")));
        let err = client.get_stats().await.expect_err("nothing is listening");
        assert!(matches!(err, ApiError::Transport(_)));
        Ok(())
    }

    #[tokio::test]
    async fn detail_page_resolves_through_live_api() -> anyhow::Result<()> {
        let client = spawn_api().await?;
        let store = MemoryStore::default();

        let query = DetailQuery::from_params(None, Some("lost".to_owned()), Some("8".to_owned()));
        let resolved = resolve_item(&query, &client, &store).await.expect("api item");
        assert_eq!(resolved.origin, ItemOrigin::Api);
        assert_eq!(resolved.item.item_name.as_deref(), Some("lost item"));

        let query = DetailQuery::from_params(
            Some("Red Sports Water Bottle".to_owned()),
            Some("lost".to_owned()),
            Some("404".to_owned()),
        );
        let resolved = resolve_item(&query, &client, &store).await.expect("catalog item");
        assert_eq!(resolved.origin, ItemOrigin::Catalog);
        Ok(())
    }
}
