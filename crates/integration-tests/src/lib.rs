//! Integration tests for the Prizent admin console.
//!
//! Tests run the real `ApiClient` and services against [`FakePlatform`], an
//! in-process axum server that speaks the platform's REST contract and
//! records what it receives.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p prizent-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::collections::{HashMap, HashSet};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use axum::extract::{Path, Query, Request, State};
use axum::http::{StatusCode, header};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, patch};
use axum::{Json, Router};
use prizent_admin::{ApiClient, ApiConfig};
use prizent_core::brand::Brand;
use prizent_core::category::Category;
use prizent_core::custom_field::{
    CustomFieldDefinition, CustomFieldValue, CustomFieldValueRequest, FieldType,
};
use prizent_core::marketplace::{Marketplace, MarketplaceRequest};
use prizent_core::{
    CategoryId, ClientId, CustomFieldId, CustomFieldValueId, EntityId, MarketplaceId, Module,
};
use serde::Deserialize;
use serde_json::json;

/// Everything the fake platform stores.
#[derive(Debug, Default)]
pub struct PlatformState {
    pub marketplaces: HashMap<MarketplaceId, Marketplace>,
    pub categories: Vec<Category>,
    pub brands: Vec<Brand>,
    pub custom_fields: Vec<CustomFieldDefinition>,
    pub values: Vec<CustomFieldValue>,
    /// Entities whose values endpoint answers 500.
    pub failing_values: HashSet<EntityId>,
    /// Required bearer token, if any.
    pub token: Option<String>,
    /// `"METHOD /path?query"` of every request received.
    pub requests: Vec<String>,
}

/// In-process stand-in for the pricing platform's REST API.
#[derive(Debug, Clone, Default)]
pub struct FakePlatform {
    state: Arc<Mutex<PlatformState>>,
}

impl FakePlatform {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Lock the shared state.
    pub fn state(&self) -> MutexGuard<'_, PlatformState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[must_use]
    pub fn with_marketplace(self, marketplace: Marketplace) -> Self {
        self.state().marketplaces.insert(marketplace.id, marketplace);
        self
    }

    #[must_use]
    pub fn with_categories(self, categories: Vec<Category>) -> Self {
        self.state().categories = categories;
        self
    }

    #[must_use]
    pub fn with_brands(self, brands: Vec<Brand>) -> Self {
        self.state().brands = brands;
        self
    }

    #[must_use]
    pub fn with_custom_fields(self, fields: Vec<CustomFieldDefinition>) -> Self {
        self.state().custom_fields = fields;
        self
    }

    #[must_use]
    pub fn with_values(self, values: Vec<CustomFieldValue>) -> Self {
        self.state().values = values;
        self
    }

    /// Make the values endpoint fail for one entity.
    #[must_use]
    pub fn failing_values_for(self, id: impl Into<EntityId>) -> Self {
        self.state().failing_values.insert(id.into());
        self
    }

    /// Reject requests without `Authorization: Bearer <token>`.
    #[must_use]
    pub fn requiring_token(self, token: &str) -> Self {
        self.state().token = Some(token.to_owned());
        self
    }

    /// Requests received so far.
    #[must_use]
    pub fn requests(&self) -> Vec<String> {
        self.state().requests.clone()
    }

    /// Requests received so far that hit `path_prefix`.
    #[must_use]
    pub fn requests_to(&self, path_prefix: &str) -> Vec<String> {
        self.requests()
            .into_iter()
            .filter(|r| r.split_once(' ').is_some_and(|(_, p)| p.starts_with(path_prefix)))
            .collect()
    }

    /// The router serving the `/api/admin` endpoints.
    pub fn router(&self) -> Router {
        let shared = self.clone();
        Router::new()
            .route(
                "/api/admin/marketplaces",
                get(list_marketplaces).post(create_marketplace),
            )
            .route(
                "/api/admin/marketplaces/{id}",
                get(get_marketplace).put(update_marketplace),
            )
            .route("/api/admin/marketplaces/{id}/enable", patch(toggle_marketplace))
            .route("/api/admin/categories", get(list_categories))
            .route(
                "/api/admin/categories/{id}",
                delete(delete_category),
            )
            .route("/api/admin/categories/{id}/{action}", patch(toggle_category))
            .route("/api/admin/custom-fields", get(list_custom_fields))
            .route(
                "/api/admin/custom-fields/values",
                get(list_values).post(save_value),
            )
            .route(
                "/api/admin/custom-fields/{id}",
                delete(delete_custom_field),
            )
            .route("/api/admin/custom-fields/{id}/enable", patch(toggle_custom_field))
            .route("/api/admin/brands", get(list_brands))
            .layer(middleware::from_fn_with_state(shared.clone(), record_and_authorize))
            .with_state(shared)
    }

    /// Serve on an ephemeral local port. Returns the API base URL.
    ///
    /// # Errors
    ///
    /// Returns error if the listener cannot be bound.
    pub async fn spawn(&self) -> std::io::Result<String> {
        let listener = tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;
        let app = self.router();
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });
        Ok(format!("http://{addr}/api"))
    }

    /// Serve and build a client pointed at this platform.
    ///
    /// # Errors
    ///
    /// Returns error if the server cannot start or the client cannot be built.
    pub async fn client(&self) -> Result<ApiClient, Box<dyn std::error::Error>> {
        let base_url = self.spawn().await?;
        Ok(ApiClient::new(&ApiConfig::new(&base_url)?)?)
    }
}

// =============================================================================
// Fixtures
// =============================================================================

/// A category with no timestamps.
#[must_use]
pub fn category(id: i64, name: &str, parent: Option<i64>, enabled: bool) -> Category {
    Category {
        id: CategoryId::new(id),
        client_id: Some(ClientId::new(1)),
        name: name.to_owned(),
        parent_category_id: parent.map(CategoryId::new),
        enabled,
        create_date_time: None,
        update_date_time: None,
    }
}

/// A text field for `module`.
#[must_use]
pub fn text_field(id: i64, name: &str, module: Module, enabled: bool) -> CustomFieldDefinition {
    CustomFieldDefinition {
        id: CustomFieldId::new(id),
        client_id: ClientId::new(1),
        name: name.to_owned(),
        field_type: FieldType::Text,
        module,
        required: false,
        enabled,
        dropdown_options: None,
    }
}

/// A stored value.
#[must_use]
pub fn field_value(
    id: i64,
    field_id: i64,
    module: Module,
    module_id: i64,
    value: &str,
) -> CustomFieldValue {
    CustomFieldValue {
        id: CustomFieldValueId::new(id),
        custom_field_id: CustomFieldId::new(field_id),
        client_id: ClientId::new(1),
        module,
        module_id: EntityId::new(module_id),
        value: value.to_owned(),
    }
}

// =============================================================================
// Handlers
// =============================================================================

type Shared = State<FakePlatform>;

fn failure(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "success": false, "message": message }))).into_response()
}

async fn record_and_authorize(State(platform): Shared, request: Request, next: Next) -> Response {
    let line = format!(
        "{} {}",
        request.method(),
        request
            .uri()
            .path_and_query()
            .map_or_else(|| request.uri().path().to_owned(), ToString::to_string)
    );
    let expected = {
        let mut state = platform.state();
        state.requests.push(line);
        state.token.clone()
    };

    if let Some(token) = expected {
        let presented = request
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok());
        if presented != Some(format!("Bearer {token}").as_str()) {
            return failure(StatusCode::UNAUTHORIZED, "Unauthorized");
        }
    }

    next.run(request).await
}

#[derive(Deserialize)]
struct PageQuery {
    #[serde(default)]
    page: usize,
    #[serde(default = "default_page_size")]
    size: usize,
}

const fn default_page_size() -> usize {
    10
}

async fn list_marketplaces(State(platform): Shared, Query(q): Query<PageQuery>) -> Response {
    let state = platform.state();
    let mut all: Vec<&Marketplace> = state.marketplaces.values().collect();
    all.sort_by_key(|m| m.id);
    let size = q.size.max(1);
    let content: Vec<&Marketplace> = all.iter().skip(q.page * size).take(size).copied().collect();
    let total_pages = all.len().div_ceil(size);
    Json(json!({
        "success": true,
        "marketplaces": {
            "content": content,
            "pageNumber": q.page,
            "pageSize": size,
            "totalElements": all.len(),
            "totalPages": total_pages,
            "first": q.page == 0,
            "last": q.page + 1 >= total_pages,
        }
    }))
    .into_response()
}

async fn get_marketplace(State(platform): Shared, Path(id): Path<i64>) -> Response {
    let state = platform.state();
    match state.marketplaces.get(&MarketplaceId::new(id)) {
        Some(marketplace) => Json(json!({ "success": true, "marketplace": marketplace })).into_response(),
        None => failure(StatusCode::NOT_FOUND, "Marketplace not found"),
    }
}

fn apply(marketplace: &mut Marketplace, request: MarketplaceRequest) {
    marketplace.name = request.name;
    marketplace.description = Some(request.description);
    marketplace.enabled = request.enabled;
    marketplace.costs = request.costs;
}

async fn update_marketplace(
    State(platform): Shared,
    Path(id): Path<i64>,
    Json(request): Json<MarketplaceRequest>,
) -> Response {
    let mut state = platform.state();
    let Some(marketplace) = state.marketplaces.get_mut(&MarketplaceId::new(id)) else {
        return failure(StatusCode::NOT_FOUND, "Marketplace not found");
    };
    apply(marketplace, request);
    Json(json!({
        "success": true,
        "message": "Marketplace updated successfully",
        "marketplace": marketplace,
    }))
    .into_response()
}

async fn create_marketplace(
    State(platform): Shared,
    Json(request): Json<MarketplaceRequest>,
) -> Response {
    let mut state = platform.state();
    if state.marketplaces.values().any(|m| m.name == request.name) {
        return failure(StatusCode::CONFLICT, "Marketplace name already exists");
    }
    let next_id = state
        .marketplaces
        .keys()
        .map(MarketplaceId::as_i64)
        .max()
        .unwrap_or(0)
        + 1;
    let mut marketplace = Marketplace {
        id: MarketplaceId::new(next_id),
        name: String::new(),
        description: None,
        enabled: false,
        costs: Vec::new(),
        create_date_time: None,
    };
    apply(&mut marketplace, request);
    let body = json!({
        "success": true,
        "message": "Marketplace created successfully",
        "marketplace": &marketplace,
    });
    state.marketplaces.insert(marketplace.id, marketplace);
    (StatusCode::CREATED, Json(body)).into_response()
}

#[derive(Deserialize)]
struct EnabledQuery {
    enabled: bool,
}

async fn toggle_marketplace(
    State(platform): Shared,
    Path(id): Path<i64>,
    Query(q): Query<EnabledQuery>,
) -> Response {
    let mut state = platform.state();
    let Some(marketplace) = state.marketplaces.get_mut(&MarketplaceId::new(id)) else {
        return failure(StatusCode::NOT_FOUND, "Marketplace not found");
    };
    marketplace.enabled = q.enabled;
    let verb = if q.enabled { "enabled" } else { "disabled" };
    Json(json!({ "success": true, "message": format!("Marketplace {verb} successfully") }))
        .into_response()
}

async fn list_categories(State(platform): Shared) -> Response {
    let state = platform.state();
    Json(json!({
        "success": true,
        "message": "Categories retrieved successfully",
        "categories": state.categories,
        "count": state.categories.len(),
    }))
    .into_response()
}

async fn toggle_category(
    State(platform): Shared,
    Path((id, action)): Path<(i64, String)>,
) -> Response {
    let enabled = match action.as_str() {
        "enable" => true,
        "disable" => false,
        _ => return failure(StatusCode::NOT_FOUND, "No such action"),
    };
    let mut state = platform.state();
    let Some(category) = state
        .categories
        .iter_mut()
        .find(|c| c.id == CategoryId::new(id))
    else {
        return failure(StatusCode::NOT_FOUND, "Category not found");
    };
    category.enabled = enabled;
    Json(json!({ "success": true, "category": category })).into_response()
}

async fn delete_category(State(platform): Shared, Path(id): Path<i64>) -> Response {
    let mut state = platform.state();
    let before = state.categories.len();
    state.categories.retain(|c| c.id != CategoryId::new(id));
    if state.categories.len() == before {
        return failure(StatusCode::NOT_FOUND, "Category not found");
    }
    Json(json!({ "success": true, "message": "Category deleted successfully" })).into_response()
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ModuleQuery {
    module: Module,
    module_id: Option<EntityId>,
}

/// Answers with a bare array, as some deployments do.
async fn list_custom_fields(State(platform): Shared, Query(q): Query<ModuleQuery>) -> Response {
    let state = platform.state();
    let fields: Vec<&CustomFieldDefinition> = state
        .custom_fields
        .iter()
        .filter(|f| f.module == q.module)
        .collect();
    Json(json!(fields)).into_response()
}

async fn list_values(State(platform): Shared, Query(q): Query<ModuleQuery>) -> Response {
    let state = platform.state();
    if q.module_id.is_some_and(|id| state.failing_values.contains(&id)) {
        return failure(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error");
    }
    let values: Vec<&CustomFieldValue> = state
        .values
        .iter()
        .filter(|v| v.module == q.module && q.module_id.is_none_or(|id| v.module_id == id))
        .collect();
    Json(json!({ "success": true, "values": values, "count": values.len() })).into_response()
}

async fn save_value(
    State(platform): Shared,
    Json(request): Json<CustomFieldValueRequest>,
) -> Response {
    let mut state = platform.state();
    let existing = state.values.iter_mut().find(|v| {
        v.custom_field_id == request.custom_field_id
            && v.module == request.module
            && v.module_id == request.module_id
    });
    let saved = if let Some(value) = existing {
        value.value = request.value;
        value.clone()
    } else {
        let next_id = i64::try_from(state.values.len()).unwrap_or(i64::MAX) + 1000;
        let value = CustomFieldValue {
            id: CustomFieldValueId::new(next_id),
            custom_field_id: request.custom_field_id,
            client_id: ClientId::new(1),
            module: request.module,
            module_id: request.module_id,
            value: request.value,
        };
        state.values.push(value.clone());
        value
    };
    Json(json!({ "success": true, "value": saved })).into_response()
}

async fn toggle_custom_field(
    State(platform): Shared,
    Path(id): Path<i64>,
    Query(q): Query<EnabledQuery>,
) -> Response {
    let mut state = platform.state();
    let Some(field) = state
        .custom_fields
        .iter_mut()
        .find(|f| f.id == CustomFieldId::new(id))
    else {
        return failure(StatusCode::NOT_FOUND, "Custom field not found");
    };
    field.enabled = q.enabled;
    Json(json!({ "success": true, "customField": field })).into_response()
}

async fn delete_custom_field(State(platform): Shared, Path(id): Path<i64>) -> Response {
    let mut state = platform.state();
    state.custom_fields.retain(|f| f.id != CustomFieldId::new(id));
    StatusCode::NO_CONTENT.into_response()
}

async fn list_brands(State(platform): Shared) -> Response {
    let state = platform.state();
    Json(json!({
        "success": true,
        "message": "Brands retrieved successfully",
        "brands": state.brands,
        "count": state.brands.len(),
    }))
    .into_response()
}
