use reqwest::header::{HeaderMap, HeaderValue};
use serde_json::Value as JsonValue;

/// Kind of PostgREST operation a [`TableRequest`] performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Select,
    Insert,
    Update,
    Upsert,
}

impl Operation {
    /// The HTTP method PostgREST expects for this operation.
    pub fn method(&self) -> reqwest::Method {
        match self {
            Self::Select => reqwest::Method::GET,
            Self::Insert | Self::Upsert => reqwest::Method::POST,
            Self::Update => reqwest::Method::PATCH,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderDirection {
    Ascending,
    Descending,
}

impl OrderDirection {
    fn as_postgrest(&self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

#[derive(Debug, Clone)]
pub struct OrderClause {
    pub column: String,
    pub direction: OrderDirection,
}

/// Declarative description of a single PostgREST table operation.
///
/// The bridge only ever needs equality filters, one optional order
/// clause, and a single-column conflict target, so this stays a flat
/// struct rather than a full query builder.
#[derive(Debug, Clone)]
pub struct TableRequest {
    pub table: String,
    pub operation: Operation,
    /// JSON body for insert/update/upsert.
    pub body: Option<JsonValue>,
    /// Equality filters, rendered as `column=eq.value`.
    pub filters: Vec<(String, String)>,
    pub order: Option<OrderClause>,
    /// Conflict column for upserts, rendered as `on_conflict=column`.
    pub on_conflict: Option<String>,
    /// Request a single object rather than an array.
    pub single: bool,
}

impl TableRequest {
    fn new(table: &str, operation: Operation, body: Option<JsonValue>) -> Self {
        Self {
            table: table.to_string(),
            operation,
            body,
            filters: Vec::new(),
            order: None,
            on_conflict: None,
            single: false,
        }
    }

    /// Start a SELECT over all columns.
    pub fn select(table: &str) -> Self {
        Self::new(table, Operation::Select, None)
    }

    /// Start an INSERT of one row.
    pub fn insert(table: &str, body: JsonValue) -> Self {
        Self::new(table, Operation::Insert, Some(body))
    }

    /// Start an UPDATE; combine with [`eq`](Self::eq) to scope the rows.
    pub fn update(table: &str, body: JsonValue) -> Self {
        Self::new(table, Operation::Update, Some(body))
    }

    /// Start an UPSERT resolving conflicts on `on_conflict` by merging
    /// duplicates (full replacement of the non-key columns).
    pub fn upsert(table: &str, body: JsonValue, on_conflict: &str) -> Self {
        let mut request = Self::new(table, Operation::Upsert, Some(body));
        request.on_conflict = Some(on_conflict.to_string());
        request
    }

    /// Add an equality filter.
    pub fn eq(mut self, column: &str, value: impl ToString) -> Self {
        self.filters.push((column.to_string(), value.to_string()));
        self
    }

    /// Order the result by a column.
    pub fn order(mut self, column: &str, direction: OrderDirection) -> Self {
        self.order = Some(OrderClause {
            column: column.to_string(),
            direction,
        });
        self
    }

    /// Expect a single object back instead of an array.
    pub fn single(mut self) -> Self {
        self.single = true;
        self
    }

    /// Render the full URL (path plus query string) for this request.
    pub fn url(&self, base_url: &str) -> String {
        let mut url = format!("{}/rest/v1/{}", base_url.trim_end_matches('/'), self.table);
        let mut query_params = Vec::new();

        if self.operation == Operation::Select {
            query_params.push("select=*".to_string());
        }

        if let Some(ref conflict) = self.on_conflict {
            query_params.push(format!("on_conflict={}", conflict));
        }

        for (column, value) in &self.filters {
            query_params.push(format!("{}=eq.{}", column, value));
        }

        if let Some(ref order) = self.order {
            query_params.push(format!(
                "order={}.{}",
                order.column,
                order.direction.as_postgrest()
            ));
        }

        if !query_params.is_empty() {
            url.push('?');
            url.push_str(&query_params.join("&"));
        }

        url
    }

    /// Render the PostgREST headers for this request.
    pub fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();

        if self.body.is_some() {
            headers.insert("Content-Type", HeaderValue::from_static("application/json"));
        }

        match self.operation {
            Operation::Upsert => {
                headers.insert(
                    "Prefer",
                    HeaderValue::from_static(
                        "resolution=merge-duplicates,return=representation",
                    ),
                );
            }
            Operation::Insert | Operation::Update => {
                headers.insert("Prefer", HeaderValue::from_static("return=representation"));
            }
            Operation::Select => {}
        }

        if self.single {
            headers.insert(
                "Accept",
                HeaderValue::from_static("application/vnd.pgrst.object+json"),
            );
        } else {
            headers.insert("Accept", HeaderValue::from_static("application/json"));
        }

        headers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const BASE: &str = "http://127.0.0.1:64321";

    // ─── SELECT Tests ───────────────────────────────────────

    #[test]
    fn test_select_with_filter_and_order() {
        let request = TableRequest::select("v_requests_with_names")
            .eq("mentor_email", "b@x.com")
            .order("created_at", OrderDirection::Descending);
        let url = request.url(BASE);
        assert!(url.starts_with("http://127.0.0.1:64321/rest/v1/v_requests_with_names?"));
        assert!(url.contains("select=*"));
        assert!(url.contains("mentor_email=eq.b@x.com"));
        assert!(url.contains("order=created_at.desc"));
        assert_eq!(request.operation.method(), reqwest::Method::GET);
    }

    #[test]
    fn test_select_no_filters() {
        let request = TableRequest::select("requests");
        assert_eq!(request.url(BASE), "http://127.0.0.1:64321/rest/v1/requests?select=*");
    }

    // ─── UPSERT Tests ───────────────────────────────────────

    #[test]
    fn test_upsert_merge_duplicates() {
        let request = TableRequest::upsert("users", json!({"email": "a@x.com"}), "email").single();
        let url = request.url(BASE);
        assert!(url.contains("on_conflict=email"));
        let headers = request.headers();
        let prefer = headers.get("Prefer").unwrap().to_str().unwrap();
        assert!(prefer.contains("resolution=merge-duplicates"));
        assert!(prefer.contains("return=representation"));
        assert_eq!(
            headers.get("Accept").unwrap(),
            "application/vnd.pgrst.object+json"
        );
        assert_eq!(request.operation.method(), reqwest::Method::POST);
    }

    // ─── INSERT Tests ───────────────────────────────────────

    #[test]
    fn test_insert_returns_representation() {
        let request = TableRequest::insert("goals", json!({"title": "learn"}));
        let headers = request.headers();
        assert_eq!(headers.get("Prefer").unwrap(), "return=representation");
        assert_eq!(headers.get("Content-Type").unwrap(), "application/json");
        assert_eq!(request.url(BASE), "http://127.0.0.1:64321/rest/v1/goals");
    }

    // ─── UPDATE Tests ───────────────────────────────────────

    #[test]
    fn test_update_with_filter() {
        let request = TableRequest::update("requests", json!({"status": "accepted"}))
            .eq("id", "550e8400-e29b-41d4-a716-446655440000");
        let url = request.url(BASE);
        assert!(url.contains("id=eq.550e8400-e29b-41d4-a716-446655440000"));
        assert_eq!(request.operation.method(), reqwest::Method::PATCH);
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let request = TableRequest::select("users");
        assert_eq!(
            request.url("http://127.0.0.1:64321/"),
            "http://127.0.0.1:64321/rest/v1/users?select=*"
        );
    }
}
