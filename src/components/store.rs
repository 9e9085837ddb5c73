use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::domain::error::NotifyError;

/// REST client for the structured-data store holding users and requests.
#[derive(Debug)]
pub struct StoreComponent {
    http_client: reqwest::Client,
    store_url: String,
    store_key: String,
}

pub const USERS_TABLE: &str = "users";
pub const REQUESTS_TABLE: &str = "requests";

const USER_COLUMNS: &str = "email,full_name";
const REQUEST_COLUMNS: &str = "title,description,created_at";

// Asking for a single JSON object makes the store enforce the
// exactly-one-row contract on its side.
const SINGLE_OBJECT_MIME: &str = "application/vnd.pgrst.object+json";

#[derive(Debug, Deserialize, Serialize)]
pub struct UserRecord {
    pub email: String,
    pub full_name: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct RequestRecord {
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
struct StoreErrorBody {
    message: String,
}

impl StoreComponent {
    pub fn new(url: String, key: String) -> Self {
        if url.is_empty() {
            panic!("missing store URL")
        }

        Self {
            http_client: reqwest::Client::new(),
            store_url: url,
            store_key: key,
        }
    }

    #[tracing::instrument(name = "Fetching user record", skip(self))]
    pub async fn get_user(&self, user_id: &str) -> Result<UserRecord, NotifyError> {
        self.fetch_single(USERS_TABLE, USER_COLUMNS, user_id)
            .await
            .map_err(|reason| {
                log::warn!("Couldn't fetch user {}: {}", user_id, reason);
                NotifyError::UserLookup(reason)
            })
    }

    #[tracing::instrument(name = "Fetching request record", skip(self))]
    pub async fn get_request(&self, request_id: &str) -> Result<RequestRecord, NotifyError> {
        self.fetch_single(REQUESTS_TABLE, REQUEST_COLUMNS, request_id)
            .await
            .map_err(|reason| {
                log::warn!("Couldn't fetch request {}: {}", request_id, reason);
                NotifyError::RequestLookup(reason)
            })
    }

    async fn fetch_single<T: DeserializeOwned>(
        &self,
        table: &str,
        columns: &str,
        id: &str,
    ) -> Result<T, String> {
        let row_url = format!("{}/rest/v1/{}", self.store_url, table);
        let id_filter = format!("eq.{}", id);

        let response = self
            .http_client
            .get(row_url)
            .query(&[("select", columns), ("id", id_filter.as_str())])
            .header("apikey", &self.store_key)
            .bearer_auth(&self.store_key)
            .header(reqwest::header::ACCEPT, SINGLE_OBJECT_MIME)
            .send()
            .await
            .map_err(|err| err.to_string())?;

        if !response.status().is_success() {
            return Err(read_store_failure(response).await);
        }

        response.json::<T>().await.map_err(|err| err.to_string())
    }
}

/// Pulls the failure reason out of a store error body, falling back to the
/// bare status when the body isn't the expected shape.
async fn read_store_failure(response: reqwest::Response) -> String {
    let status = response.status();
    match response.json::<StoreErrorBody>().await {
        Ok(body) => body.message,
        Err(_) => format!("store responded with status {}", status),
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::StoreComponent;

    fn store(base_url: String) -> StoreComponent {
        StoreComponent::new(base_url, "store-test-key".to_string())
    }

    #[actix_web::test]
    async fn get_user_requests_a_single_object_with_the_expected_projection() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/rest/v1/users"))
            .and(query_param("select", "email,full_name"))
            .and(query_param("id", "eq.u1"))
            .and(header("apikey", "store-test-key"))
            .and(header("Authorization", "Bearer store-test-key"))
            .and(header("Accept", "application/vnd.pgrst.object+json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "email": "a@b.com",
                "full_name": "Alice"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let user = store(mock_server.uri()).get_user("u1").await.unwrap();

        assert_eq!(user.email, "a@b.com");
        assert_eq!(user.full_name, "Alice");
    }

    #[actix_web::test]
    async fn get_request_parses_the_record_fields() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/rest/v1/requests"))
            .and(query_param("select", "title,description,created_at"))
            .and(query_param("id", "eq.r1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "title": "Need a DJ",
                "description": "For a wedding",
                "created_at": "2024-01-01T00:00:00Z"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let request = store(mock_server.uri()).get_request("r1").await.unwrap();

        assert_eq!(request.title, "Need a DJ");
        assert_eq!(request.description, "For a wedding");
    }

    #[actix_web::test]
    async fn get_user_surfaces_the_store_reason_when_no_single_row_matches() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/rest/v1/users"))
            .respond_with(ResponseTemplate::new(406).set_body_json(serde_json::json!({
                "code": "PGRST116",
                "details": "The result contains 0 rows",
                "hint": null,
                "message": "JSON object requested, multiple (or no) rows returned"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let err = store(mock_server.uri()).get_user("absent").await.unwrap_err();

        assert_eq!(
            err.to_string(),
            "Failed to fetch user data: JSON object requested, multiple (or no) rows returned"
        );
    }

    #[actix_web::test]
    async fn get_request_reports_the_status_when_the_error_body_is_opaque() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/rest/v1/requests"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&mock_server)
            .await;

        let err = store(mock_server.uri()).get_request("r1").await.unwrap_err();

        assert!(err.to_string().starts_with("Failed to fetch request data:"));
        assert!(err.to_string().contains("500"));
    }
}
