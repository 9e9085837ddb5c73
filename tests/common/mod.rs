use actix_web::{body::MessageBody, dev::ServiceFactory, web::Data, App};
use followup_notifier::{
    api::app::get_app_router,
    components::{app::AppComponents, configuration::Config},
};

use wiremock::{
    matchers::{any, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

pub fn get_configuration() -> Config {
    Config::new().expect("Couldn't read the configuration file")
}

pub fn get_app(
    config: Config,
) -> App<
    impl ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app_components = AppComponents::new(Some(config));
    let app_data = Data::new(app_components);
    get_app_router(&app_data)
}

pub async fn create_store_mock_server() -> MockServer {
    MockServer::start().await
}

pub async fn create_mailer_mock_server() -> MockServer {
    MockServer::start().await
}

/// Mounts a single-object row response for the given table and id filter.
pub async fn mock_store_row(server: &MockServer, table: &str, id: &str, row: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(format!("/rest/v1/{table}")))
        .and(query_param("id", format!("eq.{id}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(row))
        .mount(server)
        .await;
}

/// Mounts the single-object failure the store answers with when the id
/// filter doesn't match exactly one row.
pub async fn mock_store_missing_row(server: &MockServer, table: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/rest/v1/{table}")))
        .respond_with(ResponseTemplate::new(406).set_body_json(serde_json::json!({
            "code": "PGRST116",
            "details": "The result contains 0 rows",
            "hint": null,
            "message": "JSON object requested, multiple (or no) rows returned"
        })))
        .mount(server)
        .await;
}

pub async fn mock_mailer_accepting(server: &MockServer, email_id: &str) {
    Mock::given(method("POST"))
        .and(path("/emails"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": email_id,
        })))
        .mount(server)
        .await;
}

pub async fn mock_store_expect_no_calls(server: &MockServer) {
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .named("No calls to the store")
        .mount(server)
        .await;
}

pub async fn mock_mailer_expect_no_calls(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/emails"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .named("No email submissions")
        .mount(server)
        .await;
}
