use actix_web::{
    http::Method,
    web::{self, Data},
    HttpRequest, HttpResponse,
};
use serde::{Deserialize, Serialize};

use crate::{
    components::app::AppComponents,
    domain::{error::NotifyError, followup::FollowupEmail},
};

pub const SENT_MESSAGE: &str = "Follow-up email sent successfully";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendFollowupRequest {
    #[serde(default)]
    pub request_id: String,
    #[serde(default)]
    pub user_id: String,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendFollowupResponse {
    pub success: bool,
    pub message: String,
    pub email_id: String,
}

/// Runs the follow-up pipeline for one trigger: validate the payload, fetch
/// the user and request records, render the email, submit it for delivery.
///
/// Registered as the router's default service so it sees every method on
/// every path; anything that isn't a POST is rejected here. Preflight
/// requests are answered by the CORS middleware and never reach this point.
pub async fn send_followup(
    req: HttpRequest,
    body: web::Bytes,
    app_data: Data<AppComponents>,
) -> Result<HttpResponse, NotifyError> {
    if req.method() != Method::POST {
        return Err(NotifyError::MethodNotAllowed);
    }

    let trigger = parse_trigger(&body)?;

    let user = app_data.store.get_user(&trigger.user_id).await?;
    let request = app_data.store.get_request(&trigger.request_id).await?;

    let email = FollowupEmail::compose(
        &user,
        &request,
        &trigger.request_id,
        &app_data.config.app.url,
    );

    let email_id = app_data
        .mailer
        .send_email(&user.email, &email.subject, &email.html_body)
        .await?;

    tracing::info!(
        "Follow-up email {} sent for request {}",
        email_id,
        trigger.request_id
    );

    Ok(HttpResponse::Ok().json(SendFollowupResponse {
        success: true,
        message: SENT_MESSAGE.to_string(),
        email_id,
    }))
}

fn parse_trigger(body: &web::Bytes) -> Result<SendFollowupRequest, NotifyError> {
    let trigger: SendFollowupRequest =
        serde_json::from_slice(body).map_err(|err| NotifyError::InvalidBody(err.to_string()))?;

    // Absent fields deserialize to empty strings, both are rejected alike
    if trigger.request_id.is_empty() || trigger.user_id.is_empty() {
        return Err(NotifyError::MissingFields);
    }

    Ok(trigger)
}
