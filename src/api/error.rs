use actix_http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

use crate::domain::error::{ErrorResponse, NotifyError};

// Rest Error Responses mapping
impl ResponseError for NotifyError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::MissingFields
            | Self::InvalidBody(_)
            | Self::UserLookup(_)
            | Self::RequestLookup(_)
            | Self::Delivery(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        log::error!("Error sending follow-up: {}", self);

        HttpResponse::build(self.status_code()).json(ErrorResponse {
            success: false,
            error: self.to_string(),
        })
    }
}
