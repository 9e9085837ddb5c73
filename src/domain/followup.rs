use crate::components::store::{RequestRecord, UserRecord};

/// A rendered follow-up message, ready to hand over to the mailer.
#[derive(Debug)]
pub struct FollowupEmail {
    pub subject: String,
    pub html_body: String,
}

impl FollowupEmail {
    /// Renders the follow-up template for a request the user created.
    /// The link back into the app is the configured base URL plus the
    /// request identifier.
    pub fn compose(
        user: &UserRecord,
        request: &RequestRecord,
        request_id: &str,
        app_url: &str,
    ) -> Self {
        let request_link = format!("{}/requests/{}", app_url, request_id);
        let subject = format!("Follow-up: {}", request.title);

        let html_body = format!(
            r#"
        <div style="font-family: sans-serif; max-width: 600px; margin: 0 auto;">
          <h2>Hello {full_name},</h2>
          <p>We noticed you created a request on Bidi:</p>
          <h3>{title}</h3>
          <p>{description}</p>
          <p>Are you still looking for vendors? Click the button below to view your request:</p>
          <div style="text-align: center; margin: 30px 0;">
            <a href="{request_link}"
               style="background-color: #0070f3; color: white; padding: 12px 24px;
                      text-decoration: none; border-radius: 5px; display: inline-block;">
              View Your Request
            </a>
          </div>
          <p>Best regards,<br>The Bidi Team</p>
        </div>
      "#,
            full_name = user.full_name,
            title = request.title,
            description = request.description,
            request_link = request_link,
        );

        Self { subject, html_body }
    }
}
