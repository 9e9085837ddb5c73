use followup_notifier::api::app::{get_app_data, run_service};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let data = get_app_data(None);

    let server = run_service(data)?;

    server.await
}
