use actix_web::body::MessageBody;
use actix_web::dev::{Server, ServiceFactory};
use actix_web::middleware;
use actix_web::{web, web::Data, App, HttpServer};
use tracing_actix_web::TracingLogger;

use crate::components::app::AppComponents;
use crate::components::configuration::Config;
use crate::components::tracing::init_telemetry;

use super::middlewares::cors::PermissiveCors;
use super::routes::followup::handlers::send_followup;
use super::routes::health::handlers::live;

pub fn run_service(data: Data<AppComponents>) -> Result<Server, std::io::Error> {
    init_telemetry();

    let server_host = data.config.server.host.clone();
    let server_port = data.config.server.port;

    log::info!("Server is running on {}:{}", server_host, server_port);

    let server = HttpServer::new(move || get_app_router(&data))
        .bind((server_host, server_port))?
        .run();

    Ok(server)
}

pub fn get_app_data(custom_config: Option<Config>) -> Data<AppComponents> {
    let app_data = AppComponents::new(custom_config);
    Data::new(app_data)
}

pub fn get_app_router(
    data: &Data<AppComponents>,
) -> App<
    impl ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(data.clone())
        .wrap(PermissiveCors)
        .wrap(middleware::NormalizePath::trim())
        .wrap(TracingLogger::default())
        .service(live)
        .default_service(web::to(send_followup))
}
