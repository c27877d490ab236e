use std::net::TcpListener;

use actix_web::{
    dev::Server,
    error::InternalError,
    middleware::Logger,
    web::{self, Data},
    App, HttpResponse, HttpServer,
};
use serde_json::json;

use crate::{
    configuration::EnrichmentSettings,
    routes::{default_route, enrich_route},
    services::{OpenaiClient, PageFetcher},
};

pub fn run(
    listener: TcpListener,
    fetcher: PageFetcher,
    openai_client: OpenaiClient,
    enrichment: EnrichmentSettings,
) -> Result<Server, std::io::Error> {
    let fetcher = Data::new(fetcher);
    let openai_client = Data::new(openai_client);
    let enrichment = Data::new(enrichment);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                let response =
                    HttpResponse::BadRequest().json(json!({ "error": "Invalid JSON body." }));
                InternalError::from_response(err, response).into()
            }))
            .service(default_route::default)
            .service(web::scope("/api").service(enrich_route::enrich))
            .app_data(fetcher.clone())
            .app_data(openai_client.clone())
            .app_data(enrichment.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
