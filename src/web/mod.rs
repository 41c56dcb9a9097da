pub mod handlers;
pub mod models;
pub mod routes;

use actix_cors::Cors;
use actix_files as fs;
use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{middleware::Logger, web::Data, App, Error};

use crate::AppState;

/// The full application: permissive CORS, request logging, the API routes
/// and the static mount.
pub fn build_app(
    state: Data<AppState>,
    static_dir: &str,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    let cors = Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header();

    App::new()
        .wrap(cors)
        .wrap(Logger::default())
        .app_data(state)
        .configure(routes::configure)
        .service(fs::Files::new("/static", static_dir))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{fake, CompletionGateway};
    use actix_web::http::{header, Method, StatusCode};
    use actix_web::test;

    const STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

    fn state() -> Data<AppState> {
        Data::new(AppState {
            gateway: CompletionGateway::new(fake::unreachable_base_url(), "sk-test"),
        })
    }

    #[actix_web::test]
    async fn preflight_allows_any_origin() {
        let app = test::init_service(build_app(state(), STATIC_DIR)).await;

        let req = test::TestRequest::default()
            .method(Method::OPTIONS)
            .uri("/chat")
            .insert_header((header::ORIGIN, "http://frontend.example"))
            .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "POST"))
            .insert_header((header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());
        let headers = resp.headers();
        assert!(headers.contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
        assert!(headers.contains_key(header::ACCESS_CONTROL_ALLOW_METHODS));
    }

    #[actix_web::test]
    async fn simple_requests_carry_the_allow_origin_header() {
        let app = test::init_service(build_app(state(), STATIC_DIR)).await;

        let req = test::TestRequest::get()
            .uri("/chatbot_roles")
            .insert_header((header::ORIGIN, "http://frontend.example"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert!(resp
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    }

    #[actix_web::test]
    async fn static_assets_are_served() {
        let app = test::init_service(build_app(state(), STATIC_DIR)).await;

        let req = test::TestRequest::get().uri("/static/app.js").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = test::read_body(resp).await;
        assert!(std::str::from_utf8(&body).unwrap().contains("chatHistory"));
    }

    #[actix_web::test]
    async fn static_directory_is_not_listed() {
        let app = test::init_service(build_app(state(), STATIC_DIR)).await;

        let req = test::TestRequest::get().uri("/static/").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(!resp.status().is_success());
    }
}
