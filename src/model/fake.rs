//! In-process stand-in for the completion API, used by tests.

use actix_web::http::{header, StatusCode};
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use serde_json::{json, Value};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};

type Recorded = Arc<Mutex<Vec<(Option<String>, Value)>>>;

struct Canned {
    status: StatusCode,
    body: Value,
    requests: Recorded,
}

pub struct FakeProvider {
    base_url: String,
    requests: Recorded,
}

impl FakeProvider {
    pub fn base_url(&self) -> String {
        self.base_url.clone()
    }

    /// `(authorization header, JSON body)` for every call received so far.
    pub fn requests(&self) -> Vec<(Option<String>, Value)> {
        self.requests.lock().unwrap().clone()
    }
}

/// A well-formed completion body with one choice.
pub fn reply(content: &str) -> Value {
    json!({
        "id": "gen-test",
        "model": super::MODEL,
        "choices": [{ "index": 0, "message": { "role": "assistant", "content": content } }]
    })
}

/// Must be called from inside an actix system.
pub fn spawn(status: StatusCode, body: Value) -> FakeProvider {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let requests: Recorded = Arc::default();

    let canned = web::Data::new(Canned {
        status,
        body,
        requests: requests.clone(),
    });

    let server = HttpServer::new(move || {
        App::new()
            .app_data(canned.clone())
            .app_data(web::JsonConfig::default().limit(crate::web::handlers::MAX_BODY_BYTES))
            .route("/chat/completions", web::post().to(handle))
    })
    .workers(1)
    .listen(listener)
    .unwrap()
    .run();
    actix_web::rt::spawn(server);

    FakeProvider {
        base_url: format!("http://{}", addr),
        requests,
    }
}

/// A base URL nothing is listening on.
pub fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

async fn handle(
    canned: web::Data<Canned>,
    req: HttpRequest,
    body: web::Json<Value>,
) -> HttpResponse {
    let auth = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(String::from);
    canned.requests.lock().unwrap().push((auth, body.into_inner()));
    HttpResponse::build(canned.status).json(&canned.body)
}
