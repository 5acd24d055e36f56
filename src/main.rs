use actix_web::{delete, get, post, web, App, HttpResponse, HttpServer, Responder};
use anyhow::{Context, Result};
use mindease::{Reply, SessionStore, Settings};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Deserialize)]
struct ChatRequest {
    session_id: Option<Uuid>,
    message: String,
}

#[derive(Serialize)]
struct ChatResponse {
    session_id: Uuid,
    #[serde(flatten)]
    reply: Reply,
}

#[derive(Deserialize)]
struct ResetRequest {
    session_id: Uuid,
}

#[post("/chat")]
async fn chat_endpoint(
    req: web::Json<ChatRequest>,
    store: web::Data<SessionStore>,
) -> impl Responder {
    let (session_id, reply) = store.respond(req.session_id, &req.message);
    HttpResponse::Ok().json(ChatResponse { session_id, reply })
}

#[post("/reset")]
async fn reset_endpoint(
    req: web::Json<ResetRequest>,
    store: web::Data<SessionStore>,
) -> impl Responder {
    if store.reset(req.session_id) {
        HttpResponse::NoContent().finish()
    } else {
        HttpResponse::NotFound().finish()
    }
}

#[delete("/session/{id}")]
async fn end_session_endpoint(
    path: web::Path<Uuid>,
    store: web::Data<SessionStore>,
) -> impl Responder {
    if store.end(path.into_inner()) {
        HttpResponse::NoContent().finish()
    } else {
        HttpResponse::NotFound().finish()
    }
}

#[get("/")]
async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(include_str!("index.html"))
}

fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(index)
        .service(chat_endpoint)
        .service(reset_endpoint)
        .service(end_session_endpoint);
}

#[actix_web::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::load("Config")?;
    let store = web::Data::new(SessionStore::new(
        settings.tuning.clone(),
        settings.sessions.max_sessions,
    ));

    let host = settings.server.host.clone();
    let port = settings.server.port;
    log::info!("Starting companion at http://{}:{}", host, port);
    HttpServer::new(move || App::new().app_data(store.clone()).configure(configure))
        .bind((host.as_str(), port))
        .with_context(|| format!("Failed to bind {}:{}", host, port))?
        .run()
        .await?;
    Ok(())
}
