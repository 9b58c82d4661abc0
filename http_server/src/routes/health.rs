use actix_web::web;
use serde_json::{json, Value};

async fn health_check() -> web::Json<Value> {
    web::Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(health_check)));
}
