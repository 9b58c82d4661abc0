pub mod drive_times;
mod health;

use actix_web::web;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::init_routes)
        .service(web::scope("/api").configure(drive_times::init_routes));
}
