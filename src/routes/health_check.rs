use actix_web::HttpResponse;
use serde::Serialize;

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
    message: &'static str,
}

/// `GET /health`
///
/// Used by uptime probes; does not touch the database.
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthBody {
        status: "ok",
        message: "Backend server is running",
    })
}
