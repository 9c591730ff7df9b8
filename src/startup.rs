use std::net::TcpListener;
use std::time::Duration;

use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::web;
use actix_web::App;
use actix_web::HttpResponse;
use actix_web::HttpServer;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing_actix_web::TracingLogger;

use crate::configuration::DatabaseSettings;
use crate::configuration::Settings;
use crate::routes::contact_form;
use crate::routes::health_check;
use crate::routes::join_waitlist;
use crate::routes::list_waitlist;
use crate::routes::submit_form;
use crate::utils::ErrorBody;

/// Wrapper for actix's `Server` with access to the bound port. Not to be
/// confused with actix's `App`!
pub struct Application {
    /// Left private; use `get_port` to access
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(cfg: Settings) -> Result<Self, anyhow::Error> {
        let addr = format!("{}:{}", cfg.application.host, cfg.application.port);
        let listener = TcpListener::bind(addr)?;

        // port 0 in config means the OS picks one; keep whatever was assigned
        let port = listener.local_addr()?.port();

        let pool = get_connection_pool(&cfg.database);
        let server = run(listener, pool, cfg.application.frontend_origin)?;

        Ok(Self { port, server })
    }

    pub fn get_port(&self) -> u16 { self.port }

    /// Because this consumes `self`, this should be the final function call
    /// (or passed to `tokio::spawn`)
    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> { self.server.await }
}

/// Lazy pool: the first connection is only opened on first use, so db-free
/// requests (health check, contact form) never touch postgres. The acquire
/// timeout bounds how long a request waits on an unreachable store before
/// surfacing the generic 500.
pub fn get_connection_pool(db_cfg: &DatabaseSettings) -> PgPool {
    PgPoolOptions::new()
        .acquire_timeout(Duration::from_secs(5))
        .connect_lazy_with(db_cfg.connection())
}

/// Declares all API endpoints. The server is not responsible for binding to
/// an address, it only listens to an already bound one.
pub fn run(
    listener: TcpListener,
    pool: PgPool,
    frontend_origin: String,
) -> Result<Server, std::io::Error> {
    // `Data` is externally an `Arc` (for sharing across workers), internally
    // a `HashMap` (for wrapping arbitrary types)
    let pool = web::Data::new(pool);

    let server = HttpServer::new(move || {
        // `Cors` is not `Clone`; build one per worker. Requests without an
        // Origin header are not CORS requests and always pass (curl, probes).
        let cors = Cors::default()
            .allowed_origin(&frontend_origin)
            .allow_any_method()
            .allow_any_header()
            .supports_credentials();

        App::new()
            .wrap(TracingLogger::default())
            .wrap(cors)
            .route("/health", web::get().to(health_check))
            .route("/api/waitlist", web::post().to(join_waitlist))
            .route("/api/waitlist", web::get().to(list_waitlist))
            .route("/api/form/submit", web::post().to(submit_form))
            .route("/api/form/contact", web::post().to(contact_form))
            // malformed or mistyped JSON bodies get the same envelope as
            // validation failures
            .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                let body = ErrorBody::new(err.to_string());
                actix_web::error::InternalError::from_response(
                    err,
                    HttpResponse::BadRequest().json(body),
                )
                .into()
            }))
            .app_data(pool.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
