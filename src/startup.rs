use std::net::TcpListener;

use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

use crate::configuration::Settings;
use crate::formspark_client::FormsparkClient;
use crate::routes::{Templates, health_check, home, join_waitlist, json_error_handler, thank_you};
use crate::turnstile_client::TurnstileClient;

pub struct Application {
    port: u16,
    server: Server,
}

/// The Turnstile site key handed to the landing page.
pub struct TurnstileSiteKey(pub String);

impl Application {
    pub async fn build(config: Settings) -> Result<Self, anyhow::Error> {
        let site_key = TurnstileSiteKey(config.turnstile.site_key.clone());
        let turnstile_client = config.turnstile.client()?;
        let formspark_client = config.formspark.client()?;
        if !formspark_client.is_configured() {
            tracing::warn!("No Formspark form id is set, waitlist submissions will fail.");
        }
        let templates = Templates::new()?;

        let address = format!("{}:{}", config.app.host, config.app.port);
        let listener = TcpListener::bind(address)?;
        let port = listener.local_addr()?.port();
        let server = run(
            listener,
            turnstile_client,
            formspark_client,
            templates,
            site_key,
        )?;

        Ok(Self { port, server })
    }

    pub fn get_port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn run(
    listener: TcpListener,
    turnstile_client: TurnstileClient,
    formspark_client: FormsparkClient,
    templates: Templates,
    site_key: TurnstileSiteKey,
) -> Result<Server, anyhow::Error> {
    let turnstile_client = web::Data::new(turnstile_client);
    let formspark_client = web::Data::new(formspark_client);
    let templates = web::Data::new(templates);
    let site_key = web::Data::new(site_key);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/", web::get().to(home))
            .route("/thank-you", web::get().to(thank_you))
            .route("/health_check", web::get().to(health_check))
            .service(
                web::resource("/api/waitlist")
                    .app_data(web::JsonConfig::default().error_handler(json_error_handler))
                    .route(web::post().to(join_waitlist)),
            )
            .app_data(turnstile_client.clone())
            .app_data(formspark_client.clone())
            .app_data(templates.clone())
            .app_data(site_key.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
