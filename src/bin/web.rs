//! Single binary web server: draw page from templates/, static from /static, draws via REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT.
//! Teams for the page's draw button are read once from TEAMS_FILE (default data/teams.json).

use actix_files::Files;
use actix_web::{
    get, post,
    web::{self, Data, Json, Query},
    App, HttpResponse, HttpServer, Responder,
};
use league_phase_draw::{
    audit_draw, load_participants, make_draw, DrawAudit, DrawConfig, DrawResult, Pairing,
    Participant,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

/// Teams loaded at startup, shared read-only by all requests.
type Teams = Data<Vec<Participant>>;

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct SeedQuery {
    seed: Option<u64>,
}

#[derive(Deserialize)]
struct CreateDrawBody {
    participants: Vec<Participant>,
    #[serde(default)]
    seed: Option<u64>,
}

#[derive(Serialize)]
struct GenerateDrawResponse {
    matches: Vec<Pairing>,
    fixtures: DrawResult,
}

#[derive(Serialize)]
struct CreateDrawResponse {
    matches: DrawResult,
    audit: DrawAudit,
}

fn rng_for(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "league-phase-draw",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Draw the loaded teams; returns the match list for the page plus full fixtures.
#[get("/generate_draw")]
async fn generate_draw(teams: Teams, query: Query<SeedQuery>) -> HttpResponse {
    let mut rng = rng_for(query.seed);
    match make_draw(&teams, DrawConfig::default(), &mut rng) {
        Ok(fixtures) => HttpResponse::Ok().json(GenerateDrawResponse {
            matches: fixtures.pairings(),
            fixtures,
        }),
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Draw an arbitrary participant list posted by the client.
#[post("/api/draws")]
async fn api_create_draw(body: Json<CreateDrawBody>) -> HttpResponse {
    let config = DrawConfig::default();
    let mut rng = rng_for(body.seed);
    match make_draw(&body.participants, config, &mut rng) {
        Ok(matches) => {
            let audit = audit_draw(&matches, &config);
            HttpResponse::Ok().json(CreateDrawResponse { matches, audit })
        }
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_teams_file() -> String {
    "data/teams.json".to_string()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let teams_file = std::env::var("TEAMS_FILE").unwrap_or_else(|_| default_teams_file());

    let teams = match load_participants(&teams_file) {
        Ok(teams) => teams,
        Err(e) => {
            log::warn!("Could not load {}: {} (page draws will fail)", teams_file, e);
            Vec::new()
        }
    };
    let teams = Data::new(teams);

    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    HttpServer::new(move || {
        App::new()
            .app_data(teams.clone())
            .route("/", web::get().to(serve_index_async))
            .service(api_health)
            .service(favicon)
            .service(generate_draw)
            .service(api_create_draw)
            .service(Files::new("/static", "static"))
    })
    .bind(bind)?
    .run()
    .await
}

async fn serve_index_async() -> HttpResponse {
    let html = include_str!("../../templates/index.html");
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}
