use actix_files::Files;
use actix_web::{get, middleware, web, App, HttpResponse, HttpServer, Responder};
use highway_map::{CanvasSize, MapData, MapSettings, PolicyRegistry, RawDataset, RouteCatalog, Scene, ViewState};
use log::{error, info, warn};
use serde::Deserialize;
use std::{env, fs, io};

struct AppState {
    data: MapData,
    catalog: RouteCatalog,
}

#[derive(Deserialize)]
struct SceneQuery {
    width: f64,
    height: f64,
    /// Comma-separated route ids; all routes when absent
    open: Option<String>,
    active: Option<String>,
}

fn load_settings() -> Result<MapSettings, String> {
    match env::var("MAP_SETTINGS") {
        Ok(path) => {
            let content = fs::read_to_string(&path).map_err(|e| format!("Failed to read {path}: {e}"))?;
            MapSettings::from_json(&content)
        }
        Err(_) => Ok(MapSettings::default()),
    }
}

fn load_map() -> Result<MapData, String> {
    let path = env::var("DATA_PATH").unwrap_or_else(|_| "./data.json".to_string());
    let content = fs::read_to_string(&path).map_err(|e| format!("Failed to read {path}: {e}"))?;
    let dataset = RawDataset::parse(&content).map_err(|e| format!("Failed to parse {path}: {e}"))?;
    let settings = load_settings()?;

    let data = MapData::load(&dataset, &PolicyRegistry::highways(), &settings).map_err(|e| e.to_string())?;
    info!(
        "Loaded {} stations on {} routes from {path}",
        data.stations().count(),
        data.routes.len()
    );
    if !data.diagnostics.is_clean() {
        warn!(
            "{} records dropped, {} unresolved station references",
            data.diagnostics.dropped.len(),
            data.diagnostics.unresolved.len()
        );
    }
    Ok(data)
}

fn view_from_query(data: &MapData, query: &SceneQuery) -> ViewState {
    let view = match &query.open {
        Some(open) => ViewState::open_all(open.split(',').map(str::trim).filter(|id| !id.is_empty())),
        None => ViewState::open_all(data.route_ids()),
    };
    match &query.active {
        Some(active) if view.is_open(active) => view.select(active),
        _ => view,
    }
}

#[get("/api/health")]
async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

#[get("/api/routes")]
async fn routes(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(&state.data)
}

#[get("/api/scene")]
async fn scene(state: web::Data<AppState>, query: web::Query<SceneQuery>) -> impl Responder {
    let size = CanvasSize::new(query.width, query.height);
    match state.data.projector(size) {
        Ok(projector) => {
            let view = view_from_query(&state.data, &query);
            HttpResponse::Ok().json(Scene::build(&state.data, &projector, &view, &state.catalog, size))
        }
        Err(e) => HttpResponse::UnprocessableEntity().json(serde_json::json!({ "error": e.to_string() })),
    }
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Get port from environment or default to 8080
    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8080);
    let static_dir = env::var("STATIC_DIR").unwrap_or_else(|_| "./dist".to_string());

    let data = load_map().map_err(|e| {
        error!("{e}");
        io::Error::other(e)
    })?;
    let state = web::Data::new(AppState {
        data,
        catalog: RouteCatalog::highways(),
    });

    info!("Starting server on 0.0.0.0:{port}");

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(health)
            .service(routes)
            .service(scene)
            .service(Files::new("/", static_dir.clone()).index_file("index.html"))
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
