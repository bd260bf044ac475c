//! Single binary web server: dashboard page from templates/, static from /static, API via REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. See `ServerConfig` for the env overrides.

use actix_files::Files;
use actix_session::{storage::CookieSessionStore, Session, SessionMiddleware};
use actix_web::{
    cookie::Key,
    delete, error, get, put,
    web::{self, Data, Json, Path, Query},
    App, HttpRequest, HttpResponse, HttpServer, Responder,
};
use club_dashboard_web::{
    data, AssignPolicy, ClubStats, PlayerId, PlayerRepository, PositionFilter, SeasonRecord,
    Section, ServerConfig, SlotAssignmentModel, SquadTotals, StartingLineup,
};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Cookie-session key holding this browser's board id.
const BOARD_KEY: &str = "board_id";
/// Cookie-session key holding the active header section.
const SECTION_KEY: &str = "section";

/// Per-session entry: formation board + last activity time (for auto-cleanup).
struct BoardEntry {
    model: SlotAssignmentModel,
    last_activity: Instant,
}

/// In-memory formation boards by session board id. Dropped after the idle timeout.
type Boards = Data<RwLock<HashMap<Uuid, BoardEntry>>>;

/// Read-only data shared by all sessions.
struct Club {
    roster: Arc<PlayerRepository>,
    record: SeasonRecord,
    stats: ClubStats,
    policy: AssignPolicy,
}

type ClubData = Data<Club>;

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct PlayersQuery {
    position: Option<String>,
}

#[derive(Deserialize)]
struct AssignBody {
    player_id: PlayerId,
}

#[derive(Deserialize)]
struct SectionBody {
    section: String,
}

/// Path segment: slot id (e.g. /api/formation/slots/{slot_id})
#[derive(Deserialize)]
struct SlotPath {
    slot_id: String,
}

/// Path segment: player id (e.g. /api/players/{id})
#[derive(Deserialize)]
struct PlayerPath {
    id: PlayerId,
}

fn error_json(message: impl std::fmt::Display) -> serde_json::Value {
    serde_json::json!({ "error": message.to_string() })
}

/// Malformed JSON bodies: 400 with an `{"error": ..}` body instead of actix's plain text.
fn json_body_error(err: error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let resp = HttpResponse::BadRequest().json(error_json(&err));
    error::InternalError::from_response(err, resp).into()
}

/// Unparseable path segments (e.g. a non-numeric player id): 404, JSON body.
fn path_error(err: error::PathError, _req: &HttpRequest) -> actix_web::Error {
    let resp = HttpResponse::NotFound().json(error_json(&err));
    error::InternalError::from_response(err, resp).into()
}

fn query_error(err: error::QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let resp = HttpResponse::BadRequest().json(error_json(&err));
    error::InternalError::from_response(err, resp).into()
}

/// Board id already stored in this session, if any. Never creates one.
fn existing_board_id(session: &Session) -> Option<Uuid> {
    session.get::<Uuid>(BOARD_KEY).ok().flatten()
}

/// Board id for this session, creating and storing a new one on first edit.
fn session_board_id(session: &Session) -> Result<Uuid, HttpResponse> {
    match session.get::<Uuid>(BOARD_KEY) {
        Ok(Some(id)) => return Ok(id),
        Ok(None) => {}
        Err(e) => log::warn!("Unreadable session, starting a new board: {}", e),
    }
    let id = Uuid::new_v4();
    session
        .insert(BOARD_KEY, id)
        .map_err(|e| HttpResponse::InternalServerError().json(error_json(e)))?;
    Ok(id)
}

/// Run `f` against this session's board under the write lock, creating the board
/// (default formation) if it does not exist or was cleaned up. Only edits call this.
fn with_board<R>(
    boards: &Boards,
    club: &Club,
    session: &Session,
    f: impl FnOnce(&mut SlotAssignmentModel) -> R,
) -> Result<R, HttpResponse> {
    let id = session_board_id(session)?;
    let mut g = boards
        .write()
        .map_err(|_| HttpResponse::InternalServerError().json(error_json("lock error")))?;
    let entry = g.entry(id).or_insert_with(|| {
        log::info!("New formation board {}", id);
        BoardEntry {
            model: SlotAssignmentModel::new(club.roster.clone(), club.policy),
            last_activity: Instant::now(),
        }
    });
    entry.last_activity = Instant::now();
    Ok(f(&mut entry.model))
}

fn active_section(session: &Session) -> Section {
    session.get::<Section>(SECTION_KEY).ok().flatten().unwrap_or_default()
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "club-dashboard-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Season record and squad aggregates for the overview cards.
#[get("/api/club/overview")]
async fn api_club_overview(club: ClubData) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "record": &club.record,
        "matches_played": club.record.matches_played(),
        "points": club.record.points(),
        "goal_difference": club.record.goal_difference(),
        "squad": SquadTotals::from_roster(&club.roster),
    }))
}

/// Chart series for the club stats section.
#[get("/api/club/stats")]
async fn api_club_stats(club: ClubData) -> HttpResponse {
    HttpResponse::Ok().json(&club.stats)
}

/// Squad grid, optionally filtered by ?position=ALL|GK|DEF|MID|FWD.
#[get("/api/players")]
async fn api_players(club: ClubData, query: Query<PlayersQuery>) -> HttpResponse {
    let filter = match query.position.as_deref() {
        None => PositionFilter::All,
        Some(raw) => match raw.parse::<PositionFilter>() {
            Ok(f) => f,
            Err(e) => return HttpResponse::BadRequest().json(error_json(e)),
        },
    };
    let tabs: Vec<_> = PositionFilter::tabs()
        .into_iter()
        .map(|t| serde_json::json!({ "id": t.to_string(), "label": t.label(), "active": t == filter }))
        .collect();
    HttpResponse::Ok().json(serde_json::json!({
        "filter": filter.to_string(),
        "label": filter.label(),
        "season": &club.record.season,
        "tabs": tabs,
        "players": club.roster.filter(filter),
    }))
}

/// One player by id (404 if not in the roster).
#[get("/api/players/{id}")]
async fn api_player(club: ClubData, path: Path<PlayerPath>) -> HttpResponse {
    match club.roster.by_id(path.id) {
        Some(p) => HttpResponse::Ok().json(p),
        None => HttpResponse::NotFound().json(error_json("No such player")),
    }
}

#[get("/api/starting-xi")]
async fn api_starting_xi(club: ClubData) -> HttpResponse {
    let lineup = StartingLineup::from_roster(&club.roster);
    HttpResponse::Ok().json(serde_json::json!({
        "count": lineup.len(),
        "formation": "4-3-3",
        "lines": lineup.lines(),
    }))
}

/// This session's formation board. Sessions that have not edited yet get the
/// default formation without a board being stored for them.
#[get("/api/formation")]
async fn api_formation(boards: Boards, club: ClubData, session: Session) -> HttpResponse {
    let mut g = match boards.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().json(error_json("lock error")),
    };
    let stored = match existing_board_id(&session) {
        Some(id) => g.get_mut(&id),
        None => None,
    };
    let snapshot = match stored {
        Some(entry) => {
            entry.last_activity = Instant::now();
            entry.model.snapshot()
        }
        None => SlotAssignmentModel::new(club.roster.clone(), club.policy).snapshot(),
    };
    HttpResponse::Ok().json(snapshot)
}

/// Drop a player onto a slot. Unknown player or slot leaves the board unchanged (applied: false).
#[put("/api/formation/slots/{slot_id}")]
async fn api_assign_slot(
    boards: Boards,
    club: ClubData,
    session: Session,
    path: Path<SlotPath>,
    body: Json<AssignBody>,
) -> HttpResponse {
    let result = with_board(&boards, &club, &session, |m| {
        let applied = m.assign(body.player_id, &path.slot_id);
        if applied {
            log::debug!("Assigned player {} to slot '{}'", body.player_id, path.slot_id);
        }
        (applied, m.snapshot())
    });
    match result {
        Ok((applied, formation)) => {
            HttpResponse::Ok().json(serde_json::json!({ "applied": applied, "formation": formation }))
        }
        Err(resp) => resp,
    }
}

/// Clear a slot (idempotent).
#[delete("/api/formation/slots/{slot_id}")]
async fn api_unassign_slot(
    boards: Boards,
    club: ClubData,
    session: Session,
    path: Path<SlotPath>,
) -> HttpResponse {
    let result = with_board(&boards, &club, &session, |m| {
        let applied = m.unassign(&path.slot_id);
        (applied, m.snapshot())
    });
    match result {
        Ok((applied, formation)) => {
            HttpResponse::Ok().json(serde_json::json!({ "applied": applied, "formation": formation }))
        }
        Err(resp) => resp,
    }
}

/// Header items with the session's active section.
#[get("/api/sections")]
async fn api_sections(session: Session) -> HttpResponse {
    let active = active_section(&session);
    HttpResponse::Ok().json(serde_json::json!({
        "active": active,
        "items": active.nav_items(),
    }))
}

/// Switch the active header section for this session.
#[put("/api/sections/active")]
async fn api_set_section(session: Session, body: Json<SectionBody>) -> HttpResponse {
    let section = match body.section.parse::<Section>() {
        Ok(s) => s,
        Err(e) => return HttpResponse::BadRequest().json(error_json(e)),
    };
    if let Err(e) = session.insert(SECTION_KEY, section) {
        return HttpResponse::InternalServerError().json(error_json(e));
    }
    HttpResponse::Ok().json(serde_json::json!({
        "active": section,
        "items": section.nav_items(),
    }))
}

/// API routes plus the JSON error handlers for extractor failures.
fn routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_body_error))
        .app_data(web::PathConfig::default().error_handler(path_error))
        .app_data(web::QueryConfig::default().error_handler(query_error))
        .route("/", web::get().to(serve_index_async))
        .service(api_health)
        .service(favicon)
        .service(api_club_overview)
        .service(api_club_stats)
        .service(api_players)
        .service(api_player)
        .service(api_starting_xi)
        .service(api_formation)
        .service(api_assign_slot)
        .service(api_unassign_slot)
        .service(api_sections)
        .service(api_set_section);
}

fn session_middleware(key: Key, cookie_secure: bool) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_secure(cookie_secure)
        .build()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServerConfig::from_env();
    let roster = match &config.roster_csv {
        Some(path) => PlayerRepository::from_csv_path(path)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?,
        None => PlayerRepository::sample(),
    };
    log::info!(
        "Loaded {} players; assign policy: {}",
        roster.len(),
        config.assign_policy
    );

    let club = Data::new(Club {
        roster: Arc::new(roster),
        record: data::sample_season_record(),
        stats: data::sample_club_stats(),
        policy: config.assign_policy,
    });
    let boards: Boards = Data::new(RwLock::new(HashMap::new()));

    // Background task: every 30 minutes, drop boards idle past the timeout
    let boards_cleanup = boards.clone();
    let idle_timeout = config.board_idle_timeout;
    actix_web::rt::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(30 * 60));
        loop {
            interval.tick().await;
            let mut g = match boards_cleanup.write() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            let before = g.len();
            g.retain(|_, entry| entry.last_activity.elapsed() < idle_timeout);
            let removed = before - g.len();
            if removed > 0 {
                log::info!("Cleaned up {} idle formation board(s)", removed);
            }
        }
    });

    let key = Key::generate();
    let cookie_secure = config.cookie_secure;
    log::info!("Starting server at http://{}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(session_middleware(key.clone(), cookie_secure))
            .app_data(boards.clone())
            .app_data(club.clone())
            .configure(routes)
            .service(Files::new("/static", "static"))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}

async fn serve_index_async() -> HttpResponse {
    let html = include_str!("../../templates/index.html");
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}
