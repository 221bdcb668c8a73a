//! Single binary JSON API over in-memory competition snapshots.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default.
//! Override with env: HOST, PORT, COURTS (court count used when a move request omits it).

use actix_web::{
    get, post, put,
    web::{Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use league_standings::{
    add_group, move_team, ranked_standings, recalculate_group, record_result, Competition,
    CompetitionId, LeagueError, Match, MoveTeam, RoundRobin, ScheduleOptions,
};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

/// Per-competition entry: current snapshot + last activity time (for auto-cleanup).
struct CompetitionEntry {
    competition: Competition,
    last_activity: Instant,
}

/// In-memory state: competitions by id. Entries are removed after 12h inactivity.
type AppState = Data<RwLock<HashMap<CompetitionId, CompetitionEntry>>>;

/// Inactivity threshold: competitions not accessed for this long are removed.
const INACTIVITY_TIMEOUT: Duration = Duration::from_secs(12 * 3600);

/// Settings read from the environment at startup.
#[derive(Clone, Copy, Debug)]
struct Settings {
    default_courts: u32,
}

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct CreateCompetitionBody {
    name: String,
    #[serde(default)]
    groups: Vec<GroupBody>,
}

#[derive(Deserialize)]
struct GroupBody {
    name: String,
    #[serde(default)]
    teams: Vec<String>,
}

/// Scheduling only happens when start_time, match_duration_min and rest_min are all given.
#[derive(Deserialize)]
struct MoveTeamBody {
    team_id: String,
    source_group: String,
    target_group: String,
    court_count: Option<u32>,
    start_time: Option<String>,
    match_duration_min: Option<u32>,
    rest_min: Option<u32>,
}

impl MoveTeamBody {
    fn into_request(self, default_courts: u32) -> Result<MoveTeam, LeagueError> {
        let request = MoveTeam::new(
            self.team_id,
            self.source_group,
            self.target_group,
            self.court_count.unwrap_or(default_courts),
        );
        match (self.start_time, self.match_duration_min, self.rest_min) {
            (Some(start), Some(duration), Some(rest)) => {
                Ok(request.scheduled(ScheduleOptions::parse(&start, duration, rest)?))
            }
            _ => Ok(request),
        }
    }
}

/// Path segment: competition id (e.g. /api/competitions/{id})
#[derive(Deserialize)]
struct CompetitionPath {
    id: CompetitionId,
}

/// Path segments: competition id and group name (e.g. /api/competitions/{id}/groups/{group})
#[derive(Deserialize)]
struct CompetitionGroupPath {
    id: CompetitionId,
    group: String,
}

fn bad_request(e: LeagueError) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
}

fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({ "error": "No competition" }))
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "league-standings",
    })
}

/// Create a competition with its groups (returns it with id; client stores id for later requests).
#[post("/api/competitions")]
async fn api_create_competition(
    state: AppState,
    body: Json<CreateCompetitionBody>,
) -> HttpResponse {
    let body = body.into_inner();
    let mut competition = Competition::new(body.name.trim());
    for group in &body.groups {
        let teams = group.teams.as_slice();
        if let Err(e) = add_group(&mut competition, &group.name, teams, &RoundRobin) {
            return bad_request(e);
        }
    }
    let id = competition.id;
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = g.entry(id).or_insert(CompetitionEntry {
        competition,
        last_activity: Instant::now(),
    });
    HttpResponse::Ok().json(&entry.competition)
}

/// Get a competition by id (404 if not found). Touching it refreshes last_activity.
#[get("/api/competitions/{id}")]
async fn api_get_competition(state: AppState, path: Path<CompetitionPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.get_mut(&path.id) {
        Some(entry) => {
            entry.last_activity = Instant::now();
            HttpResponse::Ok().json(&entry.competition)
        }
        None => not_found(),
    }
}

/// Ranked table for one group.
#[get("/api/competitions/{id}/groups/{group}/standings")]
async fn api_group_standings(state: AppState, path: Path<CompetitionGroupPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return not_found(),
    };
    entry.last_activity = Instant::now();
    let group = match entry.competition.group(&path.group) {
        Some(group) => group,
        None => return bad_request(LeagueError::GroupNotFound(path.group.clone())),
    };
    match ranked_standings(group) {
        Ok(rows) => HttpResponse::Ok().json(rows),
        Err(e) => bad_request(e),
    }
}

/// Enter or correct one match result; the group's standings are rebuilt.
#[put("/api/competitions/{id}/groups/{group}/matches")]
async fn api_record_result(
    state: AppState,
    path: Path<CompetitionGroupPath>,
    body: Json<Match>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return not_found(),
    };
    entry.last_activity = Instant::now();
    match record_result(&entry.competition, &path.group, body.into_inner()) {
        Ok(next) => {
            entry.competition = next;
            HttpResponse::Ok().json(&entry.competition)
        }
        Err(e) => bad_request(e),
    }
}

/// Rebuild one group's standings from its matches.
#[post("/api/competitions/{id}/groups/{group}/recalculate")]
async fn api_recalculate_group(state: AppState, path: Path<CompetitionGroupPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return not_found(),
    };
    entry.last_activity = Instant::now();
    match recalculate_group(&entry.competition, &path.group) {
        Ok(next) => {
            entry.competition = next;
            HttpResponse::Ok().json(&entry.competition)
        }
        Err(e) => bad_request(e),
    }
}

/// Move a team between groups (both groups' results are voided and fixtures regenerated).
#[post("/api/competitions/{id}/moves")]
async fn api_move_team(
    state: AppState,
    settings: Data<Settings>,
    path: Path<CompetitionPath>,
    body: Json<MoveTeamBody>,
) -> HttpResponse {
    let request = match body.into_inner().into_request(settings.default_courts) {
        Ok(r) => r,
        Err(e) => return bad_request(e),
    };
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return not_found(),
    };
    entry.last_activity = Instant::now();
    match move_team(&entry.competition, &request, &RoundRobin) {
        Ok(next) => {
            entry.competition = next;
            HttpResponse::Ok().json(&entry.competition)
        }
        Err(e) => bad_request(e),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_courts() -> u32 {
    2
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let default_courts = std::env::var("COURTS")
        .ok()
        .and_then(|c| c.parse().ok())
        .filter(|&c: &u32| c >= 1)
        .unwrap_or_else(default_courts);
    let bind = (host.as_str(), port);
    log::info!(
        "Starting server at http://{}:{} ({} court(s) by default)",
        bind.0,
        bind.1,
        default_courts
    );

    let state = Data::new(RwLock::new(HashMap::<CompetitionId, CompetitionEntry>::new()));
    let settings = Data::new(Settings { default_courts });

    // Background task: every 30 minutes, remove competitions inactive for 12+ hours
    let state_cleanup = state.clone();
    actix_web::rt::spawn(async move {
        let mut interval = actix_web::rt::time::interval(Duration::from_secs(30 * 60));
        loop {
            interval.tick().await;
            let mut g = match state_cleanup.write() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            let before = g.len();
            g.retain(|_, entry| entry.last_activity.elapsed() < INACTIVITY_TIMEOUT);
            let removed = before - g.len();
            if removed > 0 {
                log::info!("Cleaned up {} inactive competition(s) (no activity for 12h)", removed);
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(settings.clone())
            .service(api_health)
            .service(api_create_competition)
            .service(api_get_competition)
            .service(api_group_standings)
            .service(api_record_result)
            .service(api_recalculate_group)
            .service(api_move_team)
    })
    .bind(bind)?
    .run()
    .await
}
