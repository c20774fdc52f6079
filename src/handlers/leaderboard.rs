use actix_web::{HttpResponse, Responder, web};
use sea_orm::DatabaseConnection;
use std::collections::HashMap;
use uuid::Uuid;

use crate::cache::{CacheConfig, CacheData, keys};
use crate::db::applications as application_db;
use crate::db::champions as champion_db;
use crate::db::performances as performance_db;
use crate::db::users as user_db;
use crate::models::champions::HallOfFameEntry;
use crate::rules::leaderboard::{LeaderboardEntry, Participant, ScoredPerformance, rank};

/// GET /api/seasons/{id}/leaderboard — ranked, non-eliminated, approved
/// applicants with total points and stages completed. Served read-through
/// from Redis; a fetch failure returns 500 and an empty cache slot untouched.
pub async fn get_leaderboard(
    db: web::Data<DatabaseConnection>,
    cache: web::Data<CacheData>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let season_id = path.into_inner();
    let cache_key = keys::leaderboard(season_id);

    if let Ok(Some(cached)) = cache.get::<Vec<LeaderboardEntry>>(&cache_key).await {
        return HttpResponse::Ok().json(cached);
    }

    let entries = match compute_leaderboard(db.get_ref(), season_id).await {
        Ok(entries) => entries,
        Err(e) => {
            tracing::error!("Leaderboard fetch failed for season {season_id}: {e}");
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
    };

    let ttl = CacheConfig::from_env().leaderboard_ttl;
    if let Err(e) = cache.set(&cache_key, &entries, ttl).await {
        tracing::warn!("Failed to cache leaderboard for season {season_id}: {e}");
    }

    HttpResponse::Ok().json(entries)
}

/// GET /api/hall-of-fame — precomputed champion rows for finished seasons,
/// positions 1–3 only; never recomputed from performances.
pub async fn get_hall_of_fame(
    db: web::Data<DatabaseConnection>,
    cache: web::Data<CacheData>,
) -> impl Responder {
    let cache_key = keys::hall_of_fame();

    if let Ok(Some(cached)) = cache.get::<Vec<HallOfFameEntry>>(&cache_key).await {
        return HttpResponse::Ok().json(cached);
    }

    let entries = match champion_db::hall_of_fame(db.get_ref()).await {
        Ok(entries) => entries,
        Err(e) => {
            tracing::error!("Hall of Fame fetch failed: {e}");
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
    };

    let ttl = CacheConfig::from_env().hall_of_fame_ttl;
    if let Err(e) = cache.set(&cache_key, &entries, ttl).await {
        tracing::warn!("Failed to cache Hall of Fame: {e}");
    }

    HttpResponse::Ok().json(entries)
}

async fn compute_leaderboard(
    db: &DatabaseConnection,
    season_id: Uuid,
) -> Result<Vec<LeaderboardEntry>, sea_orm::DbErr> {
    let applications = application_db::approved_active_by_season(db, season_id).await?;
    let application_ids: Vec<Uuid> = applications.iter().map(|a| a.id).collect();
    let performances = performance_db::completed_for_applications(db, application_ids).await?;

    let user_ids: Vec<Uuid> = applications.iter().map(|a| a.user_id).collect();
    let display_names: HashMap<Uuid, Option<String>> = user_db::get_users_by_ids(db, user_ids)
        .await?
        .into_iter()
        .map(|u| (u.id, u.display_name))
        .collect();

    let participants: Vec<Participant> = applications
        .iter()
        .map(|a| Participant {
            application_id: a.id,
            user_id: a.user_id,
            display_name: display_names.get(&a.user_id).cloned().flatten(),
        })
        .collect();
    let scored: Vec<ScoredPerformance> = performances
        .iter()
        .map(|p| ScoredPerformance {
            application_id: p.application_id,
            points: p.points,
        })
        .collect();

    Ok(rank(&participants, &scored))
}
