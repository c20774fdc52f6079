use sea_orm::*;
use std::collections::HashMap;
use uuid::Uuid;

use crate::db::{seasons as season_db, users as user_db};
use crate::models::champions::{self, HallOfFameEntry};

/// Write one podium row inside the season-conclusion transaction.
pub async fn insert_champion<C: ConnectionTrait>(
    conn: &C,
    season_id: Uuid,
    user_id: Uuid,
    position: i32,
    final_points: i32,
    photo_url: Option<String>,
) -> Result<champions::Model, DbErr> {
    let new_champion = champions::ActiveModel {
        id: Set(Uuid::new_v4()),
        season_id: Set(season_id),
        user_id: Set(user_id),
        position: Set(position),
        final_points: Set(final_points),
        photo_url: Set(photo_url),
        created_at: Set(chrono::Utc::now()),
    };

    new_champion.insert(conn).await
}

/// Whether a season already has its podium written.
pub async fn exists_for_season<C: ConnectionTrait>(
    conn: &C,
    season_id: Uuid,
) -> Result<bool, DbErr> {
    let count = champions::Entity::find()
        .filter(champions::Column::SeasonId.eq(season_id))
        .count(conn)
        .await?;
    Ok(count > 0)
}

/// The Hall of Fame: precomputed champion rows for finished seasons,
/// positions 1–3, assembled with their season and user in Rust.
pub async fn hall_of_fame(db: &DatabaseConnection) -> Result<Vec<HallOfFameEntry>, DbErr> {
    let seasons = season_db::get_finished_seasons(db).await?;
    if seasons.is_empty() {
        return Ok(Vec::new());
    }

    let season_ids: Vec<Uuid> = seasons.iter().map(|s| s.id).collect();
    let rows = champions::Entity::find()
        .filter(champions::Column::SeasonId.is_in(season_ids))
        .filter(champions::Column::Position.lte(3))
        .order_by_asc(champions::Column::Position)
        .all(db)
        .await?;

    let user_ids: Vec<Uuid> = rows.iter().map(|c| c.user_id).collect();
    let users: HashMap<Uuid, String> = user_db::get_users_by_ids(db, user_ids)
        .await?
        .into_iter()
        .filter_map(|u| u.display_name.map(|name| (u.id, name)))
        .collect();

    let season_index: HashMap<Uuid, &crate::models::seasons::Model> =
        seasons.iter().map(|s| (s.id, s)).collect();

    let mut entries = Vec::with_capacity(rows.len());
    for champion in rows {
        let Some(season) = season_index.get(&champion.season_id) else {
            continue;
        };
        entries.push(HallOfFameEntry {
            season_id: season.id,
            season_name: season.name.clone(),
            year: season.year,
            position: champion.position,
            user_id: champion.user_id,
            display_name: users.get(&champion.user_id).cloned(),
            final_points: champion.final_points,
            photo_url: champion.photo_url,
        });
    }

    // Newest season first, podium order within a season.
    entries.sort_by(|a, b| b.year.cmp(&a.year).then(a.position.cmp(&b.position)));
    Ok(entries)
}
