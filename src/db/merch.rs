use sea_orm::*;
use uuid::Uuid;

use crate::models::merch::{self, CreateMerchItem, UpdateMerchItem};

/// Insert a new catalogue item.
pub async fn insert_item(
    db: &DatabaseConnection,
    input: CreateMerchItem,
) -> Result<merch::Model, DbErr> {
    let new_item = merch::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(input.name),
        description: Set(input.description),
        price_cents: Set(input.price_cents),
        image_url: Set(input.image_url),
        in_stock: Set(input.in_stock),
        created_at: Set(chrono::Utc::now()),
        updated_at: Set(None),
    };

    new_item.insert(db).await
}

/// Fetch the whole catalogue.
pub async fn get_all_items(db: &DatabaseConnection) -> Result<Vec<merch::Model>, DbErr> {
    merch::Entity::find()
        .order_by_asc(merch::Column::Name)
        .all(db)
        .await
}

/// Update an existing item.
pub async fn update_item(
    db: &DatabaseConnection,
    id: Uuid,
    input: UpdateMerchItem,
) -> Result<merch::Model, DbErr> {
    let item = merch::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(DbErr::RecordNotFound("Merch item not found".to_string()))?;

    let mut active: merch::ActiveModel = item.into();

    if let Some(name) = input.name {
        active.name = Set(name);
    }
    if let Some(description) = input.description {
        active.description = Set(description);
    }
    if let Some(price_cents) = input.price_cents {
        active.price_cents = Set(price_cents);
    }
    if let Some(image_url) = input.image_url {
        active.image_url = Set(Some(image_url));
    }
    if let Some(in_stock) = input.in_stock {
        active.in_stock = Set(in_stock);
    }
    active.updated_at = Set(Some(chrono::Utc::now()));

    active.update(db).await
}

/// Delete an item by ID.
pub async fn delete_item(db: &DatabaseConnection, id: Uuid) -> Result<DeleteResult, DbErr> {
    merch::Entity::delete_by_id(id).exec(db).await
}
