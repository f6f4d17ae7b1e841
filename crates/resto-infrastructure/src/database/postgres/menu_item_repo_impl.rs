// ============================================================================
// Resto Infrastructure - PostgreSQL Menu Item Repository
// File: crates/resto-infrastructure/src/database/postgres/menu_item_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use tracing::{error, info};
use uuid::Uuid;

use resto_core::domain::{Category, MenuItem, MenuItemWithCategory, NutritionalInfo};
use resto_core::error::DomainError;
use resto_core::repositories::MenuItemRepository;

pub struct PgMenuItemRepository {
    pool: PgPool,
}

impl PgMenuItemRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const ITEM_COLUMNS: &str = r#"
    id, name, description, price, image, category_id,
    is_vegetarian, is_spicy, is_popular, available,
    ingredients, nutritional_info, sort_order, created_at, updated_at
"#;

// Item columns plus the LEFT JOINed category, prefixed `c_`
const POPULATED_SELECT: &str = r#"
    SELECT
        m.id, m.name, m.description, m.price, m.image, m.category_id,
        m.is_vegetarian, m.is_spicy, m.is_popular, m.available,
        m.ingredients, m.nutritional_info, m.sort_order, m.created_at, m.updated_at,
        c.id AS c_id, c.name AS c_name, c.description AS c_description,
        c.sort_order AS c_sort_order, c.created_at AS c_created_at,
        c.updated_at AS c_updated_at
    FROM menu_items m
    LEFT JOIN categories c ON c.id = m.category_id
"#;

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct MenuItemRow {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image: String,
    pub category_id: Uuid,
    pub is_vegetarian: bool,
    pub is_spicy: bool,
    pub is_popular: bool,
    pub available: bool,
    pub ingredients: Vec<String>,
    pub nutritional_info: Option<Json<NutritionalInfo>>,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<MenuItemRow> for MenuItem {
    fn from(row: MenuItemRow) -> Self {
        MenuItem {
            id: row.id,
            name: row.name,
            description: row.description,
            price: row.price,
            image: row.image,
            category_id: row.category_id,
            is_vegetarian: row.is_vegetarian,
            is_spicy: row.is_spicy,
            is_popular: row.is_popular,
            available: row.available,
            ingredients: row.ingredients,
            nutritional_info: row.nutritional_info.map(|Json(info)| info),
            order: row.sort_order,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, FromRow)]
struct PopulatedRow {
    #[sqlx(flatten)]
    item: MenuItemRow,
    c_id: Option<Uuid>,
    c_name: Option<String>,
    c_description: Option<String>,
    c_sort_order: Option<i32>,
    c_created_at: Option<DateTime<Utc>>,
    c_updated_at: Option<DateTime<Utc>>,
}

impl From<PopulatedRow> for MenuItemWithCategory {
    fn from(row: PopulatedRow) -> Self {
        let category = match (row.c_id, row.c_name, row.c_created_at, row.c_updated_at) {
            (Some(id), Some(name), Some(created_at), Some(updated_at)) => Some(Category {
                id,
                name,
                description: row.c_description,
                order: row.c_sort_order.unwrap_or(0),
                created_at,
                updated_at,
            }),
            _ => None,
        };
        MenuItemWithCategory::new(row.item.into(), category)
    }
}

fn db_error(context: &str) -> impl Fn(sqlx::Error) -> DomainError + '_ {
    move |e| {
        error!("Database error {}: {}", context, e);
        DomainError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl MenuItemRepository for PgMenuItemRepository {
    async fn list(&self, category_id: Option<Uuid>) -> Result<Vec<MenuItemWithCategory>, DomainError> {
        let sql = format!(
            "{} WHERE ($1::uuid IS NULL OR m.category_id = $1) ORDER BY m.sort_order ASC, m.created_at ASC",
            POPULATED_SELECT
        );
        let rows: Vec<PopulatedRow> = sqlx::query_as(&sql)
            .bind(category_id)
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("listing menu items"))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<MenuItemWithCategory>, DomainError> {
        let sql = format!("{} WHERE m.id = $1", POPULATED_SELECT);
        let row: Option<PopulatedRow> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("finding menu item by id"))?;

        Ok(row.map(Into::into))
    }

    async fn create(&self, item: &MenuItem) -> Result<MenuItem, DomainError> {
        info!("Creating menu item: {}", item.name);

        let sql = format!(
            r#"
            INSERT INTO menu_items (
                id, name, description, price, image, category_id,
                is_vegetarian, is_spicy, is_popular, available,
                ingredients, nutritional_info, sort_order, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            RETURNING {}
            "#,
            ITEM_COLUMNS
        );
        let row: MenuItemRow = sqlx::query_as(&sql)
            .bind(item.id)
            .bind(&item.name)
            .bind(&item.description)
            .bind(item.price)
            .bind(&item.image)
            .bind(item.category_id)
            .bind(item.is_vegetarian)
            .bind(item.is_spicy)
            .bind(item.is_popular)
            .bind(item.available)
            .bind(&item.ingredients)
            .bind(item.nutritional_info.clone().map(Json))
            .bind(item.order)
            .bind(item.created_at)
            .bind(item.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(db_error("creating menu item"))?;

        Ok(row.into())
    }

    async fn update(&self, item: &MenuItem) -> Result<Option<MenuItem>, DomainError> {
        let sql = format!(
            r#"
            UPDATE menu_items
            SET name = $2, description = $3, price = $4, image = $5, category_id = $6,
                is_vegetarian = $7, is_spicy = $8, is_popular = $9, available = $10,
                ingredients = $11, nutritional_info = $12, sort_order = $13, updated_at = $14
            WHERE id = $1
            RETURNING {}
            "#,
            ITEM_COLUMNS
        );
        let row: Option<MenuItemRow> = sqlx::query_as(&sql)
            .bind(item.id)
            .bind(&item.name)
            .bind(&item.description)
            .bind(item.price)
            .bind(&item.image)
            .bind(item.category_id)
            .bind(item.is_vegetarian)
            .bind(item.is_spicy)
            .bind(item.is_popular)
            .bind(item.available)
            .bind(&item.ingredients)
            .bind(item.nutritional_info.clone().map(Json))
            .bind(item.order)
            .bind(item.updated_at)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("updating menu item"))?;

        Ok(row.map(Into::into))
    }

    async fn delete(&self, id: &Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM menu_items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_error("deleting menu item"))?;

        Ok(result.rows_affected() > 0)
    }

    async fn count_by_category(&self, category_id: &Uuid) -> Result<u64, DomainError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM menu_items WHERE category_id = $1")
            .bind(category_id)
            .fetch_one(&self.pool)
            .await
            .map_err(db_error("counting menu items by category"))?;

        Ok(count.max(0) as u64)
    }

    async fn delete_by_category(&self, category_id: &Uuid) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM menu_items WHERE category_id = $1")
            .bind(category_id)
            .execute(&self.pool)
            .await
            .map_err(db_error("deleting menu items by category"))?;

        info!("Deleted {} menu item(s) of category {}", result.rows_affected(), category_id);
        Ok(result.rows_affected())
    }
}
