//! Category reads and hierarchy expansion.
//!
//! Categories nest one level deep: a record with `parent_category_id` set is
//! a child, one without is a root. Write-time validation lives in
//! [`crate::content::admin`]; the read side trusts the invariant.

use anyhow::Result;

use crate::content::models::{Category, ContentRef};
use crate::util::db::Db;

const COLUMNS: &str = "id, name_en, name_ru, name_tk, slug, description_en, description_ru, \
                       description_tk, image, parent_category_id";

pub async fn all(db: &Db) -> Result<Vec<Category>> {
    let rows = sqlx::query_as::<_, Category>(&format!(
        "SELECT {COLUMNS} FROM product_category ORDER BY id"
    ))
    .fetch_all(&db.pool)
    .await?;
    Ok(rows)
}

/// Root categories only (no parent).
pub async fn roots(db: &Db) -> Result<Vec<Category>> {
    let rows = sqlx::query_as::<_, Category>(&format!(
        "SELECT {COLUMNS} FROM product_category WHERE parent_category_id IS NULL ORDER BY id"
    ))
    .fetch_all(&db.pool)
    .await?;
    Ok(rows)
}

pub async fn by_ref(db: &Db, reference: &ContentRef) -> Result<Option<Category>> {
    let row = match reference {
        ContentRef::Id(id) => {
            sqlx::query_as::<_, Category>(&format!(
                "SELECT {COLUMNS} FROM product_category WHERE id = $1"
            ))
            .bind(id)
            .fetch_optional(&db.pool)
            .await?
        }
        ContentRef::Slug(slug) => {
            sqlx::query_as::<_, Category>(&format!(
                "SELECT {COLUMNS} FROM product_category WHERE slug = $1"
            ))
            .bind(slug)
            .fetch_optional(&db.pool)
            .await?
        }
    };
    Ok(row)
}

/// Effective category scope for catalog filtering: the resolved category id
/// plus the ids of its direct children. Grandchildren are never included.
/// An unresolvable reference yields None; callers translate that into an
/// empty result set rather than an error.
pub async fn expand(db: &Db, reference: &ContentRef) -> Result<Option<Vec<i64>>> {
    let Some(category) = by_ref(db, reference).await? else {
        return Ok(None);
    };
    let mut ids = vec![category.id];
    let children: Vec<i64> =
        sqlx::query_scalar("SELECT id FROM product_category WHERE parent_category_id = $1")
            .bind(category.id)
            .fetch_all(&db.pool)
            .await?;
    ids.extend(children);
    Ok(Some(ids))
}
