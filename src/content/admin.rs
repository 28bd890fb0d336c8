//! Internal admin service layer: typed create/replace/delete operations per
//! entity, called by whatever admin UI is built on top. No HTTP surface of
//! its own; records are edited with replace-whole-record semantics.

use thiserror::Error;

use crate::util::db::Db;

#[derive(Debug, Error)]
pub enum AdminError {
    #[error("{0} with id {1} not found")]
    NotFound(&'static str, i64),
    #[error("parent category {0} does not exist")]
    UnknownParent(i64),
    #[error("category parent assignment would create a cycle")]
    ParentCycle,
    #[error("categories may only nest one level deep")]
    TooDeep,
    #[error("record has dependent rows and cannot be deleted")]
    HasDependents,
    #[error(transparent)]
    Db(#[from] sqlx::Error),
}

#[derive(Debug, Clone, Default)]
pub struct CompanyInput {
    pub name_en: Option<String>,
    pub name_ru: Option<String>,
    pub name_tk: Option<String>,
    pub mission_en: Option<String>,
    pub mission_ru: Option<String>,
    pub mission_tk: Option<String>,
    pub vision_en: Option<String>,
    pub vision_ru: Option<String>,
    pub vision_tk: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address_en: Option<String>,
    pub address_ru: Option<String>,
    pub address_tk: Option<String>,
    pub map_coordinates: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CategoryInput {
    pub name_en: String,
    pub name_ru: String,
    pub name_tk: String,
    pub slug: String,
    pub description_en: Option<String>,
    pub description_ru: Option<String>,
    pub description_tk: Option<String>,
    pub image: Option<String>,
    pub parent_category_id: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct BrandInput {
    pub name_en: String,
    pub name_ru: String,
    pub name_tk: String,
    pub subtitle_en: Option<String>,
    pub subtitle_ru: Option<String>,
    pub subtitle_tk: Option<String>,
    pub logo_image: Option<String>,
    pub description_en: Option<String>,
    pub description_ru: Option<String>,
    pub description_tk: Option<String>,
    pub slug: String,
    pub company_id: i64,
}

#[derive(Debug, Clone)]
pub struct ProductInput {
    pub name_en: String,
    pub name_ru: String,
    pub name_tk: String,
    pub slug: String,
    pub description_en: Option<String>,
    pub description_ru: Option<String>,
    pub description_tk: Option<String>,
    pub volume_or_weight: Option<String>,
    pub image: Option<String>,
    pub additional_images: Vec<String>,
    pub packaging_details_en: Option<String>,
    pub packaging_details_ru: Option<String>,
    pub packaging_details_tk: Option<String>,
    pub category_id: i64,
    pub brand_id: i64,
}

#[derive(Debug, Clone)]
pub struct NewsInput {
    pub title_en: String,
    pub title_ru: String,
    pub title_tk: String,
    pub subtitle_en: Option<String>,
    pub subtitle_ru: Option<String>,
    pub subtitle_tk: Option<String>,
    pub slug: String,
    pub publication_date: Option<chrono::NaiveDate>,
    pub image: Option<String>,
    pub body_text_en: Option<String>,
    pub body_text_ru: Option<String>,
    pub body_text_tk: Option<String>,
    pub reading_minutes: i32,
    pub company_id: i64,
    pub product_ids: Vec<i64>,
    pub brand_ids: Vec<i64>,
}

#[derive(Debug, Clone)]
pub struct CertificateInput {
    pub name_en: Option<String>,
    pub name_ru: Option<String>,
    pub name_tk: Option<String>,
    pub description_en: Option<String>,
    pub description_ru: Option<String>,
    pub description_tk: Option<String>,
    pub image: Option<String>,
    pub slug: String,
    pub company_id: i64,
}

#[derive(Debug, Clone)]
pub struct BannerInput {
    pub image: Option<String>,
    pub link: Option<String>,
    pub slug: String,
    pub title_en: Option<String>,
    pub title_ru: Option<String>,
    pub title_tk: Option<String>,
    pub description_en: Option<String>,
    pub description_ru: Option<String>,
    pub description_tk: Option<String>,
}

/// Reject a parent assignment that points at a missing category, at the
/// category itself, or at a category that is itself a child. Nesting is
/// capped at two levels, which also keeps the relation acyclic: a valid
/// parent is always a root, so the only reachable cycle is self-parenting.
async fn validate_parent(db: &Db, self_id: Option<i64>, parent_id: i64) -> Result<(), AdminError> {
    if self_id == Some(parent_id) {
        return Err(AdminError::ParentCycle);
    }
    let parent_of: Option<Option<i64>> =
        sqlx::query_scalar("SELECT parent_category_id FROM product_category WHERE id = $1")
            .bind(parent_id)
            .fetch_optional(&db.pool)
            .await?;
    let Some(parent_of) = parent_of else {
        return Err(AdminError::UnknownParent(parent_id));
    };
    if parent_of.is_some() {
        return Err(AdminError::TooDeep);
    }
    Ok(())
}

fn map_delete_error(err: sqlx::Error) -> AdminError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
            AdminError::HasDependents
        }
        _ => AdminError::Db(err),
    }
}

fn ensure_affected(rows: u64, kind: &'static str, id: i64) -> Result<(), AdminError> {
    if rows == 0 {
        Err(AdminError::NotFound(kind, id))
    } else {
        Ok(())
    }
}

pub async fn create_company(db: &Db, input: CompanyInput) -> Result<i64, AdminError> {
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO company (name_en, name_ru, name_tk, mission_en, mission_ru, mission_tk, \
         vision_en, vision_ru, vision_tk, phone, email, address_en, address_ru, address_tk, \
         map_coordinates) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15) RETURNING id",
    )
    .bind(&input.name_en)
    .bind(&input.name_ru)
    .bind(&input.name_tk)
    .bind(&input.mission_en)
    .bind(&input.mission_ru)
    .bind(&input.mission_tk)
    .bind(&input.vision_en)
    .bind(&input.vision_ru)
    .bind(&input.vision_tk)
    .bind(&input.phone)
    .bind(&input.email)
    .bind(&input.address_en)
    .bind(&input.address_ru)
    .bind(&input.address_tk)
    .bind(&input.map_coordinates)
    .fetch_one(&db.pool)
    .await?;
    Ok(id)
}

pub async fn replace_company(db: &Db, id: i64, input: CompanyInput) -> Result<(), AdminError> {
    let result = sqlx::query(
        "UPDATE company SET name_en = $1, name_ru = $2, name_tk = $3, mission_en = $4, \
         mission_ru = $5, mission_tk = $6, vision_en = $7, vision_ru = $8, vision_tk = $9, \
         phone = $10, email = $11, address_en = $12, address_ru = $13, address_tk = $14, \
         map_coordinates = $15 WHERE id = $16",
    )
    .bind(&input.name_en)
    .bind(&input.name_ru)
    .bind(&input.name_tk)
    .bind(&input.mission_en)
    .bind(&input.mission_ru)
    .bind(&input.mission_tk)
    .bind(&input.vision_en)
    .bind(&input.vision_ru)
    .bind(&input.vision_tk)
    .bind(&input.phone)
    .bind(&input.email)
    .bind(&input.address_en)
    .bind(&input.address_ru)
    .bind(&input.address_tk)
    .bind(&input.map_coordinates)
    .bind(id)
    .execute(&db.pool)
    .await?;
    ensure_affected(result.rows_affected(), "Company", id)
}

pub async fn delete_company(db: &Db, id: i64) -> Result<(), AdminError> {
    let result = sqlx::query("DELETE FROM company WHERE id = $1")
        .bind(id)
        .execute(&db.pool)
        .await
        .map_err(map_delete_error)?;
    ensure_affected(result.rows_affected(), "Company", id)
}

pub async fn create_category(db: &Db, input: CategoryInput) -> Result<i64, AdminError> {
    if let Some(parent_id) = input.parent_category_id {
        validate_parent(db, None, parent_id).await?;
    }
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO product_category (name_en, name_ru, name_tk, slug, description_en, \
         description_ru, description_tk, image, parent_category_id) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) RETURNING id",
    )
    .bind(&input.name_en)
    .bind(&input.name_ru)
    .bind(&input.name_tk)
    .bind(&input.slug)
    .bind(&input.description_en)
    .bind(&input.description_ru)
    .bind(&input.description_tk)
    .bind(&input.image)
    .bind(input.parent_category_id)
    .fetch_one(&db.pool)
    .await?;
    Ok(id)
}

pub async fn replace_category(db: &Db, id: i64, input: CategoryInput) -> Result<(), AdminError> {
    if let Some(parent_id) = input.parent_category_id {
        validate_parent(db, Some(id), parent_id).await?;
    }
    let result = sqlx::query(
        "UPDATE product_category SET name_en = $1, name_ru = $2, name_tk = $3, slug = $4, \
         description_en = $5, description_ru = $6, description_tk = $7, image = $8, \
         parent_category_id = $9 WHERE id = $10",
    )
    .bind(&input.name_en)
    .bind(&input.name_ru)
    .bind(&input.name_tk)
    .bind(&input.slug)
    .bind(&input.description_en)
    .bind(&input.description_ru)
    .bind(&input.description_tk)
    .bind(&input.image)
    .bind(input.parent_category_id)
    .bind(id)
    .execute(&db.pool)
    .await?;
    ensure_affected(result.rows_affected(), "Category", id)
}

pub async fn delete_category(db: &Db, id: i64) -> Result<(), AdminError> {
    let result = sqlx::query("DELETE FROM product_category WHERE id = $1")
        .bind(id)
        .execute(&db.pool)
        .await
        .map_err(map_delete_error)?;
    ensure_affected(result.rows_affected(), "Category", id)
}

pub async fn create_brand(db: &Db, input: BrandInput) -> Result<i64, AdminError> {
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO brand (name_en, name_ru, name_tk, subtitle_en, subtitle_ru, subtitle_tk, \
         logo_image, description_en, description_ru, description_tk, slug, company_id) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12) RETURNING id",
    )
    .bind(&input.name_en)
    .bind(&input.name_ru)
    .bind(&input.name_tk)
    .bind(&input.subtitle_en)
    .bind(&input.subtitle_ru)
    .bind(&input.subtitle_tk)
    .bind(&input.logo_image)
    .bind(&input.description_en)
    .bind(&input.description_ru)
    .bind(&input.description_tk)
    .bind(&input.slug)
    .bind(input.company_id)
    .fetch_one(&db.pool)
    .await?;
    Ok(id)
}

pub async fn replace_brand(db: &Db, id: i64, input: BrandInput) -> Result<(), AdminError> {
    let result = sqlx::query(
        "UPDATE brand SET name_en = $1, name_ru = $2, name_tk = $3, subtitle_en = $4, \
         subtitle_ru = $5, subtitle_tk = $6, logo_image = $7, description_en = $8, \
         description_ru = $9, description_tk = $10, slug = $11, company_id = $12 WHERE id = $13",
    )
    .bind(&input.name_en)
    .bind(&input.name_ru)
    .bind(&input.name_tk)
    .bind(&input.subtitle_en)
    .bind(&input.subtitle_ru)
    .bind(&input.subtitle_tk)
    .bind(&input.logo_image)
    .bind(&input.description_en)
    .bind(&input.description_ru)
    .bind(&input.description_tk)
    .bind(&input.slug)
    .bind(input.company_id)
    .bind(id)
    .execute(&db.pool)
    .await?;
    ensure_affected(result.rows_affected(), "Brand", id)
}

pub async fn delete_brand(db: &Db, id: i64) -> Result<(), AdminError> {
    let result = sqlx::query("DELETE FROM brand WHERE id = $1")
        .bind(id)
        .execute(&db.pool)
        .await
        .map_err(map_delete_error)?;
    ensure_affected(result.rows_affected(), "Brand", id)
}

pub async fn create_product(db: &Db, input: ProductInput) -> Result<i64, AdminError> {
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO product (name_en, name_ru, name_tk, slug, description_en, description_ru, \
         description_tk, volume_or_weight, image, additional_images, packaging_details_en, \
         packaging_details_ru, packaging_details_tk, category_id, brand_id) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15) RETURNING id",
    )
    .bind(&input.name_en)
    .bind(&input.name_ru)
    .bind(&input.name_tk)
    .bind(&input.slug)
    .bind(&input.description_en)
    .bind(&input.description_ru)
    .bind(&input.description_tk)
    .bind(&input.volume_or_weight)
    .bind(&input.image)
    .bind(sqlx::types::Json(&input.additional_images))
    .bind(&input.packaging_details_en)
    .bind(&input.packaging_details_ru)
    .bind(&input.packaging_details_tk)
    .bind(input.category_id)
    .bind(input.brand_id)
    .fetch_one(&db.pool)
    .await?;
    Ok(id)
}

pub async fn replace_product(db: &Db, id: i64, input: ProductInput) -> Result<(), AdminError> {
    let result = sqlx::query(
        "UPDATE product SET name_en = $1, name_ru = $2, name_tk = $3, slug = $4, \
         description_en = $5, description_ru = $6, description_tk = $7, volume_or_weight = $8, \
         image = $9, additional_images = $10, packaging_details_en = $11, \
         packaging_details_ru = $12, packaging_details_tk = $13, category_id = $14, \
         brand_id = $15 WHERE id = $16",
    )
    .bind(&input.name_en)
    .bind(&input.name_ru)
    .bind(&input.name_tk)
    .bind(&input.slug)
    .bind(&input.description_en)
    .bind(&input.description_ru)
    .bind(&input.description_tk)
    .bind(&input.volume_or_weight)
    .bind(&input.image)
    .bind(sqlx::types::Json(&input.additional_images))
    .bind(&input.packaging_details_en)
    .bind(&input.packaging_details_ru)
    .bind(&input.packaging_details_tk)
    .bind(input.category_id)
    .bind(input.brand_id)
    .bind(id)
    .execute(&db.pool)
    .await?;
    ensure_affected(result.rows_affected(), "Product", id)
}

pub async fn delete_product(db: &Db, id: i64) -> Result<(), AdminError> {
    let result = sqlx::query("DELETE FROM product WHERE id = $1")
        .bind(id)
        .execute(&db.pool)
        .await
        .map_err(map_delete_error)?;
    ensure_affected(result.rows_affected(), "Product", id)
}

/// News writes replace the record and its association rows in one
/// transaction so a failed link insert rolls the whole edit back.
pub async fn create_news(db: &Db, input: NewsInput) -> Result<i64, AdminError> {
    let mut tx = db.pool.begin().await?;
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO news (title_en, title_ru, title_tk, subtitle_en, subtitle_ru, subtitle_tk, \
         slug, publication_date, image, body_text_en, body_text_ru, body_text_tk, \
         reading_minutes, company_id) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, COALESCE($8, CURRENT_DATE), $9, $10, $11, $12, $13, \
         $14) RETURNING id",
    )
    .bind(&input.title_en)
    .bind(&input.title_ru)
    .bind(&input.title_tk)
    .bind(&input.subtitle_en)
    .bind(&input.subtitle_ru)
    .bind(&input.subtitle_tk)
    .bind(&input.slug)
    .bind(input.publication_date)
    .bind(&input.image)
    .bind(&input.body_text_en)
    .bind(&input.body_text_ru)
    .bind(&input.body_text_tk)
    .bind(input.reading_minutes)
    .bind(input.company_id)
    .fetch_one(&mut *tx)
    .await?;
    insert_news_links(&mut tx, id, &input.product_ids, &input.brand_ids).await?;
    tx.commit().await?;
    Ok(id)
}

pub async fn replace_news(db: &Db, id: i64, input: NewsInput) -> Result<(), AdminError> {
    let mut tx = db.pool.begin().await?;
    let result = sqlx::query(
        "UPDATE news SET title_en = $1, title_ru = $2, title_tk = $3, subtitle_en = $4, \
         subtitle_ru = $5, subtitle_tk = $6, slug = $7, \
         publication_date = COALESCE($8, publication_date), image = $9, body_text_en = $10, \
         body_text_ru = $11, body_text_tk = $12, reading_minutes = $13, company_id = $14 \
         WHERE id = $15",
    )
    .bind(&input.title_en)
    .bind(&input.title_ru)
    .bind(&input.title_tk)
    .bind(&input.subtitle_en)
    .bind(&input.subtitle_ru)
    .bind(&input.subtitle_tk)
    .bind(&input.slug)
    .bind(input.publication_date)
    .bind(&input.image)
    .bind(&input.body_text_en)
    .bind(&input.body_text_ru)
    .bind(&input.body_text_tk)
    .bind(input.reading_minutes)
    .bind(input.company_id)
    .bind(id)
    .execute(&mut *tx)
    .await?;
    ensure_affected(result.rows_affected(), "News", id)?;

    sqlx::query("DELETE FROM news_products WHERE news_id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    sqlx::query("DELETE FROM news_brands WHERE news_id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    insert_news_links(&mut tx, id, &input.product_ids, &input.brand_ids).await?;
    tx.commit().await?;
    Ok(())
}

pub async fn delete_news(db: &Db, id: i64) -> Result<(), AdminError> {
    // Association rows cascade with the news record.
    let result = sqlx::query("DELETE FROM news WHERE id = $1")
        .bind(id)
        .execute(&db.pool)
        .await
        .map_err(map_delete_error)?;
    ensure_affected(result.rows_affected(), "News", id)
}

async fn insert_news_links(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    news_id: i64,
    product_ids: &[i64],
    brand_ids: &[i64],
) -> Result<(), AdminError> {
    for product_id in product_ids {
        sqlx::query(
            "INSERT INTO news_products (news_id, product_id) VALUES ($1, $2) ON CONFLICT DO NOTHING",
        )
        .bind(news_id)
        .bind(product_id)
        .execute(&mut **tx)
        .await?;
    }
    for brand_id in brand_ids {
        sqlx::query(
            "INSERT INTO news_brands (news_id, brand_id) VALUES ($1, $2) ON CONFLICT DO NOTHING",
        )
        .bind(news_id)
        .bind(brand_id)
        .execute(&mut **tx)
        .await?;
    }
    Ok(())
}

pub async fn create_certificate(db: &Db, input: CertificateInput) -> Result<i64, AdminError> {
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO certificate (name_en, name_ru, name_tk, description_en, description_ru, \
         description_tk, image, slug, company_id) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) RETURNING id",
    )
    .bind(&input.name_en)
    .bind(&input.name_ru)
    .bind(&input.name_tk)
    .bind(&input.description_en)
    .bind(&input.description_ru)
    .bind(&input.description_tk)
    .bind(&input.image)
    .bind(&input.slug)
    .bind(input.company_id)
    .fetch_one(&db.pool)
    .await?;
    Ok(id)
}

pub async fn replace_certificate(
    db: &Db,
    id: i64,
    input: CertificateInput,
) -> Result<(), AdminError> {
    let result = sqlx::query(
        "UPDATE certificate SET name_en = $1, name_ru = $2, name_tk = $3, description_en = $4, \
         description_ru = $5, description_tk = $6, image = $7, slug = $8, company_id = $9 \
         WHERE id = $10",
    )
    .bind(&input.name_en)
    .bind(&input.name_ru)
    .bind(&input.name_tk)
    .bind(&input.description_en)
    .bind(&input.description_ru)
    .bind(&input.description_tk)
    .bind(&input.image)
    .bind(&input.slug)
    .bind(input.company_id)
    .bind(id)
    .execute(&db.pool)
    .await?;
    ensure_affected(result.rows_affected(), "Certificate", id)
}

pub async fn delete_certificate(db: &Db, id: i64) -> Result<(), AdminError> {
    let result = sqlx::query("DELETE FROM certificate WHERE id = $1")
        .bind(id)
        .execute(&db.pool)
        .await
        .map_err(map_delete_error)?;
    ensure_affected(result.rows_affected(), "Certificate", id)
}

pub async fn create_banner(db: &Db, input: BannerInput) -> Result<i64, AdminError> {
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO banner (image, link, slug, title_en, title_ru, title_tk, description_en, \
         description_ru, description_tk) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) RETURNING id",
    )
    .bind(&input.image)
    .bind(&input.link)
    .bind(&input.slug)
    .bind(&input.title_en)
    .bind(&input.title_ru)
    .bind(&input.title_tk)
    .bind(&input.description_en)
    .bind(&input.description_ru)
    .bind(&input.description_tk)
    .fetch_one(&db.pool)
    .await?;
    Ok(id)
}

pub async fn replace_banner(db: &Db, id: i64, input: BannerInput) -> Result<(), AdminError> {
    let result = sqlx::query(
        "UPDATE banner SET image = $1, link = $2, slug = $3, title_en = $4, title_ru = $5, \
         title_tk = $6, description_en = $7, description_ru = $8, description_tk = $9 \
         WHERE id = $10",
    )
    .bind(&input.image)
    .bind(&input.link)
    .bind(&input.slug)
    .bind(&input.title_en)
    .bind(&input.title_ru)
    .bind(&input.title_tk)
    .bind(&input.description_en)
    .bind(&input.description_ru)
    .bind(&input.description_tk)
    .bind(id)
    .execute(&db.pool)
    .await?;
    ensure_affected(result.rows_affected(), "Banner", id)
}

pub async fn delete_banner(db: &Db, id: i64) -> Result<(), AdminError> {
    let result = sqlx::query("DELETE FROM banner WHERE id = $1")
        .bind(id)
        .execute(&db.pool)
        .await
        .map_err(map_delete_error)?;
    ensure_affected(result.rows_affected(), "Banner", id)
}

/// Intake records are write-once through the public API; the admin layer is
/// the only place they can be removed from.
pub async fn delete_contact_message(db: &Db, id: i64) -> Result<(), AdminError> {
    let result = sqlx::query("DELETE FROM contact_message WHERE id = $1")
        .bind(id)
        .execute(&db.pool)
        .await?;
    ensure_affected(result.rows_affected(), "ContactMessage", id)
}

pub async fn delete_subscriber(db: &Db, id: i64) -> Result<(), AdminError> {
    let result = sqlx::query("DELETE FROM newsletter_subscriber WHERE id = $1")
        .bind(id)
        .execute(&db.pool)
        .await?;
    ensure_affected(result.rows_affected(), "NewsletterSubscriber", id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_rows_map_to_not_found() {
        assert!(matches!(
            ensure_affected(0, "Product", 12),
            Err(AdminError::NotFound("Product", 12))
        ));
        assert!(ensure_affected(1, "Product", 12).is_ok());
    }

    #[test]
    fn error_messages_name_the_violation() {
        assert_eq!(
            AdminError::UnknownParent(9).to_string(),
            "parent category 9 does not exist"
        );
        assert_eq!(
            AdminError::TooDeep.to_string(),
            "categories may only nest one level deep"
        );
    }
}
