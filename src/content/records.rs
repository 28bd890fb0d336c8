//! Simple list/lookup reads for companies, brands, certificates and banners.

use anyhow::Result;

use crate::content::models::{Banner, Brand, Certificate, Company, ContentRef};
use crate::util::db::Db;

const COMPANY_COLUMNS: &str = "id, name_en, name_ru, name_tk, mission_en, mission_ru, mission_tk, \
                               vision_en, vision_ru, vision_tk, phone, email, address_en, \
                               address_ru, address_tk, map_coordinates";

const BRAND_COLUMNS: &str = "id, name_en, name_ru, name_tk, subtitle_en, subtitle_ru, subtitle_tk, \
                             logo_image, description_en, description_ru, description_tk, slug, \
                             company_id";

const CERTIFICATE_COLUMNS: &str = "id, name_en, name_ru, name_tk, description_en, description_ru, \
                                   description_tk, image, slug, company_id";

const BANNER_COLUMNS: &str = "id, image, link, slug, title_en, title_ru, title_tk, \
                              description_en, description_ru, description_tk";

pub async fn companies(db: &Db) -> Result<Vec<Company>> {
    let rows =
        sqlx::query_as::<_, Company>(&format!("SELECT {COMPANY_COLUMNS} FROM company ORDER BY id"))
            .fetch_all(&db.pool)
            .await?;
    Ok(rows)
}

pub async fn company_by_id(db: &Db, id: i64) -> Result<Option<Company>> {
    let row =
        sqlx::query_as::<_, Company>(&format!("SELECT {COMPANY_COLUMNS} FROM company WHERE id = $1"))
            .bind(id)
            .fetch_optional(&db.pool)
            .await?;
    Ok(row)
}

pub async fn brands(db: &Db) -> Result<Vec<Brand>> {
    let rows = sqlx::query_as::<_, Brand>(&format!("SELECT {BRAND_COLUMNS} FROM brand ORDER BY id"))
        .fetch_all(&db.pool)
        .await?;
    Ok(rows)
}

pub async fn brand_by_ref(db: &Db, reference: &ContentRef) -> Result<Option<Brand>> {
    let row = match reference {
        ContentRef::Id(id) => {
            sqlx::query_as::<_, Brand>(&format!("SELECT {BRAND_COLUMNS} FROM brand WHERE id = $1"))
                .bind(id)
                .fetch_optional(&db.pool)
                .await?
        }
        ContentRef::Slug(slug) => {
            sqlx::query_as::<_, Brand>(&format!("SELECT {BRAND_COLUMNS} FROM brand WHERE slug = $1"))
                .bind(slug)
                .fetch_optional(&db.pool)
                .await?
        }
    };
    Ok(row)
}

pub async fn certificates(db: &Db) -> Result<Vec<Certificate>> {
    let rows = sqlx::query_as::<_, Certificate>(&format!(
        "SELECT {CERTIFICATE_COLUMNS} FROM certificate ORDER BY id"
    ))
    .fetch_all(&db.pool)
    .await?;
    Ok(rows)
}

pub async fn certificate_by_ref(db: &Db, reference: &ContentRef) -> Result<Option<Certificate>> {
    let row = match reference {
        ContentRef::Id(id) => {
            sqlx::query_as::<_, Certificate>(&format!(
                "SELECT {CERTIFICATE_COLUMNS} FROM certificate WHERE id = $1"
            ))
            .bind(id)
            .fetch_optional(&db.pool)
            .await?
        }
        ContentRef::Slug(slug) => {
            sqlx::query_as::<_, Certificate>(&format!(
                "SELECT {CERTIFICATE_COLUMNS} FROM certificate WHERE slug = $1"
            ))
            .bind(slug)
            .fetch_optional(&db.pool)
            .await?
        }
    };
    Ok(row)
}

pub async fn banners(db: &Db) -> Result<Vec<Banner>> {
    let rows =
        sqlx::query_as::<_, Banner>(&format!("SELECT {BANNER_COLUMNS} FROM banner ORDER BY id"))
            .fetch_all(&db.pool)
            .await?;
    Ok(rows)
}

pub async fn banner_by_ref(db: &Db, reference: &ContentRef) -> Result<Option<Banner>> {
    let row = match reference {
        ContentRef::Id(id) => {
            sqlx::query_as::<_, Banner>(&format!("SELECT {BANNER_COLUMNS} FROM banner WHERE id = $1"))
                .bind(id)
                .fetch_optional(&db.pool)
                .await?
        }
        ContentRef::Slug(slug) => {
            sqlx::query_as::<_, Banner>(&format!(
                "SELECT {BANNER_COLUMNS} FROM banner WHERE slug = $1"
            ))
            .bind(slug)
            .fetch_optional(&db.pool)
            .await?
        }
    };
    Ok(row)
}
