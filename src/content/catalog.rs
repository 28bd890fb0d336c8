//! Catalog query engine: filtered, paginated product and news result sets.
//!
//! Each query runs a count plus a bounded fetch against the store; category
//! references are expanded to the category-and-direct-children id set before
//! filtering, and text search is a literal case-insensitive substring match
//! across all three language variants of the name and description columns.

use anyhow::Result;
use sqlx::{Postgres, QueryBuilder};

use crate::content::categories;
use crate::content::models::{ContentRef, News, Product};
use crate::content::records;
use crate::util::db::Db;

const PRODUCT_COLUMNS: &str = "id, name_en, name_ru, name_tk, slug, description_en, \
                               description_ru, description_tk, volume_or_weight, image, \
                               additional_images, packaging_details_en, packaging_details_ru, \
                               packaging_details_tk, category_id, brand_id";

const NEWS_COLUMNS: &str = "id, title_en, title_ru, title_tk, subtitle_en, subtitle_ru, \
                            subtitle_tk, slug, publication_date, image, body_text_en, \
                            body_text_ru, body_text_tk, reading_minutes, company_id";

/// Page/limit pair as received from the caller. Values below 1 are clamped
/// rather than rejected; non-numeric input never reaches this type.
#[derive(Debug, Clone, Copy)]
pub struct PageParams {
    pub page: i64,
    pub limit: i64,
}

impl PageParams {
    pub fn new(page: i64, limit: i64) -> Self {
        Self {
            page: page.max(1),
            limit: limit.max(1),
        }
    }

    pub fn offset(self) -> i64 {
        (self.page - 1) * self.limit
    }
}

/// One page of results plus the pagination metadata the API exposes.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: i64,
    pub current_page: i64,
    pub last_page: i64,
}

impl<T> Page<T> {
    fn empty(params: PageParams) -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            current_page: params.page,
            last_page: 1,
        }
    }
}

/// ceil(total / limit), never below 1 even for an empty result set.
pub fn last_page(total: i64, limit: i64) -> i64 {
    ((total + limit - 1) / limit).max(1)
}

#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    /// Numeric category filter; takes precedence over `category_slug`.
    pub category_id: Option<i64>,
    pub category_slug: Option<String>,
    pub brand: Option<ContentRef>,
    pub search: Option<String>,
}

/// Resolved filter state actually bound into SQL.
struct ProductScope {
    category_ids: Option<Vec<i64>>,
    brand_id: Option<i64>,
    pattern: Option<String>,
}

impl ProductScope {
    /// Resolve refs against the store. None means a filter referenced a
    /// record that does not exist, which is a valid "no matches" outcome.
    async fn resolve(db: &Db, filter: &ProductFilter) -> Result<Option<Self>> {
        let category_ref = match (filter.category_id, filter.category_slug.as_deref()) {
            (Some(id), _) => Some(ContentRef::Id(id)),
            (None, Some(slug)) => Some(ContentRef::Slug(slug.to_string())),
            (None, None) => None,
        };
        let category_ids = match category_ref {
            Some(reference) => match categories::expand(db, &reference).await? {
                Some(ids) => Some(ids),
                None => return Ok(None),
            },
            None => None,
        };

        let brand_id = match &filter.brand {
            Some(reference) => match records::brand_by_ref(db, reference).await? {
                Some(brand) => Some(brand.id),
                None => return Ok(None),
            },
            None => None,
        };

        let pattern = filter
            .search
            .as_deref()
            .filter(|term| !term.is_empty())
            .map(|term| format!("%{term}%"));

        Ok(Some(Self {
            category_ids,
            brand_id,
            pattern,
        }))
    }

    fn push_where(&self, qb: &mut QueryBuilder<'_, Postgres>) {
        let mut prefix = " WHERE ";
        if let Some(ids) = &self.category_ids {
            qb.push(prefix).push("category_id = ANY(").push_bind(ids.clone()).push(")");
            prefix = " AND ";
        }
        if let Some(brand_id) = self.brand_id {
            qb.push(prefix).push("brand_id = ").push_bind(brand_id);
            prefix = " AND ";
        }
        if let Some(pattern) = &self.pattern {
            qb.push(prefix).push("(");
            let mut separated = false;
            for column in [
                "name_en",
                "name_ru",
                "name_tk",
                "description_en",
                "description_ru",
                "description_tk",
            ] {
                if separated {
                    qb.push(" OR ");
                }
                qb.push(column).push(" ILIKE ").push_bind(pattern.clone());
                separated = true;
            }
            qb.push(")");
        }
    }
}

/// Filtered, paginated product listing in id order.
pub async fn query_products(
    db: &Db,
    filter: &ProductFilter,
    params: PageParams,
) -> Result<Page<Product>> {
    let Some(scope) = ProductScope::resolve(db, filter).await? else {
        return Ok(Page::empty(params));
    };

    let mut count_query = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM product");
    scope.push_where(&mut count_query);
    let total: i64 = count_query.build_query_scalar().fetch_one(&db.pool).await?;

    let mut fetch_query =
        QueryBuilder::<Postgres>::new(format!("SELECT {PRODUCT_COLUMNS} FROM product"));
    scope.push_where(&mut fetch_query);
    fetch_query
        .push(" ORDER BY id OFFSET ")
        .push_bind(params.offset())
        .push(" LIMIT ")
        .push_bind(params.limit);
    let items = fetch_query
        .build_query_as::<Product>()
        .fetch_all(&db.pool)
        .await?;

    Ok(Page {
        items,
        total,
        current_page: params.page,
        last_page: last_page(total, params.limit),
    })
}

/// Paginated news listing, newest publication first.
pub async fn query_news(db: &Db, params: PageParams) -> Result<Page<News>> {
    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM news")
        .fetch_one(&db.pool)
        .await?;
    let items = sqlx::query_as::<_, News>(&format!(
        "SELECT {NEWS_COLUMNS} FROM news ORDER BY publication_date DESC OFFSET $1 LIMIT $2"
    ))
    .bind(params.offset())
    .bind(params.limit)
    .fetch_all(&db.pool)
    .await?;

    Ok(Page {
        items,
        total,
        current_page: params.page,
        last_page: last_page(total, params.limit),
    })
}

pub async fn product_by_ref(db: &Db, reference: &ContentRef) -> Result<Option<Product>> {
    let row = match reference {
        ContentRef::Id(id) => {
            sqlx::query_as::<_, Product>(&format!(
                "SELECT {PRODUCT_COLUMNS} FROM product WHERE id = $1"
            ))
            .bind(id)
            .fetch_optional(&db.pool)
            .await?
        }
        ContentRef::Slug(slug) => {
            sqlx::query_as::<_, Product>(&format!(
                "SELECT {PRODUCT_COLUMNS} FROM product WHERE slug = $1"
            ))
            .bind(slug)
            .fetch_optional(&db.pool)
            .await?
        }
    };
    Ok(row)
}

pub async fn news_by_ref(db: &Db, reference: &ContentRef) -> Result<Option<News>> {
    let row = match reference {
        ContentRef::Id(id) => {
            sqlx::query_as::<_, News>(&format!("SELECT {NEWS_COLUMNS} FROM news WHERE id = $1"))
                .bind(id)
                .fetch_optional(&db.pool)
                .await?
        }
        ContentRef::Slug(slug) => {
            sqlx::query_as::<_, News>(&format!("SELECT {NEWS_COLUMNS} FROM news WHERE slug = $1"))
                .bind(slug)
                .fetch_optional(&db.pool)
                .await?
        }
    };
    Ok(row)
}

/// Random product picks for the recommendations endpoint.
pub async fn random_products(db: &Db, exclude_id: i64, count: i64) -> Result<Vec<Product>> {
    let rows = sqlx::query_as::<_, Product>(&format!(
        "SELECT {PRODUCT_COLUMNS} FROM product WHERE id <> $1 ORDER BY random() LIMIT $2"
    ))
    .bind(exclude_id)
    .bind(count)
    .fetch_all(&db.pool)
    .await?;
    Ok(rows)
}

pub async fn random_news(db: &Db, exclude_id: i64, count: i64) -> Result<Vec<News>> {
    let rows = sqlx::query_as::<_, News>(&format!(
        "SELECT {NEWS_COLUMNS} FROM news WHERE id <> $1 ORDER BY random() LIMIT $2"
    ))
    .bind(exclude_id)
    .bind(count)
    .fetch_all(&db.pool)
    .await?;
    Ok(rows)
}

/// Product ids associated with a news item (richer schema variant).
pub async fn news_product_ids(db: &Db, news_id: i64) -> Result<Vec<i64>> {
    let ids =
        sqlx::query_scalar("SELECT product_id FROM news_products WHERE news_id = $1 ORDER BY product_id")
            .bind(news_id)
            .fetch_all(&db.pool)
            .await?;
    Ok(ids)
}

pub async fn news_brand_ids(db: &Db, news_id: i64) -> Result<Vec<i64>> {
    let ids =
        sqlx::query_scalar("SELECT brand_id FROM news_brands WHERE news_id = $1 ORDER BY brand_id")
            .bind(news_id)
            .fetch_all(&db.pool)
            .await?;
    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_page_is_ceiling_division() {
        assert_eq!(last_page(25, 10), 3);
        assert_eq!(last_page(30, 10), 3);
        assert_eq!(last_page(31, 10), 4);
        assert_eq!(last_page(1, 20), 1);
    }

    #[test]
    fn last_page_never_drops_below_one() {
        assert_eq!(last_page(0, 10), 1);
        assert_eq!(last_page(0, 1), 1);
    }

    #[test]
    fn offset_is_zero_based_window_start() {
        assert_eq!(PageParams::new(1, 20).offset(), 0);
        // page=3, limit=10 starts at row 21 (zero-based 20)
        assert_eq!(PageParams::new(3, 10).offset(), 20);
    }

    #[test]
    fn out_of_range_params_are_clamped() {
        let params = PageParams::new(0, -5);
        assert_eq!(params.page, 1);
        assert_eq!(params.limit, 1);
        assert_eq!(params.offset(), 0);
    }
}
