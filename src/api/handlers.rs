// HTTP request handlers for API endpoints

use actix_web::http::header;
use actix_web::{web, HttpRequest, HttpResponse};

use crate::api::error::ApiError;
use crate::api::models::*;
use crate::api::server::AppState;
use crate::content::catalog::{self, PageParams, ProductFilter};
use crate::content::intake::{self, NewContactMessage};
use crate::content::locale::{self, Lang};
use crate::content::models::ContentRef;
use crate::content::projection::Projector;
use crate::content::{categories, records};

/// Effective request language: explicit `lang` query parameter, then the
/// Accept-Language header. Session preference is the external admin UI's
/// concern and never reaches this API.
fn request_lang(req: &HttpRequest, lang_param: Option<&str>) -> Lang {
    let accept = req
        .headers()
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok());
    locale::select_language(None, lang_param, accept)
}

fn projector<'a>(state: &'a AppState, req: &HttpRequest, lang_param: Option<&str>) -> Projector<'a> {
    Projector::new(request_lang(req, lang_param), &state.base_url)
}

/// Health check endpoint
pub async fn health_check(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    // Quick database connectivity check
    let db_status = match sqlx::query_scalar::<_, bool>("SELECT true")
        .fetch_one(&state.db.pool)
        .await
    {
        Ok(_) => "connected",
        Err(_) => "disconnected",
    };

    let response = ApiResponse::success(
        HealthResponse {
            status: "healthy".to_string(),
            database: db_status.to_string(),
        },
        "Success",
    );
    Ok(HttpResponse::Ok().json(response))
}

// ---------- COMPANY ----------

pub async fn list_companies(
    state: web::Data<AppState>,
    query: web::Query<LangQuery>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let projector = projector(&state, &req, query.lang.as_deref());
    let items = records::companies(&state.db).await?;
    let data: Vec<_> = items.iter().map(|c| projector.company(c)).collect();
    Ok(HttpResponse::Ok().json(ApiResponse::success(data, "Companies retrieved successfully")))
}

pub async fn get_company(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    query: web::Query<LangQuery>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let projector = projector(&state, &req, query.lang.as_deref());
    let company = records::company_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Company", format!("id {id}")))?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        projector.company(&company),
        "Company retrieved successfully",
    )))
}

// ---------- CERTIFICATE ----------

pub async fn list_certificates(
    state: web::Data<AppState>,
    query: web::Query<LangQuery>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let projector = projector(&state, &req, query.lang.as_deref());
    let items = records::certificates(&state.db).await?;
    let data: Vec<_> = items.iter().map(|c| projector.certificate(c)).collect();
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        data,
        "Certificates retrieved successfully",
    )))
}

pub async fn get_certificate(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<LangQuery>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let reference = ContentRef::parse(&path.into_inner());
    let projector = projector(&state, &req, query.lang.as_deref());
    let certificate = records::certificate_by_ref(&state.db, &reference)
        .await?
        .ok_or_else(|| ApiError::not_found("Certificate", reference.describe()))?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        projector.certificate(&certificate),
        "Certificate retrieved successfully",
    )))
}

// ---------- BRAND ----------

pub async fn list_brands(
    state: web::Data<AppState>,
    query: web::Query<LangQuery>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let projector = projector(&state, &req, query.lang.as_deref());
    let items = records::brands(&state.db).await?;
    let data: Vec<_> = items.iter().map(|b| projector.brand(b)).collect();
    Ok(HttpResponse::Ok().json(ApiResponse::success(data, "Brands retrieved successfully")))
}

pub async fn get_brand(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<LangQuery>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let reference = ContentRef::parse(&path.into_inner());
    let projector = projector(&state, &req, query.lang.as_deref());
    let brand = records::brand_by_ref(&state.db, &reference)
        .await?
        .ok_or_else(|| ApiError::not_found("Brand", reference.describe()))?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        projector.brand(&brand),
        "Brand retrieved successfully",
    )))
}

// ---------- CATEGORY ----------

pub async fn list_categories(
    state: web::Data<AppState>,
    query: web::Query<LangQuery>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let projector = projector(&state, &req, query.lang.as_deref());
    let items = categories::all(&state.db).await?;
    let data: Vec<_> = items.iter().map(|c| projector.category(c)).collect();
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        data,
        "Categories retrieved successfully",
    )))
}

/// Roots-only listing (categories without a parent).
pub async fn list_parent_categories(
    state: web::Data<AppState>,
    query: web::Query<LangQuery>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let projector = projector(&state, &req, query.lang.as_deref());
    let items = categories::roots(&state.db).await?;
    let data: Vec<_> = items.iter().map(|c| projector.category(c)).collect();
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        data,
        "Parent categories retrieved successfully",
    )))
}

pub async fn get_category(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<LangQuery>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let reference = ContentRef::parse(&path.into_inner());
    let projector = projector(&state, &req, query.lang.as_deref());
    let category = categories::by_ref(&state.db, &reference)
        .await?
        .ok_or_else(|| ApiError::not_found("Category", reference.describe()))?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        projector.category(&category),
        "Category retrieved successfully",
    )))
}

// ---------- PRODUCT ----------

pub async fn list_products(
    state: web::Data<AppState>,
    query: web::Query<ProductListQuery>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let projector = projector(&state, &req, query.lang.as_deref());
    let filter = ProductFilter {
        category_id: query.category_id,
        category_slug: query.category.clone(),
        brand: query.brand.as_deref().map(ContentRef::parse),
        search: query.search_term(),
    };
    let params = PageParams::new(query.page, query.limit);
    let page = catalog::query_products(&state.db, &filter, params).await?;

    let data = ProductListData {
        products: page.items.iter().map(|p| projector.product(p)).collect(),
        meta: PageMeta {
            total: page.total,
            current_page: page.current_page,
            last_page: page.last_page,
        },
    };
    Ok(HttpResponse::Ok().json(ApiResponse::success(data, "Products retrieved successfully")))
}

/// Detail projection with the category and brand nested in.
pub async fn get_product(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<LangQuery>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let reference = ContentRef::parse(&path.into_inner());
    let projector = projector(&state, &req, query.lang.as_deref());
    let product = catalog::product_by_ref(&state.db, &reference)
        .await?
        .ok_or_else(|| ApiError::not_found("Product", reference.describe()))?;
    let category = categories::by_ref(&state.db, &ContentRef::Id(product.category_id)).await?;
    let brand = records::brand_by_ref(&state.db, &ContentRef::Id(product.brand_id)).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        projector.product_detail(&product, category.as_ref(), brand.as_ref()),
        "Product retrieved successfully",
    )))
}

pub async fn recommend_products(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    query: web::Query<LangQuery>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let exclude_id = path.into_inner();
    let projector = projector(&state, &req, query.lang.as_deref());
    let items = catalog::random_products(&state.db, exclude_id, 3).await?;
    let data: Vec<_> = items.iter().map(|p| projector.product(p)).collect();
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        data,
        "Random products retrieved successfully",
    )))
}

// ---------- NEWS ----------

pub async fn list_news(
    state: web::Data<AppState>,
    query: web::Query<NewsListQuery>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let projector = projector(&state, &req, query.lang.as_deref());
    let params = PageParams::new(query.page, query.limit);
    let page = catalog::query_news(&state.db, params).await?;

    let data = NewsListData {
        news: page.items.iter().map(|n| projector.news(n)).collect(),
        meta: PageMeta {
            total: page.total,
            current_page: page.current_page,
            last_page: page.last_page,
        },
    };
    Ok(HttpResponse::Ok().json(ApiResponse::success(data, "News retrieved successfully")))
}

/// Detail projection with associated product and brand ids.
pub async fn get_news_item(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<LangQuery>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let reference = ContentRef::parse(&path.into_inner());
    let projector = projector(&state, &req, query.lang.as_deref());
    let news = catalog::news_by_ref(&state.db, &reference)
        .await?
        .ok_or_else(|| ApiError::not_found("News", reference.describe()))?;
    let product_ids = catalog::news_product_ids(&state.db, news.id).await?;
    let brand_ids = catalog::news_brand_ids(&state.db, news.id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        projector.news_detail(&news, product_ids, brand_ids),
        "News item retrieved successfully",
    )))
}

pub async fn recommend_news(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    query: web::Query<LangQuery>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let exclude_id = path.into_inner();
    let projector = projector(&state, &req, query.lang.as_deref());
    let items = catalog::random_news(&state.db, exclude_id, 3).await?;
    let data: Vec<_> = items.iter().map(|n| projector.news(n)).collect();
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        data,
        "Random news retrieved successfully",
    )))
}

// ---------- BANNER ----------

pub async fn list_banners(
    state: web::Data<AppState>,
    query: web::Query<LangQuery>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let projector = projector(&state, &req, query.lang.as_deref());
    let items = records::banners(&state.db).await?;
    let data: Vec<_> = items.iter().map(|b| projector.banner(b)).collect();
    Ok(HttpResponse::Ok().json(ApiResponse::success(data, "Banners retrieved successfully")))
}

pub async fn get_banner(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<LangQuery>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let reference = ContentRef::parse(&path.into_inner());
    let projector = projector(&state, &req, query.lang.as_deref());
    let banner = records::banner_by_ref(&state.db, &reference)
        .await?
        .ok_or_else(|| ApiError::not_found("Banner", reference.describe()))?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        projector.banner(&banner),
        "Banner retrieved successfully",
    )))
}

// ---------- CONTACT MESSAGE (only POST) ----------

pub async fn create_contact_message(
    state: web::Data<AppState>,
    payload: web::Json<ContactMessageRequest>,
) -> Result<HttpResponse, ApiError> {
    let body = payload.into_inner();
    let (Some(email), Some(message)) = (body.email, body.message) else {
        return Err(ApiError::Validation(
            "Email and message fields are required".to_string(),
        ));
    };
    let submission = NewContactMessage {
        name: body.name.or(body.full_name),
        email,
        message,
    };
    let id = intake::submit_contact(&state.db, submission).await?;
    Ok(HttpResponse::Created().json(ApiResponse::success(
        CreatedId { id },
        "Contact message created successfully",
    )))
}

// ---------- NEWSLETTER SUBSCRIBER (only POST) ----------

pub async fn create_newsletter_subscriber(
    state: web::Data<AppState>,
    payload: web::Json<NewsletterSubscribeRequest>,
) -> Result<HttpResponse, ApiError> {
    let email = payload.into_inner().email.unwrap_or_default();
    let outcome = intake::subscribe_newsletter(&state.db, &email).await?;
    if outcome.created {
        Ok(HttpResponse::Created().json(ApiResponse::success(
            CreatedId { id: outcome.id },
            "Newsletter subscriber created successfully",
        )))
    } else {
        Ok(HttpResponse::Ok().json(ApiResponse::success(
            CreatedId { id: outcome.id },
            "Already subscribed",
        )))
    }
}
