//! Public JSON projections of stored entities.
//!
//! Every media path goes through the URL normalizer, every localized triple
//! is emitted verbatim alongside a resolved display field for the requested
//! language. Intake records (contact messages, subscribers) have no
//! projection: they are write-once and never served back.

use chrono::NaiveDate;
use serde::Serialize;

use crate::content::locale::Lang;
use crate::content::media::absolute_url;
use crate::content::models::{Banner, Brand, Category, Certificate, Company, News, Product};

/// Per-request projection context: the effective language and the public
/// base URL media paths are resolved against.
#[derive(Debug, Clone, Copy)]
pub struct Projector<'a> {
    pub lang: Lang,
    pub base_url: &'a str,
}

#[derive(Debug, Serialize)]
pub struct CompanyDto {
    pub id: i64,
    pub name: String,
    pub name_en: Option<String>,
    pub name_ru: Option<String>,
    pub name_tk: Option<String>,
    pub mission: String,
    pub mission_en: Option<String>,
    pub mission_ru: Option<String>,
    pub mission_tk: Option<String>,
    pub vision: String,
    pub vision_en: Option<String>,
    pub vision_ru: Option<String>,
    pub vision_tk: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: String,
    pub address_en: Option<String>,
    pub address_ru: Option<String>,
    pub address_tk: Option<String>,
    pub map_coordinates: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CategoryDto {
    pub id: i64,
    pub name: String,
    pub name_en: String,
    pub name_ru: String,
    pub name_tk: String,
    pub slug: String,
    pub description: String,
    pub description_en: Option<String>,
    pub description_ru: Option<String>,
    pub description_tk: Option<String>,
    pub image: Option<String>,
    pub parent_category_id: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct BrandDto {
    pub id: i64,
    pub name: String,
    pub name_en: String,
    pub name_ru: String,
    pub name_tk: String,
    pub subtitle: String,
    pub subtitle_en: Option<String>,
    pub subtitle_ru: Option<String>,
    pub subtitle_tk: Option<String>,
    pub logo_image: Option<String>,
    pub description: String,
    pub description_en: Option<String>,
    pub description_ru: Option<String>,
    pub description_tk: Option<String>,
    pub slug: String,
    pub company_id: i64,
}

#[derive(Debug, Serialize)]
pub struct ProductDto {
    pub id: i64,
    pub name: String,
    pub name_en: String,
    pub name_ru: String,
    pub name_tk: String,
    pub slug: String,
    pub description: String,
    pub description_en: Option<String>,
    pub description_ru: Option<String>,
    pub description_tk: Option<String>,
    pub volume_or_weight: Option<String>,
    pub image: Option<String>,
    pub additional_images: Vec<String>,
    pub packaging_details: String,
    pub packaging_details_en: Option<String>,
    pub packaging_details_ru: Option<String>,
    pub packaging_details_tk: Option<String>,
    pub category_id: i64,
    pub brand_id: i64,
}

/// Product detail view with its category and brand joined in.
#[derive(Debug, Serialize)]
pub struct ProductDetailDto {
    #[serde(flatten)]
    pub product: ProductDto,
    pub category: Option<CategoryDto>,
    pub brand: Option<BrandDto>,
}

#[derive(Debug, Serialize)]
pub struct NewsDto {
    pub id: i64,
    pub title: String,
    pub title_en: String,
    pub title_ru: String,
    pub title_tk: String,
    pub subtitle: String,
    pub subtitle_en: Option<String>,
    pub subtitle_ru: Option<String>,
    pub subtitle_tk: Option<String>,
    pub slug: String,
    pub publication_date: NaiveDate,
    pub image: Option<String>,
    pub body_text: String,
    pub body_text_en: Option<String>,
    pub body_text_ru: Option<String>,
    pub body_text_tk: Option<String>,
    pub reading_minutes: i32,
    pub company_id: i64,
}

/// News detail view with its associated product and brand ids.
#[derive(Debug, Serialize)]
pub struct NewsDetailDto {
    #[serde(flatten)]
    pub news: NewsDto,
    pub product_ids: Vec<i64>,
    pub brand_ids: Vec<i64>,
}

#[derive(Debug, Serialize)]
pub struct CertificateDto {
    pub id: i64,
    pub name: String,
    pub name_en: Option<String>,
    pub name_ru: Option<String>,
    pub name_tk: Option<String>,
    pub description: String,
    pub description_en: Option<String>,
    pub description_ru: Option<String>,
    pub description_tk: Option<String>,
    pub image: Option<String>,
    pub slug: String,
    pub company_id: i64,
}

#[derive(Debug, Serialize)]
pub struct BannerDto {
    pub id: i64,
    pub image: Option<String>,
    pub link: Option<String>,
    pub slug: String,
    pub title: String,
    pub title_en: Option<String>,
    pub title_ru: Option<String>,
    pub title_tk: Option<String>,
    pub description: String,
    pub description_en: Option<String>,
    pub description_ru: Option<String>,
    pub description_tk: Option<String>,
}

impl<'a> Projector<'a> {
    pub fn new(lang: Lang, base_url: &'a str) -> Self {
        Self { lang, base_url }
    }

    fn media(&self, path: &Option<String>) -> Option<String> {
        absolute_url(path.as_deref(), self.base_url)
    }

    pub fn company(&self, company: &Company) -> CompanyDto {
        CompanyDto {
            id: company.id,
            name: company.name(self.lang),
            name_en: company.name_en.clone(),
            name_ru: company.name_ru.clone(),
            name_tk: company.name_tk.clone(),
            mission: company.mission(self.lang),
            mission_en: company.mission_en.clone(),
            mission_ru: company.mission_ru.clone(),
            mission_tk: company.mission_tk.clone(),
            vision: company.vision(self.lang),
            vision_en: company.vision_en.clone(),
            vision_ru: company.vision_ru.clone(),
            vision_tk: company.vision_tk.clone(),
            phone: company.phone.clone(),
            email: company.email.clone(),
            address: company.address(self.lang),
            address_en: company.address_en.clone(),
            address_ru: company.address_ru.clone(),
            address_tk: company.address_tk.clone(),
            map_coordinates: company.map_coordinates.clone(),
        }
    }

    pub fn category(&self, category: &Category) -> CategoryDto {
        CategoryDto {
            id: category.id,
            name: category.name(self.lang),
            name_en: category.name_en.clone(),
            name_ru: category.name_ru.clone(),
            name_tk: category.name_tk.clone(),
            slug: category.slug.clone(),
            description: category.description(self.lang),
            description_en: category.description_en.clone(),
            description_ru: category.description_ru.clone(),
            description_tk: category.description_tk.clone(),
            image: self.media(&category.image),
            parent_category_id: category.parent_category_id,
        }
    }

    pub fn brand(&self, brand: &Brand) -> BrandDto {
        BrandDto {
            id: brand.id,
            name: brand.name(self.lang),
            name_en: brand.name_en.clone(),
            name_ru: brand.name_ru.clone(),
            name_tk: brand.name_tk.clone(),
            subtitle: brand.subtitle(self.lang),
            subtitle_en: brand.subtitle_en.clone(),
            subtitle_ru: brand.subtitle_ru.clone(),
            subtitle_tk: brand.subtitle_tk.clone(),
            logo_image: self.media(&brand.logo_image),
            description: brand.description(self.lang),
            description_en: brand.description_en.clone(),
            description_ru: brand.description_ru.clone(),
            description_tk: brand.description_tk.clone(),
            slug: brand.slug.clone(),
            company_id: brand.company_id,
        }
    }

    pub fn product(&self, product: &Product) -> ProductDto {
        let additional_images = product
            .additional_images
            .0
            .iter()
            .filter_map(|path| absolute_url(Some(path), self.base_url))
            .collect();
        ProductDto {
            id: product.id,
            name: product.name(self.lang),
            name_en: product.name_en.clone(),
            name_ru: product.name_ru.clone(),
            name_tk: product.name_tk.clone(),
            slug: product.slug.clone(),
            description: product.description(self.lang),
            description_en: product.description_en.clone(),
            description_ru: product.description_ru.clone(),
            description_tk: product.description_tk.clone(),
            volume_or_weight: product.volume_or_weight.clone(),
            image: self.media(&product.image),
            additional_images,
            packaging_details: product.packaging_details(self.lang),
            packaging_details_en: product.packaging_details_en.clone(),
            packaging_details_ru: product.packaging_details_ru.clone(),
            packaging_details_tk: product.packaging_details_tk.clone(),
            category_id: product.category_id,
            brand_id: product.brand_id,
        }
    }

    pub fn product_detail(
        &self,
        product: &Product,
        category: Option<&Category>,
        brand: Option<&Brand>,
    ) -> ProductDetailDto {
        ProductDetailDto {
            product: self.product(product),
            category: category.map(|c| self.category(c)),
            brand: brand.map(|b| self.brand(b)),
        }
    }

    pub fn news(&self, news: &News) -> NewsDto {
        NewsDto {
            id: news.id,
            title: news.title(self.lang),
            title_en: news.title_en.clone(),
            title_ru: news.title_ru.clone(),
            title_tk: news.title_tk.clone(),
            subtitle: news.subtitle(self.lang),
            subtitle_en: news.subtitle_en.clone(),
            subtitle_ru: news.subtitle_ru.clone(),
            subtitle_tk: news.subtitle_tk.clone(),
            slug: news.slug.clone(),
            publication_date: news.publication_date,
            image: self.media(&news.image),
            body_text: news.body_text(self.lang),
            body_text_en: news.body_text_en.clone(),
            body_text_ru: news.body_text_ru.clone(),
            body_text_tk: news.body_text_tk.clone(),
            reading_minutes: news.reading_minutes,
            company_id: news.company_id,
        }
    }

    pub fn news_detail(&self, news: &News, product_ids: Vec<i64>, brand_ids: Vec<i64>) -> NewsDetailDto {
        NewsDetailDto {
            news: self.news(news),
            product_ids,
            brand_ids,
        }
    }

    pub fn certificate(&self, certificate: &Certificate) -> CertificateDto {
        CertificateDto {
            id: certificate.id,
            name: certificate.name(self.lang),
            name_en: certificate.name_en.clone(),
            name_ru: certificate.name_ru.clone(),
            name_tk: certificate.name_tk.clone(),
            description: certificate.description(self.lang),
            description_en: certificate.description_en.clone(),
            description_ru: certificate.description_ru.clone(),
            description_tk: certificate.description_tk.clone(),
            image: self.media(&certificate.image),
            slug: certificate.slug.clone(),
            company_id: certificate.company_id,
        }
    }

    pub fn banner(&self, banner: &Banner) -> BannerDto {
        BannerDto {
            id: banner.id,
            image: self.media(&banner.image),
            link: banner.link.clone(),
            slug: banner.slug.clone(),
            title: banner.title(self.lang),
            title_en: banner.title_en.clone(),
            title_ru: banner.title_ru.clone(),
            title_tk: banner.title_tk.clone(),
            description: banner.description(self.lang),
            description_en: banner.description_en.clone(),
            description_ru: banner.description_ru.clone(),
            description_tk: banner.description_tk.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::types::Json;

    fn sample_product() -> Product {
        Product {
            id: 9,
            name_en: "Apple Juice".into(),
            name_ru: "Яблочный сок".into(),
            name_tk: String::new(),
            slug: "apple-juice".into(),
            description_en: Some("Pressed apples".into()),
            description_ru: None,
            description_tk: None,
            volume_or_weight: Some("1 L".into()),
            image: Some("uploads/products/apple.png".into()),
            additional_images: Json(vec![
                "uploads/products/apple-2.png".into(),
                "https://cdn.other.test/apple-3.png".into(),
            ]),
            packaging_details_en: None,
            packaging_details_ru: None,
            packaging_details_tk: None,
            category_id: 3,
            brand_id: 2,
        }
    }

    #[test]
    fn media_fields_become_absolute_urls() {
        let projector = Projector::new(Lang::En, "https://site.test");
        let dto = projector.product(&sample_product());
        assert_eq!(
            dto.image.as_deref(),
            Some("https://site.test/static/uploads/products/apple.png")
        );
        assert_eq!(
            dto.additional_images,
            vec![
                "https://site.test/static/uploads/products/apple-2.png".to_string(),
                "https://cdn.other.test/apple-3.png".to_string(),
            ]
        );
    }

    #[test]
    fn resolved_fields_follow_the_fallback_chain() {
        let projector = Projector::new(Lang::Tk, "https://site.test");
        let dto = projector.product(&sample_product());
        // tk name is empty, so the resolved field falls back to en
        assert_eq!(dto.name, "Apple Juice");
        assert_eq!(dto.name_tk, "");
        assert_eq!(dto.description, "Pressed apples");
    }

    #[test]
    fn detail_view_nests_category_and_brand() {
        let projector = Projector::new(Lang::En, "https://site.test");
        let category = Category {
            id: 3,
            name_en: "Beverages".into(),
            name_ru: "Напитки".into(),
            name_tk: "Içgiler".into(),
            slug: "beverages".into(),
            description_en: None,
            description_ru: None,
            description_tk: None,
            image: None,
            parent_category_id: None,
        };
        let brand = Brand {
            id: 2,
            name_en: "Acme".into(),
            name_ru: "Акме".into(),
            name_tk: "Acme".into(),
            subtitle_en: None,
            subtitle_ru: None,
            subtitle_tk: None,
            logo_image: Some("uploads/brands/acme.png".into()),
            description_en: None,
            description_ru: None,
            description_tk: None,
            slug: "acme".into(),
            company_id: 1,
        };
        let dto = projector.product_detail(&sample_product(), Some(&category), Some(&brand));
        let value = serde_json::to_value(&dto).unwrap();
        assert_eq!(value["slug"], "apple-juice");
        assert_eq!(value["category"]["slug"], "beverages");
        assert_eq!(
            value["brand"]["logo_image"],
            "https://site.test/static/uploads/brands/acme.png"
        );
    }
}
