//! Stored content entities as they come out of the data store.
//!
//! Localized accessors (`name(lang)`, `title(lang)`, …) apply the fallback
//! chain from [`crate::content::locale`]; the raw per-language columns stay
//! public so projections can emit them verbatim.

use chrono::NaiveDate;
use sqlx::types::Json;
use sqlx::FromRow;

use crate::content::locale::{self, Lang};

/// Reference to a record either by numeric id or by slug. Path and query
/// tokens that parse as integers are treated as id lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentRef {
    Id(i64),
    Slug(String),
}

impl ContentRef {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.parse::<i64>() {
            Ok(id) => ContentRef::Id(id),
            Err(_) => ContentRef::Slug(trimmed.to_string()),
        }
    }

    /// The reference as it reads in error messages: "id 5", "slug juices".
    pub fn describe(&self) -> String {
        match self {
            ContentRef::Id(id) => format!("id {id}"),
            ContentRef::Slug(slug) => format!("slug {slug}"),
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct Company {
    pub id: i64,
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

impl Company {
    pub fn name(&self, lang: Lang) -> String {
        locale::resolve(
            lang,
            self.name_en.as_deref(),
            self.name_ru.as_deref(),
            self.name_tk.as_deref(),
        )
    }

    pub fn mission(&self, lang: Lang) -> String {
        locale::resolve(
            lang,
            self.mission_en.as_deref(),
            self.mission_ru.as_deref(),
            self.mission_tk.as_deref(),
        )
    }

    pub fn vision(&self, lang: Lang) -> String {
        locale::resolve(
            lang,
            self.vision_en.as_deref(),
            self.vision_ru.as_deref(),
            self.vision_tk.as_deref(),
        )
    }

    pub fn address(&self, lang: Lang) -> String {
        locale::resolve(
            lang,
            self.address_en.as_deref(),
            self.address_ru.as_deref(),
            self.address_tk.as_deref(),
        )
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct Category {
    pub id: i64,
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

impl Category {
    pub fn name(&self, lang: Lang) -> String {
        locale::resolve(
            lang,
            Some(&self.name_en),
            Some(&self.name_ru),
            Some(&self.name_tk),
        )
    }

    pub fn description(&self, lang: Lang) -> String {
        locale::resolve(
            lang,
            self.description_en.as_deref(),
            self.description_ru.as_deref(),
            self.description_tk.as_deref(),
        )
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct Brand {
    pub id: i64,
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

impl Brand {
    pub fn name(&self, lang: Lang) -> String {
        locale::resolve(
            lang,
            Some(&self.name_en),
            Some(&self.name_ru),
            Some(&self.name_tk),
        )
    }

    pub fn subtitle(&self, lang: Lang) -> String {
        locale::resolve(
            lang,
            self.subtitle_en.as_deref(),
            self.subtitle_ru.as_deref(),
            self.subtitle_tk.as_deref(),
        )
    }

    pub fn description(&self, lang: Lang) -> String {
        locale::resolve(
            lang,
            self.description_en.as_deref(),
            self.description_ru.as_deref(),
            self.description_tk.as_deref(),
        )
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct Product {
    pub id: i64,
    pub name_en: String,
    pub name_ru: String,
    pub name_tk: String,
    pub slug: String,
    pub description_en: Option<String>,
    pub description_ru: Option<String>,
    pub description_tk: Option<String>,
    pub volume_or_weight: Option<String>,
    pub image: Option<String>,
    pub additional_images: Json<Vec<String>>,
    pub packaging_details_en: Option<String>,
    pub packaging_details_ru: Option<String>,
    pub packaging_details_tk: Option<String>,
    pub category_id: i64,
    pub brand_id: i64,
}

impl Product {
    pub fn name(&self, lang: Lang) -> String {
        locale::resolve(
            lang,
            Some(&self.name_en),
            Some(&self.name_ru),
            Some(&self.name_tk),
        )
    }

    pub fn description(&self, lang: Lang) -> String {
        locale::resolve(
            lang,
            self.description_en.as_deref(),
            self.description_ru.as_deref(),
            self.description_tk.as_deref(),
        )
    }

    pub fn packaging_details(&self, lang: Lang) -> String {
        locale::resolve(
            lang,
            self.packaging_details_en.as_deref(),
            self.packaging_details_ru.as_deref(),
            self.packaging_details_tk.as_deref(),
        )
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct News {
    pub id: i64,
    pub title_en: String,
    pub title_ru: String,
    pub title_tk: String,
    pub subtitle_en: Option<String>,
    pub subtitle_ru: Option<String>,
    pub subtitle_tk: Option<String>,
    pub slug: String,
    pub publication_date: NaiveDate,
    pub image: Option<String>,
    pub body_text_en: Option<String>,
    pub body_text_ru: Option<String>,
    pub body_text_tk: Option<String>,
    pub reading_minutes: i32,
    pub company_id: i64,
}

impl News {
    pub fn title(&self, lang: Lang) -> String {
        locale::resolve(
            lang,
            Some(&self.title_en),
            Some(&self.title_ru),
            Some(&self.title_tk),
        )
    }

    pub fn subtitle(&self, lang: Lang) -> String {
        locale::resolve(
            lang,
            self.subtitle_en.as_deref(),
            self.subtitle_ru.as_deref(),
            self.subtitle_tk.as_deref(),
        )
    }

    pub fn body_text(&self, lang: Lang) -> String {
        locale::resolve(
            lang,
            self.body_text_en.as_deref(),
            self.body_text_ru.as_deref(),
            self.body_text_tk.as_deref(),
        )
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct Certificate {
    pub id: i64,
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

impl Certificate {
    pub fn name(&self, lang: Lang) -> String {
        locale::resolve(
            lang,
            self.name_en.as_deref(),
            self.name_ru.as_deref(),
            self.name_tk.as_deref(),
        )
    }

    pub fn description(&self, lang: Lang) -> String {
        locale::resolve(
            lang,
            self.description_en.as_deref(),
            self.description_ru.as_deref(),
            self.description_tk.as_deref(),
        )
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct Banner {
    pub id: i64,
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

impl Banner {
    pub fn title(&self, lang: Lang) -> String {
        locale::resolve(
            lang,
            self.title_en.as_deref(),
            self.title_ru.as_deref(),
            self.title_tk.as_deref(),
        )
    }

    pub fn description(&self, lang: Lang) -> String {
        locale::resolve(
            lang,
            self.description_en.as_deref(),
            self.description_ru.as_deref(),
            self.description_tk.as_deref(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_tokens_parse_as_ids() {
        assert_eq!(ContentRef::parse("42"), ContentRef::Id(42));
        assert_eq!(ContentRef::parse(" 7 "), ContentRef::Id(7));
    }

    #[test]
    fn non_numeric_tokens_parse_as_slugs() {
        assert_eq!(
            ContentRef::parse("fruit-juices"),
            ContentRef::Slug("fruit-juices".to_string())
        );
        // mixed tokens are slugs, not ids
        assert_eq!(
            ContentRef::parse("12-days"),
            ContentRef::Slug("12-days".to_string())
        );
    }

    #[test]
    fn describe_matches_error_message_wording() {
        assert_eq!(ContentRef::Id(5).describe(), "id 5");
        assert_eq!(ContentRef::Slug("juices".into()).describe(), "slug juices");
    }
}
