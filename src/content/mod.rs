// Content domain: entities, localization, catalog queries, projections,
// public form intake and the internal admin service layer.

pub mod admin;
pub mod catalog;
pub mod categories;
pub mod intake;
pub mod locale;
pub mod media;
pub mod models;
pub mod projection;
pub mod records;
