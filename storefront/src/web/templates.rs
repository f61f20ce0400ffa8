// storefront/src/web/templates.rs

//! Tera templates compiled into the binary.

use crate::errors::Result;
use tera::Tera;

pub const INDEX_TEMPLATE: &str = "index.html";

pub fn init_templates() -> Result<Tera> {
  let mut tera = Tera::default();
  tera.add_raw_template(INDEX_TEMPLATE, include_str!("../../templates/index.html"))?;
  Ok(tera)
}
