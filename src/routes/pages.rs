use actix_web::{HttpResponse, http::header::ContentType, web};
use anyhow::Context;

use super::helpers::e500;
use crate::startup::TurnstileSiteKey;

const INDEX_TEMPLATE: &str = "index.html";
const THANK_YOU_TEMPLATE: &str = "thank_you.html";

/// Page templates, compiled into the binary and parsed once at startup.
pub struct Templates(tera::Tera);

impl Templates {
    pub fn new() -> Result<Self, anyhow::Error> {
        let mut tera = tera::Tera::default();
        tera.add_raw_templates(vec![
            (INDEX_TEMPLATE, include_str!("../../views/index.html")),
            (THANK_YOU_TEMPLATE, include_str!("../../views/thank_you.html")),
        ])
        .context("Failed to parse page templates.")?;
        Ok(Self(tera))
    }

    fn render(
        &self,
        template_name: &str,
        entries: &[(&str, &str)],
    ) -> Result<String, anyhow::Error> {
        let mut ctx = tera::Context::new();
        for (key, value) in entries.iter().copied() {
            ctx.insert(key, value);
        }
        self.0
            .render(template_name, &ctx)
            .with_context(|| format!("Failed rendering the {template_name} template."))
    }
}

pub async fn home(
    templates: web::Data<Templates>,
    site_key: web::Data<TurnstileSiteKey>,
) -> Result<HttpResponse, actix_web::Error> {
    let page = templates
        .render(INDEX_TEMPLATE, &[("site_key", site_key.0.as_str())])
        .map_err(e500)?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(page))
}

pub async fn thank_you(templates: web::Data<Templates>) -> Result<HttpResponse, actix_web::Error> {
    let page = templates.render(THANK_YOU_TEMPLATE, &[]).map_err(e500)?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(page))
}
