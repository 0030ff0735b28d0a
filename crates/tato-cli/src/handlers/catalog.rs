use anyhow::{Result, anyhow};
use tato_engine::{CatalogQuery, catalog};
use tato_types::CategoryFilter;

use crate::presentation::presenters::present_catalog;
use crate::presentation::renderers::Renderer;
use crate::presentation::view_models::{CommandResultViewModel, Guidance, StatusBadge};

pub fn handle(search: &str, category: &str, renderer: &impl Renderer) -> Result<()> {
    let category: CategoryFilter = category.parse().map_err(|err| {
        let options: Vec<&str> = CategoryFilter::OPTIONS.iter().map(|c| c.label()).collect();
        anyhow!("{} (expected one of: {})", err, options.join(", "))
    })?;

    let query = CatalogQuery::new(search, category);
    let products = query.apply(catalog().products());
    let content = present_catalog(&query, &products);

    let label = match products.len() {
        1 => "1 product".to_string(),
        n => format!("{} products", n),
    };
    let mut result = CommandResultViewModel::new(content).with_badge(StatusBadge::info(label));

    if products.is_empty() {
        result = result.with_suggestion(
            Guidance::new("Show the whole shelf").with_command("tato-aisle catalog"),
        );
    }

    renderer.render(result)
}
