//! Assertions over `--format json` output.

use anyhow::{Context, Result};
use serde_json::Value;

/// Assert the catalog listing holds exactly `expected` product names, in order.
pub fn assert_product_names(json: &Value, expected: &[&str]) -> Result<()> {
    let products = json["content"]["products"]
        .as_array()
        .context("Expected 'content.products' array in JSON")?;

    let names: Vec<&str> = products
        .iter()
        .enumerate()
        .map(|(i, p)| {
            p["name"]
                .as_str()
                .with_context(|| format!("Product {} missing name", i))
        })
        .collect::<Result<_>>()?;

    if names != expected {
        anyhow::bail!("Expected products {:?}, got {:?}", expected, names);
    }

    Ok(())
}

/// Assert the cart listing has `count` entries and the given total.
pub fn assert_cart(json: &Value, count: u64, total: &str) -> Result<()> {
    let content = &json["content"];
    let actual_count = content["count"]
        .as_u64()
        .context("Expected 'content.count' in JSON")?;
    let actual_total = content["total"]
        .as_str()
        .context("Expected 'content.total' in JSON")?;

    if actual_count != count || actual_total != total {
        anyhow::bail!(
            "Expected {} entries totalling {}, got {} totalling {}",
            count,
            total,
            actual_count,
            actual_total
        );
    }

    Ok(())
}
