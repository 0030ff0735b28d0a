use anyhow::Result;
use chrono::{Datelike, Local};
use tracing::info;

use crate::context::ExecutionContext;
use crate::presentation::renderers::{StorefrontApp, TuiRenderer};

pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    let front = ctx.open_storefront()?;
    info!(
        data_dir = %ctx.data_dir().display(),
        cart_entries = front.cart().len(),
        "opening storefront"
    );

    let app = StorefrontApp::new(front, Local::now().year());
    TuiRenderer::run(app)?;

    info!("storefront closed");
    Ok(())
}
