use anyhow::Result;

use crate::context::ExecutionContext;
use crate::presentation::presenters::{present_cart, present_cart_cleared};
use crate::presentation::renderers::Renderer;
use crate::presentation::view_models::{CommandResultViewModel, Guidance, StatusBadge};

pub fn handle_show(ctx: &ExecutionContext, renderer: &impl Renderer) -> Result<()> {
    let front = ctx.open_storefront()?;
    let content = present_cart(front.cart());

    let mut result = CommandResultViewModel::new(content);
    if front.cart().is_empty() {
        result = result.with_suggestion(
            Guidance::new("Open the storefront and add something").with_command("tato-aisle browse"),
        );
    }

    renderer.render(result)
}

pub fn handle_clear(ctx: &ExecutionContext, renderer: &impl Renderer) -> Result<()> {
    let mut front = ctx.open_storefront()?;
    let removed = front.clear_cart()?;

    let mut result = CommandResultViewModel::new(present_cart_cleared(removed));
    if removed > 0 {
        result = result.with_badge(StatusBadge::success("Cart cleared"));
    }

    renderer.render(result)
}
