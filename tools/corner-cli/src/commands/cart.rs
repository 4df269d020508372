//! Show and edit the persisted cart.

use anyhow::{bail, Result};
use dialoguer::Confirm;

use corner_commerce::cart::clamp_quantity;
use corner_commerce::catalog::recommendations;
use corner_commerce::view::{CartPageView, CLEAR_CART_PROMPT, EMPTY_CART_HINT, EMPTY_CART_TITLE};
use corner_store::CartStore;
use corner_widgets::toast;

use super::{CartArgs, CartCommand};
use crate::context::Context;

/// Run the cart command.
pub async fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.open_store();

    match args.command.unwrap_or(CartCommand::Show) {
        CartCommand::Show => show(&mut store, ctx),
        CartCommand::Add { name, quantity } => add(&mut store, &name, quantity, ctx),
        CartCommand::Qty { index, delta } => adjust(&mut store, index, delta, ctx),
        CartCommand::Remove { index } => remove(&mut store, index, ctx),
        CartCommand::Clear { yes } => clear(&mut store, yes, ctx),
    }
}

/// Render the cart page: line rows and totals, or the empty state with
/// the recommendation strip.
pub fn show(store: &mut CartStore, ctx: &Context) -> Result<()> {
    store.refresh();
    let view = CartPageView::from_cart(store.cart());

    if ctx.output.is_json() {
        ctx.output.json(&view);
        return Ok(());
    }

    if view.is_empty() {
        ctx.output.header(EMPTY_CART_TITLE);
        ctx.output.info(EMPTY_CART_HINT);
        for product in recommendations() {
            ctx.output
                .list_item(&format!("{} ({})", product.name, product.price.display()));
        }
        return Ok(());
    }

    ctx.output.header("Your Cart");

    let name_width = view
        .rows
        .iter()
        .map(|r| r.name.len())
        .max()
        .unwrap_or(0)
        .max("ITEM".len());
    let widths = [3, name_width, 5, 10, 10];
    ctx.output
        .table_row(&["#", "ITEM", "QTY", "PRICE", "TOTAL"], &widths);
    for row in &view.rows {
        ctx.output.table_row(
            &[
                &row.index.to_string(),
                &row.name,
                &row.quantity.to_string(),
                &row.unit_price.display(),
                &row.line_total.display(),
            ],
            &widths,
        );
    }

    ctx.output.info("");
    ctx.output.kv("Subtotal", &view.totals.subtotal.display());
    let shipping = if view.totals.shipping.is_zero() {
        "Free".to_string()
    } else {
        view.totals.shipping.display()
    };
    ctx.output.kv("Shipping", &shipping);
    ctx.output.kv("Total", &view.totals.total.display());

    Ok(())
}

/// Direct add from the recommendation strip.
fn add(store: &mut CartStore, name: &str, quantity: i64, ctx: &Context) -> Result<()> {
    let products = recommendations();
    let Some(product) = products.iter().find(|p| p.name.eq_ignore_ascii_case(name)) else {
        bail!("no product named '{}'; see `corner shop --list`", name);
    };

    store.add(
        product.name.clone(),
        product.image.clone(),
        product.price,
        quantity,
    );
    ctx.output
        .success(&toast::added_message(clamp_quantity(quantity), &product.name));

    Ok(())
}

fn adjust(store: &mut CartStore, index: usize, delta: i64, ctx: &Context) -> Result<()> {
    if !store.set_quantity(index, delta) {
        bail!("no cart line at index {}", index);
    }
    if let Some(line) = store.cart().get(index) {
        ctx.output
            .success(&format!("{} × {}", line.quantity, line.name));
    }

    Ok(())
}

fn remove(store: &mut CartStore, index: usize, ctx: &Context) -> Result<()> {
    match store.remove(index) {
        Some(line) => {
            ctx.output.success(&format!("Removed {}", line.name));
            Ok(())
        }
        None => bail!("no cart line at index {}", index),
    }
}

fn clear(store: &mut CartStore, yes: bool, ctx: &Context) -> Result<()> {
    if store.cart().is_empty() {
        ctx.output.info(EMPTY_CART_TITLE);
        return Ok(());
    }

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(CLEAR_CART_PROMPT)
            .default(false)
            .interact()?;
        if !confirmed {
            ctx.output.warn("Nothing cleared");
            return Ok(());
        }
    }

    store.clear();
    ctx.output.success("Cart cleared");

    Ok(())
}
