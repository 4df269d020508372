//! Fill in the checkout form and place the order.

use anyhow::{bail, Result};
use chrono::Utc;
use dialoguer::{Confirm, Input, Select};

use corner_commerce::checkout::{
    CardDetails, CheckoutForm, OrderSummary, PaymentMethod, ORDER_PLACED_MESSAGE,
};
use corner_commerce::view::Page;

use super::CheckoutArgs;
use crate::context::Context;

/// Run the checkout command.
pub async fn run(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        bail!("checkout is interactive; JSON output is not supported");
    }

    let mut store = ctx.open_store();
    let summary = OrderSummary::from_cart(store.cart());

    ctx.output.header("Checkout");
    render_summary(&summary, ctx);

    ctx.output.step(1, 3, "Contact and shipping");
    let form = collect_form(ctx)?;

    ctx.output.step(2, 3, "Review");
    form.validate()?;

    if !args.yes {
        let confirmed = Confirm::new()
            .with_prompt("Place order?")
            .default(true)
            .interact()?;

        if !confirmed {
            ctx.output.warn("Order not placed");
            return Ok(());
        }
    }

    ctx.output.step(3, 3, "Placing order");
    let spinner = ctx.output.spinner("Placing order...");
    let receipt_path = save_receipt(&summary, &form, ctx)?;
    store.purge();
    spinner.finish_and_clear();

    ctx.output.success(ORDER_PLACED_MESSAGE);
    ctx.output.kv("Receipt", &receipt_path);
    ctx.output
        .debug(&format!("returning to {}", Page::Home.href()));

    Ok(())
}

fn render_summary(summary: &OrderSummary, ctx: &Context) {
    for line in &summary.lines {
        ctx.output.kv(&line.label, &line.amount.display());
    }
    ctx.output.kv("Subtotal", &summary.totals.subtotal.display());
    ctx.output.kv("Shipping", &summary.shipping_display());
    ctx.output.kv("Total", &summary.totals.total.display());
}

/// Collect the form exactly as the page would submit it. Fields may stay
/// blank here; validation decides afterwards, in one pass.
fn collect_form(ctx: &Context) -> Result<CheckoutForm> {
    let defaults = &ctx.config.checkout;

    let full_name = prompt("Full name", defaults.full_name.as_deref())?;
    let email = prompt("Email", defaults.email.as_deref())?;
    let phone = prompt("Phone", defaults.phone.as_deref())?;
    let address = prompt("Address", defaults.address.as_deref())?;
    let city = prompt("City", defaults.city.as_deref())?;
    let zip = prompt("ZIP", defaults.zip.as_deref())?;

    let payment = match Select::new()
        .with_prompt("Payment method")
        .items(&[
            PaymentMethod::Card.display_name(),
            PaymentMethod::CashOnDelivery.display_name(),
        ])
        .default(0)
        .interact()?
    {
        0 => PaymentMethod::Card,
        _ => PaymentMethod::CashOnDelivery,
    };

    let card = if payment == PaymentMethod::Card {
        Some(CardDetails {
            number: prompt("Card number", None)?,
            expiry: prompt("Expiry (MM/YY)", None)?,
            cvv: prompt("CVV", None)?,
        })
    } else {
        None
    };

    Ok(CheckoutForm {
        full_name,
        email,
        phone,
        address,
        city,
        zip,
        payment,
        card,
    })
}

fn prompt(label: &str, prefill: Option<&str>) -> Result<String> {
    let mut input = Input::<String>::new().with_prompt(label).allow_empty(true);
    if let Some(value) = prefill {
        input = input.with_initial_text(value);
    }
    Ok(input.interact_text()?)
}

#[derive(serde::Serialize)]
struct OrderReceipt {
    placed_at: String,
    shop: String,
    customer: String,
    payment: String,
    lines: Vec<ReceiptLine>,
    subtotal: String,
    shipping: String,
    total: String,
}

#[derive(serde::Serialize)]
struct ReceiptLine {
    label: String,
    amount: String,
}

fn save_receipt(summary: &OrderSummary, form: &CheckoutForm, ctx: &Context) -> Result<String> {
    let orders_dir = ctx.profile_dir().join("orders");
    std::fs::create_dir_all(&orders_dir)?;

    let placed_at = Utc::now();
    let receipt = OrderReceipt {
        placed_at: placed_at.to_rfc3339(),
        shop: ctx.config.shop.name.clone(),
        customer: form.full_name.clone(),
        payment: form.payment.as_str().to_string(),
        lines: summary
            .lines
            .iter()
            .map(|line| ReceiptLine {
                label: line.label.clone(),
                amount: line.amount.display(),
            })
            .collect(),
        subtotal: summary.totals.subtotal.display(),
        shipping: summary.shipping_display(),
        total: summary.totals.total.display(),
    };

    let filename = format!("order-{}.json", placed_at.format("%Y%m%d%H%M%S"));
    let path = orders_dir.join(&filename);
    let json = serde_json::to_string_pretty(&receipt)?;
    std::fs::write(&path, json)?;

    ctx.output
        .debug(&format!("saved receipt: {}", path.display()));

    Ok(path.display().to_string())
}
