//! Browse the storefront, search, and add to cart.

use anyhow::{bail, Result};
use dialoguer::{Input, Select};

use corner_commerce::catalog::{recommendations, Product};
use corner_commerce::view::badge_text;
use corner_store::CartStore;
use corner_widgets::page::{CatalogCard, CatalogPage, PageControl};
use corner_widgets::suggest::Key;
use corner_widgets::trigger::ADD_TO_CART_LABEL;
use corner_widgets::{
    InlineEditorController, SearchShell, SuggestionController, SuggestionIndex, TriggerId,
    TriggerRegistry, UiEffect, WidgetId, EMPTY_STATE, PRODUCTS_LANDMARK,
};

use super::ShopArgs;
use crate::context::Context;
use crate::effects;

/// Run the shop command.
pub async fn run(args: ShopArgs, ctx: &Context) -> Result<()> {
    let products = recommendations();
    let page = storefront_page(&products);

    if args.list {
        return list_products(&products, ctx);
    }
    if let Some(query) = args.query.as_deref() {
        return search_once(query, &page, ctx);
    }

    if ctx.output.is_json() {
        bail!("the interactive storefront has no JSON mode; use --list or --query");
    }

    session(&products, &page, ctx).await
}

/// Lay the catalog out the way the storefront page renders it: one card
/// per product with an inline add control, inside a "products" section.
fn storefront_page(products: &[Product]) -> CatalogPage {
    let cards = products
        .iter()
        .map(|p| CatalogCard {
            heading: Some(p.name.clone()),
            image_style: Some(format!("background-image: url('{}')", p.image)),
            price_attr: Some(p.price.to_decimal().to_string()),
        })
        .collect();

    let controls = products
        .iter()
        .enumerate()
        .map(|(i, p)| PageControl {
            label: ADD_TO_CART_LABEL.to_string(),
            action: Some(format!("addToCart('{}')", p.name)),
            card: Some(i),
        })
        .collect();

    CatalogPage {
        cards,
        controls,
        sections: vec![PRODUCTS_LANDMARK.to_string()],
    }
}

/// Controls are registered up front so adds never fall back to the text
/// heuristics.
fn storefront_registry(products: &[Product]) -> TriggerRegistry {
    let mut registry = TriggerRegistry::new();
    for (i, product) in products.iter().enumerate() {
        registry.register(&product.name, TriggerId(i));
    }
    registry
}

fn list_products(products: &[Product], ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }

    ctx.output.header(&ctx.config.shop.name);
    let name_width = products.iter().map(|p| p.name.len()).max().unwrap_or(0);
    for product in products {
        ctx.output
            .table_row(&[&product.name, &product.price.display()], &[name_width, 8]);
    }

    Ok(())
}

fn search_once(query: &str, page: &CatalogPage, ctx: &Context) -> Result<()> {
    let index = SuggestionIndex::build(page);
    let results = index.filter(query);

    if ctx.output.is_json() {
        ctx.output.json(&results);
        return Ok(());
    }

    if results.is_empty() {
        ctx.output.info(EMPTY_STATE);
        return Ok(());
    }
    for descriptor in &results {
        match descriptor.display_price() {
            Some(price) => ctx
                .output
                .list_item(&format!("{} ({})", descriptor.title, price)),
            None => ctx.output.list_item(&descriptor.title),
        }
    }

    Ok(())
}

/// The interactive storefront session.
async fn session(products: &[Product], page: &CatalogPage, ctx: &Context) -> Result<()> {
    let mut store = ctx.open_store();
    let mut editor = InlineEditorController::new(storefront_registry(products));
    let mut suggestions = SuggestionController::new(SuggestionIndex::build(page));
    let search_widget = suggestions.register();
    let mut shell = SearchShell::new();

    loop {
        // another terminal may have written the snapshot meanwhile
        store.refresh();

        let totals = store.aggregates();
        let prompt = match badge_text(totals.item_count) {
            Some(badge) => format!(
                "{} — cart [{}] {}",
                ctx.config.shop.name,
                badge,
                totals.total.display()
            ),
            None => format!("{} — cart empty", ctx.config.shop.name),
        };

        let choice = Select::new()
            .with_prompt(prompt)
            .items(&[
                "Browse products",
                "Search",
                "Add to cart",
                "View cart",
                "Checkout",
                "Quit",
            ])
            .default(0)
            .interact()?;

        match choice {
            0 => list_products(products, ctx)?,
            1 => search(&mut suggestions, search_widget, &mut shell, page, ctx).await?,
            2 => add_to_cart(&mut editor, &mut store, products, page, ctx).await?,
            3 => super::cart::show(&mut store, ctx)?,
            4 => {
                // a blocked checkout keeps the session alive, like the page
                if let Err(e) = super::checkout::run(super::CheckoutArgs { yes: false }, ctx).await
                {
                    ctx.output.error(&format!("{:#}", e));
                }
                store.refresh();
            }
            _ => break,
        }
    }

    Ok(())
}

/// One pass through the search overlay: open, type, pick or dismiss.
async fn search(
    suggestions: &mut SuggestionController,
    widget: WidgetId,
    shell: &mut SearchShell,
    page: &CatalogPage,
    ctx: &Context,
) -> Result<()> {
    effects::play(&ctx.output, page, shell.open(widget)).await;
    suggestions.focus(widget);

    let query: String = Input::new()
        .with_prompt("Search products")
        .allow_empty(true)
        .interact_text()?;
    suggestions.input(widget, &query);

    let labels: Vec<String> = {
        let Some(state) = suggestions.widget(widget) else {
            return Ok(());
        };
        state
            .results()
            .iter()
            .map(|d| match d.display_price() {
                Some(price) => format!("{} ({})", d.title, price),
                None => d.title.clone(),
            })
            .collect()
    };

    if labels.is_empty() {
        ctx.output.info(EMPTY_STATE);
        // returning to the menu is the outside click
        suggestions.close_all();
        effects::play(&ctx.output, page, shell.outside_click()).await;
        return Ok(());
    }

    let mut items = labels;
    items.push("Cancel".to_string());

    let choice = Select::new()
        .with_prompt("Jump to")
        .items(&items)
        .default(0)
        .interact()?;

    // the suggestion list blurs the input on Escape and on activation,
    // so the shell only records the collapse
    if choice == items.len() - 1 {
        effects::play(&ctx.output, page, suggestions.key(widget, Key::Escape)).await;
        shell.collapse(widget);
        return Ok(());
    }

    // replay the pick through the keyboard path
    for _ in 0..=choice {
        effects::play(&ctx.output, page, suggestions.key(widget, Key::ArrowDown)).await;
    }
    effects::play(&ctx.output, page, suggestions.key(widget, Key::Enter)).await;
    shell.collapse(widget);

    Ok(())
}

/// Pick a product, then drive its inline quantity editor.
async fn add_to_cart(
    editor: &mut InlineEditorController,
    store: &mut CartStore,
    products: &[Product],
    page: &CatalogPage,
    ctx: &Context,
) -> Result<()> {
    let mut items: Vec<String> = products
        .iter()
        .map(|p| format!("{} ({})", p.name, p.price.display()))
        .collect();
    items.push("Back".to_string());

    let choice = Select::new()
        .with_prompt("Add which product?")
        .items(&items)
        .default(0)
        .interact()?;
    if choice == items.len() - 1 {
        return Ok(());
    }

    let product = &products[choice];
    let opened = editor.add_to_cart(store, page, product, None);
    let trigger = opened.immediate.iter().find_map(|e| match e {
        UiEffect::MountEditor(id) => Some(*id),
        _ => None,
    });
    effects::play(&ctx.output, page, opened).await;

    let Some(trigger) = trigger else {
        // direct-add degradation; the toast already confirmed it
        return Ok(());
    };

    stepper(editor, store, trigger, page, ctx).await
}

async fn stepper(
    editor: &mut InlineEditorController,
    store: &mut CartStore,
    trigger: TriggerId,
    page: &CatalogPage,
    ctx: &Context,
) -> Result<()> {
    loop {
        let Some(quantity) = editor.quantity(trigger) else {
            return Ok(());
        };

        let choice = Select::new()
            .with_prompt(format!("Quantity: {}", quantity))
            .items(&["+1", "-1", "Add to cart", "Cancel"])
            .default(2)
            .interact()?;

        match choice {
            0 => {
                let _ = editor.increment(trigger);
            }
            1 => {
                let _ = editor.decrement(trigger);
            }
            2 => {
                let batch = editor.commit(trigger, store);
                effects::play(&ctx.output, page, batch).await;
                return Ok(());
            }
            _ => {
                let batch = editor.cancel(trigger);
                effects::play(&ctx.output, page, batch).await;
                return Ok(());
            }
        }
    }
}
