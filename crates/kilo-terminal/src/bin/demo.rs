//! # Kilo Terminal Demo
//!
//! Scripted checkout against an in-memory session, for exercising the
//! terminal without a front end:
//!
//! 1. Open a tab
//! 2. Weigh in a catalog product (boxed, with a line discount)
//! 3. Attempt a line the stock check rejects
//! 4. Add a manual line
//! 5. Apply an order discount and print the summary
//! 6. Submit and print the resulting order draft as JSON
//!
//! Run with `cargo run -p kilo-terminal --bin demo`. Set
//! `KILO_STORE_NAME` / `KILO_CURRENCY_CODE` to override the defaults.

use tracing::info;

use kilo_core::types::{LineInput, QuantityMode};
use kilo_terminal::ops::{self, ProductRef};
use kilo_terminal::{init_tracing, SessionState, TerminalConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = TerminalConfig::from_env();
    config.validate()?;
    info!(store = %config.store_name, currency = %config.currency_code, "terminal ready");

    let session = SessionState::new();
    let tab_id = ops::open_tab(&session, "Counter 1")?.tab_id;

    // Mango, 2 kg 500 g on the scale, two 250 g boxes, 10% line discount
    let mango = ProductRef {
        id: "prod-mango".to_string(),
        name: "Mango".to_string(),
        unit_price_cents: 10000,
        stock_available_g: Some(40_000),
    };
    let response = ops::add_line(
        &session,
        &tab_id,
        Some(&mango),
        None,
        QuantityMode::Gram,
        LineInput {
            item_kg: 2.0,
            item_g: 500.0,
            box_kg: 0.0,
            box_g: 250.0,
            box_count: 2,
            unit_price_cents: 10000,
            discount_bps: 1000,
        },
    )?;
    let line = &response.tab.items[0];
    println!(
        "added {} -> net {} ({})",
        mango.name,
        kilo_core::format::format_weight(line.totals.net_weight()),
        config.format_currency(line.totals.final_total_cents)
    );

    // Saffron: only 120 g left, cashier asks for 500 g
    let saffron = ProductRef {
        id: "prod-saffron".to_string(),
        name: "Saffron".to_string(),
        unit_price_cents: 2_500_000,
        stock_available_g: Some(120),
    };
    let response = ops::add_line(
        &session,
        &tab_id,
        Some(&saffron),
        None,
        QuantityMode::Gram,
        LineInput {
            item_g: 500.0,
            unit_price_cents: 2_500_000,
            ..Default::default()
        },
    )?;
    if !response.outcome.valid {
        println!(
            "line refused: {}",
            response.outcome.error.as_deref().unwrap_or("unknown")
        );
    }

    // Manual line without a catalog entry
    ops::add_line(
        &session,
        &tab_id,
        None,
        Some("Loose greens"),
        QuantityMode::Gram,
        LineInput {
            item_g: 750.0,
            unit_price_cents: 4000,
            ..Default::default()
        },
    )?;

    ops::set_order_discount(&session, &tab_id, 5.0)?;

    let summary = ops::tab_summary(&session, &config, &tab_id)?;
    println!();
    println!("{} - {}", summary.store_name, summary.label);
    println!("{:-<58}", "");
    for line in &summary.lines {
        println!(
            "{:<20} {:>10} {:>11} {:>13}",
            line.name, line.net_weight, line.unit_price, line.line_total
        );
    }
    println!("{:-<58}", "");
    println!("{:<31} {:>26}", "Net weight", summary.total_net_weight);
    println!("{:<31} {:>26}", "Subtotal", summary.subtotal);
    println!("{:<31} {:>26}", "Order discount", summary.order_discount);
    println!("{:<31} {:>26}", "Total", summary.total);

    let draft = ops::submit_tab(&session, &tab_id)?;
    println!();
    println!("submitted draft:");
    println!("{}", serde_json::to_string_pretty(&draft)?);

    Ok(())
}
