//! # Terminal Operations
//!
//! The calls the front end makes against one terminal session:
//! tab management, line entry, discounts, summaries and submission.
//!
//! Every operation returns `Result<_, TerminalError>` for failures of
//! the call itself (unknown tab, out-of-range input). A *rejected*
//! line is not a failure: `add_line` / `update_line` return a
//! [`LineResponse`] whose [`AdditionOutcome`] carries the verdict, and
//! the cashier decides what to do next.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use kilo_core::calc::calculate_item_totals;
use kilo_core::error::CartRejection;
use kilo_core::format::format_weight;
use kilo_core::types::{CartItem, DiscountRate, LineInput, OrderTab, OrderTotals, QuantityMode};
use kilo_core::validation::{
    validate_box_count, validate_cart_addition, validate_discount_bps, validate_price_cents,
    validate_product_name, validate_tab_label,
};
use kilo_core::weight::Weight;

use crate::config::TerminalConfig;
use crate::error::TerminalError;
use crate::session::SessionState;

// =============================================================================
// Request / Response DTOs
// =============================================================================

/// Catalog data the front end passes along with a line.
///
/// The unit price here is the catalog's current price for display;
/// the price that gets charged is the one frozen inside the line's
/// [`LineInput`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRef {
    pub id: String,
    pub name: String,
    pub unit_price_cents: i64,
    /// Tracked stock in grams; `None` means untracked.
    pub stock_available_g: Option<i64>,
}

/// Tagged verdict of a line addition or update.
///
/// Serializes as `{"valid":true}` or
/// `{"valid":false,"error":"..."}`; the front end branches on the
/// tag, never on exceptions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdditionOutcome {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AdditionOutcome {
    /// The line passed every check.
    pub fn accepted() -> Self {
        AdditionOutcome {
            valid: true,
            error: None,
        }
    }

    /// The line failed a business rule.
    pub fn rejected(rejection: &CartRejection) -> Self {
        AdditionOutcome {
            valid: false,
            error: Some(rejection.to_string()),
        }
    }
}

/// One entry in the tab switcher.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabHeader {
    pub tab_id: String,
    pub label: String,
    pub item_count: usize,
    pub total_cents: i64,
    pub active: bool,
}

/// Full tab contents for the cart panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabResponse {
    pub tab_id: String,
    pub label: String,
    pub order_discount_bps: u32,
    pub customer_id: Option<String>,
    pub items: Vec<CartItem>,
    pub totals: OrderTotals,
}

impl From<&OrderTab> for TabResponse {
    fn from(tab: &OrderTab) -> Self {
        TabResponse {
            tab_id: tab.id.clone(),
            label: tab.label.clone(),
            order_discount_bps: tab.order_discount_bps,
            customer_id: tab.customer_id.clone(),
            items: tab.items.clone(),
            totals: tab.totals(),
        }
    }
}

/// Response to a line addition or update: the verdict plus the tab
/// as it stands afterwards (unchanged when the line was rejected).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineResponse {
    pub outcome: AdditionOutcome,
    pub tab: TabResponse,
}

/// One rendered line of a tab summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryLine {
    pub name: String,
    pub net_weight: String,
    pub unit_price: String,
    pub line_total: String,
}

/// Display-ready summary of one tab, formatted with the store's
/// currency code.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabSummary {
    pub store_name: String,
    pub label: String,
    pub lines: Vec<SummaryLine>,
    pub total_net_weight: String,
    pub subtotal: String,
    pub order_discount: String,
    pub total: String,
}

/// One line of an order draft, raw input included so the backend can
/// recompute from first principles.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftLine {
    pub product_id: Option<String>,
    pub name: String,
    pub quantity_mode: QuantityMode,
    pub input: LineInput,
    /// What this terminal computed; advisory only.
    pub advisory_total_cents: i64,
}

/// What submission hands to the backend. All totals are advisory;
/// the backend recomputes authoritatively from the raw lines.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    pub draft_id: String,
    pub tab_label: String,
    pub customer_id: Option<String>,
    pub order_discount_bps: u32,
    pub lines: Vec<DraftLine>,
    pub advisory_totals: OrderTotals,
    pub submitted_at: DateTime<Utc>,
}

// =============================================================================
// Tab management
// =============================================================================

/// Opens a new order tab and makes it active.
pub fn open_tab(session: &SessionState, label: &str) -> Result<TabResponse, TerminalError> {
    validate_tab_label(label)?;
    let label = label.trim();

    let tab_id = session.with_session_mut(|s| s.open_tab(label))?;
    info!(tab_id = %tab_id, label = %label, "order tab opened");

    tab_response(session, &tab_id)
}

/// Abandons a tab without submitting it.
pub fn close_tab(session: &SessionState, tab_id: &str) -> Result<(), TerminalError> {
    let tab = session.with_session_mut(|s| s.close_tab(tab_id))?;
    info!(tab_id = %tab_id, label = %tab.label, items = tab.item_count(), "order tab closed");
    Ok(())
}

/// Current contents of one tab.
pub fn get_tab(session: &SessionState, tab_id: &str) -> Result<TabResponse, TerminalError> {
    debug!(tab_id = %tab_id, "get_tab");
    tab_response(session, tab_id)
}

/// Headers of every open tab, oldest first, for the tab switcher.
pub fn list_tabs(session: &SessionState) -> Vec<TabHeader> {
    session.with_session(|s| {
        let active_id = s.active_tab().map(|t| t.id.clone());
        s.tabs()
            .iter()
            .map(|t| TabHeader {
                tab_id: t.id.clone(),
                label: t.label.clone(),
                item_count: t.item_count(),
                total_cents: t.total_cents(),
                active: active_id.as_deref() == Some(t.id.as_str()),
            })
            .collect()
    })
}

/// Switches the active tab.
pub fn select_tab(session: &SessionState, tab_id: &str) -> Result<TabResponse, TerminalError> {
    session.with_session_mut(|s| s.select_tab(tab_id))?;
    debug!(tab_id = %tab_id, "tab selected");
    tab_response(session, tab_id)
}

// =============================================================================
// Line entry
// =============================================================================

/// Calculates, validates and (if accepted) adds one line to a tab.
///
/// Catalog lines pass a [`ProductRef`]; manual lines pass
/// `custom_name` instead. The returned outcome is tagged, never an
/// error: a rejection leaves the tab untouched and carries the
/// cashier-facing message.
pub fn add_line(
    session: &SessionState,
    tab_id: &str,
    product: Option<&ProductRef>,
    custom_name: Option<&str>,
    quantity_mode: QuantityMode,
    input: LineInput,
) -> Result<LineResponse, TerminalError> {
    validate_box_count(input.box_count)?;
    validate_discount_bps(input.discount_bps)?;
    validate_price_cents(input.unit_price_cents)?;

    let name = match (product, custom_name) {
        (Some(p), _) => p.name.clone(),
        (None, Some(n)) => n.trim().to_string(),
        (None, None) => return Err(TerminalError::validation("name is required")),
    };
    validate_product_name(&name)?;

    let stock = product
        .and_then(|p| p.stock_available_g)
        .map(Weight::from_grams);
    let item = CartItem::new(product.map(|p| p.id.clone()), &name, quantity_mode, input);
    debug!(tab_id = %tab_id, name = %name, net_g = item.totals.net_weight_g, "add_line");

    if let Err(rejection) = validate_cart_addition(&item.totals, stock, &name) {
        debug!(tab_id = %tab_id, reason = %rejection, "line rejected");
        return Ok(LineResponse {
            outcome: AdditionOutcome::rejected(&rejection),
            tab: tab_response(session, tab_id)?,
        });
    }

    let item_id = item.id.clone();
    session.with_session_mut(|s| {
        let tab = s
            .tab_mut(tab_id)
            .ok_or_else(|| TerminalError::not_found("Order tab", tab_id))?;
        tab.add_item(item).map_err(TerminalError::from)
    })?;
    info!(tab_id = %tab_id, item_id = %item_id, "line added");

    Ok(LineResponse {
        outcome: AdditionOutcome::accepted(),
        tab: tab_response(session, tab_id)?,
    })
}

/// Re-enters an existing line with new raw values.
///
/// Runs the same gate as [`add_line`]; a rejected update leaves the
/// stored line as it was.
pub fn update_line(
    session: &SessionState,
    tab_id: &str,
    item_id: &str,
    input: LineInput,
    stock_available_g: Option<i64>,
) -> Result<LineResponse, TerminalError> {
    validate_box_count(input.box_count)?;
    validate_discount_bps(input.discount_bps)?;
    validate_price_cents(input.unit_price_cents)?;

    let name = session.with_session(|s| {
        s.tab(tab_id)
            .ok_or_else(|| TerminalError::not_found("Order tab", tab_id))
            .and_then(|t| {
                t.item(item_id)
                    .map(|i| i.name.clone())
                    .ok_or_else(|| TerminalError::not_found("Cart item", item_id))
            })
    })?;

    let totals = calculate_item_totals(&input);
    debug!(tab_id = %tab_id, item_id = %item_id, net_g = totals.net_weight_g, "update_line");

    if let Err(rejection) =
        validate_cart_addition(&totals, stock_available_g.map(Weight::from_grams), &name)
    {
        debug!(item_id = %item_id, reason = %rejection, "update rejected");
        return Ok(LineResponse {
            outcome: AdditionOutcome::rejected(&rejection),
            tab: tab_response(session, tab_id)?,
        });
    }

    session.with_session_mut(|s| {
        let tab = s
            .tab_mut(tab_id)
            .ok_or_else(|| TerminalError::not_found("Order tab", tab_id))?;
        tab.update_item(item_id, input).map_err(TerminalError::from)
    })?;

    Ok(LineResponse {
        outcome: AdditionOutcome::accepted(),
        tab: tab_response(session, tab_id)?,
    })
}

/// Removes a line from a tab.
pub fn remove_line(
    session: &SessionState,
    tab_id: &str,
    item_id: &str,
) -> Result<TabResponse, TerminalError> {
    session.with_session_mut(|s| {
        let tab = s
            .tab_mut(tab_id)
            .ok_or_else(|| TerminalError::not_found("Order tab", tab_id))?;
        tab.remove_item(item_id).map_err(TerminalError::from)
    })?;
    debug!(tab_id = %tab_id, item_id = %item_id, "line removed");

    tab_response(session, tab_id)
}

/// Removes every line and resets the order discount.
pub fn clear_tab(session: &SessionState, tab_id: &str) -> Result<TabResponse, TerminalError> {
    session.with_session_mut(|s| -> Result<(), TerminalError> {
        let tab = s
            .tab_mut(tab_id)
            .ok_or_else(|| TerminalError::not_found("Order tab", tab_id))?;
        tab.clear();
        Ok(())
    })?;
    debug!(tab_id = %tab_id, "tab cleared");

    tab_response(session, tab_id)
}

// =============================================================================
// Order-level adjustments
// =============================================================================

/// Sets the order-level discount from a percentage.
pub fn set_order_discount(
    session: &SessionState,
    tab_id: &str,
    percent: f64,
) -> Result<TabResponse, TerminalError> {
    let rate = DiscountRate::from_percent(percent);
    validate_discount_bps(rate.bps())?;

    session.with_session_mut(|s| -> Result<(), TerminalError> {
        let tab = s
            .tab_mut(tab_id)
            .ok_or_else(|| TerminalError::not_found("Order tab", tab_id))?;
        tab.set_order_discount(rate);
        Ok(())
    })?;
    debug!(tab_id = %tab_id, bps = rate.bps(), "order discount set");

    tab_response(session, tab_id)
}

/// Attaches or detaches a customer reference.
pub fn set_customer(
    session: &SessionState,
    tab_id: &str,
    customer_id: Option<String>,
) -> Result<TabResponse, TerminalError> {
    session.with_session_mut(|s| -> Result<(), TerminalError> {
        let tab = s
            .tab_mut(tab_id)
            .ok_or_else(|| TerminalError::not_found("Order tab", tab_id))?;
        tab.customer_id = customer_id.clone();
        Ok(())
    })?;
    debug!(tab_id = %tab_id, customer = ?customer_id, "customer set");

    tab_response(session, tab_id)
}

// =============================================================================
// Summary and submission
// =============================================================================

/// Display-ready summary of one tab, formatted with the store's
/// configured currency.
pub fn tab_summary(
    session: &SessionState,
    config: &TerminalConfig,
    tab_id: &str,
) -> Result<TabSummary, TerminalError> {
    session.with_session(|s| {
        let tab = s
            .tab(tab_id)
            .ok_or_else(|| TerminalError::not_found("Order tab", tab_id))?;
        let totals = tab.totals();

        Ok(TabSummary {
            store_name: config.store_name.clone(),
            label: tab.label.clone(),
            lines: tab
                .items
                .iter()
                .map(|i| SummaryLine {
                    name: i.name.clone(),
                    net_weight: format_weight(i.totals.net_weight()),
                    unit_price: config.format_currency(i.input.unit_price_cents),
                    line_total: config.format_currency(i.totals.final_total_cents),
                })
                .collect(),
            total_net_weight: format_weight(Weight::from_grams(totals.net_weight_g)),
            subtotal: config.format_currency(totals.subtotal_cents),
            order_discount: config.format_currency(totals.discount_cents),
            total: config.format_currency(totals.total_cents),
        })
    })
}

/// Turns a tab into an [`OrderDraft`] and drops it from the session.
///
/// An empty tab cannot be submitted and stays open.
pub fn submit_tab(session: &SessionState, tab_id: &str) -> Result<OrderDraft, TerminalError> {
    let tab = session.with_session_mut(|s| {
        let is_empty = match s.tab(tab_id) {
            Some(t) => t.is_empty(),
            None => return Err(TerminalError::not_found("Order tab", tab_id)),
        };
        if is_empty {
            return Err(TerminalError::cart("order tab is empty"));
        }
        s.close_tab(tab_id)
    })?;

    let totals = tab.totals();
    let draft = OrderDraft {
        draft_id: Uuid::new_v4().to_string(),
        tab_label: tab.label.clone(),
        customer_id: tab.customer_id.clone(),
        order_discount_bps: tab.order_discount_bps,
        lines: tab
            .items
            .iter()
            .map(|i| DraftLine {
                product_id: i.product_id.clone(),
                name: i.name.clone(),
                quantity_mode: i.quantity_mode,
                input: i.input,
                advisory_total_cents: i.totals.final_total_cents,
            })
            .collect(),
        advisory_totals: totals,
        submitted_at: Utc::now(),
    };
    info!(
        draft_id = %draft.draft_id,
        lines = draft.lines.len(),
        total_cents = totals.total_cents,
        "order submitted"
    );

    Ok(draft)
}

// =============================================================================
// Helpers
// =============================================================================

fn tab_response(session: &SessionState, tab_id: &str) -> Result<TabResponse, TerminalError> {
    session.with_session(|s| {
        s.tab(tab_id)
            .map(TabResponse::from)
            .ok_or_else(|| TerminalError::not_found("Order tab", tab_id))
    })
}
