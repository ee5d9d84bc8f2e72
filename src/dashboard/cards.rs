use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::catalog::{MenuLine, ReferenceCatalog};
use crate::domain::{Booking, BookingAction, BookingStatus};

pub const NO_MENU_ITEMS: &str = "No menu items selected";
pub const WAITING_FOR_PAYMENT: &str = "Waiting for Payment";
pub const PAYMENT_PENDING_NOTE: &str = "Payment collection pending for this event";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionButton {
    pub action: BookingAction,
    pub label: &'static str,
}

impl From<BookingAction> for ActionButton {
    fn from(action: BookingAction) -> Self {
        Self { action, label: action.button_label() }
    }
}

/// Render model for one booking on either dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingCard {
    pub booking_id: String,
    pub user_name: String,
    pub user_email: String,
    pub venue_name: String,
    /// Selected menu items with their prices, or the placeholder when none were chosen.
    pub item_summary: Vec<String>,
    pub start_date: String,
    pub end_date: String,
    pub total_amount: String,
    pub status: BookingStatus,
    pub status_label: &'static str,
    pub badges: Vec<&'static str>,
    pub note: Option<&'static str>,
    /// Label and value of the lifecycle date shown in the card footer.
    pub milestone: Option<(&'static str, String)>,
    pub action: Option<ActionButton>,
}

impl BookingCard {
    fn base(booking: &Booking, catalog: &ReferenceCatalog, currency: &str) -> Self {
        Self {
            booking_id: booking.id.clone(),
            user_name: booking.user_name.clone(),
            user_email: booking.user_email.clone(),
            venue_name: catalog.venue_name(&booking.venue_id).to_string(),
            item_summary: item_summary(booking, catalog, currency),
            start_date: format_date(booking.start_date),
            end_date: format_date(booking.end_date),
            total_amount: format_amount(currency, booking.total_amount),
            status: booking.status,
            status_label: booking.status.owner_label(),
            badges: Vec::new(),
            note: None,
            milestone: None,
            action: None,
        }
    }

    /// Card on the administrator's review list, with the approve button.
    pub fn for_admin(booking: &Booking, catalog: &ReferenceCatalog, currency: &str) -> Self {
        let mut card = Self::base(booking, catalog, currency);
        card.status_label = booking.status.as_str();
        if booking.status == BookingStatus::Pending {
            card.action = Some(BookingAction::Approve.into());
        }
        card
    }

    /// Card on the owner's active or completed section.
    pub fn for_owner(booking: &Booking, catalog: &ReferenceCatalog, currency: &str) -> Self {
        let mut card = Self::base(booking, catalog, currency);
        card.badges.push(booking.status.owner_label());
        if booking.status == BookingStatus::Ongoing {
            card.badges.push(WAITING_FOR_PAYMENT);
            card.note = Some(PAYMENT_PENDING_NOTE);
        }
        card.milestone = if booking.status.is_terminal() {
            Some(("Completed At", format_optional_date(booking.finished_at)))
        } else {
            Some(("Approved At", format_optional_date(booking.approved_at)))
        };
        card.action = booking.status.owner_action().map(ActionButton::from);
        card
    }
}

fn item_summary(booking: &Booking, catalog: &ReferenceCatalog, currency: &str) -> Vec<String> {
    if booking.menu_items.is_empty() {
        return vec![NO_MENU_ITEMS.to_string()];
    }
    booking
        .menu_items
        .iter()
        .map(|id| {
            let MenuLine { name, price } = catalog.menu_line(id);
            format!("{} - {}", name, format_amount(currency, price))
        })
        .collect()
}

pub fn format_date(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d").to_string()
}

fn format_optional_date(at: Option<DateTime<Utc>>) -> String {
    at.map_or_else(|| "-".to_string(), format_date)
}

/// `symbol` followed by the amount with thousands separators, e.g. `P12,500.50`.
pub fn format_amount(symbol: &str, amount: Decimal) -> String {
    let normalized = amount.normalize().to_string();
    let (sign, digits) = match normalized.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", normalized.as_str()),
    };
    let (whole, fraction) = match digits.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (digits, None),
    };

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match fraction {
        Some(fraction) => format!("{sign}{symbol}{grouped}.{fraction}"),
        None => format!("{sign}{symbol}{grouped}"),
    }
}
