mod domain;
mod clients;

mod app_system;

#[cfg(test)]
mod mock_framework;

mod actor_framework;
mod booking_actor;
mod catalog_actor;
mod catalog;
mod dashboard;
mod lifecycle;
mod statistics;

use anyhow::Context;
use chrono::Utc;
use tracing::{info, warn, Instrument};

use crate::app_system::{load_config, setup_tracing, DashboardSystem, SeedData};
use crate::dashboard::cards::BookingCard;
use crate::dashboard::Notice;

fn report(notices: &[Notice]) {
    for notice in notices {
        if notice.is_error() {
            warn!(%notice, "Dashboard notice");
        } else {
            info!(%notice, "Dashboard notice");
        }
    }
}

fn render_card(section: &str, card: &BookingCard) {
    info!(
        section,
        booking = %card.booking_id,
        customer = %card.user_name,
        email = %card.user_email,
        venue = %card.venue_name,
        items = ?card.item_summary,
        dates = %format!("{} to {}", card.start_date, card.end_date),
        total = %card.total_amount,
        status = %card.status,
        label = card.status_label,
        badges = ?card.badges,
        note = card.note.unwrap_or(""),
        milestone = ?card.milestone,
        button = %card
            .action
            .map(|b| format!("{} ({})", b.label, b.action))
            .unwrap_or_default(),
        "Booking card"
    );
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = load_config().context("loading configuration")?;
    setup_tracing(&config.log_filter);

    info!(currency = %config.currency_symbol, "Starting venue booking dashboards");

    let system = DashboardSystem::new(&config);
    let seed = SeedData::load(config.seed_path.as_deref()).context("loading seed data")?;
    let summary = system.seed(seed).await.context("seeding stores")?;

    // Administrator reviews the queue and approves the newest request.
    let approved_id = async {
        let mut admin = system.admin_dashboard();
        report(&admin.load().await);
        let overview = admin.summary();
        info!(
            venues = overview.total_venues,
            menu_items = overview.menu_items,
            pending = overview.pending_bookings,
            "Admin dashboard loaded"
        );
        if let Some(message) = admin.empty_message() {
            info!(text = message, "Pending section");
        }
        let cards = admin.cards();
        for card in &cards {
            render_card("pending", card);
        }
        let target = cards.first().map(|card| card.booking_id.clone());
        if let Some(id) = &target {
            report(&[admin.approve(id, true).await]);
        }
        target
    }
    .instrument(tracing::info_span!("admin_dashboard"))
    .await;

    let Some(booking_id) = approved_id else {
        warn!("No pending bookings to walk through");
        return system.shutdown().await.map_err(anyhow::Error::msg);
    };

    let Some(owner_uid) = summary.owner_uid else {
        warn!("Seed data has no owner profile");
        return system.shutdown().await.map_err(anyhow::Error::msg);
    };

    // Owner accepts, payment lands, then the owner finishes the booking.
    async {
        let mut owner = system.owner_dashboard();
        report(&owner.load(&owner_uid).await);
        if let Some(header) = owner.header() {
            info!(welcome = %header.welcome, venue = %header.venue, "Owner dashboard loaded");
        }
        report(&[owner.accept(&booking_id).await]);

        let mut payments = system.payment_controller();
        match payments.record_payment(&booking_id).await {
            Ok(applied) => info!(to = %applied.to, "Payment recorded"),
            Err(e) => warn!(error = %e, "Payment could not be recorded"),
        }

        report(&owner.load(&owner_uid).await);
        report(&[owner.mark_ready(&booking_id).await]);
        report(&[owner.mark_finished(&booking_id).await]);

        for card in owner.active_cards() {
            render_card("active", &card);
        }
        if let Some(message) = owner.active_empty_message() {
            info!(text = message, "Active section");
        }
        for card in owner.completed_cards() {
            render_card("completed", &card);
        }
        if let Some(message) = owner.completed_empty_message() {
            info!(text = message, "Completed section");
        }

        let stats = owner.stats(Utc::now());
        info!(
            revenue = %stats.total_revenue,
            active = stats.active_bookings,
            completed = stats.completed_bookings,
            upcoming = stats.upcoming_bookings,
            "Owner statistics"
        );
    }
    .instrument(tracing::info_span!("owner_dashboard", uid = %owner_uid))
    .await;

    // Fresh reads straight from the store, bypassing any dashboard cache.
    let audit = system.payment_controller();
    match (audit.list_pending().await, audit.list_active().await) {
        (Ok(pending), Ok(active)) => info!(
            pending = pending.len(),
            active = active.len(),
            "Store state after walkthrough"
        ),
        (Err(e), _) | (_, Err(e)) => warn!(error = %e, "Final store read failed"),
    }
    drop(audit);

    system.shutdown().await.map_err(anyhow::Error::msg)
}
