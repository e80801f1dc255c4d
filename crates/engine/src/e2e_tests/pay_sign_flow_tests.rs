//! Paying for a sign, the pulse it produces and its reversion.

use paysign_domain::{BlockData, Material, SignLines, Ticks};

use super::*;
use crate::use_cases::{Activation, ActivationDenial, PaymentError};

#[test]
fn paid_activation_pulses_then_reverts_after_default_delay() {
    let ctx = E2EContext::new();
    let pos = ctx.place_wall_sign(["[PaySign]", "Bob", "10", ""]);
    ctx.economy.set_balance(&ctx.alice.name, 25.0);

    let result = ctx.app.on_player_interact(&mut ctx.click(&pos));

    assert_eq!(
        result,
        Activation::Scheduled {
            location: pos.clone(),
            delay: Ticks::new(30)
        }
    );
    assert_eq!(ctx.balance(&ctx.alice), 15.0);
    assert_eq!(ctx.balance(&ctx.bob), 10.0);
    assert_eq!(
        ctx.messages(&ctx.alice),
        vec!["§6§o[PaySign] §r§a$10.00 has been withdrawn from your account for using Bob's mechanism."]
    );
    // Owner hears about it a tick later, sign is powered the same tick.
    assert!(ctx.messages(&ctx.bob).is_empty());
    assert!(!ctx.is_powered(&pos));

    ctx.app.tick();
    assert_eq!(
        ctx.messages(&ctx.bob),
        vec!["§6§o[PaySign] §r§7Alice has paid $10.00 for using your mechanism."]
    );
    assert!(ctx.is_powered(&pos));
    assert_eq!(ctx.app.triggers.len(), 1);

    ctx.app.scheduler.advance(29);
    assert!(ctx.is_powered(&pos));

    ctx.app.tick();
    assert!(ctx.app.triggers.is_empty());
    assert!(ctx.app.suppression.is_empty());
    assert!(ctx.world.block(&pos).material().is_sign());
    assert_eq!(
        ctx.world.sign_lines(&pos),
        Some(SignLines::from(["[PaySign]", "Bob", "10", ""]))
    );
    assert_eq!(ctx.world.block(&base_pos()), BlockData::simple(Material::Stone));
    assert_eq!(ctx.app.scheduler.pending(), 0);
}

#[test]
fn delay_line_overrides_default_delay() {
    let ctx = E2EContext::new();
    let pos = ctx.place_wall_sign(["[PaySign]", "Bob", "0", "2"]);

    let result = ctx.app.on_player_interact(&mut ctx.click(&pos));
    assert_eq!(
        result,
        Activation::Scheduled {
            location: pos.clone(),
            delay: Ticks::new(40)
        }
    );

    ctx.app.tick();
    ctx.app.scheduler.advance(39);
    assert!(ctx.is_powered(&pos));
    ctx.app.tick();
    assert!(!ctx.is_powered(&pos));
}

#[test]
fn free_sign_moves_no_money_and_sends_no_payment_messages() {
    let ctx = E2EContext::new();
    let pos = ctx.place_wall_sign(["[PaySign]", "Bob", "0", ""]);

    ctx.app.on_player_interact(&mut ctx.click(&pos));
    ctx.app.tick();

    assert!(ctx.is_powered(&pos));
    assert_eq!(ctx.balance(&ctx.alice), 0.0);
    assert_eq!(ctx.balance(&ctx.bob), 0.0);
    assert!(ctx.messages(&ctx.alice).is_empty());
    assert!(ctx.messages(&ctx.bob).is_empty());
}

#[test]
fn too_poor_player_is_refused_and_nothing_changes() {
    let ctx = E2EContext::new();
    let pos = ctx.place_wall_sign(["[PaySign]", "Bob", "10", ""]);
    ctx.economy.set_balance(&ctx.alice.name, 5.0);

    let mut event = ctx.click(&pos);
    let result = ctx.app.on_player_interact(&mut event);

    assert!(matches!(
        result,
        Activation::Denied(ActivationDenial::Payment(PaymentError::InsufficientFunds { .. }))
    ));
    assert!(event.is_item_use_denied());
    assert_eq!(ctx.balance(&ctx.alice), 5.0);
    assert_eq!(ctx.balance(&ctx.bob), 0.0);
    assert_eq!(
        ctx.messages(&ctx.alice),
        vec!["§6§o[PaySign] §r§cYou are too poor to use this sign."]
    );

    ctx.app.scheduler.advance(100);
    assert!(ctx.world.writes().is_empty());
    assert!(ctx.app.triggers.is_empty());
    assert!(!ctx.app.triggers.is_busy(&pos));
}

#[test]
fn failed_deposit_refunds_the_payer() {
    let ctx = E2EContext::new();
    let pos = ctx.place_wall_sign(["[PaySign]", "Bob", "10", ""]);
    ctx.economy.set_balance(&ctx.alice.name, 20.0);
    ctx.economy.fail_deposits_for(&ctx.bob.name);

    let result = ctx.app.on_player_interact(&mut ctx.click(&pos));

    assert!(matches!(
        result,
        Activation::Denied(ActivationDenial::Payment(PaymentError::DepositFailed {
            refunded: true,
            ..
        }))
    ));
    assert_eq!(ctx.balance(&ctx.alice), 20.0);
    assert_eq!(ctx.balance(&ctx.bob), 0.0);
    assert_eq!(
        ctx.messages(&ctx.alice),
        vec!["§6§o[PaySign] §r§cCould not deposit target player."]
    );

    ctx.app.tick();
    assert!(ctx.world.writes().is_empty());
    assert!(ctx.messages(&ctx.bob).is_empty());
}

#[test]
fn decimals_are_truncated_when_disabled() {
    let config = crate::infrastructure::config::AppConfig {
        allow_decimals: false,
        ..Default::default()
    };
    let ctx = E2EContext::with_config(config);
    let pos = ctx.place_wall_sign(["[PaySign]", "Bob", "2.75", ""]);
    ctx.economy.set_balance(&ctx.alice.name, 10.0);

    ctx.app.on_player_interact(&mut ctx.click(&pos));

    assert_eq!(ctx.balance(&ctx.alice), 8.0);
    assert_eq!(ctx.balance(&ctx.bob), 2.0);
}

#[test]
fn second_click_while_active_is_refused_and_not_charged() {
    let ctx = E2EContext::new();
    let pos = ctx.place_wall_sign(["[PaySign]", "Bob", "1", "1"]);
    ctx.economy.set_balance(&ctx.alice.name, 10.0);

    ctx.app.on_player_interact(&mut ctx.click(&pos));
    // Before the trigger has even run.
    assert_eq!(
        ctx.app.on_player_interact(&mut ctx.click(&pos)),
        Activation::Denied(ActivationDenial::AlreadyActive)
    );
    ctx.app.tick();
    // While powered.
    assert_eq!(
        ctx.app.on_player_interact(&mut ctx.click(&pos)),
        Activation::Denied(ActivationDenial::AlreadyActive)
    );
    assert_eq!(ctx.balance(&ctx.alice), 9.0);

    ctx.app.scheduler.advance(20);
    assert!(ctx.app.triggers.is_empty());

    // Reverted, so the sign can be used again.
    assert!(matches!(
        ctx.app.on_player_interact(&mut ctx.click(&pos)),
        Activation::Scheduled { .. }
    ));
    assert_eq!(ctx.balance(&ctx.alice), 8.0);
}

#[test]
fn player_without_use_permission_is_refused() {
    let ctx = E2EContext::new();
    let pos = ctx.place_wall_sign(["[PaySign]", "Bob", "1", ""]);
    ctx.economy.set_balance(&ctx.alice.name, 10.0);
    ctx.permissions
        .revoke(ctx.alice.id, crate::use_cases::PERMISSION_USE);

    assert_eq!(
        ctx.app.on_player_interact(&mut ctx.click(&pos)),
        Activation::Denied(ActivationDenial::NoPermission)
    );
    assert_eq!(ctx.balance(&ctx.alice), 10.0);
}

#[test]
fn plain_signs_are_ignored() {
    let ctx = E2EContext::new();
    let pos = ctx.place_wall_sign(["Welcome", "to", "spawn", ""]);

    let mut event = ctx.click(&pos);
    assert_eq!(ctx.app.on_player_interact(&mut event), Activation::Ignored);
    assert!(!event.is_item_use_denied());
    assert!(ctx.messages(&ctx.alice).is_empty());
}

#[test]
fn activation_is_recorded_in_the_audit_log() {
    let ctx = E2EContext::new();
    let pos = ctx.place_wall_sign(["[PaySign]", "Bob", "0", ""]);

    ctx.app.on_player_interact(&mut ctx.click(&pos));
    assert!(ctx.audit.records().is_empty());
    ctx.app.tick();

    let records = ctx.audit.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].actor, ctx.alice.name);
    assert_eq!(records[0].location, pos);
    assert!(matches!(records[0].before, BlockData::Switch(s) if !s.powered));
    assert!(matches!(records[0].after, BlockData::Switch(s) if s.powered));
}

#[test]
fn shutdown_reverts_active_signs_exactly_once() {
    let ctx = E2EContext::new();
    let pos = ctx.place_wall_sign(["[PaySign]", "Bob", "0", "5"]);

    ctx.app.on_player_interact(&mut ctx.click(&pos));
    ctx.app.tick();
    assert!(ctx.is_powered(&pos));

    assert_eq!(ctx.app.shutdown(), 1);
    assert!(ctx.world.block(&pos).material().is_sign());
    assert!(ctx.app.triggers.is_empty());
    assert!(ctx.app.suppression.is_empty());
    let writes_after_shutdown = ctx.world.writes().len();

    // The queued reversion still fires but finds nothing left to do.
    ctx.app.scheduler.advance(200);
    assert_eq!(ctx.world.writes().len(), writes_after_shutdown);
    assert_eq!(ctx.app.shutdown(), 0);
}

#[test]
fn click_denied_by_another_listener_costs_nothing() {
    let ctx = E2EContext::new();
    let pos = ctx.place_wall_sign(["[PaySign]", "Bob", "10", ""]);
    ctx.economy.set_balance(&ctx.alice.name, 25.0);

    let mut event = ctx.click(&pos);
    event.cancel();

    assert_eq!(ctx.app.on_player_interact(&mut event), Activation::Ignored);
    ctx.app.tick();
    assert_eq!(ctx.balance(&ctx.alice), 25.0);
    assert_eq!(ctx.balance(&ctx.bob), 0.0);
    assert!(!ctx.is_powered(&pos));
    assert!(ctx.world.writes().is_empty());
    assert!(ctx.messages(&ctx.alice).is_empty());
}

#[test]
fn shutdown_before_the_next_tick_leaves_the_sign_alone() {
    let ctx = E2EContext::new();
    let pos = ctx.place_wall_sign(["[PaySign]", "Bob", "0", ""]);

    ctx.app.on_player_interact(&mut ctx.click(&pos));
    assert_eq!(ctx.app.shutdown(), 0);

    // The host keeps ticking for a while after disabling the plugin.
    ctx.app.scheduler.advance(100);
    assert!(ctx.app.triggers.is_empty());
    assert!(ctx.app.suppression.is_empty());
    assert!(ctx.world.writes().is_empty());
    assert!(ctx.world.block(&pos).material().is_sign());

    assert_eq!(
        ctx.app.on_player_interact(&mut ctx.click(&pos)),
        Activation::Ignored
    );
}
