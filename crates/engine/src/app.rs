//! Application state and composition.
//!
//! `App` owns the process-scoped state (scheduler, suppression table, active
//! triggers) and routes host events to the use cases. It is created empty at
//! startup and torn down with [`App::shutdown`].

use std::sync::Arc;

use paysign_domain::{PlayerInteractEvent, PlayerName, SignChangeEvent, WorldEvent};

use crate::infrastructure::config::AppConfig;
use crate::infrastructure::ports::{AuditPort, EconomyPort, PermissionPort, PlayerPort, WorldPort};
use crate::infrastructure::scheduler::TickScheduler;
use crate::messages::{MessageRenderer, PluginPrefix};
use crate::stores::{ActiveTriggers, SuppressionTable};
use crate::use_cases;

/// Host collaborators the engine is wired to.
pub struct HostPorts {
    pub world: Arc<dyn WorldPort>,
    pub economy: Arc<dyn EconomyPort>,
    pub permissions: Arc<dyn PermissionPort>,
    pub players: Arc<dyn PlayerPort>,
    /// Optional block activity logger.
    pub audit: Option<Arc<dyn AuditPort>>,
}

/// Container for all use cases.
pub struct UseCases {
    pub sign: use_cases::SignUseCases,
    pub charge: Arc<use_cases::ChargeForSign>,
}

/// Main application state.
pub struct App {
    pub config: AppConfig,
    pub scheduler: Arc<TickScheduler>,
    pub suppression: Arc<SuppressionTable>,
    pub triggers: Arc<ActiveTriggers>,
    pub use_cases: UseCases,
}

impl App {
    pub fn new(config: AppConfig, host: HostPorts) -> Self {
        let scheduler = Arc::new(TickScheduler::new());
        let suppression = Arc::new(SuppressionTable::new());
        let triggers = Arc::new(ActiveTriggers::new());
        let renderer: Arc<dyn MessageRenderer> =
            Arc::new(PluginPrefix::new(config.plugin_name.clone()));

        let ports = use_cases::SignPorts {
            world: host.world.clone(),
            permissions: host.permissions.clone(),
            players: host.players.clone(),
            renderer: renderer.clone(),
        };

        let charge = Arc::new(use_cases::ChargeForSign::new(
            host.economy.clone(),
            host.players.clone(),
            scheduler.clone(),
            renderer,
        ));

        let create = Arc::new(use_cases::CreatePaySign::new(
            ports.clone(),
            config.allow_decimals,
        ));

        let mut activate = use_cases::ActivatePaySign::new(
            ports,
            charge.clone(),
            scheduler.clone(),
            triggers.clone(),
            suppression.clone(),
            use_cases::ActivationSettings {
                allow_decimals: config.allow_decimals,
                default_delay: config.default_delay,
            },
        );
        if let Some(audit) = host.audit {
            tracing::info!("Block activity logging enabled");
            activate = activate.with_audit(audit);
        }

        let use_cases = UseCases {
            sign: use_cases::SignUseCases::new(create, Arc::new(activate)),
            charge,
        };

        Self {
            config,
            scheduler,
            suppression,
            triggers,
            use_cases,
        }
    }

    /// A player clicked something.
    pub fn on_player_interact(&self, event: &mut PlayerInteractEvent) -> use_cases::Activation {
        match self.use_cases.sign.activate.execute(event) {
            Ok(activation) => activation,
            Err(e) => {
                log_use_case_error(&e, &event.player.name, "Pay sign activation failed");
                use_cases::Activation::Ignored
            }
        }
    }

    /// A player finished editing sign text.
    pub fn on_sign_change(&self, event: &mut SignChangeEvent) -> use_cases::SignCreation {
        match self.use_cases.sign.create.execute(event) {
            Ok(creation) => creation,
            Err(e) => {
                log_use_case_error(&e, &event.player.name, "Pay sign creation failed");
                use_cases::SignCreation::Ignored
            }
        }
    }

    /// A block mutation is about to happen.
    ///
    /// Must run before any other listener sees the event. Returns whether
    /// the event was changed.
    pub fn on_world_event(&self, event: &mut WorldEvent) -> bool {
        let suppressed = self.suppression.suppress(event);
        if suppressed {
            tracing::trace!(event = ?event, "Suppressed world event on an active pay sign");
        }
        suppressed
    }

    /// Advances the main context by one tick.
    pub fn tick(&self) -> usize {
        self.scheduler.tick()
    }

    /// Puts every active sign back and stops accepting activations.
    ///
    /// Activations and reversions still queued on the scheduler find the
    /// registry closed or their triggers flushed and do nothing. Returns the
    /// number of triggers flushed.
    pub fn shutdown(&self) -> usize {
        let flushed = self.triggers.flush_all();
        tracing::info!(
            flushed,
            pending_tasks = self.scheduler.pending(),
            "PaySign shut down"
        );
        flushed
    }
}

/// Corrupted host state is an internal fault; a failed host call is not.
fn log_use_case_error(error: &use_cases::UseCaseError, player: &PlayerName, message: &str) {
    if error.is_host_invariant() {
        tracing::error!(player = %player, error = %error, "{message}");
    } else {
        tracing::warn!(player = %player, error = %error, "{message}");
    }
}
