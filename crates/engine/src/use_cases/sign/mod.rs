//! Sign use cases.
//!
//! Creating pay signs from edited sign text and activating them on click.

use std::sync::Arc;

use crate::infrastructure::ports::{PermissionPort, PlayerPort, WorldPort};
use crate::messages::MessageRenderer;

mod activate;
mod create;
mod error;

pub use activate::{ActivatePaySign, Activation, ActivationDenial, ActivationSettings};
pub use create::{CreatePaySign, CreateRejection, SignCreation};
pub use error::UseCaseError;

pub const PERMISSION_CREATE: &str = "craftservepaysign.create";
pub const PERMISSION_CREATE_OTHER: &str = "craftservepaysign.create.other";
pub const PERMISSION_USE: &str = "craftservepaysign.use";

/// Host ports shared by the sign use cases.
#[derive(Clone)]
pub struct SignPorts {
    pub world: Arc<dyn WorldPort>,
    pub permissions: Arc<dyn PermissionPort>,
    pub players: Arc<dyn PlayerPort>,
    pub renderer: Arc<dyn MessageRenderer>,
}

/// Container for sign use cases.
pub struct SignUseCases {
    pub create: Arc<CreatePaySign>,
    pub activate: Arc<ActivatePaySign>,
}

impl SignUseCases {
    pub fn new(create: Arc<CreatePaySign>, activate: Arc<ActivatePaySign>) -> Self {
        Self { create, activate }
    }
}
