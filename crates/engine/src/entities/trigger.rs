//! Trigger entity - one activation of a pay sign.
//!
//! A trigger turns its sign into a powered button, nudges the block the sign
//! hangs on so redstone around it updates, and later puts everything back.
//!
//! ```text
//! Inactive --execute--> Active --flush--> Flushed
//!     \                                     ^
//!      `------ execute failed / flush ------'
//! ```
//!
//! `Flushed` is terminal. Flushing more than once is a no-op, so the
//! scheduled reversion and a shutdown flush can race without reverting twice.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use paysign_domain::{
    BlockData, BlockPos, DomainError, SignRecord, Sound, SoundCategory, SoundEffect, Switch,
    TriggerId,
};

use crate::infrastructure::ports::{WorldError, WorldPort};
use crate::stores::suppression::{SuppressionLease, SuppressionTable};

pub const CLICK_VOLUME: f32 = 0.3;

pub const CLICK_ON: SoundEffect = SoundEffect {
    sound: Sound::WoodenButtonClickOn,
    category: SoundCategory::Blocks,
    volume: CLICK_VOLUME,
    pitch: 0.6,
};

pub const CLICK_OFF: SoundEffect = SoundEffect {
    sound: Sound::WoodenButtonClickOff,
    category: SoundCategory::Blocks,
    volume: CLICK_VOLUME,
    pitch: 0.5,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriggerState {
    Inactive,
    Active,
    Flushed,
}

impl fmt::Display for TriggerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TriggerState::Inactive => f.write_str("inactive"),
            TriggerState::Active => f.write_str("active"),
            TriggerState::Flushed => f.write_str("flushed"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TriggerError {
    #[error("Invalid state transition: cannot execute a trigger that is {0}")]
    InvalidTransition(TriggerState),
    /// The host reported a sign block that cannot be powered.
    #[error("Invalid sign block: {0}")]
    InvalidSign(#[from] DomainError),
    #[error(transparent)]
    World(#[from] WorldError),
}

/// Result of a flush that did not hit a world error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlushOutcome {
    /// The sign was put back and the base block nudged.
    Reverted,
    /// The trigger never got past `Inactive`; nothing to put back.
    NothingToRevert,
    /// An earlier flush already ran.
    AlreadyFlushed,
}

enum Phase {
    Inactive,
    Active {
        base_block: BlockPos,
        lease: SuppressionLease,
    },
    Flushed,
}

impl Phase {
    fn state(&self) -> TriggerState {
        match self {
            Phase::Inactive => TriggerState::Inactive,
            Phase::Active { .. } => TriggerState::Active,
            Phase::Flushed => TriggerState::Flushed,
        }
    }
}

/// A single pay sign activation.
pub struct Trigger {
    id: TriggerId,
    sign: SignRecord,
    world: Arc<dyn WorldPort>,
    suppression: Arc<SuppressionTable>,
    phase: Mutex<Phase>,
}

impl Trigger {
    pub fn new(
        sign: SignRecord,
        world: Arc<dyn WorldPort>,
        suppression: Arc<SuppressionTable>,
    ) -> Self {
        Self {
            id: TriggerId::new(),
            sign,
            world,
            suppression,
            phase: Mutex::new(Phase::Inactive),
        }
    }

    pub fn id(&self) -> TriggerId {
        self.id
    }

    pub fn location(&self) -> &BlockPos {
        self.sign.location()
    }

    pub fn state(&self) -> TriggerState {
        self.lock_phase().state()
    }

    /// Base block being nudged, while active.
    pub fn base_block(&self) -> Option<BlockPos> {
        match &*self.lock_phase() {
            Phase::Active { base_block, .. } => Some(base_block.clone()),
            _ => None,
        }
    }

    fn lock_phase(&self) -> MutexGuard<'_, Phase> {
        self.phase.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Powers the sign: swaps it for a pressed button and nudges its base block.
    ///
    /// Suppression over the sign and base block is taken before the first
    /// world mutation. On failure the trigger ends up `Flushed`, the lease is
    /// released and the sign is put back on a best-effort basis. A failed
    /// click sound is only logged.
    ///
    /// Returns the fake button that now stands where the sign was.
    pub fn execute(&self) -> Result<Switch, TriggerError> {
        let mut phase = self.lock_phase();
        if !matches!(*phase, Phase::Inactive) {
            return Err(TriggerError::InvalidTransition(phase.state()));
        }
        // Terminal unless activation completes below.
        *phase = Phase::Flushed;

        let base_block = self.sign.base_block()?;
        let button = self.sign.fake_button()?;
        let location = self.sign.location();

        let lease = self
            .suppression
            .protect(self.id, vec![location.clone(), base_block.clone()]);

        self.world.set_block(location, button.into(), true)?;

        if let Err(e) = self.world.play_sound(location, CLICK_ON) {
            tracing::warn!(trigger_id = %self.id, error = %e, "Could not play button click");
        }

        if let Err(e) = self.nudge(&base_block) {
            if let Err(restore) = self.world.restore_sign(location, self.sign.block()) {
                tracing::error!(
                    trigger_id = %self.id,
                    location = %location,
                    error = %restore,
                    "Could not put sign back after failed activation"
                );
            }
            return Err(e.into());
        }

        tracing::debug!(
            trigger_id = %self.id,
            location = %location,
            base_block = %base_block,
            "Trigger active"
        );
        *phase = Phase::Active { base_block, lease };
        Ok(button)
    }

    /// Reverts the sign and releases suppression. Runs at most once.
    ///
    /// Every revert step is attempted even if an earlier one fails; the
    /// first failure is returned after cleanup has finished. The trigger is
    /// `Flushed` afterwards either way.
    pub fn flush(&self) -> Result<FlushOutcome, TriggerError> {
        let mut phase = self.lock_phase();
        let (base_block, lease) = match std::mem::replace(&mut *phase, Phase::Flushed) {
            Phase::Active { base_block, lease } => (base_block, lease),
            Phase::Inactive => return Ok(FlushOutcome::NothingToRevert),
            Phase::Flushed => return Ok(FlushOutcome::AlreadyFlushed),
        };

        let location = self.sign.location();
        let mut first_error: Option<WorldError> = None;

        if let Err(e) = self.world.restore_sign(location, self.sign.block()) {
            tracing::error!(trigger_id = %self.id, location = %location, error = %e, "Could not restore sign");
            first_error.get_or_insert(e);
        }
        if let Err(e) = self.world.play_sound(location, CLICK_OFF) {
            tracing::warn!(trigger_id = %self.id, error = %e, "Could not play button release");
        }
        if let Err(e) = self.nudge(&base_block) {
            tracing::error!(trigger_id = %self.id, base_block = %base_block, error = %e, "Could not update base block");
            first_error.get_or_insert(e);
        }

        drop(lease);
        tracing::debug!(trigger_id = %self.id, location = %location, "Trigger flushed");

        match first_error {
            Some(e) => Err(e.into()),
            None => Ok(FlushOutcome::Reverted),
        }
    }

    /// Makes the host re-run physics on `pos` by briefly swapping in a
    /// placeholder material, then restoring the original data with physics.
    fn nudge(&self, pos: &BlockPos) -> Result<(), WorldError> {
        let original = self.world.block_at(pos)?;
        let placeholder = original.material().physics_placeholder_for();
        self.world
            .set_block(pos, BlockData::simple(placeholder), false)?;
        self.world.set_block(pos, original, true)
    }
}

impl fmt::Debug for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trigger")
            .field("id", &self.id)
            .field("location", self.sign.location())
            .field("state", &self.state())
            .finish()
    }
}
