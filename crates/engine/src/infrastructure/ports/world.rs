//! Host world ports: block state, sounds and permissions.

use paysign_domain::{BlockData, BlockPos, PlayerRef, SignBlock, SoundEffect};

use super::error::WorldError;

// =============================================================================
// World Access
// =============================================================================

/// Block-level access to the host world.
///
/// Every call happens on the host's main context.
#[cfg_attr(test, mockall::automock)]
pub trait WorldPort: Send + Sync {
    /// Current data of the block at `pos` (air for empty space).
    fn block_at(&self, pos: &BlockPos) -> Result<BlockData, WorldError>;

    /// Data and text of the sign at `pos`, or `None` if it is not a sign.
    fn sign_at(&self, pos: &BlockPos) -> Result<Option<SignBlock>, WorldError>;

    /// Replaces the block at `pos`, optionally letting the host run physics.
    fn set_block(
        &self,
        pos: &BlockPos,
        data: BlockData,
        apply_physics: bool,
    ) -> Result<(), WorldError>;

    /// Writes a sign snapshot (data and text) back and pushes it to clients.
    fn restore_sign(&self, pos: &BlockPos, sign: &SignBlock) -> Result<(), WorldError>;

    fn play_sound(&self, pos: &BlockPos, effect: SoundEffect) -> Result<(), WorldError>;

    /// Breaks the block as if mined, dropping it as an item.
    fn break_naturally(&self, pos: &BlockPos) -> Result<(), WorldError>;
}

// =============================================================================
// Permissions
// =============================================================================

#[cfg_attr(test, mockall::automock)]
pub trait PermissionPort: Send + Sync {
    fn has_permission(&self, player: &PlayerRef, permission: &str) -> bool;
}
