//! Event suppression for blocks held by active triggers.
//!
//! While a trigger is active, its sign and base block must not be broken,
//! burned, faded, moved or changed by the host. Triggers take a
//! [`SuppressionLease`] over those positions; world events touching them are
//! cancelled (or filtered, for explosions) until the lease is dropped.

use std::sync::Arc;

use dashmap::DashMap;
use paysign_domain::{BlockPos, TriggerId, WorldEvent};

/// Protected positions and the triggers holding them.
#[derive(Default)]
pub struct SuppressionTable {
    protected: DashMap<BlockPos, Vec<TriggerId>>,
}

impl SuppressionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Protects `blocks` on behalf of `owner` until the returned lease drops.
    pub fn protect(self: &Arc<Self>, owner: TriggerId, blocks: Vec<BlockPos>) -> SuppressionLease {
        for pos in &blocks {
            self.protected.entry(pos.clone()).or_default().push(owner);
        }
        tracing::trace!(trigger_id = %owner, blocks = blocks.len(), "Suppression lease taken");
        SuppressionLease {
            table: Arc::clone(self),
            owner,
            blocks,
        }
    }

    pub fn is_protected(&self, pos: &BlockPos) -> bool {
        self.protected.contains_key(pos)
    }

    /// Number of protected positions.
    pub fn len(&self) -> usize {
        self.protected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.protected.is_empty()
    }

    /// Applies suppression to a host event.
    ///
    /// Block events and piston moves touching a protected position are
    /// cancelled outright; explosions only lose the protected blocks from
    /// their block list. Events some other handler already cancelled are left
    /// alone. Returns whether the event was changed.
    pub fn suppress(&self, event: &mut WorldEvent) -> bool {
        if self.is_empty() || event.is_cancelled() {
            return false;
        }

        let hit = match event {
            WorldEvent::Block(block) => self.is_protected(&block.block),
            WorldEvent::Piston(piston) => piston.blocks.iter().any(|pos| self.is_protected(pos)),
            WorldEvent::Explosion(explosion) => {
                let before = explosion.blocks.len();
                explosion.blocks.retain(|pos| !self.is_protected(pos));
                return explosion.blocks.len() != before;
            }
        };

        if hit {
            event.set_cancelled(true);
        }
        hit
    }

    fn release(&self, owner: TriggerId, blocks: &[BlockPos]) {
        for pos in blocks {
            if let Some(mut owners) = self.protected.get_mut(pos) {
                owners.retain(|id| *id != owner);
            }
            self.protected.remove_if(pos, |_, owners| owners.is_empty());
        }
    }
}

/// Protection over a set of positions, released on drop.
///
/// Dropping happens on every exit path of the holder, including early
/// returns after a failed world mutation.
pub struct SuppressionLease {
    table: Arc<SuppressionTable>,
    owner: TriggerId,
    blocks: Vec<BlockPos>,
}

impl Drop for SuppressionLease {
    fn drop(&mut self) {
        self.table.release(self.owner, &self.blocks);
        tracing::trace!(trigger_id = %self.owner, "Suppression lease released");
    }
}

impl std::fmt::Debug for SuppressionLease {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SuppressionLease")
            .field("owner", &self.owner)
            .field("blocks", &self.blocks)
            .finish()
    }
}
