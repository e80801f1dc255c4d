//! Player-driven events: clicking blocks and editing sign text.

use crate::entities::PlayerRef;
use crate::value_objects::{BlockPos, SignLines};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InteractAction {
    LeftClickBlock,
    RightClickBlock,
    LeftClickAir,
    RightClickAir,
    Physical,
}

/// A player interacting with the world.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerInteractEvent {
    pub player: PlayerRef,
    pub action: InteractAction,
    pub sneaking: bool,
    pub clicked: Option<BlockPos>,
    item_use_denied: bool,
    cancelled: bool,
}

impl PlayerInteractEvent {
    pub fn new(
        player: PlayerRef,
        action: InteractAction,
        sneaking: bool,
        clicked: Option<BlockPos>,
    ) -> Self {
        Self {
            player,
            action,
            sneaking,
            clicked,
            item_use_denied: false,
            cancelled: false,
        }
    }

    /// Right click on a block while standing.
    pub fn right_click(player: PlayerRef, block: BlockPos) -> Self {
        Self::new(player, InteractAction::RightClickBlock, false, Some(block))
    }

    /// Stops the host from also using the item in the player's hand.
    pub fn deny_item_use(&mut self) {
        self.item_use_denied = true;
    }

    pub fn is_item_use_denied(&self) -> bool {
        self.item_use_denied
    }

    /// Marks the interaction as denied by another listener.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}

/// A player finishing an edit of sign text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignChangeEvent {
    pub player: PlayerRef,
    pub block: BlockPos,
    pub lines: SignLines,
    cancelled: bool,
}

impl SignChangeEvent {
    pub fn new(player: PlayerRef, block: BlockPos, lines: SignLines) -> Self {
        Self {
            player,
            block,
            lines,
            cancelled: false,
        }
    }

    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}
