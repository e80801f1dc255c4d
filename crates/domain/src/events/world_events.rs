//! Block mutation events.

use serde::{Deserialize, Serialize};

use crate::value_objects::BlockPos;

/// Single-block mutations; suppression cancels the whole event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockEventKind {
    Break,
    Burn,
    Fade,
    EntityChangeBlock,
    Physics,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockEvent {
    pub kind: BlockEventKind,
    pub block: BlockPos,
    cancelled: bool,
}

impl BlockEvent {
    pub fn new(kind: BlockEventKind, block: BlockPos) -> Self {
        Self {
            kind,
            block,
            cancelled: false,
        }
    }
}

/// Who set off an explosion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExplosionSource {
    Block,
    Entity,
}

/// Explosion; suppression drops protected blocks from `blocks` and leaves
/// the rest of the explosion in effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplosionEvent {
    pub source: ExplosionSource,
    pub blocks: Vec<BlockPos>,
    cancelled: bool,
}

impl ExplosionEvent {
    pub fn new(source: ExplosionSource, blocks: Vec<BlockPos>) -> Self {
        Self {
            source,
            blocks,
            cancelled: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PistonAction {
    Extend,
    Retract,
}

/// Piston move; a push or pull cannot be partial, so touching a protected
/// block cancels it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PistonEvent {
    pub action: PistonAction,
    pub blocks: Vec<BlockPos>,
    cancelled: bool,
}

impl PistonEvent {
    pub fn new(action: PistonAction, blocks: Vec<BlockPos>) -> Self {
        Self {
            action,
            blocks,
            cancelled: false,
        }
    }
}

/// Any block mutation the host asks listeners about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorldEvent {
    Block(BlockEvent),
    Explosion(ExplosionEvent),
    Piston(PistonEvent),
}

impl WorldEvent {
    pub fn block(kind: BlockEventKind, block: BlockPos) -> Self {
        WorldEvent::Block(BlockEvent::new(kind, block))
    }

    pub fn explosion(source: ExplosionSource, blocks: Vec<BlockPos>) -> Self {
        WorldEvent::Explosion(ExplosionEvent::new(source, blocks))
    }

    pub fn piston(action: PistonAction, blocks: Vec<BlockPos>) -> Self {
        WorldEvent::Piston(PistonEvent::new(action, blocks))
    }

    pub fn is_cancelled(&self) -> bool {
        match self {
            WorldEvent::Block(e) => e.cancelled,
            WorldEvent::Explosion(e) => e.cancelled,
            WorldEvent::Piston(e) => e.cancelled,
        }
    }

    pub fn set_cancelled(&mut self, cancelled: bool) {
        match self {
            WorldEvent::Block(e) => e.cancelled = cancelled,
            WorldEvent::Explosion(e) => e.cancelled = cancelled,
            WorldEvent::Piston(e) => e.cancelled = cancelled,
        }
    }

    /// Every block position the event would touch.
    pub fn affected_blocks(&self) -> Vec<&BlockPos> {
        match self {
            WorldEvent::Block(e) => vec![&e.block],
            WorldEvent::Explosion(e) => e.blocks.iter().collect(),
            WorldEvent::Piston(e) => e.blocks.iter().collect(),
        }
    }
}
