//! In-memory world.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use dashmap::DashMap;
use paysign_domain::{BlockData, BlockPos, Material, SignBlock, SignLines, SoundEffect};

use crate::infrastructure::ports::{WorldError, WorldPort};

/// One `set_block` call as the world saw it.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockWrite {
    pub pos: BlockPos,
    pub data: BlockData,
    pub apply_physics: bool,
}

/// Block grid keyed by position; unknown positions read as air.
#[derive(Default)]
pub struct InMemoryWorld {
    blocks: DashMap<BlockPos, BlockData>,
    sign_text: DashMap<BlockPos, SignLines>,
    writes: Mutex<Vec<BlockWrite>>,
    sounds: Mutex<Vec<(BlockPos, SoundEffect)>>,
    broken: Mutex<Vec<BlockPos>>,
    failing_writes: Mutex<HashSet<BlockPos>>,
    fail_sounds: AtomicBool,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl InMemoryWorld {
    pub fn new() -> Self {
        Self::default()
    }

    /// Puts a block in place without recording a write.
    pub fn place(&self, pos: &BlockPos, data: BlockData) {
        self.blocks.insert(pos.clone(), data);
    }

    /// Puts a sign with text in place without recording a write.
    pub fn place_sign(&self, pos: &BlockPos, data: BlockData, lines: SignLines) {
        self.blocks.insert(pos.clone(), data);
        self.sign_text.insert(pos.clone(), lines);
    }

    pub fn block(&self, pos: &BlockPos) -> BlockData {
        self.blocks
            .get(pos)
            .map(|data| *data)
            .unwrap_or(BlockData::simple(Material::Air))
    }

    pub fn sign_lines(&self, pos: &BlockPos) -> Option<SignLines> {
        self.sign_text.get(pos).map(|lines| lines.clone())
    }

    pub fn writes(&self) -> Vec<BlockWrite> {
        lock(&self.writes).clone()
    }

    pub fn sounds(&self) -> Vec<(BlockPos, SoundEffect)> {
        lock(&self.sounds).clone()
    }

    pub fn broken(&self) -> Vec<BlockPos> {
        lock(&self.broken).clone()
    }

    /// Makes every later write to `pos` fail.
    pub fn fail_writes_to(&self, pos: &BlockPos) {
        lock(&self.failing_writes).insert(pos.clone());
    }

    pub fn fail_sounds(&self, fail: bool) {
        self.fail_sounds.store(fail, Ordering::Relaxed);
    }

    fn check_writable(&self, operation: &'static str, pos: &BlockPos) -> Result<(), WorldError> {
        if lock(&self.failing_writes).contains(pos) {
            return Err(WorldError::rejected(operation, pos, "write refused"));
        }
        Ok(())
    }
}

impl WorldPort for InMemoryWorld {
    fn block_at(&self, pos: &BlockPos) -> Result<BlockData, WorldError> {
        Ok(self.block(pos))
    }

    fn sign_at(&self, pos: &BlockPos) -> Result<Option<SignBlock>, WorldError> {
        let data = self.block(pos);
        if !data.material().is_sign() {
            return Ok(None);
        }
        let lines = self.sign_lines(pos).unwrap_or_default();
        Ok(Some(SignBlock::new(data, lines)))
    }

    fn set_block(
        &self,
        pos: &BlockPos,
        data: BlockData,
        apply_physics: bool,
    ) -> Result<(), WorldError> {
        self.check_writable("set_block", pos)?;
        self.blocks.insert(pos.clone(), data);
        if !data.material().is_sign() {
            self.sign_text.remove(pos);
        }
        lock(&self.writes).push(BlockWrite {
            pos: pos.clone(),
            data,
            apply_physics,
        });
        Ok(())
    }

    fn restore_sign(&self, pos: &BlockPos, sign: &SignBlock) -> Result<(), WorldError> {
        self.check_writable("restore_sign", pos)?;
        self.blocks.insert(pos.clone(), sign.data);
        self.sign_text.insert(pos.clone(), sign.lines.clone());
        lock(&self.writes).push(BlockWrite {
            pos: pos.clone(),
            data: sign.data,
            apply_physics: false,
        });
        Ok(())
    }

    fn play_sound(&self, pos: &BlockPos, effect: SoundEffect) -> Result<(), WorldError> {
        if self.fail_sounds.load(Ordering::Relaxed) {
            return Err(WorldError::rejected("play_sound", pos, "sound refused"));
        }
        lock(&self.sounds).push((pos.clone(), effect));
        Ok(())
    }

    fn break_naturally(&self, pos: &BlockPos) -> Result<(), WorldError> {
        self.check_writable("break_naturally", pos)?;
        self.blocks.remove(pos);
        self.sign_text.remove(pos);
        lock(&self.broken).push(pos.clone());
        Ok(())
    }
}
