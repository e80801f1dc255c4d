//! Pay sign record
//!
//! A `SignRecord` is the parsed, immutable view of a placed pay sign: where it
//! is, what block it is, the text it carries and the payment terms written on
//! it. The world owns the sign itself; the record is a snapshot taken when the
//! text was validated.

use crate::error::DomainError;
use crate::value_objects::{
    parse_sign_lines, BlockData, BlockFace, BlockPos, Material, PlayerName, Price, SignLines,
    SignParseError, SignTerms, Switch, SwitchFace, Ticks, WoodType,
};

/// Material of the fake button shown while a sign is powered.
pub const FAKE_BUTTON_MATERIAL: Material = Material::Button(WoodType::Oak);

/// Facing used for floor-mounted fake buttons (floor buttons still need one).
pub const FLOOR_BUTTON_FACING: BlockFace = BlockFace::North;

/// Host snapshot of a sign block: its data and its text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SignBlock {
    pub data: BlockData,
    pub lines: SignLines,
}

impl SignBlock {
    pub fn new(data: BlockData, lines: SignLines) -> Self {
        Self { data, lines }
    }
}

/// A validated pay sign.
#[derive(Debug, Clone, PartialEq)]
pub struct SignRecord {
    location: BlockPos,
    block: SignBlock,
    owner: PlayerName,
    price: Price,
    delay: Option<Ticks>,
}

impl SignRecord {
    /// Parses the text of a sign block.
    ///
    /// Returns `Ok(None)` when the block does not carry a pay sign.
    pub fn parse(location: BlockPos, block: SignBlock) -> Result<Option<Self>, SignParseError> {
        let terms = parse_sign_lines(&block.lines)?;
        Ok(terms.map(|terms| Self::from_terms(location, block, terms)))
    }

    pub fn from_terms(location: BlockPos, block: SignBlock, terms: SignTerms) -> Self {
        Self {
            location,
            block,
            owner: terms.owner,
            price: terms.price,
            delay: terms.delay,
        }
    }

    pub fn location(&self) -> &BlockPos {
        &self.location
    }

    pub fn block(&self) -> &SignBlock {
        &self.block
    }

    pub fn owner(&self) -> &PlayerName {
        &self.owner
    }

    pub fn price(&self) -> Price {
        self.price
    }

    /// Price actually charged under the server's decimal policy.
    pub fn effective_price(&self, allow_decimals: bool) -> f64 {
        self.price.effective(allow_decimals)
    }

    /// Reversion delay written on the sign, if any.
    pub fn delay(&self) -> Option<Ticks> {
        self.delay
    }

    pub fn delay_seconds(&self) -> u32 {
        self.delay.map(Ticks::as_seconds).unwrap_or(0)
    }

    /// Direction the sign faces: `Up` for floor signs, the wall facing for
    /// wall signs.
    ///
    /// # Errors
    ///
    /// `DomainError::UnsupportedSignMaterial` when the block is not a sign the
    /// host should have reported; that is a host-state invariant violation.
    pub fn facing(&self) -> Result<BlockFace, DomainError> {
        let material = self.block.data.material();
        match self.block.data {
            _ if material.is_standing_sign() => Ok(BlockFace::Up),
            BlockData::Directional { facing, .. } if material.is_wall_sign() => Ok(facing),
            _ => Err(DomainError::unsupported_sign_material(material)),
        }
    }

    /// The block the sign is attached to; this is what gets "powered".
    pub fn base_block(&self) -> Result<BlockPos, DomainError> {
        Ok(self.location.relative(self.facing()?.opposite()))
    }

    /// Powered button standing in for the sign while it is active.
    pub fn fake_button(&self) -> Result<Switch, DomainError> {
        let facing = self.facing()?;
        let (face, facing) = if facing == BlockFace::Up {
            (SwitchFace::Floor, FLOOR_BUTTON_FACING)
        } else {
            (SwitchFace::Wall, facing)
        };
        Ok(Switch {
            material: FAKE_BUTTON_MATERIAL,
            face,
            facing,
            powered: true,
        })
    }
}
