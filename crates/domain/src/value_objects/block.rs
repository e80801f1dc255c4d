//! Block-level value objects shared with the host world.
//!
//! These mirror the small slice of host block state a pay sign touches:
//! positions, faces, materials and the orientation/power data of signs and
//! switches.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// BlockFace
// ============================================================================

/// One of the six faces of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockFace {
    North,
    East,
    South,
    West,
    Up,
    Down,
}

impl BlockFace {
    /// Unit offset `(dx, dy, dz)` pointing out of this face.
    pub fn offset(self) -> (i32, i32, i32) {
        match self {
            BlockFace::North => (0, 0, -1),
            BlockFace::East => (1, 0, 0),
            BlockFace::South => (0, 0, 1),
            BlockFace::West => (-1, 0, 0),
            BlockFace::Up => (0, 1, 0),
            BlockFace::Down => (0, -1, 0),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            BlockFace::North => BlockFace::South,
            BlockFace::East => BlockFace::West,
            BlockFace::South => BlockFace::North,
            BlockFace::West => BlockFace::East,
            BlockFace::Up => BlockFace::Down,
            BlockFace::Down => BlockFace::Up,
        }
    }
}

impl fmt::Display for BlockFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BlockFace::North => "north",
            BlockFace::East => "east",
            BlockFace::South => "south",
            BlockFace::West => "west",
            BlockFace::Up => "up",
            BlockFace::Down => "down",
        };
        f.write_str(name)
    }
}

// ============================================================================
// BlockPos
// ============================================================================

/// Absolute block position inside a named world.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockPos {
    pub world: String,
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    pub fn new(world: impl Into<String>, x: i32, y: i32, z: i32) -> Self {
        Self {
            world: world.into(),
            x,
            y,
            z,
        }
    }

    /// The neighbouring position on the given face.
    pub fn relative(&self, face: BlockFace) -> Self {
        let (dx, dy, dz) = face.offset();
        Self {
            world: self.world.clone(),
            x: self.x + dx,
            y: self.y + dy,
            z: self.z + dz,
        }
    }
}

impl fmt::Display for BlockPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}, {}, {})", self.world, self.x, self.y, self.z)
    }
}

// ============================================================================
// Material
// ============================================================================

/// Wood variants that come in sign and button form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WoodType {
    Oak,
    Spruce,
    Birch,
    Jungle,
    Acacia,
    DarkOak,
    Crimson,
    Warped,
}

impl WoodType {
    fn as_str(self) -> &'static str {
        match self {
            WoodType::Oak => "oak",
            WoodType::Spruce => "spruce",
            WoodType::Birch => "birch",
            WoodType::Jungle => "jungle",
            WoodType::Acacia => "acacia",
            WoodType::DarkOak => "dark_oak",
            WoodType::Crimson => "crimson",
            WoodType::Warped => "warped",
        }
    }
}

/// Block material as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Material {
    Air,
    Stone,
    Dirt,
    Barrier,
    RedstoneLamp,
    Piston,
    /// Floor-mounted sign.
    Sign(WoodType),
    WallSign(WoodType),
    Button(WoodType),
}

impl Material {
    pub fn is_standing_sign(self) -> bool {
        matches!(self, Material::Sign(_))
    }

    pub fn is_wall_sign(self) -> bool {
        matches!(self, Material::WallSign(_))
    }

    pub fn is_sign(self) -> bool {
        self.is_standing_sign() || self.is_wall_sign()
    }

    /// Material swapped in for a moment to make the host re-run physics.
    ///
    /// Never the block's own material, otherwise the host sees no change.
    pub fn physics_placeholder_for(self) -> Material {
        if self == Material::Barrier {
            Material::Stone
        } else {
            Material::Barrier
        }
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Material::Air => f.write_str("air"),
            Material::Stone => f.write_str("stone"),
            Material::Dirt => f.write_str("dirt"),
            Material::Barrier => f.write_str("barrier"),
            Material::RedstoneLamp => f.write_str("redstone_lamp"),
            Material::Piston => f.write_str("piston"),
            Material::Sign(wood) => write!(f, "{}_sign", wood.as_str()),
            Material::WallSign(wood) => write!(f, "{}_wall_sign", wood.as_str()),
            Material::Button(wood) => write!(f, "{}_button", wood.as_str()),
        }
    }
}

// ============================================================================
// Switch
// ============================================================================

/// Which surface a switch is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwitchFace {
    Floor,
    Wall,
    Ceiling,
}

/// Button/lever block data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Switch {
    pub material: Material,
    pub face: SwitchFace,
    pub facing: BlockFace,
    pub powered: bool,
}

impl Switch {
    /// Copy of this switch with a different power state.
    pub fn with_powered(self, powered: bool) -> Self {
        Self { powered, ..self }
    }
}

// ============================================================================
// BlockData
// ============================================================================

/// Material plus the orientation/power state the host attaches to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BlockData {
    Simple { material: Material },
    Directional { material: Material, facing: BlockFace },
    Switch(Switch),
}

impl BlockData {
    pub fn simple(material: Material) -> Self {
        BlockData::Simple { material }
    }

    pub fn directional(material: Material, facing: BlockFace) -> Self {
        BlockData::Directional { material, facing }
    }

    pub fn material(&self) -> Material {
        match self {
            BlockData::Simple { material } | BlockData::Directional { material, .. } => *material,
            BlockData::Switch(switch) => switch.material,
        }
    }

    pub fn facing(&self) -> Option<BlockFace> {
        match self {
            BlockData::Simple { .. } => None,
            BlockData::Directional { facing, .. } => Some(*facing),
            BlockData::Switch(switch) => Some(switch.facing),
        }
    }
}

impl From<Switch> for BlockData {
    fn from(switch: Switch) -> Self {
        BlockData::Switch(switch)
    }
}

// ============================================================================
// Sounds
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sound {
    WoodenButtonClickOn,
    WoodenButtonClickOff,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoundCategory {
    Blocks,
}

/// A sound to play at a block position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SoundEffect {
    pub sound: Sound,
    pub category: SoundCategory,
    pub volume: f32,
    pub pitch: f32,
}
