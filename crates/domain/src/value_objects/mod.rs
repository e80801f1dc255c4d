//! Value objects - Immutable objects defined by their attributes

mod block;
mod names;
mod price;
mod sign_text;
mod text;
mod ticks;

// Host block vocabulary
pub use block::{
    BlockData, BlockFace, BlockPos, Material, Sound, SoundCategory, SoundEffect, Switch,
    SwitchFace, WoodType,
};

pub use names::PlayerName;
pub use price::Price;
pub use ticks::{Ticks, TICKS_PER_SECOND};

// Chat formatting codes
pub use text::{strip_color, ChatColor, COLOR_CHAR};

// Sign text parsing
pub use sign_text::{
    is_pay_sign, parse_sign_lines, SignLines, SignParseError, SignParseErrorKind, SignTerms,
    NAMESPACE, NAMESPACE_COLOR, SIGN_LINE_COUNT,
};
