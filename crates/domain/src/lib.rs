//! PaySign domain.
//!
//! Pure values and invariants for pay signs: host block vocabulary, sign text
//! parsing, the parsed `SignRecord`, and the host events the engine reacts to.
//! Nothing in this crate performs I/O.

pub mod entities;
pub mod error;
pub mod events;
pub mod ids;
pub mod value_objects;

pub use entities::{
    PlayerRef, SignBlock, SignRecord, FAKE_BUTTON_MATERIAL, FLOOR_BUTTON_FACING,
};

pub use error::DomainError;

pub use events::{
    BlockEvent, BlockEventKind, ExplosionEvent, ExplosionSource, InteractAction, PistonAction,
    PistonEvent, PlayerInteractEvent, SignChangeEvent, WorldEvent,
};

pub use ids::{PlayerId, TriggerId};

pub use value_objects::{
    is_pay_sign, parse_sign_lines, strip_color, BlockData, BlockFace, BlockPos, ChatColor,
    Material, PlayerName, Price, SignLines, SignParseError, SignParseErrorKind, SignTerms, Sound,
    SoundCategory, SoundEffect, Switch, SwitchFace, Ticks, WoodType, COLOR_CHAR, NAMESPACE,
    NAMESPACE_COLOR, SIGN_LINE_COUNT, TICKS_PER_SECOND,
};
