//! Block material kinds and their legacy data-byte layouts.
//!
//! Gate designs are declared against abstract materials; the raw data byte a
//! world hands back encodes orientation, color, and open state differently
//! per kind. The [`DataLayout`] table below is the single place that knows
//! how to decode and re-encode those bytes.

use super::data::BlockData;
use super::facing::Facing;

/// Liquid families whose flowing and stationary variants are interchangeable
/// for structure matching.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LiquidFamily {
    Water,
    Lava,
}

/// Dye colors carried by colorable blocks, in legacy nibble order.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum DyeColor {
    White,
    Orange,
    Magenta,
    LightBlue,
    Yellow,
    Lime,
    Pink,
    Gray,
    Silver,
    Cyan,
    Purple,
    Blue,
    Brown,
    Green,
    Red,
    Black,
}

impl DyeColor {
    /// All colors in data-nibble order.
    pub const ALL: [DyeColor; 16] = [
        DyeColor::White,
        DyeColor::Orange,
        DyeColor::Magenta,
        DyeColor::LightBlue,
        DyeColor::Yellow,
        DyeColor::Lime,
        DyeColor::Pink,
        DyeColor::Gray,
        DyeColor::Silver,
        DyeColor::Cyan,
        DyeColor::Purple,
        DyeColor::Blue,
        DyeColor::Brown,
        DyeColor::Green,
        DyeColor::Red,
        DyeColor::Black,
    ];

    pub(crate) fn from_nibble(nibble: u8) -> DyeColor {
        Self::ALL[(nibble & 0x0F) as usize]
    }

    pub(crate) fn nibble(self) -> u8 {
        Self::ALL.iter().position(|&c| c == self).unwrap_or(0) as u8
    }
}

/// Fundamental block types a gate design can reference.
///
/// Names serialize in SCREAMING_SNAKE_CASE so existing gate definition files
/// (`SIGN_POST`, `STATIONARY_WATER`, ...) parse unchanged.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum MaterialKind {
    Air,
    Stone,
    Cobblestone,
    Bedrock,
    Obsidian,
    Glass,
    Glowstone,
    Netherrack,
    Portal,
    IronBlock,
    GoldBlock,
    DiamondBlock,
    Wool,
    Water,
    StationaryWater,
    Lava,
    StationaryLava,
    SignPost,
    WallSign,
    Ladder,
    Lever,
    StoneButton,
    WoodenDoor,
    IronDoor,
    TrapDoor,
    FenceGate,
    Pumpkin,
    Dispenser,
}

/// How a kind packs orientation/color/open state into its data byte.
#[derive(Clone, Copy)]
enum DataLayout {
    /// Data byte carries no decoded capability.
    Plain,
    /// Rotation nibble, 16 steps of 22.5 degrees starting at south.
    SignRotation,
    /// Mounted on a wall: 2=north 3=south 4=west 5=east.
    WallMounted,
    /// Attached to a block face: 1=east 2=west 3=south 4=north.
    Attachable,
    /// Facing in the low two bits plus an open bit at 0x4.
    Hinged { facings: [Facing; 4] },
    /// Facing in the low two bits only.
    Quadrant { facings: [Facing; 4] },
    /// 0=down 1=up, then wall-mounted values.
    SixWay,
    /// Low nibble is a dye color.
    Colored,
}

const OPEN_BIT: u8 = 0x4;

const DOOR_FACINGS: [Facing; 4] = [Facing::West, Facing::North, Facing::East, Facing::South];
const TRAPDOOR_FACINGS: [Facing; 4] = [Facing::South, Facing::North, Facing::East, Facing::West];
const GATE_FACINGS: [Facing; 4] = [Facing::South, Facing::West, Facing::North, Facing::East];

impl MaterialKind {
    fn layout(self) -> DataLayout {
        match self {
            MaterialKind::SignPost => DataLayout::SignRotation,
            MaterialKind::WallSign | MaterialKind::Ladder => DataLayout::WallMounted,
            MaterialKind::Lever | MaterialKind::StoneButton => DataLayout::Attachable,
            MaterialKind::WoodenDoor | MaterialKind::IronDoor => DataLayout::Hinged {
                facings: DOOR_FACINGS,
            },
            MaterialKind::TrapDoor => DataLayout::Hinged {
                facings: TRAPDOOR_FACINGS,
            },
            MaterialKind::FenceGate => DataLayout::Hinged {
                facings: GATE_FACINGS,
            },
            MaterialKind::Pumpkin => DataLayout::Quadrant {
                facings: GATE_FACINGS,
            },
            MaterialKind::Dispenser => DataLayout::SixWay,
            MaterialKind::Wool => DataLayout::Colored,
            _ => DataLayout::Plain,
        }
    }

    /// Flowing/stationary liquid variants share a family.
    pub fn liquid_family(self) -> Option<LiquidFamily> {
        match self {
            MaterialKind::Water | MaterialKind::StationaryWater => Some(LiquidFamily::Water),
            MaterialKind::Lava | MaterialKind::StationaryLava => Some(LiquidFamily::Lava),
            _ => None,
        }
    }

    /// Sign-type kinds, the "screen" blocks a gate uses as trigger surface.
    pub fn is_sign(self) -> bool {
        matches!(self, MaterialKind::SignPost | MaterialKind::WallSign)
    }

    /// Whether the data byte encodes a facing for this kind.
    pub fn is_directional(self) -> bool {
        !matches!(
            self.layout(),
            DataLayout::Plain | DataLayout::Colored
        )
    }

    /// Whether the data byte encodes a dye color for this kind.
    pub fn is_colorable(self) -> bool {
        matches!(self.layout(), DataLayout::Colored)
    }

    /// Whether the data byte encodes an open/closed flag for this kind.
    pub fn is_openable(self) -> bool {
        matches!(self.layout(), DataLayout::Hinged { .. })
    }

    /// Decodes a raw data byte into the capability record for this kind.
    ///
    /// Unrecognized orientation values (e.g. a wall sign with a stray data
    /// byte) leave the corresponding field unset rather than failing; the
    /// raw byte is always preserved verbatim.
    pub fn data_from_raw(self, raw: u8) -> BlockData {
        let mut data = BlockData::plain(raw);
        match self.layout() {
            DataLayout::Plain => {}
            DataLayout::SignRotation => {
                data.facing = Some(Facing::from_yaw(f32::from(raw & 0x0F) * 22.5));
            }
            DataLayout::WallMounted => data.facing = wall_mounted_facing(raw & 0x07),
            DataLayout::Attachable => data.facing = attachable_facing(raw & 0x07),
            DataLayout::Hinged { facings } => {
                data.facing = Some(facings[(raw & 0x03) as usize]);
                data.open = Some(raw & OPEN_BIT != 0);
            }
            DataLayout::Quadrant { facings } => {
                data.facing = Some(facings[(raw & 0x03) as usize]);
            }
            DataLayout::SixWay => data.facing = six_way_facing(raw & 0x07),
            DataLayout::Colored => data.color = Some(DyeColor::from_nibble(raw)),
        }
        data
    }

    /// Re-encodes `facing` into `raw` for this kind's layout.
    ///
    /// Facings the layout cannot represent (a diagonal on a four-way kind)
    /// round to the nearest cardinal; facings that make no sense at all
    /// (vertical on a wall sign) leave the byte unchanged.
    pub(crate) fn encode_facing(self, raw: u8, facing: Facing) -> u8 {
        match self.layout() {
            DataLayout::Plain | DataLayout::Colored => raw,
            DataLayout::SignRotation => {
                let Some(yaw) = facing.yaw() else { return raw };
                (raw & !0x0F) | (((yaw / 22.5).round() as u8) & 0x0F)
            }
            DataLayout::WallMounted => match cardinal(facing) {
                Some(Facing::North) => (raw & !0x07) | 2,
                Some(Facing::South) => (raw & !0x07) | 3,
                Some(Facing::West) => (raw & !0x07) | 4,
                Some(Facing::East) => (raw & !0x07) | 5,
                _ => raw,
            },
            DataLayout::Attachable => match cardinal(facing) {
                Some(Facing::East) => (raw & !0x07) | 1,
                Some(Facing::West) => (raw & !0x07) | 2,
                Some(Facing::South) => (raw & !0x07) | 3,
                Some(Facing::North) => (raw & !0x07) | 4,
                _ => raw,
            },
            DataLayout::Hinged { facings } | DataLayout::Quadrant { facings } => {
                match cardinal(facing).and_then(|c| facings.iter().position(|&f| f == c)) {
                    Some(index) => (raw & !0x03) | index as u8,
                    None => raw,
                }
            }
            DataLayout::SixWay => match facing {
                Facing::Down => raw & !0x07,
                Facing::Up => (raw & !0x07) | 1,
                other => match cardinal(other) {
                    Some(Facing::North) => (raw & !0x07) | 2,
                    Some(Facing::South) => (raw & !0x07) | 3,
                    Some(Facing::West) => (raw & !0x07) | 4,
                    Some(Facing::East) => (raw & !0x07) | 5,
                    _ => raw,
                },
            },
        }
    }

    /// Re-encodes a dye color into `raw`; no-op for uncolorable kinds.
    pub(crate) fn encode_color(self, raw: u8, color: DyeColor) -> u8 {
        match self.layout() {
            DataLayout::Colored => (raw & !0x0F) | color.nibble(),
            _ => raw,
        }
    }

    /// Sets or clears the open bit; no-op for kinds without one.
    pub(crate) fn encode_open(self, raw: u8, open: bool) -> u8 {
        match self.layout() {
            DataLayout::Hinged { .. } => {
                if open {
                    raw | OPEN_BIT
                } else {
                    raw & !OPEN_BIT
                }
            }
            _ => raw,
        }
    }
}

fn cardinal(facing: Facing) -> Option<Facing> {
    facing.nearest_cardinal()
}

fn wall_mounted_facing(value: u8) -> Option<Facing> {
    match value {
        2 => Some(Facing::North),
        3 => Some(Facing::South),
        4 => Some(Facing::West),
        5 => Some(Facing::East),
        _ => None,
    }
}

fn attachable_facing(value: u8) -> Option<Facing> {
    match value {
        1 => Some(Facing::East),
        2 => Some(Facing::West),
        3 => Some(Facing::South),
        4 => Some(Facing::North),
        _ => None,
    }
}

fn six_way_facing(value: u8) -> Option<Facing> {
    match value {
        0 => Some(Facing::Down),
        1 => Some(Facing::Up),
        other => wall_mounted_facing(other),
    }
}
