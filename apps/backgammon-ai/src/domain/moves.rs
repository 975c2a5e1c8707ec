//! Core move types as handed over by the rules engine: Move, MoveOrigin, MoveTarget

use serde::{Deserialize, Serialize};

/// Distance of a point from each player's home, as reported by the rules engine.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct MovePosition {
    pub clockwise: u8,
    pub counterclockwise: u8,
}

/// Where a move starts. The rules engine may send an origin with no
/// position (e.g. the bar); such moves fall back to their die value.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct MoveOrigin {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<MovePosition>,
}

#[derive(Debug, Clone, Eq, PartialEq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MoveKind {
    PointToPoint,
    Reenter,
    BearOff,
    #[default]
    #[serde(other)]
    Normal,
}

/// Destination of a move: a board point, or a named sentinel such as `"off"`.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MoveTarget {
    Point(u8),
    Label(String),
}

impl MoveTarget {
    /// Point 0 and the `"off"` label both denote the bear-off tray.
    pub fn is_bear_off(&self) -> bool {
        match self {
            MoveTarget::Point(point) => *point == 0,
            MoveTarget::Label(label) => label.eq_ignore_ascii_case("off"),
        }
    }
}

/// A single legal checker move proposed by the rules engine.
///
/// The AI only ever reads moves; selection hands back a borrow of one of the
/// caller's moves rather than a copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Move {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player: Option<String>,
    pub die_value: u8,
    #[serde(default)]
    pub move_kind: MoveKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<MoveOrigin>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<MoveTarget>,
}

impl Move {
    pub fn new(id: impl Into<String>, die_value: u8) -> Self {
        Self {
            id: id.into(),
            player: None,
            die_value,
            move_kind: MoveKind::default(),
            origin: None,
            from: None,
            to: None,
        }
    }

    pub fn with_origin(mut self, clockwise: u8, counterclockwise: u8) -> Self {
        self.origin = Some(MoveOrigin {
            position: Some(MovePosition {
                clockwise,
                counterclockwise,
            }),
        });
        self
    }

    pub fn with_points(mut self, from: u8, to: MoveTarget) -> Self {
        self.from = Some(from);
        self.to = Some(to);
        self
    }

    pub fn with_player(mut self, player: impl Into<String>) -> Self {
        self.player = Some(player.into());
        self
    }

    pub fn with_kind(mut self, kind: MoveKind) -> Self {
        self.move_kind = kind;
        self
    }

    /// Positional proxy used by the heuristic analyzers: the origin's
    /// clockwise distance when known, otherwise the die value.
    pub fn advancement(&self) -> u8 {
        self.origin
            .and_then(|origin| origin.position)
            .map_or(self.die_value, |position| position.clockwise)
    }

    pub fn is_bear_off(&self) -> bool {
        self.to.as_ref().is_some_and(MoveTarget::is_bear_off)
    }
}
