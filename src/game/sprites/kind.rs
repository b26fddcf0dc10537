// Animation categories a sprite can hold

use super::SpriteError;
use std::fmt;
use std::str::FromStr;

/// Every animation slot a sprite carries
///
/// Discriminants are dense and stable; they double as table indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AnimationKind {
    Idle1,
    Idle2,
    Idle3,
    Move,
    Jump1,
    Jump2,
    Crouch,
    Attack1,
    Attack2,
    Attack3,
    TakeDamage,
    Death1,
    Death2,
    Misc1,
    Misc2,
    Misc3,
    Misc4,
    Misc5,

    // Directional refinements of Move
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,

    // Attack refinements
    AttackMelee,
    AttackRanged,
    AttackStrong,
    AttackWeak,
}

impl AnimationKind {
    /// Number of kinds, and the size of every per-kind table
    pub const COUNT: usize = 26;

    /// All kinds in ordinal order
    pub const ALL: [AnimationKind; Self::COUNT] = [
        Self::Idle1,
        Self::Idle2,
        Self::Idle3,
        Self::Move,
        Self::Jump1,
        Self::Jump2,
        Self::Crouch,
        Self::Attack1,
        Self::Attack2,
        Self::Attack3,
        Self::TakeDamage,
        Self::Death1,
        Self::Death2,
        Self::Misc1,
        Self::Misc2,
        Self::Misc3,
        Self::Misc4,
        Self::Misc5,
        Self::MoveUp,
        Self::MoveDown,
        Self::MoveLeft,
        Self::MoveRight,
        Self::AttackMelee,
        Self::AttackRanged,
        Self::AttackStrong,
        Self::AttackWeak,
    ];

    const NAMES: [&'static str; Self::COUNT] = [
        "IDLE1",
        "IDLE2",
        "IDLE3",
        "MOVE",
        "JUMP1",
        "JUMP2",
        "CROUCH",
        "ATTACK1",
        "ATTACK2",
        "ATTACK3",
        "TAKE_DAMAGE",
        "DEATH1",
        "DEATH2",
        "MISC1",
        "MISC2",
        "MISC3",
        "MISC4",
        "MISC5",
        "MOVE_UP",
        "MOVE_DOWN",
        "MOVE_LEFT",
        "MOVE_RIGHT",
        "ATTACK_MELEE",
        "ATTACK_RANGED",
        "ATTACK_STRONG",
        "ATTACK_WEAK",
    ];

    /// Dense index of this kind (0..COUNT)
    pub const fn ordinal(self) -> usize {
        self as usize
    }

    /// Inverse of [`ordinal`](Self::ordinal)
    pub fn from_ordinal(ordinal: usize) -> Option<Self> {
        Self::ALL.get(ordinal).copied()
    }

    /// Upper snake case label, e.g. `MOVE_LEFT`
    pub fn name(self) -> &'static str {
        Self::NAMES[self.ordinal()]
    }
}

impl Default for AnimationKind {
    fn default() -> Self {
        Self::Idle1
    }
}

impl fmt::Display for AnimationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AnimationKind {
    type Err = SpriteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(label))
            .ok_or_else(|| SpriteError::UnknownKind(label.to_string()))
    }
}
