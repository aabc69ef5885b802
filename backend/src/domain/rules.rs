//! Declarative field bounds for the per-entity validation rule sets.

/// User field bounds.
pub mod user {
    /// Email bounds; the minimum is exclusive (trimmed length must exceed it).
    pub mod email {
        pub const MIN_LENGTH: usize = 5;
        pub const MAX_LENGTH: usize = 254;
    }

    /// Username bounds; the minimum is exclusive.
    pub mod username {
        pub const MIN_LENGTH: usize = 3;
        pub const MAX_LENGTH: usize = 32;
    }
}

/// Character stat bounds and starting values.
pub mod character {
    pub const INITIAL_LEVEL: u32 = 1;
    pub const MAX_LEVEL: u32 = 100;
    pub const INITIAL_EXPERIENCE: u32 = 0;
    pub const MAX_EXPERIENCE: u32 = 1_000_000;
    pub const INITIAL_BATTLES: u32 = 0;
    pub const INITIAL_WINS: u32 = 0;
    pub const INITIAL_LOSSES: u32 = 0;
    pub const INITIAL_MEDALS: u32 = 0;
}

/// Spell field bounds.
pub mod spell {
    /// Name bounds; the minimum is exclusive, as for the user fields.
    pub mod name {
        pub const MIN_LENGTH: usize = 3;
        pub const MAX_LENGTH: usize = 64;
    }

    pub mod mana_cost {
        pub const MIN: u32 = 1;
        pub const MAX: u32 = 1000;
    }

    /// Damage multiplier range for a spell rule.
    pub mod rule {
        pub const MIN_MULTIPLIER: f64 = 0.0;
        pub const MAX_MULTIPLIER: f64 = 10.0;
    }
}
