//=========================================================================
// Intents
//=========================================================================
//
// Logical player actions latched from raw keys.
//
// The frame core never looks at keys: bindings translate keys into
// intents, and the kinematic update reads intents once per frame.
//
//=========================================================================

//=== Intent ==============================================================

/// High-level player command produced by one or more bound keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Intent {
    MoveLeft,
    MoveRight,
    Jump,
    ClimbUp,
    ClimbDown,
    /// Start the run over from level 1 with a zeroed score.
    Restart,
}

impl Intent {
    /// Every intent, in declaration order.
    pub const ALL: [Intent; 6] = [
        Intent::MoveLeft,
        Intent::MoveRight,
        Intent::Jump,
        Intent::ClimbUp,
        Intent::ClimbDown,
        Intent::Restart,
    ];
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn all_lists_every_intent_once() {
        let set: HashSet<_> = Intent::ALL.iter().copied().collect();
        assert_eq!(set.len(), Intent::ALL.len());
    }

    #[test]
    fn intent_is_send_and_static() {
        fn assert_send_static<T: Send + 'static>() {}
        assert_send_static::<Intent>();
    }
}
