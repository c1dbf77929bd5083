use bevy_ecs::prelude::Resource;

/// Current run score. Reset to zero when a new run starts; committed to the
/// high-score ledger on the transition into game over.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct Score {
    pub value: u32,
}

impl Score {
    pub fn add(&mut self, points: u32) {
        self.value = self.value.saturating_add(points);
    }

    pub fn reset(&mut self) {
        self.value = 0;
    }
}
