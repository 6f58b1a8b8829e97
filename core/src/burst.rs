//! Particle-burst trigger.

use festive_types::BurstRecipe;

/// A surface that can render a particle burst.
///
/// Implementations own their failure handling; nothing is reported back to
/// the caller.
pub trait BurstRenderer {
    fn fire(&self, recipe: &BurstRecipe);
}

impl<F> BurstRenderer for F
where
    F: Fn(&BurstRecipe),
{
    fn fire(&self, recipe: &BurstRecipe) {
        self(recipe)
    }
}

/// Fire one firecracker burst.
pub fn fire_crackers(renderer: &dyn BurstRenderer) {
    tracing::trace!("firing firecracker burst");
    renderer.fire(&BurstRecipe::firecracker());
}
