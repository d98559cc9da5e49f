pub mod forces;
pub mod horizon;
pub mod lattice;
pub mod particle;
pub mod spacetime;

pub use horizon::{HorizonGeometry, HorizonRadius, HorizonStyle};
pub use particle::ParticleField;
pub use spacetime::{GridStyle, SpacetimeGrid};
