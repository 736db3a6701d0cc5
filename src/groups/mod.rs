mod divider;
mod group;

pub use divider::*;
pub use group::*;
