pub mod catalog;
pub mod clone;
pub mod feature;
pub mod palette;

pub use catalog::Catalog;
pub use clone::{DragFrame, DraggableClone};
pub use feature::{BoundaryFeature, FeatureKind};
pub use palette::{CloneStyle, Palette};
