pub mod error;
pub mod forest;
pub mod math;
pub mod operations;
pub mod topology;

pub use error::{DiscoverError, Result};
pub use forest::{CycleTree, CycleTreeForest};
pub use math::Point2;
pub use operations::discover::{discover, DiscoverFaces};
pub use operations::nesting::{area_tree, AreaTree, BuildAreaTree, FaceArea};
