pub mod edge;
pub mod flowchart;
pub mod node;
pub mod step;

pub use edge::*;
pub use flowchart::*;
pub use node::*;
pub use step::*;
