pub mod scene;

pub use scene::{GraphSource, load_graph, setup_scene};
