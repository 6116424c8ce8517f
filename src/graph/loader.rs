use super::arc::Arc;
use super::node::{Node, NodeId};
use super::system::{Graph, GraphError};
use crate::sim::layout::assign_world_system_positions;
use bevy::math::Vec3;
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

const DEMO_GRAPH_JSON: &str = include_str!("../../assets/graphs/demo.json");

const DEFAULT_MASS: f32 = 1.0;
const DEFAULT_SPRING_COEF: f32 = 1.0;

#[derive(Debug, Deserialize)]
struct GraphJson {
    nodes: Vec<NodeJson>,
    #[serde(default)]
    arcs: Vec<ArcJson>,
}

#[derive(Debug, Deserialize)]
struct NodeJson {
    name: String,
    #[serde(default)]
    continent: u32,
    #[serde(default, alias = "worldSystem")]
    world_system: u32,
    #[serde(default = "default_mass")]
    mass: f32,
    position: [f32; 3],
}

#[derive(Debug, Deserialize)]
struct ArcJson {
    from: String,
    to: String,
    #[serde(alias = "idealLength")]
    ideal_length: Option<f32>,
    #[serde(alias = "springCoef")]
    spring_coef: Option<f32>,
}

fn default_mass() -> f32 {
    DEFAULT_MASS
}

/// Error types for loading a graph file
#[derive(Debug)]
pub enum LoadError {
    Io(std::io::Error),
    Json(serde_json::Error),
    DuplicateNode(String),
    UnknownEndpoint { arc: usize, name: String },
    Graph(GraphError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "Cannot read graph file: {}", e),
            LoadError::Json(e) => write!(f, "Malformed graph JSON: {}", e),
            LoadError::DuplicateNode(name) => write!(f, "Node '{}' is defined twice", name),
            LoadError::UnknownEndpoint { arc, name } => {
                write!(f, "Arc {} refers to unknown node '{}'", arc, name)
            }
            LoadError::Graph(e) => write!(f, "Invalid graph: {}", e),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            LoadError::Json(e) => Some(e),
            LoadError::Graph(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(e: std::io::Error) -> Self {
        LoadError::Io(e)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(e: serde_json::Error) -> Self {
        LoadError::Json(e)
    }
}

impl From<GraphError> for LoadError {
    fn from(e: GraphError) -> Self {
        LoadError::Graph(e)
    }
}

/// Load the bundled demo graph
pub fn load_demo() -> Result<Graph, LoadError> {
    from_json(DEMO_GRAPH_JSON)
}

/// Load a graph from a JSON file on disk
pub fn load_file(path: &Path) -> Result<Graph, LoadError> {
    let text = std::fs::read_to_string(path)?;
    from_json(&text)
}

/// Parse JSON graph data into a validated graph
///
/// Arcs without an `ideal_length` rest at the distance between their
/// endpoints' imported positions. World-system positions are computed
/// once the graph is built.
pub fn from_json(json: &str) -> Result<Graph, LoadError> {
    let data: GraphJson = serde_json::from_str(json)?;

    let mut graph = Graph::new();
    let mut ids: HashMap<String, NodeId> = HashMap::new();

    for node in data.nodes {
        if ids.contains_key(&node.name) {
            return Err(LoadError::DuplicateNode(node.name));
        }

        let name = node.name.clone();
        let id = graph.add_node(
            Node::new(node.name, Vec3::from_array(node.position), node.mass)
                .with_continent(node.continent)
                .with_world_system(node.world_system),
        )?;
        ids.insert(name, id);
    }

    for (index, arc) in data.arcs.into_iter().enumerate() {
        let lookup = |name: &str| {
            ids.get(name).copied().ok_or_else(|| LoadError::UnknownEndpoint {
                arc: index,
                name: name.to_string(),
            })
        };
        let from = lookup(&arc.from)?;
        let to = lookup(&arc.to)?;

        let ideal_length = match arc.ideal_length {
            Some(length) => length,
            None => rest_distance(&graph, from, to),
        };
        let spring_coef = arc.spring_coef.unwrap_or(DEFAULT_SPRING_COEF);

        graph.add_arc(Arc::new(from, to, ideal_length, spring_coef))?;
    }

    assign_world_system_positions(&mut graph);

    log::info!(
        "Loaded graph: {} nodes, {} arcs",
        graph.node_count(),
        graph.arc_count()
    );

    Ok(graph)
}

fn rest_distance(graph: &Graph, from: NodeId, to: NodeId) -> f32 {
    match (graph.node(from), graph.node(to)) {
        (Some(a), Some(b)) => a.default_position.distance(b.default_position),
        _ => 0.0,
    }
}
