use super::node::NodeId;

/// A spring between two nodes
/// Holds handles into the node arena, never the nodes themselves
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    pub from: NodeId,
    pub to: NodeId,
    /// Rest length: the distance at which the spring exerts no force
    pub ideal_length: f32,
    /// Stiffness
    pub spring_coef: f32,
}

impl Arc {
    pub fn new(from: NodeId, to: NodeId, ideal_length: f32, spring_coef: f32) -> Self {
        Arc {
            from,
            to,
            ideal_length,
            spring_coef,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arc_keeps_endpoint_order() {
        let arc = Arc::new(NodeId(3), NodeId(1), 5.0, 1.0);

        assert_eq!(arc.from, NodeId(3));
        assert_eq!(arc.to, NodeId(1));
    }
}
