use crate::table::Direction;
use crate::Splitter;

pub struct SplitterBuilder {
    parts: usize,
    direction: Direction,
    node_limit: Option<u64>,
}

impl SplitterBuilder {
    pub fn new(parts: usize) -> Self {
        Self {
            parts,
            direction: Direction::LeftToRight,
            node_limit: None,
        }
    }
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }
    pub fn with_greedy(mut self, greedy: bool) -> Self {
        self.direction = Direction::from_greedy(greedy);
        self
    }
    /// Stop after visiting `node_limit` search nodes.
    pub fn with_node_limit(mut self, node_limit: u64) -> Self {
        self.node_limit = Some(node_limit);
        self
    }
    pub fn build(self) -> Splitter {
        Splitter::with_config(self.parts, self.direction, self.node_limit)
    }
}
