//! 连通性检查
//!
//! 基于 BFS 的强连通判定与传递可达集合

use crate::error::Result;
use crate::graph::{Graph, Vertex, VertexId};
use std::collections::VecDeque;
use tracing::debug;

/// 连通性分析器
pub struct Connectivity<'g> {
    graph: &'g Graph,
}

impl<'g> Connectivity<'g> {
    /// 创建分析器
    pub fn new(graph: &'g Graph) -> Self {
        Self { graph }
    }

    /// 强连通判定
    ///
    /// 以每个顶点为根各做一次 BFS，任何一次访问不到全部顶点即为不连通。
    /// 空图和单顶点图视为连通。
    pub fn is_strongly_connected(&self) -> bool {
        let n = self.graph.vertex_count();

        for root in 0..n {
            let count = self.bfs_order(root).len();
            if count != n {
                debug!(
                    root = %self.graph.id_at(root),
                    visited = count,
                    total = n,
                    "graph is not strongly connected"
                );
                return false;
            }
        }

        true
    }

    /// 经有向路径可达的所有顶点（BFS 发现顺序，不含起点）
    pub fn reachable_from(&self, id: VertexId) -> Result<Vec<&'g Vertex>> {
        let root = self.graph.index_of(id)?;
        let order = self.bfs_order(root);

        Ok(order
            .into_iter()
            .filter(|&index| index != root)
            .filter_map(|index| self.graph.vertex_at(index))
            .collect())
    }

    /// BFS，返回发现顺序
    fn bfs_order(&self, root: usize) -> Vec<usize> {
        let mut visited = vec![false; self.graph.vertex_count()];
        let mut queue = VecDeque::new();
        let mut order = Vec::new();

        visited[root] = true;
        queue.push_back(root);

        while let Some(current) = queue.pop_front() {
            order.push(current);
            for &(neighbor, _) in self.graph.hops_at(current) {
                if !visited[neighbor] {
                    visited[neighbor] = true;
                    queue.push_back(neighbor);
                }
            }
        }

        order
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Edge;

    fn build(n: u64, edges: &[(u64, u64)]) -> Graph {
        let vertices = (1..=n)
            .map(|i| Vertex::new(VertexId::new(i), format!("C{i}")))
            .collect();
        let edges = edges
            .iter()
            .map(|&(o, d)| Edge::new(VertexId::new(o), VertexId::new(d), 1))
            .collect();
        Graph::new(vertices, edges).unwrap()
    }

    #[test]
    fn test_cycle_is_connected() {
        let graph = build(3, &[(1, 2), (2, 3), (3, 1)]);
        assert!(Connectivity::new(&graph).is_strongly_connected());
    }

    #[test]
    fn test_weakly_connected_is_not_enough() {
        // 1 -> 2 -> 3，反向不可达
        let graph = build(3, &[(1, 2), (2, 3)]);
        assert!(!Connectivity::new(&graph).is_strongly_connected());
    }

    #[test]
    fn test_trivial_graphs() {
        assert!(build(0, &[]).is_connected());
        assert!(build(1, &[]).is_connected());
        assert!(!build(2, &[]).is_connected());
    }

    #[test]
    fn test_reachable_from() {
        // 1 -> 2 -> 3, 4 孤立
        let graph = build(4, &[(1, 2), (2, 3)]);
        let names: Vec<&str> = Connectivity::new(&graph)
            .reachable_from(VertexId::new(1))
            .unwrap()
            .iter()
            .map(|v| v.name())
            .collect();
        assert_eq!(names, vec!["C2", "C3"]);

        assert!(Connectivity::new(&graph)
            .reachable_from(VertexId::new(4))
            .unwrap()
            .is_empty());
        assert!(Connectivity::new(&graph)
            .reachable_from(VertexId::new(5))
            .is_err());
    }
}
