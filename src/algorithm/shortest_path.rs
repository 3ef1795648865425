//! 单源最短路
//!
//! Dijkstra 式松弛。每一次严格改进都会记录一条 [`ShortestPathRecord`]，
//! 因此同一终点可能出现多条记录，后出现的距离更短。

use crate::error::Result;
use crate::graph::{Graph, VertexId};
use indexmap::IndexMap;
use priority_queue::PriorityQueue;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use tracing::{debug, trace};

/// 一次改进松弛的记录
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortestPathRecord {
    pub source: VertexId,
    pub destination: VertexId,
    /// 记录产生时的最优已知距离
    pub distance: u64,
}

/// 最短路结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShortestPaths {
    source: VertexId,
    records: Vec<ShortestPathRecord>,
}

impl ShortestPaths {
    /// 源点
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// 全部改进记录（按发生顺序）
    pub fn records(&self) -> &[ShortestPathRecord] {
        &self.records
    }

    /// 取出全部改进记录
    pub fn into_records(self) -> Vec<ShortestPathRecord> {
        self.records
    }

    /// 每个终点的最终距离，按首次发现的顺序
    pub fn final_distances(&self) -> IndexMap<VertexId, u64> {
        let mut distances = IndexMap::new();
        for record in &self.records {
            // 记录严格递减，覆盖即取最小值；insert 保留原位置
            distances.insert(record.destination, record.distance);
        }
        distances
    }

    /// 到某个顶点的最终距离；源点为 0，不可达为 None
    pub fn distance_to(&self, id: VertexId) -> Option<u64> {
        if id == self.source {
            return Some(0);
        }
        self.records
            .iter()
            .rev()
            .find(|r| r.destination == id)
            .map(|r| r.distance)
    }
}

/// Dijkstra 求解器
pub struct Dijkstra<'g> {
    graph: &'g Graph,
}

impl<'g> Dijkstra<'g> {
    /// 创建求解器
    pub fn new(graph: &'g Graph) -> Self {
        Self { graph }
    }

    /// 从 `source` 出发计算最短路
    ///
    /// 优先队列以（当前距离，矩阵下标）为键，顶点距离改进时直接调整
    /// 优先级而不是重复入队。源点到自身不产生记录。
    pub fn run(&self, source: VertexId) -> Result<ShortestPaths> {
        let root = self.graph.index_of(source)?;
        let mut distance = vec![u64::MAX; self.graph.vertex_count()];
        let mut queue: PriorityQueue<usize, Reverse<(u64, usize)>> = PriorityQueue::new();
        let mut records = Vec::new();

        distance[root] = 0;
        queue.push(root, Reverse((0, root)));

        while let Some((current, _)) = queue.pop() {
            for &(neighbor, weight) in self.graph.hops_at(current) {
                let candidate = distance[current].saturating_add(weight);
                if candidate < distance[neighbor] {
                    distance[neighbor] = candidate;
                    queue.push(neighbor, Reverse((candidate, neighbor)));

                    let destination = self.graph.id_at(neighbor);
                    trace!(%destination, distance = candidate, "relaxed");
                    records.push(ShortestPathRecord {
                        source,
                        destination,
                        distance: candidate,
                    });
                }
            }
        }

        debug!(%source, records = records.len(), "shortest paths computed");
        Ok(ShortestPaths { source, records })
    }
}
