//! 路线枚举
//!
//! 从起点出发做 DFS，列出所有无法再延伸的简单路径（极大路线）。
//! 每个分叉点都会复制当前路径和访问集合，各分支互不影响，
//! 所以同一起点会得到多条共享前缀的路线。

use crate::error::Result;
use crate::graph::{Graph, VertexId};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

/// 路线（按访问顺序排列的城市）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RouteData")]
pub struct Route {
    vertices: SmallVec<[VertexId; 8]>,
}

/// 反序列化的中间形式，校验后才能成为 `Route`
#[derive(Deserialize)]
struct RouteData {
    vertices: SmallVec<[VertexId; 8]>,
}

impl TryFrom<RouteData> for Route {
    type Error = String;

    fn try_from(data: RouteData) -> std::result::Result<Self, Self::Error> {
        if data.vertices.is_empty() {
            return Err("路线至少需要一个城市".to_string());
        }
        for (i, id) in data.vertices.iter().enumerate() {
            if data.vertices[..i].contains(id) {
                return Err(format!("路线重复经过城市 {}", id));
            }
        }
        Ok(Self {
            vertices: data.vertices,
        })
    }
}

impl Route {
    fn with_start(start: VertexId) -> Self {
        let mut vertices = SmallVec::new();
        vertices.push(start);
        Self { vertices }
    }

    /// 起点
    pub fn source(&self) -> VertexId {
        self.vertices[0]
    }

    /// 终点
    pub fn destination(&self) -> VertexId {
        self.vertices[self.vertices.len() - 1]
    }

    /// 路线上的城市
    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    /// 城市数量
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// 路线至少包含起点，永远非空
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// 路线是否经过某城市
    pub fn contains(&self, id: VertexId) -> bool {
        self.vertices.contains(&id)
    }

    /// 路线总距离，每一段取两城之间最短的直达道路
    pub fn total_distance(&self, graph: &Graph) -> Option<u64> {
        self.vertices
            .windows(2)
            .map(|pair| graph.road_distance(pair[0], pair[1]))
            .sum()
    }
}

/// DFS 工作栈中的一帧
struct Frame {
    current: usize,
    visited: Vec<bool>,
    route: Route,
}

/// 路线规划器
pub struct RoutePlanner<'g> {
    graph: &'g Graph,
}

impl<'g> RoutePlanner<'g> {
    /// 创建规划器
    pub fn new(graph: &'g Graph) -> Self {
        Self { graph }
    }

    /// 枚举从 `start` 出发的全部极大路线
    ///
    /// 用显式栈代替递归；子节点逆序入栈，输出顺序与按矩阵列号递归
    /// 展开时一致。稠密图上路线数量随规模指数增长。
    pub fn all_routes(&self, start: VertexId) -> Result<Vec<Route>> {
        let root = self.graph.index_of(start)?;
        let matrix = self.graph.adjacency_matrix();
        let n = self.graph.vertex_count();

        let mut visited = vec![false; n];
        visited[root] = true;

        let mut stack = vec![Frame {
            current: root,
            visited,
            route: Route::with_start(start),
        }];
        let mut routes = Vec::new();

        while let Some(frame) = stack.pop() {
            let next: Vec<usize> = (0..n)
                .filter(|&col| matrix.has_edge(frame.current, col) && !frame.visited[col])
                .collect();

            if next.is_empty() {
                routes.push(frame.route);
                continue;
            }

            for &col in next.iter().rev() {
                let mut visited = frame.visited.clone();
                visited[col] = true;
                let mut route = frame.route.clone();
                route.vertices.push(self.graph.id_at(col));

                stack.push(Frame {
                    current: col,
                    visited,
                    route,
                });
            }
        }

        debug!(start = %start, routes = routes.len(), "route enumeration finished");
        Ok(routes)
    }
}
