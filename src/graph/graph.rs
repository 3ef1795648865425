//! 图数据结构
//!
//! 一次性由顶点序列和边序列构建，构建后只读

use super::edge::Edge;
use super::matrix::AdjacencyMatrix;
use super::vertex::{Vertex, VertexId};
use crate::algorithm::{Connectivity, Dijkstra, Route, RoutePlanner, ShortestPaths};
use crate::error::{Error, Result};
use indexmap::IndexMap;
use tracing::debug;

/// 出边（终点下标，距离）
pub(crate) type Hop = (usize, u64);

/// 路网图
///
/// 顶点在 `vertices` 中的插入位置就是它在邻接矩阵中的行/列下标。
#[derive(Debug, Clone)]
pub struct Graph {
    /// 顶点表（ID -> 顶点，保持输入顺序）
    vertices: IndexMap<VertexId, Vertex>,
    /// 边表（保留权重，矩阵里没有）
    edges: Vec<Edge>,
    /// 邻接矩阵
    matrix: AdjacencyMatrix,
    /// 每个顶点的出边，按边表顺序
    hops: Vec<Vec<Hop>>,
}

impl Graph {
    /// 构建图
    ///
    /// 顶点 ID 重复返回 [`Error::DuplicateVertex`]，边引用未知顶点返回
    /// [`Error::MalformedEdge`]。
    pub fn new(vertices: Vec<Vertex>, edges: Vec<Edge>) -> Result<Self> {
        let mut table = IndexMap::with_capacity(vertices.len());
        for vertex in vertices {
            let id = vertex.id();
            if table.insert(id, vertex).is_some() {
                return Err(Error::DuplicateVertex(id));
            }
        }

        let mut matrix = AdjacencyMatrix::new(table.len());
        let mut hops = vec![Vec::new(); table.len()];

        for edge in &edges {
            let (origin, destination) = match (
                table.get_index_of(&edge.origin()),
                table.get_index_of(&edge.destination()),
            ) {
                (Some(o), Some(d)) => (o, d),
                _ => {
                    return Err(Error::MalformedEdge {
                        origin: edge.origin(),
                        destination: edge.destination(),
                    })
                }
            };
            matrix.set(origin, destination);
            hops[origin].push((destination, edge.distance()));
        }

        debug!(
            vertices = table.len(),
            edges = edges.len(),
            "graph built"
        );

        Ok(Self {
            vertices: table,
            edges,
            matrix,
            hops,
        })
    }

    // ==================== 顶点 ====================

    /// 所有顶点（输入顺序）
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.values()
    }

    /// 按 ID 获取顶点
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(&id)
    }

    /// 按名称获取顶点（同名时取第一个）
    pub fn vertex_by_name(&self, name: &str) -> Option<&Vertex> {
        self.vertices.values().find(|v| v.name() == name)
    }

    /// 按矩阵下标获取顶点
    pub fn vertex_at(&self, index: usize) -> Option<&Vertex> {
        self.vertices.get_index(index).map(|(_, v)| v)
    }

    /// 顶点 ID 对应的矩阵下标
    pub fn index_of(&self, id: VertexId) -> Result<usize> {
        self.vertices
            .get_index_of(&id)
            .ok_or(Error::VertexNotFound(id))
    }

    /// 顶点数量
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    // ==================== 边 ====================

    /// 所有边（输入顺序）
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// 边数量
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// 顶点的所有出边
    pub fn outgoing_edges(&self, id: VertexId) -> Result<Vec<&Edge>> {
        self.index_of(id)?;
        Ok(self.edges.iter().filter(|e| e.origin() == id).collect())
    }

    /// 两个城市之间最短的一条直达道路
    pub fn road_distance(&self, origin: VertexId, destination: VertexId) -> Option<u64> {
        let o = self.vertices.get_index_of(&origin)?;
        let d = self.vertices.get_index_of(&destination)?;
        self.hops[o]
            .iter()
            .filter(|&&(to, _)| to == d)
            .map(|&(_, distance)| distance)
            .min()
    }

    pub(crate) fn hops_at(&self, index: usize) -> &[Hop] {
        &self.hops[index]
    }

    pub(crate) fn id_at(&self, index: usize) -> VertexId {
        self.vertices[index].id()
    }

    /// 邻接矩阵
    pub fn adjacency_matrix(&self) -> &AdjacencyMatrix {
        &self.matrix
    }

    // ==================== 邻居查询 ====================

    /// 直接可达的城市（矩阵中该行为 1 的列，不含自身）
    pub fn reachable_vertices(&self, id: VertexId) -> Result<Vec<&Vertex>> {
        self.row_filter(id, 1)
    }

    /// 无法直接到达的城市（矩阵中该行为 0 的列，不含自身）
    pub fn unreachable_vertices(&self, id: VertexId) -> Result<Vec<&Vertex>> {
        self.row_filter(id, 0)
    }

    /// 邻居 ID，等价于 [`Graph::reachable_vertices`]
    pub fn neighbors(&self, id: VertexId) -> Result<Vec<VertexId>> {
        Ok(self
            .reachable_vertices(id)?
            .into_iter()
            .map(Vertex::id)
            .collect())
    }

    fn row_filter(&self, id: VertexId, wanted: u8) -> Result<Vec<&Vertex>> {
        let row_index = self.index_of(id)?;
        let row = self
            .matrix
            .row(row_index)
            .ok_or(Error::VertexNotFound(id))?;

        Ok(row
            .iter()
            .enumerate()
            .filter(|&(col, &cell)| col != row_index && cell == wanted)
            .filter_map(|(col, _)| self.vertex_at(col))
            .collect())
    }

    // ==================== 算法入口 ====================

    /// 是否强连通：以每个顶点为根做 BFS，都能访问全部顶点
    pub fn is_connected(&self) -> bool {
        Connectivity::new(self).is_strongly_connected()
    }

    /// 经有向路径可达的所有城市（不含自身）
    pub fn transitively_reachable(&self, id: VertexId) -> Result<Vec<&Vertex>> {
        Connectivity::new(self).reachable_from(id)
    }

    /// 从某城市出发的全部极大路线
    pub fn visit_all_roads_and_cities(&self, id: VertexId) -> Result<Vec<Route>> {
        RoutePlanner::new(self).all_routes(id)
    }

    /// 单源最短路，含每一次改进松弛的记录
    pub fn shortest_paths_from_source(&self, id: VertexId) -> Result<ShortestPaths> {
        Dijkstra::new(self).run(id)
    }
}
