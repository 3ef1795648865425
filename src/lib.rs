//! RoadGraph - 城市路网分析
//!
//! 在由城市和有向道路构成的带权图上回答四类问题：
//! - 整体是否强连通
//! - 某城市能直接到达哪些城市
//! - 从某城市出发的全部极大路线（DFS）
//! - 单源最短距离（Dijkstra 式松弛，保留每一次改进）

pub mod algorithm;
pub mod cli;
pub mod error;
pub mod graph;
pub mod import;

// 重导出常用类型
pub use algorithm::{Route, ShortestPathRecord, ShortestPaths};
pub use error::{Error, Result};
pub use graph::{AdjacencyMatrix, Edge, Graph, Vertex, VertexId};
pub use import::RoadNetwork;

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
