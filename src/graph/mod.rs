//! 图核心模块
//!
//! 定义顶点、边、邻接矩阵和图的核心数据结构

mod edge;
mod graph;
mod matrix;
mod vertex;

pub use edge::Edge;
pub use graph::Graph;
pub use matrix::AdjacencyMatrix;
pub use vertex::{Vertex, VertexId};
