//! 图算法模块
//!
//! 包含连通性检查、路线枚举和单源最短路

mod connectivity;
mod routes;
mod shortest_path;

pub use connectivity::Connectivity;
pub use routes::{Route, RoutePlanner};
pub use shortest_path::{Dijkstra, ShortestPathRecord, ShortestPaths};
