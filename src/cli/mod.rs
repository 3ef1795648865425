//! 命令行支持
//!
//! 城市解析与结果打印

mod printer;

pub use printer::{PrintMode, Printer};

use crate::algorithm::{Route, ShortestPaths};
use crate::error::{Error, Result};
use crate::graph::{Graph, Vertex, VertexId};

/// 某城市的全部查询结果
pub struct CitySummary<'g> {
    pub city: VertexId,
    pub connected: bool,
    pub reachable: Vec<&'g Vertex>,
    pub unreachable: Vec<&'g Vertex>,
    pub routes: Vec<Route>,
    pub shortest_paths: ShortestPaths,
}

impl<'g> CitySummary<'g> {
    /// 依次执行连通性、可达性、路线和最短路查询
    pub fn collect(graph: &'g Graph, city: VertexId) -> Result<Self> {
        Ok(Self {
            city,
            connected: graph.is_connected(),
            reachable: graph.reachable_vertices(city)?,
            unreachable: graph.unreachable_vertices(city)?,
            routes: graph.visit_all_roads_and_cities(city)?,
            shortest_paths: graph.shortest_paths_from_source(city)?,
        })
    }
}

/// 按名称或数字 ID 查找城市；名称优先
pub fn resolve_city(graph: &Graph, input: &str) -> Result<VertexId> {
    let input = input.trim();
    if let Some(v) = graph.vertex_by_name(input) {
        return Ok(v.id());
    }
    match input.parse::<u64>() {
        Ok(raw) => {
            let id = VertexId::new(raw);
            graph.index_of(id)?;
            Ok(id)
        }
        Err(_) => Err(Error::CityNotFound(input.to_string())),
    }
}
