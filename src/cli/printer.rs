//! 结果打印器
//!
//! 把查询结果渲染成表格或 JSON，不参与任何计算

use super::CitySummary;
use crate::algorithm::{Route, ShortestPaths};
use crate::error::Result;
use crate::graph::{Graph, Vertex, VertexId};
use colored::Colorize;
use prettytable::{format, row, Cell, Row, Table};
use serde::Serialize;

/// 打印模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintMode {
    /// 表格模式
    Table,
    /// JSON 模式
    Json,
}

#[derive(Serialize)]
struct RouteView<'a> {
    cities: Vec<&'a str>,
    total_distance: Option<u64>,
}

#[derive(Serialize)]
struct RecordView<'a> {
    source: &'a str,
    destination: &'a str,
    distance: u64,
}

#[derive(Serialize)]
struct ReachabilityView<'a> {
    reachable: Vec<&'a str>,
    unreachable: Vec<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    transitive: Option<Vec<&'a str>>,
}

#[derive(Serialize)]
struct SummaryView<'a> {
    city: &'a str,
    cities: usize,
    roads: usize,
    matrix: Vec<&'a [u8]>,
    connected: bool,
    reachable: Vec<&'a str>,
    unreachable: Vec<&'a str>,
    routes: Vec<RouteView<'a>>,
    shortest_paths: Vec<RecordView<'a>>,
}

fn names<'a>(vertices: &[&'a Vertex]) -> Vec<&'a str> {
    vertices.iter().map(|v| v.name()).collect()
}

/// 结果打印器
pub struct Printer<'g> {
    graph: &'g Graph,
    mode: PrintMode,
}

impl<'g> Printer<'g> {
    pub fn new(graph: &'g Graph, mode: PrintMode) -> Self {
        Self { graph, mode }
    }

    pub fn mode(&self) -> PrintMode {
        self.mode
    }

    fn name(&self, id: VertexId) -> &'g str {
        self.graph.vertex(id).map(Vertex::name).unwrap_or("?")
    }

    fn new_table() -> Table {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table
    }

    /// 邻接矩阵
    pub fn print_matrix(&self) -> Result<String> {
        let matrix = self.graph.adjacency_matrix();

        if self.mode == PrintMode::Json {
            let rows: Vec<&[u8]> = matrix.rows().collect();
            return Ok(serde_json::to_string_pretty(&rows)?);
        }

        let mut table = Self::new_table();
        let mut header = vec![Cell::new("")];
        header.extend(self.graph.vertices().map(|v| Cell::new(v.name())));
        table.set_titles(Row::new(header));

        for (vertex, cells) in self.graph.vertices().zip(matrix.rows()) {
            let mut row = vec![Cell::new(vertex.name())];
            row.extend(cells.iter().map(|c| Cell::new(&c.to_string())));
            table.add_row(Row::new(row));
        }

        Ok(format!("邻接矩阵:\n{}", table))
    }

    /// 连通性
    pub fn print_connectivity(&self, connected: bool) -> Result<String> {
        if self.mode == PrintMode::Json {
            return Ok(serde_json::to_string_pretty(
                &serde_json::json!({ "connected": connected }),
            )?);
        }

        Ok(if connected {
            format!("{}\n", "图是强连通的：任意城市之间都可以互相到达".green())
        } else {
            format!("{}\n", "图不是强连通的：存在无法到达的城市".red())
        })
    }

    /// 城市列表
    pub fn print_vertices(&self, title: &str, vertices: &[&Vertex]) -> Result<String> {
        if self.mode == PrintMode::Json {
            return Ok(serde_json::to_string_pretty(&names(vertices))?);
        }

        if vertices.is_empty() {
            return Ok(format!("{}: (无)\n", title));
        }

        let mut table = Self::new_table();
        table.set_titles(row!["ID", title]);
        for v in vertices {
            table.add_row(row![v.id().as_u64(), v.name()]);
        }
        Ok(table.to_string())
    }

    fn route_views(&self, routes: &[Route]) -> Vec<RouteView<'g>> {
        routes
            .iter()
            .map(|r| RouteView {
                cities: r.vertices().iter().map(|&id| self.name(id)).collect(),
                total_distance: r.total_distance(self.graph),
            })
            .collect()
    }

    fn record_views(&self, paths: &ShortestPaths, final_only: bool) -> Vec<RecordView<'g>> {
        let source = self.name(paths.source());
        if final_only {
            paths
                .final_distances()
                .into_iter()
                .map(|(id, distance)| RecordView {
                    source,
                    destination: self.name(id),
                    distance,
                })
                .collect()
        } else {
            paths
                .records()
                .iter()
                .map(|r| RecordView {
                    source,
                    destination: self.name(r.destination),
                    distance: r.distance,
                })
                .collect()
        }
    }

    /// 可达与不可达城市；JSON 模式下合并为一个对象
    pub fn print_reachability(
        &self,
        reachable: &[&Vertex],
        unreachable: &[&Vertex],
        transitive: Option<&[&Vertex]>,
    ) -> Result<String> {
        if self.mode == PrintMode::Json {
            let view = ReachabilityView {
                reachable: names(reachable),
                unreachable: names(unreachable),
                transitive: transitive.map(names),
            };
            return Ok(serde_json::to_string_pretty(&view)?);
        }

        let mut out = self.print_vertices("可直接到达", reachable)?;
        out.push('\n');
        out.push_str(&self.print_vertices("无法直接到达", unreachable)?);
        if let Some(all) = transitive {
            out.push('\n');
            out.push_str(&self.print_vertices("经多段道路可达", all)?);
        }
        Ok(out)
    }

    /// 推荐路线
    pub fn print_routes(&self, routes: &[Route]) -> Result<String> {
        let views = self.route_views(routes);

        if self.mode == PrintMode::Json {
            return Ok(serde_json::to_string_pretty(&views)?);
        }

        let mut table = Self::new_table();
        table.set_titles(row!["#", "路线", "城市数", "总距离"]);
        for (i, view) in views.iter().enumerate() {
            let distance = view
                .total_distance
                .map(|d| d.to_string())
                .unwrap_or_else(|| "-".to_string());
            table.add_row(row![
                i + 1,
                view.cities.join(" -> "),
                view.cities.len(),
                distance
            ]);
        }
        Ok(format!("{}\n{} 条路线\n", table, views.len()))
    }

    /// 最短路；`final_only` 时每个终点只保留最终距离
    pub fn print_shortest_paths(&self, paths: &ShortestPaths, final_only: bool) -> Result<String> {
        let source = self.name(paths.source());
        let views = self.record_views(paths, final_only);

        if self.mode == PrintMode::Json {
            return Ok(serde_json::to_string_pretty(&views)?);
        }

        if views.is_empty() {
            return Ok(format!("从 {} 出发没有可达的城市\n", source));
        }

        let mut table = Self::new_table();
        table.set_titles(row!["起点", "终点", "距离"]);
        for view in &views {
            table.add_row(row![view.source, view.destination, view.distance]);
        }
        Ok(table.to_string())
    }

    /// 某城市的全部查询结果；JSON 模式下输出一个带字段名的对象
    pub fn print_summary(&self, summary: &CitySummary) -> Result<String> {
        if self.mode == PrintMode::Json {
            let view = SummaryView {
                city: self.name(summary.city),
                cities: self.graph.vertex_count(),
                roads: self.graph.edge_count(),
                matrix: self.graph.adjacency_matrix().rows().collect(),
                connected: summary.connected,
                reachable: names(&summary.reachable),
                unreachable: names(&summary.unreachable),
                routes: self.route_views(&summary.routes),
                shortest_paths: self.record_views(&summary.shortest_paths, false),
            };
            return Ok(serde_json::to_string_pretty(&view)?);
        }

        let sections = [
            self.print_stats(),
            self.print_matrix()?,
            self.print_connectivity(summary.connected)?,
            self.print_reachability(&summary.reachable, &summary.unreachable, None)?,
            self.print_routes(&summary.routes)?,
            self.print_shortest_paths(&summary.shortest_paths, false)?,
        ];
        Ok(sections.join("\n"))
    }

    /// 打印统计信息
    pub fn print_stats(&self) -> String {
        let mut table = Self::new_table();
        table.set_titles(row!["Property", "Value"]);
        table.add_row(row!["City Count", self.graph.vertex_count()]);
        table.add_row(row!["Road Count", self.graph.edge_count()]);
        table.to_string()
    }
}
