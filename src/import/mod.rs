//! 数据导入模块
//!
//! 从 CSV 或 JSON 读取城市与道路，构造顶点和边
//!
//! CSV 格式：
//! - 城市文件：`id,name`
//! - 道路文件：`origin,destination,distance[,bidirectional]`

use crate::error::{Error, Result};
use crate::graph::{Edge, Graph, Vertex, VertexId};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Instant;
use tracing::info;

/// 城市记录
#[derive(Debug, Clone, Deserialize)]
struct CityRecord {
    id: u64,
    name: String,
}

/// 道路记录
#[derive(Debug, Clone, Deserialize)]
struct RoadRecord {
    origin: u64,
    destination: u64,
    distance: i64,
    #[serde(default)]
    bidirectional: Option<bool>,
}

impl RoadRecord {
    fn into_edges(self, out: &mut Vec<Edge>) -> Result<()> {
        let edge = Edge::try_new(
            VertexId::new(self.origin),
            VertexId::new(self.destination),
            self.distance,
        )?;
        out.push(edge);
        if self.bidirectional.unwrap_or(false) {
            out.push(edge.reversed());
        }
        Ok(())
    }
}

/// JSON 文档格式
#[derive(Debug, Deserialize)]
struct NetworkDocument {
    cities: Vec<CityRecord>,
    #[serde(default)]
    roads: Vec<RoadRecord>,
}

/// 导入统计
#[derive(Debug, Default, Clone)]
pub struct ImportStats {
    pub cities_imported: usize,
    pub roads_imported: usize,
    pub edges_created: usize,
    pub duration_ms: u64,
}

/// 已导入但尚未建图的路网
#[derive(Debug, Clone, Default)]
pub struct RoadNetwork {
    pub vertices: Vec<Vertex>,
    pub edges: Vec<Edge>,
}

impl RoadNetwork {
    /// 从城市、道路两个 CSV 文件导入
    pub fn from_csv_files<P: AsRef<Path>, Q: AsRef<Path>>(
        cities: P,
        roads: Q,
    ) -> Result<(Self, ImportStats)> {
        let cities_file = File::open(cities.as_ref())?;
        let roads_file = File::open(roads.as_ref())?;
        Self::from_csv_readers(cities_file, roads_file)
    }

    /// 从任意 CSV 输入导入
    pub fn from_csv_readers<R: Read, S: Read>(cities: R, roads: S) -> Result<(Self, ImportStats)> {
        let start = Instant::now();
        let mut stats = ImportStats::default();
        let mut network = Self::default();

        let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(cities);
        for row in reader.deserialize::<CityRecord>() {
            let row = row.map_err(|e| Error::ImportError(format!("城市记录格式错误: {}", e)))?;
            network.vertices.push(Vertex::new(VertexId::new(row.id), row.name));
            stats.cities_imported += 1;
        }

        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(roads);
        for row in reader.deserialize::<RoadRecord>() {
            let row = row.map_err(|e| Error::ImportError(format!("道路记录格式错误: {}", e)))?;
            row.into_edges(&mut network.edges)?;
            stats.roads_imported += 1;
        }

        stats.edges_created = network.edges.len();
        stats.duration_ms = start.elapsed().as_millis() as u64;
        info!(
            cities = stats.cities_imported,
            roads = stats.roads_imported,
            edges = stats.edges_created,
            "csv import finished"
        );
        Ok((network, stats))
    }

    /// 从 JSON 文件导入（`{"cities": [...], "roads": [...]}`）
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<(Self, ImportStats)> {
        let file = File::open(path.as_ref())?;
        Self::from_json_reader(file)
    }

    /// 从任意 JSON 输入导入
    pub fn from_json_reader<R: Read>(input: R) -> Result<(Self, ImportStats)> {
        let start = Instant::now();
        let document: NetworkDocument = serde_json::from_reader(input)?;

        let mut stats = ImportStats {
            cities_imported: document.cities.len(),
            roads_imported: document.roads.len(),
            ..Default::default()
        };
        let mut network = Self {
            vertices: document
                .cities
                .into_iter()
                .map(|c| Vertex::new(VertexId::new(c.id), c.name))
                .collect(),
            edges: Vec::with_capacity(document.roads.len()),
        };
        for road in document.roads {
            road.into_edges(&mut network.edges)?;
        }

        stats.edges_created = network.edges.len();
        stats.duration_ms = start.elapsed().as_millis() as u64;
        info!(
            cities = stats.cities_imported,
            roads = stats.roads_imported,
            edges = stats.edges_created,
            "json import finished"
        );
        Ok((network, stats))
    }

    /// 构建图
    pub fn into_graph(self) -> Result<Graph> {
        Graph::new(self.vertices, self.edges)
    }
}
