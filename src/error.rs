//! 错误类型定义

use crate::graph::VertexId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("顶点不存在: {0}")]
    VertexNotFound(VertexId),

    #[error("城市不存在: {0}")]
    CityNotFound(String),

    #[error("顶点重复: {0}")]
    DuplicateVertex(VertexId),

    #[error("边引用了图外的顶点: {origin} -> {destination}")]
    MalformedEdge {
        origin: VertexId,
        destination: VertexId,
    },

    #[error("边权不能为负: {origin} -> {destination} ({distance})")]
    NegativeWeight {
        origin: VertexId,
        destination: VertexId,
        distance: i64,
    },

    #[error("导入错误: {0}")]
    ImportError(String),

    #[error("IO 错误: {0}")]
    IoError(#[from] std::io::Error),

    #[error("序列化错误: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::SerializationError(e.to_string())
    }
}
