//! 边定义
//!
//! 城市之间的有向道路，权重为距离

use crate::error::{Error, Result};
use crate::graph::vertex::VertexId;
use serde::{Deserialize, Serialize};

/// 边（道路）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// 起点
    origin: VertexId,
    /// 终点
    destination: VertexId,
    /// 距离
    distance: u64,
}

impl Edge {
    /// 创建新边
    pub fn new(origin: VertexId, destination: VertexId, distance: u64) -> Self {
        Self {
            origin,
            destination,
            distance,
        }
    }

    /// 从原始带符号距离创建边，负距离会被拒绝
    pub fn try_new(origin: VertexId, destination: VertexId, distance: i64) -> Result<Self> {
        let distance = u64::try_from(distance).map_err(|_| Error::NegativeWeight {
            origin,
            destination,
            distance,
        })?;
        Ok(Self::new(origin, destination, distance))
    }

    /// 获取起点
    pub fn origin(&self) -> VertexId {
        self.origin
    }

    /// 获取终点
    pub fn destination(&self) -> VertexId {
        self.destination
    }

    /// 获取距离
    pub fn distance(&self) -> u64 {
        self.distance
    }

    /// 反向边（双向道路导入时使用）
    pub fn reversed(&self) -> Self {
        Self::new(self.destination, self.origin, self.distance)
    }

    /// 是否为自环
    pub fn is_loop(&self) -> bool {
        self.origin == self.destination
    }
}
