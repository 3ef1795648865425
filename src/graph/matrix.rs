//! 邻接矩阵
//!
//! 行主序存储的 0/1 方阵，只记录是否有边，不记录权重

use serde::{Deserialize, Serialize};

/// 邻接矩阵
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MatrixData")]
pub struct AdjacencyMatrix {
    size: usize,
    cells: Vec<u8>,
}

#[derive(Deserialize)]
struct MatrixData {
    size: usize,
    cells: Vec<u8>,
}

impl TryFrom<MatrixData> for AdjacencyMatrix {
    type Error = String;

    fn try_from(data: MatrixData) -> Result<Self, Self::Error> {
        if data.size.checked_mul(data.size) != Some(data.cells.len()) {
            return Err(format!(
                "矩阵大小不匹配: size={}, cells={}",
                data.size,
                data.cells.len()
            ));
        }
        if data.cells.iter().any(|&c| c > 1) {
            return Err("矩阵单元格只能是 0 或 1".to_string());
        }
        Ok(Self {
            size: data.size,
            cells: data.cells,
        })
    }
}

impl AdjacencyMatrix {
    /// 创建全零矩阵
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![0; size * size],
        }
    }

    /// 标记 row -> col 存在边；平行边折叠为同一个 1
    pub(crate) fn set(&mut self, row: usize, col: usize) {
        self.cells[row * self.size + col] = 1;
    }

    /// 矩阵边长（顶点数）
    pub fn size(&self) -> usize {
        self.size
    }

    /// 读取单元格，越界返回 None
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        if row >= self.size || col >= self.size {
            return None;
        }
        Some(self.cells[row * self.size + col])
    }

    /// 是否存在 row -> col 的边
    pub fn has_edge(&self, row: usize, col: usize) -> bool {
        self.get(row, col) == Some(1)
    }

    /// 获取一行
    pub fn row(&self, row: usize) -> Option<&[u8]> {
        if row >= self.size {
            return None;
        }
        let start = row * self.size;
        Some(&self.cells[start..start + self.size])
    }

    /// 按行迭代
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        // chunks(0) 会 panic，空矩阵直接返回空迭代器
        self.cells.chunks(self.size.max(1))
    }

    /// 出度（自环计入）
    pub fn out_degree(&self, row: usize) -> usize {
        self.row(row)
            .map(|r| r.iter().filter(|&&c| c == 1).count())
            .unwrap_or(0)
    }
}
