//! 关节顺序重排
//!
//! 录制端与执行端的关节约定可能不同（例如 USD 场景顺序 vs URDF 驱动
//! 顺序）。[`JointRemap`] 是一张固定置换表：源索引 `i` 的数据写入目标
//! 索引 `map[i]`。
//!
//! 重排是一次性变换：应用两次（或在约定已一致时应用）会破坏数据，
//! 由加载流程保证恰好应用一次。

use crate::error::ClipError;

/// 关节顺序置换表
///
/// 构造时校验 `map` 是 `[0, len)` 上的合法置换。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JointRemap {
    map: Vec<usize>,
}

impl JointRemap {
    /// 从置换表构造
    ///
    /// # 错误
    ///
    /// 表为空、含越界索引或含重复目标时返回 [`ClipError::InvalidRemap`]。
    pub fn new(map: Vec<usize>) -> Result<Self, ClipError> {
        if map.is_empty() {
            return Err(ClipError::InvalidRemap("empty table".to_string()));
        }

        let mut seen = vec![false; map.len()];
        for &dst in &map {
            if dst >= map.len() {
                return Err(ClipError::InvalidRemap(format!(
                    "destination index {} out of range (joint count: {})",
                    dst,
                    map.len()
                )));
            }
            if seen[dst] {
                return Err(ClipError::InvalidRemap(format!(
                    "duplicate destination index {}",
                    dst
                )));
            }
            seen[dst] = true;
        }

        Ok(JointRemap { map })
    }

    /// 置换表长度（= 关节数）
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// 置换表是否为空（构造时已拒绝，恒为 false）
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// 重排单帧：`out[map[i]] = row[i]`
    pub fn apply_row(&self, row: &[f64]) -> Result<Vec<f64>, ClipError> {
        if row.len() != self.map.len() {
            return Err(ClipError::JointCountMismatch {
                expected: self.map.len(),
                actual: row.len(),
            });
        }

        let mut out = vec![0.0; row.len()];
        for (src, &dst) in self.map.iter().enumerate() {
            out[dst] = row[src];
        }
        Ok(out)
    }

    /// 就地重排整个帧序列
    pub fn apply_frames(&self, frames: &mut [Vec<f64>]) -> Result<(), ClipError> {
        for row in frames.iter_mut() {
            *row = self.apply_row(row)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_permutation_accepted() {
        let remap = JointRemap::new(vec![2, 0, 1]).unwrap();
        assert_eq!(remap.len(), 3);
    }

    #[test]
    fn rejects_empty_table() {
        assert!(matches!(
            JointRemap::new(vec![]),
            Err(ClipError::InvalidRemap(_))
        ));
    }

    #[test]
    fn rejects_out_of_range_destination() {
        assert!(matches!(
            JointRemap::new(vec![0, 3, 1]),
            Err(ClipError::InvalidRemap(_))
        ));
    }

    #[test]
    fn rejects_duplicate_destination() {
        assert!(matches!(
            JointRemap::new(vec![0, 1, 1]),
            Err(ClipError::InvalidRemap(_))
        ));
    }

    #[test]
    fn apply_row_moves_source_to_destination() {
        // 源 0 -> 目标 2, 源 1 -> 目标 0, 源 2 -> 目标 1
        let remap = JointRemap::new(vec![2, 0, 1]).unwrap();
        let out = remap.apply_row(&[10.0, 20.0, 30.0]).unwrap();
        assert_eq!(out, vec![20.0, 30.0, 10.0]);
    }

    #[test]
    fn apply_row_rejects_wrong_width() {
        let remap = JointRemap::new(vec![1, 0]).unwrap();
        assert!(matches!(
            remap.apply_row(&[1.0, 2.0, 3.0]),
            Err(ClipError::JointCountMismatch { .. })
        ));
    }

    #[test]
    fn apply_frames_reorders_every_row() {
        let remap = JointRemap::new(vec![1, 0]).unwrap();
        let mut frames = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
        remap.apply_frames(&mut frames).unwrap();
        assert_eq!(frames, vec![vec![2.0, 1.0], vec![4.0, 3.0]]);
    }

    #[test]
    fn double_application_corrupts_non_involutive_permutation() {
        // 循环置换：应用两次不等于应用一次
        let remap = JointRemap::new(vec![1, 2, 0]).unwrap();
        let once = remap.apply_row(&[1.0, 2.0, 3.0]).unwrap();
        let twice = remap.apply_row(&once).unwrap();
        assert_ne!(once, twice);
    }
}
