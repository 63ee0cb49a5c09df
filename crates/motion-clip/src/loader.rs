//! 片段容器格式与加载流程
//!
//! 容器格式：
//!
//! ```text
//! [MAGIC: 8 bytes]
//! [Version: 1 byte]
//! [Data: bincode serialized ClipFile]
//! ```
//!
//! 加载流程（顺序固定，见 [`load_clip`]）：
//!
//! 1. 读取并校验容器（魔数、版本、解码）
//! 2. 关节重排（如果请求）——同时作用于位置和速度序列
//! 3. 标定偏移减法——只作用于位置，恰好一次
//! 4. 形状校验，产出 [`MotionClip`]
//!
//! 偏移量以目标关节约定表达，因此第 2、3 步不可交换。

use crate::clip::MotionClip;
use crate::error::{ClipError, LoadError, SaveError};
use crate::remap::JointRemap;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use tracing::info;

/// 片段文件魔数（用于文件格式识别）
pub const MAGIC: &[u8; 8] = b"ATOMMC1\0";

/// 当前容器版本
pub const FORMAT_VERSION: u8 = 1;

/// 磁盘上的原始片段数据
///
/// 未重排、未标定，按录制时的关节约定存储。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClipFile {
    /// 录制采样率（Hz）
    pub sample_rate_hz: u32,

    /// 每帧关节位置
    pub positions: Vec<Vec<f64>>,

    /// 每帧关节速度
    pub velocities: Vec<Vec<f64>>,
}

impl ClipFile {
    /// 保存到文件
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), SaveError> {
        let file = File::create(path.as_ref()).map_err(SaveError::Create)?;
        let mut writer = BufWriter::new(file);

        writer.write_all(MAGIC).map_err(SaveError::Write)?;
        writer.write_all(&[FORMAT_VERSION]).map_err(SaveError::Write)?;

        let data = bincode::serialize(self).map_err(SaveError::Encode)?;
        writer.write_all(&data).map_err(SaveError::Write)?;
        writer.flush().map_err(SaveError::Write)?;

        Ok(())
    }

    /// 从文件加载
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let file = File::open(path.as_ref()).map_err(LoadError::Open)?;
        let mut reader = BufReader::new(file);

        let mut magic = [0u8; 8];
        reader.read_exact(&mut magic).map_err(LoadError::Header)?;
        if &magic != MAGIC {
            return Err(LoadError::BadMagic);
        }

        let mut version = [0u8; 1];
        reader.read_exact(&mut version).map_err(LoadError::Header)?;
        if version[0] != FORMAT_VERSION {
            return Err(LoadError::UnsupportedVersion(version[0]));
        }

        let mut data = Vec::new();
        reader.read_to_end(&mut data).map_err(LoadError::Header)?;

        bincode::deserialize(&data).map_err(LoadError::Decode)
    }
}

/// 加载选项
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// 关节重排表（录制约定与执行约定不同时设置）
    pub remap: Option<JointRemap>,

    /// 标定偏移向量（目标约定下，每关节一个值）
    ///
    /// `None` 表示不做偏移减法（如元数据查看场景）。
    pub calibration_offset: Option<Vec<f64>>,
}

/// 加载并预处理动作片段
///
/// 按模块文档的固定顺序执行：容器读取 -> 重排 -> 偏移减法 -> 校验。
/// 任何阶段失败整体中止，不产出部分构造的片段。
pub fn load_clip<P: AsRef<Path>>(path: P, options: &LoadOptions) -> Result<MotionClip, LoadError> {
    let raw = ClipFile::load(path.as_ref())?;

    let mut positions = raw.positions;
    let mut velocities = raw.velocities;

    // 重排必须先于偏移减法：偏移量以目标约定表达
    if let Some(remap) = &options.remap {
        info!("remapping joint order ({} joints)", remap.len());
        remap.apply_frames(&mut positions).map_err(LoadError::Validate)?;
        remap.apply_frames(&mut velocities).map_err(LoadError::Validate)?;
    }

    if let Some(offset) = &options.calibration_offset {
        for row in positions.iter_mut() {
            if row.len() != offset.len() {
                return Err(LoadError::Validate(ClipError::JointCountMismatch {
                    expected: offset.len(),
                    actual: row.len(),
                }));
            }
            for (value, off) in row.iter_mut().zip(offset.iter()) {
                *value -= off;
            }
        }
    }

    let clip = MotionClip::new(raw.sample_rate_hz, positions, velocities)?;

    info!(
        "loaded motion clip: {} Hz, {} frames, {} joints",
        clip.sample_rate_hz(),
        clip.frame_count(),
        clip.joint_count()
    );

    Ok(clip)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    fn sample_file() -> ClipFile {
        ClipFile {
            sample_rate_hz: 30,
            positions: vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]],
            velocities: vec![vec![0.1, 0.2, 0.3], vec![0.4, 0.5, 0.6]],
        }
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("walk.clip");

        sample_file().save(&path).unwrap();
        let loaded = ClipFile::load(&path).unwrap();

        assert_eq!(loaded.sample_rate_hz, 30);
        assert_eq!(loaded.positions, sample_file().positions);
        assert_eq!(loaded.velocities, sample_file().velocities);
    }

    #[test]
    fn load_rejects_bad_magic() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.clip");
        std::fs::File::create(&path)
            .unwrap()
            .write_all(b"NOTACLIP\x01rest")
            .unwrap();

        assert!(matches!(ClipFile::load(&path), Err(LoadError::BadMagic)));
    }

    #[test]
    fn load_rejects_unknown_version() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("v9.clip");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(MAGIC).unwrap();
        file.write_all(&[9]).unwrap();

        assert!(matches!(
            ClipFile::load(&path),
            Err(LoadError::UnsupportedVersion(9))
        ));
    }

    #[test]
    fn load_reports_missing_file() {
        let err = ClipFile::load("/nonexistent/clip.bin").unwrap_err();
        assert!(matches!(err, LoadError::Open(_)));
    }

    #[test]
    fn load_clip_subtracts_offset_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("offset.clip");
        sample_file().save(&path).unwrap();

        let options = LoadOptions {
            remap: None,
            calibration_offset: Some(vec![1.0, 1.0, 1.0]),
        };
        let clip = load_clip(&path, &options).unwrap();

        assert_eq!(clip.position_frame(0).unwrap(), &[0.0, 1.0, 2.0]);
        assert_eq!(clip.position_frame(1).unwrap(), &[3.0, 4.0, 5.0]);
        // 速度不受偏移影响
        assert_eq!(clip.velocity_frame(0).unwrap(), &[0.1, 0.2, 0.3]);
    }

    #[test]
    fn load_clip_remaps_before_offset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("remap.clip");
        sample_file().save(&path).unwrap();

        // 源 0 -> 目标 1, 源 1 -> 目标 2, 源 2 -> 目标 0
        let remap = JointRemap::new(vec![1, 2, 0]).unwrap();
        let offset = vec![10.0, 20.0, 30.0];

        let options = LoadOptions {
            remap: Some(remap.clone()),
            calibration_offset: Some(offset.clone()),
        };
        let clip = load_clip(&path, &options).unwrap();

        // 帧 0 原始为 [1, 2, 3]，重排后 [3, 1, 2]，再减偏移
        assert_eq!(clip.position_frame(0).unwrap(), &[-7.0, -19.0, -28.0]);
        // 速度同样重排，但不减偏移
        assert_eq!(clip.velocity_frame(0).unwrap(), &[0.3, 0.1, 0.2]);

        // 顺序敏感性：先减偏移再重排得到不同（错误）的结果
        let wrong: Vec<f64> = remap
            .apply_row(
                &[1.0 - 10.0, 2.0 - 20.0, 3.0 - 30.0],
            )
            .unwrap();
        assert_ne!(clip.position_frame(0).unwrap(), wrong.as_slice());
    }

    #[test]
    fn load_clip_rejects_offset_length_mismatch() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("short_offset.clip");
        sample_file().save(&path).unwrap();

        let options = LoadOptions {
            remap: None,
            calibration_offset: Some(vec![1.0, 1.0]),
        };
        assert!(matches!(
            load_clip(&path, &options),
            Err(LoadError::Validate(ClipError::JointCountMismatch {
                expected: 2,
                actual: 3
            }))
        ));
    }

    #[test]
    fn load_clip_without_options_keeps_raw_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("raw.clip");
        sample_file().save(&path).unwrap();

        let clip = load_clip(&path, &LoadOptions::default()).unwrap();
        assert_eq!(clip.position_frame(0).unwrap(), &[1.0, 2.0, 3.0]);
    }
}
