//! # 命令处理逻辑模块
//!
//! 包含将二进制文件转换为灰度位图的高级业务逻辑。
//! 本模块负责协调文件 I/O、调用核心编码函数以及向用户报告结果。

use crate::bitmap::{Geometry, encode_to};
use crate::cli::ConvertArgs;
use crate::constants::OUTPUT_SUFFIX;
use crate::error::BitmapError;
use crate::viewer::open_in_default_viewer;
use anyhow::{Context, Result};
use colored::Colorize;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// 处理转换命令的执行逻辑。
///
/// 负责读取输入文件、丢弃 `offset` 之前的字节、确定输出路径、调用编码核心函数写出位图，
/// 最后按需用系统默认查看器打开结果。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径及宽度、偏移量等选项的 `ConvertArgs` 结构体。
///
/// # Returns
///
/// 写出的位图文件路径。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取输入文件。
/// * 输出文件已存在且未指定 `--force`。
/// * 宽度不合法 (不为正，或图像超出 BMP 的表示范围)。
/// * 无法写入输出文件 (此时已写出的部分文件会被删除)。
/// * 无法启动默认查看器。
pub fn handle_convert(args: ConvertArgs) -> Result<PathBuf> {
    let data = read_input(&args.input_file, args.offset)?;

    // 先校验宽度，再创建输出文件
    Geometry::new(data.len(), args.width).with_context(|| {
        format!(
            "Cannot lay out {} bytes at width {}",
            data.len(),
            args.width.to_string().red().bold()
        )
    })?;

    let dest = args
        .output
        .unwrap_or_else(|| output_path_for(&args.input_file));

    anyhow::ensure!(
        args.force || !dest.exists(),
        "Output file already exists: {}. \nUse --force to overwrite it.",
        dest.to_string_lossy().red().bold()
    );

    let geometry = write_or_remove(&dest, |writer| encode_to(&data, args.width, writer))?;

    println!(
        "The bitmap ({} x {} pixels) has been successfully saved: {}",
        geometry.width().to_string().green(),
        geometry.height().to_string().green(),
        dest.to_string_lossy().green().bold()
    );

    if args.open {
        open_in_default_viewer(&dest).with_context(|| {
            format!(
                "Unable to open the bitmap in the default viewer: {}",
                dest.to_string_lossy().red().bold()
            )
        })?;
    }

    Ok(dest)
}

/// 创建 `dest` 并通过 `write` 写入位图。
///
/// 写入失败时删除已写出的部分文件，再返回原始错误。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法创建输出文件。
/// * `write` 返回错误 (此时 `dest` 已被删除)。
pub fn write_or_remove<F>(dest: &Path, write: F) -> Result<Geometry>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<Geometry, BitmapError>,
{
    let file = File::create(dest).with_context(|| {
        format!(
            "Unable to create output file: {}",
            dest.to_string_lossy().red().bold()
        )
    })?;

    let mut writer = BufWriter::new(file);
    match write(&mut writer) {
        Ok(geometry) => Ok(geometry),
        Err(err) => {
            drop(writer);
            // 清理失败不掩盖原始错误
            let _ = fs::remove_file(dest);
            Err(err).with_context(|| {
                format!(
                    "Failed to write bitmap: {}",
                    dest.to_string_lossy().red().bold()
                )
            })
        }
    }
}

/// 读取整个输入文件并丢弃前 `offset` 个字节。
///
/// `offset` 超过文件长度时返回空数据，而不是报错。
///
/// # Errors
///
/// 无法读取输入文件时返回错误。
pub fn read_input(path: &Path, offset: u64) -> Result<Vec<u8>> {
    let mut data = fs::read(path).with_context(|| {
        format!(
            "Unable to read input file: {}",
            path.to_string_lossy().red().bold()
        )
    })?;

    let skip = usize::try_from(offset).unwrap_or(usize::MAX).min(data.len());
    data.drain(..skip);

    Ok(data)
}

/// 根据输入路径生成默认输出路径：`<input_file>.bitmap.bmp`。
pub fn output_path_for(input: &Path) -> PathBuf {
    let mut name = input.as_os_str().to_owned();
    name.push(OUTPUT_SUFFIX);
    PathBuf::from(name)
}
