//! # 位图编码模块
//!
//! 将任意字节序列编码为 8 位灰度调色板、无压缩、自上而下存储的 BMP 图像。
//! 每个输入字节对应一个像素，字节值即为调色板索引，也就是灰度值。

use crate::constants::{
    BITS_PER_PIXEL, FILE_HEADER_SIZE, INFO_HEADER_SIZE, PALETTE_ENTRIES, PALETTE_SIZE,
    PIXEL_DATA_OFFSET, PIXELS_PER_METER, ROW_ALIGNMENT,
};
use crate::error::BitmapError;
use std::io::{self, Read, Write};

/// 由输入长度和宽度推导出的图像几何信息。
///
/// 只能通过 [`Geometry::new`] 构造，因此各字段始终落在 BMP 头部可表示的范围内。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    width: usize,
    height: usize,
    row_padding: usize,
}

impl Geometry {
    /// 根据数据长度和宽度计算几何信息。
    ///
    /// # Errors
    ///
    /// 如果 `width` 不为正，或宽度、高度、文件大小超出 BMP 头部字段的表示范围，
    /// 返回 [`BitmapError::InvalidArgument`]。
    pub fn new(data_len: usize, width: i64) -> Result<Self, BitmapError> {
        if width <= 0 {
            return Err(BitmapError::InvalidArgument(format!(
                "width must be a positive integer, got {width}"
            )));
        }
        if width > i64::from(i32::MAX) {
            return Err(BitmapError::InvalidArgument(format!(
                "width {width} does not fit in the bitmap header"
            )));
        }

        let width = width as usize;
        let height = data_len.div_ceil(width);
        if height > i32::MAX as usize {
            return Err(BitmapError::InvalidArgument(format!(
                "{data_len} bytes at width {width} give {height} rows, more than a bitmap can hold"
            )));
        }

        let geometry = Self {
            width,
            height,
            row_padding: (ROW_ALIGNMENT - width % ROW_ALIGNMENT) % ROW_ALIGNMENT,
        };

        match geometry.checked_file_size() {
            Some(size) if size <= u32::MAX as usize => Ok(geometry),
            _ => Err(BitmapError::InvalidArgument(format!(
                "a {width}x{height} bitmap exceeds the 4 GiB file size limit"
            ))),
        }
    }

    /// 每行像素数。
    pub fn width(&self) -> usize {
        self.width
    }

    /// 行数，等于 `ceil(数据长度 / width)`。
    pub fn height(&self) -> usize {
        self.height
    }

    /// 每行末尾补齐到 4 字节边界的零字节数。
    pub fn row_padding(&self) -> usize {
        self.row_padding
    }

    /// 每行在文件中占用的字节数 (含填充)。
    pub fn stride(&self) -> usize {
        self.width + self.row_padding
    }

    /// 像素数据区的总字节数。
    pub fn pixel_data_size(&self) -> usize {
        self.stride() * self.height
    }

    /// 整个 BMP 文件的字节数。
    pub fn file_size(&self) -> usize {
        PIXEL_DATA_OFFSET + self.pixel_data_size()
    }

    fn checked_file_size(&self) -> Option<usize> {
        self.width
            .checked_add(self.row_padding)?
            .checked_mul(self.height)?
            .checked_add(PIXEL_DATA_OFFSET)
    }
}

/// 生成恒等灰度调色板：第 `i` 个条目为 `(i, i, i, 0)`。
pub fn grayscale_palette() -> [u8; PALETTE_SIZE] {
    let mut palette = [0u8; PALETTE_SIZE];
    palette
        .chunks_exact_mut(4)
        .take(PALETTE_ENTRIES)
        .enumerate()
        .for_each(|(i, entry)| {
            let level = i as u8;
            entry.copy_from_slice(&[level, level, level, 0]);
        });
    palette
}

/// 将 `data` 编码为完整的 BMP 文件字节。
///
/// # Errors
///
/// 宽度不合法时返回 [`BitmapError::InvalidArgument`]。
pub fn encode(data: &[u8], width: i64) -> Result<Vec<u8>, BitmapError> {
    let geometry = Geometry::new(data.len(), width)?;
    let mut out = Vec::with_capacity(geometry.file_size());
    write_bitmap(data, &geometry, &mut out)?;
    Ok(out)
}

/// 将 `data` 编码为 BMP 并逐行写入 `sink`，返回写入的几何信息。
///
/// 在写入第一个字节之前完成参数校验，因此参数错误不会产生任何输出。
///
/// # Errors
///
/// * 宽度不合法时返回 [`BitmapError::InvalidArgument`]。
/// * `sink` 写入失败时返回 [`BitmapError::Io`]。
pub fn encode_to<W: Write>(data: &[u8], width: i64, sink: &mut W) -> Result<Geometry, BitmapError> {
    let geometry = Geometry::new(data.len(), width)?;
    write_bitmap(data, &geometry, sink)?;
    Ok(geometry)
}

fn write_bitmap<W: Write>(data: &[u8], geometry: &Geometry, sink: &mut W) -> io::Result<()> {
    sink.write_all(&headers(geometry))?;
    sink.write_all(&grayscale_palette())?;

    for row in data.chunks(geometry.width) {
        sink.write_all(row)?;
        // 最后一行不足 width 时先补零，再补行对齐填充
        let zeros = (geometry.width - row.len() + geometry.row_padding) as u64;
        io::copy(&mut io::repeat(0).take(zeros), sink)?;
    }

    sink.flush()
}

/// 文件头与信息头，共 54 字节，所有多字节字段均为小端序。
fn headers(geometry: &Geometry) -> Vec<u8> {
    // Geometry::new 已保证以下转换不会截断
    let file_size = geometry.file_size() as u32;
    let image_size = geometry.pixel_data_size() as u32;
    let width = geometry.width as i32;
    let height = -(geometry.height as i32);

    let mut out = Vec::with_capacity(FILE_HEADER_SIZE + INFO_HEADER_SIZE);

    // BITMAPFILEHEADER
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&file_size.to_le_bytes());
    out.extend_from_slice(&[0u8; 4]); // reserved
    out.extend_from_slice(&(PIXEL_DATA_OFFSET as u32).to_le_bytes());

    // BITMAPINFOHEADER
    out.extend_from_slice(&(INFO_HEADER_SIZE as u32).to_le_bytes());
    out.extend_from_slice(&width.to_le_bytes());
    out.extend_from_slice(&height.to_le_bytes()); // 负数表示自上而下
    out.extend_from_slice(&1u16.to_le_bytes()); // planes
    out.extend_from_slice(&BITS_PER_PIXEL.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes()); // BI_RGB
    out.extend_from_slice(&image_size.to_le_bytes());
    out.extend_from_slice(&PIXELS_PER_METER.to_le_bytes());
    out.extend_from_slice(&PIXELS_PER_METER.to_le_bytes());
    out.extend_from_slice(&(PALETTE_ENTRIES as u32).to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes()); // important colors

    out
}
