use std::io;

/// 位图编码过程中可能出现的错误。
#[derive(Debug, thiserror::Error)]
pub enum BitmapError {
    /// 参数非法：宽度不为正，或几何尺寸超出 BMP 头部字段的表示范围。
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("I/O error while writing bitmap: {0}")]
    Io(#[from] io::Error),
}
