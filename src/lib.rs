//! # bin2bmp 库
//!
//! 本库包含将二进制数据渲染为灰度位图的核心逻辑。

// 声明库包含的所有模块。

pub mod bitmap;
pub mod cli;
pub mod constants;
pub mod error;
pub mod handler;
pub mod viewer;

pub use bitmap::{Geometry, encode, encode_to, grayscale_palette};
pub use error::BitmapError;
