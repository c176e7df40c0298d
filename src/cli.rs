//! # 命令行接口模块
//!
//! 使用 `clap` 定义了程序的命令行参数。
//! 所有用户通过命令行与程序交互的入口点都在此模块中定义。

use clap::Parser;
use std::path::PathBuf;

/// 将任意二进制文件渲染为 8 位灰度 BMP 图像，每个字节对应一个像素，便于肉眼观察数据结构。
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "将任意二进制文件 (固件镜像、可执行文件、抓取的缓冲区等) 渲染为 8 位灰度 BMP 图像。\n每个字节对应一个像素，字节值即灰度值，图像按从上到下、从左到右的顺序排列。"
)]
pub struct ConvertArgs {
    /// 要渲染的输入二进制文件路径。
    pub input_file: PathBuf,

    /// 输出图像的宽度 (像素)，必须为正整数。
    #[arg(long, allow_negative_numbers = true)]
    pub width: i64,

    /// 从输入文件的第几个字节开始读取，之前的字节被丢弃。
    #[arg(long, default_value_t = 0)]
    pub offset: u64,

    /// 生成完成后使用系统默认的图像查看器打开结果。
    #[arg(long)]
    pub open: bool,

    /// 输出图像路径。默认为 `<input_file>.bitmap.bmp`。
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// 输出文件已存在时强制覆盖。
    #[arg(short, long)]
    pub force: bool,
}
