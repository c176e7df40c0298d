use clap::Parser;

use bin2bmp::{cli::ConvertArgs, handler::handle_convert};

/// 程序的主入口点
///
/// 负责解析命令行参数，并将执行交给转换处理函数
fn main() -> anyhow::Result<()> {
    let args = ConvertArgs::parse();

    handle_convert(args)?;
    Ok(())
}
