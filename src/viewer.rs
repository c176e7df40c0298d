use std::io;
use std::path::Path;
use std::process::Command;

/// 使用当前平台的默认程序打开 `path`。
///
/// * Windows: `cmd /C start "" <path>`
/// * macOS: `open <path>`
/// * 其他类 Unix 系统: `xdg-open <path>`
pub fn open_in_default_viewer(path: &Path) -> Result<(), io::Error> {
    let mut command = viewer_command(path);
    let status = command.status()?;

    if !status.success() {
        return Err(io::Error::other(format!(
            "The viewer command {:?} exited with {status}.",
            command.get_program()
        )));
    }

    Ok(())
}

fn viewer_command(path: &Path) -> Command {
    if cfg!(target_os = "windows") {
        let mut command = Command::new("cmd");
        // `start` 把第一个带引号的参数当作窗口标题
        command.args(["/C", "start", ""]).arg(path);
        command
    } else if cfg!(target_os = "macos") {
        let mut command = Command::new("open");
        command.arg(path);
        command
    } else {
        let mut command = Command::new("xdg-open");
        command.arg(path);
        command
    }
}
