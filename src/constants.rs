/// BMP 文件头 (BITMAPFILEHEADER) 的大小 (字节)。
pub const FILE_HEADER_SIZE: usize = 14;

/// 信息头 (BITMAPINFOHEADER) 的大小 (字节)。
pub const INFO_HEADER_SIZE: usize = 40;

/// 调色板条目数。8 位图像的每个像素值对应一个条目。
pub const PALETTE_ENTRIES: usize = 256;

/// 调色板的大小 (字节)。每个条目为 (B, G, R, 保留) 4 字节。
pub const PALETTE_SIZE: usize = PALETTE_ENTRIES * 4;

/// 像素数据在文件中的起始偏移：两个头部加上调色板。
pub const PIXEL_DATA_OFFSET: usize = FILE_HEADER_SIZE + INFO_HEADER_SIZE + PALETTE_SIZE;

/// 每个像素的位数。
pub const BITS_PER_PIXEL: u16 = 8;

/// 水平/垂直分辨率 (像素/米)，约合 72 DPI。
pub const PIXELS_PER_METER: u32 = 2835;

/// BMP 要求每一行的字节数按 4 字节对齐。
pub const ROW_ALIGNMENT: usize = 4;

/// 默认输出路径在输入文件名之后追加的后缀。
pub const OUTPUT_SUFFIX: &str = ".bitmap.bmp";
