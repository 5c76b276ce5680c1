/// 每个像素包含的通道数 (RGBA 布局，每通道 1 字节)。
/// 像素缓冲区的长度必须等于 宽 × 高 × 4。
pub const CHANNELS_PER_PIXEL: usize = 4;

/// 每个像素中可写入隐藏数据的通道数。
/// 只改写 R、G、B 三个通道的最低位；Alpha 通道永远保持原样，
/// 既保留透明度，也避免整个像素产生可检测的偏移。
pub const PAYLOAD_CHANNELS_PER_PIXEL: usize = 3;

/// 标记信息结尾的哨兵字节。
/// 编码时追加到信息末尾，解码器一旦读出零字节即停止提取。
pub const SENTINEL: u8 = 0x00;

/// 一个信息字节展开后的位数。
/// 每个位占用一个颜色通道的最低位，因此隐藏一个字节需要 8 个通道。
pub const BITS_PER_BYTE: usize = 8;

/// 允许作为输出的无损图像扩展名。
/// 有损压缩 (如 JPEG) 会重写像素低位，直接摧毁隐藏的数据，
/// 因此输出只接受这里列出的格式。
pub const LOSSLESS_EXTENSIONS: &[&str] = &["png", "bmp", "tif", "tiff", "webp", "qoi"];
