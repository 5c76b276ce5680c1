//! # pixveil 库
//!
//! 本库包含基于哨兵终止位流的 RGB 最低有效位隐写工具的核心逻辑。

// 声明库包含的所有模块。

pub mod cli;
pub mod constants;
pub mod handler;
pub mod steganography;
