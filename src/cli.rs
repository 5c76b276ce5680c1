//! # 命令行接口模块
//!
//! 使用 `clap` 定义了程序的命令行结构，包括子命令和参数。
//! 所有用户通过命令行与程序交互的入口点都在此模块中定义。

use clap::Parser;
use std::path::PathBuf;

/// 一款基于 LSB (最低有效位) 隐写术的命令行工具，把文本嵌入到无损格式图像 (如 PNG, BMP) 的 RGB 通道中，或从中提取。
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "一款基于 LSB (最低有效位) 隐写术的命令行工具，把文本嵌入到无损格式图像 (如 PNG, BMP) 的 RGB 通道中，或从中提取。"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令：embed (嵌入) 和 extract (提取)。
#[derive(Parser, Debug)]
pub enum Commands {
    /// 将文本文件内容嵌入到无损格式图像 (如 PNG, BMP) 的 RGB 通道最低位中。
    Embed(EmbedArgs),

    /// 从经过隐写的图像中提取隐藏的文本。
    Extract(ExtractArgs),
}

/// 'embed' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct EmbedArgs {
    /// 作为载体的输入图像文件路径 (如 PNG, BMP)。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 要隐藏的文本内容的文件路径。
    #[arg(short, long)]
    pub text: PathBuf,

    /// 嵌入完成后保存结果图像的输出路径；省略时默认为输入图像旁的 veiled_<原文件名>.png。
    #[arg(short, long)]
    pub dest: Option<PathBuf>,

    /// 当输出文件已存在时允许覆盖。
    #[arg(short, long)]
    pub force: bool,
}

/// 'extract' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct ExtractArgs {
    /// 已嵌入文本数据的图像文件路径。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 提取文本后保存内容的输出路径；省略时默认为输入图像旁的 unveiled_<原文件名>.txt。
    #[arg(short, long)]
    pub text: Option<PathBuf>,

    /// 当输出文件已存在时允许覆盖。
    #[arg(short, long)]
    pub force: bool,
}
