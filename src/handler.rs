//! # 命令处理逻辑模块
//!
//! 包含处理 `embed` 和 `extract` 子命令的高级业务逻辑。
//! 本模块负责图像的解码与重编码、调用核心隐写算法以及向用户报告结果。

use crate::cli::{EmbedArgs, ExtractArgs};
use crate::constants::LOSSLESS_EXTENSIONS;
use crate::steganography::{embed, extract, max_message_len};
use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

/// 处理 'Embed' 命令的执行逻辑。
///
/// 负责把载体图像解码为 RGBA 像素、读取文本文件、检查隐写空间是否足够、
/// 调用核心嵌入函数，最后把结果保存为无损格式图像。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径及覆盖开关的 `EmbedArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法打开或解码输入的图像文件，或无法读取文本文件。
/// * 图像没有足够的空间来容纳文本及其哨兵字节。
/// * 输出路径是有损格式，或已存在且未指定 `--force`。
/// * 核心嵌入函数 (`embed`) 在执行过程中失败。
/// * 无法保存结果图像。
pub fn handle_embed(args: EmbedArgs) -> Result<()> {
    let picture = image::open(&args.image).with_context(|| {
        format!(
            "Unable to open image file: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;
    let mut carrier = picture.to_rgba8();
    let (width, height) = carrier.dimensions();

    let message = fs::read(&args.text).with_context(|| {
        format!(
            "Unable to read text file: {}",
            args.text.to_string_lossy().red().bold()
        )
    })?;

    let required_space = message.len();
    let available_space = max_message_len(width, height);

    anyhow::ensure!(
        available_space >= required_space,
        "Not enough space in the image to hide the text. \nRequired: {} bytes, Available: {} bytes",
        required_space.to_string().red().bold(),
        available_space.to_string().green().bold()
    );

    let dest = args
        .dest
        .unwrap_or_else(|| default_embed_dest(&args.image));
    ensure_lossless(&dest)?;
    ensure_writable(&dest, args.force)?;

    embed(&mut carrier, width, height, &message).with_context(|| {
        "Failed to embed the message into the image pixels. \nThe text may contain a NUL byte or exceed the image capacity."
    })?;

    carrier.save(&dest).with_context(|| {
        format!(
            "Unable to save the embedded image to: {}",
            dest.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The text has been successfully embedded and saved: {}",
        dest.to_string_lossy().green().bold()
    );

    Ok(())
}

/// 处理 'Extract' 命令的执行逻辑。
///
/// 负责把图像解码为 RGBA 像素并调用核心提取函数。找到哨兵时把提取出的
/// 字节写入目标文本文件；没有找到隐藏信息属于正常结果，只做提示，不报错。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径及覆盖开关的 `ExtractArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法打开或解码输入的图像文件。
/// * 输出文件已存在且未指定 `--force`。
/// * 无法写入到目标文本文件。
pub fn handle_extract(args: ExtractArgs) -> Result<()> {
    let picture = image::open(&args.image).with_context(|| {
        format!(
            "Unable to open image file: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;
    let carrier = picture.to_rgba8();

    match extract(carrier.as_raw()) {
        Some(message) => {
            let dest = args
                .text
                .unwrap_or_else(|| default_extract_dest(&args.image));
            ensure_writable(&dest, args.force)?;

            fs::write(&dest, &message).with_context(|| {
                format!(
                    "Unable to write to target text file: {}",
                    dest.to_string_lossy().red().bold()
                )
            })?;

            println!(
                "The hidden text has been successfully extracted and saved: {}",
                dest.to_string_lossy().green().bold()
            );
        }
        None => {
            println!(
                "{}",
                "No hidden message was found in the image.".yellow().bold()
            );
        }
    }

    Ok(())
}

/// 根据输入图像路径生成默认的嵌入输出路径：同目录下的 veiled_<原文件名>.png。
fn default_embed_dest(image: &Path) -> PathBuf {
    let stem = image
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| String::from("image"));
    image.with_file_name(format!("veiled_{stem}.png"))
}

/// 根据输入图像路径生成默认的提取输出路径：同目录下的 unveiled_<原文件名>.txt。
fn default_extract_dest(image: &Path) -> PathBuf {
    let stem = image
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| String::from("image"));
    image.with_file_name(format!("unveiled_{stem}.txt"))
}

/// 校验输出路径是否为无损图像格式。
fn ensure_lossless(dest: &Path) -> Result<()> {
    let extension = dest
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase());

    let lossless = extension
        .as_deref()
        .is_some_and(|ext| LOSSLESS_EXTENSIONS.contains(&ext));

    anyhow::ensure!(
        lossless,
        "Lossy or unknown output format: {}. \nLossy compression rewrites the low bits and destroys the hidden data; use one of: {}",
        dest.to_string_lossy().red().bold(),
        LOSSLESS_EXTENSIONS.join(", ").green().bold()
    );

    Ok(())
}

/// 覆盖保护：目标文件已存在时，只有指定 `--force` 才允许继续。
fn ensure_writable(dest: &Path, force: bool) -> Result<()> {
    anyhow::ensure!(
        force || !dest.exists(),
        "Output file already exists: {}. \nUse --force to overwrite it.",
        dest.to_string_lossy().red().bold()
    );

    Ok(())
}
