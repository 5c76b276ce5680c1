use crate::constants::{BITS_PER_BYTE, CHANNELS_PER_PIXEL, PAYLOAD_CHANNELS_PER_PIXEL, SENTINEL};
use std::io::{self, ErrorKind};

pub fn capacity_bits(width: u32, height: u32) -> usize {
    PAYLOAD_CHANNELS_PER_PIXEL * width as usize * height as usize
}

pub fn max_message_len(width: u32, height: u32) -> usize {
    (capacity_bits(width, height) / BITS_PER_BYTE).saturating_sub(1)
}

pub fn embed(pixels: &mut [u8], width: u32, height: u32, message: &[u8]) -> Result<(), io::Error> {
    let expected_len = (width as usize)
        .checked_mul(height as usize)
        .and_then(|area| area.checked_mul(CHANNELS_PER_PIXEL));
    if expected_len != Some(pixels.len()) {
        return Err(io::Error::new(
            ErrorKind::InvalidInput,
            format!(
                "The pixel buffer holds {} bytes, but a {}x{} RGBA image requires exactly {} bytes.",
                pixels.len(),
                width,
                height,
                (width as u64) * (height as u64) * CHANNELS_PER_PIXEL as u64,
            ),
        ));
    }

    if message.contains(&SENTINEL) {
        return Err(io::Error::new(
            ErrorKind::InvalidInput,
            "The message must not contain a NUL byte, which is reserved as the end-of-message sentinel.",
        ));
    }

    let required_bits = BITS_PER_BYTE * (message.len() + 1);
    let available_bits = capacity_bits(width, height);
    if required_bits > available_bits {
        return Err(io::Error::new(
            ErrorKind::InvalidInput,
            format!(
                "The message and its sentinel need {} bits, but a {}x{} image provides only {}; at most {} message bytes fit.",
                required_bits,
                width,
                height,
                available_bits,
                max_message_len(width, height),
            ),
        ));
    }

    let bits = message
        .iter()
        .chain(std::iter::once(&SENTINEL))
        .flat_map(|&byte| (0..BITS_PER_BYTE).rev().map(move |shift| (byte >> shift) & 1));

    for (i, bit) in bits.enumerate() {
        let channel =
            i / PAYLOAD_CHANNELS_PER_PIXEL * CHANNELS_PER_PIXEL + i % PAYLOAD_CHANNELS_PER_PIXEL;
        pixels[channel] = (pixels[channel] & 0xFE) | bit;
    }

    Ok(())
}

pub fn extract(pixels: &[u8]) -> Option<Vec<u8>> {
    let mut message = Vec::new();
    let mut accumulator: u8 = 0;
    let mut collected_bits = 0;

    for (i, &byte) in pixels.iter().enumerate() {
        if i % CHANNELS_PER_PIXEL == CHANNELS_PER_PIXEL - 1 {
            continue;
        }

        accumulator = (accumulator << 1) | (byte & 1);
        collected_bits += 1;

        if collected_bits == BITS_PER_BYTE {
            if accumulator == SENTINEL {
                return Some(message);
            }
            message.push(accumulator);
            accumulator = 0;
            collected_bits = 0;
        }
    }

    None
}
