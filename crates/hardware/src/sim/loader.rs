//! Program image loader.
//!
//! Turns the bytes of a program file into a [`ProgramImage`]. It accepts:
//! 1. **ELF32:** MIPS executables; loadable segments are placed at their
//!    addresses and the ELF entry point becomes the start PC.
//! 2. **Hex listing:** One 32-bit word per line, optional `0x` prefix, `#`
//!    starts a comment. Placed contiguously from the default base.
//! 3. **Raw binary:** Big-endian words placed contiguously from the default base.

use std::fs;
use std::path::Path;

use object::elf::{PF_X, PT_LOAD};
use object::read::elf::{ElfFile32, ProgramHeader};
use object::{Architecture, Endianness, Object};
use tracing::debug;

use crate::common::constants::WORD_BYTES;
use crate::common::error::{Result, SimError};
use crate::soc::traits::ByteOrder;

const ELF_MAGIC: &[u8; 4] = b"\x7fELF";

/// A contiguous run of words to place in memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    /// Load address.
    pub addr: u32,
    /// Contents.
    pub words: Vec<u32>,
    /// Contains code; fetch stops at the end of the last executable segment.
    pub executable: bool,
}

impl Segment {
    /// First address past the segment.
    pub fn end(&self) -> u32 {
        self.addr
            .wrapping_add((self.words.len() as u32).wrapping_mul(WORD_BYTES))
    }
}

/// A loadable program.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgramImage {
    /// Start PC.
    pub entry: u32,
    /// Memory contents.
    pub segments: Vec<Segment>,
    /// Lane order of the data; big-endian except for little-endian ELF files.
    pub byte_order: ByteOrder,
}

impl ProgramImage {
    /// A single code segment at `base`, entered at its first word.
    pub fn from_words(base: u32, words: &[u32]) -> Self {
        Self {
            entry: base,
            segments: vec![Segment {
                addr: base,
                words: words.to_vec(),
                executable: true,
            }],
            byte_order: ByteOrder::Big,
        }
    }

    /// End of the highest executable segment.
    pub fn code_end(&self) -> Option<u32> {
        self.segments
            .iter()
            .filter(|s| s.executable)
            .map(Segment::end)
            .max()
    }
}

/// Reads and parses a program file.
///
/// # Errors
///
/// I/O failures and any error from [`load_image`].
pub fn load_file(path: impl AsRef<Path>, default_base: u32) -> Result<ProgramImage> {
    let bytes = fs::read(path.as_ref())?;
    debug!("loaded {} bytes from {}", bytes.len(), path.as_ref().display());
    load_image(&bytes, default_base)
}

/// Parses a program image, detecting its format.
///
/// # Errors
///
/// [`SimError::Loader`] for malformed or non-MIPS ELF files, unparsable hex
/// lines, or raw binaries whose length is not a multiple of four.
pub fn load_image(bytes: &[u8], default_base: u32) -> Result<ProgramImage> {
    if bytes.starts_with(ELF_MAGIC) {
        return load_elf(bytes);
    }
    if let Some(words) = std::str::from_utf8(bytes).ok().and_then(parse_hex) {
        return Ok(ProgramImage::from_words(default_base, &words));
    }
    load_raw(bytes, default_base)
}

fn load_elf(bytes: &[u8]) -> Result<ProgramImage> {
    let elf = ElfFile32::<Endianness>::parse(bytes)
        .map_err(|e| SimError::Loader(format!("invalid ELF: {e}")))?;
    if elf.architecture() != Architecture::Mips {
        return Err(SimError::Loader(format!(
            "not a MIPS executable: {:?}",
            elf.architecture()
        )));
    }
    let little = elf.is_little_endian();
    let endian = elf.endian();

    let mut segments = Vec::new();
    for header in elf.elf_program_headers() {
        if header.p_type(endian) != PT_LOAD {
            continue;
        }
        let size = header.p_memsz(endian) as usize;
        if size == 0 {
            continue;
        }
        let data = header
            .data(endian, bytes)
            .map_err(|()| SimError::Loader("segment data out of bounds".into()))?;
        let mut buf = data.to_vec();
        buf.resize(size.next_multiple_of(WORD_BYTES as usize), 0);
        let words = buf
            .chunks_exact(4)
            .map(|c| {
                let raw = [c[0], c[1], c[2], c[3]];
                if little {
                    u32::from_le_bytes(raw)
                } else {
                    u32::from_be_bytes(raw)
                }
            })
            .collect();
        let addr = header.p_vaddr(endian);
        debug!("ELF segment {addr:#010x} ({size} bytes)");
        segments.push(Segment {
            addr,
            words,
            executable: header.p_flags(endian) & PF_X != 0,
        });
    }

    let entry = u32::try_from(elf.entry())
        .map_err(|_| SimError::Loader("entry point out of range".into()))?;
    Ok(ProgramImage {
        entry,
        segments,
        byte_order: if little {
            ByteOrder::Little
        } else {
            ByteOrder::Big
        },
    })
}

fn parse_hex(text: &str) -> Option<Vec<u32>> {
    let mut words = Vec::new();
    for line in text.lines() {
        let line = line.split('#').next().unwrap_or_default().trim();
        if line.is_empty() {
            continue;
        }
        let digits = line
            .strip_prefix("0x")
            .or_else(|| line.strip_prefix("0X"))
            .unwrap_or(line);
        if digits.len() > 8 {
            return None;
        }
        words.push(u32::from_str_radix(digits, 16).ok()?);
    }
    (!words.is_empty()).then_some(words)
}

fn load_raw(bytes: &[u8], base: u32) -> Result<ProgramImage> {
    if bytes.len() % 4 != 0 {
        return Err(SimError::Loader(format!(
            "raw image length {} is not a multiple of 4",
            bytes.len()
        )));
    }
    let words: Vec<u32> = bytes
        .chunks_exact(4)
        .map(|c| u32::from_be_bytes([c[0], c[1], c[2], c[3]]))
        .collect();
    Ok(ProgramImage::from_words(base, &words))
}
