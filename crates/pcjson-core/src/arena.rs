//! Bump allocator owning the outputs of generate/parse calls.
//!
//! Storage is a list of fixed-capacity byte blocks. Allocations move forward
//! through the last block; when it cannot satisfy a request a new block of
//! `max(block_size, size)` bytes is appended. Individual allocations are never
//! freed: `reset` drops every block at once. Callers hold compact handles
//! rather than references, so the arena can keep growing while handles stay
//! valid until the next reset.

use pcjson_contracts::{ARENA_DEFAULT_ALIGNMENT, ARENA_DEFAULT_BLOCK_SIZE};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub block_size: usize,
    pub alignment: usize,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            block_size: ARENA_DEFAULT_BLOCK_SIZE,
            alignment: ARENA_DEFAULT_ALIGNMENT,
        }
    }
}

/// Handle to a byte range stored in an [`Arena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArenaSlice {
    block: u32,
    offset: u32,
    len: u32,
}

impl ArenaSlice {
    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Offset from the start of the owning block.
    pub fn offset(&self) -> usize {
        self.offset as usize
    }
}

/// Handle to a UTF-8 string stored in an [`Arena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArenaStr(ArenaSlice);

#[derive(Debug)]
struct Block {
    data: Box<[u8]>,
    used: usize,
}

impl Block {
    fn new(size: usize) -> Self {
        Self {
            data: vec![0u8; size].into_boxed_slice(),
            used: 0,
        }
    }

    fn fit(&self, align: usize, size: usize) -> Option<usize> {
        let start = self.used.checked_add(align - 1)? & !(align - 1);
        let end = start.checked_add(size)?;
        (end <= self.data.len()).then_some(start)
    }
}

#[derive(Debug, Default)]
pub struct Arena {
    config: ArenaConfig,
    blocks: Vec<Block>,
}

impl Arena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ArenaConfig) -> Self {
        Self {
            config,
            blocks: Vec::new(),
        }
    }

    pub fn config(&self) -> ArenaConfig {
        self.config
    }

    /// Reserves `size` zeroed bytes at an offset that is a multiple of `align`.
    ///
    /// `align` of zero is treated as the configured default; other values are
    /// rounded up to a power of two. Never fails for requests that fit in `u32`.
    pub fn allocate(&mut self, align: usize, size: usize) -> ArenaSlice {
        let align = match align {
            0 => self.config.alignment.max(1).next_power_of_two(),
            a => a.next_power_of_two(),
        };
        let fitted = self
            .blocks
            .last()
            .and_then(|block| block.fit(align, size))
            .map(|offset| (self.blocks.len() - 1, offset));
        let (block, offset) = match fitted {
            Some(found) => found,
            None => {
                // A fresh block starts at offset zero, which satisfies any alignment.
                self.blocks
                    .push(Block::new(self.config.block_size.max(size).max(1)));
                (self.blocks.len() - 1, 0)
            }
        };
        self.blocks[block].used = offset + size;
        ArenaSlice {
            block: block as u32,
            offset: offset as u32,
            len: size as u32,
        }
    }

    pub fn alloc_bytes(&mut self, bytes: &[u8]) -> ArenaSlice {
        let slice = self.allocate(1, bytes.len());
        if let Some(dst) = self.bytes_mut(slice) {
            dst.copy_from_slice(bytes);
        }
        slice
    }

    pub fn alloc_str(&mut self, s: &str) -> ArenaStr {
        ArenaStr(self.alloc_bytes(s.as_bytes()))
    }

    pub fn bytes(&self, slice: ArenaSlice) -> Option<&[u8]> {
        let block = self.blocks.get(slice.block as usize)?;
        let start = slice.offset as usize;
        block.data.get(start..start + slice.len as usize)
    }

    pub fn bytes_mut(&mut self, slice: ArenaSlice) -> Option<&mut [u8]> {
        let block = self.blocks.get_mut(slice.block as usize)?;
        let start = slice.offset as usize;
        block.data.get_mut(start..start + slice.len as usize)
    }

    pub fn str(&self, s: ArenaStr) -> Option<&str> {
        self.bytes(s.0).and_then(|b| std::str::from_utf8(b).ok())
    }

    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Bytes handed out so far, alignment padding included.
    pub fn used_bytes(&self) -> usize {
        self.blocks.iter().map(|b| b.used).sum()
    }

    pub fn capacity(&self) -> usize {
        self.blocks.iter().map(|b| b.data.len()).sum()
    }

    pub fn reset(&mut self) {
        self.blocks.clear();
    }
}
