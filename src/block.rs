//! Minimal host-side interface for a streaming block.

use crate::error::Result;

/// Number and item size of the streams on one side of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IoSignature {
    pub min_streams: usize,
    pub max_streams: usize,
    pub item_size: usize,
}

impl IoSignature {
    pub const fn new(min_streams: usize, max_streams: usize, item_size: usize) -> Self {
        IoSignature {
            min_streams,
            max_streams,
            item_size,
        }
    }

    pub const fn empty() -> Self {
        IoSignature::new(0, 0, 0)
    }
}

/// Lifecycle callbacks a host scheduler drives. The host never calls these
/// concurrently for one block, which `&mut self` makes explicit.
pub trait Block {
    type Item;

    fn block_name(&self) -> &'static str;
    fn input_signature(&self) -> IoSignature;
    fn output_signature(&self) -> IoSignature;

    /// Bring the block up. Called once before the first `work`.
    fn start(&mut self) -> Result<()>;

    /// Fill `output` and return how many items were produced.
    fn work(&mut self, output: &mut [Self::Item]) -> Result<usize>;

    fn stop(&mut self) -> Result<()>;
}
