/// Samples consumed and produced by one `Block::process` call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkReport {
    pub in_read: usize,
    pub out_written: usize,
}

impl WorkReport {
    #[inline]
    pub fn one_to_one(n: usize) -> Self {
        Self { in_read: n, out_written: n }
    }
}

/// Streaming block: transform a slice of input into a slice of output.
/// The modulator is `f32 -> C32`, the demodulator `C32 -> f32`.
pub trait Block {
    type In: Copy;
    type Out: Copy + Default;

    fn process(&mut self, input: &[Self::In], output: &mut [Self::Out]) -> WorkReport;

    /// Samples by which output lags input.
    fn delay(&self) -> usize { 0 }
}

/// Owns a block and a reusable output buffer so callers can push `Vec`s or slices.
pub struct StreamChain<B: Block> {
    block: B,
    out: Vec<B::Out>,
}

impl<B: Block> StreamChain<B> {
    pub fn new(block: B) -> Self {
        Self { block, out: Vec::new() }
    }

    pub fn block(&self) -> &B { &self.block }
    pub fn block_mut(&mut self) -> &mut B { &mut self.block }
    pub fn into_inner(self) -> B { self.block }

    pub fn process(&mut self, input: Vec<B::In>) -> Vec<B::Out> {
        self.process_ref(&input)
    }

    /// Borrowed input; output length matches input length.
    pub fn process_ref(&mut self, input: &[B::In]) -> Vec<B::Out> {
        let n = input.len();
        if self.out.len() < n {
            self.out.resize(n, B::Out::default());
        }
        let _wr = self.block.process(input, &mut self.out[..n]);
        self.out[..n].to_vec()
    }

    /// Fully preallocated path.
    pub fn process_into(&mut self, input: &[B::In], output: &mut [B::Out]) -> WorkReport {
        self.block.process(input, output)
    }
}
