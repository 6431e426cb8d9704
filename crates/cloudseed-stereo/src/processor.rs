//! Block processing through the two channel engines.

use cloudseed_core::{ResponseCurve, ReverbEngine};

use crate::{StereoError, StereoReverb};

impl<E: ReverbEngine, C: ResponseCurve> StereoReverb<E, C> {
    /// Largest block both engines can render, in samples.
    pub fn max_block_size(&self) -> usize {
        let left = self.left.buffer_size().min(self.left.output().len());
        let right = self.right.buffer_size().min(self.right.output().len());
        left.min(right)
    }

    /// Renders one stereo block.
    ///
    /// `left_in` goes through the left engine and `right_in` through the
    /// right; the channels do not interact at this level. All four buffers
    /// must have the same length, no larger than
    /// [`max_block_size`](Self::max_block_size). Nothing is processed when a
    /// length check fails.
    ///
    /// Does not allocate.
    pub fn process_block(
        &mut self,
        left_in: &[f64],
        right_in: &[f64],
        left_out: &mut [f64],
        right_out: &mut [f64],
    ) -> Result<(), StereoError> {
        let len = left_in.len();
        if right_in.len() != len {
            return Err(StereoError::LengthMismatch {
                left: len,
                right: right_in.len(),
            });
        }
        if left_out.len() != len || right_out.len() != len {
            return Err(StereoError::OutputMismatch {
                expected: len,
                left: left_out.len(),
                right: right_out.len(),
            });
        }
        let capacity = self.max_block_size();
        if len > capacity {
            return Err(StereoError::BlockTooLarge { len, capacity });
        }

        self.left.process(left_in);
        self.right.process(right_in);
        left_out.copy_from_slice(&self.left.output()[..len]);
        right_out.copy_from_slice(&self.right.output()[..len]);
        Ok(())
    }

    /// Renders one stereo block into newly allocated buffers.
    ///
    /// Same checks as [`process_block`](Self::process_block); returns
    /// `(left, right)` of the input length.
    pub fn process(
        &mut self,
        left_in: &[f64],
        right_in: &[f64],
    ) -> Result<(Vec<f64>, Vec<f64>), StereoError> {
        let mut left_out = vec![0.0; left_in.len()];
        let mut right_out = vec![0.0; left_in.len()];
        self.process_block(left_in, right_in, &mut left_out, &mut right_out)?;
        Ok((left_out, right_out))
    }
}
