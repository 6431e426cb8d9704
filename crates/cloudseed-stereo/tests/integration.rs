//! Integration tests for cloudseed-stereo.
//!
//! Drives the public facade with a small feedback-delay engine and checks
//! the end-to-end parameter and processing contracts.

use std::collections::BTreeMap;

use cloudseed_stereo::{
    EngineError, ParamValue, Parameter, ReverbEngine, StereoError, StereoReverb,
};

/// Single feedback delay line: enough of an engine to make the two
/// channels audibly depend on their own parameters.
struct FeedbackDelay {
    line: Vec<f64>,
    pos: usize,
    delay: usize,
    feedback: f64,
    seed: i32,
    output: Vec<f64>,
}

impl FeedbackDelay {
    fn new(buffer_size: usize, _sample_rate: f64) -> Self {
        Self {
            line: vec![0.0; buffer_size.max(1)],
            pos: 0,
            delay: 1,
            feedback: 0.0,
            seed: 0,
            output: vec![0.0; buffer_size],
        }
    }
}

impl ReverbEngine for FeedbackDelay {
    fn set_parameter(&mut self, param: Parameter, value: ParamValue) -> Result<(), EngineError> {
        match (param, value) {
            (Parameter::LineDelay, ParamValue::Int(samples)) => {
                self.delay = (samples.max(1) as usize).min(self.line.len());
            }
            (Parameter::LineFeedback, ParamValue::Float(fb)) => self.feedback = fb,
            (Parameter::CombSeed, ParamValue::Int(seed)) => self.seed = seed,
            (Parameter::LineDelay | Parameter::LineFeedback | Parameter::CombSeed, value) => {
                return Err(EngineError::ValueType { param, value });
            }
            _ => {}
        }
        Ok(())
    }

    fn process(&mut self, input: &[f64]) {
        let len = self.line.len();
        for (out, &x) in self.output.iter_mut().zip(input) {
            let read = (self.pos + len - self.delay) % len;
            let delayed = self.line[read];
            self.line[self.pos] = x + delayed * self.feedback;
            self.pos = (self.pos + 1) % len;
            *out = delayed;
        }
    }

    fn output(&self) -> &[f64] {
        &self.output
    }

    fn clear_buffers(&mut self) {
        self.line.fill(0.0);
    }
}

const SAMPLE_RATE: f64 = 48000.0;

fn reverb() -> StereoReverb<FeedbackDelay> {
    StereoReverb::new(SAMPLE_RATE, FeedbackDelay::new)
}

fn impulse(len: usize) -> Vec<f64> {
    let mut buf = vec![0.0; len];
    buf[0] = 1.0;
    buf
}

#[test]
fn pre_delay_at_full_scale() {
    let mut reverb = reverb();
    reverb.set_parameter(Parameter::PreDelay, 1.0).unwrap();
    assert_eq!(reverb.physical(Parameter::PreDelay).0, ParamValue::Int(24000));
}

#[test]
fn line_delay_shapes_impulse_response() {
    let mut reverb = reverb();
    // 0.001 * 0.5 * 48000 = 24 samples
    reverb.set_parameter(Parameter::LineDelay, 0.001).unwrap();
    reverb.set_parameter(Parameter::LineFeedback, 0.5).unwrap();

    let input = impulse(128);
    let (left, right) = reverb.process(&input, &input).unwrap();

    assert_eq!(left[24], 1.0);
    assert_eq!(left[48], 0.5);
    assert_eq!(left[72], 0.25);
    assert_eq!(left, right);
}

#[test]
fn seeds_differ_between_channels() {
    let mut reverb = reverb();
    reverb.set_parameter(Parameter::CombSeed, 0.42).unwrap();
    assert_eq!(reverb.left().seed, 420_000);
    assert_eq!(reverb.right().seed, 1_420_000);
}

#[test]
fn wrong_value_shape_is_surfaced() {
    struct Strict(Vec<f64>);
    impl ReverbEngine for Strict {
        fn set_parameter(&mut self, param: Parameter, value: ParamValue) -> Result<(), EngineError> {
            match value {
                ParamValue::Float(_) => Ok(()),
                other => Err(EngineError::ValueType { param, value: other }),
            }
        }
        fn process(&mut self, _: &[f64]) {}
        fn output(&self) -> &[f64] {
            &self.0
        }
    }

    let mut reverb = StereoReverb::new(100.0, |n, _| Strict(vec![0.0; n]));
    reverb.set_parameter(Parameter::TapCount, 0.3).unwrap_err();
    assert_eq!(reverb.store().get(Parameter::TapCount), 0.0);
    reverb.set_parameter(Parameter::TapGain, 0.3).unwrap();
    assert_eq!(reverb.store().get(Parameter::TapGain), 0.3);
}

#[test]
fn mismatched_stereo_pair_is_rejected() {
    let mut reverb = reverb();
    let err = reverb.process(&[0.0; 256], &[0.0; 255]).unwrap_err();
    assert!(matches!(err, StereoError::LengthMismatch { left: 256, right: 255 }));
}

#[test]
fn block_longer_than_one_second_is_rejected() {
    let mut reverb = reverb();
    let block = vec![0.0; 48001];
    let err = reverb.process(&block, &block).unwrap_err();
    assert!(matches!(err, StereoError::BlockTooLarge { len: 48001, capacity: 48000 }));
}

#[test]
fn apply_program_merges() {
    let mut reverb = reverb();
    reverb.set_parameter(Parameter::LineFeedback, 0.25).unwrap();
    reverb.set_parameter(Parameter::DryOut, 1.0).unwrap();

    let mut program = BTreeMap::new();
    program.insert("StereoWidth".to_string(), 0.7);
    assert_eq!(reverb.apply(&program).unwrap(), 1);

    assert_eq!(reverb.store().get(Parameter::StereoWidth), 0.7);
    assert_eq!(reverb.store().get(Parameter::LineFeedback), 0.25);
    assert_eq!(reverb.store().get(Parameter::DryOut), 1.0);
}

#[test]
fn sample_rate_change_retunes_engine() {
    let mut reverb = reverb();
    reverb.set_parameter(Parameter::LineDelay, 0.001).unwrap();
    assert_eq!(reverb.left().delay, 24);
    reverb.set_sample_rate(24000.0).unwrap();
    assert_eq!(reverb.left().delay, 12);
    assert_eq!(reverb.right().delay, 12);
}

#[test]
fn clear_buffers_silences_tail() {
    let mut reverb = reverb();
    reverb.set_parameter(Parameter::LineDelay, 0.001).unwrap();
    reverb.set_parameter(Parameter::LineFeedback, 0.9).unwrap();
    let input = impulse(16);
    reverb.process(&input, &input).unwrap();

    reverb.clear_buffers();
    let silence = vec![0.0; 64];
    let (left, right) = reverb.process(&silence, &silence).unwrap();
    assert!(left.iter().chain(&right).all(|&s| s == 0.0));
}
