//! Program demo: build a program, inspect its physical values, round-trip it
//! through JSON and merge a partial program on top.
//!
//! Run with: cargo run -p cloudseed-config --example program_demo

use cloudseed_config::{Program, decode, encode, validate_program};
use cloudseed_core::format_value;
use cloudseed_stereo::{
    EngineError, ParamValue, Parameter, ParameterStore, ReverbEngine, StereoReverb,
};

const SAMPLE_RATE: f64 = 48000.0;

/// Accepts everything, outputs silence.
struct NullEngine(Vec<f64>);

impl ReverbEngine for NullEngine {
    fn set_parameter(&mut self, _: Parameter, _: ParamValue) -> Result<(), EngineError> {
        Ok(())
    }

    fn process(&mut self, input: &[f64]) {
        self.0[..input.len()].fill(0.0);
    }

    fn output(&self) -> &[f64] {
        &self.0
    }
}

fn main() {
    // --- Build a program ---
    println!("=== Large Hall ===\n");

    let hall = Program::new()
        .with_value(Parameter::PreDelay, 0.05)
        .with_value(Parameter::LowPass, 0.8)
        .with_value(Parameter::TapCount, 0.4)
        .with_value(Parameter::DiffusionEnabled, 1.0)
        .with_value(Parameter::DiffusionStages, 0.75)
        .with_value(Parameter::LineCount, 0.6)
        .with_value(Parameter::LineDelay, 0.45)
        .with_value(Parameter::LineFeedback, 0.85)
        .with_value(Parameter::TapSeed, 0.123456)
        .with_value(Parameter::StereoWidth, 0.9)
        .with_value(Parameter::LineOut, 0.8);

    let mut reverb = StereoReverb::new(SAMPLE_RATE, |size, _| NullEngine(vec![0.0; size]));
    let applied = hall.apply_to(&mut reverb).unwrap();
    println!("Applied {applied} parameters\n");

    println!(
        "{:<20} {:<22} {:>8} {:>16} {:>16}",
        "Group", "Parameter", "Value", "Left", "Right"
    );
    println!("{:-<20} {:-<22} {:->8} {:->16} {:->16}", "", "", "", "", "");
    for param in Parameter::iter().filter(|p| hall.get(*p).is_some()) {
        let (left, right) = reverb.physical(param);
        println!(
            "{:<20} {:<22} {:>8.3} {:>16} {:>16}",
            param.group().name(),
            param.name(),
            reverb.store().get(param),
            format_value(param, left, SAMPLE_RATE),
            format_value(param, right, SAMPLE_RATE),
        );
    }

    // --- JSON round trip ---
    println!("\n=== JSON ===\n");

    let bytes = encode(reverb.store()).unwrap();
    println!("{} bytes: {}...", bytes.len(), String::from_utf8_lossy(&bytes[..72]));

    let mut restored = ParameterStore::new();
    restored.restore(&decode(&bytes).unwrap());
    println!("Restored store identical: {}", &restored == reverb.store());

    // --- Partial program ---
    println!("\n=== Merge ===\n");

    let narrow = Program::from_bytes(br#"{"StereoWidth": 0.2, "Shimmer": 1.0}"#).unwrap();
    let report = validate_program(&narrow);
    for issue in report.issues() {
        println!("warning: {issue}");
    }
    narrow.apply_to(&mut reverb).unwrap();
    println!(
        "StereoWidth now {:.1}, LineFeedback still {:.2}",
        reverb.store().get(Parameter::StereoWidth),
        reverb.store().get(Parameter::LineFeedback),
    );
}
