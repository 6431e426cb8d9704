//! Integration tests for cloudseed-config.
//!
//! Exercises the codec, program files and program application against a
//! running stereo reverb.

use std::collections::BTreeMap;

use cloudseed_config::{
    Program, PresetError, decode, encode, find_program, list_programs_in, program_name_from_path,
    validate_program,
};
use cloudseed_stereo::{
    Channel, EngineError, ParamValue, Parameter, ParameterStore, ReverbEngine, SEED_DECORRELATION,
    StereoError, StereoReverb,
};
use tempfile::TempDir;

/// Remembers the last value it received for each parameter.
#[derive(Default)]
struct Recorder {
    received: BTreeMap<Parameter, ParamValue>,
    refuse: Option<Parameter>,
    output: Vec<f64>,
}

impl ReverbEngine for Recorder {
    fn set_parameter(&mut self, param: Parameter, value: ParamValue) -> Result<(), EngineError> {
        if self.refuse == Some(param) {
            return Err(EngineError::Rejected { param, value });
        }
        self.received.insert(param, value);
        Ok(())
    }

    fn process(&mut self, input: &[f64]) {
        self.output[..input.len()].copy_from_slice(input);
    }

    fn output(&self) -> &[f64] {
        &self.output
    }
}

fn reverb() -> StereoReverb<Recorder> {
    StereoReverb::new(48000.0, |size, _| Recorder {
        output: vec![0.0; size],
        ..Recorder::default()
    })
}

fn sample_store() -> ParameterStore {
    let mut store = ParameterStore::new();
    for (i, param) in Parameter::iter().enumerate() {
        store.set(param, (i as f64 + 0.5) / Parameter::COUNT as f64);
    }
    store
}

#[test]
fn store_round_trips_through_json() {
    let store = sample_store();
    let bytes = encode(&store).unwrap();

    let mut restored = ParameterStore::new();
    assert_eq!(restored.restore(&decode(&bytes).unwrap()), Parameter::COUNT);
    assert_eq!(restored, store);
}

#[test]
fn partial_program_merges_into_store() {
    let mut store = sample_store();
    let before = store.clone();

    let program = Program::from_bytes(br#"{"StereoWidth": 0.7}"#).unwrap();
    assert_eq!(program.restore_into(&mut store), 1);

    for param in Parameter::iter() {
        let expected = if param == Parameter::StereoWidth {
            0.7
        } else {
            before.get(param)
        };
        assert_eq!(store.get(param), expected, "{param}");
    }
}

#[test]
fn malformed_program_is_a_decode_error() {
    let docs: [&[u8]; 3] = [b"not json", b"[]", br#"{"LineOut": true}"#];
    for doc in docs {
        assert!(matches!(
            Program::from_bytes(doc),
            Err(PresetError::Decode(_))
        ));
    }
}

#[test]
fn save_and_load_program_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested").join("dir").join("hall.json");

    let program = Program::from_store(&sample_store());
    program.save(&path).unwrap();
    assert!(path.is_file());

    let loaded = Program::load(&path).unwrap();
    assert_eq!(loaded, program);

    assert_eq!(list_programs_in(path.parent().unwrap()), [path.clone()]);
    assert_eq!(program_name_from_path(&path).as_deref(), Some("hall"));
    assert_eq!(find_program(path.to_str().unwrap()), Some(path));
}

#[test]
fn loading_a_missing_file_reports_the_path() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("missing.json");
    let err = Program::load(&path).unwrap_err();
    assert!(matches!(err, PresetError::ReadFile { .. }));
    assert!(err.to_string().contains("missing.json"));
}

#[test]
fn apply_pushes_program_to_both_engines() {
    let mut reverb = reverb();
    let program = Program::new()
        .with_value(Parameter::PreDelay, 1.0)
        .with_value(Parameter::TapSeed, 0.25)
        .with_value(Parameter::DiffusionEnabled, 0.5);

    let mut document = program.values().clone();
    document.insert("NotAParameter".to_string(), 0.3);
    let program = Program::from_values(document);

    assert_eq!(program.apply_to(&mut reverb).unwrap(), 3);
    assert_eq!(reverb.store().get(Parameter::PreDelay), 1.0);

    let left = &reverb.left().received;
    let right = &reverb.right().received;
    assert_eq!(left[&Parameter::PreDelay], ParamValue::Int(24000));
    assert_eq!(right[&Parameter::PreDelay], ParamValue::Int(24000));
    assert_eq!(left[&Parameter::DiffusionEnabled], ParamValue::Bool(true));
    assert_eq!(left[&Parameter::TapSeed], ParamValue::Int(250_000));
    assert_eq!(
        right[&Parameter::TapSeed],
        ParamValue::Int(250_000 + SEED_DECORRELATION)
    );
    assert!(!left.contains_key(&Parameter::LineOut));
}

#[test]
fn apply_surfaces_engine_refusal() {
    let mut reverb = StereoReverb::new(48000.0, |size, _| Recorder {
        output: vec![0.0; size],
        refuse: Some(Parameter::LineCount),
        ..Recorder::default()
    });

    let program = Program::new()
        .with_value(Parameter::LineCount, 0.5)
        .with_value(Parameter::LineGain, 0.5);
    let err = program.apply_to(&mut reverb).unwrap_err();

    assert!(matches!(
        err,
        PresetError::Apply(StereoError::Engine {
            channel: Channel::Left,
            ..
        })
    ));
    assert_eq!(reverb.store().get(Parameter::LineCount), 0.0);
}

#[test]
fn validation_is_informational() {
    let program =
        Program::from_bytes(br#"{"LineOut": 1.25, "Legacy": 0.1, "DryOut": 0.5}"#).unwrap();
    let report = validate_program(&program);
    assert_eq!(report.issues().len(), 2);

    let mut store = ParameterStore::new();
    assert_eq!(program.restore_into(&mut store), 2);
    assert_eq!(store.get(Parameter::LineOut), 1.25);
}
