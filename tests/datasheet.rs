use approx::assert_relative_eq;

use dx7sheet::voice::{BreakPoint, Curve, LfoWave, OscillatorMode};
use dx7sheet::{
    decode, read_bank, render, report_path, BankError, DecodeOptions, PitchModSensitivitySource,
    VoiceBank,
};

mod common;
use common::{bank_with, brass_record};

#[test]
fn decodes_brass_voice() {
    let voice = decode(&brass_record());

    assert_eq!(voice.name, "BRASS  1");
    assert_eq!(voice.algorithm, 22);
    assert_eq!(voice.feedback, 0);
    assert!(voice.oscillator_sync);
    assert_eq!(voice.lfo.wave, LfoWave::Sine);
    assert_eq!(voice.lfo.speed, 37);
    assert_eq!(voice.lfo.pitch_mod_depth, 5);
    assert_eq!(voice.lfo.pitch_mod_sensitivity, 3);
    assert!(!voice.lfo.sync);
    assert_eq!(voice.pitch_envelope.rate, [84, 95, 95, 60]);

    let op1 = &voice.operators[0];
    assert_eq!(op1.envelope.rate, [72, 76, 99, 71]);
    assert_eq!(op1.tune, 7);
    assert_eq!(op1.keyboard_scaling.right_curve, Curve::PositiveLinear);
    assert_eq!(op1.mode, OscillatorMode::Ratio);
    assert_relative_eq!(op1.coarse, 0.5);

    let op2 = &voice.operators[1];
    assert_eq!(op2.keyboard_scaling.break_point, BreakPoint::Key(27));
    assert_eq!(op2.keyboard_scaling.break_point.name(), "C2");

    let op6 = &voice.operators[5];
    assert_eq!(op6.envelope.rate, [49, 99, 28, 68]);
    assert_eq!(op6.keyboard_scaling.left_curve, Curve::NegativeExponential);
    assert_eq!(op6.key_velocity_sensitivity, 2);
    assert_eq!(op6.level, 82);
    assert_relative_eq!(op6.coarse, 1.0);
}

#[test]
fn legacy_pitch_mod_sensitivity_reads_transpose_byte() {
    let options = DecodeOptions {
        pitch_mod_sensitivity: PitchModSensitivitySource::LowBitsOf117,
    };
    let voice = dx7sheet::Voice::decode_with(&brass_record(), &options);
    // transpose 24 has zero low bits
    assert_eq!(voice.lfo.pitch_mod_sensitivity, 0);
}

#[test]
fn renders_brass_sheet() {
    let voice = decode(&brass_record());
    let sheet = render(&voice, "rom1a.syx", 1);
    let lines: Vec<&str> = sheet.split('\n').collect();

    assert_eq!(lines[3], "Bank: rom1a.syx                 Voice #01: BRASS  1");
    assert_eq!(
        lines[5],
        "ALGORITHM: 22   FEEDBACK: 0   OSC SYNC: ON   TRANSPOSE: C3"
    );
    assert_eq!(lines[9], "EG RATE 1   72      62      77      77      77      49");
    assert_eq!(lines[20], "BREAK POINT C3      C2      C3      C3      C3      C3");
    assert_eq!(lines[23], "LEFT CURVE  -LIN    -LIN    -LIN    -LIN    -LIN    -EXP");
    assert_eq!(lines[28], "OSC MODE    RATIO   RATIO   RATIO   RATIO   RATIO   RATIO");
    assert_eq!(lines[29], "TUNE        +7      +0      +0      -1      +1      +0");
    assert_eq!(lines[30], "COARSE      0.50    0.50    1.00    1.00    1.00    1.00");
    assert_eq!(lines[31], "FINE        0.50    0.50    1.00    1.00    1.00    1.00");
    assert_eq!(lines[33], "RATE SCALING2       1       2       2       2       0");
    assert_eq!(lines[36], "OUT LEVEL   98      86      99      99      98      82");
    assert_eq!(lines[41], "LFO WAVE: SINE       SPEED: 37  DELAY: 0   SYNC: OFF");
}

#[test]
fn same_record_renders_identically() {
    let record = brass_record();
    let first = decode(&record);
    let second = decode(&record);
    assert_eq!(first, second);
    assert_eq!(render(&first, "b", 1), render(&second, "b", 1));
}

#[test]
fn bank_slices_into_named_voices() {
    let bank = VoiceBank::new(&bank_with(&brass_record())).unwrap();
    let names = bank.voice_names();
    assert_eq!(names.len(), 32);
    assert_eq!(names[0], "BRASS  1");
    assert_eq!(names[1], "VOICE 02");
    assert_eq!(names[31], "VOICE 32");

    let voice = bank.decode(1, &DecodeOptions::default()).unwrap();
    assert_eq!(voice, decode(&brass_record()));
    assert!(matches!(
        bank.decode(33, &DecodeOptions::default()),
        Err(BankError::SlotOutOfRange(33))
    ));
}

#[test]
fn reads_bank_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("brass.syx");
    std::fs::write(&path, bank_with(&brass_record())).unwrap();

    let bank = read_bank(&path).unwrap();
    assert_eq!(bank.voice_names()[0], "BRASS  1");

    let voice = bank.decode(1, &DecodeOptions::default()).unwrap();
    let out = report_path(dir.path(), &voice.name, 1);
    assert_eq!(out.file_name().unwrap(), "BRASS  1.txt");
}

#[test]
fn rejects_truncated_bank_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("short.syx");
    let mut data = bank_with(&brass_record());
    data.pop();
    std::fs::write(&path, data).unwrap();

    assert!(matches!(
        read_bank(&path),
        Err(BankError::InvalidSize {
            expected: 4104,
            actual: 4103
        })
    ));
}

#[test]
fn missing_bank_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_bank(dir.path().join("missing.syx")).unwrap_err();
    assert!(matches!(err, BankError::Io { .. }));
    assert!(err.to_string().contains("missing.syx"));
}

#[test]
fn voice_serializes_to_json() {
    let voice = decode(&brass_record());
    let json = serde_json::to_value(&voice).unwrap();
    assert_eq!(json["name"], "BRASS  1");
    assert_eq!(json["algorithm"], 22);
    assert_eq!(json["operators"][1]["keyboard_scaling"]["break_point"], "C2");
    assert_eq!(json["lfo"]["wave"], "Sine");
    assert_eq!(json["operators"].as_array().unwrap().len(), 6);
}
