//! Fixed-width voice data sheet rendering

use std::path::{Path, PathBuf};

use crate::voice::{OscillatorMode, Operator, Voice};

const SHEET_WIDTH: usize = 60;
const PARAM_WIDTH: usize = 12;
const OP_WIDTH: usize = 8;

/// Transpose is not decoded; sheets always show the DX7 default.
const TRANSPOSE: &str = "C3";

/// Characters that are not allowed in report file names
const FORBIDDEN_FILENAME_CHARS: [char; 9] = ['\\', '/', '*', '?', ':', '"', '<', '>', '|'];

fn on_off(flag: bool) -> &'static str {
    if flag {
        "ON"
    } else {
        "OFF"
    }
}

fn op_row<I, T>(name: &str, values: I) -> String
where
    I: IntoIterator<Item = T>,
    T: ToString,
{
    let mut row = format!("{:<w$.w$}", name, w = PARAM_WIDTH);
    for value in values {
        row.push_str(&format!("{:<w$}", value.to_string(), w = OP_WIDTH));
    }
    row.trim_end().to_string()
}

/// Display-only fine frequency.
///
/// Ratio mode adds `fine_raw` percent to the coarse ratio (2 decimals).
/// Fixed mode scales the base frequency by 1.023293^fine_raw (3 decimals).
pub fn fine_display(op: &Operator) -> String {
    let fine_raw = f64::from(op.fine_raw);
    match op.mode {
        OscillatorMode::Ratio => format!("{:.2}", op.coarse + op.coarse * fine_raw / 100.0),
        OscillatorMode::Fixed => format!("{:.3}", 1.023293f64.powf(fine_raw) * op.coarse),
    }
}

/// Renders a decoded voice as a data sheet.
///
/// `bank_label` is usually the bank's file name and `slot` the 1-based
/// voice number within the bank.
pub fn render(voice: &Voice, bank_label: &str, slot: usize) -> String {
    let ops = &voice.operators;
    let major = "=".repeat(SHEET_WIDTH);
    let minor = "-".repeat(SHEET_WIDTH);
    let center = |title: &str| format!("{:^w$}", title, w = SHEET_WIDTH);

    let mut sheet = Vec::new();

    sheet.push(major.clone());
    sheet.push(center("DX7 VOICE DATA SHEET"));
    sheet.push(major.clone());
    sheet.push(format!(
        "Bank: {:<25} Voice #{:02}: {}",
        bank_label, slot, voice.name
    ));
    sheet.push(major.clone());
    sheet.push(format!(
        "ALGORITHM: {}   FEEDBACK: {}   OSC SYNC: {}   TRANSPOSE: {}",
        voice.algorithm,
        voice.feedback,
        on_off(voice.oscillator_sync),
        TRANSPOSE
    ));
    sheet.push(minor.clone());

    sheet.push(op_row("PARAM", (1..=ops.len()).map(|i| format!("OP{}", i))));
    sheet.push(minor.clone());

    for stage in 0..4 {
        sheet.push(op_row(
            &format!("EG RATE {}", stage + 1),
            ops.iter().map(|op| op.envelope.rate[stage]),
        ));
    }
    for stage in 0..4 {
        sheet.push(op_row(
            &format!("EG LEVEL {}", stage + 1),
            ops.iter().map(|op| op.envelope.level[stage]),
        ));
    }

    sheet.push(minor.clone());
    sheet.push(center("KEYBOARD LVL SCALING"));
    sheet.push(minor.clone());

    let scaling = ops.iter().map(|op| &op.keyboard_scaling);
    sheet.push(op_row("BREAK POINT", scaling.clone().map(|ks| ks.break_point)));
    sheet.push(op_row("LEFT DEPTH", scaling.clone().map(|ks| ks.left_depth)));
    sheet.push(op_row("RIGHT DEPTH", scaling.clone().map(|ks| ks.right_depth)));
    sheet.push(op_row("LEFT CURVE", scaling.clone().map(|ks| ks.left_curve)));
    sheet.push(op_row("RIGHT CURVE", scaling.map(|ks| ks.right_curve)));

    sheet.push(minor.clone());
    sheet.push(center("OSCILLATOR"));
    sheet.push(minor.clone());

    sheet.push(op_row("OSC MODE", ops.iter().map(|op| op.mode)));
    sheet.push(op_row("TUNE", ops.iter().map(|op| format!("{:+}", op.tune))));
    sheet.push(op_row("COARSE", ops.iter().map(|op| format!("{:.2}", op.coarse))));
    sheet.push(op_row("FINE", ops.iter().map(fine_display)));

    sheet.push(minor.clone());

    sheet.push(op_row("RATE SCALING", ops.iter().map(|op| op.rate_scaling)));
    sheet.push(op_row("VEL SENS", ops.iter().map(|op| op.key_velocity_sensitivity)));
    sheet.push(op_row("AMP MOD SENS", ops.iter().map(|op| op.amp_mod_sensitivity)));
    sheet.push(op_row("OUT LEVEL", ops.iter().map(|op| op.level)));

    let lfo = &voice.lfo;
    sheet.push(String::new());
    sheet.push(major.clone());
    sheet.push(center("LFO & PITCH EG"));
    sheet.push(major.clone());
    sheet.push(format!(
        "LFO WAVE: {:<10} SPEED: {:<3} DELAY: {:<3} SYNC: {}",
        lfo.wave.label(),
        lfo.speed,
        lfo.delay,
        on_off(lfo.sync)
    ));
    sheet.push(format!(
        "PMD: {:<3} AMD: {:<3} P MOD SENS: {:<3}",
        lfo.pitch_mod_depth, lfo.amp_mod_depth, lfo.pitch_mod_sensitivity
    ));
    sheet.push(minor);

    let r = &voice.pitch_envelope.rate;
    let l = &voice.pitch_envelope.level;
    sheet.push(format!(
        "PITCH EG RATE : R1={:<3} R2={:<3} R3={:<3} R4={:<3}",
        r[0], r[1], r[2], r[3]
    ));
    sheet.push(format!(
        "PITCH EG LEVEL: L1={:<3} L2={:<3} L3={:<3} L4={:<3}",
        l[0], l[1], l[2], l[3]
    ));
    sheet.push(major);

    sheet.join("\n")
}

/// Strips characters that are invalid in file names on common platforms.
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .filter(|c| !FORBIDDEN_FILENAME_CHARS.contains(c))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Path of the `.txt` report for a voice inside `dir`.
///
/// Voices whose name sanitizes to nothing are named after their slot.
pub fn report_path(dir: &Path, voice_name: &str, slot: usize) -> PathBuf {
    let stem = sanitize_filename(voice_name);
    if stem.is_empty() {
        dir.join(format!("voice_{:02}.txt", slot))
    } else {
        dir.join(format!("{}.txt", stem))
    }
}
