// Copyright 2025 Tyler Neely (tylerneely@gmail.com).
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.
//
// See http://creativecommons.org/licenses/MIT/ for more information.

//! Decoding of a single packed 128-byte DX7 voice record.
//!
//! The packed bulk format stores operators in hardware order, OP6 first.
//! Decoding reads them in storage order and then reverses the array once,
//! so `Voice::operators[0]` is always OP1.

use std::fmt;

use log::{debug, warn};
use serde::Serialize;

use crate::tables::{
    CURVE_LABELS, EG_STAGES, FIXED_FREQ_HZ, LFO_WAVE_LABELS, NOTE_NAMES, NUM_OPERATORS,
    OPERATOR_SIZE, RECORD_SIZE,
};

const PITCH_EG_RATE: usize = 102;
const PITCH_EG_LEVEL: usize = 106;
const ALGORITHM_FEEDBACK: usize = 110;
const OSC_SYNC: usize = 111;
const LFO_SPEED: usize = 112;
const LFO_DELAY: usize = 113;
const LFO_PITCH_MOD_DEPTH: usize = 114;
const LFO_AMP_MOD_DEPTH: usize = 115;
const LFO_SYNC_WAVE_PMS: usize = 116;
const TRANSPOSE: usize = 117;
const NAME: usize = 118;

/// Where the pitch modulation sensitivity is read from.
///
/// Bulk dumps keep it in bits 4-6 of byte 116, next to the LFO wave and sync
/// flag. Some sheet generators read the low bits of byte 117 (the transpose
/// byte) instead; `LowBitsOf117` reproduces their output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum PitchModSensitivitySource {
    /// `(byte[116] >> 4) & 0b111`
    #[default]
    HighBitsOf116,
    /// `byte[117] & 0b111`
    LowBitsOf117,
}

/// Options controlling `Voice::decode_with`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Location of the pitch modulation sensitivity field
    pub pitch_mod_sensitivity: PitchModSensitivitySource,
}

/// Keyboard level scaling curve shape
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum Curve {
    /// -LIN
    #[default]
    NegativeLinear,
    /// -EXP
    NegativeExponential,
    /// +EXP
    PositiveExponential,
    /// +LIN
    PositiveLinear,
}

impl Curve {
    /// Maps a 2-bit curve field. Higher bits are ignored.
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0 => Curve::NegativeLinear,
            1 => Curve::NegativeExponential,
            2 => Curve::PositiveExponential,
            _ => Curve::PositiveLinear,
        }
    }

    /// Short label as printed on the data sheet
    pub fn label(&self) -> &'static str {
        CURVE_LABELS[*self as usize]
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// LFO waveform
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum LfoWave {
    #[default]
    Triangle,
    SawUp,
    SawDown,
    Square,
    Sine,
    SampleHold,
}

impl LfoWave {
    /// Maps a 3-bit wave field. The unused values 6 and 7 clamp to sample & hold.
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0b111 {
            0 => LfoWave::Triangle,
            1 => LfoWave::SawUp,
            2 => LfoWave::SawDown,
            3 => LfoWave::Square,
            4 => LfoWave::Sine,
            _ => LfoWave::SampleHold,
        }
    }

    pub fn label(&self) -> &'static str {
        LFO_WAVE_LABELS[*self as usize]
    }
}

impl fmt::Display for LfoWave {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Oscillator frequency mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum OscillatorMode {
    /// Frequency tracks the played note
    #[default]
    Ratio,
    /// Frequency is fixed in Hz
    Fixed,
}

impl OscillatorMode {
    pub fn from_bit(byte: u8) -> Self {
        if byte & 1 != 0 {
            OscillatorMode::Fixed
        } else {
            OscillatorMode::Ratio
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OscillatorMode::Ratio => "RATIO",
            OscillatorMode::Fixed => "FIX",
        }
    }
}

impl fmt::Display for OscillatorMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Keyboard level scaling break point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub enum BreakPoint {
    /// Index into the A-1..C8 key table
    Key(u8),
    /// Stored value is outside the key table
    NotAvailable,
}

impl BreakPoint {
    pub fn from_byte(byte: u8) -> Self {
        if (byte as usize) < NOTE_NAMES.len() {
            BreakPoint::Key(byte)
        } else {
            BreakPoint::NotAvailable
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            BreakPoint::Key(idx) => NOTE_NAMES[*idx as usize],
            BreakPoint::NotAvailable => "N/A",
        }
    }
}

impl Default for BreakPoint {
    fn default() -> Self {
        // C3
        BreakPoint::Key(39)
    }
}

impl fmt::Display for BreakPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<BreakPoint> for String {
    fn from(bp: BreakPoint) -> String {
        bp.name().to_string()
    }
}

/// DX7 envelope parameters (4-stage)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Envelope {
    /// Rate for each of the 4 envelope stages
    pub rate: [u8; EG_STAGES],
    /// Level for each of the 4 envelope stages
    pub level: [u8; EG_STAGES],
}

impl Envelope {
    fn from_bytes(rate: &[u8], level: &[u8]) -> Self {
        let mut env = Envelope::default();
        env.rate.copy_from_slice(&rate[..EG_STAGES]);
        env.level.copy_from_slice(&level[..EG_STAGES]);
        env
    }
}

/// Keyboard scaling parameters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct KeyboardScaling {
    pub break_point: BreakPoint,
    /// Depth of scaling on the left side of break point
    pub left_depth: u8,
    /// Depth of scaling on the right side of break point
    pub right_depth: u8,
    pub left_curve: Curve,
    pub right_curve: Curve,
}

/// DX7 operator parameters
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Operator {
    /// Amplitude envelope
    pub envelope: Envelope,
    /// Keyboard scaling settings
    pub keyboard_scaling: KeyboardScaling,
    /// Rate scaling (0-7)
    pub rate_scaling: u8,
    /// Detune (-7..=7)
    pub tune: i8,
    /// Key velocity sensitivity (0-7)
    pub key_velocity_sensitivity: u8,
    /// Amplitude modulation sensitivity (0-3)
    pub amp_mod_sensitivity: u8,
    /// Output level
    pub level: u8,
    pub mode: OscillatorMode,
    /// Frequency ratio in ratio mode, base frequency in Hz in fixed mode
    pub coarse: f64,
    /// Raw fine frequency byte, only meaningful together with `coarse`
    pub fine_raw: u8,
}

impl Operator {
    /// Decodes one 17-byte operator slice.
    fn decode(op_data: &[u8]) -> Self {
        let mode = OscillatorMode::from_bit(op_data[15]);
        Operator {
            envelope: Envelope::from_bytes(&op_data[0..4], &op_data[4..8]),
            keyboard_scaling: KeyboardScaling {
                break_point: BreakPoint::from_byte(op_data[8]),
                left_depth: op_data[9],
                right_depth: op_data[10],
                left_curve: Curve::from_bits(op_data[11]),
                right_curve: Curve::from_bits(op_data[11] >> 2),
            },
            rate_scaling: op_data[12] & 0b111,
            tune: tune(op_data[12]),
            key_velocity_sensitivity: (op_data[13] >> 2) & 0b111,
            amp_mod_sensitivity: op_data[13] & 0b11,
            level: op_data[14],
            mode,
            coarse: coarse(mode, op_data[15] >> 1),
            fine_raw: op_data[16],
        }
    }
}

/// Detune from bits 3-6 of the rate scaling byte, stored with a +7 bias.
/// The stored range is 0-14, so 15 clamps to +7.
pub fn tune(byte: u8) -> i8 {
    let stored = (byte & 0b0111_1000) >> 3;
    stored.min(14) as i8 - 7
}

/// Resolves the coarse frequency selector for the given mode.
///
/// Ratio mode: selector 0 is a 0.5 ratio, anything else is the ratio itself.
/// Fixed mode: the low 2 bits pick 1, 10, 100 or 1000 Hz.
pub fn coarse(mode: OscillatorMode, selector: u8) -> f64 {
    match mode {
        OscillatorMode::Ratio if selector == 0 => 0.5,
        OscillatorMode::Ratio => f64::from(selector),
        OscillatorMode::Fixed => FIXED_FREQ_HZ[(selector & 0b11) as usize],
    }
}

/// Voice name from the last 10 bytes of a record: non-ASCII bytes dropped,
/// surrounding whitespace trimmed.
pub fn voice_name(record: &[u8]) -> String {
    let ascii: String = record[NAME..RECORD_SIZE]
        .iter()
        .filter(|b| b.is_ascii())
        .map(|&b| char::from(b))
        .collect();
    ascii.trim().to_string()
}

/// LFO modulation parameters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Lfo {
    pub speed: u8,
    pub delay: u8,
    pub pitch_mod_depth: u8,
    pub amp_mod_depth: u8,
    /// Restart the LFO on key-on
    pub sync: bool,
    pub wave: LfoWave,
    /// Pitch modulation sensitivity (0-7)
    pub pitch_mod_sensitivity: u8,
}

/// A fully decoded DX7 voice
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Voice {
    pub name: String,
    /// Algorithm number (1-32)
    pub algorithm: u8,
    /// Feedback amount (0-7)
    pub feedback: u8,
    pub oscillator_sync: bool,
    pub lfo: Lfo,
    pub pitch_envelope: Envelope,
    /// Operators in display order, `operators[0]` is OP1
    pub operators: [Operator; NUM_OPERATORS],
}

impl Voice {
    /// Decodes a packed voice record with default options.
    pub fn decode(record: &[u8; RECORD_SIZE]) -> Self {
        Self::decode_with(record, &DecodeOptions::default())
    }

    /// Decodes a packed voice record.
    pub fn decode_with(record: &[u8; RECORD_SIZE], options: &DecodeOptions) -> Self {
        let mut operators = [Operator::default(); NUM_OPERATORS];
        for (op, op_data) in operators
            .iter_mut()
            .zip(record.chunks_exact(OPERATOR_SIZE))
        {
            *op = Operator::decode(op_data);
        }
        // storage order is OP6..OP1
        operators.reverse();

        let lfo_byte = record[LFO_SYNC_WAVE_PMS];
        let pitch_mod_sensitivity = match options.pitch_mod_sensitivity {
            PitchModSensitivitySource::HighBitsOf116 => (lfo_byte >> 4) & 0b111,
            PitchModSensitivitySource::LowBitsOf117 => record[TRANSPOSE] & 0b111,
        };

        let voice = Voice {
            name: voice_name(record),
            algorithm: (record[ALGORITHM_FEEDBACK] & 0b11111) + 1,
            feedback: (record[ALGORITHM_FEEDBACK] >> 5) & 0b111,
            oscillator_sync: record[OSC_SYNC] & 0b1000 != 0,
            lfo: Lfo {
                speed: record[LFO_SPEED],
                delay: record[LFO_DELAY],
                pitch_mod_depth: record[LFO_PITCH_MOD_DEPTH],
                amp_mod_depth: record[LFO_AMP_MOD_DEPTH],
                sync: lfo_byte & 1 != 0,
                wave: LfoWave::from_bits(lfo_byte >> 1),
                pitch_mod_sensitivity,
            },
            pitch_envelope: Envelope::from_bytes(
                &record[PITCH_EG_RATE..PITCH_EG_LEVEL],
                &record[PITCH_EG_LEVEL..ALGORITHM_FEEDBACK],
            ),
            operators,
        };

        if (lfo_byte >> 1) & 0b111 > 5 {
            warn!(
                "voice '{}': LFO wave field {} outside table, using S+HOLD",
                voice.name,
                (lfo_byte >> 1) & 0b111
            );
        }
        for (i, op) in voice.operators.iter().enumerate() {
            if op.keyboard_scaling.break_point == BreakPoint::NotAvailable {
                warn!("voice '{}': OP{} break point outside key table", voice.name, i + 1);
            }
        }
        debug!(
            "decoded voice '{}': algorithm {}, feedback {}",
            voice.name, voice.algorithm, voice.feedback
        );

        voice
    }
}

/// Decodes a packed voice record with default options.
pub fn decode(record: &[u8; RECORD_SIZE]) -> Voice {
    Voice::decode(record)
}
