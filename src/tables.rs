//! Static lookup tables and layout constants for DX7 bulk voice data

/// Size of one packed voice record inside a 32-voice bulk dump
pub const RECORD_SIZE: usize = 128;

/// Number of voices in a bulk dump
pub const BANK_VOICES: usize = 32;

/// Header of a 32-voice bulk dump: SYSEX start, Yamaha, channel 1, format 9, byte count 4096
pub const HEADER_BANK: [u8; 6] = [0xF0, 0x43, 0x00, 0x09, 0x20, 0x00];

/// Full 32-voice bulk dump (6 header + 32 * 128 packed + checksum + SYSEX end)
pub const BULK_FULL_SYSEX_SIZE: usize = 4104;

/// Operators per voice
pub const NUM_OPERATORS: usize = 6;

/// Packed bytes per operator
pub const OPERATOR_SIZE: usize = 17;

/// Envelope stages for both operator and pitch envelopes
pub const EG_STAGES: usize = 4;

/// Break point key names, index 0 = A-1 through index 99 = C8.
pub static NOTE_NAMES: [&str; 100] = [
    "A-1", "A#-1", "B-1", //
    "C0", "C#0", "D0", "D#0", "E0", "F0", "F#0", "G0", "G#0", "A0", "A#0", "B0", //
    "C1", "C#1", "D1", "D#1", "E1", "F1", "F#1", "G1", "G#1", "A1", "A#1", "B1", //
    "C2", "C#2", "D2", "D#2", "E2", "F2", "F#2", "G2", "G#2", "A2", "A#2", "B2", //
    "C3", "C#3", "D3", "D#3", "E3", "F3", "F#3", "G3", "G#3", "A3", "A#3", "B3", //
    "C4", "C#4", "D4", "D#4", "E4", "F4", "F#4", "G4", "G#4", "A4", "A#4", "B4", //
    "C5", "C#5", "D5", "D#5", "E5", "F5", "F#5", "G5", "G#5", "A5", "A#5", "B5", //
    "C6", "C#6", "D6", "D#6", "E6", "F6", "F#6", "G6", "G#6", "A6", "A#6", "B6", //
    "C7", "C#7", "D7", "D#7", "E7", "F7", "F#7", "G7", "G#7", "A7", "A#7", "B7", //
    "C8",
];

/// Keyboard level scaling curve labels, indexed by the 2-bit curve field
pub static CURVE_LABELS: [&str; 4] = ["-LIN", "-EXP", "+EXP", "+LIN"];

/// LFO waveform labels, indexed by the 3-bit wave field (values 6 and 7 unused)
pub static LFO_WAVE_LABELS: [&str; 6] = [
    "TRIANGLE", "SAW UP", "SAW DOWN", "SQUARE", "SINE", "S+HOLD",
];

/// Fixed-mode frequency multipliers in Hz, indexed by the low 2 bits of coarse
pub static FIXED_FREQ_HZ: [f64; 4] = [1.0, 10.0, 100.0, 1000.0];
