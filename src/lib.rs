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

//! DX7 voice data sheets.
//!
//! Decodes voices from a Yamaha DX7 32-voice bulk dump and renders each as
//! a fixed-width, printable parameter sheet.
//!
//! ```no_run
//! use dx7sheet::{read_bank, render, DecodeOptions};
//!
//! let bank = read_bank("rom1a.syx")?;
//! let voice = bank.decode(1, &DecodeOptions::default())?;
//! println!("{}", render(&voice, "rom1a.syx", 1));
//! # Ok::<(), dx7sheet::BankError>(())
//! ```

pub mod bank;
pub mod sheet;
pub mod tables;
pub mod voice;

pub use bank::{read_bank, BankError, VoiceBank};
pub use sheet::{render, report_path, sanitize_filename};
pub use voice::{decode, DecodeOptions, PitchModSensitivitySource, Voice};
