//! DX7 32-voice bulk dump loading

use std::path::{Path, PathBuf};

use log::debug;

use crate::tables::{BANK_VOICES, BULK_FULL_SYSEX_SIZE, HEADER_BANK, RECORD_SIZE};
use crate::voice::{voice_name, DecodeOptions, Voice};

/// Errors raised while loading a voice bank
#[derive(thiserror::Error, Debug)]
pub enum BankError {
    /// Bank is not exactly one 32-voice bulk dump long
    #[error("expected a {expected} byte 32-voice bulk dump, got {actual} bytes")]
    InvalidSize { expected: usize, actual: usize },

    /// First six bytes are not a DX7 32-voice bulk dump header
    #[error("sysex header is not a DX7 32-voice bulk dump: {found:02X?}")]
    InvalidHeader { found: Vec<u8> },

    /// Voice slot outside 1..=32
    #[error("voice slot {0} is out of range (bank has 32 voices, numbered 1-32)")]
    SlotOutOfRange(usize),

    /// Bank file could not be read
    #[error("failed to read sysex file '{}': {}", path.display(), source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A validated bank of 32 packed voice records.
#[derive(Debug, Clone)]
pub struct VoiceBank {
    records: [[u8; RECORD_SIZE]; BANK_VOICES],
}

impl VoiceBank {
    /// Validates a full bulk dump and slices it into its 32 voice records.
    ///
    /// Only the size and header are checked; the trailing checksum and
    /// SYSEX end bytes are ignored.
    pub fn new(data: &[u8]) -> Result<VoiceBank, BankError> {
        if data.len() != BULK_FULL_SYSEX_SIZE {
            return Err(BankError::InvalidSize {
                expected: BULK_FULL_SYSEX_SIZE,
                actual: data.len(),
            });
        }
        if data[..HEADER_BANK.len()] != HEADER_BANK {
            return Err(BankError::InvalidHeader {
                found: data[..HEADER_BANK.len()].to_vec(),
            });
        }

        let mut records = [[0u8; RECORD_SIZE]; BANK_VOICES];
        let voice_data = &data[HEADER_BANK.len()..HEADER_BANK.len() + BANK_VOICES * RECORD_SIZE];
        for (record, chunk) in records.iter_mut().zip(voice_data.chunks_exact(RECORD_SIZE)) {
            record.copy_from_slice(chunk);
        }

        debug!("loaded 32-voice bank, first voice '{}'", voice_name(&records[0]));

        Ok(VoiceBank { records })
    }

    /// Packed record for a 1-based voice slot.
    pub fn record(&self, slot: usize) -> Result<&[u8; RECORD_SIZE], BankError> {
        if slot == 0 || slot > BANK_VOICES {
            return Err(BankError::SlotOutOfRange(slot));
        }
        Ok(&self.records[slot - 1])
    }

    /// All packed records in bank order.
    pub fn records(&self) -> impl Iterator<Item = &[u8; RECORD_SIZE]> {
        self.records.iter()
    }

    /// Trimmed names of all 32 voices.
    pub fn voice_names(&self) -> Vec<String> {
        self.records.iter().map(|r| voice_name(r)).collect()
    }

    /// Decodes the voice in a 1-based slot.
    pub fn decode(&self, slot: usize, options: &DecodeOptions) -> Result<Voice, BankError> {
        let record = self.record(slot)?;
        debug!("decoding voice slot {}", slot);
        Ok(Voice::decode_with(record, options))
    }
}

/// Reads and validates a bulk dump from disk.
pub fn read_bank<P: AsRef<Path>>(path: P) -> Result<VoiceBank, BankError> {
    let path = path.as_ref();
    let data = std::fs::read(path).map_err(|source| BankError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("read {} bytes from '{}'", data.len(), path.display());
    VoiceBank::new(&data)
}
