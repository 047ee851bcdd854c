use dx7sheet::tables::{BULK_FULL_SYSEX_SIZE, HEADER_BANK, OPERATOR_SIZE, RECORD_SIZE};

/// Builds a packed voice record resembling ROM1A "BRASS   1".
///
/// Operator slices are laid out in storage order, so `ops[0]` here ends up
/// as OP6 after decoding.
pub fn brass_record() -> [u8; RECORD_SIZE] {
    let mut data = [0u8; RECORD_SIZE];

    // (rates, levels, bp, ld, rd, curves, rs|detune, kvs|ams, level, mode|coarse, fine)
    let ops: [([u8; 4], [u8; 4], u8, u8, u8, u8, u8, u8, u8, u8, u8); 6] = [
        ([49, 99, 28, 68], [98, 98, 91, 0], 39, 54, 50, 0b0001, 7 << 3, 2 << 2, 82, 1 << 1, 0),
        ([77, 36, 41, 71], [99, 98, 98, 0], 39, 0, 0, 0b1100, (8 << 3) | 2, 0, 98, 1 << 1, 0),
        ([77, 36, 41, 71], [99, 98, 98, 0], 39, 0, 0, 0b1100, (6 << 3) | 2, 0, 99, 1 << 1, 0),
        ([77, 76, 82, 71], [99, 98, 98, 0], 39, 0, 0, 0b1100, (7 << 3) | 2, 0, 99, 1 << 1, 0),
        ([62, 51, 29, 71], [82, 95, 96, 0], 27, 0, 7, 0b1100, (7 << 3) | 1, 0, 86, 0, 0),
        ([72, 76, 99, 71], [99, 88, 96, 0], 39, 0, 14, 0b1100, (14 << 3) | 2, 0, 98, 0, 0),
    ];

    for (i, op) in ops.iter().enumerate() {
        let base = i * OPERATOR_SIZE;
        data[base..base + 4].copy_from_slice(&op.0);
        data[base + 4..base + 8].copy_from_slice(&op.1);
        data[base + 8] = op.2;
        data[base + 9] = op.3;
        data[base + 10] = op.4;
        data[base + 11] = op.5;
        data[base + 12] = op.6;
        data[base + 13] = op.7;
        data[base + 14] = op.8;
        data[base + 15] = op.9;
        data[base + 16] = op.10;
    }

    data[102..110].copy_from_slice(&[84, 95, 95, 60, 50, 50, 50, 50]);
    data[110] = 21; // algorithm 22, feedback 0
    data[111] = 0b1000 | 7;
    data[112] = 37;
    data[113] = 0;
    data[114] = 5;
    data[115] = 0;
    data[116] = (3 << 4) | (4 << 1);
    data[117] = 24;
    data[118..128].copy_from_slice(b"BRASS  1  ");
    data
}

/// Builds a full bulk dump with `record` in slot 1 and numbered blank voices elsewhere.
pub fn bank_with(record: &[u8; RECORD_SIZE]) -> Vec<u8> {
    let mut data = vec![0u8; BULK_FULL_SYSEX_SIZE];
    data[..HEADER_BANK.len()].copy_from_slice(&HEADER_BANK);

    for slot in 0..32 {
        let start = HEADER_BANK.len() + slot * RECORD_SIZE;
        if slot == 0 {
            data[start..start + RECORD_SIZE].copy_from_slice(record);
        } else {
            let name = format!("VOICE {:02}  ", slot + 1);
            data[start + 118..start + 128].copy_from_slice(name.as_bytes());
        }
    }

    data[BULK_FULL_SYSEX_SIZE - 1] = 0xF7;
    data
}
