// Associated values produced by gperf 3.1
// (`gperf -C -t -N lookup_bip39_word -K name`, key positions 1-4).
// `cargo run -p xtask -- hash-params` regenerates a different, equally valid
// table in this layout.

/// Length of the shortest word in the table.
pub const MIN_WORD_LENGTH: usize = 3;
/// Length of the longest word in the table.
pub const MAX_WORD_LENGTH: usize = 8;
/// Largest hash value produced by a word in the table.
pub const MAX_HASH_VALUE: usize = 16426;
/// Offset into [`ASSO_VALUES`] for each of the hashed byte positions.
pub const POSITION_OFFSETS: [usize; 4] = [23, 2, 32, 8];
/// Associated value for each offset byte.
pub const ASSO_VALUES: [u16; 288] = [
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    35,
    590,
    1435,
    315,
    70,
    35,
    2240,
    2875,
    5,
    5341,
    255,
    3510,
    6191,
    3277,
    0,
    2949,
    5876,
    1020,
    4026,
    1330,
    430,
    1165,
    1315,
    40,
    25,
    15,
    365,
    3538,
    3680,
    2120,
    1055,
    4436,
    460,
    80,
    2805,
    5021,
    130,
    750,
    610,
    805,
    3410,
    1810,
    2620,
    0,
    3549,
    4921,
    25,
    175,
    260,
    535,
    1981,
    1349,
    85,
    20,
    1410,
    75,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
    16427,
];
