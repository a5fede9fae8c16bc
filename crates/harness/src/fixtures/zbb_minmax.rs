//! Zbb integer minimum/maximum fixtures (max, maxu, min, minu).
//!
//! 16 auto-generated vectors per instruction, transcribed from the
//! offline generator output. Read-only ground truth: `expected` is the
//! bit-exact result of the instruction semantics for the given operands.

use super::TestVector;
use crate::isa::Mnemonic;

/// `max`: signed maximum.
pub static MAX: [TestVector; 16] = [
    TestVector::reg(Mnemonic::Max, 0x9c1e5660, 0x424f7815, 0x424f7815),
    TestVector::reg(Mnemonic::Max, 0xbdd3392e, 0x51f5a0a5, 0x51f5a0a5),
    TestVector::reg(Mnemonic::Max, 0x7ebff687, 0xaa9be9e, 0x7ebff687),
    TestVector::reg(Mnemonic::Max, 0x36f688ab, 0x49c2ac87, 0x49c2ac87),
    TestVector::reg(Mnemonic::Max, 0x6b4df7d9, 0xc299f04c, 0x6b4df7d9),
    TestVector::reg(Mnemonic::Max, 0x6246a67c, 0x97515a3, 0x6246a67c),
    TestVector::reg(Mnemonic::Max, 0xfd9510f, 0x74b18af7, 0x74b18af7),
    TestVector::reg(Mnemonic::Max, 0xfb255b6d, 0x9c381831, 0xfb255b6d),
    TestVector::reg(Mnemonic::Max, 0x9b321b18, 0xaf67e904, 0xaf67e904),
    TestVector::reg(Mnemonic::Max, 0x1459fa1e, 0x48b82d3e, 0x48b82d3e),
    TestVector::reg(Mnemonic::Max, 0x245b3b70, 0xc04b087a, 0x245b3b70),
    TestVector::reg(Mnemonic::Max, 0x2b9a7217, 0xc5802342, 0x2b9a7217),
    TestVector::reg(Mnemonic::Max, 0xd887cb59, 0x14fd8856, 0x14fd8856),
    TestVector::reg(Mnemonic::Max, 0x1eb26110, 0x11c81f02, 0x1eb26110),
    TestVector::reg(Mnemonic::Max, 0xe9c49d91, 0xdb7d36f1, 0xe9c49d91),
    TestVector::reg(Mnemonic::Max, 0x71b849df, 0xe41b6913, 0x71b849df),
];

/// `maxu`: unsigned maximum.
pub static MAXU: [TestVector; 16] = [
    TestVector::reg(Mnemonic::Maxu, 0x329b4c80, 0x3749608c, 0x3749608c),
    TestVector::reg(Mnemonic::Maxu, 0x8d4ac0db, 0x89d7858c, 0x8d4ac0db),
    TestVector::reg(Mnemonic::Maxu, 0xfb6212b0, 0xb07d7e42, 0xfb6212b0),
    TestVector::reg(Mnemonic::Maxu, 0x1b11f45d, 0x774e92bf, 0x774e92bf),
    TestVector::reg(Mnemonic::Maxu, 0x637b5a1, 0x152918a6, 0x152918a6),
    TestVector::reg(Mnemonic::Maxu, 0x21f53298, 0x900b7336, 0x900b7336),
    TestVector::reg(Mnemonic::Maxu, 0xb64302cd, 0x3140db0d, 0xb64302cd),
    TestVector::reg(Mnemonic::Maxu, 0x4da91c90, 0x1a2963af, 0x4da91c90),
    TestVector::reg(Mnemonic::Maxu, 0x2a3d88ae, 0x51a6b97a, 0x51a6b97a),
    TestVector::reg(Mnemonic::Maxu, 0x5224d0ae, 0x8e1d0801, 0x8e1d0801),
    TestVector::reg(Mnemonic::Maxu, 0x4986a1ac, 0xa226860a, 0xa226860a),
    TestVector::reg(Mnemonic::Maxu, 0xa9d4ece2, 0x5072ac34, 0xa9d4ece2),
    TestVector::reg(Mnemonic::Maxu, 0xe03d06e7, 0xe1f69279, 0xe1f69279),
    TestVector::reg(Mnemonic::Maxu, 0xbb9517a1, 0xd830bce1, 0xd830bce1),
    TestVector::reg(Mnemonic::Maxu, 0xb3c6e936, 0x36eefb53, 0xb3c6e936),
    TestVector::reg(Mnemonic::Maxu, 0x6cad7f6b, 0x3cb2e107, 0x6cad7f6b),
];

/// `min`: signed minimum.
pub static MIN: [TestVector; 16] = [
    TestVector::reg(Mnemonic::Min, 0x545c474a, 0x17b2ea9d, 0x17b2ea9d),
    TestVector::reg(Mnemonic::Min, 0x5a975163, 0xb6eb04ee, 0xb6eb04ee),
    TestVector::reg(Mnemonic::Min, 0xdc7d090b, 0xd71519fb, 0xd71519fb),
    TestVector::reg(Mnemonic::Min, 0x4f875e13, 0x2526eb82, 0x2526eb82),
    TestVector::reg(Mnemonic::Min, 0x531bd419, 0x824f755f, 0x824f755f),
    TestVector::reg(Mnemonic::Min, 0x918e19da, 0xb3fcbd55, 0x918e19da),
    TestVector::reg(Mnemonic::Min, 0xe605d753, 0xa900732a, 0xa900732a),
    TestVector::reg(Mnemonic::Min, 0x99234b71, 0x3a148d01, 0x99234b71),
    TestVector::reg(Mnemonic::Min, 0xc14d72c4, 0x91b1deb8, 0x91b1deb8),
    TestVector::reg(Mnemonic::Min, 0xdbd317b5, 0x4158804d, 0xdbd317b5),
    TestVector::reg(Mnemonic::Min, 0xd94b561e, 0xa931c6c4, 0xa931c6c4),
    TestVector::reg(Mnemonic::Min, 0x4884daf2, 0x28cdd180, 0x28cdd180),
    TestVector::reg(Mnemonic::Min, 0xf3a3276e, 0x8216473, 0xf3a3276e),
    TestVector::reg(Mnemonic::Min, 0xcebe57f9, 0x615fa177, 0xcebe57f9),
    TestVector::reg(Mnemonic::Min, 0x8cddf7ff, 0x343bdb62, 0x8cddf7ff),
    TestVector::reg(Mnemonic::Min, 0xf8a9d054, 0x1e56d0d, 0xf8a9d054),
];

/// `minu`: unsigned minimum.
pub static MINU: [TestVector; 16] = [
    TestVector::reg(Mnemonic::Minu, 0x3858a69b, 0x66c61083, 0x3858a69b),
    TestVector::reg(Mnemonic::Minu, 0xfc504165, 0x63ce8ff2, 0x63ce8ff2),
    TestVector::reg(Mnemonic::Minu, 0xf7bfdfca, 0x34cd7365, 0x34cd7365),
    TestVector::reg(Mnemonic::Minu, 0xe536b890, 0x67db06c8, 0x67db06c8),
    TestVector::reg(Mnemonic::Minu, 0x330e949f, 0x223949b6, 0x223949b6),
    TestVector::reg(Mnemonic::Minu, 0x65ae97de, 0x4561b016, 0x4561b016),
    TestVector::reg(Mnemonic::Minu, 0xddc622a6, 0x8d44d5f4, 0x8d44d5f4),
    TestVector::reg(Mnemonic::Minu, 0x82318074, 0x9dc3b29f, 0x82318074),
    TestVector::reg(Mnemonic::Minu, 0xd12a5fb1, 0xef7ef0ea, 0xd12a5fb1),
    TestVector::reg(Mnemonic::Minu, 0x4c0c88e2, 0xc2666520, 0x4c0c88e2),
    TestVector::reg(Mnemonic::Minu, 0xf884a71d, 0x86a590d5, 0x86a590d5),
    TestVector::reg(Mnemonic::Minu, 0x1819247e, 0xc664692e, 0x1819247e),
    TestVector::reg(Mnemonic::Minu, 0x30463047, 0x71cfdf72, 0x30463047),
    TestVector::reg(Mnemonic::Minu, 0xd4780b11, 0x6702def, 0x6702def),
    TestVector::reg(Mnemonic::Minu, 0xc302521, 0xb451df99, 0xc302521),
    TestVector::reg(Mnemonic::Minu, 0x50dc351c, 0x84107f43, 0x50dc351c),
];
