//! Zbb miscellaneous fixtures (extension, byte ops, counting, rotates, negated logic).
//!
//! 16 auto-generated vectors per instruction, transcribed from the
//! offline generator output. Read-only ground truth: `expected` is the
//! bit-exact result of the instruction semantics for the given operands.

use super::TestVector;
use crate::isa::Mnemonic;

/// `sext.b`: sign-extend low byte.
pub static SEXT_B: [TestVector; 16] = [
    TestVector::unary(Mnemonic::SextB, 0xd84f957c, 0x7c),
    TestVector::unary(Mnemonic::SextB, 0x10efd90b, 0xb),
    TestVector::unary(Mnemonic::SextB, 0x394ed6a2, 0xffffffa2),
    TestVector::unary(Mnemonic::SextB, 0x1e748a94, 0xffffff94),
    TestVector::unary(Mnemonic::SextB, 0xd69ca456, 0x56),
    TestVector::unary(Mnemonic::SextB, 0xba9f2c0b, 0xb),
    TestVector::unary(Mnemonic::SextB, 0xd70d53c1, 0xffffffc1),
    TestVector::unary(Mnemonic::SextB, 0xd76f2e96, 0xffffff96),
    TestVector::unary(Mnemonic::SextB, 0xc8494550, 0x50),
    TestVector::unary(Mnemonic::SextB, 0x3b692f39, 0x39),
    TestVector::unary(Mnemonic::SextB, 0x3bc2affe, 0xfffffffe),
    TestVector::unary(Mnemonic::SextB, 0xd0d7e6ce, 0xffffffce),
    TestVector::unary(Mnemonic::SextB, 0x44d2178d, 0xffffff8d),
    TestVector::unary(Mnemonic::SextB, 0xe1f2ff33, 0x33),
    TestVector::unary(Mnemonic::SextB, 0x7507c6f, 0x6f),
    TestVector::unary(Mnemonic::SextB, 0x50e4564, 0x64),
];

/// `sext.h`: sign-extend low halfword.
pub static SEXT_H: [TestVector; 16] = [
    TestVector::unary(Mnemonic::SextH, 0x7a46e1fe, 0xffffe1fe),
    TestVector::unary(Mnemonic::SextH, 0xaf4661f4, 0x61f4),
    TestVector::unary(Mnemonic::SextH, 0xfa56c292, 0xffffc292),
    TestVector::unary(Mnemonic::SextH, 0x5b7bb5a6, 0xffffb5a6),
    TestVector::unary(Mnemonic::SextH, 0x9bdf5dd5, 0x5dd5),
    TestVector::unary(Mnemonic::SextH, 0x3b18cf3f, 0xffffcf3f),
    TestVector::unary(Mnemonic::SextH, 0x4dd56466, 0x6466),
    TestVector::unary(Mnemonic::SextH, 0xd8902ea5, 0x2ea5),
    TestVector::unary(Mnemonic::SextH, 0xc157e604, 0xffffe604),
    TestVector::unary(Mnemonic::SextH, 0xa5896b23, 0x6b23),
    TestVector::unary(Mnemonic::SextH, 0xb8ad1df3, 0x1df3),
    TestVector::unary(Mnemonic::SextH, 0x3028670e, 0x670e),
    TestVector::unary(Mnemonic::SextH, 0x3f56573, 0x6573),
    TestVector::unary(Mnemonic::SextH, 0x4deebae6, 0xffffbae6),
    TestVector::unary(Mnemonic::SextH, 0xf0bc47ec, 0x47ec),
    TestVector::unary(Mnemonic::SextH, 0xf7d7e641, 0xffffe641),
];

/// `zext.h`: zero-extend low halfword.
pub static ZEXT_H: [TestVector; 16] = [
    TestVector::unary(Mnemonic::ZextH, 0x1c21a485, 0xa485),
    TestVector::unary(Mnemonic::ZextH, 0xe0dd8f20, 0x8f20),
    TestVector::unary(Mnemonic::ZextH, 0x7d27428e, 0x428e),
    TestVector::unary(Mnemonic::ZextH, 0x7f0c430f, 0x430f),
    TestVector::unary(Mnemonic::ZextH, 0xf4fec1, 0xfec1),
    TestVector::unary(Mnemonic::ZextH, 0xd0e4717b, 0x717b),
    TestVector::unary(Mnemonic::ZextH, 0x31d44413, 0x4413),
    TestVector::unary(Mnemonic::ZextH, 0xc241d417, 0xd417),
    TestVector::unary(Mnemonic::ZextH, 0x49f8d61f, 0xd61f),
    TestVector::unary(Mnemonic::ZextH, 0xd8cf3f50, 0x3f50),
    TestVector::unary(Mnemonic::ZextH, 0x73d4272c, 0x272c),
    TestVector::unary(Mnemonic::ZextH, 0x2203442e, 0x442e),
    TestVector::unary(Mnemonic::ZextH, 0x707afd76, 0xfd76),
    TestVector::unary(Mnemonic::ZextH, 0xa7702f86, 0x2f86),
    TestVector::unary(Mnemonic::ZextH, 0x2f0a4208, 0x4208),
    TestVector::unary(Mnemonic::ZextH, 0xf101f170, 0xf170),
];

/// `rev8`: byte-reverse.
pub static REV8: [TestVector; 16] = [
    TestVector::unary(Mnemonic::Rev8, 0xa3650f04, 0x40f65a3),
    TestVector::unary(Mnemonic::Rev8, 0x86b8bd5b, 0x5bbdb886),
    TestVector::unary(Mnemonic::Rev8, 0xe7e2070c, 0xc07e2e7),
    TestVector::unary(Mnemonic::Rev8, 0x16ed24cb, 0xcb24ed16),
    TestVector::unary(Mnemonic::Rev8, 0xa0dbc3eb, 0xebc3dba0),
    TestVector::unary(Mnemonic::Rev8, 0x1e1864c3, 0xc364181e),
    TestVector::unary(Mnemonic::Rev8, 0x44a90443, 0x4304a944),
    TestVector::unary(Mnemonic::Rev8, 0x218f2b0d, 0xd2b8f21),
    TestVector::unary(Mnemonic::Rev8, 0x7093d620, 0x20d69370),
    TestVector::unary(Mnemonic::Rev8, 0x3b2234f7, 0xf734223b),
    TestVector::unary(Mnemonic::Rev8, 0xca1e16b, 0x6be1a10c),
    TestVector::unary(Mnemonic::Rev8, 0x5c940739, 0x3907945c),
    TestVector::unary(Mnemonic::Rev8, 0xcd0b5863, 0x63580bcd),
    TestVector::unary(Mnemonic::Rev8, 0x67c046b4, 0xb446c067),
    TestVector::unary(Mnemonic::Rev8, 0xc5d7e82e, 0x2ee8d7c5),
    TestVector::unary(Mnemonic::Rev8, 0xf6adca33, 0x33caadf6),
];

/// `orc.b`: bitwise OR-combine within each byte.
pub static ORC_B: [TestVector; 16] = [
    TestVector::unary(Mnemonic::OrcB, 0xafab5a3a, 0xffffffff),
    TestVector::unary(Mnemonic::OrcB, 0x866d4a77, 0xffffffff),
    TestVector::unary(Mnemonic::OrcB, 0x76c9b327, 0xffffffff),
    TestVector::unary(Mnemonic::OrcB, 0x8e3d7af, 0xffffffff),
    TestVector::unary(Mnemonic::OrcB, 0x317194b8, 0xffffffff),
    TestVector::unary(Mnemonic::OrcB, 0xc49cd7db, 0xffffffff),
    TestVector::unary(Mnemonic::OrcB, 0xe04c63a5, 0xffffffff),
    TestVector::unary(Mnemonic::OrcB, 0x20473731, 0xffffffff),
    TestVector::unary(Mnemonic::OrcB, 0xba909408, 0xffffffff),
    TestVector::unary(Mnemonic::OrcB, 0xe98948bf, 0xffffffff),
    TestVector::unary(Mnemonic::OrcB, 0x763d2af7, 0xffffffff),
    TestVector::unary(Mnemonic::OrcB, 0x5daaf0c4, 0xffffffff),
    TestVector::unary(Mnemonic::OrcB, 0x2cd63ae1, 0xffffffff),
    TestVector::unary(Mnemonic::OrcB, 0x264afe29, 0xffffffff),
    TestVector::unary(Mnemonic::OrcB, 0x593ebda5, 0xffffffff),
    TestVector::unary(Mnemonic::OrcB, 0xda17dbf2, 0xffffffff),
];

/// `clz`: count leading zeros.
pub static CLZ: [TestVector; 16] = [
    TestVector::unary(Mnemonic::Clz, 0xca773b35, 0x0),
    TestVector::unary(Mnemonic::Clz, 0xbd16f716, 0x0),
    TestVector::unary(Mnemonic::Clz, 0xe0ce5e35, 0x0),
    TestVector::unary(Mnemonic::Clz, 0xd361a178, 0x0),
    TestVector::unary(Mnemonic::Clz, 0x8bda31bb, 0x0),
    TestVector::unary(Mnemonic::Clz, 0x53871532, 0x1),
    TestVector::unary(Mnemonic::Clz, 0xf2b57d8f, 0x0),
    TestVector::unary(Mnemonic::Clz, 0x8858118e, 0x0),
    TestVector::unary(Mnemonic::Clz, 0xc27472a2, 0x0),
    TestVector::unary(Mnemonic::Clz, 0x79cb2b63, 0x1),
    TestVector::unary(Mnemonic::Clz, 0xebda8223, 0x0),
    TestVector::unary(Mnemonic::Clz, 0xc438fc5, 0x4),
    TestVector::unary(Mnemonic::Clz, 0x4b43c8a0, 0x1),
    TestVector::unary(Mnemonic::Clz, 0x4a253fe8, 0x1),
    TestVector::unary(Mnemonic::Clz, 0xee66fdb1, 0x0),
    TestVector::unary(Mnemonic::Clz, 0xa377d933, 0x0),
];

/// `cpop`: population count.
pub static CPOP: [TestVector; 16] = [
    TestVector::unary(Mnemonic::Cpop, 0x101714dd, 0xd),
    TestVector::unary(Mnemonic::Cpop, 0xc9655dd0, 0x10),
    TestVector::unary(Mnemonic::Cpop, 0xa9af5cca, 0x12),
    TestVector::unary(Mnemonic::Cpop, 0xac457de9, 0x12),
    TestVector::unary(Mnemonic::Cpop, 0x2b722aad, 0x10),
    TestVector::unary(Mnemonic::Cpop, 0x1bbafd4, 0x11),
    TestVector::unary(Mnemonic::Cpop, 0xd837da4b, 0x12),
    TestVector::unary(Mnemonic::Cpop, 0x8f165d4b, 0x11),
    TestVector::unary(Mnemonic::Cpop, 0xc76cad63, 0x12),
    TestVector::unary(Mnemonic::Cpop, 0x7815245f, 0xf),
    TestVector::unary(Mnemonic::Cpop, 0xe93403ff, 0x12),
    TestVector::unary(Mnemonic::Cpop, 0x562a1675, 0xf),
    TestVector::unary(Mnemonic::Cpop, 0x6ef37a8d, 0x14),
    TestVector::unary(Mnemonic::Cpop, 0x698be3bc, 0x12),
    TestVector::unary(Mnemonic::Cpop, 0x1070f18e, 0xd),
    TestVector::unary(Mnemonic::Cpop, 0x79fc093a, 0x11),
];

/// `ctz`: count trailing zeros.
pub static CTZ: [TestVector; 16] = [
    TestVector::unary(Mnemonic::Ctz, 0xbd745d8e, 0x1),
    TestVector::unary(Mnemonic::Ctz, 0x31f49c0d, 0x0),
    TestVector::unary(Mnemonic::Ctz, 0xa3ef5b03, 0x0),
    TestVector::unary(Mnemonic::Ctz, 0x1d6d557d, 0x0),
    TestVector::unary(Mnemonic::Ctz, 0x7f992e14, 0x2),
    TestVector::unary(Mnemonic::Ctz, 0xd029150a, 0x1),
    TestVector::unary(Mnemonic::Ctz, 0x266dc672, 0x1),
    TestVector::unary(Mnemonic::Ctz, 0x2ee205e3, 0x0),
    TestVector::unary(Mnemonic::Ctz, 0x4ccca12a, 0x1),
    TestVector::unary(Mnemonic::Ctz, 0xea011715, 0x0),
    TestVector::unary(Mnemonic::Ctz, 0x306ad0e8, 0x3),
    TestVector::unary(Mnemonic::Ctz, 0x269490, 0x4),
    TestVector::unary(Mnemonic::Ctz, 0x3f2f5a82, 0x1),
    TestVector::unary(Mnemonic::Ctz, 0x226b6602, 0x1),
    TestVector::unary(Mnemonic::Ctz, 0xb7d11c68, 0x3),
    TestVector::unary(Mnemonic::Ctz, 0x972dabb8, 0x3),
];

/// `ror`: rotate right (register amount).
pub static ROR: [TestVector; 16] = [
    TestVector::reg(Mnemonic::Ror, 0x6f77eec5, 0xe9a69971, 0xf762b7bb),
    TestVector::reg(Mnemonic::Ror, 0xe7d8b4b6, 0x8a53a719, 0xec5a5b73),
    TestVector::reg(Mnemonic::Ror, 0xc450811a, 0x721fddc0, 0xc450811a),
    TestVector::reg(Mnemonic::Ror, 0xc65a4c19, 0x42d79085, 0xce32d260),
    TestVector::reg(Mnemonic::Ror, 0xd2116a40, 0x5669405a, 0x845a9034),
    TestVector::reg(Mnemonic::Ror, 0x37a1c19b, 0x71cbf6f7, 0x4383366f),
    TestVector::reg(Mnemonic::Ror, 0xff015b78, 0x8fc5df23, 0x1fe02b6f),
    TestVector::reg(Mnemonic::Ror, 0x774655ae, 0xa522fb22, 0x9dd1956b),
    TestVector::reg(Mnemonic::Ror, 0x5d06241c, 0xe4f9371e, 0x74189071),
    TestVector::reg(Mnemonic::Ror, 0x9ce17f3d, 0x38f6ce80, 0x9ce17f3d),
    TestVector::reg(Mnemonic::Ror, 0xa3996998, 0x119800f6, 0x65a6628e),
    TestVector::reg(Mnemonic::Ror, 0xd0ced13c, 0x9889a54f, 0xa279a19d),
    TestVector::reg(Mnemonic::Ror, 0x42a8fa56, 0x6d38db00, 0x42a8fa56),
    TestVector::reg(Mnemonic::Ror, 0xd5b343b6, 0xde075941, 0x6ad9a1db),
    TestVector::reg(Mnemonic::Ror, 0x4c7e6452, 0xb1e70127, 0xa498fcc8),
    TestVector::reg(Mnemonic::Ror, 0x90f31623, 0x71e5292a, 0x88e43cc5),
];

/// `rori`: rotate right (build-time immediate).
pub static RORI: [TestVector; 16] = [
    TestVector::imm(Mnemonic::Rori, 0xabe7041e, 31, 0x57ce083d),
    TestVector::imm(Mnemonic::Rori, 0x9cea7000, 29, 0xe7538004),
    TestVector::imm(Mnemonic::Rori, 0xbdd86dec, 20, 0x86decbdd),
    TestVector::imm(Mnemonic::Rori, 0x9ef409c7, 4, 0x79ef409c),
    TestVector::imm(Mnemonic::Rori, 0x3c223c9b, 29, 0xe111e4d9),
    TestVector::imm(Mnemonic::Rori, 0x907c1ca9, 30, 0x41f072a6),
    TestVector::imm(Mnemonic::Rori, 0xf611ec4, 25, 0xb08f6207),
    TestVector::imm(Mnemonic::Rori, 0x2cc963e7, 5, 0x39664b1f),
    TestVector::imm(Mnemonic::Rori, 0xeec22ab9, 19, 0x45573dd8),
    TestVector::imm(Mnemonic::Rori, 0xb5232697, 21, 0x1934bda9),
    TestVector::imm(Mnemonic::Rori, 0xb6eb1fd5, 21, 0x58feadb7),
    TestVector::imm(Mnemonic::Rori, 0x35dd8f2f, 22, 0x763cbcd7),
    TestVector::imm(Mnemonic::Rori, 0x6f634fe6, 6, 0x99bd8d3f),
    TestVector::imm(Mnemonic::Rori, 0x8b342d23, 16, 0x2d238b34),
    TestVector::imm(Mnemonic::Rori, 0xfc8d4913, 15, 0x9227f91a),
    TestVector::imm(Mnemonic::Rori, 0x88d90362, 12, 0x36288d90),
];

/// `rol`: rotate left (register amount).
pub static ROL: [TestVector; 16] = [
    TestVector::reg(Mnemonic::Rol, 0xe873ddc5, 0x97d77a7d, 0xbd0e7bb8),
    TestVector::reg(Mnemonic::Rol, 0x19bb0406, 0x78206e2c, 0xb040619b),
    TestVector::reg(Mnemonic::Rol, 0x997d6e18, 0x54909976, 0x86265f5b),
    TestVector::reg(Mnemonic::Rol, 0xf6058424, 0xb4185664, 0x6058424f),
    TestVector::reg(Mnemonic::Rol, 0x9defeedf, 0x220874d3, 0x76fcef7f),
    TestVector::reg(Mnemonic::Rol, 0x5ef7c675, 0xced7619d, 0xabdef8ce),
    TestVector::reg(Mnemonic::Rol, 0x34042582, 0xe65f0672, 0x9608d010),
    TestVector::reg(Mnemonic::Rol, 0xb71bdda, 0xdfcaebb6, 0x7682dc6f),
    TestVector::reg(Mnemonic::Rol, 0x7bf39f43, 0x120cee66, 0xfce7d0de),
    TestVector::reg(Mnemonic::Rol, 0x6cf39be6, 0x638be98, 0xe66cf39b),
    TestVector::reg(Mnemonic::Rol, 0x65746041, 0x123b4662, 0x95d18105),
    TestVector::reg(Mnemonic::Rol, 0x7a8284c7, 0x562ca1df, 0xbd414263),
    TestVector::reg(Mnemonic::Rol, 0x6e4c5cf0, 0xebe7b63d, 0xdc98b9e),
    TestVector::reg(Mnemonic::Rol, 0xa07f4fab, 0xbd4c71b3, 0x7d5d03fa),
    TestVector::reg(Mnemonic::Rol, 0xbf06de81, 0x2539d6ed, 0xdbd037e0),
    TestVector::reg(Mnemonic::Rol, 0xbe1d9a2e, 0x545d1f46, 0x87668baf),
];

/// `xnor`: rd = !(rs1 ^ rs2).
pub static XNOR: [TestVector; 16] = [
    TestVector::reg(Mnemonic::Xnor, 0xbaadb6fe, 0xab7140a0, 0xee2309a1),
    TestVector::reg(Mnemonic::Xnor, 0xa5f37340, 0x72866985, 0x288ae53a),
    TestVector::reg(Mnemonic::Xnor, 0x1bbb0154, 0xd269dc83, 0x362d2228),
    TestVector::reg(Mnemonic::Xnor, 0x8fc23c66, 0xb77065c2, 0xc74da65b),
    TestVector::reg(Mnemonic::Xnor, 0xbef1d423, 0x9a7ca5b0, 0xdb728e6c),
    TestVector::reg(Mnemonic::Xnor, 0xee20903c, 0x48212176, 0x59fe4eb5),
    TestVector::reg(Mnemonic::Xnor, 0x5392da12, 0xe7b6d99c, 0x4bdbfc71),
    TestVector::reg(Mnemonic::Xnor, 0xf8c64781, 0xf3039bf2, 0xf43a238c),
    TestVector::reg(Mnemonic::Xnor, 0x8cbb6344, 0xd5c885bf, 0xa68c1904),
    TestVector::reg(Mnemonic::Xnor, 0x25919ba0, 0xdfc5e5e6, 0x5ab81b9),
    TestVector::reg(Mnemonic::Xnor, 0x8261e919, 0x9f2f5d63, 0xe2b14b85),
    TestVector::reg(Mnemonic::Xnor, 0x8ed9e35c, 0x6fddddd1, 0x1efbc172),
    TestVector::reg(Mnemonic::Xnor, 0xad265faa, 0xb20f98c5, 0xe0d63890),
    TestVector::reg(Mnemonic::Xnor, 0x852d6eb1, 0xdec1c1aa, 0xa41350e4),
    TestVector::reg(Mnemonic::Xnor, 0x66c8a8af, 0x4c45f2da, 0xd572a58a),
    TestVector::reg(Mnemonic::Xnor, 0x3d264d16, 0xcb46ebc4, 0x99f592d),
];

/// `andn`: rd = rs1 & !rs2.
pub static ANDN: [TestVector; 16] = [
    TestVector::reg(Mnemonic::Andn, 0x7298ed73, 0xb4ac40e5, 0x4210ad12),
    TestVector::reg(Mnemonic::Andn, 0x4ebacae7, 0xfb0cb6f0, 0x4b24807),
    TestVector::reg(Mnemonic::Andn, 0x94c325fb, 0x95d83608, 0x301f3),
    TestVector::reg(Mnemonic::Andn, 0x6189bd84, 0x66a3ed39, 0x1081084),
    TestVector::reg(Mnemonic::Andn, 0x28ebda71, 0x623240be, 0x8c99a41),
    TestVector::reg(Mnemonic::Andn, 0x92968a95, 0xb787ac82, 0x100215),
    TestVector::reg(Mnemonic::Andn, 0x3448b7a3, 0xf3f880be, 0x4003701),
    TestVector::reg(Mnemonic::Andn, 0xf896d6ae, 0x4491db56, 0xb80604a8),
    TestVector::reg(Mnemonic::Andn, 0x6cbf5667, 0xf4da0190, 0x8255667),
    TestVector::reg(Mnemonic::Andn, 0xf97ad50b, 0x833e8565, 0x7840500a),
    TestVector::reg(Mnemonic::Andn, 0x6dc1976b, 0x18464943, 0x65819628),
    TestVector::reg(Mnemonic::Andn, 0x85981b05, 0x2e76997c, 0x81880201),
    TestVector::reg(Mnemonic::Andn, 0x26bf272c, 0xebd9b525, 0x4260208),
    TestVector::reg(Mnemonic::Andn, 0x88cbbe20, 0x5b282f0d, 0x80c39020),
    TestVector::reg(Mnemonic::Andn, 0x83297a64, 0x51370b7d, 0x82087000),
    TestVector::reg(Mnemonic::Andn, 0x8ce39e46, 0x8a1267d4, 0x4e19802),
];

/// `orn`: rd = rs1 | !rs2.
pub static ORN: [TestVector; 16] = [
    TestVector::reg(Mnemonic::Orn, 0x7c44eb17, 0xfddcb876, 0x7e67ef9f),
    TestVector::reg(Mnemonic::Orn, 0x733937e2, 0xe6dacc50, 0x7b3d37ef),
    TestVector::reg(Mnemonic::Orn, 0x3a336a9d, 0xd0f59374, 0x3f3b6e9f),
    TestVector::reg(Mnemonic::Orn, 0x401d6875, 0xe5c1d30f, 0x5a3f6cf5),
    TestVector::reg(Mnemonic::Orn, 0xe52665c9, 0x19333359, 0xe7eeedef),
    TestVector::reg(Mnemonic::Orn, 0x58d9c2c, 0xcc3bb197, 0x37cdde6c),
    TestVector::reg(Mnemonic::Orn, 0xbf21064a, 0xf5fa265a, 0xbf25dfef),
    TestVector::reg(Mnemonic::Orn, 0xf93673f0, 0xa6212d27, 0xf9fef3f8),
    TestVector::reg(Mnemonic::Orn, 0xa6965975, 0xa103fb0c, 0xfefe5df7),
    TestVector::reg(Mnemonic::Orn, 0xd11eba79, 0xcdf23c3b, 0xf31ffbfd),
    TestVector::reg(Mnemonic::Orn, 0x8d9fa53c, 0x1043920e, 0xefbfedfd),
    TestVector::reg(Mnemonic::Orn, 0xca8bca9d, 0x73e5b444, 0xce9bcbbf),
    TestVector::reg(Mnemonic::Orn, 0x7065d82e, 0x381d5043, 0xf7e7ffbe),
    TestVector::reg(Mnemonic::Orn, 0x32c3e2a0, 0x5bcba4b6, 0xb6f7fbe9),
    TestVector::reg(Mnemonic::Orn, 0x2282028c, 0x558cfe56, 0xaaf303ad),
    TestVector::reg(Mnemonic::Orn, 0x5aed2a5e, 0x6f57da56, 0xdaed2fff),
];
