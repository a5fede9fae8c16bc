//! Zbs single-bit manipulation fixtures (bset, bext, binv, bclr and immediate forms).
//!
//! 16 auto-generated vectors per instruction, transcribed from the
//! offline generator output. Read-only ground truth: `expected` is the
//! bit-exact result of the instruction semantics for the given operands.

use super::TestVector;
use crate::isa::Mnemonic;

/// `bset`: set bit (register index).
pub static BSET: [TestVector; 16] = [
    TestVector::reg(Mnemonic::Bset, 0x5504a5dd, 0x7096d20f, 0x5504a5dd),
    TestVector::reg(Mnemonic::Bset, 0xaca129eb, 0xaa140462, 0xaca129ef),
    TestVector::reg(Mnemonic::Bset, 0x9f4721be, 0xa8d428d9, 0x9f4721be),
    TestVector::reg(Mnemonic::Bset, 0x1dd71ec6, 0x5bd520b9, 0x1fd71ec6),
    TestVector::reg(Mnemonic::Bset, 0x65f72336, 0xbce6ce00, 0x65f72337),
    TestVector::reg(Mnemonic::Bset, 0x65c474ad, 0xd2d048bd, 0x65c474ad),
    TestVector::reg(Mnemonic::Bset, 0x46c37c30, 0x3012819f, 0xc6c37c30),
    TestVector::reg(Mnemonic::Bset, 0xd02c81c2, 0x8bfaa9df, 0xd02c81c2),
    TestVector::reg(Mnemonic::Bset, 0x8e65551b, 0x2667f9d8, 0x8f65551b),
    TestVector::reg(Mnemonic::Bset, 0xc0995004, 0xde7d8b00, 0xc0995005),
    TestVector::reg(Mnemonic::Bset, 0x75204a8e, 0x220dbf0, 0x75214a8e),
    TestVector::reg(Mnemonic::Bset, 0x13c01563, 0xe9c3a19f, 0x93c01563),
    TestVector::reg(Mnemonic::Bset, 0xfc5cd7c7, 0x51be2afc, 0xfc5cd7c7),
    TestVector::reg(Mnemonic::Bset, 0x45af7769, 0x294d584, 0x45af7779),
    TestVector::reg(Mnemonic::Bset, 0xc8ff0c3c, 0x3a2a1702, 0xc8ff0c3c),
    TestVector::reg(Mnemonic::Bset, 0x288e8a6f, 0x995961d9, 0x2a8e8a6f),
];

/// `bseti`: set bit (build-time immediate index).
pub static BSETI: [TestVector; 16] = [
    TestVector::imm(Mnemonic::Bseti, 0x858cbcd7, 30, 0xc58cbcd7),
    TestVector::imm(Mnemonic::Bseti, 0x1fbf1050, 2, 0x1fbf1054),
    TestVector::imm(Mnemonic::Bseti, 0x42c6a14a, 9, 0x42c6a34a),
    TestVector::imm(Mnemonic::Bseti, 0x5ae91c67, 28, 0x5ae91c67),
    TestVector::imm(Mnemonic::Bseti, 0x81421de7, 29, 0xa1421de7),
    TestVector::imm(Mnemonic::Bseti, 0x20c0d7, 22, 0x60c0d7),
    TestVector::imm(Mnemonic::Bseti, 0x1e434d0a, 11, 0x1e434d0a),
    TestVector::imm(Mnemonic::Bseti, 0x264a55ea, 22, 0x264a55ea),
    TestVector::imm(Mnemonic::Bseti, 0x9d405dbf, 22, 0x9d405dbf),
    TestVector::imm(Mnemonic::Bseti, 0x35fd6f0e, 7, 0x35fd6f8e),
    TestVector::imm(Mnemonic::Bseti, 0x864465da, 30, 0xc64465da),
    TestVector::imm(Mnemonic::Bseti, 0xc5c4bcca, 24, 0xc5c4bcca),
    TestVector::imm(Mnemonic::Bseti, 0xbfedbc49, 15, 0xbfedbc49),
    TestVector::imm(Mnemonic::Bseti, 0xc8c885e5, 3, 0xc8c885ed),
    TestVector::imm(Mnemonic::Bseti, 0xb0bad091, 27, 0xb8bad091),
    TestVector::imm(Mnemonic::Bseti, 0xcdbd6638, 22, 0xcdfd6638),
];

/// `bext`: extract bit (register index).
pub static BEXT: [TestVector; 16] = [
    TestVector::reg(Mnemonic::Bext, 0x9f0f5398, 0x3c32cd2, 0x1),
    TestVector::reg(Mnemonic::Bext, 0xc563b144, 0x6d911f9e, 0x1),
    TestVector::reg(Mnemonic::Bext, 0x1660258c, 0xe1c99dd7, 0x0),
    TestVector::reg(Mnemonic::Bext, 0x90f6760c, 0x14f6e3e7, 0x0),
    TestVector::reg(Mnemonic::Bext, 0x64668280, 0xe4010055, 0x1),
    TestVector::reg(Mnemonic::Bext, 0x622d5892, 0x49eaa6ec, 0x1),
    TestVector::reg(Mnemonic::Bext, 0xbb8e9513, 0x36e3d11e, 0x0),
    TestVector::reg(Mnemonic::Bext, 0xf5a04e35, 0x14d00a4d, 0x0),
    TestVector::reg(Mnemonic::Bext, 0xe7cae8e, 0x8e2ef654, 0x1),
    TestVector::reg(Mnemonic::Bext, 0xc1d30c0c, 0x5c988896, 0x1),
    TestVector::reg(Mnemonic::Bext, 0x689671bf, 0xb0aa7112, 0x1),
    TestVector::reg(Mnemonic::Bext, 0x50f86ca8, 0xcd88b583, 0x1),
    TestVector::reg(Mnemonic::Bext, 0x6047277, 0x69c28416, 0x0),
    TestVector::reg(Mnemonic::Bext, 0xdbe14fc6, 0x8fc90153, 0x0),
    TestVector::reg(Mnemonic::Bext, 0x8a4a4abc, 0xf3bee2a3, 0x1),
    TestVector::reg(Mnemonic::Bext, 0x69659a4a, 0xfd2a6956, 0x1),
];

/// `bexti`: extract bit (build-time immediate index).
pub static BEXTI: [TestVector; 16] = [
    TestVector::imm(Mnemonic::Bexti, 0x99afd688, 28, 0x1),
    TestVector::imm(Mnemonic::Bexti, 0x419cb278, 24, 0x1),
    TestVector::imm(Mnemonic::Bexti, 0x42ef410b, 9, 0x0),
    TestVector::imm(Mnemonic::Bexti, 0xa483fd3d, 18, 0x0),
    TestVector::imm(Mnemonic::Bexti, 0xc8f6550b, 4, 0x0),
    TestVector::imm(Mnemonic::Bexti, 0x348edf78, 15, 0x1),
    TestVector::imm(Mnemonic::Bexti, 0x412d058f, 8, 0x1),
    TestVector::imm(Mnemonic::Bexti, 0x3dc97699, 26, 0x1),
    TestVector::imm(Mnemonic::Bexti, 0xd9cccb7b, 15, 0x1),
    TestVector::imm(Mnemonic::Bexti, 0xb15d7877, 9, 0x0),
    TestVector::imm(Mnemonic::Bexti, 0x732bafd0, 20, 0x0),
    TestVector::imm(Mnemonic::Bexti, 0x85812504, 14, 0x0),
    TestVector::imm(Mnemonic::Bexti, 0x66e5ad68, 2, 0x0),
    TestVector::imm(Mnemonic::Bexti, 0x82260eb, 3, 0x1),
    TestVector::imm(Mnemonic::Bexti, 0x3ef73170, 17, 0x1),
    TestVector::imm(Mnemonic::Bexti, 0x824ce140, 31, 0x1),
];

/// `binv`: invert bit (register index).
pub static BINV: [TestVector; 16] = [
    TestVector::reg(Mnemonic::Binv, 0x93ee3a1d, 0xef75f1bf, 0x13ee3a1d),
    TestVector::reg(Mnemonic::Binv, 0x2efa3840, 0xa06e09eb, 0x2efa3040),
    TestVector::reg(Mnemonic::Binv, 0x11bbce8a, 0xa16ba4d8, 0x10bbce8a),
    TestVector::reg(Mnemonic::Binv, 0xfcfbb4e7, 0x3f5a4a39, 0xfefbb4e7),
    TestVector::reg(Mnemonic::Binv, 0x3e7b7147, 0xec4ce03d, 0x1e7b7147),
    TestVector::reg(Mnemonic::Binv, 0xba3667c4, 0xafdbe263, 0xba3667cc),
    TestVector::reg(Mnemonic::Binv, 0x72273c3a, 0x1514622f, 0x7227bc3a),
    TestVector::reg(Mnemonic::Binv, 0x1921f3d5, 0xf87272ab, 0x1921fbd5),
    TestVector::reg(Mnemonic::Binv, 0xeebafc7f, 0x43929ead, 0xeebadc7f),
    TestVector::reg(Mnemonic::Binv, 0xfee04392, 0x5cebe349, 0xfee04192),
    TestVector::reg(Mnemonic::Binv, 0xaf0143f9, 0x5b180571, 0xaf0343f9),
    TestVector::reg(Mnemonic::Binv, 0x2763522a, 0xe4895fdb, 0x2f63522a),
    TestVector::reg(Mnemonic::Binv, 0x77828325, 0xac61ecb2, 0x77868325),
    TestVector::reg(Mnemonic::Binv, 0x50ae4f62, 0x1dbabfc1, 0x50ae4f60),
    TestVector::reg(Mnemonic::Binv, 0x432b9a2e, 0x8e105c55, 0x430b9a2e),
    TestVector::reg(Mnemonic::Binv, 0xa39de8df, 0xca51fc06, 0xa39de89f),
];

/// `binvi`: invert bit (build-time immediate index).
pub static BINVI: [TestVector; 16] = [
    TestVector::imm(Mnemonic::Binvi, 0xb3ce24ad, 13, 0xb3ce04ad),
    TestVector::imm(Mnemonic::Binvi, 0x35fa804a, 18, 0x35fe804a),
    TestVector::imm(Mnemonic::Binvi, 0x6ab684a7, 22, 0x6af684a7),
    TestVector::imm(Mnemonic::Binvi, 0x61094e39, 24, 0x60094e39),
    TestVector::imm(Mnemonic::Binvi, 0xb26ecfb, 7, 0xb26ec7b),
    TestVector::imm(Mnemonic::Binvi, 0xb557fde, 3, 0xb557fd6),
    TestVector::imm(Mnemonic::Binvi, 0x518974e3, 9, 0x518976e3),
    TestVector::imm(Mnemonic::Binvi, 0xb094e6ab, 31, 0x3094e6ab),
    TestVector::imm(Mnemonic::Binvi, 0x4066496c, 1, 0x4066496e),
    TestVector::imm(Mnemonic::Binvi, 0xcbc20d51, 17, 0xcbc00d51),
    TestVector::imm(Mnemonic::Binvi, 0x90e29d8c, 19, 0x90ea9d8c),
    TestVector::imm(Mnemonic::Binvi, 0xa7eca88d, 10, 0xa7ecac8d),
    TestVector::imm(Mnemonic::Binvi, 0x16a429c4, 9, 0x16a42bc4),
    TestVector::imm(Mnemonic::Binvi, 0x6e6ced36, 10, 0x6e6ce936),
    TestVector::imm(Mnemonic::Binvi, 0x87c51cb9, 12, 0x87c50cb9),
    TestVector::imm(Mnemonic::Binvi, 0x90a8252a, 4, 0x90a8253a),
];

/// `bclr`: clear bit (register index).
pub static BCLR: [TestVector; 16] = [
    TestVector::reg(Mnemonic::Bclr, 0x56de29cf, 0x7ed89ea6, 0x56de298f),
    TestVector::reg(Mnemonic::Bclr, 0xfee01d9a, 0x51a6e1be, 0xbee01d9a),
    TestVector::reg(Mnemonic::Bclr, 0x12ea1817, 0x127ef4f2, 0x12ea1817),
    TestVector::reg(Mnemonic::Bclr, 0x3b889d2f, 0x37657a7b, 0x33889d2f),
    TestVector::reg(Mnemonic::Bclr, 0xd886937e, 0xc6eff2de, 0x9886937e),
    TestVector::reg(Mnemonic::Bclr, 0xf5acfa1a, 0xd0f1c996, 0xf5acfa1a),
    TestVector::reg(Mnemonic::Bclr, 0xc7c17c36, 0x7bc4dc38, 0xc6c17c36),
    TestVector::reg(Mnemonic::Bclr, 0xd069cb4a, 0x8dcaa020, 0xd069cb4a),
    TestVector::reg(Mnemonic::Bclr, 0x6e49e5bc, 0x52abcc62, 0x6e49e5b8),
    TestVector::reg(Mnemonic::Bclr, 0x27020f24, 0xf3b57848, 0x27020e24),
    TestVector::reg(Mnemonic::Bclr, 0xd9432e00, 0xd05ec44c, 0xd9432e00),
    TestVector::reg(Mnemonic::Bclr, 0xed3c2dff, 0xf50920c7, 0xed3c2d7f),
    TestVector::reg(Mnemonic::Bclr, 0x34ba572b, 0xcecffdca, 0x34ba532b),
    TestVector::reg(Mnemonic::Bclr, 0xbb3a4cf2, 0xf762c72e, 0xbb3a0cf2),
    TestVector::reg(Mnemonic::Bclr, 0xee6b6f6e, 0xdd91e03f, 0x6e6b6f6e),
    TestVector::reg(Mnemonic::Bclr, 0x12cb6641, 0xe10c5b8e, 0x12cb2641),
];

/// `bclri`: clear bit (build-time immediate index).
pub static BCLRI: [TestVector; 16] = [
    TestVector::imm(Mnemonic::Bclri, 0x3779e380, 26, 0x3379e380),
    TestVector::imm(Mnemonic::Bclri, 0xed0f6e15, 0, 0xed0f6e14),
    TestVector::imm(Mnemonic::Bclri, 0x7faa723c, 20, 0x7faa723c),
    TestVector::imm(Mnemonic::Bclri, 0xdd995314, 20, 0xdd895314),
    TestVector::imm(Mnemonic::Bclri, 0x1a8da60b, 13, 0x1a8d860b),
    TestVector::imm(Mnemonic::Bclri, 0x7bc064f7, 17, 0x7bc064f7),
    TestVector::imm(Mnemonic::Bclri, 0xafca540f, 10, 0xafca500f),
    TestVector::imm(Mnemonic::Bclri, 0xb5e18168, 6, 0xb5e18128),
    TestVector::imm(Mnemonic::Bclri, 0x60c7b31f, 17, 0x60c5b31f),
    TestVector::imm(Mnemonic::Bclri, 0xb8b5bc03, 23, 0xb835bc03),
    TestVector::imm(Mnemonic::Bclri, 0x3cab0674, 18, 0x3cab0674),
    TestVector::imm(Mnemonic::Bclri, 0x31650b6, 12, 0x31640b6),
    TestVector::imm(Mnemonic::Bclri, 0xcd931fd2, 28, 0xcd931fd2),
    TestVector::imm(Mnemonic::Bclri, 0x8fdfbc8b, 5, 0x8fdfbc8b),
    TestVector::imm(Mnemonic::Bclri, 0x182a3f5f, 17, 0x18283f5f),
    TestVector::imm(Mnemonic::Bclri, 0xf986cbba, 12, 0xf986cbba),
];
