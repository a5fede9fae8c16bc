//! Zba address-generation fixtures (sh1add, sh2add, sh3add).
//!
//! 16 auto-generated vectors per instruction, transcribed from the
//! offline generator output. Read-only ground truth: `expected` is the
//! bit-exact result of the instruction semantics for the given operands.

use super::TestVector;
use crate::isa::Mnemonic;

/// `sh1add`: rd = (rs1 << 1) + rs2.
pub static SH1ADD: [TestVector; 16] = [
    TestVector::reg(Mnemonic::Sh1add, 0x8bfb2fcf, 0x47b4370d, 0x5faa96ab),
    TestVector::reg(Mnemonic::Sh1add, 0x7f89b8c2, 0xf3b83b29, 0xf2cbacad),
    TestVector::reg(Mnemonic::Sh1add, 0xd582b559, 0x5392240, 0xb03e8cf2),
    TestVector::reg(Mnemonic::Sh1add, 0x6f9e2874, 0x7459a938, 0x5395fa20),
    TestVector::reg(Mnemonic::Sh1add, 0xcc34fbc0, 0xb8c4f89, 0xa3f64709),
    TestVector::reg(Mnemonic::Sh1add, 0x28e3549e, 0x21d8cac9, 0x739f7405),
    TestVector::reg(Mnemonic::Sh1add, 0x4ce2446c, 0x5fe469fd, 0xf9a8f2d5),
    TestVector::reg(Mnemonic::Sh1add, 0x5951bd13, 0xc6209aa5, 0x78c414cb),
    TestVector::reg(Mnemonic::Sh1add, 0xddebc93e, 0x733c8199, 0x2f141415),
    TestVector::reg(Mnemonic::Sh1add, 0x3ddc169d, 0x2bba4c5c, 0xa7727996),
    TestVector::reg(Mnemonic::Sh1add, 0xf1fc7b63, 0xe2bd81bc, 0xc6b67882),
    TestVector::reg(Mnemonic::Sh1add, 0xf3977952, 0x98781c98, 0x7fa70f3c),
    TestVector::reg(Mnemonic::Sh1add, 0xa2ea469, 0x212d2cf1, 0x358a75c3),
    TestVector::reg(Mnemonic::Sh1add, 0xcf0b637d, 0x94e6a4d, 0xa7653147),
    TestVector::reg(Mnemonic::Sh1add, 0x380d82e7, 0xad2da5fe, 0x1d48abcc),
    TestVector::reg(Mnemonic::Sh1add, 0xa8ed904f, 0xee862289, 0x40614327),
];

/// `sh2add`: rd = (rs1 << 2) + rs2.
pub static SH2ADD: [TestVector; 16] = [
    TestVector::reg(Mnemonic::Sh2add, 0x6a701eba, 0xd714e5a7, 0x80d5608f),
    TestVector::reg(Mnemonic::Sh2add, 0xa0a95327, 0xe181a591, 0x6426f22d),
    TestVector::reg(Mnemonic::Sh2add, 0xca21ff9e, 0xfcfc0511, 0x25840389),
    TestVector::reg(Mnemonic::Sh2add, 0x52e196c4, 0xa5a30648, 0xf1296158),
    TestVector::reg(Mnemonic::Sh2add, 0x80db5daa, 0xd894c9c0, 0xdc024068),
    TestVector::reg(Mnemonic::Sh2add, 0x95a6e127, 0x20fd8c12, 0x779910ae),
    TestVector::reg(Mnemonic::Sh2add, 0x7ee146ba, 0x5b1ef85, 0x1370a6d),
    TestVector::reg(Mnemonic::Sh2add, 0x607ed801, 0x5683c2, 0x8251e3c6),
    TestVector::reg(Mnemonic::Sh2add, 0x26573b24, 0x3ecd27c8, 0xd82a1458),
    TestVector::reg(Mnemonic::Sh2add, 0x154fd78c, 0xe0662fb7, 0x35a58de7),
    TestVector::reg(Mnemonic::Sh2add, 0xbd2b357f, 0xc978660d, 0xbe253c09),
    TestVector::reg(Mnemonic::Sh2add, 0xcc4f84cf, 0x9cb61221, 0xcdf4255d),
    TestVector::reg(Mnemonic::Sh2add, 0x44e2af0c, 0xa4122f04, 0xb79ceb34),
    TestVector::reg(Mnemonic::Sh2add, 0x46a2f27, 0xc67723ce, 0xd81fe06a),
    TestVector::reg(Mnemonic::Sh2add, 0xc5f93133, 0x6b303c74, 0x83150140),
    TestVector::reg(Mnemonic::Sh2add, 0x8f94f97c, 0xc9904a94, 0x7e43084),
];

/// `sh3add`: rd = (rs1 << 3) + rs2.
pub static SH3ADD: [TestVector; 16] = [
    TestVector::reg(Mnemonic::Sh3add, 0x8b98f2d8, 0x8478be39, 0xe14054f9),
    TestVector::reg(Mnemonic::Sh3add, 0xd8384c35, 0xf4318e13, 0xb5f3efbb),
    TestVector::reg(Mnemonic::Sh3add, 0xc81a30e2, 0xc0251fc8, 0xf6a6d8),
    TestVector::reg(Mnemonic::Sh3add, 0x75643486, 0x4a6398a2, 0xf5853cd2),
    TestVector::reg(Mnemonic::Sh3add, 0x45b83e8, 0xe351fd3c, 0x62e1c7c),
    TestVector::reg(Mnemonic::Sh3add, 0xfb9137b7, 0x6210f693, 0x3e9ab44b),
    TestVector::reg(Mnemonic::Sh3add, 0xee1998f6, 0xe861f868, 0x592ec018),
    TestVector::reg(Mnemonic::Sh3add, 0x2226235e, 0x3b2aebeb, 0x4c5c06db),
    TestVector::reg(Mnemonic::Sh3add, 0xaac042c1, 0x95166ae5, 0xeb1880ed),
    TestVector::reg(Mnemonic::Sh3add, 0x8ffea8b7, 0xef3c3c54, 0x6f31820c),
    TestVector::reg(Mnemonic::Sh3add, 0xa8258ac5, 0x9a702a8d, 0xdb9c80b5),
    TestVector::reg(Mnemonic::Sh3add, 0x243e8221, 0xebf6a032, 0xdeab13a),
    TestVector::reg(Mnemonic::Sh3add, 0x26c9d24d, 0xf295b993, 0x28e44bfb),
    TestVector::reg(Mnemonic::Sh3add, 0x1b3106d0, 0x8cb04d9d, 0x6638841d),
    TestVector::reg(Mnemonic::Sh3add, 0xb982bf51, 0xe42b023b, 0xb040fcc3),
    TestVector::reg(Mnemonic::Sh3add, 0x7fe318c1, 0xceda64ae, 0xcdf32ab6),
];
