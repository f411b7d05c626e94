//! Unicode 14.0.0 character property tables.
//!
//! Generated from the Unicode Character Database. Do not edit by hand.

/// The version of the Unicode Character Database these tables were built from.
pub(crate) const UNICODE_VERSION: (u8, u8, u8) = (14, 0, 0);

pub(crate) mod grapheme {
    use crate::properties::GraphemeBreak as GB;

    pub(crate) static GRAPHEME_BREAK_TABLE: &[(u32, u32, GB)] = &[
        (0x0000, 0x0009, GB::Control), (0x000A, 0x000A, GB::LF), (0x000B, 0x000C, GB::Control),
        (0x000D, 0x000D, GB::CR), (0x000E, 0x001F, GB::Control), (0x007F, 0x009F, GB::Control),
        (0x00AD, 0x00AD, GB::Control), (0x0300, 0x036F, GB::Extend), (0x0483, 0x0489, GB::Extend),
        (0x0591, 0x05BD, GB::Extend), (0x05BF, 0x05BF, GB::Extend), (0x05C1, 0x05C2, GB::Extend),
        (0x05C4, 0x05C5, GB::Extend), (0x05C7, 0x05C7, GB::Extend), (0x0600, 0x0605, GB::Prepend),
        (0x0610, 0x061A, GB::Extend), (0x061C, 0x061C, GB::Control), (0x064B, 0x065F, GB::Extend),
        (0x0670, 0x0670, GB::Extend), (0x06D6, 0x06DC, GB::Extend), (0x06DD, 0x06DD, GB::Prepend),
        (0x06DF, 0x06E4, GB::Extend), (0x06E7, 0x06E8, GB::Extend), (0x06EA, 0x06ED, GB::Extend),
        (0x070F, 0x070F, GB::Prepend), (0x0711, 0x0711, GB::Extend), (0x0730, 0x074A, GB::Extend),
        (0x07A6, 0x07B0, GB::Extend), (0x07EB, 0x07F3, GB::Extend), (0x07FD, 0x07FD, GB::Extend),
        (0x0816, 0x0819, GB::Extend), (0x081B, 0x0823, GB::Extend), (0x0825, 0x0827, GB::Extend),
        (0x0829, 0x082D, GB::Extend), (0x0859, 0x085B, GB::Extend), (0x0890, 0x0891, GB::Prepend),
        (0x0898, 0x089F, GB::Extend), (0x08CA, 0x08E1, GB::Extend), (0x08E2, 0x08E2, GB::Prepend),
        (0x08E3, 0x0902, GB::Extend), (0x0903, 0x0903, GB::SpacingMark),
        (0x093A, 0x093A, GB::Extend), (0x093B, 0x093B, GB::SpacingMark),
        (0x093C, 0x093C, GB::Extend), (0x093E, 0x0940, GB::SpacingMark),
        (0x0941, 0x0948, GB::Extend), (0x0949, 0x094C, GB::SpacingMark),
        (0x094D, 0x094D, GB::Extend), (0x094E, 0x094F, GB::SpacingMark),
        (0x0951, 0x0957, GB::Extend), (0x0962, 0x0963, GB::Extend), (0x0981, 0x0981, GB::Extend),
        (0x0982, 0x0983, GB::SpacingMark), (0x09BC, 0x09BC, GB::Extend),
        (0x09BE, 0x09BE, GB::Extend), (0x09BF, 0x09C0, GB::SpacingMark),
        (0x09C1, 0x09C4, GB::Extend), (0x09C7, 0x09C8, GB::SpacingMark),
        (0x09CB, 0x09CC, GB::SpacingMark), (0x09CD, 0x09CD, GB::Extend),
        (0x09D7, 0x09D7, GB::Extend), (0x09E2, 0x09E3, GB::Extend), (0x09FE, 0x09FE, GB::Extend),
        (0x0A01, 0x0A02, GB::Extend), (0x0A03, 0x0A03, GB::SpacingMark),
        (0x0A3C, 0x0A3C, GB::Extend), (0x0A3E, 0x0A40, GB::SpacingMark),
        (0x0A41, 0x0A42, GB::Extend), (0x0A47, 0x0A48, GB::Extend), (0x0A4B, 0x0A4D, GB::Extend),
        (0x0A51, 0x0A51, GB::Extend), (0x0A70, 0x0A71, GB::Extend), (0x0A75, 0x0A75, GB::Extend),
        (0x0A81, 0x0A82, GB::Extend), (0x0A83, 0x0A83, GB::SpacingMark),
        (0x0ABC, 0x0ABC, GB::Extend), (0x0ABE, 0x0AC0, GB::SpacingMark),
        (0x0AC1, 0x0AC5, GB::Extend), (0x0AC7, 0x0AC8, GB::Extend),
        (0x0AC9, 0x0AC9, GB::SpacingMark), (0x0ACB, 0x0ACC, GB::SpacingMark),
        (0x0ACD, 0x0ACD, GB::Extend), (0x0AE2, 0x0AE3, GB::Extend), (0x0AFA, 0x0AFF, GB::Extend),
        (0x0B01, 0x0B01, GB::Extend), (0x0B02, 0x0B03, GB::SpacingMark),
        (0x0B3C, 0x0B3C, GB::Extend), (0x0B3E, 0x0B3F, GB::Extend),
        (0x0B40, 0x0B40, GB::SpacingMark), (0x0B41, 0x0B44, GB::Extend),
        (0x0B47, 0x0B48, GB::SpacingMark), (0x0B4B, 0x0B4C, GB::SpacingMark),
        (0x0B4D, 0x0B4D, GB::Extend), (0x0B55, 0x0B57, GB::Extend), (0x0B62, 0x0B63, GB::Extend),
        (0x0B82, 0x0B82, GB::Extend), (0x0BBE, 0x0BBE, GB::Extend),
        (0x0BBF, 0x0BBF, GB::SpacingMark), (0x0BC0, 0x0BC0, GB::Extend),
        (0x0BC1, 0x0BC2, GB::SpacingMark), (0x0BC6, 0x0BC8, GB::SpacingMark),
        (0x0BCA, 0x0BCC, GB::SpacingMark), (0x0BCD, 0x0BCD, GB::Extend),
        (0x0BD7, 0x0BD7, GB::Extend), (0x0C00, 0x0C00, GB::Extend),
        (0x0C01, 0x0C03, GB::SpacingMark), (0x0C04, 0x0C04, GB::Extend),
        (0x0C3C, 0x0C3C, GB::Extend), (0x0C3E, 0x0C40, GB::Extend),
        (0x0C41, 0x0C44, GB::SpacingMark), (0x0C46, 0x0C48, GB::Extend),
        (0x0C4A, 0x0C4D, GB::Extend), (0x0C55, 0x0C56, GB::Extend), (0x0C62, 0x0C63, GB::Extend),
        (0x0C81, 0x0C81, GB::Extend), (0x0C82, 0x0C83, GB::SpacingMark),
        (0x0CBC, 0x0CBC, GB::Extend), (0x0CBE, 0x0CBE, GB::SpacingMark),
        (0x0CBF, 0x0CBF, GB::Extend), (0x0CC0, 0x0CC1, GB::SpacingMark),
        (0x0CC2, 0x0CC2, GB::Extend), (0x0CC3, 0x0CC4, GB::SpacingMark),
        (0x0CC6, 0x0CC6, GB::Extend), (0x0CC7, 0x0CC8, GB::SpacingMark),
        (0x0CCA, 0x0CCB, GB::SpacingMark), (0x0CCC, 0x0CCD, GB::Extend),
        (0x0CD5, 0x0CD6, GB::Extend), (0x0CE2, 0x0CE3, GB::Extend), (0x0D00, 0x0D01, GB::Extend),
        (0x0D02, 0x0D03, GB::SpacingMark), (0x0D3B, 0x0D3C, GB::Extend),
        (0x0D3E, 0x0D3E, GB::Extend), (0x0D3F, 0x0D40, GB::SpacingMark),
        (0x0D41, 0x0D44, GB::Extend), (0x0D46, 0x0D48, GB::SpacingMark),
        (0x0D4A, 0x0D4C, GB::SpacingMark), (0x0D4D, 0x0D4D, GB::Extend),
        (0x0D4E, 0x0D4E, GB::Prepend), (0x0D57, 0x0D57, GB::Extend), (0x0D62, 0x0D63, GB::Extend),
        (0x0D81, 0x0D81, GB::Extend), (0x0D82, 0x0D83, GB::SpacingMark),
        (0x0DCA, 0x0DCA, GB::Extend), (0x0DCF, 0x0DCF, GB::Extend),
        (0x0DD0, 0x0DD1, GB::SpacingMark), (0x0DD2, 0x0DD4, GB::Extend),
        (0x0DD6, 0x0DD6, GB::Extend), (0x0DD8, 0x0DDE, GB::SpacingMark),
        (0x0DDF, 0x0DDF, GB::Extend), (0x0DF2, 0x0DF3, GB::SpacingMark),
        (0x0E31, 0x0E31, GB::Extend), (0x0E33, 0x0E33, GB::SpacingMark),
        (0x0E34, 0x0E3A, GB::Extend), (0x0E47, 0x0E4E, GB::Extend), (0x0EB1, 0x0EB1, GB::Extend),
        (0x0EB3, 0x0EB3, GB::SpacingMark), (0x0EB4, 0x0EBC, GB::Extend),
        (0x0EC8, 0x0ECD, GB::Extend), (0x0F18, 0x0F19, GB::Extend), (0x0F35, 0x0F35, GB::Extend),
        (0x0F37, 0x0F37, GB::Extend), (0x0F39, 0x0F39, GB::Extend),
        (0x0F3E, 0x0F3F, GB::SpacingMark), (0x0F71, 0x0F7E, GB::Extend),
        (0x0F7F, 0x0F7F, GB::SpacingMark), (0x0F80, 0x0F84, GB::Extend),
        (0x0F86, 0x0F87, GB::Extend), (0x0F8D, 0x0F97, GB::Extend), (0x0F99, 0x0FBC, GB::Extend),
        (0x0FC6, 0x0FC6, GB::Extend), (0x102D, 0x1030, GB::Extend),
        (0x1031, 0x1031, GB::SpacingMark), (0x1032, 0x1037, GB::Extend),
        (0x1039, 0x103A, GB::Extend), (0x103B, 0x103C, GB::SpacingMark),
        (0x103D, 0x103E, GB::Extend), (0x1056, 0x1057, GB::SpacingMark),
        (0x1058, 0x1059, GB::Extend), (0x105E, 0x1060, GB::Extend), (0x1071, 0x1074, GB::Extend),
        (0x1082, 0x1082, GB::Extend), (0x1084, 0x1084, GB::SpacingMark),
        (0x1085, 0x1086, GB::Extend), (0x108D, 0x108D, GB::Extend), (0x109D, 0x109D, GB::Extend),
        (0x1100, 0x115F, GB::L), (0x1160, 0x11A7, GB::V), (0x11A8, 0x11FF, GB::T),
        (0x135D, 0x135F, GB::Extend), (0x1712, 0x1714, GB::Extend),
        (0x1715, 0x1715, GB::SpacingMark), (0x1732, 0x1733, GB::Extend),
        (0x1734, 0x1734, GB::SpacingMark), (0x1752, 0x1753, GB::Extend),
        (0x1772, 0x1773, GB::Extend), (0x17B4, 0x17B5, GB::Extend),
        (0x17B6, 0x17B6, GB::SpacingMark), (0x17B7, 0x17BD, GB::Extend),
        (0x17BE, 0x17C5, GB::SpacingMark), (0x17C6, 0x17C6, GB::Extend),
        (0x17C7, 0x17C8, GB::SpacingMark), (0x17C9, 0x17D3, GB::Extend),
        (0x17DD, 0x17DD, GB::Extend), (0x180B, 0x180D, GB::Extend), (0x180E, 0x180E, GB::Control),
        (0x180F, 0x180F, GB::Extend), (0x1885, 0x1886, GB::Extend), (0x18A9, 0x18A9, GB::Extend),
        (0x1920, 0x1922, GB::Extend), (0x1923, 0x1926, GB::SpacingMark),
        (0x1927, 0x1928, GB::Extend), (0x1929, 0x192B, GB::SpacingMark),
        (0x1930, 0x1931, GB::SpacingMark), (0x1932, 0x1932, GB::Extend),
        (0x1933, 0x1938, GB::SpacingMark), (0x1939, 0x193B, GB::Extend),
        (0x1A17, 0x1A18, GB::Extend), (0x1A19, 0x1A1A, GB::SpacingMark),
        (0x1A1B, 0x1A1B, GB::Extend), (0x1A55, 0x1A55, GB::SpacingMark),
        (0x1A56, 0x1A56, GB::Extend), (0x1A57, 0x1A57, GB::SpacingMark),
        (0x1A58, 0x1A5E, GB::Extend), (0x1A60, 0x1A60, GB::Extend), (0x1A62, 0x1A62, GB::Extend),
        (0x1A65, 0x1A6C, GB::Extend), (0x1A6D, 0x1A72, GB::SpacingMark),
        (0x1A73, 0x1A7C, GB::Extend), (0x1A7F, 0x1A7F, GB::Extend), (0x1AB0, 0x1ACE, GB::Extend),
        (0x1B00, 0x1B03, GB::Extend), (0x1B04, 0x1B04, GB::SpacingMark),
        (0x1B34, 0x1B3A, GB::Extend), (0x1B3B, 0x1B3B, GB::SpacingMark),
        (0x1B3C, 0x1B3C, GB::Extend), (0x1B3D, 0x1B41, GB::SpacingMark),
        (0x1B42, 0x1B42, GB::Extend), (0x1B43, 0x1B44, GB::SpacingMark),
        (0x1B6B, 0x1B73, GB::Extend), (0x1B80, 0x1B81, GB::Extend),
        (0x1B82, 0x1B82, GB::SpacingMark), (0x1BA1, 0x1BA1, GB::SpacingMark),
        (0x1BA2, 0x1BA5, GB::Extend), (0x1BA6, 0x1BA7, GB::SpacingMark),
        (0x1BA8, 0x1BA9, GB::Extend), (0x1BAA, 0x1BAA, GB::SpacingMark),
        (0x1BAB, 0x1BAD, GB::Extend), (0x1BE6, 0x1BE6, GB::Extend),
        (0x1BE7, 0x1BE7, GB::SpacingMark), (0x1BE8, 0x1BE9, GB::Extend),
        (0x1BEA, 0x1BEC, GB::SpacingMark), (0x1BED, 0x1BED, GB::Extend),
        (0x1BEE, 0x1BEE, GB::SpacingMark), (0x1BEF, 0x1BF1, GB::Extend),
        (0x1BF2, 0x1BF3, GB::SpacingMark), (0x1C24, 0x1C2B, GB::SpacingMark),
        (0x1C2C, 0x1C33, GB::Extend), (0x1C34, 0x1C35, GB::SpacingMark),
        (0x1C36, 0x1C37, GB::Extend), (0x1CD0, 0x1CD2, GB::Extend), (0x1CD4, 0x1CE0, GB::Extend),
        (0x1CE1, 0x1CE1, GB::SpacingMark), (0x1CE2, 0x1CE8, GB::Extend),
        (0x1CED, 0x1CED, GB::Extend), (0x1CF4, 0x1CF4, GB::Extend),
        (0x1CF7, 0x1CF7, GB::SpacingMark), (0x1CF8, 0x1CF9, GB::Extend),
        (0x1DC0, 0x1DFF, GB::Extend), (0x200B, 0x200B, GB::Control), (0x200C, 0x200C, GB::Extend),
        (0x200D, 0x200D, GB::ZWJ), (0x200E, 0x200F, GB::Control), (0x2028, 0x202E, GB::Control),
        (0x2060, 0x206F, GB::Control), (0x20D0, 0x20F0, GB::Extend), (0x2CEF, 0x2CF1, GB::Extend),
        (0x2D7F, 0x2D7F, GB::Extend), (0x2DE0, 0x2DFF, GB::Extend), (0x302A, 0x302F, GB::Extend),
        (0x3099, 0x309A, GB::Extend), (0xA66F, 0xA672, GB::Extend), (0xA674, 0xA67D, GB::Extend),
        (0xA69E, 0xA69F, GB::Extend), (0xA6F0, 0xA6F1, GB::Extend), (0xA802, 0xA802, GB::Extend),
        (0xA806, 0xA806, GB::Extend), (0xA80B, 0xA80B, GB::Extend),
        (0xA823, 0xA824, GB::SpacingMark), (0xA825, 0xA826, GB::Extend),
        (0xA827, 0xA827, GB::SpacingMark), (0xA82C, 0xA82C, GB::Extend),
        (0xA880, 0xA881, GB::SpacingMark), (0xA8B4, 0xA8C3, GB::SpacingMark),
        (0xA8C4, 0xA8C5, GB::Extend), (0xA8E0, 0xA8F1, GB::Extend), (0xA8FF, 0xA8FF, GB::Extend),
        (0xA926, 0xA92D, GB::Extend), (0xA947, 0xA951, GB::Extend),
        (0xA952, 0xA953, GB::SpacingMark), (0xA960, 0xA97C, GB::L), (0xA980, 0xA982, GB::Extend),
        (0xA983, 0xA983, GB::SpacingMark), (0xA9B3, 0xA9B3, GB::Extend),
        (0xA9B4, 0xA9B5, GB::SpacingMark), (0xA9B6, 0xA9B9, GB::Extend),
        (0xA9BA, 0xA9BB, GB::SpacingMark), (0xA9BC, 0xA9BD, GB::Extend),
        (0xA9BE, 0xA9C0, GB::SpacingMark), (0xA9E5, 0xA9E5, GB::Extend),
        (0xAA29, 0xAA2E, GB::Extend), (0xAA2F, 0xAA30, GB::SpacingMark),
        (0xAA31, 0xAA32, GB::Extend), (0xAA33, 0xAA34, GB::SpacingMark),
        (0xAA35, 0xAA36, GB::Extend), (0xAA43, 0xAA43, GB::Extend), (0xAA4C, 0xAA4C, GB::Extend),
        (0xAA4D, 0xAA4D, GB::SpacingMark), (0xAA7C, 0xAA7C, GB::Extend),
        (0xAAB0, 0xAAB0, GB::Extend), (0xAAB2, 0xAAB4, GB::Extend), (0xAAB7, 0xAAB8, GB::Extend),
        (0xAABE, 0xAABF, GB::Extend), (0xAAC1, 0xAAC1, GB::Extend),
        (0xAAEB, 0xAAEB, GB::SpacingMark), (0xAAEC, 0xAAED, GB::Extend),
        (0xAAEE, 0xAAEF, GB::SpacingMark), (0xAAF5, 0xAAF5, GB::SpacingMark),
        (0xAAF6, 0xAAF6, GB::Extend), (0xABE3, 0xABE4, GB::SpacingMark),
        (0xABE5, 0xABE5, GB::Extend), (0xABE6, 0xABE7, GB::SpacingMark),
        (0xABE8, 0xABE8, GB::Extend), (0xABE9, 0xABEA, GB::SpacingMark),
        (0xABEC, 0xABEC, GB::SpacingMark), (0xABED, 0xABED, GB::Extend), (0xAC00, 0xAC00, GB::LV),
        (0xAC01, 0xAC1B, GB::LVT), (0xAC1C, 0xAC1C, GB::LV), (0xAC1D, 0xAC37, GB::LVT),
        (0xAC38, 0xAC38, GB::LV), (0xAC39, 0xAC53, GB::LVT), (0xAC54, 0xAC54, GB::LV),
        (0xAC55, 0xAC6F, GB::LVT), (0xAC70, 0xAC70, GB::LV), (0xAC71, 0xAC8B, GB::LVT),
        (0xAC8C, 0xAC8C, GB::LV), (0xAC8D, 0xACA7, GB::LVT), (0xACA8, 0xACA8, GB::LV),
        (0xACA9, 0xACC3, GB::LVT), (0xACC4, 0xACC4, GB::LV), (0xACC5, 0xACDF, GB::LVT),
        (0xACE0, 0xACE0, GB::LV), (0xACE1, 0xACFB, GB::LVT), (0xACFC, 0xACFC, GB::LV),
        (0xACFD, 0xAD17, GB::LVT), (0xAD18, 0xAD18, GB::LV), (0xAD19, 0xAD33, GB::LVT),
        (0xAD34, 0xAD34, GB::LV), (0xAD35, 0xAD4F, GB::LVT), (0xAD50, 0xAD50, GB::LV),
        (0xAD51, 0xAD6B, GB::LVT), (0xAD6C, 0xAD6C, GB::LV), (0xAD6D, 0xAD87, GB::LVT),
        (0xAD88, 0xAD88, GB::LV), (0xAD89, 0xADA3, GB::LVT), (0xADA4, 0xADA4, GB::LV),
        (0xADA5, 0xADBF, GB::LVT), (0xADC0, 0xADC0, GB::LV), (0xADC1, 0xADDB, GB::LVT),
        (0xADDC, 0xADDC, GB::LV), (0xADDD, 0xADF7, GB::LVT), (0xADF8, 0xADF8, GB::LV),
        (0xADF9, 0xAE13, GB::LVT), (0xAE14, 0xAE14, GB::LV), (0xAE15, 0xAE2F, GB::LVT),
        (0xAE30, 0xAE30, GB::LV), (0xAE31, 0xAE4B, GB::LVT), (0xAE4C, 0xAE4C, GB::LV),
        (0xAE4D, 0xAE67, GB::LVT), (0xAE68, 0xAE68, GB::LV), (0xAE69, 0xAE83, GB::LVT),
        (0xAE84, 0xAE84, GB::LV), (0xAE85, 0xAE9F, GB::LVT), (0xAEA0, 0xAEA0, GB::LV),
        (0xAEA1, 0xAEBB, GB::LVT), (0xAEBC, 0xAEBC, GB::LV), (0xAEBD, 0xAED7, GB::LVT),
        (0xAED8, 0xAED8, GB::LV), (0xAED9, 0xAEF3, GB::LVT), (0xAEF4, 0xAEF4, GB::LV),
        (0xAEF5, 0xAF0F, GB::LVT), (0xAF10, 0xAF10, GB::LV), (0xAF11, 0xAF2B, GB::LVT),
        (0xAF2C, 0xAF2C, GB::LV), (0xAF2D, 0xAF47, GB::LVT), (0xAF48, 0xAF48, GB::LV),
        (0xAF49, 0xAF63, GB::LVT), (0xAF64, 0xAF64, GB::LV), (0xAF65, 0xAF7F, GB::LVT),
        (0xAF80, 0xAF80, GB::LV), (0xAF81, 0xAF9B, GB::LVT), (0xAF9C, 0xAF9C, GB::LV),
        (0xAF9D, 0xAFB7, GB::LVT), (0xAFB8, 0xAFB8, GB::LV), (0xAFB9, 0xAFD3, GB::LVT),
        (0xAFD4, 0xAFD4, GB::LV), (0xAFD5, 0xAFEF, GB::LVT), (0xAFF0, 0xAFF0, GB::LV),
        (0xAFF1, 0xB00B, GB::LVT), (0xB00C, 0xB00C, GB::LV), (0xB00D, 0xB027, GB::LVT),
        (0xB028, 0xB028, GB::LV), (0xB029, 0xB043, GB::LVT), (0xB044, 0xB044, GB::LV),
        (0xB045, 0xB05F, GB::LVT), (0xB060, 0xB060, GB::LV), (0xB061, 0xB07B, GB::LVT),
        (0xB07C, 0xB07C, GB::LV), (0xB07D, 0xB097, GB::LVT), (0xB098, 0xB098, GB::LV),
        (0xB099, 0xB0B3, GB::LVT), (0xB0B4, 0xB0B4, GB::LV), (0xB0B5, 0xB0CF, GB::LVT),
        (0xB0D0, 0xB0D0, GB::LV), (0xB0D1, 0xB0EB, GB::LVT), (0xB0EC, 0xB0EC, GB::LV),
        (0xB0ED, 0xB107, GB::LVT), (0xB108, 0xB108, GB::LV), (0xB109, 0xB123, GB::LVT),
        (0xB124, 0xB124, GB::LV), (0xB125, 0xB13F, GB::LVT), (0xB140, 0xB140, GB::LV),
        (0xB141, 0xB15B, GB::LVT), (0xB15C, 0xB15C, GB::LV), (0xB15D, 0xB177, GB::LVT),
        (0xB178, 0xB178, GB::LV), (0xB179, 0xB193, GB::LVT), (0xB194, 0xB194, GB::LV),
        (0xB195, 0xB1AF, GB::LVT), (0xB1B0, 0xB1B0, GB::LV), (0xB1B1, 0xB1CB, GB::LVT),
        (0xB1CC, 0xB1CC, GB::LV), (0xB1CD, 0xB1E7, GB::LVT), (0xB1E8, 0xB1E8, GB::LV),
        (0xB1E9, 0xB203, GB::LVT), (0xB204, 0xB204, GB::LV), (0xB205, 0xB21F, GB::LVT),
        (0xB220, 0xB220, GB::LV), (0xB221, 0xB23B, GB::LVT), (0xB23C, 0xB23C, GB::LV),
        (0xB23D, 0xB257, GB::LVT), (0xB258, 0xB258, GB::LV), (0xB259, 0xB273, GB::LVT),
        (0xB274, 0xB274, GB::LV), (0xB275, 0xB28F, GB::LVT), (0xB290, 0xB290, GB::LV),
        (0xB291, 0xB2AB, GB::LVT), (0xB2AC, 0xB2AC, GB::LV), (0xB2AD, 0xB2C7, GB::LVT),
        (0xB2C8, 0xB2C8, GB::LV), (0xB2C9, 0xB2E3, GB::LVT), (0xB2E4, 0xB2E4, GB::LV),
        (0xB2E5, 0xB2FF, GB::LVT), (0xB300, 0xB300, GB::LV), (0xB301, 0xB31B, GB::LVT),
        (0xB31C, 0xB31C, GB::LV), (0xB31D, 0xB337, GB::LVT), (0xB338, 0xB338, GB::LV),
        (0xB339, 0xB353, GB::LVT), (0xB354, 0xB354, GB::LV), (0xB355, 0xB36F, GB::LVT),
        (0xB370, 0xB370, GB::LV), (0xB371, 0xB38B, GB::LVT), (0xB38C, 0xB38C, GB::LV),
        (0xB38D, 0xB3A7, GB::LVT), (0xB3A8, 0xB3A8, GB::LV), (0xB3A9, 0xB3C3, GB::LVT),
        (0xB3C4, 0xB3C4, GB::LV), (0xB3C5, 0xB3DF, GB::LVT), (0xB3E0, 0xB3E0, GB::LV),
        (0xB3E1, 0xB3FB, GB::LVT), (0xB3FC, 0xB3FC, GB::LV), (0xB3FD, 0xB417, GB::LVT),
        (0xB418, 0xB418, GB::LV), (0xB419, 0xB433, GB::LVT), (0xB434, 0xB434, GB::LV),
        (0xB435, 0xB44F, GB::LVT), (0xB450, 0xB450, GB::LV), (0xB451, 0xB46B, GB::LVT),
        (0xB46C, 0xB46C, GB::LV), (0xB46D, 0xB487, GB::LVT), (0xB488, 0xB488, GB::LV),
        (0xB489, 0xB4A3, GB::LVT), (0xB4A4, 0xB4A4, GB::LV), (0xB4A5, 0xB4BF, GB::LVT),
        (0xB4C0, 0xB4C0, GB::LV), (0xB4C1, 0xB4DB, GB::LVT), (0xB4DC, 0xB4DC, GB::LV),
        (0xB4DD, 0xB4F7, GB::LVT), (0xB4F8, 0xB4F8, GB::LV), (0xB4F9, 0xB513, GB::LVT),
        (0xB514, 0xB514, GB::LV), (0xB515, 0xB52F, GB::LVT), (0xB530, 0xB530, GB::LV),
        (0xB531, 0xB54B, GB::LVT), (0xB54C, 0xB54C, GB::LV), (0xB54D, 0xB567, GB::LVT),
        (0xB568, 0xB568, GB::LV), (0xB569, 0xB583, GB::LVT), (0xB584, 0xB584, GB::LV),
        (0xB585, 0xB59F, GB::LVT), (0xB5A0, 0xB5A0, GB::LV), (0xB5A1, 0xB5BB, GB::LVT),
        (0xB5BC, 0xB5BC, GB::LV), (0xB5BD, 0xB5D7, GB::LVT), (0xB5D8, 0xB5D8, GB::LV),
        (0xB5D9, 0xB5F3, GB::LVT), (0xB5F4, 0xB5F4, GB::LV), (0xB5F5, 0xB60F, GB::LVT),
        (0xB610, 0xB610, GB::LV), (0xB611, 0xB62B, GB::LVT), (0xB62C, 0xB62C, GB::LV),
        (0xB62D, 0xB647, GB::LVT), (0xB648, 0xB648, GB::LV), (0xB649, 0xB663, GB::LVT),
        (0xB664, 0xB664, GB::LV), (0xB665, 0xB67F, GB::LVT), (0xB680, 0xB680, GB::LV),
        (0xB681, 0xB69B, GB::LVT), (0xB69C, 0xB69C, GB::LV), (0xB69D, 0xB6B7, GB::LVT),
        (0xB6B8, 0xB6B8, GB::LV), (0xB6B9, 0xB6D3, GB::LVT), (0xB6D4, 0xB6D4, GB::LV),
        (0xB6D5, 0xB6EF, GB::LVT), (0xB6F0, 0xB6F0, GB::LV), (0xB6F1, 0xB70B, GB::LVT),
        (0xB70C, 0xB70C, GB::LV), (0xB70D, 0xB727, GB::LVT), (0xB728, 0xB728, GB::LV),
        (0xB729, 0xB743, GB::LVT), (0xB744, 0xB744, GB::LV), (0xB745, 0xB75F, GB::LVT),
        (0xB760, 0xB760, GB::LV), (0xB761, 0xB77B, GB::LVT), (0xB77C, 0xB77C, GB::LV),
        (0xB77D, 0xB797, GB::LVT), (0xB798, 0xB798, GB::LV), (0xB799, 0xB7B3, GB::LVT),
        (0xB7B4, 0xB7B4, GB::LV), (0xB7B5, 0xB7CF, GB::LVT), (0xB7D0, 0xB7D0, GB::LV),
        (0xB7D1, 0xB7EB, GB::LVT), (0xB7EC, 0xB7EC, GB::LV), (0xB7ED, 0xB807, GB::LVT),
        (0xB808, 0xB808, GB::LV), (0xB809, 0xB823, GB::LVT), (0xB824, 0xB824, GB::LV),
        (0xB825, 0xB83F, GB::LVT), (0xB840, 0xB840, GB::LV), (0xB841, 0xB85B, GB::LVT),
        (0xB85C, 0xB85C, GB::LV), (0xB85D, 0xB877, GB::LVT), (0xB878, 0xB878, GB::LV),
        (0xB879, 0xB893, GB::LVT), (0xB894, 0xB894, GB::LV), (0xB895, 0xB8AF, GB::LVT),
        (0xB8B0, 0xB8B0, GB::LV), (0xB8B1, 0xB8CB, GB::LVT), (0xB8CC, 0xB8CC, GB::LV),
        (0xB8CD, 0xB8E7, GB::LVT), (0xB8E8, 0xB8E8, GB::LV), (0xB8E9, 0xB903, GB::LVT),
        (0xB904, 0xB904, GB::LV), (0xB905, 0xB91F, GB::LVT), (0xB920, 0xB920, GB::LV),
        (0xB921, 0xB93B, GB::LVT), (0xB93C, 0xB93C, GB::LV), (0xB93D, 0xB957, GB::LVT),
        (0xB958, 0xB958, GB::LV), (0xB959, 0xB973, GB::LVT), (0xB974, 0xB974, GB::LV),
        (0xB975, 0xB98F, GB::LVT), (0xB990, 0xB990, GB::LV), (0xB991, 0xB9AB, GB::LVT),
        (0xB9AC, 0xB9AC, GB::LV), (0xB9AD, 0xB9C7, GB::LVT), (0xB9C8, 0xB9C8, GB::LV),
        (0xB9C9, 0xB9E3, GB::LVT), (0xB9E4, 0xB9E4, GB::LV), (0xB9E5, 0xB9FF, GB::LVT),
        (0xBA00, 0xBA00, GB::LV), (0xBA01, 0xBA1B, GB::LVT), (0xBA1C, 0xBA1C, GB::LV),
        (0xBA1D, 0xBA37, GB::LVT), (0xBA38, 0xBA38, GB::LV), (0xBA39, 0xBA53, GB::LVT),
        (0xBA54, 0xBA54, GB::LV), (0xBA55, 0xBA6F, GB::LVT), (0xBA70, 0xBA70, GB::LV),
        (0xBA71, 0xBA8B, GB::LVT), (0xBA8C, 0xBA8C, GB::LV), (0xBA8D, 0xBAA7, GB::LVT),
        (0xBAA8, 0xBAA8, GB::LV), (0xBAA9, 0xBAC3, GB::LVT), (0xBAC4, 0xBAC4, GB::LV),
        (0xBAC5, 0xBADF, GB::LVT), (0xBAE0, 0xBAE0, GB::LV), (0xBAE1, 0xBAFB, GB::LVT),
        (0xBAFC, 0xBAFC, GB::LV), (0xBAFD, 0xBB17, GB::LVT), (0xBB18, 0xBB18, GB::LV),
        (0xBB19, 0xBB33, GB::LVT), (0xBB34, 0xBB34, GB::LV), (0xBB35, 0xBB4F, GB::LVT),
        (0xBB50, 0xBB50, GB::LV), (0xBB51, 0xBB6B, GB::LVT), (0xBB6C, 0xBB6C, GB::LV),
        (0xBB6D, 0xBB87, GB::LVT), (0xBB88, 0xBB88, GB::LV), (0xBB89, 0xBBA3, GB::LVT),
        (0xBBA4, 0xBBA4, GB::LV), (0xBBA5, 0xBBBF, GB::LVT), (0xBBC0, 0xBBC0, GB::LV),
        (0xBBC1, 0xBBDB, GB::LVT), (0xBBDC, 0xBBDC, GB::LV), (0xBBDD, 0xBBF7, GB::LVT),
        (0xBBF8, 0xBBF8, GB::LV), (0xBBF9, 0xBC13, GB::LVT), (0xBC14, 0xBC14, GB::LV),
        (0xBC15, 0xBC2F, GB::LVT), (0xBC30, 0xBC30, GB::LV), (0xBC31, 0xBC4B, GB::LVT),
        (0xBC4C, 0xBC4C, GB::LV), (0xBC4D, 0xBC67, GB::LVT), (0xBC68, 0xBC68, GB::LV),
        (0xBC69, 0xBC83, GB::LVT), (0xBC84, 0xBC84, GB::LV), (0xBC85, 0xBC9F, GB::LVT),
        (0xBCA0, 0xBCA0, GB::LV), (0xBCA1, 0xBCBB, GB::LVT), (0xBCBC, 0xBCBC, GB::LV),
        (0xBCBD, 0xBCD7, GB::LVT), (0xBCD8, 0xBCD8, GB::LV), (0xBCD9, 0xBCF3, GB::LVT),
        (0xBCF4, 0xBCF4, GB::LV), (0xBCF5, 0xBD0F, GB::LVT), (0xBD10, 0xBD10, GB::LV),
        (0xBD11, 0xBD2B, GB::LVT), (0xBD2C, 0xBD2C, GB::LV), (0xBD2D, 0xBD47, GB::LVT),
        (0xBD48, 0xBD48, GB::LV), (0xBD49, 0xBD63, GB::LVT), (0xBD64, 0xBD64, GB::LV),
        (0xBD65, 0xBD7F, GB::LVT), (0xBD80, 0xBD80, GB::LV), (0xBD81, 0xBD9B, GB::LVT),
        (0xBD9C, 0xBD9C, GB::LV), (0xBD9D, 0xBDB7, GB::LVT), (0xBDB8, 0xBDB8, GB::LV),
        (0xBDB9, 0xBDD3, GB::LVT), (0xBDD4, 0xBDD4, GB::LV), (0xBDD5, 0xBDEF, GB::LVT),
        (0xBDF0, 0xBDF0, GB::LV), (0xBDF1, 0xBE0B, GB::LVT), (0xBE0C, 0xBE0C, GB::LV),
        (0xBE0D, 0xBE27, GB::LVT), (0xBE28, 0xBE28, GB::LV), (0xBE29, 0xBE43, GB::LVT),
        (0xBE44, 0xBE44, GB::LV), (0xBE45, 0xBE5F, GB::LVT), (0xBE60, 0xBE60, GB::LV),
        (0xBE61, 0xBE7B, GB::LVT), (0xBE7C, 0xBE7C, GB::LV), (0xBE7D, 0xBE97, GB::LVT),
        (0xBE98, 0xBE98, GB::LV), (0xBE99, 0xBEB3, GB::LVT), (0xBEB4, 0xBEB4, GB::LV),
        (0xBEB5, 0xBECF, GB::LVT), (0xBED0, 0xBED0, GB::LV), (0xBED1, 0xBEEB, GB::LVT),
        (0xBEEC, 0xBEEC, GB::LV), (0xBEED, 0xBF07, GB::LVT), (0xBF08, 0xBF08, GB::LV),
        (0xBF09, 0xBF23, GB::LVT), (0xBF24, 0xBF24, GB::LV), (0xBF25, 0xBF3F, GB::LVT),
        (0xBF40, 0xBF40, GB::LV), (0xBF41, 0xBF5B, GB::LVT), (0xBF5C, 0xBF5C, GB::LV),
        (0xBF5D, 0xBF77, GB::LVT), (0xBF78, 0xBF78, GB::LV), (0xBF79, 0xBF93, GB::LVT),
        (0xBF94, 0xBF94, GB::LV), (0xBF95, 0xBFAF, GB::LVT), (0xBFB0, 0xBFB0, GB::LV),
        (0xBFB1, 0xBFCB, GB::LVT), (0xBFCC, 0xBFCC, GB::LV), (0xBFCD, 0xBFE7, GB::LVT),
        (0xBFE8, 0xBFE8, GB::LV), (0xBFE9, 0xC003, GB::LVT), (0xC004, 0xC004, GB::LV),
        (0xC005, 0xC01F, GB::LVT), (0xC020, 0xC020, GB::LV), (0xC021, 0xC03B, GB::LVT),
        (0xC03C, 0xC03C, GB::LV), (0xC03D, 0xC057, GB::LVT), (0xC058, 0xC058, GB::LV),
        (0xC059, 0xC073, GB::LVT), (0xC074, 0xC074, GB::LV), (0xC075, 0xC08F, GB::LVT),
        (0xC090, 0xC090, GB::LV), (0xC091, 0xC0AB, GB::LVT), (0xC0AC, 0xC0AC, GB::LV),
        (0xC0AD, 0xC0C7, GB::LVT), (0xC0C8, 0xC0C8, GB::LV), (0xC0C9, 0xC0E3, GB::LVT),
        (0xC0E4, 0xC0E4, GB::LV), (0xC0E5, 0xC0FF, GB::LVT), (0xC100, 0xC100, GB::LV),
        (0xC101, 0xC11B, GB::LVT), (0xC11C, 0xC11C, GB::LV), (0xC11D, 0xC137, GB::LVT),
        (0xC138, 0xC138, GB::LV), (0xC139, 0xC153, GB::LVT), (0xC154, 0xC154, GB::LV),
        (0xC155, 0xC16F, GB::LVT), (0xC170, 0xC170, GB::LV), (0xC171, 0xC18B, GB::LVT),
        (0xC18C, 0xC18C, GB::LV), (0xC18D, 0xC1A7, GB::LVT), (0xC1A8, 0xC1A8, GB::LV),
        (0xC1A9, 0xC1C3, GB::LVT), (0xC1C4, 0xC1C4, GB::LV), (0xC1C5, 0xC1DF, GB::LVT),
        (0xC1E0, 0xC1E0, GB::LV), (0xC1E1, 0xC1FB, GB::LVT), (0xC1FC, 0xC1FC, GB::LV),
        (0xC1FD, 0xC217, GB::LVT), (0xC218, 0xC218, GB::LV), (0xC219, 0xC233, GB::LVT),
        (0xC234, 0xC234, GB::LV), (0xC235, 0xC24F, GB::LVT), (0xC250, 0xC250, GB::LV),
        (0xC251, 0xC26B, GB::LVT), (0xC26C, 0xC26C, GB::LV), (0xC26D, 0xC287, GB::LVT),
        (0xC288, 0xC288, GB::LV), (0xC289, 0xC2A3, GB::LVT), (0xC2A4, 0xC2A4, GB::LV),
        (0xC2A5, 0xC2BF, GB::LVT), (0xC2C0, 0xC2C0, GB::LV), (0xC2C1, 0xC2DB, GB::LVT),
        (0xC2DC, 0xC2DC, GB::LV), (0xC2DD, 0xC2F7, GB::LVT), (0xC2F8, 0xC2F8, GB::LV),
        (0xC2F9, 0xC313, GB::LVT), (0xC314, 0xC314, GB::LV), (0xC315, 0xC32F, GB::LVT),
        (0xC330, 0xC330, GB::LV), (0xC331, 0xC34B, GB::LVT), (0xC34C, 0xC34C, GB::LV),
        (0xC34D, 0xC367, GB::LVT), (0xC368, 0xC368, GB::LV), (0xC369, 0xC383, GB::LVT),
        (0xC384, 0xC384, GB::LV), (0xC385, 0xC39F, GB::LVT), (0xC3A0, 0xC3A0, GB::LV),
        (0xC3A1, 0xC3BB, GB::LVT), (0xC3BC, 0xC3BC, GB::LV), (0xC3BD, 0xC3D7, GB::LVT),
        (0xC3D8, 0xC3D8, GB::LV), (0xC3D9, 0xC3F3, GB::LVT), (0xC3F4, 0xC3F4, GB::LV),
        (0xC3F5, 0xC40F, GB::LVT), (0xC410, 0xC410, GB::LV), (0xC411, 0xC42B, GB::LVT),
        (0xC42C, 0xC42C, GB::LV), (0xC42D, 0xC447, GB::LVT), (0xC448, 0xC448, GB::LV),
        (0xC449, 0xC463, GB::LVT), (0xC464, 0xC464, GB::LV), (0xC465, 0xC47F, GB::LVT),
        (0xC480, 0xC480, GB::LV), (0xC481, 0xC49B, GB::LVT), (0xC49C, 0xC49C, GB::LV),
        (0xC49D, 0xC4B7, GB::LVT), (0xC4B8, 0xC4B8, GB::LV), (0xC4B9, 0xC4D3, GB::LVT),
        (0xC4D4, 0xC4D4, GB::LV), (0xC4D5, 0xC4EF, GB::LVT), (0xC4F0, 0xC4F0, GB::LV),
        (0xC4F1, 0xC50B, GB::LVT), (0xC50C, 0xC50C, GB::LV), (0xC50D, 0xC527, GB::LVT),
        (0xC528, 0xC528, GB::LV), (0xC529, 0xC543, GB::LVT), (0xC544, 0xC544, GB::LV),
        (0xC545, 0xC55F, GB::LVT), (0xC560, 0xC560, GB::LV), (0xC561, 0xC57B, GB::LVT),
        (0xC57C, 0xC57C, GB::LV), (0xC57D, 0xC597, GB::LVT), (0xC598, 0xC598, GB::LV),
        (0xC599, 0xC5B3, GB::LVT), (0xC5B4, 0xC5B4, GB::LV), (0xC5B5, 0xC5CF, GB::LVT),
        (0xC5D0, 0xC5D0, GB::LV), (0xC5D1, 0xC5EB, GB::LVT), (0xC5EC, 0xC5EC, GB::LV),
        (0xC5ED, 0xC607, GB::LVT), (0xC608, 0xC608, GB::LV), (0xC609, 0xC623, GB::LVT),
        (0xC624, 0xC624, GB::LV), (0xC625, 0xC63F, GB::LVT), (0xC640, 0xC640, GB::LV),
        (0xC641, 0xC65B, GB::LVT), (0xC65C, 0xC65C, GB::LV), (0xC65D, 0xC677, GB::LVT),
        (0xC678, 0xC678, GB::LV), (0xC679, 0xC693, GB::LVT), (0xC694, 0xC694, GB::LV),
        (0xC695, 0xC6AF, GB::LVT), (0xC6B0, 0xC6B0, GB::LV), (0xC6B1, 0xC6CB, GB::LVT),
        (0xC6CC, 0xC6CC, GB::LV), (0xC6CD, 0xC6E7, GB::LVT), (0xC6E8, 0xC6E8, GB::LV),
        (0xC6E9, 0xC703, GB::LVT), (0xC704, 0xC704, GB::LV), (0xC705, 0xC71F, GB::LVT),
        (0xC720, 0xC720, GB::LV), (0xC721, 0xC73B, GB::LVT), (0xC73C, 0xC73C, GB::LV),
        (0xC73D, 0xC757, GB::LVT), (0xC758, 0xC758, GB::LV), (0xC759, 0xC773, GB::LVT),
        (0xC774, 0xC774, GB::LV), (0xC775, 0xC78F, GB::LVT), (0xC790, 0xC790, GB::LV),
        (0xC791, 0xC7AB, GB::LVT), (0xC7AC, 0xC7AC, GB::LV), (0xC7AD, 0xC7C7, GB::LVT),
        (0xC7C8, 0xC7C8, GB::LV), (0xC7C9, 0xC7E3, GB::LVT), (0xC7E4, 0xC7E4, GB::LV),
        (0xC7E5, 0xC7FF, GB::LVT), (0xC800, 0xC800, GB::LV), (0xC801, 0xC81B, GB::LVT),
        (0xC81C, 0xC81C, GB::LV), (0xC81D, 0xC837, GB::LVT), (0xC838, 0xC838, GB::LV),
        (0xC839, 0xC853, GB::LVT), (0xC854, 0xC854, GB::LV), (0xC855, 0xC86F, GB::LVT),
        (0xC870, 0xC870, GB::LV), (0xC871, 0xC88B, GB::LVT), (0xC88C, 0xC88C, GB::LV),
        (0xC88D, 0xC8A7, GB::LVT), (0xC8A8, 0xC8A8, GB::LV), (0xC8A9, 0xC8C3, GB::LVT),
        (0xC8C4, 0xC8C4, GB::LV), (0xC8C5, 0xC8DF, GB::LVT), (0xC8E0, 0xC8E0, GB::LV),
        (0xC8E1, 0xC8FB, GB::LVT), (0xC8FC, 0xC8FC, GB::LV), (0xC8FD, 0xC917, GB::LVT),
        (0xC918, 0xC918, GB::LV), (0xC919, 0xC933, GB::LVT), (0xC934, 0xC934, GB::LV),
        (0xC935, 0xC94F, GB::LVT), (0xC950, 0xC950, GB::LV), (0xC951, 0xC96B, GB::LVT),
        (0xC96C, 0xC96C, GB::LV), (0xC96D, 0xC987, GB::LVT), (0xC988, 0xC988, GB::LV),
        (0xC989, 0xC9A3, GB::LVT), (0xC9A4, 0xC9A4, GB::LV), (0xC9A5, 0xC9BF, GB::LVT),
        (0xC9C0, 0xC9C0, GB::LV), (0xC9C1, 0xC9DB, GB::LVT), (0xC9DC, 0xC9DC, GB::LV),
        (0xC9DD, 0xC9F7, GB::LVT), (0xC9F8, 0xC9F8, GB::LV), (0xC9F9, 0xCA13, GB::LVT),
        (0xCA14, 0xCA14, GB::LV), (0xCA15, 0xCA2F, GB::LVT), (0xCA30, 0xCA30, GB::LV),
        (0xCA31, 0xCA4B, GB::LVT), (0xCA4C, 0xCA4C, GB::LV), (0xCA4D, 0xCA67, GB::LVT),
        (0xCA68, 0xCA68, GB::LV), (0xCA69, 0xCA83, GB::LVT), (0xCA84, 0xCA84, GB::LV),
        (0xCA85, 0xCA9F, GB::LVT), (0xCAA0, 0xCAA0, GB::LV), (0xCAA1, 0xCABB, GB::LVT),
        (0xCABC, 0xCABC, GB::LV), (0xCABD, 0xCAD7, GB::LVT), (0xCAD8, 0xCAD8, GB::LV),
        (0xCAD9, 0xCAF3, GB::LVT), (0xCAF4, 0xCAF4, GB::LV), (0xCAF5, 0xCB0F, GB::LVT),
        (0xCB10, 0xCB10, GB::LV), (0xCB11, 0xCB2B, GB::LVT), (0xCB2C, 0xCB2C, GB::LV),
        (0xCB2D, 0xCB47, GB::LVT), (0xCB48, 0xCB48, GB::LV), (0xCB49, 0xCB63, GB::LVT),
        (0xCB64, 0xCB64, GB::LV), (0xCB65, 0xCB7F, GB::LVT), (0xCB80, 0xCB80, GB::LV),
        (0xCB81, 0xCB9B, GB::LVT), (0xCB9C, 0xCB9C, GB::LV), (0xCB9D, 0xCBB7, GB::LVT),
        (0xCBB8, 0xCBB8, GB::LV), (0xCBB9, 0xCBD3, GB::LVT), (0xCBD4, 0xCBD4, GB::LV),
        (0xCBD5, 0xCBEF, GB::LVT), (0xCBF0, 0xCBF0, GB::LV), (0xCBF1, 0xCC0B, GB::LVT),
        (0xCC0C, 0xCC0C, GB::LV), (0xCC0D, 0xCC27, GB::LVT), (0xCC28, 0xCC28, GB::LV),
        (0xCC29, 0xCC43, GB::LVT), (0xCC44, 0xCC44, GB::LV), (0xCC45, 0xCC5F, GB::LVT),
        (0xCC60, 0xCC60, GB::LV), (0xCC61, 0xCC7B, GB::LVT), (0xCC7C, 0xCC7C, GB::LV),
        (0xCC7D, 0xCC97, GB::LVT), (0xCC98, 0xCC98, GB::LV), (0xCC99, 0xCCB3, GB::LVT),
        (0xCCB4, 0xCCB4, GB::LV), (0xCCB5, 0xCCCF, GB::LVT), (0xCCD0, 0xCCD0, GB::LV),
        (0xCCD1, 0xCCEB, GB::LVT), (0xCCEC, 0xCCEC, GB::LV), (0xCCED, 0xCD07, GB::LVT),
        (0xCD08, 0xCD08, GB::LV), (0xCD09, 0xCD23, GB::LVT), (0xCD24, 0xCD24, GB::LV),
        (0xCD25, 0xCD3F, GB::LVT), (0xCD40, 0xCD40, GB::LV), (0xCD41, 0xCD5B, GB::LVT),
        (0xCD5C, 0xCD5C, GB::LV), (0xCD5D, 0xCD77, GB::LVT), (0xCD78, 0xCD78, GB::LV),
        (0xCD79, 0xCD93, GB::LVT), (0xCD94, 0xCD94, GB::LV), (0xCD95, 0xCDAF, GB::LVT),
        (0xCDB0, 0xCDB0, GB::LV), (0xCDB1, 0xCDCB, GB::LVT), (0xCDCC, 0xCDCC, GB::LV),
        (0xCDCD, 0xCDE7, GB::LVT), (0xCDE8, 0xCDE8, GB::LV), (0xCDE9, 0xCE03, GB::LVT),
        (0xCE04, 0xCE04, GB::LV), (0xCE05, 0xCE1F, GB::LVT), (0xCE20, 0xCE20, GB::LV),
        (0xCE21, 0xCE3B, GB::LVT), (0xCE3C, 0xCE3C, GB::LV), (0xCE3D, 0xCE57, GB::LVT),
        (0xCE58, 0xCE58, GB::LV), (0xCE59, 0xCE73, GB::LVT), (0xCE74, 0xCE74, GB::LV),
        (0xCE75, 0xCE8F, GB::LVT), (0xCE90, 0xCE90, GB::LV), (0xCE91, 0xCEAB, GB::LVT),
        (0xCEAC, 0xCEAC, GB::LV), (0xCEAD, 0xCEC7, GB::LVT), (0xCEC8, 0xCEC8, GB::LV),
        (0xCEC9, 0xCEE3, GB::LVT), (0xCEE4, 0xCEE4, GB::LV), (0xCEE5, 0xCEFF, GB::LVT),
        (0xCF00, 0xCF00, GB::LV), (0xCF01, 0xCF1B, GB::LVT), (0xCF1C, 0xCF1C, GB::LV),
        (0xCF1D, 0xCF37, GB::LVT), (0xCF38, 0xCF38, GB::LV), (0xCF39, 0xCF53, GB::LVT),
        (0xCF54, 0xCF54, GB::LV), (0xCF55, 0xCF6F, GB::LVT), (0xCF70, 0xCF70, GB::LV),
        (0xCF71, 0xCF8B, GB::LVT), (0xCF8C, 0xCF8C, GB::LV), (0xCF8D, 0xCFA7, GB::LVT),
        (0xCFA8, 0xCFA8, GB::LV), (0xCFA9, 0xCFC3, GB::LVT), (0xCFC4, 0xCFC4, GB::LV),
        (0xCFC5, 0xCFDF, GB::LVT), (0xCFE0, 0xCFE0, GB::LV), (0xCFE1, 0xCFFB, GB::LVT),
        (0xCFFC, 0xCFFC, GB::LV), (0xCFFD, 0xD017, GB::LVT), (0xD018, 0xD018, GB::LV),
        (0xD019, 0xD033, GB::LVT), (0xD034, 0xD034, GB::LV), (0xD035, 0xD04F, GB::LVT),
        (0xD050, 0xD050, GB::LV), (0xD051, 0xD06B, GB::LVT), (0xD06C, 0xD06C, GB::LV),
        (0xD06D, 0xD087, GB::LVT), (0xD088, 0xD088, GB::LV), (0xD089, 0xD0A3, GB::LVT),
        (0xD0A4, 0xD0A4, GB::LV), (0xD0A5, 0xD0BF, GB::LVT), (0xD0C0, 0xD0C0, GB::LV),
        (0xD0C1, 0xD0DB, GB::LVT), (0xD0DC, 0xD0DC, GB::LV), (0xD0DD, 0xD0F7, GB::LVT),
        (0xD0F8, 0xD0F8, GB::LV), (0xD0F9, 0xD113, GB::LVT), (0xD114, 0xD114, GB::LV),
        (0xD115, 0xD12F, GB::LVT), (0xD130, 0xD130, GB::LV), (0xD131, 0xD14B, GB::LVT),
        (0xD14C, 0xD14C, GB::LV), (0xD14D, 0xD167, GB::LVT), (0xD168, 0xD168, GB::LV),
        (0xD169, 0xD183, GB::LVT), (0xD184, 0xD184, GB::LV), (0xD185, 0xD19F, GB::LVT),
        (0xD1A0, 0xD1A0, GB::LV), (0xD1A1, 0xD1BB, GB::LVT), (0xD1BC, 0xD1BC, GB::LV),
        (0xD1BD, 0xD1D7, GB::LVT), (0xD1D8, 0xD1D8, GB::LV), (0xD1D9, 0xD1F3, GB::LVT),
        (0xD1F4, 0xD1F4, GB::LV), (0xD1F5, 0xD20F, GB::LVT), (0xD210, 0xD210, GB::LV),
        (0xD211, 0xD22B, GB::LVT), (0xD22C, 0xD22C, GB::LV), (0xD22D, 0xD247, GB::LVT),
        (0xD248, 0xD248, GB::LV), (0xD249, 0xD263, GB::LVT), (0xD264, 0xD264, GB::LV),
        (0xD265, 0xD27F, GB::LVT), (0xD280, 0xD280, GB::LV), (0xD281, 0xD29B, GB::LVT),
        (0xD29C, 0xD29C, GB::LV), (0xD29D, 0xD2B7, GB::LVT), (0xD2B8, 0xD2B8, GB::LV),
        (0xD2B9, 0xD2D3, GB::LVT), (0xD2D4, 0xD2D4, GB::LV), (0xD2D5, 0xD2EF, GB::LVT),
        (0xD2F0, 0xD2F0, GB::LV), (0xD2F1, 0xD30B, GB::LVT), (0xD30C, 0xD30C, GB::LV),
        (0xD30D, 0xD327, GB::LVT), (0xD328, 0xD328, GB::LV), (0xD329, 0xD343, GB::LVT),
        (0xD344, 0xD344, GB::LV), (0xD345, 0xD35F, GB::LVT), (0xD360, 0xD360, GB::LV),
        (0xD361, 0xD37B, GB::LVT), (0xD37C, 0xD37C, GB::LV), (0xD37D, 0xD397, GB::LVT),
        (0xD398, 0xD398, GB::LV), (0xD399, 0xD3B3, GB::LVT), (0xD3B4, 0xD3B4, GB::LV),
        (0xD3B5, 0xD3CF, GB::LVT), (0xD3D0, 0xD3D0, GB::LV), (0xD3D1, 0xD3EB, GB::LVT),
        (0xD3EC, 0xD3EC, GB::LV), (0xD3ED, 0xD407, GB::LVT), (0xD408, 0xD408, GB::LV),
        (0xD409, 0xD423, GB::LVT), (0xD424, 0xD424, GB::LV), (0xD425, 0xD43F, GB::LVT),
        (0xD440, 0xD440, GB::LV), (0xD441, 0xD45B, GB::LVT), (0xD45C, 0xD45C, GB::LV),
        (0xD45D, 0xD477, GB::LVT), (0xD478, 0xD478, GB::LV), (0xD479, 0xD493, GB::LVT),
        (0xD494, 0xD494, GB::LV), (0xD495, 0xD4AF, GB::LVT), (0xD4B0, 0xD4B0, GB::LV),
        (0xD4B1, 0xD4CB, GB::LVT), (0xD4CC, 0xD4CC, GB::LV), (0xD4CD, 0xD4E7, GB::LVT),
        (0xD4E8, 0xD4E8, GB::LV), (0xD4E9, 0xD503, GB::LVT), (0xD504, 0xD504, GB::LV),
        (0xD505, 0xD51F, GB::LVT), (0xD520, 0xD520, GB::LV), (0xD521, 0xD53B, GB::LVT),
        (0xD53C, 0xD53C, GB::LV), (0xD53D, 0xD557, GB::LVT), (0xD558, 0xD558, GB::LV),
        (0xD559, 0xD573, GB::LVT), (0xD574, 0xD574, GB::LV), (0xD575, 0xD58F, GB::LVT),
        (0xD590, 0xD590, GB::LV), (0xD591, 0xD5AB, GB::LVT), (0xD5AC, 0xD5AC, GB::LV),
        (0xD5AD, 0xD5C7, GB::LVT), (0xD5C8, 0xD5C8, GB::LV), (0xD5C9, 0xD5E3, GB::LVT),
        (0xD5E4, 0xD5E4, GB::LV), (0xD5E5, 0xD5FF, GB::LVT), (0xD600, 0xD600, GB::LV),
        (0xD601, 0xD61B, GB::LVT), (0xD61C, 0xD61C, GB::LV), (0xD61D, 0xD637, GB::LVT),
        (0xD638, 0xD638, GB::LV), (0xD639, 0xD653, GB::LVT), (0xD654, 0xD654, GB::LV),
        (0xD655, 0xD66F, GB::LVT), (0xD670, 0xD670, GB::LV), (0xD671, 0xD68B, GB::LVT),
        (0xD68C, 0xD68C, GB::LV), (0xD68D, 0xD6A7, GB::LVT), (0xD6A8, 0xD6A8, GB::LV),
        (0xD6A9, 0xD6C3, GB::LVT), (0xD6C4, 0xD6C4, GB::LV), (0xD6C5, 0xD6DF, GB::LVT),
        (0xD6E0, 0xD6E0, GB::LV), (0xD6E1, 0xD6FB, GB::LVT), (0xD6FC, 0xD6FC, GB::LV),
        (0xD6FD, 0xD717, GB::LVT), (0xD718, 0xD718, GB::LV), (0xD719, 0xD733, GB::LVT),
        (0xD734, 0xD734, GB::LV), (0xD735, 0xD74F, GB::LVT), (0xD750, 0xD750, GB::LV),
        (0xD751, 0xD76B, GB::LVT), (0xD76C, 0xD76C, GB::LV), (0xD76D, 0xD787, GB::LVT),
        (0xD788, 0xD788, GB::LV), (0xD789, 0xD7A3, GB::LVT), (0xD7B0, 0xD7C6, GB::V),
        (0xD7CB, 0xD7FB, GB::T), (0xFB1E, 0xFB1E, GB::Extend), (0xFE00, 0xFE0F, GB::Extend),
        (0xFE20, 0xFE2F, GB::Extend), (0xFEFF, 0xFEFF, GB::Control), (0xFF9E, 0xFF9F, GB::Extend),
        (0xFFF0, 0xFFFB, GB::Control), (0x101FD, 0x101FD, GB::Extend),
        (0x102E0, 0x102E0, GB::Extend), (0x10376, 0x1037A, GB::Extend),
        (0x10A01, 0x10A03, GB::Extend), (0x10A05, 0x10A06, GB::Extend),
        (0x10A0C, 0x10A0F, GB::Extend), (0x10A38, 0x10A3A, GB::Extend),
        (0x10A3F, 0x10A3F, GB::Extend), (0x10AE5, 0x10AE6, GB::Extend),
        (0x10D24, 0x10D27, GB::Extend), (0x10EAB, 0x10EAC, GB::Extend),
        (0x10F46, 0x10F50, GB::Extend), (0x10F82, 0x10F85, GB::Extend),
        (0x11000, 0x11000, GB::SpacingMark), (0x11001, 0x11001, GB::Extend),
        (0x11002, 0x11002, GB::SpacingMark), (0x11038, 0x11046, GB::Extend),
        (0x11070, 0x11070, GB::Extend), (0x11073, 0x11074, GB::Extend),
        (0x1107F, 0x11081, GB::Extend), (0x11082, 0x11082, GB::SpacingMark),
        (0x110B0, 0x110B2, GB::SpacingMark), (0x110B3, 0x110B6, GB::Extend),
        (0x110B7, 0x110B8, GB::SpacingMark), (0x110B9, 0x110BA, GB::Extend),
        (0x110BD, 0x110BD, GB::Prepend), (0x110C2, 0x110C2, GB::Extend),
        (0x110CD, 0x110CD, GB::Prepend), (0x11100, 0x11102, GB::Extend),
        (0x11127, 0x1112B, GB::Extend), (0x1112C, 0x1112C, GB::SpacingMark),
        (0x1112D, 0x11134, GB::Extend), (0x11145, 0x11146, GB::SpacingMark),
        (0x11173, 0x11173, GB::Extend), (0x11180, 0x11181, GB::Extend),
        (0x11182, 0x11182, GB::SpacingMark), (0x111B3, 0x111B5, GB::SpacingMark),
        (0x111B6, 0x111BE, GB::Extend), (0x111BF, 0x111C0, GB::SpacingMark),
        (0x111C2, 0x111C3, GB::Prepend), (0x111C9, 0x111CC, GB::Extend),
        (0x111CE, 0x111CE, GB::SpacingMark), (0x111CF, 0x111CF, GB::Extend),
        (0x1122C, 0x1122E, GB::SpacingMark), (0x1122F, 0x11231, GB::Extend),
        (0x11232, 0x11233, GB::SpacingMark), (0x11234, 0x11234, GB::Extend),
        (0x11235, 0x11235, GB::SpacingMark), (0x11236, 0x11237, GB::Extend),
        (0x1123E, 0x1123E, GB::Extend), (0x112DF, 0x112DF, GB::Extend),
        (0x112E0, 0x112E2, GB::SpacingMark), (0x112E3, 0x112EA, GB::Extend),
        (0x11300, 0x11301, GB::Extend), (0x11302, 0x11303, GB::SpacingMark),
        (0x1133B, 0x1133C, GB::Extend), (0x1133E, 0x1133E, GB::Extend),
        (0x1133F, 0x1133F, GB::SpacingMark), (0x11340, 0x11340, GB::Extend),
        (0x11341, 0x11344, GB::SpacingMark), (0x11347, 0x11348, GB::SpacingMark),
        (0x1134B, 0x1134D, GB::SpacingMark), (0x11357, 0x11357, GB::Extend),
        (0x11362, 0x11363, GB::SpacingMark), (0x11366, 0x1136C, GB::Extend),
        (0x11370, 0x11374, GB::Extend), (0x11435, 0x11437, GB::SpacingMark),
        (0x11438, 0x1143F, GB::Extend), (0x11440, 0x11441, GB::SpacingMark),
        (0x11442, 0x11444, GB::Extend), (0x11445, 0x11445, GB::SpacingMark),
        (0x11446, 0x11446, GB::Extend), (0x1145E, 0x1145E, GB::Extend),
        (0x114B0, 0x114B0, GB::Extend), (0x114B1, 0x114B2, GB::SpacingMark),
        (0x114B3, 0x114B8, GB::Extend), (0x114B9, 0x114B9, GB::SpacingMark),
        (0x114BA, 0x114BA, GB::Extend), (0x114BB, 0x114BC, GB::SpacingMark),
        (0x114BD, 0x114BD, GB::Extend), (0x114BE, 0x114BE, GB::SpacingMark),
        (0x114BF, 0x114C0, GB::Extend), (0x114C1, 0x114C1, GB::SpacingMark),
        (0x114C2, 0x114C3, GB::Extend), (0x115AF, 0x115AF, GB::Extend),
        (0x115B0, 0x115B1, GB::SpacingMark), (0x115B2, 0x115B5, GB::Extend),
        (0x115B8, 0x115BB, GB::SpacingMark), (0x115BC, 0x115BD, GB::Extend),
        (0x115BE, 0x115BE, GB::SpacingMark), (0x115BF, 0x115C0, GB::Extend),
        (0x115DC, 0x115DD, GB::Extend), (0x11630, 0x11632, GB::SpacingMark),
        (0x11633, 0x1163A, GB::Extend), (0x1163B, 0x1163C, GB::SpacingMark),
        (0x1163D, 0x1163D, GB::Extend), (0x1163E, 0x1163E, GB::SpacingMark),
        (0x1163F, 0x11640, GB::Extend), (0x116AB, 0x116AB, GB::Extend),
        (0x116AC, 0x116AC, GB::SpacingMark), (0x116AD, 0x116AD, GB::Extend),
        (0x116AE, 0x116AF, GB::SpacingMark), (0x116B0, 0x116B5, GB::Extend),
        (0x116B6, 0x116B6, GB::SpacingMark), (0x116B7, 0x116B7, GB::Extend),
        (0x1171D, 0x1171F, GB::Extend), (0x11722, 0x11725, GB::Extend),
        (0x11726, 0x11726, GB::SpacingMark), (0x11727, 0x1172B, GB::Extend),
        (0x1182C, 0x1182E, GB::SpacingMark), (0x1182F, 0x11837, GB::Extend),
        (0x11838, 0x11838, GB::SpacingMark), (0x11839, 0x1183A, GB::Extend),
        (0x11930, 0x11930, GB::Extend), (0x11931, 0x11935, GB::SpacingMark),
        (0x11937, 0x11938, GB::SpacingMark), (0x1193B, 0x1193C, GB::Extend),
        (0x1193D, 0x1193D, GB::SpacingMark), (0x1193E, 0x1193E, GB::Extend),
        (0x1193F, 0x1193F, GB::Prepend), (0x11940, 0x11940, GB::SpacingMark),
        (0x11941, 0x11941, GB::Prepend), (0x11942, 0x11942, GB::SpacingMark),
        (0x11943, 0x11943, GB::Extend), (0x119D1, 0x119D3, GB::SpacingMark),
        (0x119D4, 0x119D7, GB::Extend), (0x119DA, 0x119DB, GB::Extend),
        (0x119DC, 0x119DF, GB::SpacingMark), (0x119E0, 0x119E0, GB::Extend),
        (0x119E4, 0x119E4, GB::SpacingMark), (0x11A01, 0x11A0A, GB::Extend),
        (0x11A33, 0x11A38, GB::Extend), (0x11A39, 0x11A39, GB::SpacingMark),
        (0x11A3A, 0x11A3A, GB::Prepend), (0x11A3B, 0x11A3E, GB::Extend),
        (0x11A47, 0x11A47, GB::Extend), (0x11A51, 0x11A56, GB::Extend),
        (0x11A57, 0x11A58, GB::SpacingMark), (0x11A59, 0x11A5B, GB::Extend),
        (0x11A84, 0x11A89, GB::Prepend), (0x11A8A, 0x11A96, GB::Extend),
        (0x11A97, 0x11A97, GB::SpacingMark), (0x11A98, 0x11A99, GB::Extend),
        (0x11C2F, 0x11C2F, GB::SpacingMark), (0x11C30, 0x11C36, GB::Extend),
        (0x11C38, 0x11C3D, GB::Extend), (0x11C3E, 0x11C3E, GB::SpacingMark),
        (0x11C3F, 0x11C3F, GB::Extend), (0x11C92, 0x11CA7, GB::Extend),
        (0x11CA9, 0x11CA9, GB::SpacingMark), (0x11CAA, 0x11CB0, GB::Extend),
        (0x11CB1, 0x11CB1, GB::SpacingMark), (0x11CB2, 0x11CB3, GB::Extend),
        (0x11CB4, 0x11CB4, GB::SpacingMark), (0x11CB5, 0x11CB6, GB::Extend),
        (0x11D31, 0x11D36, GB::Extend), (0x11D3A, 0x11D3A, GB::Extend),
        (0x11D3C, 0x11D3D, GB::Extend), (0x11D3F, 0x11D45, GB::Extend),
        (0x11D46, 0x11D46, GB::Prepend), (0x11D47, 0x11D47, GB::Extend),
        (0x11D8A, 0x11D8E, GB::SpacingMark), (0x11D90, 0x11D91, GB::Extend),
        (0x11D93, 0x11D94, GB::SpacingMark), (0x11D95, 0x11D95, GB::Extend),
        (0x11D96, 0x11D96, GB::SpacingMark), (0x11D97, 0x11D97, GB::Extend),
        (0x11EF3, 0x11EF4, GB::Extend), (0x11EF5, 0x11EF6, GB::SpacingMark),
        (0x13430, 0x13438, GB::Control), (0x16AF0, 0x16AF4, GB::Extend),
        (0x16B30, 0x16B36, GB::Extend), (0x16F4F, 0x16F4F, GB::Extend),
        (0x16F51, 0x16F87, GB::SpacingMark), (0x16F8F, 0x16F92, GB::Extend),
        (0x16FE4, 0x16FE4, GB::Extend), (0x16FF0, 0x16FF1, GB::SpacingMark),
        (0x1BC9D, 0x1BC9E, GB::Extend), (0x1BCA0, 0x1BCA3, GB::Control),
        (0x1CF00, 0x1CF2D, GB::Extend), (0x1CF30, 0x1CF46, GB::Extend),
        (0x1D165, 0x1D165, GB::Extend), (0x1D166, 0x1D166, GB::SpacingMark),
        (0x1D167, 0x1D169, GB::Extend), (0x1D16D, 0x1D16D, GB::SpacingMark),
        (0x1D16E, 0x1D172, GB::Extend), (0x1D173, 0x1D17A, GB::Control),
        (0x1D17B, 0x1D182, GB::Extend), (0x1D185, 0x1D18B, GB::Extend),
        (0x1D1AA, 0x1D1AD, GB::Extend), (0x1D242, 0x1D244, GB::Extend),
        (0x1DA00, 0x1DA36, GB::Extend), (0x1DA3B, 0x1DA6C, GB::Extend),
        (0x1DA75, 0x1DA75, GB::Extend), (0x1DA84, 0x1DA84, GB::Extend),
        (0x1DA9B, 0x1DA9F, GB::Extend), (0x1DAA1, 0x1DAAF, GB::Extend),
        (0x1E000, 0x1E006, GB::Extend), (0x1E008, 0x1E018, GB::Extend),
        (0x1E01B, 0x1E021, GB::Extend), (0x1E023, 0x1E024, GB::Extend),
        (0x1E026, 0x1E02A, GB::Extend), (0x1E130, 0x1E136, GB::Extend),
        (0x1E2AE, 0x1E2AE, GB::Extend), (0x1E2EC, 0x1E2EF, GB::Extend),
        (0x1E8D0, 0x1E8D6, GB::Extend), (0x1E944, 0x1E94A, GB::Extend),
        (0x1F1E6, 0x1F1FF, GB::RegionalIndicator), (0x1F3FB, 0x1F3FF, GB::Extend),
        (0xE0000, 0xE001F, GB::Control), (0xE0020, 0xE007F, GB::Extend),
        (0xE0080, 0xE00FF, GB::Control), (0xE0100, 0xE01EF, GB::Extend),
        (0xE01F0, 0xE0FFF, GB::Control),
    ];
}

pub(crate) mod word {
    use crate::properties::WordBreak as WB;

    pub(crate) static WORD_BREAK_TABLE: &[(u32, u32, WB)] = &[
        (0x000A, 0x000A, WB::LF), (0x000B, 0x000C, WB::Newline), (0x000D, 0x000D, WB::CR),
        (0x0020, 0x0020, WB::WSegSpace), (0x0022, 0x0022, WB::DoubleQuote),
        (0x0027, 0x0027, WB::SingleQuote), (0x002C, 0x002C, WB::MidNum),
        (0x002E, 0x002E, WB::MidNumLet), (0x0030, 0x0039, WB::Numeric),
        (0x003A, 0x003A, WB::MidLetter), (0x003B, 0x003B, WB::MidNum),
        (0x0041, 0x005A, WB::ALetter), (0x005F, 0x005F, WB::ExtendNumLet),
        (0x0061, 0x007A, WB::ALetter), (0x0085, 0x0085, WB::Newline), (0x00AA, 0x00AA, WB::ALetter),
        (0x00AD, 0x00AD, WB::Format), (0x00B5, 0x00B5, WB::ALetter),
        (0x00B7, 0x00B7, WB::MidLetter), (0x00BA, 0x00BA, WB::ALetter),
        (0x00C0, 0x00D6, WB::ALetter), (0x00D8, 0x00F6, WB::ALetter), (0x00F8, 0x02D7, WB::ALetter),
        (0x02DE, 0x02FF, WB::ALetter), (0x0300, 0x036F, WB::Extend), (0x0370, 0x0374, WB::ALetter),
        (0x0376, 0x0377, WB::ALetter), (0x037A, 0x037D, WB::ALetter), (0x037E, 0x037E, WB::MidNum),
        (0x037F, 0x037F, WB::ALetter), (0x0386, 0x0386, WB::ALetter),
        (0x0387, 0x0387, WB::MidLetter), (0x0388, 0x038A, WB::ALetter),
        (0x038C, 0x038C, WB::ALetter), (0x038E, 0x03A1, WB::ALetter), (0x03A3, 0x03F5, WB::ALetter),
        (0x03F7, 0x0481, WB::ALetter), (0x0483, 0x0489, WB::Extend), (0x048A, 0x052F, WB::ALetter),
        (0x0531, 0x0556, WB::ALetter), (0x0559, 0x055C, WB::ALetter), (0x055E, 0x055E, WB::ALetter),
        (0x055F, 0x055F, WB::MidLetter), (0x0560, 0x0588, WB::ALetter),
        (0x0589, 0x0589, WB::MidNum), (0x058A, 0x058A, WB::ALetter), (0x0591, 0x05BD, WB::Extend),
        (0x05BF, 0x05BF, WB::Extend), (0x05C1, 0x05C2, WB::Extend), (0x05C4, 0x05C5, WB::Extend),
        (0x05C7, 0x05C7, WB::Extend), (0x05D0, 0x05EA, WB::HebrewLetter),
        (0x05EF, 0x05F2, WB::HebrewLetter), (0x05F3, 0x05F3, WB::ALetter),
        (0x05F4, 0x05F4, WB::MidLetter), (0x0600, 0x0605, WB::Format), (0x060C, 0x060D, WB::MidNum),
        (0x0610, 0x061A, WB::Extend), (0x061C, 0x061C, WB::Format), (0x0620, 0x064A, WB::ALetter),
        (0x064B, 0x065F, WB::Extend), (0x0660, 0x0669, WB::Numeric), (0x066B, 0x066B, WB::Numeric),
        (0x066C, 0x066C, WB::MidNum), (0x066E, 0x066F, WB::ALetter), (0x0670, 0x0670, WB::Extend),
        (0x0671, 0x06D3, WB::ALetter), (0x06D5, 0x06D5, WB::ALetter), (0x06D6, 0x06DC, WB::Extend),
        (0x06DD, 0x06DD, WB::Format), (0x06DF, 0x06E4, WB::Extend), (0x06E5, 0x06E6, WB::ALetter),
        (0x06E7, 0x06E8, WB::Extend), (0x06EA, 0x06ED, WB::Extend), (0x06EE, 0x06EF, WB::ALetter),
        (0x06F0, 0x06F9, WB::Numeric), (0x06FA, 0x06FC, WB::ALetter), (0x06FF, 0x06FF, WB::ALetter),
        (0x070F, 0x070F, WB::Format), (0x0710, 0x0710, WB::ALetter), (0x0711, 0x0711, WB::Extend),
        (0x0712, 0x072F, WB::ALetter), (0x0730, 0x074A, WB::Extend), (0x074D, 0x07A5, WB::ALetter),
        (0x07A6, 0x07B0, WB::Extend), (0x07B1, 0x07B1, WB::ALetter), (0x07C0, 0x07C9, WB::Numeric),
        (0x07CA, 0x07EA, WB::ALetter), (0x07EB, 0x07F3, WB::Extend), (0x07F4, 0x07F5, WB::ALetter),
        (0x07F8, 0x07F8, WB::MidNum), (0x07FA, 0x07FA, WB::ALetter), (0x07FD, 0x07FD, WB::Extend),
        (0x0800, 0x0815, WB::ALetter), (0x0816, 0x0819, WB::Extend), (0x081A, 0x081A, WB::ALetter),
        (0x081B, 0x0823, WB::Extend), (0x0824, 0x0824, WB::ALetter), (0x0825, 0x0827, WB::Extend),
        (0x0828, 0x0828, WB::ALetter), (0x0829, 0x082D, WB::Extend), (0x0840, 0x0858, WB::ALetter),
        (0x0859, 0x085B, WB::Extend), (0x0860, 0x086A, WB::ALetter), (0x0870, 0x0887, WB::ALetter),
        (0x0889, 0x088E, WB::ALetter), (0x0890, 0x0891, WB::Format), (0x0898, 0x089F, WB::Extend),
        (0x08A0, 0x08C9, WB::ALetter), (0x08CA, 0x08E1, WB::Extend), (0x08E2, 0x08E2, WB::Format),
        (0x08E3, 0x0903, WB::Extend), (0x0904, 0x0939, WB::ALetter), (0x093A, 0x093C, WB::Extend),
        (0x093D, 0x093D, WB::ALetter), (0x093E, 0x094F, WB::Extend), (0x0950, 0x0950, WB::ALetter),
        (0x0951, 0x0957, WB::Extend), (0x0958, 0x0961, WB::ALetter), (0x0962, 0x0963, WB::Extend),
        (0x0966, 0x096F, WB::Numeric), (0x0971, 0x0980, WB::ALetter), (0x0981, 0x0983, WB::Extend),
        (0x0985, 0x098C, WB::ALetter), (0x098F, 0x0990, WB::ALetter), (0x0993, 0x09A8, WB::ALetter),
        (0x09AA, 0x09B0, WB::ALetter), (0x09B2, 0x09B2, WB::ALetter), (0x09B6, 0x09B9, WB::ALetter),
        (0x09BC, 0x09BC, WB::Extend), (0x09BD, 0x09BD, WB::ALetter), (0x09BE, 0x09C4, WB::Extend),
        (0x09C7, 0x09C8, WB::Extend), (0x09CB, 0x09CD, WB::Extend), (0x09CE, 0x09CE, WB::ALetter),
        (0x09D7, 0x09D7, WB::Extend), (0x09DC, 0x09DD, WB::ALetter), (0x09DF, 0x09E1, WB::ALetter),
        (0x09E2, 0x09E3, WB::Extend), (0x09E6, 0x09EF, WB::Numeric), (0x09F0, 0x09F1, WB::ALetter),
        (0x09FC, 0x09FC, WB::ALetter), (0x09FE, 0x09FE, WB::Extend), (0x0A01, 0x0A03, WB::Extend),
        (0x0A05, 0x0A0A, WB::ALetter), (0x0A0F, 0x0A10, WB::ALetter), (0x0A13, 0x0A28, WB::ALetter),
        (0x0A2A, 0x0A30, WB::ALetter), (0x0A32, 0x0A33, WB::ALetter), (0x0A35, 0x0A36, WB::ALetter),
        (0x0A38, 0x0A39, WB::ALetter), (0x0A3C, 0x0A3C, WB::Extend), (0x0A3E, 0x0A42, WB::Extend),
        (0x0A47, 0x0A48, WB::Extend), (0x0A4B, 0x0A4D, WB::Extend), (0x0A51, 0x0A51, WB::Extend),
        (0x0A59, 0x0A5C, WB::ALetter), (0x0A5E, 0x0A5E, WB::ALetter), (0x0A66, 0x0A6F, WB::Numeric),
        (0x0A70, 0x0A71, WB::Extend), (0x0A72, 0x0A74, WB::ALetter), (0x0A75, 0x0A75, WB::Extend),
        (0x0A81, 0x0A83, WB::Extend), (0x0A85, 0x0A8D, WB::ALetter), (0x0A8F, 0x0A91, WB::ALetter),
        (0x0A93, 0x0AA8, WB::ALetter), (0x0AAA, 0x0AB0, WB::ALetter), (0x0AB2, 0x0AB3, WB::ALetter),
        (0x0AB5, 0x0AB9, WB::ALetter), (0x0ABC, 0x0ABC, WB::Extend), (0x0ABD, 0x0ABD, WB::ALetter),
        (0x0ABE, 0x0AC5, WB::Extend), (0x0AC7, 0x0AC9, WB::Extend), (0x0ACB, 0x0ACD, WB::Extend),
        (0x0AD0, 0x0AD0, WB::ALetter), (0x0AE0, 0x0AE1, WB::ALetter), (0x0AE2, 0x0AE3, WB::Extend),
        (0x0AE6, 0x0AEF, WB::Numeric), (0x0AF9, 0x0AF9, WB::ALetter), (0x0AFA, 0x0AFF, WB::Extend),
        (0x0B01, 0x0B03, WB::Extend), (0x0B05, 0x0B0C, WB::ALetter), (0x0B0F, 0x0B10, WB::ALetter),
        (0x0B13, 0x0B28, WB::ALetter), (0x0B2A, 0x0B30, WB::ALetter), (0x0B32, 0x0B33, WB::ALetter),
        (0x0B35, 0x0B39, WB::ALetter), (0x0B3C, 0x0B3C, WB::Extend), (0x0B3D, 0x0B3D, WB::ALetter),
        (0x0B3E, 0x0B44, WB::Extend), (0x0B47, 0x0B48, WB::Extend), (0x0B4B, 0x0B4D, WB::Extend),
        (0x0B55, 0x0B57, WB::Extend), (0x0B5C, 0x0B5D, WB::ALetter), (0x0B5F, 0x0B61, WB::ALetter),
        (0x0B62, 0x0B63, WB::Extend), (0x0B66, 0x0B6F, WB::Numeric), (0x0B71, 0x0B71, WB::ALetter),
        (0x0B82, 0x0B82, WB::Extend), (0x0B83, 0x0B83, WB::ALetter), (0x0B85, 0x0B8A, WB::ALetter),
        (0x0B8E, 0x0B90, WB::ALetter), (0x0B92, 0x0B95, WB::ALetter), (0x0B99, 0x0B9A, WB::ALetter),
        (0x0B9C, 0x0B9C, WB::ALetter), (0x0B9E, 0x0B9F, WB::ALetter), (0x0BA3, 0x0BA4, WB::ALetter),
        (0x0BA8, 0x0BAA, WB::ALetter), (0x0BAE, 0x0BB9, WB::ALetter), (0x0BBE, 0x0BC2, WB::Extend),
        (0x0BC6, 0x0BC8, WB::Extend), (0x0BCA, 0x0BCD, WB::Extend), (0x0BD0, 0x0BD0, WB::ALetter),
        (0x0BD7, 0x0BD7, WB::Extend), (0x0BE6, 0x0BEF, WB::Numeric), (0x0C00, 0x0C04, WB::Extend),
        (0x0C05, 0x0C0C, WB::ALetter), (0x0C0E, 0x0C10, WB::ALetter), (0x0C12, 0x0C28, WB::ALetter),
        (0x0C2A, 0x0C39, WB::ALetter), (0x0C3C, 0x0C3C, WB::Extend), (0x0C3D, 0x0C3D, WB::ALetter),
        (0x0C3E, 0x0C44, WB::Extend), (0x0C46, 0x0C48, WB::Extend), (0x0C4A, 0x0C4D, WB::Extend),
        (0x0C55, 0x0C56, WB::Extend), (0x0C58, 0x0C5A, WB::ALetter), (0x0C5D, 0x0C5D, WB::ALetter),
        (0x0C60, 0x0C61, WB::ALetter), (0x0C62, 0x0C63, WB::Extend), (0x0C66, 0x0C6F, WB::Numeric),
        (0x0C80, 0x0C80, WB::ALetter), (0x0C81, 0x0C83, WB::Extend), (0x0C85, 0x0C8C, WB::ALetter),
        (0x0C8E, 0x0C90, WB::ALetter), (0x0C92, 0x0CA8, WB::ALetter), (0x0CAA, 0x0CB3, WB::ALetter),
        (0x0CB5, 0x0CB9, WB::ALetter), (0x0CBC, 0x0CBC, WB::Extend), (0x0CBD, 0x0CBD, WB::ALetter),
        (0x0CBE, 0x0CC4, WB::Extend), (0x0CC6, 0x0CC8, WB::Extend), (0x0CCA, 0x0CCD, WB::Extend),
        (0x0CD5, 0x0CD6, WB::Extend), (0x0CDD, 0x0CDE, WB::ALetter), (0x0CE0, 0x0CE1, WB::ALetter),
        (0x0CE2, 0x0CE3, WB::Extend), (0x0CE6, 0x0CEF, WB::Numeric), (0x0CF1, 0x0CF2, WB::ALetter),
        (0x0D00, 0x0D03, WB::Extend), (0x0D04, 0x0D0C, WB::ALetter), (0x0D0E, 0x0D10, WB::ALetter),
        (0x0D12, 0x0D3A, WB::ALetter), (0x0D3B, 0x0D3C, WB::Extend), (0x0D3D, 0x0D3D, WB::ALetter),
        (0x0D3E, 0x0D44, WB::Extend), (0x0D46, 0x0D48, WB::Extend), (0x0D4A, 0x0D4D, WB::Extend),
        (0x0D4E, 0x0D4E, WB::ALetter), (0x0D54, 0x0D56, WB::ALetter), (0x0D57, 0x0D57, WB::Extend),
        (0x0D5F, 0x0D61, WB::ALetter), (0x0D62, 0x0D63, WB::Extend), (0x0D66, 0x0D6F, WB::Numeric),
        (0x0D7A, 0x0D7F, WB::ALetter), (0x0D81, 0x0D83, WB::Extend), (0x0D85, 0x0D96, WB::ALetter),
        (0x0D9A, 0x0DB1, WB::ALetter), (0x0DB3, 0x0DBB, WB::ALetter), (0x0DBD, 0x0DBD, WB::ALetter),
        (0x0DC0, 0x0DC6, WB::ALetter), (0x0DCA, 0x0DCA, WB::Extend), (0x0DCF, 0x0DD4, WB::Extend),
        (0x0DD6, 0x0DD6, WB::Extend), (0x0DD8, 0x0DDF, WB::Extend), (0x0DE6, 0x0DEF, WB::Numeric),
        (0x0DF2, 0x0DF3, WB::Extend), (0x0E31, 0x0E31, WB::Extend), (0x0E34, 0x0E3A, WB::Extend),
        (0x0E47, 0x0E4E, WB::Extend), (0x0E50, 0x0E59, WB::Numeric), (0x0EB1, 0x0EB1, WB::Extend),
        (0x0EB4, 0x0EBC, WB::Extend), (0x0EC8, 0x0ECD, WB::Extend), (0x0ED0, 0x0ED9, WB::Numeric),
        (0x0F00, 0x0F00, WB::ALetter), (0x0F18, 0x0F19, WB::Extend), (0x0F20, 0x0F29, WB::Numeric),
        (0x0F35, 0x0F35, WB::Extend), (0x0F37, 0x0F37, WB::Extend), (0x0F39, 0x0F39, WB::Extend),
        (0x0F3E, 0x0F3F, WB::Extend), (0x0F40, 0x0F47, WB::ALetter), (0x0F49, 0x0F6C, WB::ALetter),
        (0x0F71, 0x0F84, WB::Extend), (0x0F86, 0x0F87, WB::Extend), (0x0F88, 0x0F8C, WB::ALetter),
        (0x0F8D, 0x0F97, WB::Extend), (0x0F99, 0x0FBC, WB::Extend), (0x0FC6, 0x0FC6, WB::Extend),
        (0x102B, 0x103E, WB::Extend), (0x1040, 0x1049, WB::Numeric), (0x1056, 0x1059, WB::Extend),
        (0x105E, 0x1060, WB::Extend), (0x1062, 0x1064, WB::Extend), (0x1067, 0x106D, WB::Extend),
        (0x1071, 0x1074, WB::Extend), (0x1082, 0x108D, WB::Extend), (0x108F, 0x108F, WB::Extend),
        (0x1090, 0x1099, WB::Numeric), (0x109A, 0x109D, WB::Extend), (0x10A0, 0x10C5, WB::ALetter),
        (0x10C7, 0x10C7, WB::ALetter), (0x10CD, 0x10CD, WB::ALetter), (0x10D0, 0x10FA, WB::ALetter),
        (0x10FC, 0x1248, WB::ALetter), (0x124A, 0x124D, WB::ALetter), (0x1250, 0x1256, WB::ALetter),
        (0x1258, 0x1258, WB::ALetter), (0x125A, 0x125D, WB::ALetter), (0x1260, 0x1288, WB::ALetter),
        (0x128A, 0x128D, WB::ALetter), (0x1290, 0x12B0, WB::ALetter), (0x12B2, 0x12B5, WB::ALetter),
        (0x12B8, 0x12BE, WB::ALetter), (0x12C0, 0x12C0, WB::ALetter), (0x12C2, 0x12C5, WB::ALetter),
        (0x12C8, 0x12D6, WB::ALetter), (0x12D8, 0x1310, WB::ALetter), (0x1312, 0x1315, WB::ALetter),
        (0x1318, 0x135A, WB::ALetter), (0x135D, 0x135F, WB::Extend), (0x1380, 0x138F, WB::ALetter),
        (0x13A0, 0x13F5, WB::ALetter), (0x13F8, 0x13FD, WB::ALetter), (0x1401, 0x166C, WB::ALetter),
        (0x166F, 0x167F, WB::ALetter), (0x1680, 0x1680, WB::WSegSpace),
        (0x1681, 0x169A, WB::ALetter), (0x16A0, 0x16EA, WB::ALetter), (0x16EE, 0x16F8, WB::ALetter),
        (0x1700, 0x1711, WB::ALetter), (0x1712, 0x1715, WB::Extend), (0x171F, 0x1731, WB::ALetter),
        (0x1732, 0x1734, WB::Extend), (0x1740, 0x1751, WB::ALetter), (0x1752, 0x1753, WB::Extend),
        (0x1760, 0x176C, WB::ALetter), (0x176E, 0x1770, WB::ALetter), (0x1772, 0x1773, WB::Extend),
        (0x17B4, 0x17D3, WB::Extend), (0x17DD, 0x17DD, WB::Extend), (0x17E0, 0x17E9, WB::Numeric),
        (0x180B, 0x180D, WB::Extend), (0x180E, 0x180E, WB::Format), (0x180F, 0x180F, WB::Extend),
        (0x1810, 0x1819, WB::Numeric), (0x1820, 0x1878, WB::ALetter), (0x1880, 0x1884, WB::ALetter),
        (0x1885, 0x1886, WB::Extend), (0x1887, 0x18A8, WB::ALetter), (0x18A9, 0x18A9, WB::Extend),
        (0x18AA, 0x18AA, WB::ALetter), (0x18B0, 0x18F5, WB::ALetter), (0x1900, 0x191E, WB::ALetter),
        (0x1920, 0x192B, WB::Extend), (0x1930, 0x193B, WB::Extend), (0x1946, 0x194F, WB::Numeric),
        (0x19D0, 0x19D9, WB::Numeric), (0x1A00, 0x1A16, WB::ALetter), (0x1A17, 0x1A1B, WB::Extend),
        (0x1A55, 0x1A5E, WB::Extend), (0x1A60, 0x1A7C, WB::Extend), (0x1A7F, 0x1A7F, WB::Extend),
        (0x1A80, 0x1A89, WB::Numeric), (0x1A90, 0x1A99, WB::Numeric), (0x1AB0, 0x1ACE, WB::Extend),
        (0x1B00, 0x1B04, WB::Extend), (0x1B05, 0x1B33, WB::ALetter), (0x1B34, 0x1B44, WB::Extend),
        (0x1B45, 0x1B4C, WB::ALetter), (0x1B50, 0x1B59, WB::Numeric), (0x1B6B, 0x1B73, WB::Extend),
        (0x1B80, 0x1B82, WB::Extend), (0x1B83, 0x1BA0, WB::ALetter), (0x1BA1, 0x1BAD, WB::Extend),
        (0x1BAE, 0x1BAF, WB::ALetter), (0x1BB0, 0x1BB9, WB::Numeric), (0x1BBA, 0x1BE5, WB::ALetter),
        (0x1BE6, 0x1BF3, WB::Extend), (0x1C00, 0x1C23, WB::ALetter), (0x1C24, 0x1C37, WB::Extend),
        (0x1C40, 0x1C49, WB::Numeric), (0x1C4D, 0x1C4F, WB::ALetter), (0x1C50, 0x1C59, WB::Numeric),
        (0x1C5A, 0x1C7D, WB::ALetter), (0x1C80, 0x1C88, WB::ALetter), (0x1C90, 0x1CBA, WB::ALetter),
        (0x1CBD, 0x1CBF, WB::ALetter), (0x1CD0, 0x1CD2, WB::Extend), (0x1CD4, 0x1CE8, WB::Extend),
        (0x1CE9, 0x1CEC, WB::ALetter), (0x1CED, 0x1CED, WB::Extend), (0x1CEE, 0x1CF3, WB::ALetter),
        (0x1CF4, 0x1CF4, WB::Extend), (0x1CF5, 0x1CF6, WB::ALetter), (0x1CF7, 0x1CF9, WB::Extend),
        (0x1CFA, 0x1CFA, WB::ALetter), (0x1D00, 0x1DBF, WB::ALetter), (0x1DC0, 0x1DFF, WB::Extend),
        (0x1E00, 0x1F15, WB::ALetter), (0x1F18, 0x1F1D, WB::ALetter), (0x1F20, 0x1F45, WB::ALetter),
        (0x1F48, 0x1F4D, WB::ALetter), (0x1F50, 0x1F57, WB::ALetter), (0x1F59, 0x1F59, WB::ALetter),
        (0x1F5B, 0x1F5B, WB::ALetter), (0x1F5D, 0x1F5D, WB::ALetter), (0x1F5F, 0x1F7D, WB::ALetter),
        (0x1F80, 0x1FB4, WB::ALetter), (0x1FB6, 0x1FBC, WB::ALetter), (0x1FBE, 0x1FBE, WB::ALetter),
        (0x1FC2, 0x1FC4, WB::ALetter), (0x1FC6, 0x1FCC, WB::ALetter), (0x1FD0, 0x1FD3, WB::ALetter),
        (0x1FD6, 0x1FDB, WB::ALetter), (0x1FE0, 0x1FEC, WB::ALetter), (0x1FF2, 0x1FF4, WB::ALetter),
        (0x1FF6, 0x1FFC, WB::ALetter), (0x2000, 0x2006, WB::WSegSpace),
        (0x2008, 0x200A, WB::WSegSpace), (0x200C, 0x200C, WB::Extend), (0x200D, 0x200D, WB::ZWJ),
        (0x200E, 0x200F, WB::Format), (0x2018, 0x2019, WB::MidNumLet),
        (0x2024, 0x2024, WB::MidNumLet), (0x2027, 0x2027, WB::MidLetter),
        (0x2028, 0x2029, WB::Newline), (0x202A, 0x202E, WB::Format),
        (0x202F, 0x202F, WB::ExtendNumLet), (0x203F, 0x2040, WB::ExtendNumLet),
        (0x2044, 0x2044, WB::MidNum), (0x2054, 0x2054, WB::ExtendNumLet),
        (0x205F, 0x205F, WB::WSegSpace), (0x2060, 0x2064, WB::Format), (0x2066, 0x206F, WB::Format),
        (0x2071, 0x2071, WB::ALetter), (0x207F, 0x207F, WB::ALetter), (0x2090, 0x209C, WB::ALetter),
        (0x20D0, 0x20F0, WB::Extend), (0x2102, 0x2102, WB::ALetter), (0x2107, 0x2107, WB::ALetter),
        (0x210A, 0x2113, WB::ALetter), (0x2115, 0x2115, WB::ALetter), (0x2119, 0x211D, WB::ALetter),
        (0x2124, 0x2124, WB::ALetter), (0x2126, 0x2126, WB::ALetter), (0x2128, 0x2128, WB::ALetter),
        (0x212A, 0x212D, WB::ALetter), (0x212F, 0x2139, WB::ALetter), (0x213C, 0x213F, WB::ALetter),
        (0x2145, 0x2149, WB::ALetter), (0x214E, 0x214E, WB::ALetter), (0x2160, 0x2188, WB::ALetter),
        (0x24B6, 0x24E9, WB::ALetter), (0x2C00, 0x2CE4, WB::ALetter), (0x2CEB, 0x2CEE, WB::ALetter),
        (0x2CEF, 0x2CF1, WB::Extend), (0x2CF2, 0x2CF3, WB::ALetter), (0x2D00, 0x2D25, WB::ALetter),
        (0x2D27, 0x2D27, WB::ALetter), (0x2D2D, 0x2D2D, WB::ALetter), (0x2D30, 0x2D67, WB::ALetter),
        (0x2D6F, 0x2D6F, WB::ALetter), (0x2D7F, 0x2D7F, WB::Extend), (0x2D80, 0x2D96, WB::ALetter),
        (0x2DA0, 0x2DA6, WB::ALetter), (0x2DA8, 0x2DAE, WB::ALetter), (0x2DB0, 0x2DB6, WB::ALetter),
        (0x2DB8, 0x2DBE, WB::ALetter), (0x2DC0, 0x2DC6, WB::ALetter), (0x2DC8, 0x2DCE, WB::ALetter),
        (0x2DD0, 0x2DD6, WB::ALetter), (0x2DD8, 0x2DDE, WB::ALetter), (0x2DE0, 0x2DFF, WB::Extend),
        (0x2E2F, 0x2E2F, WB::ALetter), (0x3000, 0x3000, WB::WSegSpace),
        (0x3005, 0x3005, WB::ALetter), (0x302A, 0x302F, WB::Extend), (0x3031, 0x3035, WB::Katakana),
        (0x303B, 0x303C, WB::ALetter), (0x3099, 0x309A, WB::Extend), (0x309B, 0x309C, WB::Katakana),
        (0x30A0, 0x30FA, WB::Katakana), (0x30FC, 0x30FF, WB::Katakana),
        (0x3105, 0x312F, WB::ALetter), (0x3131, 0x318E, WB::ALetter), (0x31A0, 0x31BF, WB::ALetter),
        (0x31F0, 0x31FF, WB::Katakana), (0x32D0, 0x32FE, WB::Katakana),
        (0x3300, 0x3357, WB::Katakana), (0xA000, 0xA48C, WB::ALetter),
        (0xA4D0, 0xA4FD, WB::ALetter), (0xA500, 0xA60C, WB::ALetter), (0xA610, 0xA61F, WB::ALetter),
        (0xA620, 0xA629, WB::Numeric), (0xA62A, 0xA62B, WB::ALetter), (0xA640, 0xA66E, WB::ALetter),
        (0xA66F, 0xA672, WB::Extend), (0xA674, 0xA67D, WB::Extend), (0xA67F, 0xA69D, WB::ALetter),
        (0xA69E, 0xA69F, WB::Extend), (0xA6A0, 0xA6EF, WB::ALetter), (0xA6F0, 0xA6F1, WB::Extend),
        (0xA708, 0xA7CA, WB::ALetter), (0xA7D0, 0xA7D1, WB::ALetter), (0xA7D3, 0xA7D3, WB::ALetter),
        (0xA7D5, 0xA7D9, WB::ALetter), (0xA7F2, 0xA801, WB::ALetter), (0xA802, 0xA802, WB::Extend),
        (0xA803, 0xA805, WB::ALetter), (0xA806, 0xA806, WB::Extend), (0xA807, 0xA80A, WB::ALetter),
        (0xA80B, 0xA80B, WB::Extend), (0xA80C, 0xA822, WB::ALetter), (0xA823, 0xA827, WB::Extend),
        (0xA82C, 0xA82C, WB::Extend), (0xA840, 0xA873, WB::ALetter), (0xA880, 0xA881, WB::Extend),
        (0xA882, 0xA8B3, WB::ALetter), (0xA8B4, 0xA8C5, WB::Extend), (0xA8D0, 0xA8D9, WB::Numeric),
        (0xA8E0, 0xA8F1, WB::Extend), (0xA8F2, 0xA8F7, WB::ALetter), (0xA8FB, 0xA8FB, WB::ALetter),
        (0xA8FD, 0xA8FE, WB::ALetter), (0xA8FF, 0xA8FF, WB::Extend), (0xA900, 0xA909, WB::Numeric),
        (0xA90A, 0xA925, WB::ALetter), (0xA926, 0xA92D, WB::Extend), (0xA930, 0xA946, WB::ALetter),
        (0xA947, 0xA953, WB::Extend), (0xA960, 0xA97C, WB::ALetter), (0xA980, 0xA983, WB::Extend),
        (0xA984, 0xA9B2, WB::ALetter), (0xA9B3, 0xA9C0, WB::Extend), (0xA9CF, 0xA9CF, WB::ALetter),
        (0xA9D0, 0xA9D9, WB::Numeric), (0xA9E5, 0xA9E5, WB::Extend), (0xA9F0, 0xA9F9, WB::Numeric),
        (0xAA00, 0xAA28, WB::ALetter), (0xAA29, 0xAA36, WB::Extend), (0xAA40, 0xAA42, WB::ALetter),
        (0xAA43, 0xAA43, WB::Extend), (0xAA44, 0xAA4B, WB::ALetter), (0xAA4C, 0xAA4D, WB::Extend),
        (0xAA50, 0xAA59, WB::Numeric), (0xAA7B, 0xAA7D, WB::Extend), (0xAAB0, 0xAAB0, WB::Extend),
        (0xAAB2, 0xAAB4, WB::Extend), (0xAAB7, 0xAAB8, WB::Extend), (0xAABE, 0xAABF, WB::Extend),
        (0xAAC1, 0xAAC1, WB::Extend), (0xAAE0, 0xAAEA, WB::ALetter), (0xAAEB, 0xAAEF, WB::Extend),
        (0xAAF2, 0xAAF4, WB::ALetter), (0xAAF5, 0xAAF6, WB::Extend), (0xAB01, 0xAB06, WB::ALetter),
        (0xAB09, 0xAB0E, WB::ALetter), (0xAB11, 0xAB16, WB::ALetter), (0xAB20, 0xAB26, WB::ALetter),
        (0xAB28, 0xAB2E, WB::ALetter), (0xAB30, 0xAB69, WB::ALetter), (0xAB70, 0xABE2, WB::ALetter),
        (0xABE3, 0xABEA, WB::Extend), (0xABEC, 0xABED, WB::Extend), (0xABF0, 0xABF9, WB::Numeric),
        (0xAC00, 0xD7A3, WB::ALetter), (0xD7B0, 0xD7C6, WB::ALetter), (0xD7CB, 0xD7FB, WB::ALetter),
        (0xFB00, 0xFB06, WB::ALetter), (0xFB13, 0xFB17, WB::ALetter),
        (0xFB1D, 0xFB1D, WB::HebrewLetter), (0xFB1E, 0xFB1E, WB::Extend),
        (0xFB1F, 0xFB28, WB::HebrewLetter), (0xFB2A, 0xFB36, WB::HebrewLetter),
        (0xFB38, 0xFB3C, WB::HebrewLetter), (0xFB3E, 0xFB3E, WB::HebrewLetter),
        (0xFB40, 0xFB41, WB::HebrewLetter), (0xFB43, 0xFB44, WB::HebrewLetter),
        (0xFB46, 0xFB4F, WB::HebrewLetter), (0xFB50, 0xFBB1, WB::ALetter),
        (0xFBD3, 0xFD3D, WB::ALetter), (0xFD50, 0xFD8F, WB::ALetter), (0xFD92, 0xFDC7, WB::ALetter),
        (0xFDF0, 0xFDFB, WB::ALetter), (0xFE00, 0xFE0F, WB::Extend), (0xFE10, 0xFE10, WB::MidNum),
        (0xFE13, 0xFE13, WB::MidLetter), (0xFE14, 0xFE14, WB::MidNum), (0xFE20, 0xFE2F, WB::Extend),
        (0xFE33, 0xFE34, WB::ExtendNumLet), (0xFE4D, 0xFE4F, WB::ExtendNumLet),
        (0xFE50, 0xFE50, WB::MidNum), (0xFE52, 0xFE52, WB::MidNumLet), (0xFE54, 0xFE54, WB::MidNum),
        (0xFE55, 0xFE55, WB::MidLetter), (0xFE70, 0xFE74, WB::ALetter),
        (0xFE76, 0xFEFC, WB::ALetter), (0xFEFF, 0xFEFF, WB::Format),
        (0xFF07, 0xFF07, WB::MidNumLet), (0xFF0C, 0xFF0C, WB::MidNum),
        (0xFF0E, 0xFF0E, WB::MidNumLet), (0xFF10, 0xFF19, WB::Numeric),
        (0xFF1A, 0xFF1A, WB::MidLetter), (0xFF1B, 0xFF1B, WB::MidNum),
        (0xFF21, 0xFF3A, WB::ALetter), (0xFF3F, 0xFF3F, WB::ExtendNumLet),
        (0xFF41, 0xFF5A, WB::ALetter), (0xFF66, 0xFF9D, WB::Katakana), (0xFF9E, 0xFF9F, WB::Extend),
        (0xFFA0, 0xFFBE, WB::ALetter), (0xFFC2, 0xFFC7, WB::ALetter), (0xFFCA, 0xFFCF, WB::ALetter),
        (0xFFD2, 0xFFD7, WB::ALetter), (0xFFDA, 0xFFDC, WB::ALetter), (0xFFF9, 0xFFFB, WB::Format),
        (0x10000, 0x1000B, WB::ALetter), (0x1000D, 0x10026, WB::ALetter),
        (0x10028, 0x1003A, WB::ALetter), (0x1003C, 0x1003D, WB::ALetter),
        (0x1003F, 0x1004D, WB::ALetter), (0x10050, 0x1005D, WB::ALetter),
        (0x10080, 0x100FA, WB::ALetter), (0x10140, 0x10174, WB::ALetter),
        (0x101FD, 0x101FD, WB::Extend), (0x10280, 0x1029C, WB::ALetter),
        (0x102A0, 0x102D0, WB::ALetter), (0x102E0, 0x102E0, WB::Extend),
        (0x10300, 0x1031F, WB::ALetter), (0x1032D, 0x1034A, WB::ALetter),
        (0x10350, 0x10375, WB::ALetter), (0x10376, 0x1037A, WB::Extend),
        (0x10380, 0x1039D, WB::ALetter), (0x103A0, 0x103C3, WB::ALetter),
        (0x103C8, 0x103CF, WB::ALetter), (0x103D1, 0x103D5, WB::ALetter),
        (0x10400, 0x1049D, WB::ALetter), (0x104A0, 0x104A9, WB::Numeric),
        (0x104B0, 0x104D3, WB::ALetter), (0x104D8, 0x104FB, WB::ALetter),
        (0x10500, 0x10527, WB::ALetter), (0x10530, 0x10563, WB::ALetter),
        (0x10570, 0x1057A, WB::ALetter), (0x1057C, 0x1058A, WB::ALetter),
        (0x1058C, 0x10592, WB::ALetter), (0x10594, 0x10595, WB::ALetter),
        (0x10597, 0x105A1, WB::ALetter), (0x105A3, 0x105B1, WB::ALetter),
        (0x105B3, 0x105B9, WB::ALetter), (0x105BB, 0x105BC, WB::ALetter),
        (0x10600, 0x10736, WB::ALetter), (0x10740, 0x10755, WB::ALetter),
        (0x10760, 0x10767, WB::ALetter), (0x10780, 0x10785, WB::ALetter),
        (0x10787, 0x107B0, WB::ALetter), (0x107B2, 0x107BA, WB::ALetter),
        (0x10800, 0x10805, WB::ALetter), (0x10808, 0x10808, WB::ALetter),
        (0x1080A, 0x10835, WB::ALetter), (0x10837, 0x10838, WB::ALetter),
        (0x1083C, 0x1083C, WB::ALetter), (0x1083F, 0x10855, WB::ALetter),
        (0x10860, 0x10876, WB::ALetter), (0x10880, 0x1089E, WB::ALetter),
        (0x108E0, 0x108F2, WB::ALetter), (0x108F4, 0x108F5, WB::ALetter),
        (0x10900, 0x10915, WB::ALetter), (0x10920, 0x10939, WB::ALetter),
        (0x10980, 0x109B7, WB::ALetter), (0x109BE, 0x109BF, WB::ALetter),
        (0x10A00, 0x10A00, WB::ALetter), (0x10A01, 0x10A03, WB::Extend),
        (0x10A05, 0x10A06, WB::Extend), (0x10A0C, 0x10A0F, WB::Extend),
        (0x10A10, 0x10A13, WB::ALetter), (0x10A15, 0x10A17, WB::ALetter),
        (0x10A19, 0x10A35, WB::ALetter), (0x10A38, 0x10A3A, WB::Extend),
        (0x10A3F, 0x10A3F, WB::Extend), (0x10A60, 0x10A7C, WB::ALetter),
        (0x10A80, 0x10A9C, WB::ALetter), (0x10AC0, 0x10AC7, WB::ALetter),
        (0x10AC9, 0x10AE4, WB::ALetter), (0x10AE5, 0x10AE6, WB::Extend),
        (0x10B00, 0x10B35, WB::ALetter), (0x10B40, 0x10B55, WB::ALetter),
        (0x10B60, 0x10B72, WB::ALetter), (0x10B80, 0x10B91, WB::ALetter),
        (0x10C00, 0x10C48, WB::ALetter), (0x10C80, 0x10CB2, WB::ALetter),
        (0x10CC0, 0x10CF2, WB::ALetter), (0x10D00, 0x10D23, WB::ALetter),
        (0x10D24, 0x10D27, WB::Extend), (0x10D30, 0x10D39, WB::Numeric),
        (0x10E80, 0x10EA9, WB::ALetter), (0x10EAB, 0x10EAC, WB::Extend),
        (0x10EB0, 0x10EB1, WB::ALetter), (0x10F00, 0x10F1C, WB::ALetter),
        (0x10F27, 0x10F27, WB::ALetter), (0x10F30, 0x10F45, WB::ALetter),
        (0x10F46, 0x10F50, WB::Extend), (0x10F70, 0x10F81, WB::ALetter),
        (0x10F82, 0x10F85, WB::Extend), (0x10FB0, 0x10FC4, WB::ALetter),
        (0x10FE0, 0x10FF6, WB::ALetter), (0x11000, 0x11002, WB::Extend),
        (0x11003, 0x11037, WB::ALetter), (0x11038, 0x11046, WB::Extend),
        (0x11066, 0x1106F, WB::Numeric), (0x11070, 0x11070, WB::Extend),
        (0x11071, 0x11072, WB::ALetter), (0x11073, 0x11074, WB::Extend),
        (0x11075, 0x11075, WB::ALetter), (0x1107F, 0x11082, WB::Extend),
        (0x11083, 0x110AF, WB::ALetter), (0x110B0, 0x110BA, WB::Extend),
        (0x110BD, 0x110BD, WB::Format), (0x110C2, 0x110C2, WB::Extend),
        (0x110CD, 0x110CD, WB::Format), (0x110D0, 0x110E8, WB::ALetter),
        (0x110F0, 0x110F9, WB::Numeric), (0x11100, 0x11102, WB::Extend),
        (0x11103, 0x11126, WB::ALetter), (0x11127, 0x11134, WB::Extend),
        (0x11136, 0x1113F, WB::Numeric), (0x11144, 0x11144, WB::ALetter),
        (0x11145, 0x11146, WB::Extend), (0x11147, 0x11147, WB::ALetter),
        (0x11150, 0x11172, WB::ALetter), (0x11173, 0x11173, WB::Extend),
        (0x11176, 0x11176, WB::ALetter), (0x11180, 0x11182, WB::Extend),
        (0x11183, 0x111B2, WB::ALetter), (0x111B3, 0x111C0, WB::Extend),
        (0x111C1, 0x111C4, WB::ALetter), (0x111C9, 0x111CC, WB::Extend),
        (0x111CE, 0x111CF, WB::Extend), (0x111D0, 0x111D9, WB::Numeric),
        (0x111DA, 0x111DA, WB::ALetter), (0x111DC, 0x111DC, WB::ALetter),
        (0x11200, 0x11211, WB::ALetter), (0x11213, 0x1122B, WB::ALetter),
        (0x1122C, 0x11237, WB::Extend), (0x1123E, 0x1123E, WB::Extend),
        (0x11280, 0x11286, WB::ALetter), (0x11288, 0x11288, WB::ALetter),
        (0x1128A, 0x1128D, WB::ALetter), (0x1128F, 0x1129D, WB::ALetter),
        (0x1129F, 0x112A8, WB::ALetter), (0x112B0, 0x112DE, WB::ALetter),
        (0x112DF, 0x112EA, WB::Extend), (0x112F0, 0x112F9, WB::Numeric),
        (0x11300, 0x11303, WB::Extend), (0x11305, 0x1130C, WB::ALetter),
        (0x1130F, 0x11310, WB::ALetter), (0x11313, 0x11328, WB::ALetter),
        (0x1132A, 0x11330, WB::ALetter), (0x11332, 0x11333, WB::ALetter),
        (0x11335, 0x11339, WB::ALetter), (0x1133B, 0x1133C, WB::Extend),
        (0x1133D, 0x1133D, WB::ALetter), (0x1133E, 0x11344, WB::Extend),
        (0x11347, 0x11348, WB::Extend), (0x1134B, 0x1134D, WB::Extend),
        (0x11350, 0x11350, WB::ALetter), (0x11357, 0x11357, WB::Extend),
        (0x1135D, 0x11361, WB::ALetter), (0x11362, 0x11363, WB::Extend),
        (0x11366, 0x1136C, WB::Extend), (0x11370, 0x11374, WB::Extend),
        (0x11400, 0x11434, WB::ALetter), (0x11435, 0x11446, WB::Extend),
        (0x11447, 0x1144A, WB::ALetter), (0x11450, 0x11459, WB::Numeric),
        (0x1145E, 0x1145E, WB::Extend), (0x1145F, 0x11461, WB::ALetter),
        (0x11480, 0x114AF, WB::ALetter), (0x114B0, 0x114C3, WB::Extend),
        (0x114C4, 0x114C5, WB::ALetter), (0x114C7, 0x114C7, WB::ALetter),
        (0x114D0, 0x114D9, WB::Numeric), (0x11580, 0x115AE, WB::ALetter),
        (0x115AF, 0x115B5, WB::Extend), (0x115B8, 0x115C0, WB::Extend),
        (0x115D8, 0x115DB, WB::ALetter), (0x115DC, 0x115DD, WB::Extend),
        (0x11600, 0x1162F, WB::ALetter), (0x11630, 0x11640, WB::Extend),
        (0x11644, 0x11644, WB::ALetter), (0x11650, 0x11659, WB::Numeric),
        (0x11680, 0x116AA, WB::ALetter), (0x116AB, 0x116B7, WB::Extend),
        (0x116B8, 0x116B8, WB::ALetter), (0x116C0, 0x116C9, WB::Numeric),
        (0x1171D, 0x1172B, WB::Extend), (0x11730, 0x11739, WB::Numeric),
        (0x11800, 0x1182B, WB::ALetter), (0x1182C, 0x1183A, WB::Extend),
        (0x118A0, 0x118DF, WB::ALetter), (0x118E0, 0x118E9, WB::Numeric),
        (0x118FF, 0x11906, WB::ALetter), (0x11909, 0x11909, WB::ALetter),
        (0x1190C, 0x11913, WB::ALetter), (0x11915, 0x11916, WB::ALetter),
        (0x11918, 0x1192F, WB::ALetter), (0x11930, 0x11935, WB::Extend),
        (0x11937, 0x11938, WB::Extend), (0x1193B, 0x1193E, WB::Extend),
        (0x1193F, 0x1193F, WB::ALetter), (0x11940, 0x11940, WB::Extend),
        (0x11941, 0x11941, WB::ALetter), (0x11942, 0x11943, WB::Extend),
        (0x11950, 0x11959, WB::Numeric), (0x119A0, 0x119A7, WB::ALetter),
        (0x119AA, 0x119D0, WB::ALetter), (0x119D1, 0x119D7, WB::Extend),
        (0x119DA, 0x119E0, WB::Extend), (0x119E1, 0x119E1, WB::ALetter),
        (0x119E3, 0x119E3, WB::ALetter), (0x119E4, 0x119E4, WB::Extend),
        (0x11A00, 0x11A00, WB::ALetter), (0x11A01, 0x11A0A, WB::Extend),
        (0x11A0B, 0x11A32, WB::ALetter), (0x11A33, 0x11A39, WB::Extend),
        (0x11A3A, 0x11A3A, WB::ALetter), (0x11A3B, 0x11A3E, WB::Extend),
        (0x11A47, 0x11A47, WB::Extend), (0x11A50, 0x11A50, WB::ALetter),
        (0x11A51, 0x11A5B, WB::Extend), (0x11A5C, 0x11A89, WB::ALetter),
        (0x11A8A, 0x11A99, WB::Extend), (0x11A9D, 0x11A9D, WB::ALetter),
        (0x11AB0, 0x11AF8, WB::ALetter), (0x11C00, 0x11C08, WB::ALetter),
        (0x11C0A, 0x11C2E, WB::ALetter), (0x11C2F, 0x11C36, WB::Extend),
        (0x11C38, 0x11C3F, WB::Extend), (0x11C40, 0x11C40, WB::ALetter),
        (0x11C50, 0x11C59, WB::Numeric), (0x11C72, 0x11C8F, WB::ALetter),
        (0x11C92, 0x11CA7, WB::Extend), (0x11CA9, 0x11CB6, WB::Extend),
        (0x11D00, 0x11D06, WB::ALetter), (0x11D08, 0x11D09, WB::ALetter),
        (0x11D0B, 0x11D30, WB::ALetter), (0x11D31, 0x11D36, WB::Extend),
        (0x11D3A, 0x11D3A, WB::Extend), (0x11D3C, 0x11D3D, WB::Extend),
        (0x11D3F, 0x11D45, WB::Extend), (0x11D46, 0x11D46, WB::ALetter),
        (0x11D47, 0x11D47, WB::Extend), (0x11D50, 0x11D59, WB::Numeric),
        (0x11D60, 0x11D65, WB::ALetter), (0x11D67, 0x11D68, WB::ALetter),
        (0x11D6A, 0x11D89, WB::ALetter), (0x11D8A, 0x11D8E, WB::Extend),
        (0x11D90, 0x11D91, WB::Extend), (0x11D93, 0x11D97, WB::Extend),
        (0x11D98, 0x11D98, WB::ALetter), (0x11DA0, 0x11DA9, WB::Numeric),
        (0x11EE0, 0x11EF2, WB::ALetter), (0x11EF3, 0x11EF6, WB::Extend),
        (0x11FB0, 0x11FB0, WB::ALetter), (0x12000, 0x12399, WB::ALetter),
        (0x12400, 0x1246E, WB::ALetter), (0x12480, 0x12543, WB::ALetter),
        (0x12F90, 0x12FF0, WB::ALetter), (0x13000, 0x1342E, WB::ALetter),
        (0x13430, 0x13438, WB::Format), (0x14400, 0x14646, WB::ALetter),
        (0x16800, 0x16A38, WB::ALetter), (0x16A40, 0x16A5E, WB::ALetter),
        (0x16A60, 0x16A69, WB::Numeric), (0x16A70, 0x16ABE, WB::ALetter),
        (0x16AC0, 0x16AC9, WB::Numeric), (0x16AD0, 0x16AED, WB::ALetter),
        (0x16AF0, 0x16AF4, WB::Extend), (0x16B00, 0x16B2F, WB::ALetter),
        (0x16B30, 0x16B36, WB::Extend), (0x16B40, 0x16B43, WB::ALetter),
        (0x16B50, 0x16B59, WB::Numeric), (0x16B63, 0x16B77, WB::ALetter),
        (0x16B7D, 0x16B8F, WB::ALetter), (0x16E40, 0x16E7F, WB::ALetter),
        (0x16F00, 0x16F4A, WB::ALetter), (0x16F4F, 0x16F4F, WB::Extend),
        (0x16F50, 0x16F50, WB::ALetter), (0x16F51, 0x16F87, WB::Extend),
        (0x16F8F, 0x16F92, WB::Extend), (0x16F93, 0x16F9F, WB::ALetter),
        (0x16FE0, 0x16FE1, WB::ALetter), (0x16FE3, 0x16FE3, WB::ALetter),
        (0x16FE4, 0x16FE4, WB::Extend), (0x16FF0, 0x16FF1, WB::Extend),
        (0x1AFF0, 0x1AFF3, WB::Katakana), (0x1AFF5, 0x1AFFB, WB::Katakana),
        (0x1AFFD, 0x1AFFE, WB::Katakana), (0x1B000, 0x1B000, WB::Katakana),
        (0x1B120, 0x1B122, WB::Katakana), (0x1B164, 0x1B167, WB::Katakana),
        (0x1BC00, 0x1BC6A, WB::ALetter), (0x1BC70, 0x1BC7C, WB::ALetter),
        (0x1BC80, 0x1BC88, WB::ALetter), (0x1BC90, 0x1BC99, WB::ALetter),
        (0x1BC9D, 0x1BC9E, WB::Extend), (0x1BCA0, 0x1BCA3, WB::Format),
        (0x1CF00, 0x1CF2D, WB::Extend), (0x1CF30, 0x1CF46, WB::Extend),
        (0x1D165, 0x1D169, WB::Extend), (0x1D16D, 0x1D172, WB::Extend),
        (0x1D173, 0x1D17A, WB::Format), (0x1D17B, 0x1D182, WB::Extend),
        (0x1D185, 0x1D18B, WB::Extend), (0x1D1AA, 0x1D1AD, WB::Extend),
        (0x1D242, 0x1D244, WB::Extend), (0x1D400, 0x1D454, WB::ALetter),
        (0x1D456, 0x1D49C, WB::ALetter), (0x1D49E, 0x1D49F, WB::ALetter),
        (0x1D4A2, 0x1D4A2, WB::ALetter), (0x1D4A5, 0x1D4A6, WB::ALetter),
        (0x1D4A9, 0x1D4AC, WB::ALetter), (0x1D4AE, 0x1D4B9, WB::ALetter),
        (0x1D4BB, 0x1D4BB, WB::ALetter), (0x1D4BD, 0x1D4C3, WB::ALetter),
        (0x1D4C5, 0x1D505, WB::ALetter), (0x1D507, 0x1D50A, WB::ALetter),
        (0x1D50D, 0x1D514, WB::ALetter), (0x1D516, 0x1D51C, WB::ALetter),
        (0x1D51E, 0x1D539, WB::ALetter), (0x1D53B, 0x1D53E, WB::ALetter),
        (0x1D540, 0x1D544, WB::ALetter), (0x1D546, 0x1D546, WB::ALetter),
        (0x1D54A, 0x1D550, WB::ALetter), (0x1D552, 0x1D6A5, WB::ALetter),
        (0x1D6A8, 0x1D6C0, WB::ALetter), (0x1D6C2, 0x1D6DA, WB::ALetter),
        (0x1D6DC, 0x1D6FA, WB::ALetter), (0x1D6FC, 0x1D714, WB::ALetter),
        (0x1D716, 0x1D734, WB::ALetter), (0x1D736, 0x1D74E, WB::ALetter),
        (0x1D750, 0x1D76E, WB::ALetter), (0x1D770, 0x1D788, WB::ALetter),
        (0x1D78A, 0x1D7A8, WB::ALetter), (0x1D7AA, 0x1D7C2, WB::ALetter),
        (0x1D7C4, 0x1D7CB, WB::ALetter), (0x1D7CE, 0x1D7FF, WB::Numeric),
        (0x1DA00, 0x1DA36, WB::Extend), (0x1DA3B, 0x1DA6C, WB::Extend),
        (0x1DA75, 0x1DA75, WB::Extend), (0x1DA84, 0x1DA84, WB::Extend),
        (0x1DA9B, 0x1DA9F, WB::Extend), (0x1DAA1, 0x1DAAF, WB::Extend),
        (0x1DF00, 0x1DF1E, WB::ALetter), (0x1E000, 0x1E006, WB::Extend),
        (0x1E008, 0x1E018, WB::Extend), (0x1E01B, 0x1E021, WB::Extend),
        (0x1E023, 0x1E024, WB::Extend), (0x1E026, 0x1E02A, WB::Extend),
        (0x1E100, 0x1E12C, WB::ALetter), (0x1E130, 0x1E136, WB::Extend),
        (0x1E137, 0x1E13D, WB::ALetter), (0x1E140, 0x1E149, WB::Numeric),
        (0x1E14E, 0x1E14E, WB::ALetter), (0x1E290, 0x1E2AD, WB::ALetter),
        (0x1E2AE, 0x1E2AE, WB::Extend), (0x1E2C0, 0x1E2EB, WB::ALetter),
        (0x1E2EC, 0x1E2EF, WB::Extend), (0x1E2F0, 0x1E2F9, WB::Numeric),
        (0x1E7E0, 0x1E7E6, WB::ALetter), (0x1E7E8, 0x1E7EB, WB::ALetter),
        (0x1E7ED, 0x1E7EE, WB::ALetter), (0x1E7F0, 0x1E7FE, WB::ALetter),
        (0x1E800, 0x1E8C4, WB::ALetter), (0x1E8D0, 0x1E8D6, WB::Extend),
        (0x1E900, 0x1E943, WB::ALetter), (0x1E944, 0x1E94A, WB::Extend),
        (0x1E94B, 0x1E94B, WB::ALetter), (0x1E950, 0x1E959, WB::Numeric),
        (0x1EE00, 0x1EE03, WB::ALetter), (0x1EE05, 0x1EE1F, WB::ALetter),
        (0x1EE21, 0x1EE22, WB::ALetter), (0x1EE24, 0x1EE24, WB::ALetter),
        (0x1EE27, 0x1EE27, WB::ALetter), (0x1EE29, 0x1EE32, WB::ALetter),
        (0x1EE34, 0x1EE37, WB::ALetter), (0x1EE39, 0x1EE39, WB::ALetter),
        (0x1EE3B, 0x1EE3B, WB::ALetter), (0x1EE42, 0x1EE42, WB::ALetter),
        (0x1EE47, 0x1EE47, WB::ALetter), (0x1EE49, 0x1EE49, WB::ALetter),
        (0x1EE4B, 0x1EE4B, WB::ALetter), (0x1EE4D, 0x1EE4F, WB::ALetter),
        (0x1EE51, 0x1EE52, WB::ALetter), (0x1EE54, 0x1EE54, WB::ALetter),
        (0x1EE57, 0x1EE57, WB::ALetter), (0x1EE59, 0x1EE59, WB::ALetter),
        (0x1EE5B, 0x1EE5B, WB::ALetter), (0x1EE5D, 0x1EE5D, WB::ALetter),
        (0x1EE5F, 0x1EE5F, WB::ALetter), (0x1EE61, 0x1EE62, WB::ALetter),
        (0x1EE64, 0x1EE64, WB::ALetter), (0x1EE67, 0x1EE6A, WB::ALetter),
        (0x1EE6C, 0x1EE72, WB::ALetter), (0x1EE74, 0x1EE77, WB::ALetter),
        (0x1EE79, 0x1EE7C, WB::ALetter), (0x1EE7E, 0x1EE7E, WB::ALetter),
        (0x1EE80, 0x1EE89, WB::ALetter), (0x1EE8B, 0x1EE9B, WB::ALetter),
        (0x1EEA1, 0x1EEA3, WB::ALetter), (0x1EEA5, 0x1EEA9, WB::ALetter),
        (0x1EEAB, 0x1EEBB, WB::ALetter), (0x1F130, 0x1F149, WB::ALetter),
        (0x1F150, 0x1F169, WB::ALetter), (0x1F170, 0x1F189, WB::ALetter),
        (0x1F1E6, 0x1F1FF, WB::RegionalIndicator), (0x1F3FB, 0x1F3FF, WB::Extend),
        (0x1FBF0, 0x1FBF9, WB::Numeric), (0xE0001, 0xE0001, WB::Format),
        (0xE0020, 0xE007F, WB::Extend), (0xE0100, 0xE01EF, WB::Extend),
    ];
}

pub(crate) mod indic {
    use crate::properties::IndicConjunctBreak as InCB;

    pub(crate) static INDIC_CONJUNCT_BREAK_TABLE: &[(u32, u32, InCB)] = &[
        (0x0300, 0x034E, InCB::Extend), (0x0350, 0x036F, InCB::Extend),
        (0x0483, 0x0487, InCB::Extend), (0x0591, 0x05BD, InCB::Extend),
        (0x05BF, 0x05BF, InCB::Extend), (0x05C1, 0x05C2, InCB::Extend),
        (0x05C4, 0x05C5, InCB::Extend), (0x05C7, 0x05C7, InCB::Extend),
        (0x0610, 0x061A, InCB::Extend), (0x064B, 0x065F, InCB::Extend),
        (0x0670, 0x0670, InCB::Extend), (0x06D6, 0x06DC, InCB::Extend),
        (0x06DF, 0x06E4, InCB::Extend), (0x06E7, 0x06E8, InCB::Extend),
        (0x06EA, 0x06ED, InCB::Extend), (0x0711, 0x0711, InCB::Extend),
        (0x0730, 0x074A, InCB::Extend), (0x07EB, 0x07F3, InCB::Extend),
        (0x07FD, 0x07FD, InCB::Extend), (0x0816, 0x0819, InCB::Extend),
        (0x081B, 0x0823, InCB::Extend), (0x0825, 0x0827, InCB::Extend),
        (0x0829, 0x082D, InCB::Extend), (0x0859, 0x085B, InCB::Extend),
        (0x0898, 0x089F, InCB::Extend), (0x08CA, 0x08E1, InCB::Extend),
        (0x08E3, 0x08FF, InCB::Extend), (0x0915, 0x0939, InCB::Consonant),
        (0x093C, 0x093C, InCB::Extend), (0x094D, 0x094D, InCB::Linker),
        (0x0951, 0x0954, InCB::Extend), (0x0958, 0x095F, InCB::Consonant),
        (0x0978, 0x097F, InCB::Consonant), (0x0995, 0x09A8, InCB::Consonant),
        (0x09AA, 0x09B0, InCB::Consonant), (0x09B2, 0x09B2, InCB::Consonant),
        (0x09B6, 0x09B9, InCB::Consonant), (0x09BC, 0x09BC, InCB::Extend),
        (0x09CD, 0x09CD, InCB::Linker), (0x09DC, 0x09DD, InCB::Consonant),
        (0x09DF, 0x09DF, InCB::Consonant), (0x09F0, 0x09F1, InCB::Consonant),
        (0x09FE, 0x09FE, InCB::Extend), (0x0A3C, 0x0A3C, InCB::Extend),
        (0x0A4D, 0x0A4D, InCB::Extend), (0x0A95, 0x0AA8, InCB::Consonant),
        (0x0AAA, 0x0AB0, InCB::Consonant), (0x0AB2, 0x0AB3, InCB::Consonant),
        (0x0AB5, 0x0AB9, InCB::Consonant), (0x0ABC, 0x0ABC, InCB::Extend),
        (0x0ACD, 0x0ACD, InCB::Linker), (0x0AF9, 0x0AF9, InCB::Consonant),
        (0x0B15, 0x0B28, InCB::Consonant), (0x0B2A, 0x0B30, InCB::Consonant),
        (0x0B32, 0x0B33, InCB::Consonant), (0x0B35, 0x0B39, InCB::Consonant),
        (0x0B3C, 0x0B3C, InCB::Extend), (0x0B4D, 0x0B4D, InCB::Linker),
        (0x0B5C, 0x0B5D, InCB::Consonant), (0x0B5F, 0x0B5F, InCB::Consonant),
        (0x0B71, 0x0B71, InCB::Consonant), (0x0BCD, 0x0BCD, InCB::Extend),
        (0x0C15, 0x0C28, InCB::Consonant), (0x0C2A, 0x0C39, InCB::Consonant),
        (0x0C3C, 0x0C3C, InCB::Extend), (0x0C4D, 0x0C4D, InCB::Linker),
        (0x0C55, 0x0C56, InCB::Extend), (0x0C58, 0x0C5A, InCB::Consonant),
        (0x0CBC, 0x0CBC, InCB::Extend), (0x0CCD, 0x0CCD, InCB::Extend),
        (0x0D15, 0x0D3A, InCB::Consonant), (0x0D3B, 0x0D3C, InCB::Extend),
        (0x0D4D, 0x0D4D, InCB::Linker), (0x0DCA, 0x0DCA, InCB::Extend),
        (0x0E38, 0x0E3A, InCB::Extend), (0x0E48, 0x0E4B, InCB::Extend),
        (0x0EB8, 0x0EBA, InCB::Extend), (0x0EC8, 0x0ECB, InCB::Extend),
        (0x0F18, 0x0F19, InCB::Extend), (0x0F35, 0x0F35, InCB::Extend),
        (0x0F37, 0x0F37, InCB::Extend), (0x0F39, 0x0F39, InCB::Extend),
        (0x0F71, 0x0F72, InCB::Extend), (0x0F74, 0x0F74, InCB::Extend),
        (0x0F7A, 0x0F7D, InCB::Extend), (0x0F80, 0x0F80, InCB::Extend),
        (0x0F82, 0x0F84, InCB::Extend), (0x0F86, 0x0F87, InCB::Extend),
        (0x0FC6, 0x0FC6, InCB::Extend), (0x1037, 0x1037, InCB::Extend),
        (0x1039, 0x103A, InCB::Extend), (0x108D, 0x108D, InCB::Extend),
        (0x135D, 0x135F, InCB::Extend), (0x1714, 0x1714, InCB::Extend),
        (0x17D2, 0x17D2, InCB::Extend), (0x17DD, 0x17DD, InCB::Extend),
        (0x18A9, 0x18A9, InCB::Extend), (0x1939, 0x193B, InCB::Extend),
        (0x1A17, 0x1A18, InCB::Extend), (0x1A60, 0x1A60, InCB::Extend),
        (0x1A75, 0x1A7C, InCB::Extend), (0x1A7F, 0x1A7F, InCB::Extend),
        (0x1AB0, 0x1ABD, InCB::Extend), (0x1ABF, 0x1ACE, InCB::Extend),
        (0x1B34, 0x1B34, InCB::Extend), (0x1B6B, 0x1B73, InCB::Extend),
        (0x1BAB, 0x1BAB, InCB::Extend), (0x1BE6, 0x1BE6, InCB::Extend),
        (0x1C37, 0x1C37, InCB::Extend), (0x1CD0, 0x1CD2, InCB::Extend),
        (0x1CD4, 0x1CE0, InCB::Extend), (0x1CE2, 0x1CE8, InCB::Extend),
        (0x1CED, 0x1CED, InCB::Extend), (0x1CF4, 0x1CF4, InCB::Extend),
        (0x1CF8, 0x1CF9, InCB::Extend), (0x1DC0, 0x1DFF, InCB::Extend),
        (0x200D, 0x200D, InCB::Extend), (0x20D0, 0x20DC, InCB::Extend),
        (0x20E1, 0x20E1, InCB::Extend), (0x20E5, 0x20F0, InCB::Extend),
        (0x2CEF, 0x2CF1, InCB::Extend), (0x2D7F, 0x2D7F, InCB::Extend),
        (0x2DE0, 0x2DFF, InCB::Extend), (0x302A, 0x302F, InCB::Extend),
        (0x3099, 0x309A, InCB::Extend), (0xA66F, 0xA66F, InCB::Extend),
        (0xA674, 0xA67D, InCB::Extend), (0xA69E, 0xA69F, InCB::Extend),
        (0xA6F0, 0xA6F1, InCB::Extend), (0xA806, 0xA806, InCB::Extend),
        (0xA82C, 0xA82C, InCB::Extend), (0xA8C4, 0xA8C4, InCB::Extend),
        (0xA8E0, 0xA8F1, InCB::Extend), (0xA92B, 0xA92D, InCB::Extend),
        (0xA9B3, 0xA9B3, InCB::Extend), (0xAAB0, 0xAAB0, InCB::Extend),
        (0xAAB2, 0xAAB4, InCB::Extend), (0xAAB7, 0xAAB8, InCB::Extend),
        (0xAABE, 0xAABF, InCB::Extend), (0xAAC1, 0xAAC1, InCB::Extend),
        (0xAAF6, 0xAAF6, InCB::Extend), (0xABED, 0xABED, InCB::Extend),
        (0xFB1E, 0xFB1E, InCB::Extend), (0xFE20, 0xFE2F, InCB::Extend),
        (0x101FD, 0x101FD, InCB::Extend), (0x102E0, 0x102E0, InCB::Extend),
        (0x10376, 0x1037A, InCB::Extend), (0x10A0D, 0x10A0D, InCB::Extend),
        (0x10A0F, 0x10A0F, InCB::Extend), (0x10A38, 0x10A3A, InCB::Extend),
        (0x10A3F, 0x10A3F, InCB::Extend), (0x10AE5, 0x10AE6, InCB::Extend),
        (0x10D24, 0x10D27, InCB::Extend), (0x10EAB, 0x10EAC, InCB::Extend),
        (0x10F46, 0x10F50, InCB::Extend), (0x10F82, 0x10F85, InCB::Extend),
        (0x11046, 0x11046, InCB::Extend), (0x11070, 0x11070, InCB::Extend),
        (0x1107F, 0x1107F, InCB::Extend), (0x110B9, 0x110BA, InCB::Extend),
        (0x11100, 0x11102, InCB::Extend), (0x11133, 0x11134, InCB::Extend),
        (0x11173, 0x11173, InCB::Extend), (0x111CA, 0x111CA, InCB::Extend),
        (0x11236, 0x11236, InCB::Extend), (0x112E9, 0x112EA, InCB::Extend),
        (0x1133B, 0x1133C, InCB::Extend), (0x11366, 0x1136C, InCB::Extend),
        (0x11370, 0x11374, InCB::Extend), (0x11442, 0x11442, InCB::Extend),
        (0x11446, 0x11446, InCB::Extend), (0x1145E, 0x1145E, InCB::Extend),
        (0x114C2, 0x114C3, InCB::Extend), (0x115BF, 0x115C0, InCB::Extend),
        (0x1163F, 0x1163F, InCB::Extend), (0x116B7, 0x116B7, InCB::Extend),
        (0x1172B, 0x1172B, InCB::Extend), (0x11839, 0x1183A, InCB::Extend),
        (0x1193E, 0x1193E, InCB::Extend), (0x11943, 0x11943, InCB::Extend),
        (0x119E0, 0x119E0, InCB::Extend), (0x11A34, 0x11A34, InCB::Extend),
        (0x11A47, 0x11A47, InCB::Extend), (0x11A99, 0x11A99, InCB::Extend),
        (0x11C3F, 0x11C3F, InCB::Extend), (0x11D42, 0x11D42, InCB::Extend),
        (0x11D44, 0x11D45, InCB::Extend), (0x11D97, 0x11D97, InCB::Extend),
        (0x16AF0, 0x16AF4, InCB::Extend), (0x16B30, 0x16B36, InCB::Extend),
        (0x1BC9E, 0x1BC9E, InCB::Extend), (0x1D165, 0x1D165, InCB::Extend),
        (0x1D167, 0x1D169, InCB::Extend), (0x1D16E, 0x1D172, InCB::Extend),
        (0x1D17B, 0x1D182, InCB::Extend), (0x1D185, 0x1D18B, InCB::Extend),
        (0x1D1AA, 0x1D1AD, InCB::Extend), (0x1D242, 0x1D244, InCB::Extend),
        (0x1E000, 0x1E006, InCB::Extend), (0x1E008, 0x1E018, InCB::Extend),
        (0x1E01B, 0x1E021, InCB::Extend), (0x1E023, 0x1E024, InCB::Extend),
        (0x1E026, 0x1E02A, InCB::Extend), (0x1E130, 0x1E136, InCB::Extend),
        (0x1E2AE, 0x1E2AE, InCB::Extend), (0x1E2EC, 0x1E2EF, InCB::Extend),
        (0x1E8D0, 0x1E8D6, InCB::Extend), (0x1E944, 0x1E94A, InCB::Extend),
    ];
}

pub(crate) mod derived {
    pub(crate) static EXTENDED_PICTOGRAPHIC: &[(u32, u32)] = &[
        (0x00A9, 0x00A9), (0x00AE, 0x00AE), (0x203C, 0x203C), (0x2049, 0x2049), (0x2122, 0x2122),
        (0x2139, 0x2139), (0x2194, 0x2199), (0x21A9, 0x21AA), (0x231A, 0x231B), (0x2328, 0x2328),
        (0x2388, 0x2388), (0x23CF, 0x23CF), (0x23E9, 0x23F3), (0x23F8, 0x23FA), (0x24C2, 0x24C2),
        (0x25AA, 0x25AB), (0x25B6, 0x25B6), (0x25C0, 0x25C0), (0x25FB, 0x25FE), (0x2600, 0x2605),
        (0x2607, 0x2612), (0x2614, 0x2685), (0x2690, 0x2705), (0x2708, 0x2712), (0x2714, 0x2714),
        (0x2716, 0x2716), (0x271D, 0x271D), (0x2721, 0x2721), (0x2728, 0x2728), (0x2733, 0x2734),
        (0x2744, 0x2744), (0x2747, 0x2747), (0x274C, 0x274C), (0x274E, 0x274E), (0x2753, 0x2755),
        (0x2757, 0x2757), (0x2763, 0x2767), (0x2795, 0x2797), (0x27A1, 0x27A1), (0x27B0, 0x27B0),
        (0x27BF, 0x27BF), (0x2934, 0x2935), (0x2B05, 0x2B07), (0x2B1B, 0x2B1C), (0x2B50, 0x2B50),
        (0x2B55, 0x2B55), (0x3030, 0x3030), (0x303D, 0x303D), (0x3297, 0x3297), (0x3299, 0x3299),
        (0x1F000, 0x1F0FF), (0x1F10D, 0x1F10F), (0x1F12F, 0x1F12F), (0x1F16C, 0x1F171),
        (0x1F17E, 0x1F17F), (0x1F18E, 0x1F18E), (0x1F191, 0x1F19A), (0x1F1AD, 0x1F1E5),
        (0x1F201, 0x1F20F), (0x1F21A, 0x1F21A), (0x1F22F, 0x1F22F), (0x1F232, 0x1F23A),
        (0x1F23C, 0x1F23F), (0x1F249, 0x1F3FA), (0x1F400, 0x1F53D), (0x1F546, 0x1F64F),
        (0x1F680, 0x1F6FF), (0x1F774, 0x1F77F), (0x1F7D5, 0x1F7FF), (0x1F80C, 0x1F80F),
        (0x1F848, 0x1F84F), (0x1F85A, 0x1F85F), (0x1F888, 0x1F88F), (0x1F8AE, 0x1F8FF),
        (0x1F90C, 0x1F93A), (0x1F93C, 0x1F945), (0x1F947, 0x1FAFF), (0x1FC00, 0x1FFFD),
    ];

    pub(crate) static SOFT_DOTTED: &[(u32, u32)] = &[
        (0x0069, 0x006A), (0x012F, 0x012F), (0x0249, 0x0249), (0x0268, 0x0268), (0x029D, 0x029D),
        (0x02B2, 0x02B2), (0x03F3, 0x03F3), (0x0456, 0x0456), (0x0458, 0x0458), (0x1D62, 0x1D62),
        (0x1D96, 0x1D96), (0x1DA4, 0x1DA4), (0x1DA8, 0x1DA8), (0x1E2D, 0x1E2D), (0x1ECB, 0x1ECB),
        (0x2071, 0x2071), (0x2148, 0x2149), (0x2C7C, 0x2C7C), (0x1D422, 0x1D423),
        (0x1D456, 0x1D457), (0x1D48A, 0x1D48B), (0x1D4BE, 0x1D4BF), (0x1D4F2, 0x1D4F3),
        (0x1D526, 0x1D527), (0x1D55A, 0x1D55B), (0x1D58E, 0x1D58F), (0x1D5C2, 0x1D5C3),
        (0x1D5F6, 0x1D5F7), (0x1D62A, 0x1D62B), (0x1D65E, 0x1D65F), (0x1D692, 0x1D693),
        (0x1DF1A, 0x1DF1A),
    ];

    pub(crate) static CASED: &[(u32, u32)] = &[
        (0x0041, 0x005A), (0x0061, 0x007A), (0x00AA, 0x00AA), (0x00B5, 0x00B5), (0x00BA, 0x00BA),
        (0x00C0, 0x00D6), (0x00D8, 0x00F6), (0x00F8, 0x01BA), (0x01BC, 0x01BF), (0x01C4, 0x0293),
        (0x0295, 0x02B8), (0x02C0, 0x02C1), (0x02E0, 0x02E4), (0x0345, 0x0345), (0x0370, 0x0373),
        (0x0376, 0x0377), (0x037A, 0x037D), (0x037F, 0x037F), (0x0386, 0x0386), (0x0388, 0x038A),
        (0x038C, 0x038C), (0x038E, 0x03A1), (0x03A3, 0x03F5), (0x03F7, 0x0481), (0x048A, 0x052F),
        (0x0531, 0x0556), (0x0560, 0x0588), (0x10A0, 0x10C5), (0x10C7, 0x10C7), (0x10CD, 0x10CD),
        (0x10D0, 0x10FA), (0x10FD, 0x10FF), (0x13A0, 0x13F5), (0x13F8, 0x13FD), (0x1C80, 0x1C88),
        (0x1C90, 0x1CBA), (0x1CBD, 0x1CBF), (0x1D00, 0x1DBF), (0x1E00, 0x1F15), (0x1F18, 0x1F1D),
        (0x1F20, 0x1F45), (0x1F48, 0x1F4D), (0x1F50, 0x1F57), (0x1F59, 0x1F59), (0x1F5B, 0x1F5B),
        (0x1F5D, 0x1F5D), (0x1F5F, 0x1F7D), (0x1F80, 0x1FB4), (0x1FB6, 0x1FBC), (0x1FBE, 0x1FBE),
        (0x1FC2, 0x1FC4), (0x1FC6, 0x1FCC), (0x1FD0, 0x1FD3), (0x1FD6, 0x1FDB), (0x1FE0, 0x1FEC),
        (0x1FF2, 0x1FF4), (0x1FF6, 0x1FFC), (0x2071, 0x2071), (0x207F, 0x207F), (0x2090, 0x209C),
        (0x2102, 0x2102), (0x2107, 0x2107), (0x210A, 0x2113), (0x2115, 0x2115), (0x2119, 0x211D),
        (0x2124, 0x2124), (0x2126, 0x2126), (0x2128, 0x2128), (0x212A, 0x212D), (0x212F, 0x2134),
        (0x2139, 0x2139), (0x213C, 0x213F), (0x2145, 0x2149), (0x214E, 0x214E), (0x2160, 0x217F),
        (0x2183, 0x2184), (0x24B6, 0x24E9), (0x2C00, 0x2CE4), (0x2CEB, 0x2CEE), (0x2CF2, 0x2CF3),
        (0x2D00, 0x2D25), (0x2D27, 0x2D27), (0x2D2D, 0x2D2D), (0xA640, 0xA66D), (0xA680, 0xA69D),
        (0xA722, 0xA787), (0xA78B, 0xA78E), (0xA790, 0xA7CA), (0xA7D0, 0xA7D1), (0xA7D3, 0xA7D3),
        (0xA7D5, 0xA7D9), (0xA7F5, 0xA7F6), (0xA7F8, 0xA7FA), (0xAB30, 0xAB5A), (0xAB5C, 0xAB68),
        (0xAB70, 0xABBF), (0xFB00, 0xFB06), (0xFB13, 0xFB17), (0xFF21, 0xFF3A), (0xFF41, 0xFF5A),
        (0x10400, 0x1044F), (0x104B0, 0x104D3), (0x104D8, 0x104FB), (0x10570, 0x1057A),
        (0x1057C, 0x1058A), (0x1058C, 0x10592), (0x10594, 0x10595), (0x10597, 0x105A1),
        (0x105A3, 0x105B1), (0x105B3, 0x105B9), (0x105BB, 0x105BC), (0x10780, 0x10780),
        (0x10783, 0x10785), (0x10787, 0x107B0), (0x107B2, 0x107BA), (0x10C80, 0x10CB2),
        (0x10CC0, 0x10CF2), (0x118A0, 0x118DF), (0x16E40, 0x16E7F), (0x1D400, 0x1D454),
        (0x1D456, 0x1D49C), (0x1D49E, 0x1D49F), (0x1D4A2, 0x1D4A2), (0x1D4A5, 0x1D4A6),
        (0x1D4A9, 0x1D4AC), (0x1D4AE, 0x1D4B9), (0x1D4BB, 0x1D4BB), (0x1D4BD, 0x1D4C3),
        (0x1D4C5, 0x1D505), (0x1D507, 0x1D50A), (0x1D50D, 0x1D514), (0x1D516, 0x1D51C),
        (0x1D51E, 0x1D539), (0x1D53B, 0x1D53E), (0x1D540, 0x1D544), (0x1D546, 0x1D546),
        (0x1D54A, 0x1D550), (0x1D552, 0x1D6A5), (0x1D6A8, 0x1D6C0), (0x1D6C2, 0x1D6DA),
        (0x1D6DC, 0x1D6FA), (0x1D6FC, 0x1D714), (0x1D716, 0x1D734), (0x1D736, 0x1D74E),
        (0x1D750, 0x1D76E), (0x1D770, 0x1D788), (0x1D78A, 0x1D7A8), (0x1D7AA, 0x1D7C2),
        (0x1D7C4, 0x1D7CB), (0x1DF00, 0x1DF09), (0x1DF0B, 0x1DF1E), (0x1E900, 0x1E943),
        (0x1F130, 0x1F149), (0x1F150, 0x1F169), (0x1F170, 0x1F189),
    ];

    pub(crate) static CASE_IGNORABLE: &[(u32, u32)] = &[
        (0x0027, 0x0027), (0x002E, 0x002E), (0x003A, 0x003A), (0x005E, 0x005E), (0x0060, 0x0060),
        (0x00A8, 0x00A8), (0x00AD, 0x00AD), (0x00AF, 0x00AF), (0x00B4, 0x00B4), (0x00B7, 0x00B8),
        (0x02B0, 0x036F), (0x0374, 0x0375), (0x037A, 0x037A), (0x0384, 0x0385), (0x0387, 0x0387),
        (0x0483, 0x0489), (0x0559, 0x0559), (0x055F, 0x055F), (0x0591, 0x05BD), (0x05BF, 0x05BF),
        (0x05C1, 0x05C2), (0x05C4, 0x05C5), (0x05C7, 0x05C7), (0x05F4, 0x05F4), (0x0600, 0x0605),
        (0x0610, 0x061A), (0x061C, 0x061C), (0x0640, 0x0640), (0x064B, 0x065F), (0x0670, 0x0670),
        (0x06D6, 0x06DD), (0x06DF, 0x06E8), (0x06EA, 0x06ED), (0x070F, 0x070F), (0x0711, 0x0711),
        (0x0730, 0x074A), (0x07A6, 0x07B0), (0x07EB, 0x07F5), (0x07FA, 0x07FA), (0x07FD, 0x07FD),
        (0x0816, 0x082D), (0x0859, 0x085B), (0x0888, 0x0888), (0x0890, 0x0891), (0x0898, 0x089F),
        (0x08C9, 0x0902), (0x093A, 0x093A), (0x093C, 0x093C), (0x0941, 0x0948), (0x094D, 0x094D),
        (0x0951, 0x0957), (0x0962, 0x0963), (0x0971, 0x0971), (0x0981, 0x0981), (0x09BC, 0x09BC),
        (0x09C1, 0x09C4), (0x09CD, 0x09CD), (0x09E2, 0x09E3), (0x09FE, 0x09FE), (0x0A01, 0x0A02),
        (0x0A3C, 0x0A3C), (0x0A41, 0x0A42), (0x0A47, 0x0A48), (0x0A4B, 0x0A4D), (0x0A51, 0x0A51),
        (0x0A70, 0x0A71), (0x0A75, 0x0A75), (0x0A81, 0x0A82), (0x0ABC, 0x0ABC), (0x0AC1, 0x0AC5),
        (0x0AC7, 0x0AC8), (0x0ACD, 0x0ACD), (0x0AE2, 0x0AE3), (0x0AFA, 0x0AFF), (0x0B01, 0x0B01),
        (0x0B3C, 0x0B3C), (0x0B3F, 0x0B3F), (0x0B41, 0x0B44), (0x0B4D, 0x0B4D), (0x0B55, 0x0B56),
        (0x0B62, 0x0B63), (0x0B82, 0x0B82), (0x0BC0, 0x0BC0), (0x0BCD, 0x0BCD), (0x0C00, 0x0C00),
        (0x0C04, 0x0C04), (0x0C3C, 0x0C3C), (0x0C3E, 0x0C40), (0x0C46, 0x0C48), (0x0C4A, 0x0C4D),
        (0x0C55, 0x0C56), (0x0C62, 0x0C63), (0x0C81, 0x0C81), (0x0CBC, 0x0CBC), (0x0CBF, 0x0CBF),
        (0x0CC6, 0x0CC6), (0x0CCC, 0x0CCD), (0x0CE2, 0x0CE3), (0x0D00, 0x0D01), (0x0D3B, 0x0D3C),
        (0x0D41, 0x0D44), (0x0D4D, 0x0D4D), (0x0D62, 0x0D63), (0x0D81, 0x0D81), (0x0DCA, 0x0DCA),
        (0x0DD2, 0x0DD4), (0x0DD6, 0x0DD6), (0x0E31, 0x0E31), (0x0E34, 0x0E3A), (0x0E46, 0x0E4E),
        (0x0EB1, 0x0EB1), (0x0EB4, 0x0EBC), (0x0EC6, 0x0EC6), (0x0EC8, 0x0ECD), (0x0F18, 0x0F19),
        (0x0F35, 0x0F35), (0x0F37, 0x0F37), (0x0F39, 0x0F39), (0x0F71, 0x0F7E), (0x0F80, 0x0F84),
        (0x0F86, 0x0F87), (0x0F8D, 0x0F97), (0x0F99, 0x0FBC), (0x0FC6, 0x0FC6), (0x102D, 0x1030),
        (0x1032, 0x1037), (0x1039, 0x103A), (0x103D, 0x103E), (0x1058, 0x1059), (0x105E, 0x1060),
        (0x1071, 0x1074), (0x1082, 0x1082), (0x1085, 0x1086), (0x108D, 0x108D), (0x109D, 0x109D),
        (0x10FC, 0x10FC), (0x135D, 0x135F), (0x1712, 0x1714), (0x1732, 0x1733), (0x1752, 0x1753),
        (0x1772, 0x1773), (0x17B4, 0x17B5), (0x17B7, 0x17BD), (0x17C6, 0x17C6), (0x17C9, 0x17D3),
        (0x17D7, 0x17D7), (0x17DD, 0x17DD), (0x180B, 0x180F), (0x1843, 0x1843), (0x1885, 0x1886),
        (0x18A9, 0x18A9), (0x1920, 0x1922), (0x1927, 0x1928), (0x1932, 0x1932), (0x1939, 0x193B),
        (0x1A17, 0x1A18), (0x1A1B, 0x1A1B), (0x1A56, 0x1A56), (0x1A58, 0x1A5E), (0x1A60, 0x1A60),
        (0x1A62, 0x1A62), (0x1A65, 0x1A6C), (0x1A73, 0x1A7C), (0x1A7F, 0x1A7F), (0x1AA7, 0x1AA7),
        (0x1AB0, 0x1ACE), (0x1B00, 0x1B03), (0x1B34, 0x1B34), (0x1B36, 0x1B3A), (0x1B3C, 0x1B3C),
        (0x1B42, 0x1B42), (0x1B6B, 0x1B73), (0x1B80, 0x1B81), (0x1BA2, 0x1BA5), (0x1BA8, 0x1BA9),
        (0x1BAB, 0x1BAD), (0x1BE6, 0x1BE6), (0x1BE8, 0x1BE9), (0x1BED, 0x1BED), (0x1BEF, 0x1BF1),
        (0x1C2C, 0x1C33), (0x1C36, 0x1C37), (0x1C78, 0x1C7D), (0x1CD0, 0x1CD2), (0x1CD4, 0x1CE0),
        (0x1CE2, 0x1CE8), (0x1CED, 0x1CED), (0x1CF4, 0x1CF4), (0x1CF8, 0x1CF9), (0x1D2C, 0x1D6A),
        (0x1D78, 0x1D78), (0x1D9B, 0x1DFF), (0x1FBD, 0x1FBD), (0x1FBF, 0x1FC1), (0x1FCD, 0x1FCF),
        (0x1FDD, 0x1FDF), (0x1FED, 0x1FEF), (0x1FFD, 0x1FFE), (0x200B, 0x200F), (0x2018, 0x2019),
        (0x2024, 0x2024), (0x2027, 0x2027), (0x202A, 0x202E), (0x2060, 0x2064), (0x2066, 0x206F),
        (0x2071, 0x2071), (0x207F, 0x207F), (0x2090, 0x209C), (0x20D0, 0x20F0), (0x2C7C, 0x2C7D),
        (0x2CEF, 0x2CF1), (0x2D6F, 0x2D6F), (0x2D7F, 0x2D7F), (0x2DE0, 0x2DFF), (0x2E2F, 0x2E2F),
        (0x3005, 0x3005), (0x302A, 0x302D), (0x3031, 0x3035), (0x303B, 0x303B), (0x3099, 0x309E),
        (0x30FC, 0x30FE), (0xA015, 0xA015), (0xA4F8, 0xA4FD), (0xA60C, 0xA60C), (0xA66F, 0xA672),
        (0xA674, 0xA67D), (0xA67F, 0xA67F), (0xA69C, 0xA69F), (0xA6F0, 0xA6F1), (0xA700, 0xA721),
        (0xA770, 0xA770), (0xA788, 0xA78A), (0xA7F2, 0xA7F4), (0xA7F8, 0xA7F9), (0xA802, 0xA802),
        (0xA806, 0xA806), (0xA80B, 0xA80B), (0xA825, 0xA826), (0xA82C, 0xA82C), (0xA8C4, 0xA8C5),
        (0xA8E0, 0xA8F1), (0xA8FF, 0xA8FF), (0xA926, 0xA92D), (0xA947, 0xA951), (0xA980, 0xA982),
        (0xA9B3, 0xA9B3), (0xA9B6, 0xA9B9), (0xA9BC, 0xA9BD), (0xA9CF, 0xA9CF), (0xA9E5, 0xA9E6),
        (0xAA29, 0xAA2E), (0xAA31, 0xAA32), (0xAA35, 0xAA36), (0xAA43, 0xAA43), (0xAA4C, 0xAA4C),
        (0xAA70, 0xAA70), (0xAA7C, 0xAA7C), (0xAAB0, 0xAAB0), (0xAAB2, 0xAAB4), (0xAAB7, 0xAAB8),
        (0xAABE, 0xAABF), (0xAAC1, 0xAAC1), (0xAADD, 0xAADD), (0xAAEC, 0xAAED), (0xAAF3, 0xAAF4),
        (0xAAF6, 0xAAF6), (0xAB5B, 0xAB5F), (0xAB69, 0xAB6B), (0xABE5, 0xABE5), (0xABE8, 0xABE8),
        (0xABED, 0xABED), (0xFB1E, 0xFB1E), (0xFBB2, 0xFBC2), (0xFE00, 0xFE0F), (0xFE13, 0xFE13),
        (0xFE20, 0xFE2F), (0xFE52, 0xFE52), (0xFE55, 0xFE55), (0xFEFF, 0xFEFF), (0xFF07, 0xFF07),
        (0xFF0E, 0xFF0E), (0xFF1A, 0xFF1A), (0xFF3E, 0xFF3E), (0xFF40, 0xFF40), (0xFF70, 0xFF70),
        (0xFF9E, 0xFF9F), (0xFFE3, 0xFFE3), (0xFFF9, 0xFFFB), (0x101FD, 0x101FD),
        (0x102E0, 0x102E0), (0x10376, 0x1037A), (0x10780, 0x10785), (0x10787, 0x107B0),
        (0x107B2, 0x107BA), (0x10A01, 0x10A03), (0x10A05, 0x10A06), (0x10A0C, 0x10A0F),
        (0x10A38, 0x10A3A), (0x10A3F, 0x10A3F), (0x10AE5, 0x10AE6), (0x10D24, 0x10D27),
        (0x10EAB, 0x10EAC), (0x10F46, 0x10F50), (0x10F82, 0x10F85), (0x11001, 0x11001),
        (0x11038, 0x11046), (0x11070, 0x11070), (0x11073, 0x11074), (0x1107F, 0x11081),
        (0x110B3, 0x110B6), (0x110B9, 0x110BA), (0x110BD, 0x110BD), (0x110C2, 0x110C2),
        (0x110CD, 0x110CD), (0x11100, 0x11102), (0x11127, 0x1112B), (0x1112D, 0x11134),
        (0x11173, 0x11173), (0x11180, 0x11181), (0x111B6, 0x111BE), (0x111C9, 0x111CC),
        (0x111CF, 0x111CF), (0x1122F, 0x11231), (0x11234, 0x11234), (0x11236, 0x11237),
        (0x1123E, 0x1123E), (0x112DF, 0x112DF), (0x112E3, 0x112EA), (0x11300, 0x11301),
        (0x1133B, 0x1133C), (0x11340, 0x11340), (0x11366, 0x1136C), (0x11370, 0x11374),
        (0x11438, 0x1143F), (0x11442, 0x11444), (0x11446, 0x11446), (0x1145E, 0x1145E),
        (0x114B3, 0x114B8), (0x114BA, 0x114BA), (0x114BF, 0x114C0), (0x114C2, 0x114C3),
        (0x115B2, 0x115B5), (0x115BC, 0x115BD), (0x115BF, 0x115C0), (0x115DC, 0x115DD),
        (0x11633, 0x1163A), (0x1163D, 0x1163D), (0x1163F, 0x11640), (0x116AB, 0x116AB),
        (0x116AD, 0x116AD), (0x116B0, 0x116B5), (0x116B7, 0x116B7), (0x1171D, 0x1171F),
        (0x11722, 0x11725), (0x11727, 0x1172B), (0x1182F, 0x11837), (0x11839, 0x1183A),
        (0x1193B, 0x1193C), (0x1193E, 0x1193E), (0x11943, 0x11943), (0x119D4, 0x119D7),
        (0x119DA, 0x119DB), (0x119E0, 0x119E0), (0x11A01, 0x11A0A), (0x11A33, 0x11A38),
        (0x11A3B, 0x11A3E), (0x11A47, 0x11A47), (0x11A51, 0x11A56), (0x11A59, 0x11A5B),
        (0x11A8A, 0x11A96), (0x11A98, 0x11A99), (0x11C30, 0x11C36), (0x11C38, 0x11C3D),
        (0x11C3F, 0x11C3F), (0x11C92, 0x11CA7), (0x11CAA, 0x11CB0), (0x11CB2, 0x11CB3),
        (0x11CB5, 0x11CB6), (0x11D31, 0x11D36), (0x11D3A, 0x11D3A), (0x11D3C, 0x11D3D),
        (0x11D3F, 0x11D45), (0x11D47, 0x11D47), (0x11D90, 0x11D91), (0x11D95, 0x11D95),
        (0x11D97, 0x11D97), (0x11EF3, 0x11EF4), (0x13430, 0x13438), (0x16AF0, 0x16AF4),
        (0x16B30, 0x16B36), (0x16B40, 0x16B43), (0x16F4F, 0x16F4F), (0x16F8F, 0x16F9F),
        (0x16FE0, 0x16FE1), (0x16FE3, 0x16FE4), (0x1AFF0, 0x1AFF3), (0x1AFF5, 0x1AFFB),
        (0x1AFFD, 0x1AFFE), (0x1BC9D, 0x1BC9E), (0x1BCA0, 0x1BCA3), (0x1CF00, 0x1CF2D),
        (0x1CF30, 0x1CF46), (0x1D167, 0x1D169), (0x1D173, 0x1D182), (0x1D185, 0x1D18B),
        (0x1D1AA, 0x1D1AD), (0x1D242, 0x1D244), (0x1DA00, 0x1DA36), (0x1DA3B, 0x1DA6C),
        (0x1DA75, 0x1DA75), (0x1DA84, 0x1DA84), (0x1DA9B, 0x1DA9F), (0x1DAA1, 0x1DAAF),
        (0x1E000, 0x1E006), (0x1E008, 0x1E018), (0x1E01B, 0x1E021), (0x1E023, 0x1E024),
        (0x1E026, 0x1E02A), (0x1E130, 0x1E13D), (0x1E2AE, 0x1E2AE), (0x1E2EC, 0x1E2EF),
        (0x1E8D0, 0x1E8D6), (0x1E944, 0x1E94B), (0x1F3FB, 0x1F3FF), (0xE0001, 0xE0001),
        (0xE0020, 0xE007F), (0xE0100, 0xE01EF),
    ];
}

pub(crate) mod case {
    pub(crate) static LOWERCASE_TABLE: &[(u32, u32)] = &[
        (0x0041, 0x0061), (0x0042, 0x0062), (0x0043, 0x0063), (0x0044, 0x0064), (0x0045, 0x0065),
        (0x0046, 0x0066), (0x0047, 0x0067), (0x0048, 0x0068), (0x0049, 0x0069), (0x004A, 0x006A),
        (0x004B, 0x006B), (0x004C, 0x006C), (0x004D, 0x006D), (0x004E, 0x006E), (0x004F, 0x006F),
        (0x0050, 0x0070), (0x0051, 0x0071), (0x0052, 0x0072), (0x0053, 0x0073), (0x0054, 0x0074),
        (0x0055, 0x0075), (0x0056, 0x0076), (0x0057, 0x0077), (0x0058, 0x0078), (0x0059, 0x0079),
        (0x005A, 0x007A), (0x00C0, 0x00E0), (0x00C1, 0x00E1), (0x00C2, 0x00E2), (0x00C3, 0x00E3),
        (0x00C4, 0x00E4), (0x00C5, 0x00E5), (0x00C6, 0x00E6), (0x00C7, 0x00E7), (0x00C8, 0x00E8),
        (0x00C9, 0x00E9), (0x00CA, 0x00EA), (0x00CB, 0x00EB), (0x00CC, 0x00EC), (0x00CD, 0x00ED),
        (0x00CE, 0x00EE), (0x00CF, 0x00EF), (0x00D0, 0x00F0), (0x00D1, 0x00F1), (0x00D2, 0x00F2),
        (0x00D3, 0x00F3), (0x00D4, 0x00F4), (0x00D5, 0x00F5), (0x00D6, 0x00F6), (0x00D8, 0x00F8),
        (0x00D9, 0x00F9), (0x00DA, 0x00FA), (0x00DB, 0x00FB), (0x00DC, 0x00FC), (0x00DD, 0x00FD),
        (0x00DE, 0x00FE), (0x0100, 0x0101), (0x0102, 0x0103), (0x0104, 0x0105), (0x0106, 0x0107),
        (0x0108, 0x0109), (0x010A, 0x010B), (0x010C, 0x010D), (0x010E, 0x010F), (0x0110, 0x0111),
        (0x0112, 0x0113), (0x0114, 0x0115), (0x0116, 0x0117), (0x0118, 0x0119), (0x011A, 0x011B),
        (0x011C, 0x011D), (0x011E, 0x011F), (0x0120, 0x0121), (0x0122, 0x0123), (0x0124, 0x0125),
        (0x0126, 0x0127), (0x0128, 0x0129), (0x012A, 0x012B), (0x012C, 0x012D), (0x012E, 0x012F),
        (0x0130, 0x0069), (0x0132, 0x0133), (0x0134, 0x0135), (0x0136, 0x0137), (0x0139, 0x013A),
        (0x013B, 0x013C), (0x013D, 0x013E), (0x013F, 0x0140), (0x0141, 0x0142), (0x0143, 0x0144),
        (0x0145, 0x0146), (0x0147, 0x0148), (0x014A, 0x014B), (0x014C, 0x014D), (0x014E, 0x014F),
        (0x0150, 0x0151), (0x0152, 0x0153), (0x0154, 0x0155), (0x0156, 0x0157), (0x0158, 0x0159),
        (0x015A, 0x015B), (0x015C, 0x015D), (0x015E, 0x015F), (0x0160, 0x0161), (0x0162, 0x0163),
        (0x0164, 0x0165), (0x0166, 0x0167), (0x0168, 0x0169), (0x016A, 0x016B), (0x016C, 0x016D),
        (0x016E, 0x016F), (0x0170, 0x0171), (0x0172, 0x0173), (0x0174, 0x0175), (0x0176, 0x0177),
        (0x0178, 0x00FF), (0x0179, 0x017A), (0x017B, 0x017C), (0x017D, 0x017E), (0x0181, 0x0253),
        (0x0182, 0x0183), (0x0184, 0x0185), (0x0186, 0x0254), (0x0187, 0x0188), (0x0189, 0x0256),
        (0x018A, 0x0257), (0x018B, 0x018C), (0x018E, 0x01DD), (0x018F, 0x0259), (0x0190, 0x025B),
        (0x0191, 0x0192), (0x0193, 0x0260), (0x0194, 0x0263), (0x0196, 0x0269), (0x0197, 0x0268),
        (0x0198, 0x0199), (0x019C, 0x026F), (0x019D, 0x0272), (0x019F, 0x0275), (0x01A0, 0x01A1),
        (0x01A2, 0x01A3), (0x01A4, 0x01A5), (0x01A6, 0x0280), (0x01A7, 0x01A8), (0x01A9, 0x0283),
        (0x01AC, 0x01AD), (0x01AE, 0x0288), (0x01AF, 0x01B0), (0x01B1, 0x028A), (0x01B2, 0x028B),
        (0x01B3, 0x01B4), (0x01B5, 0x01B6), (0x01B7, 0x0292), (0x01B8, 0x01B9), (0x01BC, 0x01BD),
        (0x01C4, 0x01C6), (0x01C5, 0x01C6), (0x01C7, 0x01C9), (0x01C8, 0x01C9), (0x01CA, 0x01CC),
        (0x01CB, 0x01CC), (0x01CD, 0x01CE), (0x01CF, 0x01D0), (0x01D1, 0x01D2), (0x01D3, 0x01D4),
        (0x01D5, 0x01D6), (0x01D7, 0x01D8), (0x01D9, 0x01DA), (0x01DB, 0x01DC), (0x01DE, 0x01DF),
        (0x01E0, 0x01E1), (0x01E2, 0x01E3), (0x01E4, 0x01E5), (0x01E6, 0x01E7), (0x01E8, 0x01E9),
        (0x01EA, 0x01EB), (0x01EC, 0x01ED), (0x01EE, 0x01EF), (0x01F1, 0x01F3), (0x01F2, 0x01F3),
        (0x01F4, 0x01F5), (0x01F6, 0x0195), (0x01F7, 0x01BF), (0x01F8, 0x01F9), (0x01FA, 0x01FB),
        (0x01FC, 0x01FD), (0x01FE, 0x01FF), (0x0200, 0x0201), (0x0202, 0x0203), (0x0204, 0x0205),
        (0x0206, 0x0207), (0x0208, 0x0209), (0x020A, 0x020B), (0x020C, 0x020D), (0x020E, 0x020F),
        (0x0210, 0x0211), (0x0212, 0x0213), (0x0214, 0x0215), (0x0216, 0x0217), (0x0218, 0x0219),
        (0x021A, 0x021B), (0x021C, 0x021D), (0x021E, 0x021F), (0x0220, 0x019E), (0x0222, 0x0223),
        (0x0224, 0x0225), (0x0226, 0x0227), (0x0228, 0x0229), (0x022A, 0x022B), (0x022C, 0x022D),
        (0x022E, 0x022F), (0x0230, 0x0231), (0x0232, 0x0233), (0x023A, 0x2C65), (0x023B, 0x023C),
        (0x023D, 0x019A), (0x023E, 0x2C66), (0x0241, 0x0242), (0x0243, 0x0180), (0x0244, 0x0289),
        (0x0245, 0x028C), (0x0246, 0x0247), (0x0248, 0x0249), (0x024A, 0x024B), (0x024C, 0x024D),
        (0x024E, 0x024F), (0x0370, 0x0371), (0x0372, 0x0373), (0x0376, 0x0377), (0x037F, 0x03F3),
        (0x0386, 0x03AC), (0x0388, 0x03AD), (0x0389, 0x03AE), (0x038A, 0x03AF), (0x038C, 0x03CC),
        (0x038E, 0x03CD), (0x038F, 0x03CE), (0x0391, 0x03B1), (0x0392, 0x03B2), (0x0393, 0x03B3),
        (0x0394, 0x03B4), (0x0395, 0x03B5), (0x0396, 0x03B6), (0x0397, 0x03B7), (0x0398, 0x03B8),
        (0x0399, 0x03B9), (0x039A, 0x03BA), (0x039B, 0x03BB), (0x039C, 0x03BC), (0x039D, 0x03BD),
        (0x039E, 0x03BE), (0x039F, 0x03BF), (0x03A0, 0x03C0), (0x03A1, 0x03C1), (0x03A3, 0x03C3),
        (0x03A4, 0x03C4), (0x03A5, 0x03C5), (0x03A6, 0x03C6), (0x03A7, 0x03C7), (0x03A8, 0x03C8),
        (0x03A9, 0x03C9), (0x03AA, 0x03CA), (0x03AB, 0x03CB), (0x03CF, 0x03D7), (0x03D8, 0x03D9),
        (0x03DA, 0x03DB), (0x03DC, 0x03DD), (0x03DE, 0x03DF), (0x03E0, 0x03E1), (0x03E2, 0x03E3),
        (0x03E4, 0x03E5), (0x03E6, 0x03E7), (0x03E8, 0x03E9), (0x03EA, 0x03EB), (0x03EC, 0x03ED),
        (0x03EE, 0x03EF), (0x03F4, 0x03B8), (0x03F7, 0x03F8), (0x03F9, 0x03F2), (0x03FA, 0x03FB),
        (0x03FD, 0x037B), (0x03FE, 0x037C), (0x03FF, 0x037D), (0x0400, 0x0450), (0x0401, 0x0451),
        (0x0402, 0x0452), (0x0403, 0x0453), (0x0404, 0x0454), (0x0405, 0x0455), (0x0406, 0x0456),
        (0x0407, 0x0457), (0x0408, 0x0458), (0x0409, 0x0459), (0x040A, 0x045A), (0x040B, 0x045B),
        (0x040C, 0x045C), (0x040D, 0x045D), (0x040E, 0x045E), (0x040F, 0x045F), (0x0410, 0x0430),
        (0x0411, 0x0431), (0x0412, 0x0432), (0x0413, 0x0433), (0x0414, 0x0434), (0x0415, 0x0435),
        (0x0416, 0x0436), (0x0417, 0x0437), (0x0418, 0x0438), (0x0419, 0x0439), (0x041A, 0x043A),
        (0x041B, 0x043B), (0x041C, 0x043C), (0x041D, 0x043D), (0x041E, 0x043E), (0x041F, 0x043F),
        (0x0420, 0x0440), (0x0421, 0x0441), (0x0422, 0x0442), (0x0423, 0x0443), (0x0424, 0x0444),
        (0x0425, 0x0445), (0x0426, 0x0446), (0x0427, 0x0447), (0x0428, 0x0448), (0x0429, 0x0449),
        (0x042A, 0x044A), (0x042B, 0x044B), (0x042C, 0x044C), (0x042D, 0x044D), (0x042E, 0x044E),
        (0x042F, 0x044F), (0x0460, 0x0461), (0x0462, 0x0463), (0x0464, 0x0465), (0x0466, 0x0467),
        (0x0468, 0x0469), (0x046A, 0x046B), (0x046C, 0x046D), (0x046E, 0x046F), (0x0470, 0x0471),
        (0x0472, 0x0473), (0x0474, 0x0475), (0x0476, 0x0477), (0x0478, 0x0479), (0x047A, 0x047B),
        (0x047C, 0x047D), (0x047E, 0x047F), (0x0480, 0x0481), (0x048A, 0x048B), (0x048C, 0x048D),
        (0x048E, 0x048F), (0x0490, 0x0491), (0x0492, 0x0493), (0x0494, 0x0495), (0x0496, 0x0497),
        (0x0498, 0x0499), (0x049A, 0x049B), (0x049C, 0x049D), (0x049E, 0x049F), (0x04A0, 0x04A1),
        (0x04A2, 0x04A3), (0x04A4, 0x04A5), (0x04A6, 0x04A7), (0x04A8, 0x04A9), (0x04AA, 0x04AB),
        (0x04AC, 0x04AD), (0x04AE, 0x04AF), (0x04B0, 0x04B1), (0x04B2, 0x04B3), (0x04B4, 0x04B5),
        (0x04B6, 0x04B7), (0x04B8, 0x04B9), (0x04BA, 0x04BB), (0x04BC, 0x04BD), (0x04BE, 0x04BF),
        (0x04C0, 0x04CF), (0x04C1, 0x04C2), (0x04C3, 0x04C4), (0x04C5, 0x04C6), (0x04C7, 0x04C8),
        (0x04C9, 0x04CA), (0x04CB, 0x04CC), (0x04CD, 0x04CE), (0x04D0, 0x04D1), (0x04D2, 0x04D3),
        (0x04D4, 0x04D5), (0x04D6, 0x04D7), (0x04D8, 0x04D9), (0x04DA, 0x04DB), (0x04DC, 0x04DD),
        (0x04DE, 0x04DF), (0x04E0, 0x04E1), (0x04E2, 0x04E3), (0x04E4, 0x04E5), (0x04E6, 0x04E7),
        (0x04E8, 0x04E9), (0x04EA, 0x04EB), (0x04EC, 0x04ED), (0x04EE, 0x04EF), (0x04F0, 0x04F1),
        (0x04F2, 0x04F3), (0x04F4, 0x04F5), (0x04F6, 0x04F7), (0x04F8, 0x04F9), (0x04FA, 0x04FB),
        (0x04FC, 0x04FD), (0x04FE, 0x04FF), (0x0500, 0x0501), (0x0502, 0x0503), (0x0504, 0x0505),
        (0x0506, 0x0507), (0x0508, 0x0509), (0x050A, 0x050B), (0x050C, 0x050D), (0x050E, 0x050F),
        (0x0510, 0x0511), (0x0512, 0x0513), (0x0514, 0x0515), (0x0516, 0x0517), (0x0518, 0x0519),
        (0x051A, 0x051B), (0x051C, 0x051D), (0x051E, 0x051F), (0x0520, 0x0521), (0x0522, 0x0523),
        (0x0524, 0x0525), (0x0526, 0x0527), (0x0528, 0x0529), (0x052A, 0x052B), (0x052C, 0x052D),
        (0x052E, 0x052F), (0x0531, 0x0561), (0x0532, 0x0562), (0x0533, 0x0563), (0x0534, 0x0564),
        (0x0535, 0x0565), (0x0536, 0x0566), (0x0537, 0x0567), (0x0538, 0x0568), (0x0539, 0x0569),
        (0x053A, 0x056A), (0x053B, 0x056B), (0x053C, 0x056C), (0x053D, 0x056D), (0x053E, 0x056E),
        (0x053F, 0x056F), (0x0540, 0x0570), (0x0541, 0x0571), (0x0542, 0x0572), (0x0543, 0x0573),
        (0x0544, 0x0574), (0x0545, 0x0575), (0x0546, 0x0576), (0x0547, 0x0577), (0x0548, 0x0578),
        (0x0549, 0x0579), (0x054A, 0x057A), (0x054B, 0x057B), (0x054C, 0x057C), (0x054D, 0x057D),
        (0x054E, 0x057E), (0x054F, 0x057F), (0x0550, 0x0580), (0x0551, 0x0581), (0x0552, 0x0582),
        (0x0553, 0x0583), (0x0554, 0x0584), (0x0555, 0x0585), (0x0556, 0x0586), (0x10A0, 0x2D00),
        (0x10A1, 0x2D01), (0x10A2, 0x2D02), (0x10A3, 0x2D03), (0x10A4, 0x2D04), (0x10A5, 0x2D05),
        (0x10A6, 0x2D06), (0x10A7, 0x2D07), (0x10A8, 0x2D08), (0x10A9, 0x2D09), (0x10AA, 0x2D0A),
        (0x10AB, 0x2D0B), (0x10AC, 0x2D0C), (0x10AD, 0x2D0D), (0x10AE, 0x2D0E), (0x10AF, 0x2D0F),
        (0x10B0, 0x2D10), (0x10B1, 0x2D11), (0x10B2, 0x2D12), (0x10B3, 0x2D13), (0x10B4, 0x2D14),
        (0x10B5, 0x2D15), (0x10B6, 0x2D16), (0x10B7, 0x2D17), (0x10B8, 0x2D18), (0x10B9, 0x2D19),
        (0x10BA, 0x2D1A), (0x10BB, 0x2D1B), (0x10BC, 0x2D1C), (0x10BD, 0x2D1D), (0x10BE, 0x2D1E),
        (0x10BF, 0x2D1F), (0x10C0, 0x2D20), (0x10C1, 0x2D21), (0x10C2, 0x2D22), (0x10C3, 0x2D23),
        (0x10C4, 0x2D24), (0x10C5, 0x2D25), (0x10C7, 0x2D27), (0x10CD, 0x2D2D), (0x13A0, 0xAB70),
        (0x13A1, 0xAB71), (0x13A2, 0xAB72), (0x13A3, 0xAB73), (0x13A4, 0xAB74), (0x13A5, 0xAB75),
        (0x13A6, 0xAB76), (0x13A7, 0xAB77), (0x13A8, 0xAB78), (0x13A9, 0xAB79), (0x13AA, 0xAB7A),
        (0x13AB, 0xAB7B), (0x13AC, 0xAB7C), (0x13AD, 0xAB7D), (0x13AE, 0xAB7E), (0x13AF, 0xAB7F),
        (0x13B0, 0xAB80), (0x13B1, 0xAB81), (0x13B2, 0xAB82), (0x13B3, 0xAB83), (0x13B4, 0xAB84),
        (0x13B5, 0xAB85), (0x13B6, 0xAB86), (0x13B7, 0xAB87), (0x13B8, 0xAB88), (0x13B9, 0xAB89),
        (0x13BA, 0xAB8A), (0x13BB, 0xAB8B), (0x13BC, 0xAB8C), (0x13BD, 0xAB8D), (0x13BE, 0xAB8E),
        (0x13BF, 0xAB8F), (0x13C0, 0xAB90), (0x13C1, 0xAB91), (0x13C2, 0xAB92), (0x13C3, 0xAB93),
        (0x13C4, 0xAB94), (0x13C5, 0xAB95), (0x13C6, 0xAB96), (0x13C7, 0xAB97), (0x13C8, 0xAB98),
        (0x13C9, 0xAB99), (0x13CA, 0xAB9A), (0x13CB, 0xAB9B), (0x13CC, 0xAB9C), (0x13CD, 0xAB9D),
        (0x13CE, 0xAB9E), (0x13CF, 0xAB9F), (0x13D0, 0xABA0), (0x13D1, 0xABA1), (0x13D2, 0xABA2),
        (0x13D3, 0xABA3), (0x13D4, 0xABA4), (0x13D5, 0xABA5), (0x13D6, 0xABA6), (0x13D7, 0xABA7),
        (0x13D8, 0xABA8), (0x13D9, 0xABA9), (0x13DA, 0xABAA), (0x13DB, 0xABAB), (0x13DC, 0xABAC),
        (0x13DD, 0xABAD), (0x13DE, 0xABAE), (0x13DF, 0xABAF), (0x13E0, 0xABB0), (0x13E1, 0xABB1),
        (0x13E2, 0xABB2), (0x13E3, 0xABB3), (0x13E4, 0xABB4), (0x13E5, 0xABB5), (0x13E6, 0xABB6),
        (0x13E7, 0xABB7), (0x13E8, 0xABB8), (0x13E9, 0xABB9), (0x13EA, 0xABBA), (0x13EB, 0xABBB),
        (0x13EC, 0xABBC), (0x13ED, 0xABBD), (0x13EE, 0xABBE), (0x13EF, 0xABBF), (0x13F0, 0x13F8),
        (0x13F1, 0x13F9), (0x13F2, 0x13FA), (0x13F3, 0x13FB), (0x13F4, 0x13FC), (0x13F5, 0x13FD),
        (0x1C90, 0x10D0), (0x1C91, 0x10D1), (0x1C92, 0x10D2), (0x1C93, 0x10D3), (0x1C94, 0x10D4),
        (0x1C95, 0x10D5), (0x1C96, 0x10D6), (0x1C97, 0x10D7), (0x1C98, 0x10D8), (0x1C99, 0x10D9),
        (0x1C9A, 0x10DA), (0x1C9B, 0x10DB), (0x1C9C, 0x10DC), (0x1C9D, 0x10DD), (0x1C9E, 0x10DE),
        (0x1C9F, 0x10DF), (0x1CA0, 0x10E0), (0x1CA1, 0x10E1), (0x1CA2, 0x10E2), (0x1CA3, 0x10E3),
        (0x1CA4, 0x10E4), (0x1CA5, 0x10E5), (0x1CA6, 0x10E6), (0x1CA7, 0x10E7), (0x1CA8, 0x10E8),
        (0x1CA9, 0x10E9), (0x1CAA, 0x10EA), (0x1CAB, 0x10EB), (0x1CAC, 0x10EC), (0x1CAD, 0x10ED),
        (0x1CAE, 0x10EE), (0x1CAF, 0x10EF), (0x1CB0, 0x10F0), (0x1CB1, 0x10F1), (0x1CB2, 0x10F2),
        (0x1CB3, 0x10F3), (0x1CB4, 0x10F4), (0x1CB5, 0x10F5), (0x1CB6, 0x10F6), (0x1CB7, 0x10F7),
        (0x1CB8, 0x10F8), (0x1CB9, 0x10F9), (0x1CBA, 0x10FA), (0x1CBD, 0x10FD), (0x1CBE, 0x10FE),
        (0x1CBF, 0x10FF), (0x1E00, 0x1E01), (0x1E02, 0x1E03), (0x1E04, 0x1E05), (0x1E06, 0x1E07),
        (0x1E08, 0x1E09), (0x1E0A, 0x1E0B), (0x1E0C, 0x1E0D), (0x1E0E, 0x1E0F), (0x1E10, 0x1E11),
        (0x1E12, 0x1E13), (0x1E14, 0x1E15), (0x1E16, 0x1E17), (0x1E18, 0x1E19), (0x1E1A, 0x1E1B),
        (0x1E1C, 0x1E1D), (0x1E1E, 0x1E1F), (0x1E20, 0x1E21), (0x1E22, 0x1E23), (0x1E24, 0x1E25),
        (0x1E26, 0x1E27), (0x1E28, 0x1E29), (0x1E2A, 0x1E2B), (0x1E2C, 0x1E2D), (0x1E2E, 0x1E2F),
        (0x1E30, 0x1E31), (0x1E32, 0x1E33), (0x1E34, 0x1E35), (0x1E36, 0x1E37), (0x1E38, 0x1E39),
        (0x1E3A, 0x1E3B), (0x1E3C, 0x1E3D), (0x1E3E, 0x1E3F), (0x1E40, 0x1E41), (0x1E42, 0x1E43),
        (0x1E44, 0x1E45), (0x1E46, 0x1E47), (0x1E48, 0x1E49), (0x1E4A, 0x1E4B), (0x1E4C, 0x1E4D),
        (0x1E4E, 0x1E4F), (0x1E50, 0x1E51), (0x1E52, 0x1E53), (0x1E54, 0x1E55), (0x1E56, 0x1E57),
        (0x1E58, 0x1E59), (0x1E5A, 0x1E5B), (0x1E5C, 0x1E5D), (0x1E5E, 0x1E5F), (0x1E60, 0x1E61),
        (0x1E62, 0x1E63), (0x1E64, 0x1E65), (0x1E66, 0x1E67), (0x1E68, 0x1E69), (0x1E6A, 0x1E6B),
        (0x1E6C, 0x1E6D), (0x1E6E, 0x1E6F), (0x1E70, 0x1E71), (0x1E72, 0x1E73), (0x1E74, 0x1E75),
        (0x1E76, 0x1E77), (0x1E78, 0x1E79), (0x1E7A, 0x1E7B), (0x1E7C, 0x1E7D), (0x1E7E, 0x1E7F),
        (0x1E80, 0x1E81), (0x1E82, 0x1E83), (0x1E84, 0x1E85), (0x1E86, 0x1E87), (0x1E88, 0x1E89),
        (0x1E8A, 0x1E8B), (0x1E8C, 0x1E8D), (0x1E8E, 0x1E8F), (0x1E90, 0x1E91), (0x1E92, 0x1E93),
        (0x1E94, 0x1E95), (0x1E9E, 0x00DF), (0x1EA0, 0x1EA1), (0x1EA2, 0x1EA3), (0x1EA4, 0x1EA5),
        (0x1EA6, 0x1EA7), (0x1EA8, 0x1EA9), (0x1EAA, 0x1EAB), (0x1EAC, 0x1EAD), (0x1EAE, 0x1EAF),
        (0x1EB0, 0x1EB1), (0x1EB2, 0x1EB3), (0x1EB4, 0x1EB5), (0x1EB6, 0x1EB7), (0x1EB8, 0x1EB9),
        (0x1EBA, 0x1EBB), (0x1EBC, 0x1EBD), (0x1EBE, 0x1EBF), (0x1EC0, 0x1EC1), (0x1EC2, 0x1EC3),
        (0x1EC4, 0x1EC5), (0x1EC6, 0x1EC7), (0x1EC8, 0x1EC9), (0x1ECA, 0x1ECB), (0x1ECC, 0x1ECD),
        (0x1ECE, 0x1ECF), (0x1ED0, 0x1ED1), (0x1ED2, 0x1ED3), (0x1ED4, 0x1ED5), (0x1ED6, 0x1ED7),
        (0x1ED8, 0x1ED9), (0x1EDA, 0x1EDB), (0x1EDC, 0x1EDD), (0x1EDE, 0x1EDF), (0x1EE0, 0x1EE1),
        (0x1EE2, 0x1EE3), (0x1EE4, 0x1EE5), (0x1EE6, 0x1EE7), (0x1EE8, 0x1EE9), (0x1EEA, 0x1EEB),
        (0x1EEC, 0x1EED), (0x1EEE, 0x1EEF), (0x1EF0, 0x1EF1), (0x1EF2, 0x1EF3), (0x1EF4, 0x1EF5),
        (0x1EF6, 0x1EF7), (0x1EF8, 0x1EF9), (0x1EFA, 0x1EFB), (0x1EFC, 0x1EFD), (0x1EFE, 0x1EFF),
        (0x1F08, 0x1F00), (0x1F09, 0x1F01), (0x1F0A, 0x1F02), (0x1F0B, 0x1F03), (0x1F0C, 0x1F04),
        (0x1F0D, 0x1F05), (0x1F0E, 0x1F06), (0x1F0F, 0x1F07), (0x1F18, 0x1F10), (0x1F19, 0x1F11),
        (0x1F1A, 0x1F12), (0x1F1B, 0x1F13), (0x1F1C, 0x1F14), (0x1F1D, 0x1F15), (0x1F28, 0x1F20),
        (0x1F29, 0x1F21), (0x1F2A, 0x1F22), (0x1F2B, 0x1F23), (0x1F2C, 0x1F24), (0x1F2D, 0x1F25),
        (0x1F2E, 0x1F26), (0x1F2F, 0x1F27), (0x1F38, 0x1F30), (0x1F39, 0x1F31), (0x1F3A, 0x1F32),
        (0x1F3B, 0x1F33), (0x1F3C, 0x1F34), (0x1F3D, 0x1F35), (0x1F3E, 0x1F36), (0x1F3F, 0x1F37),
        (0x1F48, 0x1F40), (0x1F49, 0x1F41), (0x1F4A, 0x1F42), (0x1F4B, 0x1F43), (0x1F4C, 0x1F44),
        (0x1F4D, 0x1F45), (0x1F59, 0x1F51), (0x1F5B, 0x1F53), (0x1F5D, 0x1F55), (0x1F5F, 0x1F57),
        (0x1F68, 0x1F60), (0x1F69, 0x1F61), (0x1F6A, 0x1F62), (0x1F6B, 0x1F63), (0x1F6C, 0x1F64),
        (0x1F6D, 0x1F65), (0x1F6E, 0x1F66), (0x1F6F, 0x1F67), (0x1F88, 0x1F80), (0x1F89, 0x1F81),
        (0x1F8A, 0x1F82), (0x1F8B, 0x1F83), (0x1F8C, 0x1F84), (0x1F8D, 0x1F85), (0x1F8E, 0x1F86),
        (0x1F8F, 0x1F87), (0x1F98, 0x1F90), (0x1F99, 0x1F91), (0x1F9A, 0x1F92), (0x1F9B, 0x1F93),
        (0x1F9C, 0x1F94), (0x1F9D, 0x1F95), (0x1F9E, 0x1F96), (0x1F9F, 0x1F97), (0x1FA8, 0x1FA0),
        (0x1FA9, 0x1FA1), (0x1FAA, 0x1FA2), (0x1FAB, 0x1FA3), (0x1FAC, 0x1FA4), (0x1FAD, 0x1FA5),
        (0x1FAE, 0x1FA6), (0x1FAF, 0x1FA7), (0x1FB8, 0x1FB0), (0x1FB9, 0x1FB1), (0x1FBA, 0x1F70),
        (0x1FBB, 0x1F71), (0x1FBC, 0x1FB3), (0x1FC8, 0x1F72), (0x1FC9, 0x1F73), (0x1FCA, 0x1F74),
        (0x1FCB, 0x1F75), (0x1FCC, 0x1FC3), (0x1FD8, 0x1FD0), (0x1FD9, 0x1FD1), (0x1FDA, 0x1F76),
        (0x1FDB, 0x1F77), (0x1FE8, 0x1FE0), (0x1FE9, 0x1FE1), (0x1FEA, 0x1F7A), (0x1FEB, 0x1F7B),
        (0x1FEC, 0x1FE5), (0x1FF8, 0x1F78), (0x1FF9, 0x1F79), (0x1FFA, 0x1F7C), (0x1FFB, 0x1F7D),
        (0x1FFC, 0x1FF3), (0x2126, 0x03C9), (0x212A, 0x006B), (0x212B, 0x00E5), (0x2132, 0x214E),
        (0x2160, 0x2170), (0x2161, 0x2171), (0x2162, 0x2172), (0x2163, 0x2173), (0x2164, 0x2174),
        (0x2165, 0x2175), (0x2166, 0x2176), (0x2167, 0x2177), (0x2168, 0x2178), (0x2169, 0x2179),
        (0x216A, 0x217A), (0x216B, 0x217B), (0x216C, 0x217C), (0x216D, 0x217D), (0x216E, 0x217E),
        (0x216F, 0x217F), (0x2183, 0x2184), (0x24B6, 0x24D0), (0x24B7, 0x24D1), (0x24B8, 0x24D2),
        (0x24B9, 0x24D3), (0x24BA, 0x24D4), (0x24BB, 0x24D5), (0x24BC, 0x24D6), (0x24BD, 0x24D7),
        (0x24BE, 0x24D8), (0x24BF, 0x24D9), (0x24C0, 0x24DA), (0x24C1, 0x24DB), (0x24C2, 0x24DC),
        (0x24C3, 0x24DD), (0x24C4, 0x24DE), (0x24C5, 0x24DF), (0x24C6, 0x24E0), (0x24C7, 0x24E1),
        (0x24C8, 0x24E2), (0x24C9, 0x24E3), (0x24CA, 0x24E4), (0x24CB, 0x24E5), (0x24CC, 0x24E6),
        (0x24CD, 0x24E7), (0x24CE, 0x24E8), (0x24CF, 0x24E9), (0x2C00, 0x2C30), (0x2C01, 0x2C31),
        (0x2C02, 0x2C32), (0x2C03, 0x2C33), (0x2C04, 0x2C34), (0x2C05, 0x2C35), (0x2C06, 0x2C36),
        (0x2C07, 0x2C37), (0x2C08, 0x2C38), (0x2C09, 0x2C39), (0x2C0A, 0x2C3A), (0x2C0B, 0x2C3B),
        (0x2C0C, 0x2C3C), (0x2C0D, 0x2C3D), (0x2C0E, 0x2C3E), (0x2C0F, 0x2C3F), (0x2C10, 0x2C40),
        (0x2C11, 0x2C41), (0x2C12, 0x2C42), (0x2C13, 0x2C43), (0x2C14, 0x2C44), (0x2C15, 0x2C45),
        (0x2C16, 0x2C46), (0x2C17, 0x2C47), (0x2C18, 0x2C48), (0x2C19, 0x2C49), (0x2C1A, 0x2C4A),
        (0x2C1B, 0x2C4B), (0x2C1C, 0x2C4C), (0x2C1D, 0x2C4D), (0x2C1E, 0x2C4E), (0x2C1F, 0x2C4F),
        (0x2C20, 0x2C50), (0x2C21, 0x2C51), (0x2C22, 0x2C52), (0x2C23, 0x2C53), (0x2C24, 0x2C54),
        (0x2C25, 0x2C55), (0x2C26, 0x2C56), (0x2C27, 0x2C57), (0x2C28, 0x2C58), (0x2C29, 0x2C59),
        (0x2C2A, 0x2C5A), (0x2C2B, 0x2C5B), (0x2C2C, 0x2C5C), (0x2C2D, 0x2C5D), (0x2C2E, 0x2C5E),
        (0x2C2F, 0x2C5F), (0x2C60, 0x2C61), (0x2C62, 0x026B), (0x2C63, 0x1D7D), (0x2C64, 0x027D),
        (0x2C67, 0x2C68), (0x2C69, 0x2C6A), (0x2C6B, 0x2C6C), (0x2C6D, 0x0251), (0x2C6E, 0x0271),
        (0x2C6F, 0x0250), (0x2C70, 0x0252), (0x2C72, 0x2C73), (0x2C75, 0x2C76), (0x2C7E, 0x023F),
        (0x2C7F, 0x0240), (0x2C80, 0x2C81), (0x2C82, 0x2C83), (0x2C84, 0x2C85), (0x2C86, 0x2C87),
        (0x2C88, 0x2C89), (0x2C8A, 0x2C8B), (0x2C8C, 0x2C8D), (0x2C8E, 0x2C8F), (0x2C90, 0x2C91),
        (0x2C92, 0x2C93), (0x2C94, 0x2C95), (0x2C96, 0x2C97), (0x2C98, 0x2C99), (0x2C9A, 0x2C9B),
        (0x2C9C, 0x2C9D), (0x2C9E, 0x2C9F), (0x2CA0, 0x2CA1), (0x2CA2, 0x2CA3), (0x2CA4, 0x2CA5),
        (0x2CA6, 0x2CA7), (0x2CA8, 0x2CA9), (0x2CAA, 0x2CAB), (0x2CAC, 0x2CAD), (0x2CAE, 0x2CAF),
        (0x2CB0, 0x2CB1), (0x2CB2, 0x2CB3), (0x2CB4, 0x2CB5), (0x2CB6, 0x2CB7), (0x2CB8, 0x2CB9),
        (0x2CBA, 0x2CBB), (0x2CBC, 0x2CBD), (0x2CBE, 0x2CBF), (0x2CC0, 0x2CC1), (0x2CC2, 0x2CC3),
        (0x2CC4, 0x2CC5), (0x2CC6, 0x2CC7), (0x2CC8, 0x2CC9), (0x2CCA, 0x2CCB), (0x2CCC, 0x2CCD),
        (0x2CCE, 0x2CCF), (0x2CD0, 0x2CD1), (0x2CD2, 0x2CD3), (0x2CD4, 0x2CD5), (0x2CD6, 0x2CD7),
        (0x2CD8, 0x2CD9), (0x2CDA, 0x2CDB), (0x2CDC, 0x2CDD), (0x2CDE, 0x2CDF), (0x2CE0, 0x2CE1),
        (0x2CE2, 0x2CE3), (0x2CEB, 0x2CEC), (0x2CED, 0x2CEE), (0x2CF2, 0x2CF3), (0xA640, 0xA641),
        (0xA642, 0xA643), (0xA644, 0xA645), (0xA646, 0xA647), (0xA648, 0xA649), (0xA64A, 0xA64B),
        (0xA64C, 0xA64D), (0xA64E, 0xA64F), (0xA650, 0xA651), (0xA652, 0xA653), (0xA654, 0xA655),
        (0xA656, 0xA657), (0xA658, 0xA659), (0xA65A, 0xA65B), (0xA65C, 0xA65D), (0xA65E, 0xA65F),
        (0xA660, 0xA661), (0xA662, 0xA663), (0xA664, 0xA665), (0xA666, 0xA667), (0xA668, 0xA669),
        (0xA66A, 0xA66B), (0xA66C, 0xA66D), (0xA680, 0xA681), (0xA682, 0xA683), (0xA684, 0xA685),
        (0xA686, 0xA687), (0xA688, 0xA689), (0xA68A, 0xA68B), (0xA68C, 0xA68D), (0xA68E, 0xA68F),
        (0xA690, 0xA691), (0xA692, 0xA693), (0xA694, 0xA695), (0xA696, 0xA697), (0xA698, 0xA699),
        (0xA69A, 0xA69B), (0xA722, 0xA723), (0xA724, 0xA725), (0xA726, 0xA727), (0xA728, 0xA729),
        (0xA72A, 0xA72B), (0xA72C, 0xA72D), (0xA72E, 0xA72F), (0xA732, 0xA733), (0xA734, 0xA735),
        (0xA736, 0xA737), (0xA738, 0xA739), (0xA73A, 0xA73B), (0xA73C, 0xA73D), (0xA73E, 0xA73F),
        (0xA740, 0xA741), (0xA742, 0xA743), (0xA744, 0xA745), (0xA746, 0xA747), (0xA748, 0xA749),
        (0xA74A, 0xA74B), (0xA74C, 0xA74D), (0xA74E, 0xA74F), (0xA750, 0xA751), (0xA752, 0xA753),
        (0xA754, 0xA755), (0xA756, 0xA757), (0xA758, 0xA759), (0xA75A, 0xA75B), (0xA75C, 0xA75D),
        (0xA75E, 0xA75F), (0xA760, 0xA761), (0xA762, 0xA763), (0xA764, 0xA765), (0xA766, 0xA767),
        (0xA768, 0xA769), (0xA76A, 0xA76B), (0xA76C, 0xA76D), (0xA76E, 0xA76F), (0xA779, 0xA77A),
        (0xA77B, 0xA77C), (0xA77D, 0x1D79), (0xA77E, 0xA77F), (0xA780, 0xA781), (0xA782, 0xA783),
        (0xA784, 0xA785), (0xA786, 0xA787), (0xA78B, 0xA78C), (0xA78D, 0x0265), (0xA790, 0xA791),
        (0xA792, 0xA793), (0xA796, 0xA797), (0xA798, 0xA799), (0xA79A, 0xA79B), (0xA79C, 0xA79D),
        (0xA79E, 0xA79F), (0xA7A0, 0xA7A1), (0xA7A2, 0xA7A3), (0xA7A4, 0xA7A5), (0xA7A6, 0xA7A7),
        (0xA7A8, 0xA7A9), (0xA7AA, 0x0266), (0xA7AB, 0x025C), (0xA7AC, 0x0261), (0xA7AD, 0x026C),
        (0xA7AE, 0x026A), (0xA7B0, 0x029E), (0xA7B1, 0x0287), (0xA7B2, 0x029D), (0xA7B3, 0xAB53),
        (0xA7B4, 0xA7B5), (0xA7B6, 0xA7B7), (0xA7B8, 0xA7B9), (0xA7BA, 0xA7BB), (0xA7BC, 0xA7BD),
        (0xA7BE, 0xA7BF), (0xA7C0, 0xA7C1), (0xA7C2, 0xA7C3), (0xA7C4, 0xA794), (0xA7C5, 0x0282),
        (0xA7C6, 0x1D8E), (0xA7C7, 0xA7C8), (0xA7C9, 0xA7CA), (0xA7D0, 0xA7D1), (0xA7D6, 0xA7D7),
        (0xA7D8, 0xA7D9), (0xA7F5, 0xA7F6), (0xFF21, 0xFF41), (0xFF22, 0xFF42), (0xFF23, 0xFF43),
        (0xFF24, 0xFF44), (0xFF25, 0xFF45), (0xFF26, 0xFF46), (0xFF27, 0xFF47), (0xFF28, 0xFF48),
        (0xFF29, 0xFF49), (0xFF2A, 0xFF4A), (0xFF2B, 0xFF4B), (0xFF2C, 0xFF4C), (0xFF2D, 0xFF4D),
        (0xFF2E, 0xFF4E), (0xFF2F, 0xFF4F), (0xFF30, 0xFF50), (0xFF31, 0xFF51), (0xFF32, 0xFF52),
        (0xFF33, 0xFF53), (0xFF34, 0xFF54), (0xFF35, 0xFF55), (0xFF36, 0xFF56), (0xFF37, 0xFF57),
        (0xFF38, 0xFF58), (0xFF39, 0xFF59), (0xFF3A, 0xFF5A), (0x10400, 0x10428),
        (0x10401, 0x10429), (0x10402, 0x1042A), (0x10403, 0x1042B), (0x10404, 0x1042C),
        (0x10405, 0x1042D), (0x10406, 0x1042E), (0x10407, 0x1042F), (0x10408, 0x10430),
        (0x10409, 0x10431), (0x1040A, 0x10432), (0x1040B, 0x10433), (0x1040C, 0x10434),
        (0x1040D, 0x10435), (0x1040E, 0x10436), (0x1040F, 0x10437), (0x10410, 0x10438),
        (0x10411, 0x10439), (0x10412, 0x1043A), (0x10413, 0x1043B), (0x10414, 0x1043C),
        (0x10415, 0x1043D), (0x10416, 0x1043E), (0x10417, 0x1043F), (0x10418, 0x10440),
        (0x10419, 0x10441), (0x1041A, 0x10442), (0x1041B, 0x10443), (0x1041C, 0x10444),
        (0x1041D, 0x10445), (0x1041E, 0x10446), (0x1041F, 0x10447), (0x10420, 0x10448),
        (0x10421, 0x10449), (0x10422, 0x1044A), (0x10423, 0x1044B), (0x10424, 0x1044C),
        (0x10425, 0x1044D), (0x10426, 0x1044E), (0x10427, 0x1044F), (0x104B0, 0x104D8),
        (0x104B1, 0x104D9), (0x104B2, 0x104DA), (0x104B3, 0x104DB), (0x104B4, 0x104DC),
        (0x104B5, 0x104DD), (0x104B6, 0x104DE), (0x104B7, 0x104DF), (0x104B8, 0x104E0),
        (0x104B9, 0x104E1), (0x104BA, 0x104E2), (0x104BB, 0x104E3), (0x104BC, 0x104E4),
        (0x104BD, 0x104E5), (0x104BE, 0x104E6), (0x104BF, 0x104E7), (0x104C0, 0x104E8),
        (0x104C1, 0x104E9), (0x104C2, 0x104EA), (0x104C3, 0x104EB), (0x104C4, 0x104EC),
        (0x104C5, 0x104ED), (0x104C6, 0x104EE), (0x104C7, 0x104EF), (0x104C8, 0x104F0),
        (0x104C9, 0x104F1), (0x104CA, 0x104F2), (0x104CB, 0x104F3), (0x104CC, 0x104F4),
        (0x104CD, 0x104F5), (0x104CE, 0x104F6), (0x104CF, 0x104F7), (0x104D0, 0x104F8),
        (0x104D1, 0x104F9), (0x104D2, 0x104FA), (0x104D3, 0x104FB), (0x10570, 0x10597),
        (0x10571, 0x10598), (0x10572, 0x10599), (0x10573, 0x1059A), (0x10574, 0x1059B),
        (0x10575, 0x1059C), (0x10576, 0x1059D), (0x10577, 0x1059E), (0x10578, 0x1059F),
        (0x10579, 0x105A0), (0x1057A, 0x105A1), (0x1057C, 0x105A3), (0x1057D, 0x105A4),
        (0x1057E, 0x105A5), (0x1057F, 0x105A6), (0x10580, 0x105A7), (0x10581, 0x105A8),
        (0x10582, 0x105A9), (0x10583, 0x105AA), (0x10584, 0x105AB), (0x10585, 0x105AC),
        (0x10586, 0x105AD), (0x10587, 0x105AE), (0x10588, 0x105AF), (0x10589, 0x105B0),
        (0x1058A, 0x105B1), (0x1058C, 0x105B3), (0x1058D, 0x105B4), (0x1058E, 0x105B5),
        (0x1058F, 0x105B6), (0x10590, 0x105B7), (0x10591, 0x105B8), (0x10592, 0x105B9),
        (0x10594, 0x105BB), (0x10595, 0x105BC), (0x10C80, 0x10CC0), (0x10C81, 0x10CC1),
        (0x10C82, 0x10CC2), (0x10C83, 0x10CC3), (0x10C84, 0x10CC4), (0x10C85, 0x10CC5),
        (0x10C86, 0x10CC6), (0x10C87, 0x10CC7), (0x10C88, 0x10CC8), (0x10C89, 0x10CC9),
        (0x10C8A, 0x10CCA), (0x10C8B, 0x10CCB), (0x10C8C, 0x10CCC), (0x10C8D, 0x10CCD),
        (0x10C8E, 0x10CCE), (0x10C8F, 0x10CCF), (0x10C90, 0x10CD0), (0x10C91, 0x10CD1),
        (0x10C92, 0x10CD2), (0x10C93, 0x10CD3), (0x10C94, 0x10CD4), (0x10C95, 0x10CD5),
        (0x10C96, 0x10CD6), (0x10C97, 0x10CD7), (0x10C98, 0x10CD8), (0x10C99, 0x10CD9),
        (0x10C9A, 0x10CDA), (0x10C9B, 0x10CDB), (0x10C9C, 0x10CDC), (0x10C9D, 0x10CDD),
        (0x10C9E, 0x10CDE), (0x10C9F, 0x10CDF), (0x10CA0, 0x10CE0), (0x10CA1, 0x10CE1),
        (0x10CA2, 0x10CE2), (0x10CA3, 0x10CE3), (0x10CA4, 0x10CE4), (0x10CA5, 0x10CE5),
        (0x10CA6, 0x10CE6), (0x10CA7, 0x10CE7), (0x10CA8, 0x10CE8), (0x10CA9, 0x10CE9),
        (0x10CAA, 0x10CEA), (0x10CAB, 0x10CEB), (0x10CAC, 0x10CEC), (0x10CAD, 0x10CED),
        (0x10CAE, 0x10CEE), (0x10CAF, 0x10CEF), (0x10CB0, 0x10CF0), (0x10CB1, 0x10CF1),
        (0x10CB2, 0x10CF2), (0x118A0, 0x118C0), (0x118A1, 0x118C1), (0x118A2, 0x118C2),
        (0x118A3, 0x118C3), (0x118A4, 0x118C4), (0x118A5, 0x118C5), (0x118A6, 0x118C6),
        (0x118A7, 0x118C7), (0x118A8, 0x118C8), (0x118A9, 0x118C9), (0x118AA, 0x118CA),
        (0x118AB, 0x118CB), (0x118AC, 0x118CC), (0x118AD, 0x118CD), (0x118AE, 0x118CE),
        (0x118AF, 0x118CF), (0x118B0, 0x118D0), (0x118B1, 0x118D1), (0x118B2, 0x118D2),
        (0x118B3, 0x118D3), (0x118B4, 0x118D4), (0x118B5, 0x118D5), (0x118B6, 0x118D6),
        (0x118B7, 0x118D7), (0x118B8, 0x118D8), (0x118B9, 0x118D9), (0x118BA, 0x118DA),
        (0x118BB, 0x118DB), (0x118BC, 0x118DC), (0x118BD, 0x118DD), (0x118BE, 0x118DE),
        (0x118BF, 0x118DF), (0x16E40, 0x16E60), (0x16E41, 0x16E61), (0x16E42, 0x16E62),
        (0x16E43, 0x16E63), (0x16E44, 0x16E64), (0x16E45, 0x16E65), (0x16E46, 0x16E66),
        (0x16E47, 0x16E67), (0x16E48, 0x16E68), (0x16E49, 0x16E69), (0x16E4A, 0x16E6A),
        (0x16E4B, 0x16E6B), (0x16E4C, 0x16E6C), (0x16E4D, 0x16E6D), (0x16E4E, 0x16E6E),
        (0x16E4F, 0x16E6F), (0x16E50, 0x16E70), (0x16E51, 0x16E71), (0x16E52, 0x16E72),
        (0x16E53, 0x16E73), (0x16E54, 0x16E74), (0x16E55, 0x16E75), (0x16E56, 0x16E76),
        (0x16E57, 0x16E77), (0x16E58, 0x16E78), (0x16E59, 0x16E79), (0x16E5A, 0x16E7A),
        (0x16E5B, 0x16E7B), (0x16E5C, 0x16E7C), (0x16E5D, 0x16E7D), (0x16E5E, 0x16E7E),
        (0x16E5F, 0x16E7F), (0x1E900, 0x1E922), (0x1E901, 0x1E923), (0x1E902, 0x1E924),
        (0x1E903, 0x1E925), (0x1E904, 0x1E926), (0x1E905, 0x1E927), (0x1E906, 0x1E928),
        (0x1E907, 0x1E929), (0x1E908, 0x1E92A), (0x1E909, 0x1E92B), (0x1E90A, 0x1E92C),
        (0x1E90B, 0x1E92D), (0x1E90C, 0x1E92E), (0x1E90D, 0x1E92F), (0x1E90E, 0x1E930),
        (0x1E90F, 0x1E931), (0x1E910, 0x1E932), (0x1E911, 0x1E933), (0x1E912, 0x1E934),
        (0x1E913, 0x1E935), (0x1E914, 0x1E936), (0x1E915, 0x1E937), (0x1E916, 0x1E938),
        (0x1E917, 0x1E939), (0x1E918, 0x1E93A), (0x1E919, 0x1E93B), (0x1E91A, 0x1E93C),
        (0x1E91B, 0x1E93D), (0x1E91C, 0x1E93E), (0x1E91D, 0x1E93F), (0x1E91E, 0x1E940),
        (0x1E91F, 0x1E941), (0x1E920, 0x1E942), (0x1E921, 0x1E943),
    ];

    /// Only the entries whose titlecase differs from the uppercase mapping.
    pub(crate) static TITLECASE_EXCEPTIONS: &[(u32, u32)] = &[
        (0x01C4, 0x01C5), (0x01C5, 0x01C5), (0x01C6, 0x01C5), (0x01C7, 0x01C8), (0x01C8, 0x01C8),
        (0x01C9, 0x01C8), (0x01CA, 0x01CB), (0x01CB, 0x01CB), (0x01CC, 0x01CB), (0x01F1, 0x01F2),
        (0x01F2, 0x01F2), (0x01F3, 0x01F2), (0x10D0, 0x10D0), (0x10D1, 0x10D1), (0x10D2, 0x10D2),
        (0x10D3, 0x10D3), (0x10D4, 0x10D4), (0x10D5, 0x10D5), (0x10D6, 0x10D6), (0x10D7, 0x10D7),
        (0x10D8, 0x10D8), (0x10D9, 0x10D9), (0x10DA, 0x10DA), (0x10DB, 0x10DB), (0x10DC, 0x10DC),
        (0x10DD, 0x10DD), (0x10DE, 0x10DE), (0x10DF, 0x10DF), (0x10E0, 0x10E0), (0x10E1, 0x10E1),
        (0x10E2, 0x10E2), (0x10E3, 0x10E3), (0x10E4, 0x10E4), (0x10E5, 0x10E5), (0x10E6, 0x10E6),
        (0x10E7, 0x10E7), (0x10E8, 0x10E8), (0x10E9, 0x10E9), (0x10EA, 0x10EA), (0x10EB, 0x10EB),
        (0x10EC, 0x10EC), (0x10ED, 0x10ED), (0x10EE, 0x10EE), (0x10EF, 0x10EF), (0x10F0, 0x10F0),
        (0x10F1, 0x10F1), (0x10F2, 0x10F2), (0x10F3, 0x10F3), (0x10F4, 0x10F4), (0x10F5, 0x10F5),
        (0x10F6, 0x10F6), (0x10F7, 0x10F7), (0x10F8, 0x10F8), (0x10F9, 0x10F9), (0x10FA, 0x10FA),
        (0x10FD, 0x10FD), (0x10FE, 0x10FE), (0x10FF, 0x10FF),
    ];

    pub(crate) static UPPERCASE_TABLE: &[(u32, u32)] = &[
        (0x0061, 0x0041), (0x0062, 0x0042), (0x0063, 0x0043), (0x0064, 0x0044), (0x0065, 0x0045),
        (0x0066, 0x0046), (0x0067, 0x0047), (0x0068, 0x0048), (0x0069, 0x0049), (0x006A, 0x004A),
        (0x006B, 0x004B), (0x006C, 0x004C), (0x006D, 0x004D), (0x006E, 0x004E), (0x006F, 0x004F),
        (0x0070, 0x0050), (0x0071, 0x0051), (0x0072, 0x0052), (0x0073, 0x0053), (0x0074, 0x0054),
        (0x0075, 0x0055), (0x0076, 0x0056), (0x0077, 0x0057), (0x0078, 0x0058), (0x0079, 0x0059),
        (0x007A, 0x005A), (0x00B5, 0x039C), (0x00E0, 0x00C0), (0x00E1, 0x00C1), (0x00E2, 0x00C2),
        (0x00E3, 0x00C3), (0x00E4, 0x00C4), (0x00E5, 0x00C5), (0x00E6, 0x00C6), (0x00E7, 0x00C7),
        (0x00E8, 0x00C8), (0x00E9, 0x00C9), (0x00EA, 0x00CA), (0x00EB, 0x00CB), (0x00EC, 0x00CC),
        (0x00ED, 0x00CD), (0x00EE, 0x00CE), (0x00EF, 0x00CF), (0x00F0, 0x00D0), (0x00F1, 0x00D1),
        (0x00F2, 0x00D2), (0x00F3, 0x00D3), (0x00F4, 0x00D4), (0x00F5, 0x00D5), (0x00F6, 0x00D6),
        (0x00F8, 0x00D8), (0x00F9, 0x00D9), (0x00FA, 0x00DA), (0x00FB, 0x00DB), (0x00FC, 0x00DC),
        (0x00FD, 0x00DD), (0x00FE, 0x00DE), (0x00FF, 0x0178), (0x0101, 0x0100), (0x0103, 0x0102),
        (0x0105, 0x0104), (0x0107, 0x0106), (0x0109, 0x0108), (0x010B, 0x010A), (0x010D, 0x010C),
        (0x010F, 0x010E), (0x0111, 0x0110), (0x0113, 0x0112), (0x0115, 0x0114), (0x0117, 0x0116),
        (0x0119, 0x0118), (0x011B, 0x011A), (0x011D, 0x011C), (0x011F, 0x011E), (0x0121, 0x0120),
        (0x0123, 0x0122), (0x0125, 0x0124), (0x0127, 0x0126), (0x0129, 0x0128), (0x012B, 0x012A),
        (0x012D, 0x012C), (0x012F, 0x012E), (0x0131, 0x0049), (0x0133, 0x0132), (0x0135, 0x0134),
        (0x0137, 0x0136), (0x013A, 0x0139), (0x013C, 0x013B), (0x013E, 0x013D), (0x0140, 0x013F),
        (0x0142, 0x0141), (0x0144, 0x0143), (0x0146, 0x0145), (0x0148, 0x0147), (0x014B, 0x014A),
        (0x014D, 0x014C), (0x014F, 0x014E), (0x0151, 0x0150), (0x0153, 0x0152), (0x0155, 0x0154),
        (0x0157, 0x0156), (0x0159, 0x0158), (0x015B, 0x015A), (0x015D, 0x015C), (0x015F, 0x015E),
        (0x0161, 0x0160), (0x0163, 0x0162), (0x0165, 0x0164), (0x0167, 0x0166), (0x0169, 0x0168),
        (0x016B, 0x016A), (0x016D, 0x016C), (0x016F, 0x016E), (0x0171, 0x0170), (0x0173, 0x0172),
        (0x0175, 0x0174), (0x0177, 0x0176), (0x017A, 0x0179), (0x017C, 0x017B), (0x017E, 0x017D),
        (0x017F, 0x0053), (0x0180, 0x0243), (0x0183, 0x0182), (0x0185, 0x0184), (0x0188, 0x0187),
        (0x018C, 0x018B), (0x0192, 0x0191), (0x0195, 0x01F6), (0x0199, 0x0198), (0x019A, 0x023D),
        (0x019E, 0x0220), (0x01A1, 0x01A0), (0x01A3, 0x01A2), (0x01A5, 0x01A4), (0x01A8, 0x01A7),
        (0x01AD, 0x01AC), (0x01B0, 0x01AF), (0x01B4, 0x01B3), (0x01B6, 0x01B5), (0x01B9, 0x01B8),
        (0x01BD, 0x01BC), (0x01BF, 0x01F7), (0x01C5, 0x01C4), (0x01C6, 0x01C4), (0x01C8, 0x01C7),
        (0x01C9, 0x01C7), (0x01CB, 0x01CA), (0x01CC, 0x01CA), (0x01CE, 0x01CD), (0x01D0, 0x01CF),
        (0x01D2, 0x01D1), (0x01D4, 0x01D3), (0x01D6, 0x01D5), (0x01D8, 0x01D7), (0x01DA, 0x01D9),
        (0x01DC, 0x01DB), (0x01DD, 0x018E), (0x01DF, 0x01DE), (0x01E1, 0x01E0), (0x01E3, 0x01E2),
        (0x01E5, 0x01E4), (0x01E7, 0x01E6), (0x01E9, 0x01E8), (0x01EB, 0x01EA), (0x01ED, 0x01EC),
        (0x01EF, 0x01EE), (0x01F2, 0x01F1), (0x01F3, 0x01F1), (0x01F5, 0x01F4), (0x01F9, 0x01F8),
        (0x01FB, 0x01FA), (0x01FD, 0x01FC), (0x01FF, 0x01FE), (0x0201, 0x0200), (0x0203, 0x0202),
        (0x0205, 0x0204), (0x0207, 0x0206), (0x0209, 0x0208), (0x020B, 0x020A), (0x020D, 0x020C),
        (0x020F, 0x020E), (0x0211, 0x0210), (0x0213, 0x0212), (0x0215, 0x0214), (0x0217, 0x0216),
        (0x0219, 0x0218), (0x021B, 0x021A), (0x021D, 0x021C), (0x021F, 0x021E), (0x0223, 0x0222),
        (0x0225, 0x0224), (0x0227, 0x0226), (0x0229, 0x0228), (0x022B, 0x022A), (0x022D, 0x022C),
        (0x022F, 0x022E), (0x0231, 0x0230), (0x0233, 0x0232), (0x023C, 0x023B), (0x023F, 0x2C7E),
        (0x0240, 0x2C7F), (0x0242, 0x0241), (0x0247, 0x0246), (0x0249, 0x0248), (0x024B, 0x024A),
        (0x024D, 0x024C), (0x024F, 0x024E), (0x0250, 0x2C6F), (0x0251, 0x2C6D), (0x0252, 0x2C70),
        (0x0253, 0x0181), (0x0254, 0x0186), (0x0256, 0x0189), (0x0257, 0x018A), (0x0259, 0x018F),
        (0x025B, 0x0190), (0x025C, 0xA7AB), (0x0260, 0x0193), (0x0261, 0xA7AC), (0x0263, 0x0194),
        (0x0265, 0xA78D), (0x0266, 0xA7AA), (0x0268, 0x0197), (0x0269, 0x0196), (0x026A, 0xA7AE),
        (0x026B, 0x2C62), (0x026C, 0xA7AD), (0x026F, 0x019C), (0x0271, 0x2C6E), (0x0272, 0x019D),
        (0x0275, 0x019F), (0x027D, 0x2C64), (0x0280, 0x01A6), (0x0282, 0xA7C5), (0x0283, 0x01A9),
        (0x0287, 0xA7B1), (0x0288, 0x01AE), (0x0289, 0x0244), (0x028A, 0x01B1), (0x028B, 0x01B2),
        (0x028C, 0x0245), (0x0292, 0x01B7), (0x029D, 0xA7B2), (0x029E, 0xA7B0), (0x0345, 0x0399),
        (0x0371, 0x0370), (0x0373, 0x0372), (0x0377, 0x0376), (0x037B, 0x03FD), (0x037C, 0x03FE),
        (0x037D, 0x03FF), (0x03AC, 0x0386), (0x03AD, 0x0388), (0x03AE, 0x0389), (0x03AF, 0x038A),
        (0x03B1, 0x0391), (0x03B2, 0x0392), (0x03B3, 0x0393), (0x03B4, 0x0394), (0x03B5, 0x0395),
        (0x03B6, 0x0396), (0x03B7, 0x0397), (0x03B8, 0x0398), (0x03B9, 0x0399), (0x03BA, 0x039A),
        (0x03BB, 0x039B), (0x03BC, 0x039C), (0x03BD, 0x039D), (0x03BE, 0x039E), (0x03BF, 0x039F),
        (0x03C0, 0x03A0), (0x03C1, 0x03A1), (0x03C2, 0x03A3), (0x03C3, 0x03A3), (0x03C4, 0x03A4),
        (0x03C5, 0x03A5), (0x03C6, 0x03A6), (0x03C7, 0x03A7), (0x03C8, 0x03A8), (0x03C9, 0x03A9),
        (0x03CA, 0x03AA), (0x03CB, 0x03AB), (0x03CC, 0x038C), (0x03CD, 0x038E), (0x03CE, 0x038F),
        (0x03D0, 0x0392), (0x03D1, 0x0398), (0x03D5, 0x03A6), (0x03D6, 0x03A0), (0x03D7, 0x03CF),
        (0x03D9, 0x03D8), (0x03DB, 0x03DA), (0x03DD, 0x03DC), (0x03DF, 0x03DE), (0x03E1, 0x03E0),
        (0x03E3, 0x03E2), (0x03E5, 0x03E4), (0x03E7, 0x03E6), (0x03E9, 0x03E8), (0x03EB, 0x03EA),
        (0x03ED, 0x03EC), (0x03EF, 0x03EE), (0x03F0, 0x039A), (0x03F1, 0x03A1), (0x03F2, 0x03F9),
        (0x03F3, 0x037F), (0x03F5, 0x0395), (0x03F8, 0x03F7), (0x03FB, 0x03FA), (0x0430, 0x0410),
        (0x0431, 0x0411), (0x0432, 0x0412), (0x0433, 0x0413), (0x0434, 0x0414), (0x0435, 0x0415),
        (0x0436, 0x0416), (0x0437, 0x0417), (0x0438, 0x0418), (0x0439, 0x0419), (0x043A, 0x041A),
        (0x043B, 0x041B), (0x043C, 0x041C), (0x043D, 0x041D), (0x043E, 0x041E), (0x043F, 0x041F),
        (0x0440, 0x0420), (0x0441, 0x0421), (0x0442, 0x0422), (0x0443, 0x0423), (0x0444, 0x0424),
        (0x0445, 0x0425), (0x0446, 0x0426), (0x0447, 0x0427), (0x0448, 0x0428), (0x0449, 0x0429),
        (0x044A, 0x042A), (0x044B, 0x042B), (0x044C, 0x042C), (0x044D, 0x042D), (0x044E, 0x042E),
        (0x044F, 0x042F), (0x0450, 0x0400), (0x0451, 0x0401), (0x0452, 0x0402), (0x0453, 0x0403),
        (0x0454, 0x0404), (0x0455, 0x0405), (0x0456, 0x0406), (0x0457, 0x0407), (0x0458, 0x0408),
        (0x0459, 0x0409), (0x045A, 0x040A), (0x045B, 0x040B), (0x045C, 0x040C), (0x045D, 0x040D),
        (0x045E, 0x040E), (0x045F, 0x040F), (0x0461, 0x0460), (0x0463, 0x0462), (0x0465, 0x0464),
        (0x0467, 0x0466), (0x0469, 0x0468), (0x046B, 0x046A), (0x046D, 0x046C), (0x046F, 0x046E),
        (0x0471, 0x0470), (0x0473, 0x0472), (0x0475, 0x0474), (0x0477, 0x0476), (0x0479, 0x0478),
        (0x047B, 0x047A), (0x047D, 0x047C), (0x047F, 0x047E), (0x0481, 0x0480), (0x048B, 0x048A),
        (0x048D, 0x048C), (0x048F, 0x048E), (0x0491, 0x0490), (0x0493, 0x0492), (0x0495, 0x0494),
        (0x0497, 0x0496), (0x0499, 0x0498), (0x049B, 0x049A), (0x049D, 0x049C), (0x049F, 0x049E),
        (0x04A1, 0x04A0), (0x04A3, 0x04A2), (0x04A5, 0x04A4), (0x04A7, 0x04A6), (0x04A9, 0x04A8),
        (0x04AB, 0x04AA), (0x04AD, 0x04AC), (0x04AF, 0x04AE), (0x04B1, 0x04B0), (0x04B3, 0x04B2),
        (0x04B5, 0x04B4), (0x04B7, 0x04B6), (0x04B9, 0x04B8), (0x04BB, 0x04BA), (0x04BD, 0x04BC),
        (0x04BF, 0x04BE), (0x04C2, 0x04C1), (0x04C4, 0x04C3), (0x04C6, 0x04C5), (0x04C8, 0x04C7),
        (0x04CA, 0x04C9), (0x04CC, 0x04CB), (0x04CE, 0x04CD), (0x04CF, 0x04C0), (0x04D1, 0x04D0),
        (0x04D3, 0x04D2), (0x04D5, 0x04D4), (0x04D7, 0x04D6), (0x04D9, 0x04D8), (0x04DB, 0x04DA),
        (0x04DD, 0x04DC), (0x04DF, 0x04DE), (0x04E1, 0x04E0), (0x04E3, 0x04E2), (0x04E5, 0x04E4),
        (0x04E7, 0x04E6), (0x04E9, 0x04E8), (0x04EB, 0x04EA), (0x04ED, 0x04EC), (0x04EF, 0x04EE),
        (0x04F1, 0x04F0), (0x04F3, 0x04F2), (0x04F5, 0x04F4), (0x04F7, 0x04F6), (0x04F9, 0x04F8),
        (0x04FB, 0x04FA), (0x04FD, 0x04FC), (0x04FF, 0x04FE), (0x0501, 0x0500), (0x0503, 0x0502),
        (0x0505, 0x0504), (0x0507, 0x0506), (0x0509, 0x0508), (0x050B, 0x050A), (0x050D, 0x050C),
        (0x050F, 0x050E), (0x0511, 0x0510), (0x0513, 0x0512), (0x0515, 0x0514), (0x0517, 0x0516),
        (0x0519, 0x0518), (0x051B, 0x051A), (0x051D, 0x051C), (0x051F, 0x051E), (0x0521, 0x0520),
        (0x0523, 0x0522), (0x0525, 0x0524), (0x0527, 0x0526), (0x0529, 0x0528), (0x052B, 0x052A),
        (0x052D, 0x052C), (0x052F, 0x052E), (0x0561, 0x0531), (0x0562, 0x0532), (0x0563, 0x0533),
        (0x0564, 0x0534), (0x0565, 0x0535), (0x0566, 0x0536), (0x0567, 0x0537), (0x0568, 0x0538),
        (0x0569, 0x0539), (0x056A, 0x053A), (0x056B, 0x053B), (0x056C, 0x053C), (0x056D, 0x053D),
        (0x056E, 0x053E), (0x056F, 0x053F), (0x0570, 0x0540), (0x0571, 0x0541), (0x0572, 0x0542),
        (0x0573, 0x0543), (0x0574, 0x0544), (0x0575, 0x0545), (0x0576, 0x0546), (0x0577, 0x0547),
        (0x0578, 0x0548), (0x0579, 0x0549), (0x057A, 0x054A), (0x057B, 0x054B), (0x057C, 0x054C),
        (0x057D, 0x054D), (0x057E, 0x054E), (0x057F, 0x054F), (0x0580, 0x0550), (0x0581, 0x0551),
        (0x0582, 0x0552), (0x0583, 0x0553), (0x0584, 0x0554), (0x0585, 0x0555), (0x0586, 0x0556),
        (0x10D0, 0x1C90), (0x10D1, 0x1C91), (0x10D2, 0x1C92), (0x10D3, 0x1C93), (0x10D4, 0x1C94),
        (0x10D5, 0x1C95), (0x10D6, 0x1C96), (0x10D7, 0x1C97), (0x10D8, 0x1C98), (0x10D9, 0x1C99),
        (0x10DA, 0x1C9A), (0x10DB, 0x1C9B), (0x10DC, 0x1C9C), (0x10DD, 0x1C9D), (0x10DE, 0x1C9E),
        (0x10DF, 0x1C9F), (0x10E0, 0x1CA0), (0x10E1, 0x1CA1), (0x10E2, 0x1CA2), (0x10E3, 0x1CA3),
        (0x10E4, 0x1CA4), (0x10E5, 0x1CA5), (0x10E6, 0x1CA6), (0x10E7, 0x1CA7), (0x10E8, 0x1CA8),
        (0x10E9, 0x1CA9), (0x10EA, 0x1CAA), (0x10EB, 0x1CAB), (0x10EC, 0x1CAC), (0x10ED, 0x1CAD),
        (0x10EE, 0x1CAE), (0x10EF, 0x1CAF), (0x10F0, 0x1CB0), (0x10F1, 0x1CB1), (0x10F2, 0x1CB2),
        (0x10F3, 0x1CB3), (0x10F4, 0x1CB4), (0x10F5, 0x1CB5), (0x10F6, 0x1CB6), (0x10F7, 0x1CB7),
        (0x10F8, 0x1CB8), (0x10F9, 0x1CB9), (0x10FA, 0x1CBA), (0x10FD, 0x1CBD), (0x10FE, 0x1CBE),
        (0x10FF, 0x1CBF), (0x13F8, 0x13F0), (0x13F9, 0x13F1), (0x13FA, 0x13F2), (0x13FB, 0x13F3),
        (0x13FC, 0x13F4), (0x13FD, 0x13F5), (0x1C80, 0x0412), (0x1C81, 0x0414), (0x1C82, 0x041E),
        (0x1C83, 0x0421), (0x1C84, 0x0422), (0x1C85, 0x0422), (0x1C86, 0x042A), (0x1C87, 0x0462),
        (0x1C88, 0xA64A), (0x1D79, 0xA77D), (0x1D7D, 0x2C63), (0x1D8E, 0xA7C6), (0x1E01, 0x1E00),
        (0x1E03, 0x1E02), (0x1E05, 0x1E04), (0x1E07, 0x1E06), (0x1E09, 0x1E08), (0x1E0B, 0x1E0A),
        (0x1E0D, 0x1E0C), (0x1E0F, 0x1E0E), (0x1E11, 0x1E10), (0x1E13, 0x1E12), (0x1E15, 0x1E14),
        (0x1E17, 0x1E16), (0x1E19, 0x1E18), (0x1E1B, 0x1E1A), (0x1E1D, 0x1E1C), (0x1E1F, 0x1E1E),
        (0x1E21, 0x1E20), (0x1E23, 0x1E22), (0x1E25, 0x1E24), (0x1E27, 0x1E26), (0x1E29, 0x1E28),
        (0x1E2B, 0x1E2A), (0x1E2D, 0x1E2C), (0x1E2F, 0x1E2E), (0x1E31, 0x1E30), (0x1E33, 0x1E32),
        (0x1E35, 0x1E34), (0x1E37, 0x1E36), (0x1E39, 0x1E38), (0x1E3B, 0x1E3A), (0x1E3D, 0x1E3C),
        (0x1E3F, 0x1E3E), (0x1E41, 0x1E40), (0x1E43, 0x1E42), (0x1E45, 0x1E44), (0x1E47, 0x1E46),
        (0x1E49, 0x1E48), (0x1E4B, 0x1E4A), (0x1E4D, 0x1E4C), (0x1E4F, 0x1E4E), (0x1E51, 0x1E50),
        (0x1E53, 0x1E52), (0x1E55, 0x1E54), (0x1E57, 0x1E56), (0x1E59, 0x1E58), (0x1E5B, 0x1E5A),
        (0x1E5D, 0x1E5C), (0x1E5F, 0x1E5E), (0x1E61, 0x1E60), (0x1E63, 0x1E62), (0x1E65, 0x1E64),
        (0x1E67, 0x1E66), (0x1E69, 0x1E68), (0x1E6B, 0x1E6A), (0x1E6D, 0x1E6C), (0x1E6F, 0x1E6E),
        (0x1E71, 0x1E70), (0x1E73, 0x1E72), (0x1E75, 0x1E74), (0x1E77, 0x1E76), (0x1E79, 0x1E78),
        (0x1E7B, 0x1E7A), (0x1E7D, 0x1E7C), (0x1E7F, 0x1E7E), (0x1E81, 0x1E80), (0x1E83, 0x1E82),
        (0x1E85, 0x1E84), (0x1E87, 0x1E86), (0x1E89, 0x1E88), (0x1E8B, 0x1E8A), (0x1E8D, 0x1E8C),
        (0x1E8F, 0x1E8E), (0x1E91, 0x1E90), (0x1E93, 0x1E92), (0x1E95, 0x1E94), (0x1E9B, 0x1E60),
        (0x1EA1, 0x1EA0), (0x1EA3, 0x1EA2), (0x1EA5, 0x1EA4), (0x1EA7, 0x1EA6), (0x1EA9, 0x1EA8),
        (0x1EAB, 0x1EAA), (0x1EAD, 0x1EAC), (0x1EAF, 0x1EAE), (0x1EB1, 0x1EB0), (0x1EB3, 0x1EB2),
        (0x1EB5, 0x1EB4), (0x1EB7, 0x1EB6), (0x1EB9, 0x1EB8), (0x1EBB, 0x1EBA), (0x1EBD, 0x1EBC),
        (0x1EBF, 0x1EBE), (0x1EC1, 0x1EC0), (0x1EC3, 0x1EC2), (0x1EC5, 0x1EC4), (0x1EC7, 0x1EC6),
        (0x1EC9, 0x1EC8), (0x1ECB, 0x1ECA), (0x1ECD, 0x1ECC), (0x1ECF, 0x1ECE), (0x1ED1, 0x1ED0),
        (0x1ED3, 0x1ED2), (0x1ED5, 0x1ED4), (0x1ED7, 0x1ED6), (0x1ED9, 0x1ED8), (0x1EDB, 0x1EDA),
        (0x1EDD, 0x1EDC), (0x1EDF, 0x1EDE), (0x1EE1, 0x1EE0), (0x1EE3, 0x1EE2), (0x1EE5, 0x1EE4),
        (0x1EE7, 0x1EE6), (0x1EE9, 0x1EE8), (0x1EEB, 0x1EEA), (0x1EED, 0x1EEC), (0x1EEF, 0x1EEE),
        (0x1EF1, 0x1EF0), (0x1EF3, 0x1EF2), (0x1EF5, 0x1EF4), (0x1EF7, 0x1EF6), (0x1EF9, 0x1EF8),
        (0x1EFB, 0x1EFA), (0x1EFD, 0x1EFC), (0x1EFF, 0x1EFE), (0x1F00, 0x1F08), (0x1F01, 0x1F09),
        (0x1F02, 0x1F0A), (0x1F03, 0x1F0B), (0x1F04, 0x1F0C), (0x1F05, 0x1F0D), (0x1F06, 0x1F0E),
        (0x1F07, 0x1F0F), (0x1F10, 0x1F18), (0x1F11, 0x1F19), (0x1F12, 0x1F1A), (0x1F13, 0x1F1B),
        (0x1F14, 0x1F1C), (0x1F15, 0x1F1D), (0x1F20, 0x1F28), (0x1F21, 0x1F29), (0x1F22, 0x1F2A),
        (0x1F23, 0x1F2B), (0x1F24, 0x1F2C), (0x1F25, 0x1F2D), (0x1F26, 0x1F2E), (0x1F27, 0x1F2F),
        (0x1F30, 0x1F38), (0x1F31, 0x1F39), (0x1F32, 0x1F3A), (0x1F33, 0x1F3B), (0x1F34, 0x1F3C),
        (0x1F35, 0x1F3D), (0x1F36, 0x1F3E), (0x1F37, 0x1F3F), (0x1F40, 0x1F48), (0x1F41, 0x1F49),
        (0x1F42, 0x1F4A), (0x1F43, 0x1F4B), (0x1F44, 0x1F4C), (0x1F45, 0x1F4D), (0x1F51, 0x1F59),
        (0x1F53, 0x1F5B), (0x1F55, 0x1F5D), (0x1F57, 0x1F5F), (0x1F60, 0x1F68), (0x1F61, 0x1F69),
        (0x1F62, 0x1F6A), (0x1F63, 0x1F6B), (0x1F64, 0x1F6C), (0x1F65, 0x1F6D), (0x1F66, 0x1F6E),
        (0x1F67, 0x1F6F), (0x1F70, 0x1FBA), (0x1F71, 0x1FBB), (0x1F72, 0x1FC8), (0x1F73, 0x1FC9),
        (0x1F74, 0x1FCA), (0x1F75, 0x1FCB), (0x1F76, 0x1FDA), (0x1F77, 0x1FDB), (0x1F78, 0x1FF8),
        (0x1F79, 0x1FF9), (0x1F7A, 0x1FEA), (0x1F7B, 0x1FEB), (0x1F7C, 0x1FFA), (0x1F7D, 0x1FFB),
        (0x1F80, 0x1F88), (0x1F81, 0x1F89), (0x1F82, 0x1F8A), (0x1F83, 0x1F8B), (0x1F84, 0x1F8C),
        (0x1F85, 0x1F8D), (0x1F86, 0x1F8E), (0x1F87, 0x1F8F), (0x1F90, 0x1F98), (0x1F91, 0x1F99),
        (0x1F92, 0x1F9A), (0x1F93, 0x1F9B), (0x1F94, 0x1F9C), (0x1F95, 0x1F9D), (0x1F96, 0x1F9E),
        (0x1F97, 0x1F9F), (0x1FA0, 0x1FA8), (0x1FA1, 0x1FA9), (0x1FA2, 0x1FAA), (0x1FA3, 0x1FAB),
        (0x1FA4, 0x1FAC), (0x1FA5, 0x1FAD), (0x1FA6, 0x1FAE), (0x1FA7, 0x1FAF), (0x1FB0, 0x1FB8),
        (0x1FB1, 0x1FB9), (0x1FB3, 0x1FBC), (0x1FBE, 0x0399), (0x1FC3, 0x1FCC), (0x1FD0, 0x1FD8),
        (0x1FD1, 0x1FD9), (0x1FE0, 0x1FE8), (0x1FE1, 0x1FE9), (0x1FE5, 0x1FEC), (0x1FF3, 0x1FFC),
        (0x214E, 0x2132), (0x2170, 0x2160), (0x2171, 0x2161), (0x2172, 0x2162), (0x2173, 0x2163),
        (0x2174, 0x2164), (0x2175, 0x2165), (0x2176, 0x2166), (0x2177, 0x2167), (0x2178, 0x2168),
        (0x2179, 0x2169), (0x217A, 0x216A), (0x217B, 0x216B), (0x217C, 0x216C), (0x217D, 0x216D),
        (0x217E, 0x216E), (0x217F, 0x216F), (0x2184, 0x2183), (0x24D0, 0x24B6), (0x24D1, 0x24B7),
        (0x24D2, 0x24B8), (0x24D3, 0x24B9), (0x24D4, 0x24BA), (0x24D5, 0x24BB), (0x24D6, 0x24BC),
        (0x24D7, 0x24BD), (0x24D8, 0x24BE), (0x24D9, 0x24BF), (0x24DA, 0x24C0), (0x24DB, 0x24C1),
        (0x24DC, 0x24C2), (0x24DD, 0x24C3), (0x24DE, 0x24C4), (0x24DF, 0x24C5), (0x24E0, 0x24C6),
        (0x24E1, 0x24C7), (0x24E2, 0x24C8), (0x24E3, 0x24C9), (0x24E4, 0x24CA), (0x24E5, 0x24CB),
        (0x24E6, 0x24CC), (0x24E7, 0x24CD), (0x24E8, 0x24CE), (0x24E9, 0x24CF), (0x2C30, 0x2C00),
        (0x2C31, 0x2C01), (0x2C32, 0x2C02), (0x2C33, 0x2C03), (0x2C34, 0x2C04), (0x2C35, 0x2C05),
        (0x2C36, 0x2C06), (0x2C37, 0x2C07), (0x2C38, 0x2C08), (0x2C39, 0x2C09), (0x2C3A, 0x2C0A),
        (0x2C3B, 0x2C0B), (0x2C3C, 0x2C0C), (0x2C3D, 0x2C0D), (0x2C3E, 0x2C0E), (0x2C3F, 0x2C0F),
        (0x2C40, 0x2C10), (0x2C41, 0x2C11), (0x2C42, 0x2C12), (0x2C43, 0x2C13), (0x2C44, 0x2C14),
        (0x2C45, 0x2C15), (0x2C46, 0x2C16), (0x2C47, 0x2C17), (0x2C48, 0x2C18), (0x2C49, 0x2C19),
        (0x2C4A, 0x2C1A), (0x2C4B, 0x2C1B), (0x2C4C, 0x2C1C), (0x2C4D, 0x2C1D), (0x2C4E, 0x2C1E),
        (0x2C4F, 0x2C1F), (0x2C50, 0x2C20), (0x2C51, 0x2C21), (0x2C52, 0x2C22), (0x2C53, 0x2C23),
        (0x2C54, 0x2C24), (0x2C55, 0x2C25), (0x2C56, 0x2C26), (0x2C57, 0x2C27), (0x2C58, 0x2C28),
        (0x2C59, 0x2C29), (0x2C5A, 0x2C2A), (0x2C5B, 0x2C2B), (0x2C5C, 0x2C2C), (0x2C5D, 0x2C2D),
        (0x2C5E, 0x2C2E), (0x2C5F, 0x2C2F), (0x2C61, 0x2C60), (0x2C65, 0x023A), (0x2C66, 0x023E),
        (0x2C68, 0x2C67), (0x2C6A, 0x2C69), (0x2C6C, 0x2C6B), (0x2C73, 0x2C72), (0x2C76, 0x2C75),
        (0x2C81, 0x2C80), (0x2C83, 0x2C82), (0x2C85, 0x2C84), (0x2C87, 0x2C86), (0x2C89, 0x2C88),
        (0x2C8B, 0x2C8A), (0x2C8D, 0x2C8C), (0x2C8F, 0x2C8E), (0x2C91, 0x2C90), (0x2C93, 0x2C92),
        (0x2C95, 0x2C94), (0x2C97, 0x2C96), (0x2C99, 0x2C98), (0x2C9B, 0x2C9A), (0x2C9D, 0x2C9C),
        (0x2C9F, 0x2C9E), (0x2CA1, 0x2CA0), (0x2CA3, 0x2CA2), (0x2CA5, 0x2CA4), (0x2CA7, 0x2CA6),
        (0x2CA9, 0x2CA8), (0x2CAB, 0x2CAA), (0x2CAD, 0x2CAC), (0x2CAF, 0x2CAE), (0x2CB1, 0x2CB0),
        (0x2CB3, 0x2CB2), (0x2CB5, 0x2CB4), (0x2CB7, 0x2CB6), (0x2CB9, 0x2CB8), (0x2CBB, 0x2CBA),
        (0x2CBD, 0x2CBC), (0x2CBF, 0x2CBE), (0x2CC1, 0x2CC0), (0x2CC3, 0x2CC2), (0x2CC5, 0x2CC4),
        (0x2CC7, 0x2CC6), (0x2CC9, 0x2CC8), (0x2CCB, 0x2CCA), (0x2CCD, 0x2CCC), (0x2CCF, 0x2CCE),
        (0x2CD1, 0x2CD0), (0x2CD3, 0x2CD2), (0x2CD5, 0x2CD4), (0x2CD7, 0x2CD6), (0x2CD9, 0x2CD8),
        (0x2CDB, 0x2CDA), (0x2CDD, 0x2CDC), (0x2CDF, 0x2CDE), (0x2CE1, 0x2CE0), (0x2CE3, 0x2CE2),
        (0x2CEC, 0x2CEB), (0x2CEE, 0x2CED), (0x2CF3, 0x2CF2), (0x2D00, 0x10A0), (0x2D01, 0x10A1),
        (0x2D02, 0x10A2), (0x2D03, 0x10A3), (0x2D04, 0x10A4), (0x2D05, 0x10A5), (0x2D06, 0x10A6),
        (0x2D07, 0x10A7), (0x2D08, 0x10A8), (0x2D09, 0x10A9), (0x2D0A, 0x10AA), (0x2D0B, 0x10AB),
        (0x2D0C, 0x10AC), (0x2D0D, 0x10AD), (0x2D0E, 0x10AE), (0x2D0F, 0x10AF), (0x2D10, 0x10B0),
        (0x2D11, 0x10B1), (0x2D12, 0x10B2), (0x2D13, 0x10B3), (0x2D14, 0x10B4), (0x2D15, 0x10B5),
        (0x2D16, 0x10B6), (0x2D17, 0x10B7), (0x2D18, 0x10B8), (0x2D19, 0x10B9), (0x2D1A, 0x10BA),
        (0x2D1B, 0x10BB), (0x2D1C, 0x10BC), (0x2D1D, 0x10BD), (0x2D1E, 0x10BE), (0x2D1F, 0x10BF),
        (0x2D20, 0x10C0), (0x2D21, 0x10C1), (0x2D22, 0x10C2), (0x2D23, 0x10C3), (0x2D24, 0x10C4),
        (0x2D25, 0x10C5), (0x2D27, 0x10C7), (0x2D2D, 0x10CD), (0xA641, 0xA640), (0xA643, 0xA642),
        (0xA645, 0xA644), (0xA647, 0xA646), (0xA649, 0xA648), (0xA64B, 0xA64A), (0xA64D, 0xA64C),
        (0xA64F, 0xA64E), (0xA651, 0xA650), (0xA653, 0xA652), (0xA655, 0xA654), (0xA657, 0xA656),
        (0xA659, 0xA658), (0xA65B, 0xA65A), (0xA65D, 0xA65C), (0xA65F, 0xA65E), (0xA661, 0xA660),
        (0xA663, 0xA662), (0xA665, 0xA664), (0xA667, 0xA666), (0xA669, 0xA668), (0xA66B, 0xA66A),
        (0xA66D, 0xA66C), (0xA681, 0xA680), (0xA683, 0xA682), (0xA685, 0xA684), (0xA687, 0xA686),
        (0xA689, 0xA688), (0xA68B, 0xA68A), (0xA68D, 0xA68C), (0xA68F, 0xA68E), (0xA691, 0xA690),
        (0xA693, 0xA692), (0xA695, 0xA694), (0xA697, 0xA696), (0xA699, 0xA698), (0xA69B, 0xA69A),
        (0xA723, 0xA722), (0xA725, 0xA724), (0xA727, 0xA726), (0xA729, 0xA728), (0xA72B, 0xA72A),
        (0xA72D, 0xA72C), (0xA72F, 0xA72E), (0xA733, 0xA732), (0xA735, 0xA734), (0xA737, 0xA736),
        (0xA739, 0xA738), (0xA73B, 0xA73A), (0xA73D, 0xA73C), (0xA73F, 0xA73E), (0xA741, 0xA740),
        (0xA743, 0xA742), (0xA745, 0xA744), (0xA747, 0xA746), (0xA749, 0xA748), (0xA74B, 0xA74A),
        (0xA74D, 0xA74C), (0xA74F, 0xA74E), (0xA751, 0xA750), (0xA753, 0xA752), (0xA755, 0xA754),
        (0xA757, 0xA756), (0xA759, 0xA758), (0xA75B, 0xA75A), (0xA75D, 0xA75C), (0xA75F, 0xA75E),
        (0xA761, 0xA760), (0xA763, 0xA762), (0xA765, 0xA764), (0xA767, 0xA766), (0xA769, 0xA768),
        (0xA76B, 0xA76A), (0xA76D, 0xA76C), (0xA76F, 0xA76E), (0xA77A, 0xA779), (0xA77C, 0xA77B),
        (0xA77F, 0xA77E), (0xA781, 0xA780), (0xA783, 0xA782), (0xA785, 0xA784), (0xA787, 0xA786),
        (0xA78C, 0xA78B), (0xA791, 0xA790), (0xA793, 0xA792), (0xA794, 0xA7C4), (0xA797, 0xA796),
        (0xA799, 0xA798), (0xA79B, 0xA79A), (0xA79D, 0xA79C), (0xA79F, 0xA79E), (0xA7A1, 0xA7A0),
        (0xA7A3, 0xA7A2), (0xA7A5, 0xA7A4), (0xA7A7, 0xA7A6), (0xA7A9, 0xA7A8), (0xA7B5, 0xA7B4),
        (0xA7B7, 0xA7B6), (0xA7B9, 0xA7B8), (0xA7BB, 0xA7BA), (0xA7BD, 0xA7BC), (0xA7BF, 0xA7BE),
        (0xA7C1, 0xA7C0), (0xA7C3, 0xA7C2), (0xA7C8, 0xA7C7), (0xA7CA, 0xA7C9), (0xA7D1, 0xA7D0),
        (0xA7D7, 0xA7D6), (0xA7D9, 0xA7D8), (0xA7F6, 0xA7F5), (0xAB53, 0xA7B3), (0xAB70, 0x13A0),
        (0xAB71, 0x13A1), (0xAB72, 0x13A2), (0xAB73, 0x13A3), (0xAB74, 0x13A4), (0xAB75, 0x13A5),
        (0xAB76, 0x13A6), (0xAB77, 0x13A7), (0xAB78, 0x13A8), (0xAB79, 0x13A9), (0xAB7A, 0x13AA),
        (0xAB7B, 0x13AB), (0xAB7C, 0x13AC), (0xAB7D, 0x13AD), (0xAB7E, 0x13AE), (0xAB7F, 0x13AF),
        (0xAB80, 0x13B0), (0xAB81, 0x13B1), (0xAB82, 0x13B2), (0xAB83, 0x13B3), (0xAB84, 0x13B4),
        (0xAB85, 0x13B5), (0xAB86, 0x13B6), (0xAB87, 0x13B7), (0xAB88, 0x13B8), (0xAB89, 0x13B9),
        (0xAB8A, 0x13BA), (0xAB8B, 0x13BB), (0xAB8C, 0x13BC), (0xAB8D, 0x13BD), (0xAB8E, 0x13BE),
        (0xAB8F, 0x13BF), (0xAB90, 0x13C0), (0xAB91, 0x13C1), (0xAB92, 0x13C2), (0xAB93, 0x13C3),
        (0xAB94, 0x13C4), (0xAB95, 0x13C5), (0xAB96, 0x13C6), (0xAB97, 0x13C7), (0xAB98, 0x13C8),
        (0xAB99, 0x13C9), (0xAB9A, 0x13CA), (0xAB9B, 0x13CB), (0xAB9C, 0x13CC), (0xAB9D, 0x13CD),
        (0xAB9E, 0x13CE), (0xAB9F, 0x13CF), (0xABA0, 0x13D0), (0xABA1, 0x13D1), (0xABA2, 0x13D2),
        (0xABA3, 0x13D3), (0xABA4, 0x13D4), (0xABA5, 0x13D5), (0xABA6, 0x13D6), (0xABA7, 0x13D7),
        (0xABA8, 0x13D8), (0xABA9, 0x13D9), (0xABAA, 0x13DA), (0xABAB, 0x13DB), (0xABAC, 0x13DC),
        (0xABAD, 0x13DD), (0xABAE, 0x13DE), (0xABAF, 0x13DF), (0xABB0, 0x13E0), (0xABB1, 0x13E1),
        (0xABB2, 0x13E2), (0xABB3, 0x13E3), (0xABB4, 0x13E4), (0xABB5, 0x13E5), (0xABB6, 0x13E6),
        (0xABB7, 0x13E7), (0xABB8, 0x13E8), (0xABB9, 0x13E9), (0xABBA, 0x13EA), (0xABBB, 0x13EB),
        (0xABBC, 0x13EC), (0xABBD, 0x13ED), (0xABBE, 0x13EE), (0xABBF, 0x13EF), (0xFF41, 0xFF21),
        (0xFF42, 0xFF22), (0xFF43, 0xFF23), (0xFF44, 0xFF24), (0xFF45, 0xFF25), (0xFF46, 0xFF26),
        (0xFF47, 0xFF27), (0xFF48, 0xFF28), (0xFF49, 0xFF29), (0xFF4A, 0xFF2A), (0xFF4B, 0xFF2B),
        (0xFF4C, 0xFF2C), (0xFF4D, 0xFF2D), (0xFF4E, 0xFF2E), (0xFF4F, 0xFF2F), (0xFF50, 0xFF30),
        (0xFF51, 0xFF31), (0xFF52, 0xFF32), (0xFF53, 0xFF33), (0xFF54, 0xFF34), (0xFF55, 0xFF35),
        (0xFF56, 0xFF36), (0xFF57, 0xFF37), (0xFF58, 0xFF38), (0xFF59, 0xFF39), (0xFF5A, 0xFF3A),
        (0x10428, 0x10400), (0x10429, 0x10401), (0x1042A, 0x10402), (0x1042B, 0x10403),
        (0x1042C, 0x10404), (0x1042D, 0x10405), (0x1042E, 0x10406), (0x1042F, 0x10407),
        (0x10430, 0x10408), (0x10431, 0x10409), (0x10432, 0x1040A), (0x10433, 0x1040B),
        (0x10434, 0x1040C), (0x10435, 0x1040D), (0x10436, 0x1040E), (0x10437, 0x1040F),
        (0x10438, 0x10410), (0x10439, 0x10411), (0x1043A, 0x10412), (0x1043B, 0x10413),
        (0x1043C, 0x10414), (0x1043D, 0x10415), (0x1043E, 0x10416), (0x1043F, 0x10417),
        (0x10440, 0x10418), (0x10441, 0x10419), (0x10442, 0x1041A), (0x10443, 0x1041B),
        (0x10444, 0x1041C), (0x10445, 0x1041D), (0x10446, 0x1041E), (0x10447, 0x1041F),
        (0x10448, 0x10420), (0x10449, 0x10421), (0x1044A, 0x10422), (0x1044B, 0x10423),
        (0x1044C, 0x10424), (0x1044D, 0x10425), (0x1044E, 0x10426), (0x1044F, 0x10427),
        (0x104D8, 0x104B0), (0x104D9, 0x104B1), (0x104DA, 0x104B2), (0x104DB, 0x104B3),
        (0x104DC, 0x104B4), (0x104DD, 0x104B5), (0x104DE, 0x104B6), (0x104DF, 0x104B7),
        (0x104E0, 0x104B8), (0x104E1, 0x104B9), (0x104E2, 0x104BA), (0x104E3, 0x104BB),
        (0x104E4, 0x104BC), (0x104E5, 0x104BD), (0x104E6, 0x104BE), (0x104E7, 0x104BF),
        (0x104E8, 0x104C0), (0x104E9, 0x104C1), (0x104EA, 0x104C2), (0x104EB, 0x104C3),
        (0x104EC, 0x104C4), (0x104ED, 0x104C5), (0x104EE, 0x104C6), (0x104EF, 0x104C7),
        (0x104F0, 0x104C8), (0x104F1, 0x104C9), (0x104F2, 0x104CA), (0x104F3, 0x104CB),
        (0x104F4, 0x104CC), (0x104F5, 0x104CD), (0x104F6, 0x104CE), (0x104F7, 0x104CF),
        (0x104F8, 0x104D0), (0x104F9, 0x104D1), (0x104FA, 0x104D2), (0x104FB, 0x104D3),
        (0x10597, 0x10570), (0x10598, 0x10571), (0x10599, 0x10572), (0x1059A, 0x10573),
        (0x1059B, 0x10574), (0x1059C, 0x10575), (0x1059D, 0x10576), (0x1059E, 0x10577),
        (0x1059F, 0x10578), (0x105A0, 0x10579), (0x105A1, 0x1057A), (0x105A3, 0x1057C),
        (0x105A4, 0x1057D), (0x105A5, 0x1057E), (0x105A6, 0x1057F), (0x105A7, 0x10580),
        (0x105A8, 0x10581), (0x105A9, 0x10582), (0x105AA, 0x10583), (0x105AB, 0x10584),
        (0x105AC, 0x10585), (0x105AD, 0x10586), (0x105AE, 0x10587), (0x105AF, 0x10588),
        (0x105B0, 0x10589), (0x105B1, 0x1058A), (0x105B3, 0x1058C), (0x105B4, 0x1058D),
        (0x105B5, 0x1058E), (0x105B6, 0x1058F), (0x105B7, 0x10590), (0x105B8, 0x10591),
        (0x105B9, 0x10592), (0x105BB, 0x10594), (0x105BC, 0x10595), (0x10CC0, 0x10C80),
        (0x10CC1, 0x10C81), (0x10CC2, 0x10C82), (0x10CC3, 0x10C83), (0x10CC4, 0x10C84),
        (0x10CC5, 0x10C85), (0x10CC6, 0x10C86), (0x10CC7, 0x10C87), (0x10CC8, 0x10C88),
        (0x10CC9, 0x10C89), (0x10CCA, 0x10C8A), (0x10CCB, 0x10C8B), (0x10CCC, 0x10C8C),
        (0x10CCD, 0x10C8D), (0x10CCE, 0x10C8E), (0x10CCF, 0x10C8F), (0x10CD0, 0x10C90),
        (0x10CD1, 0x10C91), (0x10CD2, 0x10C92), (0x10CD3, 0x10C93), (0x10CD4, 0x10C94),
        (0x10CD5, 0x10C95), (0x10CD6, 0x10C96), (0x10CD7, 0x10C97), (0x10CD8, 0x10C98),
        (0x10CD9, 0x10C99), (0x10CDA, 0x10C9A), (0x10CDB, 0x10C9B), (0x10CDC, 0x10C9C),
        (0x10CDD, 0x10C9D), (0x10CDE, 0x10C9E), (0x10CDF, 0x10C9F), (0x10CE0, 0x10CA0),
        (0x10CE1, 0x10CA1), (0x10CE2, 0x10CA2), (0x10CE3, 0x10CA3), (0x10CE4, 0x10CA4),
        (0x10CE5, 0x10CA5), (0x10CE6, 0x10CA6), (0x10CE7, 0x10CA7), (0x10CE8, 0x10CA8),
        (0x10CE9, 0x10CA9), (0x10CEA, 0x10CAA), (0x10CEB, 0x10CAB), (0x10CEC, 0x10CAC),
        (0x10CED, 0x10CAD), (0x10CEE, 0x10CAE), (0x10CEF, 0x10CAF), (0x10CF0, 0x10CB0),
        (0x10CF1, 0x10CB1), (0x10CF2, 0x10CB2), (0x118C0, 0x118A0), (0x118C1, 0x118A1),
        (0x118C2, 0x118A2), (0x118C3, 0x118A3), (0x118C4, 0x118A4), (0x118C5, 0x118A5),
        (0x118C6, 0x118A6), (0x118C7, 0x118A7), (0x118C8, 0x118A8), (0x118C9, 0x118A9),
        (0x118CA, 0x118AA), (0x118CB, 0x118AB), (0x118CC, 0x118AC), (0x118CD, 0x118AD),
        (0x118CE, 0x118AE), (0x118CF, 0x118AF), (0x118D0, 0x118B0), (0x118D1, 0x118B1),
        (0x118D2, 0x118B2), (0x118D3, 0x118B3), (0x118D4, 0x118B4), (0x118D5, 0x118B5),
        (0x118D6, 0x118B6), (0x118D7, 0x118B7), (0x118D8, 0x118B8), (0x118D9, 0x118B9),
        (0x118DA, 0x118BA), (0x118DB, 0x118BB), (0x118DC, 0x118BC), (0x118DD, 0x118BD),
        (0x118DE, 0x118BE), (0x118DF, 0x118BF), (0x16E60, 0x16E40), (0x16E61, 0x16E41),
        (0x16E62, 0x16E42), (0x16E63, 0x16E43), (0x16E64, 0x16E44), (0x16E65, 0x16E45),
        (0x16E66, 0x16E46), (0x16E67, 0x16E47), (0x16E68, 0x16E48), (0x16E69, 0x16E49),
        (0x16E6A, 0x16E4A), (0x16E6B, 0x16E4B), (0x16E6C, 0x16E4C), (0x16E6D, 0x16E4D),
        (0x16E6E, 0x16E4E), (0x16E6F, 0x16E4F), (0x16E70, 0x16E50), (0x16E71, 0x16E51),
        (0x16E72, 0x16E52), (0x16E73, 0x16E53), (0x16E74, 0x16E54), (0x16E75, 0x16E55),
        (0x16E76, 0x16E56), (0x16E77, 0x16E57), (0x16E78, 0x16E58), (0x16E79, 0x16E59),
        (0x16E7A, 0x16E5A), (0x16E7B, 0x16E5B), (0x16E7C, 0x16E5C), (0x16E7D, 0x16E5D),
        (0x16E7E, 0x16E5E), (0x16E7F, 0x16E5F), (0x1E922, 0x1E900), (0x1E923, 0x1E901),
        (0x1E924, 0x1E902), (0x1E925, 0x1E903), (0x1E926, 0x1E904), (0x1E927, 0x1E905),
        (0x1E928, 0x1E906), (0x1E929, 0x1E907), (0x1E92A, 0x1E908), (0x1E92B, 0x1E909),
        (0x1E92C, 0x1E90A), (0x1E92D, 0x1E90B), (0x1E92E, 0x1E90C), (0x1E92F, 0x1E90D),
        (0x1E930, 0x1E90E), (0x1E931, 0x1E90F), (0x1E932, 0x1E910), (0x1E933, 0x1E911),
        (0x1E934, 0x1E912), (0x1E935, 0x1E913), (0x1E936, 0x1E914), (0x1E937, 0x1E915),
        (0x1E938, 0x1E916), (0x1E939, 0x1E917), (0x1E93A, 0x1E918), (0x1E93B, 0x1E919),
        (0x1E93C, 0x1E91A), (0x1E93D, 0x1E91B), (0x1E93E, 0x1E91C), (0x1E93F, 0x1E91D),
        (0x1E940, 0x1E91E), (0x1E941, 0x1E91F), (0x1E942, 0x1E920), (0x1E943, 0x1E921),
    ];

    pub(crate) static CASEFOLD_TABLE: &[(u32, u32)] = &[
        (0x0041, 0x0061), (0x0042, 0x0062), (0x0043, 0x0063), (0x0044, 0x0064), (0x0045, 0x0065),
        (0x0046, 0x0066), (0x0047, 0x0067), (0x0048, 0x0068), (0x0049, 0x0069), (0x004A, 0x006A),
        (0x004B, 0x006B), (0x004C, 0x006C), (0x004D, 0x006D), (0x004E, 0x006E), (0x004F, 0x006F),
        (0x0050, 0x0070), (0x0051, 0x0071), (0x0052, 0x0072), (0x0053, 0x0073), (0x0054, 0x0074),
        (0x0055, 0x0075), (0x0056, 0x0076), (0x0057, 0x0077), (0x0058, 0x0078), (0x0059, 0x0079),
        (0x005A, 0x007A), (0x00B5, 0x03BC), (0x00C0, 0x00E0), (0x00C1, 0x00E1), (0x00C2, 0x00E2),
        (0x00C3, 0x00E3), (0x00C4, 0x00E4), (0x00C5, 0x00E5), (0x00C6, 0x00E6), (0x00C7, 0x00E7),
        (0x00C8, 0x00E8), (0x00C9, 0x00E9), (0x00CA, 0x00EA), (0x00CB, 0x00EB), (0x00CC, 0x00EC),
        (0x00CD, 0x00ED), (0x00CE, 0x00EE), (0x00CF, 0x00EF), (0x00D0, 0x00F0), (0x00D1, 0x00F1),
        (0x00D2, 0x00F2), (0x00D3, 0x00F3), (0x00D4, 0x00F4), (0x00D5, 0x00F5), (0x00D6, 0x00F6),
        (0x00D8, 0x00F8), (0x00D9, 0x00F9), (0x00DA, 0x00FA), (0x00DB, 0x00FB), (0x00DC, 0x00FC),
        (0x00DD, 0x00FD), (0x00DE, 0x00FE), (0x0100, 0x0101), (0x0102, 0x0103), (0x0104, 0x0105),
        (0x0106, 0x0107), (0x0108, 0x0109), (0x010A, 0x010B), (0x010C, 0x010D), (0x010E, 0x010F),
        (0x0110, 0x0111), (0x0112, 0x0113), (0x0114, 0x0115), (0x0116, 0x0117), (0x0118, 0x0119),
        (0x011A, 0x011B), (0x011C, 0x011D), (0x011E, 0x011F), (0x0120, 0x0121), (0x0122, 0x0123),
        (0x0124, 0x0125), (0x0126, 0x0127), (0x0128, 0x0129), (0x012A, 0x012B), (0x012C, 0x012D),
        (0x012E, 0x012F), (0x0132, 0x0133), (0x0134, 0x0135), (0x0136, 0x0137), (0x0139, 0x013A),
        (0x013B, 0x013C), (0x013D, 0x013E), (0x013F, 0x0140), (0x0141, 0x0142), (0x0143, 0x0144),
        (0x0145, 0x0146), (0x0147, 0x0148), (0x014A, 0x014B), (0x014C, 0x014D), (0x014E, 0x014F),
        (0x0150, 0x0151), (0x0152, 0x0153), (0x0154, 0x0155), (0x0156, 0x0157), (0x0158, 0x0159),
        (0x015A, 0x015B), (0x015C, 0x015D), (0x015E, 0x015F), (0x0160, 0x0161), (0x0162, 0x0163),
        (0x0164, 0x0165), (0x0166, 0x0167), (0x0168, 0x0169), (0x016A, 0x016B), (0x016C, 0x016D),
        (0x016E, 0x016F), (0x0170, 0x0171), (0x0172, 0x0173), (0x0174, 0x0175), (0x0176, 0x0177),
        (0x0178, 0x00FF), (0x0179, 0x017A), (0x017B, 0x017C), (0x017D, 0x017E), (0x017F, 0x0073),
        (0x0181, 0x0253), (0x0182, 0x0183), (0x0184, 0x0185), (0x0186, 0x0254), (0x0187, 0x0188),
        (0x0189, 0x0256), (0x018A, 0x0257), (0x018B, 0x018C), (0x018E, 0x01DD), (0x018F, 0x0259),
        (0x0190, 0x025B), (0x0191, 0x0192), (0x0193, 0x0260), (0x0194, 0x0263), (0x0196, 0x0269),
        (0x0197, 0x0268), (0x0198, 0x0199), (0x019C, 0x026F), (0x019D, 0x0272), (0x019F, 0x0275),
        (0x01A0, 0x01A1), (0x01A2, 0x01A3), (0x01A4, 0x01A5), (0x01A6, 0x0280), (0x01A7, 0x01A8),
        (0x01A9, 0x0283), (0x01AC, 0x01AD), (0x01AE, 0x0288), (0x01AF, 0x01B0), (0x01B1, 0x028A),
        (0x01B2, 0x028B), (0x01B3, 0x01B4), (0x01B5, 0x01B6), (0x01B7, 0x0292), (0x01B8, 0x01B9),
        (0x01BC, 0x01BD), (0x01C4, 0x01C6), (0x01C5, 0x01C6), (0x01C7, 0x01C9), (0x01C8, 0x01C9),
        (0x01CA, 0x01CC), (0x01CB, 0x01CC), (0x01CD, 0x01CE), (0x01CF, 0x01D0), (0x01D1, 0x01D2),
        (0x01D3, 0x01D4), (0x01D5, 0x01D6), (0x01D7, 0x01D8), (0x01D9, 0x01DA), (0x01DB, 0x01DC),
        (0x01DE, 0x01DF), (0x01E0, 0x01E1), (0x01E2, 0x01E3), (0x01E4, 0x01E5), (0x01E6, 0x01E7),
        (0x01E8, 0x01E9), (0x01EA, 0x01EB), (0x01EC, 0x01ED), (0x01EE, 0x01EF), (0x01F1, 0x01F3),
        (0x01F2, 0x01F3), (0x01F4, 0x01F5), (0x01F6, 0x0195), (0x01F7, 0x01BF), (0x01F8, 0x01F9),
        (0x01FA, 0x01FB), (0x01FC, 0x01FD), (0x01FE, 0x01FF), (0x0200, 0x0201), (0x0202, 0x0203),
        (0x0204, 0x0205), (0x0206, 0x0207), (0x0208, 0x0209), (0x020A, 0x020B), (0x020C, 0x020D),
        (0x020E, 0x020F), (0x0210, 0x0211), (0x0212, 0x0213), (0x0214, 0x0215), (0x0216, 0x0217),
        (0x0218, 0x0219), (0x021A, 0x021B), (0x021C, 0x021D), (0x021E, 0x021F), (0x0220, 0x019E),
        (0x0222, 0x0223), (0x0224, 0x0225), (0x0226, 0x0227), (0x0228, 0x0229), (0x022A, 0x022B),
        (0x022C, 0x022D), (0x022E, 0x022F), (0x0230, 0x0231), (0x0232, 0x0233), (0x023A, 0x2C65),
        (0x023B, 0x023C), (0x023D, 0x019A), (0x023E, 0x2C66), (0x0241, 0x0242), (0x0243, 0x0180),
        (0x0244, 0x0289), (0x0245, 0x028C), (0x0246, 0x0247), (0x0248, 0x0249), (0x024A, 0x024B),
        (0x024C, 0x024D), (0x024E, 0x024F), (0x0345, 0x03B9), (0x0370, 0x0371), (0x0372, 0x0373),
        (0x0376, 0x0377), (0x037F, 0x03F3), (0x0386, 0x03AC), (0x0388, 0x03AD), (0x0389, 0x03AE),
        (0x038A, 0x03AF), (0x038C, 0x03CC), (0x038E, 0x03CD), (0x038F, 0x03CE), (0x0391, 0x03B1),
        (0x0392, 0x03B2), (0x0393, 0x03B3), (0x0394, 0x03B4), (0x0395, 0x03B5), (0x0396, 0x03B6),
        (0x0397, 0x03B7), (0x0398, 0x03B8), (0x0399, 0x03B9), (0x039A, 0x03BA), (0x039B, 0x03BB),
        (0x039C, 0x03BC), (0x039D, 0x03BD), (0x039E, 0x03BE), (0x039F, 0x03BF), (0x03A0, 0x03C0),
        (0x03A1, 0x03C1), (0x03A3, 0x03C3), (0x03A4, 0x03C4), (0x03A5, 0x03C5), (0x03A6, 0x03C6),
        (0x03A7, 0x03C7), (0x03A8, 0x03C8), (0x03A9, 0x03C9), (0x03AA, 0x03CA), (0x03AB, 0x03CB),
        (0x03C2, 0x03C3), (0x03CF, 0x03D7), (0x03D0, 0x03B2), (0x03D1, 0x03B8), (0x03D5, 0x03C6),
        (0x03D6, 0x03C0), (0x03D8, 0x03D9), (0x03DA, 0x03DB), (0x03DC, 0x03DD), (0x03DE, 0x03DF),
        (0x03E0, 0x03E1), (0x03E2, 0x03E3), (0x03E4, 0x03E5), (0x03E6, 0x03E7), (0x03E8, 0x03E9),
        (0x03EA, 0x03EB), (0x03EC, 0x03ED), (0x03EE, 0x03EF), (0x03F0, 0x03BA), (0x03F1, 0x03C1),
        (0x03F4, 0x03B8), (0x03F5, 0x03B5), (0x03F7, 0x03F8), (0x03F9, 0x03F2), (0x03FA, 0x03FB),
        (0x03FD, 0x037B), (0x03FE, 0x037C), (0x03FF, 0x037D), (0x0400, 0x0450), (0x0401, 0x0451),
        (0x0402, 0x0452), (0x0403, 0x0453), (0x0404, 0x0454), (0x0405, 0x0455), (0x0406, 0x0456),
        (0x0407, 0x0457), (0x0408, 0x0458), (0x0409, 0x0459), (0x040A, 0x045A), (0x040B, 0x045B),
        (0x040C, 0x045C), (0x040D, 0x045D), (0x040E, 0x045E), (0x040F, 0x045F), (0x0410, 0x0430),
        (0x0411, 0x0431), (0x0412, 0x0432), (0x0413, 0x0433), (0x0414, 0x0434), (0x0415, 0x0435),
        (0x0416, 0x0436), (0x0417, 0x0437), (0x0418, 0x0438), (0x0419, 0x0439), (0x041A, 0x043A),
        (0x041B, 0x043B), (0x041C, 0x043C), (0x041D, 0x043D), (0x041E, 0x043E), (0x041F, 0x043F),
        (0x0420, 0x0440), (0x0421, 0x0441), (0x0422, 0x0442), (0x0423, 0x0443), (0x0424, 0x0444),
        (0x0425, 0x0445), (0x0426, 0x0446), (0x0427, 0x0447), (0x0428, 0x0448), (0x0429, 0x0449),
        (0x042A, 0x044A), (0x042B, 0x044B), (0x042C, 0x044C), (0x042D, 0x044D), (0x042E, 0x044E),
        (0x042F, 0x044F), (0x0460, 0x0461), (0x0462, 0x0463), (0x0464, 0x0465), (0x0466, 0x0467),
        (0x0468, 0x0469), (0x046A, 0x046B), (0x046C, 0x046D), (0x046E, 0x046F), (0x0470, 0x0471),
        (0x0472, 0x0473), (0x0474, 0x0475), (0x0476, 0x0477), (0x0478, 0x0479), (0x047A, 0x047B),
        (0x047C, 0x047D), (0x047E, 0x047F), (0x0480, 0x0481), (0x048A, 0x048B), (0x048C, 0x048D),
        (0x048E, 0x048F), (0x0490, 0x0491), (0x0492, 0x0493), (0x0494, 0x0495), (0x0496, 0x0497),
        (0x0498, 0x0499), (0x049A, 0x049B), (0x049C, 0x049D), (0x049E, 0x049F), (0x04A0, 0x04A1),
        (0x04A2, 0x04A3), (0x04A4, 0x04A5), (0x04A6, 0x04A7), (0x04A8, 0x04A9), (0x04AA, 0x04AB),
        (0x04AC, 0x04AD), (0x04AE, 0x04AF), (0x04B0, 0x04B1), (0x04B2, 0x04B3), (0x04B4, 0x04B5),
        (0x04B6, 0x04B7), (0x04B8, 0x04B9), (0x04BA, 0x04BB), (0x04BC, 0x04BD), (0x04BE, 0x04BF),
        (0x04C0, 0x04CF), (0x04C1, 0x04C2), (0x04C3, 0x04C4), (0x04C5, 0x04C6), (0x04C7, 0x04C8),
        (0x04C9, 0x04CA), (0x04CB, 0x04CC), (0x04CD, 0x04CE), (0x04D0, 0x04D1), (0x04D2, 0x04D3),
        (0x04D4, 0x04D5), (0x04D6, 0x04D7), (0x04D8, 0x04D9), (0x04DA, 0x04DB), (0x04DC, 0x04DD),
        (0x04DE, 0x04DF), (0x04E0, 0x04E1), (0x04E2, 0x04E3), (0x04E4, 0x04E5), (0x04E6, 0x04E7),
        (0x04E8, 0x04E9), (0x04EA, 0x04EB), (0x04EC, 0x04ED), (0x04EE, 0x04EF), (0x04F0, 0x04F1),
        (0x04F2, 0x04F3), (0x04F4, 0x04F5), (0x04F6, 0x04F7), (0x04F8, 0x04F9), (0x04FA, 0x04FB),
        (0x04FC, 0x04FD), (0x04FE, 0x04FF), (0x0500, 0x0501), (0x0502, 0x0503), (0x0504, 0x0505),
        (0x0506, 0x0507), (0x0508, 0x0509), (0x050A, 0x050B), (0x050C, 0x050D), (0x050E, 0x050F),
        (0x0510, 0x0511), (0x0512, 0x0513), (0x0514, 0x0515), (0x0516, 0x0517), (0x0518, 0x0519),
        (0x051A, 0x051B), (0x051C, 0x051D), (0x051E, 0x051F), (0x0520, 0x0521), (0x0522, 0x0523),
        (0x0524, 0x0525), (0x0526, 0x0527), (0x0528, 0x0529), (0x052A, 0x052B), (0x052C, 0x052D),
        (0x052E, 0x052F), (0x0531, 0x0561), (0x0532, 0x0562), (0x0533, 0x0563), (0x0534, 0x0564),
        (0x0535, 0x0565), (0x0536, 0x0566), (0x0537, 0x0567), (0x0538, 0x0568), (0x0539, 0x0569),
        (0x053A, 0x056A), (0x053B, 0x056B), (0x053C, 0x056C), (0x053D, 0x056D), (0x053E, 0x056E),
        (0x053F, 0x056F), (0x0540, 0x0570), (0x0541, 0x0571), (0x0542, 0x0572), (0x0543, 0x0573),
        (0x0544, 0x0574), (0x0545, 0x0575), (0x0546, 0x0576), (0x0547, 0x0577), (0x0548, 0x0578),
        (0x0549, 0x0579), (0x054A, 0x057A), (0x054B, 0x057B), (0x054C, 0x057C), (0x054D, 0x057D),
        (0x054E, 0x057E), (0x054F, 0x057F), (0x0550, 0x0580), (0x0551, 0x0581), (0x0552, 0x0582),
        (0x0553, 0x0583), (0x0554, 0x0584), (0x0555, 0x0585), (0x0556, 0x0586), (0x10A0, 0x2D00),
        (0x10A1, 0x2D01), (0x10A2, 0x2D02), (0x10A3, 0x2D03), (0x10A4, 0x2D04), (0x10A5, 0x2D05),
        (0x10A6, 0x2D06), (0x10A7, 0x2D07), (0x10A8, 0x2D08), (0x10A9, 0x2D09), (0x10AA, 0x2D0A),
        (0x10AB, 0x2D0B), (0x10AC, 0x2D0C), (0x10AD, 0x2D0D), (0x10AE, 0x2D0E), (0x10AF, 0x2D0F),
        (0x10B0, 0x2D10), (0x10B1, 0x2D11), (0x10B2, 0x2D12), (0x10B3, 0x2D13), (0x10B4, 0x2D14),
        (0x10B5, 0x2D15), (0x10B6, 0x2D16), (0x10B7, 0x2D17), (0x10B8, 0x2D18), (0x10B9, 0x2D19),
        (0x10BA, 0x2D1A), (0x10BB, 0x2D1B), (0x10BC, 0x2D1C), (0x10BD, 0x2D1D), (0x10BE, 0x2D1E),
        (0x10BF, 0x2D1F), (0x10C0, 0x2D20), (0x10C1, 0x2D21), (0x10C2, 0x2D22), (0x10C3, 0x2D23),
        (0x10C4, 0x2D24), (0x10C5, 0x2D25), (0x10C7, 0x2D27), (0x10CD, 0x2D2D), (0x13F8, 0x13F0),
        (0x13F9, 0x13F1), (0x13FA, 0x13F2), (0x13FB, 0x13F3), (0x13FC, 0x13F4), (0x13FD, 0x13F5),
        (0x1C80, 0x0432), (0x1C81, 0x0434), (0x1C82, 0x043E), (0x1C83, 0x0441), (0x1C84, 0x0442),
        (0x1C85, 0x0442), (0x1C86, 0x044A), (0x1C87, 0x0463), (0x1C88, 0xA64B), (0x1C90, 0x10D0),
        (0x1C91, 0x10D1), (0x1C92, 0x10D2), (0x1C93, 0x10D3), (0x1C94, 0x10D4), (0x1C95, 0x10D5),
        (0x1C96, 0x10D6), (0x1C97, 0x10D7), (0x1C98, 0x10D8), (0x1C99, 0x10D9), (0x1C9A, 0x10DA),
        (0x1C9B, 0x10DB), (0x1C9C, 0x10DC), (0x1C9D, 0x10DD), (0x1C9E, 0x10DE), (0x1C9F, 0x10DF),
        (0x1CA0, 0x10E0), (0x1CA1, 0x10E1), (0x1CA2, 0x10E2), (0x1CA3, 0x10E3), (0x1CA4, 0x10E4),
        (0x1CA5, 0x10E5), (0x1CA6, 0x10E6), (0x1CA7, 0x10E7), (0x1CA8, 0x10E8), (0x1CA9, 0x10E9),
        (0x1CAA, 0x10EA), (0x1CAB, 0x10EB), (0x1CAC, 0x10EC), (0x1CAD, 0x10ED), (0x1CAE, 0x10EE),
        (0x1CAF, 0x10EF), (0x1CB0, 0x10F0), (0x1CB1, 0x10F1), (0x1CB2, 0x10F2), (0x1CB3, 0x10F3),
        (0x1CB4, 0x10F4), (0x1CB5, 0x10F5), (0x1CB6, 0x10F6), (0x1CB7, 0x10F7), (0x1CB8, 0x10F8),
        (0x1CB9, 0x10F9), (0x1CBA, 0x10FA), (0x1CBD, 0x10FD), (0x1CBE, 0x10FE), (0x1CBF, 0x10FF),
        (0x1E00, 0x1E01), (0x1E02, 0x1E03), (0x1E04, 0x1E05), (0x1E06, 0x1E07), (0x1E08, 0x1E09),
        (0x1E0A, 0x1E0B), (0x1E0C, 0x1E0D), (0x1E0E, 0x1E0F), (0x1E10, 0x1E11), (0x1E12, 0x1E13),
        (0x1E14, 0x1E15), (0x1E16, 0x1E17), (0x1E18, 0x1E19), (0x1E1A, 0x1E1B), (0x1E1C, 0x1E1D),
        (0x1E1E, 0x1E1F), (0x1E20, 0x1E21), (0x1E22, 0x1E23), (0x1E24, 0x1E25), (0x1E26, 0x1E27),
        (0x1E28, 0x1E29), (0x1E2A, 0x1E2B), (0x1E2C, 0x1E2D), (0x1E2E, 0x1E2F), (0x1E30, 0x1E31),
        (0x1E32, 0x1E33), (0x1E34, 0x1E35), (0x1E36, 0x1E37), (0x1E38, 0x1E39), (0x1E3A, 0x1E3B),
        (0x1E3C, 0x1E3D), (0x1E3E, 0x1E3F), (0x1E40, 0x1E41), (0x1E42, 0x1E43), (0x1E44, 0x1E45),
        (0x1E46, 0x1E47), (0x1E48, 0x1E49), (0x1E4A, 0x1E4B), (0x1E4C, 0x1E4D), (0x1E4E, 0x1E4F),
        (0x1E50, 0x1E51), (0x1E52, 0x1E53), (0x1E54, 0x1E55), (0x1E56, 0x1E57), (0x1E58, 0x1E59),
        (0x1E5A, 0x1E5B), (0x1E5C, 0x1E5D), (0x1E5E, 0x1E5F), (0x1E60, 0x1E61), (0x1E62, 0x1E63),
        (0x1E64, 0x1E65), (0x1E66, 0x1E67), (0x1E68, 0x1E69), (0x1E6A, 0x1E6B), (0x1E6C, 0x1E6D),
        (0x1E6E, 0x1E6F), (0x1E70, 0x1E71), (0x1E72, 0x1E73), (0x1E74, 0x1E75), (0x1E76, 0x1E77),
        (0x1E78, 0x1E79), (0x1E7A, 0x1E7B), (0x1E7C, 0x1E7D), (0x1E7E, 0x1E7F), (0x1E80, 0x1E81),
        (0x1E82, 0x1E83), (0x1E84, 0x1E85), (0x1E86, 0x1E87), (0x1E88, 0x1E89), (0x1E8A, 0x1E8B),
        (0x1E8C, 0x1E8D), (0x1E8E, 0x1E8F), (0x1E90, 0x1E91), (0x1E92, 0x1E93), (0x1E94, 0x1E95),
        (0x1E9B, 0x1E61), (0x1E9E, 0x00DF), (0x1EA0, 0x1EA1), (0x1EA2, 0x1EA3), (0x1EA4, 0x1EA5),
        (0x1EA6, 0x1EA7), (0x1EA8, 0x1EA9), (0x1EAA, 0x1EAB), (0x1EAC, 0x1EAD), (0x1EAE, 0x1EAF),
        (0x1EB0, 0x1EB1), (0x1EB2, 0x1EB3), (0x1EB4, 0x1EB5), (0x1EB6, 0x1EB7), (0x1EB8, 0x1EB9),
        (0x1EBA, 0x1EBB), (0x1EBC, 0x1EBD), (0x1EBE, 0x1EBF), (0x1EC0, 0x1EC1), (0x1EC2, 0x1EC3),
        (0x1EC4, 0x1EC5), (0x1EC6, 0x1EC7), (0x1EC8, 0x1EC9), (0x1ECA, 0x1ECB), (0x1ECC, 0x1ECD),
        (0x1ECE, 0x1ECF), (0x1ED0, 0x1ED1), (0x1ED2, 0x1ED3), (0x1ED4, 0x1ED5), (0x1ED6, 0x1ED7),
        (0x1ED8, 0x1ED9), (0x1EDA, 0x1EDB), (0x1EDC, 0x1EDD), (0x1EDE, 0x1EDF), (0x1EE0, 0x1EE1),
        (0x1EE2, 0x1EE3), (0x1EE4, 0x1EE5), (0x1EE6, 0x1EE7), (0x1EE8, 0x1EE9), (0x1EEA, 0x1EEB),
        (0x1EEC, 0x1EED), (0x1EEE, 0x1EEF), (0x1EF0, 0x1EF1), (0x1EF2, 0x1EF3), (0x1EF4, 0x1EF5),
        (0x1EF6, 0x1EF7), (0x1EF8, 0x1EF9), (0x1EFA, 0x1EFB), (0x1EFC, 0x1EFD), (0x1EFE, 0x1EFF),
        (0x1F08, 0x1F00), (0x1F09, 0x1F01), (0x1F0A, 0x1F02), (0x1F0B, 0x1F03), (0x1F0C, 0x1F04),
        (0x1F0D, 0x1F05), (0x1F0E, 0x1F06), (0x1F0F, 0x1F07), (0x1F18, 0x1F10), (0x1F19, 0x1F11),
        (0x1F1A, 0x1F12), (0x1F1B, 0x1F13), (0x1F1C, 0x1F14), (0x1F1D, 0x1F15), (0x1F28, 0x1F20),
        (0x1F29, 0x1F21), (0x1F2A, 0x1F22), (0x1F2B, 0x1F23), (0x1F2C, 0x1F24), (0x1F2D, 0x1F25),
        (0x1F2E, 0x1F26), (0x1F2F, 0x1F27), (0x1F38, 0x1F30), (0x1F39, 0x1F31), (0x1F3A, 0x1F32),
        (0x1F3B, 0x1F33), (0x1F3C, 0x1F34), (0x1F3D, 0x1F35), (0x1F3E, 0x1F36), (0x1F3F, 0x1F37),
        (0x1F48, 0x1F40), (0x1F49, 0x1F41), (0x1F4A, 0x1F42), (0x1F4B, 0x1F43), (0x1F4C, 0x1F44),
        (0x1F4D, 0x1F45), (0x1F59, 0x1F51), (0x1F5B, 0x1F53), (0x1F5D, 0x1F55), (0x1F5F, 0x1F57),
        (0x1F68, 0x1F60), (0x1F69, 0x1F61), (0x1F6A, 0x1F62), (0x1F6B, 0x1F63), (0x1F6C, 0x1F64),
        (0x1F6D, 0x1F65), (0x1F6E, 0x1F66), (0x1F6F, 0x1F67), (0x1F88, 0x1F80), (0x1F89, 0x1F81),
        (0x1F8A, 0x1F82), (0x1F8B, 0x1F83), (0x1F8C, 0x1F84), (0x1F8D, 0x1F85), (0x1F8E, 0x1F86),
        (0x1F8F, 0x1F87), (0x1F98, 0x1F90), (0x1F99, 0x1F91), (0x1F9A, 0x1F92), (0x1F9B, 0x1F93),
        (0x1F9C, 0x1F94), (0x1F9D, 0x1F95), (0x1F9E, 0x1F96), (0x1F9F, 0x1F97), (0x1FA8, 0x1FA0),
        (0x1FA9, 0x1FA1), (0x1FAA, 0x1FA2), (0x1FAB, 0x1FA3), (0x1FAC, 0x1FA4), (0x1FAD, 0x1FA5),
        (0x1FAE, 0x1FA6), (0x1FAF, 0x1FA7), (0x1FB8, 0x1FB0), (0x1FB9, 0x1FB1), (0x1FBA, 0x1F70),
        (0x1FBB, 0x1F71), (0x1FBC, 0x1FB3), (0x1FBE, 0x03B9), (0x1FC8, 0x1F72), (0x1FC9, 0x1F73),
        (0x1FCA, 0x1F74), (0x1FCB, 0x1F75), (0x1FCC, 0x1FC3), (0x1FD8, 0x1FD0), (0x1FD9, 0x1FD1),
        (0x1FDA, 0x1F76), (0x1FDB, 0x1F77), (0x1FE8, 0x1FE0), (0x1FE9, 0x1FE1), (0x1FEA, 0x1F7A),
        (0x1FEB, 0x1F7B), (0x1FEC, 0x1FE5), (0x1FF8, 0x1F78), (0x1FF9, 0x1F79), (0x1FFA, 0x1F7C),
        (0x1FFB, 0x1F7D), (0x1FFC, 0x1FF3), (0x2126, 0x03C9), (0x212A, 0x006B), (0x212B, 0x00E5),
        (0x2132, 0x214E), (0x2160, 0x2170), (0x2161, 0x2171), (0x2162, 0x2172), (0x2163, 0x2173),
        (0x2164, 0x2174), (0x2165, 0x2175), (0x2166, 0x2176), (0x2167, 0x2177), (0x2168, 0x2178),
        (0x2169, 0x2179), (0x216A, 0x217A), (0x216B, 0x217B), (0x216C, 0x217C), (0x216D, 0x217D),
        (0x216E, 0x217E), (0x216F, 0x217F), (0x2183, 0x2184), (0x24B6, 0x24D0), (0x24B7, 0x24D1),
        (0x24B8, 0x24D2), (0x24B9, 0x24D3), (0x24BA, 0x24D4), (0x24BB, 0x24D5), (0x24BC, 0x24D6),
        (0x24BD, 0x24D7), (0x24BE, 0x24D8), (0x24BF, 0x24D9), (0x24C0, 0x24DA), (0x24C1, 0x24DB),
        (0x24C2, 0x24DC), (0x24C3, 0x24DD), (0x24C4, 0x24DE), (0x24C5, 0x24DF), (0x24C6, 0x24E0),
        (0x24C7, 0x24E1), (0x24C8, 0x24E2), (0x24C9, 0x24E3), (0x24CA, 0x24E4), (0x24CB, 0x24E5),
        (0x24CC, 0x24E6), (0x24CD, 0x24E7), (0x24CE, 0x24E8), (0x24CF, 0x24E9), (0x2C00, 0x2C30),
        (0x2C01, 0x2C31), (0x2C02, 0x2C32), (0x2C03, 0x2C33), (0x2C04, 0x2C34), (0x2C05, 0x2C35),
        (0x2C06, 0x2C36), (0x2C07, 0x2C37), (0x2C08, 0x2C38), (0x2C09, 0x2C39), (0x2C0A, 0x2C3A),
        (0x2C0B, 0x2C3B), (0x2C0C, 0x2C3C), (0x2C0D, 0x2C3D), (0x2C0E, 0x2C3E), (0x2C0F, 0x2C3F),
        (0x2C10, 0x2C40), (0x2C11, 0x2C41), (0x2C12, 0x2C42), (0x2C13, 0x2C43), (0x2C14, 0x2C44),
        (0x2C15, 0x2C45), (0x2C16, 0x2C46), (0x2C17, 0x2C47), (0x2C18, 0x2C48), (0x2C19, 0x2C49),
        (0x2C1A, 0x2C4A), (0x2C1B, 0x2C4B), (0x2C1C, 0x2C4C), (0x2C1D, 0x2C4D), (0x2C1E, 0x2C4E),
        (0x2C1F, 0x2C4F), (0x2C20, 0x2C50), (0x2C21, 0x2C51), (0x2C22, 0x2C52), (0x2C23, 0x2C53),
        (0x2C24, 0x2C54), (0x2C25, 0x2C55), (0x2C26, 0x2C56), (0x2C27, 0x2C57), (0x2C28, 0x2C58),
        (0x2C29, 0x2C59), (0x2C2A, 0x2C5A), (0x2C2B, 0x2C5B), (0x2C2C, 0x2C5C), (0x2C2D, 0x2C5D),
        (0x2C2E, 0x2C5E), (0x2C2F, 0x2C5F), (0x2C60, 0x2C61), (0x2C62, 0x026B), (0x2C63, 0x1D7D),
        (0x2C64, 0x027D), (0x2C67, 0x2C68), (0x2C69, 0x2C6A), (0x2C6B, 0x2C6C), (0x2C6D, 0x0251),
        (0x2C6E, 0x0271), (0x2C6F, 0x0250), (0x2C70, 0x0252), (0x2C72, 0x2C73), (0x2C75, 0x2C76),
        (0x2C7E, 0x023F), (0x2C7F, 0x0240), (0x2C80, 0x2C81), (0x2C82, 0x2C83), (0x2C84, 0x2C85),
        (0x2C86, 0x2C87), (0x2C88, 0x2C89), (0x2C8A, 0x2C8B), (0x2C8C, 0x2C8D), (0x2C8E, 0x2C8F),
        (0x2C90, 0x2C91), (0x2C92, 0x2C93), (0x2C94, 0x2C95), (0x2C96, 0x2C97), (0x2C98, 0x2C99),
        (0x2C9A, 0x2C9B), (0x2C9C, 0x2C9D), (0x2C9E, 0x2C9F), (0x2CA0, 0x2CA1), (0x2CA2, 0x2CA3),
        (0x2CA4, 0x2CA5), (0x2CA6, 0x2CA7), (0x2CA8, 0x2CA9), (0x2CAA, 0x2CAB), (0x2CAC, 0x2CAD),
        (0x2CAE, 0x2CAF), (0x2CB0, 0x2CB1), (0x2CB2, 0x2CB3), (0x2CB4, 0x2CB5), (0x2CB6, 0x2CB7),
        (0x2CB8, 0x2CB9), (0x2CBA, 0x2CBB), (0x2CBC, 0x2CBD), (0x2CBE, 0x2CBF), (0x2CC0, 0x2CC1),
        (0x2CC2, 0x2CC3), (0x2CC4, 0x2CC5), (0x2CC6, 0x2CC7), (0x2CC8, 0x2CC9), (0x2CCA, 0x2CCB),
        (0x2CCC, 0x2CCD), (0x2CCE, 0x2CCF), (0x2CD0, 0x2CD1), (0x2CD2, 0x2CD3), (0x2CD4, 0x2CD5),
        (0x2CD6, 0x2CD7), (0x2CD8, 0x2CD9), (0x2CDA, 0x2CDB), (0x2CDC, 0x2CDD), (0x2CDE, 0x2CDF),
        (0x2CE0, 0x2CE1), (0x2CE2, 0x2CE3), (0x2CEB, 0x2CEC), (0x2CED, 0x2CEE), (0x2CF2, 0x2CF3),
        (0xA640, 0xA641), (0xA642, 0xA643), (0xA644, 0xA645), (0xA646, 0xA647), (0xA648, 0xA649),
        (0xA64A, 0xA64B), (0xA64C, 0xA64D), (0xA64E, 0xA64F), (0xA650, 0xA651), (0xA652, 0xA653),
        (0xA654, 0xA655), (0xA656, 0xA657), (0xA658, 0xA659), (0xA65A, 0xA65B), (0xA65C, 0xA65D),
        (0xA65E, 0xA65F), (0xA660, 0xA661), (0xA662, 0xA663), (0xA664, 0xA665), (0xA666, 0xA667),
        (0xA668, 0xA669), (0xA66A, 0xA66B), (0xA66C, 0xA66D), (0xA680, 0xA681), (0xA682, 0xA683),
        (0xA684, 0xA685), (0xA686, 0xA687), (0xA688, 0xA689), (0xA68A, 0xA68B), (0xA68C, 0xA68D),
        (0xA68E, 0xA68F), (0xA690, 0xA691), (0xA692, 0xA693), (0xA694, 0xA695), (0xA696, 0xA697),
        (0xA698, 0xA699), (0xA69A, 0xA69B), (0xA722, 0xA723), (0xA724, 0xA725), (0xA726, 0xA727),
        (0xA728, 0xA729), (0xA72A, 0xA72B), (0xA72C, 0xA72D), (0xA72E, 0xA72F), (0xA732, 0xA733),
        (0xA734, 0xA735), (0xA736, 0xA737), (0xA738, 0xA739), (0xA73A, 0xA73B), (0xA73C, 0xA73D),
        (0xA73E, 0xA73F), (0xA740, 0xA741), (0xA742, 0xA743), (0xA744, 0xA745), (0xA746, 0xA747),
        (0xA748, 0xA749), (0xA74A, 0xA74B), (0xA74C, 0xA74D), (0xA74E, 0xA74F), (0xA750, 0xA751),
        (0xA752, 0xA753), (0xA754, 0xA755), (0xA756, 0xA757), (0xA758, 0xA759), (0xA75A, 0xA75B),
        (0xA75C, 0xA75D), (0xA75E, 0xA75F), (0xA760, 0xA761), (0xA762, 0xA763), (0xA764, 0xA765),
        (0xA766, 0xA767), (0xA768, 0xA769), (0xA76A, 0xA76B), (0xA76C, 0xA76D), (0xA76E, 0xA76F),
        (0xA779, 0xA77A), (0xA77B, 0xA77C), (0xA77D, 0x1D79), (0xA77E, 0xA77F), (0xA780, 0xA781),
        (0xA782, 0xA783), (0xA784, 0xA785), (0xA786, 0xA787), (0xA78B, 0xA78C), (0xA78D, 0x0265),
        (0xA790, 0xA791), (0xA792, 0xA793), (0xA796, 0xA797), (0xA798, 0xA799), (0xA79A, 0xA79B),
        (0xA79C, 0xA79D), (0xA79E, 0xA79F), (0xA7A0, 0xA7A1), (0xA7A2, 0xA7A3), (0xA7A4, 0xA7A5),
        (0xA7A6, 0xA7A7), (0xA7A8, 0xA7A9), (0xA7AA, 0x0266), (0xA7AB, 0x025C), (0xA7AC, 0x0261),
        (0xA7AD, 0x026C), (0xA7AE, 0x026A), (0xA7B0, 0x029E), (0xA7B1, 0x0287), (0xA7B2, 0x029D),
        (0xA7B3, 0xAB53), (0xA7B4, 0xA7B5), (0xA7B6, 0xA7B7), (0xA7B8, 0xA7B9), (0xA7BA, 0xA7BB),
        (0xA7BC, 0xA7BD), (0xA7BE, 0xA7BF), (0xA7C0, 0xA7C1), (0xA7C2, 0xA7C3), (0xA7C4, 0xA794),
        (0xA7C5, 0x0282), (0xA7C6, 0x1D8E), (0xA7C7, 0xA7C8), (0xA7C9, 0xA7CA), (0xA7D0, 0xA7D1),
        (0xA7D6, 0xA7D7), (0xA7D8, 0xA7D9), (0xA7F5, 0xA7F6), (0xAB70, 0x13A0), (0xAB71, 0x13A1),
        (0xAB72, 0x13A2), (0xAB73, 0x13A3), (0xAB74, 0x13A4), (0xAB75, 0x13A5), (0xAB76, 0x13A6),
        (0xAB77, 0x13A7), (0xAB78, 0x13A8), (0xAB79, 0x13A9), (0xAB7A, 0x13AA), (0xAB7B, 0x13AB),
        (0xAB7C, 0x13AC), (0xAB7D, 0x13AD), (0xAB7E, 0x13AE), (0xAB7F, 0x13AF), (0xAB80, 0x13B0),
        (0xAB81, 0x13B1), (0xAB82, 0x13B2), (0xAB83, 0x13B3), (0xAB84, 0x13B4), (0xAB85, 0x13B5),
        (0xAB86, 0x13B6), (0xAB87, 0x13B7), (0xAB88, 0x13B8), (0xAB89, 0x13B9), (0xAB8A, 0x13BA),
        (0xAB8B, 0x13BB), (0xAB8C, 0x13BC), (0xAB8D, 0x13BD), (0xAB8E, 0x13BE), (0xAB8F, 0x13BF),
        (0xAB90, 0x13C0), (0xAB91, 0x13C1), (0xAB92, 0x13C2), (0xAB93, 0x13C3), (0xAB94, 0x13C4),
        (0xAB95, 0x13C5), (0xAB96, 0x13C6), (0xAB97, 0x13C7), (0xAB98, 0x13C8), (0xAB99, 0x13C9),
        (0xAB9A, 0x13CA), (0xAB9B, 0x13CB), (0xAB9C, 0x13CC), (0xAB9D, 0x13CD), (0xAB9E, 0x13CE),
        (0xAB9F, 0x13CF), (0xABA0, 0x13D0), (0xABA1, 0x13D1), (0xABA2, 0x13D2), (0xABA3, 0x13D3),
        (0xABA4, 0x13D4), (0xABA5, 0x13D5), (0xABA6, 0x13D6), (0xABA7, 0x13D7), (0xABA8, 0x13D8),
        (0xABA9, 0x13D9), (0xABAA, 0x13DA), (0xABAB, 0x13DB), (0xABAC, 0x13DC), (0xABAD, 0x13DD),
        (0xABAE, 0x13DE), (0xABAF, 0x13DF), (0xABB0, 0x13E0), (0xABB1, 0x13E1), (0xABB2, 0x13E2),
        (0xABB3, 0x13E3), (0xABB4, 0x13E4), (0xABB5, 0x13E5), (0xABB6, 0x13E6), (0xABB7, 0x13E7),
        (0xABB8, 0x13E8), (0xABB9, 0x13E9), (0xABBA, 0x13EA), (0xABBB, 0x13EB), (0xABBC, 0x13EC),
        (0xABBD, 0x13ED), (0xABBE, 0x13EE), (0xABBF, 0x13EF), (0xFF21, 0xFF41), (0xFF22, 0xFF42),
        (0xFF23, 0xFF43), (0xFF24, 0xFF44), (0xFF25, 0xFF45), (0xFF26, 0xFF46), (0xFF27, 0xFF47),
        (0xFF28, 0xFF48), (0xFF29, 0xFF49), (0xFF2A, 0xFF4A), (0xFF2B, 0xFF4B), (0xFF2C, 0xFF4C),
        (0xFF2D, 0xFF4D), (0xFF2E, 0xFF4E), (0xFF2F, 0xFF4F), (0xFF30, 0xFF50), (0xFF31, 0xFF51),
        (0xFF32, 0xFF52), (0xFF33, 0xFF53), (0xFF34, 0xFF54), (0xFF35, 0xFF55), (0xFF36, 0xFF56),
        (0xFF37, 0xFF57), (0xFF38, 0xFF58), (0xFF39, 0xFF59), (0xFF3A, 0xFF5A), (0x10400, 0x10428),
        (0x10401, 0x10429), (0x10402, 0x1042A), (0x10403, 0x1042B), (0x10404, 0x1042C),
        (0x10405, 0x1042D), (0x10406, 0x1042E), (0x10407, 0x1042F), (0x10408, 0x10430),
        (0x10409, 0x10431), (0x1040A, 0x10432), (0x1040B, 0x10433), (0x1040C, 0x10434),
        (0x1040D, 0x10435), (0x1040E, 0x10436), (0x1040F, 0x10437), (0x10410, 0x10438),
        (0x10411, 0x10439), (0x10412, 0x1043A), (0x10413, 0x1043B), (0x10414, 0x1043C),
        (0x10415, 0x1043D), (0x10416, 0x1043E), (0x10417, 0x1043F), (0x10418, 0x10440),
        (0x10419, 0x10441), (0x1041A, 0x10442), (0x1041B, 0x10443), (0x1041C, 0x10444),
        (0x1041D, 0x10445), (0x1041E, 0x10446), (0x1041F, 0x10447), (0x10420, 0x10448),
        (0x10421, 0x10449), (0x10422, 0x1044A), (0x10423, 0x1044B), (0x10424, 0x1044C),
        (0x10425, 0x1044D), (0x10426, 0x1044E), (0x10427, 0x1044F), (0x104B0, 0x104D8),
        (0x104B1, 0x104D9), (0x104B2, 0x104DA), (0x104B3, 0x104DB), (0x104B4, 0x104DC),
        (0x104B5, 0x104DD), (0x104B6, 0x104DE), (0x104B7, 0x104DF), (0x104B8, 0x104E0),
        (0x104B9, 0x104E1), (0x104BA, 0x104E2), (0x104BB, 0x104E3), (0x104BC, 0x104E4),
        (0x104BD, 0x104E5), (0x104BE, 0x104E6), (0x104BF, 0x104E7), (0x104C0, 0x104E8),
        (0x104C1, 0x104E9), (0x104C2, 0x104EA), (0x104C3, 0x104EB), (0x104C4, 0x104EC),
        (0x104C5, 0x104ED), (0x104C6, 0x104EE), (0x104C7, 0x104EF), (0x104C8, 0x104F0),
        (0x104C9, 0x104F1), (0x104CA, 0x104F2), (0x104CB, 0x104F3), (0x104CC, 0x104F4),
        (0x104CD, 0x104F5), (0x104CE, 0x104F6), (0x104CF, 0x104F7), (0x104D0, 0x104F8),
        (0x104D1, 0x104F9), (0x104D2, 0x104FA), (0x104D3, 0x104FB), (0x10570, 0x10597),
        (0x10571, 0x10598), (0x10572, 0x10599), (0x10573, 0x1059A), (0x10574, 0x1059B),
        (0x10575, 0x1059C), (0x10576, 0x1059D), (0x10577, 0x1059E), (0x10578, 0x1059F),
        (0x10579, 0x105A0), (0x1057A, 0x105A1), (0x1057C, 0x105A3), (0x1057D, 0x105A4),
        (0x1057E, 0x105A5), (0x1057F, 0x105A6), (0x10580, 0x105A7), (0x10581, 0x105A8),
        (0x10582, 0x105A9), (0x10583, 0x105AA), (0x10584, 0x105AB), (0x10585, 0x105AC),
        (0x10586, 0x105AD), (0x10587, 0x105AE), (0x10588, 0x105AF), (0x10589, 0x105B0),
        (0x1058A, 0x105B1), (0x1058C, 0x105B3), (0x1058D, 0x105B4), (0x1058E, 0x105B5),
        (0x1058F, 0x105B6), (0x10590, 0x105B7), (0x10591, 0x105B8), (0x10592, 0x105B9),
        (0x10594, 0x105BB), (0x10595, 0x105BC), (0x10C80, 0x10CC0), (0x10C81, 0x10CC1),
        (0x10C82, 0x10CC2), (0x10C83, 0x10CC3), (0x10C84, 0x10CC4), (0x10C85, 0x10CC5),
        (0x10C86, 0x10CC6), (0x10C87, 0x10CC7), (0x10C88, 0x10CC8), (0x10C89, 0x10CC9),
        (0x10C8A, 0x10CCA), (0x10C8B, 0x10CCB), (0x10C8C, 0x10CCC), (0x10C8D, 0x10CCD),
        (0x10C8E, 0x10CCE), (0x10C8F, 0x10CCF), (0x10C90, 0x10CD0), (0x10C91, 0x10CD1),
        (0x10C92, 0x10CD2), (0x10C93, 0x10CD3), (0x10C94, 0x10CD4), (0x10C95, 0x10CD5),
        (0x10C96, 0x10CD6), (0x10C97, 0x10CD7), (0x10C98, 0x10CD8), (0x10C99, 0x10CD9),
        (0x10C9A, 0x10CDA), (0x10C9B, 0x10CDB), (0x10C9C, 0x10CDC), (0x10C9D, 0x10CDD),
        (0x10C9E, 0x10CDE), (0x10C9F, 0x10CDF), (0x10CA0, 0x10CE0), (0x10CA1, 0x10CE1),
        (0x10CA2, 0x10CE2), (0x10CA3, 0x10CE3), (0x10CA4, 0x10CE4), (0x10CA5, 0x10CE5),
        (0x10CA6, 0x10CE6), (0x10CA7, 0x10CE7), (0x10CA8, 0x10CE8), (0x10CA9, 0x10CE9),
        (0x10CAA, 0x10CEA), (0x10CAB, 0x10CEB), (0x10CAC, 0x10CEC), (0x10CAD, 0x10CED),
        (0x10CAE, 0x10CEE), (0x10CAF, 0x10CEF), (0x10CB0, 0x10CF0), (0x10CB1, 0x10CF1),
        (0x10CB2, 0x10CF2), (0x118A0, 0x118C0), (0x118A1, 0x118C1), (0x118A2, 0x118C2),
        (0x118A3, 0x118C3), (0x118A4, 0x118C4), (0x118A5, 0x118C5), (0x118A6, 0x118C6),
        (0x118A7, 0x118C7), (0x118A8, 0x118C8), (0x118A9, 0x118C9), (0x118AA, 0x118CA),
        (0x118AB, 0x118CB), (0x118AC, 0x118CC), (0x118AD, 0x118CD), (0x118AE, 0x118CE),
        (0x118AF, 0x118CF), (0x118B0, 0x118D0), (0x118B1, 0x118D1), (0x118B2, 0x118D2),
        (0x118B3, 0x118D3), (0x118B4, 0x118D4), (0x118B5, 0x118D5), (0x118B6, 0x118D6),
        (0x118B7, 0x118D7), (0x118B8, 0x118D8), (0x118B9, 0x118D9), (0x118BA, 0x118DA),
        (0x118BB, 0x118DB), (0x118BC, 0x118DC), (0x118BD, 0x118DD), (0x118BE, 0x118DE),
        (0x118BF, 0x118DF), (0x16E40, 0x16E60), (0x16E41, 0x16E61), (0x16E42, 0x16E62),
        (0x16E43, 0x16E63), (0x16E44, 0x16E64), (0x16E45, 0x16E65), (0x16E46, 0x16E66),
        (0x16E47, 0x16E67), (0x16E48, 0x16E68), (0x16E49, 0x16E69), (0x16E4A, 0x16E6A),
        (0x16E4B, 0x16E6B), (0x16E4C, 0x16E6C), (0x16E4D, 0x16E6D), (0x16E4E, 0x16E6E),
        (0x16E4F, 0x16E6F), (0x16E50, 0x16E70), (0x16E51, 0x16E71), (0x16E52, 0x16E72),
        (0x16E53, 0x16E73), (0x16E54, 0x16E74), (0x16E55, 0x16E75), (0x16E56, 0x16E76),
        (0x16E57, 0x16E77), (0x16E58, 0x16E78), (0x16E59, 0x16E79), (0x16E5A, 0x16E7A),
        (0x16E5B, 0x16E7B), (0x16E5C, 0x16E7C), (0x16E5D, 0x16E7D), (0x16E5E, 0x16E7E),
        (0x16E5F, 0x16E7F), (0x1E900, 0x1E922), (0x1E901, 0x1E923), (0x1E902, 0x1E924),
        (0x1E903, 0x1E925), (0x1E904, 0x1E926), (0x1E905, 0x1E927), (0x1E906, 0x1E928),
        (0x1E907, 0x1E929), (0x1E908, 0x1E92A), (0x1E909, 0x1E92B), (0x1E90A, 0x1E92C),
        (0x1E90B, 0x1E92D), (0x1E90C, 0x1E92E), (0x1E90D, 0x1E92F), (0x1E90E, 0x1E930),
        (0x1E90F, 0x1E931), (0x1E910, 0x1E932), (0x1E911, 0x1E933), (0x1E912, 0x1E934),
        (0x1E913, 0x1E935), (0x1E914, 0x1E936), (0x1E915, 0x1E937), (0x1E916, 0x1E938),
        (0x1E917, 0x1E939), (0x1E918, 0x1E93A), (0x1E919, 0x1E93B), (0x1E91A, 0x1E93C),
        (0x1E91B, 0x1E93D), (0x1E91C, 0x1E93E), (0x1E91D, 0x1E93F), (0x1E91E, 0x1E940),
        (0x1E91F, 0x1E941), (0x1E920, 0x1E942), (0x1E921, 0x1E943),
    ];
}

pub(crate) mod special_casing {
    use crate::language_ty::Language;
    use crate::special_casing::{CasingContext, SpecialCasingRule};

    pub(crate) static SPECIAL_CASING_TABLE: &[SpecialCasingRule] = &[
        SpecialCasingRule {
            code: 0x0049, language: Some(Language::from_code(*b"lt")), context: CasingContext::MoreAbove, negated: false,
            lower: &['\u{69}', '\u{307}'], title: &['\u{49}'],
            upper: &['\u{49}'], fold: &['\u{69}'],
        },
        SpecialCasingRule {
            code: 0x0049, language: Some(Language::from_code(*b"tr")), context: CasingContext::BeforeDot, negated: true,
            lower: &['\u{131}'], title: &['\u{49}'],
            upper: &['\u{49}'], fold: &['\u{131}'],
        },
        SpecialCasingRule {
            code: 0x0049, language: Some(Language::from_code(*b"az")), context: CasingContext::BeforeDot, negated: true,
            lower: &['\u{131}'], title: &['\u{49}'],
            upper: &['\u{49}'], fold: &['\u{131}'],
        },
        SpecialCasingRule {
            code: 0x004A, language: Some(Language::from_code(*b"lt")), context: CasingContext::MoreAbove, negated: false,
            lower: &['\u{6A}', '\u{307}'], title: &['\u{4A}'],
            upper: &['\u{4A}'], fold: &['\u{6A}'],
        },
        SpecialCasingRule {
            code: 0x0069, language: Some(Language::from_code(*b"tr")), context: CasingContext::Always, negated: false,
            lower: &['\u{69}'], title: &['\u{130}'],
            upper: &['\u{130}'], fold: &['\u{69}'],
        },
        SpecialCasingRule {
            code: 0x0069, language: Some(Language::from_code(*b"az")), context: CasingContext::Always, negated: false,
            lower: &['\u{69}'], title: &['\u{130}'],
            upper: &['\u{130}'], fold: &['\u{69}'],
        },
        SpecialCasingRule {
            code: 0x00CC, language: Some(Language::from_code(*b"lt")), context: CasingContext::Always, negated: false,
            lower: &['\u{69}', '\u{307}', '\u{300}'], title: &['\u{CC}'],
            upper: &['\u{CC}'], fold: &['\u{EC}'],
        },
        SpecialCasingRule {
            code: 0x00CD, language: Some(Language::from_code(*b"lt")), context: CasingContext::Always, negated: false,
            lower: &['\u{69}', '\u{307}', '\u{301}'], title: &['\u{CD}'],
            upper: &['\u{CD}'], fold: &['\u{ED}'],
        },
        SpecialCasingRule {
            code: 0x00DF, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{DF}'], title: &['\u{53}', '\u{73}'],
            upper: &['\u{53}', '\u{53}'], fold: &['\u{73}', '\u{73}'],
        },
        SpecialCasingRule {
            code: 0x0128, language: Some(Language::from_code(*b"lt")), context: CasingContext::Always, negated: false,
            lower: &['\u{69}', '\u{307}', '\u{303}'], title: &['\u{128}'],
            upper: &['\u{128}'], fold: &['\u{129}'],
        },
        SpecialCasingRule {
            code: 0x012E, language: Some(Language::from_code(*b"lt")), context: CasingContext::MoreAbove, negated: false,
            lower: &['\u{12F}', '\u{307}'], title: &['\u{12E}'],
            upper: &['\u{12E}'], fold: &['\u{12F}'],
        },
        SpecialCasingRule {
            code: 0x0130, language: Some(Language::from_code(*b"tr")), context: CasingContext::Always, negated: false,
            lower: &['\u{69}'], title: &['\u{130}'],
            upper: &['\u{130}'], fold: &['\u{69}'],
        },
        SpecialCasingRule {
            code: 0x0130, language: Some(Language::from_code(*b"az")), context: CasingContext::Always, negated: false,
            lower: &['\u{69}'], title: &['\u{130}'],
            upper: &['\u{130}'], fold: &['\u{69}'],
        },
        SpecialCasingRule {
            code: 0x0130, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{69}', '\u{307}'], title: &['\u{130}'],
            upper: &['\u{130}'], fold: &['\u{69}', '\u{307}'],
        },
        SpecialCasingRule {
            code: 0x0149, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{149}'], title: &['\u{2BC}', '\u{4E}'],
            upper: &['\u{2BC}', '\u{4E}'], fold: &['\u{2BC}', '\u{6E}'],
        },
        SpecialCasingRule {
            code: 0x01F0, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{1F0}'], title: &['\u{4A}', '\u{30C}'],
            upper: &['\u{4A}', '\u{30C}'], fold: &['\u{6A}', '\u{30C}'],
        },
        SpecialCasingRule {
            code: 0x0307, language: Some(Language::from_code(*b"lt")), context: CasingContext::AfterSoftDotted, negated: false,
            lower: &['\u{307}'], title: &[],
            upper: &[], fold: &['\u{307}'],
        },
        SpecialCasingRule {
            code: 0x0307, language: Some(Language::from_code(*b"tr")), context: CasingContext::AfterI, negated: false,
            lower: &[], title: &['\u{307}'],
            upper: &['\u{307}'], fold: &['\u{307}'],
        },
        SpecialCasingRule {
            code: 0x0307, language: Some(Language::from_code(*b"az")), context: CasingContext::AfterI, negated: false,
            lower: &[], title: &['\u{307}'],
            upper: &['\u{307}'], fold: &['\u{307}'],
        },
        SpecialCasingRule {
            code: 0x0390, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{390}'], title: &['\u{399}', '\u{308}', '\u{301}'],
            upper: &['\u{399}', '\u{308}', '\u{301}'], fold: &['\u{3B9}', '\u{308}', '\u{301}'],
        },
        SpecialCasingRule {
            code: 0x03A3, language: None, context: CasingContext::FinalSigma, negated: false,
            lower: &['\u{3C2}'], title: &['\u{3A3}'],
            upper: &['\u{3A3}'], fold: &['\u{3C3}'],
        },
        SpecialCasingRule {
            code: 0x03B0, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{3B0}'], title: &['\u{3A5}', '\u{308}', '\u{301}'],
            upper: &['\u{3A5}', '\u{308}', '\u{301}'], fold: &['\u{3C5}', '\u{308}', '\u{301}'],
        },
        SpecialCasingRule {
            code: 0x0587, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{587}'], title: &['\u{535}', '\u{582}'],
            upper: &['\u{535}', '\u{552}'], fold: &['\u{565}', '\u{582}'],
        },
        SpecialCasingRule {
            code: 0x1E96, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{1E96}'], title: &['\u{48}', '\u{331}'],
            upper: &['\u{48}', '\u{331}'], fold: &['\u{68}', '\u{331}'],
        },
        SpecialCasingRule {
            code: 0x1E97, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{1E97}'], title: &['\u{54}', '\u{308}'],
            upper: &['\u{54}', '\u{308}'], fold: &['\u{74}', '\u{308}'],
        },
        SpecialCasingRule {
            code: 0x1E98, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{1E98}'], title: &['\u{57}', '\u{30A}'],
            upper: &['\u{57}', '\u{30A}'], fold: &['\u{77}', '\u{30A}'],
        },
        SpecialCasingRule {
            code: 0x1E99, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{1E99}'], title: &['\u{59}', '\u{30A}'],
            upper: &['\u{59}', '\u{30A}'], fold: &['\u{79}', '\u{30A}'],
        },
        SpecialCasingRule {
            code: 0x1E9A, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{1E9A}'], title: &['\u{41}', '\u{2BE}'],
            upper: &['\u{41}', '\u{2BE}'], fold: &['\u{61}', '\u{2BE}'],
        },
        SpecialCasingRule {
            code: 0x1E9E, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{DF}'], title: &['\u{1E9E}'],
            upper: &['\u{1E9E}'], fold: &['\u{73}', '\u{73}'],
        },
        SpecialCasingRule {
            code: 0x1F50, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{1F50}'], title: &['\u{3A5}', '\u{313}'],
            upper: &['\u{3A5}', '\u{313}'], fold: &['\u{3C5}', '\u{313}'],
        },
        SpecialCasingRule {
            code: 0x1F52, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{1F52}'], title: &['\u{3A5}', '\u{313}', '\u{300}'],
            upper: &['\u{3A5}', '\u{313}', '\u{300}'], fold: &['\u{3C5}', '\u{313}', '\u{300}'],
        },
        SpecialCasingRule {
            code: 0x1F54, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{1F54}'], title: &['\u{3A5}', '\u{313}', '\u{301}'],
            upper: &['\u{3A5}', '\u{313}', '\u{301}'], fold: &['\u{3C5}', '\u{313}', '\u{301}'],
        },
        SpecialCasingRule {
            code: 0x1F56, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{1F56}'], title: &['\u{3A5}', '\u{313}', '\u{342}'],
            upper: &['\u{3A5}', '\u{313}', '\u{342}'], fold: &['\u{3C5}', '\u{313}', '\u{342}'],
        },
        SpecialCasingRule {
            code: 0x1F80, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{1F80}'], title: &['\u{1F88}'],
            upper: &['\u{1F08}', '\u{399}'], fold: &['\u{1F00}', '\u{3B9}'],
        },
        SpecialCasingRule {
            code: 0x1F81, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{1F81}'], title: &['\u{1F89}'],
            upper: &['\u{1F09}', '\u{399}'], fold: &['\u{1F01}', '\u{3B9}'],
        },
        SpecialCasingRule {
            code: 0x1F82, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{1F82}'], title: &['\u{1F8A}'],
            upper: &['\u{1F0A}', '\u{399}'], fold: &['\u{1F02}', '\u{3B9}'],
        },
        SpecialCasingRule {
            code: 0x1F83, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{1F83}'], title: &['\u{1F8B}'],
            upper: &['\u{1F0B}', '\u{399}'], fold: &['\u{1F03}', '\u{3B9}'],
        },
        SpecialCasingRule {
            code: 0x1F84, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{1F84}'], title: &['\u{1F8C}'],
            upper: &['\u{1F0C}', '\u{399}'], fold: &['\u{1F04}', '\u{3B9}'],
        },
        SpecialCasingRule {
            code: 0x1F85, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{1F85}'], title: &['\u{1F8D}'],
            upper: &['\u{1F0D}', '\u{399}'], fold: &['\u{1F05}', '\u{3B9}'],
        },
        SpecialCasingRule {
            code: 0x1F86, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{1F86}'], title: &['\u{1F8E}'],
            upper: &['\u{1F0E}', '\u{399}'], fold: &['\u{1F06}', '\u{3B9}'],
        },
        SpecialCasingRule {
            code: 0x1F87, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{1F87}'], title: &['\u{1F8F}'],
            upper: &['\u{1F0F}', '\u{399}'], fold: &['\u{1F07}', '\u{3B9}'],
        },
        SpecialCasingRule {
            code: 0x1F88, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{1F80}'], title: &['\u{1F88}'],
            upper: &['\u{1F08}', '\u{399}'], fold: &['\u{1F00}', '\u{3B9}'],
        },
        SpecialCasingRule {
            code: 0x1F89, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{1F81}'], title: &['\u{1F89}'],
            upper: &['\u{1F09}', '\u{399}'], fold: &['\u{1F01}', '\u{3B9}'],
        },
        SpecialCasingRule {
            code: 0x1F8A, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{1F82}'], title: &['\u{1F8A}'],
            upper: &['\u{1F0A}', '\u{399}'], fold: &['\u{1F02}', '\u{3B9}'],
        },
        SpecialCasingRule {
            code: 0x1F8B, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{1F83}'], title: &['\u{1F8B}'],
            upper: &['\u{1F0B}', '\u{399}'], fold: &['\u{1F03}', '\u{3B9}'],
        },
        SpecialCasingRule {
            code: 0x1F8C, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{1F84}'], title: &['\u{1F8C}'],
            upper: &['\u{1F0C}', '\u{399}'], fold: &['\u{1F04}', '\u{3B9}'],
        },
        SpecialCasingRule {
            code: 0x1F8D, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{1F85}'], title: &['\u{1F8D}'],
            upper: &['\u{1F0D}', '\u{399}'], fold: &['\u{1F05}', '\u{3B9}'],
        },
        SpecialCasingRule {
            code: 0x1F8E, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{1F86}'], title: &['\u{1F8E}'],
            upper: &['\u{1F0E}', '\u{399}'], fold: &['\u{1F06}', '\u{3B9}'],
        },
        SpecialCasingRule {
            code: 0x1F8F, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{1F87}'], title: &['\u{1F8F}'],
            upper: &['\u{1F0F}', '\u{399}'], fold: &['\u{1F07}', '\u{3B9}'],
        },
        SpecialCasingRule {
            code: 0x1F90, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{1F90}'], title: &['\u{1F98}'],
            upper: &['\u{1F28}', '\u{399}'], fold: &['\u{1F20}', '\u{3B9}'],
        },
        SpecialCasingRule {
            code: 0x1F91, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{1F91}'], title: &['\u{1F99}'],
            upper: &['\u{1F29}', '\u{399}'], fold: &['\u{1F21}', '\u{3B9}'],
        },
        SpecialCasingRule {
            code: 0x1F92, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{1F92}'], title: &['\u{1F9A}'],
            upper: &['\u{1F2A}', '\u{399}'], fold: &['\u{1F22}', '\u{3B9}'],
        },
        SpecialCasingRule {
            code: 0x1F93, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{1F93}'], title: &['\u{1F9B}'],
            upper: &['\u{1F2B}', '\u{399}'], fold: &['\u{1F23}', '\u{3B9}'],
        },
        SpecialCasingRule {
            code: 0x1F94, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{1F94}'], title: &['\u{1F9C}'],
            upper: &['\u{1F2C}', '\u{399}'], fold: &['\u{1F24}', '\u{3B9}'],
        },
        SpecialCasingRule {
            code: 0x1F95, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{1F95}'], title: &['\u{1F9D}'],
            upper: &['\u{1F2D}', '\u{399}'], fold: &['\u{1F25}', '\u{3B9}'],
        },
        SpecialCasingRule {
            code: 0x1F96, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{1F96}'], title: &['\u{1F9E}'],
            upper: &['\u{1F2E}', '\u{399}'], fold: &['\u{1F26}', '\u{3B9}'],
        },
        SpecialCasingRule {
            code: 0x1F97, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{1F97}'], title: &['\u{1F9F}'],
            upper: &['\u{1F2F}', '\u{399}'], fold: &['\u{1F27}', '\u{3B9}'],
        },
        SpecialCasingRule {
            code: 0x1F98, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{1F90}'], title: &['\u{1F98}'],
            upper: &['\u{1F28}', '\u{399}'], fold: &['\u{1F20}', '\u{3B9}'],
        },
        SpecialCasingRule {
            code: 0x1F99, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{1F91}'], title: &['\u{1F99}'],
            upper: &['\u{1F29}', '\u{399}'], fold: &['\u{1F21}', '\u{3B9}'],
        },
        SpecialCasingRule {
            code: 0x1F9A, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{1F92}'], title: &['\u{1F9A}'],
            upper: &['\u{1F2A}', '\u{399}'], fold: &['\u{1F22}', '\u{3B9}'],
        },
        SpecialCasingRule {
            code: 0x1F9B, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{1F93}'], title: &['\u{1F9B}'],
            upper: &['\u{1F2B}', '\u{399}'], fold: &['\u{1F23}', '\u{3B9}'],
        },
        SpecialCasingRule {
            code: 0x1F9C, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{1F94}'], title: &['\u{1F9C}'],
            upper: &['\u{1F2C}', '\u{399}'], fold: &['\u{1F24}', '\u{3B9}'],
        },
        SpecialCasingRule {
            code: 0x1F9D, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{1F95}'], title: &['\u{1F9D}'],
            upper: &['\u{1F2D}', '\u{399}'], fold: &['\u{1F25}', '\u{3B9}'],
        },
        SpecialCasingRule {
            code: 0x1F9E, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{1F96}'], title: &['\u{1F9E}'],
            upper: &['\u{1F2E}', '\u{399}'], fold: &['\u{1F26}', '\u{3B9}'],
        },
        SpecialCasingRule {
            code: 0x1F9F, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{1F97}'], title: &['\u{1F9F}'],
            upper: &['\u{1F2F}', '\u{399}'], fold: &['\u{1F27}', '\u{3B9}'],
        },
        SpecialCasingRule {
            code: 0x1FA0, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{1FA0}'], title: &['\u{1FA8}'],
            upper: &['\u{1F68}', '\u{399}'], fold: &['\u{1F60}', '\u{3B9}'],
        },
        SpecialCasingRule {
            code: 0x1FA1, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{1FA1}'], title: &['\u{1FA9}'],
            upper: &['\u{1F69}', '\u{399}'], fold: &['\u{1F61}', '\u{3B9}'],
        },
        SpecialCasingRule {
            code: 0x1FA2, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{1FA2}'], title: &['\u{1FAA}'],
            upper: &['\u{1F6A}', '\u{399}'], fold: &['\u{1F62}', '\u{3B9}'],
        },
        SpecialCasingRule {
            code: 0x1FA3, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{1FA3}'], title: &['\u{1FAB}'],
            upper: &['\u{1F6B}', '\u{399}'], fold: &['\u{1F63}', '\u{3B9}'],
        },
        SpecialCasingRule {
            code: 0x1FA4, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{1FA4}'], title: &['\u{1FAC}'],
            upper: &['\u{1F6C}', '\u{399}'], fold: &['\u{1F64}', '\u{3B9}'],
        },
        SpecialCasingRule {
            code: 0x1FA5, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{1FA5}'], title: &['\u{1FAD}'],
            upper: &['\u{1F6D}', '\u{399}'], fold: &['\u{1F65}', '\u{3B9}'],
        },
        SpecialCasingRule {
            code: 0x1FA6, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{1FA6}'], title: &['\u{1FAE}'],
            upper: &['\u{1F6E}', '\u{399}'], fold: &['\u{1F66}', '\u{3B9}'],
        },
        SpecialCasingRule {
            code: 0x1FA7, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{1FA7}'], title: &['\u{1FAF}'],
            upper: &['\u{1F6F}', '\u{399}'], fold: &['\u{1F67}', '\u{3B9}'],
        },
        SpecialCasingRule {
            code: 0x1FA8, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{1FA0}'], title: &['\u{1FA8}'],
            upper: &['\u{1F68}', '\u{399}'], fold: &['\u{1F60}', '\u{3B9}'],
        },
        SpecialCasingRule {
            code: 0x1FA9, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{1FA1}'], title: &['\u{1FA9}'],
            upper: &['\u{1F69}', '\u{399}'], fold: &['\u{1F61}', '\u{3B9}'],
        },
        SpecialCasingRule {
            code: 0x1FAA, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{1FA2}'], title: &['\u{1FAA}'],
            upper: &['\u{1F6A}', '\u{399}'], fold: &['\u{1F62}', '\u{3B9}'],
        },
        SpecialCasingRule {
            code: 0x1FAB, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{1FA3}'], title: &['\u{1FAB}'],
            upper: &['\u{1F6B}', '\u{399}'], fold: &['\u{1F63}', '\u{3B9}'],
        },
        SpecialCasingRule {
            code: 0x1FAC, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{1FA4}'], title: &['\u{1FAC}'],
            upper: &['\u{1F6C}', '\u{399}'], fold: &['\u{1F64}', '\u{3B9}'],
        },
        SpecialCasingRule {
            code: 0x1FAD, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{1FA5}'], title: &['\u{1FAD}'],
            upper: &['\u{1F6D}', '\u{399}'], fold: &['\u{1F65}', '\u{3B9}'],
        },
        SpecialCasingRule {
            code: 0x1FAE, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{1FA6}'], title: &['\u{1FAE}'],
            upper: &['\u{1F6E}', '\u{399}'], fold: &['\u{1F66}', '\u{3B9}'],
        },
        SpecialCasingRule {
            code: 0x1FAF, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{1FA7}'], title: &['\u{1FAF}'],
            upper: &['\u{1F6F}', '\u{399}'], fold: &['\u{1F67}', '\u{3B9}'],
        },
        SpecialCasingRule {
            code: 0x1FB2, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{1FB2}'], title: &['\u{1FBA}', '\u{345}'],
            upper: &['\u{1FBA}', '\u{399}'], fold: &['\u{1F70}', '\u{3B9}'],
        },
        SpecialCasingRule {
            code: 0x1FB3, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{1FB3}'], title: &['\u{1FBC}'],
            upper: &['\u{391}', '\u{399}'], fold: &['\u{3B1}', '\u{3B9}'],
        },
        SpecialCasingRule {
            code: 0x1FB4, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{1FB4}'], title: &['\u{386}', '\u{345}'],
            upper: &['\u{386}', '\u{399}'], fold: &['\u{3AC}', '\u{3B9}'],
        },
        SpecialCasingRule {
            code: 0x1FB6, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{1FB6}'], title: &['\u{391}', '\u{342}'],
            upper: &['\u{391}', '\u{342}'], fold: &['\u{3B1}', '\u{342}'],
        },
        SpecialCasingRule {
            code: 0x1FB7, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{1FB7}'], title: &['\u{391}', '\u{342}', '\u{345}'],
            upper: &['\u{391}', '\u{342}', '\u{399}'], fold: &['\u{3B1}', '\u{342}', '\u{3B9}'],
        },
        SpecialCasingRule {
            code: 0x1FBC, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{1FB3}'], title: &['\u{1FBC}'],
            upper: &['\u{391}', '\u{399}'], fold: &['\u{3B1}', '\u{3B9}'],
        },
        SpecialCasingRule {
            code: 0x1FC2, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{1FC2}'], title: &['\u{1FCA}', '\u{345}'],
            upper: &['\u{1FCA}', '\u{399}'], fold: &['\u{1F74}', '\u{3B9}'],
        },
        SpecialCasingRule {
            code: 0x1FC3, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{1FC3}'], title: &['\u{1FCC}'],
            upper: &['\u{397}', '\u{399}'], fold: &['\u{3B7}', '\u{3B9}'],
        },
        SpecialCasingRule {
            code: 0x1FC4, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{1FC4}'], title: &['\u{389}', '\u{345}'],
            upper: &['\u{389}', '\u{399}'], fold: &['\u{3AE}', '\u{3B9}'],
        },
        SpecialCasingRule {
            code: 0x1FC6, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{1FC6}'], title: &['\u{397}', '\u{342}'],
            upper: &['\u{397}', '\u{342}'], fold: &['\u{3B7}', '\u{342}'],
        },
        SpecialCasingRule {
            code: 0x1FC7, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{1FC7}'], title: &['\u{397}', '\u{342}', '\u{345}'],
            upper: &['\u{397}', '\u{342}', '\u{399}'], fold: &['\u{3B7}', '\u{342}', '\u{3B9}'],
        },
        SpecialCasingRule {
            code: 0x1FCC, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{1FC3}'], title: &['\u{1FCC}'],
            upper: &['\u{397}', '\u{399}'], fold: &['\u{3B7}', '\u{3B9}'],
        },
        SpecialCasingRule {
            code: 0x1FD2, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{1FD2}'], title: &['\u{399}', '\u{308}', '\u{300}'],
            upper: &['\u{399}', '\u{308}', '\u{300}'], fold: &['\u{3B9}', '\u{308}', '\u{300}'],
        },
        SpecialCasingRule {
            code: 0x1FD3, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{1FD3}'], title: &['\u{399}', '\u{308}', '\u{301}'],
            upper: &['\u{399}', '\u{308}', '\u{301}'], fold: &['\u{3B9}', '\u{308}', '\u{301}'],
        },
        SpecialCasingRule {
            code: 0x1FD6, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{1FD6}'], title: &['\u{399}', '\u{342}'],
            upper: &['\u{399}', '\u{342}'], fold: &['\u{3B9}', '\u{342}'],
        },
        SpecialCasingRule {
            code: 0x1FD7, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{1FD7}'], title: &['\u{399}', '\u{308}', '\u{342}'],
            upper: &['\u{399}', '\u{308}', '\u{342}'], fold: &['\u{3B9}', '\u{308}', '\u{342}'],
        },
        SpecialCasingRule {
            code: 0x1FE2, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{1FE2}'], title: &['\u{3A5}', '\u{308}', '\u{300}'],
            upper: &['\u{3A5}', '\u{308}', '\u{300}'], fold: &['\u{3C5}', '\u{308}', '\u{300}'],
        },
        SpecialCasingRule {
            code: 0x1FE3, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{1FE3}'], title: &['\u{3A5}', '\u{308}', '\u{301}'],
            upper: &['\u{3A5}', '\u{308}', '\u{301}'], fold: &['\u{3C5}', '\u{308}', '\u{301}'],
        },
        SpecialCasingRule {
            code: 0x1FE4, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{1FE4}'], title: &['\u{3A1}', '\u{313}'],
            upper: &['\u{3A1}', '\u{313}'], fold: &['\u{3C1}', '\u{313}'],
        },
        SpecialCasingRule {
            code: 0x1FE6, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{1FE6}'], title: &['\u{3A5}', '\u{342}'],
            upper: &['\u{3A5}', '\u{342}'], fold: &['\u{3C5}', '\u{342}'],
        },
        SpecialCasingRule {
            code: 0x1FE7, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{1FE7}'], title: &['\u{3A5}', '\u{308}', '\u{342}'],
            upper: &['\u{3A5}', '\u{308}', '\u{342}'], fold: &['\u{3C5}', '\u{308}', '\u{342}'],
        },
        SpecialCasingRule {
            code: 0x1FF2, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{1FF2}'], title: &['\u{1FFA}', '\u{345}'],
            upper: &['\u{1FFA}', '\u{399}'], fold: &['\u{1F7C}', '\u{3B9}'],
        },
        SpecialCasingRule {
            code: 0x1FF3, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{1FF3}'], title: &['\u{1FFC}'],
            upper: &['\u{3A9}', '\u{399}'], fold: &['\u{3C9}', '\u{3B9}'],
        },
        SpecialCasingRule {
            code: 0x1FF4, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{1FF4}'], title: &['\u{38F}', '\u{345}'],
            upper: &['\u{38F}', '\u{399}'], fold: &['\u{3CE}', '\u{3B9}'],
        },
        SpecialCasingRule {
            code: 0x1FF6, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{1FF6}'], title: &['\u{3A9}', '\u{342}'],
            upper: &['\u{3A9}', '\u{342}'], fold: &['\u{3C9}', '\u{342}'],
        },
        SpecialCasingRule {
            code: 0x1FF7, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{1FF7}'], title: &['\u{3A9}', '\u{342}', '\u{345}'],
            upper: &['\u{3A9}', '\u{342}', '\u{399}'], fold: &['\u{3C9}', '\u{342}', '\u{3B9}'],
        },
        SpecialCasingRule {
            code: 0x1FFC, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{1FF3}'], title: &['\u{1FFC}'],
            upper: &['\u{3A9}', '\u{399}'], fold: &['\u{3C9}', '\u{3B9}'],
        },
        SpecialCasingRule {
            code: 0xFB00, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{FB00}'], title: &['\u{46}', '\u{66}'],
            upper: &['\u{46}', '\u{46}'], fold: &['\u{66}', '\u{66}'],
        },
        SpecialCasingRule {
            code: 0xFB01, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{FB01}'], title: &['\u{46}', '\u{69}'],
            upper: &['\u{46}', '\u{49}'], fold: &['\u{66}', '\u{69}'],
        },
        SpecialCasingRule {
            code: 0xFB02, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{FB02}'], title: &['\u{46}', '\u{6C}'],
            upper: &['\u{46}', '\u{4C}'], fold: &['\u{66}', '\u{6C}'],
        },
        SpecialCasingRule {
            code: 0xFB03, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{FB03}'], title: &['\u{46}', '\u{66}', '\u{69}'],
            upper: &['\u{46}', '\u{46}', '\u{49}'], fold: &['\u{66}', '\u{66}', '\u{69}'],
        },
        SpecialCasingRule {
            code: 0xFB04, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{FB04}'], title: &['\u{46}', '\u{66}', '\u{6C}'],
            upper: &['\u{46}', '\u{46}', '\u{4C}'], fold: &['\u{66}', '\u{66}', '\u{6C}'],
        },
        SpecialCasingRule {
            code: 0xFB05, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{FB05}'], title: &['\u{53}', '\u{74}'],
            upper: &['\u{53}', '\u{54}'], fold: &['\u{73}', '\u{74}'],
        },
        SpecialCasingRule {
            code: 0xFB06, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{FB06}'], title: &['\u{53}', '\u{74}'],
            upper: &['\u{53}', '\u{54}'], fold: &['\u{73}', '\u{74}'],
        },
        SpecialCasingRule {
            code: 0xFB13, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{FB13}'], title: &['\u{544}', '\u{576}'],
            upper: &['\u{544}', '\u{546}'], fold: &['\u{574}', '\u{576}'],
        },
        SpecialCasingRule {
            code: 0xFB14, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{FB14}'], title: &['\u{544}', '\u{565}'],
            upper: &['\u{544}', '\u{535}'], fold: &['\u{574}', '\u{565}'],
        },
        SpecialCasingRule {
            code: 0xFB15, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{FB15}'], title: &['\u{544}', '\u{56B}'],
            upper: &['\u{544}', '\u{53B}'], fold: &['\u{574}', '\u{56B}'],
        },
        SpecialCasingRule {
            code: 0xFB16, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{FB16}'], title: &['\u{54E}', '\u{576}'],
            upper: &['\u{54E}', '\u{546}'], fold: &['\u{57E}', '\u{576}'],
        },
        SpecialCasingRule {
            code: 0xFB17, language: None, context: CasingContext::Always, negated: false,
            lower: &['\u{FB17}'], title: &['\u{544}', '\u{56D}'],
            upper: &['\u{544}', '\u{53D}'], fold: &['\u{574}', '\u{56D}'],
        },
    ];
}
