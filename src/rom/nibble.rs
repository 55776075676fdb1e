/// Expand a ROM image into one nibble per byte.
///
/// Each input byte becomes two output bytes: the first carries the high
/// nibble in its top 4 bits, the second carries the low nibble in its top
/// 4 bits. The bottom 4 bits of every output byte are forced to 0xF, which
/// is what the nibblewise bootrom reader expects on the unused half of the
/// bus.
pub fn expand(rom: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(rom.len() * 2);
    for &b in rom {
        out.push((b & 0xF0) | 0x0F);
        out.push(((b << 4) & 0xF0) | 0x0F);
    }
    out
}
