mod capture;
mod decode;

pub use capture::bench_capture;
pub use decode::bench_decode;

/// A mixed burst like a DAW sends on bank change: LCD text, meters,
/// lamps and 7-segment digits.
pub fn mcp_burst(len: usize) -> Vec<Vec<u8>> {
    (0..len)
        .map(|i| {
            let n = i as u8;
            match i % 4 {
                0 => {
                    let mut text = vec![0xF0, 0x00, 0x00, 0x66, 0x14, 0x12, ((i * 7) % 112) as u8];
                    text.extend_from_slice(b"Track  ");
                    text.push(0xF7);
                    text
                }
                1 => vec![0xD0, ((n % 8) << 4) | (n % 13)],
                2 => vec![0x90, n % 32, if n % 2 == 0 { 0x7F } else { 0x00 }],
                _ => vec![0xB0, 0x40 + n % 10, 0x30 + n % 10],
            }
        })
        .collect()
}
