//! OS-backed CSPRNG (getrandom via `rand::rngs::OsRng`).

use rand::RngCore;
use rand::rngs::OsRng;
use zeroize::Zeroize;

use super::SecureRandomSource;

#[derive(Debug, Default, Clone, Copy)]
pub struct OsSource;

impl SecureRandomSource for OsSource {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        OsRng.next_u32()
    }

    fn fill_u32(&mut self, out: &mut [u32]) {
        let mut bytes = vec![0u8; out.len() * 4];
        OsRng.fill_bytes(&mut bytes);
        for (v, chunk) in out.iter_mut().zip(bytes.chunks_exact(4)) {
            *v = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        bytes.zeroize();
    }

    fn name(&self) -> &'static str {
        "OS CSPRNG"
    }
}
