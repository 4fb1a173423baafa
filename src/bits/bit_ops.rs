//! Fixed-width bit manipulation helpers.
//!
//! Every operation is total: positions or shift amounts outside the word
//! width degrade to a neutral value (the unchanged input, `0`, or `false`)
//! instead of faulting. Board code layers a validated `Square` on top so the
//! engine itself never relies on the clamping.

/// Bit operations over a fixed-width unsigned word.
pub trait BitWord: Copy + Sized {
    /// Width of the word in bits.
    const WIDTH: i32;

    fn set_bit(self, pos: i32) -> Self;
    fn clear_bit(self, pos: i32) -> Self;
    fn toggle_bit(self, pos: i32) -> Self;
    fn get_bit(self, pos: i32) -> bool;
    fn count_bits(self) -> u32;
    /// Shift left by `n`; `n <= 0` or `n >= WIDTH` yields zero.
    fn shl(self, n: i32) -> Self;
    /// Shift right by `n`; `n <= 0` or `n >= WIDTH` yields zero.
    fn shr(self, n: i32) -> Self;
    /// One-hot mask at `pos`, zero when out of range.
    fn bit_mask(pos: i32) -> Self;

    /// MSB-first binary string, nibbles separated by a single space.
    fn to_binary_string(self) -> String {
        let mut out = String::with_capacity((Self::WIDTH + Self::WIDTH / 4) as usize);
        for i in (0..Self::WIDTH).rev() {
            out.push(if self.get_bit(i) { '1' } else { '0' });
            if i % 4 == 0 && i != 0 {
                out.push(' ');
            }
        }
        out
    }
}

#[inline]
const fn in_range(pos: i32, width: i32) -> bool {
    pos >= 0 && pos < width
}

macro_rules! impl_bit_word {
    ($word:ty, $width:expr) => {
        impl BitWord for $word {
            const WIDTH: i32 = $width;

            #[inline]
            fn set_bit(self, pos: i32) -> Self {
                if !in_range(pos, Self::WIDTH) {
                    return self;
                }
                self | (1 << pos)
            }

            #[inline]
            fn clear_bit(self, pos: i32) -> Self {
                if !in_range(pos, Self::WIDTH) {
                    return self;
                }
                self & !(1 << pos)
            }

            #[inline]
            fn toggle_bit(self, pos: i32) -> Self {
                if !in_range(pos, Self::WIDTH) {
                    return self;
                }
                self ^ (1 << pos)
            }

            #[inline]
            fn get_bit(self, pos: i32) -> bool {
                in_range(pos, Self::WIDTH) && (self >> pos) & 1 == 1
            }

            #[inline]
            fn count_bits(self) -> u32 {
                self.count_ones()
            }

            #[inline]
            fn shl(self, n: i32) -> Self {
                if n <= 0 || n >= Self::WIDTH {
                    return 0;
                }
                self << n
            }

            #[inline]
            fn shr(self, n: i32) -> Self {
                if n <= 0 || n >= Self::WIDTH {
                    return 0;
                }
                self >> n
            }

            #[inline]
            fn bit_mask(pos: i32) -> Self {
                if !in_range(pos, Self::WIDTH) {
                    return 0;
                }
                1 << pos
            }
        }
    };
}

impl_bit_word!(u32, 32);
impl_bit_word!(u64, 64);
