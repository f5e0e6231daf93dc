/// Odd multiplier applied to every character code before it is mixed in.
const HASH_MULTIPLIER: u32 = 21_474_837;

/// A 32-bit rolling hash over a fixed-width window of characters.
///
/// While the window is filling, each character rotates the value left by one
/// and is mixed in with XOR. Once full, admitting a character also evicts the
/// oldest one by XOR-ing out its contribution, which by then has been rotated
/// `window_width` times. The value for any `window_width` consecutive
/// characters therefore depends only on those characters.
///
/// Collisions between different windows are possible; this is a filter, not a
/// fingerprint.
#[derive(Debug, Clone)]
pub struct RollingHash {
    window_width: usize,
    complement_shift: u32,
    value: u32,
    window: Box<[char]>,
    head: usize,
    len: usize,
}

impl RollingHash {
    /// Creates an empty rolling hash for windows of `window_width` characters
    pub fn new(window_width: usize) -> Self {
        Self {
            window_width,
            complement_shift: 32u32.wrapping_sub(window_width as u32),
            value: 0,
            window: vec!['\0'; window_width].into_boxed_slice(),
            head: 0,
            len: 0,
        }
    }

    /// Hash of a complete string, using a window exactly as wide as the string
    pub fn hash_of(s: &str) -> u32 {
        let chars: Vec<char> = s.chars().collect();
        let mut hash = Self::new(chars.len());
        for c in chars {
            hash.fill(c);
        }
        hash.value
    }

    /// Current hash value of the characters in the window
    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn window_width(&self) -> usize {
        self.window_width
    }

    /// Number of characters currently held in the window
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len >= self.window_width
    }

    /// Admits a character, filling the window first and rolling once full.
    /// Returns the updated hash value.
    pub fn push(&mut self, c: char) -> u32 {
        if self.is_full() {
            self.update(c)
        } else {
            self.fill(c)
        }
    }

    /// Adds a character without evicting anything.
    ///
    /// On a full window this rolls instead, so the window never grows past
    /// its width.
    pub fn fill(&mut self, c: char) -> u32 {
        if self.window_width == 0 {
            return self.value;
        }
        if self.is_full() {
            return self.update(c);
        }

        let slot = (self.head + self.len) % self.window_width;
        self.window[slot] = c;
        self.len += 1;

        self.value = self.value.rotate_left(1) ^ code(c);
        self.value
    }

    /// Evicts the oldest character and admits `c`.
    ///
    /// A window that is not yet full is filled instead.
    pub fn update(&mut self, c: char) -> u32 {
        if self.window_width == 0 {
            return self.value;
        }
        if !self.is_full() {
            return self.fill(c);
        }

        let tail = std::mem::replace(&mut self.window[self.head], c);
        self.head = (self.head + 1) % self.window_width;

        let x = code(tail);
        let y = self.value.rotate_left(1);
        let z = self.rotate_out(x);
        self.value = y ^ z ^ code(c);
        self.value
    }

    /// Rotates an evicted contribution by the window width. Shift counts wrap
    /// at 32 bits, so widths of 32 and above fold back onto a smaller rotation.
    fn rotate_out(&self, x: u32) -> u32 {
        let width = self.window_width as u32;
        x.wrapping_shl(width) | x.wrapping_shr(self.complement_shift)
    }
}

fn code(c: char) -> u32 {
    (c as u32).wrapping_mul(HASH_MULTIPLIER)
}
