//! Decoder configuration

/// Default nesting depth untuk sub-message
pub const DEFAULT_RECURSION_LIMIT: u32 = 100;

/// Default batas length prefix (64MB)
pub const DEFAULT_MAX_LENGTH: usize = 64 * 1024 * 1024;

/// Batas yang dipakai decoder untuk input yang tidak dipercaya
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeConfig {
    /// Kedalaman nested message maksimal
    pub recursion_limit: u32,
    /// Length prefix terbesar yang diterima (string, bytes, message, packed)
    pub max_length: usize,
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            recursion_limit: DEFAULT_RECURSION_LIMIT,
            max_length: DEFAULT_MAX_LENGTH,
        }
    }
}

impl DecodeConfig {
    pub fn recursion_limit(mut self, limit: u32) -> Self {
        self.recursion_limit = limit;
        self
    }

    pub fn max_length(mut self, bytes: usize) -> Self {
        self.max_length = bytes;
        self
    }
}
