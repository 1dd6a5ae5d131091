use std::fmt;

use rand::Rng;

use crate::errors::GeneratorError;

pub const DEFAULT_SEQUENCE_SIZE: usize = 128;
pub const MAX_SEQUENCE_SIZE: usize = 1024 * 1024;

/// Ordered sequence of binary digits.
/// Every element is either 0 or 1.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BitSequence(Vec<u8>);

impl BitSequence {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn bits(&self) -> &[u8] {
        &self.0
    }

    pub fn count_ones(&self) -> usize {
        self.0.iter().filter(|bit| **bit == 1).count()
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }
}

/// Renders digits without separators
impl fmt::Display for BitSequence {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.0.iter() {
            write!(formatter, "{}", bit)?;
        };
        Ok(())
    }
}

fn validate_sequence_size(size: i64) -> Result<usize, GeneratorError> {
    if size < 0 {
        return Err(GeneratorError::InvalidArgument("sequence size must not be negative"));
    };
    let size = usize::try_from(size)
        .map_err(|_| GeneratorError::InvalidArgument("sequence size exceeds the limit"))?;
    if size > MAX_SEQUENCE_SIZE {
        return Err(GeneratorError::InvalidArgument("sequence size exceeds the limit"));
    };
    Ok(size)
}

// Each bit consumes one 32-bit word and takes its most significant bit
fn draw_bits<R: Rng + ?Sized>(rng: &mut R, size: usize) -> BitSequence {
    let bits = (0..size)
        .map(|_| u8::from(rng.gen::<bool>()))
        .collect();
    BitSequence(bits)
}

/// Draws `size` independent uniform bits from the given source
pub fn generate_sequence<R: Rng + ?Sized>(
    rng: &mut R,
    size: i64,
) -> Result<BitSequence, GeneratorError> {
    let size = validate_sequence_size(size)?;
    log::debug!("generating binary sequence; size = {}", size);
    Ok(draw_bits(rng, size))
}

/// Generates a sequence of default size using the thread-local generator
pub fn generate_default_sequence() -> BitSequence {
    let mut rng = rand::thread_rng();
    draw_bits(&mut rng, DEFAULT_SEQUENCE_SIZE)
}
