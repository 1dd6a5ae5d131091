use std::io::Write;

use rand::Rng;

use crate::config::Config;
use crate::errors::RunError;
use crate::generator::{generate_sequence, BitSequence};

pub fn write_sequence<W: Write>(
    writer: &mut W,
    sequence: &BitSequence,
) -> Result<(), std::io::Error> {
    writeln!(writer, "{}", sequence)
}

pub fn run<W: Write, R: Rng + ?Sized>(
    config: &Config,
    writer: &mut W,
    rng: &mut R,
) -> Result<(), RunError> {
    let sequence = generate_sequence(rng, config.sequence_size)?;
    write_sequence(writer, &sequence)?;
    writer.flush()?;
    log::info!("sequence written; size = {}", sequence.len());
    Ok(())
}
