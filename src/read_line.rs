use crate::Error;
use std::io::{self, BufRead};

/// Bytes reserved up front and added on every overflow.
pub const LINE_CHUNK: usize = 1024;

pub struct LineReader<R> {
    input: R,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }

    /// Reads up to the next newline, which is consumed but not returned.
    ///
    /// End of input (or a failed read) ends the line early, so an exhausted
    /// source keeps producing empty lines. Bytes are kept as read, without
    /// any decoding.
    pub fn read_line(&mut self) -> Result<Vec<u8>, Error> {
        let mut buffer: Vec<u8> = Vec::new();
        buffer.try_reserve_exact(LINE_CHUNK)?;

        loop {
            let available = match self.input.fill_buf() {
                Ok(available) => available,
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => {
                    log::debug!("read line: {err}");
                    break;
                }
            };

            if available.is_empty() {
                break;
            }

            let newline = available.iter().position(|&byte| byte == b'\n');
            let chunk = &available[..newline.unwrap_or(available.len())];

            grow(&mut buffer, chunk.len())?;
            buffer.extend_from_slice(chunk);

            let consumed = chunk.len() + usize::from(newline.is_some());
            self.input.consume(consumed);

            if newline.is_some() {
                break;
            }
        }

        log::trace!("read {} bytes", buffer.len());
        Ok(buffer)
    }
}

fn grow(buffer: &mut Vec<u8>, additional: usize) -> Result<(), Error> {
    while buffer.capacity() - buffer.len() < additional {
        let step = buffer.capacity() + LINE_CHUNK - buffer.len();
        buffer.try_reserve_exact(step)?;
    }

    Ok(())
}
