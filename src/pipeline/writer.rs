//! Writer thread (§4.7): reassembles results in strict index order via a
//! holdover map, writes them out, and reports progress. On the first
//! worker error it stops writing but keeps draining the results channel
//! to completion so upstream stages never block on a full channel.

use std::collections::HashMap;
use std::io::Write;

use crossbeam_channel::Receiver;

use super::job::ResultMsg;
use super::progress::ProgressSink;
use crate::error::{Error, Result};
use crate::pipeline::Direction;

pub fn run(
    mut output: impl Write,
    direction: Direction,
    results_rx: Receiver<ResultMsg>,
    progress: &mut dyn ProgressSink,
) -> Result<()> {
    let mut pending: HashMap<u32, ResultMsg> = HashMap::new();
    let mut next_index = 0u32;
    let mut first_error: Option<Error> = None;

    for msg in results_rx.iter() {
        if first_error.is_some() {
            // Already failed: keep draining so upstream stages never
            // block on a full channel, but don't hold onto chunk data
            // that will never be written.
            continue;
        }
        pending.insert(msg.index, msg);

        while first_error.is_none() {
            let Some(msg) = pending.remove(&next_index) else {
                break;
            };
            if let Some(err) = msg.err {
                first_error = Some(Error::pipeline(msg.index, err));
                break;
            }
            write_chunk(&mut output, direction, &msg.data)?;
            progress.add(msg.size as u64);
            next_index += 1;
        }
    }

    match first_error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

fn write_chunk(output: &mut impl Write, direction: Direction, data: &[u8]) -> Result<()> {
    match direction {
        Direction::Encrypt => {
            output.write_all(&(data.len() as u32).to_be_bytes())?;
            output.write_all(data)?;
        }
        Direction::Decrypt => {
            output.write_all(data)?;
        }
    }
    Ok(())
}
