//! Concurrent chunk pipeline (§4.7, §5): one reader thread, a fixed pool
//! of worker threads, and one ordered writer thread, connected by two
//! bounded channels sized to the worker count.

mod job;
mod progress;
mod reader;
mod worker;
mod writer;

pub use job::{Job, ResultMsg};
pub use progress::{NullProgress, ProgressSink};
pub use reader::{max_encrypted_chunk_size, CHUNK_SIZE};

use std::io::{Read, Write};

use crossbeam_channel::bounded;

use crate::error::Result;
use crate::transform::ChunkTransform;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

/// Run the full pipeline over `input`/`output`.
///
/// `build_transform` is called once per worker thread so that each gets
/// its own `ChunkTransform` instance; all instances are keyed and nonced
/// identically, so which worker handles which chunk is immaterial.
pub fn run(
    direction: Direction,
    input: impl Read,
    output: impl Write,
    build_transform: impl Fn() -> Result<ChunkTransform> + Sync,
    workers: usize,
    progress: &mut dyn ProgressSink,
) -> Result<()> {
    assert!(workers > 0, "pipeline requires at least one worker");

    let (jobs_tx, jobs_rx) = bounded::<Job>(workers);
    let (results_tx, results_rx) = bounded::<ResultMsg>(workers);

    std::thread::scope(|scope| -> Result<()> {
        let mut worker_transforms = Vec::with_capacity(workers);
        for _ in 0..workers {
            worker_transforms.push(build_transform()?);
        }

        for transform in &worker_transforms {
            let jobs_rx = jobs_rx.clone();
            let results_tx = results_tx.clone();
            scope.spawn(move || {
                worker::run(transform, direction, jobs_rx, results_tx);
            });
        }
        drop(jobs_rx);
        drop(results_tx);

        let writer_handle = scope.spawn(|| writer::run(output, direction, results_rx, progress));

        let read_result = match direction {
            Direction::Encrypt => reader::read_plaintext_jobs(input, &jobs_tx),
            Direction::Decrypt => reader::read_ciphertext_jobs(input, &jobs_tx),
        };
        drop(jobs_tx);

        let write_result = writer_handle.join().expect("writer thread panicked");

        read_result?;
        write_result
    })
}
