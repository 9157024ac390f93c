//! Worker thread loop (§4.7, §5): pulls jobs, runs the chunk transform,
//! forwards results. Direction-agnostic; the caller decides encrypt vs.
//! decrypt by choice of transform method.

use crossbeam_channel::{Receiver, Sender};

use super::job::{Job, ResultMsg};
use crate::pipeline::Direction;
use crate::transform::ChunkTransform;

pub fn run(
    transform: &ChunkTransform,
    direction: Direction,
    jobs_rx: Receiver<Job>,
    results_tx: Sender<ResultMsg>,
) {
    for job in jobs_rx.iter() {
        let in_len = job.data.len();
        let outcome = match direction {
            Direction::Encrypt => transform.encrypt_chunk(&job.data),
            Direction::Decrypt => transform.decrypt_chunk(&job.data),
        };

        let msg = match outcome {
            Ok(data) => {
                let size = match direction {
                    Direction::Encrypt => in_len,
                    Direction::Decrypt => data.len(),
                };
                ResultMsg {
                    index: job.index,
                    data,
                    size,
                    err: None,
                }
            }
            Err(e) => ResultMsg {
                index: job.index,
                data: Vec::new(),
                size: 0,
                err: Some(e),
            },
        };

        if results_tx.send(msg).is_err() {
            // Writer gone (already failed and shut down); nothing left to do.
            break;
        }
    }
}
