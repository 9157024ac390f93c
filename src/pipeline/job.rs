use crate::error::Error;

/// One chunk of work handed from the reader to a worker (§3).
pub struct Job {
    pub data: Vec<u8>,
    pub index: u32,
}

/// One chunk of output handed from a worker to the writer (§3).
pub struct ResultMsg {
    pub index: u32,
    pub data: Vec<u8>,
    pub size: usize,
    pub err: Option<Error>,
}
