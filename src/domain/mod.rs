// Domain layer: records and ports (interfaces). Single-threaded by contract:
// everything here runs on the host's UI event thread, so nothing is Send.

pub mod model;
pub mod ports;
