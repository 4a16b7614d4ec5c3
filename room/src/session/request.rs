use crate::types::*;

#[derive(Debug)]
pub enum Request {
    ConsoleReq(usize, protocol::ConsoleRequest),
    ConsoleLogin{
        ws_stream: WsStream,
    },
    ConsoleLogout(usize),
}
