use crate::consts::*;
use crate::types::*;
use crate::session::SessionReq;
use protocol::ConsoleResponse;
use tokio::sync::{mpsc};
use tokio::task::JoinHandle;
use tokio::time;
use futures::{StreamExt, SinkExt};
use log::{debug, info};

use protocol::{BinCodeMessage, ConsoleRequest};

/// The websocket of the presentation layer driving the session.
#[derive(Debug)]
pub struct Console {
    pub(crate) id: usize,

    pub(crate) ws_from_session_tx: mpsc::Sender<WsMsg>,

    pub(crate) _tx_handle: JoinHandle<()>,
    pub(crate) _rx_handle: JoinHandle<()>,
    pub(crate) _ping_handle: JoinHandle<()>,
}

impl Console {

    pub(crate) fn new(id: usize, stream: WsStream, session_tx: mpsc::Sender<SessionReq>) -> Self {

        let (mut ws_tx, mut ws_rx) = stream.split();
        let (ws_from_session_tx, mut ws_from_session_rx) = mpsc::channel::<WsMsg>(128);

        let tx_ping = ws_from_session_tx.clone();
        let _ping_handle = tokio::spawn(async move {
            loop {
                tx_ping.send(WsMsg::Ping(Vec::new())).await.unwrap_or_default();
                time::sleep(HB_DURATION).await;
            }
        });

        let session_transmit_tx = session_tx.clone();
        let _rx_handle = tokio::spawn(
            async move {
                while let Some(Ok(ws_msg)) = ws_rx.next().await {
                    match ws_msg {
                        WsMsg::Binary(bin) => {
                            match ConsoleRequest::deser(&bin) {
                                Ok(req) => {
                                    session_transmit_tx.send(SessionReq::ConsoleReq(id, req)).await.unwrap_or_default();
                                }
                                Err(e) => debug!("console {} sent an undecodable frame: {}", id, e),
                            }
                        },
                        WsMsg::Close(_) =>{
                            break;
                        },
                        _ => {}
                    }
                }
                session_transmit_tx.send(SessionReq::ConsoleLogout(id)).await.unwrap_or_default();
            }
        );

        let logout_reminder = session_tx;
        let _tx_handle = tokio::spawn(
            async move {
                while let Some(ws_msg) = ws_from_session_rx.recv().await {
                    if ws_tx.send(ws_msg).await.is_err() {
                        logout_reminder.send(SessionReq::ConsoleLogout(id)).await.unwrap_or_default();
                        break;
                    }
                }
            }
        );

        info!("console {} connected", id);
        Self {
            id,

            ws_from_session_tx,

            _tx_handle,
            _rx_handle,
            _ping_handle
        }
    }

    pub(crate) async fn send(&self, resp: ConsoleResponse) {
        if let Ok(msg) = resp.ser() {
            self.ws_from_session_tx.send(msg).await.unwrap_or_default()
        }
    }

    pub(crate) fn abort(&self) {
        self._rx_handle.abort();
        self._tx_handle.abort();
        self._ping_handle.abort();
    }
}

impl Drop for Console {
    fn drop(&mut self) {
        self.abort();
        info!("console {} gone", self.id);
    }
}
