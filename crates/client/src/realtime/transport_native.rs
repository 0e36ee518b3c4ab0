//! Native/Desktop WebSocket transport using tokio-tungstenite.

use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio_tungstenite::{connect_async, tungstenite::Message, MaybeTlsStream, WebSocketStream};

use super::connection::Transport;

pub struct NativeTransport {
    stream: WebSocketStream<MaybeTlsStream<TcpStream>>,
}

impl Transport for NativeTransport {
    async fn open(url: &str) -> anyhow::Result<Self> {
        let (stream, _response) = connect_async(url).await?;
        crate::log_debug!("WebSocket open: {}", url);
        Ok(Self { stream })
    }

    async fn recv(&mut self) -> Option<anyhow::Result<String>> {
        loop {
            match self.stream.next().await? {
                Ok(Message::Text(text)) => return Some(Ok(text.as_str().to_owned())),
                Ok(Message::Close(frame)) => {
                    crate::log_debug!("WebSocket close frame: {:?}", frame);
                    return None;
                }
                // Pong is handled automatically by tungstenite; Engine.IO
                // never uses binary frames for us
                Ok(_) => continue,
                Err(e) => return Some(Err(e.into())),
            }
        }
    }

    async fn send(&mut self, text: String) -> anyhow::Result<()> {
        self.stream.send(Message::Text(text.into())).await?;
        Ok(())
    }
}
