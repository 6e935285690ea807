use anyhow::{anyhow, Result};
use futures::{SinkExt, StreamExt};
use serde_json::Value;
use std::time::Duration;
use tokio::net::TcpStream;
use tokio_tungstenite::{connect_async, tungstenite::Message, MaybeTlsStream, WebSocketStream};

const RECEIVE_TIMEOUT: Duration = Duration::from_secs(5);

/// Plays the browser side of an announcement session
pub struct SessionClient {
    socket: WebSocketStream<MaybeTlsStream<TcpStream>>,
}

impl SessionClient {
    pub async fn connect(url: &str) -> Result<Self> {
        let (socket, _) = connect_async(url).await?;
        Ok(Self { socket })
    }

    pub async fn send(&mut self, message: Value) -> Result<()> {
        self.socket.send(Message::Text(message.to_string())).await?;
        Ok(())
    }

    pub async fn send_raw(&mut self, text: &str) -> Result<()> {
        self.socket.send(Message::Text(text.to_string())).await?;
        Ok(())
    }

    /// Next JSON frame from the server
    pub async fn recv(&mut self) -> Result<Value> {
        loop {
            let frame = tokio::time::timeout(RECEIVE_TIMEOUT, self.socket.next())
                .await
                .map_err(|_| anyhow!("timed out waiting for a session message"))?
                .ok_or_else(|| anyhow!("session closed"))??;

            if let Message::Text(text) = frame {
                return Ok(serde_json::from_str(&text)?);
            }
        }
    }

    /// Skip frames until one with the given `type` arrives
    pub async fn recv_type(&mut self, kind: &str) -> Result<Value> {
        loop {
            let message = self.recv().await?;
            if message.get("type").and_then(|t| t.as_str()) == Some(kind) {
                return Ok(message);
            }
        }
    }

    /// Skip frames until a state update reports `state`
    pub async fn wait_for_state(&mut self, state: &str) -> Result<Value> {
        loop {
            let message = self.recv_type("state").await?;
            if message.get("state").and_then(|s| s.as_str()) == Some(state) {
                return Ok(message);
            }
        }
    }

    pub async fn close(mut self) -> Result<()> {
        self.socket.close(None).await?;
        Ok(())
    }
}
