//! Riemann wire client.

use prost::Message as _;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpStream, UdpSocket};
use tokio::sync::Mutex;

use gangway_common::error::{GangwayError, Result};
use gangway_common::types::MonitoringEvent;

use crate::location::{Scheme, SinkLocation};
use crate::proto;

/// Largest datagram the server will accept on the UDP transport.
const MAX_UDP_PAYLOAD: usize = 16384;

/// Largest acknowledgement frame the client will read. Real
/// acknowledgements are a handful of bytes; anything bigger means the
/// peer is not speaking the protocol.
const MAX_ACK_PAYLOAD: usize = 4096;

#[derive(Debug)]
enum Transport {
    // Submissions are serialized through the mutex: a frame write and its
    // acknowledgement read must not interleave across dispatches.
    Tcp(Mutex<TcpStream>),
    Udp(UdpSocket),
}

/// Handle to one Riemann endpoint, owning the outbound transport.
///
/// Exists from successful bootstrap until process exit; [`close`] is
/// invoked on the signal-driven shutdown path.
///
/// [`close`]: RiemannClient::close
#[derive(Debug)]
pub struct RiemannClient {
    transport: Transport,
}

impl RiemannClient {
    /// Dials the sink at the given parsed location.
    ///
    /// # Errors
    ///
    /// Returns [`GangwayError::SinkDial`] if the transport cannot be
    /// established.
    pub async fn dial(location: &SinkLocation) -> Result<Self> {
        let dial_err = |source: std::io::Error| GangwayError::SinkDial {
            location: location.to_string(),
            source,
        };

        tracing::debug!(endpoint = %location, "dialing riemann");

        let transport = match location.scheme {
            Scheme::Tcp => {
                let stream = TcpStream::connect(&location.host).await.map_err(dial_err)?;
                Transport::Tcp(Mutex::new(stream))
            }
            Scheme::Udp => {
                let socket = UdpSocket::bind("0.0.0.0:0").await.map_err(dial_err)?;
                socket.connect(&location.host).await.map_err(dial_err)?;
                Transport::Udp(socket)
            }
        };

        Ok(Self { transport })
    }

    /// Submits one event to the sink.
    ///
    /// The event is wrapped in a `Msg` and stamped with the send time.
    /// Over TCP the frame is written and the server acknowledgement is
    /// read and validated; over UDP the datagram is fire-and-forget.
    ///
    /// # Errors
    ///
    /// Returns [`GangwayError::SinkSend`] on transport failure and
    /// [`GangwayError::SinkRejected`] if the server acknowledges with
    /// `ok = false`.
    pub async fn send(&self, event: &MonitoringEvent) -> Result<()> {
        let mut wire_event = proto::Event::from(event);
        wire_event.time = Some(unix_now());
        let msg = proto::Msg {
            ok: None,
            error: None,
            events: vec![wire_event],
        };
        let body = msg.encode_to_vec();

        match &self.transport {
            Transport::Tcp(stream) => send_framed(stream, &body).await,
            Transport::Udp(socket) => send_datagram(socket, &body).await,
        }
    }

    /// Shuts down the outbound transport.
    ///
    /// # Errors
    ///
    /// Returns [`GangwayError::SinkSend`] if the TCP shutdown fails.
    pub async fn close(&self) -> Result<()> {
        match &self.transport {
            Transport::Tcp(stream) => {
                let mut stream = stream.lock().await;
                stream.shutdown().await.map_err(send_err)
            }
            Transport::Udp(_) => Ok(()),
        }
    }
}

fn send_err(source: std::io::Error) -> GangwayError {
    GangwayError::SinkSend {
        message: source.to_string(),
    }
}

async fn send_framed(stream: &Mutex<TcpStream>, body: &[u8]) -> Result<()> {
    let frame_len = u32::try_from(body.len()).map_err(|_| GangwayError::SinkSend {
        message: "encoded message exceeds frame size".to_owned(),
    })?;

    let mut stream = stream.lock().await;
    stream
        .write_all(&frame_len.to_be_bytes())
        .await
        .map_err(send_err)?;
    stream.write_all(body).await.map_err(send_err)?;
    stream.flush().await.map_err(send_err)?;

    let mut len_buf = [0_u8; 4];
    let _ = stream.read_exact(&mut len_buf).await.map_err(send_err)?;
    let reply_len = u32::from_be_bytes(len_buf) as usize;
    if reply_len > MAX_ACK_PAYLOAD {
        return Err(GangwayError::SinkSend {
            message: format!(
                "acknowledgement frame of {reply_len} bytes exceeds the {MAX_ACK_PAYLOAD} byte limit"
            ),
        });
    }
    let mut reply = vec![0_u8; reply_len];
    let _ = stream.read_exact(&mut reply).await.map_err(send_err)?;

    let ack = proto::Msg::decode(reply.as_slice()).map_err(|err| GangwayError::SinkSend {
        message: format!("undecodable acknowledgement: {err}"),
    })?;
    if ack.ok.unwrap_or(false) {
        Ok(())
    } else {
        Err(GangwayError::SinkRejected {
            message: ack
                .error
                .unwrap_or_else(|| "not acknowledged".to_owned()),
        })
    }
}

async fn send_datagram(socket: &UdpSocket, body: &[u8]) -> Result<()> {
    if body.len() > MAX_UDP_PAYLOAD {
        return Err(GangwayError::SinkSend {
            message: format!(
                "encoded message of {} bytes exceeds the {MAX_UDP_PAYLOAD} byte UDP limit",
                body.len()
            ),
        });
    }
    let _ = socket.send(body).await.map_err(send_err)?;
    Ok(())
}

fn unix_now() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map_or(0, |elapsed| {
            i64::try_from(elapsed.as_secs()).unwrap_or(i64::MAX)
        })
}
