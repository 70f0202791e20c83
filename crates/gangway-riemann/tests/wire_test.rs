//! Wire-level tests against in-process fake Riemann servers.

use prost::Message as _;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, UdpSocket};
use tokio::task::JoinHandle;

use gangway_common::error::GangwayError;
use gangway_common::types::MonitoringEvent;
use gangway_riemann::{RiemannClient, SinkLocation, proto};

fn sample_event() -> MonitoringEvent {
    MonitoringEvent {
        description: "abc123".to_owned(),
        host: "h1".to_owned(),
        service: "start".to_owned(),
        metric: 1,
        state: "ok".to_owned(),
        tags: vec!["docker".to_owned()],
    }
}

/// Accepts one connection, reads one frame, replies with `reply`, and
/// returns the decoded submission.
async fn fake_tcp_server(reply: proto::Msg) -> (SinkLocation, JoinHandle<proto::Msg>) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("should bind");
    let addr = listener.local_addr().expect("should have an address");

    let handle = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.expect("should accept");

        let mut len_buf = [0_u8; 4];
        let _ = stream
            .read_exact(&mut len_buf)
            .await
            .expect("should read frame length");
        let mut body = vec![0_u8; u32::from_be_bytes(len_buf) as usize];
        let _ = stream
            .read_exact(&mut body)
            .await
            .expect("should read frame body");
        let received = proto::Msg::decode(body.as_slice()).expect("should decode submission");

        let reply_body = reply.encode_to_vec();
        let reply_len = u32::try_from(reply_body.len()).expect("reply should fit a frame");
        stream
            .write_all(&reply_len.to_be_bytes())
            .await
            .expect("should write reply length");
        stream
            .write_all(&reply_body)
            .await
            .expect("should write reply body");

        received
    });

    let location = SinkLocation::parse(&format!("tcp://{addr}")).expect("should parse");
    (location, handle)
}

#[tokio::test]
async fn tcp_send_frames_the_event_and_reads_the_ack() {
    let reply = proto::Msg {
        ok: Some(true),
        error: None,
        events: Vec::new(),
    };
    let (location, server) = fake_tcp_server(reply).await;

    let client = RiemannClient::dial(&location).await.expect("should dial");
    client.send(&sample_event()).await.expect("should send");

    let received = server.await.expect("server should finish");
    assert_eq!(received.events.len(), 1);
    let event = &received.events[0];
    assert_eq!(event.description.as_deref(), Some("abc123"));
    assert_eq!(event.host.as_deref(), Some("h1"));
    assert_eq!(event.service.as_deref(), Some("start"));
    assert_eq!(event.state.as_deref(), Some("ok"));
    assert_eq!(event.metric_sint64, Some(1));
    assert_eq!(event.tags, vec!["docker".to_owned()]);
    assert!(event.time.is_some());
}

#[tokio::test]
async fn negative_ack_surfaces_as_rejection() {
    let reply = proto::Msg {
        ok: Some(false),
        error: Some("out of memory".to_owned()),
        events: Vec::new(),
    };
    let (location, server) = fake_tcp_server(reply).await;

    let client = RiemannClient::dial(&location).await.expect("should dial");
    let err = client
        .send(&sample_event())
        .await
        .expect_err("should be rejected");
    assert!(matches!(err, GangwayError::SinkRejected { .. }));
    assert!(err.to_string().contains("out of memory"));

    server.await.expect("server should finish");
}

#[tokio::test]
async fn oversized_ack_frame_is_rejected() {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("should bind");
    let addr = listener.local_addr().expect("should have an address");

    // Reads the submission, then declares an absurdly large reply frame
    // without ever sending a body.
    let server = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.expect("should accept");

        let mut len_buf = [0_u8; 4];
        let _ = stream
            .read_exact(&mut len_buf)
            .await
            .expect("should read frame length");
        let mut body = vec![0_u8; u32::from_be_bytes(len_buf) as usize];
        let _ = stream
            .read_exact(&mut body)
            .await
            .expect("should read frame body");

        stream
            .write_all(&u32::MAX.to_be_bytes())
            .await
            .expect("should write reply length");
    });

    let location = SinkLocation::parse(&format!("tcp://{addr}")).expect("should parse");
    let client = RiemannClient::dial(&location).await.expect("should dial");
    let err = client
        .send(&sample_event())
        .await
        .expect_err("should reject the oversized frame");
    assert!(matches!(err, GangwayError::SinkSend { .. }));
    assert!(err.to_string().contains("exceeds"));

    server.await.expect("server should finish");
}

#[tokio::test]
async fn udp_send_is_fire_and_forget() {
    let socket = UdpSocket::bind("127.0.0.1:0").await.expect("should bind");
    let addr = socket.local_addr().expect("should have an address");
    let location = SinkLocation::parse(&format!("udp://{addr}")).expect("should parse");

    let client = RiemannClient::dial(&location).await.expect("should dial");
    client.send(&sample_event()).await.expect("should send");

    let mut buf = vec![0_u8; 65536];
    let received_len = socket.recv(&mut buf).await.expect("should receive");
    let received = proto::Msg::decode(&buf[..received_len]).expect("should decode");
    assert_eq!(received.events.len(), 1);
    assert_eq!(received.events[0].description.as_deref(), Some("abc123"));
}

#[tokio::test]
async fn dialing_an_unreachable_endpoint_fails() {
    // Bind then immediately drop a listener to get a port that refuses
    // connections.
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("should bind");
    let addr = listener.local_addr().expect("should have an address");
    drop(listener);

    let location = SinkLocation::parse(&format!("tcp://{addr}")).expect("should parse");
    let err = RiemannClient::dial(&location)
        .await
        .expect_err("should fail to dial");
    assert!(matches!(err, GangwayError::SinkDial { .. }));
}
