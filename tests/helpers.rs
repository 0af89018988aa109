// Shared test helpers: in-process DNS servers and record builders.
//
// The servers bind to 127.0.0.1 on an ephemeral port and answer with
// `hickory-proto` messages produced by a closure, so each test controls the
// exact wire responses.

use std::net::{Ipv4Addr, SocketAddr};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axfr_audit::dns::{read_frame, write_frame};
use hickory_resolver::proto::op::{Message, MessageType, OpCode, ResponseCode};
use hickory_resolver::proto::rr::rdata::{NS, SOA};
use hickory_resolver::proto::rr::{Name, RData, Record};
use tokio::net::{TcpListener, UdpSocket};

#[allow(dead_code)] // Used by other test files
pub fn name(s: &str) -> Name {
    Name::from_ascii(s).expect("valid test name")
}

#[allow(dead_code)] // Used by other test files
pub fn soa_record(zone: &str) -> Record {
    Record::from_rdata(
        name(zone),
        3600,
        RData::SOA(SOA::new(
            name(&format!("ns1.{zone}")),
            name(&format!("hostmaster.{zone}")),
            2024010101,
            7200,
            900,
            1209600,
            300,
        )),
    )
}

#[allow(dead_code)] // Used by other test files
pub fn a_record(owner: &str, last_octet: u8) -> Record {
    Record::from_rdata(
        name(owner),
        300,
        RData::A(Ipv4Addr::new(192, 0, 2, last_octet).into()),
    )
}

#[allow(dead_code)] // Used by other test files
pub fn ns_record(zone: &str, target: &str) -> Record {
    Record::from_rdata(name(zone), 86400, RData::NS(NS(name(target))))
}

/// Builds a response to `query` carrying `answers`.
#[allow(dead_code)] // Used by other test files
pub fn reply(query: &Message, code: ResponseCode, answers: Vec<Record>) -> Message {
    let mut message = Message::new();
    message
        .set_id(query.id())
        .set_message_type(MessageType::Response)
        .set_op_code(OpCode::Query)
        .set_response_code(code);
    message.add_queries(query.queries().to_vec());
    message.add_answers(answers);
    message
}

/// Counts queries received by a fake server.
#[derive(Clone, Default)]
#[allow(dead_code)] // Used by other test files
pub struct QueryCounter(Arc<AtomicUsize>);

#[allow(dead_code)] // Used by other test files
impl QueryCounter {
    pub fn get(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }

    fn bump(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

/// Spawns a UDP server answering every query with `respond(query)`.
#[allow(dead_code)] // Used by other test files
pub async fn spawn_udp_server<F>(respond: F) -> (SocketAddr, QueryCounter)
where
    F: Fn(&Message) -> Message + Send + Sync + 'static,
{
    let socket = UdpSocket::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind UDP socket");
    let addr = socket.local_addr().expect("UDP socket has an address");
    let counter = QueryCounter::default();
    let served = counter.clone();

    tokio::spawn(async move {
        let mut buf = vec![0u8; 4096];
        loop {
            let Ok((len, peer)) = socket.recv_from(&mut buf).await else {
                break;
            };
            let Ok(query) = Message::from_vec(&buf[..len]) else {
                continue;
            };
            served.bump();
            let response = respond(&query).to_vec().expect("encodable response");
            let _ = socket.send_to(&response, peer).await;
        }
    });

    (addr, counter)
}

/// Spawns a TCP server on `addr` (port 0 for an ephemeral one) that answers
/// each connection's first query with the framed messages from `respond(query)`
/// and then closes the connection.
#[allow(dead_code)] // Used by other test files
pub async fn spawn_tcp_server<F>(addr: SocketAddr, respond: F) -> (SocketAddr, QueryCounter)
where
    F: Fn(&Message) -> Vec<Message> + Send + Sync + 'static,
{
    let listener = TcpListener::bind(addr)
        .await
        .expect("Failed to bind TCP listener");
    let addr = listener.local_addr().expect("TCP listener has an address");
    let respond = Arc::new(respond);
    let counter = QueryCounter::default();
    let served = counter.clone();

    tokio::spawn(async move {
        loop {
            let Ok((mut stream, _)) = listener.accept().await else {
                break;
            };
            let respond = Arc::clone(&respond);
            let served = served.clone();
            tokio::spawn(async move {
                let Ok(Some(frame)) = read_frame(&mut stream).await else {
                    return;
                };
                let Ok(query) = Message::from_vec(&frame) else {
                    return;
                };
                served.bump();
                for message in (*respond)(&query) {
                    let bytes = message.to_vec().expect("encodable response");
                    if write_frame(&mut stream, &bytes).await.is_err() {
                        return;
                    }
                }
            });
        }
    });

    (addr, counter)
}

/// Returns a local port with nothing listening on it.
#[allow(dead_code)] // Used by other test files
pub async fn closed_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind TCP listener");
    listener.local_addr().expect("listener has an address").port()
}
