//! Nameserver discovery.
//!
//! Sends a recursive NS query for a domain to the resolving server and returns
//! the advertised nameserver hostnames. UDP is tried first; a truncated answer
//! is repeated over TCP.

use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;

use hickory_resolver::proto::op::{Message, ResponseCode};
use hickory_resolver::proto::rr::{RData, RecordType};
use log::debug;
use tokio::net::{TcpStream, UdpSocket};

use crate::config::MAX_UDP_PAYLOAD;
use crate::dns::wire::{build_query, read_frame, write_frame};
use crate::error_handling::ResolveError;

/// Looks up the nameservers of domains through one resolving server.
#[derive(Debug, Clone)]
pub struct NameserverResolver {
    server: String,
    port: u16,
    timeout: Duration,
}

impl NameserverResolver {
    /// Creates a resolver that queries `server` (an IP address or hostname) on `port`.
    pub fn new(server: impl Into<String>, port: u16, timeout: Duration) -> Self {
        Self {
            server: server.into(),
            port,
            timeout,
        }
    }

    /// The resolving server queries are sent to.
    pub fn server(&self) -> &str {
        &self.server
    }

    /// Returns the NS hostnames of `domain`, trailing dots stripped, in answer order.
    ///
    /// An answer without NS records yields an empty list.
    ///
    /// # Errors
    ///
    /// - `ResolveError::Query` if the exchange fails or times out
    /// - `ResolveError::Response` if the server answers with a non-success code
    pub async fn resolve(&self, domain: &str) -> Result<Vec<String>, ResolveError> {
        let query = build_query(domain, RecordType::NS, true)
            .map_err(|e| ResolveError::Query(format!("invalid domain {domain}: {e}")))?;

        let response = tokio::time::timeout(self.timeout, self.exchange(&query))
            .await
            .map_err(|_| {
                ResolveError::Query(format!(
                    "no response from {}:{} after {}s",
                    self.server,
                    self.port,
                    self.timeout.as_secs()
                ))
            })??;

        nameservers_from_response(&response)
    }

    async fn exchange(&self, query: &Message) -> Result<Message, ResolveError> {
        let addr = self.server_addr().await?;
        let payload = query
            .to_vec()
            .map_err(|e| ResolveError::Query(format!("failed to encode query: {e}")))?;

        let response = exchange_udp(addr, &payload, query.id()).await?;
        if !response.truncated() {
            return Ok(response);
        }

        debug!("Truncated NS response from {addr}, retrying over TCP");
        exchange_tcp(addr, &payload, query.id()).await
    }

    async fn server_addr(&self) -> Result<SocketAddr, ResolveError> {
        tokio::net::lookup_host((self.server.as_str(), self.port))
            .await
            .map_err(|e| ResolveError::Query(format!("invalid resolving server {}: {e}", self.server)))?
            .next()
            .ok_or_else(|| {
                ResolveError::Query(format!("resolving server {} has no address", self.server))
            })
    }
}

/// Extracts NS hostnames from a response.
///
/// # Errors
///
/// Returns `ResolveError::Response` if the response code is not `NoError`.
pub fn nameservers_from_response(response: &Message) -> Result<Vec<String>, ResolveError> {
    if response.response_code() != ResponseCode::NoError {
        return Err(ResolveError::Response(response.response_code()));
    }

    Ok(response
        .answers()
        .iter()
        .filter_map(|record| match record.data() {
            Some(RData::NS(ns)) => Some(strip_root(&ns.0.to_ascii()).to_string()),
            _ => None,
        })
        .collect())
}

fn strip_root(name: &str) -> &str {
    name.strip_suffix('.').unwrap_or(name)
}

async fn exchange_udp(addr: SocketAddr, payload: &[u8], id: u16) -> Result<Message, ResolveError> {
    let bind: SocketAddr = if addr.is_ipv4() {
        (Ipv4Addr::UNSPECIFIED, 0).into()
    } else {
        (Ipv6Addr::UNSPECIFIED, 0).into()
    };
    let socket = UdpSocket::bind(bind).await.map_err(query_error)?;
    socket.connect(addr).await.map_err(query_error)?;
    socket.send(payload).await.map_err(query_error)?;

    let mut buf = vec![0u8; MAX_UDP_PAYLOAD];
    loop {
        let len = socket.recv(&mut buf).await.map_err(query_error)?;
        let response = Message::from_vec(&buf[..len])
            .map_err(|e| ResolveError::Query(format!("malformed response from {addr}: {e}")))?;
        if response.id() == id {
            return Ok(response);
        }
        debug!("Ignoring response with mismatched id {} from {addr}", response.id());
    }
}

async fn exchange_tcp(addr: SocketAddr, payload: &[u8], id: u16) -> Result<Message, ResolveError> {
    let mut stream = TcpStream::connect(addr).await.map_err(query_error)?;
    write_frame(&mut stream, payload).await.map_err(query_error)?;

    let frame = read_frame(&mut stream)
        .await
        .map_err(query_error)?
        .ok_or_else(|| ResolveError::Query(format!("{addr} closed the connection without answering")))?;
    let response = Message::from_vec(&frame)
        .map_err(|e| ResolveError::Query(format!("malformed response from {addr}: {e}")))?;
    if response.id() != id {
        return Err(ResolveError::Query(format!(
            "response id {} does not match query id {id}",
            response.id()
        )));
    }
    Ok(response)
}

fn query_error(e: std::io::Error) -> ResolveError {
    ResolveError::Query(e.to_string())
}
