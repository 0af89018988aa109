//! Zone transfer (AXFR) execution.
//!
//! A transfer is a TCP exchange: one AXFR query, then a sequence of response
//! messages ("envelopes") that together carry the zone, starting and ending
//! with its SOA record. The envelopes are exposed as a lazy stream that is
//! drained one message at a time; the stream ends after the closing SOA or
//! after yielding its first error.

use std::pin::pin;
use std::time::Duration;

use futures::stream::{self, Stream, StreamExt};
use hickory_resolver::proto::op::{Message, ResponseCode};
use hickory_resolver::proto::rr::{Record, RecordType};
use log::debug;
use tokio::io::AsyncRead;
use tokio::net::TcpStream;

use crate::config::EnvelopeMerge;
use crate::dns::records::normalize;
use crate::dns::wire::{build_query, read_frame, write_frame};
use crate::error_handling::TransferError;
use crate::models::{NormalizedRecord, ZoneTransferResult};

/// One response message of a zone transfer.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    /// Answer records carried by this message
    pub records: Vec<Record>,
}

/// A finished transfer attempt: the result is always present, `error` tells
/// whether it is complete.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferAttempt {
    /// Result for the `(domain, nameserver)` pair; empty records on failure
    pub result: ZoneTransferResult,
    /// Why the attempt failed, if it did
    pub error: Option<TransferError>,
}

impl TransferAttempt {
    /// Returns true if the transfer completed without error.
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Performs zone transfers against individual nameservers.
#[derive(Debug, Clone)]
pub struct ZoneTransferExecutor {
    port: u16,
    timeout: Duration,
    merge: EnvelopeMerge,
}

impl ZoneTransferExecutor {
    /// Creates an executor connecting to `port` on each nameserver.
    ///
    /// `timeout` bounds the connect and every envelope read.
    pub fn new(port: u16, timeout: Duration, merge: EnvelopeMerge) -> Self {
        Self {
            port,
            timeout,
            merge,
        }
    }

    /// Requests the zone of `domain` from `nameserver` (hostname or IP address).
    ///
    /// Never fails outright: the returned attempt always carries a result with
    /// `domain` and `nameserver` set. On error the records are left empty.
    pub async fn transfer(&self, domain: &str, nameserver: &str) -> TransferAttempt {
        let mut result = ZoneTransferResult::new(domain, nameserver);

        let outcome = match self.open(domain, nameserver).await {
            Ok(envelopes) => collect_records(envelopes, self.merge).await,
            Err(e) => Err(e),
        };

        match outcome {
            Ok(records) => {
                result.records = records;
                TransferAttempt {
                    result,
                    error: None,
                }
            }
            Err(e) => TransferAttempt {
                result,
                error: Some(e),
            },
        }
    }

    /// Connects to the nameserver, sends the AXFR query and returns the
    /// envelope stream.
    ///
    /// # Errors
    ///
    /// Returns `TransferError::Setup` if the query cannot be built, the
    /// connection cannot be established in time, or the query cannot be sent.
    pub async fn open(
        &self,
        domain: &str,
        nameserver: &str,
    ) -> Result<impl Stream<Item = Result<Envelope, TransferError>>, TransferError> {
        let query = build_query(domain, RecordType::AXFR, false)
            .map_err(|e| TransferError::Setup(format!("invalid domain {domain}: {e}")))?;
        let payload = query
            .to_vec()
            .map_err(|e| TransferError::Setup(format!("failed to encode query: {e}")))?;

        let mut stream = tokio::time::timeout(
            self.timeout,
            TcpStream::connect((nameserver, self.port)),
        )
        .await
        .map_err(|_| {
            TransferError::Setup(format!(
                "timed out connecting to {nameserver}:{}",
                self.port
            ))
        })?
        .map_err(|e| TransferError::Setup(format!("{nameserver}:{}: {e}", self.port)))?;

        write_frame(&mut stream, &payload)
            .await
            .map_err(|e| TransferError::Setup(format!("failed to send AXFR query: {e}")))?;
        debug!("Sent AXFR query for {domain} to {nameserver}:{}", self.port);

        Ok(envelopes(stream, query.id(), self.timeout))
    }
}

/// Drains an envelope stream into normalized records.
///
/// Stops at the first error; records gathered before it are discarded.
pub async fn collect_records<S>(
    envelopes: S,
    merge: EnvelopeMerge,
) -> Result<Vec<NormalizedRecord>, TransferError>
where
    S: Stream<Item = Result<Envelope, TransferError>>,
{
    let mut envelopes = pin!(envelopes);
    let mut records = Vec::new();

    while let Some(envelope) = envelopes.next().await {
        let batch: Vec<NormalizedRecord> = envelope?.records.iter().map(normalize).collect();
        match merge {
            EnvelopeMerge::Accumulate => records.extend(batch),
            EnvelopeMerge::KeepLast => records = batch,
        }
    }

    Ok(records)
}

/// Turns a connected transport into the envelope stream of one AXFR query.
pub fn envelopes<R>(
    reader: R,
    query_id: u16,
    timeout: Duration,
) -> impl Stream<Item = Result<Envelope, TransferError>>
where
    R: AsyncRead + Unpin,
{
    let state = AxfrState {
        reader,
        query_id,
        timeout,
        soa_seen: 0,
        done: false,
    };

    stream::try_unfold(state, |mut state| async move {
        if state.done {
            return Ok(None);
        }

        let frame = match tokio::time::timeout(state.timeout, read_frame(&mut state.reader)).await
        {
            Err(_) => return Err(TransferError::Timeout(state.timeout)),
            Ok(Err(e)) => return Err(TransferError::Stream(format!("read failed: {e}"))),
            Ok(Ok(None)) => {
                return Err(TransferError::Stream(
                    "connection closed before the closing SOA record".to_string(),
                ))
            }
            Ok(Ok(Some(frame))) => frame,
        };

        let message = Message::from_vec(&frame)
            .map_err(|e| TransferError::Stream(format!("malformed response: {e}")))?;
        let envelope = state.accept(message)?;
        Ok::<_, TransferError>(Some((envelope, state)))
    })
}

struct AxfrState<R> {
    reader: R,
    query_id: u16,
    timeout: Duration,
    soa_seen: usize,
    done: bool,
}

impl<R> AxfrState<R> {
    fn accept(&mut self, message: Message) -> Result<Envelope, TransferError> {
        if message.id() != self.query_id {
            return Err(TransferError::Stream(format!(
                "response id {} does not match query id {}",
                message.id(),
                self.query_id
            )));
        }
        if message.response_code() != ResponseCode::NoError {
            return Err(TransferError::Refused(message.response_code()));
        }

        let records = message.answers().to_vec();
        if self.soa_seen == 0 {
            match records.first() {
                Some(first) if first.record_type() == RecordType::SOA => {}
                Some(_) => {
                    return Err(TransferError::Stream(
                        "first record of the transfer is not SOA".to_string(),
                    ))
                }
                None => {
                    return Err(TransferError::Stream(
                        "empty response to AXFR query".to_string(),
                    ))
                }
            }
        }

        self.soa_seen += records
            .iter()
            .filter(|record| record.record_type() == RecordType::SOA)
            .count();
        self.done = self.soa_seen >= 2;

        Ok(Envelope { records })
    }
}
