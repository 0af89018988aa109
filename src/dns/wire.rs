//! DNS message construction and TCP framing.
//!
//! Queries are built with `hickory-proto` messages. Over TCP each message is
//! preceded by its length as a big-endian `u16` (RFC 1035 §4.2.2).

use std::io;

use hickory_resolver::proto::error::ProtoError;
use hickory_resolver::proto::op::{Message, MessageType, OpCode, Query};
use hickory_resolver::proto::rr::{Name, RecordType};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

/// Parses `domain` as a fully qualified name (a trailing dot is added if missing).
pub fn fqdn(domain: &str) -> Result<Name, ProtoError> {
    let domain = domain.trim();
    if domain.ends_with('.') {
        Name::from_ascii(domain)
    } else {
        Name::from_ascii(format!("{domain}."))
    }
}

/// Builds a single-question query with a random ID.
pub fn build_query(
    domain: &str,
    record_type: RecordType,
    recursion_desired: bool,
) -> Result<Message, ProtoError> {
    let name = fqdn(domain)?;

    let mut message = Message::new();
    message
        .set_id(rand::random::<u16>())
        .set_message_type(MessageType::Query)
        .set_op_code(OpCode::Query)
        .set_recursion_desired(recursion_desired);
    message.add_query(Query::query(name, record_type));

    Ok(message)
}

/// Writes one length-prefixed message.
pub async fn write_frame<W>(writer: &mut W, payload: &[u8]) -> io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let len = u16::try_from(payload.len())
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "DNS message exceeds 65535 bytes"))?;
    let mut frame = Vec::with_capacity(payload.len() + 2);
    frame.extend_from_slice(&len.to_be_bytes());
    frame.extend_from_slice(payload);
    writer.write_all(&frame).await?;
    writer.flush().await
}

/// Reads one length-prefixed message.
///
/// Returns `Ok(None)` if the peer closed the connection cleanly before a new
/// frame started.
pub async fn read_frame<R>(reader: &mut R) -> io::Result<Option<Vec<u8>>>
where
    R: AsyncRead + Unpin,
{
    let mut len = [0u8; 2];
    match reader.read_exact(&mut len).await {
        Ok(_) => {}
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => return Ok(None),
        Err(e) => return Err(e),
    }

    let mut payload = vec![0u8; usize::from(u16::from_be_bytes(len))];
    reader.read_exact(&mut payload).await?;
    Ok(Some(payload))
}
