/// Byte separating records in the persisted stream. Record values must not
/// contain it; that invariant is enforced by the producer, not checked here.
pub const DELIMITER: u8 = b'\n';

/// One record as yielded by a reader.
///
/// `offset` is synthetic: the segment's starting offset plus the number of
/// records decoded before this one. It has no relation to byte position in
/// the file. The key supplied on the write side is never persisted, so it is
/// not recoverable here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub offset: u64,
    pub value: Vec<u8>,
}
