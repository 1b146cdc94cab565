//! Binary encoding of engine requests.
//!
//! Requests are bincode-encoded. A frame is `[u32 length, little endian][payload]`
//! so several requests can share one stream.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ErrorSeverity, PlannerError};

#[derive(Debug, thiserror::Error)]
pub enum WireError {
    #[error("wire serialization failed: {0}")]
    Serialization(String),

    #[error("truncated frame: need {expected} bytes, have {actual}")]
    Truncated { expected: usize, actual: usize },

    #[error("frame payload of {0} bytes exceeds the u32 length prefix")]
    Oversized(usize),
}

impl PlannerError for WireError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Serialization(_) | Self::Oversized(_) => ErrorSeverity::Internal,
            Self::Truncated { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Serialization(_) => "WIRE_SERIALIZATION",
            Self::Truncated { .. } => "WIRE_TRUNCATED",
            Self::Oversized(_) => "WIRE_OVERSIZED",
        }
    }
}

pub type Result<T> = std::result::Result<T, WireError>;

const PREFIX_LEN: usize = 4;

pub fn encode<T: Serialize>(message: &T) -> Result<Vec<u8>> {
    bincode::serialize(message).map_err(|e| WireError::Serialization(e.to_string()))
}

pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    bincode::deserialize(bytes).map_err(|e| WireError::Serialization(e.to_string()))
}

/// Encodes `message` behind a length prefix.
pub fn encode_frame<T: Serialize>(message: &T) -> Result<Vec<u8>> {
    let payload = encode(message)?;
    let len = u32::try_from(payload.len()).map_err(|_| WireError::Oversized(payload.len()))?;

    let mut frame = Vec::with_capacity(PREFIX_LEN + payload.len());
    frame.extend_from_slice(&len.to_le_bytes());
    frame.extend_from_slice(&payload);
    Ok(frame)
}

/// Decodes the first frame in `bytes`.
///
/// Returns the message and the number of bytes consumed.
pub fn decode_frame<T: DeserializeOwned>(bytes: &[u8]) -> Result<(T, usize)> {
    let Some(prefix) = bytes.first_chunk::<PREFIX_LEN>() else {
        return Err(WireError::Truncated {
            expected: PREFIX_LEN,
            actual: bytes.len(),
        });
    };
    let len = u32::from_le_bytes(*prefix) as usize;
    let end = PREFIX_LEN + len;
    let payload = bytes.get(PREFIX_LEN..end).ok_or(WireError::Truncated {
        expected: end,
        actual: bytes.len(),
    })?;

    Ok((decode(payload)?, end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gear::{EquippedItem, Gear, ItemId};
    use crate::proto::{ComputeStatsRequest, ItemSlot, Player, PlayerOptions, Stats};

    fn request() -> ComputeStatsRequest {
        let gear = Gear::new([(ItemSlot::MainHand, EquippedItem::new(ItemId(12345)))]);
        ComputeStatsRequest {
            player: Player {
                custom_stats: Stats::zero().as_array(),
                equipment: gear.as_spec(),
                options: PlayerOptions::default(),
            },
            buffs: Default::default(),
        }
    }

    #[test]
    fn frames_can_be_concatenated() {
        let mut stream = encode_frame(&request()).unwrap();
        let first_len = stream.len();
        stream.extend(encode_frame(&request()).unwrap());

        let (first, consumed): (ComputeStatsRequest, _) = decode_frame(&stream).unwrap();
        assert_eq!(consumed, first_len);
        assert_eq!(first, request());

        let (second, _): (ComputeStatsRequest, _) = decode_frame(&stream[consumed..]).unwrap();
        assert_eq!(second.player.equipment.items[14].id, 12345);
    }

    #[test]
    fn short_input_is_truncated() {
        let frame = encode_frame(&request()).unwrap();

        let error = decode_frame::<ComputeStatsRequest>(&frame[..frame.len() - 1]).unwrap_err();
        assert!(matches!(error, WireError::Truncated { .. }));
        assert!(matches!(
            decode_frame::<ComputeStatsRequest>(&frame[..2]),
            Err(WireError::Truncated {
                expected: 4,
                actual: 2
            })
        ));
    }
}
