//! Save-game and replay records, and the codecs that store them.
//!
//! Records are plain serde data; engines produce and consume them through
//! `serialize` / `deserialize`, the replay cursor through
//! `ReplayCursor::from_record` / `to_record`.

pub mod codec;
pub mod record;

pub use codec::{decode_snapshot, encode_snapshot, from_json, load_json, save_json, to_json};
pub use record::{GameRecord, ReplayRecord};
