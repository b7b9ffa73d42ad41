//! Request extractors that validate input before it reaches the use cases.

mod user_id_path;
mod validated_json;

pub use user_id_path::{parse_user_id, UserIdPath, MSG_ID_NOT_NUMBER};
pub use validated_json::ValidatedJson;
