//! Transport layer: HTTP wire-format details (serialization/deserialization).

mod consumer_info;
mod login;
mod money;
mod recharge_info;
mod send_otp;

pub use consumer_info::decode_consumer_info_json_response;
pub use login::{decode_login_json_response, encode_login_body};
pub use recharge_info::{decode_recharge_info_json_response, encode_recharge_info_body};
pub use send_otp::{decode_send_otp_json_response, encode_send_otp_body};
