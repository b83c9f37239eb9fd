mod decode_bad;
pub(crate) mod utils;
