pub(crate) mod document;
pub(crate) mod hex;
pub(crate) mod sink;
