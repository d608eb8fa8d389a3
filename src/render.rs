pub(crate) mod composite;
pub(crate) mod pipeline;
pub(crate) mod preview;
pub(crate) mod sample;
