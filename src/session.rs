pub(crate) mod coalesce;
pub(crate) mod pixelify_session;
