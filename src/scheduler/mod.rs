pub(crate) mod event_loop;
pub(crate) mod timer;
