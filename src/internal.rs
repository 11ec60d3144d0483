mod handler_set;

pub(crate) use handler_set::HandlerSet;
