pub(crate) use self::{app::App, runtime::Runtime};

mod app;
mod event;
mod runtime;
