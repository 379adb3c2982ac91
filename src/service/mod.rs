//! Service layer wiring the filter engine to the host's event stream.

mod event_service;

pub use event_service::EventService;
