//! Observability setup for Folio: structured logging with an optional
//! OpenTelemetry span exporter.

pub mod tracing_setup;
