//! Single test binary entry point.
//!
//! This consolidates all tests into a single binary following matklad's best
//! practices, reducing linking overhead from 3x to 1x.
//!
//! Structure:
//! - unit: Single-component tests (mapper, recorder, surface, exporter)
//! - integration: Prediction client tests against a mock classifier

mod integration;
mod unit;
