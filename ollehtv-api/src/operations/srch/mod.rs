//! Search endpoints (`srch/*`)

pub mod epg;

pub use epg::{SearchEpgOperation, SearchEpgRequest};
