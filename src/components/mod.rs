//! Page sections and the behaviors behind them.

pub mod demo;
pub mod modal;
pub mod pipeline;
pub mod scroll;
