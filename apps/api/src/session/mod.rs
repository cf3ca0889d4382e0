// Session orchestration: the state machine, what clients should render for
// each state, and the HTTP surface over both.

pub mod controller;
pub mod dashboard;
pub mod handlers;
pub mod view;
