mod app;
mod message;
mod sections;
mod state;
mod widgets;

pub use app::{PortfolioApp, run};
pub use message::Message;
pub use state::AppState;
