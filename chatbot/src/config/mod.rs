//! Assistant configuration, loaded from env.

mod base;


pub use base::ChatbotConfig;
