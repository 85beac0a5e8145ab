pub mod builder;
pub mod mock;
pub mod openai;
pub mod settings;
